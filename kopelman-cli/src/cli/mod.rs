//! Command-line interface for labelling lattice clusters.
//!
//! `label` reads an integer lattice from a text file; `random` generates a
//! seeded site-percolation lattice. Both print the canonical label grid.

mod commands;

pub use commands::{
    BoundaryArgs, Cli, CliError, Command, ExecutionSummary, LabelCommand, OutputFormat,
    RandomCommand, render_summary, run_cli,
};

//! Command implementations and argument parsing for the kopelman CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use kopelman_core::{ClusterLabels, Labeller, Lattice, LatticeError, Periodicity};
use kopelman_providers_text::{TextLatticeError, read_lattice};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use serde::Serialize;
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_PROBABILITY: f64 = 0.5;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "kopelman", about = "Label clusters in lattices with Hoshen-Kopelman.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Output format for the label grid.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Label clusters in a lattice read from a text file.
    Label(LabelCommand),
    /// Label clusters in a randomly occupied lattice.
    Random(RandomCommand),
}

/// Boundary wrapping shared by every command.
#[derive(Debug, Args, Clone, Copy, Default)]
pub struct BoundaryArgs {
    /// Join the first and last rows.
    #[arg(long)]
    pub periodic_rows: bool,

    /// Join the first and last columns.
    #[arg(long)]
    pub periodic_cols: bool,
}

impl BoundaryArgs {
    /// Boundary topology selected by the flags.
    #[must_use]
    pub const fn periodicity(self) -> Periodicity {
        Periodicity::new(self.periodic_rows, self.periodic_cols)
    }
}

/// Options accepted by the `label` command.
#[derive(Debug, Args, Clone)]
pub struct LabelCommand {
    /// Text file with one row of whitespace-separated integers per line.
    pub path: PathBuf,

    /// Cell value treated as occupied.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub target: i64,

    /// Label every cell, joining neighbours with equal values.
    #[arg(long, conflicts_with = "target")]
    pub colour: bool,

    #[command(flatten)]
    pub boundary: BoundaryArgs,
}

/// Options accepted by the `random` command.
#[derive(Debug, Args, Clone)]
pub struct RandomCommand {
    /// Number of lattice rows.
    #[arg(long)]
    pub rows: usize,

    /// Number of lattice columns.
    #[arg(long)]
    pub cols: usize,

    /// Probability that a site is occupied.
    #[arg(long, default_value_t = DEFAULT_PROBABILITY)]
    pub probability: f64,

    /// Seed for reproducible lattices; drawn from the OS when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub boundary: BoundaryArgs,
}

/// Rendering style for [`ExecutionSummary`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `clusters: K` followed by the label grid.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input file was not a valid text lattice.
    #[error(transparent)]
    Text(#[from] TextLatticeError),
    /// The requested lattice shape was invalid.
    #[error(transparent)]
    Lattice(#[from] LatticeError),
    /// The occupation probability fell outside `[0, 1]`.
    #[error("occupation probability must lie in [0, 1], got {probability}")]
    InvalidProbability {
        /// Value supplied by the user.
        probability: f64,
    },
}

impl CliError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CLI_IO",
            Self::Text(err) => err.code(),
            Self::Lattice(err) => err.code().as_str(),
            Self::InvalidProbability { .. } => "CLI_INVALID_PROBABILITY",
        }
    }
}

/// Outcome of a labelling command, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionSummary {
    /// Number of lattice rows.
    pub rows: usize,
    /// Number of lattice columns.
    pub cols: usize,
    /// Number of clusters found.
    pub clusters: usize,
    /// Canonical labels, row by row.
    pub labels: Vec<Vec<usize>>,
    /// Generated occupancy, present for `random` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupancy: Option<Vec<Vec<u8>>>,
}

impl ExecutionSummary {
    fn new(labels: &ClusterLabels, occupancy: Option<&Lattice<u8>>) -> Self {
        Self {
            rows: labels.rows(),
            cols: labels.cols(),
            clusters: labels.cluster_count(),
            labels: labels.iter_rows().map(<[usize]>::to_vec).collect(),
            occupancy: occupancy.map(|lattice| lattice.iter_rows().map(<[u8]>::to_vec).collect()),
        }
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or the arguments are
/// invalid.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kopelman_cli::cli::{BoundaryArgs, Cli, Command, LabelCommand, OutputFormat, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "1 0 1\n1 0 1\n")?;
/// let cli = Cli {
///     command: Command::Label(LabelCommand {
///         path: file.path().to_path_buf(),
///         target: 1,
///         colour: false,
///         boundary: BoundaryArgs::default(),
///     }),
///     format: OutputFormat::Text,
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.clusters, 2);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Label(command) => {
            span.record("command", "label");
            run_label(command)
        }
        Command::Random(command) => {
            span.record("command", "random");
            run_random(command)
        }
    }
}

#[instrument(
    name = "cli.label",
    err,
    skip(command),
    fields(path = %command.path.display(), target = command.target, colour = command.colour),
)]
pub(super) fn run_label(command: LabelCommand) -> Result<ExecutionSummary, CliError> {
    let reader = open_lattice_reader(&command.path)?;
    let lattice = read_lattice(reader)?;
    let labeller = Labeller::new(command.boundary.periodicity());
    let labels = if command.colour {
        labeller.colour(&lattice)
    } else {
        labeller.label(&lattice, &command.target)
    };
    info!(clusters = labels.cluster_count(), "label command completed");
    Ok(ExecutionSummary::new(&labels, None))
}

#[instrument(
    name = "cli.random",
    err,
    skip(command),
    fields(
        rows = command.rows,
        cols = command.cols,
        probability = command.probability,
        seed = field::Empty,
    ),
)]
pub(super) fn run_random(command: RandomCommand) -> Result<ExecutionSummary, CliError> {
    let probability = command.probability;
    if !(0.0..=1.0).contains(&probability) {
        return Err(CliError::InvalidProbability { probability });
    }
    let mut rng = match command.seed {
        Some(seed) => {
            Span::current().record("seed", seed);
            SmallRng::seed_from_u64(seed)
        }
        None => SmallRng::from_entropy(),
    };

    let occupancy = Lattice::from_fn(command.rows, command.cols, |_, _| {
        u8::from(rng.gen_bool(probability))
    })?;
    let labels = Labeller::new(command.boundary.periodicity()).label(&occupancy, &1);
    info!(clusters = labels.cluster_count(), "random command completed");
    Ok(ExecutionSummary::new(&labels, Some(&occupancy)))
}

#[instrument(name = "cli.open_lattice_reader", err)]
pub(super) fn open_lattice_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Renders `summary` to `writer` in the requested format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kopelman_cli::cli::{ExecutionSummary, OutputFormat, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     rows: 1,
///     cols: 3,
///     clusters: 2,
///     labels: vec![vec![1, 0, 2]],
///     occupancy: None,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, OutputFormat::Text, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "clusters: 2\n1 0 2\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(
    summary: &ExecutionSummary,
    format: OutputFormat,
    mut writer: impl Write,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut writer, summary)?;
            writeln!(writer)
        }
        OutputFormat::Text => {
            if let Some(occupancy) = &summary.occupancy {
                writeln!(writer, "occupancy:")?;
                write_grid(&mut writer, occupancy)?;
            }
            writeln!(writer, "clusters: {}", summary.clusters)?;
            write_grid(&mut writer, &summary.labels)
        }
    }
}

fn write_grid<T: ToString>(writer: &mut impl Write, grid: &[Vec<T>]) -> io::Result<()> {
    for row in grid {
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        writeln!(writer, "{}", cells.join(" "))?;
    }
    Ok(())
}

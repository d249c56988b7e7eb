//! Text provider reading whitespace-separated integer lattices.
//!
//! Each non-blank line is one lattice row. Lines whose first non-blank
//! character is `#` are comments.
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use kopelman_core::{Lattice, LatticeError};
use thiserror::Error;

/// Errors raised while reading a text lattice.
#[derive(Debug, Error)]
pub enum TextLatticeError {
    /// Reading from the underlying source failed.
    #[error("failed to read lattice: {0}")]
    Io(#[from] io::Error),
    /// A token could not be parsed as an integer cell.
    #[error("line {line}, column {column}: `{token}` is not an integer cell")]
    InvalidCell {
        /// One-based line number in the input.
        line: usize,
        /// One-based cell position within the line.
        column: usize,
        /// The offending token.
        token: String,
    },
    /// A row did not match the width of the first row.
    #[error("line {line} has {found} cells but earlier rows have {expected}")]
    RaggedRow {
        /// One-based line number in the input.
        line: usize,
        /// Width established by the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// The collected cells could not form a lattice.
    #[error(transparent)]
    Lattice(#[from] LatticeError),
}

impl TextLatticeError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "TEXT_LATTICE_IO",
            Self::InvalidCell { .. } => "TEXT_LATTICE_INVALID_CELL",
            Self::RaggedRow { .. } => "TEXT_LATTICE_RAGGED_ROW",
            Self::Lattice(err) => err.code().as_str(),
        }
    }
}

/// Reads a lattice from any buffered reader.
///
/// An input with no rows yields an empty `0 x 0` lattice.
///
/// # Errors
/// Returns [`TextLatticeError::InvalidCell`] for non-integer tokens,
/// [`TextLatticeError::RaggedRow`] for rows of differing width and
/// [`TextLatticeError::Io`] if the reader fails.
///
/// # Examples
/// ```
/// use kopelman_providers_text::read_lattice;
///
/// let text = "# demo\n1 0 1\n\n0 1 -3\n";
/// let lattice = read_lattice(text.as_bytes())?;
/// assert_eq!((lattice.rows(), lattice.cols()), (2, 3));
/// assert_eq!(lattice.get(1, 2), Some(&-3));
/// # Ok::<(), kopelman_providers_text::TextLatticeError>(())
/// ```
pub fn read_lattice<R: BufRead>(reader: R) -> Result<Lattice<i64>, TextLatticeError> {
    let mut cells = Vec::new();
    let mut width = None;
    let mut rows = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let before = cells.len();
        for (position, token) in trimmed.split_whitespace().enumerate() {
            let cell = token
                .parse::<i64>()
                .map_err(|_| TextLatticeError::InvalidCell {
                    line: number,
                    column: position + 1,
                    token: token.to_owned(),
                })?;
            cells.push(cell);
        }

        let found = cells.len() - before;
        match width {
            None => width = Some(found),
            Some(expected) if expected != found => {
                return Err(TextLatticeError::RaggedRow {
                    line: number,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }
        rows += 1;
    }

    Ok(Lattice::new(rows, width.unwrap_or(0), cells)?)
}

/// Opens `path` and reads a lattice from it.
///
/// # Errors
/// As [`read_lattice`], plus [`TextLatticeError::Io`] if the file cannot be
/// opened.
pub fn open_lattice(path: impl AsRef<Path>) -> Result<Lattice<i64>, TextLatticeError> {
    let file = File::open(path)?;
    read_lattice(BufReader::new(file))
}

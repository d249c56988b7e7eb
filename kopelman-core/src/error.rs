//! Error types for the Kopelman core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while constructing a [`crate::Lattice`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum LatticeError {
    /// The number of cells did not match `rows * cols`.
    #[error("lattice of {rows}x{cols} cannot hold the {cells} cells given")]
    ShapeMismatch {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
        /// Number of cells actually supplied.
        cells: usize,
    },
    /// A nested row did not match the width of the first row.
    #[error("row {row} has {found} cells but the lattice is {expected} cells wide")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width established by the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// `rows * cols` does not fit in the host pointer width.
    #[error("lattice dimensions {rows}x{cols} overflow the addressable cell count")]
    SizeOverflow {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`LatticeError`] variants.
    enum LatticeErrorCode for LatticeError {
        /// The number of cells did not match `rows * cols`.
        ShapeMismatch => ShapeMismatch { .. } => "LATTICE_SHAPE_MISMATCH",
        /// A nested row did not match the width of the first row.
        RaggedRow => RaggedRow { .. } => "LATTICE_RAGGED_ROW",
        /// `rows * cols` does not fit in the host pointer width.
        SizeOverflow => SizeOverflow { .. } => "LATTICE_SIZE_OVERFLOW",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, LatticeError>;

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(LatticeError::ShapeMismatch { rows: 2, cols: 2, cells: 3 }, "LATTICE_SHAPE_MISMATCH")]
    #[case(LatticeError::RaggedRow { row: 1, expected: 3, found: 2 }, "LATTICE_RAGGED_ROW")]
    #[case(LatticeError::SizeOverflow { rows: usize::MAX, cols: 2 }, "LATTICE_SIZE_OVERFLOW")]
    fn lattice_codes_are_stable(#[case] error: LatticeError, #[case] expected: &str) {
        assert_eq!(error.code().as_str(), expected);
        assert_eq!(error.code().to_string(), expected);
    }

    #[test]
    fn ragged_row_message_names_the_row() {
        let error = LatticeError::RaggedRow {
            row: 2,
            expected: 4,
            found: 1,
        };
        assert_eq!(
            error.to_string(),
            "row 2 has 1 cells but the lattice is 4 cells wide"
        );
    }

    #[test]
    fn shape_mismatch_reports_dimensions() {
        let error = LatticeError::ShapeMismatch {
            rows: 2,
            cols: 3,
            cells: 5,
        };
        assert_eq!(
            error.to_string(),
            "lattice of 2x3 cannot hold the 5 cells given"
        );
    }
}

use std::fmt;

/// Errors that can occur when building a [`HeightMap`](crate::HeightMap).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid would have no cells (no rows, an empty first row, or a
    /// non-positive dimension).
    Empty,
    /// A row's length differs from the first row's.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A dimension does not fit in an `i32` coordinate.
    TooLarge { width: usize, height: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "height map: grid has no cells"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "height map: row {row} has {found} cells, expected {expected}"
            ),
            Self::TooLarge { width, height } => {
                write!(f, "height map: {width}x{height} exceeds i32 coordinates")
            }
        }
    }
}

impl std::error::Error for GridError {}

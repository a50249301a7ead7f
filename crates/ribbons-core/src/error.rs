use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Which side of a flow matrix disagreed with the category labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Matrix row count vs. source category count.
    Rows,
    /// Length of the given row vs. target category count.
    Columns { row: usize },
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Rows => write!(f, "flow rows must match number of source categories"),
            Dimension::Columns { row } => write!(
                f,
                "flow row {row} length must match number of target categories"
            ),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Shape mismatch: {dimension} (expected {expected}, found {found})")]
    ShapeMismatch {
        dimension: Dimension,
        expected: usize,
        found: usize,
    },

    #[error("Invalid sankey dataset: {message}")]
    InvalidDataset { message: String },

    #[error("Invalid options: {message}")]
    InvalidOptions { message: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

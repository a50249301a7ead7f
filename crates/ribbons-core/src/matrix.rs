//! Dense source-by-target flow magnitudes.

use serde::{Deserialize, Serialize};

/// A table of flow magnitudes: rows are source categories, columns are target categories.
///
/// Rows are stored as given, so a ragged matrix can be represented; the builder reports the
/// first row whose length does not match the target labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlowMatrix {
    rows: Vec<Vec<f64>>,
}

impl FlowMatrix {
    /// Builds a matrix from any nested iterable of values convertible to `f64`.
    pub fn from_rows<R, T>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.rows.get(row)?.get(column).copied()
    }

    /// Number of cells that would produce a link.
    pub fn nonzero_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|v| **v != 0.0).count())
            .sum()
    }
}

impl From<Vec<Vec<f64>>> for FlowMatrix {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_casts_integers() {
        let m = FlowMatrix::from_rows([[1u32, 0], [0, 2]]);
        assert_eq!(m.rows(), &[vec![1.0, 0.0], vec![0.0, 2.0]]);
        assert_eq!(m.nonzero_count(), 2);
        assert_eq!(m.get(1, 1), Some(2.0));
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    fn deserializes_from_nested_arrays() {
        let m: FlowMatrix = serde_json::from_str("[[0.5, 1], [3, 0]]").unwrap();
        assert_eq!(m.row_count(), 2);
        assert_eq!(m.get(0, 0), Some(0.5));
    }
}

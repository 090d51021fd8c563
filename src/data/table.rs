//! Parsed numeric table.

use ndarray::{Array1, Array2, ArrayView1, Axis};
use std::path::PathBuf;

/// A numeric text file loaded as a `rows x columns` matrix.
#[derive(Debug, Clone)]
pub struct NumericTable {
    /// Display name (the file's base name).
    pub name: String,
    /// Source path.
    pub path: PathBuf,
    /// Values in file order: one matrix row per data line.
    pub values: Array2<f64>,
}

impl NumericTable {
    /// Create a table from its parts.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, values: Array2<f64>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            values,
        }
    }

    /// Number of data lines.
    pub fn rows(&self) -> usize {
        self.values.nrows()
    }

    /// Number of fields per data line.
    pub fn columns(&self) -> usize {
        self.values.ncols()
    }

    /// Total number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the table holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Rank after squeezing: a single row or a single column is 1-D.
    pub fn ndim(&self) -> usize {
        if self.rows() <= 1 || self.columns() <= 1 {
            1
        } else {
            2
        }
    }

    /// The table as a flat series, in file order.
    ///
    /// For a single column this is the column; for a single row it is the row.
    /// Larger tables are flattened row by row.
    pub fn flat(&self) -> Array1<f64> {
        self.values.iter().copied().collect()
    }

    /// One file column.
    pub fn column(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.columns()).then(|| self.values.index_axis(Axis(1), index))
    }

    /// Minimum and maximum over finite values.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        finite_min_max(self.values.iter().copied())
    }
}

/// Minimum and maximum of the finite values in `values`.
pub fn finite_min_max(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
            (min.min(v), max.max(v))
        });
    (min <= max).then_some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn single_column_is_one_dimensional() {
        let t = NumericTable::new("a", "a", array![[1.0], [2.0], [3.0]]);
        assert_eq!(t.ndim(), 1);
        assert_eq!(t.flat().to_vec(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn single_row_is_one_dimensional() {
        let t = NumericTable::new("a", "a", array![[4.0, 5.0, 6.0]]);
        assert_eq!(t.ndim(), 1);
        assert_eq!(t.flat().to_vec(), vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn matrix_is_two_dimensional() {
        let t = NumericTable::new("a", "a", array![[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(t.ndim(), 2);
        assert_eq!(t.column(1).unwrap().to_vec(), vec![2.0, 4.0]);
        assert!(t.column(2).is_none());
    }

    #[test]
    fn min_max_ignores_non_finite() {
        let t = NumericTable::new("a", "a", array![[f64::NAN], [2.0], [f64::INFINITY], [-1.0]]);
        assert_eq!(t.min_max(), Some((-1.0, 2.0)));
        assert_eq!(finite_min_max([f64::NAN]), None);
    }
}

//! Line plot series.

use crate::data::{finite_min_max, NumericTable};

/// Series drawn by a line plot.
#[derive(Debug, Clone, PartialEq)]
pub enum LineData {
    /// A single series plotted against its 0-based index.
    Indexed(Vec<f64>),
    /// First column as x, second column as y.
    Paired {
        /// X values.
        x: Vec<f64>,
        /// Y values.
        y: Vec<f64>,
    },
}

impl LineData {
    /// Dispatch on the table's rank.
    pub fn from_table(table: &NumericTable) -> Self {
        if table.ndim() == 1 {
            return Self::Indexed(table.flat().to_vec());
        }

        let column = |i| {
            table
                .column(i)
                .map(|c| c.to_vec())
                .unwrap_or_default()
        };
        Self::Paired {
            x: column(0),
            y: column(1),
        }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        match self {
            Self::Indexed(values) => values.len(),
            Self::Paired { x, y } => x.len().min(y.len()),
        }
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All points with both coordinates finite.
    pub fn points(&self) -> Vec<(f64, f64)> {
        let all: Vec<(f64, f64)> = match self {
            Self::Indexed(values) => values
                .iter()
                .enumerate()
                .map(|(i, &v)| (i as f64, v))
                .collect(),
            Self::Paired { x, y } => x.iter().copied().zip(y.iter().copied()).collect(),
        };

        all.into_iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .collect()
    }

    /// Axis bounds `([x_min, x_max], [y_min, y_max])` with `y_padding` applied.
    ///
    /// Degenerate ranges are widened by one unit so the axes stay valid.
    pub fn bounds(&self, y_padding: f64) -> Option<([f64; 2], [f64; 2])> {
        let points = self.points();
        let (x_min, x_max) = finite_min_max(points.iter().map(|p| p.0))?;
        let (y_min, y_max) = finite_min_max(points.iter().map(|p| p.1))?;

        let x = widen(x_min, x_max);
        let pad = (y_max - y_min).abs() * y_padding;
        let y = widen(y_min - pad, y_max + pad);
        Some((x, y))
    }
}

fn widen(min: f64, max: f64) -> [f64; 2] {
    if (max - min).abs() < f64::EPSILON {
        [min - 0.5, max + 0.5]
    } else {
        [min, max]
    }
}

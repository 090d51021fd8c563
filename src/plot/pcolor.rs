//! Pseudocolor grids.

use crate::data::{finite_min_max, NumericTable};
use ndarray::Array2;

/// Share of the data range kept inside the color limits.
const COLOR_SPAN: f64 = 0.95;

/// Color palette for heatmap visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorPalette {
    /// Jet colormap (blue through cyan and yellow to red).
    #[default]
    Jet,
    /// Viridis colormap (perceptually uniform, colorblind-friendly).
    Viridis,
    /// Plasma colormap (perceptually uniform).
    Plasma,
    /// Rainbow/Spectral colormap (traditional, high contrast).
    Rainbow,
    /// Blue-White-Red diverging colormap.
    BlueRed,
}

impl ColorPalette {
    /// Get the next palette in cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Jet => Self::Viridis,
            Self::Viridis => Self::Plasma,
            Self::Plasma => Self::Rainbow,
            Self::Rainbow => Self::BlueRed,
            Self::BlueRed => Self::Jet,
        }
    }

    /// Get palette name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Jet => "Jet",
            Self::Viridis => "Viridis",
            Self::Plasma => "Plasma",
            Self::Rainbow => "Rainbow",
            Self::BlueRed => "Blue-Red",
        }
    }
}

/// Matrix rendered by a pseudocolor plot.
///
/// Grid row `r` holds file column `r`; grid column `c` holds file line `c`.
/// Row 0 is drawn at the bottom.
#[derive(Debug, Clone)]
pub struct ColorGrid {
    /// Cell values.
    pub cells: Array2<f64>,
    /// Value mapped to the low end of the palette.
    pub vmin: f64,
    /// Value mapped to the high end of the palette.
    pub vmax: f64,
}

impl ColorGrid {
    /// Build the grid for a table.
    ///
    /// A single-column file becomes two identical rows so it renders as a band.
    pub fn from_table(table: &NumericTable) -> Self {
        let cells = if table.columns() == 1 {
            let series = table.values.column(0);
            Array2::from_shape_fn((2, series.len()), |(_, c)| series[c])
        } else {
            table.values.t().to_owned()
        };

        let (vmin, vmax) = color_limits(table.min_max());
        Self { cells, vmin, vmax }
    }

    /// Number of grid rows (y extent).
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of grid columns (x extent).
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Value at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.cells.get((row, col)).copied()
    }

    /// Position of `value` between the color limits, clamped to `0.0..=1.0`.
    ///
    /// Returns `None` for non-finite values.
    pub fn normalize(&self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        let span = self.vmax - self.vmin;
        if span <= 0.0 {
            return Some(0.0);
        }
        Some(((value - self.vmin) / span).clamp(0.0, 1.0))
    }
}

/// Color limits that clip 5% of the data range at each end.
fn color_limits(min_max: Option<(f64, f64)>) -> (f64, f64) {
    match min_max {
        Some((min, max)) => {
            let scaled = (max - min) * COLOR_SPAN;
            (max - scaled, min + scaled)
        },
        None => (0.0, 0.0),
    }
}

//! Plot model: what each panel of the figure draws.
//!
//! A [`Figure`] holds one [`Panel`] per input file. Each panel keeps both the
//! line series and the color grid of its table so the figure can switch
//! between [`PlotKind`]s without reloading.

mod figure;
mod line;
mod pcolor;

pub use figure::{Figure, Panel, FIGURE_TITLE};
pub use line::LineData;
pub use pcolor::{ColorGrid, ColorPalette};

use crate::data::ColumnRule;
use ratatui::{style::Color, symbols::Marker, widgets::GraphType};

/// Kind of plot drawn in every panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PlotKind {
    /// Line plot of one series, or first column against second.
    #[default]
    Line,
    /// Pseudocolor heatmap of the whole matrix.
    Pcolor,
}

impl PlotKind {
    /// Get the other plot kind.
    pub fn toggle(self) -> Self {
        match self {
            Self::Line => Self::Pcolor,
            Self::Pcolor => Self::Line,
        }
    }

    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Line => "Line",
            Self::Pcolor => "Pcolor",
        }
    }

    /// Column handling used when loading files for this kind.
    pub fn column_rule(self) -> ColumnRule {
        match self {
            Self::Line => ColumnRule::Uniform,
            Self::Pcolor => ColumnRule::FirstRow,
        }
    }
}

/// Fixed styling for line plots.
#[derive(Debug, Clone)]
pub struct PlotOptions {
    /// Line color.
    pub color: Color,
    /// Marker used to draw the line.
    pub marker: Marker,
    /// How points are joined.
    pub graph_type: GraphType,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            color: Color::Blue,
            marker: Marker::Braille,
            graph_type: GraphType::Line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        assert_eq!(PlotKind::Line.toggle(), PlotKind::Pcolor);
        assert_eq!(PlotKind::Line.toggle().toggle(), PlotKind::Line);
    }

    #[test]
    fn kinds_pick_column_rules() {
        assert_eq!(PlotKind::Line.column_rule(), ColumnRule::Uniform);
        assert_eq!(PlotKind::Pcolor.column_rule(), ColumnRule::FirstRow);
    }
}

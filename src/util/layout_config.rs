//! Layout configuration constants for the figure.

/// Configuration for line plot panels.
#[derive(Debug, Clone)]
pub struct PlotLayoutConfig {
    /// Padding factor for Y-axis (0.05 = 5% margin).
    pub y_axis_padding_factor: f64,
    /// Number of labels on each axis.
    pub axis_labels: usize,
}

impl Default for PlotLayoutConfig {
    fn default() -> Self {
        Self {
            y_axis_padding_factor: 0.05,
            axis_labels: 3,
        }
    }
}

/// Configuration for heatmap panels.
#[derive(Debug, Clone)]
pub struct HeatmapLayoutConfig {
    /// Width of the vertical colorbar in characters.
    pub colorbar_width: u16,
    /// Width reserved for colorbar labels.
    pub colorbar_label_width: u16,
    /// Width reserved for Y-axis labels.
    pub y_label_width: u16,
    /// Draw cells with shade glyphs (`░▒▓█`) by value instead of solid blocks.
    pub shaded_cells: bool,
}

impl Default for HeatmapLayoutConfig {
    fn default() -> Self {
        Self {
            colorbar_width: 2,
            colorbar_label_width: 9,
            y_label_width: 6,
            shaded_cells: false,
        }
    }
}

/// Combined layout configuration for the figure.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Configuration for line plots.
    pub plot: PlotLayoutConfig,
    /// Configuration for heatmaps.
    pub heatmap: HeatmapLayoutConfig,
    /// Smallest panel height before panels stop shrinking.
    pub min_panel_height: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            plot: PlotLayoutConfig::default(),
            heatmap: HeatmapLayoutConfig::default(),
            min_panel_height: 5,
        }
    }
}

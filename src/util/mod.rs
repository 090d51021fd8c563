//! Utility functions.
//!
//! This module provides colormaps, layout constants and path helpers.

mod colormaps;
mod layout_config;
mod path;

pub use layout_config::{HeatmapLayoutConfig, LayoutConfig, PlotLayoutConfig};
pub use path::base_name;

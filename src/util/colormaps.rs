//! Color mapping functions for data visualization.

use crate::plot::ColorPalette;
use ratatui::style::Color;

impl ColorPalette {
    /// Map a normalized value (0.0 to 1.0) to an RGB color.
    pub fn color(self, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Jet => jet_color(t),
            Self::Viridis => viridis_color(t),
            Self::Plasma => plasma_color(t),
            Self::Rainbow => rainbow_color(t),
            Self::BlueRed => bluered_color(t),
        }
    }
}

/// Jet colormap: dark blue, blue, cyan, yellow, red, dark red.
fn jet_color(t: f64) -> Color {
    let channel = |center: f64| (1.5 - (4.0 * t - center).abs()).clamp(0.0, 1.0);

    Color::Rgb(
        (channel(3.0) * 255.0) as u8,
        (channel(2.0) * 255.0) as u8,
        (channel(1.0) * 255.0) as u8,
    )
}

/// Viridis colormap approximation.
fn viridis_color(t: f64) -> Color {
    // Piecewise linear through three anchor colors
    Color::Rgb(
        piecewise(t, 68.0, 33.0, 253.0),
        piecewise(t, 1.0, 104.0, 231.0),
        piecewise(t, 84.0, 109.0, 37.0),
    )
}

/// Plasma colormap approximation.
fn plasma_color(t: f64) -> Color {
    Color::Rgb(
        piecewise(t, 13.0, 180.0, 240.0),
        piecewise(t, 8.0, 54.0, 175.0),
        piecewise(t, 135.0, 121.0, 12.0),
    )
}

fn piecewise(t: f64, start: f64, mid: f64, end: f64) -> u8 {
    let v = if t < 0.5 {
        start + t * 2.0 * (mid - start)
    } else {
        mid + (t - 0.5) * 2.0 * (end - mid)
    };
    v as u8
}

/// Rainbow/Spectral colormap.
fn rainbow_color(t: f64) -> Color {
    // HSV to RGB with H from 240° (blue) down to 0° (red), full saturation and value
    let h = (1.0 - t) * 240.0;
    let x = 1.0 - ((h / 60.0) % 2.0 - 1.0).abs();

    let (r, g, b) = if h < 60.0 {
        (1.0, x, 0.0)
    } else if h < 120.0 {
        (x, 1.0, 0.0)
    } else if h < 180.0 {
        (0.0, 1.0, x)
    } else {
        (0.0, x, 1.0)
    };

    Color::Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

/// Blue-White-Red diverging colormap.
fn bluered_color(t: f64) -> Color {
    if t < 0.5 {
        let t2 = t * 2.0;
        let c = (t2 * 255.0) as u8;
        Color::Rgb(c, c, 255)
    } else {
        let t2 = (t - 0.5) * 2.0;
        let c = ((1.0 - t2) * 255.0) as u8;
        Color::Rgb(255, c, c)
    }
}

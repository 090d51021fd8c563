//! txtplot - plot whitespace-delimited numeric text files in the terminal.
//!
//! Each input file becomes one panel of a figure. A file with a single
//! column (or a single row) is drawn as a series against its index; a file
//! with two or more columns is drawn as its first column against its second,
//! or as a pseudocolor heatmap of the whole matrix.
//!
//! # Features
//!
//! - Space, double-space and tab delimited input with `#` comments
//! - Line and pseudocolor plots, switchable at runtime
//! - Jet, Viridis, Plasma, Rainbow and Blue-Red palettes
//! - Gruvbox color themes
//! - Headless rendering to plain text
//!
//! # Example
//!
//! ```no_run
//! use txtplot::app::App;
//! use txtplot::plot::{ColorPalette, Figure, PlotKind};
//!
//! let figure = Figure::load(&["loss.txt", "accuracy.txt"], PlotKind::Line)?;
//! let app = App::new(figure, PlotKind::Line, ColorPalette::Jet);
//! for line in txtplot::ui::render_lines(&app, 100, 40)? {
//!     println!("{}", line);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod check;
pub mod data;
pub mod error;
pub mod plot;
pub mod ui;
pub mod util;

pub use error::{PlotError, Result};

//! User interface rendering.

mod figure;
mod formatters;
mod heatmap;
mod keymap_bar;
mod line;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};

pub use formatters::{axis_labels, format_axis_label};
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    figure::draw_figure(f, app);
}

/// Render one frame off-screen and return it as plain-text rows.
pub fn render_lines(app: &App, width: u16, height: u16) -> std::io::Result<Vec<String>> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|f| draw(f, app))?;
    Ok(buffer_lines(terminal.backend().buffer()))
}

/// Plain-text rows of a rendered buffer, trailing spaces trimmed.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.y..area.y + area.height)
        .map(|y| {
            let line: String = (area.x..area.x + area.width)
                .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol()))
                .collect();
            line.trim_end().to_string()
        })
        .collect()
}

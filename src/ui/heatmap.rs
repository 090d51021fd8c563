//! Pseudocolor rendering.
//!
//! The grid is stretched over the available cells with row 0 at the bottom.
//! A vertical colorbar on the right shows the palette between the grid's
//! color limits.

use super::formatters::format_axis_label;
use super::ThemeColors;
use crate::plot::{ColorGrid, ColorPalette};
use crate::util::HeatmapLayoutConfig;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Draw `grid` into `area`.
pub(super) fn draw_heatmap(
    f: &mut Frame<'_>,
    area: Rect,
    grid: &ColorGrid,
    palette: ColorPalette,
    layout: &HeatmapLayoutConfig,
    colors: &ThemeColors,
) {
    let rows = grid.rows();
    let cols = grid.cols();
    if rows == 0 || cols == 0 {
        let para = Paragraph::new("No data to display")
            .style(Style::default().fg(colors.fg0))
            .alignment(Alignment::Center);
        f.render_widget(para, area);
        return;
    }

    // Y labels | heatmap | gap | colorbar | gap | colorbar labels
    let reserved = layout.y_label_width + layout.colorbar_width + layout.colorbar_label_width + 2;
    if area.width <= reserved || area.height < 2 {
        return;
    }

    let map = Rect {
        x: area.x + layout.y_label_width,
        y: area.y,
        width: area.width - reserved,
        height: area.height - 1,
    };
    let bar = Rect {
        x: map.x + map.width + 1,
        y: map.y,
        width: layout.colorbar_width,
        height: map.height,
    };

    let buf = f.buffer_mut();
    fill_cells(buf, map, grid, palette, layout.shaded_cells, colors);
    draw_colorbar(buf, bar, grid, palette, layout.shaded_cells, colors);
    draw_axis_labels(buf, area, map, rows, cols, colors);
}

/// Grid cell shown at screen offset `(sx, sy)` of a `width x height` area.
pub(super) fn cell_at(
    sx: u16,
    sy: u16,
    width: u16,
    height: u16,
    rows: usize,
    cols: usize,
) -> (usize, usize) {
    let from_bottom = (height - 1 - sy) as usize;
    let row = (from_bottom * rows / height as usize).min(rows - 1);
    let col = (sx as usize * cols / width as usize).min(cols - 1);
    (row, col)
}

/// Glyph for a normalized value.
pub(super) fn cell_glyph(t: f64, shaded: bool) -> char {
    if !shaded {
        return '█';
    }
    match t {
        t if t < 0.25 => '░',
        t if t < 0.5 => '▒',
        t if t < 0.75 => '▓',
        _ => '█',
    }
}

fn fill_cells(
    buf: &mut Buffer,
    map: Rect,
    grid: &ColorGrid,
    palette: ColorPalette,
    shaded: bool,
    colors: &ThemeColors,
) {
    for sy in 0..map.height {
        for sx in 0..map.width {
            let (row, col) = cell_at(sx, sy, map.width, map.height, grid.rows(), grid.cols());
            let value = grid.get(row, col).unwrap_or(f64::NAN);

            if let Some(cell) = buf.cell_mut((map.x + sx, map.y + sy)) {
                match grid.normalize(value) {
                    Some(t) => cell.set_char(cell_glyph(t, shaded)).set_fg(palette.color(t)),
                    None => cell.set_char('·').set_fg(colors.gray),
                };
            }
        }
    }
}

fn draw_colorbar(
    buf: &mut Buffer,
    bar: Rect,
    grid: &ColorGrid,
    palette: ColorPalette,
    shaded: bool,
    colors: &ThemeColors,
) {
    let last = bar.height.saturating_sub(1).max(1) as f64;
    for sy in 0..bar.height {
        let t = 1.0 - sy as f64 / last;
        let color = palette.color(t);
        for sx in 0..bar.width {
            if let Some(cell) = buf.cell_mut((bar.x + sx, bar.y + sy)) {
                cell.set_char(cell_glyph(t, shaded)).set_fg(color);
            }
        }
    }

    let label_x = bar.x + bar.width + 1;
    let bottom = bar.y + bar.height.saturating_sub(1);
    put_str(buf, label_x, bar.y, &format_axis_label(grid.vmax), colors.green);
    if bar.height > 2 {
        let mid = (grid.vmin + grid.vmax) / 2.0;
        put_str(buf, label_x, bar.y + bar.height / 2, &format_axis_label(mid), colors.green);
    }
    if bottom > bar.y {
        put_str(buf, label_x, bottom, &format_axis_label(grid.vmin), colors.green);
    }
}

fn draw_axis_labels(
    buf: &mut Buffer,
    area: Rect,
    map: Rect,
    rows: usize,
    cols: usize,
    colors: &ThemeColors,
) {
    // Y: cell edges, right-aligned against the map
    let bottom = map.y + map.height - 1;
    let y_labels = [(map.y, rows), (bottom, 0)];
    for (y, value) in y_labels {
        let label = value.to_string();
        let x = map.x.saturating_sub(label.width() as u16 + 1).max(area.x);
        put_str(buf, x, y, &label, colors.green);
    }

    // X: left edge, middle and right edge
    let label_y = map.y + map.height;
    put_str(buf, map.x, label_y, "0", colors.green);

    let mid = (cols / 2).to_string();
    let mid_x = map.x + map.width / 2;
    put_str(buf, mid_x.saturating_sub(mid.width() as u16 / 2), label_y, &mid, colors.green);

    let end = cols.to_string();
    let end_x = (map.x + map.width).saturating_sub(end.width() as u16);
    put_str(buf, end_x, label_y, &end, colors.green);
}

fn put_str(buf: &mut Buffer, x: u16, y: u16, text: &str, color: Color) {
    let area = buf.area;
    if y >= area.y + area.height {
        return;
    }
    let max_width = (area.x + area.width).saturating_sub(x) as usize;
    buf.set_stringn(x, y, text, max_width, Style::default().fg(color));
}

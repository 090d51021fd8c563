//! Figure layout: title, stacked panels, status and keymap bars.

use super::heatmap::draw_heatmap;
use super::keymap_bar::draw_keymap;
use super::line::draw_line;
use super::status_bar::draw_status;
use super::ThemeColors;
use crate::app::App;
use crate::plot::{Panel, PlotKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the whole figure.
pub(super) fn draw_figure(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    f.render_widget(Block::default().style(Style::default().bg(colors.bg0)), f.area());

    let mut constraints = vec![Constraint::Length(1), Constraint::Min(1)];
    if app.show_bars {
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Length(1));
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    let title = Paragraph::new(app.figure.title.as_str())
        .style(Style::default().fg(colors.fg0).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    draw_panels(f, chunks[1], app, &colors);

    if app.show_bars {
        draw_status(f, chunks[2], &app.status, &colors);
        draw_keymap(f, chunks[3], &colors);
    }
}

fn draw_panels(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let visible = app.visible_panels(area.height);
    let count = visible.len() as u32;
    if count == 0 {
        return;
    }

    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
        .split(area);

    for (slot, index) in slots.iter().zip(visible) {
        let panel = &app.figure.panels[index];
        let focused = index == app.focus && app.figure.len() > 1;
        draw_panel(f, *slot, panel, focused, app, colors);
    }
}

fn draw_panel(
    f: &mut Frame<'_>,
    area: Rect,
    panel: &Panel,
    focused: bool,
    app: &App,
    colors: &ThemeColors,
) {
    let border = if focused { colors.orange } else { colors.bg2 };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(format!(" {} ", panel.title))
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(colors.yellow));

    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    match app.kind {
        PlotKind::Line => draw_line(
            f,
            inner,
            &panel.line,
            &app.options,
            &app.layout.plot,
            colors,
        ),
        PlotKind::Pcolor => draw_heatmap(
            f,
            inner,
            &panel.grid,
            app.palette,
            &app.layout.heatmap,
            colors,
        ),
    }
}

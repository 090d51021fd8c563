//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

const KEYMAP: &str = "q/Esc:quit | Tab:line/pcolor | c:palette | T:theme | jk/↑↓:focus | z/Enter:zoom";

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new(KEYMAP).style(Style::default().fg(colors.aqua).bg(colors.bg0));

    f.render_widget(paragraph, area);
}

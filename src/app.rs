//! Application state and logic.

use crate::plot::{ColorPalette, Figure, Panel, PlotKind, PlotOptions};
use crate::util::LayoutConfig;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Figure being shown.
    pub figure: Figure,
    /// Plot kind drawn in every panel.
    pub kind: PlotKind,
    /// Heatmap palette.
    pub palette: ColorPalette,
    /// Line styling.
    pub options: PlotOptions,
    /// Layout constants.
    pub layout: LayoutConfig,
    /// Current theme.
    pub theme: Theme,
    /// Index of the focused panel.
    pub focus: usize,
    /// Show only the focused panel.
    pub zoomed: bool,
    /// Status message.
    pub status: String,
    /// Whether the status and keymap bars are drawn.
    pub show_bars: bool,
}

impl App {
    /// Create a new application instance.
    pub fn new(figure: Figure, kind: PlotKind, palette: ColorPalette) -> Self {
        let status = format!("{} panel(s) | {}", figure.len(), kind.name());
        Self {
            figure,
            kind,
            palette,
            options: PlotOptions::default(),
            layout: LayoutConfig::default(),
            theme: Theme::GruvboxDark,
            focus: 0,
            zoomed: false,
            status,
            show_bars: true,
        }
    }

    /// Get the focused panel.
    pub fn current_panel(&self) -> Option<&Panel> {
        self.figure.panels.get(self.focus)
    }

    /// Switch every panel between line and pcolor rendering.
    pub fn toggle_kind(&mut self) {
        self.kind = self.kind.toggle();
        self.status = format!("View: {}", self.kind.name());
        tracing::debug!("Plot kind: {}", self.kind.name());
    }

    /// Cycle to the next heatmap palette.
    pub fn cycle_palette(&mut self) {
        self.palette = self.palette.next();
        self.status = format!("Palette: {}", self.palette.name());
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Move focus to the previous panel.
    pub fn focus_up(&mut self) {
        self.focus = self.focus.saturating_sub(1);
        self.report_focus();
    }

    /// Move focus to the next panel.
    pub fn focus_down(&mut self) {
        let last = self.figure.len().saturating_sub(1);
        self.focus = (self.focus + 1).min(last);
        self.report_focus();
    }

    /// Toggle zoom on the focused panel.
    pub fn toggle_zoom(&mut self) {
        self.zoomed = !self.zoomed;
        self.status = if self.zoomed {
            match self.current_panel() {
                Some(panel) => format!("Zoom: {}", panel.title),
                None => "Zoom: ON".to_string(),
            }
        } else {
            "Zoom: OFF".to_string()
        };
    }

    /// Indices of the panels that fit in `height` rows, keeping focus visible.
    pub fn visible_panels(&self, height: u16) -> std::ops::Range<usize> {
        let total = self.figure.len();
        if self.zoomed && total > 0 {
            return self.focus..self.focus + 1;
        }

        let capacity = (height / self.layout.min_panel_height.max(1)).max(1) as usize;
        if total <= capacity {
            return 0..total;
        }

        let start = self
            .focus
            .saturating_sub(capacity - 1)
            .min(total - capacity);
        start..start + capacity
    }

    /// Frame height needed to draw every panel at `min_panel_height` or more.
    ///
    /// Never smaller than `requested`.
    pub fn full_height(&self, requested: u16) -> u16 {
        let chrome: u16 = if self.show_bars { 3 } else { 1 };
        let panels = u16::try_from(self.figure.len()).unwrap_or(u16::MAX);
        let needed = panels
            .saturating_mul(self.layout.min_panel_height.max(1))
            .saturating_add(chrome);
        requested.max(needed)
    }

    fn report_focus(&mut self) {
        if let Some(title) = self.current_panel().map(|p| p.title.clone()) {
            self.status = format!("Panel {}/{}: {}", self.focus + 1, self.figure.len(), title);
        }
    }
}

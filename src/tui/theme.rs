//! Centralized theme and color scheme for TUI.
//!
//! This module provides consistent styling across all three screens.

use ratatui::prelude::*;
use std::sync::{PoisonError, RwLock};

/// Canonical theme names.
pub const THEME_NAMES: &[&str] = &["dark", "light", "high-contrast"];

/// Resolve a theme name or alias (case-insensitive) to its canonical name.
pub fn canonical_theme_name(name: &str) -> Option<&'static str> {
    match name.to_lowercase().as_str() {
        "dark" => Some("dark"),
        "light" => Some("light"),
        "high-contrast" | "highcontrast" | "hc" => Some("high-contrast"),
        _ => None,
    }
}

/// Color scheme for the TUI application.
/// Provides semantic colors for different UI elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    // UI element colors
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub text: Color,
    pub text_muted: Color,

    // Selected row (list and table)
    pub selection_fg: Color,
    pub selection_bg: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Const dark theme for static initialization
    const fn dark_const() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::Indexed(240),
            border_focused: Color::Cyan,
            text: Color::White,
            text_muted: Color::Gray,
            selection_fg: Color::Indexed(229),
            selection_bg: Color::Indexed(57),
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }

    /// Dark theme (default)
    pub const fn dark() -> Self {
        Self::dark_const()
    }

    /// Light theme
    pub const fn light() -> Self {
        Self {
            primary: Color::Rgb(0, 100, 150),
            accent: Color::Rgb(180, 100, 0),
            muted: Color::Rgb(140, 140, 140),
            border: Color::Rgb(180, 180, 180),
            border_focused: Color::Rgb(0, 100, 150),
            text: Color::Black,
            text_muted: Color::Rgb(90, 90, 90),
            selection_fg: Color::White,
            selection_bg: Color::Rgb(0, 100, 150),
            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(180, 140, 0),
            error: Color::Rgb(200, 0, 0),
        }
    }

    /// High contrast theme (accessibility)
    pub const fn high_contrast() -> Self {
        Self {
            primary: Color::White,
            accent: Color::Yellow,
            muted: Color::Gray,
            border: Color::White,
            border_focused: Color::Yellow,
            text: Color::White,
            text_muted: Color::White,
            selection_fg: Color::Black,
            selection_bg: Color::Yellow,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }

    /// Color for an invalidation status value.
    pub fn status_color(&self, status: &str) -> Color {
        match status {
            "Completed" => self.success,
            "InProgress" => self.warning,
            _ => self.text_muted,
        }
    }
}

// ============================================================================
// Global theme
// ============================================================================

static THEME: RwLock<Theme> = RwLock::new(Theme::dark_const());

/// Named color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub colors: ColorScheme,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    const fn dark_const() -> Self {
        Self {
            name: "dark",
            colors: ColorScheme::dark_const(),
        }
    }

    pub const fn dark() -> Self {
        Self::dark_const()
    }

    pub const fn light() -> Self {
        Self {
            name: "light",
            colors: ColorScheme::light(),
        }
    }

    pub const fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            colors: ColorScheme::high_contrast(),
        }
    }

    /// Look up a theme by name or alias, falling back to dark.
    pub fn from_name(name: &str) -> Self {
        match canonical_theme_name(name) {
            Some("light") => Self::light(),
            Some("high-contrast") => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

/// Replace the active theme.
pub fn set_theme(theme: Theme) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = theme;
}

/// Colors of the active theme.
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

// ============================================================================
// Styles
// ============================================================================

/// Pre-built styles derived from the active theme.
pub struct Styles;

impl Styles {
    pub fn header_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    pub fn list_title() -> Style {
        Style::default()
            .fg(colors().selection_fg)
            .bg(colors().selection_bg)
    }

    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn selected() -> Style {
        Style::default()
            .fg(colors().selection_fg)
            .bg(colors().selection_bg)
    }

    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().muted).bold()
    }

    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn success() -> Style {
        Style::default().fg(colors().success)
    }

    pub fn error() -> Style {
        Style::default().fg(colors().error).bold()
    }
}

// ============================================================================
// Footer hints
// ============================================================================

/// Key hints shown at the bottom of each screen.
pub struct FooterHints;

impl FooterHints {
    pub fn for_list(filtering: bool) -> Vec<(&'static str, &'static str)> {
        if filtering {
            vec![("enter", "apply filter"), ("esc", "clear filter")]
        } else {
            vec![
                ("↑/↓", "navigate"),
                ("enter", "select"),
                ("/", "filter"),
                ("q", "quit"),
            ]
        }
    }

    pub fn for_table() -> Vec<(&'static str, &'static str)> {
        vec![
            ("n", "New invalidation"),
            ("r", "Refresh"),
            ("o", "Open in browser"),
            ("backspace", "Back"),
            ("ctrl+c", "quit"),
        ]
    }

    pub fn for_input() -> Vec<(&'static str, &'static str)> {
        vec![("enter", "submit"), ("esc", "cancel")]
    }
}

/// Render key hints as styled spans: `key desc • key desc`.
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(colors().muted)));
        }
        spans.push(Span::styled((*key).to_string(), Styles::shortcut_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled((*desc).to_string(), Styles::shortcut_desc()));
    }

    spans
}

/// Like [`render_footer_hints`] but drops trailing hints that do not fit in
/// `width` columns, ending with `…` when anything was dropped.
pub fn render_footer_hints_fitted(hints: &[(&str, &str)], width: u16) -> Vec<Span<'static>> {
    use unicode_width::UnicodeWidthStr;

    let width = usize::from(width);
    let mut used = 0;
    let mut kept = 0;
    for (i, (key, desc)) in hints.iter().enumerate() {
        let separator = if i > 0 { 3 } else { 0 };
        let item = separator + key.width() + 1 + desc.width();
        // Reserve room for the ellipsis unless this is the last hint
        let reserve = if i + 1 < hints.len() { 2 } else { 0 };
        if used + item + reserve > width {
            break;
        }
        used += item;
        kept += 1;
    }

    let mut spans = render_footer_hints(&hints[..kept]);
    if kept < hints.len() {
        spans.push(Span::styled(" …", Style::default().fg(colors().muted)));
    }
    spans
}

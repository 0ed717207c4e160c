//! Reusable widgets and render helpers.

mod text_input;

pub use text_input::TextInput;

use crate::tui::theme::{colors, Styles};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Smallest terminal the screens are laid out for.
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 10;

/// Check if terminal meets minimum size requirements.
pub fn check_terminal_size(width: u16, height: u16) -> Result<(), (u16, u16)> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        Err((MIN_WIDTH, MIN_HEIGHT))
    } else {
        Ok(())
    }
}

/// Render a "terminal too small" message.
pub fn render_size_warning(frame: &mut Frame, area: Rect, required_width: u16, required_height: u16) {
    let lines = vec![
        Line::styled("Terminal too small", Style::default().fg(colors().warning).bold()),
        Line::from(vec![
            Span::raw("Current: "),
            Span::styled(format!("{}x{}", area.width, area.height), Styles::text()),
        ]),
        Line::from(vec![
            Span::raw("Required: "),
            Span::styled(
                format!("{required_width}x{required_height}"),
                Style::default().fg(colors().accent),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Render an empty state placeholder.
pub fn render_empty_state(frame: &mut Frame, area: Rect, message: &str) {
    let lines = vec![Line::from(""), Line::styled(message, Styles::text_muted())];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border()),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Truncate a string with ellipsis, using Unicode display width for accuracy.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut width = 0;
    let mut truncated: String = s
        .chars()
        .take_while(|ch| {
            let w = UnicodeWidthChar::width(*ch).unwrap_or(0);
            if width + w > budget {
                return false;
            }
            width += w;
            true
        })
        .collect();
    if max_width > 0 {
        truncated.push('…');
    }
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("E1ABCDEF", 20), "E1ABCDEF");
        assert_eq!(truncate_str("assets.example.com", 10), "assets.ex…");
        assert_eq!(truncate_str("abc", 0), "");
    }

    #[test]
    fn test_check_terminal_size() {
        assert!(check_terminal_size(80, 24).is_ok());
        assert_eq!(check_terminal_size(20, 24), Err((MIN_WIDTH, MIN_HEIGHT)));
    }
}

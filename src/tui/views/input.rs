//! Path-input form view.

use crate::tui::app::InputScreen;
use crate::tui::constants::{INPUT_FIELD_WIDTH, INPUT_PROMPT};
use crate::tui::theme::{colors, Styles};
use ratatui::{prelude::*, widgets::Paragraph};

const FIELD_PREFIX: &str = "> ";

pub fn render_input(frame: &mut Frame, area: Rect, form: &InputScreen) {
    let input = form.input();
    let width = INPUT_FIELD_WIDTH.min(usize::from(area.width.saturating_sub(2)).max(1));

    let (field, cursor_col) = if input.is_empty() {
        (
            Span::styled(input.placeholder().to_string(), Styles::text_muted()),
            0,
        )
    } else {
        let (text, col) = input.visible_window(width);
        (Span::styled(text, Styles::text()), col)
    };

    let lines = vec![
        Line::styled(INPUT_PROMPT, Styles::header_title()),
        Line::from(""),
        Line::from(vec![
            Span::styled(FIELD_PREFIX, Style::default().fg(colors().accent)),
            field,
        ]),
        Line::from(""),
        Line::styled("(esc to cancel)", Styles::text_muted()),
    ];
    frame.render_widget(Paragraph::new(lines), area);

    if area.height > 2 {
        let x = area.x + FIELD_PREFIX.len() as u16 + u16::try_from(cursor_col).unwrap_or(0);
        frame.set_cursor_position((x.min(area.right().saturating_sub(1)), area.y + 2));
    }
}

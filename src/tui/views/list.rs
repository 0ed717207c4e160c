//! Distribution list view.

use crate::tui::constants::LIST_TITLE;
use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::{render_empty_state, truncate_str};
use crate::tui::{App, ListNavigation};
use ratatui::{prelude::*, widgets::Paragraph};

/// Rows per entry: title, description, spacer.
const ITEM_HEIGHT: u16 = 3;

pub fn render_list(frame: &mut Frame, area: Rect, app: &App) {
    let list = app.list_state();
    let show_filter = list.is_filtering() || !list.filter().is_empty();

    let chunks = Layout::vertical([
        Constraint::Length(1),                            // Title
        Constraint::Length(u16::from(show_filter)),       // Filter
        Constraint::Length(1),                            // Item count
        Constraint::Length(1),                            // Spacer
        Constraint::Min(0),                               // Items
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {LIST_TITLE} "), Styles::list_title())),
        chunks[0],
    );

    if show_filter {
        let mut spans = vec![
            Span::styled("Filter: ", Style::default().fg(colors().accent)),
            Span::styled(list.filter().to_string(), Styles::text()),
        ];
        if list.is_filtering() {
            spans.push(Span::styled("▏", Style::default().fg(colors().accent)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), chunks[1]);
    }

    let visible = app.visible_entries();
    let count = match visible.len() {
        1 => "1 item".to_string(),
        n => format!("{n} items"),
    };
    frame.render_widget(
        Paragraph::new(Span::styled(count, Styles::text_muted())),
        chunks[2],
    );

    let items_area = chunks[4];
    if visible.is_empty() {
        let message = if app.entries().is_empty() {
            "No distributions"
        } else {
            "No matches"
        };
        render_empty_state(frame, items_area, message);
        return;
    }

    let rows = usize::from((items_area.height / ITEM_HEIGHT).max(1));
    let selected = list.nav.selected();
    let offset = list.nav.window_offset(rows);
    let width = usize::from(items_area.width.saturating_sub(2));

    let mut lines = Vec::with_capacity(rows * usize::from(ITEM_HEIGHT));
    for (i, entry) in visible.iter().enumerate().skip(offset).take(rows) {
        let is_selected = i == selected;
        let (marker, title_style, desc_style) = if is_selected {
            (
                Span::styled("│ ", Style::default().fg(colors().accent)),
                Style::default().fg(colors().accent).bold(),
                Style::default().fg(colors().accent),
            )
        } else {
            (Span::raw("  "), Styles::text(), Styles::text_muted())
        };
        lines.push(Line::from(vec![
            marker.clone(),
            Span::styled(truncate_str(entry.title(), width), title_style),
        ]));
        lines.push(Line::from(vec![
            marker,
            Span::styled(truncate_str(entry.description(), width), desc_style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), items_area);
}

//! Invalidation table view.

use crate::tui::app::TableScreen;
use crate::tui::constants::TABLE_COLUMN_WIDTHS;
use crate::tui::theme::{colors, Styles};
use crate::tui::ListNavigation;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

const EMPTY_TABLE_HINT: &str = "No invalidations • press n to create one";

pub fn render_table(frame: &mut Frame, area: Rect, table: &TableScreen, height: u16) {
    // Borders and the header row come on top of the data rows
    let outer_height = height.saturating_add(3).min(area.height);
    let [table_area, _] =
        Layout::vertical([Constraint::Length(outer_height), Constraint::Min(0)]).areas(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border_focused())
        .title(Span::styled(
            format!(" {} ", table.distribution_id()),
            Styles::header_title(),
        ));

    let header = Row::new(["ID", "Datetime", "Status"])
        .style(Style::default().fg(colors().primary).bold());

    let scheme = colors();
    let rows = table.invalidations().iter().map(|invalidation| {
        let [id, created, status] = invalidation.row();
        Row::new(vec![
            Cell::from(id),
            Cell::from(created),
            Cell::from(status).style(Style::default().fg(scheme.status_color(&invalidation.status))),
        ])
    });

    let widths = TABLE_COLUMN_WIDTHS.map(Constraint::Length);
    let data_rows = usize::from(table_area.height.saturating_sub(3).max(1));
    let empty = table.invalidations().is_empty();
    let mut state = TableState::default()
        .with_selected((!empty).then(|| table.nav.selected()))
        .with_offset(table.nav.window_offset(data_rows));

    let widget = Table::new(rows, widths)
        .header(header)
        .block(block)
        .style(Styles::text())
        .row_highlight_style(Styles::selected());

    frame.render_stateful_widget(widget, table_area, &mut state);

    if empty {
        // First data row, under the header
        let inner = table_area.inner(Margin::new(1, 1));
        if inner.height > 1 {
            let hint_area = Rect {
                y: inner.y + 1,
                height: 1,
                ..inner
            };
            frame.render_widget(
                Paragraph::new(Line::styled(EMPTY_TABLE_HINT, Styles::text_muted().italic())),
                hint_area,
            );
        }
    }
}

//! Terminal setup, the main loop and top-level rendering.

use super::app::{App, Screen};
use super::constants::SCREEN_MARGIN;
use super::events::{handle_event, EventHandler};
use super::status::StatusKind;
use super::theme::{colors, render_footer_hints_fitted, FooterHints, Styles};
use super::views;
use super::widgets::{check_terminal_size, render_size_warning, MIN_HEIGHT, MIN_WIDTH};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::Paragraph};
use crate::error::Result;
use std::io::{self, stdout};

/// Run the TUI until the user quits.
///
/// The terminal is restored even when drawing or event handling fails.
pub fn run_tui(app: &mut App, tick_rate_ms: u64) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, app, tick_rate_ms);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(result?)
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate_ms: u64,
) -> io::Result<()> {
    let size = terminal.size()?;
    app.set_viewport(size.width, size.height);

    let events = EventHandler::new(tick_rate_ms);
    tracing::info!("TUI started");

    loop {
        terminal.draw(|frame| render(frame, app))?;

        handle_event(app, events.next()?);

        if app.should_quit {
            break;
        }
    }

    tracing::info!("TUI stopped");
    Ok(())
}

/// Draw the active screen with its help and status lines.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Check minimum terminal size
    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    let inner = area.inner(Margin::new(SCREEN_MARGIN.0, SCREEN_MARGIN.1));
    let [header, content, help, status] = Layout::vertical([
        Constraint::Length(2), // Header
        Constraint::Min(3),    // Content
        Constraint::Length(1), // Help
        Constraint::Length(1), // Status
    ])
    .areas(inner);

    render_header(frame, header, app);

    let hints = match app.screen() {
        Screen::List => {
            views::render_list(frame, content, app);
            FooterHints::for_list(app.list_state().is_filtering())
        }
        Screen::Table(table) => {
            views::render_table(frame, content, table, app.settings().table_height);
            FooterHints::for_table()
        }
        Screen::Input(form) => {
            views::render_input(frame, content, form);
            FooterHints::for_input()
        }
    };

    frame.render_widget(
        Paragraph::new(Line::from(render_footer_hints_fitted(&hints, help.width))),
        help,
    );
    render_status_line(frame, status, app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled("cfinval", Style::default().fg(colors().primary).bold()),
        Span::styled(" │ ", Style::default().fg(colors().muted)),
        Span::styled(app.backend_name(), Styles::text_muted()),
    ];
    if let Some(id) = app.screen().distribution_id() {
        spans.push(Span::styled(" │ ", Style::default().fg(colors().muted)));
        spans.push(Span::styled(id.to_string(), Styles::text().bold()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let Some((kind, message)) = app.status().peek() else {
        return;
    };
    let style = match kind {
        StatusKind::Info => Styles::success(),
        StatusKind::Error => Styles::error(),
    };
    frame.render_widget(
        Paragraph::new(Span::styled(message.to_string(), style)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloudfront::{Distribution, InMemoryCloudFront};
    use crate::tui::AppSettings;
    use ratatui::backend::TestBackend;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_list_screen() {
        let backend = InMemoryCloudFront::new();
        backend.add_distribution(Distribution::new("E1ABC", ["a.example.com"]));
        let app = App::load(Box::new(backend), AppSettings::default()).unwrap();
        let text = screen_text(&app);
        assert!(text.contains("Distribution List"));
        assert!(text.contains("E1ABC"));
        assert!(text.contains("a.example.com"));
        assert!(text.contains("1 item"));
    }

    #[test]
    fn test_render_too_small() {
        let app = App::new(
            Box::new(InMemoryCloudFront::new()),
            &[],
            AppSettings::default(),
        );
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("small"));
    }
}

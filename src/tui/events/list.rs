//! Distribution list event handlers.

use crate::tui::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) fn handle_list_keys(app: &mut App, key: KeyEvent) {
    if app.list_state().is_filtering() {
        handle_filter_keys(app, key);
        return;
    }

    match key.code {
        KeyCode::Enter => app.select_distribution(),
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('/') => app.start_filter(),
        KeyCode::Esc => app.clear_filter(),
        _ => {
            super::handle_navigation(app, key);
        }
    }
}

fn handle_filter_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.accept_filter(),
        KeyCode::Esc => app.clear_filter(),
        KeyCode::Backspace => app.filter_pop(),
        KeyCode::Up | KeyCode::Down => {
            super::handle_navigation(app, key);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.filter_push(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crate::cloudfront::{Distribution, InMemoryCloudFront};
    use crate::tui::{handle_key_event, App, AppSettings, Screen};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn app() -> App {
        let backend = InMemoryCloudFront::new();
        backend.add_distribution(Distribution::new("E1", ["a.com"]));
        backend.add_distribution(Distribution::new("E2", ["q.example.com"]));
        App::load(Box::new(backend), AppSettings::default()).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_q_quits_outside_filter() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_is_filter_text_while_filtering() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.list_state().filter(), "q");
        assert_eq!(app.visible_entries().len(), 1);

        press(&mut app, KeyCode::Enter);
        assert!(!app.list_state().is_filtering());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen().distribution_id(), Some("E2"));
    }

    #[test]
    fn test_esc_clears_filter() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('z'));
        assert!(app.visible_entries().is_empty());
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.visible_entries().len(), 2);
        assert!(matches!(app.screen(), Screen::List));
    }
}

//! Path-input form event handlers.

use crate::tui::{App, Screen};
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_input_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_invalidation(),
        KeyCode::Esc => app.cancel_input(),
        _ => {
            if let Screen::Input(form) = &mut app.screen {
                form.input.handle_key(key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cloudfront::{Distribution, InMemoryCloudFront};
    use crate::tui::{handle_key_event, App, AppSettings, Screen};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_typing_goes_to_field() {
        let backend = InMemoryCloudFront::new();
        backend.add_distribution(Distribution::new("E1", ["a.com"]));
        let mut app = App::load(Box::new(backend), AppSettings::default()).unwrap();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('n'));

        // Keys bound on other screens are plain text here
        for c in "/rnoq".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Backspace);

        let Screen::Input(form) = app.screen() else {
            panic!("expected input screen");
        };
        assert_eq!(form.input().value(), "/rno");
        assert!(!app.should_quit);
    }
}

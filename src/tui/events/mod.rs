//! Event handling for the TUI.
//!
//! A background thread forwards terminal input over a channel and emits a
//! tick whenever no input arrives within the tick rate. The main loop pulls
//! one event at a time and hands it to [`handle_event`], which runs to
//! completion (remote calls included) before the next event is read.

mod input;
mod list;
mod table;

use super::App;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Application event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal tick (status expiry)
    Tick,
    /// Resize event
    Resize(u16, u16),
}

/// Channel-backed event source.
///
/// Only the input thread holds a sender, so [`EventHandler::next`] fails
/// once that thread is gone instead of blocking forever.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    /// Spawn the input thread with the given tick rate in milliseconds.
    pub fn new(tick_rate: u64) -> Self {
        let (event_tx, rx) = mpsc::channel();
        let tick_rate = Duration::from_millis(tick_rate.max(1));

        thread::spawn(move || loop {
            let event = if event::poll(tick_rate).unwrap_or(false) {
                match event::read() {
                    // Release/repeat events show up on Windows and with the kitty protocol
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        Event::Key(key)
                    }
                    Ok(CrosstermEvent::Resize(w, h)) => Event::Resize(w, h),
                    Ok(_) => continue,
                    Err(e) => {
                        tracing::warn!(error = %e, "Reading terminal input failed");
                        break;
                    }
                }
            } else {
                Event::Tick
            };
            if event_tx.send(event).is_err() {
                break;
            }
        });

        Self { rx }
    }

    /// Block until the next event.
    pub fn next(&self) -> io::Result<Event> {
        self.rx.recv().map_err(io::Error::other)
    }
}

/// Apply one event to the application state.
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(width, height) => app.set_viewport(width, height),
        Event::Tick => app.status.expire(),
    }
}

/// Handle a key press on the active screen.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    tracing::debug!(screen = app.screen().name(), key = ?key.code, "Key");

    // A new key press replaces whatever the status line was showing
    app.status.clear();

    match app.screen() {
        super::Screen::List => list::handle_list_keys(app, key),
        super::Screen::Table(_) => table::handle_table_keys(app, key),
        super::Screen::Input(_) => input::handle_input_keys(app, key),
    }
}

/// Cursor movement shared by the list and the table.
///
/// Returns `false` when the key is not a navigation key.
fn handle_navigation(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Home | KeyCode::Char('g') => app.go_first(),
        KeyCode::End | KeyCode::Char('G') => app.go_last(),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloudfront::{Distribution, InMemoryCloudFront};
    use crate::tui::{AppSettings, ListNavigation, Screen};

    fn app() -> App {
        let backend = InMemoryCloudFront::new();
        backend.add_distribution(Distribution::new("E1", ["a.com", "b.com", "c.com"]));
        App::load(Box::new(backend), AppSettings::default())
            .unwrap()
            .with_browser_opener(|_| Ok(()))
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_next_fails_when_input_thread_is_gone() {
        let (tx, rx) = mpsc::channel();
        tx.send(Event::Tick).unwrap();
        drop(tx);

        let handler = EventHandler { rx };
        assert_eq!(handler.next().unwrap(), Event::Tick);
        assert!(handler.next().is_err());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        handle_key_event(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut app = app();
        handle_event(&mut app, Event::Resize(120, 40));
        assert_eq!(app.viewport(), (120, 40));
        assert!(matches!(app.screen(), Screen::List));
    }

    #[test]
    fn test_tick_keeps_fresh_status() {
        let mut app = app();
        app.status.info("Refreshed");
        handle_event(&mut app, Event::Tick);
        assert!(app.status().peek().is_some());
    }

    #[test]
    fn test_navigation_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.list_state().nav.selected(), 2);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.list_state().nav.selected(), 1);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.list_state().nav.selected(), 0);
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.list_state().nav.selected(), 2);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.list_state().nav.selected(), 0);
    }
}

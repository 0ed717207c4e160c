//! Single-line text field with a cursor, placeholder and character limit.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Editable single-line text state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    chars: Vec<char>,
    /// Cursor position in chars, `0..=len`
    cursor: usize,
    placeholder: String,
    char_limit: usize,
}

impl TextInput {
    pub fn new(placeholder: impl Into<String>, char_limit: usize) -> Self {
        Self {
            chars: Vec::new(),
            cursor: 0,
            placeholder: placeholder.into(),
            char_limit,
        }
    }

    pub fn value(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Insert a character at the cursor; ignored once the limit is reached.
    pub fn insert(&mut self, c: char) {
        if self.chars.len() >= self.char_limit || c.is_control() {
            return;
        }
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.chars.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.chars.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.chars.len();
    }

    /// Delete everything before the cursor.
    pub fn clear_to_start(&mut self) {
        self.chars.drain(..self.cursor);
        self.cursor = 0;
    }

    /// Delete everything from the cursor on.
    pub fn clear_to_end(&mut self) {
        self.chars.truncate(self.cursor);
    }

    /// Apply an editing key. Returns `false` for keys the field ignores.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('a') if ctrl => self.move_home(),
            KeyCode::Char('e') if ctrl => self.move_end(),
            KeyCode::Char('u') if ctrl => self.clear_to_start(),
            KeyCode::Char('k') if ctrl => self.clear_to_end(),
            KeyCode::Char(_) if ctrl => return false,
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }

    /// The slice of text visible in a field `width` columns wide, and the
    /// cursor column within it.
    pub fn visible_window(&self, width: usize) -> (String, usize) {
        let width = width.max(1);
        let offset = self.cursor.saturating_sub(width - 1);
        let end = (offset + width).min(self.chars.len());
        let text = self.chars[offset..end].iter().collect();
        (text, self.cursor - offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn typed(text: &str) -> TextInput {
        let mut input = TextInput::new("/*", 156);
        for c in text.chars() {
            input.insert(c);
        }
        input
    }

    #[test]
    fn test_typing_and_editing() {
        let mut input = typed("/imgs/*");
        assert_eq!(input.value(), "/imgs/*");

        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.value(), "/img/*");
        input.handle_key(key(KeyCode::Char('s')));
        assert_eq!(input.value(), "/imgs/*");

        input.handle_key(key(KeyCode::Home));
        input.handle_key(key(KeyCode::Delete));
        assert_eq!(input.value(), "imgs/*");
    }

    #[test]
    fn test_char_limit() {
        let mut input = TextInput::new("", 3);
        for c in "abcdef".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_control_shortcuts() {
        let mut input = typed("/a/b/c");
        input.handle_key(ctrl('a'));
        assert_eq!(input.cursor(), 0);
        input.handle_key(ctrl('e'));
        assert_eq!(input.cursor(), 6);

        input.move_left();
        input.move_left();
        input.handle_key(ctrl('k'));
        assert_eq!(input.value(), "/a/b");
        input.handle_key(ctrl('u'));
        assert!(input.is_empty());

        // Unbound control chords are not consumed
        assert!(!input.handle_key(ctrl('x')));
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = TextInput::new("/*", 10);
        input.backspace();
        input.delete();
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_visible_window_follows_cursor() {
        let input = typed("/static/assets/images/*");
        let (text, col) = input.visible_window(10);
        assert_eq!(text, "/images/*");
        assert_eq!(col, 9);

        let mut input = input;
        input.move_home();
        let (text, col) = input.visible_window(10);
        assert_eq!(text, "/static/as");
        assert_eq!(col, 0);
    }
}

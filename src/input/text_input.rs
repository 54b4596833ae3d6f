use crate::terminal::{KeyCode, KeyModifiers};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Handled,
    NotHandled,
    Submit,
}

/// Single-line editor for the active step's field.
#[derive(Debug, Default)]
pub struct TextInput {
    value: String,
    cursor_pos: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: String) {
        self.cursor_pos = value.chars().count();
        self.value = value;
    }

    /// Display column of the cursor, accounting for wide characters.
    pub fn cursor_offset(&self) -> usize {
        self.value
            .chars()
            .take(self.cursor_pos)
            .map(|c| c.to_string().width())
            .sum()
    }

    pub fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> KeyResult {
        match code {
            KeyCode::Char(ch) => {
                self.insert_char(ch);
                KeyResult::Handled
            }
            KeyCode::Backspace => {
                self.backspace();
                KeyResult::Handled
            }
            KeyCode::Delete => {
                self.delete();
                KeyResult::Handled
            }
            KeyCode::Left => {
                self.move_left();
                KeyResult::Handled
            }
            KeyCode::Right => {
                self.move_right();
                KeyResult::Handled
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                KeyResult::Handled
            }
            KeyCode::End => {
                self.cursor_pos = self.value.chars().count();
                KeyResult::Handled
            }
            KeyCode::Enter => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn byte_pos(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn insert_char(&mut self, ch: char) {
        let byte_pos = self.byte_pos(self.cursor_pos);
        self.value.insert(byte_pos, ch);
        self.cursor_pos += 1;
    }

    fn backspace(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        let byte_pos = self.byte_pos(self.cursor_pos - 1);
        self.value.remove(byte_pos);
        self.cursor_pos -= 1;
    }

    fn delete(&mut self) {
        if self.cursor_pos >= self.value.chars().count() {
            return;
        }
        let byte_pos = self.byte_pos(self.cursor_pos);
        self.value.remove(byte_pos);
    }

    fn move_left(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
        }
    }

    fn move_right(&mut self) {
        if self.cursor_pos < self.value.chars().count() {
            self.cursor_pos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyResult, TextInput};
    use crate::terminal::{KeyCode, KeyModifiers};

    fn press(input: &mut TextInput, code: KeyCode) -> KeyResult {
        input.handle_key(code, KeyModifiers::NONE)
    }

    #[test]
    fn inserts_at_the_cursor() {
        let mut input = TextInput::new();
        press(&mut input, KeyCode::Char('a'));
        press(&mut input, KeyCode::Char('c'));
        press(&mut input, KeyCode::Left);
        press(&mut input, KeyCode::Char('b'));

        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn backspace_removes_before_the_cursor() {
        let mut input = TextInput::new();
        input.set_value("abc".to_string());
        press(&mut input, KeyCode::Left);
        press(&mut input, KeyCode::Backspace);

        assert_eq!(input.value(), "ac");
    }

    #[test]
    fn backspace_on_empty_is_a_no_op() {
        let mut input = TextInput::new();
        press(&mut input, KeyCode::Backspace);

        assert_eq!(input.value(), "");
    }

    #[test]
    fn delete_removes_under_the_cursor() {
        let mut input = TextInput::new();
        input.set_value("abc".to_string());
        press(&mut input, KeyCode::Home);
        press(&mut input, KeyCode::Delete);

        assert_eq!(input.value(), "bc");
    }

    #[test]
    fn handles_multibyte_characters() {
        let mut input = TextInput::new();
        press(&mut input, KeyCode::Char('é'));
        press(&mut input, KeyCode::Char('b'));
        press(&mut input, KeyCode::Left);
        press(&mut input, KeyCode::Backspace);

        assert_eq!(input.value(), "b");
    }

    #[test]
    fn cursor_offset_counts_display_width() {
        let mut input = TextInput::new();
        input.set_value("日本".to_string());

        assert_eq!(input.cursor_offset(), 4);
    }

    #[test]
    fn enter_requests_submit() {
        let mut input = TextInput::new();
        assert_eq!(press(&mut input, KeyCode::Enter), KeyResult::Submit);
        assert_eq!(input.value(), "");
    }
}

//! Single-line text fields.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Default)]
pub struct TextField {
    value: String,
    max_len: Option<usize>,
    digits_only: bool,
    masked: bool,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn max_len(mut self, max: usize) -> Self {
        self.max_len = Some(max);
        self
    }

    /// Ignore anything that isn't an ASCII digit.
    #[must_use]
    pub fn digits_only(mut self) -> Self {
        self.digits_only = true;
        self
    }

    /// Render as `•` characters.
    #[must_use]
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Applies an editing key. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.push(c);
                true
            }
            KeyCode::Backspace => {
                self.value.pop();
                true
            }
            _ => false,
        }
    }

    fn push(&mut self, c: char) {
        if self.digits_only && !c.is_ascii_digit() {
            return;
        }
        if self
            .max_len
            .is_some_and(|max| self.value.chars().count() >= max)
        {
            return;
        }
        self.value.push(c);
    }

    /// Text to draw.
    pub fn display(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(field: &mut TextField, text: &str) {
        for c in text.chars() {
            field.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn digits_only_drops_other_characters() {
        let mut field = TextField::new().digits_only();
        type_text(&mut field, "12a-3 4");
        assert_eq!(field.value(), "1234");
    }

    #[test]
    fn stops_at_max_len() {
        let mut field = TextField::new().max_len(6);
        type_text(&mut field, "12345678");
        assert_eq!(field.value(), "123456");
    }

    #[test]
    fn backspace_removes_last_char() {
        let mut field = TextField::with_value("Dire");
        field.handle_key(key(KeyCode::Backspace));
        assert_eq!(field.value(), "Dir");
    }

    #[test]
    fn control_chords_are_not_text() {
        let mut field = TextField::new();
        let consumed = field.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert!(!consumed);
        assert_eq!(field.value(), "");
    }

    #[test]
    fn masked_display_hides_value() {
        let mut field = TextField::new().masked();
        type_text(&mut field, "1234");
        assert_eq!(field.display(), "••••");
        assert_eq!(field.value(), "1234");
    }
}

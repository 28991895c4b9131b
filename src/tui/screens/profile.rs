//! Edit the signed-in user's name, email and phone.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::model::{Screen, User};
use crate::state::AppState;
use crate::tui::action::Action;
use crate::tui::input::TextField;
use crate::tui::widgets;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Email,
    Phone,
    Save,
}

const FIELDS: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Save];

pub struct ProfileScreen {
    id: String,
    name: TextField,
    email: TextField,
    phone: TextField,
    focus: usize,
}

impl ProfileScreen {
    /// Prefilled from the signed-in user, or the demo account.
    pub fn new(state: &AppState) -> Self {
        let user = state.prefs().user().cloned().unwrap_or_else(User::demo);
        Self {
            id: user.id,
            name: TextField::with_value(user.name),
            email: TextField::with_value(user.email),
            phone: TextField::with_value(user.phone),
            focus: 0,
        }
    }

    fn save(&self) -> Vec<Action> {
        let user = User {
            id: self.id.clone(),
            name: self.name.value().trim().to_string(),
            email: self.email.value().trim().to_string(),
            phone: self.phone.value().trim().to_string(),
        };
        vec![Action::SetUser(user), Action::navigate(Screen::Settings)]
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Vec<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            return self.save();
        }
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus = (self.focus + 1).min(FIELDS.len() - 1),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.saturating_sub(1),
            KeyCode::Enter if FIELDS[self.focus] == Field::Save => return self.save(),
            KeyCode::Enter => self.focus += 1,
            KeyCode::Esc => return vec![Action::navigate(Screen::Settings)],
            _ => {
                let field = match FIELDS[self.focus] {
                    Field::Name => &mut self.name,
                    Field::Email => &mut self.email,
                    Field::Phone => &mut self.phone,
                    Field::Save => return Vec::new(),
                };
                field.handle_key(key);
            }
        }
        Vec::new()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let s = state.strings();
        let chunks = widgets::frame3(area);
        widgets::title(frame, chunks.title, s.edit_profile, None);

        let mut lines = Vec::new();
        for (i, field) in FIELDS.iter().enumerate() {
            let focused = i == self.focus;
            let line = match field {
                Field::Name => widgets::field_line(s.full_name, &self.name.display(), focused),
                Field::Email => widgets::field_line(s.email, &self.email.display(), focused),
                Field::Phone => widgets::field_line(s.phone, &self.phone.display(), focused),
                Field::Save => {
                    lines.push(Line::default());
                    widgets::button_line(s.save, focused)
                }
            };
            lines.push(line);
        }
        frame.render_widget(Paragraph::new(lines).block(widgets::padded()), chunks.body);

        widgets::help(
            frame,
            chunks.help,
            &format!("↑↓ {}  ^S {}  esc {}", s.move_hint, s.save, s.back),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tui::screens::{key, test_state, type_text};

    #[test]
    fn prefilled_from_demo_user_when_signed_out() {
        let (_dir, state) = test_state();
        let screen = ProfileScreen::new(&state);
        assert_eq!(screen.name.value(), "Abdelnassir Haroun");
    }

    #[test]
    fn save_keeps_id_and_returns_to_settings() {
        let (_dir, mut state) = test_state();
        state.sign_in(User::demo()).unwrap();
        let mut screen = ProfileScreen::new(&state);
        screen.focus = 2;
        type_text(|k| screen.on_key(k), "9");

        let actions = screen.on_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        let expected = User {
            phone: "777778509".into(),
            ..User::demo()
        };
        assert_eq!(
            actions,
            vec![Action::SetUser(expected), Action::navigate(Screen::Settings)]
        );
    }

    #[test]
    fn enter_walks_to_save() {
        let (_dir, state) = test_state();
        let mut screen = ProfileScreen::new(&state);
        for _ in 0..3 {
            assert!(screen.on_key(key(KeyCode::Enter)).is_empty());
        }
        assert_eq!(screen.on_key(key(KeyCode::Enter)).len(), 2);
    }
}

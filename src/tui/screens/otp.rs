//! One-time code check after sign-up.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Screen;
use crate::state::AppState;
use crate::tui::action::Action;
use crate::tui::input::TextField;
use crate::tui::widgets;

const OTP_LEN: usize = 6;

pub struct OtpScreen {
    code: TextField,
    error: Option<&'static str>,
}

impl OtpScreen {
    pub fn new() -> Self {
        Self {
            code: TextField::new().digits_only().max_len(OTP_LEN),
            error: None,
        }
    }

    /// Any complete code is accepted.
    fn verify(&mut self, state: &AppState) -> Vec<Action> {
        if self.code.value().len() == OTP_LEN {
            self.error = None;
            vec![Action::CompleteSignup, Action::navigate(Screen::Home)]
        } else {
            self.error = Some(state.strings().otp_incomplete);
            Vec::new()
        }
    }

    fn resend(&mut self, state: &AppState) -> Vec<Action> {
        self.code.clear();
        self.error = None;
        vec![Action::alert(state.strings().otp_resent)]
    }

    pub fn on_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('r') {
            return self.resend(state);
        }
        match key.code {
            KeyCode::Enter => self.verify(state),
            KeyCode::Esc => vec![Action::navigate(Screen::Login)],
            _ => {
                if self.code.handle_key(key) {
                    self.error = None;
                }
                Vec::new()
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let s = state.strings();
        let chunks = widgets::frame3(area);
        widgets::title(frame, chunks.title, s.otp_title, None);

        let value = self.code.value();
        let boxes: String = (0..OTP_LEN)
            .map(|i| value.chars().nth(i).map_or("[ ]".to_string(), |c| format!("[{c}]")))
            .collect::<Vec<_>>()
            .join(" ");

        let mut lines = vec![
            Line::from(Span::styled(s.otp_subtitle, widgets::normal())),
            Line::default(),
            Line::from(Span::styled(boxes, widgets::highlight())),
            Line::default(),
        ];
        if let Some(error) = self.error {
            lines.push(Line::from(Span::styled(error, widgets::error())));
        }
        frame.render_widget(Paragraph::new(lines).block(widgets::padded()), chunks.body);

        widgets::help(
            frame,
            chunks.help,
            &format!("⏎ {}  ^R {}  esc {}", s.verify, s.resend_code, s.back),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tui::screens::{key, test_state, type_text};

    #[test]
    fn six_digits_verify() {
        let (_dir, state) = test_state();
        let mut screen = OtpScreen::new();
        type_text(|k| screen.on_key(k, &state), "123456");

        assert_eq!(
            screen.on_key(key(KeyCode::Enter), &state),
            vec![Action::CompleteSignup, Action::navigate(Screen::Home)]
        );
    }

    #[test]
    fn five_digits_show_incomplete_message() {
        let (_dir, state) = test_state();
        let mut screen = OtpScreen::new();
        type_text(|k| screen.on_key(k, &state), "12345");

        assert!(screen.on_key(key(KeyCode::Enter), &state).is_empty());
        assert_eq!(screen.error, Some(state.strings().otp_incomplete));
    }

    #[test]
    fn only_six_digits_are_kept() {
        let (_dir, state) = test_state();
        let mut screen = OtpScreen::new();
        type_text(|k| screen.on_key(k, &state), "12ab34567");
        assert_eq!(screen.code.value(), "123456");
    }

    #[test]
    fn resend_clears_code_and_alerts() {
        let (_dir, state) = test_state();
        let mut screen = OtpScreen::new();
        type_text(|k| screen.on_key(k, &state), "123");

        let actions = screen.on_key(
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL),
            &state,
        );
        assert_eq!(actions, vec![Action::alert(state.strings().otp_resent)]);
        assert_eq!(screen.code.value(), "");
    }
}

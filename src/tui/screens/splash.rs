//! Splash screen: welcome text and a way in.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Screen;
use crate::state::AppState;
use crate::tui::action::Action;
use crate::tui::widgets;

pub struct SplashScreen;

impl SplashScreen {
    pub fn on_key(&mut self, key: KeyEvent) -> Vec<Action> {
        match key.code {
            KeyCode::Enter => vec![Action::navigate(Screen::Login)],
            KeyCode::Char('l') => vec![Action::ToggleLanguage],
            _ => Vec::new(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let s = state.strings();
        let chunks = widgets::frame3(area);
        widgets::title(frame, chunks.title, s.brand_name, Some(state.prefs().language().native_name()));

        let body = widgets::centered(chunks.body, 60, 7);
        let lines = vec![
            Line::from(Span::styled(s.welcome_title, widgets::highlight())),
            Line::default(),
            Line::from(Span::styled(s.welcome_subtitle, widgets::normal())),
            Line::default(),
            Line::default(),
            widgets::button_line(s.get_started, true),
        ];
        frame.render_widget(Paragraph::new(lines).centered(), body);

        widgets::help(
            frame,
            chunks.help,
            &format!("⏎ {}  l {}", s.get_started, s.language_toggle_hint),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tui::screens::key;

    #[test]
    fn enter_goes_to_login() {
        assert_eq!(
            SplashScreen.on_key(key(KeyCode::Enter)),
            vec![Action::navigate(Screen::Login)]
        );
    }

    #[test]
    fn other_keys_do_nothing() {
        assert!(SplashScreen.on_key(key(KeyCode::Char('x'))).is_empty());
    }
}

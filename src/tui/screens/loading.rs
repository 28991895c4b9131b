//! Loading screen: brand, tagline, then on to the splash after a delay.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Screen;
use crate::state::AppState;
use crate::timer::TimerEvent;
use crate::tui::action::Action;
use crate::tui::widgets;

pub struct LoadingScreen;

impl LoadingScreen {
    pub fn on_enter(&self, state: &AppState) -> Vec<Action> {
        vec![Action::Schedule {
            delay: state.config().loading_delay(),
            event: TimerEvent::LoadingComplete,
        }]
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Vec<Action> {
        match key.code {
            KeyCode::Char('l') => vec![Action::ToggleLanguage],
            _ => Vec::new(),
        }
    }

    pub fn on_timer(&mut self, event: TimerEvent) -> Vec<Action> {
        match event {
            TimerEvent::LoadingComplete => vec![Action::navigate(Screen::Splash)],
            _ => Vec::new(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let s = state.strings();
        let body = widgets::centered(area, 44, 6);
        let lines = vec![
            Line::from(Span::styled("EDR", widgets::highlight())),
            Line::from(Span::styled(s.brand_name, widgets::normal())),
            Line::default(),
            Line::from(Span::styled(s.tagline, widgets::muted())),
            Line::default(),
            Line::from(Span::styled(format!("{}…", s.loading), widgets::accent())),
        ];
        frame.render_widget(Paragraph::new(lines).centered(), body);

        let chunks = widgets::frame3(area);
        widgets::help(frame, chunks.help, &format!("l {}", s.language_toggle_hint));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tui::screens::{key, test_state};

    #[test]
    fn schedules_the_configured_delay() {
        let (_dir, state) = test_state();
        let actions = LoadingScreen.on_enter(&state);
        assert_eq!(
            actions,
            vec![Action::Schedule {
                delay: state.config().loading_delay(),
                event: TimerEvent::LoadingComplete,
            }]
        );
    }

    #[test]
    fn moves_to_splash_when_loaded() {
        let actions = LoadingScreen.on_timer(TimerEvent::LoadingComplete);
        assert_eq!(actions, vec![Action::navigate(Screen::Splash)]);
    }

    #[test]
    fn l_toggles_language() {
        let actions = LoadingScreen.on_key(key(KeyCode::Char('l')));
        assert_eq!(actions, vec![Action::ToggleLanguage]);
    }
}

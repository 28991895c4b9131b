//! Settings: profile summary, language, currency, notifications, wallets.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{Screen, User};
use crate::state::AppState;
use crate::tui::action::Action;
use crate::tui::widgets;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Item {
    EditProfile,
    Language,
    Currency,
    Notifications,
}

const ITEMS: [Item; 4] = [
    Item::EditProfile,
    Item::Language,
    Item::Currency,
    Item::Notifications,
];

pub struct SettingsScreen {
    selected: usize,
    /// Session only; never persisted.
    notifications_enabled: bool,
}

impl SettingsScreen {
    pub fn new() -> Self {
        Self {
            selected: 0,
            notifications_enabled: true,
        }
    }

    fn activate(&mut self, state: &AppState) -> Vec<Action> {
        let prefs = state.prefs();
        match ITEMS[self.selected] {
            Item::EditProfile => vec![Action::navigate(Screen::Profile)],
            Item::Language => vec![Action::SetLanguage(prefs.language().toggled())],
            Item::Currency => vec![Action::SetCurrency(prefs.currency().toggled())],
            Item::Notifications => {
                self.notifications_enabled = !self.notifications_enabled;
                Vec::new()
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(ITEMS.len() - 1);
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => {
                if ITEMS[self.selected] == Item::EditProfile && key.code != KeyCode::Enter {
                    return Vec::new();
                }
                return self.activate(state);
            }
            KeyCode::Esc => return vec![Action::navigate(Screen::Home)],
            _ => {}
        }
        Vec::new()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let s = state.strings();
        let prefs = state.prefs();
        let user = prefs.user().cloned().unwrap_or_else(User::demo);
        let chunks = widgets::frame3(area);
        widgets::title(frame, chunks.title, s.settings, None);

        let mut lines = vec![
            widgets::section(s.profile),
            Line::from(Span::styled(user.name, widgets::highlight())),
            Line::from(Span::styled(
                format!("{}  {}", user.email, user.phone),
                widgets::muted(),
            )),
            Line::default(),
        ];
        for (i, item) in ITEMS.iter().enumerate() {
            let selected = i == self.selected;
            let line = match item {
                Item::EditProfile => widgets::button_line(s.edit_profile, selected),
                Item::Language => widgets::field_line(
                    s.language,
                    &format!("‹ {} ›", prefs.language().native_name()),
                    selected,
                ),
                Item::Currency => widgets::field_line(
                    s.currency,
                    &format!("‹ {} ›", prefs.currency()),
                    selected,
                ),
                Item::Notifications => {
                    let value = if self.notifications_enabled { s.on } else { s.off };
                    widgets::field_line(s.notifications, &format!("‹ {value} ›"), selected)
                }
            };
            lines.push(line);
            if *item == Item::EditProfile {
                lines.push(Line::default());
                lines.push(widgets::section(s.preferences));
            }
        }

        lines.push(Line::default());
        lines.push(widgets::section(s.payment_methods));
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<20}", s.waafi), widgets::normal()),
            Span::styled(s.connected, widgets::accent()),
        ]));
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<20}", s.dmoney), widgets::normal()),
            Span::styled(s.not_connected, widgets::muted()),
        ]));

        frame.render_widget(Paragraph::new(lines).block(widgets::padded()), chunks.body);

        widgets::help(
            frame,
            chunks.help,
            &format!("↑↓ {}  ⏎ {}  esc {}", s.move_hint, s.change_hint, s.back),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::currency::Currency;
    use crate::i18n::Language;
    use crate::tui::screens::{key, test_state};

    #[test]
    fn language_row_sets_the_other_language() {
        let (_dir, state) = test_state();
        let mut screen = SettingsScreen::new();
        screen.on_key(key(KeyCode::Down), &state);
        assert_eq!(
            screen.on_key(key(KeyCode::Enter), &state),
            vec![Action::SetLanguage(Language::En)]
        );
    }

    #[test]
    fn currency_row_sets_the_other_currency() {
        let (_dir, state) = test_state();
        let mut screen = SettingsScreen::new();
        screen.selected = 2;
        assert_eq!(
            screen.on_key(key(KeyCode::Right), &state),
            vec![Action::SetCurrency(Currency::Djf)]
        );
    }

    #[test]
    fn notification_toggle_stays_local() {
        let (_dir, state) = test_state();
        let mut screen = SettingsScreen::new();
        screen.selected = 3;
        assert!(screen.on_key(key(KeyCode::Enter), &state).is_empty());
        assert!(!screen.notifications_enabled);
    }

    #[test]
    fn edit_profile_opens_profile() {
        let (_dir, state) = test_state();
        let mut screen = SettingsScreen::new();
        assert_eq!(
            screen.on_key(key(KeyCode::Enter), &state),
            vec![Action::navigate(Screen::Profile)]
        );
    }
}

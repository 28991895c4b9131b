//! Notification list.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem};

use crate::catalog::{self, NotificationKind};
use crate::model::Screen;
use crate::state::AppState;
use crate::tui::action::Action;
use crate::tui::widgets;

pub struct NotificationsScreen {
    selected: usize,
}

impl NotificationsScreen {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn on_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        let count = catalog::notifications(state.prefs().language()).len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < count {
                    self.selected += 1;
                }
            }
            KeyCode::Esc => return vec![Action::navigate(Screen::Home)],
            _ => {}
        }
        Vec::new()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let s = state.strings();
        let notifications = catalog::notifications(state.prefs().language());
        let unread = notifications.iter().filter(|n| n.unread).count();
        let chunks = widgets::frame3(area);
        widgets::title(frame, chunks.title, s.notifications, Some(&(s.unread_count)(unread)));

        let items: Vec<ListItem> = notifications
            .iter()
            .enumerate()
            .map(|(i, n)| {
                let selected = i == self.selected;
                let style = widgets::item_style(selected);
                let (icon, icon_style) = match n.kind {
                    NotificationKind::Success => ("✓", widgets::accent()),
                    NotificationKind::Info => ("i", widgets::normal()),
                    NotificationKind::Warning => ("!", widgets::error()),
                };
                let dot = if n.unread { " •" } else { "" };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(widgets::pointer(selected), style),
                        Span::styled(format!("{icon} "), icon_style),
                        Span::styled(n.title, style),
                        Span::styled(dot, widgets::accent()),
                        Span::styled(format!("  {}", n.time), widgets::muted()),
                    ]),
                    Line::from(Span::styled(format!("    {}", n.message), widgets::normal())),
                    Line::default(),
                ])
            })
            .collect();
        frame.render_widget(List::new(items).block(widgets::padded()), chunks.body);

        widgets::help(frame, chunks.help, &format!("↑↓ {}  esc {}", s.move_hint, s.back));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tui::screens::{key, test_state};

    #[test]
    fn selection_stays_in_list() {
        let (_dir, state) = test_state();
        let mut screen = NotificationsScreen::new();
        for _ in 0..10 {
            screen.on_key(key(KeyCode::Down), &state);
        }
        assert_eq!(screen.selected, 3);
    }

    #[test]
    fn back_goes_home() {
        let (_dir, state) = test_state();
        let mut screen = NotificationsScreen::new();
        assert_eq!(
            screen.on_key(key(KeyCode::Esc), &state),
            vec![Action::navigate(Screen::Home)]
        );
    }
}

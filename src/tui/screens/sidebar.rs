//! Slide-in menu over the current screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::model::{Screen, User};
use crate::state::AppState;
use crate::tui::action::Action;
use crate::tui::widgets;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Item {
    Go(Screen),
    Language,
    Currency,
    Logout,
}

const ITEMS: [Item; 9] = [
    Item::Go(Screen::Home),
    Item::Go(Screen::Tickets),
    Item::Go(Screen::BaggageTracking),
    Item::Go(Screen::Notifications),
    Item::Go(Screen::Settings),
    Item::Go(Screen::Profile),
    Item::Language,
    Item::Currency,
    Item::Logout,
];

/// What the menu wants after a key.
#[derive(Debug, PartialEq)]
pub enum SidebarOutcome {
    Stay(Vec<Action>),
    Close(Vec<Action>),
}

pub struct Sidebar {
    selected: usize,
}

impl Sidebar {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn on_key(&mut self, key: KeyEvent) -> SidebarOutcome {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                SidebarOutcome::Stay(Vec::new())
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(ITEMS.len() - 1);
                SidebarOutcome::Stay(Vec::new())
            }
            KeyCode::Enter => match ITEMS[self.selected] {
                Item::Go(screen) => SidebarOutcome::Close(vec![Action::navigate(screen)]),
                Item::Language => SidebarOutcome::Stay(vec![Action::ToggleLanguage]),
                Item::Currency => SidebarOutcome::Stay(vec![Action::ToggleCurrency]),
                Item::Logout => SidebarOutcome::Close(vec![Action::SignOut]),
            },
            KeyCode::Esc | KeyCode::F(9) => SidebarOutcome::Close(Vec::new()),
            _ => SidebarOutcome::Stay(Vec::new()),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let s = state.strings();
        let prefs = state.prefs();
        let [panel, _] =
            Layout::horizontal([Constraint::Length(34), Constraint::Min(0)]).areas(area);
        frame.render_widget(Clear, panel);

        let user = prefs.user().cloned().unwrap_or_else(User::demo);
        let mut lines = vec![
            Line::from(Span::styled(user.name, widgets::highlight())),
            Line::from(Span::styled(user.email, widgets::muted())),
            Line::default(),
        ];
        for (i, item) in ITEMS.iter().enumerate() {
            let selected = i == self.selected;
            let style = widgets::item_style(selected);
            let label = match item {
                Item::Go(Screen::Home) => s.home.to_string(),
                Item::Go(Screen::Tickets) => s.my_tickets.to_string(),
                Item::Go(Screen::BaggageTracking) => s.baggage_tracking.to_string(),
                Item::Go(Screen::Notifications) => s.notifications.to_string(),
                Item::Go(Screen::Settings) => s.settings.to_string(),
                Item::Go(_) => s.profile.to_string(),
                Item::Language => format!("{}: {}", s.language, prefs.language().native_name()),
                Item::Currency => format!("{}: {}", s.currency, prefs.currency()),
                Item::Logout => s.logout.to_string(),
            };
            if *item == Item::Language || *item == Item::Logout {
                lines.push(Line::default());
            }
            lines.push(Line::from(vec![
                Span::styled(widgets::pointer(selected), style),
                Span::styled(label, style),
            ]));
        }

        let menu = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::RIGHT)
                .title(format!(" {} ", s.menu))
                .padding(Padding::new(1, 1, 1, 0)),
        );
        frame.render_widget(menu, panel);
    }
}

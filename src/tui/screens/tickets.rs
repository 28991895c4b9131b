//! The traveller's tickets.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem};

use crate::catalog::{self, Ticket, TicketStatus};
use crate::currency;
use crate::i18n::Strings;
use crate::model::{Screen, User};
use crate::state::AppState;
use crate::tui::action::Action;
use crate::tui::widgets;

pub struct TicketsScreen {
    tickets: Vec<Ticket>,
    selected: usize,
}

impl TicketsScreen {
    pub fn new(state: &AppState) -> Self {
        let passenger = state
            .prefs()
            .user()
            .map_or_else(|| User::demo().name, |u| u.name.clone());
        Self {
            tickets: catalog::tickets(&passenger),
            selected: 0,
        }
    }

    fn current(&self) -> Option<&Ticket> {
        self.tickets.get(self.selected)
    }

    pub fn on_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        let s = state.strings();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.tickets.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Char('d') => {
                if let Some(ticket) = self.current() {
                    return vec![Action::alert(format!("{} {}", s.downloading_ticket, ticket.id))];
                }
            }
            KeyCode::Char('s') => {
                if let Some(ticket) = self.current() {
                    return vec![Action::alert(format!("{} {}", s.sharing_ticket, ticket.id))];
                }
            }
            KeyCode::Char('b') => return vec![Action::navigate(Screen::BaggageScan)],
            KeyCode::Esc => return vec![Action::navigate(Screen::Home)],
            _ => {}
        }
        Vec::new()
    }

    fn status(status: TicketStatus, s: &Strings) -> (&'static str, Style) {
        match status {
            TicketStatus::Confirmed => (s.confirmed, widgets::accent()),
            TicketStatus::Pending => (s.pending, widgets::highlight()),
            TicketStatus::Cancelled => (s.cancelled, widgets::error()),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let s = state.strings();
        let currency = state.prefs().currency();
        let chunks = widgets::frame3(area);
        widgets::title(frame, chunks.title, s.my_tickets, None);

        let items: Vec<ListItem> = self
            .tickets
            .iter()
            .enumerate()
            .map(|(i, ticket)| {
                let selected = i == self.selected;
                let style = widgets::item_style(selected);
                let (status, status_style) = Self::status(ticket.status, s);
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(widgets::pointer(selected), style),
                        Span::styled(
                            format!("{} → {}", ticket.origin.label(), ticket.destination.label()),
                            style,
                        ),
                        Span::styled(format!("  {status}"), status_style),
                    ]),
                    Line::from(Span::styled(
                        format!(
                            "    {}  {}  {} {}  {} {}  {}",
                            ticket.date,
                            ticket.time,
                            s.coach,
                            ticket.coach,
                            s.seat,
                            ticket.seat,
                            currency::display_price(ticket.price, currency),
                        ),
                        widgets::normal(),
                    )),
                    Line::from(Span::styled(
                        format!("    {}  {}  QR {}", ticket.id, ticket.passenger, ticket.qr_code),
                        widgets::muted(),
                    )),
                    Line::default(),
                ])
            })
            .collect();
        frame.render_widget(List::new(items).block(widgets::padded()), chunks.body);

        widgets::help(
            frame,
            chunks.help,
            &format!(
                "↑↓ {}  d {}  s {}  b {}  esc {}",
                s.move_hint, s.download, s.share, s.scan_baggage, s.back
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tui::screens::{key, test_state};

    #[test]
    fn tickets_use_signed_in_name() {
        let (_dir, mut state) = test_state();
        state
            .sign_in(User::register("Amina Ali", "amina@example.com", "77001122"))
            .unwrap();
        let screen = TicketsScreen::new(&state);
        assert!(screen.tickets.iter().all(|t| t.passenger == "Amina Ali"));
    }

    #[test]
    fn download_alerts_for_selected_ticket() {
        let (_dir, state) = test_state();
        let mut screen = TicketsScreen::new(&state);
        screen.on_key(key(KeyCode::Down), &state);

        let actions = screen.on_key(key(KeyCode::Char('d')), &state);
        let [Action::Alert(message)] = actions.as_slice() else {
            panic!("unexpected actions: {actions:?}");
        };
        assert!(message.ends_with("TG002"));
    }

    #[test]
    fn scan_opens_baggage_scan() {
        let (_dir, state) = test_state();
        let mut screen = TicketsScreen::new(&state);
        assert_eq!(
            screen.on_key(key(KeyCode::Char('b')), &state),
            vec![Action::navigate(Screen::BaggageScan)]
        );
    }
}

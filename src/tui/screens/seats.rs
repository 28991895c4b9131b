//! Seat map. One seat per passenger before payment.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::i18n::Strings;
use crate::model::{
    ROWS, SEATS_PER_ROW, Screen, SearchPayload, SeatError, SeatSelection, Toggled, seat_code,
};
use crate::state::AppState;
use crate::tui::action::Action;
use crate::tui::widgets;

pub struct SeatsScreen {
    payload: SearchPayload,
    selection: SeatSelection,
    row: u32,
    column: u32,
    notice: Option<SeatError>,
}

impl SeatsScreen {
    pub fn new(payload: SearchPayload) -> Self {
        let selection = SeatSelection::new(payload.passengers(), &payload.selected_seats);
        Self {
            payload,
            selection,
            row: 0,
            column: 0,
            notice: None,
        }
    }

    fn toggle_cursor(&mut self) {
        let code = seat_code(self.row, self.column);
        self.notice = match self.selection.toggle(&code) {
            Ok(Toggled::Selected | Toggled::Deselected) => None,
            Err(e) => Some(e),
        };
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Vec<Action> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.row = self.row.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.row = (self.row + 1).min(ROWS - 1),
            KeyCode::Left | KeyCode::Char('h') => self.column = self.column.saturating_sub(1),
            KeyCode::Right | KeyCode::Char('l') => {
                self.column = (self.column + 1).min(SEATS_PER_ROW - 1);
            }
            KeyCode::Char(' ') => self.toggle_cursor(),
            KeyCode::Enter if self.selection.can_continue() => {
                let payload = self.payload.with_seats(self.selection.selected().to_vec());
                return vec![Action::navigate_with(Screen::Payment, payload)];
            }
            KeyCode::Esc => {
                return vec![Action::navigate_with(
                    Screen::SearchResults,
                    self.payload.clone(),
                )];
            }
            _ => {}
        }
        Vec::new()
    }

    fn notice_text(error: &SeatError, s: &Strings) -> &'static str {
        match error {
            SeatError::Occupied(_) | SeatError::UnknownSeat(_) => s.seat_unavailable,
            SeatError::SelectionFull(_) => s.seats_all_chosen,
        }
    }

    fn grid_lines(&self) -> Vec<Line<'static>> {
        let rows = self.selection.rows();
        let mut lines = Vec::new();
        for (r, row) in rows.iter().enumerate() {
            let mut spans = Vec::new();
            for (c, seat) in row.iter().enumerate() {
                let at_cursor = r == self.row as usize && c == self.column as usize;
                let mut style: Style = if seat.occupied {
                    widgets::muted()
                } else if seat.selected {
                    widgets::accent()
                } else {
                    widgets::normal()
                };
                if at_cursor {
                    style = style.add_modifier(ratatui::style::Modifier::REVERSED);
                }
                let mark = if seat.occupied {
                    "×"
                } else if seat.selected {
                    "●"
                } else {
                    "○"
                };
                spans.push(Span::styled(format!("{mark}{:<4}", seat.code), style));
                // Aisle between B and C.
                if c == 1 {
                    spans.push(Span::raw("   "));
                }
            }
            lines.push(Line::from(spans));
        }
        lines
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let s = state.strings();
        let chunks = widgets::frame3(area);
        let trip = self.payload.selected_trip.as_ref();
        let detail = trip.map(|t| format!("{} → {}  {}", t.origin, t.destination, t.departure));
        widgets::title(frame, chunks.title, s.choose_seats, detail.as_deref());

        let [stepper, body] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(chunks.body);
        widgets::stepper(frame, stepper, state);

        let [grid, side] =
            Layout::horizontal([Constraint::Length(30), Constraint::Min(0)]).areas(body);
        frame.render_widget(Paragraph::new(self.grid_lines()).block(widgets::padded()), grid);

        let mut lines = vec![
            widgets::section(s.legend),
            Line::from(Span::styled(format!("○ {}", s.seat_available), widgets::normal())),
            Line::from(Span::styled(format!("● {}", s.seat_selected), widgets::accent())),
            Line::from(Span::styled(format!("× {}", s.seat_occupied), widgets::muted())),
            Line::default(),
            Line::from(vec![
                Span::styled(format!("{}: ", s.passengers), widgets::muted()),
                Span::styled(self.selection.passengers().to_string(), widgets::normal()),
            ]),
            Line::from(vec![
                Span::styled(format!("{}: ", s.selected_seats), widgets::muted()),
                Span::styled(self.selection.selected().join(", "), widgets::normal()),
            ]),
            Line::default(),
            widgets::button_line(
                &self.selection.continue_label(s),
                self.selection.can_continue(),
            ),
        ];
        if let Some(notice) = &self.notice {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                Self::notice_text(notice, s),
                widgets::error(),
            )));
        }
        frame.render_widget(Paragraph::new(lines).block(widgets::padded()), side);

        widgets::help(
            frame,
            chunks.help,
            &format!(
                "←↑↓→ {}  space {}  ⏎ {}  esc {}",
                s.move_hint, s.toggle_seat, s.confirm_hint, s.back
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tui::screens::key;

    fn payload(passengers: u32) -> SearchPayload {
        SearchPayload {
            origin: Some("Djibouti".into()),
            passengers: Some(passengers),
            ..SearchPayload::default()
        }
    }

    #[test]
    fn continue_needs_every_seat() {
        let mut screen = SeatsScreen::new(payload(1));
        assert!(screen.on_key(key(KeyCode::Enter)).is_empty());

        // 1A and 1B are taken; 1C is free.
        screen.on_key(key(KeyCode::Right));
        screen.on_key(key(KeyCode::Right));
        screen.on_key(key(KeyCode::Char(' ')));
        let actions = screen.on_key(key(KeyCode::Enter));
        let [Action::Navigate { screen: target, payload: Some(next) }] = actions.as_slice() else {
            panic!("unexpected actions: {actions:?}");
        };
        assert_eq!(*target, Screen::Payment);
        assert_eq!(next.selected_seats, vec!["1C".to_string()]);
        assert_eq!(next.origin.as_deref(), Some("Djibouti"));
    }

    #[test]
    fn occupied_seat_shows_notice() {
        let mut screen = SeatsScreen::new(payload(1));
        screen.on_key(key(KeyCode::Char(' ')));
        assert!(matches!(screen.notice, Some(SeatError::Occupied(_))));
        assert!(screen.selection.selected().is_empty());
    }

    #[test]
    fn cursor_stays_on_the_map() {
        let mut screen = SeatsScreen::new(payload(1));
        for _ in 0..20 {
            screen.on_key(key(KeyCode::Down));
            screen.on_key(key(KeyCode::Right));
        }
        assert_eq!((screen.row, screen.column), (ROWS - 1, SEATS_PER_ROW - 1));
    }

    #[test]
    fn back_carries_payload_to_results() {
        let mut screen = SeatsScreen::new(payload(2));
        assert_eq!(
            screen.on_key(key(KeyCode::Esc)),
            vec![Action::navigate_with(Screen::SearchResults, payload(2))]
        );
    }

    #[test]
    fn restores_seats_from_payload() {
        let mut restored = payload(2);
        restored.selected_seats = vec!["5A".into(), "1A".into()];
        let screen = SeatsScreen::new(restored);
        assert_eq!(screen.selection.selected(), ["5A".to_string()]);
    }
}

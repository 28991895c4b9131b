//! Baggage tracking: look up a bag and follow its timeline.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::catalog::{self, EventStatus};
use crate::model::Screen;
use crate::state::AppState;
use crate::tui::action::Action;
use crate::tui::input::TextField;
use crate::tui::widgets;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Number,
    Track,
    Notify,
    Report,
}

const FIELDS: [Field; 4] = [Field::Number, Field::Track, Field::Notify, Field::Report];

pub struct BaggageTrackingScreen {
    number: TextField,
    focus: usize,
}

impl BaggageTrackingScreen {
    pub fn new() -> Self {
        Self {
            number: TextField::new(),
            focus: 0,
        }
    }

    pub fn on_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        let s = state.strings();
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus = (self.focus + 1).min(FIELDS.len() - 1),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.saturating_sub(1),
            KeyCode::Enter => match FIELDS[self.focus] {
                Field::Number => self.focus += 1,
                // Every lookup finds the demo bag.
                Field::Track => self.number.set(catalog::TRACKING_NUMBER),
                Field::Notify => return vec![Action::alert(s.baggage_notifications_on)],
                Field::Report => return vec![Action::alert(s.baggage_problem_reported)],
            },
            KeyCode::Esc => return vec![Action::navigate(Screen::Home)],
            _ => {
                if FIELDS[self.focus] == Field::Number {
                    self.number.handle_key(key);
                }
            }
        }
        Vec::new()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let s = state.strings();
        let record = catalog::baggage_record(state.prefs().language());
        let chunks = widgets::frame3(area);
        widgets::title(frame, chunks.title, s.baggage_tracking, None);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(chunks.body);

        let focused = |field: Field| FIELDS[self.focus] == field;
        let row = |label: &str, value: &str| {
            Line::from(vec![
                Span::styled(format!("{label:<20}"), widgets::muted()),
                Span::styled(value.to_string(), widgets::normal()),
            ])
        };
        let lines = vec![
            widgets::field_line(s.tracking_number, &self.number.display(), focused(Field::Number)),
            widgets::button_line(s.track, focused(Field::Track)),
            Line::default(),
            widgets::section(s.baggage_details),
            row("ID", record.id),
            row(s.weight, record.weight),
            row(s.dimensions, record.dimensions),
            row(s.destination, record.destination),
            row(s.estimated_arrival, record.estimated_arrival),
            row(s.current_location, record.current_location),
            Line::default(),
            widgets::button_line(s.enable_notifications, focused(Field::Notify)),
            widgets::button_line(s.report_problem, focused(Field::Report)),
        ];
        frame.render_widget(Paragraph::new(lines).block(widgets::padded()), left);

        let mut timeline = vec![widgets::section(s.timeline)];
        for event in &record.timeline {
            let (mark, style) = match event.status {
                EventStatus::Completed => ("●", widgets::accent()),
                EventStatus::InProgress => ("◐", widgets::highlight()),
                EventStatus::Pending => ("○", widgets::muted()),
            };
            timeline.push(Line::from(vec![
                Span::styled(format!("{mark} "), style),
                Span::styled(event.time, widgets::muted()),
                Span::styled(format!("  {}", event.location), style),
            ]));
            timeline.push(Line::from(Span::styled(
                format!("  {}", event.description),
                widgets::normal(),
            )));
        }
        frame.render_widget(Paragraph::new(timeline).block(widgets::padded()), right);

        widgets::help(
            frame,
            chunks.help,
            &format!("↑↓ {}  ⏎ {}  esc {}", s.move_hint, s.confirm_hint, s.back),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tui::screens::{key, test_state};

    #[test]
    fn track_fills_the_demo_number() {
        let (_dir, state) = test_state();
        let mut screen = BaggageTrackingScreen::new();
        screen.on_key(key(KeyCode::Char('x')), &state);
        screen.on_key(key(KeyCode::Down), &state);
        screen.on_key(key(KeyCode::Enter), &state);
        assert_eq!(screen.number.value(), catalog::TRACKING_NUMBER);
    }

    #[test]
    fn report_alerts() {
        let (_dir, state) = test_state();
        let mut screen = BaggageTrackingScreen::new();
        screen.focus = 3;
        assert_eq!(
            screen.on_key(key(KeyCode::Enter), &state),
            vec![Action::alert(state.strings().baggage_problem_reported)]
        );
    }
}

//! Baggage label scan for customers and station agents.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tracing::info;

use crate::catalog::{self, ScannedBaggage};
use crate::i18n::Strings;
use crate::model::Screen;
use crate::state::AppState;
use crate::timer::TimerEvent;
use crate::tui::action::Action;
use crate::tui::widgets;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Customer,
    Agent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Scanning,
    Scanned,
}

pub struct BaggageScanScreen {
    mode: Mode,
    phase: Phase,
}

impl BaggageScanScreen {
    pub fn new() -> Self {
        Self {
            mode: Mode::Customer,
            phase: Phase::Idle,
        }
    }

    fn reset(&mut self) -> Vec<Action> {
        let actions = if self.phase == Phase::Scanning {
            vec![Action::CancelTimer(TimerEvent::ScanComplete)]
        } else {
            Vec::new()
        };
        self.phase = Phase::Idle;
        actions
    }

    pub fn on_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        let s = state.strings();
        match (self.phase, key.code) {
            (_, KeyCode::Esc) => vec![Action::navigate(Screen::Tickets)],
            (Phase::Idle, KeyCode::Left | KeyCode::Right | KeyCode::Char('m')) => {
                self.mode = match self.mode {
                    Mode::Customer => Mode::Agent,
                    Mode::Agent => Mode::Customer,
                };
                Vec::new()
            }
            (Phase::Idle, KeyCode::Enter) => {
                self.phase = Phase::Scanning;
                vec![Action::Schedule {
                    delay: state.config().scan_delay(),
                    event: TimerEvent::ScanComplete,
                }]
            }
            (Phase::Scanned, KeyCode::Enter) => {
                let message = match self.mode {
                    Mode::Customer => s.baggage_confirmed_customer,
                    Mode::Agent => s.baggage_confirmed_agent,
                };
                info!(mode = ?self.mode, "baggage confirmed");
                vec![Action::alert(message), Action::navigate(Screen::Tickets)]
            }
            (Phase::Scanning | Phase::Scanned, KeyCode::Char('r')) => self.reset(),
            _ => Vec::new(),
        }
    }

    pub fn on_timer(&mut self, event: TimerEvent) -> Vec<Action> {
        if event == TimerEvent::ScanComplete && self.phase == Phase::Scanning {
            self.phase = Phase::Scanned;
        }
        Vec::new()
    }

    fn details(baggage: &ScannedBaggage, s: &Strings) -> Vec<Line<'static>> {
        let row = |label: &str, value: String| {
            Line::from(vec![
                Span::styled(format!("{label:<18}"), widgets::muted()),
                Span::styled(value, widgets::normal()),
            ])
        };
        vec![
            Line::from(Span::styled(format!("✓ {}", s.scan_success), widgets::accent())),
            Line::default(),
            widgets::section(s.owner),
            row(s.full_name, baggage.owner_name.to_string()),
            row(s.phone, baggage.owner_phone.to_string()),
            row(s.nationality, baggage.nationality.to_string()),
            Line::default(),
            widgets::section(s.trip),
            row(s.ticket, baggage.ticket_id.to_string()),
            row(s.route, format!("{} → {}", baggage.origin, baggage.destination)),
            row(s.date, baggage.date.to_string()),
            row(s.train, baggage.train_number.to_string()),
            Line::default(),
            widgets::section(s.baggage_details),
            row("ID", baggage.baggage_id.to_string()),
            row(s.weight, baggage.weight.to_string()),
            row(s.baggage_type, format!("{}, {}, {}", baggage.kind, baggage.color, baggage.brand)),
            row(s.registered_at, baggage.registered.to_string()),
            Line::default(),
            widgets::button_line(s.confirm_baggage, true),
        ]
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let s = state.strings();
        let chunks = widgets::frame3(area);
        let mode = match self.mode {
            Mode::Customer => s.customer,
            Mode::Agent => s.agent,
        };
        widgets::title(frame, chunks.title, s.scan_baggage, Some(mode));

        let lines = match self.phase {
            Phase::Idle => vec![
                Line::from(vec![
                    Span::styled(format!("{}: ", s.mode), widgets::muted()),
                    Span::styled(format!("‹ {mode} ›"), widgets::highlight()),
                ]),
                Line::default(),
                Line::from(Span::styled(s.scan_instructions, widgets::normal())),
                Line::default(),
                widgets::button_line(s.start_scan, true),
            ],
            Phase::Scanning => vec![Line::from(Span::styled(
                format!("{}…", s.scanning),
                widgets::highlight(),
            ))],
            Phase::Scanned => {
                Self::details(&catalog::scanned_baggage(state.prefs().language()), s)
            }
        };
        frame.render_widget(Paragraph::new(lines).block(widgets::padded()), chunks.body);

        let help = match self.phase {
            Phase::Idle => format!("←→ {}  ⏎ {}  esc {}", s.mode, s.start_scan, s.back),
            Phase::Scanning => format!("r {}  esc {}", s.reset, s.back),
            Phase::Scanned => format!("⏎ {}  r {}  esc {}", s.confirm_baggage, s.reset, s.back),
        };
        widgets::help(frame, chunks.help, &help);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tui::screens::{key, test_state};

    #[test]
    fn scan_completes_after_timer() {
        let (_dir, state) = test_state();
        let mut screen = BaggageScanScreen::new();
        assert_eq!(
            screen.on_key(key(KeyCode::Enter), &state),
            vec![Action::Schedule {
                delay: state.config().scan_delay(),
                event: TimerEvent::ScanComplete,
            }]
        );
        assert_eq!(screen.phase, Phase::Scanning);

        screen.on_timer(TimerEvent::ScanComplete);
        assert_eq!(screen.phase, Phase::Scanned);
    }

    #[test]
    fn agent_confirmation_alerts_and_returns_to_tickets() {
        let (_dir, state) = test_state();
        let mut screen = BaggageScanScreen::new();
        screen.on_key(key(KeyCode::Right), &state);
        screen.phase = Phase::Scanned;

        assert_eq!(
            screen.on_key(key(KeyCode::Enter), &state),
            vec![
                Action::alert(state.strings().baggage_confirmed_agent),
                Action::navigate(Screen::Tickets)
            ]
        );
    }

    #[test]
    fn reset_while_scanning_cancels_the_timer() {
        let (_dir, state) = test_state();
        let mut screen = BaggageScanScreen::new();
        screen.on_key(key(KeyCode::Enter), &state);

        assert_eq!(
            screen.on_key(key(KeyCode::Char('r')), &state),
            vec![Action::CancelTimer(TimerEvent::ScanComplete)]
        );
        assert_eq!(screen.phase, Phase::Idle);

        screen.on_timer(TimerEvent::ScanComplete);
        assert_eq!(screen.phase, Phase::Idle);
    }
}

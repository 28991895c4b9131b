//! Payment: order summary, method choice, and the simulated charge.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tracing::{debug, info};

use crate::currency::{self, Currency};
use crate::i18n::Strings;
use crate::model::{
    CVV_MAX_LEN, OrderSummary, PIN_MAX_LEN, PaymentDetails, PaymentMethod, Screen, SearchPayload,
};
use crate::state::AppState;
use crate::timer::TimerEvent;
use crate::tui::action::Action;
use crate::tui::input::TextField;
use crate::tui::widgets;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Editing,
    Processing,
    Succeeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Method(usize),
    Phone,
    Pin,
    CardNumber,
    Expiry,
    Cvv,
    CardHolder,
    Pay,
}

pub struct PaymentScreen {
    payload: SearchPayload,
    order: OrderSummary,
    phase: Phase,
    method: Option<PaymentMethod>,
    focus: Field,
    phone: TextField,
    pin: TextField,
    card_number: TextField,
    expiry: TextField,
    cvv: TextField,
    card_holder: TextField,
}

impl PaymentScreen {
    pub fn new(payload: SearchPayload) -> Self {
        let order = OrderSummary::from_payload(&payload);
        Self {
            payload,
            order,
            phase: Phase::Editing,
            method: None,
            focus: Field::Method(0),
            phone: TextField::new(),
            pin: TextField::new().digits_only().max_len(PIN_MAX_LEN).masked(),
            card_number: TextField::new(),
            expiry: TextField::new(),
            cvv: TextField::new().digits_only().max_len(CVV_MAX_LEN).masked(),
            card_holder: TextField::new(),
        }
    }

    fn fields(&self) -> Vec<Field> {
        let mut fields: Vec<Field> = (0..PaymentMethod::ALL.len()).map(Field::Method).collect();
        match self.method {
            Some(PaymentMethod::Card) => fields.extend([
                Field::CardNumber,
                Field::Expiry,
                Field::Cvv,
                Field::CardHolder,
            ]),
            Some(_) => fields.extend([Field::Phone, Field::Pin]),
            None => {}
        }
        fields.push(Field::Pay);
        fields
    }

    fn move_focus(&mut self, forward: bool) {
        let fields = self.fields();
        let index = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (index + 1).min(fields.len() - 1)
        } else {
            index.saturating_sub(1)
        };
        self.focus = fields[next];
    }

    fn text_field(&mut self, field: Field) -> Option<&mut TextField> {
        match field {
            Field::Phone => Some(&mut self.phone),
            Field::Pin => Some(&mut self.pin),
            Field::CardNumber => Some(&mut self.card_number),
            Field::Expiry => Some(&mut self.expiry),
            Field::Cvv => Some(&mut self.cvv),
            Field::CardHolder => Some(&mut self.card_holder),
            Field::Method(_) | Field::Pay => None,
        }
    }

    fn details(&self) -> PaymentDetails {
        PaymentDetails {
            phone_number: self.phone.value().to_string(),
            pin_code: self.pin.value().to_string(),
            card_number: self.card_number.value().to_string(),
            expiry_date: self.expiry.value().to_string(),
            cvv: self.cvv.value().to_string(),
            card_holder: self.card_holder.value().to_string(),
        }
    }

    fn pay(&mut self, state: &AppState) -> Vec<Action> {
        match self.details().validate(self.method) {
            Ok(method) => {
                info!(?method, total = self.order.total, "payment submitted");
                self.phase = Phase::Processing;
                vec![Action::Schedule {
                    delay: state.config().payment_delay(),
                    event: TimerEvent::PaymentProcessed,
                }]
            }
            Err(e) => {
                debug!(error = %e, "payment rejected");
                vec![Action::alert(e.message(state.strings()))]
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        if key.code == KeyCode::Esc && self.phase != Phase::Succeeded {
            return vec![Action::navigate_with(
                Screen::SeatSelection,
                self.payload.clone(),
            )];
        }
        if self.phase != Phase::Editing {
            return Vec::new();
        }
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.move_focus(true),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(false),
            KeyCode::Enter => match self.focus {
                Field::Method(index) => {
                    self.method = PaymentMethod::ALL.get(index).copied();
                }
                Field::Pay => return self.pay(state),
                _ => self.move_focus(true),
            },
            _ => {
                if let Some(field) = self.text_field(self.focus) {
                    field.handle_key(key);
                }
            }
        }
        Vec::new()
    }

    pub fn on_timer(&mut self, event: TimerEvent, state: &AppState) -> Vec<Action> {
        match event {
            TimerEvent::PaymentProcessed => {
                info!("payment processed");
                self.phase = Phase::Succeeded;
                vec![Action::Schedule {
                    delay: state.config().redirect_delay(),
                    event: TimerEvent::RedirectToTickets,
                }]
            }
            TimerEvent::RedirectToTickets => vec![Action::navigate(Screen::Tickets)],
            _ => Vec::new(),
        }
    }

    fn summary_lines(&self, s: &Strings, currency: Currency) -> Vec<Line<'static>> {
        let order = &self.order;
        let price = |usd: u32| currency::display_price(usd, currency);
        let row = |label: &str, value: String| {
            Line::from(vec![
                Span::styled(format!("{label:<18}"), widgets::muted()),
                Span::styled(value, widgets::normal()),
            ])
        };
        let seats = if order.seats.is_empty() {
            "-".to_string()
        } else {
            order.seats.join(", ")
        };
        vec![
            widgets::section(s.order_summary),
            row(s.route, format!("{} → {}", order.origin, order.destination)),
            row(s.date, format!("{}  {}", order.date, order.time)),
            row(s.trip_type, order.trip_type.label(s).to_string()),
            row(s.passengers, order.passengers.to_string()),
            row(s.seats, seats),
            Line::default(),
            row(s.subtotal, price(order.subtotal)),
            row(s.service_fee, price(order.service_fee)),
            Line::from(vec![
                Span::styled(format!("{:<18}", s.total), widgets::highlight()),
                Span::styled(price(order.total), widgets::accent()),
            ]),
        ]
    }

    fn form_lines(&self, s: &Strings, currency: Currency) -> Vec<Line<'static>> {
        let mut lines = vec![widgets::section(s.payment_method)];
        for field in self.fields() {
            let focused = self.focus == field;
            let line = match field {
                Field::Method(index) => {
                    let method = PaymentMethod::ALL[index];
                    let mark = if self.method == Some(method) { "◉" } else { "○" };
                    let style = widgets::item_style(focused);
                    Line::from(vec![
                        Span::styled(widgets::pointer(focused), style),
                        Span::styled(format!("{mark} {}", method.name(s)), style),
                        Span::styled(format!("  {}", method.description(s)), widgets::muted()),
                    ])
                }
                Field::Phone => widgets::field_line(s.phone, &self.phone.display(), focused),
                Field::Pin => widgets::field_line(s.pin_code, &self.pin.display(), focused),
                Field::CardNumber => {
                    widgets::field_line(s.card_number, &self.card_number.display(), focused)
                }
                Field::Expiry => widgets::field_line(s.expiry_date, &self.expiry.display(), focused),
                Field::Cvv => widgets::field_line("CVV", &self.cvv.display(), focused),
                Field::CardHolder => {
                    widgets::field_line(s.card_holder, &self.card_holder.display(), focused)
                }
                Field::Pay => {
                    lines.push(Line::default());
                    let label = format!(
                        "{} • {}",
                        s.pay_now,
                        currency::display_price(self.order.total, currency)
                    );
                    widgets::button_line(&label, focused)
                }
            };
            lines.push(line);
            if field == Field::Method(PaymentMethod::ALL.len() - 1) && self.method.is_some() {
                lines.push(Line::default());
            }
        }
        lines
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let s = state.strings();
        let currency = state.prefs().currency();
        let chunks = widgets::frame3(area);
        widgets::title(frame, chunks.title, s.payment, None);

        let [stepper, body] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(chunks.body);
        widgets::stepper(frame, stepper, state);

        let [summary, form] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(body);
        frame.render_widget(
            Paragraph::new(self.summary_lines(s, currency)).block(widgets::padded()),
            summary,
        );

        let lines = match self.phase {
            Phase::Editing => self.form_lines(s, currency),
            Phase::Processing => vec![
                Line::from(Span::styled(format!("{}…", s.processing_payment), widgets::highlight())),
                Line::from(Span::styled(s.please_wait, widgets::muted())),
            ],
            Phase::Succeeded => vec![
                Line::from(Span::styled(format!("✓ {}", s.payment_successful), widgets::accent())),
                Line::from(Span::styled(s.redirecting_to_tickets, widgets::muted())),
            ],
        };
        frame.render_widget(Paragraph::new(lines).block(widgets::padded()), form);

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

    use crate::tui::screens::{key, test_state, type_text};

    fn payload() -> SearchPayload {
        SearchPayload {
            passengers: Some(2),
            selected_seats: vec!["3A".into(), "3B".into()],
            ..SearchPayload::default()
        }
    }

    #[test]
    fn order_uses_default_fare_without_trip() {
        let screen = PaymentScreen::new(payload());
        assert_eq!(screen.order.subtotal, 50);
        assert_eq!(screen.order.service_fee, 5);
        assert_eq!(screen.order.total, 55);
    }

    #[test]
    fn pay_without_method_alerts() {
        let (_dir, state) = test_state();
        let mut screen = PaymentScreen::new(payload());
        screen.focus = Field::Pay;
        assert_eq!(
            screen.on_key(key(KeyCode::Enter), &state),
            vec![Action::alert(state.strings().select_payment_method)]
        );
        assert_eq!(screen.phase, Phase::Editing);
    }

    #[test]
    fn mobile_payment_runs_to_tickets() {
        let (_dir, state) = test_state();
        let mut screen = PaymentScreen::new(payload());

        // Waafi, then phone and PIN.
        screen.on_key(key(KeyCode::Enter), &state);
        assert_eq!(screen.method, Some(PaymentMethod::Waafi));
        screen.focus = Field::Phone;
        type_text(|k| screen.on_key(k, &state), "77001122");
        screen.on_key(key(KeyCode::Tab), &state);
        type_text(|k| screen.on_key(k, &state), "123456");
        assert_eq!(screen.pin.value(), "1234");
        screen.on_key(key(KeyCode::Tab), &state);

        let actions = screen.on_key(key(KeyCode::Enter), &state);
        assert_eq!(
            actions,
            vec![Action::Schedule {
                delay: state.config().payment_delay(),
                event: TimerEvent::PaymentProcessed,
            }]
        );
        assert_eq!(screen.phase, Phase::Processing);

        let actions = screen.on_timer(TimerEvent::PaymentProcessed, &state);
        assert_eq!(
            actions,
            vec![Action::Schedule {
                delay: state.config().redirect_delay(),
                event: TimerEvent::RedirectToTickets,
            }]
        );
        assert_eq!(screen.phase, Phase::Succeeded);

        assert_eq!(
            screen.on_timer(TimerEvent::RedirectToTickets, &state),
            vec![Action::navigate(Screen::Tickets)]
        );
    }

    #[test]
    fn card_needs_every_field() {
        let (_dir, state) = test_state();
        let mut screen = PaymentScreen::new(payload());
        screen.focus = Field::Method(2);
        screen.on_key(key(KeyCode::Enter), &state);
        screen.card_number.set("4111111111111111");
        screen.focus = Field::Pay;

        assert_eq!(
            screen.on_key(key(KeyCode::Enter), &state),
            vec![Action::alert(state.strings().fill_card_fields)]
        );
    }

    #[test]
    fn back_while_processing_returns_to_seats() {
        let (_dir, state) = test_state();
        let mut screen = PaymentScreen::new(payload());
        screen.phase = Phase::Processing;
        assert_eq!(
            screen.on_key(key(KeyCode::Esc), &state),
            vec![Action::navigate_with(Screen::SeatSelection, payload())]
        );
    }
}

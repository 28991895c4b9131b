//! Home and search: the trip search form plus shortcuts and suggestions.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tracing::debug;

use crate::catalog;
use crate::currency;
use crate::i18n::Strings;
use crate::model::{Screen, SearchForm, Station, TripType};
use crate::state::AppState;
use crate::tui::action::Action;
use crate::tui::input::TextField;
use crate::tui::widgets;

const DATE_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    TripType,
    Origin,
    Destination,
    Departure,
    Return,
    Passengers,
    Search,
    MyTickets,
    Baggage,
    Notifications,
}

pub struct HomeScreen {
    /// Home greets the user; search is the bare form.
    screen: Screen,
    form: SearchForm,
    departure: TextField,
    return_date: TextField,
    focus: Field,
}

impl HomeScreen {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            form: SearchForm::default(),
            departure: TextField::new().max_len(DATE_LEN),
            return_date: TextField::new().max_len(DATE_LEN),
            focus: Field::TripType,
        }
    }

    fn fields(&self) -> Vec<Field> {
        let mut fields = vec![Field::TripType, Field::Origin, Field::Destination, Field::Departure];
        if self.form.trip_type == TripType::RoundTrip {
            fields.push(Field::Return);
        }
        fields.extend([
            Field::Passengers,
            Field::Search,
            Field::MyTickets,
            Field::Baggage,
            Field::Notifications,
        ]);
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

    /// Left/right on a choice field.
    fn change(&mut self, forward: bool) {
        match self.focus {
            Field::TripType => {
                self.form.trip_type = match self.form.trip_type {
                    TripType::OneWay => TripType::RoundTrip,
                    TripType::RoundTrip => TripType::OneWay,
                };
            }
            Field::Origin => self.form.origin = cycle_station(self.form.origin, forward),
            Field::Destination => {
                self.form.destination = cycle_station(self.form.destination, forward);
            }
            Field::Passengers if forward => self.form.increment_passengers(),
            Field::Passengers => self.form.decrement_passengers(),
            _ => {}
        }
    }

    fn submit(&mut self, s: &Strings) -> Vec<Action> {
        self.form.departure_date = self.departure.value().to_string();
        self.form.return_date = self.return_date.value().to_string();
        match self.form.submit() {
            Ok(payload) => vec![Action::navigate_with(Screen::SearchResults, payload)],
            Err(e) => {
                debug!(error = %e, "search rejected");
                vec![Action::alert(e.message(s))]
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.move_focus(true),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(false),
            KeyCode::Left => self.change(false),
            KeyCode::Right => self.change(true),
            KeyCode::Enter => match self.focus {
                Field::Search => return self.submit(state.strings()),
                Field::MyTickets => return vec![Action::navigate(Screen::Tickets)],
                Field::Baggage => return vec![Action::navigate(Screen::BaggageTracking)],
                Field::Notifications => return vec![Action::navigate(Screen::Notifications)],
                _ => self.move_focus(true),
            },
            _ => match self.focus {
                Field::Departure => {
                    self.departure.handle_key(key);
                }
                Field::Return => {
                    self.return_date.handle_key(key);
                }
                _ => {}
            },
        }
        Vec::new()
    }

    fn form_lines(&self, s: &Strings) -> Vec<Line<'static>> {
        let station = |station: Option<Station>| {
            format!("‹ {} ›", station.map_or(s.choose_station, Station::label))
        };
        let mut lines = Vec::new();
        for field in self.fields() {
            let focused = self.focus == field;
            let line = match field {
                Field::TripType => widgets::field_line(
                    s.trip_type,
                    &format!("‹ {} ›", self.form.trip_type.label(s)),
                    focused,
                ),
                Field::Origin => widgets::field_line(s.from, &station(self.form.origin), focused),
                Field::Destination => {
                    widgets::field_line(s.to, &station(self.form.destination), focused)
                }
                Field::Departure => {
                    widgets::field_line(s.departure_date, &self.departure.display(), focused)
                }
                Field::Return => {
                    widgets::field_line(s.return_date, &self.return_date.display(), focused)
                }
                Field::Passengers => widgets::field_line(
                    s.passengers,
                    &format!("‹ {} ›", self.form.passengers),
                    focused,
                ),
                Field::Search => {
                    lines.push(Line::default());
                    widgets::button_line(s.search_trains, focused)
                }
                Field::MyTickets => {
                    lines.push(Line::default());
                    lines.push(widgets::section(s.quick_access));
                    widgets::button_line(s.my_tickets, focused)
                }
                Field::Baggage => widgets::button_line(s.baggage_tracking, focused),
                Field::Notifications => widgets::button_line(s.notifications, focused),
            };
            lines.push(line);
        }
        lines
    }

    fn suggestion_lines(state: &AppState) -> Vec<Line<'static>> {
        let s = state.strings();
        let currency = state.prefs().currency();
        let mut lines = vec![widgets::section(s.popular_routes)];
        for route in &catalog::POPULAR_ROUTES {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} → {}  ", route.origin.label(), route.destination.label()),
                    widgets::normal(),
                ),
                Span::styled(currency::display_price(route.price, currency), widgets::accent()),
                Span::styled(format!("  {}", route.duration), widgets::muted()),
            ]));
        }

        lines.push(Line::default());
        lines.push(widgets::section(s.recent_searches));
        for search in &catalog::RECENT_SEARCHES {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} → {}  ", search.origin.label(), search.destination.label()),
                    widgets::normal(),
                ),
                Span::styled(search.date.to_string(), widgets::muted()),
            ]));
        }

        lines.push(Line::default());
        lines.push(widgets::section(s.special_offers));
        for offer in catalog::special_offers(state.prefs().language()) {
            lines.push(Line::from(vec![
                Span::styled(format!("{}  ", offer.title), widgets::normal()),
                Span::styled(format!("-{}", offer.discount), widgets::accent()),
            ]));
        }
        lines
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let s = state.strings();
        let chunks = widgets::frame3(area);
        match (self.screen, state.prefs().user()) {
            (Screen::Home, Some(user)) => {
                let greeting = format!("{}, {}", s.hello, user.name);
                widgets::title(frame, chunks.title, &greeting, Some(s.where_to));
            }
            _ => widgets::title(frame, chunks.title, s.search_trains, None),
        }

        let [form, suggestions] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(chunks.body);
        frame.render_widget(
            Paragraph::new(self.form_lines(s)).block(widgets::padded()),
            form,
        );
        frame.render_widget(
            Paragraph::new(Self::suggestion_lines(state)).block(widgets::padded()),
            suggestions,
        );

        widgets::help(
            frame,
            chunks.help,
            &format!(
                "↑↓ {}  ←→ {}  ⏎ {}  {}",
                s.move_hint, s.change_hint, s.confirm_hint, s.date_format_hint
            ),
        );
    }
}

/// Steps through "no station" and then every station.
fn cycle_station(current: Option<Station>, forward: bool) -> Option<Station> {
    let mut options = vec![None];
    options.extend(Station::ALL.into_iter().map(Some));
    let index = options.iter().position(|o| *o == current).unwrap_or(0);
    let len = options.len();
    let next = if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    };
    options[next]
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tui::screens::{key, test_state, type_text};

    fn press(screen: &mut HomeScreen, state: &AppState, code: KeyCode, times: usize) {
        for _ in 0..times {
            screen.on_key(key(code), state);
        }
    }

    /// Djibouti → Dire-dawa on 2025-01-15, focus left on the search button.
    fn filled(state: &AppState) -> HomeScreen {
        let mut screen = HomeScreen::new(Screen::Home);
        press(&mut screen, state, KeyCode::Down, 1);
        press(&mut screen, state, KeyCode::Right, 1);
        press(&mut screen, state, KeyCode::Down, 1);
        press(&mut screen, state, KeyCode::Right, 2);
        press(&mut screen, state, KeyCode::Down, 1);
        type_text(|k| screen.on_key(k, state), "2025-01-15");
        screen.focus = Field::Search;
        screen
    }

    #[test]
    fn valid_search_navigates_with_payload() {
        let (_dir, state) = test_state();
        let mut screen = filled(&state);

        let actions = screen.on_key(key(KeyCode::Enter), &state);
        let [Action::Navigate { screen: target, payload: Some(payload) }] = actions.as_slice()
        else {
            panic!("unexpected actions: {actions:?}");
        };
        assert_eq!(*target, Screen::SearchResults);
        assert_eq!(payload.origin.as_deref(), Some("Djibouti"));
        assert_eq!(payload.destination.as_deref(), Some("Dire-dawa"));
        assert_eq!(payload.passengers, Some(1));
    }

    #[test]
    fn same_station_is_rejected() {
        let (_dir, state) = test_state();
        let mut screen = filled(&state);
        screen.form.destination = Some(Station::Djibouti);

        let actions = screen.on_key(key(KeyCode::Enter), &state);
        assert_eq!(
            actions,
            vec![Action::alert(state.strings().stations_must_differ)]
        );
    }

    #[test]
    fn missing_fields_are_rejected() {
        let (_dir, state) = test_state();
        let mut screen = HomeScreen::new(Screen::Search);
        screen.focus = Field::Search;

        let actions = screen.on_key(key(KeyCode::Enter), &state);
        assert_eq!(
            actions,
            vec![Action::alert(state.strings().fill_required_fields)]
        );
    }

    #[test]
    fn return_date_only_for_round_trips() {
        let mut screen = HomeScreen::new(Screen::Home);
        assert!(!screen.fields().contains(&Field::Return));
        screen.change(true);
        assert_eq!(screen.form.trip_type, TripType::RoundTrip);
        assert!(screen.fields().contains(&Field::Return));
    }

    #[test]
    fn passengers_stay_in_range() {
        let (_dir, state) = test_state();
        let mut screen = HomeScreen::new(Screen::Home);
        screen.focus = Field::Passengers;
        press(&mut screen, &state, KeyCode::Left, 3);
        assert_eq!(screen.form.passengers, 1);
        press(&mut screen, &state, KeyCode::Right, 10);
        assert_eq!(screen.form.passengers, crate::model::MAX_PASSENGERS);
    }

    #[test]
    fn station_cycle_wraps_through_none() {
        assert_eq!(cycle_station(None, true), Some(Station::Djibouti));
        assert_eq!(cycle_station(None, false), Some(Station::Dawaleh));
        assert_eq!(cycle_station(Some(Station::Dawaleh), true), None);
    }

    #[test]
    fn shortcuts_navigate() {
        let (_dir, state) = test_state();
        let mut screen = HomeScreen::new(Screen::Home);
        screen.focus = Field::MyTickets;
        assert_eq!(
            screen.on_key(key(KeyCode::Enter), &state),
            vec![Action::navigate(Screen::Tickets)]
        );
    }
}

//! Search results: departures for the searched route.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, Paragraph};

use crate::catalog;
use crate::currency;
use crate::i18n::Strings;
use crate::model::{Screen, SearchPayload, Trip, TripClass};
use crate::state::AppState;
use crate::tui::action::Action;
use crate::tui::widgets;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Sort {
    #[default]
    Departure,
    PriceLow,
    PriceHigh,
}

impl Sort {
    fn next(self) -> Self {
        match self {
            Self::Departure => Self::PriceLow,
            Self::PriceLow => Self::PriceHigh,
            Self::PriceHigh => Self::Departure,
        }
    }

    fn label(self, s: &Strings) -> &'static str {
        match self {
            Self::Departure => s.sort_departure,
            Self::PriceLow => s.sort_price_low,
            Self::PriceHigh => s.sort_price_high,
        }
    }
}

pub struct ResultsScreen {
    payload: SearchPayload,
    trips: Vec<Trip>,
    selected: usize,
    show_filters: bool,
    sort: Sort,
    class: Option<TripClass>,
}

impl ResultsScreen {
    pub fn new(payload: SearchPayload) -> Self {
        let trips = catalog::search_results(&payload);
        Self {
            payload,
            trips,
            selected: 0,
            show_filters: false,
            sort: Sort::default(),
            class: None,
        }
    }

    /// Trips after the class filter, in the chosen order.
    fn visible(&self) -> Vec<&Trip> {
        let mut trips: Vec<&Trip> = self
            .trips
            .iter()
            .filter(|t| self.class.is_none_or(|class| t.class == class))
            .collect();
        match self.sort {
            Sort::Departure => {}
            Sort::PriceLow => trips.sort_by_key(|t| t.price),
            Sort::PriceHigh => trips.sort_by_key(|t| std::cmp::Reverse(t.price)),
        }
        trips
    }

    fn cycle_class(&mut self) {
        self.class = match self.class {
            None => Some(TripClass::ALL[0]),
            Some(class) => TripClass::ALL
                .iter()
                .position(|c| *c == class)
                .and_then(|i| TripClass::ALL.get(i + 1).copied()),
        };
        self.selected = 0;
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Vec<Action> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.visible().len() {
                    self.selected += 1;
                }
            }
            KeyCode::Char('f') => self.show_filters = !self.show_filters,
            KeyCode::Char('s') if self.show_filters => self.sort = self.sort.next(),
            KeyCode::Char('c') if self.show_filters => self.cycle_class(),
            KeyCode::Enter => {
                if let Some(trip) = self.visible().get(self.selected) {
                    let payload = self.payload.with_trip((*trip).clone());
                    return vec![Action::navigate_with(Screen::SeatSelection, payload)];
                }
            }
            KeyCode::Esc => return vec![Action::navigate(Screen::Home)],
            _ => {}
        }
        Vec::new()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let s = state.strings();
        let currency = state.prefs().currency();
        let chunks = widgets::frame3(area);

        let route = format!(
            "{} → {}",
            self.trips.first().map_or("", |t| t.origin.as_str()),
            self.trips.first().map_or("", |t| t.destination.as_str()),
        );
        let visible = self.visible();
        widgets::title(
            frame,
            chunks.title,
            &route,
            Some(&(s.trips_found)(visible.len())),
        );

        let filter_height = if self.show_filters { 3 } else { 0 };
        let [stepper, filters, list] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(filter_height),
            Constraint::Min(0),
        ])
        .areas(chunks.body);
        widgets::stepper(frame, stepper, state);

        if self.show_filters {
            let class = self.class.map_or(s.all_classes, TripClass::label);
            let lines = vec![
                widgets::section(s.filters),
                Line::from(vec![
                    Span::styled(format!("s {}: ", s.sort_by), widgets::muted()),
                    Span::styled(self.sort.label(s), widgets::normal()),
                    Span::styled(format!("   c {}: ", s.class), widgets::muted()),
                    Span::styled(class, widgets::normal()),
                ]),
            ];
            frame.render_widget(Paragraph::new(lines).block(widgets::padded()), filters);
        }

        let items: Vec<ListItem> = visible
            .iter()
            .enumerate()
            .map(|(i, trip)| {
                let selected = i == self.selected;
                let style = widgets::item_style(selected);
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(widgets::pointer(selected), style),
                        Span::styled(format!("{} → {}", trip.departure, trip.arrival), style),
                        Span::styled(format!("  {}  {}", trip.duration, trip.class.label()), widgets::muted()),
                        Span::styled(
                            format!("  {}", currency::display_price(trip.price, currency)),
                            widgets::accent(),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("    {}", (s.seats_available)(trip.seats_available)),
                        widgets::muted(),
                    )),
                ])
            })
            .collect();
        frame.render_widget(List::new(items).block(widgets::padded()), list);

        widgets::help(
            frame,
            chunks.help,
            &format!("↑↓ {}  ⏎ {}  f {}  esc {}", s.move_hint, s.select_trip, s.filters, s.back),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tui::screens::key;

    fn payload() -> SearchPayload {
        SearchPayload {
            origin: Some("Djibouti".into()),
            destination: Some("Holhol".into()),
            passengers: Some(2),
            ..SearchPayload::default()
        }
    }

    #[test]
    fn selecting_merges_trip_into_payload() {
        let mut screen = ResultsScreen::new(payload());
        screen.on_key(key(KeyCode::Down));

        let actions = screen.on_key(key(KeyCode::Enter));
        let [Action::Navigate { screen: target, payload: Some(next) }] = actions.as_slice() else {
            panic!("unexpected actions: {actions:?}");
        };
        assert_eq!(*target, Screen::SeatSelection);
        assert_eq!(next.passengers, Some(2));
        assert_eq!(next.destination.as_deref(), Some("Holhol"));
        assert_eq!(next.selected_trip.as_ref().map(|t| t.id), Some(2));
    }

    #[test]
    fn back_goes_home() {
        let mut screen = ResultsScreen::new(payload());
        assert_eq!(
            screen.on_key(key(KeyCode::Esc)),
            vec![Action::navigate(Screen::Home)]
        );
    }

    #[test]
    fn filters_need_the_panel_open() {
        let mut screen = ResultsScreen::new(payload());
        screen.on_key(key(KeyCode::Char('s')));
        assert_eq!(screen.sort, Sort::Departure);

        screen.on_key(key(KeyCode::Char('f')));
        screen.on_key(key(KeyCode::Char('s')));
        let prices: Vec<u32> = screen.visible().iter().map(|t| t.price).collect();
        assert_eq!(prices, vec![22, 25, 28]);
    }

    #[test]
    fn class_filter_cycles_back_to_all() {
        let mut screen = ResultsScreen::new(payload());
        screen.on_key(key(KeyCode::Char('f')));

        screen.on_key(key(KeyCode::Char('c')));
        assert_eq!(screen.visible().len(), 1);
        assert_eq!(screen.visible()[0].class, TripClass::Express);

        for _ in 0..3 {
            screen.on_key(key(KeyCode::Char('c')));
        }
        assert_eq!(screen.class, None);
        assert_eq!(screen.visible().len(), 3);
    }
}

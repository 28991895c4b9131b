//! Booking flow state: the search payload threaded through navigation.
//!
//! The payload starts life when the search form is submitted and picks up
//! the chosen trip and seats as the traveller moves through
//! `search-results → seat-selection → payment`. Each step builds the next
//! payload as a shallow merge of the previous one and its own fields.

use jiff::civil::Date;

use crate::i18n::Strings;

/// Stations served by the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Station {
    Djibouti,
    DireDawa,
    Nagad,
    Holhol,
    AliSabieh,
    Dawaleh,
}

impl Station {
    pub const ALL: [Self; 6] = [
        Self::Djibouti,
        Self::DireDawa,
        Self::Nagad,
        Self::Holhol,
        Self::AliSabieh,
        Self::Dawaleh,
    ];

    /// Display label. Station names are the same in both languages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Djibouti => "Djibouti",
            Self::DireDawa => "Dire-dawa",
            Self::Nagad => "Nagad Djibouti",
            Self::Holhol => "Holhol",
            Self::AliSabieh => "Ali-sabieh",
            Self::Dawaleh => "Dawaleh",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TripType {
    #[default]
    OneWay,
    RoundTrip,
}

impl TripType {
    pub fn label(self, s: &Strings) -> &'static str {
        match self {
            Self::OneWay => s.one_way,
            Self::RoundTrip => s.round_trip,
        }
    }
}

/// Service class of a departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripClass {
    Express,
    Standard,
    Couchettes,
}

impl TripClass {
    pub const ALL: [Self; 3] = [Self::Express, Self::Standard, Self::Couchettes];

    pub fn label(self) -> &'static str {
        match self {
            Self::Express => "Express",
            Self::Standard => "Standard",
            Self::Couchettes => "Couchettes",
        }
    }
}

/// A bookable departure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    pub id: u32,
    pub origin: String,
    pub destination: String,
    pub departure: &'static str,
    pub arrival: &'static str,
    pub duration: &'static str,
    /// Fare per passenger, in whole US dollars.
    pub price: u32,
    pub seats_available: u32,
    pub class: TripClass,
}

/// Booking data accumulated across the booking screens.
///
/// Every field is optional: the payload is never validated as a whole, and
/// screens fall back to catalog defaults for whatever is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPayload {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub departure_date: Option<Date>,
    pub return_date: Option<Date>,
    pub passengers: Option<u32>,
    pub trip_type: Option<TripType>,
    pub selected_trip: Option<Trip>,
    pub selected_seats: Vec<String>,
}

impl SearchPayload {
    /// Number of travellers, 1 when the payload doesn't say.
    pub fn passengers(&self) -> u32 {
        self.passengers.unwrap_or(1)
    }

    /// This payload with `trip` chosen.
    #[must_use]
    pub fn with_trip(&self, trip: Trip) -> Self {
        Self {
            selected_trip: Some(trip),
            ..self.clone()
        }
    }

    /// This payload with `seats` chosen.
    #[must_use]
    pub fn with_seats(&self, seats: Vec<String>) -> Self {
        Self {
            selected_seats: seats,
            ..self.clone()
        }
    }
}

/// Why a search was refused. Shown as a blocking alert; no navigation happens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("origin, destination and departure date are required")]
    MissingFields,

    #[error("origin and destination must differ")]
    SameStation,

    #[error("invalid date: {0}")]
    InvalidDate(String),
}

impl SearchError {
    pub fn message(&self, s: &Strings) -> &'static str {
        match self {
            Self::MissingFields => s.fill_required_fields,
            Self::SameStation => s.stations_must_differ,
            Self::InvalidDate(_) => s.invalid_date,
        }
    }
}

/// Largest party the search form accepts.
pub const MAX_PASSENGERS: u32 = 6;

/// The search form on the home screen.
#[derive(Debug, Clone)]
pub struct SearchForm {
    pub origin: Option<Station>,
    pub destination: Option<Station>,
    /// `YYYY-MM-DD`, as typed.
    pub departure_date: String,
    /// `YYYY-MM-DD`, as typed. Only read for round trips.
    pub return_date: String,
    pub passengers: u32,
    pub trip_type: TripType,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            origin: None,
            destination: None,
            departure_date: String::new(),
            return_date: String::new(),
            passengers: 1,
            trip_type: TripType::OneWay,
        }
    }
}

impl SearchForm {
    /// Validates the form and builds the payload for `search-results`.
    pub fn submit(&self) -> Result<SearchPayload, SearchError> {
        let departure = self.departure_date.trim();
        let (Some(origin), Some(destination)) = (self.origin, self.destination) else {
            return Err(SearchError::MissingFields);
        };
        if departure.is_empty() {
            return Err(SearchError::MissingFields);
        }
        if origin == destination {
            return Err(SearchError::SameStation);
        }

        let departure_date = parse_date(departure)?;
        let return_date = match self.trip_type {
            TripType::RoundTrip if !self.return_date.trim().is_empty() => {
                Some(parse_date(self.return_date.trim())?)
            }
            _ => None,
        };

        Ok(SearchPayload {
            origin: Some(origin.label().to_string()),
            destination: Some(destination.label().to_string()),
            departure_date: Some(departure_date),
            return_date,
            passengers: Some(self.passengers),
            trip_type: Some(self.trip_type),
            selected_trip: None,
            selected_seats: Vec::new(),
        })
    }

    pub fn increment_passengers(&mut self) {
        if self.passengers < MAX_PASSENGERS {
            self.passengers += 1;
        }
    }

    pub fn decrement_passengers(&mut self) {
        if self.passengers > 1 {
            self.passengers -= 1;
        }
    }
}

fn parse_date(text: &str) -> Result<Date, SearchError> {
    text.parse::<Date>()
        .map_err(|_| SearchError::InvalidDate(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;

    fn filled_form() -> SearchForm {
        SearchForm {
            origin: Some(Station::Djibouti),
            destination: Some(Station::DireDawa),
            departure_date: "2025-01-15".into(),
            ..SearchForm::default()
        }
    }

    fn sample_trip() -> Trip {
        Trip {
            id: 1,
            origin: "Djibouti".into(),
            destination: "Dire-dawa".into(),
            departure: "08:00",
            arrival: "20:00",
            duration: "12h",
            price: 25,
            seats_available: 45,
            class: TripClass::Express,
        }
    }

    #[test]
    fn submit_builds_payload_with_labels() {
        let payload = filled_form().submit().unwrap();
        assert_eq!(payload.origin.as_deref(), Some("Djibouti"));
        assert_eq!(payload.destination.as_deref(), Some("Dire-dawa"));
        assert_eq!(payload.departure_date, Some(date(2025, 1, 15)));
        assert_eq!(payload.passengers(), 1);
        assert_eq!(payload.trip_type, Some(TripType::OneWay));
        assert!(payload.selected_trip.is_none());
    }

    #[test]
    fn same_station_is_rejected() {
        let mut form = filled_form();
        form.destination = Some(Station::Djibouti);
        assert_eq!(form.submit().unwrap_err(), SearchError::SameStation);
    }

    #[test]
    fn missing_fields_are_rejected() {
        let mut form = filled_form();
        form.origin = None;
        assert_eq!(form.submit().unwrap_err(), SearchError::MissingFields);

        let mut form = filled_form();
        form.departure_date = "   ".into();
        assert_eq!(form.submit().unwrap_err(), SearchError::MissingFields);
    }

    #[test]
    fn malformed_date_is_rejected() {
        let mut form = filled_form();
        form.departure_date = "15/01/2025".into();
        assert!(matches!(form.submit(), Err(SearchError::InvalidDate(_))));
    }

    #[test]
    fn return_date_only_kept_for_round_trips() {
        let mut form = filled_form();
        form.return_date = "2025-01-20".into();
        assert_eq!(form.submit().unwrap().return_date, None);

        form.trip_type = TripType::RoundTrip;
        assert_eq!(form.submit().unwrap().return_date, Some(date(2025, 1, 20)));
    }

    #[test]
    fn passenger_count_is_bounded() {
        let mut form = SearchForm::default();
        form.decrement_passengers();
        assert_eq!(form.passengers, 1);
        for _ in 0..10 {
            form.increment_passengers();
        }
        assert_eq!(form.passengers, MAX_PASSENGERS);
    }

    #[test]
    fn merges_keep_earlier_fields() {
        let payload = filled_form().submit().unwrap();
        let with_trip = payload.with_trip(sample_trip());
        let with_seats = with_trip.with_seats(vec!["2A".into()]);

        assert_eq!(with_seats.origin, payload.origin);
        assert_eq!(with_seats.departure_date, payload.departure_date);
        assert_eq!(with_seats.selected_trip, Some(sample_trip()));
        assert_eq!(with_seats.selected_seats, vec!["2A".to_string()]);
    }

    #[test]
    fn empty_payload_defaults_to_one_passenger() {
        assert_eq!(SearchPayload::default().passengers(), 1);
    }
}

//! Navigation: which screen is showing and the booking payload it carries.
//!
//! There is no history stack. Back buttons name their target and re-supply
//! the payload they were given.

use tracing::debug;

use crate::model::{Screen, SearchPayload, UnknownScreen};

#[derive(Debug, Clone)]
pub struct Navigator {
    screen: Screen,
    payload: Option<SearchPayload>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Starts on the loading screen with no payload.
    pub fn new() -> Self {
        Self {
            screen: Screen::Loading,
            payload: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn payload(&self) -> Option<&SearchPayload> {
        self.payload.as_ref()
    }

    /// Shows `screen`, replacing the carried payload when one is given.
    ///
    /// The payload is replaced wholesale; callers merge beforehand. Asking
    /// for `home` while signed out lands on `login` instead. Returns the
    /// screen actually shown.
    pub fn navigate(
        &mut self,
        screen: Screen,
        payload: Option<SearchPayload>,
        authenticated: bool,
    ) -> Screen {
        let target = if screen == Screen::Home && !authenticated {
            debug!("home requested while signed out, redirecting to login");
            Screen::Login
        } else {
            screen
        };

        debug!(from = %self.screen, to = %target, with_payload = payload.is_some(), "navigate");
        self.screen = target;
        if payload.is_some() {
            self.payload = payload;
        }
        target
    }

    /// Like [`navigate`](Self::navigate), from a screen identifier.
    ///
    /// An unknown identifier changes nothing.
    pub fn navigate_named(
        &mut self,
        name: &str,
        payload: Option<SearchPayload>,
        authenticated: bool,
    ) -> Result<Screen, UnknownScreen> {
        let screen = name.parse()?;
        Ok(self.navigate(screen, payload, authenticated))
    }

    /// Active index of the booking step indicator.
    pub fn booking_step(&self) -> usize {
        self.screen.booking_step()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(origin: &str) -> SearchPayload {
        SearchPayload {
            origin: Some(origin.into()),
            ..SearchPayload::default()
        }
    }

    #[test]
    fn starts_loading_without_payload() {
        let nav = Navigator::new();
        assert_eq!(nav.screen(), Screen::Loading);
        assert!(nav.payload().is_none());
    }

    #[test]
    fn unknown_identifier_changes_nothing() {
        let mut nav = Navigator::new();
        nav.navigate(Screen::Tickets, Some(payload("Holhol")), true);

        for name in ["checkout", "HOME", "search_results", ""] {
            assert!(nav.navigate_named(name, Some(payload("Nagad")), true).is_err());
            assert_eq!(nav.screen(), Screen::Tickets);
            assert_eq!(nav.payload(), Some(&payload("Holhol")));
        }
    }

    #[test]
    fn known_identifier_navigates() {
        let mut nav = Navigator::new();
        let shown = nav.navigate_named("seat-selection", None, true).unwrap();
        assert_eq!(shown, Screen::SeatSelection);
        assert_eq!(nav.booking_step(), 2);
    }

    #[test]
    fn payload_is_replaced_not_merged() {
        let mut nav = Navigator::new();
        let mut first = payload("Djibouti");
        first.passengers = Some(3);
        nav.navigate(Screen::SearchResults, Some(first), true);
        nav.navigate(Screen::SeatSelection, Some(payload("Holhol")), true);

        let carried = nav.payload().unwrap();
        assert_eq!(carried.origin.as_deref(), Some("Holhol"));
        assert_eq!(carried.passengers, None);
    }

    #[test]
    fn no_payload_keeps_the_previous_one() {
        let mut nav = Navigator::new();
        nav.navigate(Screen::SearchResults, Some(payload("Djibouti")), true);
        nav.navigate(Screen::Notifications, None, true);
        assert_eq!(nav.payload(), Some(&payload("Djibouti")));
    }

    #[test]
    fn home_redirects_to_login_when_signed_out() {
        let mut nav = Navigator::new();
        assert_eq!(nav.navigate(Screen::Home, None, false), Screen::Login);
        assert_eq!(nav.screen(), Screen::Login);

        assert_eq!(nav.navigate(Screen::Home, None, true), Screen::Home);
    }

    #[test]
    fn only_home_is_gated() {
        let mut nav = Navigator::new();
        assert_eq!(nav.navigate(Screen::Search, None, false), Screen::Search);
        assert_eq!(nav.navigate(Screen::Tickets, None, false), Screen::Tickets);
    }
}

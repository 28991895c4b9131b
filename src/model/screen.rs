//! Screen identifiers: the closed set of full-page views.

use std::fmt;
use std::str::FromStr;

/// One named full-page view. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Loading,
    Splash,
    Login,
    Otp,
    Home,
    Tickets,
    Settings,
    Profile,
    Payment,
    SearchResults,
    SeatSelection,
    Notifications,
    Search,
    BaggageTracking,
    BaggageScan,
}

/// An identifier outside the closed screen set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown screen: {0}")]
pub struct UnknownScreen(pub String);

impl Screen {
    pub const ALL: [Self; 15] = [
        Self::Loading,
        Self::Splash,
        Self::Login,
        Self::Otp,
        Self::Home,
        Self::Tickets,
        Self::Settings,
        Self::Profile,
        Self::Payment,
        Self::SearchResults,
        Self::SeatSelection,
        Self::Notifications,
        Self::Search,
        Self::BaggageTracking,
        Self::BaggageScan,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Splash => "splash",
            Self::Login => "login",
            Self::Otp => "otp",
            Self::Home => "home",
            Self::Tickets => "tickets",
            Self::Settings => "settings",
            Self::Profile => "profile",
            Self::Payment => "payment",
            Self::SearchResults => "search-results",
            Self::SeatSelection => "seat-selection",
            Self::Notifications => "notifications",
            Self::Search => "search",
            Self::BaggageTracking => "baggage-tracking",
            Self::BaggageScan => "baggage-scan",
        }
    }

    /// Active index of the three-step booking indicator.
    ///
    /// Derived from the screen alone, never from how much of the payload is
    /// filled in.
    pub fn booking_step(self) -> usize {
        match self {
            Self::SeatSelection => 2,
            Self::Payment => 3,
            _ => 1,
        }
    }

    /// Booking screens render the step indicator above their content.
    pub fn shows_stepper(self) -> bool {
        matches!(
            self,
            Self::SearchResults | Self::SeatSelection | Self::Payment
        )
    }

    /// Screens that carry the bottom tab bar (for signed-in users).
    pub fn shows_bottom_nav(self) -> bool {
        matches!(
            self,
            Self::Home | Self::Search | Self::Tickets | Self::Notifications | Self::Profile
        )
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Screen {
    type Err = UnknownScreen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|screen| screen.as_str() == s)
            .ok_or_else(|| UnknownScreen(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip() {
        for screen in Screen::ALL {
            assert_eq!(screen.as_str().parse::<Screen>().unwrap(), screen);
        }
    }

    #[test]
    fn rejects_unknown_identifier() {
        let err = "checkout".parse::<Screen>().unwrap_err();
        assert_eq!(err, UnknownScreen("checkout".into()));
        assert!("Search-Results".parse::<Screen>().is_err());
        assert!("".parse::<Screen>().is_err());
    }

    #[test]
    fn step_follows_screen_only() {
        assert_eq!(Screen::SearchResults.booking_step(), 1);
        assert_eq!(Screen::SeatSelection.booking_step(), 2);
        assert_eq!(Screen::Payment.booking_step(), 3);
        assert_eq!(Screen::Tickets.booking_step(), 1);
        assert_eq!(Screen::Home.booking_step(), 1);
    }

    #[test]
    fn bottom_nav_screens() {
        let with_nav: Vec<Screen> = Screen::ALL
            .into_iter()
            .filter(|s| s.shows_bottom_nav())
            .collect();
        assert_eq!(
            with_nav,
            vec![
                Screen::Home,
                Screen::Tickets,
                Screen::Profile,
                Screen::Notifications,
                Screen::Search
            ]
        );
    }
}

//! Screen rendering and input handling.

mod baggage_scan;
mod baggage_tracking;
mod home;
mod loading;
mod login;
mod notifications;
mod otp;
mod payment;
mod profile;
mod results;
mod seats;
mod settings;
mod sidebar;
mod splash;
mod tickets;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::model::Screen;
use crate::state::AppState;
use crate::timer::TimerEvent;

use super::action::Action;

pub use baggage_scan::BaggageScanScreen;
pub use baggage_tracking::BaggageTrackingScreen;
pub use home::HomeScreen;
pub use loading::LoadingScreen;
pub use login::LoginScreen;
pub use notifications::NotificationsScreen;
pub use otp::OtpScreen;
pub use payment::PaymentScreen;
pub use profile::ProfileScreen;
pub use results::ResultsScreen;
pub use seats::SeatsScreen;
pub use settings::SettingsScreen;
pub use sidebar::{Sidebar, SidebarOutcome};
pub use splash::SplashScreen;
pub use tickets::TicketsScreen;

/// The view behind the current [`Screen`], with its local state.
pub enum View {
    Loading(LoadingScreen),
    Splash(SplashScreen),
    Login(LoginScreen),
    Otp(OtpScreen),
    Home(HomeScreen),
    Results(ResultsScreen),
    Seats(SeatsScreen),
    Payment(PaymentScreen),
    Tickets(TicketsScreen),
    Notifications(NotificationsScreen),
    Settings(SettingsScreen),
    Profile(ProfileScreen),
    BaggageTracking(BaggageTrackingScreen),
    BaggageScan(BaggageScanScreen),
}

impl View {
    /// Fresh view for the screen `state` is on, seeded from the carried payload.
    pub fn build(state: &AppState) -> Self {
        let payload = || state.payload().cloned().unwrap_or_default();
        match state.screen() {
            Screen::Loading => Self::Loading(LoadingScreen),
            Screen::Splash => Self::Splash(SplashScreen),
            Screen::Login => Self::Login(LoginScreen::new()),
            Screen::Otp => Self::Otp(OtpScreen::new()),
            screen @ (Screen::Home | Screen::Search) => Self::Home(HomeScreen::new(screen)),
            Screen::SearchResults => Self::Results(ResultsScreen::new(payload())),
            Screen::SeatSelection => Self::Seats(SeatsScreen::new(payload())),
            Screen::Payment => Self::Payment(PaymentScreen::new(payload())),
            Screen::Tickets => Self::Tickets(TicketsScreen::new(state)),
            Screen::Notifications => Self::Notifications(NotificationsScreen::new()),
            Screen::Settings => Self::Settings(SettingsScreen::new()),
            Screen::Profile => Self::Profile(ProfileScreen::new(state)),
            Screen::BaggageTracking => Self::BaggageTracking(BaggageTrackingScreen::new()),
            Screen::BaggageScan => Self::BaggageScan(BaggageScanScreen::new()),
        }
    }

    /// Work to start as soon as the view is shown.
    pub fn on_enter(&self, state: &AppState) -> Vec<Action> {
        match self {
            Self::Loading(v) => v.on_enter(state),
            _ => Vec::new(),
        }
    }

    pub fn on_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        match self {
            Self::Loading(v) => v.on_key(key),
            Self::Splash(v) => v.on_key(key),
            Self::Login(v) => v.on_key(key, state),
            Self::Otp(v) => v.on_key(key, state),
            Self::Home(v) => v.on_key(key, state),
            Self::Results(v) => v.on_key(key),
            Self::Seats(v) => v.on_key(key),
            Self::Payment(v) => v.on_key(key, state),
            Self::Tickets(v) => v.on_key(key, state),
            Self::Notifications(v) => v.on_key(key, state),
            Self::Settings(v) => v.on_key(key, state),
            Self::Profile(v) => v.on_key(key),
            Self::BaggageTracking(v) => v.on_key(key, state),
            Self::BaggageScan(v) => v.on_key(key, state),
        }
    }

    pub fn on_timer(&mut self, event: TimerEvent, state: &AppState) -> Vec<Action> {
        match self {
            Self::Loading(v) => v.on_timer(event),
            Self::Payment(v) => v.on_timer(event, state),
            Self::BaggageScan(v) => v.on_timer(event),
            _ => Vec::new(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        match self {
            Self::Loading(v) => v.render(frame, area, state),
            Self::Splash(v) => v.render(frame, area, state),
            Self::Login(v) => v.render(frame, area, state),
            Self::Otp(v) => v.render(frame, area, state),
            Self::Home(v) => v.render(frame, area, state),
            Self::Results(v) => v.render(frame, area, state),
            Self::Seats(v) => v.render(frame, area, state),
            Self::Payment(v) => v.render(frame, area, state),
            Self::Tickets(v) => v.render(frame, area, state),
            Self::Notifications(v) => v.render(frame, area, state),
            Self::Settings(v) => v.render(frame, area, state),
            Self::Profile(v) => v.render(frame, area, state),
            Self::BaggageTracking(v) => v.render(frame, area, state),
            Self::BaggageScan(v) => v.render(frame, area, state),
        }
    }
}

#[cfg(test)]
pub(crate) fn key(code: crossterm::event::KeyCode) -> KeyEvent {
    KeyEvent::new(code, crossterm::event::KeyModifiers::NONE)
}

/// Sends each character of `text` as a key press.
#[cfg(test)]
pub(crate) fn type_text(mut send: impl FnMut(KeyEvent) -> Vec<Action>, text: &str) {
    for c in text.chars() {
        send(key(crossterm::event::KeyCode::Char(c)));
    }
}

#[cfg(test)]
pub(crate) fn test_state() -> (tempfile::TempDir, AppState) {
    use crate::config::Config;
    use crate::prefs::Preferences;
    use crate::storage::Storage;

    let dir = tempfile::TempDir::new().unwrap();
    let prefs = Preferences::load(Storage::new(dir.path()).unwrap()).unwrap();
    (dir, AppState::new(Config::default(), prefs))
}

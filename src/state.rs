//! Application state shared by every view.
//!
//! Views never hold on to this. They read it through a shared reference
//! while rendering and ask for changes through the setters here, which are
//! the only mutation path.

use std::time::{Duration, Instant};

use tracing::info;

use crate::config::Config;
use crate::currency::Currency;
use crate::i18n::{Language, Strings};
use crate::model::{Screen, SearchPayload, UnknownScreen, User};
use crate::navigation::Navigator;
use crate::prefs::Preferences;
use crate::storage;
use crate::timer::{TimerEvent, Timers};

#[derive(Debug)]
pub struct AppState {
    config: Config,
    prefs: Preferences,
    nav: Navigator,
    timers: Timers,
    /// Account waiting for OTP verification.
    pending_signup: Option<User>,
}

impl AppState {
    pub fn new(config: Config, prefs: Preferences) -> Self {
        Self {
            config,
            prefs,
            nav: Navigator::new(),
            timers: Timers::new(),
            pending_signup: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }

    pub fn strings(&self) -> &'static Strings {
        self.prefs.strings()
    }

    pub fn screen(&self) -> Screen {
        self.nav.screen()
    }

    pub fn payload(&self) -> Option<&SearchPayload> {
        self.nav.payload()
    }

    pub fn booking_step(&self) -> usize {
        self.nav.booking_step()
    }

    // ── Navigation ──

    /// Switches screens. Timers belonging to the outgoing view are cancelled.
    pub fn navigate(&mut self, screen: Screen, payload: Option<SearchPayload>) -> Screen {
        self.timers.cancel_all();
        self.nav
            .navigate(screen, payload, self.prefs.is_authenticated())
    }

    /// Switches screens by identifier. Unknown identifiers change nothing.
    pub fn navigate_named(
        &mut self,
        name: &str,
        payload: Option<SearchPayload>,
    ) -> Result<Screen, UnknownScreen> {
        let screen = self
            .nav
            .navigate_named(name, payload, self.prefs.is_authenticated())?;
        self.timers.cancel_all();
        Ok(screen)
    }

    // ── Preferences ──

    pub fn set_language(&mut self, language: Language) -> storage::Result<()> {
        self.prefs.set_language(language)
    }

    pub fn set_currency(&mut self, currency: Currency) -> storage::Result<()> {
        self.prefs.set_currency(currency)
    }

    pub fn toggle_language(&mut self) -> storage::Result<()> {
        self.prefs.toggle_language()
    }

    pub fn toggle_currency(&mut self) -> storage::Result<()> {
        self.prefs.toggle_currency()
    }

    // ── Account ──

    pub fn sign_in(&mut self, user: User) -> storage::Result<()> {
        self.prefs.set_user(Some(user))
    }

    /// Signs out and lands on the login screen.
    pub fn sign_out(&mut self) -> storage::Result<()> {
        self.prefs.set_user(None)?;
        self.navigate(Screen::Login, None);
        Ok(())
    }

    /// Holds a freshly registered account until its OTP is verified.
    pub fn begin_signup(&mut self, user: User) {
        info!(user_id = %user.id, "sign-up awaiting OTP");
        self.pending_signup = Some(user);
    }

    /// Signs in the account waiting for OTP, if there is one.
    ///
    /// The account stays pending when the save fails, so the OTP can be
    /// submitted again.
    pub fn complete_signup(&mut self) -> storage::Result<bool> {
        let Some(user) = self.pending_signup.clone() else {
            return Ok(false);
        };
        self.sign_in(user)?;
        self.pending_signup = None;
        Ok(true)
    }

    // ── Timers ──

    pub fn schedule(&mut self, now: Instant, delay: Duration, event: TimerEvent) {
        self.timers.schedule(now, delay, event);
    }

    pub fn cancel_timer(&mut self, event: TimerEvent) {
        self.timers.cancel(event);
    }

    pub fn take_due_timers(&mut self, now: Instant) -> Vec<TimerEvent> {
        self.timers.take_due(now)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }
}

//! Actions produced by views for the runtime to apply.
//!
//! Views never touch [`AppState`](crate::state::AppState) directly. Input and
//! timer handlers return actions, and the runtime applies them in order.

use std::time::Duration;

use crate::currency::Currency;
use crate::i18n::Language;
use crate::model::{Screen, SearchPayload, User};
use crate::timer::TimerEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Switch screens, optionally replacing the carried payload.
    Navigate {
        screen: Screen,
        payload: Option<SearchPayload>,
    },

    SetLanguage(Language),
    ToggleLanguage,
    SetCurrency(Currency),
    ToggleCurrency,

    /// Store `user` as the signed-in user (login, profile edits).
    SetUser(User),

    /// Hold a new account until its OTP is verified.
    BeginSignup(User),

    /// Sign in the account waiting for OTP.
    CompleteSignup,

    SignOut,

    /// Fire `event` at the current view after `delay`.
    Schedule { delay: Duration, event: TimerEvent },

    CancelTimer(TimerEvent),

    /// Blocking message, dismissed with any key.
    Alert(String),
}

impl Action {
    pub fn navigate(screen: Screen) -> Self {
        Self::Navigate {
            screen,
            payload: None,
        }
    }

    pub fn navigate_with(screen: Screen, payload: SearchPayload) -> Self {
        Self::Navigate {
            screen,
            payload: Some(payload),
        }
    }

    pub fn alert(message: impl Into<String>) -> Self {
        Self::Alert(message.into())
    }
}

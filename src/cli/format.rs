//! Output formatting for CLI display.

use crate::currency::{self, Currency};
use crate::prefs::Preferences;

/// Stored preferences, one `key: value` per line.
pub(super) fn format_prefs(prefs: &Preferences) -> String {
    let language = prefs.language();
    let user = match prefs.user() {
        Some(user) => format!("{} <{}>", user.name, user.email),
        None => "(signed out)".to_string(),
    };
    format!(
        "language: {} ({})\ncurrency: {}\nuser:     {user}\n",
        language.code(),
        language.native_name(),
        prefs.currency(),
    )
}

/// `amount` converted from `from` to `to`, formatted in the target currency.
///
/// An unknown target code keeps two decimals and echoes the code.
pub(super) fn format_conversion(amount: f64, from: &str, to: &str) -> String {
    let converted = currency::convert_codes(amount, from, to);
    match to.parse::<Currency>() {
        Ok(target) => currency::format(converted, target),
        Err(_) => format!("{converted:.2} {to}"),
    }
}

//! Display currencies and the fixed USD/DJF conversion.
//!
//! Every price in the catalog is held in whole US dollars. Screens convert
//! to the preferred display currency right before formatting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Djibouti francs per US dollar.
pub const USD_TO_DJF_RATE: f64 = 177.0;

/// A currency the client can display prices in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "DJF")]
    Djf,
}

/// A currency code that is neither `USD` nor `DJF`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown currency: {0} (expected USD or DJF)")]
pub struct ParseCurrencyError(pub String);

impl Currency {
    pub fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Djf => "DJF",
        }
    }

    /// The other currency. Used by the sidebar toggle.
    pub fn toggled(self) -> Self {
        match self {
            Self::Usd => Self::Djf,
            Self::Djf => Self::Usd,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ParseCurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USD" => Ok(Self::Usd),
            "DJF" => Ok(Self::Djf),
            other => Err(ParseCurrencyError(other.to_string())),
        }
    }
}

/// Converts `amount` between the two supported currencies.
pub fn convert(amount: f64, from: Currency, to: Currency) -> f64 {
    match (from, to) {
        (Currency::Usd, Currency::Djf) => amount * USD_TO_DJF_RATE,
        (Currency::Djf, Currency::Usd) => amount / USD_TO_DJF_RATE,
        _ => amount,
    }
}

/// Converts between raw currency codes.
///
/// Any pair that isn't USD/DJF in either direction comes back unchanged.
pub fn convert_codes(amount: f64, from: &str, to: &str) -> f64 {
    match (from.parse(), to.parse()) {
        (Ok(from), Ok(to)) => convert(amount, from, to),
        _ => amount,
    }
}

/// Formats an amount already expressed in `currency`.
///
/// Dollars keep two decimals behind a leading `$`; francs are rounded to the
/// nearest unit and carry a trailing `DJF`.
pub fn format(amount: f64, currency: Currency) -> String {
    match currency {
        Currency::Usd => format!("${amount:.2}"),
        Currency::Djf => format!("{} DJF", amount.round()),
    }
}

/// Formats a catalog price (in USD) for display in `currency`.
pub fn display_price(usd: u32, currency: Currency) -> String {
    format(convert(f64::from(usd), Currency::Usd, currency), currency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_currency_is_identity() {
        assert!((convert(12.5, Currency::Usd, Currency::Usd) - 12.5).abs() < f64::EPSILON);
        assert!((convert(300.0, Currency::Djf, Currency::Djf) - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn twenty_five_dollars_in_francs() {
        let djf = convert(25.0, Currency::Usd, Currency::Djf);
        assert!((djf - 4425.0).abs() < f64::EPSILON);
        assert_eq!(format(djf, Currency::Djf), "4425 DJF");
    }

    #[test]
    fn round_trip_returns_original_amount() {
        for amount in [0.0, 1.0, 8.0, 22.0, 25.5, 1234.56] {
            let back = convert(
                convert(amount, Currency::Usd, Currency::Djf),
                Currency::Djf,
                Currency::Usd,
            );
            assert!((back - amount).abs() < 1e-9, "{amount} came back as {back}");
        }
    }

    #[test]
    fn unknown_codes_pass_through() {
        assert!((convert_codes(10.0, "EUR", "DJF") - 10.0).abs() < f64::EPSILON);
        assert!((convert_codes(10.0, "USD", "ETB") - 10.0).abs() < f64::EPSILON);
        assert!((convert_codes(10.0, "USD", "DJF") - 1770.0).abs() < f64::EPSILON);
    }

    #[test]
    fn dollar_format_keeps_two_decimals() {
        assert_eq!(format(25.0, Currency::Usd), "$25.00");
        assert_eq!(format(2.5, Currency::Usd), "$2.50");
    }

    #[test]
    fn franc_format_rounds() {
        assert_eq!(format(141.2, Currency::Djf), "141 DJF");
        assert_eq!(format(141.6, Currency::Djf), "142 DJF");
    }

    #[test]
    fn display_price_converts_first() {
        assert_eq!(display_price(8, Currency::Usd), "$8.00");
        assert_eq!(display_price(8, Currency::Djf), "1416 DJF");
    }

    #[test]
    fn parses_codes() {
        assert_eq!("USD".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!("DJF".parse::<Currency>().unwrap(), Currency::Djf);
        assert!("usd".parse::<Currency>().is_err());
    }
}

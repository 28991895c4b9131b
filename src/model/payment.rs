//! Order totals and payment form validation.
//!
//! Payment is simulated: once the form validates, processing always succeeds.

use jiff::civil::{Date, date};

use crate::i18n::Strings;

use super::{SearchPayload, TripType};

/// Fare used when the payload carries no trip.
const DEFAULT_FARE: u32 = 25;
const DEFAULT_ORIGIN: &str = "Djibouti";
const DEFAULT_DESTINATION: &str = "Dire-dawa";
const DEFAULT_DATE: Date = date(2025, 1, 15);
const DEFAULT_TIME: &str = "08:00";

/// What the traveller is about to pay for. All amounts in whole US dollars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub origin: String,
    pub destination: String,
    pub date: Date,
    pub time: String,
    pub passengers: u32,
    pub seats: Vec<String>,
    pub trip_type: TripType,
    /// Fare × passengers.
    pub subtotal: u32,
    /// 10 % of the subtotal, rounded up to the next dollar.
    pub service_fee: u32,
    pub total: u32,
}

impl OrderSummary {
    pub fn from_payload(payload: &SearchPayload) -> Self {
        let fare = payload
            .selected_trip
            .as_ref()
            .map_or(DEFAULT_FARE, |trip| trip.price);
        let passengers = payload.passengers();
        let subtotal = fare * passengers;
        let service_fee = service_fee(subtotal);

        Self {
            origin: payload
                .origin
                .clone()
                .unwrap_or_else(|| DEFAULT_ORIGIN.to_string()),
            destination: payload
                .destination
                .clone()
                .unwrap_or_else(|| DEFAULT_DESTINATION.to_string()),
            date: payload.departure_date.unwrap_or(DEFAULT_DATE),
            time: payload
                .selected_trip
                .as_ref()
                .map_or(DEFAULT_TIME, |trip| trip.departure)
                .to_string(),
            passengers,
            seats: payload.selected_seats.clone(),
            trip_type: payload.trip_type.unwrap_or_default(),
            subtotal,
            service_fee,
            total: subtotal + service_fee,
        }
    }
}

/// Ten percent, rounded up to a whole unit.
pub fn service_fee(subtotal: u32) -> u32 {
    subtotal.div_ceil(10)
}

/// Ways to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Waafi,
    DMoney,
    Card,
}

impl PaymentMethod {
    pub const ALL: [Self; 3] = [Self::Waafi, Self::DMoney, Self::Card];

    pub fn name(self, s: &Strings) -> &'static str {
        match self {
            Self::Waafi => s.waafi,
            Self::DMoney => s.dmoney,
            Self::Card => s.credit_card,
        }
    }

    pub fn description(self, s: &Strings) -> &'static str {
        match self {
            Self::Waafi => s.waafi_description,
            Self::DMoney => s.dmoney_description,
            Self::Card => "Visa, Mastercard",
        }
    }

    /// Mobile wallets take a phone number and PIN instead of card details.
    pub fn is_mobile(self) -> bool {
        matches!(self, Self::Waafi | Self::DMoney)
    }
}

pub const PIN_MAX_LEN: usize = 4;
pub const CVV_MAX_LEN: usize = 3;

/// Why a payment submission was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PaymentError {
    #[error("no payment method selected")]
    NoMethod,

    #[error("phone number and PIN are required")]
    MissingMobileFields,

    #[error("all card fields are required")]
    MissingCardFields,
}

impl PaymentError {
    pub fn message(self, s: &Strings) -> &'static str {
        match self {
            Self::NoMethod => s.select_payment_method,
            Self::MissingMobileFields => s.fill_required_fields,
            Self::MissingCardFields => s.fill_card_fields,
        }
    }
}

/// Everything typed into the payment form.
#[derive(Debug, Clone, Default)]
pub struct PaymentDetails {
    pub phone_number: String,
    pub pin_code: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub card_holder: String,
}

impl PaymentDetails {
    /// Checks the fields the chosen method needs. Nothing else is verified.
    pub fn validate(&self, method: Option<PaymentMethod>) -> Result<PaymentMethod, PaymentError> {
        let method = method.ok_or(PaymentError::NoMethod)?;
        let missing = |fields: &[&String]| fields.iter().any(|f| f.trim().is_empty());

        if method.is_mobile() {
            if missing(&[&self.phone_number, &self.pin_code]) {
                return Err(PaymentError::MissingMobileFields);
            }
        } else if missing(&[
            &self.card_number,
            &self.expiry_date,
            &self.cvv,
            &self.card_holder,
        ]) {
            return Err(PaymentError::MissingCardFields);
        }
        Ok(method)
    }
}

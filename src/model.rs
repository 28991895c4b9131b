//! Core data model for EDR.
//!
//! Screens, the booking payload threaded between them, seats, payment and
//! the signed-in user.

mod booking;
mod payment;
mod screen;
mod seat;
mod user;

pub use booking::{
    MAX_PASSENGERS, SearchForm, SearchPayload, Station, Trip, TripClass, TripType,
};
pub use payment::{CVV_MAX_LEN, OrderSummary, PIN_MAX_LEN, PaymentDetails, PaymentMethod};
pub use screen::{Screen, UnknownScreen};
pub use seat::{ROWS, SEATS_PER_ROW, Seat, SeatError, SeatSelection, Toggled, seat_code};
pub use user::{LoginForm, Nationality, SignupForm, User};

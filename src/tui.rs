//! Terminal UI for EDR.
//!
//! Screens are pure with respect to [`AppState`](crate::state::AppState):
//! they read it while rendering and return actions from key and timer
//! handlers. The runtime in [`app`] applies those actions, so every change
//! to shared state goes through its setters.

mod action;
mod app;
mod input;
mod screens;
mod widgets;

pub use app::run;

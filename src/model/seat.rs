//! Coach seat map and the traveller's seat selection.

use crate::i18n::Strings;

pub const ROWS: u32 = 15;
pub const SEATS_PER_ROW: u32 = 4;

/// Seats that are always taken.
pub const OCCUPIED: [&str; 15] = [
    "1A", "1B", "2C", "3D", "4A", "5B", "6C", "7D", "8A", "9B", "10C", "11D", "12A", "13B",
    "14C",
];

/// One seat as drawn on the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    /// Row number followed by letter, e.g. `"10C"`.
    pub code: String,
    pub occupied: bool,
    pub selected: bool,
}

/// Why a seat toggle was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatError {
    #[error("no seat {0} on this coach")]
    UnknownSeat(String),

    #[error("seat {0} is already taken")]
    Occupied(String),

    #[error("all {0} seat(s) already selected")]
    SelectionFull(u32),
}

/// What a successful toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Selected,
    Deselected,
}

/// Seat code for a zero-based row and column.
pub fn seat_code(row: u32, column: u32) -> String {
    let letter = char::from(b'A' + u8::try_from(column).unwrap_or(0));
    format!("{}{letter}", row + 1)
}

pub fn is_occupied(code: &str) -> bool {
    OCCUPIED.contains(&code)
}

fn on_map(code: &str) -> bool {
    (0..ROWS).any(|row| (0..SEATS_PER_ROW).any(|column| seat_code(row, column) == code))
}

/// The seats picked so far, capped at one per passenger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatSelection {
    passengers: u32,
    selected: Vec<String>,
}

impl SeatSelection {
    /// Starts a selection, keeping whichever `initial` seats are still valid.
    pub fn new(passengers: u32, initial: &[String]) -> Self {
        let mut selection = Self {
            passengers,
            selected: Vec::new(),
        };
        for code in initial {
            // Seats restored from the payload go through the same rules.
            let _ = selection.toggle(code);
        }
        selection
    }

    /// Adds or removes `code`.
    ///
    /// Deselecting always succeeds. Selecting is refused for occupied seats
    /// and once every passenger has a seat.
    pub fn toggle(&mut self, code: &str) -> Result<Toggled, SeatError> {
        if let Some(index) = self.selected.iter().position(|s| s == code) {
            self.selected.remove(index);
            return Ok(Toggled::Deselected);
        }
        if !on_map(code) {
            return Err(SeatError::UnknownSeat(code.to_string()));
        }
        if is_occupied(code) {
            return Err(SeatError::Occupied(code.to_string()));
        }
        if self.selected.len() >= self.passengers as usize {
            return Err(SeatError::SelectionFull(self.passengers));
        }
        self.selected.push(code.to_string());
        Ok(Toggled::Selected)
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn passengers(&self) -> u32 {
        self.passengers
    }

    /// Seats still to pick before payment.
    pub fn remaining(&self) -> u32 {
        let picked = u32::try_from(self.selected.len()).unwrap_or(u32::MAX);
        self.passengers.saturating_sub(picked)
    }

    /// Exactly one seat per passenger.
    pub fn can_continue(&self) -> bool {
        self.selected.len() == self.passengers as usize
    }

    /// The map, rebuilt from the occupied set and the current selection.
    pub fn rows(&self) -> Vec<Vec<Seat>> {
        (0..ROWS)
            .map(|row| {
                (0..SEATS_PER_ROW)
                    .map(|column| {
                        let code = seat_code(row, column);
                        Seat {
                            occupied: is_occupied(&code),
                            selected: self.selected.contains(&code),
                            code,
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Label of the continue button: the seats, or how many are missing.
    pub fn continue_label(&self, s: &Strings) -> String {
        if self.can_continue() {
            format!("{} ({})", s.continue_to_payment, self.selected.join(", "))
        } else {
            (s.select_more_seats)(self.remaining())
        }
    }
}

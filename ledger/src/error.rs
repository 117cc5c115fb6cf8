//! Errors reported by the reservation ledger.
//!
//! Every variant is recoverable: the ledger is left unchanged and the menu
//! prints the message. The `Display` text is what the passenger sees.

use crate::types::SeatNumber;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a booking, cancellation, or ledger construction is refused.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerError {
    /// Seat number outside `1..=total`
    #[error("Invalid seat number!")]
    InvalidSeatNumber {
        /// Requested seat
        seat: SeatNumber,
        /// Number of seats on the train
        total: u32,
    },

    /// Seat already held by another passenger
    #[error("{seat} is already booked.")]
    SeatAlreadyBooked {
        /// Requested seat
        seat: SeatNumber,
    },

    /// No passenger on the roster has this name
    #[error("Passenger not found or no ticket booked.")]
    PassengerNotFound {
        /// Name that was looked up
        name: String,
    },

    /// Cancellation by seat for a seat nobody holds
    #[error("{seat} is not booked.")]
    SeatNotBooked {
        /// Requested seat
        seat: SeatNumber,
    },

    /// A train was configured with zero seats
    #[error("A train needs at least one seat")]
    NoSeats,

    /// A stored train whose seat table disagrees with its seat count or roster
    #[error("Seat table does not match the passenger roster")]
    SeatTableMismatch,
}

impl LedgerError {
    /// Short machine-readable reason, used as a metrics label
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidSeatNumber { .. } => "invalid_seat_number",
            Self::SeatAlreadyBooked { .. } => "seat_already_booked",
            Self::PassengerNotFound { .. } => "passenger_not_found",
            Self::SeatNotBooked { .. } => "seat_not_booked",
            Self::NoSeats => "no_seats",
            Self::SeatTableMismatch => "seat_table_mismatch",
        }
    }
}

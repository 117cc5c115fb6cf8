//! Domain types for the reservation ledger.
//!
//! Seat identity is carried as a number ([`SeatNumber`]); the `"Seat N"`
//! label is produced for display and never parsed back.

use crate::error::LedgerError;
use crate::train::Train;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Value Objects
// ============================================================================

/// A 1-based seat number on one train
///
/// Any `u32` can be represented; whether it names a real seat depends on the
/// train, which checks it on every booking and cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeatNumber(u32);

impl SeatNumber {
    /// Creates a new `SeatNumber`
    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    /// Returns the 1-based seat number
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Position in a seat table of `total` seats, or `None` when out of range
    #[must_use]
    pub fn index_in(self, total: u32) -> Option<usize> {
        if (1..=total).contains(&self.0) {
            usize::try_from(self.0 - 1).ok()
        } else {
            None
        }
    }
}

impl From<u32> for SeatNumber {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

impl fmt::Display for SeatNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Availability of a single seat
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatStatus {
    /// Nobody holds the seat
    Available,
    /// A passenger holds the seat
    Booked,
}

impl SeatStatus {
    pub(crate) const fn from_available(available: bool) -> Self {
        if available { Self::Available } else { Self::Booked }
    }
}

impl fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => f.write_str("Available"),
            Self::Booked => f.write_str("Booked"),
        }
    }
}

// ============================================================================
// Domain Entities
// ============================================================================

/// Booking details for one seat
///
/// Immutable once constructed; the ledger owns it while the booking lasts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    name: String,
    contact_number: String,
    seat: SeatNumber,
}

impl Passenger {
    /// Creates a passenger record. Values are stored verbatim.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        contact_number: impl Into<String>,
        seat: impl Into<SeatNumber>,
    ) -> Self {
        Self {
            name: name.into(),
            contact_number: contact_number.into(),
            seat: seat.into(),
        }
    }

    /// Passenger name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact number as entered
    #[must_use]
    pub fn contact_number(&self) -> &str {
        &self.contact_number
    }

    /// Seat held by this passenger
    #[must_use]
    pub const fn seat(&self) -> SeatNumber {
        self.seat
    }

    /// Display label for the seat, e.g. `"Seat 2"`
    #[must_use]
    pub fn seat_label(&self) -> String {
        self.seat.to_string()
    }
}

// ============================================================================
// State
// ============================================================================

/// State driven by the ledger reducer
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LedgerState {
    /// Seat table and passenger roster
    pub train: Train,
    /// Why the most recent command was refused, cleared on success
    pub last_error: Option<LedgerError>,
}

impl LedgerState {
    /// Wraps a freshly constructed train
    #[must_use]
    pub const fn new(train: Train) -> Self {
        Self {
            train,
            last_error: None,
        }
    }
}

// ============================================================================
// Actions
// ============================================================================

/// Commands and events for the ledger
///
/// Commands carry raw user input. The reducer validates them against the
/// train and turns them into events; events are what actually change state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LedgerAction {
    // ========== Commands ==========
    /// Command: book a seat for a passenger
    BookSeat {
        /// Passenger name
        name: String,
        /// Contact number
        contact_number: String,
        /// Requested 1-based seat
        seat: u32,
    },

    /// Command: cancel the oldest booking held under this name
    CancelByName {
        /// Passenger name, matched exactly
        name: String,
    },

    /// Command: cancel whatever booking holds this seat
    CancelBySeat {
        /// 1-based seat
        seat: u32,
    },

    // ========== Events ==========
    /// Event: a seat was booked
    SeatBooked {
        /// The new roster entry
        passenger: Passenger,
        /// When the booking was made
        booked_at: DateTime<Utc>,
    },

    /// Event: a booking was cancelled and its seat freed
    TicketCancelled {
        /// The removed roster entry
        passenger: Passenger,
        /// When the booking was cancelled
        cancelled_at: DateTime<Utc>,
    },

    /// Event: a command was refused
    CommandRejected {
        /// Why
        error: LedgerError,
    },
}

impl LedgerAction {
    /// Returns true if this action is a command
    #[must_use]
    pub const fn is_command(&self) -> bool {
        matches!(
            self,
            Self::BookSeat { .. } | Self::CancelByName { .. } | Self::CancelBySeat { .. }
        )
    }

    /// Returns true if this action is an event
    #[must_use]
    pub const fn is_event(&self) -> bool {
        !self.is_command()
    }

    /// Versioned event type name, `"unknown"` for commands
    #[must_use]
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::SeatBooked { .. } => "SeatBooked.v1",
            Self::TicketCancelled { .. } => "TicketCancelled.v1",
            Self::CommandRejected { .. } => "CommandRejected.v1",
            Self::BookSeat { .. } | Self::CancelByName { .. } | Self::CancelBySeat { .. } => {
                "unknown"
            },
        }
    }
}

//! Reducer logic for the reservation ledger.
//!
//! Commands are validated against the train, turned into events stamped by
//! the environment's clock, and the events are applied. A refused command
//! becomes a `CommandRejected` event so the reason lands in state.

use crate::error::LedgerError;
use crate::types::{LedgerAction, LedgerState, Passenger, SeatNumber};
use railseat_core::{SmallVec, effect::Effect, environment::Clock, reducer::Reducer};
use railseat_runtime::metrics::{COMMANDS_REJECTED, SEATS_BOOKED, TICKETS_CANCELLED};
use std::sync::Arc;

/// Environment dependencies for the ledger reducer
#[derive(Clone)]
pub struct LedgerEnvironment {
    /// Clock for stamping bookings and cancellations
    pub clock: Arc<dyn Clock>,
}

impl LedgerEnvironment {
    /// Creates a new `LedgerEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

/// Reducer for the reservation ledger
#[derive(Clone, Debug, Default)]
pub struct LedgerReducer;

impl LedgerReducer {
    /// Creates a new `LedgerReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates a `CancelByName` command, returning the booking it would remove
    fn validate_cancel_by_name(state: &LedgerState, name: &str) -> Result<Passenger, LedgerError> {
        state
            .train
            .find_by_name(name)
            .cloned()
            .ok_or_else(|| LedgerError::PassengerNotFound {
                name: name.to_string(),
            })
    }

    /// Validates a `CancelBySeat` command, returning the booking it would remove
    fn validate_cancel_by_seat(
        state: &LedgerState,
        seat: SeatNumber,
    ) -> Result<Passenger, LedgerError> {
        if seat.index_in(state.train.total_seats()).is_none() {
            return Err(LedgerError::InvalidSeatNumber {
                seat,
                total: state.train.total_seats(),
            });
        }

        state
            .train
            .passenger_on(seat)
            .cloned()
            .ok_or(LedgerError::SeatNotBooked { seat })
    }

    fn reject(state: &mut LedgerState, error: LedgerError) {
        Self::apply_event(state, &LedgerAction::CommandRejected { error });
    }

    /// Applies an event to state
    fn apply_event(state: &mut LedgerState, action: &LedgerAction) {
        match action {
            LedgerAction::SeatBooked {
                passenger,
                booked_at,
            } => match state.train.book_seat(passenger.clone()) {
                Ok(()) => {
                    tracing::info!(
                        passenger = passenger.name(),
                        seat = passenger.seat().get(),
                        %booked_at,
                        "Seat booked"
                    );
                    metrics::counter!(SEATS_BOOKED).increment(1);
                    state.last_error = None;
                },
                Err(error) => Self::reject(state, error),
            },
            LedgerAction::TicketCancelled {
                passenger,
                cancelled_at,
            } => {
                if state.train.passenger_on(passenger.seat()) != Some(passenger) {
                    Self::reject(
                        state,
                        LedgerError::PassengerNotFound {
                            name: passenger.name().to_string(),
                        },
                    );
                    return;
                }

                match state.train.cancel_by_seat(passenger.seat()) {
                    Ok(_) => {
                        tracing::info!(
                            passenger = passenger.name(),
                            seat = passenger.seat().get(),
                            %cancelled_at,
                            "Ticket cancelled"
                        );
                        metrics::counter!(TICKETS_CANCELLED).increment(1);
                        state.last_error = None;
                    },
                    Err(error) => Self::reject(state, error),
                }
            },
            LedgerAction::CommandRejected { error } => {
                tracing::warn!(reason = error.reason(), %error, "Command rejected");
                metrics::counter!(COMMANDS_REJECTED, "reason" => error.reason()).increment(1);
                state.last_error = Some(error.clone());
            },
            // Commands are not applied to state
            LedgerAction::BookSeat { .. }
            | LedgerAction::CancelByName { .. }
            | LedgerAction::CancelBySeat { .. } => {},
        }
    }
}

impl Reducer for LedgerReducer {
    type State = LedgerState;
    type Action = LedgerAction;
    type Environment = LedgerEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Commands ==========
            LedgerAction::BookSeat {
                name,
                contact_number,
                seat,
            } => {
                let seat = SeatNumber::new(seat);
                if let Err(error) = state.train.check_bookable(seat) {
                    Self::reject(state, error);
                    return SmallVec::new();
                }

                let event = LedgerAction::SeatBooked {
                    passenger: Passenger::new(name, contact_number, seat),
                    booked_at: env.clock.now(),
                };
                Self::apply_event(state, &event);
                SmallVec::new()
            },

            LedgerAction::CancelByName { name } => {
                match Self::validate_cancel_by_name(state, &name) {
                    Ok(passenger) => {
                        let event = LedgerAction::TicketCancelled {
                            passenger,
                            cancelled_at: env.clock.now(),
                        };
                        Self::apply_event(state, &event);
                    },
                    Err(error) => Self::reject(state, error),
                }
                SmallVec::new()
            },

            LedgerAction::CancelBySeat { seat } => {
                match Self::validate_cancel_by_seat(state, SeatNumber::new(seat)) {
                    Ok(passenger) => {
                        let event = LedgerAction::TicketCancelled {
                            passenger,
                            cancelled_at: env.clock.now(),
                        };
                        Self::apply_event(state, &event);
                    },
                    Err(error) => Self::reject(state, error),
                }
                SmallVec::new()
            },

            // ========== Events ==========
            LedgerAction::SeatBooked { .. }
            | LedgerAction::TicketCancelled { .. }
            | LedgerAction::CommandRejected { .. } => {
                // Replayed events go through the same checks as live ones
                Self::apply_event(state, &action);
                SmallVec::new()
            },
        }
    }
}

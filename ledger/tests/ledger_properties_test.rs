//! Property tests for booking and cancellation
//!
//! Drives the reducer with generated commands and checks that the seat
//! table and the roster never disagree.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use railseat::{
    LedgerAction, LedgerEnvironment, LedgerError, LedgerReducer, LedgerState, SeatNumber,
    SeatStatus, Train,
};
use railseat_core::reducer::Reducer;
use railseat_testing::test_clock;
use std::collections::BTreeSet;
use std::sync::Arc;

const NAMES: [&str; 4] = ["Alice", "Bob", "Carol", "Dan"];

fn new_state(seats: u32) -> LedgerState {
    LedgerState::new(Train::new("12345", "Express", "Station A", "Station B", seats).unwrap())
}

fn env() -> LedgerEnvironment {
    LedgerEnvironment::new(Arc::new(test_clock()))
}

fn apply(state: &mut LedgerState, action: LedgerAction) {
    let effects = LedgerReducer::new().reduce(state, action, &env());
    assert!(effects.is_empty());
}

fn command_strategy(max_seat: u32) -> impl Strategy<Value = LedgerAction> {
    let name = prop::sample::select(NAMES.to_vec()).prop_map(str::to_string);
    prop_oneof![
        3 => (name.clone(), 0..=max_seat + 1).prop_map(|(name, seat)| LedgerAction::BookSeat {
            contact_number: format!("{name}-{seat}"),
            name,
            seat,
        }),
        1 => name.prop_map(|name| LedgerAction::CancelByName { name }),
        1 => (0..=max_seat + 1).prop_map(|seat| LedgerAction::CancelBySeat { seat }),
    ]
}

fn booked_in_table(state: &LedgerState) -> BTreeSet<SeatNumber> {
    state
        .train
        .seats()
        .filter(|(_, status)| *status == SeatStatus::Booked)
        .map(|(seat, _)| seat)
        .collect()
}

proptest! {
    #[test]
    fn booking_takes_exactly_one_seat(total in 1u32..40, pick in any::<prop::sample::Index>()) {
        let seat = u32::try_from(pick.index(total as usize)).unwrap() + 1;
        let mut state = new_state(total);
        let before = state.train.available_seat_count();

        apply(&mut state, LedgerAction::BookSeat {
            name: "Alice".to_string(),
            contact_number: "555-1234".to_string(),
            seat,
        });

        prop_assert_eq!(state.train.available_seat_count(), before - 1);
        prop_assert_eq!(state.train.seat_status(SeatNumber::new(seat)), Some(SeatStatus::Booked));
        prop_assert!(state.last_error.is_none());
    }

    #[test]
    fn out_of_range_booking_is_refused(total in 1u32..40, above in 1u32..5) {
        for seat in [0, total + above] {
            let mut state = new_state(total);
            let before = state.train.clone();

            apply(&mut state, LedgerAction::BookSeat {
                name: "Eve".to_string(),
                contact_number: "0".to_string(),
                seat,
            });

            prop_assert_eq!(&state.train, &before);
            prop_assert_eq!(
                state.last_error,
                Some(LedgerError::InvalidSeatNumber { seat: SeatNumber::new(seat), total })
            );
        }
    }

    #[test]
    fn book_then_cancel_restores_count(total in 2u32..40, seat_offset in 0u32..40) {
        let seat = seat_offset % total + 1;
        let mut state = new_state(total);
        apply(&mut state, LedgerAction::BookSeat {
            name: "Bob".to_string(),
            contact_number: "1".to_string(),
            seat: if seat == 1 { total } else { 1 },
        });
        let before = state.train.available_seat_count();

        apply(&mut state, LedgerAction::BookSeat {
            name: "Walker".to_string(),
            contact_number: "2".to_string(),
            seat,
        });
        apply(&mut state, LedgerAction::CancelByName { name: "Walker".to_string() });

        prop_assert_eq!(state.train.available_seat_count(), before);
        prop_assert!(state.train.passengers().all(|p| p.name() != "Walker"));
    }

    #[test]
    fn table_and_roster_always_agree(
        total in 1u32..12,
        commands in prop::collection::vec(command_strategy(12), 0..60),
    ) {
        let mut state = new_state(total);

        for command in commands {
            apply(&mut state, command);

            let roster: Vec<SeatNumber> = state.train.passengers().map(|p| p.seat()).collect();
            let unique: BTreeSet<SeatNumber> = roster.iter().copied().collect();

            prop_assert_eq!(roster.len(), unique.len());
            prop_assert_eq!(&unique, &booked_in_table(&state));
            prop_assert_eq!(
                state.train.available_seat_count() + state.train.booked_seat_count(),
                total as usize
            );
        }
    }
}

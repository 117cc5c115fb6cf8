//! The train reservation ledger.
//!
//! A [`Train`] owns a fixed-length seat table and the roster of passengers
//! holding those seats. A seat is booked in the table exactly when one
//! roster entry carries its number; every mutation below keeps the two in
//! step or changes neither.

use crate::error::LedgerError;
use crate::report::{PassengerManifest, Schedule, SeatChart};
use crate::types::{Passenger, SeatNumber, SeatStatus};
use serde::{Deserialize, Serialize};

/// Seat availability and passenger roster for one train
///
/// Deserialization rebuilds the train through [`Train::new`] and rebooks
/// the roster, so a stored seat table that disagrees with it is refused.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TrainRecord")]
pub struct Train {
    train_number: String,
    train_name: String,
    departure_station: String,
    arrival_station: String,
    total_seats: u32,
    seat_available: Vec<bool>,
    passengers: Vec<Passenger>,
}

/// Wire form of a [`Train`], checked before it becomes one
#[derive(Deserialize)]
struct TrainRecord {
    train_number: String,
    train_name: String,
    departure_station: String,
    arrival_station: String,
    total_seats: u32,
    seat_available: Vec<bool>,
    passengers: Vec<Passenger>,
}

impl TryFrom<TrainRecord> for Train {
    type Error = LedgerError;

    fn try_from(record: TrainRecord) -> Result<Self, Self::Error> {
        let mut train = Self::new(
            record.train_number,
            record.train_name,
            record.departure_station,
            record.arrival_station,
            record.total_seats,
        )?;
        for passenger in record.passengers {
            train.book_seat(passenger)?;
        }
        if train.seat_available != record.seat_available {
            return Err(LedgerError::SeatTableMismatch);
        }
        Ok(train)
    }
}

impl Train {
    /// Creates a train with every seat available and an empty roster.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::NoSeats`] when `total_seats` is zero.
    pub fn new(
        train_number: impl Into<String>,
        train_name: impl Into<String>,
        departure_station: impl Into<String>,
        arrival_station: impl Into<String>,
        total_seats: u32,
    ) -> Result<Self, LedgerError> {
        if total_seats == 0 {
            return Err(LedgerError::NoSeats);
        }

        let seats = usize::try_from(total_seats).map_err(|_| LedgerError::NoSeats)?;

        Ok(Self {
            train_number: train_number.into(),
            train_name: train_name.into(),
            departure_station: departure_station.into(),
            arrival_station: arrival_station.into(),
            total_seats,
            seat_available: vec![true; seats],
            passengers: Vec::new(),
        })
    }

    /// Train number, e.g. `"12345"`
    #[must_use]
    pub fn train_number(&self) -> &str {
        &self.train_number
    }

    /// Train name, e.g. `"Express"`
    #[must_use]
    pub fn train_name(&self) -> &str {
        &self.train_name
    }

    /// Station the train departs from
    #[must_use]
    pub fn departure_station(&self) -> &str {
        &self.departure_station
    }

    /// Station the train arrives at
    #[must_use]
    pub fn arrival_station(&self) -> &str {
        &self.arrival_station
    }

    /// Number of seats, fixed at construction
    #[must_use]
    pub const fn total_seats(&self) -> u32 {
        self.total_seats
    }

    /// Number of seats nobody holds
    #[must_use]
    pub fn available_seat_count(&self) -> usize {
        self.seat_available.iter().filter(|available| **available).count()
    }

    /// Number of seats held by a passenger
    #[must_use]
    pub fn booked_seat_count(&self) -> usize {
        self.seat_available.len() - self.available_seat_count()
    }

    /// Status of one seat, `None` if the train has no such seat
    #[must_use]
    pub fn seat_status(&self, seat: SeatNumber) -> Option<SeatStatus> {
        let index = seat.index_in(self.total_seats)?;
        self.seat_available
            .get(index)
            .map(|available| SeatStatus::from_available(*available))
    }

    /// Every seat with its status, in seat order
    ///
    /// Each call starts a fresh pass; the iterator can also be cloned.
    pub fn seats(&self) -> impl Iterator<Item = (SeatNumber, SeatStatus)> + Clone + '_ {
        (1..=self.total_seats)
            .zip(self.seat_available.iter())
            .map(|(number, available)| {
                (SeatNumber::new(number), SeatStatus::from_available(*available))
            })
    }

    /// Current passengers, oldest booking first
    pub fn passengers(&self) -> impl Iterator<Item = &Passenger> + Clone {
        self.passengers.iter()
    }

    /// True if nobody holds a ticket
    #[must_use]
    pub fn has_no_passengers(&self) -> bool {
        self.passengers.is_empty()
    }

    /// The passenger holding `seat`, if any
    #[must_use]
    pub fn passenger_on(&self, seat: SeatNumber) -> Option<&Passenger> {
        self.passengers.iter().find(|p| p.seat() == seat)
    }

    /// Oldest booking held under exactly this name
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Passenger> {
        self.passengers.iter().find(|p| p.name() == name)
    }

    /// Checks that `seat` exists and is free, returning its table index.
    ///
    /// # Errors
    ///
    /// [`LedgerError::InvalidSeatNumber`] if out of range,
    /// [`LedgerError::SeatAlreadyBooked`] if held.
    pub fn check_bookable(&self, seat: SeatNumber) -> Result<usize, LedgerError> {
        let index = self.index_of(seat)?;
        match self.seat_available.get(index) {
            Some(true) => Ok(index),
            Some(false) => Err(LedgerError::SeatAlreadyBooked { seat }),
            None => Err(LedgerError::SeatTableMismatch),
        }
    }

    /// Books the passenger's seat and appends them to the roster.
    ///
    /// # Errors
    ///
    /// [`LedgerError::InvalidSeatNumber`] or [`LedgerError::SeatAlreadyBooked`];
    /// the ledger is unchanged on error.
    pub fn book_seat(&mut self, passenger: Passenger) -> Result<(), LedgerError> {
        let index = self.check_bookable(passenger.seat())?;
        if let Some(available) = self.seat_available.get_mut(index) {
            *available = false;
        }
        self.passengers.push(passenger);
        Ok(())
    }

    /// Cancels the oldest booking held under `name` and frees its seat.
    ///
    /// # Errors
    ///
    /// [`LedgerError::PassengerNotFound`] if nobody on the roster has that name.
    pub fn cancel_by_name(&mut self, name: &str) -> Result<Passenger, LedgerError> {
        let position = self
            .passengers
            .iter()
            .position(|p| p.name() == name)
            .ok_or_else(|| LedgerError::PassengerNotFound {
                name: name.to_string(),
            })?;
        Ok(self.remove_at(position))
    }

    /// Cancels the booking on `seat` and frees it.
    ///
    /// # Errors
    ///
    /// [`LedgerError::InvalidSeatNumber`] if out of range,
    /// [`LedgerError::SeatNotBooked`] if nobody holds it.
    pub fn cancel_by_seat(&mut self, seat: SeatNumber) -> Result<Passenger, LedgerError> {
        self.index_of(seat)?;
        let position = self
            .passengers
            .iter()
            .position(|p| p.seat() == seat)
            .ok_or(LedgerError::SeatNotBooked { seat })?;
        Ok(self.remove_at(position))
    }

    /// Schedule summary for display
    #[must_use]
    pub const fn schedule(&self) -> Schedule<'_> {
        Schedule::new(self)
    }

    /// Seat table for display
    #[must_use]
    pub const fn seat_chart(&self) -> SeatChart<'_> {
        SeatChart::new(self)
    }

    /// Passenger roster for display
    #[must_use]
    pub const fn manifest(&self) -> PassengerManifest<'_> {
        PassengerManifest::new(self)
    }

    fn index_of(&self, seat: SeatNumber) -> Result<usize, LedgerError> {
        seat.index_in(self.total_seats)
            .ok_or(LedgerError::InvalidSeatNumber {
                seat,
                total: self.total_seats,
            })
    }

    fn remove_at(&mut self, position: usize) -> Passenger {
        let passenger = self.passengers.remove(position);
        // Roster seats are always in range
        if let Some(available) = passenger
            .seat()
            .index_in(self.total_seats)
            .and_then(|index| self.seat_available.get_mut(index))
        {
            *available = true;
        }
        passenger
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn train(seats: u32) -> Train {
        Train::new("12345", "Express", "Station A", "Station B", seats).unwrap()
    }

    #[test]
    fn new_train_is_empty() {
        let train = train(3);
        assert_eq!(train.total_seats(), 3);
        assert_eq!(train.available_seat_count(), 3);
        assert_eq!(train.booked_seat_count(), 0);
        assert!(train.has_no_passengers());
        assert!(train.seats().all(|(_, status)| status == SeatStatus::Available));
    }

    #[test]
    fn zero_seats_rejected() {
        assert_eq!(
            Train::new("1", "Empty", "A", "B", 0),
            Err(LedgerError::NoSeats)
        );
    }

    #[test]
    fn book_marks_seat_and_appends() {
        let mut train = train(3);
        train.book_seat(Passenger::new("Alice", "555-1234", 2)).unwrap();

        assert_eq!(train.available_seat_count(), 2);
        assert_eq!(train.seat_status(SeatNumber::new(2)), Some(SeatStatus::Booked));
        assert_eq!(train.seat_status(SeatNumber::new(1)), Some(SeatStatus::Available));
        assert_eq!(train.passenger_on(SeatNumber::new(2)).map(Passenger::name), Some("Alice"));
    }

    #[test]
    fn out_of_range_seats_rejected() {
        let mut train = train(3);
        for seat in [0, 4] {
            let result = train.book_seat(Passenger::new("Eve", "0", seat));
            assert_eq!(
                result,
                Err(LedgerError::InvalidSeatNumber {
                    seat: SeatNumber::new(seat),
                    total: 3
                })
            );
        }
        assert_eq!(train.available_seat_count(), 3);
        assert!(train.has_no_passengers());
        assert_eq!(train.seat_status(SeatNumber::new(4)), None);
    }

    #[test]
    fn double_booking_rejected() {
        let mut train = train(3);
        train.book_seat(Passenger::new("Alice", "1", 1)).unwrap();
        let before = train.clone();

        let result = train.book_seat(Passenger::new("Bob", "2", 1));
        assert_eq!(
            result,
            Err(LedgerError::SeatAlreadyBooked {
                seat: SeatNumber::new(1)
            })
        );
        assert_eq!(train, before);
    }

    #[test]
    fn cancel_by_name_frees_seat() {
        let mut train = train(3);
        train.book_seat(Passenger::new("Alice", "555-1234", 2)).unwrap();

        let removed = train.cancel_by_name("Alice").unwrap();
        assert_eq!(removed.seat(), SeatNumber::new(2));
        assert_eq!(train.available_seat_count(), 3);
        assert!(train.has_no_passengers());
    }

    #[test]
    fn cancel_by_name_picks_oldest_booking() {
        let mut train = train(5);
        train.book_seat(Passenger::new("Bob", "1", 1)).unwrap();
        train.book_seat(Passenger::new("Bob", "4", 4)).unwrap();

        let removed = train.cancel_by_name("Bob").unwrap();
        assert_eq!(removed.seat(), SeatNumber::new(1));
        assert_eq!(train.seat_status(SeatNumber::new(1)), Some(SeatStatus::Available));
        assert_eq!(train.seat_status(SeatNumber::new(4)), Some(SeatStatus::Booked));
        assert_eq!(train.passengers().count(), 1);
    }

    #[test]
    fn cancel_unknown_name_is_noop() {
        let mut train = train(2);
        train.book_seat(Passenger::new("Alice", "1", 1)).unwrap();
        let before = train.clone();

        assert_eq!(
            train.cancel_by_name("alice"),
            Err(LedgerError::PassengerNotFound {
                name: "alice".into()
            })
        );
        assert_eq!(train, before);
    }

    #[test]
    fn cancel_by_seat() {
        let mut train = train(5);
        train.book_seat(Passenger::new("Bob", "1", 1)).unwrap();
        train.book_seat(Passenger::new("Bob", "4", 4)).unwrap();

        let removed = train.cancel_by_seat(SeatNumber::new(4)).unwrap();
        assert_eq!(removed.contact_number(), "4");
        assert_eq!(train.seat_status(SeatNumber::new(1)), Some(SeatStatus::Booked));

        assert_eq!(
            train.cancel_by_seat(SeatNumber::new(4)),
            Err(LedgerError::SeatNotBooked {
                seat: SeatNumber::new(4)
            })
        );
        assert!(matches!(
            train.cancel_by_seat(SeatNumber::new(9)),
            Err(LedgerError::InvalidSeatNumber { .. })
        ));
    }

    #[test]
    fn seat_listing_is_restartable() {
        let mut train = train(3);
        train.book_seat(Passenger::new("Alice", "1", 3)).unwrap();

        let listing = train.seats();
        let first: Vec<_> = listing.clone().collect();
        let second: Vec<_> = listing.collect();
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![
                (SeatNumber::new(1), SeatStatus::Available),
                (SeatNumber::new(2), SeatStatus::Available),
                (SeatNumber::new(3), SeatStatus::Booked),
            ]
        );
    }

    #[test]
    fn stored_train_round_trips() {
        let mut train = train(3);
        train.book_seat(Passenger::new("Alice", "1", 3)).unwrap();

        let json = serde_json::to_string(&train).unwrap();
        let restored: Train = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, train);
    }

    #[test]
    fn short_seat_table_refused_on_load() {
        let json = r#"{"train_number":"12345","train_name":"Express",
            "departure_station":"Station A","arrival_station":"Station B",
            "total_seats":5,"seat_available":[true],"passengers":[]}"#;
        let error = serde_json::from_str::<Train>(json).unwrap_err();
        assert!(error.to_string().contains("Seat table does not match"));
    }

    #[test]
    fn roster_outside_seat_table_refused_on_load() {
        let json = r#"{"train_number":"12345","train_name":"Express",
            "departure_station":"Station A","arrival_station":"Station B",
            "total_seats":2,"seat_available":[true,true],
            "passengers":[{"name":"Alice","contact_number":"1","seat":3}]}"#;
        assert!(serde_json::from_str::<Train>(json).is_err());

        let doubled = r#"{"train_number":"12345","train_name":"Express",
            "departure_station":"Station A","arrival_station":"Station B",
            "total_seats":2,"seat_available":[false,true],
            "passengers":[{"name":"Alice","contact_number":"1","seat":1},
                          {"name":"Bob","contact_number":"2","seat":1}]}"#;
        assert!(serde_json::from_str::<Train>(doubled).is_err());
    }
}

//! Text reports over a [`Train`].
//!
//! Each report borrows the train and renders through `Display`, so nothing
//! is formatted until it is written and the same report can be written
//! repeatedly.

use crate::train::Train;
use std::fmt;

const RULE: &str = "----------------------------------------------";

/// Train number, route, and seat totals
#[derive(Clone, Copy, Debug)]
pub struct Schedule<'a> {
    train: &'a Train,
}

impl<'a> Schedule<'a> {
    pub(crate) const fn new(train: &'a Train) -> Self {
        Self { train }
    }
}

impl fmt::Display for Schedule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let train = self.train;
        writeln!(f, "Train {} ({})", train.train_number(), train.train_name())?;
        writeln!(
            f,
            "Route: {} -> {}",
            train.departure_station(),
            train.arrival_station()
        )?;
        writeln!(
            f,
            "Seats: {} total, {} available",
            train.total_seats(),
            train.available_seat_count()
        )
    }
}

/// Every seat with its status
#[derive(Clone, Copy, Debug)]
pub struct SeatChart<'a> {
    train: &'a Train,
}

impl<'a> SeatChart<'a> {
    pub(crate) const fn new(train: &'a Train) -> Self {
        Self { train }
    }
}

impl fmt::Display for SeatChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let train = self.train;
        writeln!(
            f,
            "Available Seats for Train {} ({}):",
            train.train_number(),
            train.train_name()
        )?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Seat Number    Status")?;
        writeln!(f, "{RULE}")?;
        for (seat, status) in train.seats() {
            writeln!(f, "{:<10}{status}", seat.to_string())?;
        }
        writeln!(f, "{RULE}")
    }
}

/// Current passengers in booking order
#[derive(Clone, Copy, Debug)]
pub struct PassengerManifest<'a> {
    train: &'a Train,
}

impl<'a> PassengerManifest<'a> {
    pub(crate) const fn new(train: &'a Train) -> Self {
        Self { train }
    }
}

impl fmt::Display for PassengerManifest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let train = self.train;
        if train.has_no_passengers() {
            return writeln!(f, "No tickets booked for this train.");
        }

        writeln!(
            f,
            "Passenger Tickets for Train {} ({}):",
            train.train_number(),
            train.train_name()
        )?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Passenger Name    Contact Number    Seat Number")?;
        writeln!(f, "{RULE}")?;
        for passenger in train.passengers() {
            writeln!(
                f,
                "{:<17}{:<17}{}",
                passenger.name(),
                passenger.contact_number(),
                passenger.seat()
            )?;
        }
        writeln!(f, "{RULE}")
    }
}

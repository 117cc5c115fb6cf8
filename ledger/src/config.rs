//! Configuration management for the reservation simulator.
//!
//! Loads configuration from environment variables with the defaults of the
//! stock train: `12345` "Express" from Station A to Station B with 50 seats.

use crate::error::LedgerError;
use crate::train::Train;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Train the ledger is created for
    pub train: TrainConfig,
    /// Log filter used when `RUST_LOG` is not set (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Train configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainConfig {
    /// Train number
    pub number: String,
    /// Train name
    pub name: String,
    /// Departure station
    pub departure: String,
    /// Arrival station
    pub arrival: String,
    /// Number of seats
    pub total_seats: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup, falling back to defaults.
    ///
    /// An unparseable `TRAIN_TOTAL_SEATS` falls back to the default; zero is
    /// kept so that [`Config::train`] can refuse it.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            train: TrainConfig {
                number: lookup("TRAIN_NUMBER").unwrap_or_else(|| "12345".to_string()),
                name: lookup("TRAIN_NAME").unwrap_or_else(|| "Express".to_string()),
                departure: lookup("TRAIN_DEPARTURE").unwrap_or_else(|| "Station A".to_string()),
                arrival: lookup("TRAIN_ARRIVAL").unwrap_or_else(|| "Station B".to_string()),
                total_seats: lookup("TRAIN_TOTAL_SEATS")
                    .and_then(|s| s.trim().parse().ok())
                    .unwrap_or(50),
            },
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "warn".to_string()),
        }
    }

    /// Build the ledger's train from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::NoSeats`] if `total_seats` is zero.
    pub fn train(&self) -> Result<Train, LedgerError> {
        Train::new(
            self.train.number.clone(),
            self.train.name.clone(),
            self.train.departure.clone(),
            self.train.arrival.clone(),
            self.train.total_seats,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_stock_train() {
        let config = Config::default();
        assert_eq!(config.train.number, "12345");
        assert_eq!(config.train.name, "Express");
        assert_eq!(config.train.departure, "Station A");
        assert_eq!(config.train.arrival, "Station B");
        assert_eq!(config.train.total_seats, 50);
        assert_eq!(config.log_level, "warn");

        let train = config.train().unwrap();
        assert_eq!(train.available_seat_count(), 50);
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("TRAIN_NUMBER", "777"),
            ("TRAIN_NAME", "Night Owl"),
            ("TRAIN_DEPARTURE", "North"),
            ("TRAIN_ARRIVAL", "South"),
            ("TRAIN_TOTAL_SEATS", " 8 "),
            ("LOG_LEVEL", "debug"),
        ]));

        let train = config.train().unwrap();
        assert_eq!(train.train_number(), "777");
        assert_eq!(train.train_name(), "Night Owl");
        assert_eq!(train.departure_station(), "North");
        assert_eq!(train.arrival_station(), "South");
        assert_eq!(train.total_seats(), 8);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn bad_seat_count_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("TRAIN_TOTAL_SEATS", "lots")]));
        assert_eq!(config.train.total_seats, 50);
    }

    #[test]
    fn zero_seats_refused_at_build() {
        let config = Config::from_lookup(lookup_from(&[("TRAIN_TOTAL_SEATS", "0")]));
        assert_eq!(config.train(), Err(LedgerError::NoSeats));
    }
}

//! Single-train seat reservation ledger.
//!
//! A [`Train`] tracks which of its seats are free and which passengers hold
//! the rest. All changes go through [`LedgerReducer`] inside a
//! [`railseat_runtime::Store`]; the [`menu`] module puts a line-oriented
//! text interface in front of that store.
//!
//! - Book a seat for a named passenger
//! - Cancel by passenger name (oldest booking wins) or by seat number
//! - Print the schedule, the seat table, and the passenger roster
//!
//! # Quick Start
//!
//! ```no_run
//! use railseat::{LedgerAction, LedgerEnvironment, LedgerReducer, LedgerState, Train};
//! use railseat_core::environment::SystemClock;
//! use railseat_runtime::Store;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let train = Train::new("12345", "Express", "Station A", "Station B", 3)?;
//! let env = LedgerEnvironment::new(Arc::new(SystemClock));
//! let store = Store::new(LedgerState::new(train), LedgerReducer::new(), env);
//!
//! store.send(LedgerAction::BookSeat {
//!     name: "Alice".to_string(),
//!     contact_number: "555-1234".to_string(),
//!     seat: 2,
//! }).await?;
//!
//! let free = store.state(|s| s.train.available_seat_count()).await;
//! assert_eq!(free, 2);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod menu;
pub mod reducer;
pub mod report;
pub mod train;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::LedgerError;
pub use menu::{LedgerStore, Menu, MenuChoice, MenuError};
pub use reducer::{LedgerEnvironment, LedgerReducer};
pub use train::Train;
pub use types::{LedgerAction, LedgerState, Passenger, SeatNumber, SeatStatus};

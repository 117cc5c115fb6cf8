//! # Railseat Testing
//!
//! Testing utilities and helpers for the railseat reservation ledger.
//!
//! This crate provides:
//! - A deterministic [`Clock`] for stamping booking events
//! - [`ReducerTest`], a Given-When-Then builder for reducers
//! - Assertion helpers for reducer effects
//!
//! ## Example
//!
//! ```ignore
//! use railseat_testing::{ReducerTest, assertions, test_clock};
//!
//! ReducerTest::new(LedgerReducer::new())
//!     .with_env(LedgerEnvironment::new(Arc::new(test_clock())))
//!     .given_state(LedgerState::new(train))
//!     .when_action(LedgerAction::CancelByName { name: "Alice".into() })
//!     .then_state(|state| assert_eq!(state.train.available_seat_count(), 3))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use railseat_core::environment::Clock;


pub use reducer_test::{ReducerTest, assertions};

/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use railseat_testing::mocks::FixedClock;
    /// use railseat_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    #[must_use]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(DateTime::<Utc>::UNIX_EPOCH + chrono::Duration::days(20_089))
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, test_clock};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_is_fixed() {
        let clock = test_clock();
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_clock_starts_2025() {
        assert_eq!(test_clock().now().to_rfc3339(), "2025-01-01T00:00:00+00:00");
    }
}

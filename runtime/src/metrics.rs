//! Metric names and descriptions for the Store runtime and the ledger.
//!
//! Metrics are recorded through the `metrics` facade. Without an installed
//! recorder every call is a no-op, so the binary can run without an exporter.
//!
//! # Example
//!
//! ```rust
//! use railseat_runtime::metrics::describe_metrics;
//!
//! // Register descriptions once at startup
//! describe_metrics();
//! ```

use metrics::{describe_counter, describe_histogram};

/// Actions sent to a store (commands and fed-back events)
pub const ACTIONS_TOTAL: &str = "store.actions.total";

/// Actions rejected because the store was shut down
pub const REJECTED_ACTIONS: &str = "store.shutdown.rejected_actions";

/// Reducer execution time in seconds
pub const REDUCER_DURATION: &str = "store.reducer.duration_seconds";

/// Effects executed, labelled by effect `type`
pub const EFFECTS_EXECUTED: &str = "store.effects.executed";

/// Seats booked on the ledger
pub const SEATS_BOOKED: &str = "ledger.seats.booked";

/// Tickets cancelled on the ledger
pub const TICKETS_CANCELLED: &str = "ledger.tickets.cancelled";

/// Commands the ledger rejected, labelled by `reason`
pub const COMMANDS_REJECTED: &str = "ledger.commands.rejected";

/// Register descriptions for every metric emitted by the workspace.
pub fn describe_metrics() {
    describe_counter!(ACTIONS_TOTAL, "Total actions processed by the store");
    describe_counter!(
        REJECTED_ACTIONS,
        "Actions rejected because the store was shutting down"
    );
    describe_histogram!(REDUCER_DURATION, "Reducer execution time in seconds");
    describe_counter!(EFFECTS_EXECUTED, "Effects executed, by effect type");
    describe_counter!(SEATS_BOOKED, "Seats booked");
    describe_counter!(TICKETS_CANCELLED, "Tickets cancelled");
    describe_counter!(COMMANDS_REJECTED, "Booking or cancellation commands rejected");
}

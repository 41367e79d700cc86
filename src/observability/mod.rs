//! Observability subsystem for snackdb
//!
//! Structured JSON logging of lifecycle and operation events.
//!
//! # Principles
//!
//! 1. Observability is read-only: nothing logged changes a result
//! 2. Synchronous, no background threads
//! 3. Deterministic line format
//!
//! The query engine does not log; callers log around it.
//!
//! # Usage
//!
//! ```
//! use snackdb::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::QueryComplete, &[("total_items", "3")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event at its default severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log an event with fields at its default severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // Verifies no panic
        log_event(Event::BootStart);
        log_event(Event::SessionEnd);
    }

    #[test]
    fn test_log_event_with_fields() {
        log_event_with_fields(Event::RecordAdded, &[("id", "5"), ("version", "1")]);
    }
}

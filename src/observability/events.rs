//! Observable events for snackdb
//!
//! Events are explicit and typed. Each event carries its default severity.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Process startup begins
    BootStart,
    /// Configuration loaded
    ConfigLoaded,
    /// Inventory loaded from file or seed
    InventoryLoaded,
    /// Input stream ended
    SessionEnd,

    // Requests
    /// Request line could not be decoded
    RequestMalformed,

    // Query operations
    /// Query executed successfully
    QueryComplete,
    /// Query rejected at the boundary
    QueryRejected,

    // Inventory operations
    /// Record added
    RecordAdded,
    /// Record replaced by id
    RecordUpdated,
    /// One or more records deleted
    RecordDeleted,
    /// Record failed validation or referenced an unknown id
    RecordRejected,
    /// Stock flag flipped on one or more records
    StockToggled,
}

impl Event {
    /// Every event, in declaration order
    pub const ALL: [Event; 12] = [
        Event::BootStart,
        Event::ConfigLoaded,
        Event::InventoryLoaded,
        Event::SessionEnd,
        Event::RequestMalformed,
        Event::QueryComplete,
        Event::QueryRejected,
        Event::RecordAdded,
        Event::RecordUpdated,
        Event::RecordDeleted,
        Event::RecordRejected,
        Event::StockToggled,
    ];

    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::InventoryLoaded => "INVENTORY_LOADED",
            Event::SessionEnd => "SESSION_END",

            Event::RequestMalformed => "REQUEST_MALFORMED",

            Event::QueryComplete => "QUERY_COMPLETE",
            Event::QueryRejected => "QUERY_REJECTED",

            Event::RecordAdded => "RECORD_ADDED",
            Event::RecordUpdated => "RECORD_UPDATED",
            Event::RecordDeleted => "RECORD_DELETED",
            Event::RecordRejected => "RECORD_REJECTED",
            Event::StockToggled => "STOCK_TOGGLED",
        }
    }

    /// Returns the severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::RequestMalformed | Event::QueryRejected | Event::RecordRejected => {
                Severity::Warn
            }
            Event::QueryComplete => Severity::Trace,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_have_string_representation() {
        for event in Event::ALL {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_rejections_are_warnings() {
        assert_eq!(Event::QueryRejected.severity(), Severity::Warn);
        assert_eq!(Event::RecordRejected.severity(), Severity::Warn);
        assert_eq!(Event::RecordAdded.severity(), Severity::Info);
    }

    #[test]
    fn test_event_display() {
        assert_eq!(format!("{}", Event::BootStart), "BOOT_START");
        assert_eq!(format!("{}", Event::StockToggled), "STOCK_TOGGLED");
    }
}

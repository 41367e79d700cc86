//! snackdb - a deterministic in-memory snack inventory
//!
//! The query engine answers "which snacks are visible right now": it
//! filters by search text, category and stock, orders by one field and
//! returns one page. The inventory owns the records and hands the engine
//! immutable snapshots.

pub mod cli;
pub mod engine;
pub mod inventory;
pub mod observability;
pub mod query;

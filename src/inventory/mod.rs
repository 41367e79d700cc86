//! Inventory subsystem for snackdb
//!
//! Owns the record collection. Records are validated on the way in and
//! never reach the query engine malformed.
//!
//! # Invariants
//!
//! - Ids are unique and never change once assigned
//! - New ids are the highest existing id + 1
//! - `price` and `calories` are non-negative
//! - An inventory value is immutable; add, update, remove and the bulk
//!   operations return a new value with a higher version

mod collection;
mod errors;
mod record;
mod seed;
mod validator;

pub use collection::Inventory;
pub use errors::{InventoryError, InventoryResult};
pub use record::{Ingredients, Snack, SnackDraft, SnackForm, StoredSnack};
pub use seed::seed_records;
pub use validator::RecordValidator;

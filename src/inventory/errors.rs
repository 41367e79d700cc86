//! Inventory errors
//!
//! Error codes:
//! - SNACK_RECORD_MALFORMED
//! - SNACK_RECORD_NOT_FOUND
//! - SNACK_RECORD_DUPLICATE_ID
//! - SNACK_ID_EXHAUSTED

use thiserror::Error;

/// Result type for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// Missing or empty required field, negative number, unparsable input
    #[error("Malformed record: field '{field}' {reason}")]
    MalformedRecord { field: String, reason: String },

    #[error("Record not found: {0}")]
    NotFound(u64),

    #[error("Duplicate record id: {0}")]
    DuplicateId(u64),

    #[error("No record id left after {0}")]
    IdExhausted(u64),
}

impl InventoryError {
    /// Create a malformed record error
    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        InventoryError::MalformedRecord {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            InventoryError::MalformedRecord { .. } => "SNACK_RECORD_MALFORMED",
            InventoryError::NotFound(_) => "SNACK_RECORD_NOT_FOUND",
            InventoryError::DuplicateId(_) => "SNACK_RECORD_DUPLICATE_ID",
            InventoryError::IdExhausted(_) => "SNACK_ID_EXHAUSTED",
        }
    }

    /// Returns the offending field for malformed records
    pub fn field(&self) -> Option<&str> {
        match self {
            InventoryError::MalformedRecord { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        InventoryError::malformed("$record", format!("could not be decoded: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(
            InventoryError::malformed("name", "is empty").code(),
            "SNACK_RECORD_MALFORMED"
        );
        assert_eq!(InventoryError::NotFound(3).code(), "SNACK_RECORD_NOT_FOUND");
        assert_eq!(
            InventoryError::DuplicateId(3).code(),
            "SNACK_RECORD_DUPLICATE_ID"
        );
    }

    #[test]
    fn test_display() {
        let err = InventoryError::malformed("price", "must be >= 0, got -5");
        assert_eq!(
            err.to_string(),
            "Malformed record: field 'price' must be >= 0, got -5"
        );
        assert_eq!(err.field(), Some("price"));
        assert_eq!(InventoryError::NotFound(9).to_string(), "Record not found: 9");
    }
}

//! Query error types
//!
//! Error codes:
//! - SNACK_QUERY_INVALID (REJECT)
//!
//! Malformed query values are rejected at the request boundary and are
//! never silently corrected.

use std::fmt;

/// Severity levels for query errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Client request rejected
    Reject,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
        }
    }
}

/// Query-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorCode {
    /// Unrecognized sort key or direction, non-positive page or page size
    SnackQueryInvalid,
}

impl QueryErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            QueryErrorCode::SnackQueryInvalid => "SNACK_QUERY_INVALID",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Reject
    }
}

impl fmt::Display for QueryErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Query error type with full context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError {
    code: QueryErrorCode,
    message: String,
    /// Offending query option, if applicable
    field: Option<String>,
}

impl QueryError {
    /// Create a generic invalid query error
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            code: QueryErrorCode::SnackQueryInvalid,
            message: reason.into(),
            field: None,
        }
    }

    /// Create an unknown sort key error
    pub fn unknown_sort_key(key: impl Into<String>) -> Self {
        let k = key.into();
        Self {
            code: QueryErrorCode::SnackQueryInvalid,
            message: format!("Unknown sort key '{}'", k),
            field: Some("sortKey".into()),
        }
    }

    /// Create an unknown sort direction error
    pub fn unknown_sort_direction(direction: impl Into<String>) -> Self {
        Self {
            code: QueryErrorCode::SnackQueryInvalid,
            message: format!("Unknown sort direction '{}'", direction.into()),
            field: Some("sortDirection".into()),
        }
    }

    /// Create an invalid page number error
    pub fn invalid_page(page: i64) -> Self {
        Self {
            code: QueryErrorCode::SnackQueryInvalid,
            message: format!("Page must be >= 1, got {}", page),
            field: Some("page".into()),
        }
    }

    /// Create an invalid page size error
    pub fn invalid_page_size(page_size: i64) -> Self {
        Self {
            code: QueryErrorCode::SnackQueryInvalid,
            message: format!("Page size must be >= 1, got {}", page_size),
            field: Some("pageSize".into()),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> QueryErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending query option if applicable
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for QueryError {}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string() {
        assert_eq!(
            QueryErrorCode::SnackQueryInvalid.code(),
            "SNACK_QUERY_INVALID"
        );
    }

    #[test]
    fn test_sort_key_error_names_field() {
        let err = QueryError::unknown_sort_key("colour");
        assert_eq!(err.field(), Some("sortKey"));
        assert!(err.message().contains("colour"));
    }

    #[test]
    fn test_error_display() {
        let err = QueryError::invalid_page_size(0);
        let display = format!("{}", err);
        assert!(display.contains("REJECT"));
        assert!(display.contains("SNACK_QUERY_INVALID"));
        assert!(display.contains("got 0"));
    }
}

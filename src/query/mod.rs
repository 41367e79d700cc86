//! Query model for snackdb
//!
//! Describes what the caller wants to see: a search term, a category and
//! stock filter, a sort key and direction, and a page.
//!
//! # Boundary
//!
//! Untyped input enters as a [`QueryRequest`] and is validated into a
//! [`Query`]. Unknown sort keys, unknown directions, `page < 1` and
//! `pageSize < 1` are rejected with SNACK_QUERY_INVALID before the engine
//! ever sees them.

mod ast;
mod errors;
mod request;

pub use ast::{CategoryFilter, Query, SortDirection, SortKey, DEFAULT_PAGE_SIZE};
pub use errors::{QueryError, QueryErrorCode, QueryResult};
pub use request::{QueryDefaults, QueryRequest};

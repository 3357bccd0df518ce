//! Typed outcomes for upstream calls.
//!
//! The upstream's failure modes (rate limiting, not-found, everything else)
//! are classified into closed variant sets so the route layer can match
//! exhaustively instead of comparing strings.

use crate::error::DirectoryError;

/// Result of a read or create call against the upstream.
#[derive(Debug)]
#[must_use]
pub enum FetchOutcome<T> {
    /// The upstream answered successfully and the payload was mapped.
    Ok(T),
    /// The upstream returned 404 for a keyed lookup.
    Absent,
    /// The upstream returned 429; never retried here.
    RateLimited {
        /// Value of the `Retry-After` header, if the upstream sent one.
        retry_after: Option<String>,
    },
    /// Any other failure: transport error, timeout, non-2xx status,
    /// malformed body, or a success envelope whose status was not
    /// "success". Carries the typed cause.
    Transient(DirectoryError),
}

impl<T> FetchOutcome<T> {
    /// Returns the success value, or `None` for every failure variant.
    pub fn into_ok(self) -> Option<T> {
        match self {
            FetchOutcome::Ok(value) => Some(value),
            _ => None,
        }
    }
}

/// Result of a delete call against the upstream.
///
/// Exactly four states; the route layer switches on the variant, never on
/// message content.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum DeleteOutcome {
    /// 2xx with envelope status "success"; carries the upstream message.
    Succeeded(String),
    /// The upstream returned 404.
    NotFound,
    /// The upstream returned 429.
    RateLimited {
        /// Value of the `Retry-After` header, if the upstream sent one.
        retry_after: Option<String>,
    },
    /// Any other non-2xx, or a 2xx whose envelope status was not "success".
    Failed,
}

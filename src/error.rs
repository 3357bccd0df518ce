//! Error types for the employee directory service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure mode that can occur while talking to the upstream
//! directory. Errors are carried inside outcomes (see [`crate::client`]);
//! they are never raised for control flow.

use thiserror::Error;

/// The main error type for upstream directory interactions.
///
/// Every failure that the client classifies as transient carries one of
/// these values, so callers and logs always see the concrete cause.
///
/// # Example
///
/// ```
/// use employee_directory::error::DirectoryError;
///
/// let error = DirectoryError::UpstreamHttp { status: 500 };
/// assert_eq!(error.to_string(), "Upstream responded with HTTP status 500");
/// ```
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The request never produced a usable response (connect error, timeout).
    #[error("Upstream transport failure: {message}")]
    Transport {
        /// A description of the transport failure.
        message: String,
    },

    /// The upstream answered with a non-success HTTP status other than
    /// 404 and 429, which are classified separately.
    #[error("Upstream responded with HTTP status {status}")]
    UpstreamHttp {
        /// The HTTP status code received.
        status: u16,
    },

    /// The upstream envelope carried a `status` field other than "success".
    #[error("Upstream envelope reported status '{status}'")]
    UpstreamStatus {
        /// The envelope status string as received.
        status: String,
    },

    /// The response body could not be decoded into the expected envelope.
    #[error("Malformed upstream body: {message}")]
    MalformedBody {
        /// A description of the decode failure.
        message: String,
    },

    /// A record in the upstream payload failed required-field parsing.
    #[error("Malformed employee record: field '{field}': {message}")]
    MalformedEmployee {
        /// The field that failed to parse.
        field: String,
        /// A description of the parse failure.
        message: String,
    },

    /// A configuration value was present but invalid.
    #[error("Invalid configuration value for '{name}': {message}")]
    InvalidConfig {
        /// The configuration key that was invalid.
        name: String,
        /// A description of what made the value invalid.
        message: String,
    },
}

/// A type alias for Results that return DirectoryError.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

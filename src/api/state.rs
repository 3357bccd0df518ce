//! Application state for the employee directory API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::client::UpstreamEmployeeClient;

/// Shared application state.
///
/// Holds the upstream client so every handler reuses the same pooled
/// HTTP connections.
#[derive(Clone)]
pub struct AppState {
    /// The upstream directory client.
    client: Arc<UpstreamEmployeeClient>,
}

impl AppState {
    /// Creates a new application state wrapping the given client.
    pub fn new(client: UpstreamEmployeeClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Returns a reference to the upstream client.
    pub fn client(&self) -> &UpstreamEmployeeClient {
        &self.client
    }
}

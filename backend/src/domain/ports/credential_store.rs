//! Port for resolving access tokens to stored users.
//!
//! The credential store is owned by the persistence collaborator. The core
//! only ever reads from it, and each authentication performs exactly one
//! lookup.
use async_trait::async_trait;

use crate::domain::{AccessToken, User};

use super::define_port_error;

define_port_error! {
    /// Errors raised by credential store adapters.
    pub enum CredentialStoreError {
        /// Store connection could not be established.
        Connection { message: String } => "credential store connection failed: {message}",
        /// Lookup failed during execution.
        Query { message: String } => "credential store query failed: {message}",
    }
}

/// Read-only lookup of users by their live access token.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Find the user whose stored token equals `token` exactly.
    ///
    /// Returns `Ok(None)` when no user holds the token. Adapters must never
    /// return a partial match.
    async fn find_by_token(&self, token: &AccessToken)
    -> Result<Option<User>, CredentialStoreError>;
}

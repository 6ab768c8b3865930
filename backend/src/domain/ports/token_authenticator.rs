//! Driving port for bearer token authentication.
//!
//! Inbound adapters hand over the raw `Authorization` header value and receive
//! the caller's identity. They never see the credential store.

use async_trait::async_trait;

use crate::domain::{Error, UserId};

/// Domain use-case port for resolving request credentials.
#[async_trait]
pub trait TokenAuthenticator: Send + Sync {
    /// Resolve an `Authorization` header value to a user id.
    ///
    /// Fails with [`crate::domain::ErrorCode::Unauthorized`] when the header is
    /// absent, malformed, or names an unknown token.
    async fn authenticate(&self, authorization: Option<&str>) -> Result<UserId, Error>;
}

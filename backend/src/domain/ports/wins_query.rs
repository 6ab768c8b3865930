//! Driving port for reading wins.
//!
//! Reads require an authenticated caller but are not gated on ownership: any
//! signed-in user may list or fetch any win.

use async_trait::async_trait;

use crate::domain::{Error, UserId, Win, WinId};

/// Domain use-case port for win reads.
#[async_trait]
pub trait WinsQuery: Send + Sync {
    /// List every win. An empty collection is a valid result.
    async fn list_wins(&self, caller: &UserId) -> Result<Vec<Win>, Error>;

    /// Fetch one win or fail with `not_found`.
    async fn get_win(&self, caller: &UserId, id: &WinId) -> Result<Win, Error>;
}

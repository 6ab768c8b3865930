//! Driving port for win mutations.
//!
//! Every operation receives the already-authenticated caller. Update and
//! delete additionally require the caller to own the target win.

use async_trait::async_trait;

use crate::domain::{Error, UserId, Win, WinDraftFields, WinId, WinPatch};

/// Domain use-case port for win mutations.
#[async_trait]
pub trait WinsCommand: Send + Sync {
    /// Validate and store a new win owned by `caller`.
    ///
    /// Fails with `validation_failed` when `title` or `text` is missing or
    /// empty.
    async fn create_win(&self, caller: &UserId, fields: WinDraftFields) -> Result<Win, Error>;

    /// Merge `patch` into the caller's win and persist the result.
    async fn update_win(&self, caller: &UserId, id: &WinId, patch: WinPatch) -> Result<(), Error>;

    /// Delete the caller's win.
    async fn delete_win(&self, caller: &UserId, id: &WinId) -> Result<(), Error>;
}

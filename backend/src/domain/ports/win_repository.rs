//! Port abstraction for win persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{Win, WinId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by win repository adapters.
    pub enum WinRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "win repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "win repository query failed: {message}",
    }
}

/// CRUD access to the win collection.
///
/// Adapters provide no optimistic concurrency: concurrent writes to the same
/// id resolve as last-write-wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WinRepository: Send + Sync {
    /// Every stored win, regardless of owner.
    async fn list_all(&self) -> Result<Vec<Win>, WinRepositoryError>;

    /// Fetch a win by identifier.
    async fn find_by_id(&self, id: &WinId) -> Result<Option<Win>, WinRepositoryError>;

    /// Store a newly created win.
    async fn insert(&self, win: &Win) -> Result<(), WinRepositoryError>;

    /// Overwrite the stored `title` and `text` of an existing win.
    ///
    /// Returns `false` when the win no longer exists. The owner column is
    /// never written.
    async fn update(&self, win: &Win) -> Result<bool, WinRepositoryError>;

    /// Remove a win. Returns `false` when nothing was deleted.
    async fn delete(&self, id: &WinId) -> Result<bool, WinRepositoryError>;
}

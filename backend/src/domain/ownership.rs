//! Ownership authorisation for id-scoped mutations.
//!
//! Runs only after authentication has produced an identity. A missing win and
//! a win owned by someone else are distinct failures: the former maps to
//! `not_found` (404), the latter to `ownership_denied` (401).

use std::sync::Arc;

use tracing::warn;

use crate::domain::ports::{WinRepository, WinRepositoryError};
use crate::domain::{Error, UserId, Win, WinId};

/// Reasons an authenticated caller may not mutate a win.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthorizationError {
    /// No win exists with the requested id.
    #[error("win {0} not found")]
    NotFound(WinId),
    /// The win exists but belongs to another user.
    #[error("win {0} is not owned by the caller")]
    OwnershipDenied(WinId),
    /// The repository lookup failed.
    #[error(transparent)]
    Repository(#[from] WinRepositoryError),
}

impl From<AuthorizationError> for Error {
    fn from(value: AuthorizationError) -> Self {
        match value {
            AuthorizationError::NotFound(id) => Error::not_found(format!("win {id} not found")),
            AuthorizationError::OwnershipDenied(_) => {
                Error::ownership_denied("you do not own this win")
            }
            AuthorizationError::Repository(error) => map_repository_error(error),
        }
    }
}

/// Map win repository failures to domain errors.
pub(crate) fn map_repository_error(error: WinRepositoryError) -> Error {
    match error {
        WinRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("win repository unavailable: {message}"))
        }
        WinRepositoryError::Query { message } => {
            Error::internal(format!("win repository error: {message}"))
        }
    }
}

/// Decides whether an identity may mutate a win.
#[derive(Clone)]
pub struct OwnershipAuthorizer<R> {
    wins: Arc<R>,
}

impl<R> OwnershipAuthorizer<R> {
    /// Create an authoriser reading from `wins`.
    pub fn new(wins: Arc<R>) -> Self {
        Self { wins }
    }
}

impl<R> OwnershipAuthorizer<R>
where
    R: WinRepository,
{
    /// Load the win and check that `identity` owns it.
    ///
    /// Performs a single point lookup. On success the loaded win is returned
    /// so callers can act on it without reading it again.
    pub async fn authorize(&self, identity: &UserId, id: &WinId) -> Result<Win, AuthorizationError> {
        let win = self
            .wins
            .find_by_id(id)
            .await?
            .ok_or(AuthorizationError::NotFound(*id))?;

        if win.is_owned_by(identity) {
            Ok(win)
        } else {
            warn!(win_id = %id, caller = %identity, "ownership check failed");
            Err(AuthorizationError::OwnershipDenied(*id))
        }
    }
}

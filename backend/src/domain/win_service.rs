//! Win domain service.
//!
//! Implements the [`WinsQuery`] and [`WinsCommand`] driving ports. Callers
//! arrive already authenticated; this service adds ownership checks, creation
//! validation and the partial-update merge before touching the repository.
//!
//! ```text
//! list / get     -> repository read
//! create         -> validate -> insert
//! update         -> authorise -> merge -> update
//! delete         -> authorise -> delete
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::domain::ownership::map_repository_error;
use crate::domain::ports::{WinRepository, WinsCommand, WinsQuery};
use crate::domain::{
    AuthorizationError, Error, OwnershipAuthorizer, UserId, Win, WinDraftFields, WinId, WinPatch,
    WinValidationError,
};

fn map_validation_error(error: WinValidationError) -> Error {
    let field = error.field();
    Error::validation_failed(error.to_string()).with_details(json!({
        "field": field,
        "code": format!("missing_{field}"),
    }))
}

/// Win service implementing the query and command driving ports.
#[derive(Clone)]
pub struct WinService<R> {
    wins: Arc<R>,
    authorizer: OwnershipAuthorizer<R>,
}

impl<R> WinService<R> {
    /// Create a service over the given win repository.
    pub fn new(wins: Arc<R>) -> Self {
        let authorizer = OwnershipAuthorizer::new(Arc::clone(&wins));
        Self { wins, authorizer }
    }
}

#[async_trait]
impl<R> WinsQuery for WinService<R>
where
    R: WinRepository,
{
    async fn list_wins(&self, _caller: &UserId) -> Result<Vec<Win>, Error> {
        self.wins.list_all().await.map_err(map_repository_error)
    }

    async fn get_win(&self, _caller: &UserId, id: &WinId) -> Result<Win, Error> {
        self.wins
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("win {id} not found")))
    }
}

#[async_trait]
impl<R> WinsCommand for WinService<R>
where
    R: WinRepository,
{
    async fn create_win(&self, caller: &UserId, fields: WinDraftFields) -> Result<Win, Error> {
        let win = Win::create(WinId::random(), *caller, fields).map_err(map_validation_error)?;

        self.wins.insert(&win).await.map_err(map_repository_error)?;

        info!(win_id = %win.id(), owner = %caller, "win created");
        Ok(win)
    }

    async fn update_win(&self, caller: &UserId, id: &WinId, patch: WinPatch) -> Result<(), Error> {
        let current = self.authorizer.authorize(caller, id).await?;
        let merged = current.merge(patch);

        let updated = self.wins.update(&merged).await.map_err(map_repository_error)?;
        if !updated {
            // Deleted between the ownership check and the write.
            return Err(AuthorizationError::NotFound(*id).into());
        }
        Ok(())
    }

    async fn delete_win(&self, caller: &UserId, id: &WinId) -> Result<(), Error> {
        self.authorizer.authorize(caller, id).await?;

        let deleted = self.wins.delete(id).await.map_err(map_repository_error)?;
        if !deleted {
            return Err(AuthorizationError::NotFound(*id).into());
        }
        info!(win_id = %id, owner = %caller, "win deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "win_service_tests.rs"]
mod tests;

//! PostgreSQL-backed `CredentialStore` reading the `users` table.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CredentialStore, CredentialStoreError};
use crate::domain::{AccessToken, User, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::CredentialRow;
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the credential store port.
#[derive(Clone)]
pub struct DieselCredentialStore {
    pool: DbPool,
}

impl DieselCredentialStore {
    /// Create a store that looks tokens up through the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CredentialStoreError {
    map_basic_pool_error(error, CredentialStoreError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> CredentialStoreError {
    map_basic_diesel_error(
        error,
        CredentialStoreError::query,
        CredentialStoreError::connection,
    )
}

fn row_to_user(row: CredentialRow) -> Result<User, CredentialStoreError> {
    User::new(UserId::from_uuid(row.id), row.email)
        .map_err(|err| CredentialStoreError::query(err.to_string()))
}

#[async_trait]
impl CredentialStore for DieselCredentialStore {
    async fn find_by_token(
        &self,
        token: &AccessToken,
    ) -> Result<Option<User>, CredentialStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = users::table
            .filter(users::token.eq(token.expose()))
            .select(CredentialRow::as_select())
            .first::<CredentialRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }
}

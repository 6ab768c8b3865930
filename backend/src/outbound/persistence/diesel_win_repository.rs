//! PostgreSQL-backed `WinRepository` implementation using Diesel ORM.
//!
//! Rows are converted through [`Win::new`], so a row that violates the
//! non-empty invariant surfaces as a query error instead of a bad domain
//! value.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{WinRepository, WinRepositoryError};
use crate::domain::{UserId, Win, WinDraft, WinId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewWinRow, WinRow, WinUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::wins;

/// Diesel-backed implementation of the win repository port.
#[derive(Clone)]
pub struct DieselWinRepository {
    pool: DbPool,
}

impl DieselWinRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> WinRepositoryError {
    map_basic_pool_error(error, WinRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> WinRepositoryError {
    map_basic_diesel_error(
        error,
        WinRepositoryError::query,
        WinRepositoryError::connection,
    )
}

fn row_to_win(row: WinRow) -> Result<Win, WinRepositoryError> {
    let WinRow {
        id,
        title,
        text,
        owner_id,
    } = row;

    Win::new(WinDraft {
        id: WinId::from_uuid(id),
        title,
        text,
        owner: UserId::from_uuid(owner_id),
    })
    .map_err(|err| WinRepositoryError::query(format!("stored win {id} is invalid: {err}")))
}

#[async_trait]
impl WinRepository for DieselWinRepository {
    async fn list_all(&self) -> Result<Vec<Win>, WinRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<WinRow> = wins::table
            .order((wins::created_at.asc(), wins::id.asc()))
            .select(WinRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_win).collect()
    }

    async fn find_by_id(&self, id: &WinId) -> Result<Option<Win>, WinRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = wins::table
            .filter(wins::id.eq(id.as_uuid()))
            .select(WinRow::as_select())
            .first::<WinRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_win).transpose()
    }

    async fn insert(&self, win: &Win) -> Result<(), WinRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewWinRow {
            id: *win.id().as_uuid(),
            title: win.title(),
            text: win.text(),
            owner_id: *win.owner().as_uuid(),
        };

        diesel::insert_into(wins::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn update(&self, win: &Win) -> Result<bool, WinRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changes = WinUpdate {
            title: win.title(),
            text: win.text(),
        };

        let updated = diesel::update(wins::table.filter(wins::id.eq(win.id().as_uuid())))
            .set((&changes, wins::updated_at.eq(diesel::dsl::now)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(updated > 0)
    }

    async fn delete(&self, id: &WinId) -> Result<bool, WinRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(wins::table.filter(wins::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}

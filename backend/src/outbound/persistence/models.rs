//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{users, wins};

/// Columns needed to resolve a token to a user.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CredentialRow {
    pub id: Uuid,
    pub email: String,
}

/// Row struct for reading from the wins table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = wins)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct WinRow {
    pub id: Uuid,
    pub title: String,
    pub text: String,
    pub owner_id: Uuid,
}

/// Insertable struct for new wins. Timestamps come from column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = wins)]
pub(crate) struct NewWinRow<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub text: &'a str,
    pub owner_id: Uuid,
}

/// Changeset for win updates. `owner_id` is never written.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = wins)]
pub(crate) struct WinUpdate<'a> {
    pub title: &'a str,
    pub text: &'a str,
}

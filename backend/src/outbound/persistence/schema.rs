//! Diesel table definitions.
//!
//! Mirrors `backend/migrations`. Regenerate with `diesel print-schema` after
//! adding a migration.

diesel::table! {
    /// Registered accounts and their single live access token.
    users (id) {
        id -> Uuid,
        #[max_length = 255]
        email -> Varchar,
        /// Never read by this service; owned by the signup flow.
        #[max_length = 255]
        hashed_password -> Varchar,
        /// Opaque bearer token. Unique across all users.
        #[max_length = 255]
        token -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Owned win records.
    wins (id) {
        id -> Uuid,
        title -> Text,
        text -> Text,
        /// Set at creation and never updated.
        owner_id -> Uuid,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(wins -> users (owner_id));

diesel::allow_tables_to_appear_in_same_query!(users, wins);

//! In-process adapters for the driven ports.
//!
//! Used when no database is configured and throughout the HTTP tests. State
//! lives behind `std::sync::RwLock`; no lock is held across an `.await`.

mod credential_store;
mod win_repository;

pub use credential_store::InMemoryCredentialStore;
pub use win_repository::InMemoryWinRepository;

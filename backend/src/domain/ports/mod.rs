//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`CredentialStore`, `WinRepository`) are implemented by
//! outbound adapters. Driving ports (`TokenAuthenticator`, `WinsQuery`,
//! `WinsCommand`) are what inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod credential_store;
mod token_authenticator;
mod win_repository;
mod wins_command;
mod wins_query;

#[cfg(test)]
pub use credential_store::MockCredentialStore;
pub use credential_store::{CredentialStore, CredentialStoreError};
pub use token_authenticator::TokenAuthenticator;
#[cfg(test)]
pub use win_repository::MockWinRepository;
pub use win_repository::{WinRepository, WinRepositoryError};
pub use wins_command::WinsCommand;
pub use wins_query::WinsQuery;

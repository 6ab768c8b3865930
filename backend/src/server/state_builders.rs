//! Builders wiring adapters into the HTTP state.

use std::sync::Arc;

use tracing::{info, warn};

use wins::domain::ports::{TokenAuthenticator, WinRepository};
use wins::domain::{CredentialTokenAuthenticator, WinService};
use wins::inbound::http::state::HttpState;
use wins::outbound::memory::{InMemoryCredentialStore, InMemoryWinRepository};
use wins::outbound::persistence::{DieselCredentialStore, DieselWinRepository};

use super::ServerConfig;

fn state_from<R>(authenticator: Arc<dyn TokenAuthenticator>, wins: R) -> HttpState
where
    R: WinRepository + 'static,
{
    let service = Arc::new(WinService::new(Arc::new(wins)));
    HttpState::new(authenticator, service.clone(), service)
}

/// Build handler state from the server configuration.
///
/// Uses Diesel adapters when a pool is configured and in-memory adapters
/// otherwise.
pub(crate) fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => {
            if config.dev_user.is_some() {
                warn!("dev user is ignored when a database is configured");
            }
            let store = Arc::new(DieselCredentialStore::new(pool.clone()));
            state_from(
                Arc::new(CredentialTokenAuthenticator::new(store)),
                DieselWinRepository::new(pool.clone()),
            )
        }
        None => {
            let store = Arc::new(InMemoryCredentialStore::default());
            if let Some((user, token)) = config.dev_user.clone() {
                info!(user_id = %user.id(), email = user.email(), "seeded dev user");
                store.issue_token(user, token);
            }
            warn!("no database configured; wins are kept in memory");
            state_from(
                Arc::new(CredentialTokenAuthenticator::new(store)),
                InMemoryWinRepository::default(),
            )
        }
    }
}

//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{TokenAuthenticator, WinsCommand, WinsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub authenticator: Arc<dyn TokenAuthenticator>,
    pub wins_query: Arc<dyn WinsQuery>,
    pub wins_command: Arc<dyn WinsCommand>,
}

impl HttpState {
    /// Construct state from the three driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use wins::domain::{CredentialTokenAuthenticator, WinService};
    /// use wins::inbound::http::state::HttpState;
    /// use wins::outbound::memory::{InMemoryCredentialStore, InMemoryWinRepository};
    ///
    /// let store = Arc::new(InMemoryCredentialStore::default());
    /// let wins = Arc::new(WinService::new(Arc::new(InMemoryWinRepository::default())));
    /// let state = HttpState::new(
    ///     Arc::new(CredentialTokenAuthenticator::new(store)),
    ///     wins.clone(),
    ///     wins,
    /// );
    /// let _query = state.wins_query.clone();
    /// ```
    pub fn new(
        authenticator: Arc<dyn TokenAuthenticator>,
        wins_query: Arc<dyn WinsQuery>,
        wins_command: Arc<dyn WinsCommand>,
    ) -> Self {
        Self {
            authenticator,
            wins_query,
            wins_command,
        }
    }
}

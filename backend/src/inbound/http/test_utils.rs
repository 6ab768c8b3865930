//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::web;

use crate::domain::{AccessToken, CredentialTokenAuthenticator, User, UserId, WinService};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::{InMemoryCredentialStore, InMemoryWinRepository};

/// Format a token as a `Bearer` authorization header value.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// In-memory adapters wired into an [`HttpState`].
pub struct TestContext {
    credentials: Arc<InMemoryCredentialStore>,
    state: web::Data<HttpState>,
}

impl TestContext {
    /// Build a context with no users and no wins.
    pub fn new() -> Self {
        let credentials = Arc::new(InMemoryCredentialStore::default());
        let wins = Arc::new(WinService::new(Arc::new(InMemoryWinRepository::default())));
        let state = HttpState::new(
            Arc::new(CredentialTokenAuthenticator::new(Arc::clone(&credentials))),
            wins.clone(),
            wins,
        );
        Self {
            credentials,
            state: web::Data::new(state),
        }
    }

    /// Register a user with a fresh random token.
    pub fn seed_user(&self, email: &str) -> (UserId, String) {
        let id = UserId::random();
        let token = uuid::Uuid::new_v4().simple().to_string();
        let user = User::new(id, email).expect("valid test user");
        self.credentials
            .issue_token(user, AccessToken::new(token.as_str()).expect("valid token"));
        (id, token)
    }

    /// Shared handler state.
    pub fn state(&self) -> web::Data<HttpState> {
        self.state.clone()
    }
}

//! In-memory credential store keyed by access token.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{CredentialStore, CredentialStoreError};
use crate::domain::{AccessToken, User, UserId};

/// Credential store holding one live token per user.
///
/// # Examples
/// ```
/// use wins::domain::{AccessToken, User, UserId};
/// use wins::outbound::memory::InMemoryCredentialStore;
///
/// let store = InMemoryCredentialStore::default();
/// let user = User::new(UserId::random(), "ada@example.com").expect("valid user");
/// store.issue_token(user, AccessToken::new("secret").expect("token"));
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    by_token: RwLock<HashMap<String, User>>,
}

impl InMemoryCredentialStore {
    /// Register `user` with `token`, replacing any token the user held.
    ///
    /// A token already held by a different user is reassigned, keeping the
    /// token-to-user mapping unique.
    pub fn issue_token(&self, user: User, token: AccessToken) {
        let mut by_token = self
            .by_token
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let id: UserId = *user.id();
        by_token.retain(|_, existing| *existing.id() != id);
        by_token.insert(token.expose().to_owned(), user);
    }

    /// Number of users with a live token.
    pub fn len(&self) -> usize {
        self.by_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no user holds a token.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_token(
        &self,
        token: &AccessToken,
    ) -> Result<Option<User>, CredentialStoreError> {
        let by_token = self
            .by_token
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(by_token.get(token.expose()).cloned())
    }
}

//! Bearer token authentication.
//!
//! Two header spellings are accepted and resolve identically:
//!
//! ```text
//! Authorization: Token token=<value>
//! Authorization: Bearer <value>
//! ```
//!
//! The token is looked up by exact match in the credential store. Lookups are
//! read-only; a token that matches no user is indistinguishable from a missing
//! header as far as the caller is concerned.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{CredentialStore, CredentialStoreError, TokenAuthenticator};
use crate::domain::{AccessToken, Error, UserId};

const BEARER_SCHEME: &str = "bearer";
const TOKEN_SCHEME: &str = "token";
const TOKEN_PARAMETER: &str = "token=";

/// Reasons a request fails authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthenticationError {
    /// No `Authorization` header was sent.
    #[error("authorization header is missing")]
    MissingHeader,
    /// The header does not use a supported scheme or carries no token.
    #[error("authorization header is malformed")]
    MalformedHeader,
    /// The token does not belong to any user.
    #[error("token does not match any user")]
    UnknownToken,
}

impl From<AuthenticationError> for Error {
    fn from(value: AuthenticationError) -> Self {
        Error::unauthorized(value.to_string())
    }
}

impl AccessToken {
    /// Extract the token from an `Authorization` header value.
    ///
    /// Scheme names are matched case-insensitively; the token itself is
    /// returned verbatim.
    ///
    /// # Examples
    /// ```
    /// use wins::domain::AccessToken;
    ///
    /// let bearer = AccessToken::from_authorization_header("Bearer abc123").unwrap();
    /// let legacy = AccessToken::from_authorization_header("Token token=abc123").unwrap();
    /// assert_eq!(bearer, legacy);
    /// ```
    pub fn from_authorization_header(value: &str) -> Result<Self, AuthenticationError> {
        let (scheme, credentials) = value
            .split_once(' ')
            .ok_or(AuthenticationError::MalformedHeader)?;

        let raw = if scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
            credentials
        } else if scheme.eq_ignore_ascii_case(TOKEN_SCHEME) {
            credentials
                .strip_prefix(TOKEN_PARAMETER)
                .ok_or(AuthenticationError::MalformedHeader)?
        } else {
            return Err(AuthenticationError::MalformedHeader);
        };

        if raw.is_empty() || raw.contains(char::is_whitespace) {
            return Err(AuthenticationError::MalformedHeader);
        }

        AccessToken::new(raw).map_err(|_| AuthenticationError::MalformedHeader)
    }
}

fn map_store_error(error: CredentialStoreError) -> Error {
    match error {
        CredentialStoreError::Connection { message } => {
            error!(%message, "credential store unavailable");
            Error::service_unavailable("credential store unavailable")
        }
        CredentialStoreError::Query { message } => {
            error!(%message, "credential store query failed");
            Error::internal(format!("credential store error: {message}"))
        }
    }
}

/// Authenticator resolving bearer tokens through a [`CredentialStore`].
#[derive(Clone)]
pub struct CredentialTokenAuthenticator<S> {
    store: Arc<S>,
}

impl<S> CredentialTokenAuthenticator<S> {
    /// Create an authenticator backed by `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> TokenAuthenticator for CredentialTokenAuthenticator<S>
where
    S: CredentialStore,
{
    async fn authenticate(&self, authorization: Option<&str>) -> Result<UserId, Error> {
        let header = authorization.ok_or(AuthenticationError::MissingHeader);
        let token = header.and_then(AccessToken::from_authorization_header);
        let token = match token {
            Ok(token) => token,
            Err(reason) => {
                debug!(%reason, "request rejected before token lookup");
                return Err(reason.into());
            }
        };

        match self.store.find_by_token(&token).await.map_err(map_store_error)? {
            Some(user) => Ok(*user.id()),
            None => {
                debug!("bearer token did not resolve to a user");
                Err(AuthenticationError::UnknownToken.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::User;
    use crate::domain::ports::MockCredentialStore;
    use rstest::rstest;
    use rstest_bdd_macros::{given, then};

    const TOKEN: &str = "0f3c9a2e8b7d4c1a9e6f5d4c3b2a1908";

    #[rstest]
    #[case("Bearer abc", "abc")]
    #[case("bearer abc", "abc")]
    #[case("Token token=abc", "abc")]
    #[case("token token=abc", "abc")]
    #[case("Bearer Token=abc", "Token=abc")]
    fn parses_supported_schemes(#[case] header: &str, #[case] expected: &str) {
        let token = AccessToken::from_authorization_header(header).expect("valid header");
        assert_eq!(token.expose(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("Bearer")]
    #[case("Bearer ")]
    #[case("Bearer a b")]
    #[case("Token abc")]
    #[case("Token token=")]
    #[case("Basic dXNlcjpwYXNz")]
    #[case("abc")]
    fn rejects_malformed_headers(#[case] header: &str) {
        assert_eq!(
            AccessToken::from_authorization_header(header),
            Err(AuthenticationError::MalformedHeader)
        );
    }

    struct Scenario {
        store: MockCredentialStore,
        header: Option<String>,
    }

    fn store_knowing(token: &'static str, user: User) -> MockCredentialStore {
        let mut store = MockCredentialStore::new();
        store
            .expect_find_by_token()
            .returning(move |candidate| {
                Ok((candidate.expose() == token).then(|| user.clone()))
            });
        store
    }

    fn fixture_user() -> User {
        let id = UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("fixture id");
        User::new(id, "caleb@example.com").expect("fixture user")
    }

    #[given("a request carrying a Bearer header with a known token")]
    fn a_bearer_request_with_a_known_token() -> Scenario {
        Scenario {
            store: store_knowing(TOKEN, fixture_user()),
            header: Some(format!("Bearer {TOKEN}")),
        }
    }

    #[given("a request carrying a legacy Token header with a known token")]
    fn a_legacy_request_with_a_known_token() -> Scenario {
        Scenario {
            store: store_knowing(TOKEN, fixture_user()),
            header: Some(format!("Token token={TOKEN}")),
        }
    }

    #[given("a request carrying an unknown token")]
    fn a_request_with_an_unknown_token() -> Scenario {
        Scenario {
            store: store_knowing(TOKEN, fixture_user()),
            header: Some("Bearer notarealtoken".to_owned()),
        }
    }

    #[given("a request without an authorization header")]
    fn a_request_without_a_header() -> Scenario {
        let mut store = MockCredentialStore::new();
        store.expect_find_by_token().never();
        Scenario {
            store,
            header: None,
        }
    }

    async fn the_authenticator_runs(scenario: Scenario) -> Result<UserId, Error> {
        let authenticator = CredentialTokenAuthenticator::new(Arc::new(scenario.store));
        authenticator.authenticate(scenario.header.as_deref()).await
    }

    #[then("the owning user id is returned")]
    fn the_owning_user_id_is_returned(result: Result<UserId, Error>) {
        let id = result.expect("authentication succeeds");
        assert_eq!(&id, fixture_user().id());
    }

    #[then("an unauthorised error is returned")]
    fn an_unauthorised_error_is_returned(result: Result<UserId, Error>) {
        let error = result.expect_err("authentication fails");
        assert_eq!(error.code(), ErrorCode::Unauthorized);
    }

    #[rstest]
    #[tokio::test]
    async fn bearer_header_resolves_identity() {
        let result = the_authenticator_runs(a_bearer_request_with_a_known_token()).await;
        the_owning_user_id_is_returned(result);
    }

    #[rstest]
    #[tokio::test]
    async fn legacy_header_resolves_identity() {
        let result = the_authenticator_runs(a_legacy_request_with_a_known_token()).await;
        the_owning_user_id_is_returned(result);
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_token_is_unauthorised() {
        let result = the_authenticator_runs(a_request_with_an_unknown_token()).await;
        an_unauthorised_error_is_returned(result);
    }

    #[rstest]
    #[tokio::test]
    async fn missing_header_is_unauthorised_without_lookup() {
        let result = the_authenticator_runs(a_request_without_a_header()).await;
        an_unauthorised_error_is_returned(result);
    }

    #[rstest]
    #[tokio::test]
    async fn malformed_header_skips_store_lookup() {
        let mut store = MockCredentialStore::new();
        store.expect_find_by_token().never();
        let authenticator = CredentialTokenAuthenticator::new(Arc::new(store));

        let error = authenticator
            .authenticate(Some("Basic dXNlcjpwYXNz"))
            .await
            .expect_err("basic auth is not supported");
        assert_eq!(error.code(), ErrorCode::Unauthorized);
    }

    #[rstest]
    #[case(CredentialStoreError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(CredentialStoreError::query("syntax"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn store_failures_are_not_reported_as_unauthorised(
        #[case] failure: CredentialStoreError,
        #[case] expected: ErrorCode,
    ) {
        let mut store = MockCredentialStore::new();
        store
            .expect_find_by_token()
            .return_once(move |_| Err(failure));
        let authenticator = CredentialTokenAuthenticator::new(Arc::new(store));

        let error = authenticator
            .authenticate(Some("Bearer abc"))
            .await
            .expect_err("store failure propagates");
        assert_eq!(error.code(), expected);
    }
}

//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `WINS_*` environment variables and an optional
//! config file, in OrthoConfig's usual precedence.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use wins::domain::{AccessToken, User, UserId, UserValidationError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DEV_EMAIL: &str = "dev@localhost";

/// Problems found while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("bind address `{value}` is not a socket address: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("dev_email is set but dev_token is not")]
    DevEmailWithoutToken,
    #[error("dev user is invalid: {0}")]
    InvalidDevUser(#[from] UserValidationError),
}

/// Raw settings as loaded from the environment.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "WINS")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL. In-memory adapters are used when unset.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub db_pool_size: Option<u32>,
    /// Token for a user seeded into the in-memory credential store.
    pub dev_token: Option<String>,
    /// Email of the seeded dev user.
    pub dev_email: Option<String>,
}

impl ServerSettings {
    /// Parse the configured bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value
            .parse()
            .map_err(|source| SettingsError::InvalidBindAddr {
                value: value.to_owned(),
                source,
            })
    }

    /// Build the dev user and token, if one is configured.
    pub fn dev_user(&self) -> Result<Option<(User, AccessToken)>, SettingsError> {
        let Some(token) = self.dev_token.as_deref() else {
            return match self.dev_email {
                Some(_) => Err(SettingsError::DevEmailWithoutToken),
                None => Ok(None),
            };
        };
        let email = self.dev_email.as_deref().unwrap_or(DEFAULT_DEV_EMAIL);
        let user = User::new(UserId::random(), email)?;
        Ok(Some((user, AccessToken::new(token)?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "WINS_BIND_ADDR",
        "WINS_DATABASE_URL",
        "WINS_DB_POOL_SIZE",
        "WINS_DEV_TOKEN",
        "WINS_DEV_EMAIL",
    ];

    fn load_with(overrides: &[(&str, &str)]) -> ServerSettings {
        let vars = VARS.map(|name| {
            let value = overrides
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_owned());
            (name, value)
        });
        let _guard = lock_env(vars);
        ServerSettings::load_from_iter([OsString::from("wins")]).expect("config should load")
    }

    #[rstest]
    fn defaults_use_memory_adapters_on_port_8080() {
        let settings = load_with(&[]);
        assert_eq!(
            settings.bind_addr().expect("default parses"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("literal")
        );
        assert!(settings.database_url.is_none());
        assert!(settings.dev_user().expect("no dev user").is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let settings = load_with(&[
            ("WINS_BIND_ADDR", "127.0.0.1:9000"),
            ("WINS_DATABASE_URL", "postgres://localhost/wins"),
            ("WINS_DB_POOL_SIZE", "4"),
        ]);
        assert_eq!(
            settings.bind_addr().expect("override parses").port(),
            9000
        );
        assert_eq!(
            settings.database_url.as_deref(),
            Some("postgres://localhost/wins")
        );
        assert_eq!(settings.db_pool_size, Some(4));
    }

    #[rstest]
    fn dev_token_seeds_a_user() {
        let settings = load_with(&[
            ("WINS_DEV_TOKEN", "letmein"),
            ("WINS_DEV_EMAIL", "ada@example.com"),
        ]);
        let (user, token) = settings
            .dev_user()
            .expect("valid dev user")
            .expect("dev user configured");
        assert_eq!(user.email(), "ada@example.com");
        assert_eq!(token.expose(), "letmein");
    }

    #[rstest]
    fn dev_email_alone_is_rejected() {
        let settings = load_with(&[("WINS_DEV_EMAIL", "ada@example.com")]);
        assert!(matches!(
            settings.dev_user(),
            Err(SettingsError::DevEmailWithoutToken)
        ));
    }

    #[rstest]
    fn dev_token_with_whitespace_is_rejected() {
        let settings = load_with(&[("WINS_DEV_TOKEN", "let me in")]);
        assert!(matches!(
            settings.dev_user(),
            Err(SettingsError::InvalidDevUser(
                UserValidationError::TokenContainsWhitespace
            ))
        ));
    }

    #[rstest]
    fn unparseable_bind_addr_is_reported() {
        let settings = load_with(&[("WINS_BIND_ADDR", "localhost")]);
        assert!(matches!(
            settings.bind_addr(),
            Err(SettingsError::InvalidBindAddr { .. })
        ));
    }
}

//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use wins::domain::{AccessToken, User};
use wins::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) dev_user: Option<(User, AccessToken)>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            dev_user: None,
        }
    }

    /// Attach a database connection pool.
    ///
    /// When provided, the Diesel adapters replace the in-memory ones.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Seed one user into the in-memory credential store.
    ///
    /// Ignored when a database pool is attached.
    #[must_use]
    pub fn with_dev_user(mut self, dev_user: Option<(User, AccessToken)>) -> Self {
        self.dev_user = dev_user;
        self
    }
}

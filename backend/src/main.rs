//! Wins API entry-point: loads settings, initialises logging and serves HTTP.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, ServerSettings, create_server};
use wins::inbound::http::health::HealthState;
use wins::outbound::persistence::{DbPool, PoolConfig};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
}

async fn build_config(settings: &ServerSettings) -> std::io::Result<ServerConfig> {
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let dev_user = settings.dev_user().map_err(std::io::Error::other)?;
    let config = ServerConfig::new(bind_addr).with_dev_user(dev_user);

    let Some(url) = settings.database_url.as_deref() else {
        return Ok(config);
    };
    let mut pool_config = PoolConfig::new(url);
    if let Some(size) = settings.db_pool_size {
        pool_config = pool_config.with_max_size(size);
    }
    let pool = DbPool::new(pool_config)
        .await
        .map_err(std::io::Error::other)?;
    Ok(config.with_db_pool(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    let config = build_config(&settings).await?;
    info!(bind_addr = %config.bind_addr, "starting wins API");

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await
}

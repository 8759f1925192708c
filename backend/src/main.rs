//! Backend entry-point: configuration, pool, and server startup.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
use uuid::Uuid;

use backend::outbound::persistence::{DbPool, PoolConfig};
use backend::server::{ServerConfig, build_http_state, create_server};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3001";

fn bind_addr() -> std::io::Result<SocketAddr> {
    let raw = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());
    raw.parse()
        .map_err(|err| std::io::Error::other(format!("invalid BIND_ADDR {raw:?}: {err}")))
}

/// Resolve the token-signing secret.
///
/// Production requires `JWT_SECRET`. Development builds (or an explicit
/// `JWT_ALLOW_EPHEMERAL=1`) fall back to a random per-process secret,
/// which invalidates all tokens on restart.
fn jwt_secret() -> std::io::Result<String> {
    match env::var("JWT_SECRET") {
        Ok(secret) if !secret.is_empty() => Ok(secret),
        _ => {
            let allow_dev = env::var("JWT_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!("JWT_SECRET not set; using an ephemeral signing secret (dev only)");
                Ok(Uuid::new_v4().to_string())
            } else {
                Err(std::io::Error::other("JWT_SECRET must be set"))
            }
        }
    }
}

fn pool_config(database_url: &str) -> PoolConfig {
    let mut config = PoolConfig::new(database_url);
    if let Some(size) = env::var("DB_POOL_SIZE").ok().and_then(|v| v.parse().ok()) {
        config = config.with_max_size(size);
    }
    if let Some(secs) = env::var("DB_CONNECT_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
    {
        config = config.with_connection_timeout(Duration::from_secs(secs));
    }
    config
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let bind_addr = bind_addr()?;
    let database_url = env::var("DATABASE_URL")
        .map_err(|_| std::io::Error::other("DATABASE_URL must be set"))?;
    let jwt_secret = jwt_secret()?;

    let pool = DbPool::new(pool_config(&database_url))
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;

    let http_state = build_http_state(pool, &jwt_secret);
    let (server, health_state) = create_server(&ServerConfig::new(bind_addr), http_state)?;

    health_state.mark_ready();
    server.await
}

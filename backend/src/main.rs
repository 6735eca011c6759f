//! Service entry-point: loads settings, prepares storage and serves the API.

mod server;

use color_eyre::eyre::{Context as _, Result};
use ortho_config::OrthoConfig as _;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use dmaker::outbound::persistence::{DbPool, run_migrations};
use server::{AppSettings, ServerConfig, create_server};

async fn connect_database(settings: &AppSettings) -> Result<Option<DbPool>> {
    let Some(pool_config) = settings.pool_config() else {
        warn!("no database URL configured; developers are kept in memory");
        return Ok(None);
    };

    if settings.skip_migrations {
        info!("skipping database migrations");
    } else {
        run_migrations(pool_config.database_url())
            .await
            .wrap_err("failed to apply database migrations")?;
    }

    let pool = DbPool::new(pool_config)
        .await
        .wrap_err("failed to build database pool")?;
    Ok(Some(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .wrap_err("failed to load settings")?;
    let bind_addr = settings
        .bind_addr()
        .wrap_err_with(|| format!("invalid bind host {}", settings.host()))?;

    let mut config = ServerConfig::new(bind_addr);
    if let Some(pool) = connect_database(&settings).await? {
        config = config.with_db_pool(pool);
    }

    let (server, health_state) = create_server(config)?;
    info!(%bind_addr, "listening");

    let outcome = server.await;
    health_state.mark_unhealthy();
    info!("server stopped");
    outcome.wrap_err("server terminated with an error")
}

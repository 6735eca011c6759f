//! Builders for the HTTP and health states.

use std::sync::Arc;

use actix_web::web;

use dmaker::domain::ports::{DeveloperRepository, DeveloperStoreHealth};
use dmaker::inbound::http::health::HealthState;
use dmaker::inbound::http::state::HttpState;
use dmaker::outbound::memory::InMemoryDeveloperRepository;
use dmaker::outbound::persistence::DieselDeveloperRepository;
use tracing::info;

use super::ServerConfig;

/// States shared by every worker, backed by one developer store.
pub(super) struct AppStates {
    pub(super) http: web::Data<HttpState>,
    pub(super) health: web::Data<HealthState>,
}

fn states_over<R>(repository: Arc<R>) -> AppStates
where
    R: DeveloperRepository + DeveloperStoreHealth + 'static,
{
    info!(store = repository.store_kind(), "developer store selected");
    AppStates {
        http: web::Data::new(HttpState::from_repository(repository.clone())),
        health: web::Data::new(HealthState::new(repository)),
    }
}

/// Wire the developer service over PostgreSQL when a pool is configured,
/// otherwise over the in-memory store. Readiness pings the same store.
pub(super) fn build_states(config: &ServerConfig) -> AppStates {
    config.db_pool.as_ref().map_or_else(
        || states_over(Arc::new(InMemoryDeveloperRepository::new())),
        |pool| states_over(Arc::new(DieselDeveloperRepository::new(pool.clone()))),
    )
}

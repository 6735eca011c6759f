//! Liveness and readiness endpoints for orchestrators and load balancers.
//!
//! Readiness needs both the bound listener and a developer store that
//! answers a ping; liveness only tracks whether the process is draining.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, HttpResponseBuilder, get, http::header, web};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::ports::DeveloperStoreHealth;

/// Body of the readiness response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessReport {
    /// `ready`, `starting` or `store_unavailable`.
    #[schema(example = "ready")]
    pub status: String,
    /// Store backing the developer registry.
    #[schema(example = "postgres")]
    pub store: String,
}

impl ReadinessReport {
    fn new(status: &str, store: &str) -> Self {
        Self {
            status: status.to_owned(),
            store: store.to_owned(),
        }
    }
}

/// Readiness and liveness flags plus the store the readiness check pings.
///
/// Starts live but not ready; the server marks it ready once bound.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
    store: Arc<dyn DeveloperStoreHealth>,
}

impl HealthState {
    /// New state over `store`: live, not ready.
    #[must_use]
    pub fn new(store: Arc<dyn DeveloperStoreHealth>) -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
            store,
        }
    }

    /// Mark the service ready to take traffic.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Fail liveness so orchestrators stop routing during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Whether the listener has been bound.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Whether the liveness check succeeds.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    /// Name of the store the readiness check pings.
    #[must_use]
    pub fn store_kind(&self) -> &'static str {
        self.store.store_kind()
    }

    fn response(ok: bool) -> HttpResponseBuilder {
        let mut response = if ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };
        response.insert_header((header::CACHE_CONTROL, "no-store"));
        response
    }
}

/// Readiness: 200 once bound and the developer store answers, 503 otherwise.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic", body = ReadinessReport),
        (status = 503, description = "Server is starting or its store is unreachable", body = ReadinessReport)
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    let store = state.store_kind();
    if !state.is_ready() {
        return HealthState::response(false).json(ReadinessReport::new("starting", store));
    }
    if let Err(err) = state.store.ping().await {
        warn!(store, error = %err, "developer store unreachable");
        return HealthState::response(false).json(ReadinessReport::new("store_unavailable", store));
    }
    HealthState::response(true).json(ReadinessReport::new("ready", store))
}

/// Liveness: 200 while alive, 503 once draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::response(state.is_alive()).finish()
}

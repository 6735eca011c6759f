//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::{AppSettings, ServerConfig};

use state_builders::{AppStates, build_states};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use dmaker::Trace;
#[cfg(debug_assertions)]
use dmaker::doc::ApiDoc;
use dmaker::inbound::http::api_scope;
use dmaker::inbound::http::error::unknown_route;
use dmaker::inbound::http::health::{HealthState, live, ready};
use dmaker::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api_scope())
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.default_service(web::to(unknown_route))
}

/// Construct an Actix HTTP server from the configuration.
///
/// Returns the server together with its health state, which is marked ready
/// once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<(Server, web::Data<HealthState>)> {
    let AppStates { http, health } = build_states(&config);
    let server_health_state = health.clone();
    let ServerConfig { bind_addr, .. } = config;

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http.clone()))
        .bind(bind_addr)?
        .run();

    health.mark_ready();
    Ok((server, health))
}

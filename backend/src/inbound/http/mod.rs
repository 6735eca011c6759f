//! HTTP inbound adapter exposing REST endpoints.

pub mod developers;
pub mod error;
pub mod health;
pub mod state;
pub mod validation;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// Versioned API scope with every developer route and JSON error handling.
///
/// The scope expects an [`state::HttpState`] in app data.
#[must_use]
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .configure(developers::configure)
}

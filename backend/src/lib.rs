//! Developer registry service library.
//!
//! The crate is split into a `domain` core, `inbound` adapters (HTTP) and
//! `outbound` adapters (PostgreSQL and in-memory storage).

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;

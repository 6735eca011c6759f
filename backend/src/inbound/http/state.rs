//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` and depend only on
//! the driving ports, so they stay testable without I/O.

use std::sync::Arc;

use crate::domain::DeveloperService;
use crate::domain::ports::{DeveloperCommand, DeveloperQuery, DeveloperRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Developer writes.
    pub developers: Arc<dyn DeveloperCommand>,
    /// Developer reads.
    pub developers_query: Arc<dyn DeveloperQuery>,
}

impl HttpState {
    /// Construct state from separate command and query ports.
    #[must_use]
    pub fn new(
        developers: Arc<dyn DeveloperCommand>,
        developers_query: Arc<dyn DeveloperQuery>,
    ) -> Self {
        Self {
            developers,
            developers_query,
        }
    }

    /// Construct state where one [`DeveloperService`] serves both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use dmaker::inbound::http::state::HttpState;
    /// use dmaker::outbound::memory::InMemoryDeveloperRepository;
    ///
    /// let state = HttpState::from_repository(Arc::new(InMemoryDeveloperRepository::new()));
    /// let _query = state.developers_query.clone();
    /// ```
    #[must_use]
    pub fn from_repository<R>(repository: Arc<R>) -> Self
    where
        R: DeveloperRepository + 'static,
    {
        let service = Arc::new(DeveloperService::new(repository));
        Self::new(service.clone(), service)
    }
}

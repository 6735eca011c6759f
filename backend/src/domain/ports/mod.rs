//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod developer_command;
mod developer_query;
mod developer_repository;
mod developer_store_health;

#[cfg(test)]
pub use developer_command::MockDeveloperCommand;
pub use developer_command::{CreateDeveloperRequest, DeveloperCommand, EditDeveloperRequest};
#[cfg(test)]
pub use developer_query::MockDeveloperQuery;
pub use developer_query::{DeveloperDetail, DeveloperQuery, DeveloperSummary};
#[cfg(test)]
pub use developer_repository::MockDeveloperRepository;
pub use developer_repository::{DeveloperPersistenceError, DeveloperRepository};
#[cfg(test)]
pub use developer_store_health::MockDeveloperStoreHealth;
pub use developer_store_health::DeveloperStoreHealth;

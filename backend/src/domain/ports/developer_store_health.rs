//! Port for checking that the developer store can serve requests.

use async_trait::async_trait;

use super::DeveloperPersistenceError;

/// Reachability check for whichever store backs the developer repository.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeveloperStoreHealth: Send + Sync {
    /// Short name of the backing store, such as `postgres` or `memory`.
    fn store_kind(&self) -> &'static str;

    /// Succeed when the store answers a trivial request.
    async fn ping(&self) -> Result<(), DeveloperPersistenceError>;
}

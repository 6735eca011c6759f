//! Port abstraction for developer persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Developer, EmploymentStatus, MemberId, RetiredDeveloper};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by developer repository adapters.
    pub enum DeveloperPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "developer repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "developer repository query failed: {message}",
        /// The store already holds a developer with this member id.
        DuplicateMemberId { member_id: String } =>
            "developer with member id {member_id} already exists",
    }
}

/// Port for reading and writing developer records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeveloperRepository: Send + Sync {
    /// Fetch a developer by member id, whatever its status.
    async fn find_by_member_id(
        &self,
        member_id: &MemberId,
    ) -> Result<Option<Developer>, DeveloperPersistenceError>;

    /// All developers with `status`, in insertion order.
    async fn find_all_by_status(
        &self,
        status: EmploymentStatus,
    ) -> Result<Vec<Developer>, DeveloperPersistenceError>;

    /// Insert a new developer.
    ///
    /// Fails with [`DeveloperPersistenceError::DuplicateMemberId`] when the
    /// member id is already taken.
    async fn create(&self, developer: &Developer) -> Result<Developer, DeveloperPersistenceError>;

    /// Insert or update a developer keyed by member id.
    ///
    /// An existing record keeps its stored status; only [`Self::retire`]
    /// changes it. Returns the record as stored.
    async fn save(&self, developer: &Developer) -> Result<Developer, DeveloperPersistenceError>;

    /// Mark a developer RETIRED and write its audit record, atomically.
    ///
    /// Only the status of an existing record changes. An audit record that
    /// already exists for the member id is left as is. Returns the record as
    /// stored.
    async fn retire(
        &self,
        developer: &Developer,
        record: &RetiredDeveloper,
    ) -> Result<Developer, DeveloperPersistenceError>;
}

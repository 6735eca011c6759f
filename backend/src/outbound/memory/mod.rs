//! In-process developer store.
//!
//! Backs the service when no database URL is configured and in tests that
//! exercise the full stack without PostgreSQL. Records live in insertion
//! order behind one mutex, so `retire` updates the developer and appends the
//! audit record under a single lock.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{DeveloperPersistenceError, DeveloperRepository, DeveloperStoreHealth};
use crate::domain::{Developer, EmploymentStatus, MemberId, RetiredDeveloper};

#[derive(Debug, Default)]
struct Store {
    developers: Vec<Developer>,
    retired: Vec<RetiredDeveloper>,
}

impl Store {
    fn position(&self, member_id: &MemberId) -> Option<usize> {
        self.developers
            .iter()
            .position(|developer| &developer.member_id == member_id)
    }

    fn find_mut(&mut self, member_id: &MemberId) -> Option<&mut Developer> {
        self.developers
            .iter_mut()
            .find(|developer| &developer.member_id == member_id)
    }

    /// Overwrite everything but the stored status, or insert when absent.
    fn save(&mut self, developer: &Developer) -> Developer {
        let Some(stored) = self.find_mut(&developer.member_id) else {
            self.developers.push(developer.clone());
            return developer.clone();
        };
        *stored = Developer {
            status: stored.status,
            ..developer.clone()
        };
        stored.clone()
    }

    /// Flip the stored status only, or insert a retired copy when absent.
    fn mark_retired(&mut self, developer: &Developer) -> Developer {
        let Some(stored) = self.find_mut(&developer.member_id) else {
            let retired = Developer {
                status: EmploymentStatus::Retired,
                ..developer.clone()
            };
            self.developers.push(retired.clone());
            return retired;
        };
        stored.status = EmploymentStatus::Retired;
        stored.clone()
    }
}

/// Mutex-guarded, insertion-ordered implementation of [`DeveloperRepository`].
#[derive(Debug, Default)]
pub struct InMemoryDeveloperRepository {
    store: Mutex<Store>,
}

impl InMemoryDeveloperRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, DeveloperPersistenceError> {
        self.store
            .lock()
            .map_err(|_| DeveloperPersistenceError::connection("in-memory store lock poisoned"))
    }

    /// Audit records written so far, oldest first.
    ///
    /// # Errors
    /// Fails only when the store lock is poisoned.
    pub fn retired_records(&self) -> Result<Vec<RetiredDeveloper>, DeveloperPersistenceError> {
        Ok(self.lock()?.retired.clone())
    }
}

#[async_trait]
impl DeveloperRepository for InMemoryDeveloperRepository {
    async fn find_by_member_id(
        &self,
        member_id: &MemberId,
    ) -> Result<Option<Developer>, DeveloperPersistenceError> {
        let store = self.lock()?;
        Ok(store
            .developers
            .iter()
            .find(|developer| &developer.member_id == member_id)
            .cloned())
    }

    async fn find_all_by_status(
        &self,
        status: EmploymentStatus,
    ) -> Result<Vec<Developer>, DeveloperPersistenceError> {
        let store = self.lock()?;
        Ok(store
            .developers
            .iter()
            .filter(|developer| developer.status == status)
            .cloned()
            .collect())
    }

    async fn create(&self, developer: &Developer) -> Result<Developer, DeveloperPersistenceError> {
        let mut store = self.lock()?;
        if store.position(&developer.member_id).is_some() {
            return Err(DeveloperPersistenceError::duplicate_member_id(
                developer.member_id.as_ref(),
            ));
        }
        store.developers.push(developer.clone());
        Ok(developer.clone())
    }

    async fn save(&self, developer: &Developer) -> Result<Developer, DeveloperPersistenceError> {
        Ok(self.lock()?.save(developer))
    }

    async fn retire(
        &self,
        developer: &Developer,
        record: &RetiredDeveloper,
    ) -> Result<Developer, DeveloperPersistenceError> {
        let mut store = self.lock()?;
        let retired = store.mark_retired(developer);
        if !store
            .retired
            .iter()
            .any(|existing| existing.member_id == record.member_id)
        {
            store.retired.push(record.clone());
        }
        Ok(retired)
    }
}

#[async_trait]
impl DeveloperStoreHealth for InMemoryDeveloperRepository {
    fn store_kind(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> Result<(), DeveloperPersistenceError> {
        self.lock().map(drop)
    }
}

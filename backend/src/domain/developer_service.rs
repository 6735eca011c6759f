//! Developer domain service.
//!
//! Implements the developer driving ports on top of a
//! [`DeveloperRepository`]. Seniority rules run before any store access;
//! store failures surface as internal errors.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    CreateDeveloperRequest, DeveloperCommand, DeveloperDetail, DeveloperPersistenceError,
    DeveloperQuery, DeveloperRepository, DeveloperSummary, EditDeveloperRequest,
};
use crate::domain::{Developer, EmploymentStatus, Error, MemberId, validate_experience_years};

fn map_repository_error(error: DeveloperPersistenceError) -> Error {
    match error {
        DeveloperPersistenceError::Connection { message } => {
            Error::internal(format!("developer repository unavailable: {message}"))
        }
        DeveloperPersistenceError::Query { message } => {
            Error::internal(format!("developer repository error: {message}"))
        }
        DeveloperPersistenceError::DuplicateMemberId { member_id } => duplicate(&member_id),
    }
}

fn duplicate(member_id: &str) -> Error {
    Error::duplicate_member_id(format!("member id {member_id} is already registered"))
        .with_details(json!({ "memberId": member_id }))
}

fn not_found(member_id: &MemberId) -> Error {
    Error::not_found(format!("no developer with member id {member_id}"))
        .with_details(json!({ "memberId": member_id.as_ref() }))
}

/// Developer service implementing [`DeveloperCommand`] and [`DeveloperQuery`].
#[derive(Clone)]
pub struct DeveloperService<R> {
    developer_repo: Arc<R>,
}

impl<R> DeveloperService<R> {
    /// Create a new service backed by the developer repository.
    #[must_use]
    pub const fn new(developer_repo: Arc<R>) -> Self {
        Self { developer_repo }
    }
}

impl<R> DeveloperService<R>
where
    R: DeveloperRepository,
{
    async fn load(&self, member_id: &MemberId) -> Result<Developer, Error> {
        self.developer_repo
            .find_by_member_id(member_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(member_id))
    }
}

#[async_trait]
impl<R> DeveloperQuery for DeveloperService<R>
where
    R: DeveloperRepository,
{
    async fn list_employed(&self) -> Result<Vec<DeveloperSummary>, Error> {
        let developers = self
            .developer_repo
            .find_all_by_status(EmploymentStatus::Employed)
            .await
            .map_err(map_repository_error)?;
        debug!(count = developers.len(), "listed employed developers");
        Ok(developers.iter().map(DeveloperSummary::from).collect())
    }

    async fn get_detail(&self, member_id: &MemberId) -> Result<DeveloperDetail, Error> {
        let developer = self.load(member_id).await?;
        debug!(member_id = %member_id, "loaded developer detail");
        Ok(developer.into())
    }
}

#[async_trait]
impl<R> DeveloperCommand for DeveloperService<R>
where
    R: DeveloperRepository,
{
    async fn create(&self, request: CreateDeveloperRequest) -> Result<DeveloperDetail, Error> {
        validate_experience_years(request.level, request.experience_years)?;

        let existing = self
            .developer_repo
            .find_by_member_id(&request.member_id)
            .await
            .map_err(map_repository_error)?;
        if existing.is_some() {
            warn!(member_id = %request.member_id, "member id already registered");
            return Err(duplicate(request.member_id.as_ref()));
        }

        let developer = Developer::hire(
            request.member_id,
            request.name,
            request.age,
            request.level,
            request.skill_type,
            request.experience_years,
        );
        let created = self
            .developer_repo
            .create(&developer)
            .await
            .map_err(|err| {
                if matches!(err, DeveloperPersistenceError::DuplicateMemberId { .. }) {
                    warn!(member_id = %developer.member_id, "concurrent create lost the race");
                }
                map_repository_error(err)
            })?;

        info!(
            member_id = %created.member_id,
            level = %created.level,
            "developer created"
        );
        Ok(created.into())
    }

    async fn edit(
        &self,
        member_id: &MemberId,
        request: EditDeveloperRequest,
    ) -> Result<DeveloperDetail, Error> {
        validate_experience_years(request.level, request.experience_years)?;

        let mut developer = self.load(member_id).await?;
        developer.reassign(request.level, request.skill_type, request.experience_years);
        let saved = self
            .developer_repo
            .save(&developer)
            .await
            .map_err(map_repository_error)?;

        info!(member_id = %saved.member_id, level = %saved.level, "developer edited");
        Ok(saved.into())
    }

    async fn retire(&self, member_id: &MemberId) -> Result<DeveloperDetail, Error> {
        let mut developer = self.load(member_id).await?;
        if developer.is_retired() {
            debug!(member_id = %member_id, "developer already retired");
            return Ok(developer.into());
        }

        let record = developer.retire();
        let retired = self
            .developer_repo
            .retire(&developer, &record)
            .await
            .map_err(map_repository_error)?;

        info!(member_id = %retired.member_id, level = %retired.level, "developer retired");
        Ok(retired.into())
    }
}

#[cfg(test)]
#[path = "developer_service_tests.rs"]
mod tests;

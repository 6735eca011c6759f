//! Driving port for developer mutations.
//!
//! Requests carry already-parsed domain values; inbound adapters own the
//! conversion from wire bodies and report field-level problems themselves.

use async_trait::async_trait;

use crate::domain::{
    Age, DeveloperLevel, DeveloperName, DeveloperSkillType, Error, ExperienceYears, MemberId,
};

use super::DeveloperDetail;

/// Request to register a developer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDeveloperRequest {
    /// Identifier the developer is registered under.
    pub member_id: MemberId,
    /// Display name.
    pub name: DeveloperName,
    /// Age in years.
    pub age: Age,
    /// Seniority level.
    pub level: DeveloperLevel,
    /// Primary skill.
    pub skill_type: DeveloperSkillType,
    /// Years of professional experience; must fit `level`.
    pub experience_years: ExperienceYears,
}

/// Request to change a developer's level, skill and experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditDeveloperRequest {
    /// New seniority level.
    pub level: DeveloperLevel,
    /// New primary skill.
    pub skill_type: DeveloperSkillType,
    /// New years of experience; must fit `level`.
    pub experience_years: ExperienceYears,
}

/// Domain use-case port for developer writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeveloperCommand: Send + Sync {
    /// Register a new EMPLOYED developer.
    ///
    /// Fails with `level_experience_mismatch` when the experience does not fit
    /// the level, and `duplicate_member_id` when the id is taken by any
    /// developer, retired ones included.
    async fn create(&self, request: CreateDeveloperRequest) -> Result<DeveloperDetail, Error>;

    /// Overwrite level, skill and experience of an existing developer.
    async fn edit(
        &self,
        member_id: &MemberId,
        request: EditDeveloperRequest,
    ) -> Result<DeveloperDetail, Error>;

    /// Retire a developer and record the retirement.
    ///
    /// Retiring a developer that is already RETIRED returns its detail and
    /// writes nothing.
    async fn retire(&self, member_id: &MemberId) -> Result<DeveloperDetail, Error>;
}

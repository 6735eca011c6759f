//! Driving port for developer reads.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    Developer, DeveloperLevel, DeveloperSkillType, EmploymentStatus, Error, MemberId,
};

/// List entry for an employed developer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperSummary {
    /// Registry identifier.
    #[schema(value_type = String, example = "ada-01")]
    pub member_id: MemberId,
    /// Seniority level.
    pub developer_level: DeveloperLevel,
    /// Primary skill.
    pub developer_skill_type: DeveloperSkillType,
    /// Years of professional experience.
    #[schema(value_type = u32, example = 7)]
    pub experience_years: u32,
}

impl From<&Developer> for DeveloperSummary {
    fn from(value: &Developer) -> Self {
        Self {
            member_id: value.member_id.clone(),
            developer_level: value.level,
            developer_skill_type: value.skill_type,
            experience_years: value.experience_years.get(),
        }
    }
}

/// Full view of a single developer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperDetail {
    /// Registry identifier.
    #[schema(value_type = String, example = "ada-01")]
    pub member_id: MemberId,
    /// Display name.
    #[schema(value_type = String, example = "Ada Lovelace")]
    pub name: String,
    /// Age in years.
    #[schema(example = 36)]
    pub age: u32,
    /// Seniority level.
    pub developer_level: DeveloperLevel,
    /// Primary skill.
    pub developer_skill_type: DeveloperSkillType,
    /// Years of professional experience.
    #[schema(example = 7)]
    pub experience_years: u32,
    /// Whether the developer is still employed.
    pub status: EmploymentStatus,
}

impl From<Developer> for DeveloperDetail {
    fn from(value: Developer) -> Self {
        Self {
            member_id: value.member_id,
            name: value.name.into(),
            age: value.age.get(),
            developer_level: value.level,
            developer_skill_type: value.skill_type,
            experience_years: value.experience_years.get(),
            status: value.status,
        }
    }
}

/// Domain use-case port for reading developers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeveloperQuery: Send + Sync {
    /// Employed developers in insertion order.
    async fn list_employed(&self) -> Result<Vec<DeveloperSummary>, Error>;

    /// Detail of one developer, employed or retired.
    ///
    /// Fails with `not_found` when no developer has `member_id`.
    async fn get_detail(&self, member_id: &MemberId) -> Result<DeveloperDetail, Error>;
}

//! Developer API handlers.
//!
//! ```text
//! GET    /api/v1/developers
//! GET    /api/v1/developer/{memberId}
//! POST   /api/v1/create-developers
//! PUT    /api/v1/developer/{memberId}
//! DELETE /api/v1/developer/{memberId}
//! ```
//!
//! Each handler validates its input explicitly, calls exactly one port
//! operation and serialises the result.

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{
    CreateDeveloperRequest, DeveloperDetail, DeveloperSummary, EditDeveloperRequest,
};
use crate::domain::{
    Age, DeveloperLevel, DeveloperName, DeveloperSkillType, Error, ExperienceYears, MemberId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, bounded_u32, domain_value_error, parse_token, require,
};

const MEMBER_ID: FieldName = FieldName::new("memberId");
const NAME: FieldName = FieldName::new("name");
const AGE: FieldName = FieldName::new("age");
const LEVEL: FieldName = FieldName::new("developerLevel");
const SKILL_TYPE: FieldName = FieldName::new("developerSkillType");
const EXPERIENCE_YEARS: FieldName = FieldName::new("experienceYears");

/// Request body for `POST /api/v1/create-developers`.
///
/// Every field is required; absent fields are reported individually.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeveloperBody {
    /// Non-blank identifier of at most 50 characters, without whitespace.
    #[schema(example = "ada-01")]
    pub member_id: Option<String>,
    /// Non-blank display name of at most 50 characters.
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    /// Age in years, at least 1.
    #[schema(example = 36, minimum = 1)]
    pub age: Option<i64>,
    /// Level token such as `JUNIOR` or `SENIOR`.
    #[schema(value_type = Option<DeveloperLevel>)]
    pub developer_level: Option<String>,
    /// Skill token such as `BACK_END`.
    #[schema(value_type = Option<DeveloperSkillType>)]
    pub developer_skill_type: Option<String>,
    /// Years of experience; must fit the level.
    #[schema(example = 7, minimum = 0)]
    pub experience_years: Option<i64>,
}

/// Request body for `PUT /api/v1/developer/{memberId}`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditDeveloperBody {
    /// New level token.
    #[schema(value_type = Option<DeveloperLevel>)]
    pub developer_level: Option<String>,
    /// New skill token.
    #[schema(value_type = Option<DeveloperSkillType>)]
    pub developer_skill_type: Option<String>,
    /// New years of experience; must fit the level.
    #[schema(example = 11, minimum = 0)]
    pub experience_years: Option<i64>,
}

fn parse_member_id(raw: String) -> Result<MemberId, Error> {
    MemberId::new(raw).map_err(|err| domain_value_error(MEMBER_ID, &err))
}

fn parse_level(raw: Option<String>) -> Result<DeveloperLevel, Error> {
    parse_token(&require(raw, LEVEL)?, LEVEL)
}

fn parse_skill_type(raw: Option<String>) -> Result<DeveloperSkillType, Error> {
    parse_token(&require(raw, SKILL_TYPE)?, SKILL_TYPE)
}

fn parse_experience_years(raw: Option<i64>) -> Result<ExperienceYears, Error> {
    bounded_u32(require(raw, EXPERIENCE_YEARS)?, 0, EXPERIENCE_YEARS).map(ExperienceYears::new)
}

/// Validate a create body into a port request.
///
/// Fields are checked in declaration order and the first failure wins.
pub(crate) fn validate_create(body: CreateDeveloperBody) -> Result<CreateDeveloperRequest, Error> {
    let CreateDeveloperBody {
        member_id: raw_member_id,
        name: raw_name,
        age: raw_age,
        developer_level,
        developer_skill_type,
        experience_years,
    } = body;

    let member_id = parse_member_id(require(raw_member_id, MEMBER_ID)?)?;
    let name = DeveloperName::new(require(raw_name, NAME)?)
        .map_err(|err| domain_value_error(NAME, &err))?;
    let age = bounded_u32(require(raw_age, AGE)?, 1, AGE)
        .and_then(|years| Age::new(years).map_err(|err| domain_value_error(AGE, &err)))?;

    Ok(CreateDeveloperRequest {
        member_id,
        name,
        age,
        level: parse_level(developer_level)?,
        skill_type: parse_skill_type(developer_skill_type)?,
        experience_years: parse_experience_years(experience_years)?,
    })
}

/// Validate an edit body into a port request.
pub(crate) fn validate_edit(body: EditDeveloperBody) -> Result<EditDeveloperRequest, Error> {
    Ok(EditDeveloperRequest {
        level: parse_level(body.developer_level)?,
        skill_type: parse_skill_type(body.developer_skill_type)?,
        experience_years: parse_experience_years(body.experience_years)?,
    })
}

/// List employed developers in registration order.
#[utoipa::path(
    get,
    path = "/api/v1/developers",
    responses(
        (status = 200, description = "Employed developers", body = [DeveloperSummary]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["developers"],
    operation_id = "listDevelopers"
)]
#[get("/developers")]
pub async fn list_developers(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<DeveloperSummary>>> {
    let summaries = state.developers_query.list_employed().await?;
    Ok(web::Json(summaries))
}

/// Fetch one developer, employed or retired.
#[utoipa::path(
    get,
    path = "/api/v1/developer/{memberId}",
    params(("memberId" = String, Path, description = "Developer member id")),
    responses(
        (status = 200, description = "Developer detail", body = DeveloperDetail),
        (status = 400, description = "Invalid member id", body = Error),
        (status = 404, description = "No such developer", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["developers"],
    operation_id = "getDeveloper"
)]
#[get("/developer/{member_id}")]
pub async fn get_developer(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeveloperDetail>> {
    let member_id = parse_member_id(path.into_inner())?;
    let detail = state.developers_query.get_detail(&member_id).await?;
    Ok(web::Json(detail))
}

/// Register a developer.
#[utoipa::path(
    post,
    path = "/api/v1/create-developers",
    request_body = CreateDeveloperBody,
    responses(
        (status = 200, description = "Developer created", body = DeveloperDetail),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Member id already registered", body = Error),
        (status = 422, description = "Level does not match experience", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["developers"],
    operation_id = "createDeveloper"
)]
#[post("/create-developers")]
pub async fn create_developer(
    state: web::Data<HttpState>,
    payload: web::Json<CreateDeveloperBody>,
) -> ApiResult<web::Json<DeveloperDetail>> {
    let request = validate_create(payload.into_inner())?;
    let detail = state.developers.create(request).await?;
    Ok(web::Json(detail))
}

/// Change a developer's level, skill type and experience.
#[utoipa::path(
    put,
    path = "/api/v1/developer/{memberId}",
    params(("memberId" = String, Path, description = "Developer member id")),
    request_body = EditDeveloperBody,
    responses(
        (status = 200, description = "Developer updated", body = DeveloperDetail),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "No such developer", body = Error),
        (status = 422, description = "Level does not match experience", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["developers"],
    operation_id = "editDeveloper"
)]
#[put("/developer/{member_id}")]
pub async fn edit_developer(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<EditDeveloperBody>,
) -> ApiResult<web::Json<DeveloperDetail>> {
    let member_id = parse_member_id(path.into_inner())?;
    let request = validate_edit(payload.into_inner())?;
    let detail = state.developers.edit(&member_id, request).await?;
    Ok(web::Json(detail))
}

/// Retire a developer. The record is kept with status RETIRED.
#[utoipa::path(
    delete,
    path = "/api/v1/developer/{memberId}",
    params(("memberId" = String, Path, description = "Developer member id")),
    responses(
        (status = 200, description = "Developer retired", body = DeveloperDetail),
        (status = 400, description = "Invalid member id", body = Error),
        (status = 404, description = "No such developer", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["developers"],
    operation_id = "retireDeveloper"
)]
#[delete("/developer/{member_id}")]
pub async fn retire_developer(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeveloperDetail>> {
    let member_id = parse_member_id(path.into_inner())?;
    let detail = state.developers.retire(&member_id).await?;
    Ok(web::Json(detail))
}

/// Register the developer handlers on a scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_developers)
        .service(get_developer)
        .service(create_developer)
        .service(edit_developer)
        .service(retire_developer);
}

#[cfg(test)]
#[path = "developers_tests.rs"]
mod tests;

//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects the developer and health endpoints together with the
//! request, response and error schemas. Swagger UI serves it in debug builds
//! and the `openapi-dump` binary prints it for external tooling.

use utoipa::OpenApi;

use crate::domain::ports::{DeveloperDetail, DeveloperSummary};
use crate::domain::{DeveloperLevel, DeveloperSkillType, DomainError, EmploymentStatus, ErrorCode};
use crate::inbound::http::developers::{CreateDeveloperBody, EditDeveloperBody};
use crate::inbound::http::health::ReadinessReport;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "DMaker developer registry API",
        description = "Create, list, edit and retire developers with seniority checks."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::developers::list_developers,
        crate::inbound::http::developers::get_developer,
        crate::inbound::http::developers::create_developer,
        crate::inbound::http::developers::edit_developer,
        crate::inbound::http::developers::retire_developer,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        DeveloperSummary,
        DeveloperDetail,
        CreateDeveloperBody,
        EditDeveloperBody,
        DeveloperLevel,
        DeveloperSkillType,
        EmploymentStatus,
        DomainError,
        ErrorCode,
        ReadinessReport
    )),
    tags(
        (name = "developers", description = "Developer registry operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn schema_fields(suffix: &str) -> Vec<String> {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;
        let (_, schema) = schemas
            .into_iter()
            .find(|(name, _)| name.ends_with(suffix))
            .unwrap_or_else(|| panic!("{suffix} schema registered"));
        match schema {
            RefOr::T(Schema::Object(object)) => object.properties.into_keys().collect(),
            _ => panic!("{suffix} should be an object schema"),
        }
    }

    #[rstest]
    #[case("/api/v1/developers")]
    #[case("/api/v1/developer/{memberId}")]
    #[case("/api/v1/create-developers")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn documents_every_route(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "{path} documented");
    }

    #[rstest]
    fn detail_schema_uses_wire_field_names() {
        let fields = schema_fields("DeveloperDetail");
        for expected in [
            "memberId",
            "name",
            "age",
            "developerLevel",
            "developerSkillType",
            "experienceYears",
            "status",
        ] {
            assert!(fields.iter().any(|field| field == expected), "{expected}");
        }
    }

    #[rstest]
    fn error_schema_exposes_code_and_message() {
        let fields = schema_fields("DomainError");
        assert!(fields.iter().any(|field| field == "errorCode"));
        assert!(fields.iter().any(|field| field == "errorMessage"));
    }
}

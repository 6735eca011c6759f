//! Tests for the domain error payload.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(DomainError::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(DomainError::level_experience_mismatch("band"), ErrorCode::LevelExperienceMismatch)]
#[case(DomainError::duplicate_member_id("taken"), ErrorCode::DuplicateMemberId)]
#[case(DomainError::not_found("missing"), ErrorCode::NotFound)]
#[case(DomainError::internal("boom"), ErrorCode::InternalError)]
fn convenience_constructors_set_code(#[case] error: DomainError, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_blank_messages() {
    let result = DomainError::try_new(ErrorCode::InvalidRequest, "   ");
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
fn from_code_uses_default_message() {
    let error = DomainError::from_code(ErrorCode::DuplicateMemberId);
    assert_eq!(error.message(), "member id is already registered");
}

#[rstest]
fn trace_id_is_absent_outside_a_request() {
    assert!(DomainError::internal("boom").trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id.parse().expect("fixture is a UUID");
    let error = TraceId::scope(trace_id, async { DomainError::not_found("missing") }).await;

    assert_eq!(error.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
fn serialises_with_error_code_and_message_fields(expected_trace_id: String) {
    let error = DomainError::level_experience_mismatch("junior developers need at most 4 years")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({ "developerLevel": "JUNIOR", "experienceYears": 5 }));

    let value = serde_json::to_value(&error).expect("error serialises");

    assert_eq!(
        value,
        json!({
            "errorCode": "level_experience_mismatch",
            "errorMessage": "junior developers need at most 4 years",
            "traceId": expected_trace_id,
            "details": { "developerLevel": "JUNIOR", "experienceYears": 5 },
        })
    );
}

#[rstest]
fn omits_optional_fields_when_absent() {
    let value = serde_json::to_value(DomainError::not_found("missing")).expect("error serialises");
    assert!(value.get("traceId").is_none());
    assert!(value.get("details").is_none());
}

#[rstest]
fn deserialising_rejects_blank_messages() {
    let payload = json!({ "errorCode": "not_found", "errorMessage": " " });
    let result = serde_json::from_value::<DomainError>(payload);
    assert!(result.is_err());
}

#[rstest]
#[tokio::test]
async fn deserialising_ignores_ambient_trace_id(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id.parse().expect("fixture is a UUID");
    let payload = json!({ "errorCode": "invalid_request", "errorMessage": "bad" });

    let error = TraceId::scope(trace_id, async move {
        serde_json::from_value::<DomainError>(payload).expect("valid payload decodes")
    })
    .await;

    assert!(error.trace_id().is_none());
}

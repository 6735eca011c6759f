//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every failure becomes an `invalid_request` error whose details name the
//! offending field and a machine-readable code:
//! `{"field": "age", "code": "out_of_range"}`.

use std::str::FromStr;

use serde_json::json;

use crate::domain::{DeveloperValidationError, Error};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    BlankField,
    TooLong,
    OutOfRange,
    InvalidValue,
}

impl ErrorCode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::BlankField => "blank_field",
            Self::TooLong => "too_long",
            Self::OutOfRange => "out_of_range",
            Self::InvalidValue => "invalid_value",
        }
    }
}

/// Wire name of a request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    const fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, code: ErrorCode, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ErrorCode::MissingField,
        format!("missing required field: {name}"),
    )
}

/// Unwrap a required field.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Map a domain value-constructor failure onto the field it came from.
pub(crate) fn domain_value_error(field: FieldName, err: &DeveloperValidationError) -> Error {
    let code = match err {
        DeveloperValidationError::EmptyMemberId | DeveloperValidationError::EmptyName => {
            ErrorCode::BlankField
        }
        DeveloperValidationError::MemberIdTooLong { .. }
        | DeveloperValidationError::NameTooLong { .. } => ErrorCode::TooLong,
        DeveloperValidationError::NonPositiveAge => ErrorCode::OutOfRange,
        DeveloperValidationError::MemberIdWhitespace => ErrorCode::InvalidValue,
    };
    field_error(field, code, err.to_string())
}

/// Parse an enumeration token such as `"SENIOR"`.
pub(crate) fn parse_token<T>(value: &str, field: FieldName) -> Result<T, Error>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|err: T::Err| field_error(field, ErrorCode::InvalidValue, err.to_string()))
}

/// Narrow a JSON integer to `u32`, requiring at least `min`.
pub(crate) fn bounded_u32(value: i64, min: u32, field: FieldName) -> Result<u32, Error> {
    u32::try_from(value)
        .ok()
        .filter(|narrowed| *narrowed >= min)
        .ok_or_else(|| {
            let name = field.as_str();
            field_error(
                field,
                ErrorCode::OutOfRange,
                format!("{name} must be between {min} and {}", u32::MAX),
            )
        })
}

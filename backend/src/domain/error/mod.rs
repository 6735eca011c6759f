//! Domain-level error payload.
//!
//! Service operations return [`DomainError`] values instead of unwinding. The
//! payload is transport agnostic; the HTTP adapter decides status codes and
//! redaction.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::TraceId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or misses required fields.
    InvalidRequest,
    /// Experience years fall outside the band of the requested level.
    LevelExperienceMismatch,
    /// A developer with the same member id already exists.
    DuplicateMemberId,
    /// No developer matches the member id.
    NotFound,
    /// An unexpected failure, for example a store outage.
    InternalError,
}

impl ErrorCode {
    /// Default human-readable message for the code.
    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid request",
            Self::LevelExperienceMismatch => "developer level does not match experience years",
            Self::DuplicateMemberId => "member id is already registered",
            Self::NotFound => "no developer matches the member id",
            Self::InternalError => "Internal server error",
        }
    }
}

/// Rejections raised by [`DomainError::try_new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    /// The message was empty once trimmed.
    #[error("error message must not be empty")]
    EmptyMessage,
}

/// Error payload returned by domain services, re-exported as `Error`.
///
/// Serialises as `{"errorCode", "errorMessage", "traceId"?, "details"?}`.
///
/// ## Invariants
/// - `error_message` is non-empty once trimmed.
///
/// # Examples
/// ```
/// use dmaker::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("no developer with member id ada");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "ErrorDto")]
pub struct DomainError {
    #[schema(example = "not_found")]
    error_code: ErrorCode,
    #[schema(example = "no developer matches the member id")]
    error_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "00000000-0000-0000-0000-000000000000")]
    trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    details: Option<Value>,
}

impl DomainError {
    /// Create a new error, panicking if the message is blank.
    ///
    /// # Panics
    /// Panics when `message` is empty after trimming. Use [`DomainError::try_new`]
    /// for untrusted input.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::try_new(code, message)
            .unwrap_or_else(|err| panic!("error messages must satisfy validation: {err}"))
    }

    /// Fallible constructor; captures the in-scope [`TraceId`].
    ///
    /// # Errors
    /// Returns [`ErrorValidationError::EmptyMessage`] for blank messages.
    pub fn try_new(
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let text = message.into();
        if text.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self {
            error_code: code,
            error_message: text,
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        })
    }

    /// Error carrying the code's default message.
    #[must_use]
    pub fn from_code(code: ErrorCode) -> Self {
        Self::new(code, code.default_message())
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.error_code
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.error_message.as_str()
    }

    /// Correlation identifier captured at construction, if any.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Structured details, for example the offending field.
    #[must_use]
    pub const fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach a trace identifier.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Attach structured details.
    ///
    /// # Examples
    /// ```
    /// use dmaker::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::invalid_request("name must not be empty")
    ///     .with_details(json!({ "field": "name" }));
    /// assert!(err.details().is_some());
    /// ```
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::LevelExperienceMismatch`].
    #[must_use]
    pub fn level_experience_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::LevelExperienceMismatch, message)
    }

    /// Convenience constructor for [`ErrorCode::DuplicateMemberId`].
    #[must_use]
    pub fn duplicate_member_id(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DuplicateMemberId, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.error_message)
    }
}

impl std::error::Error for DomainError {}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorDto {
    error_code: ErrorCode,
    error_message: String,
    #[serde(default)]
    trace_id: Option<String>,
    #[serde(default)]
    details: Option<Value>,
}

impl TryFrom<ErrorDto> for DomainError {
    type Error = ErrorValidationError;

    fn try_from(value: ErrorDto) -> Result<Self, Self::Error> {
        let ErrorDto {
            error_code,
            error_message,
            trace_id,
            details,
        } = value;
        if error_message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        // Decoded payloads keep the trace id they carried, never the ambient one.
        Ok(Self {
            error_code,
            error_message,
            trace_id,
            details,
        })
    }
}

#[cfg(test)]
mod tests;

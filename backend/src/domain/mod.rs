//! Domain primitives, services and ports.
//!
//! Purpose: hold the developer registry rules independent of HTTP and
//! storage. Inbound adapters call the driving ports in [`ports`]; outbound
//! adapters implement [`ports::DeveloperRepository`].
//!
//! Public surface:
//! - Error (alias to `error::DomainError`): error payload returned by services.
//! - ErrorCode: stable error identifier.
//! - Developer, RetiredDeveloper and their value types.
//! - DeveloperService: implementation of the driving ports.
//! - TraceId: per-request correlation identifier.

pub mod developer;
mod developer_service;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod validation;

pub use self::developer::{
    Age, DEVELOPER_NAME_MAX, Developer, DeveloperLevel, DeveloperName, DeveloperSkillType,
    DeveloperValidationError, EmploymentStatus, ExperienceBand, ExperienceYears, MEMBER_ID_MAX,
    MemberId, ParseDeveloperTokenError, RetiredDeveloper,
};
pub use self::developer_service::DeveloperService;
pub use self::error::{DomainError, DomainError as Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::validation::{MAX_JUNIOR_YEARS, MIN_SENIOR_YEARS, validate_experience_years};

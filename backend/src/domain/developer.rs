//! Developer records and the value types they are built from.
//!
//! A [`Developer`] is created EMPLOYED, may have its level, skill and
//! experience edited, and is retired at most once. Retirement keeps the row
//! and produces a [`RetiredDeveloper`] audit record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::{MAX_JUNIOR_YEARS, MIN_SENIOR_YEARS};

/// Maximum length, in characters, of a member identifier.
pub const MEMBER_ID_MAX: usize = 50;
/// Maximum length, in characters, of a developer name.
pub const DEVELOPER_NAME_MAX: usize = 50;

/// Validation errors returned by the developer value constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeveloperValidationError {
    /// Member id was empty or only whitespace.
    EmptyMemberId,
    /// Member id had leading or trailing whitespace.
    MemberIdWhitespace,
    /// Member id exceeded the length limit.
    MemberIdTooLong {
        /// Allowed number of characters.
        max: usize,
    },
    /// Name was empty or only whitespace.
    EmptyName,
    /// Name exceeded the length limit.
    NameTooLong {
        /// Allowed number of characters.
        max: usize,
    },
    /// Age was zero.
    NonPositiveAge,
}

impl fmt::Display for DeveloperValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMemberId => write!(f, "member id must not be empty"),
            Self::MemberIdWhitespace => {
                write!(f, "member id must not start or end with whitespace")
            }
            Self::MemberIdTooLong { max } => {
                write!(f, "member id must be at most {max} characters")
            }
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::NameTooLong { max } => write!(f, "name must be at most {max} characters"),
            Self::NonPositiveAge => write!(f, "age must be greater than zero"),
        }
    }
}

impl std::error::Error for DeveloperValidationError {}

/// Error returned when parsing an unknown enumeration token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDeveloperTokenError {
    /// Which enumeration was being parsed.
    pub kind: &'static str,
    /// The unrecognised input value.
    pub input: String,
}

impl fmt::Display for ParseDeveloperTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {}", self.kind, self.input)
    }
}

impl std::error::Error for ParseDeveloperTokenError {}

/// Stable, externally unique developer identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MemberId(String);

impl MemberId {
    /// Validate and construct a [`MemberId`].
    ///
    /// # Examples
    /// ```
    /// use dmaker::domain::MemberId;
    ///
    /// assert!(MemberId::new("ada-01").is_ok());
    /// assert!(MemberId::new(" ada").is_err());
    /// ```
    pub fn new(raw: impl Into<String>) -> Result<Self, DeveloperValidationError> {
        let value = raw.into();
        if value.trim().is_empty() {
            return Err(DeveloperValidationError::EmptyMemberId);
        }
        if value.trim() != value {
            return Err(DeveloperValidationError::MemberIdWhitespace);
        }
        if value.chars().count() > MEMBER_ID_MAX {
            return Err(DeveloperValidationError::MemberIdTooLong { max: MEMBER_ID_MAX });
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for MemberId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<MemberId> for String {
    fn from(value: MemberId) -> Self {
        value.0
    }
}

impl TryFrom<String> for MemberId {
    type Error = DeveloperValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Display name of a developer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeveloperName(String);

impl DeveloperName {
    /// Validate and construct a [`DeveloperName`].
    pub fn new(raw: impl Into<String>) -> Result<Self, DeveloperValidationError> {
        let value = raw.into();
        if value.trim().is_empty() {
            return Err(DeveloperValidationError::EmptyName);
        }
        if value.chars().count() > DEVELOPER_NAME_MAX {
            return Err(DeveloperValidationError::NameTooLong {
                max: DEVELOPER_NAME_MAX,
            });
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for DeveloperName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DeveloperName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<DeveloperName> for String {
    fn from(value: DeveloperName) -> Self {
        value.0
    }
}

impl TryFrom<String> for DeveloperName {
    type Error = DeveloperValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Age in whole years; always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Age(u32);

impl Age {
    /// Validate and construct an [`Age`].
    pub const fn new(value: u32) -> Result<Self, DeveloperValidationError> {
        if value == 0 {
            return Err(DeveloperValidationError::NonPositiveAge);
        }
        Ok(Self(value))
    }

    /// The age as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<Age> for u32 {
    fn from(value: Age) -> Self {
        value.0
    }
}

impl TryFrom<u32> for Age {
    type Error = DeveloperValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Years of professional experience.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ExperienceYears(u32);

impl ExperienceYears {
    /// Wrap a number of years.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The number of years as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ExperienceYears {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive range of experience years accepted for a level.
///
/// `max` is `None` when the band is unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceBand {
    /// Smallest accepted number of years.
    pub min: u32,
    /// Largest accepted number of years, if bounded.
    pub max: Option<u32>,
}

impl ExperienceBand {
    /// Whether `years` falls inside the band.
    #[must_use]
    pub fn contains(self, years: ExperienceYears) -> bool {
        let count = years.get();
        count >= self.min && self.max.is_none_or(|max| count <= max)
    }
}

impl fmt::Display for ExperienceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            None => write!(f, "{}+ years", self.min),
            Some(max) => write!(f, "{}..={max} years", self.min),
        }
    }
}

/// Seniority level.
///
/// The mid level travels as `JUNGNIOR`; `MID` is accepted on input.
///
/// # Examples
/// ```
/// use dmaker::domain::DeveloperLevel;
///
/// let level: DeveloperLevel = "MID".parse().expect("alias accepted");
/// assert_eq!(level, DeveloperLevel::Jungnior);
/// assert_eq!(level.as_str(), "JUNGNIOR");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeveloperLevel {
    /// Junior developer.
    Junior,
    /// Mid-level developer.
    #[serde(alias = "MID")]
    Jungnior,
    /// Senior developer.
    Senior,
}

impl DeveloperLevel {
    /// Wire and storage token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Junior => "JUNIOR",
            Self::Jungnior => "JUNGNIOR",
            Self::Senior => "SENIOR",
        }
    }

    /// Human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Junior => "junior developer",
            Self::Jungnior => "mid-level developer",
            Self::Senior => "senior developer",
        }
    }

    /// Experience years accepted for this level.
    #[must_use]
    pub const fn band(self) -> ExperienceBand {
        match self {
            Self::Junior => ExperienceBand {
                min: 0,
                max: Some(MAX_JUNIOR_YEARS),
            },
            Self::Jungnior => ExperienceBand {
                min: MAX_JUNIOR_YEARS + 1,
                max: Some(MIN_SENIOR_YEARS - 1),
            },
            Self::Senior => ExperienceBand {
                min: MIN_SENIOR_YEARS,
                max: None,
            },
        }
    }
}

impl fmt::Display for DeveloperLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeveloperLevel {
    type Err = ParseDeveloperTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "JUNIOR" => Ok(Self::Junior),
            "JUNGNIOR" | "MID" => Ok(Self::Jungnior),
            "SENIOR" => Ok(Self::Senior),
            _ => Err(ParseDeveloperTokenError {
                kind: "developer level",
                input: s.to_owned(),
            }),
        }
    }
}

/// Primary skill area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeveloperSkillType {
    /// Front-end development.
    FrontEnd,
    /// Back-end development.
    BackEnd,
    /// Both front-end and back-end.
    FullStack,
}

impl DeveloperSkillType {
    /// Wire and storage token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FrontEnd => "FRONT_END",
            Self::BackEnd => "BACK_END",
            Self::FullStack => "FULL_STACK",
        }
    }
}

impl fmt::Display for DeveloperSkillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeveloperSkillType {
    type Err = ParseDeveloperTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FRONT_END" => Ok(Self::FrontEnd),
            "BACK_END" => Ok(Self::BackEnd),
            "FULL_STACK" => Ok(Self::FullStack),
            _ => Err(ParseDeveloperTokenError {
                kind: "developer skill type",
                input: s.to_owned(),
            }),
        }
    }
}

/// Employment status of a developer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentStatus {
    /// Currently employed.
    Employed,
    /// Retired; the record is kept.
    Retired,
}

impl EmploymentStatus {
    /// Wire and storage token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Employed => "EMPLOYED",
            Self::Retired => "RETIRED",
        }
    }
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmploymentStatus {
    type Err = ParseDeveloperTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EMPLOYED" => Ok(Self::Employed),
            "RETIRED" => Ok(Self::Retired),
            _ => Err(ParseDeveloperTokenError {
                kind: "employment status",
                input: s.to_owned(),
            }),
        }
    }
}

/// A developer record.
///
/// ## Invariants
/// - `member_id` never changes once the record exists.
/// - `experience_years` lies within `level.band()` after create and edit.
/// - `status` only moves from EMPLOYED to RETIRED.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    /// Unique identifier.
    pub member_id: MemberId,
    /// Display name.
    pub name: DeveloperName,
    /// Age in years.
    pub age: Age,
    /// Seniority level.
    pub level: DeveloperLevel,
    /// Primary skill area.
    pub skill_type: DeveloperSkillType,
    /// Years of experience.
    pub experience_years: ExperienceYears,
    /// Employment status.
    pub status: EmploymentStatus,
}

impl Developer {
    /// Build a freshly hired developer with status EMPLOYED.
    #[must_use]
    pub const fn hire(
        member_id: MemberId,
        name: DeveloperName,
        age: Age,
        level: DeveloperLevel,
        skill_type: DeveloperSkillType,
        experience_years: ExperienceYears,
    ) -> Self {
        Self {
            member_id,
            name,
            age,
            level,
            skill_type,
            experience_years,
            status: EmploymentStatus::Employed,
        }
    }

    /// Whether the developer has already been retired.
    #[must_use]
    pub const fn is_retired(&self) -> bool {
        matches!(self.status, EmploymentStatus::Retired)
    }

    /// Overwrite the editable attributes. Identity, name, age and status
    /// stay as they are.
    pub const fn reassign(
        &mut self,
        level: DeveloperLevel,
        skill_type: DeveloperSkillType,
        experience_years: ExperienceYears,
    ) {
        self.level = level;
        self.skill_type = skill_type;
        self.experience_years = experience_years;
    }

    /// Flip the status to RETIRED and produce the matching audit record.
    pub fn retire(&mut self) -> RetiredDeveloper {
        self.status = EmploymentStatus::Retired;
        RetiredDeveloper {
            member_id: self.member_id.clone(),
            name: self.name.clone(),
        }
    }
}

/// Append-only audit record written when a developer retires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetiredDeveloper {
    /// Member id of the retired developer.
    pub member_id: MemberId,
    /// Name at the time of retirement.
    pub name: DeveloperName,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn developer() -> Developer {
        Developer::hire(
            MemberId::new("ada").expect("valid member id"),
            DeveloperName::new("Ada Lovelace").expect("valid name"),
            Age::new(36).expect("valid age"),
            DeveloperLevel::Jungnior,
            DeveloperSkillType::BackEnd,
            ExperienceYears::new(7),
        )
    }

    #[rstest]
    #[case("", DeveloperValidationError::EmptyMemberId)]
    #[case("   ", DeveloperValidationError::EmptyMemberId)]
    #[case(" ada", DeveloperValidationError::MemberIdWhitespace)]
    #[case("ada ", DeveloperValidationError::MemberIdWhitespace)]
    fn member_id_rejects_invalid_input(
        #[case] raw: &str,
        #[case] expected: DeveloperValidationError,
    ) {
        assert_eq!(MemberId::new(raw), Err(expected));
    }

    #[rstest]
    fn member_id_enforces_length_limit() {
        assert!(MemberId::new("a".repeat(MEMBER_ID_MAX)).is_ok());
        assert_eq!(
            MemberId::new("a".repeat(MEMBER_ID_MAX + 1)),
            Err(DeveloperValidationError::MemberIdTooLong { max: MEMBER_ID_MAX })
        );
    }

    #[rstest]
    fn name_rejects_blank_and_long_values() {
        assert_eq!(
            DeveloperName::new("  "),
            Err(DeveloperValidationError::EmptyName)
        );
        assert!(DeveloperName::new("n".repeat(DEVELOPER_NAME_MAX + 1)).is_err());
    }

    #[rstest]
    fn age_must_be_positive() {
        assert_eq!(Age::new(0), Err(DeveloperValidationError::NonPositiveAge));
        assert_eq!(Age::new(1).map(Age::get), Ok(1));
    }

    #[rstest]
    #[case(DeveloperLevel::Junior, 0, true)]
    #[case(DeveloperLevel::Junior, 4, true)]
    #[case(DeveloperLevel::Junior, 5, false)]
    #[case(DeveloperLevel::Jungnior, 5, true)]
    #[case(DeveloperLevel::Jungnior, 9, true)]
    #[case(DeveloperLevel::Jungnior, 10, false)]
    #[case(DeveloperLevel::Senior, 9, false)]
    #[case(DeveloperLevel::Senior, 40, true)]
    fn bands_follow_the_thresholds(
        #[case] level: DeveloperLevel,
        #[case] years: u32,
        #[case] inside: bool,
    ) {
        assert_eq!(level.band().contains(ExperienceYears::new(years)), inside);
    }

    #[rstest]
    fn level_accepts_mid_alias_in_json() {
        let level: DeveloperLevel = serde_json::from_str("\"MID\"").expect("alias decodes");
        assert_eq!(level, DeveloperLevel::Jungnior);
        assert_eq!(
            serde_json::to_string(&level).expect("level encodes"),
            "\"JUNGNIOR\""
        );
    }

    #[rstest]
    fn skill_type_tokens_match_the_wire_format() {
        let skill: DeveloperSkillType =
            serde_json::from_str("\"FULL_STACK\"").expect("token decodes");
        assert_eq!(skill, DeveloperSkillType::FullStack);
        assert_eq!(skill.as_str().parse(), Ok(skill));
    }

    #[rstest]
    fn unknown_tokens_are_rejected() {
        let err = "ARCHITECT"
            .parse::<DeveloperLevel>()
            .expect_err("unknown level");
        assert_eq!(err.to_string(), "unknown developer level: ARCHITECT");
    }

    #[rstest]
    fn reassign_keeps_identity_and_status(mut developer: Developer) {
        developer.reassign(
            DeveloperLevel::Senior,
            DeveloperSkillType::FullStack,
            ExperienceYears::new(12),
        );

        assert_eq!(developer.member_id.as_ref(), "ada");
        assert_eq!(developer.name.as_ref(), "Ada Lovelace");
        assert_eq!(developer.level, DeveloperLevel::Senior);
        assert_eq!(developer.status, EmploymentStatus::Employed);
    }

    #[rstest]
    fn retire_flips_status_and_builds_audit_record(mut developer: Developer) {
        let record = developer.retire();

        assert!(developer.is_retired());
        assert_eq!(record.member_id, developer.member_id);
        assert_eq!(record.name, developer.name);
    }
}

//! Seniority rules tying a developer level to years of experience.

use serde_json::json;

use super::{DeveloperLevel, Error, ExperienceYears};

/// Most years of experience a junior developer may have.
pub const MAX_JUNIOR_YEARS: u32 = 4;
/// Fewest years of experience a senior developer must have.
pub const MIN_SENIOR_YEARS: u32 = 10;

/// Check that `years` is acceptable for `level`.
///
/// Juniors need at most [`MAX_JUNIOR_YEARS`], seniors at least
/// [`MIN_SENIOR_YEARS`], and the mid level sits strictly between the two.
///
/// # Errors
/// Returns a `level_experience_mismatch` error carrying the level, the
/// offending years and the accepted band.
///
/// # Examples
/// ```
/// use dmaker::domain::{validate_experience_years, DeveloperLevel, ErrorCode, ExperienceYears};
///
/// assert!(validate_experience_years(DeveloperLevel::Senior, ExperienceYears::new(10)).is_ok());
/// let err = validate_experience_years(DeveloperLevel::Junior, ExperienceYears::new(5))
///     .expect_err("too experienced for a junior");
/// assert_eq!(err.code(), ErrorCode::LevelExperienceMismatch);
/// ```
pub fn validate_experience_years(
    level: DeveloperLevel,
    years: ExperienceYears,
) -> Result<(), Error> {
    let band = level.band();
    if band.contains(years) {
        return Ok(());
    }
    Err(Error::level_experience_mismatch(format!(
        "{} requires {band} of experience, got {years}",
        level.description()
    ))
    .with_details(json!({
        "developerLevel": level.as_str(),
        "experienceYears": years.get(),
        "minYears": band.min,
        "maxYears": band.max,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(DeveloperLevel::Junior, 0)]
    #[case(DeveloperLevel::Junior, MAX_JUNIOR_YEARS)]
    #[case(DeveloperLevel::Jungnior, MAX_JUNIOR_YEARS + 1)]
    #[case(DeveloperLevel::Jungnior, MIN_SENIOR_YEARS - 1)]
    #[case(DeveloperLevel::Senior, MIN_SENIOR_YEARS)]
    #[case(DeveloperLevel::Senior, 35)]
    fn accepts_years_inside_the_band(#[case] level: DeveloperLevel, #[case] years: u32) {
        assert!(validate_experience_years(level, ExperienceYears::new(years)).is_ok());
    }

    #[rstest]
    #[case(DeveloperLevel::Junior, MAX_JUNIOR_YEARS + 1)]
    #[case(DeveloperLevel::Jungnior, MAX_JUNIOR_YEARS)]
    #[case(DeveloperLevel::Jungnior, MIN_SENIOR_YEARS)]
    #[case(DeveloperLevel::Senior, MIN_SENIOR_YEARS - 1)]
    #[case(DeveloperLevel::Senior, 0)]
    fn rejects_years_outside_the_band(#[case] level: DeveloperLevel, #[case] years: u32) {
        let err = validate_experience_years(level, ExperienceYears::new(years))
            .expect_err("years outside the band");
        assert_eq!(err.code(), ErrorCode::LevelExperienceMismatch);
    }

    #[rstest]
    fn mismatch_details_describe_the_band() {
        let err = validate_experience_years(DeveloperLevel::Jungnior, ExperienceYears::new(12))
            .expect_err("too experienced for mid level");

        assert_eq!(
            err.details(),
            Some(&json!({
                "developerLevel": "JUNGNIOR",
                "experienceYears": 12,
                "minYears": 5,
                "maxYears": 9,
            }))
        );
        assert_eq!(
            err.message(),
            "mid-level developer requires 5..=9 years of experience, got 12"
        );
    }
}

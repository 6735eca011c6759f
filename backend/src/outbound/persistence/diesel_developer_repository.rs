//! PostgreSQL-backed `DeveloperRepository` implementation using Diesel ORM.
//!
//! Rows are decoded back through the validated domain constructors, so a
//! corrupted row surfaces as a query error rather than an invalid entity.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncConnection as _, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{DeveloperPersistenceError, DeveloperRepository, DeveloperStoreHealth};
use crate::domain::{
    Age, Developer, DeveloperName, EmploymentStatus, ExperienceYears, MemberId, RetiredDeveloper,
};

use super::models::{DeveloperRow, DeveloperUpdate, NewDeveloperRow, NewRetiredDeveloperRow};
use super::pool::{DbPool, PoolError};
use super::schema::{developers, retired_developers};

/// Diesel-backed implementation of the developer repository port.
#[derive(Clone)]
pub struct DieselDeveloperRepository {
    pool: DbPool,
}

impl DieselDeveloperRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> DeveloperPersistenceError {
    DeveloperPersistenceError::connection(error.message())
}

/// Map Diesel errors to repository errors.
///
/// `member_id` names the developer being written, for unique violations.
fn map_diesel_error(error: DieselError, member_id: Option<&str>) -> DeveloperPersistenceError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            match (member_id, info.constraint_name()) {
                (Some(member_id), Some("developers_member_id_key")) => {
                    DeveloperPersistenceError::duplicate_member_id(member_id)
                }
                _ => DeveloperPersistenceError::query("unique constraint violated"),
            }
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DeveloperPersistenceError::connection("database connection error")
        }
        DieselError::NotFound => DeveloperPersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => {
            DeveloperPersistenceError::query("database query error")
        }
        _ => DeveloperPersistenceError::query("database error"),
    }
}

fn corrupt(field: &str, detail: impl std::fmt::Display) -> DeveloperPersistenceError {
    DeveloperPersistenceError::query(format!("invalid {field} in database: {detail}"))
}

fn to_column(field: &str, value: u32) -> Result<i32, DeveloperPersistenceError> {
    i32::try_from(value).map_err(|_| {
        DeveloperPersistenceError::query(format!("{field} {value} exceeds column range"))
    })
}

/// Convert a database row into a validated domain developer.
fn row_to_developer(row: DeveloperRow) -> Result<Developer, DeveloperPersistenceError> {
    let DeveloperRow {
        member_id,
        name,
        age: raw_age,
        developer_level,
        developer_skill_type,
        experience_years: raw_experience_years,
        status,
        ..
    } = row;

    let age = u32::try_from(raw_age)
        .map_err(|err| corrupt("age", err))
        .and_then(|years| Age::new(years).map_err(|err| corrupt("age", err)))?;
    let experience_years = u32::try_from(raw_experience_years)
        .map(ExperienceYears::new)
        .map_err(|err| corrupt("experience_years", err))?;

    Ok(Developer {
        member_id: MemberId::new(member_id).map_err(|err| corrupt("member_id", err))?,
        name: DeveloperName::new(name).map_err(|err| corrupt("name", err))?,
        age,
        level: developer_level
            .parse()
            .map_err(|err| corrupt("developer_level", err))?,
        skill_type: developer_skill_type
            .parse()
            .map_err(|err| corrupt("developer_skill_type", err))?,
        experience_years,
        status: status.parse().map_err(|err| corrupt("status", err))?,
    })
}

fn new_row(developer: &Developer) -> Result<NewDeveloperRow<'_>, DeveloperPersistenceError> {
    Ok(NewDeveloperRow {
        member_id: developer.member_id.as_ref(),
        name: developer.name.as_ref(),
        age: to_column("age", developer.age.get())?,
        developer_level: developer.level.as_str(),
        developer_skill_type: developer.skill_type.as_str(),
        experience_years: to_column("experience_years", developer.experience_years.get())?,
        status: developer.status.as_str(),
    })
}

fn update_row(developer: &Developer) -> Result<DeveloperUpdate<'_>, DeveloperPersistenceError> {
    Ok(DeveloperUpdate {
        name: developer.name.as_ref(),
        age: to_column("age", developer.age.get())?,
        developer_level: developer.level.as_str(),
        developer_skill_type: developer.skill_type.as_str(),
        experience_years: to_column("experience_years", developer.experience_years.get())?,
    })
}

#[async_trait]
impl DeveloperRepository for DieselDeveloperRepository {
    async fn find_by_member_id(
        &self,
        member_id: &MemberId,
    ) -> Result<Option<Developer>, DeveloperPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = developers::table
            .filter(developers::member_id.eq(member_id.as_ref()))
            .select(DeveloperRow::as_select())
            .first::<DeveloperRow>(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?;

        row.map(row_to_developer).transpose()
    }

    async fn find_all_by_status(
        &self,
        status: EmploymentStatus,
    ) -> Result<Vec<Developer>, DeveloperPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<DeveloperRow> = developers::table
            .filter(developers::status.eq(status.as_str()))
            .order(developers::id.asc())
            .select(DeveloperRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;

        rows.into_iter().map(row_to_developer).collect()
    }

    async fn create(&self, developer: &Developer) -> Result<Developer, DeveloperPersistenceError> {
        let row = new_row(developer)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let created = diesel::insert_into(developers::table)
            .values(&row)
            .returning(DeveloperRow::as_returning())
            .get_result::<DeveloperRow>(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, Some(developer.member_id.as_ref())))?;

        row_to_developer(created)
    }

    async fn save(&self, developer: &Developer) -> Result<Developer, DeveloperPersistenceError> {
        let insert = new_row(developer)?;
        let update = update_row(developer)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let saved = diesel::insert_into(developers::table)
            .values(&insert)
            .on_conflict(developers::member_id)
            .do_update()
            .set(&update)
            .returning(DeveloperRow::as_returning())
            .get_result::<DeveloperRow>(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, Some(developer.member_id.as_ref())))?;

        row_to_developer(saved)
    }

    async fn retire(
        &self,
        developer: &Developer,
        record: &RetiredDeveloper,
    ) -> Result<Developer, DeveloperPersistenceError> {
        let insert = NewDeveloperRow {
            status: EmploymentStatus::Retired.as_str(),
            ..new_row(developer)?
        };
        let audit = NewRetiredDeveloperRow {
            member_id: record.member_id.as_ref(),
            name: record.name.as_ref(),
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Status flip and audit insert commit together or not at all. Only the
        // status column is touched so a concurrent edit is not overwritten.
        let saved = conn
            .transaction(|conn| {
                async move {
                    let retired = diesel::insert_into(developers::table)
                        .values(&insert)
                        .on_conflict(developers::member_id)
                        .do_update()
                        .set(developers::status.eq(EmploymentStatus::Retired.as_str()))
                        .returning(DeveloperRow::as_returning())
                        .get_result::<DeveloperRow>(conn)
                        .await?;

                    diesel::insert_into(retired_developers::table)
                        .values(&audit)
                        .on_conflict(retired_developers::member_id)
                        .do_nothing()
                        .execute(conn)
                        .await?;

                    Ok(retired)
                }
                .scope_boxed()
            })
            .await
            .map_err(|err| map_diesel_error(err, Some(developer.member_id.as_ref())))?;

        row_to_developer(saved)
    }
}

#[async_trait]
impl DeveloperStoreHealth for DieselDeveloperRepository {
    fn store_kind(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> Result<(), DeveloperPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::sql_query("SELECT 1")
            .execute(&mut conn)
            .await
            .map(drop)
            .map_err(|err| map_diesel_error(err, None))
    }
}

#[cfg(test)]
mod tests {
    //! Row mapping coverage; store round trips live in the integration suite.
    use super::*;
    use chrono::Utc;
    use rstest::{fixture, rstest};

    use crate::domain::{DeveloperLevel, DeveloperSkillType};

    #[fixture]
    fn row() -> DeveloperRow {
        DeveloperRow {
            id: 1,
            member_id: "ada".to_owned(),
            name: "Ada Lovelace".to_owned(),
            age: 36,
            developer_level: "JUNGNIOR".to_owned(),
            developer_skill_type: "BACK_END".to_owned(),
            experience_years: 7,
            status: "RETIRED".to_owned(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[rstest]
    fn decodes_a_well_formed_row(row: DeveloperRow) {
        let developer = row_to_developer(row).expect("row decodes");

        assert_eq!(developer.member_id.as_ref(), "ada");
        assert_eq!(developer.level, DeveloperLevel::Jungnior);
        assert_eq!(developer.skill_type, DeveloperSkillType::BackEnd);
        assert_eq!(developer.experience_years.get(), 7);
        assert!(developer.is_retired());
    }

    #[rstest]
    fn rejects_unknown_level_tokens(mut row: DeveloperRow) {
        row.developer_level = "PRINCIPAL".to_owned();
        let err = row_to_developer(row).expect_err("unknown level");
        assert!(matches!(err, DeveloperPersistenceError::Query { .. }));
    }

    #[rstest]
    #[case(0, 7)]
    #[case(-3, 7)]
    #[case(36, -1)]
    fn rejects_out_of_range_numbers(
        mut row: DeveloperRow,
        #[case] age: i32,
        #[case] experience_years: i32,
    ) {
        row.age = age;
        row.experience_years = experience_years;
        assert!(row_to_developer(row).is_err());
    }

    #[rstest]
    fn new_rows_use_wire_tokens(row: DeveloperRow) {
        let developer = row_to_developer(row).expect("row decodes");
        let insert = new_row(&developer).expect("row encodes");

        assert_eq!(insert.developer_level, "JUNGNIOR");
        assert_eq!(insert.developer_skill_type, "BACK_END");
        assert_eq!(insert.status, "RETIRED");
    }

    #[rstest]
    fn pool_errors_map_to_connection_failures() {
        let err = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(err, DeveloperPersistenceError::connection("timed out"));
    }

    #[rstest]
    fn not_found_maps_to_query_failure() {
        let err = map_diesel_error(DieselError::NotFound, None);
        assert!(matches!(err, DeveloperPersistenceError::Query { .. }));
    }
}

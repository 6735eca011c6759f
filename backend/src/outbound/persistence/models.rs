//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and never
//! leave it. Enumerations are stored as their upper-case tokens.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{developers, retired_developers};

/// Row struct for reading from the developers table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = developers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DeveloperRow {
    #[expect(dead_code, reason = "surrogate key only orders listings")]
    pub id: i64,
    pub member_id: String,
    pub name: String,
    pub age: i32,
    pub developer_level: String,
    pub developer_skill_type: String,
    pub experience_years: i32,
    pub status: String,
    #[expect(dead_code, reason = "audit column is not surfaced to the domain")]
    pub created_at: DateTime<Utc>,
    #[expect(dead_code, reason = "audit column is not surfaced to the domain")]
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for new developer records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = developers)]
pub(crate) struct NewDeveloperRow<'a> {
    pub member_id: &'a str,
    pub name: &'a str,
    pub age: i32,
    pub developer_level: &'a str,
    pub developer_skill_type: &'a str,
    pub experience_years: i32,
    pub status: &'a str,
}

/// Changeset applied when an existing developer is saved.
///
/// Member id is the conflict key and never changes. Status is absent: it only
/// moves to RETIRED through the retire statement.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = developers)]
pub(crate) struct DeveloperUpdate<'a> {
    pub name: &'a str,
    pub age: i32,
    pub developer_level: &'a str,
    pub developer_skill_type: &'a str,
    pub experience_years: i32,
}

/// Insertable struct for retirement audit records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = retired_developers)]
pub(crate) struct NewRetiredDeveloperRow<'a> {
    pub member_id: &'a str,
    pub name: &'a str,
}

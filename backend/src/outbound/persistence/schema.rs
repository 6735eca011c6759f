//! Diesel table definitions for the PostgreSQL schema.
//!
//! Keep in step with `backend/migrations`; `diesel print-schema` against a
//! migrated database regenerates these definitions.

diesel::table! {
    /// Developer records. `id` orders rows by insertion.
    developers (id) {
        id -> Int8,
        /// Externally visible identifier, unique.
        member_id -> Varchar,
        name -> Varchar,
        age -> Int4,
        /// `JUNIOR`, `JUNGNIOR` or `SENIOR`.
        developer_level -> Varchar,
        /// `FRONT_END`, `BACK_END` or `FULL_STACK`.
        developer_skill_type -> Varchar,
        experience_years -> Int4,
        /// `EMPLOYED` or `RETIRED`.
        status -> Varchar,
        created_at -> Timestamptz,
        /// Maintained by a trigger on update.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Append-only retirement audit records, one per member id.
    retired_developers (id) {
        id -> Int8,
        member_id -> Varchar,
        name -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(developers, retired_developers);

//! Database schema for chanboard.
//!
//! Statements are applied in order the first time a database is opened.
//! The schema_version table records which ones have already run.

/// Schema statements, one entry per version.
///
/// Kept to portable SQL so the same list works for SQLite and PostgreSQL.
pub const MIGRATIONS: &[&str] = &[
    // v1: Boards table keyed by slug
    r#"
CREATE TABLE IF NOT EXISTS boards (
    slug        TEXT NOT NULL UNIQUE,
    name        TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT ''
)
"#,
];

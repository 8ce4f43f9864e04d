//! # sqlstmt
//!
//! A fluent builder that assembles SQL statement text from string fragments,
//! in the style of the MyBatis `SQL` class.
//!
//! ## Features
//!
//! - **Fragments in, text out**: columns, tables, joins and predicates are plain strings
//! - **Fixed clause order**: each statement kind renders its clauses in one order, whatever the call order
//! - **Explicit AND/OR groups**: `or()` / `and()` split WHERE or HAVING into parenthesized groups
//! - **No surprises**: no parsing, escaping, binding or dialect handling
//!
//! ## Usage
//!
//! ```
//! use sqlstmt::SqlBuilder;
//!
//! // SELECT
//! let sql = SqlBuilder::new()
//!     .select(["id", "name"])
//!     .from(["users"])
//!     .where_(["active = 1"])
//!     .or()
//!     .where_(["role = 'admin'"])
//!     .order_by(["name"])
//!     .to_sql();
//! assert_eq!(
//!     sql,
//!     "SELECT id, name\nFROM users\nWHERE (active = 1) \nOR (role = 'admin')\nORDER BY name"
//! );
//!
//! // INSERT
//! let sql = sqlstmt::insert_into("users")
//!     .values("name", "'alice'")
//!     .values("age", "30")
//!     .to_sql();
//! assert_eq!(sql, "INSERT INTO users\n(name, age)\nVALUES ('alice', 30)");
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod fragment;
pub mod prelude;
mod render;
pub mod statement;

#[cfg(feature = "tracing")]
pub mod log;

pub use builder::SqlBuilder;
pub use config::{BuilderConfig, RestatementPolicy};
pub use error::{StmtError, StmtResult};
pub use fragment::{Fragment, Logic};
pub use statement::{PredicateTarget, Statement, StatementKind};

#[cfg(feature = "tracing")]
pub use log::SqlLogger;

/// Create a builder holding a SELECT of the given columns.
///
/// # Example
/// ```
/// let sql = sqlstmt::select(["id"]).from(["users"]).to_sql();
/// assert_eq!(sql, "SELECT id\nFROM users");
/// ```
pub fn select<I>(columns: I) -> SqlBuilder
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut builder = SqlBuilder::new();
    builder.select(columns);
    builder
}

/// Create a builder holding a SELECT DISTINCT of the given columns.
pub fn select_distinct<I>(columns: I) -> SqlBuilder
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut builder = SqlBuilder::new();
    builder.select_distinct(columns);
    builder
}

/// Create a builder holding an INSERT into `table`.
pub fn insert_into(table: impl Into<String>) -> SqlBuilder {
    let mut builder = SqlBuilder::new();
    builder.insert_into(table);
    builder
}

/// Create a builder holding an UPDATE of `table`.
///
/// # Example
/// ```
/// let sql = sqlstmt::update("users").set(["active = 0"]).where_(["id = 7"]).to_sql();
/// assert_eq!(sql, "UPDATE users\nSET active = 0\nWHERE (id = 7)");
/// ```
pub fn update(table: impl Into<String>) -> SqlBuilder {
    let mut builder = SqlBuilder::new();
    builder.update(table);
    builder
}

/// Create a builder holding a DELETE from `table`.
pub fn delete_from(table: impl Into<String>) -> SqlBuilder {
    let mut builder = SqlBuilder::new();
    builder.delete_from(table);
    builder
}

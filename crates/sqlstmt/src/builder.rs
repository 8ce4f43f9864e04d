//! Fluent statement builder.
//!
//! [`SqlBuilder`] collects string fragments per clause and renders them into
//! SQL text on demand. Methods take `&mut self` and return `&mut Self`, so a
//! statement can be built in one chain:
//!
//! ```
//! use sqlstmt::SqlBuilder;
//!
//! let sql = SqlBuilder::new()
//!     .select(["id", "name"])
//!     .from(["users"])
//!     .where_(["active = 1"])
//!     .to_sql();
//!
//! assert_eq!(sql, "SELECT id, name\nFROM users\nWHERE (active = 1)");
//! ```
//!
//! A builder holds plain owned data and has no internal locking; callers that
//! share one across threads must serialize mutation themselves.

use crate::config::{BuilderConfig, RestatementPolicy};
use crate::error::{StmtError, StmtResult};
use crate::fragment::{Fragment, Logic};
use crate::render;
use crate::statement::{Statement, StatementKind, extend_text};
use std::fmt;

/// Fragment-based builder for SELECT / INSERT / UPDATE / DELETE statements.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct SqlBuilder {
    stmt: Statement,
    config: BuilderConfig,
    /// First refused restatement as `(current, requested)`.
    conflict: Option<(StatementKind, StatementKind)>,
}

impl SqlBuilder {
    /// Create an empty builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with the given configuration.
    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            stmt: Statement::new(),
            config,
            conflict: None,
        }
    }

    /// The configuration this builder was created with.
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// The collected fragment lists.
    pub fn statement(&self) -> &Statement {
        &self.stmt
    }

    /// The active statement kind, if any.
    pub fn statement_kind(&self) -> Option<StatementKind> {
        self.stmt.kind()
    }

    /// Whether `select_distinct` has been called.
    pub fn is_distinct(&self) -> bool {
        self.stmt.is_distinct()
    }

    /// True when no fragment has been collected and no statement started.
    pub fn is_empty(&self) -> bool {
        self.stmt.is_empty()
    }

    /// Switch to `kind`. Returns `false` when the starter must not apply.
    fn start(&mut self, kind: StatementKind) -> bool {
        let Some(current) = self.stmt.kind else {
            self.stmt.kind = Some(kind);
            return true;
        };
        if current == kind {
            return true;
        }

        match self.config.restatement {
            RestatementPolicy::Overwrite => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    target: "sqlstmt.builder",
                    current = %current,
                    requested = %kind,
                    "statement kind overwritten; collected tables are kept"
                );
                self.stmt.kind = Some(kind);
                true
            }
            RestatementPolicy::Reject => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    target: "sqlstmt.builder",
                    current = %current,
                    requested = %kind,
                    "statement starter refused"
                );
                if self.conflict.is_none() {
                    self.conflict = Some((current, kind));
                }
                false
            }
        }
    }

    // ==================== Statement starters ====================

    /// Start (or continue) a SELECT and append result columns.
    pub fn select<I>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        if self.start(StatementKind::Select) {
            extend_text(&mut self.stmt.selects, columns);
        }
        self
    }

    /// Like [`select`](Self::select), rendering `SELECT DISTINCT`.
    pub fn select_distinct<I>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        if self.start(StatementKind::Select) {
            self.stmt.distinct = true;
            extend_text(&mut self.stmt.selects, columns);
        }
        self
    }

    /// Start an INSERT into `table`.
    pub fn insert_into(&mut self, table: impl Into<String>) -> &mut Self {
        if self.start(StatementKind::Insert) {
            self.stmt.tables.push(Fragment::text(table));
        }
        self
    }

    /// Start an UPDATE of `table`.
    pub fn update(&mut self, table: impl Into<String>) -> &mut Self {
        if self.start(StatementKind::Update) {
            self.stmt.tables.push(Fragment::text(table));
        }
        self
    }

    /// Start a DELETE from `table`.
    pub fn delete_from(&mut self, table: impl Into<String>) -> &mut Self {
        if self.start(StatementKind::Delete) {
            self.stmt.tables.push(Fragment::text(table));
        }
        self
    }

    // ==================== FROM / JOIN ====================

    /// Append FROM tables.
    pub fn from<I>(&mut self, tables: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        extend_text(&mut self.stmt.tables, tables);
        self
    }

    /// Append plain JOIN targets (`other ON ...`).
    pub fn join<I>(&mut self, joins: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        extend_text(&mut self.stmt.join, joins);
        self
    }

    /// Append INNER JOIN targets.
    pub fn inner_join<I>(&mut self, joins: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        extend_text(&mut self.stmt.inner_join, joins);
        self
    }

    /// Append OUTER JOIN targets.
    pub fn outer_join<I>(&mut self, joins: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        extend_text(&mut self.stmt.outer_join, joins);
        self
    }

    /// Append LEFT OUTER JOIN targets.
    pub fn left_outer_join<I>(&mut self, joins: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        extend_text(&mut self.stmt.left_outer_join, joins);
        self
    }

    /// Append RIGHT OUTER JOIN targets.
    pub fn right_outer_join<I>(&mut self, joins: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        extend_text(&mut self.stmt.right_outer_join, joins);
        self
    }

    // ==================== WHERE / HAVING ====================

    /// Append WHERE predicates, joined by `AND` inside one group.
    ///
    /// Subsequent [`and`](Self::and) / [`or`](Self::or) calls target WHERE.
    pub fn where_<I>(&mut self, predicates: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.stmt.push_where(predicates);
        self
    }

    /// Append HAVING predicates, joined by `AND` inside one group.
    ///
    /// Subsequent [`and`](Self::and) / [`or`](Self::or) calls target HAVING.
    pub fn having<I>(&mut self, predicates: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.stmt.push_having(predicates);
        self
    }

    /// Close the current predicate group and open one joined by `OR`.
    ///
    /// Applies to whichever of WHERE/HAVING was appended to last (WHERE if
    /// neither has been).
    pub fn or(&mut self) -> &mut Self {
        self.stmt.push_logic(Logic::Or);
        self
    }

    /// Close the current predicate group and open one joined by `AND`.
    pub fn and(&mut self) -> &mut Self {
        self.stmt.push_logic(Logic::And);
        self
    }

    // ==================== Grouping & Ordering ====================

    /// Append GROUP BY expressions.
    pub fn group_by<I>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        extend_text(&mut self.stmt.group_by, columns);
        self
    }

    /// Append ORDER BY expressions.
    pub fn order_by<I>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        extend_text(&mut self.stmt.order_by, columns);
        self
    }

    /// Set the SELECT LIMIT fragment, replacing any previous one.
    pub fn limit(&mut self, limit: impl Into<String>) -> &mut Self {
        self.stmt.limit = vec![Fragment::text(limit)];
        self
    }

    /// Set the SELECT OFFSET fragment, replacing any previous one.
    pub fn offset(&mut self, offset: impl Into<String>) -> &mut Self {
        self.stmt.offset = vec![Fragment::text(offset)];
        self
    }

    // ==================== UPDATE / INSERT ====================

    /// Append SET assignments (`col = value`).
    pub fn set<I>(&mut self, assignments: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        extend_text(&mut self.stmt.sets, assignments);
        self
    }

    /// Append INSERT column names.
    #[allow(clippy::wrong_self_convention)]
    pub fn into_columns<I>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        extend_text(&mut self.stmt.columns, columns);
        self
    }

    /// Append INSERT values.
    #[allow(clippy::wrong_self_convention)]
    pub fn into_values<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        extend_text(&mut self.stmt.values, values);
        self
    }

    /// Append one INSERT column together with its value.
    pub fn values(&mut self, column: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.stmt.columns.push(Fragment::text(column));
        self.stmt.values.push(Fragment::text(value));
        self
    }

    // ==================== Build ====================

    /// Reset to the empty initial state. The configuration is kept.
    pub fn clear(&mut self) -> &mut Self {
        self.stmt = Statement::new();
        self.conflict = None;
        self
    }

    /// Render into `out`, stopping at the first failed write.
    pub fn write_sql<W: fmt::Write + ?Sized>(&self, out: &mut W) -> StmtResult<()> {
        render::render(&self.stmt, out)
    }

    /// Render the SQL text. Returns an empty string if no statement was started.
    pub fn to_sql(&self) -> String {
        self.to_string()
    }

    /// Validate builder state: reports a refused restatement.
    pub fn validate(&self) -> StmtResult<()> {
        match self.conflict {
            Some((current, requested)) => Err(StmtError::conflict(current, requested)),
            None => Ok(()),
        }
    }

    /// Validate, then render. Logs the SQL when the configuration asks for it.
    pub fn build(&self) -> StmtResult<String> {
        self.validate()?;
        let mut sql = String::new();
        self.write_sql(&mut sql)?;
        if self.config.log_sql {
            self.log_sql(&sql);
        }
        Ok(sql)
    }

    #[cfg(feature = "tracing")]
    fn log_sql(&self, sql: &str) {
        crate::log::SqlLogger::new()
            .max_sql_length(self.config.max_log_length)
            .log(self.stmt.kind(), sql);
    }

    #[cfg(not(feature = "tracing"))]
    fn log_sql(&self, _sql: &str) {}
}

impl fmt::Display for SqlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_sql(f).map_err(|_| fmt::Error)
    }
}

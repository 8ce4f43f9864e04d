//! Clause list entries.
//!
//! Every clause list stores [`Fragment`]s. Most are literal SQL text; the
//! WHERE and HAVING lists may also hold [`Logic`] markers inserted by
//! `and()` / `or()`, which split the predicate list into parenthesized groups.

use std::fmt;

/// Explicit conjunction marker stored inline in a predicate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Logic {
    /// Close the current group and open a new one joined by `AND`.
    And,
    /// Close the current group and open a new one joined by `OR`.
    Or,
}

impl Logic {
    /// Boundary text emitted in place of the marker.
    pub const fn as_sql(self) -> &'static str {
        match self {
            Logic::And => ") \nAND (",
            Logic::Or => ") \nOR (",
        }
    }
}

/// One entry of a clause list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Fragment {
    /// Verbatim SQL text (column, table, predicate, assignment, ...).
    Text(String),
    /// AND/OR group boundary.
    Conjunction(Logic),
}

impl Fragment {
    /// Create a text fragment.
    pub fn text(sql: impl Into<String>) -> Self {
        Fragment::Text(sql.into())
    }

    /// Whether this entry is an AND/OR marker.
    pub fn is_conjunction(&self) -> bool {
        matches!(self, Fragment::Conjunction(_))
    }

    /// The SQL text this entry renders as.
    pub fn as_sql(&self) -> &str {
        match self {
            Fragment::Text(s) => s,
            Fragment::Conjunction(logic) => logic.as_sql(),
        }
    }
}

impl From<Logic> for Fragment {
    fn from(logic: Logic) -> Self {
        Fragment::Conjunction(logic)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

//! Fragment collector: the per-clause lists a builder accumulates.

use crate::fragment::{Fragment, Logic};
use std::fmt;

/// The kind of statement a builder renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    /// SELECT query
    Select,
    /// INSERT statement
    Insert,
    /// UPDATE statement
    Update,
    /// DELETE statement
    Delete,
}

impl StatementKind {
    /// Leading keyword of the statement.
    pub const fn keyword(self) -> &'static str {
        match self {
            StatementKind::Select => "SELECT",
            StatementKind::Insert => "INSERT",
            StatementKind::Update => "UPDATE",
            StatementKind::Delete => "DELETE",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Predicate list that `and()` / `or()` append to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PredicateTarget {
    /// The WHERE list.
    #[default]
    Where,
    /// The HAVING list.
    Having,
}

/// Ordered fragment lists, one per clause kind.
///
/// Appends never validate: empty strings, duplicates and malformed SQL are
/// stored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statement {
    pub(crate) kind: Option<StatementKind>,
    pub(crate) distinct: bool,
    pub(crate) selects: Vec<Fragment>,
    pub(crate) tables: Vec<Fragment>,
    pub(crate) join: Vec<Fragment>,
    pub(crate) inner_join: Vec<Fragment>,
    pub(crate) outer_join: Vec<Fragment>,
    pub(crate) left_outer_join: Vec<Fragment>,
    pub(crate) right_outer_join: Vec<Fragment>,
    pub(crate) where_: Vec<Fragment>,
    pub(crate) group_by: Vec<Fragment>,
    pub(crate) having: Vec<Fragment>,
    pub(crate) order_by: Vec<Fragment>,
    pub(crate) limit: Vec<Fragment>,
    pub(crate) offset: Vec<Fragment>,
    pub(crate) sets: Vec<Fragment>,
    pub(crate) columns: Vec<Fragment>,
    pub(crate) values: Vec<Fragment>,
    pub(crate) last_list: PredicateTarget,
}

pub(crate) fn extend_text<I>(list: &mut Vec<Fragment>, items: I)
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    list.extend(items.into_iter().map(Fragment::text));
}

impl Statement {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active statement kind, if a starter has been issued.
    pub fn kind(&self) -> Option<StatementKind> {
        self.kind
    }

    /// Whether the select keyword renders as `SELECT DISTINCT`.
    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    /// Predicate list routed to by the next `and()` / `or()`.
    pub fn last_list(&self) -> PredicateTarget {
        self.last_list
    }

    /// True when nothing has been collected and no statement started.
    ///
    /// The marker routing tag is not collected state and is ignored.
    pub fn is_empty(&self) -> bool {
        let Self {
            kind,
            distinct,
            selects,
            tables,
            join,
            inner_join,
            outer_join,
            left_outer_join,
            right_outer_join,
            where_,
            group_by,
            having,
            order_by,
            limit,
            offset,
            sets,
            columns,
            values,
            last_list: _,
        } = self;
        kind.is_none()
            && !*distinct
            && [
                selects,
                tables,
                join,
                inner_join,
                outer_join,
                left_outer_join,
                right_outer_join,
                where_,
                group_by,
                having,
                order_by,
                limit,
                offset,
                sets,
                columns,
                values,
            ]
            .iter()
            .all(|list| list.is_empty())
    }

    /// Append predicates to WHERE and make it the marker target.
    pub(crate) fn push_where<I>(&mut self, predicates: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        extend_text(&mut self.where_, predicates);
        self.last_list = PredicateTarget::Where;
    }

    /// Append predicates to HAVING and make it the marker target.
    pub(crate) fn push_having<I>(&mut self, predicates: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        extend_text(&mut self.having, predicates);
        self.last_list = PredicateTarget::Having;
    }

    /// Append a marker to the last touched predicate list.
    pub(crate) fn push_logic(&mut self, logic: Logic) {
        let list = match self.last_list {
            PredicateTarget::Where => &mut self.where_,
            PredicateTarget::Having => &mut self.having,
        };
        list.push(Fragment::Conjunction(logic));
    }

    /// Fragments of the given predicate list.
    pub fn predicates(&self, target: PredicateTarget) -> &[Fragment] {
        match target {
            PredicateTarget::Where => &self.where_,
            PredicateTarget::Having => &self.having,
        }
    }

    /// Fragments collected for FROM / INSERT INTO / UPDATE / DELETE FROM.
    pub fn tables(&self) -> &[Fragment] {
        &self.tables
    }
}

//! Clause renderer.
//!
//! Every clause goes through [`ClauseWriter::clause`], parameterized by
//! keyword, wrapping delimiters and conjunction. The per-kind functions below
//! only decide which lists render and in which order.

use crate::error::StmtResult;
use crate::fragment::Fragment;
use crate::statement::{Statement, StatementKind};
use std::fmt::Write;

/// Output sink that remembers whether anything has been written yet.
///
/// Write failures are returned immediately; a half-rendered statement is
/// never resumed.
pub(crate) struct ClauseWriter<'a, W: Write + ?Sized> {
    out: &'a mut W,
    empty: bool,
}

impl<'a, W: Write + ?Sized> ClauseWriter<'a, W> {
    pub(crate) fn new(out: &'a mut W) -> Self {
        Self { out, empty: true }
    }

    fn append(&mut self, s: &str) -> StmtResult<()> {
        if !s.is_empty() {
            self.empty = false;
        }
        self.out.write_str(s)?;
        Ok(())
    }

    /// Render one clause. Empty lists emit nothing at all.
    pub(crate) fn clause(
        &mut self,
        keyword: &str,
        parts: &[Fragment],
        open: &str,
        close: &str,
        conjunction: &str,
    ) -> StmtResult<()> {
        if parts.is_empty() {
            return Ok(());
        }

        if !self.empty {
            self.append("\n")?;
        }
        if !keyword.is_empty() {
            self.append(keyword)?;
            self.append(" ")?;
        }
        self.append(open)?;

        let mut prev_was_marker = false;
        for (i, part) in parts.iter().enumerate() {
            let is_marker = part.is_conjunction();
            if i > 0 && !is_marker && !prev_was_marker {
                self.append(conjunction)?;
            }
            self.append(part.as_sql())?;
            prev_was_marker = is_marker;
        }

        self.append(close)
    }

    fn predicates(&mut self, keyword: &str, parts: &[Fragment]) -> StmtResult<()> {
        self.clause(keyword, parts, "(", ")", " AND ")
    }

    fn list(&mut self, keyword: &str, parts: &[Fragment]) -> StmtResult<()> {
        self.clause(keyword, parts, "", "", ", ")
    }

    fn single(&mut self, keyword: &str, parts: &[Fragment]) -> StmtResult<()> {
        self.clause(keyword, parts, "", "", "")
    }

    fn joins(&mut self, stmt: &Statement) -> StmtResult<()> {
        self.clause("JOIN", &stmt.join, "", "", "\nJOIN ")?;
        self.clause("INNER JOIN", &stmt.inner_join, "", "", "\nINNER JOIN ")?;
        self.clause("OUTER JOIN", &stmt.outer_join, "", "", "\nOUTER JOIN ")?;
        self.clause(
            "LEFT OUTER JOIN",
            &stmt.left_outer_join,
            "",
            "",
            "\nLEFT OUTER JOIN ",
        )?;
        self.clause(
            "RIGHT OUTER JOIN",
            &stmt.right_outer_join,
            "",
            "",
            "\nRIGHT OUTER JOIN ",
        )
    }
}

/// Render `stmt` into `out`. A statement without a kind renders nothing.
pub(crate) fn render<W: Write + ?Sized>(stmt: &Statement, out: &mut W) -> StmtResult<()> {
    let mut w = ClauseWriter::new(out);
    match stmt.kind {
        None => Ok(()),
        Some(StatementKind::Select) => render_select(stmt, &mut w),
        Some(StatementKind::Insert) => render_insert(stmt, &mut w),
        Some(StatementKind::Update) => render_update(stmt, &mut w),
        Some(StatementKind::Delete) => render_delete(stmt, &mut w),
    }
}

fn render_select<W: Write + ?Sized>(
    stmt: &Statement,
    w: &mut ClauseWriter<'_, W>,
) -> StmtResult<()> {
    let keyword = if stmt.distinct {
        "SELECT DISTINCT"
    } else {
        "SELECT"
    };
    w.list(keyword, &stmt.selects)?;
    w.list("FROM", &stmt.tables)?;
    w.joins(stmt)?;
    w.predicates("WHERE", &stmt.where_)?;
    w.list("GROUP BY", &stmt.group_by)?;
    w.predicates("HAVING", &stmt.having)?;
    w.list("ORDER BY", &stmt.order_by)?;
    w.single("LIMIT", &stmt.limit)?;
    w.single("OFFSET", &stmt.offset)
}

fn render_insert<W: Write + ?Sized>(
    stmt: &Statement,
    w: &mut ClauseWriter<'_, W>,
) -> StmtResult<()> {
    w.single("INSERT INTO", &stmt.tables)?;
    w.clause("", &stmt.columns, "(", ")", ", ")?;
    w.clause("VALUES", &stmt.values, "(", ")", ", ")
}

fn render_delete<W: Write + ?Sized>(
    stmt: &Statement,
    w: &mut ClauseWriter<'_, W>,
) -> StmtResult<()> {
    w.single("DELETE FROM", &stmt.tables)?;
    w.predicates("WHERE", &stmt.where_)
}

fn render_update<W: Write + ?Sized>(
    stmt: &Statement,
    w: &mut ClauseWriter<'_, W>,
) -> StmtResult<()> {
    w.single("UPDATE", &stmt.tables)?;
    w.joins(stmt)?;
    w.list("SET", &stmt.sets)?;
    w.predicates("WHERE", &stmt.where_)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StmtError;
    use crate::fragment::Logic;
    use std::fmt;

    fn frags(items: &[&str]) -> Vec<Fragment> {
        items.iter().map(|s| Fragment::text(*s)).collect()
    }

    fn clause(keyword: &str, parts: &[Fragment], open: &str, close: &str, conj: &str) -> String {
        let mut out = String::new();
        ClauseWriter::new(&mut out)
            .clause(keyword, parts, open, close, conj)
            .unwrap();
        out
    }

    #[test]
    fn test_empty_clause_emits_nothing() {
        assert_eq!(clause("WHERE", &[], "(", ")", " AND "), "");
    }

    #[test]
    fn test_clause_joins_with_conjunction() {
        let parts = frags(&["a=1", "b=2", "c=3"]);
        assert_eq!(
            clause("WHERE", &parts, "(", ")", " AND "),
            "WHERE (a=1 AND b=2 AND c=3)"
        );
    }

    #[test]
    fn test_marker_suppresses_conjunction_on_both_sides() {
        let parts = vec![
            Fragment::text("a=1"),
            Fragment::from(Logic::Or),
            Fragment::text("b=2"),
            Fragment::text("c=3"),
        ];
        assert_eq!(
            clause("WHERE", &parts, "(", ")", " AND "),
            "WHERE (a=1) \nOR (b=2 AND c=3)"
        );
    }

    #[test]
    fn test_adjacent_markers_render_verbatim() {
        let parts = vec![
            Fragment::text("a=1"),
            Fragment::from(Logic::And),
            Fragment::from(Logic::Or),
            Fragment::text("b=2"),
        ];
        assert_eq!(
            clause("WHERE", &parts, "(", ")", " AND "),
            "WHERE (a=1) \nAND () \nOR (b=2)"
        );
    }

    #[test]
    fn test_leading_marker() {
        let parts = vec![Fragment::from(Logic::Or), Fragment::text("a=1")];
        assert_eq!(
            clause("WHERE", &parts, "(", ")", " AND "),
            "WHERE () \nOR (a=1)"
        );
    }

    #[test]
    fn test_second_clause_starts_on_new_line() {
        let mut out = String::new();
        let mut w = ClauseWriter::new(&mut out);
        w.list("SELECT", &frags(&["a"])).unwrap();
        w.list("FROM", &frags(&["t"])).unwrap();
        assert_eq!(out, "SELECT a\nFROM t");
    }

    #[test]
    fn test_empty_keyword_has_no_leading_space() {
        assert_eq!(clause("", &frags(&["a", "b"]), "(", ")", ", "), "(a, b)");
    }

    #[test]
    fn test_join_conjunction_repeats_keyword() {
        let stmt = Statement {
            kind: Some(StatementKind::Select),
            selects: frags(&["*"]),
            tables: frags(&["a"]),
            left_outer_join: frags(&["b ON b.a_id = a.id", "c ON c.a_id = a.id"]),
            ..Statement::default()
        };
        let mut out = String::new();
        render(&stmt, &mut out).unwrap();
        assert_eq!(
            out,
            "SELECT *\nFROM a\nLEFT OUTER JOIN b ON b.a_id = a.id\nLEFT OUTER JOIN c ON c.a_id = a.id"
        );
    }

    #[test]
    fn test_no_kind_renders_empty() {
        let stmt = Statement {
            tables: frags(&["t"]),
            ..Statement::default()
        };
        let mut out = String::new();
        render(&stmt, &mut out).unwrap();
        assert!(out.is_empty());
    }

    /// Sink that accepts `limit` bytes and then fails.
    struct FailingSink {
        written: String,
        limit: usize,
    }

    impl fmt::Write for FailingSink {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            if self.written.len() + s.len() > self.limit {
                return Err(fmt::Error);
            }
            self.written.push_str(s);
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_aborts_render() {
        let stmt = Statement {
            kind: Some(StatementKind::Select),
            selects: frags(&["id"]),
            tables: frags(&["users"]),
            where_: frags(&["active=1"]),
            ..Statement::default()
        };
        let mut sink = FailingSink {
            written: String::new(),
            limit: 12,
        };
        let err = render(&stmt, &mut sink).unwrap_err();
        assert!(matches!(err, StmtError::Write(_)));
        assert_eq!(sink.written, "SELECT id\n");
    }
}

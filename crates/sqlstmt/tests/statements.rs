//! End-to-end rendering tests through the public API.

use sqlstmt::prelude::*;
use sqlstmt::{Fragment, Logic, PredicateTarget};

#[test]
fn select_with_everything() {
    let sql = select_distinct(["u.id", "u.name"])
        .from(["users u"])
        .join(["teams t ON t.id = u.team_id"])
        .left_outer_join(["profiles p ON p.user_id = u.id"])
        .where_(["u.active = 1", "t.archived = 0"])
        .or()
        .where_(["u.role = 'root'"])
        .group_by(["u.id", "u.name"])
        .having(["count(p.id) > 0"])
        .order_by(["u.name ASC", "u.id"])
        .limit("50")
        .to_sql();

    assert_eq!(
        sql,
        "SELECT DISTINCT u.id, u.name\n\
         FROM users u\n\
         JOIN teams t ON t.id = u.team_id\n\
         LEFT OUTER JOIN profiles p ON p.user_id = u.id\n\
         WHERE (u.active = 1 AND t.archived = 0) \n\
         OR (u.role = 'root')\n\
         GROUP BY u.id, u.name\n\
         HAVING (count(p.id) > 0)\n\
         ORDER BY u.name ASC, u.id\n\
         LIMIT 50"
    );
}

#[test]
fn multiple_from_tables_are_comma_joined() {
    let sql = select(["*"]).from(["a", "b"]).from(["c"]).to_sql();
    assert_eq!(sql, "SELECT *\nFROM a, b, c");
}

#[test]
fn insert_mixes_columns_and_pairs() {
    let sql = insert_into("t")
        .into_columns(["a"])
        .into_values(["1"])
        .values("b", "2")
        .to_sql();
    assert_eq!(sql, "INSERT INTO t\n(a, b)\nVALUES (1, 2)");
}

#[test]
fn insert_without_columns_renders_values_only() {
    let sql = insert_into("t").into_values(["DEFAULT"]).to_sql();
    assert_eq!(sql, "INSERT INTO t\nVALUES (DEFAULT)");
}

#[test]
fn delete_with_or_groups() {
    let sql = delete_from("sessions")
        .where_(["expires_at < now()"])
        .or()
        .where_(["revoked"])
        .to_sql();
    assert_eq!(sql, "DELETE FROM sessions\nWHERE (expires_at < now()) \nOR (revoked)");
}

#[test]
fn markers_are_stored_as_typed_entries() {
    let b = select(["*"]).from(["t"]).where_(["a"]).and().where_(["b"]).clone();
    assert_eq!(
        b.statement().predicates(PredicateTarget::Where),
        &[
            Fragment::text("a"),
            Fragment::Conjunction(Logic::And),
            Fragment::text("b"),
        ]
    );
}

#[test]
fn builder_can_be_reused_after_clear() {
    let mut b = SqlBuilder::new();
    b.update("t").set(["a = 1"]);
    assert_eq!(b.to_sql(), "UPDATE t\nSET a = 1");

    b.clear().delete_from("t").where_(["a = 1"]);
    assert_eq!(b.to_sql(), "DELETE FROM t\nWHERE (a = 1)");
}

#[test]
fn config_from_toml_drives_restatement() -> StmtResult<()> {
    let config = BuilderConfig::from_toml_str(r#"restatement = "reject""#)?;
    let mut b = SqlBuilder::with_config(config);
    b.update("t").set(["a = 1"]).select(["a"]);

    assert_eq!(b.statement_kind(), Some(StatementKind::Update));
    let err = b.build().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Statement conflict: builder holds UPDATE, refused SELECT"
    );
    Ok(())
}

#[test]
fn builder_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SqlBuilder>();
}

#[test]
fn display_matches_to_sql() {
    let b = update("t").set(["a = 1", "b = 2"]).clone();
    assert_eq!(format!("{b}"), b.to_sql());
    assert_eq!(format!("{b}"), "UPDATE t\nSET a = 1, b = 2");
}

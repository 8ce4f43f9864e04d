//! Example demonstrating sqlstmt's fragment builder with dynamic filters.
//!
//! Run with:
//!   cargo run --example sql_builder -p sqlstmt
//!
//! Set `RUST_LOG=sqlstmt=debug` to see the `tracing` output of `build()`.

use sqlstmt::{BuilderConfig, RestatementPolicy, SqlBuilder, StmtResult};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct Filters {
    status: Option<String>,
    search: Option<String>,
    roles_any_of: Vec<String>,
    include_deleted: bool,
    min_orders: Option<i64>,
    per_page: i64,
    page: i64,
}

fn build_list_users_sql(config: &BuilderConfig, filters: &Filters) -> StmtResult<String> {
    let mut q = SqlBuilder::with_config(config.clone());
    q.select(["u.id", "u.name", "u.status", "count(o.id) AS orders"])
        .from(["users u"])
        .left_outer_join(["orders o ON o.user_id = u.id"]);

    if let Some(status) = &filters.status {
        q.where_([format!("u.status = '{status}'")]);
    }
    if let Some(search) = &filters.search {
        q.where_([format!("u.name ILIKE '%{search}%'")]);
    }
    if !filters.include_deleted {
        q.where_(["u.deleted_at IS NULL"]);
    }
    if !filters.roles_any_of.is_empty() {
        let roles: Vec<String> = filters
            .roles_any_of
            .iter()
            .map(|r| format!("'{r}'"))
            .collect();
        q.where_([format!("u.role IN ({})", roles.join(", "))]);
    }

    q.group_by(["u.id", "u.name", "u.status"]);
    if let Some(min) = filters.min_orders {
        q.having([format!("count(o.id) >= {min}")]);
    }

    q.order_by(["u.created_at DESC", "u.id"])
        .limit(filters.per_page.to_string())
        .offset(((filters.page - 1) * filters.per_page).to_string());

    q.build()
}

fn main() -> StmtResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = BuilderConfig::from_toml_str(
        r#"
        restatement = "reject"
        log_sql = true
        max_log_length = 120
        "#,
    )?;

    let filters = Filters {
        status: Some("active".to_string()),
        search: Some("ali".to_string()),
        roles_any_of: vec!["admin".to_string(), "owner".to_string()],
        include_deleted: false,
        min_orders: Some(3),
        per_page: 20,
        page: 2,
    };

    println!("{}\n", build_list_users_sql(&config, &filters)?);

    let insert = sqlstmt::insert_into("audit_log")
        .values("actor", "'system'")
        .values("action", "'list_users'")
        .build()?;
    println!("{insert}\n");

    let update = sqlstmt::update("users")
        .set(["last_seen_at = now()"])
        .where_(["id = 42"])
        .or()
        .where_(["email = 'ops@example.com'", "verified"])
        .build()?;
    println!("{update}\n");

    // A second statement starter of another kind is refused under `reject`.
    let mut conflicting = SqlBuilder::with_config(
        BuilderConfig::new().with_restatement(RestatementPolicy::Reject),
    );
    conflicting.select(["*"]).from(["users"]).delete_from("users");
    match conflicting.build() {
        Ok(sql) => println!("{sql}"),
        Err(e) => println!("refused: {e}"),
    }

    Ok(())
}

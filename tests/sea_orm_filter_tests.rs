#![cfg(all(feature = "axum", feature = "sea-orm"))]

use querystring_filter::{apply_filter, parse};
use sea_orm::{DbBackend, EntityTrait, QueryTrait};

mod common;
use common::todo_entity;

fn sql_for(query: &str) -> String {
    let spec = parse(query).unwrap();
    apply_filter(todo_entity::Entity::find(), &spec)
        .build(DbBackend::Sqlite)
        .to_string()
}

#[test]
fn test_empty_filter_is_plain_select() {
    let sql = sql_for("");
    assert!(sql.starts_with("SELECT"));
    assert!(!sql.contains("WHERE"));
    assert!(!sql.contains("ORDER BY"));
    assert!(!sql.contains("LIMIT"));
}

#[test]
fn test_multi_value_field_becomes_in() {
    let sql = sql_for("action=test,example");
    assert!(sql.contains(r#"WHERE "action" IN ('test', 'example')"#), "{sql}");
}

#[test]
fn test_single_value_field_becomes_equality() {
    let sql = sql_for("category=home");
    assert!(sql.contains(r#"WHERE "category" = 'home'"#), "{sql}");
}

#[test]
fn test_fields_are_anded_in_name_order() {
    let sql = sql_for("dept=ops&action=run");
    assert!(
        sql.contains(r#"WHERE "action" = 'run' AND "dept" = 'ops'"#),
        "{sql}"
    );
}

#[test]
fn test_order_group_and_window() {
    let sql = sql_for("action=test,example&order=action,category.asc&group=dept&limit=10&skip=5");
    assert!(sql.contains(r#"GROUP BY "dept""#), "{sql}");
    assert!(
        sql.contains(r#"ORDER BY "action" DESC, "category" ASC"#),
        "{sql}"
    );
    assert!(sql.contains("LIMIT 10"), "{sql}");
    assert!(sql.contains("OFFSET 5"), "{sql}");
}

#[test]
fn test_page_size_window() {
    let sql = sql_for("page=3&pageSize=25");
    assert!(sql.contains("LIMIT 25"), "{sql}");
    assert!(sql.contains("OFFSET 50"), "{sql}");
}

#[test]
fn test_values_are_escaped() {
    let sql = sql_for("action=it's");
    assert!(sql.contains(r#""action" = 'it''s'"#), "{sql}");
}

// tests/integration/failures.rs
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::Workspace;

#[test]
fn missing_table_is_fatal() {
    let ws = Workspace::widget_shop();
    ws.exec("DROP TABLE items;");
    ws.command()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Application Error"))
        .stderr(predicate::str::contains("items"));
}

#[test]
fn missing_column_is_fatal_for_memory_engine() {
    let ws = Workspace::new();
    ws.exec("DROP TABLE orders; CREATE TABLE orders (order_id INTEGER, sales_id INTEGER, item_id INTEGER);");
    ws.command()
        .args(["--engine", "memory"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("quantity"));
}

#[test]
fn file_that_is_not_a_database_is_rejected() {
    let ws = Workspace::new();
    let bogus = ws.path("bogus.db");
    std::fs::write(&bogus, "definitely not sqlite, just some text padding it out a bit more").unwrap();
    assert_cmd::Command::new(env!("CARGO_BIN_EXE_sales_report"))
        .arg("--db")
        .arg(&bogus)
        .arg("--out-sql")
        .arg(ws.path("sql.csv"))
        .arg("--out-pandas")
        .arg(ws.path("memory.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Application Error"));
}

#[test]
fn unwritable_destination_fails() {
    let ws = Workspace::widget_shop();
    assert_cmd::Command::new(env!("CARGO_BIN_EXE_sales_report"))
        .arg("--db")
        .arg(ws.db())
        .arg("--out-sql")
        .arg(ws.path("no/such/dir/sql.csv"))
        .arg("--out-pandas")
        .arg(ws.path("memory.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Application Error"));
}

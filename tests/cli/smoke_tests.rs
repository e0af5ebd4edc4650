// tests/cli/smoke_tests.rs
use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{WIDGET_REPORT, Workspace};

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_sales_report"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--db"))
        .stdout(predicate::str::contains("--out-pandas"));
}

#[test]
fn db_flag_is_required() {
    Command::new(env!("CARGO_BIN_EXE_sales_report"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--db"));
}

#[test]
fn writes_both_reports_and_confirms_each() {
    let ws = Workspace::widget_shop();
    ws.command()
        .assert()
        .success()
        .stdout(predicate::str::contains("SQL result written"))
        .stdout(predicate::str::contains("In-memory result written"))
        .stdout(predicate::str::contains("sql.csv"))
        .stdout(predicate::str::contains("memory.csv"));

    assert_eq!(ws.read("sql.csv"), WIDGET_REPORT);
    assert_eq!(ws.read("memory.csv"), WIDGET_REPORT);
}

#[test]
fn default_file_names_land_in_working_directory() {
    let ws = Workspace::widget_shop();
    Command::new(env!("CARGO_BIN_EXE_sales_report"))
        .current_dir(ws.path(""))
        .arg("--db")
        .arg(ws.db())
        .assert()
        .success();

    assert_eq!(ws.read("output_sql.csv"), WIDGET_REPORT);
    assert_eq!(ws.read("output_pandas.csv"), WIDGET_REPORT);
}

#[test]
fn missing_database_fails_without_creating_it() {
    let ws = Workspace::new();
    let missing = ws.path("nope.db");
    Command::new(env!("CARGO_BIN_EXE_sales_report"))
        .arg("--db")
        .arg(&missing)
        .arg("--out-sql")
        .arg(ws.path("sql.csv"))
        .arg("--out-pandas")
        .arg(ws.path("memory.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Application Error"));

    assert!(!missing.exists());
    assert!(!ws.path("sql.csv").exists());
}

#[test]
fn same_path_for_both_outputs_is_rejected() {
    let ws = Workspace::widget_shop();
    Command::new(env!("CARGO_BIN_EXE_sales_report"))
        .arg("--db")
        .arg(ws.db())
        .arg("--out-sql")
        .arg(ws.path("same.csv"))
        .arg("--out-pandas")
        .arg(ws.path("same.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--out-pandas"));
}

#[test]
fn unknown_engine_is_a_usage_error() {
    let ws = Workspace::widget_shop();
    ws.command().args(["--engine", "pandas"]).assert().failure();
}

// tests/integration/end_to_end.rs
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{WIDGET_REPORT, Workspace};

#[test]
fn rerun_produces_identical_bytes() {
    let ws = Workspace::widget_shop();
    ws.command().assert().success();
    let first = (ws.read("sql.csv"), ws.read("memory.csv"));
    ws.command().assert().success();
    assert_eq!((ws.read("sql.csv"), ws.read("memory.csv")), first);
}

#[test]
fn existing_report_is_replaced() {
    let ws = Workspace::widget_shop();
    std::fs::write(ws.path("sql.csv"), "stale contents that are much longer than the report\n").unwrap();
    ws.command().assert().success();
    assert_eq!(ws.read("sql.csv"), WIDGET_REPORT);
}

#[test]
fn empty_tables_give_header_only() {
    let ws = Workspace::new();
    ws.command().assert().success();
    assert_eq!(ws.read("sql.csv"), "Customer;Age;Item;Quantity\n");
    assert_eq!(ws.read("memory.csv"), "Customer;Age;Item;Quantity\n");
}

#[test]
fn rows_are_sorted_by_customer_then_item() {
    let ws = Workspace::new();
    ws.exec(
        "INSERT INTO customers VALUES (2, 30), (1, 18), (3, 35);
         INSERT INTO sales VALUES (10, 2), (11, 1), (12, 3);
         INSERT INTO items VALUES (1, 'b'), (2, 'a'), (3, 'Z');
         INSERT INTO orders VALUES
            (1, 10, 1, 2), (2, 10, 2, 1), (3, 11, 3, 4),
            (4, 12, 1, 1), (5, 12, 1, 1), (6, 10, 1, NULL);",
    );
    ws.command().assert().success();

    let expected = "Customer;Age;Item;Quantity\n1;18;Z;4\n2;30;a;1\n2;30;b;2\n3;35;b;2\n";
    assert_eq!(ws.read("sql.csv"), expected);
    assert_eq!(ws.read("memory.csv"), expected);
}

#[test]
fn item_names_with_delimiter_are_quoted() {
    let ws = Workspace::new();
    ws.exec(
        "INSERT INTO customers VALUES (1, 20);
         INSERT INTO sales VALUES (1, 1);
         INSERT INTO orders VALUES (1, 1, 7, 3);",
    );
    ws.insert_item(7, "Nuts; Bolts");
    ws.command().assert().success();

    let expected = "Customer;Age;Item;Quantity\n1;20;\"Nuts; Bolts\";3\n";
    assert_eq!(ws.read("sql.csv"), expected);
    assert_eq!(ws.read("memory.csv"), expected);
}

#[test]
fn single_engine_writes_single_file() {
    let ws = Workspace::widget_shop();
    ws.command()
        .args(["--engine", "sql"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SQL result written"))
        .stdout(predicate::str::contains("In-memory").not());

    assert_eq!(ws.read("sql.csv"), WIDGET_REPORT);
    assert!(!ws.path("memory.csv").exists());

    ws.command().args(["--engine", "memory"]).assert().success();
    assert_eq!(ws.read("memory.csv"), WIDGET_REPORT);
}

#[test]
fn strict_mode_passes_when_engines_agree() {
    let ws = Workspace::widget_shop();
    ws.command().arg("--strict").assert().success();
}

#[test]
fn verbose_logging_goes_to_stderr_only() {
    let ws = Workspace::widget_shop();
    ws.command()
        .arg("-vv")
        .assert()
        .success()
        .stdout(predicate::str::contains("report written").not())
        .stderr(predicate::str::contains("report written"));
}

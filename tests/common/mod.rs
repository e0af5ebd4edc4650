// tests/common/mod.rs
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use rusqlite::{Connection, params};
use tempfile::TempDir;

pub const WIDGET_REPORT: &str = "Customer;Age;Item;Quantity\n1;25;Widget;5\n";

/// A temp directory holding a shop database and room for report files.
pub struct Workspace {
    dir: TempDir,
    db: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("shop.db");
        let conn = Connection::open(&db).unwrap();
        conn.execute_batch(
            "CREATE TABLE customers (customer_id INTEGER PRIMARY KEY, age INTEGER);
             CREATE TABLE sales (sales_id INTEGER PRIMARY KEY, customer_id INTEGER);
             CREATE TABLE orders (order_id INTEGER PRIMARY KEY, sales_id INTEGER, item_id INTEGER, quantity INTEGER);
             CREATE TABLE items (item_id INTEGER PRIMARY KEY, item_name TEXT);",
        )
        .unwrap();
        Self { dir, db }
    }

    /// Customer 1 (25) buys 5 widgets, a NULL quantity line is ignored,
    /// customer 2 (40) is outside the band.
    pub fn widget_shop() -> Self {
        let ws = Self::new();
        ws.exec(
            "INSERT INTO customers VALUES (1, 25), (2, 40);
             INSERT INTO sales VALUES (1, 1), (2, 2);
             INSERT INTO orders VALUES (1, 1, 1, 5), (2, 1, 1, NULL), (3, 2, 1, 7);
             INSERT INTO items VALUES (1, 'Widget');",
        );
        ws
    }

    pub fn exec(&self, sql: &str) {
        Connection::open(&self.db).unwrap().execute_batch(sql).unwrap();
    }

    pub fn insert_item(&self, id: i64, name: &str) {
        Connection::open(&self.db)
            .unwrap()
            .execute("INSERT INTO items VALUES (?1, ?2)", params![id, name])
            .unwrap();
    }

    pub fn db(&self) -> &Path {
        &self.db
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).unwrap()
    }

    /// The binary pointed at this workspace's database and output files.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_sales_report"));
        cmd.current_dir(self.dir.path())
            .arg("--db")
            .arg(&self.db)
            .arg("--out-sql")
            .arg(self.path("sql.csv"))
            .arg("--out-pandas")
            .arg(self.path("memory.csv"))
            .env_remove("RUST_LOG");
        cmd
    }
}

// crates/infra/tests/common/mod.rs
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use rusqlite::{Connection, params, types::Value};
use sales_report_domain::{AgeBand, AggregatedLine, Dataset, InMemoryAggregator, TableSchema};
use sales_report_infra::SqliteSource;
use sales_report_ports::source::{RelationalAggregation, TableSource};
use sales_report_shared_kernel::{ReportError, Result};
use tempfile::TempDir;

pub const SCHEMA: &str = "
    CREATE TABLE customers (customer_id INTEGER PRIMARY KEY, age INTEGER);
    CREATE TABLE sales (sales_id INTEGER PRIMARY KEY, customer_id INTEGER);
    CREATE TABLE orders (order_id INTEGER PRIMARY KEY, sales_id INTEGER, item_id INTEGER, quantity INTEGER);
    CREATE TABLE items (item_id INTEGER PRIMARY KEY, item_name TEXT);";

/// A throwaway shop database on disk.
pub struct ShopFixture {
    _dir: TempDir,
    path: PathBuf,
    conn: Connection,
}

impl ShopFixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.db");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(SCHEMA).unwrap();
        Self { _dir: dir, path, conn }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn customer(&self, id: i64, age: Option<i64>) -> &Self {
        self.conn.execute("INSERT INTO customers VALUES (?1, ?2)", params![id, age]).unwrap();
        self
    }

    pub fn sale(&self, id: i64, customer_id: i64) -> &Self {
        self.conn.execute("INSERT INTO sales VALUES (?1, ?2)", params![id, customer_id]).unwrap();
        self
    }

    pub fn order(&self, id: i64, sales_id: i64, item_id: i64, quantity: Value) -> &Self {
        self.conn
            .execute("INSERT INTO orders VALUES (?1, ?2, ?3, ?4)", params![id, sales_id, item_id, quantity])
            .unwrap();
        self
    }

    pub fn item(&self, id: i64, name: &str) -> &Self {
        self.conn.execute("INSERT INTO items VALUES (?1, ?2)", params![id, name]).unwrap();
        self
    }

    pub fn unnamed_item(&self, id: i64) -> &Self {
        self.conn.execute("INSERT INTO items VALUES (?1, NULL)", params![id]).unwrap();
        self
    }

    /// Run both engines against the fixture: `(sql, in_memory)`.
    pub fn both_engines(&self) -> (Vec<AggregatedLine>, Vec<AggregatedLine>) {
        let (sql, memory) = self.try_both_engines();
        (sql.unwrap(), memory.unwrap())
    }

    /// Like [`Self::both_engines`], keeping each engine's failure.
    pub fn try_both_engines(&self) -> (Result<Vec<AggregatedLine>>, Result<Vec<AggregatedLine>>) {
        let source = SqliteSource::open(&self.path).unwrap();
        let sql = source.aggregate(AgeBand::YOUTH);
        let read = |schema: &TableSchema| source.read_table(schema).unwrap();
        let dataset = Dataset::from_tables(
            &read(&TableSchema::CUSTOMERS),
            &read(&TableSchema::SALES),
            &read(&TableSchema::ORDERS),
            &read(&TableSchema::ITEMS),
        )
        .unwrap();
        let memory = InMemoryAggregator::new(AgeBand::YOUTH).compute(&dataset).map_err(ReportError::from);
        source.close().unwrap();
        (sql, memory)
    }
}

pub fn qty(v: i64) -> Value {
    Value::Integer(v)
}

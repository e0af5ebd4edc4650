// crates/domain/src/model/table.rs
use sales_report_shared_kernel::{DomainError, DomainResult};

use crate::value_objects::Cell;

/// Name and required columns of a source table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

impl TableSchema {
    pub const CUSTOMERS: Self = Self { name: "customers", columns: &["customer_id", "age"] };
    pub const SALES: Self = Self { name: "sales", columns: &["sales_id", "customer_id"] };
    pub const ORDERS: Self = Self { name: "orders", columns: &["order_id", "sales_id", "item_id", "quantity"] };
    pub const ITEMS: Self = Self { name: "items", columns: &["item_id", "item_name"] };
}

/// Untyped snapshot of one source table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self { name: name.into(), columns, rows: Vec::new() }
    }

    /// Append a row. Short rows are padded with NULL, long rows truncated.
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.columns.len(), Cell::Null);
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of `column`. Column names compare ASCII case-insensitively, as in SQL.
    pub fn column_index(&self, column: &str) -> DomainResult<usize> {
        self.columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(column))
            .ok_or_else(|| DomainError::MissingColumn { table: self.name.clone(), column: column.to_string() })
    }

    /// Positions of every column `schema` requires, in schema order.
    pub fn project(&self, schema: &TableSchema) -> DomainResult<Vec<usize>> {
        schema.columns.iter().map(|column| self.column_index(column)).collect()
    }

    /// Decode every row into `T`. Rows `T` rejects are skipped and counted in the log.
    pub fn decode<T: FromRow>(&self) -> DomainResult<Vec<T>> {
        let positions = self.project(&T::SCHEMA)?;
        let mut projected = Vec::with_capacity(positions.len());
        let mut decoded = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            projected.clear();
            projected.extend(positions.iter().map(|&i| &row[i]));
            if let Some(value) = T::from_row(&projected) {
                decoded.push(value);
            }
        }
        let skipped = self.rows.len() - decoded.len();
        if skipped > 0 {
            tracing::debug!(table = %self.name, skipped, "rows without usable keys skipped");
        }
        Ok(decoded)
    }
}

/// Typed view of a table row.
pub trait FromRow: Sized {
    const SCHEMA: TableSchema;

    /// Build from the row's cells, ordered as `SCHEMA.columns`.
    /// Returns `None` when a join key is not an integer; such a row can never match.
    fn from_row(cells: &[&Cell]) -> Option<Self>;
}

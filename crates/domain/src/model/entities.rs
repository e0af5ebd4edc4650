// crates/domain/src/model/entities.rs
use serde::Serialize;
use sales_report_shared_kernel::DomainResult;

use crate::{
    model::table::{FromRow, Table, TableSchema},
    value_objects::{Cell, Coerced},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub customer_id: i64,
    /// `None` when the stored age is NULL or not an integer.
    pub age: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sale {
    pub sales_id: i64,
    pub customer_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_id: Option<i64>,
    pub sales_id: i64,
    pub item_id: i64,
    pub quantity: Coerced,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub item_id: i64,
    /// `None` for a NULL name, which groups apart from an empty one.
    pub item_name: Option<String>,
}

impl FromRow for Customer {
    const SCHEMA: TableSchema = TableSchema::CUSTOMERS;

    fn from_row(cells: &[&Cell]) -> Option<Self> {
        Some(Self { customer_id: cells[0].as_integer()?, age: cells[1].as_integer() })
    }
}

impl FromRow for Sale {
    const SCHEMA: TableSchema = TableSchema::SALES;

    fn from_row(cells: &[&Cell]) -> Option<Self> {
        Some(Self { sales_id: cells[0].as_integer()?, customer_id: cells[1].as_integer()? })
    }
}

impl FromRow for Order {
    const SCHEMA: TableSchema = TableSchema::ORDERS;

    fn from_row(cells: &[&Cell]) -> Option<Self> {
        Some(Self {
            order_id: cells[0].as_integer(),
            sales_id: cells[1].as_integer()?,
            item_id: cells[2].as_integer()?,
            quantity: cells[3].to_numeric(),
        })
    }
}

impl FromRow for Item {
    const SCHEMA: TableSchema = TableSchema::ITEMS;

    fn from_row(cells: &[&Cell]) -> Option<Self> {
        let name = cells[1];
        Some(Self { item_id: cells[0].as_integer()?, item_name: (!name.is_null()).then(|| name.to_text()) })
    }
}

/// The four source tables, decoded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub sales: Vec<Sale>,
    pub orders: Vec<Order>,
    pub items: Vec<Item>,
}

impl Dataset {
    pub fn from_tables(customers: &Table, sales: &Table, orders: &Table, items: &Table) -> DomainResult<Self> {
        Ok(Self {
            customers: customers.decode()?,
            sales: sales.decode()?,
            orders: orders.decode()?,
            items: items.decode()?,
        })
    }
}

/// One report line: total quantity of an item bought by a customer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AggregatedLine {
    #[serde(rename = "Customer")]
    pub customer: i64,
    #[serde(rename = "Age")]
    pub age: i64,
    #[serde(rename = "Item")]
    pub item: String,
    #[serde(rename = "Quantity")]
    pub quantity: i64,
}

impl AggregatedLine {
    pub const HEADER: [&'static str; 4] = ["Customer", "Age", "Item", "Quantity"];

    pub fn new(customer: i64, age: i64, item: impl Into<String>, quantity: i64) -> Self {
        Self { customer, age, item: item.into(), quantity }
    }
}

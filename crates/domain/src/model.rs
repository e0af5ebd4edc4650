pub mod entities;
pub mod table;

pub use entities::{AggregatedLine, Customer, Dataset, Item, Order, Sale};
pub use table::{FromRow, Table, TableSchema};

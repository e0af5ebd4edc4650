// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod model;
pub mod value_objects;

pub use analytics::{Comparison, Divergence, InMemoryAggregator, PipelineStats, SortKey, SortStrategy};
pub use model::{AggregatedLine, Customer, Dataset, Item, Order, Sale, Table, TableSchema};
pub use value_objects::{AgeBand, Cell, Coerced, Numeric, QuantitySum};

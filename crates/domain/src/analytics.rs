pub mod aggregate;
pub mod compare;
pub mod join;
pub mod sort;

pub use aggregate::{InMemoryAggregator, PipelineStats};
pub use compare::{Comparison, Divergence, compare};
pub use join::inner_join;
pub use sort::{SortKey, SortStrategy};

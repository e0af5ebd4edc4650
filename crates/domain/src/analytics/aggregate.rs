// crates/domain/src/analytics/aggregate.rs
use std::collections::BTreeMap;

use sales_report_shared_kernel::{DomainError, DomainResult};

use crate::{
    analytics::{join::inner_join, sort::SortStrategy},
    model::{AggregatedLine, Dataset},
    value_objects::{AgeBand, Coerced, QuantitySum},
};

/// Row counts observed at each stage of the in-memory pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Orders before any join.
    pub orders: usize,
    /// Rows surviving all three inner joins.
    pub joined: usize,
    pub absent_quantity: usize,
    pub non_numeric_quantity: usize,
    pub outside_age_band: usize,
    /// Groups formed before the positive-total filter.
    pub groups: usize,
    pub non_positive_groups: usize,
}

/// Field order gives the report order; a NULL item name sorts before any text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct GroupKey {
    customer_id: i64,
    item_name: Option<String>,
    age: i64,
}

/// Computes the report from decoded tables without help from the data source.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAggregator {
    band: AgeBand,
    order: SortStrategy,
}

impl InMemoryAggregator {
    pub fn new(band: AgeBand) -> Self {
        Self { band, order: SortStrategy::report() }
    }

    pub fn compute(&self, data: &Dataset) -> DomainResult<Vec<AggregatedLine>> {
        self.compute_with_stats(data).map(|(lines, _)| lines)
    }

    /// Fails only when an integer total overflows.
    pub fn compute_with_stats(&self, data: &Dataset) -> DomainResult<(Vec<AggregatedLine>, PipelineStats)> {
        let mut stats = PipelineStats { orders: data.orders.len(), ..PipelineStats::default() };

        let with_sales = inner_join(&data.orders, &data.sales, |o| o.sales_id, |s| s.sales_id);
        let with_customers = inner_join(&with_sales, &data.customers, |(_, s)| s.customer_id, |c| c.customer_id);
        let joined = inner_join(&with_customers, &data.items, |((o, _), _)| o.item_id, |i| i.item_id);
        stats.joined = joined.len();

        let mut groups: BTreeMap<GroupKey, QuantitySum> = BTreeMap::new();
        for (((order, _), customer), item) in joined {
            // Coercion happens before the age filter, so a bad quantity is counted
            // even when the customer would have been filtered out anyway.
            let quantity = match order.quantity {
                Coerced::Number(q) => q,
                Coerced::Absent => {
                    stats.absent_quantity += 1;
                    continue;
                }
                Coerced::NonNumeric => {
                    stats.non_numeric_quantity += 1;
                    continue;
                }
            };
            let Some(age) = customer.age.filter(|a| self.band.contains(*a)) else {
                stats.outside_age_band += 1;
                continue;
            };
            let key = GroupKey { customer_id: customer.customer_id, item_name: item.item_name.clone(), age };
            groups.entry(key).or_default().add(quantity);
        }
        stats.groups = groups.len();

        let mut lines = Vec::with_capacity(groups.len());
        for (key, sum) in groups {
            let Some(total) = sum.total() else {
                return Err(DomainError::IntegerOverflow {
                    customer: key.customer_id,
                    item: key.item_name.unwrap_or_default(),
                });
            };
            if !total.is_positive() {
                stats.non_positive_groups += 1;
                continue;
            }
            lines.push(AggregatedLine {
                customer: key.customer_id,
                age: key.age,
                item: key.item_name.unwrap_or_default(),
                quantity: total.truncate(),
            });
        }

        self.order.apply(&mut lines);
        tracing::debug!(?stats, lines = lines.len(), "in-memory aggregation finished");
        Ok((lines, stats))
    }
}

// crates/domain/src/analytics/sort.rs
use std::cmp::Ordering;

use crate::model::AggregatedLine;

/// Column a report can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Customer,
    Age,
    /// Plain codepoint order, case-sensitive. Matches SQLite's BINARY collation.
    Item,
}

impl SortKey {
    #[inline]
    pub fn compare(self, a: &AggregatedLine, b: &AggregatedLine) -> Ordering {
        match self {
            Self::Customer => a.customer.cmp(&b.customer),
            Self::Age => a.age.cmp(&b.age),
            Self::Item => a.item.cmp(&b.item),
        }
    }
}

/// Ascending multi-key ordering of report lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortStrategy {
    keys: Vec<SortKey>,
}

impl SortStrategy {
    pub fn new(keys: Vec<SortKey>) -> Self {
        Self { keys }
    }

    /// Customer, then item. Age only breaks ties between duplicate customer ids.
    pub fn report() -> Self {
        Self::new(vec![SortKey::Customer, SortKey::Item, SortKey::Age])
    }

    pub fn apply(&self, lines: &mut [AggregatedLine]) {
        if lines.len() < 2 || self.keys.is_empty() {
            return;
        }
        lines.sort_by(|a, b| self.compare(a, b));
    }

    pub fn is_sorted(&self, lines: &[AggregatedLine]) -> bool {
        lines.windows(2).all(|w| self.compare(&w[0], &w[1]) != Ordering::Greater)
    }

    fn compare(&self, a: &AggregatedLine, b: &AggregatedLine) -> Ordering {
        self.keys
            .iter()
            .map(|key| key.compare(a, b))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl Default for SortStrategy {
    fn default() -> Self {
        Self::report()
    }
}

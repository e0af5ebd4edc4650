// crates/domain/src/analytics/compare.rs
use std::fmt;

use crate::model::AggregatedLine;

/// Outcome of cross-checking two report tables row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    Identical { rows: usize },
    Diverged(Divergence),
}

impl Comparison {
    pub fn is_identical(&self) -> bool {
        matches!(self, Self::Identical { .. })
    }
}

/// First position at which two tables differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divergence {
    pub position: usize,
    pub left: Option<AggregatedLine>,
    pub right: Option<AggregatedLine>,
    pub left_rows: usize,
    pub right_rows: usize,
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "first difference at row {} ({} vs {} rows): {} != {}",
            self.position + 1,
            self.left_rows,
            self.right_rows,
            render(self.left.as_ref()),
            render(self.right.as_ref()),
        )
    }
}

fn render(line: Option<&AggregatedLine>) -> String {
    line.map_or_else(
        || "<missing>".to_string(),
        |l| format!("{};{};{};{}", l.customer, l.age, l.item, l.quantity),
    )
}

pub fn compare(left: &[AggregatedLine], right: &[AggregatedLine]) -> Comparison {
    let longest = left.len().max(right.len());
    let position = (0..longest).find(|&i| left.get(i) != right.get(i));
    match position {
        None => Comparison::Identical { rows: left.len() },
        Some(position) => Comparison::Diverged(Divergence {
            position,
            left: left.get(position).cloned(),
            right: right.get(position).cloned(),
            left_rows: left.len(),
            right_rows: right.len(),
        }),
    }
}

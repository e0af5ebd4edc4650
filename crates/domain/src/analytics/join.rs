// crates/domain/src/analytics/join.rs
use std::{collections::HashMap, hash::Hash};

/// Hash inner join of `left` with `right`.
///
/// Builds a table over `right` keyed by `right_key`, then probes it with every
/// left row. Left rows without a match are dropped (never null-padded); a left
/// row matching several right rows appears once per match, in right-side order.
pub fn inner_join<'l, 'r, L, R, K, FL, FR>(
    left: &'l [L],
    right: &'r [R],
    left_key: FL,
    right_key: FR,
) -> Vec<(&'l L, &'r R)>
where
    K: Eq + Hash,
    FL: Fn(&L) -> K,
    FR: Fn(&R) -> K,
{
    let mut index: HashMap<K, Vec<&'r R>> = HashMap::with_capacity(right.len());
    for row in right {
        index.entry(right_key(row)).or_default().push(row);
    }

    left.iter()
        .flat_map(|l| {
            index
                .get(&left_key(l))
                .into_iter()
                .flatten()
                .map(move |r| (l, *r))
        })
        .collect()
}

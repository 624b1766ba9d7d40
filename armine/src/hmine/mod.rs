// Projection (H-Mine) miner: recursive prefix-database projection over
// rank-ordered rows.

pub mod projection;

#[cfg(test)]
mod tests;

pub use projection::{local_counts, project, rewrite_in_rank_order};

use crate::config::MiningOptions;
use crate::ledger::{
    add_pattern_to_result, count_items, rank_frequent_items, FrequentLevel, ItemId, ItemsetMiner,
};
use std::collections::HashMap;
use tracing::trace;

#[derive(Debug, Clone, Copy, Default)]
pub struct HMine;

impl ItemsetMiner for HMine {
    fn mine_levels(
        &self,
        transactions: &[Vec<ItemId>],
        num_items: usize,
        min_count: usize,
        options: &MiningOptions,
    ) -> Vec<FrequentLevel> {
        hmine_algorithm(transactions, num_items, min_count, options)
    }
}

pub fn hmine_algorithm(
    transactions: &[Vec<ItemId>],
    num_items: usize,
    min_count: usize,
    options: &MiningOptions,
) -> Vec<FrequentLevel> {
    let item_counts = count_items(transactions, num_items, options);
    let ranked = rank_frequent_items(&item_counts, min_count);

    let f_list: Vec<ItemId> = ranked.iter().map(|&(item, _)| item).collect();
    let counts: HashMap<ItemId, usize> = ranked.into_iter().collect();

    let prepared = rewrite_in_rank_order(transactions, &f_list, num_items);
    let rows: Vec<&[ItemId]> = prepared.iter().map(Vec::as_slice).collect();
    trace!(rows = rows.len(), frequent_items = f_list.len(), "h-mine rows prepared");

    let mut result = Vec::new();
    let mut prefix = Vec::new();
    hmine_recursive(&rows, &f_list, &counts, &mut prefix, min_count, &mut result);
    result
}

/// Mine one (projected) database. `counts` are the item supports inside
/// `rows`, `f_list` its frequent items in rank order.
fn hmine_recursive(
    rows: &[&[ItemId]],
    f_list: &[ItemId],
    counts: &HashMap<ItemId, usize>,
    prefix: &mut Vec<ItemId>,
    min_count: usize,
    result: &mut Vec<FrequentLevel>,
) {
    if f_list.is_empty() || rows.is_empty() {
        return;
    }

    for &item in f_list.iter().rev() {
        let support = counts.get(&item).copied().unwrap_or(0);
        if support < min_count {
            continue;
        }

        prefix.push(item);
        add_pattern_to_result(prefix, support, result);

        let projected = project(rows, item);
        if !projected.is_empty() {
            let projected_counts = local_counts(&projected);
            let local_f: Vec<ItemId> = f_list
                .iter()
                .copied()
                .filter(|&other| {
                    other != item
                        && projected_counts.get(&other).copied().unwrap_or(0) >= min_count
                })
                .collect();

            if !local_f.is_empty() {
                hmine_recursive(
                    &projected,
                    &local_f,
                    &projected_counts,
                    prefix,
                    min_count,
                    result,
                );
            }
        }

        prefix.pop();
    }
}

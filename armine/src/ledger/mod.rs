// Ledger module - itemsets, the transaction database and support storage
// shared by every mining strategy.

mod combinations;
mod database;
mod itemset;
mod storage;


pub use combinations::{for_each_combination, generate_combinations_recursive};
pub use database::{Item, TransactionDatabase};
pub use itemset::{ItemId, Itemset};
pub use storage::{
    add_pattern_to_result, merge_levels, FrequentItemsets, FrequentLevel, ItemsetStorage,
    SupportMap,
};

use crate::config::MiningOptions;

/// Common interface of the frequent-itemset miners.
///
/// `transactions` are sorted id lists over `0..num_items`; `min_count` is the
/// resolved absolute threshold (at least 1). Levels may come back in any
/// order within a size; callers canonicalize through [`FrequentItemsets::new`].
pub trait ItemsetMiner {
    fn mine_levels(
        &self,
        transactions: &[Vec<ItemId>],
        num_items: usize,
        min_count: usize,
        options: &MiningOptions,
    ) -> Vec<FrequentLevel>;
}

/// Support of every single item, indexed by id.
pub fn count_items(transactions: &[Vec<ItemId>], num_items: usize, options: &MiningOptions) -> Vec<usize> {
    use rayon::prelude::*;

    let tally = |mut counts: Vec<usize>, transaction: &Vec<ItemId>| {
        for &item in transaction {
            counts[item] += 1;
        }
        counts
    };

    if options.parallel {
        transactions
            .par_iter()
            .fold(|| vec![0; num_items], tally)
            .reduce(|| vec![0; num_items], add_counts)
    } else {
        transactions.iter().fold(vec![0; num_items], tally)
    }
}

/// Element-wise sum of two partial count vectors.
pub(crate) fn add_counts(mut left: Vec<usize>, right: Vec<usize>) -> Vec<usize> {
    for (total, partial) in left.iter_mut().zip(right) {
        *total += partial;
    }
    left
}

/// Items meeting `min_count`, ranked by support descending then id ascending.
pub fn rank_frequent_items(counts: &[usize], min_count: usize) -> Vec<(ItemId, usize)> {
    let mut frequent: Vec<(ItemId, usize)> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count >= min_count)
        .map(|(item, &count)| (item, count))
        .collect();

    frequent.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    frequent
}

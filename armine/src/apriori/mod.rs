// Level-wise (Apriori) miner: join, prune, then count, one level at a time.

pub mod candidates;
pub mod counting;


pub use candidates::{generate_candidates, join_step, prune_step};
pub use counting::count_candidates;

use crate::config::MiningOptions;
use crate::ledger::{count_items, FrequentLevel, ItemId, Itemset, ItemsetMiner};
use tracing::trace;

/// Apriori: one full database scan per itemset size.
#[derive(Debug, Clone, Copy, Default)]
pub struct Apriori;

impl ItemsetMiner for Apriori {
    fn mine_levels(
        &self,
        transactions: &[Vec<ItemId>],
        num_items: usize,
        min_count: usize,
        options: &MiningOptions,
    ) -> Vec<FrequentLevel> {
        apriori(transactions, num_items, min_count, options)
    }
}

pub fn apriori(
    transactions: &[Vec<ItemId>],
    num_items: usize,
    min_count: usize,
    options: &MiningOptions,
) -> Vec<FrequentLevel> {
    let item_counts = count_items(transactions, num_items, options);

    let mut level1 = FrequentLevel::new(1);
    let mut current: Vec<Itemset> = Vec::new();
    for (item, &count) in item_counts.iter().enumerate() {
        if count >= min_count {
            level1.add_itemset(vec![item], count);
            current.push(Itemset::from_sorted(vec![item]));
        }
    }

    let mut levels = Vec::new();
    if current.is_empty() {
        return levels;
    }
    levels.push(level1);

    while !current.is_empty() {
        let candidates = generate_candidates(&current);
        trace!(
            frequent = current.len(),
            level = levels.len() + 1,
            candidates = candidates.len(),
            "apriori candidates"
        );
        if candidates.is_empty() {
            break;
        }

        let supports = count_candidates(transactions, &candidates, options);

        let mut level = FrequentLevel::new(levels.len() + 1);
        let mut next = Vec::new();
        for (candidate, support) in candidates.into_iter().zip(supports) {
            if support >= min_count {
                level.add_itemset(candidate.items().to_vec(), support);
                next.push(candidate);
            }
        }

        if !level.is_empty() {
            levels.push(level);
        }
        current = next;
    }

    levels
}

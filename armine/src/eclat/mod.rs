// Vertical (Eclat) miner: depth-first tid-set intersection.

pub mod mining;
pub mod tidset;

#[cfg(test)]
mod tests;

pub use mining::eclat_algorithm;
pub use tidset::{intersect, vertical_format, TidSet};

use crate::config::MiningOptions;
use crate::ledger::{FrequentLevel, ItemId, ItemsetMiner};

#[derive(Debug, Clone, Copy, Default)]
pub struct Eclat;

impl ItemsetMiner for Eclat {
    fn mine_levels(
        &self,
        transactions: &[Vec<ItemId>],
        num_items: usize,
        min_count: usize,
        _options: &MiningOptions,
    ) -> Vec<FrequentLevel> {
        eclat_algorithm(transactions, num_items, min_count)
    }
}

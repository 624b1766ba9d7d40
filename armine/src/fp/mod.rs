// Prefix-tree (FP-Growth) miner.

pub mod builder;
pub mod combinations;
pub mod mining;
pub mod tree;


pub use mining::fp_growth_algorithm;
pub use tree::{FPNode, FPTree, HeaderEntry};

use crate::config::MiningOptions;
use crate::ledger::{FrequentLevel, ItemId, ItemsetMiner};

/// FP-Growth: two scans to build the tree, then recursive mining of
/// conditional pattern bases.
#[derive(Debug, Clone, Copy, Default)]
pub struct FpGrowth;

impl ItemsetMiner for FpGrowth {
    fn mine_levels(
        &self,
        transactions: &[Vec<ItemId>],
        num_items: usize,
        min_count: usize,
        options: &MiningOptions,
    ) -> Vec<FrequentLevel> {
        fp_growth_algorithm(transactions, num_items, min_count, options)
    }
}

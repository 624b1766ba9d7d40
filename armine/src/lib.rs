//! Frequent itemset mining and association rule generation.
//!
//! Four interchangeable strategies discover the same frequent itemsets:
//!
//! - [`Strategy::LevelWise`]: Apriori candidate generation, pruning and counting
//! - [`Strategy::PrefixTree`]: FP-Growth over a compressed prefix tree
//! - [`Strategy::Vertical`]: Eclat tid-set intersection
//! - [`Strategy::Projection`]: H-Mine projected databases
//!
//! ```
//! use armine::{generate_rules, mine, resolve_threshold, Strategy, TransactionDatabase};
//!
//! let db = TransactionDatabase::new(vec![
//!     vec!["a", "b"],
//!     vec!["a"],
//!     vec!["a", "b", "c"],
//!     vec!["b", "c"],
//! ])?;
//! let min_count = resolve_threshold(0.5, db.len())?;
//! let output = mine(&db, min_count, Strategy::PrefixTree)?;
//! assert_eq!(output.itemsets.len(), 5);
//!
//! let rules = generate_rules(&output.itemsets, &output.supports, db.len(), 0.6)?;
//! assert_eq!(rules[0].confidence, 1.0);
//! # Ok::<(), armine::MiningError>(())
//! ```

pub mod apriori;
pub mod config;
pub mod eclat;
pub mod error;
pub mod fp;
pub mod hmine;
pub mod ledger;
pub mod rules;
pub mod threshold;

pub use config::{MiningConfig, MiningOptions};
pub use error::{MiningError, Result};
pub use ledger::{
    FrequentItemsets, FrequentLevel, Item, ItemId, Itemset, ItemsetMiner, SupportMap,
    TransactionDatabase,
};
pub use rules::{generate_rules, AssociationRule};
pub use threshold::resolve_threshold;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Itemset discovery algorithm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    #[serde(rename = "apriori", alias = "ap", alias = "level-wise")]
    LevelWise,
    #[default]
    #[serde(rename = "fp-growth", alias = "fp", alias = "prefix-tree")]
    PrefixTree,
    #[serde(rename = "eclat", alias = "ec", alias = "vertical")]
    Vertical,
    #[serde(rename = "h-mine", alias = "hm", alias = "projection")]
    Projection,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::LevelWise,
        Strategy::PrefixTree,
        Strategy::Vertical,
        Strategy::Projection,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::LevelWise => "apriori",
            Strategy::PrefixTree => "fp-growth",
            Strategy::Vertical => "eclat",
            Strategy::Projection => "h-mine",
        }
    }

    pub fn miner(&self) -> &'static dyn ItemsetMiner {
        match self {
            Strategy::LevelWise => &apriori::Apriori,
            Strategy::PrefixTree => &fp::FpGrowth,
            Strategy::Vertical => &eclat::Eclat,
            Strategy::Projection => &hmine::HMine,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = MiningError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ap" | "apriori" | "level-wise" | "levelwise" => Ok(Strategy::LevelWise),
            "fp" | "fp-growth" | "fpgrowth" | "prefix-tree" => Ok(Strategy::PrefixTree),
            "ec" | "eclat" | "vertical" => Ok(Strategy::Vertical),
            "hm" | "h-mine" | "hmine" | "projection" => Ok(Strategy::Projection),
            _ => Err(MiningError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Frequent itemsets of one run together with their support ledger.
#[derive(Debug, Clone)]
pub struct MiningOutput {
    pub itemsets: FrequentItemsets,
    pub supports: SupportMap,
}

/// Mine every itemset contained in at least `min_count` transactions.
pub fn mine<I: Item>(
    database: &TransactionDatabase<I>,
    min_count: usize,
    strategy: Strategy,
) -> Result<MiningOutput> {
    mine_with(database, min_count, strategy, &MiningOptions::default())
}

/// [`mine`] with explicit execution options.
pub fn mine_with<I>(
    database: &TransactionDatabase<I>,
    min_count: usize,
    strategy: Strategy,
    options: &MiningOptions,
) -> Result<MiningOutput> {
    if min_count == 0 {
        return Err(MiningError::InvalidThreshold(0.0));
    }

    let num_transactions = database.len();
    debug!(%strategy, min_count, num_transactions, parallel = options.parallel, "mining started");

    let itemsets = if database.is_empty() {
        FrequentItemsets::empty(0)
    } else {
        let levels = strategy.miner().mine_levels(
            database.transactions(),
            database.num_items(),
            min_count,
            options,
        );
        FrequentItemsets::new(levels, num_transactions)
    };
    let supports = itemsets.support_map();

    debug!(
        %strategy,
        frequent = itemsets.len(),
        max_size = itemsets.max_size(),
        "mining finished"
    );
    Ok(MiningOutput { itemsets, supports })
}

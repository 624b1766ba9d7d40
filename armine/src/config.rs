// Run configuration: thresholds, strategy and execution options.

use crate::error::{MiningError, Result};
use crate::ledger::{Item, TransactionDatabase};
use crate::rules::{generate_rules, AssociationRule};
use crate::threshold::resolve_threshold;
use crate::{mine_with, MiningOutput, Strategy};
use serde::{Deserialize, Serialize};

/// Execution options shared by every strategy.
///
/// Options never change the mined itemsets or their supports, only how the
/// work is scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiningOptions {
    /// Count supports with rayon. Partial counts are summed before any
    /// candidate is compared to the threshold.
    pub parallel: bool,
}

/// Configuration for one mining run
///
/// # Example
/// ```
/// use armine::{MiningConfig, Strategy};
///
/// let config = MiningConfig::default();
/// assert_eq!(config.min_confidence, 0.6);
/// assert_eq!(config.strategy, Strategy::PrefixTree);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    /// Minimum support: a fraction in (0, 1] of the database size, or an
    /// absolute transaction count when above 1.
    pub min_support: f64,

    /// Minimum rule confidence in [0, 1]
    pub min_confidence: f64,

    pub strategy: Strategy,

    pub parallel: bool,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: 0.5,
            min_confidence: 0.6,
            strategy: Strategy::default(),
            parallel: false,
        }
    }
}

impl MiningConfig {
    pub fn new(min_support: f64, min_confidence: f64) -> Self {
        Self {
            min_support,
            min_confidence,
            ..Self::default()
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.min_support.is_finite() || self.min_support <= 0.0 {
            return Err(MiningError::InvalidThreshold(self.min_support));
        }
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(MiningError::InvalidConfidence(self.min_confidence));
        }
        Ok(())
    }

    pub fn options(&self) -> MiningOptions {
        MiningOptions {
            parallel: self.parallel,
        }
    }

    pub fn resolve_threshold(&self, num_transactions: usize) -> Result<usize> {
        resolve_threshold(self.min_support, num_transactions)
    }

    /// Validate, mine `database` and derive rules in one call.
    pub fn run<I: Item>(
        &self,
        database: &TransactionDatabase<I>,
    ) -> Result<(MiningOutput, Vec<AssociationRule>)> {
        self.validate()?;
        let min_count = self.resolve_threshold(database.len())?;
        let output = mine_with(database, min_count, self.strategy, &self.options())?;
        let rules = generate_rules(
            &output.itemsets,
            &output.supports,
            database.len(),
            self.min_confidence,
        )?;
        Ok((output, rules))
    }
}

// Association rules derived from frequent itemsets.

pub mod measures;


pub use measures::RuleMeasures;

use crate::error::{MiningError, Result};
use crate::ledger::{for_each_combination, FrequentItemsets, ItemId, Itemset, SupportMap};
use std::cmp::Ordering;
use tracing::debug;

/// Rule `antecedent -> consequent` over one frequent itemset.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociationRule {
    pub antecedent: Itemset,
    pub consequent: Itemset,
    /// Transactions containing both sides
    pub support_count: usize,
    pub antecedent_support: usize,
    pub consequent_support: usize,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
    pub leverage: f64,
    pub conviction: f64,
    pub odds_ratio: f64,
}

impl AssociationRule {
    pub fn new(
        antecedent: Itemset,
        consequent: Itemset,
        support_count: usize,
        antecedent_support: usize,
        consequent_support: usize,
        num_transactions: usize,
    ) -> Self {
        let measures = RuleMeasures::from_counts(
            num_transactions,
            antecedent_support,
            consequent_support,
            support_count,
        );

        Self {
            antecedent,
            consequent,
            support_count,
            antecedent_support,
            consequent_support,
            support: measures.support,
            confidence: measures.confidence,
            lift: measures.lift,
            leverage: measures.leverage,
            conviction: measures.conviction,
            odds_ratio: measures.odds_ratio,
        }
    }

    /// The frequent itemset the rule was split from.
    pub fn itemset(&self) -> Itemset {
        self.antecedent.union(&self.consequent)
    }

    /// Output order: confidence desc, support desc, then antecedent and
    /// consequent in canonical order.
    fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .confidence
            .total_cmp(&self.confidence)
            .then_with(|| other.support_count.cmp(&self.support_count))
            .then_with(|| self.antecedent.cmp(&other.antecedent))
            .then_with(|| self.consequent.cmp(&other.consequent))
    }
}

/// Split every frequent itemset of two or more items into all
/// `antecedent -> consequent` rules reaching `min_confidence`.
///
/// Supports of both sides are read from `supports`; a missing entry means the
/// ledger is not closed under subsets and is reported as
/// [`MiningError::MissingSupport`].
pub fn generate_rules(
    itemsets: &FrequentItemsets,
    supports: &SupportMap,
    num_transactions: usize,
    min_confidence: f64,
) -> Result<Vec<AssociationRule>> {
    if !(0.0..=1.0).contains(&min_confidence) {
        return Err(MiningError::InvalidConfidence(min_confidence));
    }

    let lookup = |itemset: &Itemset| -> Result<usize> {
        supports
            .get(itemset)
            .copied()
            .ok_or_else(|| MiningError::MissingSupport {
                itemset: itemset.items().to_vec(),
            })
    };

    let mut rules = Vec::new();
    for level in itemsets.levels().iter().filter(|level| level.itemset_size >= 2) {
        for (items, support_count) in level.iter() {
            let itemset = Itemset::from_sorted(items.to_vec());

            for antecedent in proper_subsets(items) {
                let antecedent_support = lookup(&antecedent)?;
                let confidence = support_count as f64 / antecedent_support as f64;
                if confidence < min_confidence {
                    continue;
                }

                let consequent = itemset.difference(&antecedent);
                let consequent_support = lookup(&consequent)?;
                rules.push(AssociationRule::new(
                    antecedent,
                    consequent,
                    support_count,
                    antecedent_support,
                    consequent_support,
                    num_transactions,
                ));
            }
        }
    }

    rules.sort_by(AssociationRule::rank_cmp);
    debug!(rules = rules.len(), min_confidence, "rules generated");
    Ok(rules)
}

/// Every non-empty proper subset of a canonical itemset, smallest first.
fn proper_subsets(items: &[ItemId]) -> Vec<Itemset> {
    let mut subsets = Vec::new();
    for size in 1..items.len() {
        for_each_combination(items, size, |combination| {
            subsets.push(Itemset::from_sorted(combination.to_vec()));
        });
    }
    subsets
}

use crate::ledger::{ItemId, Itemset};
use std::collections::HashSet;

/// Join step: combine every pair of `k`-itemsets that agree on their first
/// `k - 1` items.
///
/// `level` must be in canonical order, so itemsets sharing a prefix sit next
/// to each other and the scan for partners stops at the first mismatch. Two
/// distinct itemsets with a common `k - 1` prefix always differ in their last
/// item, so every join yields exactly `k + 1` items. The output is in
/// canonical order too.
pub fn join_step(level: &[Itemset]) -> Vec<Itemset> {
    let mut candidates = Vec::new();

    for (i, left) in level.iter().enumerate() {
        let k = left.len();
        let prefix = &left.items()[..k - 1];

        for right in &level[i + 1..] {
            if !right.items().starts_with(prefix) {
                break;
            }

            let mut items: Vec<ItemId> = Vec::with_capacity(k + 1);
            items.extend_from_slice(left.items());
            items.push(right.items()[k - 1]);
            candidates.push(Itemset::from_sorted(items));
        }
    }

    candidates
}

/// Prune step: keep a candidate only if all of its `k`-subsets are frequent.
pub fn prune_step(candidates: Vec<Itemset>, level: &[Itemset]) -> Vec<Itemset> {
    let frequent: HashSet<&[ItemId]> = level.iter().map(Itemset::items).collect();

    candidates
        .into_iter()
        .filter(|candidate| {
            (0..candidate.len()).all(|position| {
                let subset = candidate.without(position);
                frequent.contains(subset.items())
            })
        })
        .collect()
}

/// Candidates of size `k + 1` that survive pruning against level `k`.
pub fn generate_candidates(level: &[Itemset]) -> Vec<Itemset> {
    if level.is_empty() {
        return Vec::new();
    }
    prune_step(join_step(level), level)
}

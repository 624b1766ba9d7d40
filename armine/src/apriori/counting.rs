use crate::config::MiningOptions;
use crate::ledger::{ItemId, Itemset};
use rayon::prelude::*;

/// One database scan: the support of every candidate, in candidate order.
///
/// In parallel mode each rayon job tallies its own slice of transactions and
/// the partial vectors are summed before anything is compared to a threshold.
pub fn count_candidates(
    transactions: &[Vec<ItemId>],
    candidates: &[Itemset],
    options: &MiningOptions,
) -> Vec<usize> {
    let Some(size) = candidates.first().map(Itemset::len) else {
        return Vec::new();
    };

    let tally = |mut counts: Vec<usize>, transaction: &Vec<ItemId>| {
        if transaction.len() >= size {
            for (count, candidate) in counts.iter_mut().zip(candidates) {
                if candidate.is_subset_of(transaction) {
                    *count += 1;
                }
            }
        }
        counts
    };

    if options.parallel {
        transactions
            .par_iter()
            .fold(|| vec![0; candidates.len()], tally)
            .reduce(|| vec![0; candidates.len()], crate::ledger::add_counts)
    } else {
        transactions.iter().fold(vec![0; candidates.len()], tally)
    }
}

use super::tidset::{intersect, vertical_format, TidSet};
use crate::ledger::{add_pattern_to_result, FrequentLevel, ItemId};
use tracing::trace;

pub fn eclat_algorithm(
    transactions: &[Vec<ItemId>],
    num_items: usize,
    min_count: usize,
) -> Vec<FrequentLevel> {
    let mut items: Vec<(ItemId, TidSet)> = vertical_format(transactions, num_items)
        .into_iter()
        .enumerate()
        .filter(|(_, tids)| tids.len() >= min_count)
        .collect();

    // Largest tid-sets first, ties by item.
    items.sort_unstable_by(|a, b| b.1.len().cmp(&a.1.len()).then(a.0.cmp(&b.0)));
    trace!(frequent_items = items.len(), "vertical layout built");

    let mut result = Vec::new();
    let mut prefix = Vec::new();
    for (i, (item, tids)) in items.iter().enumerate() {
        prefix.push(*item);
        eclat_recursive(&mut prefix, tids, &items[i + 1..], min_count, &mut result);
        prefix.pop();
    }
    result
}

/// Emit `prefix` (tid-set `tids`), then extend it by every later tail entry
/// whose intersection stays frequent.
fn eclat_recursive(
    prefix: &mut Vec<ItemId>,
    tids: &[usize],
    tail: &[(ItemId, TidSet)],
    min_count: usize,
    result: &mut Vec<FrequentLevel>,
) {
    if tids.len() >= min_count {
        add_pattern_to_result(prefix, tids.len(), result);
    }

    for (i, (item, item_tids)) in tail.iter().enumerate() {
        let common = intersect(tids, item_tids);
        if common.len() >= min_count {
            prefix.push(*item);
            eclat_recursive(prefix, &common, &tail[i + 1..], min_count, result);
            prefix.pop();
        }
    }
}

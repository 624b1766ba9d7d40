use super::tree::FPTree;
use crate::config::MiningOptions;
use crate::ledger::{count_items, rank_frequent_items, ItemId};
use std::collections::HashMap;

/// Build the global FP-tree.
///
/// Returns the tree and its frequent items in rank order (support descending,
/// id ascending). Each transaction is filtered to frequent items and inserted
/// in that order.
pub fn build_fp_tree(
    transactions: &[Vec<ItemId>],
    num_items: usize,
    min_count: usize,
    options: &MiningOptions,
) -> (FPTree, Vec<ItemId>) {
    let item_counts = count_items(transactions, num_items, options);
    let ordered_items: Vec<ItemId> = rank_frequent_items(&item_counts, min_count)
        .into_iter()
        .map(|(item, _)| item)
        .collect();

    let mut item_ranks = vec![None; num_items];
    for (rank, &item) in ordered_items.iter().enumerate() {
        item_ranks[item] = Some(rank);
    }

    let mut fp_tree = FPTree::new();
    let mut tx_items: Vec<(usize, ItemId)> = Vec::new();

    for transaction in transactions {
        tx_items.clear();
        tx_items.extend(
            transaction
                .iter()
                .filter_map(|&item| item_ranks[item].map(|rank| (rank, item))),
        );

        if !tx_items.is_empty() {
            tx_items.sort_unstable();
            let sorted: Vec<ItemId> = tx_items.iter().map(|&(_, item)| item).collect();
            fp_tree.insert_transaction(&sorted, 1);
        }
    }

    (fp_tree, ordered_items)
}

/// Build the conditional FP-tree of one conditional pattern base.
///
/// Item supports are recounted inside the base (paths weighted by their
/// counts) and ranked with the same rule as the global tree; each path is
/// filtered and re-ordered by that local rank before insertion.
pub fn build_conditional_fp_tree(
    prefix_paths: &[(Vec<ItemId>, usize)],
    min_count: usize,
) -> (FPTree, Vec<ItemId>) {
    let mut item_counts: HashMap<ItemId, usize> = HashMap::new();

    for (path, count) in prefix_paths {
        for &item in path {
            *item_counts.entry(item).or_insert(0) += count;
        }
    }

    let frequent_items = get_conditional_frequent_items(&item_counts, min_count);
    let item_ranks: HashMap<ItemId, usize> = frequent_items
        .iter()
        .enumerate()
        .map(|(rank, &item)| (item, rank))
        .collect();

    let mut conditional_tree = FPTree::new();

    for (path, count) in prefix_paths {
        let mut filtered: Vec<(usize, ItemId)> = path
            .iter()
            .filter_map(|item| item_ranks.get(item).map(|&rank| (rank, *item)))
            .collect();

        if !filtered.is_empty() {
            filtered.sort_unstable();
            let sorted: Vec<ItemId> = filtered.into_iter().map(|(_, item)| item).collect();
            conditional_tree.insert_transaction(&sorted, *count);
        }
    }

    (conditional_tree, frequent_items)
}

/// Items of a conditional base meeting `min_count`, in rank order.
pub fn get_conditional_frequent_items(
    item_counts: &HashMap<ItemId, usize>,
    min_count: usize,
) -> Vec<ItemId> {
    let mut frequent_items: Vec<(ItemId, usize)> = item_counts
        .iter()
        .filter(|&(_, &count)| count >= min_count)
        .map(|(&item, &count)| (item, count))
        .collect();

    frequent_items.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    frequent_items.into_iter().map(|(item, _)| item).collect()
}

use crate::ledger::ItemId;
use std::collections::HashMap;

/// Item supports inside one (projected) database.
pub fn local_counts(rows: &[&[ItemId]]) -> HashMap<ItemId, usize> {
    let mut counts = HashMap::new();
    for row in rows {
        for &item in row.iter() {
            *counts.entry(item).or_insert(0) += 1;
        }
    }
    counts
}

/// Projected database of `item`: for every row holding it, the part of the
/// row after it. Rows where `item` is last contribute nothing.
///
/// The suffixes borrow from the rows they were cut from; no row is copied.
pub fn project<'a>(rows: &[&'a [ItemId]], item: ItemId) -> Vec<&'a [ItemId]> {
    rows.iter()
        .filter_map(|&row| {
            let position = row.iter().position(|&i| i == item)?;
            let suffix = &row[position + 1..];
            (!suffix.is_empty()).then_some(suffix)
        })
        .collect()
}

/// Rewrite every transaction in rank order, keeping ranked items only.
/// Transactions left empty are dropped.
pub fn rewrite_in_rank_order(
    transactions: &[Vec<ItemId>],
    ranked_items: &[ItemId],
    num_items: usize,
) -> Vec<Vec<ItemId>> {
    let mut ranks = vec![None; num_items];
    for (rank, &item) in ranked_items.iter().enumerate() {
        ranks[item] = Some(rank);
    }

    transactions
        .iter()
        .filter_map(|transaction| {
            let mut items: Vec<(usize, ItemId)> = transaction
                .iter()
                .filter_map(|&item| ranks[item].map(|rank| (rank, item)))
                .collect();
            if items.is_empty() {
                return None;
            }
            items.sort_unstable();
            Some(items.into_iter().map(|(_, item)| item).collect())
        })
        .collect()
}

use super::itemset::{ItemId, Itemset};
use std::collections::HashMap;

/// Support count of every frequent itemset found by one run.
pub type SupportMap = HashMap<Itemset, usize>;

/// Memory-efficient itemset storage using flat arrays
#[derive(Debug, Clone, Default)]
pub struct ItemsetStorage {
    items: Vec<ItemId>,
    offsets: Vec<(usize, usize)>,
    supports: Vec<usize>,
}

/// All frequent itemsets of one size, with their support counts
#[derive(Debug, Clone)]
pub struct FrequentLevel {
    pub(crate) storage: ItemsetStorage,
    pub itemset_size: usize,
}

impl ItemsetStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `items` in canonical (sorted) order and return its index.
    pub fn add_itemset(&mut self, mut items: Vec<ItemId>, support: usize) -> usize {
        items.sort_unstable();

        let start = self.items.len();
        self.items.extend_from_slice(&items);
        self.offsets.push((start, items.len()));
        self.supports.push(support);

        self.offsets.len() - 1
    }

    pub fn get_itemset(&self, idx: usize) -> &[ItemId] {
        let (start, length) = self.offsets[idx];
        &self.items[start..start + length]
    }

    pub fn get_support(&self, idx: usize) -> usize {
        self.supports[idx]
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl FrequentLevel {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            storage: ItemsetStorage::new(),
            itemset_size,
        }
    }

    pub fn add_itemset(&mut self, items: Vec<ItemId>, support: usize) -> usize {
        debug_assert_eq!(items.len(), self.itemset_size);
        self.storage.add_itemset(items, support)
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn get_itemset(&self, idx: usize) -> &[ItemId] {
        self.storage.get_itemset(idx)
    }

    pub fn get_support(&self, idx: usize) -> usize {
        self.storage.get_support(idx)
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[ItemId]> {
        (0..self.storage.len()).map(move |idx| self.get_itemset(idx))
    }

    /// Itemsets paired with their support counts.
    pub fn iter(&self) -> impl Iterator<Item = (&[ItemId], usize)> {
        (0..self.storage.len()).map(move |idx| (self.get_itemset(idx), self.get_support(idx)))
    }

    /// Move every itemset of `other` (same size) into this level.
    pub fn append(&mut self, other: &FrequentLevel) {
        debug_assert_eq!(self.itemset_size, other.itemset_size);
        for (itemset, support) in other.iter() {
            self.storage.add_itemset(itemset.to_vec(), support);
        }
    }

    /// Rebuild the level in canonical itemset order.
    fn sorted(&self) -> FrequentLevel {
        let mut entries: Vec<(&[ItemId], usize)> = self.iter().collect();
        entries.sort_unstable();

        let mut level = FrequentLevel::new(self.itemset_size);
        for (itemset, support) in entries {
            level.storage.add_itemset(itemset.to_vec(), support);
        }
        level
    }
}

/// Record `pattern` in the level matching its size, growing `result` as needed.
pub fn add_pattern_to_result(pattern: &[ItemId], support: usize, result: &mut Vec<FrequentLevel>) {
    let pattern_size = pattern.len();

    while result.len() < pattern_size {
        result.push(FrequentLevel::new(result.len() + 1));
    }

    if pattern_size > 0 {
        result[pattern_size - 1].add_itemset(pattern.to_vec(), support);
    }
}

/// Fold per-branch results into `merged`, level by level.
pub fn merge_levels(merged: &mut Vec<FrequentLevel>, levels: Vec<FrequentLevel>) {
    for level in levels {
        let size = level.itemset_size;
        while merged.len() < size {
            merged.push(FrequentLevel::new(merged.len() + 1));
        }
        merged[size - 1].append(&level);
    }
}

/// Frequent itemsets of one run, grouped by size.
///
/// Level `k` (1-based) holds the `k`-itemsets in canonical order; trailing
/// empty levels are dropped so [`max_size`](Self::max_size) is the size of the
/// largest frequent itemset.
#[derive(Debug, Clone)]
pub struct FrequentItemsets {
    levels: Vec<FrequentLevel>,
    num_transactions: usize,
}

impl FrequentItemsets {
    pub fn new(levels: Vec<FrequentLevel>, num_transactions: usize) -> Self {
        let mut levels: Vec<FrequentLevel> = levels.iter().map(FrequentLevel::sorted).collect();
        while levels.last().is_some_and(FrequentLevel::is_empty) {
            levels.pop();
        }
        Self {
            levels,
            num_transactions,
        }
    }

    pub fn empty(num_transactions: usize) -> Self {
        Self {
            levels: Vec::new(),
            num_transactions,
        }
    }

    pub fn levels(&self) -> &[FrequentLevel] {
        &self.levels
    }

    /// Itemsets of exactly `size` items.
    pub fn level(&self, size: usize) -> Option<&FrequentLevel> {
        size.checked_sub(1).and_then(|idx| self.levels.get(idx))
    }

    pub fn max_size(&self) -> usize {
        self.levels.len()
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    pub fn len(&self) -> usize {
        self.levels.iter().map(FrequentLevel::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every frequent itemset with its count, smallest sizes first.
    pub fn iter(&self) -> impl Iterator<Item = (Itemset, usize)> + '_ {
        self.levels.iter().flat_map(|level| {
            level
                .iter()
                .map(|(itemset, support)| (Itemset::from_sorted(itemset.to_vec()), support))
        })
    }

    pub fn relative_support(&self, count: usize) -> f64 {
        if self.num_transactions == 0 {
            0.0
        } else {
            count as f64 / self.num_transactions as f64
        }
    }

    pub fn support_map(&self) -> SupportMap {
        self.iter().collect()
    }
}

use super::itemset::{ItemId, Itemset};
use crate::error::{MiningError, Result};
use ndarray::ArrayView2;
use std::fmt::Debug;
use std::hash::Hash;

/// Item tokens accepted by the engine: hashable, with a total order.
pub trait Item: Ord + Hash + Clone + Debug {}

impl<T: Ord + Hash + Clone + Debug> Item for T {}

/// Immutable, ordered list of transactions.
///
/// Items are re-encoded as dense [`ItemId`]s over a sorted vocabulary and each
/// transaction is stored as a sorted id list. The database is never modified
/// after construction and can be shared across concurrent mining runs.
#[derive(Debug, Clone)]
pub struct TransactionDatabase<I = String> {
    vocabulary: Vec<I>,
    transactions: Vec<Vec<ItemId>>,
}

impl<I: Item> TransactionDatabase<I> {
    /// Encode a list of transactions.
    ///
    /// Fails with [`MiningError::MalformedTransaction`] when one transaction
    /// lists the same item twice; duplicates are never silently dropped.
    pub fn new<T, R>(transactions: T) -> Result<Self>
    where
        T: IntoIterator<Item = R>,
        R: IntoIterator<Item = I>,
    {
        let raw: Vec<Vec<I>> = transactions
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();

        let mut vocabulary: Vec<I> = raw.iter().flatten().cloned().collect();
        vocabulary.sort();
        vocabulary.dedup();

        let mut encoded = Vec::with_capacity(raw.len());
        for (index, row) in raw.iter().enumerate() {
            let mut ids: Vec<ItemId> = row
                .iter()
                .filter_map(|item| vocabulary.binary_search(item).ok())
                .collect();
            ids.sort_unstable();

            if let Some(pair) = ids.windows(2).find(|w| w[0] == w[1]) {
                return Err(MiningError::MalformedTransaction {
                    index,
                    item: format!("{:?}", vocabulary[pair[0]]),
                });
            }
            encoded.push(ids);
        }

        Ok(Self {
            vocabulary,
            transactions: encoded,
        })
    }

    pub fn item(&self, id: ItemId) -> Option<&I> {
        self.vocabulary.get(id)
    }

    pub fn id_of(&self, item: &I) -> Option<ItemId> {
        self.vocabulary.binary_search(item).ok()
    }

    /// Map an itemset back to the caller's item tokens, in canonical order.
    pub fn decode(&self, itemset: &Itemset) -> Vec<&I> {
        itemset
            .items()
            .iter()
            .filter_map(|&id| self.vocabulary.get(id))
            .collect()
    }

    /// Build an itemset from item tokens; `None` if any token is unknown.
    pub fn encode<'a, T>(&self, items: T) -> Option<Itemset>
    where
        T: IntoIterator<Item = &'a I>,
        I: 'a,
    {
        items
            .into_iter()
            .map(|item| self.id_of(item))
            .collect::<Option<Vec<_>>>()
            .map(Itemset::new)
    }

    pub fn vocabulary(&self) -> &[I] {
        &self.vocabulary
    }
}

impl<I> TransactionDatabase<I> {
    pub fn transactions(&self) -> &[Vec<ItemId>] {
        &self.transactions
    }

    /// Number of transactions, the support denominator.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn num_items(&self) -> usize {
        self.vocabulary.len()
    }
}

impl TransactionDatabase<usize> {
    /// Read a one-hot transaction matrix: one row per transaction, a non-zero
    /// cell marks the column's item as present. Items are column indices.
    pub fn from_dense(transactions: ArrayView2<i32>) -> Self {
        let num_items = transactions.ncols();
        let rows: Vec<Vec<ItemId>> = transactions
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter_map(|(item, &cell)| (cell != 0).then_some(item))
                    .collect::<Vec<_>>()
            })
            .collect();

        Self {
            vocabulary: (0..num_items).collect(),
            transactions: rows,
        }
    }
}

impl<I: Item> Default for TransactionDatabase<I> {
    fn default() -> Self {
        Self {
            vocabulary: Vec::new(),
            transactions: Vec::new(),
        }
    }
}

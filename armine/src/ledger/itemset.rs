use std::borrow::Borrow;
use std::fmt;

/// Dense identifier of an item inside one [`TransactionDatabase`].
///
/// Ids are assigned in the items' natural order, so comparing ids compares items.
///
/// [`TransactionDatabase`]: super::TransactionDatabase
pub type ItemId = usize;

/// Canonical itemset: strictly increasing item ids.
///
/// Two itemsets built from the same items in any order compare, hash and sort
/// identically, which makes `Itemset` usable as a support-map key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Itemset(Vec<ItemId>);

impl Itemset {
    pub fn new(mut items: Vec<ItemId>) -> Self {
        items.sort_unstable();
        items.dedup();
        Self(items)
    }

    /// Wrap ids that are already strictly increasing.
    pub(crate) fn from_sorted(items: Vec<ItemId>) -> Self {
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
        Self(items)
    }

    pub fn items(&self) -> &[ItemId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.0.binary_search(&item).is_ok()
    }

    /// Subset test against a sorted transaction, in one merge pass.
    pub fn is_subset_of(&self, transaction: &[ItemId]) -> bool {
        let mut rest = transaction.iter();
        self.0.iter().all(|item| rest.by_ref().any(|t| t == item))
    }

    pub fn is_disjoint(&self, other: &Itemset) -> bool {
        !self.0.iter().any(|&item| other.contains(item))
    }

    pub fn union(&self, other: &Itemset) -> Itemset {
        let mut items = Vec::with_capacity(self.len() + other.len());
        items.extend_from_slice(&self.0);
        items.extend_from_slice(&other.0);
        Itemset::new(items)
    }

    pub fn difference(&self, other: &Itemset) -> Itemset {
        Itemset::from_sorted(
            self.0
                .iter()
                .copied()
                .filter(|&item| !other.contains(item))
                .collect(),
        )
    }

    /// The itemset with the element at `position` removed.
    pub fn without(&self, position: usize) -> Itemset {
        let mut items = self.0.clone();
        items.remove(position);
        Itemset::from_sorted(items)
    }
}

impl From<Vec<ItemId>> for Itemset {
    fn from(items: Vec<ItemId>) -> Self {
        Itemset::new(items)
    }
}

impl FromIterator<ItemId> for Itemset {
    fn from_iter<T: IntoIterator<Item = ItemId>>(iter: T) -> Self {
        Itemset::new(iter.into_iter().collect())
    }
}

impl Borrow<[ItemId]> for Itemset {
    fn borrow(&self) -> &[ItemId] {
        &self.0
    }
}

impl fmt::Display for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "}}")
    }
}

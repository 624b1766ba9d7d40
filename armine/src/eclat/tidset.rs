use crate::ledger::ItemId;

/// Sorted list of the transaction positions an itemset occurs in.
pub type TidSet = Vec<usize>;

/// Vertical layout: the tid-set of every item, indexed by id.
pub fn vertical_format(transactions: &[Vec<ItemId>], num_items: usize) -> Vec<TidSet> {
    let mut tidsets = vec![TidSet::new(); num_items];
    for (tid, transaction) in transactions.iter().enumerate() {
        for &item in transaction {
            tidsets[item].push(tid);
        }
    }
    tidsets
}

/// Merge-intersect two sorted tid-sets.
pub fn intersect(left: &[usize], right: &[usize]) -> TidSet {
    let mut result = Vec::with_capacity(left.len().min(right.len()));
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        match left[i].cmp(&right[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                result.push(left[i]);
                i += 1;
                j += 1;
            }
        }
    }
    result
}

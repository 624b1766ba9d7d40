use super::*;
use crate::ledger::FrequentItemsets;

#[test]
fn test_vertical_format() {
    let transactions = vec![vec![0, 1], vec![0], vec![0, 1, 2], vec![1, 2]];
    let tidsets = vertical_format(&transactions, 4);

    assert_eq!(tidsets[0], vec![0, 1, 2]);
    assert_eq!(tidsets[1], vec![0, 2, 3]);
    assert_eq!(tidsets[2], vec![2, 3]);
    assert!(tidsets[3].is_empty());
}

#[test]
fn test_intersect() {
    assert_eq!(intersect(&[0, 2, 3, 7], &[1, 2, 7, 9]), vec![2, 7]);
    assert!(intersect(&[0, 1], &[2, 3]).is_empty());
    assert!(intersect(&[], &[1]).is_empty());
}

#[test]
fn test_eclat_scenario() {
    let transactions = vec![vec![0, 1], vec![0], vec![0, 1, 2], vec![1, 2]];
    let result = FrequentItemsets::new(eclat_algorithm(&transactions, 3, 2), 4);

    let found: Vec<(Vec<ItemId>, usize)> = result
        .iter()
        .map(|(itemset, support)| (itemset.items().to_vec(), support))
        .collect();
    assert_eq!(
        found,
        vec![
            (vec![0], 3),
            (vec![1], 3),
            (vec![2], 2),
            (vec![0, 1], 2),
            (vec![1, 2], 2),
        ]
    );
}

#[test]
fn test_eclat_emits_each_itemset_once() {
    let transactions = vec![vec![0, 1, 2]; 4];
    let levels = eclat_algorithm(&transactions, 3, 1);

    let sizes: Vec<usize> = levels.iter().map(FrequentLevel::len).collect();
    assert_eq!(sizes, vec![3, 3, 1]);
    assert_eq!(levels[2].get_support(0), 4);
}

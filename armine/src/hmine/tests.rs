use super::*;
use crate::ledger::FrequentItemsets;

#[test]
fn test_rewrite_in_rank_order() {
    let transactions = vec![vec![0, 1, 2], vec![0, 3], vec![3]];
    // rank: 2 first, then 0; items 1 and 3 are not ranked
    let rows = rewrite_in_rank_order(&transactions, &[2, 0], 4);

    assert_eq!(rows, vec![vec![2, 0], vec![0]]);
}

#[test]
fn test_project_keeps_suffixes() {
    let data = [vec![2, 0, 1], vec![0, 1], vec![2, 1], vec![2]];
    let rows: Vec<&[ItemId]> = data.iter().map(Vec::as_slice).collect();

    let projected = project(&rows, 2);
    assert_eq!(projected, vec![&[0, 1][..], &[1][..]]);

    let projected = project(&rows, 1);
    assert!(projected.is_empty());
}

#[test]
fn test_local_counts() {
    let data = [vec![0, 1], vec![1]];
    let rows: Vec<&[ItemId]> = data.iter().map(Vec::as_slice).collect();
    let counts = local_counts(&rows);

    assert_eq!(counts[&0], 1);
    assert_eq!(counts[&1], 2);
}

#[test]
fn test_hmine_scenario() {
    let transactions = vec![vec![0, 1], vec![0], vec![0, 1, 2], vec![1, 2]];
    let levels = hmine_algorithm(&transactions, 3, 2, &MiningOptions::default());
    let result = FrequentItemsets::new(levels, 4);

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
fn test_hmine_deep_itemset() {
    let transactions = vec![vec![0, 1, 2, 3], vec![0, 1, 2, 3], vec![0, 1]];
    let levels = hmine_algorithm(&transactions, 4, 2, &MiningOptions::default());

    let sizes: Vec<usize> = levels.iter().map(FrequentLevel::len).collect();
    assert_eq!(sizes, vec![4, 6, 4, 1]);
    assert_eq!(levels[0].len(), 4);
    assert_eq!(levels[3].get_itemset(0), &[0, 1, 2, 3]);
    assert_eq!(levels[3].get_support(0), 2);
}

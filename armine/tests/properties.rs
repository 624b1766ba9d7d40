//! Property-based tests for the mining engine
//!
//! Properties checked over random small databases:
//! 1. All four strategies return the same (itemset, support) pairs
//! 2. Every subset of a frequent itemset is frequent with at least its support
//! 3. Reported supports match a brute-force count
//! 4. Rule confidence is exact and within [0, 1]
//! 5. Rule sides partition a reported frequent itemset
//! 6. Parallel counting never changes the output

use armine::{
    generate_rules, mine, mine_with, Itemset, MiningOptions, Strategy, TransactionDatabase,
};
use proptest::prelude::{prop, prop_assert, prop_assert_eq, proptest, ProptestConfig};
use std::collections::BTreeSet;

fn database() -> impl proptest::strategy::Strategy<Value = Vec<BTreeSet<u8>>> {
    prop::collection::vec(prop::collection::btree_set(0u8..8, 0..6), 0..24)
}

fn build(rows: &[BTreeSet<u8>]) -> TransactionDatabase<u8> {
    TransactionDatabase::new(rows.iter().map(|row| row.iter().copied().collect::<Vec<_>>()))
        .expect("sets never hold duplicates")
}

fn brute_force_support(db: &TransactionDatabase<u8>, itemset: &Itemset) -> usize {
    db.transactions()
        .iter()
        .filter(|transaction| itemset.is_subset_of(transaction))
        .count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_strategies_agree(rows in database(), min_count in 1usize..5) {
        let db = build(&rows);
        let reference = mine(&db, min_count, Strategy::LevelWise).unwrap();

        for strategy in [Strategy::PrefixTree, Strategy::Vertical, Strategy::Projection] {
            let output = mine(&db, min_count, strategy).unwrap();
            prop_assert_eq!(&output.supports, &reference.supports, "strategy {}", strategy);

            let listed: Vec<(Itemset, usize)> = output.itemsets.iter().collect();
            let expected: Vec<(Itemset, usize)> = reference.itemsets.iter().collect();
            prop_assert_eq!(listed, expected);
        }
    }

    #[test]
    fn prop_supports_are_exact_and_anti_monotone(rows in database(), min_count in 1usize..5) {
        let db = build(&rows);
        let output = mine(&db, min_count, Strategy::PrefixTree).unwrap();

        for (itemset, support) in output.itemsets.iter() {
            prop_assert!(support >= min_count);
            prop_assert_eq!(support, brute_force_support(&db, &itemset));

            for position in 0..itemset.len() {
                let subset = itemset.without(position);
                if subset.is_empty() {
                    continue;
                }
                let subset_support = output.supports.get(&subset).copied();
                prop_assert!(subset_support.is_some_and(|s| s >= support));
            }
        }
    }

    #[test]
    fn prop_nothing_frequent_is_missed(rows in database(), min_count in 1usize..5) {
        let db = build(&rows);
        let output = mine(&db, min_count, Strategy::Vertical).unwrap();

        for item in 0..db.num_items() {
            for other in item + 1..db.num_items() {
                let pair = Itemset::new(vec![item, other]);
                let frequent = brute_force_support(&db, &pair) >= min_count;
                prop_assert_eq!(output.supports.contains_key(&pair), frequent);
            }
        }
    }

    #[test]
    fn prop_rules_are_consistent(
        rows in database(),
        min_count in 1usize..4,
        min_confidence in 0.0f64..=1.0,
    ) {
        let db = build(&rows);
        let output = mine(&db, min_count, Strategy::Projection).unwrap();
        let rules = generate_rules(&output.itemsets, &output.supports, db.len(), min_confidence).unwrap();

        for rule in &rules {
            prop_assert!(rule.antecedent.is_disjoint(&rule.consequent));
            prop_assert!(!rule.antecedent.is_empty() && !rule.consequent.is_empty());

            let union = rule.itemset();
            let support = output.supports.get(&union).copied();
            prop_assert_eq!(support, Some(rule.support_count));

            let antecedent_support = output.supports[&rule.antecedent];
            prop_assert_eq!(rule.confidence, rule.support_count as f64 / antecedent_support as f64);
            prop_assert!((0.0..=1.0).contains(&rule.confidence));
            prop_assert!(rule.confidence >= min_confidence);
        }

        for pair in rules.windows(2) {
            prop_assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn prop_parallel_matches_sequential(rows in database(), min_count in 1usize..5) {
        let db = build(&rows);
        let options = MiningOptions { parallel: true };

        for strategy in Strategy::ALL {
            let sequential = mine(&db, min_count, strategy).unwrap();
            let parallel = mine_with(&db, min_count, strategy, &options).unwrap();
            prop_assert_eq!(parallel.supports, sequential.supports);
        }
    }
}

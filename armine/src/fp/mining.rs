use super::builder::{build_conditional_fp_tree, build_fp_tree};
use super::combinations::generate_combinations_from_path;
use super::tree::FPTree;
use crate::config::MiningOptions;
use crate::ledger::{add_pattern_to_result, merge_levels, FrequentLevel, ItemId};
use rayon::prelude::*;
use tracing::trace;

pub fn fp_growth_algorithm(
    transactions: &[Vec<ItemId>],
    num_items: usize,
    min_count: usize,
    options: &MiningOptions,
) -> Vec<FrequentLevel> {
    let (fp_tree, frequent_items) = build_fp_tree(transactions, num_items, min_count, options);
    trace!(
        nodes = fp_tree.nodes.len(),
        frequent_items = frequent_items.len(),
        "fp-tree built"
    );

    if options.parallel {
        fp_growth_recursive_parallel(&fp_tree, &frequent_items, min_count)
    } else {
        let mut result = Vec::new();
        fp_growth_recursive(&fp_tree, &frequent_items, &[], min_count, &mut result);
        result
    }
}

/// Mine one (conditional) tree, least frequent item first.
pub fn fp_growth_recursive(
    fp_tree: &FPTree,
    frequent_items: &[ItemId],
    alpha: &[ItemId],
    min_count: usize,
    result: &mut Vec<FrequentLevel>,
) {
    if fp_tree.has_single_path() {
        let path = fp_tree.get_single_path();
        for k in 1..=path.len() {
            generate_combinations_from_path(&path, k, alpha, result);
        }
        return;
    }

    for &item in frequent_items.iter().rev() {
        mine_item(fp_tree, item, alpha, min_count, result);
    }
}

/// Fan the top-level items out over rayon; every branch builds its own
/// conditional trees and the per-branch levels are merged afterwards.
pub fn fp_growth_recursive_parallel(
    fp_tree: &FPTree,
    frequent_items: &[ItemId],
    min_count: usize,
) -> Vec<FrequentLevel> {
    let mut merged = Vec::new();

    if fp_tree.has_single_path() {
        fp_growth_recursive(fp_tree, frequent_items, &[], min_count, &mut merged);
        return merged;
    }

    let parallel_results: Vec<Vec<FrequentLevel>> = frequent_items
        .par_iter()
        .rev()
        .map(|&item| {
            let mut item_result = Vec::new();
            mine_item(fp_tree, item, &[], min_count, &mut item_result);
            item_result
        })
        .collect();

    for item_results in parallel_results {
        merge_levels(&mut merged, item_results);
    }
    merged
}

fn mine_item(
    fp_tree: &FPTree,
    item: ItemId,
    alpha: &[ItemId],
    min_count: usize,
    result: &mut Vec<FrequentLevel>,
) {
    let item_support = fp_tree.item_support(item);
    if item_support < min_count {
        return;
    }

    let mut new_pattern = alpha.to_vec();
    new_pattern.push(item);
    add_pattern_to_result(&new_pattern, item_support, result);

    let prefix_paths = fp_tree.get_prefix_paths(item);
    if prefix_paths.is_empty() {
        return;
    }

    let (conditional_tree, conditional_items) = build_conditional_fp_tree(&prefix_paths, min_count);
    trace!(
        item,
        depth = new_pattern.len(),
        paths = prefix_paths.len(),
        conditional_items = conditional_items.len(),
        "conditional pattern base"
    );

    if !conditional_items.is_empty() {
        fp_growth_recursive(
            &conditional_tree,
            &conditional_items,
            &new_pattern,
            min_count,
            result,
        );
    }
}

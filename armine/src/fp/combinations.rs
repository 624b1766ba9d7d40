use crate::ledger::{add_pattern_to_result, for_each_combination, FrequentLevel, ItemId};

/// Emit `alpha` extended by every `k`-combination of a single-path tree.
///
/// Counts never grow going down a path, so a combination's support is the
/// count of its deepest node.
pub fn generate_combinations_from_path(
    path: &[(ItemId, usize)],
    k: usize,
    alpha: &[ItemId],
    result: &mut Vec<FrequentLevel>,
) {
    if k == 0 || k > path.len() {
        return;
    }

    let indices: Vec<usize> = (0..path.len()).collect();
    for_each_combination(&indices, k, |combination| {
        let mut pattern = alpha.to_vec();
        pattern.extend(combination.iter().map(|&idx| path[idx].0));

        let support = combination
            .iter()
            .map(|&idx| path[idx].1)
            .min()
            .unwrap_or_default();
        add_pattern_to_result(&pattern, support, result);
    });
}

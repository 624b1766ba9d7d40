/// Call `callback` with every `k`-element combination of `items`, in
/// lexicographic position order.
pub fn generate_combinations_recursive<T, F>(
    items: &[T],
    k: usize,
    start: usize,
    current: &mut Vec<T>,
    callback: &mut F,
) where
    T: Copy,
    F: FnMut(&[T]),
{
    if current.len() == k {
        callback(current);
        return;
    }

    // Not enough items left to fill the combination.
    if items.len() - start < k - current.len() {
        return;
    }

    for i in start..items.len() {
        current.push(items[i]);
        generate_combinations_recursive(items, k, i + 1, current, callback);
        current.pop();
    }
}

/// [`generate_combinations_recursive`] from a clean start.
pub fn for_each_combination<T, F>(items: &[T], k: usize, mut callback: F)
where
    T: Copy,
    F: FnMut(&[T]),
{
    if k > items.len() {
        return;
    }
    let mut current = Vec::with_capacity(k);
    generate_combinations_recursive(items, k, 0, &mut current, &mut callback);
}

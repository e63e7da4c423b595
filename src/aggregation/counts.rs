//! Frequency counts.

use std::collections::HashMap;
use std::hash::Hash;

/// Counts the occurrences of each present key.
///
/// Missing keys are dropped. The result is ordered by count, descending;
/// equal counts keep the order in which their keys were first seen.
///
/// # Example
///
/// ```
/// use fund_audit::aggregation::value_counts;
///
/// let keys = [Some("SEFAZ"), Some("SEDUC"), None, Some("SEDUC")];
/// assert_eq!(value_counts(keys), vec![("SEDUC", 2), ("SEFAZ", 1)]);
/// ```
pub fn value_counts<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = Option<K>>,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();
    for key in keys.into_iter().flatten() {
        match positions.get(&key) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }
    // Stable sort keeps first-seen order among ties.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Returns the first `n` entries of a [`value_counts`] result.
pub fn top_n<K: Clone>(counts: &[(K, usize)], n: usize) -> Vec<(K, usize)> {
    counts.iter().take(n).cloned().collect()
}

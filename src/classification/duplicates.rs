//! Person ID duplicate detection over a whole table.

use std::collections::HashMap;

/// Flags every record whose ID occurs more than once among `ids`.
///
/// All occurrences are flagged, not only the repeats. Missing IDs are never
/// duplicates.
///
/// # Example
///
/// ```
/// use fund_audit::classification::duplicate_flags;
///
/// let ids = [Some("111"), Some("222"), Some("111"), None, None];
/// assert_eq!(duplicate_flags(&ids), vec![true, false, true, false, false]);
/// ```
pub fn duplicate_flags(ids: &[Option<&str>]) -> Vec<bool> {
    let counts = count_ids(ids);
    ids.iter()
        .map(|id| id.is_some_and(|id| counts.get(id).copied().unwrap_or(0) > 1))
        .collect()
}

/// Counts the occurrences beyond the first of every ID.
///
/// This is the number of rows that would be removed by keeping only the first
/// row per ID.
pub fn count_repeated_occurrences(ids: &[Option<&str>]) -> usize {
    count_ids(ids).values().map(|count| count - 1).sum()
}

fn count_ids<'a>(ids: &[Option<&'a str>]) -> HashMap<&'a str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for id in ids.iter().flatten() {
        *counts.entry(*id).or_insert(0) += 1;
    }
    counts
}

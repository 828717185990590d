use indexmap::IndexMap;

use crate::types::{CountMap, Ranked};

/// Frequency counter that remembers first-seen order, so equal counts rank
/// in the order the items first appeared.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: IndexMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: &str) {
        self.add_count(item, 1);
    }

    pub fn add_count(&mut self, item: &str, count: usize) {
        match self.counts.get_mut(item) {
            Some(c) => *c += count,
            None => {
                self.counts.insert(item.to_string(), count);
            }
        }
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct items.
    pub fn unique(&self) -> usize {
        self.counts.len()
    }

    /// All non-zero items, count descending, ties in first-seen order.
    pub fn ranked(&self) -> Ranked {
        let mut ranked: Ranked = self
            .counts
            .iter()
            .filter(|(_, c)| **c > 0)
            .map(|(item, &c)| (item.clone(), c))
            .collect();
        // stable sort keeps insertion order among ties
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    pub fn top(&self, n: usize) -> Ranked {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}

impl<'a> FromIterator<&'a str> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        for item in iter {
            table.add(item);
        }
        table
    }
}

/// Union two ranked lists, summing shared items, re-rank and cap.
/// Items of `first` win ties against items that only appear in `second`.
pub fn merge_ranked(first: &[(String, usize)], second: &[(String, usize)], cap: usize) -> Ranked {
    let mut table = FrequencyTable::new();
    for (item, count) in first.iter().chain(second) {
        table.add_count(item, *count);
    }
    table.top(cap)
}

/// Key-wise sum of two count maps, keys of `first` first.
pub fn sum_counts(first: &CountMap, second: &CountMap) -> CountMap {
    let mut merged = first.clone();
    for (key, count) in second {
        *merged.entry(key.clone()).or_insert(0) += count;
    }
    merged
}

/// Newest items first: up to `per_side` from `newer`, then up to `per_side` from `older`.
pub fn merge_samples(newer: &[String], older: &[String], per_side: usize, cap: usize) -> Vec<String> {
    newer
        .iter()
        .take(per_side)
        .chain(older.iter().take(per_side))
        .take(cap)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, usize)]) -> Ranked {
        items.iter().map(|(s, c)| (s.to_string(), *c)).collect()
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let table: FrequencyTable = ["b", "a", "c", "a", "b"].into_iter().collect();
        assert_eq!(table.ranked(), pairs(&[("b", 2), ("a", 2), ("c", 1)]));
        assert_eq!(table.total(), 5);
        assert_eq!(table.unique(), 3);
    }

    #[test]
    fn test_zero_counts_not_ranked() {
        let mut table = FrequencyTable::new();
        table.add_count("never", 0);
        table.add("once");
        assert_eq!(table.ranked(), pairs(&[("once", 1)]));
    }

    #[test]
    fn test_merge_ranked_sums_and_caps() {
        let a = pairs(&[("x", 3), ("y", 1)]);
        let b = pairs(&[("y", 4), ("z", 2)]);
        assert_eq!(merge_ranked(&a, &b, 2), pairs(&[("y", 5), ("x", 3)]));
    }

    #[test]
    fn test_sum_counts_unions_keys() {
        let mut a = CountMap::new();
        a.insert("Dear".into(), 1);
        let mut b = CountMap::new();
        b.insert("Hello".into(), 2);
        b.insert("Dear".into(), 3);
        let merged = sum_counts(&a, &b);
        assert_eq!(merged["Dear"], 4);
        assert_eq!(merged["Hello"], 2);
    }

    #[test]
    fn test_merge_samples_newest_first() {
        let newer: Vec<String> = vec!["n1".into(), "n2".into()];
        let older: Vec<String> = vec!["o1".into(), "o2".into(), "o3".into()];
        assert_eq!(merge_samples(&newer, &older, 2, 3), vec!["n1", "n2", "o1"]);
    }
}

//! Group-by/aggregate helpers over the record set.
//!
//! All operations are order-independent set computations: rows whose key or
//! value projection is missing are skipped, an empty input produces an empty
//! table, and output order is made deterministic by sorting (the charts
//! re-bucket as they need).

use std::cmp::Reverse;
use std::hash::Hash;

use itertools::Itertools;
use rustc_hash::FxHashMap;

/// Mean of a numeric projection per categorical key, sorted by key.
pub fn group_mean<T, K, KF, VF>(items: &[T], key_fn: KF, value_fn: VF) -> Vec<(K, f64)>
where
    K: Ord + Hash + Eq,
    KF: Fn(&T) -> Option<K>,
    VF: Fn(&T) -> Option<f64>,
{
    let mut sums: FxHashMap<K, (f64, u64)> = FxHashMap::default();
    for item in items {
        if let (Some(key), Some(value)) = (key_fn(item), value_fn(item)) {
            let entry = sums.entry(key).or_insert((0.0, 0));
            entry.0 += value;
            entry.1 += 1;
        }
    }
    sums.into_iter()
        .map(|(key, (sum, count))| (key, sum / count as f64))
        .sorted_by(|a, b| a.0.cmp(&b.0))
        .collect()
}

/// Occurrence count per key, sorted by key.
pub fn group_count<T, K, KF>(items: &[T], key_fn: KF) -> Vec<(K, u64)>
where
    K: Ord + Hash + Eq,
    KF: Fn(&T) -> Option<K>,
{
    let mut counts: FxHashMap<K, u64> = FxHashMap::default();
    for item in items {
        if let Some(key) = key_fn(item) {
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .sorted_by(|a, b| a.0.cmp(&b.0))
        .collect()
}

/// Occurrence count per key, most frequent first (ties broken by key).
pub fn group_count_desc<T, K, KF>(items: &[T], key_fn: KF) -> Vec<(K, u64)>
where
    K: Ord + Hash + Eq + Clone,
    KF: Fn(&T) -> Option<K>,
{
    group_count(items, key_fn)
        .into_iter()
        .sorted_by_key(|(key, count)| (Reverse(*count), key.clone()))
        .collect()
}

/// Convert a count table into percentage-of-total shares.
///
/// An empty input yields an empty table. For non-empty input the returned
/// column sums to 100 up to rounding.
pub fn with_percentages<K: Clone>(counts: &[(K, u64)]) -> Vec<(K, f64)> {
    let total: u64 = counts.iter().map(|(_, count)| count).sum();
    if total == 0 {
        return Vec::new();
    }
    counts
        .iter()
        .map(|(key, count)| (key.clone(), *count as f64 / total as f64 * 100.0))
        .collect()
}

/// Share of items for which `flag_fn` answers true, as a percentage.
///
/// Items where the flag is missing are skipped; an empty selection yields 0.
pub fn percent_where<T, F>(items: &[T], flag_fn: F) -> f64
where
    F: Fn(&T) -> Option<bool>,
{
    let mut hits = 0u64;
    let mut total = 0u64;
    for item in items {
        if let Some(flag) = flag_fn(item) {
            total += 1;
            if flag {
                hits += 1;
            }
        }
    }
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64 * 100.0
    }
}

/// Outer join of two keyed series, missing sides zero-filled, sorted by key.
pub fn merge_series<K>(left: &[(K, f64)], right: &[(K, f64)]) -> Vec<(K, f64, f64)>
where
    K: Ord + Hash + Eq + Clone,
{
    let mut merged: FxHashMap<K, (f64, f64)> = FxHashMap::default();
    for (key, value) in left {
        merged.entry(key.clone()).or_insert((0.0, 0.0)).0 = *value;
    }
    for (key, value) in right {
        merged.entry(key.clone()).or_insert((0.0, 0.0)).1 = *value;
    }
    merged
        .into_iter()
        .map(|(key, (a, b))| (key, a, b))
        .sorted_by(|a, b| a.0.cmp(&b.0))
        .collect()
}

/// Least-squares line through a set of points, as (slope, intercept).
///
/// Degenerate inputs (fewer than two points, or zero variance in x) yield a
/// flat line through the mean rather than an error.
#[must_use]
pub fn linear_fit(points: &[(f64, f64)]) -> (f64, f64) {
    let n = points.len() as f64;
    if points.len() < 2 {
        return (0.0, points.first().map_or(0.0, |point| point.1));
    }
    let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;
    let var_x: f64 = points.iter().map(|(x, _)| (x - mean_x).powi(2)).sum();
    if var_x == 0.0 {
        return (0.0, mean_y);
    }
    let cov_xy: f64 = points
        .iter()
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();
    let slope = cov_xy / var_x;
    (slope, mean_y - slope * mean_x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_mean_skips_missing() {
        let items = vec![
            (Some("a"), Some(1.0)),
            (Some("a"), Some(3.0)),
            (Some("b"), Some(5.0)),
            (Some("b"), None),
            (None, Some(9.0)),
        ];
        let means = group_mean(&items, |item| item.0, |item| item.1);
        assert_eq!(means, vec![("a", 2.0), ("b", 5.0)]);
    }

    #[test]
    fn test_group_count_desc_breaks_ties_by_key() {
        let items = vec![Some("b"), Some("a"), Some("c"), Some("c"), Some("a")];
        let counts = group_count_desc(&items, |item| *item);
        assert_eq!(counts, vec![("a", 2), ("c", 2), ("b", 1)]);
    }

    #[test]
    fn test_percentages_sum_to_100() {
        let counts = vec![("a", 3u64), ("b", 5), ("c", 11)];
        let shares = with_percentages(&counts);
        let total: f64 = shares.iter().map(|(_, share)| share).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_percentages_of_empty_input() {
        let shares = with_percentages::<&str>(&[]);
        assert!(shares.is_empty());
    }

    #[test]
    fn test_percent_where() {
        let items = vec![Some(true), Some(false), Some(true), None];
        assert!((percent_where(&items, |item| *item) - 66.666_666).abs() < 1e-3);
        assert_eq!(percent_where::<Option<bool>, _>(&[], |item| *item), 0.0);
    }

    #[test]
    fn test_merge_series_zero_fills() {
        let left = vec![(1, 10.0), (2, 20.0)];
        let right = vec![(2, 2.5), (3, 3.5)];
        let merged = merge_series(&left, &right);
        assert_eq!(
            merged,
            vec![(1, 10.0, 0.0), (2, 20.0, 2.5), (3, 0.0, 3.5)]
        );
    }

    #[test]
    fn test_linear_fit() {
        let (slope, intercept) = linear_fit(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]);
        assert!((slope - 2.0).abs() < 1e-9);
        assert!((intercept - 1.0).abs() < 1e-9);

        let (slope, intercept) = linear_fit(&[(2.0, 7.0)]);
        assert_eq!((slope, intercept), (0.0, 7.0));
    }
}

//! Set-style operations keyed by scalar identity.
//!
//! Each operation first materializes a [`KeySet`] (or a
//! [`KeyedSequence`](crate::KeyedSequence)) from its inputs and then makes a
//! single pass over the first sequence. The roles of the arguments are not
//! symmetric:
//!
//! - the **first** sequence keeps its order and its duplicates
//! - every **other** sequence is only used as a set of keys
//!
//! # Examples
//!
//! ```rust
//! use seqselect::{diff, intersect, unique, unique_by};
//!
//! assert_eq!(diff(vec![1, 2, 2, 3], vec![2]), vec![1, 3]);
//! assert_eq!(intersect(vec![1, 1, 2, 4], vec![1, 2, 3]), vec![1, 1, 2]);
//! assert_eq!(unique(vec![3, 1, 3, 2, 1]), vec![3, 1, 2]);
//!
//! let latest = unique_by(vec![("a", 1), ("b", 2), ("a", 3)], |pair| pair.0);
//! assert_eq!(latest, vec![("a", 3), ("b", 2)]);
//! ```

use indexmap::IndexSet;

use crate::filter::filter;
use crate::key::{KeyHasher, KeySet, ScalarKey, key_set, key_set_by, keyed_by};

/// Returns the elements of `first` that do not appear in `second`.
///
/// Equivalent to [`diff_all`] with a single other sequence.
///
/// # Examples
///
/// ```rust
/// use seqselect::diff;
///
/// let stale = vec!["a", "b", "c", "b"];
/// let fresh = vec!["b"];
/// assert_eq!(diff(stale, fresh), vec!["a", "c"]);
/// ```
pub fn diff<T, A, B>(first: A, second: B) -> Vec<T>
where
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
    T: ScalarKey,
{
    diff_all(first, std::iter::once(second))
}

/// Returns the elements of `first` whose value appears in none of `others`.
///
/// - If `first` is empty, returns an empty vector without reading `others`.
/// - If `others` contribute no value at all, returns `first` unchanged.
/// - Otherwise builds the union of `others` and filters `first` against it.
///
/// Duplicates in `first` are preserved.
///
/// # Complexity
///
/// O(n + m) where m is the total length of `others`.
///
/// # Examples
///
/// ```rust
/// use seqselect::diff_all;
///
/// let result = diff_all(1..=10, [vec![2, 4], vec![6, 8], vec![10]]);
/// assert_eq!(result, vec![1, 3, 5, 7, 9]);
/// ```
pub fn diff_all<T, A, R, B>(first: A, others: R) -> Vec<T>
where
    A: IntoIterator<Item = T>,
    R: IntoIterator<Item = B>,
    B: IntoIterator<Item = T>,
    T: ScalarKey,
{
    let mut first = first.into_iter().peekable();
    if first.peek().is_none() {
        tracing::trace!(operation = "diff", "first sequence is empty");
        return Vec::new();
    }

    let excluded: KeySet<T> = others.into_iter().flatten().collect();
    if excluded.is_empty() {
        tracing::trace!(operation = "diff", "nothing to exclude");
        return first.collect();
    }

    filter(first, |element| !excluded.contains(element))
}

/// Returns the elements of `first` whose derived key does not appear among
/// the derived keys of `second`.
///
/// `key_function` is applied to every element of `second` and then once to
/// every element of `first`. Short-circuits mirror [`diff_all`].
///
/// # Examples
///
/// ```rust
/// use seqselect::diff_by;
///
/// let users = vec![(1, "ada"), (2, "grace"), (3, "linus")];
/// let banned = vec![(2, "")];
/// let allowed = diff_by(users, banned, |user| user.0);
/// assert_eq!(allowed, vec![(1, "ada"), (3, "linus")]);
/// ```
pub fn diff_by<T, K, A, B, F>(first: A, second: B, mut key_function: F) -> Vec<T>
where
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
    K: ScalarKey,
    F: FnMut(&T) -> K,
{
    let mut first = first.into_iter().peekable();
    if first.peek().is_none() {
        tracing::trace!(operation = "diff_by", "first sequence is empty");
        return Vec::new();
    }

    let excluded = key_set_by(second, &mut key_function);
    if excluded.is_empty() {
        tracing::trace!(operation = "diff_by", "nothing to exclude");
        return first.collect();
    }

    filter(first, |element| !excluded.contains(&key_function(element)))
}

/// Returns the elements of `first` that also appear in `second`.
///
/// Equivalent to [`intersect_all`] with a single other sequence.
///
/// # Examples
///
/// ```rust
/// use seqselect::intersect;
///
/// assert_eq!(intersect(vec![1, 1, 2], vec![1, 2]), vec![1, 1, 2]);
/// ```
pub fn intersect<T, A, B>(first: A, second: B) -> Vec<T>
where
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
    T: ScalarKey,
{
    intersect_all(first, std::iter::once(second))
}

/// Returns the elements of `first` whose value appears in every one of
/// `others`.
///
/// The value sets of `others` are intersected first; `first` is then filtered
/// against that intersection, so its duplicates and order are preserved.
/// An empty `first` short-circuits to an empty result. With no other
/// sequence at all, `first` is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use seqselect::intersect_all;
///
/// let result = intersect_all(vec![1, 2, 3, 4, 2], [vec![2, 3, 4], vec![4, 2]]);
/// assert_eq!(result, vec![2, 4, 2]);
/// ```
pub fn intersect_all<T, A, R, B>(first: A, others: R) -> Vec<T>
where
    A: IntoIterator<Item = T>,
    R: IntoIterator<Item = B>,
    B: IntoIterator<Item = T>,
    T: ScalarKey,
{
    let mut first = first.into_iter().peekable();
    if first.peek().is_none() {
        tracing::trace!(operation = "intersect", "first sequence is empty");
        return Vec::new();
    }

    let mut others = others.into_iter();
    let Some(second) = others.next() else {
        return first.collect();
    };

    let mut retained = key_set(second);
    for other in others {
        if retained.is_empty() {
            break;
        }
        let candidates = key_set(other);
        retained.retain(|key| candidates.contains(key));
    }

    filter(first, |element| retained.contains(element))
}

/// Returns each distinct value of `sequence` once, in order of first
/// occurrence.
///
/// # Examples
///
/// ```rust
/// use seqselect::unique;
///
/// assert_eq!(unique(vec!["b", "a", "b", "c", "a"]), vec!["b", "a", "c"]);
/// ```
pub fn unique<T, I>(sequence: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: ScalarKey,
{
    sequence
        .into_iter()
        .collect::<IndexSet<T, KeyHasher>>()
        .into_iter()
        .collect()
}

/// Returns one element per derived key.
///
/// For each key, the element sits at the position of the key's *first*
/// occurrence but is the *last* element seen with that key.
///
/// # Examples
///
/// ```rust
/// use seqselect::unique_by;
///
/// let events = vec![("door", "open"), ("light", "on"), ("door", "closed")];
/// let latest = unique_by(events, |event| event.0);
/// assert_eq!(latest, vec![("door", "closed"), ("light", "on")]);
/// ```
pub fn unique_by<T, K, I, F>(sequence: I, key_function: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    K: ScalarKey,
    F: FnMut(&T) -> K,
{
    keyed_by(sequence, key_function).into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_diff_preserves_duplicates_of_first() {
        assert_eq!(diff(vec![1, 1, 2, 3, 3], vec![2]), vec![1, 1, 3, 3]);
    }

    #[rstest]
    fn test_diff_of_sequence_with_itself_is_empty() {
        let values = vec![4, 5, 4];
        assert!(diff(&values, &values).is_empty());
    }

    #[rstest]
    fn test_diff_with_empty_second_returns_copy() {
        assert_eq!(diff(vec![3, 1, 3], Vec::new()), vec![3, 1, 3]);
    }

    #[rstest]
    fn test_diff_with_empty_first_skips_others() {
        let visited = Cell::new(0);
        let other = (0..5).inspect(|_| visited.set(visited.get() + 1));
        let result = diff(Vec::<i32>::new(), other);
        assert!(result.is_empty());
        assert_eq!(visited.get(), 0);
    }

    #[rstest]
    fn test_diff_all_unions_every_other_sequence() {
        let result = diff_all(vec!["a", "b", "c", "d"], [vec!["a"], vec![], vec!["d", "z"]]);
        assert_eq!(result, vec!["b", "c"]);
    }

    #[rstest]
    fn test_diff_all_without_others_returns_copy() {
        let result = diff_all(vec![1, 2], Vec::<Vec<i32>>::new());
        assert_eq!(result, vec![1, 2]);
    }

    #[rstest]
    fn test_diff_by_compares_derived_keys() {
        let first = vec!["apple", "banana", "cherry", "avocado"];
        let second = vec!["almond"];
        let result = diff_by(first, second, |word| word.as_bytes()[0]);
        assert_eq!(result, vec!["banana", "cherry"]);
    }

    #[rstest]
    fn test_diff_by_with_empty_second_returns_copy() {
        let result = diff_by(vec![1, 2, 3], Vec::new(), |value| *value);
        assert_eq!(result, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_diff_by_with_empty_first_never_calls_extractor() {
        let mut calls = 0;
        let result = diff_by(Vec::new(), vec![1, 2], |value: &i32| {
            calls += 1;
            *value
        });
        assert!(result.is_empty());
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn test_intersect_preserves_duplicates_of_first() {
        assert_eq!(intersect(vec![1, 1, 2], vec![1, 2]), vec![1, 1, 2]);
    }

    #[rstest]
    fn test_intersect_follows_order_of_first() {
        assert_eq!(intersect(vec![3, 2, 1], vec![1, 2, 3]), vec![3, 2, 1]);
    }

    #[rstest]
    fn test_intersect_with_disjoint_sequences_is_empty() {
        assert!(intersect(vec![1, 2], vec![3, 4]).is_empty());
    }

    #[rstest]
    fn test_intersect_all_requires_presence_in_every_other() {
        let result = intersect_all(vec![1, 2, 3, 4, 5], [vec![1, 2, 3, 4], vec![2, 4, 6], vec![4, 2]]);
        assert_eq!(result, vec![2, 4]);
    }

    #[rstest]
    fn test_intersect_all_with_empty_other_is_empty() {
        let result = intersect_all(vec![1, 2], [vec![1, 2], vec![]]);
        assert!(result.is_empty());
    }

    #[rstest]
    fn test_intersect_all_without_others_returns_copy() {
        let result = intersect_all(vec![2, 2, 1], Vec::<Vec<i32>>::new());
        assert_eq!(result, vec![2, 2, 1]);
    }

    #[rstest]
    #[case(vec![3, 1, 3, 2, 1], vec![3, 1, 2])]
    #[case(vec![], vec![])]
    #[case(vec![7, 7, 7], vec![7])]
    #[case(vec![1, 2, 3], vec![1, 2, 3])]
    fn test_unique_keeps_first_occurrences(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(unique(input), expected);
    }

    #[rstest]
    fn test_unique_over_owned_strings() {
        let input = vec!["x".to_string(), "y".to_string(), "x".to_string()];
        assert_eq!(unique(input), vec!["x".to_string(), "y".to_string()]);
    }

    #[rstest]
    fn test_unique_by_position_from_first_value_from_last() {
        let input = vec![("a", 1), ("b", 2), ("a", 3)];
        assert_eq!(unique_by(input, |pair| pair.0), vec![("a", 3), ("b", 2)]);
    }

    #[rstest]
    fn test_unique_by_with_constant_key_keeps_last_value() {
        let result = unique_by(vec![10, 20, 30], |_| 0_u8);
        assert_eq!(result, vec![30]);
    }
}

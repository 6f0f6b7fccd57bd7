//! Predicate filtering.
//!
//! [`filter`] is the single iteration primitive of the crate: it walks a
//! sequence once and keeps the elements that satisfy a predicate. The set
//! operations in [`set_algebra`](crate::set_algebra) derive a membership
//! predicate and delegate to it, which is what lets them keep the duplicates
//! and the order of their first argument.
//!
//! # Examples
//!
//! ```rust
//! use seqselect::{filter, filter_nulls, filter_truthy};
//!
//! let evens = filter(1..=6, |x| x % 2 == 0);
//! assert_eq!(evens, vec![2, 4, 6]);
//!
//! let present = filter_nulls(vec![Some(1), None, Some(3)]);
//! assert_eq!(present, vec![1, 3]);
//!
//! let non_blank = filter_truthy(vec!["", "a", "0", "b"]);
//! assert_eq!(non_blank, vec!["a", "b"]);
//! ```

use std::borrow::Cow;

/// Returns the elements of `sequence` for which `predicate` holds.
///
/// The predicate is called exactly once per element, in order. Surviving
/// elements keep their relative order.
///
/// # Complexity
///
/// O(n)
///
/// # Examples
///
/// ```rust
/// use seqselect::filter;
///
/// let words = vec!["apple", "kiwi", "banana"];
/// let long = filter(&words, |word| word.len() > 4);
/// assert_eq!(long, vec![&"apple", &"banana"]);
/// ```
pub fn filter<T, I, P>(sequence: I, mut predicate: P) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> bool,
{
    sequence
        .into_iter()
        .filter(|element| predicate(element))
        .collect()
}

/// Values with a boolean interpretation.
///
/// This is the explicit replacement for an implicit "truthiness" default
/// predicate:
///
/// | Type                   | Falsy when                 |
/// |------------------------|----------------------------|
/// | `bool`                 | `false`                    |
/// | integers               | zero                       |
/// | `f32`, `f64`           | `0.0` or `-0.0`            |
/// | `char`                 | never                      |
/// | `str`, `String`        | empty or exactly `"0"`     |
/// | `Option<T>`            | `None`                     |
/// | `[T]`, `Vec<T>`        | empty                      |
pub trait Truthy {
    /// Returns `true` when the value counts as true.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Truthy for $integer {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_integer!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl Truthy for f32 {
    #[allow(clippy::float_cmp)]
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for f64 {
    #[allow(clippy::float_cmp)]
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for char {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty() && self != "0"
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        self.as_str().is_truthy()
    }
}

impl Truthy for Cow<'_, str> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_truthy()
    }
}

impl<T> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

impl<T> Truthy for [T] {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

/// Returns the elements of `sequence` that are [`Truthy`].
///
/// # Examples
///
/// ```rust
/// use seqselect::filter_truthy;
///
/// assert_eq!(filter_truthy(vec![0, 1, 0, 2]), vec![1, 2]);
/// assert_eq!(filter_truthy(vec![true, false, true]), vec![true, true]);
/// ```
pub fn filter_truthy<T, I>(sequence: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Truthy,
{
    filter(sequence, T::is_truthy)
}

/// Returns the payloads of the `Some` elements of `sequence`.
///
/// Unlike `filter(sequence, Option::is_some)`, the result no longer carries
/// the `Option` wrapper.
///
/// # Examples
///
/// ```rust
/// use seqselect::filter_nulls;
///
/// let names = vec![Some("ada"), None, Some("grace"), None];
/// assert_eq!(filter_nulls(names), vec!["ada", "grace"]);
/// ```
pub fn filter_nulls<T, I>(sequence: I) -> Vec<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    sequence.into_iter().flatten().collect()
}

/// Returns the values of a keyed sequence whose `(key, value)` pair satisfies
/// `predicate`, in iteration order.
///
/// Any iterator of pairs is accepted: a [`KeyedSequence`](crate::KeyedSequence)
/// (owned or borrowed), a vector of tuples, or the output of `enumerate()`.
///
/// # Examples
///
/// ```rust
/// use seqselect::filter_with_key;
///
/// let letters = vec!["a", "b", "c", "d"];
/// let at_even_positions = filter_with_key(letters.into_iter().enumerate(), |index, _| index % 2 == 0);
/// assert_eq!(at_even_positions, vec!["a", "c"]);
/// ```
pub fn filter_with_key<K, V, I, P>(keyed_sequence: I, mut predicate: P) -> Vec<V>
where
    I: IntoIterator<Item = (K, V)>,
    P: FnMut(&K, &V) -> bool,
{
    keyed_sequence
        .into_iter()
        .filter_map(|(key, value)| predicate(&key, &value).then_some(value))
        .collect()
}

/// Returns every key of a keyed sequence, in iteration order.
///
/// # Examples
///
/// ```rust
/// use seqselect::{KeyedSequence, keys};
///
/// let mut scores: KeyedSequence<&str, u32> = KeyedSequence::default();
/// scores.insert("carol", 7);
/// scores.insert("alice", 9);
/// assert_eq!(keys(&scores), vec![&"carol", &"alice"]);
/// ```
pub fn keys<K, V, I>(keyed_sequence: I) -> Vec<K>
where
    I: IntoIterator<Item = (K, V)>,
{
    keyed_sequence.into_iter().map(|(key, _)| key).collect()
}

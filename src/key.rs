//! Scalar identities and the keyed structures built from them.
//!
//! Set-style operations ([`diff`](crate::diff), [`intersect`](crate::intersect),
//! [`unique`](crate::unique) and their `_by` variants) compare elements by a
//! *scalar key*: an integer-like or text-like value that can be hashed and
//! compared for equality. This module provides:
//!
//! - [`ScalarKey`]: the bound that marks a type as usable as an identity
//! - [`KeyHasher`]: the hasher shared by every keyed structure in the crate
//! - [`KeySet`]: a hash set of keys for O(1) membership tests
//! - [`KeyedSequence`]: an insertion-ordered map whose overwrites never move
//!   a key from its first position
//!
//! # Hashing
//!
//! The hasher is chosen at compile time:
//!
//! | Feature   | Hasher                        |
//! |-----------|-------------------------------|
//! | (none)    | `std::hash::RandomState`      |
//! | `fxhash`  | `rustc_hash::FxBuildHasher`   |
//! | `ahash`   | `ahash::RandomState`          |
//!
//! When both features are enabled, `fxhash` wins.
//!
//! # Examples
//!
//! ```rust
//! use seqselect::key::{KeyedSequence, keyed_by};
//!
//! let keyed: KeyedSequence<&str, (&str, i32)> =
//!     keyed_by(vec![("a", 1), ("b", 2), ("a", 3)], |pair| pair.0);
//!
//! // "a" keeps its first position but holds the last value.
//! let entries: Vec<_> = keyed.into_iter().collect();
//! assert_eq!(entries, vec![("a", ("a", 3)), ("b", ("b", 2))]);
//! ```

use std::borrow::Cow;
use std::collections::HashSet;
use std::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;

use indexmap::IndexMap;

/// The `BuildHasher` used by [`KeySet`] and [`KeyedSequence`].
#[cfg(feature = "fxhash")]
pub type KeyHasher = rustc_hash::FxBuildHasher;

/// The `BuildHasher` used by [`KeySet`] and [`KeyedSequence`].
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type KeyHasher = ahash::RandomState;

/// The `BuildHasher` used by [`KeySet`] and [`KeyedSequence`].
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type KeyHasher = std::hash::RandomState;

/// A set of scalar keys.
pub type KeySet<K> = HashSet<K, KeyHasher>;

/// An ordered collection of unique keys mapped to values.
///
/// Iteration follows first-insertion order. Inserting a key that is already
/// present replaces its value in place: the key keeps the position of its
/// first insertion.
pub type KeyedSequence<K, V> = IndexMap<K, V, KeyHasher>;

/// A value usable as a set or map identity.
///
/// Implemented for the integer-like and text-like types, and for shared
/// references to any of them. Floating point numbers, tuples and collections
/// do not implement it; operations over such values go through a `_by`
/// variant with an extractor that produces a scalar key.
///
/// Applications may implement it for their own identifier newtypes, as long
/// as `Eq` and `Hash` agree.
///
/// # Examples
///
/// ```rust
/// use seqselect::ScalarKey;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// struct UserId(u64);
///
/// impl ScalarKey for UserId {}
///
/// let users = vec![UserId(1), UserId(2), UserId(1)];
/// assert_eq!(seqselect::unique(users), vec![UserId(1), UserId(2)]);
/// ```
pub trait ScalarKey: Eq + Hash {}

macro_rules! impl_scalar_key {
    ($($key:ty),* $(,)?) => {
        $(impl ScalarKey for $key {})*
    };
}

impl_scalar_key!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, str, String,
    Box<str>, Rc<str>, Arc<str>,
);

impl ScalarKey for Cow<'_, str> {}

impl<K: ScalarKey + ?Sized> ScalarKey for &K {}

/// Collects every element of `sequence` into a [`KeySet`].
///
/// # Examples
///
/// ```rust
/// use seqselect::key::key_set;
///
/// let keys = key_set(vec![1, 2, 2, 3]);
/// assert_eq!(keys.len(), 3);
/// assert!(keys.contains(&2));
/// ```
pub fn key_set<K, I>(sequence: I) -> KeySet<K>
where
    I: IntoIterator<Item = K>,
    K: ScalarKey,
{
    sequence.into_iter().collect()
}

/// Collects `key_function(element)` for every element of `sequence`.
///
/// # Examples
///
/// ```rust
/// use seqselect::key::key_set_by;
///
/// let keys = key_set_by(vec!["apple", "avocado", "banana"], |word| word.as_bytes()[0]);
/// assert_eq!(keys.len(), 2);
/// ```
pub fn key_set_by<T, K, I, F>(sequence: I, mut key_function: F) -> KeySet<K>
where
    I: IntoIterator<Item = T>,
    K: ScalarKey,
    F: FnMut(&T) -> K,
{
    sequence
        .into_iter()
        .map(|element| key_function(&element))
        .collect()
}

/// Builds a [`KeyedSequence`] mapping `key_function(element)` to `element`.
///
/// Elements are inserted in input order. When a key repeats, its value is
/// overwritten but its position stays where the key was first inserted.
/// The result therefore holds, for each key, the position of the first
/// occurrence and the value of the last one.
pub fn keyed_by<T, K, I, F>(sequence: I, mut key_function: F) -> KeyedSequence<K, T>
where
    I: IntoIterator<Item = T>,
    K: ScalarKey,
    F: FnMut(&T) -> K,
{
    let mut keyed: KeyedSequence<K, T> = KeyedSequence::default();
    for element in sequence {
        keyed.insert(key_function(&element), element);
    }
    keyed
}

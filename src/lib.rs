//! # seqselect
//!
//! Pure selection operations over ordered sequences.
//!
//! ## Overview
//!
//! Every operation reads its inputs once and returns a freshly allocated
//! `Vec`. Inputs are accepted as anything that implements `IntoIterator`:
//! pass `&values` to keep the original, or `values` to move it in.
//!
//! - **Filtering**: [`filter()`], [`filter_truthy`], [`filter_nulls`],
//!   [`filter_with_key`], [`keys`]
//! - **Set algebra**: [`diff`], [`diff_all`], [`diff_by`], [`intersect`],
//!   [`intersect_all`], [`unique`], [`unique_by`]
//! - **Positional selection**: [`take`], [`drop`], [`slice`]
//! - **Sampling**: [`sample()`], [`sample_with`]
//!
//! Set operations compare elements by [`ScalarKey`] identity. Non-scalar
//! elements go through the `_by` variants with a key extractor.
//!
//! ## Ordering and duplicates
//!
//! - Filtering and set operations never reorder the surviving elements.
//! - `diff` and `intersect` keep the duplicates of their *first* argument;
//!   every other argument is only used as a set.
//! - `unique` keeps the first occurrence of each value.
//! - `unique_by` places each key at its first occurrence but keeps the value
//!   of its last occurrence.
//!
//! ## Feature Flags
//!
//! - `fxhash`: hash keys with `rustc_hash::FxBuildHasher`
//! - `ahash`: hash keys with `ahash::RandomState`
//!
//! ## Example
//!
//! ```rust
//! use seqselect::prelude::*;
//!
//! let visits = vec!["home", "docs", "home", "blog", "docs"];
//! let distinct = unique(&visits);
//! assert_eq!(distinct, vec![&"home", &"docs", &"blog"]);
//!
//! let unseen = diff(distinct, [&"home"]);
//! assert_eq!(unseen, vec![&"docs", &"blog"]);
//!
//! let first_two = take(unseen, 2)?;
//! assert_eq!(first_two.len(), 2);
//! # Ok::<(), SelectionError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use seqselect::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{InvalidArgumentError, SelectionError};
    pub use crate::filter::*;
    pub use crate::key::{KeySet, KeyedSequence, ScalarKey};
    pub use crate::positional::*;
    pub use crate::sample::*;
    pub use crate::set_algebra::*;
}

mod error;
pub mod filter;
pub mod key;
pub mod positional;
pub mod sample;
pub mod set_algebra;

pub use error::{InvalidArgumentError, Result, SelectionError};
pub use filter::{Truthy, filter, filter_nulls, filter_truthy, filter_with_key, keys};
pub use key::{KeySet, KeyedSequence, ScalarKey};
pub use positional::{drop, slice, take};
pub use sample::{sample, sample_with};
pub use set_algebra::{diff, diff_all, diff_by, intersect, intersect_all, unique, unique_by};

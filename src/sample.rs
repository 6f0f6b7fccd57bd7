//! Uniform random sampling without replacement.
//!
//! A sample is produced by shuffling the *whole* input and keeping its
//! first `sample_size` elements. Every subset of size
//! `min(sample_size, len)` is equally likely, at the cost of O(n) work and
//! O(n) random draws regardless of `sample_size`.
//!
//! [`sample`] draws from the thread-local generator. [`sample_with`] takes
//! the generator as an argument, which makes samples reproducible under a
//! fixed seed.
//!
//! # Examples
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use seqselect::sample_with;
//!
//! let mut first = StdRng::seed_from_u64(7);
//! let mut second = StdRng::seed_from_u64(7);
//! assert_eq!(
//!     sample_with(1..=100, 5, &mut first)?,
//!     sample_with(1..=100, 5, &mut second)?,
//! );
//! # Ok::<(), seqselect::SelectionError>(())
//! ```

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{Result, non_negative};

/// Returns `sample_size` elements of `sequence` chosen uniformly at random,
/// using the thread-local generator.
///
/// If `sample_size` is at least the length of `sequence`, the result is a
/// random permutation of the whole input.
///
/// # Errors
///
/// Returns [`SelectionError::InvalidArgument`](crate::SelectionError::InvalidArgument)
/// if `sample_size` is negative.
///
/// # Examples
///
/// ```rust
/// use seqselect::sample;
///
/// let picked = sample(vec![1, 2, 3, 4, 5], 2)?;
/// assert_eq!(picked.len(), 2);
/// assert!(picked.iter().all(|value| (1..=5).contains(value)));
/// # Ok::<(), seqselect::SelectionError>(())
/// ```
pub fn sample<T, I>(sequence: I, sample_size: isize) -> Result<Vec<T>>
where
    I: IntoIterator<Item = T>,
{
    sample_with(sequence, sample_size, &mut rand::rng())
}

/// Returns `sample_size` elements of `sequence` chosen uniformly at random,
/// drawing randomness from `random`.
///
/// # Errors
///
/// Returns [`SelectionError::InvalidArgument`](crate::SelectionError::InvalidArgument)
/// if `sample_size` is negative. The generator is not advanced in that case.
pub fn sample_with<T, I, R>(sequence: I, sample_size: isize, random: &mut R) -> Result<Vec<T>>
where
    I: IntoIterator<Item = T>,
    R: Rng + ?Sized,
{
    let count = non_negative("sample", "sample_size", sample_size)?;

    let mut elements: Vec<T> = sequence.into_iter().collect();
    tracing::trace!(length = elements.len(), sample_size = count, "sampling");
    elements.shuffle(random);
    elements.truncate(count);
    Ok(elements)
}

//! Selection by position rather than by value.
//!
//! Counts, offsets and lengths are signed so that a negative value reaches
//! the operation and is reported as
//! [`SelectionError::InvalidArgument`](crate::SelectionError::InvalidArgument)
//! instead of wrapping around. Arguments are checked before the input is
//! touched.
//!
//! # Examples
//!
//! ```rust
//! use seqselect::{drop, slice, take};
//!
//! let values = vec![0, 1, 2, 3, 4];
//! assert_eq!(take(&values, 2)?, vec![&0, &1]);
//! assert_eq!(drop(&values, 3)?, vec![&3, &4]);
//! assert_eq!(slice(&values, 1, Some(2))?, vec![&1, &2]);
//! assert!(take(&values, -1).is_err());
//! # Ok::<(), seqselect::SelectionError>(())
//! ```

use crate::error::{Result, non_negative};

/// Returns at most the first `n` elements of `sequence`.
///
/// Iteration stops as soon as `n` elements are collected, so `sequence` may
/// be infinite. When `n` is zero no element is pulled from it at all.
///
/// # Errors
///
/// Returns [`SelectionError::InvalidArgument`](crate::SelectionError::InvalidArgument)
/// if `n` is negative.
///
/// # Complexity
///
/// O(min(n, len))
///
/// # Examples
///
/// ```rust
/// use seqselect::take;
///
/// let naturals = 0_u64..;
/// assert_eq!(take(naturals, 3)?, vec![0, 1, 2]);
/// # Ok::<(), seqselect::SelectionError>(())
/// ```
pub fn take<T, I>(sequence: I, n: isize) -> Result<Vec<T>>
where
    I: IntoIterator<Item = T>,
{
    let count = non_negative("take", "n", n)?;
    if count == 0 {
        return Ok(Vec::new());
    }
    Ok(sequence.into_iter().take(count).collect())
}

/// Returns every element of `sequence` at position `n` or later.
///
/// # Errors
///
/// Returns [`SelectionError::InvalidArgument`](crate::SelectionError::InvalidArgument)
/// if `n` is negative.
///
/// # Examples
///
/// ```rust
/// use seqselect::drop;
///
/// assert_eq!(drop(vec!['a', 'b', 'c'], 1)?, vec!['b', 'c']);
/// assert!(drop(vec!['a', 'b', 'c'], 10)?.is_empty());
/// # Ok::<(), seqselect::SelectionError>(())
/// ```
pub fn drop<T, I>(sequence: I, n: isize) -> Result<Vec<T>>
where
    I: IntoIterator<Item = T>,
{
    let count = non_negative("drop", "n", n)?;
    Ok(sequence.into_iter().skip(count).collect())
}

/// Returns up to `length` elements of `sequence`, starting at `offset`.
///
/// When `length` is `None`, or larger than what remains after `offset`, every
/// element from `offset` to the end is returned. An `offset` at or beyond the
/// end yields an empty vector.
///
/// # Errors
///
/// Returns [`SelectionError::InvalidArgument`](crate::SelectionError::InvalidArgument)
/// if `offset` is negative or `length` is `Some` negative value.
///
/// # Examples
///
/// ```rust
/// use seqselect::slice;
///
/// let values = vec![0, 1, 2, 3, 4];
/// assert_eq!(slice(values.clone(), 1, Some(2))?, vec![1, 2]);
/// assert_eq!(slice(values.clone(), 3, None)?, vec![3, 4]);
/// assert!(slice(values, 10, None)?.is_empty());
/// # Ok::<(), seqselect::SelectionError>(())
/// ```
pub fn slice<T, I>(sequence: I, offset: isize, length: Option<isize>) -> Result<Vec<T>>
where
    I: IntoIterator<Item = T>,
{
    let start = non_negative("slice", "offset", offset)?;
    let count = length
        .map(|length| non_negative("slice", "length", length))
        .transpose()?;

    let remaining = sequence.into_iter().skip(start);
    Ok(match count {
        Some(count) => remaining.take(count).collect(),
        None => remaining.collect(),
    })
}

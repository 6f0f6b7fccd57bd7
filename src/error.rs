//! Error types for selection operations.
//!
//! Every operation in this crate is total over its sequence inputs. The only
//! way to fail is to pass a numeric argument outside its documented domain,
//! such as a negative count to [`take`](crate::take) or a negative offset to
//! [`slice`](crate::slice). Such arguments are rejected before any element is
//! read.

/// Represents a numeric argument that lies outside its documented domain.
///
/// # Examples
///
/// ```rust
/// use seqselect::InvalidArgumentError;
///
/// let error = InvalidArgumentError {
///     operation: "take",
///     parameter: "n",
///     value: -1,
/// };
/// assert_eq!(format!("{error}"), "take: n must be non-negative, got -1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidArgumentError {
    /// The name of the operation that rejected the argument.
    pub operation: &'static str,
    /// The name of the offending parameter.
    pub parameter: &'static str,
    /// The rejected value.
    pub value: isize,
}

impl std::fmt::Display for InvalidArgumentError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: {} must be non-negative, got {}",
            self.operation, self.parameter, self.value
        )
    }
}

impl std::error::Error for InvalidArgumentError {}

/// Represents errors that can occur in selection operations.
///
/// # Examples
///
/// ```rust
/// use seqselect::{SelectionError, take};
///
/// let result = take(vec![1, 2, 3], -1);
/// assert!(matches!(result, Err(SelectionError::InvalidArgument(_))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// A count, offset or length was negative.
    InvalidArgument(InvalidArgumentError),
}

impl std::fmt::Display for SelectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for SelectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidArgument(error) => Some(error),
        }
    }
}

impl From<InvalidArgumentError> for SelectionError {
    fn from(error: InvalidArgumentError) -> Self {
        Self::InvalidArgument(error)
    }
}

/// Result type returned by the fallible selection operations.
pub type Result<T> = std::result::Result<T, SelectionError>;

/// Converts a signed count into a `usize`, rejecting negative values.
pub(crate) fn non_negative(
    operation: &'static str,
    parameter: &'static str,
    value: isize,
) -> Result<usize> {
    usize::try_from(value).map_err(|_| {
        tracing::debug!(operation, parameter, value, "rejected negative argument");
        SelectionError::InvalidArgument(InvalidArgumentError {
            operation,
            parameter,
            value,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_invalid_argument_error_display() {
        let error = InvalidArgumentError {
            operation: "slice",
            parameter: "offset",
            value: -3,
        };
        assert_eq!(
            format!("{error}"),
            "slice: offset must be non-negative, got -3"
        );
    }

    #[rstest]
    fn test_selection_error_display_delegates() {
        let error = SelectionError::InvalidArgument(InvalidArgumentError {
            operation: "sample",
            parameter: "sample_size",
            value: -1,
        });
        assert_eq!(
            format!("{error}"),
            "sample: sample_size must be non-negative, got -1"
        );
    }

    #[rstest]
    fn test_selection_error_source_is_inner_error() {
        use std::error::Error;

        let inner = InvalidArgumentError {
            operation: "drop",
            parameter: "n",
            value: -7,
        };
        let error = SelectionError::from(inner);
        let source = error.source().map(ToString::to_string);
        assert_eq!(source, Some(inner.to_string()));
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(isize::MAX, isize::MAX.unsigned_abs())]
    fn test_non_negative_accepts(#[case] value: isize, #[case] expected: usize) {
        assert_eq!(non_negative("take", "n", value), Ok(expected));
    }

    #[rstest]
    #[case(-1)]
    #[case(isize::MIN)]
    fn test_non_negative_rejects(#[case] value: isize) {
        assert_eq!(
            non_negative("take", "n", value),
            Err(SelectionError::InvalidArgument(InvalidArgumentError {
                operation: "take",
                parameter: "n",
                value,
            }))
        );
    }

    #[rstest]
    fn test_error_equality() {
        let error1 = InvalidArgumentError {
            operation: "take",
            parameter: "n",
            value: -1,
        };
        let error2 = InvalidArgumentError {
            operation: "drop",
            parameter: "n",
            value: -1,
        };
        assert_eq!(error1, error1);
        assert_ne!(error1, error2);
    }
}

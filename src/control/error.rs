//! Error types for [`Either`](super::Either) programmer errors.
//!
//! `Left` and `Bottom` normally propagate as data. The cases below are the
//! few places where an `Either` cannot continue without the caller having
//! handled a state it did not plan for.

/// Errors raised by `Either` construction and terminal operations.
///
/// # Examples
///
/// ```rust
/// use faultline::control::{Either, EitherError};
///
/// let bottom: Either<String, i32> = Either::Bottom;
/// assert_eq!(
///     bottom.match_with(|l| l.len() as i32, |r| r),
///     Err(EitherError::Bottom { operation: "match_with" })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum EitherError {
    /// A checked constructor received no payload.
    #[error("cannot construct a {side} Either from an absent payload")]
    NullPayload {
        /// The side that was requested (`"Left"` or `"Right"`).
        side: &'static str,
    },
    /// An operation needs a Left or Right handler but the Either is Bottom.
    #[error("`{operation}` has no handler for a Bottom Either")]
    Bottom {
        /// The operation that was invoked.
        operation: &'static str,
    },
    /// A payload was requested from the wrong side.
    #[error("expected a {expected} Either but found {actual}")]
    Unexpected {
        /// The state the caller asked for.
        expected: &'static str,
        /// The state the Either is actually in.
        actual: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        EitherError::NullPayload { side: "Right" },
        "cannot construct a Right Either from an absent payload"
    )]
    #[case(
        EitherError::Bottom { operation: "match_with" },
        "`match_with` has no handler for a Bottom Either"
    )]
    #[case(
        EitherError::Unexpected { expected: "Left", actual: "Bottom" },
        "expected a Left Either but found Bottom"
    )]
    fn either_error_display(#[case] error: EitherError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}

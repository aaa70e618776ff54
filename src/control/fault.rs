//! Captured errors of deferred computations.
//!
//! A [`Fault`] is what a [`Try`](super::Try) holds when its computation did
//! not produce a value. Faults are plain data once captured: they are cloned
//! through combinators and only surface when the caller extracts them.
//!
//! The original error is never replaced. Wrapping a `std::io::Error` in a
//! `Try` and threading it through `map`/`bind`/`filter` still lets the caller
//! ask whether it was a `NotFound`:
//!
//! ```rust
//! use faultline::control::Try;
//! use std::io;
//!
//! let missing: Try<String> =
//!     Try::new(|| Err(io::Error::new(io::ErrorKind::NotFound, "config.toml")));
//! let fault = missing.map(|text| text.len()).into_result().unwrap_err();
//!
//! let kind = fault.downcast_ref::<io::Error>().map(io::Error::kind);
//! assert_eq!(kind, Some(io::ErrorKind::NotFound));
//! ```

use std::any::Any;
use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

/// A boxed, thread-safe error; the input type of [`Fault::new`].
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// An error raised by a computation, with the backtrace of where it was captured.
///
/// Display and source chain are those of the wrapped error.
#[derive(Debug, Clone)]
pub struct RaisedError {
    error: Arc<dyn Error + Send + Sync + 'static>,
    trace: Arc<Backtrace>,
}

impl RaisedError {
    /// Returns the wrapped error.
    pub fn error(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.error
    }

    /// Returns the backtrace captured with the error.
    pub fn backtrace(&self) -> &Backtrace {
        &self.trace
    }
}

impl fmt::Display for RaisedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, formatter)
    }
}

impl Error for RaisedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.error.source()
    }
}

/// The captured error of a `Try`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Fault {
    /// An error returned by a computation or a user function.
    #[error(transparent)]
    Raised(RaisedError),
    /// A panic caught while evaluating a computation or a user function.
    #[error("computation panicked: {message}")]
    Panicked {
        /// The panic payload rendered as text.
        message: String,
        /// Where the panic was caught.
        trace: Arc<Backtrace>,
    },
    /// The value did not satisfy a `filter` predicate.
    #[error("value was rejected by the filter predicate")]
    FilterRejected,
    /// The operation has no handler for the state the `Try` is in.
    #[error("`{operation}` is not supported on a {state} Try")]
    InvalidState {
        /// The operation that was invoked.
        operation: &'static str,
        /// The state of the `Try` (`"successful"` or `"failed"`).
        state: &'static str,
    },
}

static_assertions::assert_impl_all!(Fault: Send, Sync, Clone);

impl Fault {
    /// Captures an error.
    ///
    /// Anything convertible into a [`BoxError`] is accepted, including
    /// `&str` and `String` messages. A `Fault` passed back in is returned
    /// unchanged rather than nested. A backtrace is captured when the
    /// error is new; it is only resolved if `RUST_BACKTRACE` or
    /// `RUST_LIB_BACKTRACE` enables it.
    pub fn new<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        match error.into().downcast::<Self>() {
            Ok(fault) => *fault,
            Err(other) => Self::Raised(RaisedError {
                error: Arc::from(other),
                trace: Arc::new(Backtrace::capture()),
            }),
        }
    }

    /// Captures a plain message as an error.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(message.into())
    }

    /// Converts a panic payload into a fault.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        tracing::debug!(%message, "captured panic as fault");
        Self::Panicked { message, trace: Arc::new(Backtrace::capture()) }
    }

    /// Returns the backtrace captured with a raised error or a panic.
    ///
    /// Filter rejections and invalid states carry none.
    pub fn backtrace(&self) -> Option<&Backtrace> {
        match self {
            Self::Raised(raised) => Some(raised.backtrace()),
            Self::Panicked { trace, .. } => Some(trace),
            Self::FilterRejected | Self::InvalidState { .. } => None,
        }
    }

    /// Returns `true` if the captured error is an `E`.
    pub fn is<E: Error + 'static>(&self) -> bool {
        self.downcast_ref::<E>().is_some()
    }

    /// Returns the captured error as an `E`, if it is one.
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::Raised(raised) => raised.error.downcast_ref::<E>(),
            _ => None,
        }
    }

    /// Returns `true` for a filter rejection.
    pub const fn is_filter_rejected(&self) -> bool {
        matches!(self, Self::FilterRejected)
    }

    /// Returns `true` for a captured panic.
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked { .. })
    }

    /// Returns `true` for an operation without a handler.
    pub const fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }

    /// Iterates over this fault followed by its chain of sources.
    pub fn chain(&self) -> impl Iterator<Item = &(dyn Error + 'static)> {
        std::iter::successors(Some(self as &(dyn Error + 'static)), |error| {
            (*error).source()
        })
    }

    /// Returns the innermost error of the source chain.
    pub fn root_cause(&self) -> &(dyn Error + 'static) {
        self.chain().last().unwrap_or(self)
    }
}

/// Runs `computation`, turning a panic into [`Fault::Panicked`].
pub(crate) fn guard<T>(computation: impl FnOnce() -> Result<T, Fault>) -> Result<T, Fault> {
    catch_unwind(AssertUnwindSafe(computation))
        .unwrap_or_else(|payload| Err(Fault::from_panic(payload)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fmt;
    use std::io;

    #[derive(Debug)]
    struct Wrapped(io::Error);

    impl fmt::Display for Wrapped {
        fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("wrapped")
        }
    }

    impl Error for Wrapped {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[rstest]
    fn fault_new_keeps_error_identity() {
        let fault = Fault::new(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert!(fault.is::<io::Error>());
        assert_eq!(fault.to_string(), "missing");
    }

    #[rstest]
    fn fault_new_does_not_nest_faults() {
        let fault = Fault::new(Fault::FilterRejected);
        assert!(fault.is_filter_rejected());
    }

    #[rstest]
    fn fault_message_displays_text() {
        assert_eq!(Fault::message("too small").to_string(), "too small");
    }

    #[rstest]
    #[case(Box::new("static str") as Box<dyn Any + Send>, "static str")]
    #[case(Box::new(String::from("owned")) as Box<dyn Any + Send>, "owned")]
    #[case(Box::new(42_u8) as Box<dyn Any + Send>, "non-string panic payload")]
    fn fault_from_panic_extracts_message(#[case] payload: Box<dyn Any + Send>, #[case] expected: &str) {
        let fault = Fault::from_panic(payload);
        assert!(fault.is_panic());
        assert_eq!(fault.to_string(), format!("computation panicked: {expected}"));
    }

    #[rstest]
    fn fault_chain_walks_sources() {
        let fault = Fault::new(Wrapped(io::Error::other("inner")));
        let messages: Vec<String> = fault.chain().map(ToString::to_string).collect();
        assert_eq!(messages, vec!["wrapped", "inner"]);
        assert_eq!(fault.root_cause().to_string(), "inner");
    }

    #[rstest]
    fn fault_chain_survives_raised_wrapper() {
        let fault = Fault::new(io::Error::other("plain"));
        assert_eq!(fault.chain().count(), 1);
        assert_eq!(fault.root_cause().to_string(), "plain");
    }

    #[rstest]
    #[case(Fault::new(io::Error::other("raised")))]
    #[case(Fault::from_panic(Box::new("panicked")))]
    fn fault_carries_backtrace_of_capture(#[case] fault: Fault) {
        let status = fault.backtrace().map(Backtrace::status);
        assert_eq!(status, Some(Backtrace::capture().status()));
    }

    #[rstest]
    #[case(Fault::FilterRejected)]
    #[case(Fault::InvalidState { operation: "failed", state: "successful" })]
    fn fault_without_origin_has_no_backtrace(#[case] fault: Fault) {
        assert!(fault.backtrace().is_none());
    }

    #[rstest]
    fn cloned_fault_shares_backtrace() {
        let fault = Fault::message("shared");
        let copy = fault.clone();
        let original = fault.backtrace().map(std::ptr::from_ref);
        assert_eq!(original, copy.backtrace().map(std::ptr::from_ref));
    }

    #[rstest]
    fn guard_converts_panics() {
        let outcome: Result<i32, Fault> = guard(|| panic!("boom"));
        assert!(matches!(outcome, Err(Fault::Panicked { ref message, .. }) if message == "boom"));
    }

    #[rstest]
    fn invalid_state_display() {
        let fault = Fault::InvalidState { operation: "failed", state: "successful" };
        assert!(fault.is_invalid_state());
        assert_eq!(fault.to_string(), "`failed` is not supported on a successful Try");
    }
}

//! Try type - a deferred computation that may fail.
//!
//! A `Try<T>` wraps a computation producing `T` and runs it the first time
//! its outcome is inspected. The outcome, a `T` or a [`Fault`], is cached:
//! inspecting the same `Try` again never reruns the computation.
//!
//! Combinators consume the `Try` and build a new deferred computation on
//! top of it. Nothing runs until a terminal operation such as
//! [`Try::run`], [`Try::into_result`] or [`Try::match_with`] is reached.
//! Errors and panics raised by the computation or by any user function
//! passed to a combinator become a [`Fault`] instead of escaping.
//!
//! # Examples
//!
//! ```rust
//! use faultline::control::Try;
//!
//! let parsed = Try::new(|| "42".parse::<i32>())
//!     .map(|n| n * 2)
//!     .filter(|n| *n > 50);
//!
//! assert_eq!(parsed.run().ok(), Some(84));
//!
//! let broken: Try<i32> = Try::new(|| "forty".parse::<i32>()).map(|n| n * 2);
//! assert!(broken.is_fail());
//! assert_eq!(broken.if_fail(0), 0);
//! ```

use std::cell::Ref;
use std::fmt;

use super::either::Either;
use super::fault::{BoxError, Fault, guard};
use super::lazy::Lazy;

type Thunk<T> = Box<dyn FnOnce() -> Result<T, Fault>>;

/// A memoized computation that yields a `T` or a [`Fault`].
///
/// `Try` keeps its outcome in a single-threaded cell and is neither `Send`
/// nor `Sync`.
pub struct Try<T> {
    outcome: Lazy<Result<T, Fault>, Thunk<T>>,
}

static_assertions::assert_not_impl_any!(Try<i32>: Send, Sync);

impl<T> Try<T> {
    /// Creates an already successful `Try`.
    #[inline]
    pub fn success(value: T) -> Self {
        Self::settled(Ok(value))
    }

    /// Creates an already failed `Try`.
    ///
    /// ```rust
    /// use faultline::control::Try;
    ///
    /// let failed: Try<i32> = Try::failure("no value");
    /// assert_eq!(failed.run().unwrap_err().to_string(), "no value");
    /// ```
    #[inline]
    pub fn failure<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::settled(Err(Fault::new(error)))
    }

    pub(crate) fn settled(outcome: Result<T, Fault>) -> Self {
        Self {
            outcome: Lazy::new_with_value(outcome),
        }
    }

    fn outcome(&self) -> Result<Ref<'_, Result<T, Fault>>, Fault> {
        self.outcome.try_force().map_err(Fault::new)
    }

    // =========================================================================
    // Evaluation
    // =========================================================================

    /// Evaluates the computation if needed and returns a copy of the outcome.
    ///
    /// # Errors
    ///
    /// Returns the captured [`Fault`] when the computation failed.
    pub fn run(&self) -> Result<T, Fault>
    where
        T: Clone,
    {
        self.outcome()?.clone()
    }

    /// Evaluates the computation if needed and returns the outcome.
    ///
    /// # Errors
    ///
    /// Returns the captured [`Fault`] when the computation failed.
    pub fn into_result(self) -> Result<T, Fault> {
        self.outcome
            .into_inner()
            .unwrap_or_else(|poisoned| Err(Fault::new(poisoned)))
    }

    /// Returns `true` if the computation succeeds. Evaluates it if needed.
    pub fn is_succ(&self) -> bool {
        self.outcome().is_ok_and(|outcome| outcome.is_ok())
    }

    /// Returns `true` if the computation fails. Evaluates it if needed.
    pub fn is_fail(&self) -> bool {
        !self.is_succ()
    }

    /// Returns `true` once the outcome has been computed.
    #[inline]
    pub fn is_evaluated(&self) -> bool {
        self.outcome.is_initialized()
    }

    // =========================================================================
    // Terminal Operations
    // =========================================================================

    /// Eliminates the `Try` with one handler per outcome.
    pub fn match_with<R, F, G>(self, on_fault: F, on_success: G) -> R
    where
        F: FnOnce(Fault) -> R,
        G: FnOnce(T) -> R,
    {
        match self.into_result() {
            Ok(value) => on_success(value),
            Err(fault) => on_fault(fault),
        }
    }

    /// Returns the success value, or `fallback` on failure.
    #[inline]
    pub fn if_fail(self, fallback: T) -> T {
        self.into_result().unwrap_or(fallback)
    }

    /// Returns the success value, or recovers one from the fault.
    #[inline]
    pub fn if_fail_with<F>(self, recover: F) -> T
    where
        F: FnOnce(Fault) -> T,
    {
        self.into_result().unwrap_or_else(recover)
    }

    /// Runs `action` on the success value, if any.
    pub fn if_succ<F>(self, action: F)
    where
        F: FnOnce(T),
    {
        if let Ok(value) = self.into_result() {
            action(value);
        }
    }

    /// `predicate` of the success value; `false` on failure.
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        self.outcome()
            .is_ok_and(|outcome| outcome.as_ref().is_ok_and(predicate))
    }

    /// `predicate` of the success value; vacuously `true` on failure.
    pub fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        self.outcome()
            .map_or(true, |outcome| outcome.as_ref().map_or(true, predicate))
    }

    /// Folds the success value into `state`; a failure returns `state`.
    pub fn fold<S, F>(self, state: S, folder: F) -> S
    where
        F: FnOnce(S, T) -> S,
    {
        match self.into_result() {
            Ok(value) => folder(state, value),
            Err(_) => state,
        }
    }

    /// Folds whichever outcome the computation produced.
    pub fn bifold<S, F, G>(self, state: S, on_fault: F, on_success: G) -> S
    where
        F: FnOnce(S, Fault) -> S,
        G: FnOnce(S, T) -> S,
    {
        match self.into_result() {
            Ok(value) => on_success(state, value),
            Err(fault) => on_fault(state, fault),
        }
    }

    /// Converts into an `Either` with the fault on the left.
    pub fn into_either(self) -> Either<Fault, T> {
        self.into_result().into()
    }
}

impl<T: 'static> Try<T> {
    // =========================================================================
    // Deferred Construction
    // =========================================================================

    /// Defers a fallible computation.
    ///
    /// The computation runs once, on first inspection. An `Err` it returns
    /// and a panic it raises are both captured as a [`Fault`].
    pub fn new<F, E>(computation: F) -> Self
    where
        F: FnOnce() -> Result<T, E> + 'static,
        E: Into<BoxError>,
    {
        Self::defer(move || {
            computation().map_err(|error| {
                let fault = Fault::new(error);
                tracing::debug!(%fault, "computation returned an error");
                fault
            })
        })
    }

    /// Defers an infallible computation. Panics are still captured.
    pub fn lazy<F>(computation: F) -> Self
    where
        F: FnOnce() -> T + 'static,
    {
        Self::defer(move || Ok(computation()))
    }

    pub(crate) fn defer<F>(computation: F) -> Self
    where
        F: FnOnce() -> Result<T, Fault> + 'static,
    {
        let thunk: Thunk<T> = Box::new(move || {
            tracing::trace!("evaluating deferred computation");
            guard(computation)
        });
        Self {
            outcome: Lazy::new(thunk),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the success value; a failure propagates
    /// without calling it.
    pub fn map<B, F>(self, function: F) -> Try<B>
    where
        B: 'static,
        F: FnOnce(T) -> B + 'static,
    {
        Try::defer(move || self.into_result().map(function))
    }

    /// Evaluates this `Try` now and maps a reference to its success value.
    ///
    /// The source keeps its outcome, so it can still be inspected.
    pub fn map_ref<B, F>(&self, function: F) -> Try<B>
    where
        F: FnOnce(&T) -> B,
    {
        let outcome = self.outcome().and_then(|outcome| {
            guard(|| match &*outcome {
                Ok(value) => Ok(function(value)),
                Err(fault) => Err(fault.clone()),
            })
        });
        Try::settled(outcome)
    }

    /// Rewrites the fault of a failed `Try`; a success is untouched.
    pub fn map_fault<F, E>(self, function: F) -> Self
    where
        F: FnOnce(Fault) -> E + 'static,
        E: Into<BoxError>,
    {
        Self::defer(move || {
            self.into_result()
                .map_err(|fault| Fault::new(function(fault)))
        })
    }

    /// Maps whichever outcome was produced into a successful `Try`.
    ///
    /// The result only fails if the chosen function panics.
    pub fn bimap<B, F, G>(self, on_fault: F, on_success: G) -> Try<B>
    where
        B: 'static,
        F: FnOnce(Fault) -> B + 'static,
        G: FnOnce(T) -> B + 'static,
    {
        Try::defer(move || Ok(self.match_with(on_fault, on_success)))
    }

    // =========================================================================
    // Binding Operations
    // =========================================================================

    /// Feeds the success value to `function`; a failure propagates without
    /// calling it.
    pub fn bind<B, F>(self, function: F) -> Try<B>
    where
        B: 'static,
        F: FnOnce(T) -> Try<B> + 'static,
    {
        Try::defer(move || function(self.into_result()?).into_result())
    }

    /// Continues with whichever function matches the outcome.
    pub fn bibind<B, F, G>(self, on_fault: F, on_success: G) -> Try<B>
    where
        B: 'static,
        F: FnOnce(Fault) -> Try<B> + 'static,
        G: FnOnce(T) -> Try<B> + 'static,
    {
        Try::defer(move || self.match_with(on_fault, on_success).into_result())
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Keeps a success value that satisfies `predicate`; otherwise fails
    /// with [`Fault::FilterRejected`].
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool + 'static,
    {
        Self::defer(move || {
            let value = self.into_result()?;
            if predicate(&value) {
                Ok(value)
            } else {
                tracing::trace!("filter rejected successful value");
                Err(Fault::FilterRejected)
            }
        })
    }

    /// Turns the fault into the success value.
    ///
    /// A successful source has no fault to expose and yields
    /// [`Fault::InvalidState`].
    pub fn failed(self) -> Try<Fault> {
        Try::defer(move || match self.into_result() {
            Ok(_) => Err(Fault::InvalidState {
                operation: "failed",
                state: "successful",
            }),
            Err(fault) => Ok(fault),
        })
    }

    // =========================================================================
    // Applicative Operations
    // =========================================================================

    /// Combines two success values with `function`.
    ///
    /// `self` is evaluated first; if it fails, `other` is never evaluated.
    pub fn map2<B, C, F>(self, other: Try<B>, function: F) -> Try<C>
    where
        B: 'static,
        C: 'static,
        F: FnOnce(T, B) -> C + 'static,
    {
        Try::defer(move || {
            let first = self.into_result()?;
            let second = other.into_result()?;
            Ok(function(first, second))
        })
    }

    /// Partially applies a two-argument function to the success value.
    pub fn par_map<B, C, F>(self, function: F) -> Try<impl FnOnce(B) -> C + 'static>
    where
        B: 'static,
        C: 'static,
        F: FnOnce(T, B) -> C + 'static,
    {
        self.map(move |first| move |second| function(first, second))
    }
}

impl<F: 'static> Try<F> {
    /// Applies the held function to the success value of `other`.
    pub fn apply<B, Output>(self, other: Try<B>) -> Try<Output>
    where
        F: FnOnce(B) -> Output,
        B: 'static,
        Output: 'static,
    {
        self.map2(other, |function, value| function(value))
    }
}

impl<T: 'static> Try<Try<T>> {
    /// Removes one layer of nesting.
    ///
    /// Each call peels exactly one `Try`, so a value nested `n` levels deep
    /// needs `n - 1` calls. A failure at any level becomes the failure of the
    /// flattened `Try`, and the levels below it are never evaluated.
    ///
    /// ```rust
    /// use faultline::control::Try;
    ///
    /// let nested = Try::success(Try::success(Try::success(5)));
    /// assert_eq!(nested.flatten().flatten().run().ok(), Some(5));
    /// ```
    pub fn flatten(self) -> Try<T> {
        self.bind(|inner| inner)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Try<T>
where
    E: Into<BoxError>,
{
    fn from(result: Result<T, E>) -> Self {
        Self::settled(result.map_err(Fault::new))
    }
}

impl<T: fmt::Debug> fmt::Debug for Try<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome.get() {
            Some(outcome) => match &*outcome {
                Ok(value) => formatter.debug_tuple("Success").field(value).finish(),
                Err(fault) => formatter.debug_tuple("Failure").field(fault).finish(),
            },
            None if self.outcome.is_poisoned() => formatter.write_str("Try(<poisoned>)"),
            None => formatter.write_str("Try(<pending>)"),
        }
    }
}

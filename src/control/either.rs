//! Either type - a value that is Left, Right, or Bottom.
//!
//! `Either<L, R>` holds exactly one of a `Left(L)` or a `Right(R)`, plus a
//! third state, `Bottom`, that holds neither. By convention `Right` is the
//! success path and `Left` the alternative or error path; combinators are
//! right-biased.
//!
//! # Bottom
//!
//! `Bottom` is never produced by the `Left`/`Right` constructors. It comes
//! from [`Default`], from [`Either::filter`] and [`Either::bifilter`]
//! rejecting a value, and from propagation. It behaves like `Left` in a
//! pipeline (no user function runs), but it is neither left nor right:
//!
//! - `is_left()` and `is_right()` are both `false`
//! - `for_all` is vacuously `true`, `exists` is `false`
//! - [`Either::match_with`] returns [`EitherError::Bottom`] because there is
//!   no handler for it
//!
//! # Examples
//!
//! ```rust
//! use faultline::control::{Either, EitherError};
//!
//! fn double_if_big(x: i32) -> Either<String, i32> {
//!     if x > 5 { Either::Right(x * 2) } else { Either::Left("too small".to_string()) }
//! }
//!
//! assert_eq!(Either::<String, i32>::Right(10).bind(double_if_big), Either::Right(20));
//! assert_eq!(
//!     Either::<String, i32>::Right(3).bind(double_if_big),
//!     Either::Left("too small".to_string())
//! );
//!
//! let rejected = Either::<String, i32>::Right(3).filter(|x| *x > 5);
//! assert!(rejected.is_bottom());
//! assert_eq!(
//!     rejected.match_with(|l| l.len() as i32, |r| r),
//!     Err(EitherError::Bottom { operation: "match_with" })
//! );
//! ```

use std::fmt;

use super::error::EitherError;

/// A value that is either `Left(L)`, `Right(R)` or `Bottom`.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally the alternative or error path.
    Left(L),
    /// The right variant, conventionally the success path.
    Right(R),
    /// Neither a left nor a right value.
    Bottom,
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Checked Construction
    // =========================================================================

    /// Builds a `Left` from a payload that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`EitherError::NullPayload`] for `None`.
    pub fn try_left(value: Option<L>) -> Result<Self, EitherError> {
        value
            .map(Self::Left)
            .ok_or(EitherError::NullPayload { side: "Left" })
    }

    /// Builds a `Right` from a payload that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`EitherError::NullPayload`] for `None`.
    pub fn try_right(value: Option<R>) -> Result<Self, EitherError> {
        value
            .map(Self::Right)
            .ok_or(EitherError::NullPayload { side: "Right" })
    }

    // =========================================================================
    // State Inspection
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns `true` if this holds neither a left nor a right value.
    #[inline]
    pub const fn is_bottom(&self) -> bool {
        matches!(self, Self::Bottom)
    }

    const fn state_name(&self) -> &'static str {
        match self {
            Self::Left(_) => "Left",
            Self::Right(_) => "Right",
            Self::Bottom => "Bottom",
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into an `Option<L>`.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            _ => None,
        }
    }

    /// Converts into an `Option<R>`.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Right(value) => Some(value),
            _ => None,
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            _ => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Right(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the left value.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` or `Bottom` value.
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            other => panic!("called `Either::unwrap_left()` on a `{}` value", other.state_name()),
        }
    }

    /// Returns the right value.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` or `Bottom` value.
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Right(value) => value,
            other => panic!("called `Either::unwrap_right()` on a `{}` value", other.state_name()),
        }
    }

    /// Returns the left value or reports the actual state.
    ///
    /// # Errors
    ///
    /// Returns [`EitherError::Unexpected`] for `Right` and `Bottom`.
    pub fn try_unwrap_left(self) -> Result<L, EitherError> {
        match self {
            Self::Left(value) => Ok(value),
            other => Err(EitherError::Unexpected {
                expected: "Left",
                actual: other.state_name(),
            }),
        }
    }

    /// Returns the right value or reports the actual state.
    ///
    /// # Errors
    ///
    /// Returns [`EitherError::Unexpected`] for `Left` and `Bottom`.
    pub fn try_unwrap_right(self) -> Result<R, EitherError> {
        match self {
            Self::Right(value) => Ok(value),
            other => Err(EitherError::Unexpected {
                expected: "Right",
                actual: other.state_name(),
            }),
        }
    }

    /// Returns the right value, or `default` for `Left` and `Bottom`.
    #[inline]
    pub fn right_or(self, default: R) -> R {
        match self {
            Self::Right(value) => value,
            _ => default,
        }
    }

    /// Returns the right value, or the result of `function` applied to the
    /// left value.
    ///
    /// # Errors
    ///
    /// Returns [`EitherError::Bottom`] when there is neither value.
    pub fn if_left<F>(self, function: F) -> Result<R, EitherError>
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Right(value) => Ok(value),
            Self::Left(value) => Ok(function(value)),
            Self::Bottom => Err(EitherError::Bottom { operation: "if_left" }),
        }
    }

    /// Runs `action` on the right value, if any.
    #[inline]
    pub fn if_right<F>(self, action: F)
    where
        F: FnOnce(R),
    {
        if let Self::Right(value) = self {
            action(value);
        }
    }

    /// Converts into a pair of `Option`s; `Bottom` gives `(None, None)`.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(value) => (Some(value), None),
            Self::Right(value) => (None, Some(value)),
            Self::Bottom => (None, None),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the right value. Alias of [`Either::map_right`].
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        self.map_right(function)
    }

    /// Applies `function` to the right value; `Left` and `Bottom` pass through.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
            Self::Bottom => Either::Bottom,
        }
    }

    /// Applies `function` to the left value; `Right` and `Bottom` pass through.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
            Self::Bottom => Either::Bottom,
        }
    }

    /// Applies exactly one of the two functions depending on the state.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
            Self::Bottom => Either::Bottom,
        }
    }

    // =========================================================================
    // Binding Operations
    // =========================================================================

    /// Feeds the right value to `function`; `Left` and `Bottom` pass through.
    #[inline]
    pub fn bind<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
            Self::Bottom => Either::Bottom,
        }
    }

    /// Feeds the left value to `function`; `Right` and `Bottom` pass through.
    #[inline]
    pub fn bind_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
            Self::Bottom => Either::Bottom,
        }
    }

    /// Binds whichever value is present with the matching function.
    #[inline]
    pub fn bibind<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> Either<T, U>,
        G: FnOnce(R) -> Either<T, U>,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
            Self::Bottom => Either::Bottom,
        }
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Keeps a right value that satisfies `predicate`; demotes it to
    /// `Bottom` otherwise. `Left` and `Bottom` are unchanged.
    ///
    /// The rejected value is dropped, so check [`Either::is_bottom`] before
    /// relying on `is_left`/`is_right` afterwards.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&R) -> bool,
    {
        match self {
            Self::Right(value) => {
                if predicate(&value) {
                    Self::Right(value)
                } else {
                    tracing::trace!("filter rejected right value; demoting to Bottom");
                    Self::Bottom
                }
            }
            other => other,
        }
    }

    /// Applies the predicate matching the state; a rejected value of either
    /// side becomes `Bottom`.
    pub fn bifilter<P, Q>(self, left_predicate: P, right_predicate: Q) -> Self
    where
        P: FnOnce(&L) -> bool,
        Q: FnOnce(&R) -> bool,
    {
        let keep = match &self {
            Self::Left(value) => left_predicate(value),
            Self::Right(value) => right_predicate(value),
            Self::Bottom => true,
        };
        if keep {
            self
        } else {
            tracing::trace!(state = self.state_name(), "bifilter rejected value; demoting to Bottom");
            Self::Bottom
        }
    }

    // =========================================================================
    // Folding and Predicates
    // =========================================================================

    /// Folds the right value into `state`; `Left` and `Bottom` return
    /// `state` unchanged.
    #[inline]
    pub fn fold<S, F>(self, state: S, folder: F) -> S
    where
        F: FnOnce(S, R) -> S,
    {
        match self {
            Self::Right(value) => folder(state, value),
            _ => state,
        }
    }

    /// Folds whichever value is present; `Bottom` returns `state` unchanged.
    #[inline]
    pub fn bifold<S, F, G>(self, state: S, left_folder: F, right_folder: G) -> S
    where
        F: FnOnce(S, L) -> S,
        G: FnOnce(S, R) -> S,
    {
        match self {
            Self::Left(value) => left_folder(state, value),
            Self::Right(value) => right_folder(state, value),
            Self::Bottom => state,
        }
    }

    /// `predicate` of the right value; vacuously `true` for `Left` and `Bottom`.
    #[inline]
    pub fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        match self {
            Self::Right(value) => predicate(value),
            _ => true,
        }
    }

    /// Applies the predicate matching the state; vacuously `true` for `Bottom`.
    #[inline]
    pub fn bi_for_all<P, Q>(&self, left_predicate: P, right_predicate: Q) -> bool
    where
        P: FnOnce(&L) -> bool,
        Q: FnOnce(&R) -> bool,
    {
        match self {
            Self::Left(value) => left_predicate(value),
            Self::Right(value) => right_predicate(value),
            Self::Bottom => true,
        }
    }

    /// `predicate` of the right value; `false` for `Left` and `Bottom`.
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        match self {
            Self::Right(value) => predicate(value),
            _ => false,
        }
    }

    /// Applies the predicate matching the state; `false` for `Bottom`.
    #[inline]
    pub fn bi_exists<P, Q>(&self, left_predicate: P, right_predicate: Q) -> bool
    where
        P: FnOnce(&L) -> bool,
        Q: FnOnce(&R) -> bool,
    {
        match self {
            Self::Left(value) => left_predicate(value),
            Self::Right(value) => right_predicate(value),
            Self::Bottom => false,
        }
    }

    // =========================================================================
    // Matching
    // =========================================================================

    /// Eliminates the Either with one handler per populated state.
    ///
    /// # Errors
    ///
    /// Returns [`EitherError::Bottom`] when called on `Bottom`, which has no
    /// handler.
    pub fn match_with<T, F, G>(self, left_function: F, right_function: G) -> Result<T, EitherError>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Ok(left_function(value)),
            Self::Right(value) => Ok(right_function(value)),
            Self::Bottom => {
                tracing::debug!("match_with reached a Bottom Either");
                Err(EitherError::Bottom { operation: "match_with" })
            }
        }
    }

    /// Swaps the Left and Right variants; `Bottom` stays `Bottom`.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
            Self::Bottom => Either::Bottom,
        }
    }

    // =========================================================================
    // Applicative Operations
    // =========================================================================

    /// Combines two right values with `function`.
    ///
    /// The operands are inspected left to right and the first one that is
    /// not `Right` is returned, so `function` only runs on two right values.
    pub fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            (Self::Left(value), _) | (Self::Right(_), Either::Left(value)) => Either::Left(value),
            (Self::Bottom, _) | (Self::Right(_), Either::Bottom) => Either::Bottom,
        }
    }

    /// Partially applies a two-argument function to the right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faultline::control::Either;
    ///
    /// let add = Either::<String, i32>::Right(2).par_map(|x, y: i32| x + y);
    /// assert_eq!(add.apply(Either::Right(3)), Either::Right(5));
    /// ```
    pub fn par_map<B, C, F>(self, function: F) -> Either<L, impl FnOnce(B) -> C>
    where
        F: FnOnce(R, B) -> C,
    {
        self.map(move |a| move |b| function(a, b))
    }
}

impl<L, F> Either<L, F> {
    /// Applies the right-held function to the right value of `other`.
    pub fn apply<B, Output>(self, other: Either<L, B>) -> Either<L, Output>
    where
        F: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}

impl<L: Default, R> Either<L, R> {
    /// Returns the left value, or `L::default()`.
    #[inline]
    pub fn left_or_default(self) -> L {
        self.left().unwrap_or_default()
    }
}

impl<L, R: Default> Either<L, R> {
    /// Returns the right value, or `R::default()`.
    #[inline]
    pub fn right_or_default(self) -> R {
        self.right().unwrap_or_default()
    }
}

// =============================================================================
// Sequence Operations
// =============================================================================

/// Lazily yields the left values in input order, skipping `Right` and `Bottom`.
pub fn lefts<L, R, I>(eithers: I) -> impl Iterator<Item = L>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    eithers.into_iter().filter_map(Either::left)
}

/// Lazily yields the right values in input order, skipping `Left` and `Bottom`.
pub fn rights<L, R, I>(eithers: I) -> impl Iterator<Item = R>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    eithers.into_iter().filter_map(Either::right)
}

/// Splits into left values and right values, each in input order.
/// `Bottom` entries are dropped.
///
/// Unlike [`lefts`] and [`rights`], this consumes the whole input before
/// returning, since both halves are produced in one pass. Use the lazy pair
/// when only one side is needed or the input is unbounded.
///
/// ```rust
/// use faultline::control::{Either, partition, rights};
///
/// let values = vec![Either::Right(1), Either::Left("a"), Either::Bottom, Either::Right(2)];
/// let (lefts, rights_only) = partition(values);
/// assert_eq!((lefts, rights_only), (vec!["a"], vec![1, 2]));
///
/// let endless = (0..).map(|n| if n % 2 == 0 { Either::Right(n) } else { Either::Left(n) });
/// assert_eq!(rights::<i32, i32, _>(endless).take(3).collect::<Vec<_>>(), vec![0, 2, 4]);
/// ```
pub fn partition<L, R, I>(eithers: I) -> (Vec<L>, Vec<R>)
where
    I: IntoIterator<Item = Either<L, R>>,
{
    eithers
        .into_iter()
        .fold((Vec::new(), Vec::new()), |(mut lefts, mut rights), either| {
            match either {
                Either::Left(value) => lefts.push(value),
                Either::Right(value) => rights.push(value),
                Either::Bottom => {}
            }
            (lefts, rights)
        })
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<L, R> Default for Either<L, R> {
    /// The default Either is `Bottom`.
    #[inline]
    fn default() -> Self {
        Self::Bottom
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
            Self::Bottom => formatter.write_str("Bottom"),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> TryFrom<Either<L, R>> for Result<R, L> {
    type Error = EitherError;

    /// `Right(r)` becomes `Ok(r)` and `Left(l)` becomes `Err(l)`.
    ///
    /// # Errors
    ///
    /// `Bottom` has no `Result` counterpart and yields [`EitherError::Bottom`].
    fn try_from(either: Either<L, R>) -> Result<Self, Self::Error> {
        match either {
            Either::Left(value) => Ok(Err(value)),
            Either::Right(value) => Ok(Ok(value)),
            Either::Bottom => Err(EitherError::Bottom { operation: "try_from" }),
        }
    }
}

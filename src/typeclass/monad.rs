//! Monad type class - sequencing computations within a context.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use faultline::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Option<i32> {
//!     s.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = Some("42").flat_map(parse_positive).flat_map(|n| Some(n * 2));
//! assert_eq!(result, Some(84));
//! ```

use super::applicative::Applicative;

/// A type class for sequencing dependent computations.
pub trait Monad: Applicative {
    /// Feeds the held value to `function` and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after `self`, discarding the value of `self`.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: 'static,
        B: 'static,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        Self::and_then(self, function)
    }
}

impl<T, E: Clone> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        Self::and_then(self, function)
    }
}

#[cfg(feature = "control")]
impl<L: Clone, R> Monad for crate::control::Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> crate::control::Either<L, B>
    where
        F: FnOnce(R) -> crate::control::Either<L, B>,
    {
        self.bind(function)
    }
}

#[cfg(feature = "control")]
impl<T: 'static> Monad for crate::control::Try<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> crate::control::Try<B>
    where
        F: FnOnce(T) -> crate::control::Try<B> + 'static,
        B: 'static,
    {
        self.bind(function)
    }
}

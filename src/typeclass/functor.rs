//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! For `Either` the function only sees `Right` values; `Left` and `Bottom`
//! pass through untouched. For `Try` the mapping is deferred until the
//! result is inspected.
//!
//! # Examples
//!
//! ```rust
//! use faultline::typeclass::Functor;
//!
//! let transformed: Option<String> = Some(5).fmap(|n| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//! ```

use super::higher::TypeConstructor;

/// A type class for containers that can be mapped over.
///
/// The `'static` bounds on `fmap` allow deferred containers such as `Try`
/// to keep the function until evaluation.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the held value.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + 'static,
        B: 'static;

    /// Applies `function` to a reference to the held value.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the held value with `value`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: 'static,
    {
        self.fmap(|_| value)
    }

    /// Discards the held value.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T, E: Clone> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Result<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Ok(value) => Ok(function(value)),
            Err(error) => Err(error.clone()),
        }
    }
}

#[cfg(feature = "control")]
impl<L: Clone, R> Functor for crate::control::Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> crate::control::Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> crate::control::Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        use crate::control::Either;

        match self {
            Either::Left(value) => Either::Left(value.clone()),
            Either::Right(value) => Either::Right(function(value)),
            Either::Bottom => Either::Bottom,
        }
    }
}

#[cfg(feature = "control")]
impl<T: 'static> Functor for crate::control::Try<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> crate::control::Try<B>
    where
        F: FnOnce(T) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }

    fn fmap_ref<B, F>(&self, function: F) -> crate::control::Try<B>
    where
        F: FnOnce(&T) -> B + 'static,
        B: 'static,
    {
        self.map_ref(function)
    }
}

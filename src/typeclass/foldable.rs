//! Foldable type class - folding over data structures.
//!
//! The single-value containers of this crate fold over at most one element:
//! a `Right` value of an `Either` or the success value of a `Try`. `Left`,
//! `Bottom` and failures fold to the initial state unchanged.
//!
//! # Examples
//!
//! ```rust
//! use faultline::typeclass::Foldable;
//!
//! let sum = vec![1, 2, 3, 4, 5].fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 15);
//!
//! let none_value: Option<i32> = None;
//! assert_eq!(none_value.fold_left(5, |accumulator, element| accumulator + element), 5);
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// A type class for structures that can be reduced to a summary value.
pub trait Foldable: TypeConstructor {
    /// Folds from the left.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from the right.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps every element into a monoid and combines the results.
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns `true` if there is nothing to fold.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects the elements into a `Vec`.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns the first element satisfying `predicate`.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Some(element)
            } else {
                None
            }
        })
    }

    /// Returns `true` if any element satisfies `predicate`.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_some()
    }

    /// Returns `true` if every element satisfies `predicate`, vacuously so
    /// when there are none.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(element) => function(init, element),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(element) => function(element, init),
            None => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}

impl<T, E> Foldable for Result<T, E> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Ok(element) => function(init, element),
            Err(_) => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Ok(element) => function(element, init),
            Err(_) => init,
        }
    }
}

impl<T> Foldable for Vec<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn to_list(self) -> Self {
        self
    }
}

#[cfg(feature = "control")]
impl<L, R> Foldable for crate::control::Either<L, R> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, R) -> B,
    {
        self.fold(init, |state, value| function(state, value))
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(R, B) -> B,
    {
        self.fold(init, |state, value| function(value, state))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        !self.is_right()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_right())
    }
}

#[cfg(feature = "control")]
impl<T> Foldable for crate::control::Try<T> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.fold(init, |state, value| function(state, value))
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.fold(init, |state, value| function(value, state))
    }
}

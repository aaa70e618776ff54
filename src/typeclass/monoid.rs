//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! T::empty().combine(a) == a
//! a.combine(T::empty()) == a
//! ```
//!
//! `Foldable::fold_map` starts from `Monoid::empty`, which is how an empty
//! `Either` (Left or Bottom) or a failed `Try` folds to the identity.
//!
//! # Examples
//!
//! ```rust
//! use faultline::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//! assert_eq!(Vec::<i32>::combine_all(vec![vec![1], vec![2, 3]]), vec![1, 2, 3]);
//! ```

use super::semigroup::Semigroup;

/// A semigroup with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines every element of the iterator, starting from `empty()`.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| accumulator.combine(element))
    }
}

impl Monoid for String {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Clone> Monoid for Vec<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    #[inline]
    fn empty() -> Self {
        None
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

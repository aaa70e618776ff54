//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! `Semigroup` is also what the [`Combine`](super::Combine) arithmetic
//! strategy delegates to, so any semigroup can be added inside an `Either`
//! or a `Try`.
//!
//! # Examples
//!
//! ```rust
//! use faultline::typeclass::Semigroup;
//!
//! let hello = String::from("Hello, ");
//! assert_eq!(hello.combine(String::from("World!")), "Hello, World!");
//!
//! assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
//! ```

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference.
    ///
    /// The default implementation clones both values and calls `combine`.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements in an iterator, returning `None` when it is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use faultline::typeclass::Semigroup;
    ///
    /// let strings = vec![String::from("a"), String::from("b")];
    /// assert_eq!(String::reduce_all(strings), Some(String::from("ab")));
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `None` is the identity; two `Some` values combine their contents.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

/// The first error wins.
impl<T: Semigroup, E> Semigroup for Result<T, E> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Ok(left), Ok(right)) => Ok(left.combine(right)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

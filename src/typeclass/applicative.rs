//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends `Functor` with:
//!
//! - lifting a plain value into the context (`pure`)
//! - combining independent contexts with a function (`map2`, `map3`)
//! - applying a function held in a context to a value held in another
//!   (`apply`), which together with partial application (`par_map` on
//!   `Either` and `Try`) covers functions of any arity
//!
//! # Laws
//!
//! ```text
//! pure(|x| x).apply(v) == v                      // identity
//! pure(f).apply(pure(x)) == pure(f(x))           // homomorphism
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)    // interchange
//! ```
//!
//! # Examples
//!
//! ```rust
//! use faultline::typeclass::Applicative;
//!
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! assert_eq!(Some(1).map2(Some(2), |x, y| x + y), Some(3));
//! assert_eq!(Some(1).product(Some("a")), Some((1, "a")));
//! ```

use super::functor::Functor;

/// A type class for functors that can combine independent values.
pub trait Applicative: Functor {
    /// Lifts a plain value into the context.
    fn pure<B>(value: B) -> Self::WithType<B>
    where
        B: 'static;

    /// Combines two contexts with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C + 'static,
        B: 'static,
        C: 'static;

    /// Combines three contexts with a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D + 'static,
        B: 'static,
        C: 'static,
        D: 'static;

    /// Pairs the values of two contexts.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
        Self::Inner: 'static,
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Keeps the left value once both contexts hold one.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
        Self::Inner: 'static,
        B: 'static,
    {
        self.map2(other, |a, _| a)
    }

    /// Keeps the right value once both contexts hold one.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        B: 'static,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies the function held by `self` to the value held by `other`.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output,
        B: 'static,
        Output: 'static;
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Some(function(self?, other?))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Some(function(self?, second?, third?))
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Some(self?(other?))
    }
}

impl<T, E: Clone> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        Ok(function(self?, other?))
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Result<B, E>,
        third: Result<C, E>,
        function: F,
    ) -> Result<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        Ok(function(self?, second?, third?))
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B, E>) -> Result<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        Ok(self?(other?))
    }
}

#[cfg(feature = "control")]
impl<L: Clone, R> Applicative for crate::control::Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> crate::control::Either<L, B> {
        crate::control::Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(
        self,
        other: crate::control::Either<L, B>,
        function: F,
    ) -> crate::control::Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        crate::control::Either::map2(self, other, function)
    }

    fn map3<B, C, D, F>(
        self,
        second: crate::control::Either<L, B>,
        third: crate::control::Either<L, C>,
        function: F,
    ) -> crate::control::Either<L, D>
    where
        F: FnOnce(R, B, C) -> D,
    {
        crate::control::Either::map2(self, second, |a, b| (a, b))
            .map2(third, |(a, b), c| function(a, b, c))
    }

    #[inline]
    fn apply<B, Output>(self, other: crate::control::Either<L, B>) -> crate::control::Either<L, Output>
    where
        R: FnOnce(B) -> Output,
    {
        crate::control::Either::apply(self, other)
    }
}

#[cfg(feature = "control")]
impl<T: 'static> Applicative for crate::control::Try<T> {
    #[inline]
    fn pure<B>(value: B) -> crate::control::Try<B>
    where
        B: 'static,
    {
        crate::control::Try::success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: crate::control::Try<B>, function: F) -> crate::control::Try<C>
    where
        F: FnOnce(T, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        crate::control::Try::map2(self, other, function)
    }

    fn map3<B, C, D, F>(
        self,
        second: crate::control::Try<B>,
        third: crate::control::Try<C>,
        function: F,
    ) -> crate::control::Try<D>
    where
        F: FnOnce(T, B, C) -> D + 'static,
        B: 'static,
        C: 'static,
        D: 'static,
    {
        crate::control::Try::map2(self, second, |a, b| (a, b))
            .map2(third, move |(a, b), c| function(a, b, c))
    }

    #[inline]
    fn apply<B, Output>(self, other: crate::control::Try<B>) -> crate::control::Try<Output>
    where
        T: FnOnce(B) -> Output,
        B: 'static,
        Output: 'static,
    {
        crate::control::Try::apply(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_map3_requires_all_values() {
        assert_eq!(Some(1).map3(Some(2), Some(3), |a, b, c| a + b + c), Some(6));
        assert_eq!(Some(1).map3(None, Some(3), |a, b: i32, c| a + b + c), None);
    }

    #[rstest]
    fn result_map2_returns_first_error() {
        let left: Result<i32, &str> = Err("left");
        let right: Result<i32, &str> = Err("right");
        assert_eq!(left.map2(right, |a, b| a + b), Err("left"));
    }

    #[rstest]
    fn option_apply_identity_law() {
        let identity: Option<fn(i32) -> i32> = Some(|x| x);
        assert_eq!(identity.apply(Some(7)), Some(7));
    }

    #[cfg(feature = "control")]
    #[rstest]
    fn either_map3_short_circuits_on_first_left() {
        use crate::control::Either;

        let a: Either<&str, i32> = Either::Right(1);
        let b: Either<&str, i32> = Either::Left("second");
        let c: Either<&str, i32> = Either::Left("third");

        assert_eq!(a.map3(b, c, |x, y, z| x + y + z), Either::Left("second"));
    }

    #[cfg(feature = "control")]
    #[rstest]
    fn try_pure_is_success() {
        use crate::control::Try;

        let value: Try<i32> = <Try<()>>::pure(3);
        assert_eq!(value.into_result().ok(), Some(3));
    }
}

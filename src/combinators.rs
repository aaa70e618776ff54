//! Free-function combinators over `Either` and `Try`.
//!
//! Every function here forwards to a type-class trait or to an inherent
//! method, so a pipeline can be written in prefix form without naming the
//! container type:
//!
//! - [`map`], [`bind`], [`apply`], [`map2`]: [`Functor`], [`Monad`] and
//!   [`Applicative`] for any implementor
//! - [`bimap`]: [`Bifunctor`]
//! - [`fold`]: [`Foldable`]
//! - [`exists`], [`for_all`], [`filter`]: the [`Inspect`] and [`Filter`]
//!   traits implemented by `Either` and `Try`
//! - [`add`], [`difference`], [`product`], [`divide`]: [`Arithmetic`] with an
//!   explicit strategy
//! - `Either` only: [`bifilter`], [`bifold`], [`bi_exists`], [`bi_for_all`],
//!   [`match_either`], [`if_left`], [`lefts`], [`rights`], [`partition`]
//! - `Try` only: [`flatten`], [`match_try`], [`if_fail`]
//!
//! # Examples
//!
//! ```rust
//! use faultline::combinators::{bind, filter, map, match_try};
//! use faultline::control::Try;
//!
//! let parsed = Try::new(|| "12".parse::<i32>());
//! let checked = filter(map(parsed, |n| n * 2), |n| *n > 20);
//! let halved = bind(checked, |n| Try::success(n / 2));
//!
//! assert_eq!(match_try(halved, |_| -1, |n| n), 12);
//! ```

use crate::control::{Either, EitherError, Fault, Try};
use crate::typeclass::{
    Add, Applicative, Arithmetic, Bifunctor, Difference, Divisible, Foldable, Functor, Monad,
    Product, TypeConstructor,
};

pub use crate::control::{lefts, partition, rights};

// =============================================================================
// Supporting Traits
// =============================================================================

/// Containers whose held value can be tested without consuming them.
///
/// Absent values (`Left`, `Bottom`, a failed `Try`) make [`Inspect::exists`]
/// `false` and [`Inspect::for_all`] vacuously `true`.
pub trait Inspect: TypeConstructor {
    /// Returns `true` if a value is held and satisfies `predicate`.
    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&Self::Inner) -> bool;

    /// Returns `true` unless a held value fails `predicate`.
    fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&Self::Inner) -> bool;
}

/// Containers that can discard a held value rejected by a predicate.
///
/// The predicate type is a trait parameter so each container states its own
/// bound: `Either` filters eagerly and accepts borrowing closures, while
/// `Try` stores the predicate and requires `'static`.
pub trait Filter<P>: TypeConstructor + Sized {
    /// Keeps the held value if it satisfies `predicate`.
    fn filter(self, predicate: P) -> Self;
}

impl<L, R> Inspect for Either<L, R> {
    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        Either::exists(self, predicate)
    }

    fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        Either::for_all(self, predicate)
    }
}

impl<T> Inspect for Try<T> {
    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        Try::exists(self, predicate)
    }

    fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        Try::for_all(self, predicate)
    }
}

impl<L, R, P> Filter<P> for Either<L, R>
where
    P: FnOnce(&R) -> bool,
{
    fn filter(self, predicate: P) -> Self {
        Either::filter(self, predicate)
    }
}

impl<T, P> Filter<P> for Try<T>
where
    T: 'static,
    P: FnOnce(&T) -> bool + 'static,
{
    fn filter(self, predicate: P) -> Self {
        Try::filter(self, predicate)
    }
}

// =============================================================================
// Type-Class Forwards
// =============================================================================

/// Maps the held value. See [`Functor::fmap`].
#[inline]
pub fn map<C, B, F>(container: C, function: F) -> C::WithType<B>
where
    C: Functor,
    F: FnOnce(C::Inner) -> B + 'static,
    B: 'static,
{
    container.fmap(function)
}

/// Sequences a dependent computation. See [`Monad::flat_map`].
#[inline]
pub fn bind<C, B, F>(container: C, function: F) -> C::WithType<B>
where
    C: Monad,
    F: FnOnce(C::Inner) -> C::WithType<B> + 'static,
    B: 'static,
{
    container.flat_map(function)
}

/// Applies a held function to a held value. See [`Applicative::apply`].
///
/// ```rust
/// use faultline::combinators::apply;
/// use faultline::control::Either;
///
/// let function: Either<String, fn(i32) -> i32> = Either::Right(|x| x + 1);
/// assert_eq!(apply(function, Either::Right(1)), Either::Right(2));
/// ```
#[inline]
pub fn apply<C, B, Output>(function: C, value: C::WithType<B>) -> C::WithType<Output>
where
    C: Applicative,
    C::Inner: FnOnce(B) -> Output,
    B: 'static,
    Output: 'static,
{
    function.apply(value)
}

/// Combines two held values. See [`Applicative::map2`].
#[inline]
pub fn map2<C, B, D, F>(first: C, second: C::WithType<B>, function: F) -> C::WithType<D>
where
    C: Applicative,
    F: FnOnce(C::Inner, B) -> D + 'static,
    B: 'static,
    D: 'static,
{
    first.map2(second, function)
}

/// Maps both sides. See [`Bifunctor::bimap`].
#[inline]
pub fn bimap<T, A, B, C, D, F, G>(container: T, first_function: F, second_function: G) -> T::Target<C, D>
where
    T: Bifunctor<A, B>,
    F: FnOnce(A) -> C,
    G: FnOnce(B) -> D,
{
    container.bimap(first_function, second_function)
}

/// Folds the held value into `init`. See [`Foldable::fold_left`].
#[inline]
pub fn fold<C, S, F>(container: C, init: S, folder: F) -> S
where
    C: Foldable,
    F: FnMut(S, C::Inner) -> S,
{
    container.fold_left(init, folder)
}

/// See [`Inspect::exists`].
#[inline]
pub fn exists<C, P>(container: &C, predicate: P) -> bool
where
    C: Inspect,
    P: FnOnce(&C::Inner) -> bool,
{
    container.exists(predicate)
}

/// See [`Inspect::for_all`].
#[inline]
pub fn for_all<C, P>(container: &C, predicate: P) -> bool
where
    C: Inspect,
    P: FnOnce(&C::Inner) -> bool,
{
    container.for_all(predicate)
}

/// See [`Filter::filter`].
#[inline]
pub fn filter<C, P>(container: C, predicate: P) -> C
where
    C: Filter<P>,
    P: FnOnce(&C::Inner) -> bool,
{
    container.filter(predicate)
}

// =============================================================================
// Arithmetic
// =============================================================================

/// Adds two held values with strategy `S`.
///
/// ```rust
/// use faultline::combinators::add;
/// use faultline::control::Either;
/// use faultline::typeclass::Num;
///
/// let total = add::<Num, _>(Either::<String, i32>::Right(2), Either::Right(3));
/// assert_eq!(total, Either::Right(5));
/// ```
#[inline]
pub fn add<S, C>(first: C, second: C) -> C
where
    C: Arithmetic,
    S: Add<C::Inner> + 'static,
{
    first.add::<S>(second)
}

/// Subtracts the second held value from the first with strategy `S`.
#[inline]
pub fn difference<S, C>(first: C, second: C) -> C
where
    C: Arithmetic,
    S: Difference<C::Inner> + 'static,
{
    first.difference::<S>(second)
}

/// Multiplies two held values with strategy `S`.
#[inline]
pub fn product<S, C>(first: C, second: C) -> C
where
    C: Arithmetic,
    S: Product<C::Inner> + 'static,
{
    first.product::<S>(second)
}

/// Divides the first held value by the second with strategy `S`.
#[inline]
pub fn divide<S, C>(first: C, second: C) -> C
where
    C: Arithmetic,
    S: Divisible<C::Inner> + 'static,
{
    first.divide::<S>(second)
}

// =============================================================================
// Either
// =============================================================================

/// See [`Either::bifilter`].
#[inline]
pub fn bifilter<L, R, P, Q>(either: Either<L, R>, left_predicate: P, right_predicate: Q) -> Either<L, R>
where
    P: FnOnce(&L) -> bool,
    Q: FnOnce(&R) -> bool,
{
    either.bifilter(left_predicate, right_predicate)
}

/// See [`Either::bifold`].
#[inline]
pub fn bifold<L, R, S, F, G>(either: Either<L, R>, state: S, left_folder: F, right_folder: G) -> S
where
    F: FnOnce(S, L) -> S,
    G: FnOnce(S, R) -> S,
{
    either.bifold(state, left_folder, right_folder)
}

/// See [`Either::bi_exists`].
#[inline]
pub fn bi_exists<L, R, P, Q>(either: &Either<L, R>, left_predicate: P, right_predicate: Q) -> bool
where
    P: FnOnce(&L) -> bool,
    Q: FnOnce(&R) -> bool,
{
    either.bi_exists(left_predicate, right_predicate)
}

/// See [`Either::bi_for_all`].
#[inline]
pub fn bi_for_all<L, R, P, Q>(either: &Either<L, R>, left_predicate: P, right_predicate: Q) -> bool
where
    P: FnOnce(&L) -> bool,
    Q: FnOnce(&R) -> bool,
{
    either.bi_for_all(left_predicate, right_predicate)
}

/// See [`Either::match_with`].
///
/// # Errors
///
/// Returns [`EitherError::Bottom`] for a `Bottom` value.
#[inline]
pub fn match_either<L, R, T, F, G>(either: Either<L, R>, on_left: F, on_right: G) -> Result<T, EitherError>
where
    F: FnOnce(L) -> T,
    G: FnOnce(R) -> T,
{
    either.match_with(on_left, on_right)
}

/// See [`Either::if_left`].
///
/// # Errors
///
/// Returns [`EitherError::Bottom`] for a `Bottom` value.
#[inline]
pub fn if_left<L, R, F>(either: Either<L, R>, function: F) -> Result<R, EitherError>
where
    F: FnOnce(L) -> R,
{
    either.if_left(function)
}

// =============================================================================
// Try
// =============================================================================

/// See [`Try::flatten`].
#[inline]
pub fn flatten<T: 'static>(nested: Try<Try<T>>) -> Try<T> {
    nested.flatten()
}

/// See [`Try::match_with`].
#[inline]
pub fn match_try<T, R, F, G>(attempt: Try<T>, on_fault: F, on_success: G) -> R
where
    F: FnOnce(Fault) -> R,
    G: FnOnce(T) -> R,
{
    attempt.match_with(on_fault, on_success)
}

/// See [`Try::if_fail`].
#[inline]
pub fn if_fail<T>(attempt: Try<T>, fallback: T) -> T {
    attempt.if_fail(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Num, Set};
    use rstest::rstest;
    use std::collections::BTreeSet;

    #[rstest]
    fn map_and_bind_work_for_option_too() {
        assert_eq!(map(Some(2), |x| x + 1), Some(3));
        assert_eq!(bind(Some(2), |x| if x > 1 { Some(x) } else { None }), Some(2));
    }

    #[rstest]
    #[case(Either::Right(4), true, true)]
    #[case(Either::Right(1), false, false)]
    #[case(Either::Left("no"), false, true)]
    #[case(Either::Bottom, false, true)]
    fn exists_and_for_all_on_either(
        #[case] either: Either<&'static str, i32>,
        #[case] expected_exists: bool,
        #[case] expected_for_all: bool,
    ) {
        assert_eq!(exists(&either, |x| *x > 2), expected_exists);
        assert_eq!(for_all(&either, |x| *x > 2), expected_for_all);
    }

    #[rstest]
    fn filter_is_generic_over_containers() {
        let either: Either<String, i32> = filter(Either::Right(1), |x| *x > 5);
        assert!(either.is_bottom());

        let attempt = filter(Try::success(1), |x| *x > 5);
        assert!(attempt.run().unwrap_err().is_filter_rejected());
    }

    #[rstest]
    #[case(Either::Right(7), Either::Right(7))]
    #[case(Either::Right(3), Either::Bottom)]
    #[case(Either::Left("low"), Either::Left("low"))]
    fn filter_either_accepts_borrowing_predicate(
        #[case] input: Either<&'static str, i32>,
        #[case] expected: Either<&'static str, i32>,
    ) {
        let threshold = 5;
        let limit = &threshold;
        let kept = filter(input, |value| value > limit);
        assert_eq!(kept, expected);
    }

    #[rstest]
    fn set_product_through_try() {
        let first = Try::success(BTreeSet::from([1, 2, 3]));
        let second = Try::success(BTreeSet::from([2, 3, 4]));
        let shared = product::<Set, _>(first, second);
        assert_eq!(shared.run().ok(), Some(BTreeSet::from([2, 3])));
    }

    #[rstest]
    fn divide_by_zero_in_try_is_captured() {
        let quotient = divide::<Num, _>(Try::success(1), Try::success(0));
        assert!(quotient.run().unwrap_err().is_panic());
    }

    #[rstest]
    fn match_either_reports_bottom() {
        let bottom: Either<i32, i32> = Either::Bottom;
        assert_eq!(
            match_either(bottom, |l| l, |r| r),
            Err(EitherError::Bottom { operation: "match_with" })
        );
    }
}

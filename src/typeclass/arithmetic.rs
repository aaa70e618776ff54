//! Arithmetic type classes - pluggable strategies for combining two values.
//!
//! Four capabilities are defined over a value type `A`, each a pure
//! `(A, A) -> A` function:
//!
//! - [`Add`]
//! - [`Difference`]
//! - [`Product`]
//! - [`Divisible`]
//!
//! A capability is implemented by a zero-sized *strategy* type rather than
//! by `A` itself, so one value type can be combined in more than one way and
//! each call site names the way it wants with a turbofish. Containers reach
//! the strategies through [`Arithmetic`], which unwraps both operands first
//! and only calls the strategy when both hold a value.
//!
//! # Bundled Strategies
//!
//! | Strategy    | Values                     | add          | difference          | product        | divide |
//! |-------------|----------------------------|--------------|---------------------|----------------|--------|
//! | [`Num`]     | `std::ops` operands        | `+`          | `-`                 | `*`            | `/`    |
//! | [`Seq`]     | `Vec<T>`, `String`         | concatenate  | remove occurrences  | -              | -      |
//! | [`Set`]     | `BTreeSet<T>`, `HashSet<T>`| union        | set difference      | intersection   | -      |
//! | [`Combine`] | any `Semigroup`            | `combine`    | -                   | -              | -      |
//!
//! # Examples
//!
//! ```rust
//! use faultline::typeclass::{Arithmetic, Num, Seq};
//!
//! assert_eq!(Some(2).add::<Num>(Some(3)), Some(5));
//! assert_eq!(Some(2).add::<Num>(None), None);
//!
//! let remaining = Some(vec![1, 2, 3, 2]).difference::<Seq>(Some(vec![2]));
//! assert_eq!(remaining, Some(vec![1, 3]));
//! ```

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

use super::higher::TypeConstructor;
use super::semigroup::Semigroup;

/// Addition-like combination of two values.
pub trait Add<A> {
    /// Combines `x` and `y`.
    fn add(x: A, y: A) -> A;
}

/// Subtraction-like combination of two values.
///
/// For sequence and set strategies this removes elements rather than
/// subtracting scalars.
pub trait Difference<A> {
    /// Removes `y` from `x`.
    fn difference(x: A, y: A) -> A;
}

/// Multiplication-like combination of two values.
pub trait Product<A> {
    /// Multiplies `x` by `y`.
    fn product(x: A, y: A) -> A;
}

/// Division-like combination of two values.
pub trait Divisible<A> {
    /// Divides `x` by `y`.
    fn divide(x: A, y: A) -> A;
}

/// Strategy for values with the standard arithmetic operators.
///
/// Integer division by zero panics exactly as `/` does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Num;

/// Strategy for ordered sequences (`Vec<T>`, `String`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Seq;

/// Strategy for sets (`BTreeSet<T>`, `HashSet<T>`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Set;

/// Strategy that adds any [`Semigroup`] with `combine`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Combine;

macro_rules! operator_strategy {
    ($capability:ident, $method:ident, $operator:ident) => {
        paste::paste! {
            impl<A: std::ops::$operator<Output = A>> $capability<A> for Num {
                #[inline]
                fn $method(x: A, y: A) -> A {
                    std::ops::$operator::[<$operator:lower>](x, y)
                }
            }
        }
    };
}

operator_strategy!(Add, add, Add);
operator_strategy!(Difference, difference, Sub);
operator_strategy!(Product, product, Mul);
operator_strategy!(Divisible, divide, Div);

impl<T> Add<Vec<T>> for Seq {
    fn add(mut x: Vec<T>, mut y: Vec<T>) -> Vec<T> {
        x.append(&mut y);
        x
    }
}

impl<T: PartialEq> Difference<Vec<T>> for Seq {
    fn difference(mut x: Vec<T>, y: Vec<T>) -> Vec<T> {
        x.retain(|element| !y.contains(element));
        x
    }
}

impl Add<String> for Seq {
    fn add(mut x: String, y: String) -> String {
        x.push_str(&y);
        x
    }
}

impl Difference<String> for Seq {
    fn difference(x: String, y: String) -> String {
        x.chars().filter(|character| !y.contains(*character)).collect()
    }
}

impl<T: Ord> Add<BTreeSet<T>> for Set {
    fn add(mut x: BTreeSet<T>, y: BTreeSet<T>) -> BTreeSet<T> {
        x.extend(y);
        x
    }
}

impl<T: Ord> Difference<BTreeSet<T>> for Set {
    fn difference(mut x: BTreeSet<T>, y: BTreeSet<T>) -> BTreeSet<T> {
        x.retain(|element| !y.contains(element));
        x
    }
}

impl<T: Ord> Product<BTreeSet<T>> for Set {
    fn product(mut x: BTreeSet<T>, y: BTreeSet<T>) -> BTreeSet<T> {
        x.retain(|element| y.contains(element));
        x
    }
}

impl<T: Eq + Hash, S: BuildHasher> Add<HashSet<T, S>> for Set {
    fn add(mut x: HashSet<T, S>, y: HashSet<T, S>) -> HashSet<T, S> {
        x.extend(y);
        x
    }
}

impl<T: Eq + Hash, S: BuildHasher> Difference<HashSet<T, S>> for Set {
    fn difference(mut x: HashSet<T, S>, y: HashSet<T, S>) -> HashSet<T, S> {
        x.retain(|element| !y.contains(element));
        x
    }
}

impl<T: Eq + Hash, S: BuildHasher> Product<HashSet<T, S>> for Set {
    fn product(mut x: HashSet<T, S>, y: HashSet<T, S>) -> HashSet<T, S> {
        x.retain(|element| y.contains(element));
        x
    }
}

impl<A: Semigroup> Add<A> for Combine {
    #[inline]
    fn add(x: A, y: A) -> A {
        x.combine(y)
    }
}

/// Containers whose held values can be combined with an arithmetic strategy.
///
/// Implementations evaluate the left operand before the right one. When
/// either operand holds no value the first such operand is returned as-is
/// and the strategy is never called.
pub trait Arithmetic: TypeConstructor + Sized {
    /// Adds the held values with strategy `S`.
    fn add<S: Add<Self::Inner> + 'static>(self, other: Self) -> Self;

    /// Takes the difference of the held values with strategy `S`.
    fn difference<S: Difference<Self::Inner> + 'static>(self, other: Self) -> Self;

    /// Multiplies the held values with strategy `S`.
    fn product<S: Product<Self::Inner> + 'static>(self, other: Self) -> Self;

    /// Divides the held values with strategy `S`.
    fn divide<S: Divisible<Self::Inner> + 'static>(self, other: Self) -> Self;
}

impl<A> Arithmetic for Option<A> {
    fn add<S: Add<A> + 'static>(self, other: Self) -> Self {
        Some(S::add(self?, other?))
    }

    fn difference<S: Difference<A> + 'static>(self, other: Self) -> Self {
        Some(S::difference(self?, other?))
    }

    fn product<S: Product<A> + 'static>(self, other: Self) -> Self {
        Some(S::product(self?, other?))
    }

    fn divide<S: Divisible<A> + 'static>(self, other: Self) -> Self {
        Some(S::divide(self?, other?))
    }
}

impl<T, E> Arithmetic for Result<T, E> {
    fn add<S: Add<T> + 'static>(self, other: Self) -> Self {
        Ok(S::add(self?, other?))
    }

    fn difference<S: Difference<T> + 'static>(self, other: Self) -> Self {
        Ok(S::difference(self?, other?))
    }

    fn product<S: Product<T> + 'static>(self, other: Self) -> Self {
        Ok(S::product(self?, other?))
    }

    fn divide<S: Divisible<T> + 'static>(self, other: Self) -> Self {
        Ok(S::divide(self?, other?))
    }
}

#[cfg(feature = "control")]
impl<L, R> Arithmetic for crate::control::Either<L, R> {
    fn add<S: Add<R> + 'static>(self, other: Self) -> Self {
        self.map2(other, S::add)
    }

    fn difference<S: Difference<R> + 'static>(self, other: Self) -> Self {
        self.map2(other, S::difference)
    }

    fn product<S: Product<R> + 'static>(self, other: Self) -> Self {
        self.map2(other, S::product)
    }

    fn divide<S: Divisible<R> + 'static>(self, other: Self) -> Self {
        self.map2(other, S::divide)
    }
}

#[cfg(feature = "control")]
impl<T: 'static> Arithmetic for crate::control::Try<T> {
    fn add<S: Add<T> + 'static>(self, other: Self) -> Self {
        self.map2(other, S::add)
    }

    fn difference<S: Difference<T> + 'static>(self, other: Self) -> Self {
        self.map2(other, S::difference)
    }

    fn product<S: Product<T> + 'static>(self, other: Self) -> Self {
        self.map2(other, S::product)
    }

    fn divide<S: Divisible<T> + 'static>(self, other: Self) -> Self {
        self.map2(other, S::divide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::BTreeSet;

    #[rstest]
    #[case(7, 3, 10, 4, 21, 2)]
    #[case(-4, 2, -2, -6, -8, -2)]
    fn num_applies_the_operators(
        #[case] x: i64,
        #[case] y: i64,
        #[case] sum: i64,
        #[case] difference: i64,
        #[case] product: i64,
        #[case] quotient: i64,
    ) {
        assert_eq!(<Num as Add<i64>>::add(x, y), sum);
        assert_eq!(<Num as Difference<i64>>::difference(x, y), difference);
        assert_eq!(<Num as Product<i64>>::product(x, y), product);
        assert_eq!(<Num as Divisible<i64>>::divide(x, y), quotient);
    }

    #[rstest]
    fn num_works_for_floats() {
        assert!((<Num as Divisible<f64>>::divide(1.0, 4.0) - 0.25).abs() < f64::EPSILON);
    }

    #[rstest]
    fn seq_difference_removes_elements_in_order() {
        let result = <Seq as Difference<Vec<i32>>>::difference(vec![5, 1, 5, 2, 3], vec![5, 3]);
        assert_eq!(result, vec![1, 2]);
    }

    #[rstest]
    fn seq_string_add_and_difference() {
        assert_eq!(
            <Seq as Add<String>>::add("foo".to_string(), "bar".to_string()),
            "foobar"
        );
        assert_eq!(
            <Seq as Difference<String>>::difference("banana".to_string(), "a".to_string()),
            "bnn"
        );
    }

    #[rstest]
    fn set_operations_follow_set_algebra() {
        let x: BTreeSet<i32> = [1, 2, 3].into_iter().collect();
        let y: BTreeSet<i32> = [2, 3, 4].into_iter().collect();

        let union = <Set as Add<BTreeSet<i32>>>::add(x.clone(), y.clone());
        let difference = <Set as Difference<BTreeSet<i32>>>::difference(x.clone(), y.clone());
        let intersection = <Set as Product<BTreeSet<i32>>>::product(x, y);

        assert_eq!(union.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(difference.into_iter().collect::<Vec<_>>(), vec![1]);
        assert_eq!(intersection.into_iter().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[rstest]
    fn hash_set_product_is_intersection() {
        let x: HashSet<&str> = ["a", "b"].into_iter().collect();
        let y: HashSet<&str> = ["b", "c"].into_iter().collect();
        let result = <Set as Product<HashSet<&str>>>::product(x, y);
        assert_eq!(result.len(), 1);
        assert!(result.contains("b"));
    }

    #[rstest]
    fn combine_delegates_to_semigroup() {
        let result = <Combine as Add<Option<String>>>::add(None, Some("x".to_string()));
        assert_eq!(result, Some("x".to_string()));
    }

    #[rstest]
    fn option_arithmetic_short_circuits() {
        assert_eq!(Some(6).divide::<Num>(Some(3)), Some(2));
        assert_eq!(None.product::<Num>(Some(3)), None::<i32>);
    }

    #[rstest]
    fn result_arithmetic_returns_first_error() {
        let first: Result<i32, &str> = Err("first");
        let second: Result<i32, &str> = Err("second");
        assert_eq!(first.add::<Num>(second), Err("first"));
        assert_eq!(Ok::<i32, &str>(1).add::<Num>(Err("second")), Err("second"));
    }
}

//! Type class traits for functional programming abstractions.
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Combining independent containers
//! - [`Monad`]: Sequencing dependent computations
//! - [`Foldable`]: Folding structures into summary values
//! - [`Bifunctor`]: Mapping over both sides of a two-parameter container
//! - [`Semigroup`] / [`Monoid`]: Associative combination with an identity
//! - [`Add`], [`Difference`], [`Product`], [`Divisible`]: Arithmetic
//!   capabilities implemented by strategy types ([`Num`], [`Seq`], [`Set`],
//!   [`Combine`]) and consumed through [`Arithmetic`]
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types. This module
//! uses Generic Associated Types through [`TypeConstructor`] to express
//! "the same container around another element type".
//!
//! # Examples
//!
//! ```rust
//! use faultline::typeclass::{Applicative, Arithmetic, Num};
//!
//! assert_eq!(Some(1).map2(Some(2), |x, y| x + y), Some(3));
//! assert_eq!(Some(10).difference::<Num>(Some(4)), Some(6));
//! ```

mod applicative;
mod arithmetic;
mod bifunctor;
mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;

pub use applicative::Applicative;
pub use arithmetic::{Add, Arithmetic, Combine, Difference, Divisible, Num, Product, Seq, Set};
pub use bifunctor::Bifunctor;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;

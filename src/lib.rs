//! # faultline
//!
//! Failure-aware containers for Rust: a memoized `Try`, a three-state
//! `Either`, and the type classes and combinators that tie them together.
//!
//! ## Overview
//!
//! - **Type Classes**: Functor, Applicative, Monad, Foldable, Bifunctor,
//!   Semigroup, Monoid, and strategy-based arithmetic
//! - **Control Structures**: `Try` (deferred computation yielding a value or
//!   a `Fault`), `Either` (`Left`, `Right` or `Bottom`), `Lazy`
//! - **Combinators**: Free functions forwarding to the traits above
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: `Try`, `Either`, `Lazy` and the combinators module
//! - `serde`: `Serialize`/`Deserialize` for `Either`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use faultline::prelude::*;
//!
//! fn double_if_big(x: i32) -> Either<String, i32> {
//!     if x > 5 { Either::Right(x * 2) } else { Either::Left("too small".to_string()) }
//! }
//!
//! assert_eq!(bind(Either::Right(10), double_if_big), Either::Right(20));
//!
//! let total = Try::new(|| "40".parse::<i32>()).add::<Num>(Try::success(2));
//! assert_eq!(total.run().ok(), Some(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and combinators.
///
/// # Usage
///
/// ```rust
/// use faultline::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "control")]
    pub use crate::combinators::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "control")]
pub mod combinators;

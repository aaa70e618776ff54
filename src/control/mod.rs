//! Control structures for failure-aware pipelines.
//!
//! This module provides the two container types of the crate and the
//! pieces they are built from:
//!
//! - [`Try`]: A deferred, memoized computation that yields a value or a [`Fault`]
//! - [`Either`]: A value that is `Left`, `Right`, or `Bottom`
//! - [`Lazy`]: Lazy evaluation with memoization, the outcome cache of `Try`
//! - [`Fault`] and [`EitherError`]: The error types of the two containers
//!
//! # Examples
//!
//! ## Deferred Computation
//!
//! ```rust
//! use faultline::control::Try;
//!
//! let attempt = Try::new(|| "7".parse::<u8>()).map(|n| n * 6);
//! // Nothing has been parsed yet
//! assert!(!attempt.is_evaluated());
//!
//! assert_eq!(attempt.run().ok(), Some(42));
//! ```
//!
//! ## Alternative Branches
//!
//! ```rust
//! use faultline::control::{lefts, rights, Either};
//!
//! let values: Vec<Either<&str, i32>> =
//!     vec![Either::Right(1), Either::Left("a"), Either::Bottom, Either::Right(2)];
//!
//! assert_eq!(rights(values.clone()).collect::<Vec<_>>(), vec![1, 2]);
//! assert_eq!(lefts(values).collect::<Vec<_>>(), vec!["a"]);
//! ```

mod attempt;
mod either;
mod error;
mod fault;
mod lazy;

pub use attempt::Try;
pub use either::{Either, lefts, partition, rights};
pub use error::EitherError;
pub use fault::{BoxError, Fault, RaisedError};
pub use lazy::{Lazy, LazyPoisonedError, LazyState};

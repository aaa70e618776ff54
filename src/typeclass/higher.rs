//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` or
//! `Try<_>` directly. [`TypeConstructor`] records the element type of a
//! container (`Inner`) and how to rebuild the same container around another
//! element type (`WithType<B>`), which is all `Functor`, `Applicative` and
//! `Monad` need to be written once for every container in this crate.
//!
//! # Example
//!
//! ```rust
//! use faultline::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Option<String> = empty_like(Some(42));
//! assert_eq!(none_string, None);
//! ```

/// A container whose element type can be swapped.
///
/// # Type Parameters
///
/// * `Inner` - the element type currently held.
/// * `WithType<B>` - the same container holding `B` instead.
pub trait TypeConstructor {
    /// The element type of the container.
    type Inner;

    /// The container rebuilt around `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

#[cfg(feature = "control")]
impl<L, R> TypeConstructor for crate::control::Either<L, R> {
    type Inner = R;
    type WithType<B> = crate::control::Either<L, B>;
}

#[cfg(feature = "control")]
impl<T> TypeConstructor for crate::control::Try<T> {
    type Inner = T;
    type WithType<B> = crate::control::Try<B>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Option<i32>>();
    }

    #[test]
    fn result_with_type_preserves_error_type() {
        fn assert_result_with_type<T, E, B>()
        where
            Result<T, E>: TypeConstructor<Inner = T, WithType<B> = Result<B, E>>,
        {
        }

        assert_result_with_type::<i32, String, bool>();
        assert_result_with_type::<Vec<u8>, std::io::Error, String>();
    }

    #[cfg(feature = "control")]
    #[test]
    fn either_is_right_biased() {
        use crate::control::Either;

        fn assert_either<L, R, B>()
        where
            Either<L, R>: TypeConstructor<Inner = R, WithType<B> = Either<L, B>>,
        {
        }

        assert_either::<String, i32, bool>();
    }

    #[cfg(feature = "control")]
    #[test]
    fn try_inner_type_is_success_type() {
        use crate::control::Try;

        fn assert_inner<T: TypeConstructor<Inner = u64>>() {}
        assert_inner::<Try<u64>>();
    }
}

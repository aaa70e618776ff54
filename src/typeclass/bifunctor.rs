//! Bifunctor type class - mapping over two type parameters.
//!
//! # Laws
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf                                         // identity
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)  // composition
//! bf.bimap(f, g) == bf.first(f).second(g)                              // consistency
//! ```
//!
//! `Either::Bottom` holds neither side, so every mapping leaves it as
//! `Bottom` and calls neither function.
//!
//! # Type Parameter Order for Result
//!
//! `Result<T, E>` is implemented as `Bifunctor<E, T>` so that `first` maps
//! the error and `second` maps the success value, matching `Either<L, R>`
//! where `second` maps the right-biased value.
//!
//! # Examples
//!
//! ```rust
//! use faultline::typeclass::Bifunctor;
//!
//! let result: Result<i32, String> = Err("boom".to_string());
//! assert_eq!(result.bimap(|e| e.len(), |x| x * 2), Err(4));
//! ```

/// A type class for containers with two mappable type parameters.
pub trait Bifunctor<A, B> {
    /// The container rebuilt with new parameter types.
    type Target<C, D>;

    /// Maps both sides.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Maps the first side only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Maps the second side only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }

    /// Maps both sides by reference.
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;

    /// Maps the first side by reference, cloning the second.
    #[inline]
    fn first_ref<C, F>(&self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(&A) -> C,
        B: Clone,
    {
        self.bimap_ref(function, B::clone)
    }

    /// Maps the second side by reference, cloning the first.
    #[inline]
    fn second_ref<D, G>(&self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(&B) -> D,
        A: Clone,
    {
        self.bimap_ref(A::clone, function)
    }
}

#[cfg(feature = "control")]
impl<L, R> Bifunctor<L, R> for crate::control::Either<L, R> {
    type Target<C, D> = crate::control::Either<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> D,
    {
        crate::control::Either::bimap(self, first_function, second_function)
    }

    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&L) -> C,
        G: FnOnce(&R) -> D,
    {
        use crate::control::Either;

        match self {
            Either::Left(left) => Either::Left(first_function(left)),
            Either::Right(right) => Either::Right(second_function(right)),
            Either::Bottom => Either::Bottom,
        }
    }
}

impl<T, E> Bifunctor<E, T> for Result<T, E> {
    type Target<C, D> = Result<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Result<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        match self {
            Ok(value) => Ok(second_function(value)),
            Err(error) => Err(first_function(error)),
        }
    }

    #[inline]
    fn first<C, F>(self, function: F) -> Result<T, C>
    where
        F: FnOnce(E) -> C,
    {
        self.map_err(function)
    }

    #[inline]
    fn second<D, G>(self, function: G) -> Result<D, E>
    where
        G: FnOnce(T) -> D,
    {
        self.map(function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Result<D, C>
    where
        F: FnOnce(&E) -> C,
        G: FnOnce(&T) -> D,
    {
        match self {
            Ok(value) => Ok(second_function(value)),
            Err(error) => Err(first_function(error)),
        }
    }
}

impl<A, B> Bifunctor<A, B> for (A, B) {
    type Target<C, D> = (C, D);

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> (C, D)
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        (first_function(self.0), second_function(self.1))
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> (C, D)
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D,
    {
        (first_function(&self.0), second_function(&self.1))
    }
}

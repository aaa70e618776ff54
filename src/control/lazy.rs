//! Lazy evaluation with memoization.
//!
//! `Lazy<T, F>` defers a computation until its value is first requested and
//! caches the value for every later request. It is the outcome cache behind
//! [`Try`](super::Try): a `Try` is a `Lazy` whose value is a `Result`.
//!
//! # Examples
//!
//! ```rust
//! use faultline::control::Lazy;
//! use std::cell::Cell;
//!
//! let call_count = Cell::new(0);
//! let lazy = Lazy::new(|| {
//!     call_count.set(call_count.get() + 1);
//!     42
//! });
//!
//! assert_eq!(call_count.get(), 0);
//! assert_eq!(*lazy.force(), 42);
//! assert_eq!(*lazy.force(), 42);
//! assert_eq!(call_count.get(), 1);
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;

/// Error returned when a `Lazy` whose initializer panicked is accessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Lazy instance has been poisoned")]
pub struct LazyPoisonedError;

/// The internal state of a `Lazy` value.
#[derive(Debug)]
pub enum LazyState<T, F> {
    /// The value has not been computed; holds the initializer.
    Uninit(F),
    /// The value has been computed.
    Init(T),
    /// The initializer panicked; the value can never be produced.
    Poisoned,
}

/// A lazily evaluated value with memoization.
///
/// # Thread Safety
///
/// `Lazy` keeps its state in a `RefCell` and is therefore `!Sync`. Two
/// threads can never observe the same uninitialized `Lazy`, so the
/// initializer runs at most once.
pub struct Lazy<T, F = fn() -> T> {
    state: RefCell<LazyState<T, F>>,
}

impl<T, F: FnOnce() -> T> Lazy<T, F> {
    /// Creates a lazy value that runs `initializer` on first access.
    #[inline]
    pub fn new(initializer: F) -> Self {
        Self {
            state: RefCell::new(LazyState::Uninit(initializer)),
        }
    }

    /// Forces evaluation and returns a reference to the value.
    ///
    /// # Panics
    ///
    /// Panics if the initializer panics now or panicked on an earlier call.
    pub fn force(&self) -> Ref<'_, T> {
        match self.try_force() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Forces evaluation, reporting a poisoned cell as an error.
    ///
    /// # Errors
    ///
    /// Returns [`LazyPoisonedError`] if an earlier initializer panicked.
    pub fn try_force(&self) -> Result<Ref<'_, T>, LazyPoisonedError> {
        let needs_initialization = match &*self.state.borrow() {
            LazyState::Init(_) => false,
            LazyState::Poisoned => return Err(LazyPoisonedError),
            LazyState::Uninit(_) => true,
        };

        if needs_initialization {
            self.initialize();
        }

        Ref::filter_map(self.state.borrow(), |state| match state {
            LazyState::Init(value) => Some(value),
            _ => None,
        })
        .map_err(|_| LazyPoisonedError)
    }

    fn initialize(&self) {
        let mut state = self.state.borrow_mut();

        // Left as Poisoned if the initializer unwinds.
        let LazyState::Uninit(initializer) = std::mem::replace(&mut *state, LazyState::Poisoned)
        else {
            return;
        };

        *state = LazyState::Init(initializer());
    }

    /// Consumes the lazy value, computing it if necessary.
    ///
    /// # Errors
    ///
    /// Returns [`LazyPoisonedError`] if an earlier initializer panicked.
    pub fn into_inner(self) -> Result<T, LazyPoisonedError> {
        match self.state.into_inner() {
            LazyState::Init(value) => Ok(value),
            LazyState::Uninit(initializer) => Ok(initializer()),
            LazyState::Poisoned => Err(LazyPoisonedError),
        }
    }
}

impl<T, F> Lazy<T, F> {
    /// Creates an already initialized lazy value.
    #[inline]
    pub fn new_with_value(value: T) -> Self {
        Self {
            state: RefCell::new(LazyState::Init(value)),
        }
    }

    /// Returns the value if it has already been computed.
    pub fn get(&self) -> Option<Ref<'_, T>> {
        Ref::filter_map(self.state.borrow(), |state| match state {
            LazyState::Init(value) => Some(value),
            _ => None,
        })
        .ok()
    }

    /// Returns `true` once the value has been computed.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Init(_))
    }

    /// Returns `true` if the initializer panicked.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Poisoned)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Lazy<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            LazyState::Init(value) => formatter.debug_tuple("Lazy").field(value).finish(),
            LazyState::Uninit(_) => formatter.write_str("Lazy(<uninit>)"),
            LazyState::Poisoned => formatter.write_str("Lazy(<poisoned>)"),
        }
    }
}

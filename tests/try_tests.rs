//! Unit tests for Try<T> type.
//!
//! A Try defers a computation, memoizes its outcome, and captures errors
//! and panics as a `Fault`.

#![cfg(feature = "control")]

use faultline::control::{Fault, Try};
use rstest::rstest;
use std::cell::Cell;
use std::fmt;
use std::io;
use std::rc::Rc;

#[derive(Debug, PartialEq, Eq)]
struct QuotaExceeded {
    limit: u32,
}

impl fmt::Display for QuotaExceeded {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "quota of {} exceeded", self.limit)
    }
}

impl std::error::Error for QuotaExceeded {}

fn counter() -> Rc<Cell<u32>> {
    Rc::new(Cell::new(0))
}

fn counted<T: 'static>(calls: &Rc<Cell<u32>>, value: T) -> Try<T> {
    let calls = Rc::clone(calls);
    Try::lazy(move || {
        calls.set(calls.get() + 1);
        value
    })
}

// =============================================================================
// Construction and Evaluation
// =============================================================================

#[rstest]
fn try_new_defers_and_memoizes() {
    let calls = counter();
    let attempt = counted(&calls, 10);

    assert_eq!(calls.get(), 0);
    assert!(attempt.is_succ());
    assert!(!attempt.is_fail());
    assert_eq!(attempt.run().ok(), Some(10));
    assert_eq!(attempt.run().ok(), Some(10));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn try_from_result() {
    let ok: Try<i32> = Ok::<_, io::Error>(1).into();
    let err: Try<i32> = Err::<i32, _>("bad input").into();

    assert_eq!(ok.run().ok(), Some(1));
    assert_eq!(err.run().unwrap_err().to_string(), "bad input");
}

#[rstest]
fn try_preserves_custom_error_identity() {
    let attempt: Try<u32> = Try::new(|| Err(QuotaExceeded { limit: 5 }));
    let fault = attempt
        .map(|x| x + 1)
        .filter(|x| *x > 0)
        .bind(|x| Try::success(x * 2))
        .into_result()
        .unwrap_err();

    assert_eq!(fault.downcast_ref::<QuotaExceeded>(), Some(&QuotaExceeded { limit: 5 }));
    assert_eq!(fault.to_string(), "quota of 5 exceeded");
}

#[rstest]
fn try_io_error_raised_in_bind_survives_filter() {
    let fault = Try::success("config.toml")
        .bind(|path| Try::<usize>::failure(io::Error::new(io::ErrorKind::NotFound, path)))
        .filter(|size| *size > 0)
        .into_result()
        .unwrap_err();

    assert!(fault.is::<io::Error>());
    assert_eq!(fault.downcast_ref::<io::Error>().map(io::Error::kind), Some(io::ErrorKind::NotFound));
    assert_eq!(fault.root_cause().to_string(), "config.toml");
}

#[rstest]
fn try_panic_fault_keeps_backtrace() {
    let fault = Try::<i32>::lazy(|| panic!("deep")).into_result().unwrap_err();
    let status = fault.backtrace().map(std::backtrace::Backtrace::status);
    assert_eq!(status, Some(std::backtrace::Backtrace::capture().status()));
}

#[rstest]
fn try_failure_with_fault_is_not_nested() {
    let attempt: Try<i32> = Try::failure(Fault::FilterRejected);
    assert!(attempt.run().unwrap_err().is_filter_rejected());
}

// =============================================================================
// Short-Circuiting
// =============================================================================

#[rstest]
fn try_failure_never_calls_user_functions() {
    let calls = counter();
    let bump = {
        let calls = Rc::clone(&calls);
        move || calls.set(calls.get() + 1)
    };

    let source: Try<i32> = Try::failure("stop");
    let (first, second, third) = (bump.clone(), bump.clone(), bump);
    let result = source
        .map(move |x| {
            first();
            x
        })
        .bind(move |x| {
            second();
            Try::success(x)
        })
        .filter(move |_| {
            third();
            true
        });

    assert_eq!(result.run().unwrap_err().to_string(), "stop");
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn try_bind_runs_dependent_step() {
    let halve = |x: i32| {
        if x % 2 == 0 {
            Try::success(x / 2)
        } else {
            Try::failure(format!("{x} is odd"))
        }
    };

    assert_eq!(Try::success(8).bind(halve).run().ok(), Some(4));
    assert_eq!(Try::success(7).bind(halve).run().unwrap_err().to_string(), "7 is odd");
}

#[rstest]
fn try_map2_evaluates_left_to_right() {
    let order = Rc::new(std::cell::RefCell::new(Vec::new()));
    let first = {
        let order = Rc::clone(&order);
        Try::lazy(move || {
            order.borrow_mut().push("first");
            1
        })
    };
    let second = {
        let order = Rc::clone(&order);
        Try::lazy(move || {
            order.borrow_mut().push("second");
            2
        })
    };

    assert_eq!(first.map2(second, |a, b| a + b).run().ok(), Some(3));
    assert_eq!(*order.borrow(), vec!["first", "second"]);
}

// =============================================================================
// Panics
// =============================================================================

#[rstest]
fn try_captures_panics_in_thunk_and_functions() {
    let thunk: Try<i32> = Try::lazy(|| panic!("thunk"));
    assert!(thunk.run().unwrap_err().is_panic());

    let function = Try::success(1).bind(|_: i32| -> Try<i32> { panic!("bind") });
    let fault = function.into_result().unwrap_err();
    assert_eq!(fault.to_string(), "computation panicked: bind");
}

// =============================================================================
// Terminal Operations
// =============================================================================

#[rstest]
#[case(Try::success(3), "value 3")]
#[case(Try::failure("gone"), "fault gone")]
fn try_match_with_picks_handler(#[case] attempt: Try<i32>, #[case] expected: &str) {
    let rendered = attempt.match_with(|fault| format!("fault {fault}"), |value| format!("value {value}"));
    assert_eq!(rendered, expected);
}

#[rstest]
fn try_if_succ_only_runs_on_success() {
    let seen = Cell::new(None);
    Try::success(4).if_succ(|x| seen.set(Some(x)));
    Try::<i32>::failure("no").if_succ(|_| seen.set(Some(-1)));
    assert_eq!(seen.get(), Some(4));
}

#[rstest]
fn try_bifold_sees_fault() {
    let attempt: Try<i32> = Try::failure("four");
    let total = attempt.bifold(0, |state, fault| state + fault.to_string().len(), |state, _| state);
    assert_eq!(total, 4);
}

//! Integration tests for the free-function combinators.

#![cfg(feature = "control")]

use faultline::prelude::*;
use rstest::rstest;

fn double_if_big(x: i32) -> Either<String, i32> {
    if x > 5 {
        Either::Right(x * 2)
    } else {
        Either::Left("too small".to_string())
    }
}

#[rstest]
#[case(10, Either::Right(20))]
#[case(3, Either::Left("too small".to_string()))]
fn bind_end_to_end(#[case] input: i32, #[case] expected: Either<String, i32>) {
    assert_eq!(bind(Either::Right(input), double_if_big), expected);
}

#[rstest]
fn map_fold_and_filter_over_try() {
    let attempt = map(Try::new(|| "21".parse::<i32>()), |x| x * 2);
    let kept = filter(attempt, |x| *x == 42);
    assert_eq!(fold(kept, 0, |state, x| state + x), 42);
}

#[rstest]
fn apply_and_map2_over_try() {
    let function: Try<fn(i32) -> i32> = Try::success(|x| x - 1);
    assert_eq!(apply(function, Try::success(5)).run().ok(), Some(4));

    let joined = map2(Try::success("a".to_string()), Try::success(3), |s, n| s.repeat(n));
    assert_eq!(joined.run().ok(), Some("aaa".to_string()));
}

#[rstest]
fn bimap_over_either_and_result() {
    let either: Either<i32, String> = Either::Left(2);
    assert_eq!(bimap(either, |l| l * 10, |r: String| r.len()), Either::Left(20));

    let result: Result<String, i32> = Err(4);
    assert_eq!(bimap(result, |e| e + 1, |s: String| s.len()), Err(5));

    let pair = (3, "four".to_string());
    assert_eq!(bimap(pair, |n: i32| n * 2, |s: String| s.len()), (6, 4));
}

#[rstest]
fn predicates_over_try_and_either() {
    let attempt = Try::success(3);
    assert!(exists(&attempt, |x| *x == 3));
    assert!(for_all(&attempt, |x| *x > 0));

    let failed: Try<i32> = Try::failure("nope");
    assert!(!exists(&failed, |_| true));
    assert!(for_all(&failed, |_| false));

    let left: Either<&str, i32> = Either::Left("l");
    assert!(bi_exists(&left, |l| *l == "l", |_| false));
    assert!(!bi_for_all(&left, |l| l.is_empty(), |_| true));
}

#[rstest]
fn either_specific_combinators() {
    let right: Either<i32, i32> = Either::Right(4);
    assert!(bifilter(right, |_| true, |r| *r > 10).is_bottom());
    assert_eq!(bifold(Either::<i32, i32>::Left(1), 10, |s, l| s - l, |s, r| s + r), 9);
    assert_eq!(match_either(Either::<i32, i32>::Right(4), |l| l, |r| r * 2), Ok(8));
    assert_eq!(if_left(Either::<i32, i32>::Left(4), |l| l + 1), Ok(5));
}

#[rstest]
fn try_specific_combinators() {
    let nested = Try::success(Try::success(2));
    assert_eq!(flatten(nested).run().ok(), Some(2));

    let failed: Try<i32> = Try::failure("x");
    assert_eq!(if_fail(failed, -1), -1);
    assert_eq!(match_try(Try::success(1), |_| 0, |x| x + 1), 2);
}

#[rstest]
fn arithmetic_forwards() {
    assert_eq!(add::<Num, _>(Either::<(), i32>::Right(1), Either::Right(2)), Either::Right(3));
    assert_eq!(difference::<Num, _>(Either::<(), i32>::Right(5), Either::Right(2)), Either::Right(3));
    assert_eq!(product::<Num, _>(Try::success(3), Try::success(3)).run().ok(), Some(9));
    assert_eq!(divide::<Num, _>(Try::success(9), Try::success(3)).run().ok(), Some(3));
}

#[rstest]
fn sequence_forwards() {
    let values = vec![Either::Left(1), Either::Right("a"), Either::Bottom];
    assert_eq!(lefts(values.clone()).collect::<Vec<_>>(), vec![1]);
    assert_eq!(rights(values.clone()).collect::<Vec<_>>(), vec!["a"]);
    assert_eq!(partition(values), (vec![1], vec!["a"]));
}

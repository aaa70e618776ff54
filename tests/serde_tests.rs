#![cfg(feature = "serde")]

//! Integration tests for serde support of Either.

use faultline::control::Either;
use rstest::rstest;

#[rstest]
#[case(Either::Left("error".to_string()))]
#[case(Either::Right(42))]
#[case(Either::Bottom)]
fn test_either_json_roundtrip(#[case] value: Either<String, i32>) {
    let json = serde_json::to_string(&value).unwrap();
    let restored: Either<String, i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(value, restored);
}

#[rstest]
fn test_either_json_shape() {
    let right: Either<String, i32> = Either::Right(1);
    let bottom: Either<String, i32> = Either::Bottom;
    assert_eq!(serde_json::to_string(&right).unwrap(), r#"{"Right":1}"#);
    assert_eq!(serde_json::to_string(&bottom).unwrap(), r#""Bottom""#);
}

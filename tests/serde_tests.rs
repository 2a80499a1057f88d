#![cfg(all(feature = "serde", feature = "control"))]

//! Round trips of the plain data types through `serde_json`.

use kindness::control::Either;
use kindness::typeclass::{Dual, First, Identity, Last, Max, Min, Product, Sum};
use rstest::rstest;
use serde::Serialize;
use serde::de::DeserializeOwned;

fn round_trip<T>(value: &T) -> T
where
    T: Serialize + DeserializeOwned,
{
    let json = serde_json::to_string(value).unwrap();
    serde_json::from_str(&json).unwrap()
}

#[rstest]
fn either_round_trips_both_sides() {
    let left: Either<String, i32> = Either::Left("error".to_string());
    let right: Either<String, i32> = Either::Right(42);

    assert_eq!(round_trip(&left), left);
    assert_eq!(round_trip(&right), right);
}

#[rstest]
fn either_uses_externally_tagged_variants() {
    let right: Either<String, i32> = Either::Right(7);
    assert_eq!(serde_json::to_string(&right).unwrap(), r#"{"Right":7}"#);
}

#[rstest]
fn identity_is_transparent_newtype() {
    assert_eq!(serde_json::to_string(&Identity(3)).unwrap(), "3");
    assert_eq!(round_trip(&Identity(String::from("inner"))), Identity(String::from("inner")));
}

#[rstest]
fn wrappers_round_trip() {
    assert_eq!(round_trip(&Sum(3)), Sum(3));
    assert_eq!(round_trip(&Product(4.5)), Product(4.5));
    assert_eq!(round_trip(&Max(-1)), Max(-1));
    assert_eq!(round_trip(&Min(u8::MAX)), Min(u8::MAX));
    assert_eq!(round_trip(&First(Some('x'))), First(Some('x')));
    assert_eq!(round_trip(&Last::<i32>(None)), Last(None));
    assert_eq!(round_trip(&Dual(vec![1, 2])), Dual(vec![1, 2]));
}

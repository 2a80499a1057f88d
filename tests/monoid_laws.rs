#![cfg(feature = "laws")]
//! Semigroup and monoid laws for the standard instances and the wrappers.

use kindness::laws::{check_monoid_laws, check_semigroup_laws};
use kindness::typeclass::{Dual, Endo, First, Last, Max, Min, Monoid, Product, Semigroup, Sum};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
fn string_and_vec_concatenation() {
    assert_eq!(check_monoid_laws(".{0,4}"), Ok(()));
    assert_eq!(check_monoid_laws(prop::collection::vec(any::<u8>(), 0..4)), Ok(()));
}

#[rstest]
fn numeric_wrappers() {
    assert_eq!(check_monoid_laws(any::<i16>().prop_map(|value| Sum(i64::from(value)))), Ok(()));
    assert_eq!(check_monoid_laws(any::<i8>().prop_map(|value| Product(i64::from(value)))), Ok(()));
    assert_eq!(check_monoid_laws(any::<i32>().prop_map(Max)), Ok(()));
    assert_eq!(check_monoid_laws(any::<i32>().prop_map(Min)), Ok(()));
}

#[rstest]
fn first_last_and_dual() {
    assert_eq!(check_monoid_laws(proptest::option::of(any::<u8>()).prop_map(First)), Ok(()));
    assert_eq!(check_monoid_laws(proptest::option::of(any::<u8>()).prop_map(Last)), Ok(()));
    assert_eq!(check_monoid_laws("[ab]{0,3}".prop_map(Dual)), Ok(()));
}

#[rstest]
fn tuples_and_unit() {
    assert_eq!(check_monoid_laws(("[a-c]{0,2}", any::<i8>().prop_map(|v| Sum(i32::from(v))))), Ok(()));
    assert_eq!(check_monoid_laws(Just(())), Ok(()));
}

#[rstest]
fn option_lifts_a_semigroup() {
    assert_eq!(check_semigroup_laws(proptest::option::of(any::<i32>().prop_map(Max))), Ok(()));
}

#[rstest]
#[case(0, "")]
#[case(1, "ab")]
#[case(4, "abababab")]
fn power_repeats(#[case] exponent: usize, #[case] expected: &str) {
    assert_eq!(String::from("ab").power(exponent), expected);
}

#[rstest]
fn endo_composes_right_to_left() {
    let composed = Endo::combine_all(vec![
        Endo::new(|x: i32| x + 1),
        Endo::new(|x: i32| x * 10),
    ]);
    assert_eq!(composed.call(2), 21);
}

proptest! {
    #[test]
    fn prop_power_matches_repeated_combine(text in "[a-z]{0,3}", exponent in 1usize..6) {
        prop_assert_eq!(text.clone().power(exponent), text.combine_n(exponent));
    }

    #[test]
    fn prop_power_zero_is_empty(value in any::<i32>()) {
        prop_assert_eq!(Sum(value).power(0), Sum::<i32>::empty());
    }

    #[test]
    fn prop_combine_all_matches_fold(values in prop::collection::vec(any::<i16>(), 0..8)) {
        let expected: i64 = values.iter().map(|value| i64::from(*value)).sum();
        let combined = Sum::combine_all(values.into_iter().map(|value| Sum(i64::from(value))));
        prop_assert_eq!(combined, Sum(expected));
    }
}

//! Element types the law suites can quantify over.
//!
//! A law such as `fmap(fa, g . f) == fmap(fmap(fa, f), g)` needs values of
//! the element type and functions on it. [`LawDomain`] supplies both, along
//! with the predicates and binary operations the Kleisli and cokleisli
//! strategies are built from.

use std::fmt::Debug;

use proptest::prelude::*;

use super::arrow::ArrowOf;
use super::properties::Arrow;

/// A type with generators for its values and for total functions on it.
///
/// Every generated function carries an exact description, so a failing law
/// prints a counterexample that can be reproduced by hand.
pub trait LawDomain: Clone + Debug + PartialEq + 'static {
    /// Values of the type.
    fn values() -> BoxedStrategy<Self>;

    /// Total endo-arrows.
    fn arrows() -> BoxedStrategy<Arrow<Self>>;

    /// Predicates that hold for some values and fail for others.
    fn partitions() -> BoxedStrategy<ArrowOf<Self, bool>>;

    /// Binary operations, used to fold a whole context into one value.
    fn merges() -> BoxedStrategy<ArrowOf<(Self, Self), Self>>;
}

macro_rules! integer_law_domain {
    ($($integer:ty),* $(,)?) => {
        $(
            impl LawDomain for $integer {
                fn values() -> BoxedStrategy<Self> {
                    any::<$integer>().boxed()
                }

                fn arrows() -> BoxedStrategy<Arrow<Self>> {
                    prop_oneof![
                        Just(ArrowOf::identity()),
                        any::<$integer>().prop_map(|k| {
                            ArrowOf::new(format!("x + {k}"), move |x: $integer| x.wrapping_add(k))
                        }),
                        any::<$integer>().prop_map(|k| {
                            ArrowOf::new(format!("x * {k}"), move |x: $integer| x.wrapping_mul(k))
                        }),
                        any::<$integer>().prop_map(|k| ArrowOf::new(format!("x ^ {k}"), move |x: $integer| x ^ k)),
                        any::<$integer>().prop_map(|k| ArrowOf::new(format!("const {k}"), move |_: $integer| k)),
                        (0..<$integer>::BITS).prop_map(|s| {
                            ArrowOf::new(format!("x rotl {s}"), move |x: $integer| x.rotate_left(s))
                        }),
                    ]
                    .boxed()
                }

                fn partitions() -> BoxedStrategy<ArrowOf<Self, bool>> {
                    (2u8..5)
                        .prop_map(|modulus| {
                            let modulus = <$integer>::from(modulus);
                            ArrowOf::new(format!("x % {modulus} == 0"), move |x: $integer| {
                                x.rem_euclid(modulus) == 0
                            })
                        })
                        .boxed()
                }

                fn merges() -> BoxedStrategy<ArrowOf<(Self, Self), Self>> {
                    prop_oneof![
                        Just(ArrowOf::new("x + y", |(x, y): ($integer, $integer)| x.wrapping_add(y))),
                        Just(ArrowOf::new("x ^ y", |(x, y): ($integer, $integer)| x ^ y)),
                        Just(ArrowOf::new("max(x, y)", |(x, y): ($integer, $integer)| x.max(y))),
                    ]
                    .boxed()
                }
            }
        )*
    };
}

integer_law_domain!(u8, u16, u32, u64, i16, i32, i64);

impl LawDomain for bool {
    fn values() -> BoxedStrategy<Self> {
        any::<bool>().boxed()
    }

    fn arrows() -> BoxedStrategy<Arrow<Self>> {
        prop_oneof![
            Just(ArrowOf::identity()),
            Just(ArrowOf::new("!x", |x: bool| !x)),
            any::<bool>().prop_map(|k| ArrowOf::new(format!("const {k}"), move |_: bool| k)),
        ]
        .boxed()
    }

    fn partitions() -> BoxedStrategy<ArrowOf<Self, bool>> {
        prop_oneof![Just(ArrowOf::new("x", |x: bool| x)), Just(ArrowOf::new("!x", |x: bool| !x))].boxed()
    }

    fn merges() -> BoxedStrategy<ArrowOf<(Self, Self), Self>> {
        prop_oneof![
            Just(ArrowOf::new("x && y", |(x, y): (bool, bool)| x && y)),
            Just(ArrowOf::new("x || y", |(x, y): (bool, bool)| x || y)),
            Just(ArrowOf::new("x != y", |(x, y): (bool, bool)| x != y)),
        ]
        .boxed()
    }
}

impl LawDomain for String {
    fn values() -> BoxedStrategy<Self> {
        "[a-z]{0,4}".boxed()
    }

    fn arrows() -> BoxedStrategy<Arrow<Self>> {
        prop_oneof![
            Just(ArrowOf::identity()),
            "[a-z]{1,3}".prop_map(|suffix| {
                ArrowOf::new(format!("x + {suffix:?}"), move |x: String| x + &suffix)
            }),
            "[a-z]{1,3}".prop_map(|prefix| {
                ArrowOf::new(format!("{prefix:?} + x"), move |x: String| format!("{prefix}{x}"))
            }),
            "[a-z]{0,3}".prop_map(|k| ArrowOf::new(format!("const {k:?}"), move |_: String| k.clone())),
            Just(ArrowOf::new("reverse x", |x: String| x.chars().rev().collect())),
        ]
        .boxed()
    }

    fn partitions() -> BoxedStrategy<ArrowOf<Self, bool>> {
        prop_oneof![
            Just(ArrowOf::new("x.is_empty()", |x: String| x.is_empty())),
            (2usize..5).prop_map(|modulus| {
                ArrowOf::new(format!("x.len() % {modulus} == 0"), move |x: String| x.len() % modulus == 0)
            }),
        ]
        .boxed()
    }

    fn merges() -> BoxedStrategy<ArrowOf<(Self, Self), Self>> {
        prop_oneof![
            Just(ArrowOf::new("x + y", |(x, y): (String, String)| x + &y)),
            Just(ArrowOf::new("y + x", |(x, y): (String, String)| y + &x)),
            Just(ArrowOf::new("longer(x, y)", |(x, y): (String, String)| {
                if y.len() > x.len() { y } else { x }
            })),
        ]
        .boxed()
    }
}

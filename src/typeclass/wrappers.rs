//! Newtype wrappers selecting a `Semigroup` / `Monoid` structure.
//!
//! The same underlying type can combine in more than one lawful way. These
//! wrappers pick one:
//!
//! - [`Sum`]: addition (identity: 0)
//! - [`Product`]: multiplication (identity: 1)
//! - [`Max`] / [`Min`]: the larger / smaller value (identity: the opposite bound)
//! - [`First`] / [`Last`]: the leftmost / rightmost present value
//! - [`Dual`]: the wrapped monoid with its arguments flipped
//! - [`Endo`]: endofunctions under composition (identity: the identity function)
//!
//! [`Dual`] and [`Endo`] together let a fold in one direction be expressed
//! with a fold in the other (see the `fold_*_by_*` derivations in
//! [`Foldable`](super::Foldable)).

use std::fmt;

macro_rules! newtype_accessors {
    ($wrapper:ident) => {
        impl<A> $wrapper<A> {
            /// Wraps the given value.
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            /// Consumes the wrapper and returns the inner value.
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }
        }
    };
}

/// The additive semigroup/monoid.
///
/// # Examples
///
/// ```rust
/// use kindness::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
/// assert_eq!(Sum::<i32>::empty(), Sum(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sum<A>(pub A);

/// The multiplicative semigroup/monoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product<A>(pub A);

/// Keeps the larger value. A monoid for [`Bounded`] types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Max<A>(pub A);

/// Keeps the smaller value. A monoid for [`Bounded`] types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Min<A>(pub A);

/// Keeps the leftmost `Some`.
///
/// # Examples
///
/// ```rust
/// use kindness::typeclass::{First, Monoid};
///
/// let found = First::combine_all(vec![First(None), First(Some(2)), First(Some(3))]);
/// assert_eq!(found, First(Some(2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct First<A>(pub Option<A>);

/// Keeps the rightmost `Some`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Last<A>(pub Option<A>);

/// The dual of a monoid: `Dual(a).combine(Dual(b)) == Dual(b.combine(a))`.
///
/// # Examples
///
/// ```rust
/// use kindness::typeclass::{Dual, Semigroup};
///
/// let combined = Dual(String::from("a")).combine(Dual(String::from("b")));
/// assert_eq!(combined, Dual(String::from("ba")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dual<M>(pub M);

newtype_accessors!(Sum);
newtype_accessors!(Product);
newtype_accessors!(Max);
newtype_accessors!(Min);
newtype_accessors!(Dual);

impl<A> First<A> {
    /// Wraps a present value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(Some(value))
    }

    /// Consumes the wrapper and returns the inner option.
    #[inline]
    pub fn into_inner(self) -> Option<A> {
        self.0
    }
}

impl<A> Last<A> {
    /// Wraps a present value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(Some(value))
    }

    /// Consumes the wrapper and returns the inner option.
    #[inline]
    pub fn into_inner(self) -> Option<A> {
        self.0
    }
}

// =============================================================================
// Endo
// =============================================================================

/// A one-shot endofunction `A -> A`, a monoid under composition.
///
/// `f.combine(g)` runs `g` first, then `f` (like `f ∘ g`).
///
/// # Examples
///
/// ```rust
/// use kindness::typeclass::{Endo, Semigroup};
///
/// let add_one = Endo::new(|x: i32| x + 1);
/// let double = Endo::new(|x: i32| x * 2);
/// assert_eq!(add_one.combine(double).call(5), 11);
/// ```
pub struct Endo<A>(Box<dyn FnOnce(A) -> A>);

impl<A> Endo<A> {
    /// Wraps an endofunction.
    pub fn new<F>(function: F) -> Self
    where
        F: FnOnce(A) -> A + 'static,
    {
        Self(Box::new(function))
    }

    /// Applies the wrapped function.
    pub fn call(self, value: A) -> A {
        (self.0)(value)
    }
}

impl<A> fmt::Debug for Endo<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Endo(<function>)")
    }
}

// =============================================================================
// Bounded
// =============================================================================

/// Types with a least and a greatest value.
///
/// Required for [`Max`] and [`Min`] to have an identity element.
pub trait Bounded {
    /// The minimum value of this type.
    const MIN_VALUE: Self;

    /// The maximum value of this type.
    const MAX_VALUE: Self;
}

macro_rules! impl_bounded {
    ($($numeric:ty),* $(,)?) => {
        $(
            impl Bounded for $numeric {
                const MIN_VALUE: Self = <$numeric>::MIN;
                const MAX_VALUE: Self = <$numeric>::MAX;
            }
        )*
    };
}

impl_bounded!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char
);

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn endo_call_applies_function() {
        let negate = Endo::new(|x: i32| -x);
        assert_eq!(negate.call(4), -4);
    }

    #[rstest]
    fn endo_debug_hides_function() {
        let endo = Endo::new(|x: u8| x);
        assert_eq!(format!("{endo:?}"), "Endo(<function>)");
    }

    #[rstest]
    #[case(First::new(1), Some(1))]
    #[case(First(None), None)]
    fn first_into_inner(#[case] wrapped: First<i32>, #[case] expected: Option<i32>) {
        assert_eq!(wrapped.into_inner(), expected);
    }

    #[rstest]
    fn bounded_extremes_match_std() {
        assert_eq!(i32::MIN_VALUE, i32::MIN);
        assert_eq!(u8::MAX_VALUE, u8::MAX);
        assert_eq!(char::MAX_VALUE, char::MAX);
        assert!(!bool::MIN_VALUE);
    }

    #[rstest]
    fn wrappers_unwrap_to_inner_value() {
        assert_eq!(Sum::new(3).into_inner(), 3);
        assert_eq!(Product::new(4).into_inner(), 4);
        assert_eq!(Max::new('z').into_inner(), 'z');
        assert_eq!(Min::new(-1).into_inner(), -1);
        assert_eq!(Dual::new("d").into_inner(), "d");
    }
}

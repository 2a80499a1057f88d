//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! For all `a`:
//!
//! ```text
//! T::empty().combine(a) == a     // left identity
//! a.combine(T::empty()) == a     // right identity
//! ```
//!
//! plus associativity, inherited from [`Semigroup`].
//!
//! # Examples
//!
//! ```rust
//! use kindness::typeclass::{Monoid, Semigroup, Sum};
//!
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//! assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
//! assert_eq!(String::from("ab").power(3), "ababab");
//! ```

use std::ops::Add;

use super::Identity;
use super::semigroup::Semigroup;
use super::wrappers::{Bounded, Dual, Endo, First, Last, Max, Min, Product, Sum};

/// A type class for semigroups with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements, starting from [`Monoid::empty`].
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Combines `self` with itself `exponent` times by repeated squaring.
    ///
    /// `power(0)` is [`Monoid::empty`]; `power(1)` is `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindness::typeclass::{Monoid, Product};
    ///
    /// assert_eq!(Product(2).power(10), Product(1024));
    /// assert_eq!(Product(2).power(0), Product(1));
    /// ```
    #[must_use]
    fn power(self, exponent: usize) -> Self
    where
        Self: Clone + Sized,
    {
        let mut result = Self::empty();
        let mut base = self;
        let mut remaining = exponent;

        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result.combine(base.clone());
            }
            remaining >>= 1;
            if remaining > 0 {
                base = base.clone().combine(base);
            }
        }
        result
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}

// =============================================================================
// Wrapper Implementations
// =============================================================================

impl<T: Monoid> Monoid for Identity<T> {
    fn empty() -> Self {
        Self(T::empty())
    }
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! impl_product_monoid {
    ($one:expr => $($numeric:ty),* $(,)?) => {
        $(
            impl Monoid for Product<$numeric> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

impl_product_monoid!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_product_monoid!(1.0 => f32, f64);

impl<A: Ord + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}

impl<A: Ord + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }
}

impl<A> Monoid for First<A> {
    fn empty() -> Self {
        Self(None)
    }
}

impl<A> Monoid for Last<A> {
    fn empty() -> Self {
        Self(None)
    }
}

impl<M: Monoid> Monoid for Dual<M> {
    fn empty() -> Self {
        Self(M::empty())
    }
}

impl<A: 'static> Monoid for Endo<A> {
    fn empty() -> Self {
        Self::new(|value| value)
    }
}

//! Printable functions for property-based law checks.
//!
//! Closures cannot be printed, so a failing law would report nothing useful
//! about the functions it was given. [`ArrowOf`] pairs a function with a
//! description of what it computes, and the strategies in this module only
//! generate arrows whose description is exact.

use std::fmt;
use std::rc::Rc;

use proptest::prelude::*;

use super::domain::LawDomain;
use super::properties::{Arrow, Cokleisli, Kleisli};
use crate::typeclass::{Alternative, Applicative, Foldable, KindApplication};

/// A boxed function, usable wherever a type class expects `F: Fn(A) -> B`.
pub type BoxedFn<A, B> = Box<dyn Fn(A) -> B>;

/// A shareable function from `A` to `B` that prints as its description.
///
/// # Examples
///
/// ```rust
/// use kindness::laws::ArrowOf;
///
/// let increment = ArrowOf::new("x + 1", |x: i32| x + 1);
/// let double = ArrowOf::new("x * 2", |x: i32| x * 2);
///
/// let both = double.compose(&increment);
/// assert_eq!(both.call(3), 8);
/// assert_eq!(format!("{both:?}"), "(x * 2) . (x + 1)");
/// ```
pub struct ArrowOf<A, B> {
    description: String,
    function: Rc<dyn Fn(A) -> B>,
}

impl<A: 'static, B: 'static> ArrowOf<A, B> {
    /// Names `function` with `description`.
    pub fn new<F>(description: impl Into<String>, function: F) -> Self
    where
        F: Fn(A) -> B + 'static,
    {
        Self {
            description: description.into(),
            function: Rc::new(function),
        }
    }

    /// Applies the arrow.
    pub fn call(&self, argument: A) -> B {
        (self.function)(argument)
    }

    /// What the arrow computes.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// `self` after `inner`.
    #[must_use]
    pub fn compose<Z: 'static>(&self, inner: &ArrowOf<Z, A>) -> ArrowOf<Z, B> {
        let outer_function = Rc::clone(&self.function);
        let inner_function = Rc::clone(&inner.function);
        ArrowOf {
            description: format!("({}) . ({})", self.description, inner.description),
            function: Rc::new(move |value: Z| outer_function(inner_function(value))),
        }
    }

    /// Converts into a plain boxed function.
    #[must_use]
    pub fn into_boxed(self) -> BoxedFn<A, B> {
        let function = self.function;
        Box::new(move |value: A| function(value))
    }
}

impl<A: 'static> ArrowOf<A, A> {
    /// The identity arrow.
    #[must_use]
    pub fn identity() -> Self {
        Self::new("x", |value| value)
    }
}

impl<A, B> Clone for ArrowOf<A, B> {
    fn clone(&self) -> Self {
        Self {
            description: self.description.clone(),
            function: Rc::clone(&self.function),
        }
    }
}

impl<A, B> fmt::Debug for ArrowOf<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.description)
    }
}

/// Endo-arrows on any [`LawDomain`] type.
#[must_use]
pub fn arrows<A: LawDomain>() -> BoxedStrategy<Arrow<A>> {
    A::arrows()
}

/// Total arrows on `i32`, built from wrapping arithmetic and bit operations.
#[must_use]
pub fn arrow_i32() -> BoxedStrategy<Arrow<i32>> {
    arrows::<i32>()
}

/// Kleisli arrows `x -> pure(f(x))` for any applicative `T`.
#[must_use]
pub fn kleisli_pure<T: Applicative, A: LawDomain>() -> BoxedStrategy<Kleisli<T, A>> {
    A::arrows()
        .prop_map(|arrow| {
            let description = format!("pure({arrow:?})");
            ArrowOf::new(description, move |x: A| T::pure::<A>(arrow.call(x)))
        })
        .boxed()
}

/// [`kleisli_pure`] over `i32`.
#[must_use]
pub fn kleisli_pure_i32<T: Applicative>() -> BoxedStrategy<Kleisli<T, i32>> {
    kleisli_pure::<T, i32>()
}

/// Kleisli arrows for any alternative `T`: `empty` where a generated
/// partition holds, `alt(pure(f(x)), pure(g(x)))` elsewhere.
#[must_use]
pub fn kleisli_alternative<T: Alternative, A: LawDomain>() -> BoxedStrategy<Kleisli<T, A>> {
    (A::arrows(), A::arrows(), A::partitions())
        .prop_map(|(first, second, partition)| {
            let description = format!("{partition:?} ? empty : pure({first:?}) <|> pure({second:?})");
            ArrowOf::new(description, move |x: A| {
                if partition.call(x.clone()) {
                    T::empty::<A>()
                } else {
                    T::alt::<A>(T::pure::<A>(first.call(x.clone())), T::pure::<A>(second.call(x)))
                }
            })
        })
        .boxed()
}

/// [`kleisli_alternative`] over `i32`; `empty` on multiples of a small
/// modulus, so `0` always maps to `empty`.
#[must_use]
pub fn kleisli_alternative_i32<T: Alternative>() -> BoxedStrategy<Kleisli<T, i32>> {
    kleisli_alternative::<T, i32>()
}

/// Cokleisli arrows for any foldable `T`: fold the context from a generated
/// seed with a generated merge, then apply a generated arrow.
#[must_use]
pub fn cokleisli<T: Foldable, A: LawDomain>() -> BoxedStrategy<Cokleisli<T, A>> {
    (A::arrows(), A::merges(), A::values())
        .prop_map(|(arrow, merge, seed)| {
            let description = format!("({arrow:?}) . fold({merge:?}, {seed:?})");
            ArrowOf::new(description, move |w: KindApplication<T, A>| {
                let merge = merge.clone();
                let folded = T::fold_left::<A, A, _>(w, seed.clone(), move |accumulator, value| {
                    merge.call((accumulator, value))
                });
                arrow.call(folded)
            })
        })
        .boxed()
}

/// Cokleisli arrows for any foldable `T`: fold the context to a sum, then
/// apply a generated arrow.
#[must_use]
pub fn cokleisli_i32<T: Foldable>() -> BoxedStrategy<Cokleisli<T, i32>> {
    (arrow_i32(), any::<bool>())
        .prop_map(|(arrow, count_instead)| {
            if count_instead {
                let description = format!("({arrow:?}) . length");
                ArrowOf::new(description, move |w: KindApplication<T, i32>| {
                    let length = i32::try_from(T::length::<i32>(w)).unwrap_or(i32::MAX);
                    arrow.call(length)
                })
            } else {
                let description = format!("({arrow:?}) . sum");
                ArrowOf::new(description, move |w: KindApplication<T, i32>| {
                    arrow.call(T::fold_left::<i32, i32, _>(w, 0, i32::wrapping_add))
                })
            }
        })
        .boxed()
}

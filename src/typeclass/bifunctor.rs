//! Bifunctor type class - mapping over both parameters of a binary constructor.
//!
//! `Bifunctor` is implemented on [`Kind2`] tags, so it sees `Either<_, _>` and
//! `(_, _)` as constructors of two parameters, where [`Functor`] only sees the
//! last one.
//!
//! # Laws
//!
//! ```text
//! T::bimap(p, |x| x, |y| y) == p                                             // identity
//! T::bimap(p, |x| f2(f1(x)), |y| g2(g1(y))) == T::bimap(T::bimap(p, f1, g1), f2, g2) // composition
//! T::bimap(p, f, g) == T::second(T::first(p, f), g)                          // consistency
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindness::typeclass::{Bifunctor, PairTag2};
//!
//! let mapped = PairTag2::bimap((42, "hello"), |x: i32| x * 2, |s: &str| s.len());
//! assert_eq!(mapped, (84, 5));
//! ```
//!
//! [`Functor`]: super::Functor

use super::higher::{Kind2, PairTag2, TripleTag2};

/// A binary type constructor that can be mapped on both parameters.
pub trait Bifunctor: Kind2 {
    /// Maps the first parameter with `first_function` and the second with
    /// `second_function`.
    fn bimap<X, A, Y, B, F, G>(
        value: Self::Of<X, A>,
        first_function: F,
        second_function: G,
    ) -> Self::Of<Y, B>
    where
        F: FnOnce(X) -> Y,
        G: FnOnce(A) -> B;

    /// Maps the first parameter only.
    fn first<X, A, Y, F>(value: Self::Of<X, A>, function: F) -> Self::Of<Y, A>
    where
        F: FnOnce(X) -> Y,
    {
        Self::bimap::<X, A, Y, A, F, _>(value, function, |a| a)
    }

    /// Maps the second parameter only.
    fn second<X, A, B, G>(value: Self::Of<X, A>, function: G) -> Self::Of<X, B>
    where
        G: FnOnce(A) -> B,
    {
        Self::bimap::<X, A, X, B, _, G>(value, |x| x, function)
    }
}

impl Bifunctor for PairTag2 {
    fn bimap<X, A, Y, B, F, G>(
        (first, second): (X, A),
        first_function: F,
        second_function: G,
    ) -> (Y, B)
    where
        F: FnOnce(X) -> Y,
        G: FnOnce(A) -> B,
    {
        (first_function(first), second_function(second))
    }
}

/// Maps the last two components; the first is carried through.
impl<Z: 'static> Bifunctor for TripleTag2<Z> {
    fn bimap<X, A, Y, B, F, G>(
        (fixed, middle, last): (Z, X, A),
        first_function: F,
        second_function: G,
    ) -> (Z, Y, B)
    where
        F: FnOnce(X) -> Y,
        G: FnOnce(A) -> B,
    {
        (fixed, first_function(middle), second_function(last))
    }
}

//! Functor type class - mapping over the values of a type constructor.
//!
//! `Functor` is implemented on a *tag* (see [`Kind1`]). The mapped function
//! must be `Fn + 'static`: some functors (`ReaderT`) store it, others (`Vec`)
//! call it once per element.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! T::fmap(fa, |x| x) == fa
//! ```
//!
//! ## Composition
//!
//! ```text
//! T::fmap(fa, |x| g(f(x))) == T::fmap(T::fmap(fa, f), g)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindness::typeclass::{Functor, OptionTag, VecTag};
//!
//! assert_eq!(VecTag::fmap(vec![1, 2, 3], |x: i32| x * 2), vec![2, 4, 6]);
//! assert_eq!(OptionTag::fmap(Some(1), |x: i32| x.to_string()), Some("1".to_string()));
//! ```

use super::higher::{Kind1, OptionTag, PairTag, TripleTag, VecTag};
use super::identity::{Identity, IdentityTag};

/// A type constructor whose contents can be transformed.
pub trait Functor: Kind1 {
    /// Applies `function` to every value inside `fa`, keeping the structure.
    fn fmap<A, B, F>(fa: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static;

    /// Replaces every value inside `fa` with `value`.
    fn replace<A, B>(fa: Self::Of<A>, value: B) -> Self::Of<B>
    where
        A: 'static,
        B: Clone + 'static,
    {
        Self::fmap::<A, B, _>(fa, move |_| value.clone())
    }

    /// Discards the values inside `fa`, keeping only the structure.
    fn void<A: 'static>(fa: Self::Of<A>) -> Self::Of<()> {
        Self::fmap::<A, (), _>(fa, |_| ())
    }
}

// =============================================================================
// Implementations
// =============================================================================

impl Functor for VecTag {
    fn fmap<A, B, F>(fa: Vec<A>, function: F) -> Vec<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.into_iter().map(function).collect()
    }
}

impl Functor for OptionTag {
    fn fmap<A, B, F>(fa: Option<A>, function: F) -> Option<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl Functor for IdentityTag {
    fn fmap<A, B, F>(fa: Identity<A>, function: F) -> Identity<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        Identity(function(fa.0))
    }
}

/// Maps the second component, leaving the environment untouched.
impl<X: 'static> Functor for PairTag<X> {
    fn fmap<A, B, F>((environment, value): (X, A), function: F) -> (X, B)
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        (environment, function(value))
    }
}

impl<X: 'static, Y: 'static> Functor for TripleTag<X, Y> {
    fn fmap<A, B, F>((first, second, value): (X, Y, A), function: F) -> (X, Y, B)
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        (first, second, function(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![1], vec![2])]
    #[case(vec![1, 2, 3], vec![2, 3, 4])]
    fn vec_fmap_maps_every_element(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(VecTag::fmap(input, |x: i32| x + 1), expected);
    }

    #[rstest]
    #[case(Some(2), Some(4))]
    #[case(None, None)]
    fn option_fmap(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(OptionTag::fmap(input, |x: i32| x * 2), expected);
    }

    #[rstest]
    fn identity_fmap_applies_function() {
        assert_eq!(IdentityTag::fmap(Identity(3), |x: i32| x * x), Identity(9));
    }

    #[rstest]
    fn pair_fmap_keeps_environment() {
        let mapped = PairTag::<&str>::fmap(("env", 1), |x: i32| x.to_string());
        assert_eq!(mapped, ("env", "1".to_string()));
    }

    #[rstest]
    fn triple_fmap_maps_last_component() {
        assert_eq!(TripleTag::<u8, char>::fmap((1_u8, 'c', 2), |x: i32| x - 5), (1_u8, 'c', -3));
    }

    #[rstest]
    fn replace_and_void_keep_structure() {
        assert_eq!(VecTag::replace(vec![1, 2, 3], 'x'), vec!['x', 'x', 'x']);
        assert_eq!(OptionTag::void(Some("value")), Some(()));
        assert_eq!(OptionTag::void::<i32>(None), None);
    }
}

//! Apply and Applicative type classes - function application inside a context.
//!
//! [`Apply`] lets a function that is itself inside the context be applied to a
//! value inside the context (`<*>`). [`Applicative`] adds [`Applicative::pure`],
//! which lifts a plain value into the context.
//!
//! # Laws
//!
//! ## Apply: associative composition
//!
//! ```text
//! apply(apply(fmap(u, compose), v), w) == apply(u, apply(v, w))
//! ```
//!
//! ## Applicative
//!
//! ```text
//! apply(pure(id), v) == v                                   // identity
//! apply(apply(apply(pure(compose), u), v), w)
//!     == apply(u, apply(v, w))                              // composition
//! apply(pure(f), pure(x)) == pure(f(x))                     // homomorphism
//! apply(u, pure(y)) == apply(pure(|f| f(y)), u)             // interchange
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindness::typeclass::{Applicative, Apply, VecTag};
//!
//! fn increment(x: i32) -> i32 {
//!     x + 1
//! }
//! fn double(x: i32) -> i32 {
//!     x * 2
//! }
//!
//! let functions: Vec<fn(i32) -> i32> = vec![increment, double];
//! assert_eq!(VecTag::apply(functions, vec![1, 2]), vec![2, 3, 2, 4]);
//! assert_eq!(VecTag::pure(7), vec![7]);
//! ```

use std::rc::Rc;

use super::functor::Functor;
use super::higher::{KindApplication, OptionTag, VecTag};
use super::identity::{Identity, IdentityTag};
use super::monad::apply_by_monad;

/// A functor whose contained functions can be applied to contained values.
pub trait Apply: Functor {
    /// Applies every function in `ff` to the values in `fa`.
    fn apply<A, B, F>(ff: Self::Of<F>, fa: Self::Of<A>) -> Self::Of<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + 'static;

    /// Lifts a binary function over two contexts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindness::typeclass::{Apply, OptionTag};
    ///
    /// assert_eq!(OptionTag::map2(Some(1), Some(2), |a: i32, b: i32| a + b), Some(3));
    /// assert_eq!(OptionTag::map2(Some(1), None, |a: i32, b: i32| a + b), None);
    /// ```
    fn map2<A, B, C, F>(fa: Self::Of<A>, fb: Self::Of<B>, function: F) -> Self::Of<C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
        F: Fn(A, B) -> C + 'static,
    {
        let function = Rc::new(function);
        let partially_applied = Self::fmap::<A, Box<dyn Fn(B) -> C>, _>(fa, move |a: A| {
            let function = Rc::clone(&function);
            Box::new(move |b: B| function(a.clone(), b)) as Box<dyn Fn(B) -> C>
        });
        Self::apply::<B, C, Box<dyn Fn(B) -> C>>(partially_applied, fb)
    }

    /// Sequences both contexts and keeps the values of the first.
    fn apply_first<A, B>(fa: Self::Of<A>, fb: Self::Of<B>) -> Self::Of<A>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        Self::map2::<A, B, A, _>(fa, fb, |a, _| a)
    }

    /// Sequences both contexts and keeps the values of the second.
    fn apply_second<A, B>(fa: Self::Of<A>, fb: Self::Of<B>) -> Self::Of<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        Self::map2::<A, B, B, _>(fa, fb, |_, b| b)
    }
}

/// An [`Apply`] that can lift plain values.
pub trait Applicative: Apply {
    /// Lifts a value into the context with no additional effect.
    fn pure<A: Clone + 'static>(value: A) -> Self::Of<A>;
}

/// `fmap` expressed with `pure` and `apply`: `apply(pure(f), fa)`.
///
/// For applicatives that do not implement `fmap` directly.
pub fn fmap_by_applicative<T, A, B, F>(
    fa: KindApplication<T, A>,
    function: F,
) -> KindApplication<T, B>
where
    T: Applicative,
    A: Clone + 'static,
    B: Clone + 'static,
    F: Fn(A) -> B + Clone + 'static,
{
    T::apply::<A, B, F>(T::pure::<F>(function), fa)
}

// =============================================================================
// Vec Implementation
// =============================================================================

/// Cartesian application: the outer loop runs over the functions, the inner
/// loop over the values, and the results are flattened in that order.
impl Apply for VecTag {
    fn apply<A, B, F>(ff: Vec<F>, fa: Vec<A>) -> Vec<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        let mut results = Vec::with_capacity(ff.len() * fa.len());
        for function in &ff {
            for value in &fa {
                results.push(function(value.clone()));
            }
        }
        results
    }
}

impl Applicative for VecTag {
    fn pure<A: Clone + 'static>(value: A) -> Vec<A> {
        vec![value]
    }
}

// =============================================================================
// Option / Identity Implementations
// =============================================================================

impl Apply for OptionTag {
    fn apply<A, B, F>(ff: Option<F>, fa: Option<A>) -> Option<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        apply_by_monad::<Self, A, B, F>(ff, fa)
    }
}

impl Applicative for OptionTag {
    fn pure<A: Clone + 'static>(value: A) -> Option<A> {
        Some(value)
    }
}

impl Apply for IdentityTag {
    fn apply<A, B, F>(ff: Identity<F>, fa: Identity<A>) -> Identity<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        apply_by_monad::<Self, A, B, F>(ff, fa)
    }
}

impl Applicative for IdentityTag {
    fn pure<A: Clone + 'static>(value: A) -> Identity<A> {
        Identity(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type IntFunction = fn(i32) -> i32;

    fn increment(x: i32) -> i32 {
        x + 1
    }

    fn double(x: i32) -> i32 {
        x * 2
    }

    #[rstest]
    fn vec_apply_single_function() {
        let functions: Vec<IntFunction> = vec![increment as IntFunction];
        assert_eq!(VecTag::apply(functions, vec![10, 20]), vec![11, 21]);
    }

    #[rstest]
    fn vec_apply_runs_functions_in_outer_loop() {
        let functions: Vec<IntFunction> = vec![increment, double];
        assert_eq!(VecTag::apply(functions, vec![1, 2]), vec![2, 3, 2, 4]);
    }

    #[rstest]
    #[case(vec![], vec![1, 2])]
    #[case(vec![increment as IntFunction], vec![])]
    fn vec_apply_with_empty_side_is_empty(
        #[case] functions: Vec<IntFunction>,
        #[case] values: Vec<i32>,
    ) {
        assert!(VecTag::apply(functions, values).is_empty());
    }

    #[rstest]
    #[case(Some(increment as IntFunction), Some(1), Some(2))]
    #[case(None, Some(1), None)]
    #[case(Some(increment as IntFunction), None, None)]
    fn option_apply(
        #[case] function: Option<IntFunction>,
        #[case] value: Option<i32>,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(OptionTag::apply(function, value), expected);
    }

    #[rstest]
    fn identity_apply_and_pure() {
        let decrement: IntFunction = |x| x - 1;
        let function = IdentityTag::pure(decrement);
        assert_eq!(IdentityTag::apply(function, Identity(5)), Identity(4));
    }

    #[rstest]
    fn map2_is_cartesian_for_vec() {
        let pairs = VecTag::map2(vec![1, 2], vec!['a', 'b'], |n: i32, c: char| format!("{n}{c}"));
        assert_eq!(pairs, vec!["1a", "1b", "2a", "2b"]);
    }

    #[rstest]
    fn apply_first_and_second_keep_one_side() {
        assert_eq!(OptionTag::apply_first(Some(1), Some("x")), Some(1));
        assert_eq!(OptionTag::apply_second(Some(1), Some("x")), Some("x"));
        assert_eq!(OptionTag::apply_second(None::<i32>, Some("x")), None);
        assert_eq!(VecTag::apply_first(vec![1, 2], vec![(), ()]), vec![1, 1, 2, 2]);
    }

    #[rstest]
    fn fmap_by_applicative_agrees_with_fmap() {
        let add_ten = |x: i32| x + 10;
        assert_eq!(
            fmap_by_applicative::<VecTag, _, _, _>(vec![1, 2, 3], add_ten),
            VecTag::fmap(vec![1, 2, 3], add_ten)
        );
        assert_eq!(
            fmap_by_applicative::<OptionTag, _, _, _>(Some(1), add_ten),
            Some(11)
        );
    }
}

//! Bind and Monad type classes - sequencing dependent computations.
//!
//! [`Bind`] chains a computation whose next step depends on the previous
//! result (`>>=`). A [`Monad`] is a [`Bind`] that is also an
//! [`Applicative`].
//!
//! The operator forms of the usual notation are named functions here:
//!
//! | notation  | function                    |
//! |-----------|-----------------------------|
//! | `>>=`     | [`Bind::bind`]              |
//! | `=<<`     | [`bind_flipped`]            |
//! | `>=>`     | [`compose_kleisli`]         |
//! | `<=<`     | [`compose_kleisli_flipped`] |
//! | `join`    | [`join`]                    |
//!
//! # Laws
//!
//! ```text
//! bind(bind(m, f), g) == bind(m, |x| bind(f(x), g))   // associativity
//! bind(pure(a), f) == f(a)                            // left identity
//! bind(m, pure) == m                                  // right identity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindness::typeclass::{Bind, OptionTag, VecTag};
//!
//! let halve = |x: i32| if x % 2 == 0 { Some(x / 2) } else { None };
//! assert_eq!(OptionTag::bind(Some(8), halve), Some(4));
//! assert_eq!(OptionTag::bind(Some(3), halve), None);
//!
//! assert_eq!(VecTag::bind(vec![1, 2], |x: i32| vec![x, x * 10]), vec![1, 10, 2, 20]);
//! ```

use std::rc::Rc;

use super::applicative::{Applicative, Apply};
use super::higher::{KindApplication, OptionTag, VecTag};
use super::identity::{Identity, IdentityTag};

/// Sequencing of dependent computations.
pub trait Bind: Apply {
    /// Feeds the values of `ma` to `function` and flattens the result.
    fn bind<A, B, F>(ma: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Self::Of<B> + 'static;
}

/// A lawful combination of [`Applicative`] and [`Bind`].
pub trait Monad: Applicative + Bind {}

/// Flattens one level of nesting.
///
/// # Examples
///
/// ```rust
/// use kindness::typeclass::{join, VecTag};
///
/// assert_eq!(join::<VecTag, _>(vec![vec![1], vec![], vec![2, 3]]), vec![1, 2, 3]);
/// ```
pub fn join<T, A>(mma: KindApplication<T, KindApplication<T, A>>) -> KindApplication<T, A>
where
    T: Bind,
    A: 'static,
{
    T::bind::<KindApplication<T, A>, A, _>(mma, |ma| ma)
}

/// `bind` with its arguments flipped (`=<<`).
pub fn bind_flipped<T, A, B, F>(function: F, ma: KindApplication<T, A>) -> KindApplication<T, B>
where
    T: Bind,
    A: 'static,
    B: 'static,
    F: Fn(A) -> KindApplication<T, B> + 'static,
{
    T::bind::<A, B, F>(ma, function)
}

/// Left-to-right Kleisli composition (`>=>`): runs `first`, then `second`.
///
/// # Examples
///
/// ```rust
/// use kindness::typeclass::{compose_kleisli, OptionTag};
///
/// let parse = |text: &'static str| text.parse::<i32>().ok();
/// let reciprocal = |x: i32| if x == 0 { None } else { Some(100 / x) };
/// let pipeline = compose_kleisli::<OptionTag, _, _, _, _, _>(parse, reciprocal);
///
/// assert_eq!(pipeline("4"), Some(25));
/// assert_eq!(pipeline("0"), None);
/// assert_eq!(pipeline("x"), None);
/// ```
pub fn compose_kleisli<T, A, B, C, F, G>(
    first: F,
    second: G,
) -> impl Fn(A) -> KindApplication<T, C> + 'static
where
    T: Bind,
    A: 'static,
    B: 'static,
    C: 'static,
    F: Fn(A) -> KindApplication<T, B> + 'static,
    G: Fn(B) -> KindApplication<T, C> + 'static,
{
    let second = Rc::new(second);
    move |a: A| {
        let second = Rc::clone(&second);
        T::bind::<B, C, _>(first(a), move |b| second(b))
    }
}

/// Right-to-left Kleisli composition (`<=<`): runs `first` (the right
/// argument) then `second`.
pub fn compose_kleisli_flipped<T, A, B, C, F, G>(
    second: G,
    first: F,
) -> impl Fn(A) -> KindApplication<T, C> + 'static
where
    T: Bind,
    A: 'static,
    B: 'static,
    C: 'static,
    F: Fn(A) -> KindApplication<T, B> + 'static,
    G: Fn(B) -> KindApplication<T, C> + 'static,
{
    compose_kleisli::<T, A, B, C, F, G>(first, second)
}

/// `fmap` expressed with `bind` and `pure`: `bind(fa, |a| pure(f(a)))`.
pub fn fmap_by_monad<M, A, B, F>(fa: KindApplication<M, A>, function: F) -> KindApplication<M, B>
where
    M: Monad,
    A: 'static,
    B: Clone + 'static,
    F: Fn(A) -> B + 'static,
{
    M::bind::<A, B, _>(fa, move |a| M::pure::<B>(function(a)))
}

/// `apply` expressed with `bind` and `pure`:
/// `bind(ff, |f| bind(fa, |a| pure(f(a))))`.
///
/// The functions are the outer loop; `fa` is replayed once per function.
pub fn apply_by_monad<M, A, B, F>(
    ff: KindApplication<M, F>,
    fa: KindApplication<M, A>,
) -> KindApplication<M, B>
where
    M: Monad,
    A: Clone + 'static,
    B: Clone + 'static,
    F: Fn(A) -> B + 'static,
    KindApplication<M, A>: Clone + 'static,
{
    M::bind::<F, B, _>(ff, move |function: F| {
        M::bind::<A, B, _>(fa.clone(), move |a: A| M::pure::<B>(function(a)))
    })
}

// =============================================================================
// Implementations
// =============================================================================

impl Bind for VecTag {
    fn bind<A, B, F>(ma: Vec<A>, function: F) -> Vec<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Vec<B> + 'static,
    {
        ma.into_iter().flat_map(function).collect()
    }
}

impl Monad for VecTag {}

impl Bind for OptionTag {
    fn bind<A, B, F>(ma: Option<A>, function: F) -> Option<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Option<B> + 'static,
    {
        ma.and_then(function)
    }
}

impl Monad for OptionTag {}

impl Bind for IdentityTag {
    fn bind<A, B, F>(ma: Identity<A>, function: F) -> Identity<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Identity<B> + 'static,
    {
        function(ma.0)
    }
}

impl Monad for IdentityTag {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Functor;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![1], vec![1, -1])]
    #[case(vec![1, 2], vec![1, -1, 2, -2])]
    fn vec_bind_flat_maps_in_order(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(VecTag::bind(input, |x: i32| vec![x, -x]), expected);
    }

    #[rstest]
    fn identity_bind_applies_function() {
        assert_eq!(IdentityTag::bind(Identity(2), |x: i32| Identity(x + 3)), Identity(5));
    }

    #[rstest]
    fn join_flattens_option() {
        assert_eq!(join::<OptionTag, i32>(Some(Some(1))), Some(1));
        assert_eq!(join::<OptionTag, i32>(Some(None)), None);
        assert_eq!(join::<OptionTag, i32>(None), None);
    }

    #[rstest]
    fn bind_flipped_matches_bind() {
        let duplicate = |x: i32| vec![x, x];
        assert_eq!(
            bind_flipped::<VecTag, _, _, _>(duplicate, vec![1, 2]),
            VecTag::bind(vec![1, 2], duplicate)
        );
    }

    #[rstest]
    fn kleisli_composition_runs_left_to_right() {
        let neighbours = |x: i32| vec![x - 1, x + 1];
        let tag = |x: i32| vec![format!("<{x}>")];
        let forward = compose_kleisli::<VecTag, _, _, _, _, _>(neighbours, tag);
        let backward = compose_kleisli_flipped::<VecTag, _, _, _, _, _>(tag, neighbours);

        assert_eq!(forward(5), vec!["<4>", "<6>"]);
        assert_eq!(backward(5), forward(5));
    }

    #[rstest]
    fn fmap_by_monad_agrees_with_fmap() {
        let square = |x: i32| x * x;
        assert_eq!(
            fmap_by_monad::<VecTag, _, _, _>(vec![1, 2, 3], square),
            VecTag::fmap(vec![1, 2, 3], square)
        );
        assert_eq!(
            fmap_by_monad::<IdentityTag, _, _, _>(Identity(4), square),
            Identity(16)
        );
    }

    #[rstest]
    fn apply_by_monad_agrees_with_vec_apply() {
        fn increment(x: i32) -> i32 {
            x + 1
        }
        fn double(x: i32) -> i32 {
            x * 2
        }
        let functions: Vec<fn(i32) -> i32> = vec![increment, double];
        assert_eq!(
            apply_by_monad::<VecTag, _, _, _>(functions.clone(), vec![1, 2]),
            VecTag::apply(functions, vec![1, 2])
        );
    }
}

//! Extend, Duplicate and Comonad type classes - the duals of Bind, join and pure.
//!
//! - [`Extend::extend`] (`<<=`) applies a function that consumes a whole
//!   context at every position, building a new context of results.
//! - [`Duplicate::duplicate`] nests a context inside itself.
//! - [`Comonad::extract`] reads the focused value out of a context.
//!
//! Either of `extend` and `duplicate` determines the other:
//! [`extend_by_duplicate`] and [`duplicate_by_extend`].
//!
//! # Laws
//!
//! ```text
//! extend(extend(w, g), f) == extend(w, |x| f(extend(x, g)))  // Extend associativity
//! extend(w, extract) == w                                     // Comonad left identity
//! extract(extend(w, f)) == f(w)                               // Comonad right identity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindness::typeclass::{Comonad, Extend, PairTag};
//!
//! let focused = ("config", 21);
//! let doubled = PairTag::<&str>::extend(focused, |(name, value): (&str, i32)| name.len() as i32 + value * 2);
//! assert_eq!(doubled, ("config", 48));
//! assert_eq!(PairTag::<&str>::extract(doubled), 48);
//! ```

use std::rc::Rc;

use super::functor::Functor;
use super::higher::{KindApplication, PairTag};
use super::identity::{Identity, IdentityTag};

/// Context-consuming functions extended over every position.
pub trait Extend: Functor {
    /// Builds a new context by applying `function` to `w` at every position.
    fn extend<A, B, F>(w: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(Self::Of<A>) -> B + 'static;
}

/// Nesting of a context inside itself.
pub trait Duplicate: Functor {
    /// Wraps `w` in one more layer of the same context.
    fn duplicate<A: 'static>(w: Self::Of<A>) -> Self::Of<Self::Of<A>>;
}

/// A context with a focused value that can always be read.
pub trait Comonad: Extend + Duplicate {
    /// Reads the focused value.
    fn extract<A: 'static>(w: Self::Of<A>) -> A;
}

/// `extend` expressed with `duplicate` and `fmap`: `fmap(duplicate(w), f)`.
pub fn extend_by_duplicate<W, A, B, F>(w: KindApplication<W, A>, function: F) -> KindApplication<W, B>
where
    W: Duplicate,
    A: 'static,
    B: 'static,
    F: Fn(KindApplication<W, A>) -> B + 'static,
{
    W::fmap::<KindApplication<W, A>, B, F>(W::duplicate::<A>(w), function)
}

/// `duplicate` expressed with `extend`: `extend(w, id)`.
pub fn duplicate_by_extend<W, A>(w: KindApplication<W, A>) -> KindApplication<W, KindApplication<W, A>>
where
    W: Extend,
    A: 'static,
{
    W::extend::<A, KindApplication<W, A>, _>(w, |whole| whole)
}

/// `extend` with its arguments flipped (`=>>`).
pub fn extend_flipped<W, A, B, F>(w: KindApplication<W, A>, function: F) -> KindApplication<W, B>
where
    W: Extend,
    A: 'static,
    B: 'static,
    F: Fn(KindApplication<W, A>) -> B + 'static,
{
    W::extend::<A, B, F>(w, function)
}

/// Left-to-right co-Kleisli composition (`=>=`): `second(extend(w, first))`.
///
/// # Examples
///
/// ```rust
/// use kindness::typeclass::{compose_cokleisli, Identity, IdentityTag};
///
/// let first = |Identity(x): Identity<i32>| x + 1;
/// let second = |Identity(x): Identity<i32>| x * 10;
/// let composed = compose_cokleisli::<IdentityTag, _, _, _, _, _>(first, second);
/// assert_eq!(composed(Identity(4)), 50);
/// ```
pub fn compose_cokleisli<W, A, B, C, F, G>(
    first: F,
    second: G,
) -> impl Fn(KindApplication<W, A>) -> C + 'static
where
    W: Extend,
    A: 'static,
    B: 'static,
    C: 'static,
    F: Fn(KindApplication<W, A>) -> B + 'static,
    G: Fn(KindApplication<W, B>) -> C + 'static,
{
    let first = Rc::new(first);
    move |w: KindApplication<W, A>| {
        let first = Rc::clone(&first);
        second(W::extend::<A, B, _>(w, move |whole| first(whole)))
    }
}

/// Right-to-left co-Kleisli composition (`=<=`).
pub fn compose_cokleisli_flipped<W, A, B, C, F, G>(
    second: G,
    first: F,
) -> impl Fn(KindApplication<W, A>) -> C + 'static
where
    W: Extend,
    A: 'static,
    B: 'static,
    C: 'static,
    F: Fn(KindApplication<W, A>) -> B + 'static,
    G: Fn(KindApplication<W, B>) -> C + 'static,
{
    compose_cokleisli::<W, A, B, C, F, G>(first, second)
}

// =============================================================================
// Identity Implementation
// =============================================================================

impl Extend for IdentityTag {
    fn extend<A, B, F>(w: Identity<A>, function: F) -> Identity<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(Identity<A>) -> B + 'static,
    {
        Identity(function(w))
    }
}

impl Duplicate for IdentityTag {
    fn duplicate<A: 'static>(w: Identity<A>) -> Identity<Identity<A>> {
        duplicate_by_extend::<Self, A>(w)
    }
}

impl Comonad for IdentityTag {
    fn extract<A: 'static>(w: Identity<A>) -> A {
        w.0
    }
}

// =============================================================================
// Pair (environment comonad) Implementation
// =============================================================================

/// Duplicating copies the environment into the nested pair.
impl<X: Clone + 'static> Duplicate for PairTag<X> {
    fn duplicate<A: 'static>((environment, value): (X, A)) -> (X, (X, A)) {
        (environment.clone(), (environment, value))
    }
}

impl<X: Clone + 'static> Extend for PairTag<X> {
    fn extend<A, B, F>(w: (X, A), function: F) -> (X, B)
    where
        A: 'static,
        B: 'static,
        F: Fn((X, A)) -> B + 'static,
    {
        extend_by_duplicate::<Self, A, B, F>(w, function)
    }
}

impl<X: Clone + 'static> Comonad for PairTag<X> {
    fn extract<A: 'static>((_, value): (X, A)) -> A {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_extend_feeds_whole_context() {
        let extended = IdentityTag::extend(Identity(3), |Identity(x): Identity<i32>| x * 2);
        assert_eq!(extended, Identity(6));
    }

    #[rstest]
    fn identity_duplicate_nests_once() {
        assert_eq!(IdentityTag::duplicate(Identity('a')), Identity(Identity('a')));
        assert_eq!(IdentityTag::extract(Identity('a')), 'a');
    }

    #[rstest]
    fn pair_duplicate_copies_environment() {
        assert_eq!(PairTag::<u8>::duplicate((7_u8, "x")), (7_u8, (7_u8, "x")));
    }

    #[rstest]
    #[case((2, 10), (2, 20))]
    #[case((0, 10), (0, 0))]
    fn pair_extend_sees_environment(#[case] w: (i32, i32), #[case] expected: (i32, i32)) {
        assert_eq!(PairTag::<i32>::extend(w, |(scale, x): (i32, i32)| scale * x), expected);
    }

    #[rstest]
    fn extend_by_duplicate_agrees_with_identity_extend() {
        let via_duplicate = extend_by_duplicate::<IdentityTag, _, _, _>(
            Identity(5),
            |Identity(x): Identity<i32>| x + 1,
        );
        assert_eq!(via_duplicate, IdentityTag::extend(Identity(5), |Identity(x): Identity<i32>| x + 1));
    }

    #[rstest]
    fn duplicate_by_extend_agrees_with_pair_duplicate() {
        assert_eq!(
            duplicate_by_extend::<PairTag<&str>, i32>(("env", 1)),
            PairTag::<&str>::duplicate(("env", 1))
        );
    }

    #[rstest]
    fn extend_flipped_matches_extend() {
        let sum = |(left, right): (i32, i32)| left + right;
        assert_eq!(
            extend_flipped::<PairTag<i32>, _, _, _>((1, 2), sum),
            PairTag::<i32>::extend((1, 2), sum)
        );
    }

    #[rstest]
    fn cokleisli_composition_in_both_directions() {
        let scaled = |(scale, x): (i32, i32)| scale * x;
        let shifted = |(scale, x): (i32, i32)| x + scale;
        let forward = compose_cokleisli::<PairTag<i32>, _, _, _, _, _>(scaled, shifted);
        let backward = compose_cokleisli_flipped::<PairTag<i32>, _, _, _, _, _>(shifted, scaled);

        assert_eq!(forward((3, 4)), 15);
        assert_eq!(backward((3, 4)), 15);
    }
}

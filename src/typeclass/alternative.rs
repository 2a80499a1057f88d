//! Choice type classes: Alt, Plus, Alternative, MonadZero and MonadPlus.
//!
//! - [`Alt`]: an associative choice `alt` (`<|>`) between two computations
//! - [`Plus`]: an identity element `empty` for `alt`
//! - [`Alternative`]: `Applicative` + `Plus`, with `guard`, `optional` and `choice`
//! - [`MonadZero`]: `Alternative` + `Monad` where `empty` annihilates `bind`
//! - [`MonadPlus`]: `MonadZero` where `bind` distributes over `alt`
//!
//! # Laws
//!
//! ```text
//! alt(alt(x, y), z) == alt(x, alt(y, z))                    // Alt associativity
//! fmap(alt(x, y), f) == alt(fmap(x, f), fmap(y, f))         // Alt distributivity
//! alt(empty, x) == x == alt(x, empty)                       // Plus identity
//! fmap(empty, f) == empty                                   // Plus annihilation
//! apply(alt(f, g), x) == alt(apply(f, x), apply(g, x))      // Alternative distributivity
//! apply(empty, x) == empty                                  // Alternative annihilation
//! bind(empty, f) == empty                                   // MonadZero annihilation
//! bind(alt(x, y), f) == alt(bind(x, f), bind(y, f))         // MonadPlus distributivity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindness::typeclass::{Alt, Alternative, OptionTag, Plus, VecTag};
//!
//! assert_eq!(VecTag::alt(vec![1, 2], vec![3, 4]), vec![1, 2, 3, 4]);
//! assert_eq!(OptionTag::alt(None, Some(42)), Some(42));
//! assert_eq!(VecTag::empty::<i32>(), Vec::<i32>::new());
//! assert_eq!(OptionTag::guard(3 > 5), None);
//! ```

use super::applicative::Applicative;
use super::functor::Functor;
use super::higher::{OptionTag, VecTag};
use super::identity::{Identity, IdentityTag};
use super::monad::Monad;

/// An associative choice between two computations.
pub trait Alt: Functor {
    /// Chooses between `first` and `second`.
    fn alt<A: 'static>(first: Self::Of<A>, second: Self::Of<A>) -> Self::Of<A>;
}

/// An [`Alt`] with an identity element.
pub trait Plus: Alt {
    /// The identity element of [`Alt::alt`].
    fn empty<A: 'static>() -> Self::Of<A>;
}

/// An applicative functor with a monoidal choice.
pub trait Alternative: Applicative + Plus {
    /// Succeeds with `()` when `condition` holds, otherwise fails with `empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindness::typeclass::{Alternative, Bind, VecTag};
    ///
    /// let evens = VecTag::bind(vec![1, 2, 3, 4], |x: i32| {
    ///     VecTag::bind(VecTag::guard(x % 2 == 0), move |()| vec![x])
    /// });
    /// assert_eq!(evens, vec![2, 4]);
    /// ```
    fn guard(condition: bool) -> Self::Of<()> {
        if condition {
            Self::pure::<()>(())
        } else {
            Self::empty::<()>()
        }
    }

    /// Turns failure into a successful `None`.
    fn optional<A>(fa: Self::Of<A>) -> Self::Of<Option<A>>
    where
        A: Clone + 'static,
    {
        Self::alt::<Option<A>>(
            Self::fmap::<A, Option<A>, _>(fa, Some),
            Self::pure::<Option<A>>(None),
        )
    }

    /// Folds the alternatives left to right with `alt`, starting from `empty`.
    fn choice<A, I>(alternatives: I) -> Self::Of<A>
    where
        A: 'static,
        I: IntoIterator<Item = Self::Of<A>>,
    {
        alternatives
            .into_iter()
            .fold(Self::empty::<A>(), |accumulator, next| Self::alt::<A>(accumulator, next))
    }
}

/// An [`Alternative`] monad in which `empty` short-circuits `bind`.
pub trait MonadZero: Alternative + Monad {}

/// A [`MonadZero`] in which `bind` distributes over `alt`.
pub trait MonadPlus: MonadZero {}

// =============================================================================
// Vec Implementation
// =============================================================================

/// Concatenation.
impl Alt for VecTag {
    fn alt<A: 'static>(mut first: Vec<A>, mut second: Vec<A>) -> Vec<A> {
        first.append(&mut second);
        first
    }
}

impl Plus for VecTag {
    fn empty<A: 'static>() -> Vec<A> {
        Vec::new()
    }
}

impl Alternative for VecTag {}
impl MonadZero for VecTag {}
impl MonadPlus for VecTag {}

// =============================================================================
// Option Implementation
// =============================================================================

/// Left-biased: the first `Some` wins.
///
/// `Option` is a [`MonadZero`] but not a [`MonadPlus`]: once the left
/// operand succeeds the right one is discarded, so `bind` cannot distribute
/// over `alt`.
impl Alt for OptionTag {
    fn alt<A: 'static>(first: Option<A>, second: Option<A>) -> Option<A> {
        first.or(second)
    }
}

impl Plus for OptionTag {
    fn empty<A: 'static>() -> Option<A> {
        None
    }
}

impl Alternative for OptionTag {}
impl MonadZero for OptionTag {}

// =============================================================================
// Identity Implementation
// =============================================================================

/// Always keeps the left operand. There is no `empty`.
impl Alt for IdentityTag {
    fn alt<A: 'static>(first: Identity<A>, _second: Identity<A>) -> Identity<A> {
        first
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Bind;
    use rstest::rstest;

    #[rstest]
    #[case(vec![1, 2], vec![3, 4], vec![1, 2, 3, 4])]
    #[case(vec![], vec![3], vec![3])]
    #[case(vec![1], vec![], vec![1])]
    fn vec_alt_concatenates(
        #[case] first: Vec<i32>,
        #[case] second: Vec<i32>,
        #[case] expected: Vec<i32>,
    ) {
        assert_eq!(VecTag::alt(first, second), expected);
    }

    #[rstest]
    #[case(Some(1), Some(2), Some(1))]
    #[case(None, Some(2), Some(2))]
    #[case(Some(1), None, Some(1))]
    #[case(None, None, None)]
    fn option_alt_picks_first_some(
        #[case] first: Option<i32>,
        #[case] second: Option<i32>,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(OptionTag::alt(first, second), expected);
    }

    #[rstest]
    fn identity_alt_keeps_left() {
        assert_eq!(IdentityTag::alt(Identity(1), Identity(2)), Identity(1));
    }

    #[rstest]
    fn guard_filters() {
        assert_eq!(VecTag::guard(true), vec![()]);
        assert!(VecTag::guard(false).is_empty());
        assert_eq!(OptionTag::guard(true), Some(()));
    }

    #[rstest]
    fn optional_recovers_from_failure() {
        assert_eq!(OptionTag::optional(Some(5)), Some(Some(5)));
        assert_eq!(OptionTag::optional::<i32>(None), Some(None));
        assert_eq!(VecTag::optional(vec![1, 2]), vec![Some(1), Some(2), None]);
    }

    #[rstest]
    fn choice_folds_with_alt() {
        assert_eq!(OptionTag::choice(vec![None, Some(2), Some(3)]), Some(2));
        assert_eq!(OptionTag::choice(Vec::<Option<i32>>::new()), None);
        assert_eq!(VecTag::choice(vec![vec![1], vec![2, 3]]), vec![1, 2, 3]);
    }

    #[rstest]
    fn monad_zero_empty_short_circuits_bind() {
        let bound = OptionTag::bind(OptionTag::empty::<i32>(), |x: i32| Some(x + 1));
        assert_eq!(bound, None);
    }
}

//! Complete law suites per type class.
//!
//! Every suite takes the element type `A` as a type parameter, a strategy for
//! the container under test and the projection used to compare results. The
//! values and functions the laws quantify over come from [`LawDomain`].
//! Suites for a class also run the suites of the classes it requires only
//! where noted; call each suite an instance claims.

use proptest::prelude::*;

use super::domain::LawDomain;
use super::properties::{
    Arrow, Cokleisli, Kleisli, alt_associativity, alt_distributivity, alternative_annihilation,
    alternative_distributivity, applicative_composition, applicative_homomorphism, applicative_identity,
    applicative_interchange, apply_associative_composition, bind_associativity, comonad_left_identity,
    comonad_right_identity, extend_associativity, foldable_consistency, functor_composition, functor_identity,
    monad_left_identity, monad_plus_distributivity, monad_right_identity, monad_zero_annihilation,
    monoid_left_identity, monoid_right_identity, plus_annihilation, plus_left_identity, plus_right_identity,
    semigroup_associativity,
};
use super::runner::{LawViolation, check_law};
use crate::typeclass::{
    Alt, Alternative, Applicative, Apply, Bind, Comonad, Extend, Foldable, Functor, KindApplication, Monad,
    MonadPlus, MonadZero, Monoid, Plus, Semigroup,
};

/// Functor identity and composition.
///
/// # Errors
///
/// The first [`LawViolation`] found.
///
/// # Examples
///
/// ```rust
/// use kindness::laws::check_functor_laws;
/// use kindness::typeclass::VecTag;
/// use proptest::prelude::*;
///
/// let numbers = prop::collection::vec(any::<i32>(), 0..8);
/// assert!(check_functor_laws::<VecTag, i32, _, _, _>(numbers, |v| v).is_ok());
///
/// let words = prop::collection::vec("[a-z]{0,3}", 0..8);
/// assert!(check_functor_laws::<VecTag, String, _, _, _>(words, |v| v).is_ok());
/// ```
pub fn check_functor_laws<T, A, S, P, R>(values: S, project: P) -> Result<(), LawViolation>
where
    T: Functor,
    A: LawDomain,
    S: Strategy<Value = KindApplication<T, A>> + Clone,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
    KindApplication<T, A>: Clone,
{
    check_law("functor identity", values.clone(), |fa| functor_identity::<T, A, _, _>(fa, &project))?;
    check_law("functor composition", (values, A::arrows(), A::arrows()), |(fa, f, g)| {
        functor_composition::<T, A, _, _>(fa, f, g, &project)
    })
}

/// Apply associative composition, after the functor laws.
///
/// # Errors
///
/// The first [`LawViolation`] found.
pub fn check_apply_laws<T, A, S, F, P, R>(values: S, functions: F, project: P) -> Result<(), LawViolation>
where
    T: Apply,
    A: LawDomain,
    S: Strategy<Value = KindApplication<T, A>> + Clone,
    F: Strategy<Value = KindApplication<T, Arrow<A>>> + Clone,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
    KindApplication<T, A>: Clone,
    KindApplication<T, Arrow<A>>: Clone,
{
    check_functor_laws::<T, A, _, _, _>(values.clone(), &project)?;
    check_law(
        "apply associative composition",
        (functions.clone(), functions, values),
        |(u, v, w)| apply_associative_composition::<T, A, _, _>(u, v, w, &project),
    )
}

/// Applicative identity, composition, homomorphism and interchange, after the
/// apply laws.
///
/// # Errors
///
/// The first [`LawViolation`] found.
pub fn check_applicative_laws<T, A, S, F, P, R>(values: S, functions: F, project: P) -> Result<(), LawViolation>
where
    T: Applicative,
    A: LawDomain,
    S: Strategy<Value = KindApplication<T, A>> + Clone,
    F: Strategy<Value = KindApplication<T, Arrow<A>>> + Clone,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
    KindApplication<T, A>: Clone,
    KindApplication<T, Arrow<A>>: Clone,
{
    check_apply_laws::<T, A, _, _, _, _>(values.clone(), functions.clone(), &project)?;
    check_law("applicative identity", values.clone(), |v| {
        applicative_identity::<T, A, _, _>(v, &project)
    })?;
    check_law(
        "applicative composition",
        (functions.clone(), functions.clone(), values),
        |(u, v, w)| applicative_composition::<T, A, _, _>(u, v, w, &project),
    )?;
    check_law("applicative homomorphism", (A::arrows(), A::values()), |(f, x)| {
        applicative_homomorphism::<T, A, _, _>(f, x, &project)
    })?;
    check_law("applicative interchange", (functions, A::values()), |(u, y)| {
        applicative_interchange::<T, A, _, _>(u, y, &project)
    })
}

/// Bind associativity.
///
/// # Errors
///
/// The first [`LawViolation`] found.
pub fn check_bind_laws<T, A, S, K, P, R>(values: S, kleisli: K, project: P) -> Result<(), LawViolation>
where
    T: Bind,
    A: LawDomain,
    S: Strategy<Value = KindApplication<T, A>>,
    K: Strategy<Value = Kleisli<T, A>> + Clone,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
    KindApplication<T, A>: Clone,
{
    check_law("bind associativity", (values, kleisli.clone(), kleisli), |(m, f, g)| {
        bind_associativity::<T, A, _, _>(m, f, g, &project)
    })
}

/// Monad left and right identity, after the bind laws.
///
/// # Errors
///
/// The first [`LawViolation`] found.
///
/// # Examples
///
/// ```rust
/// use kindness::laws::{check_monad_laws, kleisli_alternative_i32};
/// use kindness::typeclass::OptionTag;
/// use proptest::prelude::*;
///
/// let values = proptest::option::of(any::<i32>());
/// let kleisli = kleisli_alternative_i32::<OptionTag>();
/// assert!(check_monad_laws::<OptionTag, i32, _, _, _, _>(values, kleisli, |o| o).is_ok());
/// ```
pub fn check_monad_laws<T, A, S, K, P, R>(values: S, kleisli: K, project: P) -> Result<(), LawViolation>
where
    T: Monad,
    A: LawDomain,
    S: Strategy<Value = KindApplication<T, A>> + Clone,
    K: Strategy<Value = Kleisli<T, A>> + Clone,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
    KindApplication<T, A>: Clone,
{
    check_bind_laws::<T, A, _, _, _, _>(values.clone(), kleisli.clone(), &project)?;
    check_law("monad left identity", (A::values(), kleisli), |(a, f)| {
        monad_left_identity::<T, A, _, _>(a, f, &project)
    })?;
    check_law("monad right identity", values, |m| monad_right_identity::<T, A, _, _>(m, &project))
}

/// Alt associativity and distributivity.
///
/// # Errors
///
/// The first [`LawViolation`] found.
pub fn check_alt_laws<T, A, S, P, R>(values: S, project: P) -> Result<(), LawViolation>
where
    T: Alt,
    A: LawDomain,
    S: Strategy<Value = KindApplication<T, A>> + Clone,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
    KindApplication<T, A>: Clone,
{
    check_law("alt associativity", (values.clone(), values.clone(), values.clone()), |(x, y, z)| {
        alt_associativity::<T, A, _, _>(x, y, z, &project)
    })?;
    check_law("alt distributivity", (values.clone(), values, A::arrows()), |(x, y, f)| {
        alt_distributivity::<T, A, _, _>(x, y, f, &project)
    })
}

/// Plus identities and annihilation, after the alt laws.
///
/// # Errors
///
/// The first [`LawViolation`] found.
pub fn check_plus_laws<T, A, S, P, R>(values: S, project: P) -> Result<(), LawViolation>
where
    T: Plus,
    A: LawDomain,
    S: Strategy<Value = KindApplication<T, A>> + Clone,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
    KindApplication<T, A>: Clone,
{
    check_alt_laws::<T, A, _, _, _>(values.clone(), &project)?;
    check_law("plus left identity", values.clone(), |x| plus_left_identity::<T, A, _, _>(x, &project))?;
    check_law("plus right identity", values, |x| plus_right_identity::<T, A, _, _>(x, &project))?;
    check_law("plus annihilation", A::arrows(), |f| plus_annihilation::<T, A, _, _>(f, &project))
}

/// Alternative distributivity and annihilation.
///
/// # Errors
///
/// The first [`LawViolation`] found.
pub fn check_alternative_laws<T, A, S, F, P, R>(values: S, functions: F, project: P) -> Result<(), LawViolation>
where
    T: Alternative,
    A: LawDomain,
    S: Strategy<Value = KindApplication<T, A>> + Clone,
    F: Strategy<Value = KindApplication<T, Arrow<A>>> + Clone,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
    KindApplication<T, A>: Clone,
    KindApplication<T, Arrow<A>>: Clone,
{
    check_law(
        "alternative distributivity",
        (functions.clone(), functions, values.clone()),
        |(f, g, x)| alternative_distributivity::<T, A, _, _>(f, g, x, &project),
    )?;
    check_law("alternative annihilation", values, |x| {
        alternative_annihilation::<T, A, _, _>(x, &project)
    })
}

/// Monad zero annihilation.
///
/// # Errors
///
/// The first [`LawViolation`] found.
pub fn check_monad_zero_laws<T, A, K, P, R>(kleisli: K, project: P) -> Result<(), LawViolation>
where
    T: MonadZero,
    A: LawDomain,
    K: Strategy<Value = Kleisli<T, A>>,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
{
    check_law("monad zero annihilation", kleisli, |f| {
        monad_zero_annihilation::<T, A, _, _>(f, &project)
    })
}

/// Monad plus distributivity, after the monad zero laws.
///
/// # Errors
///
/// The first [`LawViolation`] found.
pub fn check_monad_plus_laws<T, A, S, K, P, R>(values: S, kleisli: K, project: P) -> Result<(), LawViolation>
where
    T: MonadPlus,
    A: LawDomain,
    S: Strategy<Value = KindApplication<T, A>> + Clone,
    K: Strategy<Value = Kleisli<T, A>> + Clone,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
    KindApplication<T, A>: Clone,
{
    check_monad_zero_laws::<T, A, _, _, _>(kleisli.clone(), &project)?;
    check_law("monad plus distributivity", (values.clone(), values, kleisli), |(x, y, f)| {
        monad_plus_distributivity::<T, A, _, _>(x, y, f, &project)
    })
}

/// Semigroup associativity.
///
/// # Errors
///
/// The first [`LawViolation`] found.
pub fn check_semigroup_laws<S>(values: S) -> Result<(), LawViolation>
where
    S: Strategy + Clone,
    S::Value: Semigroup + Clone + PartialEq,
{
    check_law("semigroup associativity", (values.clone(), values.clone(), values), |(a, b, c)| {
        semigroup_associativity(a, b, c)
    })
}

/// Monoid identities, after the semigroup laws.
///
/// # Errors
///
/// The first [`LawViolation`] found.
///
/// # Examples
///
/// ```rust
/// use kindness::laws::check_monoid_laws;
/// use proptest::prelude::*;
///
/// assert!(check_monoid_laws(".{0,6}").is_ok());
/// ```
pub fn check_monoid_laws<S>(values: S) -> Result<(), LawViolation>
where
    S: Strategy + Clone,
    S::Value: Monoid + Clone + PartialEq,
{
    check_semigroup_laws(values.clone())?;
    check_law("monoid left identity", values.clone(), monoid_left_identity)?;
    check_law("monoid right identity", values, monoid_right_identity)
}

/// Extend associativity.
///
/// # Errors
///
/// The first [`LawViolation`] found.
pub fn check_extend_laws<T, A, S, C, P, R>(values: S, cokleisli: C, project: P) -> Result<(), LawViolation>
where
    T: Extend,
    A: LawDomain,
    S: Strategy<Value = KindApplication<T, A>>,
    C: Strategy<Value = Cokleisli<T, A>> + Clone,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
    KindApplication<T, A>: Clone,
{
    check_law("extend associativity", (values, cokleisli.clone(), cokleisli), |(w, f, g)| {
        extend_associativity::<T, A, _, _>(w, f, g, &project)
    })
}

/// Comonad left and right identity, after the extend laws.
///
/// # Errors
///
/// The first [`LawViolation`] found.
pub fn check_comonad_laws<T, A, S, C, P, R>(values: S, cokleisli: C, project: P) -> Result<(), LawViolation>
where
    T: Comonad,
    A: LawDomain,
    S: Strategy<Value = KindApplication<T, A>> + Clone,
    C: Strategy<Value = Cokleisli<T, A>> + Clone,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
    KindApplication<T, A>: Clone,
{
    check_extend_laws::<T, A, _, _, _, _>(values.clone(), cokleisli.clone(), &project)?;
    check_law("comonad left identity", values.clone(), |w| {
        comonad_left_identity::<T, A, _, _>(w, &project)
    })?;
    check_law("comonad right identity", (values, cokleisli), |(w, f)| {
        comonad_right_identity::<T, A>(w, f)
    })
}

/// Consistency of the folds with each other.
///
/// # Errors
///
/// The first [`LawViolation`] found.
pub fn check_foldable_laws<T, A, S>(values: S) -> Result<(), LawViolation>
where
    T: Foldable,
    A: LawDomain,
    S: Strategy<Value = KindApplication<T, A>>,
    KindApplication<T, A>: Clone,
{
    check_law("foldable consistency", values, foldable_consistency::<T, A>)
}

#[cfg(feature = "effect")]
pub use self::monad_trans::check_monad_trans_laws;

#[cfg(feature = "effect")]
mod monad_trans {
    use proptest::prelude::*;

    use super::super::domain::LawDomain;
    use super::super::properties::{Kleisli, monad_trans_bind_distributivity, monad_trans_identity};
    use super::super::runner::{LawViolation, check_law};
    use crate::effect::MonadTrans;
    use crate::typeclass::{KindApplication, Monad};

    /// Lift identity and bind distributivity for the transformer `T` over the
    /// inner monad `M`.
    ///
    /// # Errors
    ///
    /// The first [`LawViolation`] found.
    pub fn check_monad_trans_laws<T, M, A, S, K, P, R>(values: S, kleisli: K, project: P) -> Result<(), LawViolation>
    where
        T: MonadTrans,
        M: Monad,
        A: LawDomain,
        S: Strategy<Value = KindApplication<M, A>>,
        K: Strategy<Value = Kleisli<M, A>>,
        P: Fn(KindApplication<T::Transformed<M>, A>) -> R,
        R: PartialEq,
        KindApplication<M, A>: Clone,
    {
        check_law("monad trans identity", A::values(), |a| {
            monad_trans_identity::<T, M, A, _, _>(a, &project)
        })?;
        check_law("monad trans bind distributivity", (values, kleisli), |(m, f)| {
            monad_trans_bind_distributivity::<T, M, A, _, _>(m, f, &project)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::laws::arrow::{
        ArrowOf, arrow_i32, arrows, cokleisli, cokleisli_i32, kleisli_alternative, kleisli_alternative_i32,
        kleisli_pure_i32,
    };
    use crate::typeclass::{Identity, IdentityTag, OptionTag, PairTag, Sum, VecTag};
    use rstest::rstest;
    use std::num::Wrapping;

    fn small_vec() -> impl Strategy<Value = Vec<i32>> + Clone {
        prop::collection::vec(any::<i32>(), 0..4)
    }

    fn identity_of() -> impl Strategy<Value = Identity<i32>> + Clone {
        any::<i32>().prop_map(Identity)
    }

    #[rstest]
    fn option_passes_every_claimed_suite() {
        let values = proptest::option::of(any::<i32>());
        let functions = proptest::option::of(arrow_i32());
        let same = |o: Option<i32>| o;
        assert_eq!(check_applicative_laws::<OptionTag, i32, _, _, _, _>(values.clone(), functions.clone(), same), Ok(()));
        assert_eq!(check_monad_laws::<OptionTag, i32, _, _, _, _>(values.clone(), kleisli_alternative_i32::<OptionTag>(), same), Ok(()));
        assert_eq!(check_plus_laws::<OptionTag, i32, _, _, _>(values.clone(), same), Ok(()));
        assert_eq!(check_alternative_laws::<OptionTag, i32, _, _, _, _>(values.clone(), functions, same), Ok(()));
        assert_eq!(check_monad_zero_laws::<OptionTag, i32, _, _, _>(kleisli_alternative_i32::<OptionTag>(), same), Ok(()));
        assert_eq!(check_foldable_laws::<OptionTag, i32, _>(values), Ok(()));
    }

    #[rstest]
    fn vec_passes_monad_plus_suite() {
        let same = |v: Vec<i32>| v;
        assert_eq!(
            check_monad_plus_laws::<VecTag, i32, _, _, _, _>(small_vec(), kleisli_alternative_i32::<VecTag>(), same),
            Ok(())
        );
    }

    #[rstest]
    fn identity_passes_comonad_suite() {
        let same = |w: Identity<i32>| w;
        assert_eq!(
            check_comonad_laws::<IdentityTag, i32, _, _, _, _>(identity_of(), cokleisli_i32::<IdentityTag>(), same),
            Ok(())
        );
        assert_eq!(
            check_monad_laws::<IdentityTag, i32, _, _, _, _>(identity_of(), kleisli_pure_i32::<IdentityTag>(), same),
            Ok(())
        );
    }

    #[rstest]
    fn pair_passes_comonad_suite() {
        let values = (any::<i32>(), any::<i32>());
        let same = |w: (i32, i32)| w;
        assert_eq!(
            check_comonad_laws::<PairTag<i32>, i32, _, _, _, _>(values, cokleisli_i32::<PairTag<i32>>(), same),
            Ok(())
        );
    }

    #[rstest]
    fn vec_of_strings_passes_monad_plus_suite() {
        let words = prop::collection::vec(String::values(), 0..4);
        let functions = prop::collection::vec(arrows::<String>(), 0..3);
        let same = |v: Vec<String>| v;
        assert_eq!(
            check_applicative_laws::<VecTag, String, _, _, _, _>(words.clone(), functions.clone(), same),
            Ok(())
        );
        assert_eq!(check_alternative_laws::<VecTag, String, _, _, _, _>(words.clone(), functions, same), Ok(()));
        assert_eq!(
            check_monad_plus_laws::<VecTag, String, _, _, _, _>(words, kleisli_alternative::<VecTag, String>(), same),
            Ok(())
        );
    }

    #[rstest]
    fn option_of_bool_passes_monad_zero_suite() {
        let flags = proptest::option::of(any::<bool>());
        let same = |o: Option<bool>| o;
        assert_eq!(
            check_monad_laws::<OptionTag, bool, _, _, _, _>(flags.clone(), kleisli_alternative::<OptionTag, bool>(), same),
            Ok(())
        );
        assert_eq!(check_plus_laws::<OptionTag, bool, _, _, _>(flags.clone(), same), Ok(()));
        assert_eq!(
            check_monad_zero_laws::<OptionTag, bool, _, _, _>(kleisli_alternative::<OptionTag, bool>(), same),
            Ok(())
        );
        assert_eq!(check_foldable_laws::<OptionTag, bool, _>(flags), Ok(()));
    }

    #[rstest]
    fn comonads_pass_over_other_element_types() {
        let same_identity = |w: Identity<u64>| w;
        assert_eq!(
            check_comonad_laws::<IdentityTag, u64, _, _, _, _>(
                any::<u64>().prop_map(Identity),
                cokleisli::<IdentityTag, u64>(),
                same_identity,
            ),
            Ok(())
        );

        let same_pair = |w: (bool, String)| w;
        assert_eq!(
            check_comonad_laws::<PairTag<bool>, String, _, _, _, _>(
                (any::<bool>(), String::values()),
                cokleisli::<PairTag<bool>, String>(),
                same_pair,
            ),
            Ok(())
        );
    }

    #[rstest]
    fn sum_is_a_monoid_under_wrapping_addition() {
        let sums = any::<i32>().prop_map(|value| Sum(Wrapping(value)));
        assert_eq!(check_monoid_laws(sums), Ok(()));
    }

    #[rstest]
    fn violations_carry_the_shrunk_input() {
        let lossy = ArrowOf::new("drop all", |_: i32| Vec::<i32>::new());
        let violation = check_law("bind keeps values", small_vec(), move |values| {
            let lossy = lossy.clone();
            VecTag::bind::<i32, i32, _>(values.clone(), move |x| lossy.call(x)) == values
        })
        .unwrap_err();
        assert_eq!(violation.law(), "bind keeps values");
        assert_eq!(violation.counterexample(), Some("[0]"));
    }
}

//! Property-based checks of the type class laws.
//!
//! An instance is lawful when every law of every class it implements holds
//! for all inputs. This module states the laws as predicates
//! ([`functor_identity`], [`bind_associativity`], ...), generates inputs with
//! proptest, and bundles them into suites per class ([`check_functor_laws`],
//! [`check_monad_laws`], ...).
//!
//! Functions are generated as [`ArrowOf`] values, which print as what they
//! compute, so a violation reports a readable counterexample. The element
//! type is a parameter of every suite; any [`LawDomain`] type works. Containers
//! without `PartialEq`, such as `ReaderT`, are compared through a projection
//! that runs them against fixed sample environments.
//!
//! # Examples
//!
//! ```rust
//! use kindness::laws::{arrow_i32, check_applicative_laws, check_plus_laws};
//! use kindness::typeclass::VecTag;
//! use proptest::prelude::*;
//!
//! let values = prop::collection::vec(any::<i32>(), 0..4);
//! let functions = prop::collection::vec(arrow_i32(), 0..3);
//!
//! assert!(check_applicative_laws::<VecTag, i32, _, _, _, _>(values.clone(), functions, |v| v).is_ok());
//! assert!(check_plus_laws::<VecTag, i32, _, _, _>(values, |v| v).is_ok());
//! ```

mod arrow;
mod domain;
mod properties;
mod runner;
mod suites;

pub use arrow::{
    ArrowOf, BoxedFn, arrow_i32, arrows, cokleisli, cokleisli_i32, kleisli_alternative, kleisli_alternative_i32,
    kleisli_pure, kleisli_pure_i32,
};
pub use domain::LawDomain;
pub use properties::{
    Arrow, Cokleisli, Kleisli, alt_associativity, alt_distributivity, alternative_annihilation,
    alternative_distributivity, applicative_composition, applicative_homomorphism, applicative_identity,
    applicative_interchange, apply_associative_composition, bind_associativity, comonad_left_identity,
    comonad_right_identity, extend_associativity, foldable_consistency, functor_composition, functor_identity,
    lower, monad_left_identity, monad_plus_distributivity, monad_right_identity, monad_zero_annihilation,
    monoid_left_identity, monoid_right_identity, plus_annihilation, plus_left_identity, plus_right_identity,
    semigroup_associativity,
};
#[cfg(feature = "effect")]
pub use properties::{monad_trans_bind_distributivity, monad_trans_identity};
pub use runner::{DEFAULT_CASES, LawViolation, check_law, check_law_with, default_config};
#[cfg(feature = "effect")]
pub use suites::check_monad_trans_laws;
pub use suites::{
    check_alt_laws, check_alternative_laws, check_applicative_laws, check_apply_laws, check_bind_laws,
    check_comonad_laws, check_extend_laws, check_foldable_laws, check_functor_laws, check_monad_laws,
    check_monad_plus_laws, check_monad_zero_laws, check_monoid_laws, check_plus_laws, check_semigroup_laws,
};

//! Type class traits over emulated higher-kinded types.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. Each type constructor is named by a
//! *tag* implementing [`Kind1`], [`Kind2`] or [`Kind3`]; [`KindApplication`]
//! applies a tag to arguments and normalises to the concrete type. Concrete
//! types find their tag through [`K1`], [`K2`] and [`K3`].
//!
//! ## Class Hierarchy
//!
//! - [`Functor`] → [`Apply`] → [`Applicative`]
//! - [`Apply`] → [`Bind`]; [`Applicative`] + [`Bind`] → [`Monad`]
//! - [`Functor`] → [`Alt`] → [`Plus`]; [`Applicative`] + [`Plus`] → [`Alternative`]
//! - [`Alternative`] + [`Monad`] → [`MonadZero`] → [`MonadPlus`]
//! - [`Functor`] → [`Extend`] / [`Duplicate`] → [`Comonad`]
//! - [`Foldable`], [`Bifunctor`]
//! - [`Semigroup`] → [`Monoid`] (on ordinary types)
//!
//! The classes are implemented on tags. The `*Syntax` extension traits add
//! method syntax to concrete values.
//!
//! ## Default Derivations
//!
//! A class method can be expressed through another class; these functions
//! encode those definitions for instances to delegate to:
//!
//! - [`fmap_by_applicative`], [`fmap_by_monad`], [`apply_by_monad`]
//! - [`extend_by_duplicate`], [`duplicate_by_extend`]
//! - [`fold_right_by_fold_left`], [`fold_right_by_fold_map`],
//!   [`fold_left_by_fold_right`], [`fold_left_by_fold_map`],
//!   [`fold_map_by_fold_left`], [`fold_map_by_fold_right`]
//!
//! # Examples
//!
//! ```rust
//! use kindness::typeclass::{Applicative, Bind, Functor, KindApplication, Monad, OptionTag, VecTag};
//!
//! fn pair_up<M: Monad>(
//!     left: KindApplication<M, i32>,
//!     right: KindApplication<M, i32>,
//! ) -> KindApplication<M, (i32, i32)>
//! where
//!     KindApplication<M, i32>: Clone,
//! {
//!     M::bind::<i32, (i32, i32), _>(left, move |l| {
//!         M::fmap::<i32, (i32, i32), _>(right.clone(), move |r| (l, r))
//!     })
//! }
//!
//! assert_eq!(pair_up::<OptionTag>(Some(1), Some(2)), Some((1, 2)));
//! assert_eq!(pair_up::<VecTag>(vec![1, 2], vec![3]), vec![(1, 3), (2, 3)]);
//! ```

mod alternative;
mod applicative;
mod bifunctor;
mod comonad;
mod foldable;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;
mod syntax;
mod wrappers;

pub use alternative::{Alt, Alternative, MonadPlus, MonadZero, Plus};
pub use applicative::{Applicative, Apply, fmap_by_applicative};
pub use bifunctor::Bifunctor;
pub use comonad::{
    Comonad, Duplicate, Extend, compose_cokleisli, compose_cokleisli_flipped,
    duplicate_by_extend, extend_by_duplicate, extend_flipped,
};
pub use foldable::{
    Foldable, fold_left_by_fold_map, fold_left_by_fold_right, fold_map_by_fold_left,
    fold_map_by_fold_right, fold_right_by_fold_left, fold_right_by_fold_map,
};
pub use functor::Functor;
pub use higher::{
    K1, K2, K3, Kind1, Kind2, Kind3, KindApplication, KindApplication2, KindApplication3,
    OptionTag, PairTag, PairTag2, TripleTag, TripleTag2, TripleTag3, VecTag,
};
pub use identity::{Identity, IdentityTag};
pub use monad::{
    Bind, Monad, apply_by_monad, bind_flipped, compose_kleisli, compose_kleisli_flipped,
    fmap_by_monad, join,
};
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use syntax::{
    AltSyntax, ApplySyntax, BifunctorSyntax, BindSyntax, ComonadSyntax, FoldableSyntax,
    FunctorSyntax,
};
pub use wrappers::{Bounded, Dual, Endo, First, Last, Max, Min, Product, Sum};

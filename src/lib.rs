//! # kindness
//!
//! Higher-kinded type classes for Rust, with the instances and a law-checking
//! harness to go with them.
//!
//! ## Overview
//!
//! Rust cannot abstract over type constructors directly, so every constructor is
//! named by a *tag* type and applied through a generic associated type. On top of
//! that encoding the crate provides:
//!
//! - **Type Classes**: Functor, Apply, Applicative, Bind, Monad, Alt, Plus,
//!   Alternative, `MonadZero`, `MonadPlus`, Extend, Duplicate, Comonad, Foldable,
//!   Bifunctor, Semigroup and Monoid
//! - **Default Derivations**: one class method expressed through another
//! - **Instances**: `Vec`, `Option`, `Identity`, `Either`, pairs and `ReaderT`
//! - **Function Composition**: `compose!`, `pipe!` and small combinators
//! - **Laws**: proptest-driven checks of the class laws for any instance
//!
//! ## Feature Flags
//!
//! - `typeclass`: Kinds, type classes and the core instances
//! - `compose`: Function composition utilities
//! - `control`: `Either`
//! - `effect`: `ReaderT` and `MonadTrans`
//! - `laws`: The law-checking harness (pulls in `proptest`)
//! - `serde`: `Serialize`/`Deserialize` for the plain data types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use kindness::prelude::*;
//!
//! let pairs = VecTag::bind(vec![1, 2], |x| vec![x, x * 10]);
//! assert_eq!(pairs, vec![1, 10, 2, 20]);
//!
//! let lookup = ReaderT::<i32, IdentityTag, i32>::new(|e| Identity(e + 1));
//! assert_eq!(lookup.run(5), Identity(6));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use kindness::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "laws")]
pub mod laws;

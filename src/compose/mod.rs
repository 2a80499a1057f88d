//! Function composition utilities.
//!
//! Most of the type classes take plain closures, and building those closures
//! out of smaller ones is what this module is for.
//!
//! - [`compose!`]: compose functions right to left
//! - [`pipe!`]: push a value through functions left to right
//! - [`identity`], [`constant`], [`flip`], [`curry`], [`uncurry`],
//!   [`compose()`](compose()) and [`pipe()`](pipe()) as plain functions
//!
//! # Laws
//!
//! ```text
//! compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)  // associativity
//! compose!(identity, f) == f == compose!(f, identity)         // identity
//! flip(flip(f)) == f
//! uncurry(curry(f)) == f
//! ```
//!
//! # Examples
//!
//! ```
//! use kindness::{compose, pipe};
//!
//! let increment = |x: i32| x + 1;
//! let double = |x: i32| x * 2;
//!
//! assert_eq!(compose!(increment, double)(5), 11);
//! assert_eq!(pipe!(5, double, increment), 11);
//! ```

mod compose_macro;
mod pipe_macro;
mod utils;

pub use utils::{compose, constant, curry, flip, identity, pipe, uncurry};

// Macros are exported at the crate root; re-export them here as well.
pub use crate::compose;
pub use crate::pipe;

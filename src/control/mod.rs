//! Control structures.
//!
//! - [`Either`]: a value that can be one of two types, with the right-biased
//!   type class instances on [`EitherTag`] and [`Bifunctor`](crate::typeclass::Bifunctor)
//!   on [`EitherTag2`]
//!
//! # Examples
//!
//! ```rust
//! use kindness::control::{Either, EitherTag};
//! use kindness::typeclass::{Alt, Functor};
//!
//! let primary: Either<&str, u16> = Either::Left("primary unreachable");
//! let fallback: Either<&str, u16> = Either::Right(8080);
//!
//! let port = EitherTag::<&str>::alt(primary, fallback);
//! assert_eq!(EitherTag::<&str>::fmap(port, |p: u16| p + 1), Either::Right(8081));
//! ```

mod either;

pub use either::{Either, EitherTag, EitherTag2};

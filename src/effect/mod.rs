//! Monad transformers.
//!
//! - [`ReaderT`]: adds a read-only environment to any inner monad; its class
//!   instances on [`ReaderTTag`] are conditional on the inner monad
//! - [`Reader`]: `ReaderT` over `Identity`, with [`reader`],
//!   [`ReaderT::run_reader`] and [`ReaderT::map_reader`]
//! - [`MonadTrans`]: lifting inner computations, implemented by [`ReaderTTrans`]
//!
//! # Examples
//!
//! ```rust
//! use kindness::effect::{ReaderT, ReaderTTag};
//! use kindness::typeclass::{Alt, VecTag};
//!
//! let below = ReaderT::<u8, VecTag, u8>::new(|limit| (0..limit).collect());
//! let limit = ReaderT::<u8, VecTag, u8>::ask();
//!
//! let everything = ReaderTTag::<u8, VecTag>::alt(below, limit);
//! assert_eq!(everything.run(3), vec![0, 1, 2, 3]);
//! ```

mod monad_trans;
mod reader_transformer;

pub use monad_trans::{MonadTrans, ReaderTTrans};
pub use reader_transformer::{Reader, ReaderT, ReaderTTag, reader};

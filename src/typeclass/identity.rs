//! Identity wrapper type - the identity functor.
//!
//! `Identity` adds no structure to a value. It is:
//!
//! - the base monad of `Reader` (`ReaderT` over `Identity`)
//! - the simplest model for checking type class laws
//! - a comonad, since the wrapped value can always be extracted

use super::higher::{K1, Kind1};

/// The identity functor - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use kindness::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity<A>(pub A);

/// Tag for [`Identity`].
#[derive(Debug)]
pub enum IdentityTag {}

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl Kind1 for IdentityTag {
    type Of<A> = Identity<A>;
}

impl<A> K1 for Identity<A> {
    type Tag = IdentityTag;
    type Arg = A;

    #[inline]
    fn kind(self) -> Self {
        self
    }

    #[inline]
    fn unkind(kind: Self) -> Self {
        kind
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

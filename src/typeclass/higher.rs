//! Higher-kinded type emulation through tag types and Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Vec<_>` directly.
//! This module names each constructor with an uninhabited *tag* type whose
//! generic associated type applies the constructor to arguments:
//!
//! - [`Kind1`]: a constructor with one free parameter (`Vec<_>`, `Either<L, _>`)
//! - [`Kind2`]: a constructor with two free parameters (`Either<_, _>`, `(_, _)`)
//! - [`Kind3`]: a constructor with three free parameters (`(_, _, _)`)
//!
//! [`KindApplication<Tag, A>`] is the constructor `Tag` applied to `A`. Because
//! the application *is* the concrete type after normalisation, recovering a
//! concrete value from its kind view ([`K1::unkind`]) can never pick the wrong
//! type: a mismatch is rejected by the compiler.
//!
//! Concrete types link themselves to their tag through [`K1`], [`K2`] and [`K3`].
//! A higher arity always implies every lower arity by fixing all but the last
//! parameters.
//!
//! # Examples
//!
//! ```rust
//! use kindness::typeclass::{K1, KindApplication, VecTag};
//!
//! let erased: KindApplication<VecTag, i32> = vec![1, 2, 3].kind();
//! let restored: Vec<i32> = Vec::unkind(erased);
//! assert_eq!(restored, vec![1, 2, 3]);
//! ```

use std::marker::PhantomData;

/// A type constructor with one free parameter.
///
/// Implemented by tag types only. Type classes over unary constructors
/// (`Functor`, `Monad`, `Foldable`, ...) are traits on the tag.
pub trait Kind1: 'static {
    /// The constructor applied to `A`.
    type Of<A>;
}

/// A type constructor with two free parameters.
pub trait Kind2: 'static {
    /// The constructor applied to `X` and `A`.
    type Of<X, A>;
}

/// A type constructor with three free parameters.
pub trait Kind3: 'static {
    /// The constructor applied to `X`, `Y` and `A`.
    type Of<X, Y, A>;
}

/// The unary constructor `Tag` applied to `A`.
pub type KindApplication<Tag, A> = <Tag as Kind1>::Of<A>;

/// The binary constructor `Tag` applied to `X` and `A`.
pub type KindApplication2<Tag, X, A> = <Tag as Kind2>::Of<X, A>;

/// The ternary constructor `Tag` applied to `X`, `Y` and `A`.
pub type KindApplication3<Tag, X, Y, A> = <Tag as Kind3>::Of<X, Y, A>;

/// A concrete type viewed as a unary constructor applied to its last parameter.
///
/// `kind` and `unkind` are inverse to each other and total.
///
/// # Laws
///
/// ```text
/// T::unkind(t.kind()) == t
/// ```
pub trait K1: Sized {
    /// The tag naming the constructor with every other parameter fixed.
    type Tag: Kind1;

    /// The last type parameter.
    type Arg;

    /// Views `self` as an application of [`Self::Tag`].
    fn kind(self) -> KindApplication<Self::Tag, Self::Arg>;

    /// Recovers the concrete value from its kind view.
    fn unkind(kind: KindApplication<Self::Tag, Self::Arg>) -> Self;
}

/// A concrete type viewed as a binary constructor over its last two parameters.
pub trait K2: K1 {
    /// The tag naming the binary constructor.
    type Tag2: Kind2;

    /// The second-to-last type parameter.
    type Arg2;

    /// Views `self` as an application of [`Self::Tag2`].
    fn kind2(self) -> KindApplication2<Self::Tag2, Self::Arg2, Self::Arg>;

    /// Recovers the concrete value from its binary kind view.
    fn unkind2(kind: KindApplication2<Self::Tag2, Self::Arg2, Self::Arg>) -> Self;
}

/// A concrete type viewed as a ternary constructor over its last three parameters.
pub trait K3: K2 {
    /// The tag naming the ternary constructor.
    type Tag3: Kind3;

    /// The third-to-last type parameter.
    type Arg3;

    /// Views `self` as an application of [`Self::Tag3`].
    fn kind3(self) -> KindApplication3<Self::Tag3, Self::Arg3, Self::Arg2, Self::Arg>;

    /// Recovers the concrete value from its ternary kind view.
    fn unkind3(kind: KindApplication3<Self::Tag3, Self::Arg3, Self::Arg2, Self::Arg>) -> Self;
}

// =============================================================================
// Standard Library Tags
// =============================================================================

/// Tag for `Vec<_>`.
#[derive(Debug)]
pub enum VecTag {}

/// Tag for `Option<_>`.
#[derive(Debug)]
pub enum OptionTag {}

/// Tag for `(X, _)`, the environment comonad.
#[derive(Debug)]
pub struct PairTag<X>(PhantomData<fn() -> X>);

/// Tag for `(_, _)`.
#[derive(Debug)]
pub enum PairTag2 {}

/// Tag for `(X, Y, _)`.
#[derive(Debug)]
pub struct TripleTag<X, Y>(PhantomData<fn() -> (X, Y)>);

/// Tag for `(X, _, _)`.
#[derive(Debug)]
pub struct TripleTag2<X>(PhantomData<fn() -> X>);

/// Tag for `(_, _, _)`.
#[derive(Debug)]
pub enum TripleTag3 {}

impl Kind1 for VecTag {
    type Of<A> = Vec<A>;
}

impl Kind1 for OptionTag {
    type Of<A> = Option<A>;
}

impl<X: 'static> Kind1 for PairTag<X> {
    type Of<A> = (X, A);
}

impl Kind2 for PairTag2 {
    type Of<X, A> = (X, A);
}

impl<X: 'static, Y: 'static> Kind1 for TripleTag<X, Y> {
    type Of<A> = (X, Y, A);
}

impl<X: 'static> Kind2 for TripleTag2<X> {
    type Of<Y, A> = (X, Y, A);
}

impl Kind3 for TripleTag3 {
    type Of<X, Y, A> = (X, Y, A);
}

impl<A> K1 for Vec<A> {
    type Tag = VecTag;
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

impl<A> K1 for Option<A> {
    type Tag = OptionTag;
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

impl<X: 'static, A> K1 for (X, A) {
    type Tag = PairTag<X>;
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

impl<X: 'static, A> K2 for (X, A) {
    type Tag2 = PairTag2;
    type Arg2 = X;

    #[inline]
    fn kind2(self) -> Self {
        self
    }

    #[inline]
    fn unkind2(kind: Self) -> Self {
        kind
    }
}

impl<X: 'static, Y: 'static, A> K1 for (X, Y, A) {
    type Tag = TripleTag<X, Y>;
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

impl<X: 'static, Y: 'static, A> K2 for (X, Y, A) {
    type Tag2 = TripleTag2<X>;
    type Arg2 = Y;

    #[inline]
    fn kind2(self) -> Self {
        self
    }

    #[inline]
    fn unkind2(kind: Self) -> Self {
        kind
    }
}

impl<X: 'static, Y: 'static, A> K3 for (X, Y, A) {
    type Tag3 = TripleTag3;
    type Arg3 = X;

    #[inline]
    fn kind3(self) -> Self {
        self
    }

    #[inline]
    fn unkind3(kind: Self) -> Self {
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn round_trip<T: K1>(value: T) -> T {
        T::unkind(value.kind())
    }

    fn round_trip2<T: K2>(value: T) -> T {
        T::unkind2(value.kind2())
    }

    fn round_trip3<T: K3>(value: T) -> T {
        T::unkind3(value.kind3())
    }

    // =========================================================================
    // K1
    // =========================================================================

    #[rstest]
    #[case(vec![])]
    #[case(vec![1])]
    #[case(vec![1, 2, 3])]
    fn vec_unkind_of_kind_is_identity(#[case] value: Vec<i32>) {
        assert_eq!(round_trip(value.clone()), value);
    }

    #[rstest]
    #[case(None)]
    #[case(Some("present"))]
    fn option_unkind_of_kind_is_identity(#[case] value: Option<&'static str>) {
        assert_eq!(round_trip(value), value);
    }

    #[test]
    fn pair_fixes_first_component() {
        fn assert_tag<T: K1<Tag = PairTag<String>, Arg = i32>>() {}
        assert_tag::<(String, i32)>();
        assert_eq!(round_trip((String::from("env"), 7)), (String::from("env"), 7));
    }

    #[test]
    fn kind_application_is_the_concrete_type() {
        let erased: KindApplication<VecTag, char> = vec!['a', 'b'];
        let restored: Vec<char> = Vec::unkind(erased);
        assert_eq!(restored, vec!['a', 'b']);
    }

    // =========================================================================
    // K2 / K3
    // =========================================================================

    #[test]
    fn pair_is_binary_kind() {
        let erased: KindApplication2<PairTag2, &str, i32> = ("left", 1).kind2();
        assert_eq!(round_trip2(erased), ("left", 1));
    }

    #[test]
    fn triple_views_at_every_arity() {
        fn assert_arities<T>()
        where
            T: K3<Tag = TripleTag<u8, u16>, Tag2 = TripleTag2<u8>, Tag3 = TripleTag3>,
        {
        }
        assert_arities::<(u8, u16, u32)>();

        let triple = (1_u8, 2_u16, 3_u32);
        assert_eq!(round_trip(triple), triple);
        assert_eq!(round_trip2(triple), triple);
        assert_eq!(round_trip3(triple), triple);
    }
}

//! Method syntax for concrete values.
//!
//! The type classes live on tags, so calling them reads `VecTag::fmap(xs, f)`.
//! The extension traits here are implemented for every [`K1`] (or [`K2`])
//! type and forward to the tag, so the same operations read as methods:
//!
//! ```rust
//! use kindness::typeclass::{AltSyntax, ApplySyntax, BindSyntax, FunctorSyntax};
//!
//! assert_eq!(vec![1, 2].alt(vec![3, 4]), vec![1, 2, 3, 4]);
//! assert_eq!(Some(2).fmap(|x: i32| x * 10), Some(20));
//! assert_eq!(Some(2).bind(|x: i32| if x > 0 { Some(x) } else { None }), Some(2));
//!
//! fn increment(x: i32) -> i32 {
//!     x + 1
//! }
//! let functions: Vec<fn(i32) -> i32> = vec![increment as fn(i32) -> i32];
//! assert_eq!(functions.apply_to(vec![10, 20]), vec![11, 21]);
//! ```
//!
//! Each method is only callable when the tag has the corresponding class.

use super::alternative::Alt;
use super::applicative::Apply;
use super::bifunctor::Bifunctor;
use super::comonad::{Comonad, Duplicate, Extend};
use super::foldable::Foldable;
use super::functor::Functor;
use super::higher::{K1, K2, KindApplication, KindApplication2};
use super::monad::Bind;
use super::monoid::Monoid;

/// `fmap` as a method.
pub trait FunctorSyntax: K1 {
    /// See [`Functor::fmap`].
    fn fmap<B, F>(self, function: F) -> KindApplication<Self::Tag, B>
    where
        Self::Tag: Functor,
        Self::Arg: 'static,
        B: 'static,
        F: Fn(Self::Arg) -> B + 'static,
    {
        <Self::Tag as Functor>::fmap::<Self::Arg, B, F>(self.kind(), function)
    }
}

/// `apply` as a method on a context of functions.
pub trait ApplySyntax: K1 {
    /// Applies the functions in `self` to the values in `fa`. See [`Apply::apply`].
    fn apply_to<A, B>(self, fa: KindApplication<Self::Tag, A>) -> KindApplication<Self::Tag, B>
    where
        Self::Tag: Apply,
        Self::Arg: Fn(A) -> B + 'static,
        A: Clone + 'static,
        B: Clone + 'static,
    {
        <Self::Tag as Apply>::apply::<A, B, Self::Arg>(self.kind(), fa)
    }
}

/// `bind` as a method.
pub trait BindSyntax: K1 {
    /// See [`Bind::bind`].
    fn bind<B, F>(self, function: F) -> KindApplication<Self::Tag, B>
    where
        Self::Tag: Bind,
        Self::Arg: 'static,
        B: 'static,
        F: Fn(Self::Arg) -> KindApplication<Self::Tag, B> + 'static,
    {
        <Self::Tag as Bind>::bind::<Self::Arg, B, F>(self.kind(), function)
    }
}

/// `alt` as a method.
pub trait AltSyntax: K1 {
    /// See [`Alt::alt`].
    fn alt(self, other: Self) -> Self
    where
        Self::Tag: Alt,
        Self::Arg: 'static,
    {
        Self::unkind(<Self::Tag as Alt>::alt::<Self::Arg>(self.kind(), other.kind()))
    }
}

/// `extend`, `duplicate` and `extract` as methods.
pub trait ComonadSyntax: K1 {
    /// See [`Extend::extend`].
    fn extend_with<B, F>(self, function: F) -> KindApplication<Self::Tag, B>
    where
        Self::Tag: Extend,
        Self::Arg: 'static,
        B: 'static,
        F: Fn(KindApplication<Self::Tag, Self::Arg>) -> B + 'static,
    {
        <Self::Tag as Extend>::extend::<Self::Arg, B, F>(self.kind(), function)
    }

    /// See [`Duplicate::duplicate`].
    fn duplicate(self) -> KindApplication<Self::Tag, KindApplication<Self::Tag, Self::Arg>>
    where
        Self::Tag: Duplicate,
        Self::Arg: 'static,
    {
        <Self::Tag as Duplicate>::duplicate::<Self::Arg>(self.kind())
    }

    /// See [`Comonad::extract`].
    fn extract(self) -> Self::Arg
    where
        Self::Tag: Comonad,
        Self::Arg: 'static,
    {
        <Self::Tag as Comonad>::extract::<Self::Arg>(self.kind())
    }
}

/// Folds as methods.
pub trait FoldableSyntax: K1 {
    /// See [`Foldable::fold_right`].
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        Self::Tag: Foldable,
        Self::Arg: 'static,
        B: 'static,
        F: Fn(Self::Arg, B) -> B + 'static,
    {
        <Self::Tag as Foldable>::fold_right::<Self::Arg, B, F>(self.kind(), init, function)
    }

    /// See [`Foldable::fold_left`].
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        Self::Tag: Foldable,
        Self::Arg: 'static,
        B: 'static,
        F: Fn(B, Self::Arg) -> B + 'static,
    {
        <Self::Tag as Foldable>::fold_left::<Self::Arg, B, F>(self.kind(), init, function)
    }

    /// See [`Foldable::fold_map`].
    fn fold_map<M, F>(self, function: F) -> M
    where
        Self::Tag: Foldable,
        Self::Arg: 'static,
        M: Monoid + 'static,
        F: Fn(Self::Arg) -> M + 'static,
    {
        <Self::Tag as Foldable>::fold_map::<Self::Arg, M, F>(self.kind(), function)
    }

    /// See [`Foldable::to_list`].
    fn to_list(self) -> Vec<Self::Arg>
    where
        Self::Tag: Foldable,
        Self::Arg: 'static,
    {
        <Self::Tag as Foldable>::to_list::<Self::Arg>(self.kind())
    }
}

/// `bimap`, `first` and `second` as methods on binary constructors.
pub trait BifunctorSyntax: K2 {
    /// See [`Bifunctor::bimap`].
    fn bimap<Y, B, F, G>(
        self,
        first_function: F,
        second_function: G,
    ) -> KindApplication2<Self::Tag2, Y, B>
    where
        Self::Tag2: Bifunctor,
        F: FnOnce(Self::Arg2) -> Y,
        G: FnOnce(Self::Arg) -> B,
    {
        <Self::Tag2 as Bifunctor>::bimap::<Self::Arg2, Self::Arg, Y, B, F, G>(
            self.kind2(),
            first_function,
            second_function,
        )
    }

    /// See [`Bifunctor::first`].
    fn first<Y, F>(self, function: F) -> KindApplication2<Self::Tag2, Y, Self::Arg>
    where
        Self::Tag2: Bifunctor,
        F: FnOnce(Self::Arg2) -> Y,
    {
        <Self::Tag2 as Bifunctor>::first::<Self::Arg2, Self::Arg, Y, F>(self.kind2(), function)
    }

    /// See [`Bifunctor::second`].
    fn second<B, G>(self, function: G) -> KindApplication2<Self::Tag2, Self::Arg2, B>
    where
        Self::Tag2: Bifunctor,
        G: FnOnce(Self::Arg) -> B,
    {
        <Self::Tag2 as Bifunctor>::second::<Self::Arg2, Self::Arg, B, G>(self.kind2(), function)
    }
}

impl<T: K1> FunctorSyntax for T {}
impl<T: K1> ApplySyntax for T {}
impl<T: K1> BindSyntax for T {}
impl<T: K1> AltSyntax for T {}
impl<T: K1> ComonadSyntax for T {}
impl<T: K1> FoldableSyntax for T {}
impl<T: K2> BifunctorSyntax for T {}

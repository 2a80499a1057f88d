//! `Either<L, R>` - a value that is one of two types.
//!
//! `Either` is right-biased: as a unary constructor it is `Either<L, _>`
//! ([`EitherTag<L>`]), so `fmap`, `apply` and `bind` act on `Right` values and
//! pass a `Left` through untouched. As a binary constructor ([`EitherTag2`]) it
//! is a [`Bifunctor`].
//!
//! | Class         | Behaviour                                                  |
//! |---------------|------------------------------------------------------------|
//! | `Functor`     | maps `Right`                                               |
//! | `Apply`       | the function side is inspected first; a `Left` wins        |
//! | `Applicative` | `pure = Right`                                             |
//! | `Bind`        | short-circuits on `Left`                                   |
//! | `Alt`         | the first `Right`, otherwise the second operand            |
//! | `Extend`      | applies the function to the whole value if it is `Right`   |
//! | `Foldable`    | folds over at most one `Right`                             |
//!
//! There is no `Plus`: no `Left` value can be conjured for an arbitrary `L`.
//!
//! # Examples
//!
//! ```rust
//! use kindness::control::{Either, EitherTag};
//! use kindness::typeclass::Bind;
//!
//! let halve = |x: i32| {
//!     if x % 2 == 0 { Either::Right(x / 2) } else { Either::Left(format!("{x} is odd")) }
//! };
//!
//! assert_eq!(EitherTag::<String>::bind(Either::Right(8), halve), Either::Right(4));
//! assert_eq!(EitherTag::<String>::bind(Either::Right(3), halve), Either::Left(String::from("3 is odd")));
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::typeclass::{
    Alt, Applicative, Apply, Bifunctor, Bind, Duplicate, Extend, Foldable, Functor, K1, K2, Kind1,
    Kind2, Monad, Monoid, duplicate_by_extend,
};

/// A value that is either `Left(L)` or `Right(R)`.
///
/// By convention `Left` carries the failure and `Right` the success.
///
/// # Examples
///
/// ```rust
/// use kindness::control::Either;
///
/// let parsed: Either<String, i32> = "42".parse::<i32>().map_err(|error| error.to_string()).into();
/// assert_eq!(parsed.map_right(|x| x + 1), Either::Right(43));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally the failure.
    Left(L),
    /// The right variant, conventionally the success.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` for a `Left`.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` for a `Right`.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// The left value, if any.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// The right value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindness::control::Either;
    ///
    /// assert_eq!(Either::<&str, i32>::Right(1).right(), Some(1));
    /// assert_eq!(Either::<&str, i32>::Left("no").right(), None);
    /// ```
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the contents as an `Either` of references.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Maps a `Left`, keeping a `Right` as is.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Maps a `Right`, keeping a `Left` as is.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Eliminates the `Either` with one function per side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindness::control::Either;
    ///
    /// let describe = |value: Either<i32, &str>| value.either(|n| n.to_string(), str::to_uppercase);
    /// assert_eq!(describe(Either::Left(7)), "7");
    /// assert_eq!(describe(Either::Right("ok")), "OK");
    /// ```
    #[inline]
    pub fn either<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Exchanges the sides.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Kinds
// =============================================================================

/// Tag for `Either<L, _>`.
#[derive(Debug)]
pub struct EitherTag<L>(PhantomData<fn() -> L>);

/// Tag for `Either<_, _>`.
#[derive(Debug)]
pub enum EitherTag2 {}

impl<L: 'static> Kind1 for EitherTag<L> {
    type Of<A> = Either<L, A>;
}

impl Kind2 for EitherTag2 {
    type Of<X, A> = Either<X, A>;
}

impl<L: 'static, R> K1 for Either<L, R> {
    type Tag = EitherTag<L>;
    type Arg = R;

    #[inline]
    fn kind(self) -> Self {
        self
    }

    #[inline]
    fn unkind(kind: Self) -> Self {
        kind
    }
}

impl<L: 'static, R> K2 for Either<L, R> {
    type Tag2 = EitherTag2;
    type Arg2 = L;

    #[inline]
    fn kind2(self) -> Self {
        self
    }

    #[inline]
    fn unkind2(kind: Self) -> Self {
        kind
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L: 'static> Functor for EitherTag<L> {
    fn fmap<A, B, F>(fa: Either<L, A>, function: F) -> Either<L, B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.map_right(function)
    }
}

impl<L: 'static> Apply for EitherTag<L> {
    fn apply<A, B, F>(ff: Either<L, F>, fa: Either<L, A>) -> Either<L, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        match ff {
            Either::Left(value) => Either::Left(value),
            Either::Right(function) => Self::fmap::<A, B, F>(fa, function),
        }
    }
}

impl<L: 'static> Applicative for EitherTag<L> {
    fn pure<A: Clone + 'static>(value: A) -> Either<L, A> {
        Either::Right(value)
    }
}

impl<L: 'static> Bind for EitherTag<L> {
    fn bind<A, B, F>(ma: Either<L, A>, function: F) -> Either<L, B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Either<L, B> + 'static,
    {
        match ma {
            Either::Left(value) => Either::Left(value),
            Either::Right(value) => function(value),
        }
    }
}

impl<L: 'static> Monad for EitherTag<L> {}

/// The first `Right`; when `first` is a `Left`, `second` whatever it is.
impl<L: 'static> Alt for EitherTag<L> {
    fn alt<A: 'static>(first: Either<L, A>, second: Either<L, A>) -> Either<L, A> {
        match first {
            Either::Left(_) => second,
            right @ Either::Right(_) => right,
        }
    }
}

impl<L: 'static> Extend for EitherTag<L> {
    fn extend<A, B, F>(w: Either<L, A>, function: F) -> Either<L, B>
    where
        A: 'static,
        B: 'static,
        F: Fn(Either<L, A>) -> B + 'static,
    {
        match w {
            Either::Left(value) => Either::Left(value),
            right @ Either::Right(_) => Either::Right(function(right)),
        }
    }
}

impl<L: 'static> Duplicate for EitherTag<L> {
    fn duplicate<A: 'static>(w: Either<L, A>) -> Either<L, Either<L, A>> {
        duplicate_by_extend::<Self, A>(w)
    }
}

impl<L: 'static> Foldable for EitherTag<L> {
    fn fold_right<A, B, F>(fa: Either<L, A>, init: B, function: F) -> B
    where
        A: 'static,
        B: 'static,
        F: Fn(A, B) -> B + 'static,
    {
        match fa {
            Either::Left(_) => init,
            Either::Right(value) => function(value, init),
        }
    }

    fn fold_left<A, B, F>(fa: Either<L, A>, init: B, function: F) -> B
    where
        A: 'static,
        B: 'static,
        F: Fn(B, A) -> B + 'static,
    {
        match fa {
            Either::Left(_) => init,
            Either::Right(value) => function(init, value),
        }
    }

    fn fold_map<A, M, F>(fa: Either<L, A>, function: F) -> M
    where
        A: 'static,
        M: Monoid + 'static,
        F: Fn(A) -> M + 'static,
    {
        fa.either(|_| M::empty(), function)
    }
}

impl Bifunctor for EitherTag2 {
    fn bimap<X, A, Y, B, F, G>(value: Either<X, A>, first_function: F, second_function: G) -> Either<Y, B>
    where
        F: FnOnce(X) -> Y,
        G: FnOnce(A) -> B,
    {
        match value {
            Either::Left(left) => Either::Left(first_function(left)),
            Either::Right(right) => Either::Right(second_function(right)),
        }
    }
}

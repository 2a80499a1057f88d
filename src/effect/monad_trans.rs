//! Monad transformers.
//!
//! A transformer adds an effect on top of any monad `M`. It is named by a tag
//! that does not fix `M`, and [`MonadTrans::Transformed`] applies it to one.
//!
//! # Laws
//!
//! ```text
//! lift(M::pure(a)) == T::pure(a)                               // identity
//! lift(M::bind(m, f)) == T::bind(lift(m), |a| lift(f(a)))      // bind distributivity
//! ```

use std::marker::PhantomData;

use super::reader_transformer::{ReaderT, ReaderTTag};
use crate::typeclass::{KindApplication, Monad};

/// A monad transformer.
pub trait MonadTrans: 'static {
    /// The transformed monad over the inner monad `M`.
    type Transformed<M: Monad>: Monad;

    /// Embeds a computation of the inner monad, adding no effect of its own.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindness::effect::{MonadTrans, ReaderTTrans};
    /// use kindness::typeclass::OptionTag;
    ///
    /// let lifted = ReaderTTrans::<String>::lift::<OptionTag, i32>(Some(3));
    /// assert_eq!(lifted.run(String::from("ignored")), Some(3));
    /// ```
    fn lift<M, A>(inner: KindApplication<M, A>) -> KindApplication<Self::Transformed<M>, A>
    where
        M: Monad,
        A: 'static,
        KindApplication<M, A>: Clone;
}

/// The `ReaderT` transformer with environment `E`, over any inner monad.
#[derive(Debug)]
pub struct ReaderTTrans<E>(PhantomData<fn() -> E>);

impl<E: Clone + 'static> MonadTrans for ReaderTTrans<E> {
    type Transformed<M: Monad> = ReaderTTag<E, M>;

    fn lift<M, A>(inner: KindApplication<M, A>) -> ReaderT<E, M, A>
    where
        M: Monad,
        A: 'static,
        KindApplication<M, A>: Clone,
    {
        ReaderT::lift(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Applicative, Bind, VecTag};
    use rstest::rstest;

    type Trans = ReaderTTrans<i32>;

    #[rstest]
    #[case(0)]
    #[case(42)]
    fn lift_of_pure_is_pure(#[case] environment: i32) {
        let lifted = Trans::lift::<VecTag, char>(VecTag::pure('a'));
        let direct = ReaderTTag::<i32, VecTag>::pure('a');
        assert_eq!(lifted.run(environment), direct.run(environment));
    }

    #[rstest]
    fn lift_distributes_over_bind() {
        let expand = |x: i32| vec![x, -x];
        let lifted_bind = Trans::lift::<VecTag, i32>(VecTag::bind(vec![1, 2], expand));
        let bind_lifted = ReaderTTag::<i32, VecTag>::bind(Trans::lift::<VecTag, i32>(vec![1, 2]), move |x| {
            Trans::lift::<VecTag, i32>(expand(x))
        });
        assert_eq!(lifted_bind.run(0), bind_lifted.run(0));
        assert_eq!(lifted_bind.run(0), vec![1, -1, 2, -2]);
    }
}

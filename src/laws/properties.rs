//! The laws of every type class, as predicates over one set of inputs.
//!
//! Each predicate evaluates both sides of its law and compares them through
//! `project`. Containers that are directly comparable pass the identity;
//! function-valued containers such as `ReaderT` pass a projection that runs
//! them, so two computations are equal when they agree on every sample
//! environment.

use super::arrow::{ArrowOf, BoxedFn};
use crate::typeclass::{
    Alt, Alternative, Applicative, Apply, Bind, Comonad, Extend, Foldable, Functor, KindApplication,
    Monad, MonadPlus, MonadZero, Monoid, Plus, Semigroup,
};

/// An endo-arrow.
pub type Arrow<A> = ArrowOf<A, A>;

/// A Kleisli arrow into the context `T`.
pub type Kleisli<T, A> = ArrowOf<A, KindApplication<T, A>>;

/// A cokleisli arrow out of the context `T`.
pub type Cokleisli<T, A> = ArrowOf<KindApplication<T, A>, A>;

type Composer<A> = ArrowOf<Arrow<A>, Arrow<A>>;

/// Turns contained arrows into contained functions that `apply` accepts.
pub fn lower<T, A, B>(arrows: KindApplication<T, ArrowOf<A, B>>) -> KindApplication<T, BoxedFn<A, B>>
where
    T: Functor,
    A: 'static,
    B: 'static,
{
    T::fmap::<ArrowOf<A, B>, BoxedFn<A, B>, _>(arrows, ArrowOf::into_boxed)
}

fn run_apply<T, A>(functions: KindApplication<T, Arrow<A>>, values: KindApplication<T, A>) -> KindApplication<T, A>
where
    T: Apply,
    A: Clone + 'static,
{
    T::apply::<A, A, BoxedFn<A, A>>(lower::<T, A, A>(functions), values)
}

// =============================================================================
// Functor
// =============================================================================

/// `fmap(fa, |a| a) == fa`
pub fn functor_identity<T, A, P, R>(fa: KindApplication<T, A>, project: P) -> bool
where
    T: Functor,
    A: 'static,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
    KindApplication<T, A>: Clone,
{
    project(T::fmap::<A, A, _>(fa.clone(), |a| a)) == project(fa)
}

/// `fmap(fa, g . f) == fmap(fmap(fa, f), g)`
pub fn functor_composition<T, A, P, R>(fa: KindApplication<T, A>, f: Arrow<A>, g: Arrow<A>, project: P) -> bool
where
    T: Functor,
    A: 'static,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
    KindApplication<T, A>: Clone,
{
    let composed = g.compose(&f);
    let at_once = T::fmap::<A, A, _>(fa.clone(), move |a| composed.call(a));
    let in_steps = T::fmap::<A, A, _>(T::fmap::<A, A, _>(fa, move |a| f.call(a)), move |a| g.call(a));
    project(at_once) == project(in_steps)
}

// =============================================================================
// Apply and Applicative
// =============================================================================

/// `apply(apply(fmap(u, compose), v), w) == apply(u, apply(v, w))`
pub fn apply_associative_composition<T, A, P, R>(
    u: KindApplication<T, Arrow<A>>,
    v: KindApplication<T, Arrow<A>>,
    w: KindApplication<T, A>,
    project: P,
) -> bool
where
    T: Apply,
    A: Clone + 'static,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
    KindApplication<T, Arrow<A>>: Clone,
    KindApplication<T, A>: Clone,
{
    let composers = T::fmap::<Arrow<A>, BoxedFn<Arrow<A>, Arrow<A>>, _>(u.clone(), |f: Arrow<A>| {
        Box::new(move |g: Arrow<A>| f.compose(&g)) as BoxedFn<Arrow<A>, Arrow<A>>
    });
    let composed = T::apply::<Arrow<A>, Arrow<A>, BoxedFn<Arrow<A>, Arrow<A>>>(composers, v.clone());
    let left = run_apply::<T, A>(composed, w.clone());
    let right = run_apply::<T, A>(u, run_apply::<T, A>(v, w));
    project(left) == project(right)
}

/// `apply(pure(id), v) == v`
pub fn applicative_identity<T, A, P, R>(v: KindApplication<T, A>, project: P) -> bool
where
    T: Applicative,
    A: Clone + 'static,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
    KindApplication<T, A>: Clone,
{
    let identity = T::pure::<Arrow<A>>(ArrowOf::identity());
    project(run_apply::<T, A>(identity, v.clone())) == project(v)
}

/// `apply(apply(apply(pure(compose), u), v), w) == apply(u, apply(v, w))`
pub fn applicative_composition<T, A, P, R>(
    u: KindApplication<T, Arrow<A>>,
    v: KindApplication<T, Arrow<A>>,
    w: KindApplication<T, A>,
    project: P,
) -> bool
where
    T: Applicative,
    A: Clone + 'static,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
    KindApplication<T, Arrow<A>>: Clone,
    KindApplication<T, A>: Clone,
{
    let compose = ArrowOf::new("compose", |f: Arrow<A>| {
        ArrowOf::new("compose f", move |g: Arrow<A>| f.compose(&g))
    });
    let lifted = lower::<T, Arrow<A>, Composer<A>>(T::pure::<ArrowOf<Arrow<A>, Composer<A>>>(compose));
    let partially = T::apply::<Arrow<A>, Composer<A>, BoxedFn<Arrow<A>, Composer<A>>>(lifted, u.clone());
    let composed = T::apply::<Arrow<A>, Arrow<A>, BoxedFn<Arrow<A>, Arrow<A>>>(
        lower::<T, Arrow<A>, Arrow<A>>(partially),
        v.clone(),
    );
    let left = run_apply::<T, A>(composed, w.clone());
    let right = run_apply::<T, A>(u, run_apply::<T, A>(v, w));
    project(left) == project(right)
}

/// `apply(pure(f), pure(x)) == pure(f(x))`
pub fn applicative_homomorphism<T, A, P, R>(f: Arrow<A>, x: A, project: P) -> bool
where
    T: Applicative,
    A: Clone + 'static,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
{
    let expected = T::pure::<A>(f.call(x.clone()));
    let applied = run_apply::<T, A>(T::pure::<Arrow<A>>(f), T::pure::<A>(x));
    project(applied) == project(expected)
}

/// `apply(u, pure(y)) == apply(pure(|f| f(y)), u)`
pub fn applicative_interchange<T, A, P, R>(u: KindApplication<T, Arrow<A>>, y: A, project: P) -> bool
where
    T: Applicative,
    A: Clone + 'static,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
    KindApplication<T, Arrow<A>>: Clone,
{
    let left = run_apply::<T, A>(u.clone(), T::pure::<A>(y.clone()));
    let apply_to_y = ArrowOf::new("apply to y", move |f: Arrow<A>| f.call(y.clone()));
    let right = T::apply::<Arrow<A>, A, BoxedFn<Arrow<A>, A>>(
        lower::<T, Arrow<A>, A>(T::pure::<ArrowOf<Arrow<A>, A>>(apply_to_y)),
        u,
    );
    project(left) == project(right)
}

// =============================================================================
// Bind and Monad
// =============================================================================

/// `bind(bind(m, f), g) == bind(m, |x| bind(f(x), g))`
pub fn bind_associativity<T, A, P, R>(m: KindApplication<T, A>, f: Kleisli<T, A>, g: Kleisli<T, A>, project: P) -> bool
where
    T: Bind,
    A: 'static,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
    KindApplication<T, A>: Clone,
{
    let (inner_f, inner_g) = (f.clone(), g.clone());
    let left = T::bind::<A, A, _>(T::bind::<A, A, _>(m.clone(), move |a| f.call(a)), move |a| g.call(a));
    let right = T::bind::<A, A, _>(m, move |a| {
        let then = inner_g.clone();
        T::bind::<A, A, _>(inner_f.call(a), move |b| then.call(b))
    });
    project(left) == project(right)
}

/// `bind(pure(a), f) == f(a)`
pub fn monad_left_identity<T, A, P, R>(a: A, f: Kleisli<T, A>, project: P) -> bool
where
    T: Monad,
    A: Clone + 'static,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
{
    let expected = f.call(a.clone());
    project(T::bind::<A, A, _>(T::pure::<A>(a), move |x| f.call(x))) == project(expected)
}

/// `bind(m, pure) == m`
pub fn monad_right_identity<T, A, P, R>(m: KindApplication<T, A>, project: P) -> bool
where
    T: Monad,
    A: Clone + 'static,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
    KindApplication<T, A>: Clone,
{
    project(T::bind::<A, A, _>(m.clone(), |a| T::pure::<A>(a))) == project(m)
}

// =============================================================================
// Alt, Plus, Alternative
// =============================================================================

/// `alt(alt(x, y), z) == alt(x, alt(y, z))`
pub fn alt_associativity<T, A, P, R>(
    x: KindApplication<T, A>,
    y: KindApplication<T, A>,
    z: KindApplication<T, A>,
    project: P,
) -> bool
where
    T: Alt,
    A: 'static,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
    KindApplication<T, A>: Clone,
{
    let left = T::alt::<A>(T::alt::<A>(x.clone(), y.clone()), z.clone());
    let right = T::alt::<A>(x, T::alt::<A>(y, z));
    project(left) == project(right)
}

/// `fmap(alt(x, y), f) == alt(fmap(x, f), fmap(y, f))`
pub fn alt_distributivity<T, A, P, R>(
    x: KindApplication<T, A>,
    y: KindApplication<T, A>,
    f: Arrow<A>,
    project: P,
) -> bool
where
    T: Alt,
    A: 'static,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
    KindApplication<T, A>: Clone,
{
    let (left_f, right_f) = (f.clone(), f.clone());
    let left = T::fmap::<A, A, _>(T::alt::<A>(x.clone(), y.clone()), move |a| f.call(a));
    let right = T::alt::<A>(
        T::fmap::<A, A, _>(x, move |a| left_f.call(a)),
        T::fmap::<A, A, _>(y, move |a| right_f.call(a)),
    );
    project(left) == project(right)
}

/// `alt(empty, x) == x`
pub fn plus_left_identity<T, A, P, R>(x: KindApplication<T, A>, project: P) -> bool
where
    T: Plus,
    A: 'static,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
    KindApplication<T, A>: Clone,
{
    project(T::alt::<A>(T::empty::<A>(), x.clone())) == project(x)
}

/// `alt(x, empty) == x`
pub fn plus_right_identity<T, A, P, R>(x: KindApplication<T, A>, project: P) -> bool
where
    T: Plus,
    A: 'static,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
    KindApplication<T, A>: Clone,
{
    project(T::alt::<A>(x.clone(), T::empty::<A>())) == project(x)
}

/// `fmap(empty, f) == empty`
pub fn plus_annihilation<T, A, P, R>(f: Arrow<A>, project: P) -> bool
where
    T: Plus,
    A: 'static,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
{
    project(T::fmap::<A, A, _>(T::empty::<A>(), move |a| f.call(a))) == project(T::empty::<A>())
}

/// `apply(alt(f, g), x) == alt(apply(f, x), apply(g, x))`
pub fn alternative_distributivity<T, A, P, R>(
    f: KindApplication<T, Arrow<A>>,
    g: KindApplication<T, Arrow<A>>,
    x: KindApplication<T, A>,
    project: P,
) -> bool
where
    T: Alternative,
    A: Clone + 'static,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
    KindApplication<T, Arrow<A>>: Clone,
    KindApplication<T, A>: Clone,
{
    let left = run_apply::<T, A>(T::alt::<Arrow<A>>(f.clone(), g.clone()), x.clone());
    let right = T::alt::<A>(run_apply::<T, A>(f, x.clone()), run_apply::<T, A>(g, x));
    project(left) == project(right)
}

/// `apply(empty, x) == empty`
pub fn alternative_annihilation<T, A, P, R>(x: KindApplication<T, A>, project: P) -> bool
where
    T: Alternative,
    A: Clone + 'static,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
{
    let applied = T::apply::<A, A, BoxedFn<A, A>>(T::empty::<BoxedFn<A, A>>(), x);
    project(applied) == project(T::empty::<A>())
}

/// `bind(empty, f) == empty`
pub fn monad_zero_annihilation<T, A, P, R>(f: Kleisli<T, A>, project: P) -> bool
where
    T: MonadZero,
    A: 'static,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
{
    project(T::bind::<A, A, _>(T::empty::<A>(), move |a| f.call(a))) == project(T::empty::<A>())
}

/// `bind(alt(x, y), f) == alt(bind(x, f), bind(y, f))`
pub fn monad_plus_distributivity<T, A, P, R>(
    x: KindApplication<T, A>,
    y: KindApplication<T, A>,
    f: Kleisli<T, A>,
    project: P,
) -> bool
where
    T: MonadPlus,
    A: 'static,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
    KindApplication<T, A>: Clone,
{
    let (left_f, right_f) = (f.clone(), f.clone());
    let left = T::bind::<A, A, _>(T::alt::<A>(x.clone(), y.clone()), move |a| f.call(a));
    let right = T::alt::<A>(
        T::bind::<A, A, _>(x, move |a| left_f.call(a)),
        T::bind::<A, A, _>(y, move |a| right_f.call(a)),
    );
    project(left) == project(right)
}

// =============================================================================
// Semigroup and Monoid
// =============================================================================

/// `(a <> b) <> c == a <> (b <> c)`
pub fn semigroup_associativity<S>(a: S, b: S, c: S) -> bool
where
    S: Semigroup + Clone + PartialEq,
{
    a.clone().combine(b.clone()).combine(c.clone()) == a.combine(b.combine(c))
}

/// `empty <> a == a`
pub fn monoid_left_identity<M>(a: M) -> bool
where
    M: Monoid + Clone + PartialEq,
{
    M::empty().combine(a.clone()) == a
}

/// `a <> empty == a`
pub fn monoid_right_identity<M>(a: M) -> bool
where
    M: Monoid + Clone + PartialEq,
{
    a.clone().combine(M::empty()) == a
}

// =============================================================================
// Extend and Comonad
// =============================================================================

/// `extend(extend(w, g), f) == extend(w, |x| f(extend(x, g)))`
pub fn extend_associativity<T, A, P, R>(
    w: KindApplication<T, A>,
    f: Cokleisli<T, A>,
    g: Cokleisli<T, A>,
    project: P,
) -> bool
where
    T: Extend,
    A: 'static,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
    KindApplication<T, A>: Clone,
{
    let (outer_f, inner_g) = (f.clone(), g.clone());
    let left = T::extend::<A, A, _>(T::extend::<A, A, _>(w.clone(), move |x| g.call(x)), move |x| f.call(x));
    let right = T::extend::<A, A, _>(w, move |x| {
        let first = inner_g.clone();
        outer_f.call(T::extend::<A, A, _>(x, move |y| first.call(y)))
    });
    project(left) == project(right)
}

/// `extend(w, extract) == w`
pub fn comonad_left_identity<T, A, P, R>(w: KindApplication<T, A>, project: P) -> bool
where
    T: Comonad,
    A: 'static,
    P: Fn(KindApplication<T, A>) -> R,
    R: PartialEq,
    KindApplication<T, A>: Clone,
{
    project(T::extend::<A, A, _>(w.clone(), |x| T::extract::<A>(x))) == project(w)
}

/// `extract(extend(w, f)) == f(w)`
pub fn comonad_right_identity<T, A>(w: KindApplication<T, A>, f: Cokleisli<T, A>) -> bool
where
    T: Comonad,
    A: PartialEq + 'static,
    KindApplication<T, A>: Clone,
{
    let expected = f.call(w.clone());
    T::extract::<A>(T::extend::<A, A, _>(w, move |x| f.call(x))) == expected
}

// =============================================================================
// Foldable
// =============================================================================

/// `fold_left`, `fold_right` and `fold_map` visit the same values in the same
/// order as `to_list`.
pub fn foldable_consistency<T, A>(fa: KindApplication<T, A>) -> bool
where
    T: Foldable,
    A: PartialEq + 'static,
    KindApplication<T, A>: Clone,
{
    let listed = T::to_list::<A>(fa.clone());
    let from_left = T::fold_left::<A, Vec<A>, _>(fa.clone(), Vec::new(), |mut values, value| {
        values.push(value);
        values
    });
    let mut from_right = T::fold_right::<A, Vec<A>, _>(fa.clone(), Vec::new(), |value, mut values| {
        values.push(value);
        values
    });
    from_right.reverse();
    let length = T::length::<A>(fa.clone());
    let from_map = T::fold_map::<A, Vec<A>, _>(fa, |value| vec![value]);
    listed == from_left && listed == from_right && listed == from_map && listed.len() == length
}

// =============================================================================
// MonadTrans
// =============================================================================

#[cfg(feature = "effect")]
pub use self::monad_trans::{monad_trans_bind_distributivity, monad_trans_identity};

#[cfg(feature = "effect")]
mod monad_trans {
    use super::Kleisli;
    use crate::effect::MonadTrans;
    use crate::typeclass::{Applicative, Bind, KindApplication, Monad};

    /// `lift(M::pure(a)) == T::pure(a)`
    pub fn monad_trans_identity<T, M, A, P, R>(a: A, project: P) -> bool
    where
        T: MonadTrans,
        M: Monad,
        A: Clone + 'static,
        P: Fn(KindApplication<T::Transformed<M>, A>) -> R,
        R: PartialEq,
        KindApplication<M, A>: Clone,
    {
        let lifted = T::lift::<M, A>(M::pure::<A>(a.clone()));
        project(lifted) == project(<T::Transformed<M> as Applicative>::pure::<A>(a))
    }

    /// `lift(M::bind(m, f)) == T::bind(lift(m), |a| lift(f(a)))`
    pub fn monad_trans_bind_distributivity<T, M, A, P, R>(
        m: KindApplication<M, A>,
        f: Kleisli<M, A>,
        project: P,
    ) -> bool
    where
        T: MonadTrans,
        M: Monad,
        A: 'static,
        P: Fn(KindApplication<T::Transformed<M>, A>) -> R,
        R: PartialEq,
        KindApplication<M, A>: Clone,
    {
        let inner_f = f.clone();
        let lifted_bind = T::lift::<M, A>(M::bind::<A, A, _>(m.clone(), move |a| f.call(a)));
        let bind_lifted = <T::Transformed<M> as Bind>::bind::<A, A, _>(T::lift::<M, A>(m), move |a| {
            T::lift::<M, A>(inner_f.call(a))
        });
        project(lifted_bind) == project(bind_lifted)
    }
}

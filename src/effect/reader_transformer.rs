//! `ReaderT` - Reader Monad Transformer.
//!
//! `ReaderT<E, M, A>` wraps a function `E -> M<A>`: a computation in the inner
//! monad `M` (given by its tag) that can read a shared environment `E`.
//!
//! # Conditional Capabilities
//!
//! The instances on [`ReaderTTag<E, M>`] exist exactly when the inner monad
//! has the corresponding capability:
//!
//! | `ReaderTTag<E, M>` is... | when `M` is...            |
//! |--------------------------|---------------------------|
//! | `Functor`                | `Functor`                 |
//! | `Apply`, `Applicative`, `Bind`, `Monad` | `Monad`    |
//! | `Alt`                    | `Alt`                     |
//! | `Plus`                   | `Plus`                    |
//! | `Alternative`            | `Alternative + Monad`     |
//! | `MonadZero`              | `MonadZero`               |
//! | `MonadPlus`              | `MonadPlus`               |
//!
//! So `ReaderT` over `Vec` can `alt` and `empty`, while `ReaderT` over
//! `Identity` or `Either` can do neither and is rejected at compile time.
//!
//! # Examples
//!
//! ```rust
//! use kindness::effect::{ReaderT, ReaderTTag};
//! use kindness::typeclass::{Bind, Identity, IdentityTag};
//!
//! #[derive(Clone)]
//! struct Config {
//!     port: u16,
//!     secure: bool,
//! }
//!
//! let port = ReaderT::<Config, IdentityTag, u16>::asks(|config| config.port);
//! let url = ReaderTTag::<Config, IdentityTag>::bind(port, |port: u16| {
//!     ReaderT::<Config, IdentityTag, String>::asks(move |config| {
//!         let scheme = if config.secure { "https" } else { "http" };
//!         format!("{scheme}://localhost:{port}")
//!     })
//! });
//!
//! let config = Config { port: 8443, secure: true };
//! assert_eq!(url.run(config), Identity(String::from("https://localhost:8443")));
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::typeclass::{
    Alt, Alternative, Applicative, Apply, Bind, Functor, Identity, IdentityTag, K1, Kind1,
    KindApplication, Monad, MonadPlus, MonadZero, Plus, apply_by_monad,
};

/// A computation in the monad `M` that reads an environment of type `E`.
///
/// # Type Parameters
///
/// - `E`: The environment type (read-only context)
/// - `M`: The tag of the inner monad (`VecTag`, `OptionTag`, `IdentityTag`, ...)
/// - `A`: The result type
///
/// # Examples
///
/// ```rust
/// use kindness::effect::ReaderT;
/// use kindness::typeclass::OptionTag;
///
/// let checked = ReaderT::<i32, OptionTag, i32>::new(|limit| (limit > 0).then_some(limit * 2));
/// assert_eq!(checked.run(21), Some(42));
/// assert_eq!(checked.run(-1), None);
/// ```
pub struct ReaderT<E, M: Kind1, A> {
    /// Shared so that `bind` can replay the computation for every environment.
    run_function: Rc<dyn Fn(E) -> KindApplication<M, A>>,
}

/// `ReaderT` over [`Identity`]: a plain function of the environment.
pub type Reader<E, A> = ReaderT<E, IdentityTag, A>;

impl<E, M, A> ReaderT<E, M, A>
where
    E: 'static,
    M: Kind1,
    A: 'static,
{
    /// Creates a `ReaderT` from a function of the environment.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(E) -> KindApplication<M, A> + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation with `environment`. Can be called any number of times.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindness::effect::ReaderT;
    /// use kindness::typeclass::{Identity, IdentityTag};
    ///
    /// let next = ReaderT::<i32, IdentityTag, i32>::new(|e| Identity(e + 1));
    /// assert_eq!(next.run(5), Identity(6));
    /// assert_eq!(next.run(0), Identity(1));
    /// ```
    pub fn run(&self, environment: E) -> KindApplication<M, A> {
        (self.run_function)(environment)
    }

    /// Transforms the inner computation, possibly into another monad.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindness::effect::ReaderT;
    /// use kindness::typeclass::{OptionTag, VecTag};
    ///
    /// let divisors = ReaderT::<u32, VecTag, u32>::new(|n| (1..=n).filter(|d| n % d == 0).collect());
    /// let largest_proper = divisors.map_reader_t::<OptionTag, u32, _>(|mut all: Vec<u32>| {
    ///     all.pop();
    ///     all.pop()
    /// });
    ///
    /// assert_eq!(largest_proper.run(12), Some(6));
    /// assert_eq!(largest_proper.run(1), None);
    /// ```
    pub fn map_reader_t<N, B, F>(self, function: F) -> ReaderT<E, N, B>
    where
        N: Kind1,
        B: 'static,
        F: Fn(KindApplication<M, A>) -> KindApplication<N, B> + 'static,
    {
        let run_function = self.run_function;
        ReaderT::new(move |environment: E| function(run_function(environment)))
    }

    /// Runs the computation in an environment derived from another type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindness::effect::ReaderT;
    /// use kindness::typeclass::{Identity, IdentityTag};
    ///
    /// let doubled = ReaderT::<i32, IdentityTag, i32>::new(|x| Identity(x * 2));
    /// let from_text = doubled.with_reader_t(|text: &str| text.len() as i32);
    /// assert_eq!(from_text.run("four"), Identity(8));
    /// ```
    pub fn with_reader_t<E2, F>(self, function: F) -> ReaderT<E2, M, A>
    where
        E2: 'static,
        F: Fn(E2) -> E + 'static,
    {
        let run_function = self.run_function;
        ReaderT::new(move |environment: E2| run_function(function(environment)))
    }

    /// Runs the computation in a modified environment.
    pub fn local<F>(self, modifier: F) -> Self
    where
        F: Fn(E) -> E + 'static,
    {
        self.with_reader_t(modifier)
    }

    /// A computation that ignores the environment and replays `inner`.
    pub fn lift(inner: KindApplication<M, A>) -> Self
    where
        KindApplication<M, A>: Clone,
    {
        Self::new(move |_| inner.clone())
    }
}

impl<E, M, A> ReaderT<E, M, A>
where
    E: 'static,
    M: Applicative,
    A: Clone + 'static,
{
    /// A computation that projects its result out of the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(E) -> A + 'static,
    {
        Self::new(move |environment| M::pure::<A>(projection(environment)))
    }
}

impl<E, M> ReaderT<E, M, E>
where
    E: Clone + 'static,
    M: Applicative,
{
    /// A computation that returns the environment itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindness::effect::ReaderT;
    /// use kindness::typeclass::VecTag;
    ///
    /// let environment = ReaderT::<char, VecTag, char>::ask();
    /// assert_eq!(environment.run('x'), vec!['x']);
    /// ```
    pub fn ask() -> Self {
        Self::new(|environment| M::pure::<E>(environment))
    }
}

impl<E, A> ReaderT<E, IdentityTag, A>
where
    E: 'static,
    A: 'static,
{
    /// Runs a [`Reader`] and unwraps the [`Identity`].
    pub fn run_reader(&self, environment: E) -> A {
        self.run(environment).0
    }

    /// Maps the result of a [`Reader`].
    pub fn map_reader<B, F>(self, function: F) -> Reader<E, B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        self.map_reader_t::<IdentityTag, B, _>(move |Identity(value)| Identity(function(value)))
    }
}

/// Builds a [`Reader`] from a plain function of the environment.
///
/// # Examples
///
/// ```rust
/// use kindness::effect::reader;
///
/// let greeting = reader(|name: &'static str| format!("hello, {name}"));
/// assert_eq!(greeting.run_reader("kind"), "hello, kind");
/// assert_eq!(greeting.map_reader(|text: String| text.len()).run_reader("kind"), 11);
/// ```
pub fn reader<E, A, F>(function: F) -> Reader<E, A>
where
    E: 'static,
    A: 'static,
    F: Fn(E) -> A + 'static,
{
    ReaderT::new(move |environment| Identity(function(environment)))
}

impl<E, M: Kind1, A> Clone for ReaderT<E, M, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<E, M: Kind1, A> fmt::Debug for ReaderT<E, M, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("ReaderT").finish_non_exhaustive()
    }
}

// =============================================================================
// Kinds
// =============================================================================

/// Tag for `ReaderT<E, M, _>`.
#[derive(Debug)]
pub struct ReaderTTag<E, M>(PhantomData<fn() -> (E, M)>);

impl<E: 'static, M: Kind1> Kind1 for ReaderTTag<E, M> {
    type Of<A> = ReaderT<E, M, A>;
}

impl<E: 'static, M: Kind1, A> K1 for ReaderT<E, M, A> {
    type Tag = ReaderTTag<E, M>;
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

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<E: 'static, M: Functor> Functor for ReaderTTag<E, M> {
    fn fmap<A, B, F>(fa: ReaderT<E, M, A>, function: F) -> ReaderT<E, M, B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        let function = Rc::new(function);
        ReaderT::new(move |environment| {
            let function = Rc::clone(&function);
            M::fmap::<A, B, _>(fa.run(environment), move |a| function(a))
        })
    }
}

impl<E: Clone + 'static, M: Monad> Apply for ReaderTTag<E, M> {
    fn apply<A, B, F>(ff: ReaderT<E, M, F>, fa: ReaderT<E, M, A>) -> ReaderT<E, M, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        apply_by_monad::<Self, A, B, F>(ff, fa)
    }
}

/// `pure` ignores the environment.
impl<E: Clone + 'static, M: Monad> Applicative for ReaderTTag<E, M> {
    fn pure<A: Clone + 'static>(value: A) -> ReaderT<E, M, A> {
        ReaderT::new(move |_| M::pure::<A>(value.clone()))
    }
}

/// Both the receiver and the continuation see the same environment.
impl<E: Clone + 'static, M: Monad> Bind for ReaderTTag<E, M> {
    fn bind<A, B, F>(ma: ReaderT<E, M, A>, function: F) -> ReaderT<E, M, B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> ReaderT<E, M, B> + 'static,
    {
        let function = Rc::new(function);
        ReaderT::new(move |environment: E| {
            let function = Rc::clone(&function);
            let shared = environment.clone();
            M::bind::<A, B, _>(ma.run(environment), move |a| function(a).run(shared.clone()))
        })
    }
}

impl<E: Clone + 'static, M: Monad> Monad for ReaderTTag<E, M> {}

impl<E: Clone + 'static, M: Alt> Alt for ReaderTTag<E, M> {
    fn alt<A: 'static>(first: ReaderT<E, M, A>, second: ReaderT<E, M, A>) -> ReaderT<E, M, A> {
        ReaderT::new(move |environment: E| {
            M::alt::<A>(first.run(environment.clone()), second.run(environment))
        })
    }
}

impl<E: Clone + 'static, M: Plus> Plus for ReaderTTag<E, M> {
    fn empty<A: 'static>() -> ReaderT<E, M, A> {
        ReaderT::new(|_| M::empty::<A>())
    }
}

impl<E: Clone + 'static, M: Alternative + Monad> Alternative for ReaderTTag<E, M> {}

impl<E: Clone + 'static, M: MonadZero> MonadZero for ReaderTTag<E, M> {}

impl<E: Clone + 'static, M: MonadPlus> MonadPlus for ReaderTTag<E, M> {}

#[cfg(feature = "control")]
static_assertions::assert_not_impl_any!(
    ReaderTTag<i32, crate::control::EitherTag<String>>: Plus, Alternative
);
static_assertions::assert_not_impl_any!(ReaderTTag<i32, IdentityTag>: Plus, Alternative);
static_assertions::assert_impl_all!(ReaderTTag<i32, IdentityTag>: Monad, Alt);
static_assertions::assert_impl_all!(ReaderTTag<i32, crate::typeclass::OptionTag>: MonadZero);
static_assertions::assert_not_impl_any!(ReaderTTag<i32, crate::typeclass::OptionTag>: MonadPlus);
static_assertions::assert_impl_all!(ReaderTTag<i32, crate::typeclass::VecTag>: MonadPlus);
static_assertions::assert_not_impl_any!(ReaderT<i32, crate::typeclass::VecTag, i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{OptionTag, VecTag};
    use rstest::rstest;

    type Counter = ReaderT<i32, IdentityTag, i32>;

    #[rstest]
    fn run_applies_environment() {
        let next = Counter::new(|e| Identity(e + 1));
        assert_eq!(next.run(5), Identity(6));
    }

    #[rstest]
    #[case(0, 0)]
    #[case(7, 14)]
    fn ask_returns_environment(#[case] environment: i32, #[case] expected: i32) {
        let doubled = ReaderTTag::<i32, IdentityTag>::fmap(Counter::ask(), |e: i32| e * 2);
        assert_eq!(doubled.run_reader(environment), expected);
    }

    #[rstest]
    fn local_changes_environment_for_inner_computation_only() {
        let outer = Counter::ask();
        let inner = Counter::ask().local(|e| e * 100);
        let both = ReaderTTag::<i32, IdentityTag>::map2(outer, inner, |o: i32, i: i32| (o, i));
        assert_eq!(both.run(3), Identity((3, 300)));
    }

    #[rstest]
    fn pure_ignores_environment() {
        let constant = ReaderTTag::<i32, OptionTag>::pure('c');
        assert_eq!(constant.run(1), Some('c'));
        assert_eq!(constant.run(-1), Some('c'));
    }

    #[rstest]
    fn bind_threads_environment_through_continuation() {
        let base = ReaderT::<i32, VecTag, i32>::new(|e| vec![e, e + 1]);
        let spread = ReaderTTag::<i32, VecTag>::bind(base, |x: i32| {
            ReaderT::<i32, VecTag, i32>::new(move |e| vec![x * e])
        });
        assert_eq!(spread.run(10), vec![100, 110]);
    }

    #[rstest]
    fn apply_runs_functions_outer() {
        type IntFunction = fn(i32) -> i32;
        fn increment(x: i32) -> i32 {
            x + 1
        }
        fn double(x: i32) -> i32 {
            x * 2
        }
        let functions = ReaderT::<i32, VecTag, IntFunction>::lift(vec![increment as IntFunction, double]);
        let values = ReaderT::<i32, VecTag, i32>::new(|e| vec![e, e + 1]);
        assert_eq!(ReaderTTag::<i32, VecTag>::apply(functions, values).run(1), vec![2, 3, 2, 4]);
    }

    #[rstest]
    fn alt_runs_both_sides_in_same_environment() {
        let small = ReaderT::<i32, OptionTag, &str>::new(|e| (e < 10).then_some("small"));
        let any = ReaderT::<i32, OptionTag, &str>::new(|_| Some("any"));
        let chosen = ReaderTTag::<i32, OptionTag>::alt(small, any);
        assert_eq!(chosen.run(3), Some("small"));
        assert_eq!(chosen.run(30), Some("any"));
    }

    #[rstest]
    fn empty_and_guard_over_vec() {
        let nothing = ReaderTTag::<u8, VecTag>::empty::<u8>();
        assert!(nothing.run(1).is_empty());

        let filtered = ReaderTTag::<i32, VecTag>::bind(
            ReaderT::<i32, VecTag, i32>::new(|limit| (0..limit).collect()),
            |x: i32| ReaderTTag::<i32, VecTag>::fmap(ReaderTTag::<i32, VecTag>::guard(x % 2 == 1), move |()| x),
        );
        assert_eq!(filtered.run(6), vec![1, 3, 5]);
    }

    #[rstest]
    fn map_reader_t_switches_inner_monad() {
        let listed = ReaderT::<i32, VecTag, i32>::new(|e| vec![e, e * 2]);
        let first = listed.map_reader_t::<OptionTag, i32, _>(|values: Vec<i32>| values.first().copied());
        assert_eq!(first.run(4), Some(4));
    }

    #[rstest]
    fn with_reader_t_adapts_environment_type() {
        let length = reader(|text: String| text.len());
        let from_number = length.with_reader_t(|n: u32| n.to_string());
        assert_eq!(from_number.run_reader(12_345), 5);
    }

    #[rstest]
    fn map_reader_maps_result() {
        let squared = reader(|e: i32| e).map_reader(|x: i32| x * x);
        assert_eq!(squared.run_reader(9), 81);
    }

    #[rstest]
    fn debug_hides_function() {
        assert_eq!(format!("{:?}", Counter::ask()), "ReaderT { .. }");
    }
}

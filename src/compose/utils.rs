//! Combinators used to build the functions handed to the type classes.
//!
//! - [`identity`] (I combinator), the unit of composition and of `fmap`
//! - [`constant`] (K combinator), behind `Functor::replace`
//! - [`flip`] (C combinator), as in the `Dual` fold derivation
//! - [`curry`] / [`uncurry`] between two-argument and nested closures
//! - [`compose`] / [`pipe`], the function forms of the macros

use std::rc::Rc;

/// Returns the value unchanged.
///
/// # Examples
///
/// ```
/// use kindness::compose::identity;
/// use kindness::typeclass::{Functor, OptionTag};
///
/// assert_eq!(OptionTag::fmap(Some(3), identity), Some(3));
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// A function that ignores its input and returns a clone of `value`.
///
/// # Examples
///
/// ```
/// use kindness::compose::constant;
///
/// let always_zero = constant::<_, &str>(0);
/// assert_eq!(always_zero("ignored"), 0);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function: `flip(f)(b, a) == f(a, b)`.
///
/// # Examples
///
/// ```
/// use kindness::compose::flip;
///
/// let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
/// assert_eq!(flip(subtract)(1, 10), 9);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

/// Turns a two-argument function into one returning a function.
///
/// The first argument is cloned into each inner closure, so the partially
/// applied function can be called repeatedly.
///
/// # Examples
///
/// ```
/// use kindness::compose::curry;
///
/// let add = curry(|left: i32, right: i32| left + right);
/// let add_five = add(5);
/// assert_eq!(add_five(1), 6);
/// assert_eq!(add_five(2), 7);
/// ```
pub fn curry<A, B, C, F>(function: F) -> impl Fn(A) -> Box<dyn Fn(B) -> C>
where
    A: Clone + 'static,
    B: 'static,
    C: 'static,
    F: Fn(A, B) -> C + 'static,
{
    let function = Rc::new(function);
    move |first: A| {
        let function = Rc::clone(&function);
        Box::new(move |second: B| function(first.clone(), second)) as Box<dyn Fn(B) -> C>
    }
}

/// Turns a curried function back into one taking both arguments.
///
/// # Examples
///
/// ```
/// use kindness::compose::uncurry;
///
/// let scale = uncurry(|factor: i32| move |x: i32| factor * x);
/// assert_eq!(scale(3, 4), 12);
/// ```
pub fn uncurry<A, B, C, G, F>(function: F) -> impl Fn(A, B) -> C
where
    F: Fn(A) -> G,
    G: FnOnce(B) -> C,
{
    move |first, second| function(first)(second)
}

/// Right-to-left composition: `compose(f, g)(x) == f(g(x))`.
///
/// # Examples
///
/// ```
/// use kindness::compose::compose;
///
/// let describe = compose(|length: usize| format!("{length}"), |text: &str| text.len());
/// assert_eq!(describe("four"), "4");
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |input| outer(inner(input))
}

/// Left-to-right composition: `pipe(f, g)(x) == g(f(x))`.
#[inline]
pub fn pipe<A, B, C, F, G>(first: F, then: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input| then(first(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_is_unit_of_compose() {
        let double = |x: i32| x * 2;
        assert_eq!(compose(identity, double)(7), double(7));
        assert_eq!(compose(double, identity)(7), double(7));
    }

    #[rstest]
    fn constant_ignores_input() {
        let always_hello = constant("hello");
        assert_eq!(always_hello(42), "hello");
        assert_eq!(always_hello(-1), "hello");
    }

    #[rstest]
    #[case(2, 3, 8)]
    #[case(3, 2, 9)]
    fn flip_swaps_arguments(#[case] base: i32, #[case] exponent: u32, #[case] expected: i32) {
        let power = |base: i32, exponent: u32| base.pow(exponent);
        assert_eq!(flip(power)(exponent, base), expected);
    }

    #[rstest]
    fn curry_then_uncurry_restores_function() {
        let concatenate = |left: String, right: &'static str| left + right;
        let curried = curry(concatenate);
        let restored = uncurry(curried);
        assert_eq!(restored(String::from("kind"), "ness"), "kindness");
    }

    #[rstest]
    fn pipe_is_flipped_compose() {
        let increment = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        assert_eq!(pipe(increment, double)(4), compose(double, increment)(4));
        assert_eq!(pipe(increment, double)(4), 10);
    }
}

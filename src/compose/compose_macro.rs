//! The `compose!` macro: right-to-left function composition.

/// Composes functions right to left.
///
/// `compose!(f, g, h)` builds `move |x| f(g(h(x)))`. A single function is
/// returned unchanged. The composed closure calls each function once per
/// call, so every argument must be `Fn` for the result to be called twice.
///
/// # Examples
///
/// ```
/// use kindness::compose;
///
/// let increment = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
///
/// let composed = compose!(increment, double);
/// assert_eq!(composed(5), 11);
/// ```
///
/// Composition commutes with `fmap` (the functor composition law):
///
/// ```
/// use kindness::compose;
/// use kindness::typeclass::{Functor, VecTag};
///
/// let increment = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
///
/// let at_once = VecTag::fmap(vec![1, 2], compose!(increment, double));
/// let in_steps = VecTag::fmap(VecTag::fmap(vec![1, 2], double), increment);
/// assert_eq!(at_once, in_steps);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr) => {
        $function
    };

    ($last:expr, $first:expr $(,)?) => {{
        let last = $last;
        let first = $first;
        move |input| last(first(input))
    }};

    ($last:expr, $($rest:expr),+ $(,)?) => {{
        let last = $last;
        let rest = $crate::compose!($($rest),+);
        move |input| last(rest(input))
    }};
}

//! The `pipe!` macro: left-to-right application.

/// Pushes a value through functions from left to right.
///
/// `pipe!(x, f, g)` evaluates `g(f(x))`; `pipe!(x)` is `x`. Each function is
/// called exactly once, so `FnOnce` closures are accepted.
///
/// # Examples
///
/// ```
/// use kindness::pipe;
/// use kindness::typeclass::{Bind, OptionTag};
///
/// let parse = |text: &str| text.parse::<i32>().ok();
/// let positive = |parsed: Option<i32>| OptionTag::bind(parsed, |x| (x > 0).then_some(x));
///
/// assert_eq!(pipe!("12", parse, positive), Some(12));
/// assert_eq!(pipe!("-3", parse, positive), None);
/// ```
///
/// `pipe!(x, f, g, h)` equals `compose!(h, g, f)(x)`.
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($rest:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($rest),+)
    };
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    #[rstest]
    fn value_alone_is_unchanged() {
        assert_eq!(pipe!("unchanged"), "unchanged");
    }

    #[rstest]
    fn consuming_functions_run_in_order() {
        let keep_even = |values: Vec<i32>| values.into_iter().filter(|x| x % 2 == 0).collect::<Vec<_>>();
        let total = |values: Vec<i32>| values.into_iter().sum::<i32>();
        assert_eq!(pipe!(vec![1, 2, 3, 4], keep_even, total), 6);
    }

    #[rstest]
    fn agrees_with_compose() {
        let increment = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        let square = |x: i32| x * x;
        assert_eq!(pipe!(3, square, double, increment), crate::compose!(increment, double, square)(3));
    }
}

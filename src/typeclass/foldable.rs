//! Foldable type class - reducing a structure to a summary value.
//!
//! Any one of `fold_right`, `fold_left` and `fold_map` determines the other
//! two. The derivation functions in this module encode those definitions so
//! an instance can implement one fold directly and delegate the rest:
//!
//! | implemented   | derive the others with                                       |
//! |---------------|--------------------------------------------------------------|
//! | `fold_left`   | [`fold_right_by_fold_left`], [`fold_map_by_fold_left`]       |
//! | `fold_right`  | [`fold_left_by_fold_right`], [`fold_map_by_fold_right`]      |
//! | `fold_map`    | [`fold_right_by_fold_map`], [`fold_left_by_fold_map`]        |
//!
//! Folds in the opposite direction go through [`Endo`] (and [`Dual`] for
//! left folds), so every derivation visits elements in structure order.
//! The composed function nests one call per value: the `Endo` derivations
//! need stack depth proportional to the length of the structure. `VecTag`
//! folds its elements directly and is safe for any length.
//!
//! # Laws
//!
//! ```text
//! fold_right(fa, vec![], |a, acc| [a] ++ acc)
//!     == fold_left(fa, vec![], |acc, a| acc ++ [a])
//!     == fold_map(fa, |a| vec![a])
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindness::typeclass::{Foldable, Sum, VecTag};
//!
//! assert_eq!(VecTag::fold_left(vec![1, 2, 3], 0, |acc: i32, x: i32| acc - x), -6);
//! assert_eq!(VecTag::fold_right(vec![1, 2, 3], 0, |x: i32, acc: i32| x - acc), 2);
//! assert_eq!(VecTag::fold_map(vec![1, 2, 3], Sum), Sum(6));
//! ```

use std::rc::Rc;

use super::higher::{Kind1, KindApplication, OptionTag, PairTag, VecTag};
use super::identity::{Identity, IdentityTag};
use super::monoid::Monoid;
use super::semigroup::Semigroup;
use super::wrappers::{Dual, Endo};

/// A structure whose values can be reduced in order.
pub trait Foldable: Kind1 {
    /// Right-associative fold: `f(a1, f(a2, ... f(an, init)))`.
    fn fold_right<A, B, F>(fa: Self::Of<A>, init: B, function: F) -> B
    where
        A: 'static,
        B: 'static,
        F: Fn(A, B) -> B + 'static;

    /// Left-associative fold: `f(... f(f(init, a1), a2) ..., an)`.
    fn fold_left<A, B, F>(fa: Self::Of<A>, init: B, function: F) -> B
    where
        A: 'static,
        B: 'static,
        F: Fn(B, A) -> B + 'static;

    /// Maps every value into a monoid and combines the results in order.
    fn fold_map<A, M, F>(fa: Self::Of<A>, function: F) -> M
    where
        A: 'static,
        M: Monoid + 'static,
        F: Fn(A) -> M + 'static;

    /// Combines monoidal values in order.
    fn fold<M: Monoid + 'static>(fa: Self::Of<M>) -> M {
        Self::fold_map::<M, M, _>(fa, |value| value)
    }

    /// Counts the values.
    fn length<A: 'static>(fa: Self::Of<A>) -> usize {
        Self::fold_left::<A, usize, _>(fa, 0, |count, _| count + 1)
    }

    /// Collects the values in order.
    fn to_list<A: 'static>(fa: Self::Of<A>) -> Vec<A> {
        Self::fold_left::<A, Vec<A>, _>(fa, Vec::new(), |mut values, value| {
            values.push(value);
            values
        })
    }

    /// Whether any value satisfies `predicate`.
    fn exists<A, P>(fa: Self::Of<A>, predicate: P) -> bool
    where
        A: 'static,
        P: Fn(&A) -> bool + 'static,
    {
        Self::fold_left::<A, bool, _>(fa, false, move |found, value| found || predicate(&value))
    }

    /// Whether every value satisfies `predicate`.
    fn for_all<A, P>(fa: Self::Of<A>, predicate: P) -> bool
    where
        A: 'static,
        P: Fn(&A) -> bool + 'static,
    {
        Self::fold_left::<A, bool, _>(fa, true, move |all, value| all && predicate(&value))
    }
}

// =============================================================================
// Derivations
// =============================================================================

/// `fold_right` from `fold_left`, composing one [`Endo`] per value.
///
/// Running the composition takes one stack frame per value.
pub fn fold_right_by_fold_left<T, A, B, F>(fa: KindApplication<T, A>, init: B, function: F) -> B
where
    T: Foldable,
    A: 'static,
    B: 'static,
    F: Fn(A, B) -> B + 'static,
{
    let function = Rc::new(function);
    let composed = T::fold_left::<A, Endo<B>, _>(fa, Endo::empty(), move |accumulator, value| {
        let function = Rc::clone(&function);
        accumulator.combine(Endo::new(move |rest| function(value, rest)))
    });
    composed.call(init)
}

/// `fold_map` from `fold_left`: `fold_left(fa, empty, |acc, a| acc <> f(a))`.
pub fn fold_map_by_fold_left<T, A, M, F>(fa: KindApplication<T, A>, function: F) -> M
where
    T: Foldable,
    A: 'static,
    M: Monoid + 'static,
    F: Fn(A) -> M + 'static,
{
    T::fold_left::<A, M, _>(fa, M::empty(), move |accumulator, value| {
        accumulator.combine(function(value))
    })
}

/// `fold_left` from `fold_right`, composing one `Dual<Endo>` per value.
///
/// Running the composition takes one stack frame per value.
pub fn fold_left_by_fold_right<T, A, B, F>(fa: KindApplication<T, A>, init: B, function: F) -> B
where
    T: Foldable,
    A: 'static,
    B: 'static,
    F: Fn(B, A) -> B + 'static,
{
    let function = Rc::new(function);
    let Dual(composed) = T::fold_right::<A, Dual<Endo<B>>, _>(
        fa,
        Dual(Endo::empty()),
        move |value, accumulator| {
            let function = Rc::clone(&function);
            Dual(Endo::new(move |seed| function(seed, value))).combine(accumulator)
        },
    );
    composed.call(init)
}

/// `fold_map` from `fold_right`: `fold_right(fa, empty, |a, acc| f(a) <> acc)`.
pub fn fold_map_by_fold_right<T, A, M, F>(fa: KindApplication<T, A>, function: F) -> M
where
    T: Foldable,
    A: 'static,
    M: Monoid + 'static,
    F: Fn(A) -> M + 'static,
{
    T::fold_right::<A, M, _>(fa, M::empty(), move |value, accumulator| {
        function(value).combine(accumulator)
    })
}

/// `fold_right` from `fold_map`: `appEndo(fold_map(fa, Endo ∘ curry(f)))(init)`.
///
/// Running the composition takes one stack frame per value.
pub fn fold_right_by_fold_map<T, A, B, F>(fa: KindApplication<T, A>, init: B, function: F) -> B
where
    T: Foldable,
    A: 'static,
    B: 'static,
    F: Fn(A, B) -> B + 'static,
{
    let function = Rc::new(function);
    T::fold_map::<A, Endo<B>, _>(fa, move |value| {
        let function = Rc::clone(&function);
        Endo::new(move |rest| function(value, rest))
    })
    .call(init)
}

/// `fold_left` from `fold_map`:
/// `appEndo(getDual(fold_map(fa, Dual ∘ Endo ∘ flip(curry(f)))))(init)`.
///
/// Running the composition takes one stack frame per value.
pub fn fold_left_by_fold_map<T, A, B, F>(fa: KindApplication<T, A>, init: B, function: F) -> B
where
    T: Foldable,
    A: 'static,
    B: 'static,
    F: Fn(B, A) -> B + 'static,
{
    let function = Rc::new(function);
    let Dual(composed) = T::fold_map::<A, Dual<Endo<B>>, _>(fa, move |value| {
        let function = Rc::clone(&function);
        Dual(Endo::new(move |seed| function(seed, value)))
    });
    composed.call(init)
}

// =============================================================================
// Implementations
// =============================================================================

/// Folds the elements directly in both directions, in constant stack depth.
impl Foldable for VecTag {
    fn fold_right<A, B, F>(fa: Vec<A>, init: B, function: F) -> B
    where
        A: 'static,
        B: 'static,
        F: Fn(A, B) -> B + 'static,
    {
        fa.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    fn fold_left<A, B, F>(fa: Vec<A>, init: B, function: F) -> B
    where
        A: 'static,
        B: 'static,
        F: Fn(B, A) -> B + 'static,
    {
        fa.into_iter().fold(init, function)
    }

    fn fold_map<A, M, F>(fa: Vec<A>, function: F) -> M
    where
        A: 'static,
        M: Monoid + 'static,
        F: Fn(A) -> M + 'static,
    {
        fa.into_iter()
            .fold(M::empty(), |accumulator, element| accumulator.combine(function(element)))
    }

    fn length<A: 'static>(fa: Vec<A>) -> usize {
        fa.len()
    }

    fn to_list<A: 'static>(fa: Vec<A>) -> Vec<A> {
        fa
    }
}

/// Implemented by `fold_map`.
impl Foldable for OptionTag {
    fn fold_right<A, B, F>(fa: Option<A>, init: B, function: F) -> B
    where
        A: 'static,
        B: 'static,
        F: Fn(A, B) -> B + 'static,
    {
        fold_right_by_fold_map::<Self, A, B, F>(fa, init, function)
    }

    fn fold_left<A, B, F>(fa: Option<A>, init: B, function: F) -> B
    where
        A: 'static,
        B: 'static,
        F: Fn(B, A) -> B + 'static,
    {
        fold_left_by_fold_map::<Self, A, B, F>(fa, init, function)
    }

    fn fold_map<A, M, F>(fa: Option<A>, function: F) -> M
    where
        A: 'static,
        M: Monoid + 'static,
        F: Fn(A) -> M + 'static,
    {
        fa.map_or_else(M::empty, function)
    }
}

/// Implemented by `fold_right`.
impl Foldable for IdentityTag {
    fn fold_right<A, B, F>(fa: Identity<A>, init: B, function: F) -> B
    where
        A: 'static,
        B: 'static,
        F: Fn(A, B) -> B + 'static,
    {
        function(fa.0, init)
    }

    fn fold_left<A, B, F>(fa: Identity<A>, init: B, function: F) -> B
    where
        A: 'static,
        B: 'static,
        F: Fn(B, A) -> B + 'static,
    {
        fold_left_by_fold_right::<Self, A, B, F>(fa, init, function)
    }

    fn fold_map<A, M, F>(fa: Identity<A>, function: F) -> M
    where
        A: 'static,
        M: Monoid + 'static,
        F: Fn(A) -> M + 'static,
    {
        fold_map_by_fold_right::<Self, A, M, F>(fa, function)
    }
}

/// Folds the single focused value; the environment is ignored.
impl<X: 'static> Foldable for PairTag<X> {
    fn fold_right<A, B, F>((_, value): (X, A), init: B, function: F) -> B
    where
        A: 'static,
        B: 'static,
        F: Fn(A, B) -> B + 'static,
    {
        function(value, init)
    }

    fn fold_left<A, B, F>((_, value): (X, A), init: B, function: F) -> B
    where
        A: 'static,
        B: 'static,
        F: Fn(B, A) -> B + 'static,
    {
        function(init, value)
    }

    fn fold_map<A, M, F>((_, value): (X, A), function: F) -> M
    where
        A: 'static,
        M: Monoid + 'static,
        F: Fn(A) -> M + 'static,
    {
        function(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Sum;
    use rstest::rstest;

    fn subtract_right(value: i32, accumulator: i32) -> i32 {
        value - accumulator
    }

    fn subtract_left(accumulator: i32, value: i32) -> i32 {
        accumulator - value
    }

    #[rstest]
    #[case(vec![], 0)]
    #[case(vec![5], 5)]
    #[case(vec![1, 2, 3], 2)]
    fn vec_fold_right_is_right_associative(#[case] values: Vec<i32>, #[case] expected: i32) {
        assert_eq!(VecTag::fold_right(values, 0, subtract_right), expected);
    }

    #[rstest]
    #[case(vec![1, 2, 3], -6)]
    #[case(vec![], 0)]
    fn vec_fold_left_is_left_associative(#[case] values: Vec<i32>, #[case] expected: i32) {
        assert_eq!(VecTag::fold_left(values, 0, subtract_left), expected);
    }

    #[rstest]
    fn vec_fold_map_keeps_order() {
        let text = VecTag::fold_map(vec![1, 2, 3], |x: i32| x.to_string());
        assert_eq!(text, "123");
    }

    #[rstest]
    #[case(Some(4), 10, 6)]
    #[case(None, 10, 10)]
    fn option_folds(#[case] value: Option<i32>, #[case] init: i32, #[case] expected_left: i32) {
        assert_eq!(OptionTag::fold_left(value, init, subtract_left), expected_left);
        assert_eq!(
            OptionTag::fold_right(value, init, subtract_right),
            value.map_or(init, |x| x - init)
        );
    }

    #[rstest]
    fn identity_folds_single_value() {
        assert_eq!(IdentityTag::fold_left(Identity(3), 10, subtract_left), 7);
        assert_eq!(IdentityTag::fold_map(Identity(3), Sum), Sum(3));
    }

    #[rstest]
    fn pair_folds_focused_value_only() {
        assert_eq!(PairTag::<char>::fold_map(('e', 9), Sum), Sum(9));
        assert_eq!(PairTag::<char>::length(('e', 9)), 1);
    }

    #[rstest]
    fn provided_methods() {
        assert_eq!(VecTag::fold(vec![Sum(1), Sum(2)]), Sum(3));
        assert_eq!(OptionTag::length(Some('x')), 1);
        assert_eq!(OptionTag::to_list(Some('x')), vec!['x']);
        assert!(VecTag::exists(vec![1, 2, 3], |x: &i32| *x > 2));
        assert!(!VecTag::for_all(vec![1, 2, 3], |x: &i32| *x > 2));
        assert!(OptionTag::for_all(None::<i32>, |_: &i32| false));
    }

    const LARGE: u64 = 200_000;

    fn large_vec() -> Vec<u64> {
        (0..LARGE).collect()
    }

    #[rstest]
    fn vec_folds_handle_large_inputs() {
        let expected = LARGE * (LARGE - 1) / 2;
        let sums: Vec<Sum<u64>> = large_vec().into_iter().map(Sum).collect();

        assert_eq!(VecTag::fold_right(large_vec(), 0, |x: u64, acc: u64| x + acc), expected);
        assert_eq!(VecTag::fold_left(large_vec(), 0, |acc: u64, x: u64| acc + x), expected);
        assert_eq!(VecTag::fold_map(large_vec(), Sum), Sum(expected));
        assert_eq!(VecTag::fold(sums), Sum(expected));
        assert_eq!(VecTag::length(large_vec()), 200_000);
        assert_eq!(VecTag::to_list(large_vec()).len(), 200_000);
        assert!(VecTag::exists(large_vec(), |x: &u64| *x == LARGE - 1));
        assert!(VecTag::for_all(large_vec(), |x: &u64| *x < LARGE));
    }

    #[rstest]
    fn vec_fold_right_visits_large_input_from_the_end() {
        let visited = VecTag::fold_right(large_vec(), Vec::new(), |x: u64, mut acc: Vec<u64>| {
            acc.push(x);
            acc
        });
        assert_eq!(visited.len(), 200_000);
        assert_eq!(visited.first(), Some(&(LARGE - 1)));
        assert_eq!(visited.last(), Some(&0));
    }

    #[rstest]
    fn vec_fold_map_keeps_order_on_large_input() {
        let cycled: Vec<u64> = (0..LARGE).map(|x| x % 10).collect();
        let digits = VecTag::fold_map(cycled, |x: u64| x.to_string());
        assert_eq!(digits.len(), 200_000);
        assert!(digits.starts_with("0123456789"));
        assert!(digits.ends_with("56789"));
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![1])]
    #[case(vec![3, 1, 4, 1, 5])]
    fn every_derivation_agrees_with_direct_vec_folds(#[case] values: Vec<i32>) {
        let expected_left = values.iter().fold(100, |acc, x| subtract_left(acc, *x));
        let expected_right = values.iter().rev().fold(100, |acc, x| subtract_right(*x, acc));
        let expected_text: String = values.iter().map(ToString::to_string).collect();
        let to_text = |x: i32| x.to_string();

        assert_eq!(fold_right_by_fold_left::<VecTag, _, _, _>(values.clone(), 100, subtract_right), expected_right);
        assert_eq!(fold_right_by_fold_map::<VecTag, _, _, _>(values.clone(), 100, subtract_right), expected_right);
        assert_eq!(fold_left_by_fold_right::<VecTag, _, _, _>(values.clone(), 100, subtract_left), expected_left);
        assert_eq!(fold_left_by_fold_map::<VecTag, _, _, _>(values.clone(), 100, subtract_left), expected_left);
        assert_eq!(fold_map_by_fold_left::<VecTag, _, _, _>(values.clone(), to_text), expected_text);
        assert_eq!(fold_map_by_fold_right::<VecTag, _, _, _>(values, to_text), expected_text);
    }
}

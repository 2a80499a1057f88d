#![cfg(all(feature = "control", feature = "effect"))]
//! End-to-end scenarios across the instances, written with the method syntax
//! a user would reach for first.

use kindness::control::{Either, EitherTag};
use kindness::effect::{ReaderT, ReaderTTag, reader};
use kindness::prelude::*;
use rstest::rstest;

fn increment(x: i32) -> i32 {
    x + 1
}

fn double(x: i32) -> i32 {
    x * 2
}

fn add_ten(x: i32) -> i32 {
    x + 10
}

#[rstest]
fn vec_alt_concatenates() {
    assert_eq!(vec![1, 2].alt(vec![3, 4]), vec![1, 2, 3, 4]);
}

#[rstest]
fn vec_apply_with_single_function() {
    assert_eq!(vec![increment as fn(i32) -> i32].apply_to(vec![10, 20]), vec![11, 21]);
}

#[rstest]
fn vec_apply_runs_functions_in_outer_loop() {
    let functions: Vec<fn(i32) -> i32> = vec![increment, double];
    assert_eq!(functions.apply_to(vec![1, 2]), vec![2, 3, 2, 4]);
}

#[rstest]
fn vec_apply_associative_composition() {
    let outer: Vec<fn(i32) -> i32> = vec![increment, double];
    let inner: Vec<fn(i32) -> i32> = vec![add_ten];
    let values = vec![1, 2];

    let composers = VecTag::fmap(outer.clone(), |f: fn(i32) -> i32| {
        move |g: fn(i32) -> i32| move |x: i32| f(g(x))
    });
    let composed = VecTag::apply(composers, inner.clone());
    let left = VecTag::apply(composed, values.clone());
    let right = VecTag::apply(outer, VecTag::apply(inner, values));

    assert_eq!(left, right);
    assert_eq!(left, vec![12, 13, 22, 24]);
}

#[rstest]
#[case(Either::Left(1), Either::Left(1))]
#[case(Either::Right(1), Either::Right(2))]
fn either_bind(#[case] input: Either<i32, i32>, #[case] expected: Either<i32, i32>) {
    assert_eq!(input.bind(|x: i32| Either::Right(x + 1)), expected);
}

#[rstest]
fn either_apply_inspects_function_first() {
    let missing: Either<&str, fn(i32) -> i32> = Either::Left("no function");
    let broken: Either<&str, i32> = Either::Left("no value");
    assert_eq!(EitherTag::<&str>::apply(missing, broken), Either::Left("no function"));
}

#[rstest]
fn reader_t_run_passes_environment() {
    let next = ReaderT::<i32, IdentityTag, i32>::new(|e| Identity(e + 1));
    assert_eq!(next.run(5), Identity(6));
}

#[rstest]
fn reader_t_over_vec_enumerates_per_environment() {
    let digits = ReaderT::<u32, VecTag, u32>::new(|base| (0..base).collect());
    let pairs = ReaderTTag::<u32, VecTag>::bind(digits.clone(), move |high: u32| {
        ReaderTTag::<u32, VecTag>::fmap(digits.clone(), move |low: u32| high * 10 + low)
    });
    assert_eq!(pairs.run(2), vec![0, 1, 10, 11]);
}

#[rstest]
fn reader_configures_a_greeting() {
    #[derive(Clone)]
    struct Config {
        name: &'static str,
        excited: bool,
    }

    let name = reader(|config: Config| config.name);
    let greeting = ReaderTTag::<Config, IdentityTag>::bind(name, |name: &'static str| {
        reader(move |config: Config| {
            let punctuation = if config.excited { "!" } else { "." };
            format!("Hello, {name}{punctuation}")
        })
    });

    let calm = Config { name: "Ada", excited: false };
    let loud = Config { name: "Ada", excited: true };
    assert_eq!(greeting.run_reader(calm), "Hello, Ada.");
    assert_eq!(greeting.run_reader(loud), "Hello, Ada!");
}

#[rstest]
fn foldable_to_list_and_fold() {
    assert_eq!(Some(3).fold_left(0, |acc, x: i32| acc + x), 3);
    assert_eq!(VecTag::fold(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
    assert_eq!(OptionTag::to_list(None::<i32>), Vec::<i32>::new());
}

#[rstest]
fn comonad_extend_on_pair_sees_environment() {
    let labelled = ("total", 5).extend_with(|(label, value): (&str, i32)| format!("{label}={value}"));
    assert_eq!(labelled, ("total", String::from("total=5")));
}

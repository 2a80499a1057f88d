//! Running a single law against generated inputs.

use std::error::Error;
use std::fmt;

use proptest::strategy::Strategy;
use proptest::test_runner::{Config, TestCaseError, TestError, TestRunner};

/// Number of generated cases per law unless configured otherwise.
pub const DEFAULT_CASES: u32 = 128;

/// A law that did not hold, with the smallest input proptest could shrink to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LawViolation {
    law: &'static str,
    counterexample: Option<String>,
    reason: String,
}

impl LawViolation {
    /// Name of the violated law.
    #[must_use]
    pub const fn law(&self) -> &'static str {
        self.law
    }

    /// The minimal failing input, when the run got as far as finding one.
    #[must_use]
    pub fn counterexample(&self) -> Option<&str> {
        self.counterexample.as_deref()
    }

    /// Why the run failed.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for LawViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "law `{}` violated: {}", self.law, self.reason)?;
        if let Some(counterexample) = &self.counterexample {
            write!(formatter, "; minimal failing input: {counterexample}")?;
        }
        Ok(())
    }
}

impl Error for LawViolation {}

/// The configuration used by [`check_law`]: [`DEFAULT_CASES`] cases and no
/// failure persistence, so checks run from library code never write files.
#[must_use]
pub fn default_config() -> Config {
    Config {
        cases: DEFAULT_CASES,
        failure_persistence: None,
        ..Config::default()
    }
}

/// Checks that `predicate` holds for every input drawn from `strategy`.
///
/// # Errors
///
/// Returns a [`LawViolation`] carrying the shrunk counterexample when the
/// predicate is false for some input, or when proptest gives up on the run.
///
/// # Examples
///
/// ```rust
/// use kindness::laws::check_law;
/// use proptest::prelude::*;
///
/// assert!(check_law("addition commutes", (any::<u8>(), any::<u8>()), |(a, b)| {
///     a.wrapping_add(b) == b.wrapping_add(a)
/// })
/// .is_ok());
///
/// let violation = check_law("every byte is small", any::<u8>(), |byte| byte < 10).unwrap_err();
/// assert_eq!(violation.law(), "every byte is small");
/// assert_eq!(violation.counterexample(), Some("10"));
/// ```
pub fn check_law<S, P>(law: &'static str, strategy: S, predicate: P) -> Result<(), LawViolation>
where
    S: Strategy,
    P: Fn(S::Value) -> bool,
{
    check_law_with(default_config(), law, strategy, predicate)
}

/// [`check_law`] with an explicit proptest configuration.
///
/// # Errors
///
/// Same as [`check_law`].
pub fn check_law_with<S, P>(
    config: Config,
    law: &'static str,
    strategy: S,
    predicate: P,
) -> Result<(), LawViolation>
where
    S: Strategy,
    P: Fn(S::Value) -> bool,
{
    let mut runner = TestRunner::new(config);
    runner
        .run(&strategy, |value| {
            if predicate(value) {
                Ok(())
            } else {
                Err(TestCaseError::fail(law))
            }
        })
        .map_err(|error| match error {
            TestError::Fail(reason, value) => LawViolation {
                law,
                counterexample: Some(format!("{value:?}")),
                reason: reason.message().to_owned(),
            },
            TestError::Abort(reason) => LawViolation {
                law,
                counterexample: None,
                reason: reason.message().to_owned(),
            },
        })
}

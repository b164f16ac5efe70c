//! The shrink loop and its results.
//!
//! The primary entry point is the [`Shrink`] type. Given a property and a
//! counterexample found by some property checker, it repeatedly reduces every
//! argument of the counterexample and re-runs the property, until the
//! property passes (the pass/fail boundary is found), nothing can be reduced
//! any further, or the retry budget runs out.
//!
//! # Example
//!
//! ```
//! use whittle::{Counterexample, IntoArgs, Outcome, Shrink};
//!
//! let outcome = Shrink::new()
//!     .max_retries(100)
//!     .run(
//!         |a: i32, _s: String| a < 10,
//!         // The property checker found this after one evaluation.
//!         Counterexample::new(1, (1000, String::from("asd"))),
//!     )
//!     .unwrap();
//!
//! let Outcome::Minimized(failure) = outcome else {
//!     panic!("expected to find the boundary");
//! };
//! assert_eq!(failure.count, 8);
//! assert_eq!(failure.input, (15, String::from("a")).into_args());
//! assert_eq!(failure.succeeded, (7, String::from("a")).into_args());
//! ```

use crate::{
    error::{Result, SetupError},
    log,
    property::Property,
    reduce::Fields,
    value::{Args, IntoArgs},
};
use core::fmt;

/// The default retry budget: the maximum number of shrink rounds.
pub const DEFAULT_MAX_RETRIES: usize = 100;

/// A failing input, as found by a property checker.
#[derive(Clone, Debug, PartialEq)]
pub struct Counterexample {
    /// The number of property evaluations it took to find this
    /// counterexample, including the failing one.
    pub count: usize,

    /// The arguments on which the property failed.
    pub args: Args,
}

impl Counterexample {
    /// Create a new counterexample that was found after `count` evaluations.
    pub fn new(count: usize, args: impl IntoArgs) -> Self {
        Counterexample {
            count,
            args: args.into_args(),
        }
    }
}

/// A configured shrink run.
///
/// `Shrink` is plain configuration: it is cheap to copy, holds no state
/// between runs, and can be shared across threads.
#[derive(Clone, Copy, Debug)]
pub struct Shrink {
    max_retries: usize,
}

impl Default for Shrink {
    fn default() -> Shrink {
        Shrink::new()
    }
}

impl Shrink {
    /// Create a new `Shrink` with the default retry budget,
    /// [`DEFAULT_MAX_RETRIES`].
    pub fn new() -> Shrink {
        Shrink {
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Configure the maximum number of shrink rounds to attempt before giving
    /// up.
    ///
    /// A budget of zero performs no rounds at all, and every run ends with
    /// [`Outcome::NoProgress`].
    pub fn max_retries(&mut self, max_retries: usize) -> &mut Shrink {
        self.max_retries = max_retries;
        self
    }

    /// Shrink the given `counterexample` of `property`.
    ///
    /// Each round reduces every argument once. Arguments that cannot be
    /// reduced (because they are exhausted or have no reduction rule) keep
    /// their value, as long as at least one other argument was reduced in the
    /// same round. The property is then evaluated on the reduced tuple:
    ///
    /// * If it passes, shrinking stops with [`Outcome::Minimized`], reporting
    ///   the last failing tuple and the passing one.
    ///
    /// * If it still fails, the reduced tuple becomes the current
    ///   counterexample and the next round starts.
    ///
    /// Shrinking stops with [`Outcome::NoProgress`] when the retry budget runs
    /// out or no argument can be reduced any further.
    ///
    /// # Errors
    ///
    /// * A [setup error][crate::ErrorKind::Setup], before any reduction, if
    ///   the property cannot be called with the counterexample's arguments or
    ///   does not return exactly one `bool`.
    ///
    /// * An [unsupported error][crate::ErrorKind::Unsupported] if, in some
    ///   round, no argument was reduced and some argument's type has no
    ///   reduction rule.
    ///
    /// * A [reduce error][crate::ErrorKind::Reduce] if a custom reduction
    ///   rule failed.
    pub fn run<M, P>(&self, mut property: P, counterexample: Counterexample) -> Result<Outcome>
    where
        P: Property<M>,
    {
        self.run_with(&mut property, counterexample)
    }

    pub(crate) fn run_with<M, P>(
        &self,
        property: &mut P,
        counterexample: Counterexample,
    ) -> Result<Outcome>
    where
        P: Property<M>,
    {
        let signature = property.signature();
        signature.validate(&counterexample.args)?;

        let Counterexample {
            mut count,
            args: original,
        } = counterexample;

        log::debug!(
            "shrinking {original} for at most {} rounds",
            self.max_retries
        );

        let mut current = original.clone();
        let mut attempts = 0;

        while attempts < self.max_retries {
            let mut fields = Fields::new();
            let candidate: Args = current.iter().map(|v| fields.value(v)).collect();

            if !fields.finish_round()? {
                log::debug!("every argument of {current} is fully reduced");
                return Ok(Outcome::NoProgress(NoProgress {
                    count,
                    original,
                    reduced: current,
                    reason: StopReason::Exhausted,
                }));
            }

            if candidate.len() != signature.arity() {
                return Err(SetupError::Arity {
                    expected: signature.arity(),
                    found: candidate.len(),
                }
                .into());
            }

            count += 1;
            if property.call(&candidate)? {
                log::debug!("round {attempts}: property holds for {candidate}");
                return Ok(Outcome::Minimized(MinimizedFailure {
                    count,
                    original,
                    input: current,
                    succeeded: candidate,
                }));
            }

            log::trace!("round {attempts}: still failing on {candidate}");
            current = candidate;
            attempts += 1;
        }

        log::debug!("retry budget exhausted; shrunk down to {current}");
        Ok(Outcome::NoProgress(NoProgress {
            count,
            original,
            reduced: current,
            reason: StopReason::BudgetExhausted,
        }))
    }
}

/// Shrink the given `counterexample` of `property` with the default retry
/// budget.
///
/// This is shorthand for `Shrink::new().run(property, counterexample)`.
///
/// # Example
///
/// ```
/// use whittle::{shrink, Counterexample, Value};
///
/// let failure = shrink(|a: i32| a % 1000 < 500, Counterexample::new(1, (1600,)))
///     .unwrap()
///     .unwrap_minimized();
///
/// assert_eq!(failure.count, 3);
/// assert_eq!(failure.input[0], Value::I32(800));
/// assert_eq!(failure.succeeded[0], Value::I32(400));
/// ```
pub fn shrink<M, P>(property: P, counterexample: Counterexample) -> Result<Outcome>
where
    P: Property<M>,
{
    Shrink::new().run(property, counterexample)
}

/// The result of a shrink run.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The property flipped from failing to passing: the boundary was found.
    Minimized(MinimizedFailure),

    /// No passing tuple was found.
    ///
    /// This is not an error: the original counterexample still stands, it is
    /// just not fully minimized.
    NoProgress(NoProgress),
}

impl Outcome {
    /// The total number of property evaluations, including the ones the
    /// property checker performed to find the original counterexample.
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Outcome::Minimized(m) => m.count,
            Outcome::NoProgress(n) => n.count,
        }
    }

    /// The original, unshrunk counterexample's arguments.
    #[must_use]
    pub fn original(&self) -> &Args {
        match self {
            Outcome::Minimized(m) => &m.original,
            Outcome::NoProgress(n) => &n.original,
        }
    }

    /// The smallest arguments on which the property is known to fail.
    #[must_use]
    pub fn failing(&self) -> &Args {
        match self {
            Outcome::Minimized(m) => &m.input,
            Outcome::NoProgress(n) => &n.reduced,
        }
    }

    /// Whether this is an [`Outcome::Minimized`].
    #[must_use]
    pub fn is_minimized(&self) -> bool {
        matches!(self, Outcome::Minimized(_))
    }

    /// Unwrap the underlying `Outcome::Minimized(_)` payload, panicking if this
    /// is not an `Outcome::Minimized`.
    #[track_caller]
    pub fn unwrap_minimized(self) -> MinimizedFailure {
        match self {
            Outcome::Minimized(m) => m,
            _ => panic!("Outcome::unwrap_minimized called on non-minimized Outcome"),
        }
    }

    /// Unwrap the underlying `Outcome::NoProgress(_)` payload, panicking if
    /// this is not an `Outcome::NoProgress`.
    #[track_caller]
    pub fn unwrap_no_progress(self) -> NoProgress {
        match self {
            Outcome::NoProgress(n) => n,
            _ => panic!("Outcome::unwrap_no_progress called on non-no-progress Outcome"),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Minimized(m) => fmt::Display::fmt(m, f),
            Outcome::NoProgress(n) => fmt::Display::fmt(n, f),
        }
    }
}

/// A counterexample shrunk down to the boundary where the property starts to
/// pass.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct MinimizedFailure {
    /// The total number of property evaluations, including the ones the
    /// property checker performed to find the original counterexample.
    pub count: usize,

    /// The original, unshrunk counterexample's arguments.
    pub original: Args,

    /// The last arguments on which the property failed.
    pub input: Args,

    /// The arguments, reduced from `input`, on which the property passed.
    pub succeeded: Args,
}

impl fmt::Display for MinimizedFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{}: failed on input {}, but succeeded with {}",
            self.count, self.input, self.succeeded
        )
    }
}

/// A shrink run that never saw the property pass.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct NoProgress {
    /// The total number of property evaluations, including the ones the
    /// property checker performed to find the original counterexample.
    pub count: usize,

    /// The original, unshrunk counterexample's arguments, unchanged.
    pub original: Args,

    /// The most-reduced arguments on which the property still failed.
    pub reduced: Args,

    /// Why shrinking stopped.
    pub reason: StopReason,
}

impl fmt::Display for NoProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{}: failed on input {}, still failing on {} ({})",
            self.count, self.original, self.reduced, self.reason
        )
    }
}

/// Why a shrink run stopped without finding a passing tuple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The retry budget ran out.
    BudgetExhausted,

    /// No argument could be reduced any further.
    Exhausted,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::BudgetExhausted => f.write_str("retry budget exhausted"),
            StopReason::Exhausted => f.write_str("nothing left to reduce"),
        }
    }
}

//! A small property checker that finds counterexamples by random search and
//! hands them to the shrinker.
//!
//! The primary entry point for this framework is the [`Check`] type.
//!
//! This checker is designed to be used for smoke tests inside `#[test]`
//! functions: it generates a fixed number of random argument tuples, stops at
//! the first one on which the property fails, and then shrinks that
//! counterexample with a [`Shrink`].
//!
//! # Example
//!
//! ```
//! use whittle::check::Check;
//!
//! let failure = Check::new()
//!     .iters(1000)
//!     .max_retries(100)
//!     .run(
//!         |rng| (rng.gen_i32(),),
//!         |a: i32| a % 1000 < 500,
//!     )
//!     .unwrap_err()
//!     .unwrap_failed();
//!
//! // The property holds for the smallest value the shrinker reached.
//! let outcome = failure.outcome;
//! assert!(outcome.is_minimized());
//! println!("{outcome}");
//! ```

use crate::{
    error::Error,
    log,
    property::Property,
    rng::{Rng, DEFAULT_SEED},
    shrink::{Counterexample, Outcome, Shrink},
    value::IntoArgs,
};
use core::fmt;

/// The result of running a check.
///
/// If the property held for every generated input, this is `Ok(())`.
///
/// If a counterexample was found, this is `Err(CheckError::Failed(_))` with
/// the counterexample and the outcome of shrinking it.
///
/// If there is some other kind of error while running the check, for example
/// if the property cannot be called with the generated arguments, then this is
/// `Err(CheckError::Error(_))`.
pub type CheckResult = core::result::Result<(), CheckError>;

/// An error when running a `Check`.
#[derive(Debug)]
pub enum CheckError {
    /// The check failed.
    ///
    /// This indicates that the property being checked is not upheld for some
    /// generated input.
    Failed(CheckFailure),

    /// An error occurred while running the check.
    Error(Error),
}

impl From<Error> for CheckError {
    fn from(v: Error) -> Self {
        Self::Error(v)
    }
}

impl From<CheckFailure> for CheckError {
    fn from(v: CheckFailure) -> Self {
        Self::Failed(v)
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::Failed(failure) => fmt::Display::fmt(failure, f),
            CheckError::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for CheckError {}

impl CheckError {
    /// Unwrap the underlying `CheckError::Failed(_)` payload, panicking if this
    /// is not a `CheckError::Failed`.
    #[track_caller]
    pub fn unwrap_failed(self) -> CheckFailure {
        match self {
            CheckError::Failed(f) => f,
            _ => panic!("CheckError::unwrap_failed called on non-failed CheckError"),
        }
    }

    /// Unwrap the underlying `CheckError::Error(_)` payload, panicking if this
    /// is not a `CheckError::Error(_)`.
    #[track_caller]
    pub fn unwrap_error(self) -> Error {
        match self {
            CheckError::Error(e) => e,
            _ => panic!("CheckError::unwrap_error called on non-error CheckError"),
        }
    }
}

/// A counterexample found by a check, along with the outcome of shrinking it.
#[derive(Debug)]
#[non_exhaustive]
pub struct CheckFailure {
    /// The first generated input on which the property failed.
    pub counterexample: Counterexample,

    /// The result of shrinking `counterexample`.
    pub outcome: Outcome,
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.outcome, f)
    }
}

/// A check that can be run to test a property.
///
/// # Example
///
/// ```
/// use whittle::check::Check;
///
/// let result = Check::new()
///     // Check the property on 500 random inputs.
///     .iters(500)
///     // Use a different random seed than the default.
///     .seed(0xdeadbeef)
///     // Run the property check!
///     .run(
///         |rng| (rng.gen_u32(), rng.gen_u32()),
///         |a: u32, b: u32| a.wrapping_add(b) == b.wrapping_add(a),
///     );
/// assert!(result.is_ok());
/// ```
#[derive(Debug)]
pub struct Check {
    iters: usize,
    seed: u64,
    shrink: Shrink,
}

impl Default for Check {
    fn default() -> Check {
        Check::new()
    }
}

impl Check {
    /// Create a new `Check`.
    pub fn new() -> Check {
        Check {
            iters: 100,
            seed: DEFAULT_SEED,
            shrink: Shrink::new(),
        }
    }

    /// Configure the number of random inputs to test.
    pub fn iters(&mut self, iters: usize) -> &mut Check {
        self.iters = iters;
        self
    }

    /// Configure the seed of the random number generator.
    pub fn seed(&mut self, seed: u64) -> &mut Check {
        self.seed = seed;
        self
    }

    /// Configure the maximum number of rounds to spend shrinking a failing
    /// input before reporting the failure.
    pub fn max_retries(&mut self, max_retries: usize) -> &mut Check {
        self.shrink.max_retries(max_retries);
        self
    }

    /// Run this configured `Check`, testing `property` on arguments created
    /// by `generate`.
    ///
    /// On the first failing input, the input is shrunk and reported.
    pub fn run<A, G, M, P>(&self, mut generate: G, mut property: P) -> CheckResult
    where
        G: FnMut(&mut Rng) -> A,
        A: IntoArgs,
        P: Property<M>,
    {
        let mut rng = Rng::new(self.seed);
        let signature = property.signature();

        for count in 1..=self.iters {
            let args = generate(&mut rng).into_args();
            signature.validate(&args)?;

            if property.call(&args)? {
                continue;
            }

            log::info!("failed on input {args} after {count} tests");
            let counterexample = Counterexample { count, args };
            let outcome = self
                .shrink
                .run_with(&mut property, counterexample.clone())?;
            log::info!("{outcome}");

            return Err(CheckFailure {
                counterexample,
                outcome,
            }
            .into());
        }

        log::debug!("property held for {} inputs", self.iters);
        Ok(())
    }
}

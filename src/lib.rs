#![doc = include_str!("../README.md")]
#![no_std]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod _guide;
pub mod error;
mod log;
pub mod property;
pub mod reduce;
pub mod shrink;
pub mod value;

#[cfg(feature = "check")]
mod rng;

#[cfg(feature = "check")]
pub mod check;

pub use error::{Error, ErrorKind, ErrorMessage, Result, SetupError};
pub use property::{Property, Signature};
pub use shrink::{
    shrink, Counterexample, MinimizedFailure, NoProgress, Outcome, Shrink, StopReason,
    DEFAULT_MAX_RETRIES,
};
pub use value::{Arg, Args, IntoArgs, Kind, Opaque, Value};

#[cfg(feature = "check")]
pub use rng::Rng;

#[cfg(feature = "derive")]
/// Automatically derive a reduction rule for a type.
///
/// See [the `#[derive(Reduce)]` section of the
/// guide][crate::_guide::derive_macro] for details.
pub use whittle_derive::Reduce;

/// The outcome of reducing a single value once.
///
/// # Example
///
/// ```
/// use whittle::{Reduction, Value};
///
/// assert_eq!(Value::I32(1600).reduce(), Reduction::Reduced(Value::I32(800)));
/// assert_eq!(Value::I32(0).reduce(), Reduction::Exhausted);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub enum Reduction<T> {
    /// The value was reduced to this strictly "smaller" value.
    Reduced(T),

    /// The value's type has a reduction rule, but the value is already as
    /// small as that rule can make it.
    Exhausted,

    /// The value's type, named here, has no reduction rule.
    Unsupported(&'static str),

    /// A custom reduction rule could not reduce the value.
    ///
    /// This aborts the whole shrink run.
    Failed(ErrorMessage),
}

impl<T> Reduction<T> {
    /// Create a [`Reduction::Failed`] with the given message.
    pub fn failed(msg: impl Into<ErrorMessage>) -> Self {
        Reduction::Failed(msg.into())
    }

    /// Map a function over the reduced value, if any.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Reduction<U> {
        match self {
            Reduction::Reduced(x) => Reduction::Reduced(f(x)),
            Reduction::Exhausted => Reduction::Exhausted,
            Reduction::Unsupported(name) => Reduction::Unsupported(name),
            Reduction::Failed(msg) => Reduction::Failed(msg),
        }
    }

    /// Whether this is a [`Reduction::Reduced`].
    #[must_use]
    pub fn is_reduced(&self) -> bool {
        matches!(self, Reduction::Reduced(_))
    }

    /// Get the reduced value, if any.
    #[must_use]
    pub fn reduced(self) -> Option<T> {
        match self {
            Reduction::Reduced(x) => Some(x),
            _ => None,
        }
    }
}

/// A type that knows how to reduce its own values.
///
/// Implementing `Reduce` for a type (that is also `Clone`, `Debug`,
/// `PartialEq`, and `'static`) makes it usable as a property argument. Its
/// values are carried as [`Value::Custom`] and shrinking delegates entirely
/// to [`Reduce::reduce`]; no built-in rule is ever consulted for them.
///
/// Implementations must be deterministic: reducing the same value must
/// always produce the same outcome.
///
/// # Example
///
/// ```
/// use whittle::{Counterexample, Reduce, Reduction, Shrink};
///
/// /// An even number that stays even while shrinking.
/// #[derive(Clone, Debug, PartialEq)]
/// struct Even(u64);
///
/// impl Reduce for Even {
///     fn reduce(&self) -> Reduction<Self> {
///         match self.0 {
///             0 => Reduction::Exhausted,
///             2 => Reduction::Reduced(Even(0)),
///             n => Reduction::Reduced(Even(n / 2 & !1)),
///         }
///     }
/// }
///
/// let outcome = Shrink::new()
///     .run(|e: Even| e.0 < 100, Counterexample::new(1, (Even(1000),)))
///     .unwrap();
///
/// let failure = outcome.unwrap_minimized();
/// assert_eq!(failure.input[0].clone().into_arg::<Even>(), Some(Even(124)));
/// assert_eq!(failure.succeeded[0].clone().into_arg::<Even>(), Some(Even(62)));
/// ```
pub trait Reduce: Sized {
    /// Reduce `self` to a strictly "smaller" value, or report why that is not
    /// possible.
    fn reduce(&self) -> Reduction<Self>;
}

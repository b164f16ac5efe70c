//! Error and result types for the `whittle` crate.

use crate::value::Kind;
use alloc::{borrow::Cow, boxed::Box, string::String};
use core::fmt;

/// A result that is either `Ok(T)` or `Err(whittle::Error)`.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// An error that can occur when shrinking a counterexample.
///
/// This type is a thin wrapper around [`ErrorKind`], which contains the
/// specific kind of error that occurred.
///
/// Note that a shrink run which merely fails to find a smaller counterexample
/// is *not* an error: it is reported as an
/// [`Outcome::NoProgress`][crate::Outcome::NoProgress].
///
/// # Examples
///
/// ```
/// use whittle::{Counterexample, ErrorKind, SetupError, Shrink};
///
/// // The property takes one argument but the counterexample has two.
/// let error = Shrink::new()
///     .run(|a: u32| a < 10, Counterexample::new(1, (20u32, 30u32)))
///     .unwrap_err();
///
/// assert!(error.is_setup());
/// match error.kind() {
///     ErrorKind::Setup(SetupError::Arity { expected, found }) => {
///         assert_eq!((*expected, *found), (1, 2));
///     }
///     unknown => panic!("unexpected error: {unknown:?}"),
/// }
/// ```
pub struct Error {
    kind: Box<ErrorKind>,
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self {
            kind: Box::new(kind),
        }
    }
}

impl From<SetupError> for Error {
    #[inline]
    fn from(e: SetupError) -> Self {
        ErrorKind::Setup(e).into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.kind {
            ErrorKind::Setup(e) => write!(f, "setup error: {e}"),
            ErrorKind::Unsupported {
                argument,
                type_name,
            } => write!(
                f,
                "cannot create shrink value of type {type_name} for argument {argument}"
            ),
            ErrorKind::Reduce { argument, message } => {
                write!(f, "failed to reduce argument {argument}: {message}")
            }
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Returns a new error indicating that the value at position `argument`
    /// has no reduction rule.
    #[must_use]
    pub fn unsupported(argument: usize, type_name: &'static str) -> Self {
        ErrorKind::Unsupported {
            argument,
            type_name,
        }
        .into()
    }

    /// Returns a new error indicating that a custom reduction rule failed for
    /// the value at position `argument`.
    #[must_use]
    pub fn reduce(argument: usize, message: impl Into<ErrorMessage>) -> Self {
        ErrorKind::Reduce {
            argument,
            message: message.into(),
        }
        .into()
    }

    /// Returns the kind of this error.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns `true` if the error's kind is [`Setup`][ErrorKind::Setup].
    #[must_use]
    pub fn is_setup(&self) -> bool {
        matches!(self.kind(), ErrorKind::Setup(_))
    }

    /// Returns `true` if the error's kind is
    /// [`Unsupported`][ErrorKind::Unsupported].
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self.kind(), ErrorKind::Unsupported { .. })
    }

    /// Returns `true` if the error's kind is [`Reduce`][ErrorKind::Reduce].
    #[must_use]
    pub fn is_reduce(&self) -> bool {
        matches!(self.kind(), ErrorKind::Reduce { .. })
    }
}

/// The kind of an error that can occur when using the `whittle` crate.
///
/// This enum is not exhaustive, and new variants may be added in the future.
/// When matching on this enum, a catch-all arm should be used to handle any
/// new variants that are added.
#[non_exhaustive]
#[derive(Debug)]
pub enum ErrorKind {
    /// The property and the argument tuple do not fit together.
    ///
    /// Setup errors are always detected before the first reduction is
    /// attempted, or right after a reduction round changed the tuple's shape.
    Setup(SetupError),

    /// No element of the tuple could be reduced in a round, and the value at
    /// `argument` has a type without any reduction rule.
    Unsupported {
        /// The position of the offending value in the argument tuple.
        argument: usize,
        /// The name of the value's type.
        type_name: &'static str,
    },

    /// A custom [`Reduce`][crate::Reduce] implementation reported a failure.
    Reduce {
        /// The position of the offending value in the argument tuple.
        argument: usize,
        /// The failure message the reduction rule returned.
        message: ErrorMessage,
    },
}

impl From<Error> for ErrorKind {
    #[inline]
    fn from(err: Error) -> Self {
        *err.kind
    }
}

/// A structural mismatch between a property and its argument tuple.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetupError {
    /// The property does not return exactly one value.
    ReturnCount(usize),

    /// The property's single return value is not a `bool`.
    ReturnType(Kind),

    /// The property's arity does not match the length of the tuple.
    Arity {
        /// The number of parameters the property takes.
        expected: usize,
        /// The number of values in the tuple.
        found: usize,
    },

    /// A value in the tuple does not have the type of the property's
    /// parameter at the same position.
    ArgumentType {
        /// The position of the mismatched value.
        index: usize,
        /// The parameter's type.
        expected: Kind,
        /// The value's type.
        found: Kind,
    },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::ReturnCount(n) => {
                write!(f, "function does not return one value (returns {n})")
            }
            SetupError::ReturnType(kind) => {
                write!(f, "function does not return a bool (returns {kind})")
            }
            SetupError::Arity { expected, found } => write!(
                f,
                "functions have different types: takes {expected} arguments, given {found}"
            ),
            SetupError::ArgumentType {
                index,
                expected,
                found,
            } => write!(
                f,
                "argument {index} has type {found}, but the function expects {expected}"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SetupError {}

/// A message that can be attached to an error.
///
/// Custom reduction rules use this to explain why they failed, via
/// [`Reduction::failed`][crate::Reduction::failed].
///
/// # Examples
///
/// ```
/// use whittle::ErrorMessage;
///
/// let msg = ErrorMessage::new("something went wrong");
/// assert_eq!(msg.as_str(), "something went wrong");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorMessage {
    inner: Cow<'static, str>,
}

impl ErrorMessage {
    /// Returns a new error message with the given string.
    #[must_use]
    pub fn new(msg: impl Into<ErrorMessage>) -> Self {
        msg.into()
    }

    /// Returns the message as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&'static str> for ErrorMessage {
    #[inline]
    fn from(s: &'static str) -> Self {
        Self {
            inner: Cow::Borrowed(s),
        }
    }
}

impl From<Cow<'static, str>> for ErrorMessage {
    #[inline]
    fn from(s: Cow<'static, str>) -> Self {
        Self { inner: s }
    }
}

impl From<String> for ErrorMessage {
    #[inline]
    fn from(s: String) -> Self {
        Self {
            inner: Cow::Owned(s),
        }
    }
}

//! Properties: the predicates whose counterexamples get shrunk.
//!
//! A [`Property`] pairs a callable with its [`Signature`], so that the shrink
//! loop can check, once and up front, that the callable takes the argument
//! tuple it is given and returns exactly one `bool`.
//!
//! Two kinds of callables are properties:
//!
//! * Typed closures and functions `FnMut(A1, ..., An) -> bool` of up to eight
//!   [`Arg`] parameters. Their signatures are derived from their parameter
//!   types.
//!
//! * [`Dynamic`] properties, built with [`dynamic`] from a signature that is
//!   only known at runtime and a callable over `&[Value]`.

use crate::{
    error::{Result, SetupError},
    value::{Arg, Args, Kind, Value},
};
use alloc::{vec, vec::Vec};

/// The parameter and return kinds of a property.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    params: Vec<Kind>,
    returns: Vec<Kind>,
}

impl Signature {
    /// Create a new signature with the given parameter and return kinds.
    pub fn new(
        params: impl IntoIterator<Item = Kind>,
        returns: impl IntoIterator<Item = Kind>,
    ) -> Self {
        Signature {
            params: params.into_iter().collect(),
            returns: returns.into_iter().collect(),
        }
    }

    /// Create a new signature with the given parameter kinds that returns a
    /// single `bool`.
    pub fn predicate(params: impl IntoIterator<Item = Kind>) -> Self {
        Signature::new(params, [Kind::Bool])
    }

    /// The parameter kinds.
    #[must_use]
    pub fn params(&self) -> &[Kind] {
        &self.params
    }

    /// The return kinds.
    #[must_use]
    pub fn returns(&self) -> &[Kind] {
        &self.returns
    }

    /// The number of parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Check that a property with this signature can be called with `args`.
    ///
    /// # Example
    ///
    /// ```
    /// use whittle::{IntoArgs, Kind, SetupError, Signature};
    ///
    /// let signature = Signature::predicate([Kind::I32, Kind::Str]);
    /// assert!(signature.validate(&(1i32, String::new()).into_args()).is_ok());
    ///
    /// let err = signature.validate(&(1i32, 2i32).into_args()).unwrap_err();
    /// assert!(err.is_setup());
    ///
    /// // List elements are checked too.
    /// let signature = Signature::predicate([Kind::list(Kind::U8)]);
    /// let err = signature.validate(&(vec![String::from("x")],).into_args()).unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "setup error: argument 0 has type Vec<String>, but the function expects Vec<u8>",
    /// );
    /// ```
    pub fn validate(&self, args: &Args) -> Result<()> {
        match self.returns.as_slice() {
            [Kind::Bool] => {}
            [other] => return Err(SetupError::ReturnType(other.clone()).into()),
            returns => return Err(SetupError::ReturnCount(returns.len()).into()),
        }

        if self.params.len() != args.len() {
            return Err(SetupError::Arity {
                expected: self.params.len(),
                found: args.len(),
            }
            .into());
        }

        for (index, (expected, value)) in self.params.iter().zip(args.iter()).enumerate() {
            if !expected.accepts(value) {
                return Err(SetupError::ArgumentType {
                    index,
                    expected: expected.clone(),
                    found: value.kind(),
                }
                .into());
            }
        }

        Ok(())
    }
}

/// A predicate over an argument tuple.
///
/// The `Marker` type parameter only exists to let the blanket
/// implementations for closures of different arities coexist; it is
/// inferred and never needs to be written out.
pub trait Property<Marker> {
    /// This property's signature.
    fn signature(&self) -> Signature;

    /// Evaluate this property on the given arguments.
    ///
    /// Returns `Ok(true)` if the property holds, `Ok(false)` if `args` is a
    /// counterexample, and a setup error if the property cannot be called
    /// with `args`.
    fn call(&mut self, args: &Args) -> Result<bool>;
}

fn arg<T: Arg>(args: &Args, index: &mut usize) -> Result<T> {
    let i = *index;
    *index += 1;
    let value = &args[i];
    T::from_value(value.clone()).ok_or_else(|| {
        SetupError::ArgumentType {
            index: i,
            expected: T::kind(),
            found: value.kind(),
        }
        .into()
    })
}

macro_rules! fn_properties {
    ( $( ( $( $arg:ident ),* ) ; )* ) => {
        $(
            impl<F, $( $arg ),*> Property<fn( $( $arg ),* ) -> bool> for F
            where
                F: FnMut( $( $arg ),* ) -> bool,
                $( $arg: Arg ),*
            {
                fn signature(&self) -> Signature {
                    Signature::predicate(vec![ $( $arg::kind() ),* ])
                }

                #[allow(non_snake_case, unused_mut, unused_variables)]
                fn call(&mut self, args: &Args) -> Result<bool> {
                    let arity = <[&str]>::len(&[ $( stringify!($arg) ),* ]);
                    if args.len() != arity {
                        return Err(SetupError::Arity {
                            expected: arity,
                            found: args.len(),
                        }
                        .into());
                    }
                    let mut index = 0;
                    $( let $arg = arg::<$arg>(args, &mut index)?; )*
                    Ok((*self)( $( $arg ),* ))
                }
            }
        )*
    };
}

fn_properties! {
    ();
    (A1);
    (A1, A2);
    (A1, A2, A3);
    (A1, A2, A3, A4);
    (A1, A2, A3, A4, A5);
    (A1, A2, A3, A4, A5, A6);
    (A1, A2, A3, A4, A5, A6, A7);
    (A1, A2, A3, A4, A5, A6, A7, A8);
}

/// Marker for [`Dynamic`] properties' [`Property`] implementation.
#[derive(Debug)]
pub enum Untyped {}

/// A property whose signature is only known at runtime.
///
/// See [`dynamic`] to create new instances and for example usage.
#[derive(Clone, Debug)]
pub struct Dynamic<F> {
    signature: Signature,
    f: F,
}

/// Create a property from a runtime signature and a callable over argument
/// values.
///
/// The callable returns a list of values; a property call succeeds only if it
/// is exactly one `Value::Bool`.
///
/// # Example
///
/// ```
/// use whittle::{property, Counterexample, Kind, Shrink, Signature, Value};
///
/// let max = property::dynamic(
///     Signature::predicate([Kind::U64]),
///     |args: &[Value]| match args {
///         [Value::U64(x)] => vec![Value::Bool(*x < 3)],
///         _ => unreachable!(),
///     },
/// );
///
/// let failure = Shrink::new()
///     .run(max, Counterexample::new(1, (20u64,)))
///     .unwrap()
///     .unwrap_minimized();
/// assert_eq!(failure.to_string(), "#4: failed on input 5, but succeeded with 2");
/// ```
pub fn dynamic<F>(signature: Signature, f: F) -> Dynamic<F>
where
    F: FnMut(&[Value]) -> Vec<Value>,
{
    Dynamic { signature, f }
}

impl<F> Property<Untyped> for Dynamic<F>
where
    F: FnMut(&[Value]) -> Vec<Value>,
{
    fn signature(&self) -> Signature {
        self.signature.clone()
    }

    fn call(&mut self, args: &Args) -> Result<bool> {
        if args.len() != self.signature.arity() {
            return Err(SetupError::Arity {
                expected: self.signature.arity(),
                found: args.len(),
            }
            .into());
        }
        match (self.f)(args.as_slice()).as_slice() {
            [Value::Bool(b)] => Ok(*b),
            [other] => Err(SetupError::ReturnType(other.kind()).into()),
            returned => Err(SetupError::ReturnCount(returned.len()).into()),
        }
    }
}

//! The built-in reduction rules.
//!
//! Every rule moves its value strictly toward a fixed "smallest" value and is
//! deterministic:
//!
//! * Integers are halved toward zero. Zero is exhausted.
//!
//! * Floats are halved, then rounded toward zero (`ceil` for negative halves,
//!   `floor` for positive ones), so repeated halving of a negative number
//!   converges on zero instead of oscillating. Zero and non-finite floats are
//!   exhausted.
//!
//! * Booleans are flipped.
//!
//! * Strings and lists are cut down to their first `ceil(len / 2)` characters
//!   or elements. Anything of length one or less is exhausted. String lengths
//!   are counted in `char`s.
//!
//! * [`Value::Custom`] values delegate to their own [`Reduce`][crate::Reduce]
//!   implementation.
//!
//! * [`Value::Other`] values are unsupported.

use crate::{
    error::{Error, ErrorMessage, Result},
    value::{Arg, Value},
    Reduction,
};
use alloc::{format, string::String, vec::Vec};

impl Value {
    /// Reduce this value once with its type's rule.
    ///
    /// # Example
    ///
    /// ```
    /// use whittle::{Reduction, Value};
    ///
    /// assert_eq!(Value::F64(-7.0).reduce(), Reduction::Reduced(Value::F64(-3.0)));
    /// assert_eq!(Value::Bool(true).reduce(), Reduction::Reduced(Value::Bool(false)));
    /// assert_eq!(
    ///     Value::Str("asd".into()).reduce(),
    ///     Reduction::Reduced(Value::Str("as".into())),
    /// );
    /// assert_eq!(Value::Str("a".into()).reduce(), Reduction::Exhausted);
    /// ```
    pub fn reduce(&self) -> Reduction<Value> {
        match self {
            Value::Bool(b) => Reduction::Reduced(Value::Bool(!*b)),
            Value::I8(x) => x.halve().map(Value::I8),
            Value::I16(x) => x.halve().map(Value::I16),
            Value::I32(x) => x.halve().map(Value::I32),
            Value::I64(x) => x.halve().map(Value::I64),
            Value::I128(x) => x.halve().map(Value::I128),
            Value::Isize(x) => x.halve().map(Value::Isize),
            Value::U8(x) => x.halve().map(Value::U8),
            Value::U16(x) => x.halve().map(Value::U16),
            Value::U32(x) => x.halve().map(Value::U32),
            Value::U64(x) => x.halve().map(Value::U64),
            Value::U128(x) => x.halve().map(Value::U128),
            Value::Usize(x) => x.halve().map(Value::Usize),
            Value::F32(x) => x.halve().map(Value::F32),
            Value::F64(x) => x.halve().map(Value::F64),
            Value::Str(s) => str_prefix(s).map(Value::Str),
            Value::List(l) => list_prefix(l).map(Value::List),
            Value::Custom(c) => c.reduce().map(Value::Custom),
            Value::Other(o) => Reduction::Unsupported(o.type_info().name()),
        }
    }
}

trait Halve: Sized {
    fn halve(self) -> Reduction<Self>;
}

macro_rules! halve_ints {
    ( $( $ty:ty ),* ) => {
        $(
            impl Halve for $ty {
                #[inline]
                fn halve(self) -> Reduction<Self> {
                    if self == 0 {
                        Reduction::Exhausted
                    } else {
                        Reduction::Reduced(self / 2)
                    }
                }
            }
        )*
    };
}

halve_ints!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! halve_floats {
    ( $( $ty:ty => $int:ty , $exact:expr ; )* ) => {
        $(
            impl Halve for $ty {
                #[inline]
                fn halve(self) -> Reduction<Self> {
                    if self == 0.0 || !self.is_finite() {
                        return Reduction::Exhausted;
                    }
                    let half = self / 2.0;
                    // Every float at or beyond `$exact` in magnitude is already
                    // integral. Below it, casting through `$int` truncates,
                    // which is `ceil` for negatives and `floor` for positives.
                    let rounded = if half > -$exact && half < $exact {
                        half as $int as $ty
                    } else {
                        half
                    };
                    Reduction::Reduced(rounded)
                }
            }
        )*
    };
}

halve_floats! {
    f32 => i32, 8_388_608.0;
    f64 => i64, 4_503_599_627_370_496.0;
}

/// The length of the prefix kept when reducing a sequence of `len` items, or
/// `None` if the sequence cannot get any shorter.
fn prefix_len(len: usize) -> Option<usize> {
    if len <= 1 {
        None
    } else {
        Some(len - len / 2)
    }
}

fn str_prefix(s: &str) -> Reduction<String> {
    let Some(keep) = prefix_len(s.chars().count()) else {
        return Reduction::Exhausted;
    };
    let end = s.char_indices().nth(keep).map_or(s.len(), |(i, _)| i);
    Reduction::Reduced(String::from(&s[..end]))
}

fn list_prefix(l: &[Value]) -> Reduction<Vec<Value>> {
    match prefix_len(l.len()) {
        Some(keep) => Reduction::Reduced(l[..keep].to_vec()),
        None => Reduction::Exhausted,
    }
}

/// Reduce every member of a composite value in one round.
///
/// Each member is reduced independently with its own rule. Members whose
/// rule is exhausted, or that have no rule at all, keep their value. The
/// round as a whole:
///
/// * fails if any member's custom rule failed,
///
/// * is reduced if at least one member was reduced,
///
/// * is unsupported if no member was reduced and some member has no rule,
///
/// * and is otherwise exhausted.
///
/// The shrink loop applies the same policy to a whole argument tuple, and
/// `#[derive(Reduce)]` uses this type to reduce a struct's fields.
///
/// # Example
///
/// ```
/// use whittle::{reduce::Fields, Reduce, Reduction};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Reduce for Point {
///     fn reduce(&self) -> Reduction<Self> {
///         let mut fields = Fields::new();
///         let value = Point {
///             x: fields.field(&self.x),
///             y: fields.field(&self.y),
///         };
///         fields.finish(value)
///     }
/// }
///
/// assert_eq!(
///     Point { x: 9, y: 0 }.reduce(),
///     Reduction::Reduced(Point { x: 4, y: 0 }),
/// );
/// assert_eq!(Point { x: 0, y: 0 }.reduce(), Reduction::Exhausted);
/// ```
#[derive(Debug, Default)]
pub struct Fields {
    index: usize,
    reduced: bool,
    unsupported: Option<(usize, &'static str)>,
    failed: Option<(usize, ErrorMessage)>,
}

impl Fields {
    /// Start a new round.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reduce the next member, given as a `Value`, and return its value for
    /// the reduced composite.
    pub fn value(&mut self, value: &Value) -> Value {
        let index = self.index;
        self.index += 1;

        if self.failed.is_some() {
            return value.clone();
        }

        match value.reduce() {
            Reduction::Reduced(v) => {
                self.reduced = true;
                v
            }
            Reduction::Exhausted => value.clone(),
            Reduction::Unsupported(type_name) => {
                self.unsupported.get_or_insert((index, type_name));
                value.clone()
            }
            Reduction::Failed(msg) => {
                self.failed = Some((index, msg));
                value.clone()
            }
        }
    }

    /// Reduce the next member, given as a typed argument, and return its value
    /// for the reduced composite.
    pub fn field<T: Arg>(&mut self, value: &T) -> T {
        let index = self.index;
        let reduced = self.value(&value.clone().into_value());
        match T::from_value(reduced) {
            Some(v) => v,
            None => {
                self.failed.get_or_insert_with(|| {
                    let msg = format!("reduction changed the type of member {index}");
                    (index, msg.into())
                });
                value.clone()
            }
        }
    }

    /// Finish the round, classifying the composite `value` built from this
    /// round's members.
    pub fn finish<T>(self, value: T) -> Reduction<T> {
        if let Some((_, msg)) = self.failed {
            Reduction::Failed(msg)
        } else if self.reduced {
            Reduction::Reduced(value)
        } else if let Some((_, type_name)) = self.unsupported {
            Reduction::Unsupported(type_name)
        } else {
            Reduction::Exhausted
        }
    }

    /// Finish a round over an argument tuple.
    ///
    /// Returns whether any argument was reduced, or the error that ends the
    /// shrink run.
    pub(crate) fn finish_round(self) -> Result<bool> {
        if let Some((argument, msg)) = self.failed {
            return Err(Error::reduce(argument, msg));
        }
        if self.reduced {
            return Ok(true);
        }
        match self.unsupported {
            Some((argument, type_name)) => Err(Error::unsupported(argument, type_name)),
            None => Ok(false),
        }
    }
}

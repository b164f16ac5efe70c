//! Argument values and argument tuples.
//!
//! A property's arguments are carried as a tuple of [`Value`]s: a closed set
//! of tagged variants, one per primitive category that has a built-in
//! reduction rule, plus [`Value::Custom`] for types that know how to reduce
//! themselves and [`Value::Other`] for everything else.
//!
//! The [`Arg`] trait converts between typed Rust values and `Value`s, and
//! [`IntoArgs`] turns Rust tuples into [`Args`].

use crate::Reduce;
use alloc::{boxed::Box, string::String, vec::Vec};
use core::{
    any::{self, Any, TypeId},
    fmt, ops,
};

/// The identity of a Rust type: its `TypeId` plus its name, for diagnostics.
///
/// Two `TypeInfo`s are equal when their `TypeId`s are equal.
#[derive(Clone, Copy, Debug)]
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
}

impl TypeInfo {
    /// Get the `TypeInfo` for `T`.
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        TypeInfo {
            id: TypeId::of::<T>(),
            name: any::type_name::<T>(),
        }
    }

    /// The type's `TypeId`.
    #[must_use]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The type's name, as reported by `core::any::type_name`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

macro_rules! define_value_and_kind {
    ( $( $variant:ident($ty:ty) ; )* ) => {
        /// The type of a [`Value`] or of a property's parameter.
        ///
        /// Kinds are compared against each other to check that a property can
        /// be called with an argument tuple before any shrinking starts.
        #[derive(Clone, Debug, PartialEq, Eq)]
        #[non_exhaustive]
        pub enum Kind {
            $(
                #[doc = concat!("A `", stringify!($ty), "`.")]
                $variant,
            )*
            /// A `String`.
            Str,
            /// A `Vec` of values of the given element kind.
            ///
            /// The element kind is `None` only for the kind of an empty list
            /// value, whose elements cannot be observed.
            List(Option<Box<Kind>>),
            /// A type with its own [`Reduce`] implementation.
            Custom(TypeInfo),
            /// A type with no reduction rule.
            Other(TypeInfo),
        }

        impl fmt::Display for Kind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $( Kind::$variant => f.write_str(stringify!($ty)), )*
                    Kind::Str => f.write_str("String"),
                    Kind::List(Some(elem)) => write!(f, "Vec<{elem}>"),
                    Kind::List(None) => f.write_str("Vec<_>"),
                    Kind::Custom(t) | Kind::Other(t) => f.write_str(t.name()),
                }
            }
        }

        /// A single argument value.
        ///
        /// Its `Debug` rendering is the rendering of the wrapped value, so a
        /// `Value::I32(800)` prints as `800` and a `Value::Str` prints as a
        /// quoted string.
        #[derive(Clone, PartialEq)]
        pub enum Value {
            $(
                #[doc = concat!("A `", stringify!($ty), "`.")]
                $variant($ty),
            )*
            /// A string, reduced by taking prefixes.
            Str(String),
            /// A list of values, reduced by taking prefixes.
            List(Vec<Value>),
            /// A value that reduces itself via its [`Reduce`] implementation.
            Custom(Custom),
            /// A value with no reduction rule.
            Other(Other),
        }

        impl Value {
            /// Get this value's kind.
            #[must_use]
            pub fn kind(&self) -> Kind {
                match self {
                    $( Value::$variant(_) => Kind::$variant, )*
                    Value::Str(_) => Kind::Str,
                    Value::List(l) => Kind::List(l.first().map(|v| Box::new(v.kind()))),
                    Value::Custom(c) => Kind::Custom(c.type_info()),
                    Value::Other(o) => Kind::Other(o.type_info()),
                }
            }
        }

        impl fmt::Debug for Value {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $( Value::$variant(x) => fmt::Debug::fmt(x, f), )*
                    Value::Str(s) => fmt::Debug::fmt(s, f),
                    Value::List(l) => f.debug_list().entries(l).finish(),
                    Value::Custom(c) => fmt::Debug::fmt(c, f),
                    Value::Other(o) => fmt::Debug::fmt(o, f),
                }
            }
        }

        $(
            impl Arg for $ty {
                #[inline]
                fn kind() -> Kind {
                    Kind::$variant
                }

                #[inline]
                fn into_value(self) -> Value {
                    Value::$variant(self)
                }

                #[inline]
                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$variant(x) => Some(x),
                        _ => None,
                    }
                }
            }
        )*
    };
}

define_value_and_kind! {
    Bool(bool);
    I8(i8);
    I16(i16);
    I32(i32);
    I64(i64);
    I128(i128);
    Isize(isize);
    U8(u8);
    U16(u16);
    U32(u32);
    U64(u64);
    U128(u128);
    Usize(usize);
    F32(f32);
    F64(f64);
}

impl Kind {
    /// The kind of a `Vec` whose elements are all of kind `elem`.
    ///
    /// # Example
    ///
    /// ```
    /// use whittle::{Arg, Kind};
    ///
    /// assert_eq!(Vec::<u8>::kind(), Kind::list(Kind::U8));
    /// assert_eq!(Kind::list(Kind::U8).to_string(), "Vec<u8>");
    /// ```
    #[must_use]
    pub fn list(elem: Kind) -> Kind {
        Kind::List(Some(Box::new(elem)))
    }

    /// Whether a parameter of this kind can be passed `value`.
    ///
    /// List kinds check every element of the list, so an empty list is
    /// accepted by every list kind.
    ///
    /// # Example
    ///
    /// ```
    /// use whittle::{Arg, Kind, Value};
    ///
    /// let kind = Kind::list(Kind::U8);
    /// assert!(kind.accepts(&vec![1u8, 2].into_value()));
    /// assert!(kind.accepts(&Vec::<String>::new().into_value()));
    /// assert!(!kind.accepts(&vec![String::from("x")].into_value()));
    /// assert!(!kind.accepts(&Value::U8(1)));
    /// ```
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Kind::List(Some(elem)), Value::List(items)) => items.iter().all(|v| elem.accepts(v)),
            (Kind::List(None), Value::List(_)) => true,
            _ => *self == value.kind(),
        }
    }
}

impl Value {
    /// Convert a typed Rust value into a `Value`.
    ///
    /// # Example
    ///
    /// ```
    /// use whittle::Value;
    ///
    /// assert_eq!(Value::of(42u8), Value::U8(42));
    /// assert_eq!(Value::of(String::from("hi")), Value::Str("hi".into()));
    /// ```
    #[must_use]
    pub fn of<T: Arg>(value: T) -> Value {
        value.into_value()
    }

    /// Convert this value back into a typed Rust value, if it holds a `T`.
    #[must_use]
    pub fn into_arg<T: Arg>(self) -> Option<T> {
        T::from_value(self)
    }
}

/// A type that can be passed to a property as an argument.
///
/// This trait is implemented for `bool`, every integer and float type,
/// `String`, `Vec<T>` of arguments, [`Opaque<T>`], and every type that
/// implements [`Reduce`] (plus `Clone`, `Debug`, and `PartialEq`).
pub trait Arg: Clone + fmt::Debug + 'static {
    /// The kind of `Value` this type converts into.
    fn kind() -> Kind;

    /// Convert this typed value into a `Value`.
    fn into_value(self) -> Value;

    /// Convert a `Value` back into this type, returning `None` if the value
    /// holds some other type.
    fn from_value(value: Value) -> Option<Self>;
}

impl Arg for String {
    #[inline]
    fn kind() -> Kind {
        Kind::Str
    }

    #[inline]
    fn into_value(self) -> Value {
        Value::Str(self)
    }

    #[inline]
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl<T> Arg for Vec<T>
where
    T: Arg,
{
    #[inline]
    fn kind() -> Kind {
        Kind::list(T::kind())
    }

    fn into_value(self) -> Value {
        Value::List(self.into_iter().map(Arg::into_value).collect())
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::List(l) => l.into_iter().map(T::from_value).collect(),
            _ => None,
        }
    }
}

impl<T> Arg for T
where
    T: Reduce + Clone + fmt::Debug + PartialEq + 'static,
{
    #[inline]
    fn kind() -> Kind {
        Kind::Custom(TypeInfo::of::<T>())
    }

    #[inline]
    fn into_value(self) -> Value {
        Value::Custom(Custom::new(self))
    }

    #[inline]
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Custom(c) => c.downcast(),
            _ => None,
        }
    }
}

/// A wrapper for argument types that have no reduction rule at all.
///
/// An `Opaque<T>` argument is carried as a [`Value::Other`]. Shrinking leaves
/// it unchanged as long as some other argument in the tuple can still be
/// reduced, and fails with an
/// [`Unsupported`][crate::ErrorKind::Unsupported] error otherwise.
///
/// # Example
///
/// ```
/// use whittle::{Arg, Kind, Opaque, Value};
///
/// let value = Opaque('x').into_value();
/// assert!(matches!(value.kind(), Kind::Other(_)));
/// assert_eq!(value.into_arg::<Opaque<char>>(), Some(Opaque('x')));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Opaque<T>(pub T);

impl<T> Arg for Opaque<T>
where
    T: Clone + fmt::Debug + PartialEq + 'static,
{
    #[inline]
    fn kind() -> Kind {
        Kind::Other(TypeInfo::of::<T>())
    }

    #[inline]
    fn into_value(self) -> Value {
        Value::Other(Other::new(self.0))
    }

    #[inline]
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Other(o) => o.downcast().map(Opaque),
            _ => None,
        }
    }
}

trait ErasedReduce: Any + fmt::Debug {
    fn reduce_erased(&self) -> crate::Reduction<Custom>;
    fn clone_erased(&self) -> Box<dyn ErasedReduce>;
    fn eq_erased(&self, other: &dyn ErasedReduce) -> bool;
    fn type_info(&self) -> TypeInfo;
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T> ErasedReduce for T
where
    T: Reduce + Clone + fmt::Debug + PartialEq + 'static,
{
    fn reduce_erased(&self) -> crate::Reduction<Custom> {
        Reduce::reduce(self).map(Custom::new)
    }

    fn clone_erased(&self) -> Box<dyn ErasedReduce> {
        Box::new(self.clone())
    }

    fn eq_erased(&self, other: &dyn ErasedReduce) -> bool {
        other.as_any().downcast_ref::<T>().is_some_and(|o| self == o)
    }

    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// A type-erased value with its own [`Reduce`] implementation.
pub struct Custom {
    inner: Box<dyn ErasedReduce>,
}

impl Custom {
    /// Erase the given self-reducing value.
    #[must_use]
    pub fn new<T>(value: T) -> Self
    where
        T: Reduce + Clone + fmt::Debug + PartialEq + 'static,
    {
        Custom {
            inner: Box::new(value),
        }
    }

    /// The erased value's type.
    #[must_use]
    pub fn type_info(&self) -> TypeInfo {
        self.inner.type_info()
    }

    /// Get a reference to the erased value, if it is a `T`.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.inner.as_any().downcast_ref()
    }

    /// Take the erased value back out, if it is a `T`.
    #[must_use]
    pub fn downcast<T: 'static>(self) -> Option<T> {
        if self.type_info().id() != TypeId::of::<T>() {
            return None;
        }
        self.inner.into_any().downcast().ok().map(|b| *b)
    }

    /// Run the erased value's own reduction rule.
    pub fn reduce(&self) -> crate::Reduction<Custom> {
        self.inner.reduce_erased()
    }
}

impl Clone for Custom {
    fn clone(&self) -> Self {
        Custom {
            inner: self.inner.clone_erased(),
        }
    }
}

impl PartialEq for Custom {
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq_erased(&*other.inner)
    }
}

impl fmt::Debug for Custom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, f)
    }
}

trait ErasedOther: Any + fmt::Debug {
    fn clone_erased(&self) -> Box<dyn ErasedOther>;
    fn eq_erased(&self, other: &dyn ErasedOther) -> bool;
    fn type_info(&self) -> TypeInfo;
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T> ErasedOther for T
where
    T: Clone + fmt::Debug + PartialEq + 'static,
{
    fn clone_erased(&self) -> Box<dyn ErasedOther> {
        Box::new(self.clone())
    }

    fn eq_erased(&self, other: &dyn ErasedOther) -> bool {
        other.as_any().downcast_ref::<T>().is_some_and(|o| self == o)
    }

    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// A type-erased value with no reduction rule.
pub struct Other {
    inner: Box<dyn ErasedOther>,
}

impl Other {
    /// Erase the given value.
    #[must_use]
    pub fn new<T>(value: T) -> Self
    where
        T: Clone + fmt::Debug + PartialEq + 'static,
    {
        Other {
            inner: Box::new(value),
        }
    }

    /// The erased value's type.
    #[must_use]
    pub fn type_info(&self) -> TypeInfo {
        self.inner.type_info()
    }

    /// Get a reference to the erased value, if it is a `T`.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.inner.as_any().downcast_ref()
    }

    /// Take the erased value back out, if it is a `T`.
    #[must_use]
    pub fn downcast<T: 'static>(self) -> Option<T> {
        if self.type_info().id() != TypeId::of::<T>() {
            return None;
        }
        self.inner.into_any().downcast().ok().map(|b| *b)
    }
}

impl Clone for Other {
    fn clone(&self) -> Self {
        Other {
            inner: self.inner.clone_erased(),
        }
    }
}

impl PartialEq for Other {
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq_erased(&*other.inner)
    }
}

impl fmt::Debug for Other {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, f)
    }
}

/// An ordered argument tuple, positionally aligned with a property's
/// parameters.
///
/// `Args` renders with `Display` as a comma-separated list of its values'
/// renderings, which is what shrink reports print.
///
/// # Example
///
/// ```
/// use whittle::{Args, IntoArgs, Value};
///
/// let args = (15i32, String::from("a")).into_args();
/// assert_eq!(args.len(), 2);
/// assert_eq!(args[0], Value::I32(15));
/// assert_eq!(args.to_string(), r#"15, "a""#);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Args {
    values: Vec<Value>,
}

impl Args {
    /// Create a new, empty argument tuple.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value to the end of this tuple.
    pub fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    /// The values in this tuple.
    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    /// The kinds of the values in this tuple, in order.
    #[must_use]
    pub fn kinds(&self) -> Vec<Kind> {
        self.values.iter().map(Value::kind).collect()
    }

    /// Take the values out of this tuple.
    #[must_use]
    pub fn into_vec(self) -> Vec<Value> {
        self.values
    }
}

impl ops::Deref for Args {
    type Target = [Value];

    fn deref(&self) -> &[Value] {
        &self.values
    }
}

impl From<Vec<Value>> for Args {
    fn from(values: Vec<Value>) -> Self {
        Args { values }
    }
}

impl FromIterator<Value> for Args {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Args {
            values: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Args {
    type Item = Value;
    type IntoIter = alloc::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Args {
    type Item = &'a Value;
    type IntoIter = core::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl fmt::Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v:?}")?;
        }
        Ok(())
    }
}

/// Conversion into an argument tuple.
///
/// Implemented for `Args` itself, `Vec<Value>`, and Rust tuples of up to eight
/// [`Arg`]s.
pub trait IntoArgs {
    /// Convert `self` into an argument tuple.
    fn into_args(self) -> Args;
}

impl IntoArgs for Args {
    #[inline]
    fn into_args(self) -> Args {
        self
    }
}

impl IntoArgs for Vec<Value> {
    #[inline]
    fn into_args(self) -> Args {
        Args::from(self)
    }
}

macro_rules! tuple_into_args {
    ( $( ( $( $arg:ident ),* ) ; )* ) => {
        $(
            impl< $( $arg ),* > IntoArgs for ( $( $arg , )* )
            where
                $( $arg: Arg ),*
            {
                #[allow(non_snake_case)]
                fn into_args(self) -> Args {
                    let ( $( $arg , )* ) = self;
                    Args {
                        values: alloc::vec![ $( $arg.into_value() ),* ],
                    }
                }
            }
        )*
    };
}

tuple_into_args! {
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

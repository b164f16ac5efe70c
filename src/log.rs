//! Logging shim: the `log` crate's macros when the `log` feature is enabled,
//! and macros that expand to nothing when it is not.

#![allow(unused_macros, unused_imports)]

#[cfg(feature = "log")]
pub(crate) use ::log::{debug, info, trace};

#[cfg(not(feature = "log"))]
macro_rules! noop {
    ($($tt:tt)*) => {};
}

#[cfg(not(feature = "log"))]
pub(crate) use {noop as debug, noop as info, noop as trace};

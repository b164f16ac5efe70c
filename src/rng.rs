//! A thin-but-stable wrapper over `rand::rngs::SmallRng` that provides a few
//! more conveniences for generating property arguments.

use alloc::{string::String, vec::Vec};
use rand::{rngs::SmallRng, Rng as _, SeedableRng};

pub(crate) const DEFAULT_SEED: u64 = 0x12345678_12345678;

/// A pseudorandom number generator.
///
/// Not cryptographically secure.
///
/// A [`Check`][crate::check::Check] hands out a reference to its `Rng` to the
/// argument generator on every iteration.
#[derive(Clone, Debug)]
pub struct Rng {
    inner: SmallRng,
}

impl Default for Rng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

macro_rules! gen_methods {
    ( $( $name:ident -> $ty:ty ; )* ) => {
        $(
            /// Generate a random
            #[doc = concat!("`", stringify!($ty), "`")]
            /// value.
            pub fn $name(&mut self) -> $ty {
                self.inner.gen()
            }
        )*
    };
}

impl Rng {
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }

    /// Generate a random length in the range `0..=max_len`.
    #[inline]
    pub fn gen_len(&mut self, max_len: usize) -> usize {
        self.inner.gen_range(0..=max_len)
    }

    /// Generate a random string of printable ASCII characters, at most
    /// `max_len` characters long.
    pub fn gen_string(&mut self, max_len: usize) -> String {
        let len = self.gen_len(max_len);
        (0..len)
            .map(|_| char::from(self.inner.gen_range(0x20u8..=0x7e)))
            .collect()
    }

    /// Generate a random list of at most `max_len` elements, each generated by
    /// `f`.
    pub fn gen_vec<T>(&mut self, max_len: usize, mut f: impl FnMut(&mut Rng) -> T) -> Vec<T> {
        let len = self.gen_len(max_len);
        (0..len).map(|_| f(self)).collect()
    }

    gen_methods! {
        gen_bool -> bool;
        gen_u8 -> u8;
        gen_u16 -> u16;
        gen_u32 -> u32;
        gen_u64 -> u64;
        gen_u128 -> u128;
        gen_usize -> usize;
        gen_i8 -> i8;
        gen_i16 -> i16;
        gen_i32 -> i32;
        gen_i64 -> i64;
        gen_i128 -> i128;
        gen_isize -> isize;
        gen_f32 -> f32;
        gen_f64 -> f64;
    }
}

//! Deterministic random stream
//!
//! Every planet is reproduced from a text seed. The seed is folded into a
//! 32-bit state with the classic `hash * 31 + unit` string hash (over UTF-16
//! code units, so browser front ends that hash the same string agree), and the
//! state is advanced with a Weyl increment followed by two xorshift-multiply
//! rounds. Draws are returned as `u32 / 2^32`, giving floats in [0, 1).
//!
//! The draw order of each generator is part of its contract: adding or
//! removing a single call to [`Stream::next_unit`] shifts every later outcome
//! for a given seed.

use rand_core::{RngCore, SeedableRng, impls};

/// Weyl sequence increment applied before each mixing round
const WEYL_INCREMENT: u32 = 0x6D2B_79F5;

/// 2^32, the divisor that maps a raw draw into [0, 1)
const UNIT_SCALE: f64 = 4_294_967_296.0;

/// Folds a text seed into a 32-bit state.
///
/// Uses wrapping `hash * 31 + unit` over the UTF-16 encoding of `seed`.
/// The result may be zero; [`Stream::from_state`] remaps that case.
pub fn fold_seed(seed: &str) -> u32 {
    seed.encode_utf16()
        .fold(0i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        }) as u32
}

/// A seeded, replayable source of uniform floats.
///
/// Two streams built from the same seed and advanced the same number of
/// times always produce the same values. A stream is never shared between
/// generators; each generator call builds or receives its own.
///
/// # Example
/// ```
/// use planetgen::stream::Stream;
///
/// let mut a = Stream::from_text("test-1");
/// let mut b = Stream::from_text("test-1");
/// for _ in 0..100 {
///     let x = a.next_unit();
///     assert!((0.0..1.0).contains(&x));
///     assert_eq!(x, b.next_unit());
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stream {
    state: u32,
}

impl Stream {
    /// Builds a stream from arbitrary text (including the empty string).
    pub fn from_text(seed: &str) -> Self {
        Self::from_state(fold_seed(seed))
    }

    /// Builds a stream from a raw state. Zero is remapped to 1 so the
    /// mixer never starts from the all-zero state.
    pub fn from_state(state: u32) -> Self {
        Self {
            state: if state == 0 { 1 } else { state },
        }
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Draws the next float in [0, 1).
    pub fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / UNIT_SCALE
    }

    /// Picks an element uniformly with one draw.
    ///
    /// Returns `None` without consuming a draw when `items` is empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = (self.next_unit() * items.len() as f64).floor() as usize;
        items.get(index.min(items.len() - 1))
    }

    fn mix(&mut self) -> u32 {
        self.state = self.state.wrapping_add(WEYL_INCREMENT);
        let s = self.state;
        let mut t = (s ^ (s >> 15)).wrapping_mul(1 | s);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t)) ^ t;
        t ^ (t >> 14)
    }
}

impl RngCore for Stream {
    fn next_u32(&mut self) -> u32 {
        self.mix()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for Stream {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::from_state(u32::from_le_bytes(seed))
    }
}

//! Portable software emulation of the vector shuffle primitives.

use crate::kernels::constants::{HALF_LANE, LANE_WORDS, SHUFFLE_OFFSETS};

/// Mask selecting the lower 32 bits of a word.
const LOW_MASK: u64 = 0xFFFF_FFFF;

/// Merge two half-words into one 64-bit word.
///
/// The upper 32 bits of `hi_src` become the lower half of the result and the
/// lower 32 bits of `lo_src` become the upper half. Applied across a lane this
/// reproduces a 32-bit lane rotate of a 256-bit register pair.
#[inline]
pub const fn merge_halves(hi_src: u64, lo_src: u64) -> u64 {
    (hi_src >> 32) | ((lo_src & LOW_MASK) << 32)
}

/// Build the 8-word shuffle temporary for one lane.
///
/// `t[k]` takes its lower half from the upper half of `lane[P[k]]` and its
/// upper half from the lower half of `lane[P[k + 8]]`.
#[inline]
pub fn shuffle_lane(lane: &[u64; LANE_WORDS]) -> [u64; LANE_WORDS] {
    let mut t = [0u64; LANE_WORDS];
    for (k, tk) in t.iter_mut().enumerate() {
        *tk = merge_halves(lane[SHUFFLE_OFFSETS[k]], lane[SHUFFLE_OFFSETS[k + LANE_WORDS]]);
    }
    t
}

/// Split a lane temporary into its low (`t[0..4]`) and high (`t[4..8]`) halves.
#[inline]
pub fn split_lane(t: &[u64; LANE_WORDS]) -> ([u64; HALF_LANE], [u64; HALF_LANE]) {
    let mut lo = [0u64; HALF_LANE];
    let mut hi = [0u64; HALF_LANE];
    lo.copy_from_slice(&t[..HALF_LANE]);
    hi.copy_from_slice(&t[HALF_LANE..]);
    (lo, hi)
}

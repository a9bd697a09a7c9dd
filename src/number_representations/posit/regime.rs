//! Conversions between the scale `k` and the regime field of a posit<8, 0>.
//!
//! For `k >= 0` the regime is `k + 1` ones closed by a zero, for `k < 0` it is
//! `-k` zeros closed by a one. Runs that would not fit next to the sign bit are
//! cut off and lose their terminating bit.

use crate::number_representations::posit::{core::Posit, posit8::Posit8};

/// Total width of the encoding in bits.
pub const WIDTH: u32 = <Posit8 as Posit<8, 0>>::N as u32;

/// Largest scale that still has room for its terminating bit.
const MAX_OPEN_K: i32 = WIDTH as i32 - 3;

/// Regime bit pattern for `k` together with its length in bits.
///
/// Only the terminating one survives for negative scales: the leading zeros
/// are implied by the position the pattern is shifted to.
pub fn regime_bits(k: i32) -> (u8, u32) {
    let len = regime_len(k, WIDTH);
    let pattern = if k > MAX_OPEN_K {
        // all ones, no terminator
        (1u8 << (WIDTH - 1)) - 1
    } else if k <= -(WIDTH as i32 - 1) {
        0
    } else if k >= 0 {
        ((1u32 << (k + 2)) - 2) as u8
    } else {
        1
    };
    (pattern, len)
}

/// Length of the regime for `k` in a posit of `width` bits, capped at the
/// bits left over after the sign.
pub fn regime_len(k: i32, width: u32) -> u32 {
    let len = if k >= 0 { k + 2 } else { -k + 1 };
    (len as u32).min(width - 1)
}

/// Number of fraction bits left once sign and regime for `k` are placed.
pub fn frac_len(k: i32, width: u32) -> u32 {
    (width - 1).saturating_sub(regime_len(k, width))
}

use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Div, Mul, Neg, Rem, Sub, SubAssign},
};

use ndarray::ScalarOperand;
use num_traits::{Num, One, ToPrimitive, Zero};

use crate::number_representations::{
    core::{AIFloat, MlScalar},
    posit::{
        arithmetic,
        core::{DecodedPosit8, Posit},
    },
};

/// An 8-bit posit with no exponent field (`es = 0`).
///
/// The byte is read as two's complement: a sign bit, a regime run of equal bits
/// closed by an opposite bit, and whatever is left over as fraction. `0x00` is
/// exact zero and `0x80` is NaR, the single unsigned infinity. The other 254
/// encodings are distinct finite values between `2^-6` and `2^6` in magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Posit8 {
    bits: u8,
}

impl MlScalar for Posit8 {}

impl Posit<8, 0> for Posit8 {}

impl Posit8 {
    pub const ZERO: Self = Posit8 { bits: 0 };
    pub const NAR: Self = Posit8 {
        bits: 1 << (Self::N - 1),
    };
    pub const ONE: Self = Posit8 { bits: 0x40 };
    /// Largest finite value, `64.0`.
    pub const MAX_POS: Self = Posit8 { bits: 0x7F };
    /// Smallest positive value, `0.015625`.
    pub const MIN_POS: Self = Posit8 { bits: 0x01 };

    const MAX_POS_VALUE: f64 = 64.0;
    const MIN_POS_VALUE: f64 = 0.015625;
    // Fraction bits available when the regime is a single bit.
    const MAX_FRAC_LEN: u32 = 6;

    pub const fn new(bits: u8) -> Self {
        Posit8 { bits }
    }

    pub const fn to_bits(self) -> u8 {
        self.bits
    }

    pub fn is_zero(self) -> bool {
        self.bits == Self::ZERO.bits
    }

    pub fn is_nar(self) -> bool {
        self.bits == Self::NAR.bits
    }

    pub fn is_negative(self) -> bool {
        self.bits >> 7 == 1 && !self.is_nar()
    }

    /// Negation of the encoding. Zero and NaR map to themselves.
    pub fn twos_complement(self) -> Self {
        Self::new(self.bits.wrapping_neg())
    }

    /// Encoding of `|self|`, used to compare magnitudes without decoding.
    pub(crate) fn magnitude_bits(self) -> u8 {
        if self.bits >> 7 == 1 {
            self.bits.wrapping_neg()
        } else {
            self.bits
        }
    }

    pub fn decode(self) -> DecodedPosit8 {
        if self.is_zero() {
            return DecodedPosit8 {
                is_zero: true,
                ..DecodedPosit8::default()
            };
        }
        if self.is_nar() {
            return DecodedPosit8 {
                is_nar: true,
                sign: true,
                ..DecodedPosit8::default()
            };
        }

        let sign = self.bits >> 7 == 1;
        let magnitude = self.magnitude_bits();

        // Drop the sign and count the regime run. A leading one after the sign
        // means the run is made of ones.
        let body = magnitude << 1;
        let (run, k) = match body.leading_zeros() {
            0 => {
                let ones = (!body).leading_zeros();
                (ones, ones as i32 - 1)
            }
            zeros => (zeros, -(zeros as i32)),
        };

        let frac_len = if run < 7 { 8 - (run + 2) } else { 0 };
        let fraction = if frac_len > 0 {
            u32::from(magnitude) & ((1 << frac_len) - 1)
        } else {
            0
        };

        DecodedPosit8 {
            is_nar: false,
            is_zero: false,
            sign,
            k,
            fraction,
            frac_len,
        }
    }

    /// Bit-trick logistic: flip the sign bit, then shift right by two.
    ///
    /// The encoding is an unsigned byte, so the shift brings in zeros rather
    /// than copies of the top bit, which is what the hardware kernels this
    /// approximation comes from do with their `unsigned char` operands. Every
    /// result lies in `[0, 1)`. Zero maps to `0.5` and NaR maps to zero.
    pub fn sigmoid_approx(self) -> Self {
        Self::new((self.bits ^ 0x80) >> 2)
    }

    fn with_sign(self, negative: bool) -> Self {
        if negative {
            self.twos_complement()
        } else {
            self
        }
    }
}

/// Greedy binary expansion of `fraction` (in `[0, 1)`) into `len` bits.
///
/// Remaining bits are dropped, so the encoder truncates toward zero.
pub(crate) fn fraction_to_bits(mut fraction: f64, len: u32) -> u8 {
    let mut bits = 0u8;
    let mut probe = 1.0;
    for _ in 0..len {
        probe /= 2.0;
        bits <<= 1;
        if fraction >= probe {
            bits |= 1;
            fraction -= probe;
        }
    }
    bits
}

impl From<f64> for Posit8 {
    fn from(value: f64) -> Self {
        if value == 0.0 {
            return Self::ZERO;
        }
        if value.is_nan() || value.is_infinite() {
            return Self::NAR;
        }
        if value >= Self::MAX_POS_VALUE {
            return Self::MAX_POS;
        }
        if value <= -Self::MAX_POS_VALUE {
            return Self::MAX_POS.twos_complement();
        }
        if value > 0.0 && value <= Self::MIN_POS_VALUE {
            return Self::MIN_POS;
        }
        if value < 0.0 && value >= -Self::MIN_POS_VALUE {
            return Self::MIN_POS.twos_complement();
        }

        let negative = value < 0.0;
        let mut magnitude = value.abs();

        // Normalise into [1, 2) and count the regime run on the way.
        let regime_is_ones = magnitude > 1.0;
        let mut regime_len = 0u32;
        if regime_is_ones {
            // k = run - 1
            regime_len = 1;
            while magnitude >= 2.0 {
                magnitude /= 2.0;
                regime_len += 1;
            }
            if regime_len > Self::MAX_FRAC_LEN {
                return Self::MAX_POS.with_sign(negative);
            }
        } else {
            while magnitude < 1.0 {
                magnitude *= 2.0;
                regime_len += 1;
            }
            if regime_len > Self::MAX_FRAC_LEN {
                return Self::MIN_POS.with_sign(negative);
            }
        }

        let frac_len = Self::MAX_FRAC_LEN - regime_len;
        let fraction = fraction_to_bits(magnitude - 1.0, frac_len);

        let mut body = 0u8;
        for _ in 0..regime_len {
            body = (body << 1) | u8::from(regime_is_ones);
        }
        body = (body << 1) | u8::from(!regime_is_ones);
        body = (body << frac_len) | fraction;

        Self::new(body).with_sign(negative)
    }
}

impl From<f32> for Posit8 {
    fn from(value: f32) -> Self {
        <Posit8 as From<f64>>::from(f64::from(value))
    }
}

impl From<Posit8> for f64 {
    fn from(p: Posit8) -> Self {
        let decoded = p.decode();

        if decoded.is_zero {
            return 0.0;
        }
        if decoded.is_nar {
            return f64::INFINITY;
        }

        let fraction_max = f64::from(1u32 << decoded.frac_len);
        let magnitude =
            2.0f64.powi(decoded.k) * (1.0 + f64::from(decoded.fraction) / fraction_max);

        if decoded.sign { -magnitude } else { magnitude }
    }
}

impl From<Posit8> for f32 {
    fn from(p: Posit8) -> Self {
        <f64 as From<Posit8>>::from(p) as f32
    }
}

impl Add for Posit8 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        arithmetic::add(self, rhs)
    }
}

impl Sub for Posit8 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        arithmetic::sub(self, rhs)
    }
}

impl Mul for Posit8 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        arithmetic::mul(self, rhs)
    }
}

impl Div for Posit8 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        arithmetic::div(self, rhs)
    }
}

impl Neg for Posit8 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.twos_complement()
    }
}

impl Rem for Posit8 {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        if self.is_nar() || rhs.is_nar() || rhs.is_zero() {
            return Self::NAR;
        }
        if self.is_zero() {
            return Self::ZERO;
        }
        <Posit8 as From<f64>>::from(f64::from(self) % f64::from(rhs))
    }
}

impl AddAssign for Posit8 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Posit8 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

// Two's complement order of the encoding is the value order, with NaR first.
impl Ord for Posit8 {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.bits as i8).cmp(&(other.bits as i8))
    }
}

impl PartialOrd for Posit8 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Posit8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nar() {
            return write!(f, "NaR");
        }
        write!(f, "{}", f64::from(*self))
    }
}

impl Zero for Posit8 {
    fn zero() -> Self {
        Posit8::ZERO
    }
    fn is_zero(&self) -> bool {
        self.bits == Posit8::ZERO.bits
    }
}

impl One for Posit8 {
    fn one() -> Self {
        Posit8::ONE
    }
}

impl Num for Posit8 {
    type FromStrRadixErr = <f64 as Num>::FromStrRadixErr;
    fn from_str_radix(s: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        f64::from_str_radix(s, radix).map(<Posit8 as From<f64>>::from)
    }
}

impl num_traits::NumCast for Posit8 {
    fn from<T: ToPrimitive>(n: T) -> Option<Self> {
        n.to_f64().map(<Posit8 as From<f64>>::from)
    }
}

impl ToPrimitive for Posit8 {
    fn to_i64(&self) -> Option<i64> {
        f64::from(*self).to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        f64::from(*self).to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        if self.is_nar() {
            return None;
        }
        Some(f64::from(*self))
    }
}

impl ScalarOperand for Posit8 {}

impl AIFloat for Posit8 {
    fn sigmoid(self) -> Self {
        self.sigmoid_approx()
    }

    fn max(self, other: Self) -> Self {
        if self.is_nar() {
            return other;
        } else if other.is_nar() {
            return self;
        }
        Ord::max(self, other)
    }

    fn min(self, other: Self) -> Self {
        if self.is_nar() {
            return other;
        } else if other.is_nar() {
            return self;
        }
        Ord::min(self, other)
    }
}

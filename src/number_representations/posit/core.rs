/// Format parameters of a posit: total width `N` and exponent field width `ES`.
///
/// `USEED` is the factor one regime step scales by, `2^(2^ES)`.
pub trait Posit<const N: usize, const ES: usize> {
    const N: usize = N;
    const ES: usize = ES;
    const USEED: usize = 1 << (1 << ES);
}

/// Field view of a posit<8, 0> encoding.
///
/// Recomputed on every operation and never stored. A finite value is
/// `(-1)^sign * 2^k * (1 + fraction / 2^frac_len)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodedPosit8 {
    pub is_nar: bool,
    pub is_zero: bool,
    pub sign: bool,
    pub k: i32,
    // Fraction bits after the regime, without the hidden bit.
    pub fraction: u32,
    pub frac_len: u32,
}

impl DecodedPosit8 {
    /// The fraction with its implicit leading one restored.
    pub fn mantissa(&self) -> u32 {
        self.fraction | (1 << self.frac_len)
    }
}

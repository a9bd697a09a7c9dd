//! Textual `0`/`1` form of an encoding, most significant bit first.
//!
//! Diagnostic tooling and external test harnesses exchange posits this way.

use std::fmt;

use crate::{
    error::{PositError, Result},
    number_representations::posit::posit8::Posit8,
};

const DIGITS: usize = 8;

impl Posit8 {
    pub fn to_bit_string(self) -> String {
        format!("{:08b}", self.to_bits())
    }

    pub fn from_bit_str(s: &str) -> Result<Self> {
        let len = s.chars().count();
        if len != DIGITS {
            return Err(PositError::InvalidLength { len });
        }

        s.chars()
            .enumerate()
            .try_fold(0u8, |acc, (position, found)| match found {
                '0' => Ok(acc << 1),
                '1' => Ok((acc << 1) | 1),
                _ => Err(PositError::InvalidDigit { found, position }),
            })
            .map(Posit8::new)
    }
}

impl fmt::Binary for Posit8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.to_bits(), f)
    }
}

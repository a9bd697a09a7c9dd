//! Add, subtract, multiply and divide directly on posit<8, 0> encodings.
//!
//! Every operation decodes its operands, restores the hidden bits, lines the
//! mantissas up on a common fraction width and works on plain `u32`s. The
//! result goes back through [`round_and_pack`], which derives the new regime
//! from the computed scale and rounds the surplus fraction bits to nearest,
//! ties to even.

use crate::number_representations::posit::{
    posit8::Posit8,
    regime::{self, WIDTH},
};

// Fixed point the divider works in: mantissas are widened to 7 fraction bits.
const DIV_FRAC_BITS: u32 = 7;

fn low_bits(value: u32, count: u32) -> u32 {
    value & ((1 << count) - 1)
}

/// Whether dropping the low `shift` bits of `fraction` must round `body` up.
fn rounds_up(fraction: u32, shift: i32, body: u8) -> bool {
    if shift <= 0 {
        return false;
    }
    let shift = shift as u32;
    let discarded = low_bits(fraction, shift);
    let half = 1 << (shift - 1);
    discarded > half || (discarded == half && body & 1 == 1)
}

/// Encode `2^k * (1 + fraction / 2^frac_len)` with the given sign.
///
/// `fraction` must not carry the hidden bit any more.
fn round_and_pack(negative: bool, k: i32, fraction: u32, frac_len: u32) -> Posit8 {
    let (regime, _) = regime::regime_bits(k);
    let result_frac_len = regime::frac_len(k, WIDTH);
    let shift = frac_len as i32 - result_frac_len as i32;

    let mut body = regime << result_frac_len;
    if result_frac_len > 0 {
        let kept = if shift > 0 {
            fraction >> shift
        } else {
            fraction << -shift
        };
        body |= kept as u8;
    }

    if body != Posit8::MAX_POS.to_bits() && rounds_up(fraction, shift, body) {
        body += 1;
    }
    // A nonzero result never collapses to zero.
    if body == 0 {
        body = Posit8::MIN_POS.to_bits();
    }

    let result = Posit8::new(body);
    if negative {
        result.twos_complement()
    } else {
        result
    }
}

pub fn add(a: Posit8, b: Posit8) -> Posit8 {
    if a.is_zero() {
        return b;
    }
    if b.is_zero() {
        return a;
    }
    if a.is_nar() || b.is_nar() {
        return Posit8::NAR;
    }
    if a.twos_complement() == b {
        return Posit8::ZERO;
    }

    let da = a.decode();
    let db = b.decode();

    let negative = if a.magnitude_bits() > b.magnitude_bits() {
        da.sign
    } else {
        db.sign
    };

    // The operand with the smaller scale gets a wider fraction instead of a
    // right shift, so no bits are lost before the sum.
    let mut len_a = da.frac_len;
    let mut len_b = db.frac_len;
    let mut k = da.k.max(db.k);
    if da.k > db.k {
        len_b += (da.k - db.k) as u32;
    } else {
        len_a += (db.k - da.k) as u32;
    }

    let mut frac_len = len_a.max(len_b);
    let mant_a = da.mantissa() << (frac_len - len_a);
    let mant_b = db.mantissa() << (frac_len - len_b);

    let mut sum = if da.sign == db.sign {
        mant_a + mant_b
    } else {
        mant_a.abs_diff(mant_b)
    };

    if sum >> (frac_len + 1) > 0 {
        k += 1;
        frac_len += 1;
    } else {
        while sum >> frac_len == 0 && frac_len > 0 {
            k -= 1;
            frac_len -= 1;
        }
    }
    sum = low_bits(sum, frac_len);

    round_and_pack(negative, k, sum, frac_len)
}

pub fn sub(a: Posit8, b: Posit8) -> Posit8 {
    add(a, b.twos_complement())
}

pub fn mul(a: Posit8, b: Posit8) -> Posit8 {
    if a.is_zero() || b.is_zero() {
        return Posit8::ZERO;
    }
    if a.is_nar() || b.is_nar() {
        return Posit8::NAR;
    }

    let da = a.decode();
    let db = b.decode();
    let negative = da.sign ^ db.sign;
    let mut k = da.k + db.k;

    let width = da.frac_len.max(db.frac_len);
    let mant_a = da.mantissa() << (width - da.frac_len);
    let mant_b = db.mantissa() << (width - db.frac_len);

    let mut frac_len = width * 2;
    let mut product = mant_a * mant_b;
    // 1.x * 1.y lands in [1, 4)
    if product >> (frac_len + 1) > 0 {
        k += 1;
        frac_len += 1;
    }
    product = low_bits(product, frac_len);

    round_and_pack(negative, k, product, frac_len)
}

pub fn div(a: Posit8, b: Posit8) -> Posit8 {
    // Division by zero wins over a zero dividend, so 0 / 0 is NaR.
    if b.is_zero() {
        return Posit8::NAR;
    }
    if a.is_zero() {
        return Posit8::ZERO;
    }
    if a.is_nar() || b.is_nar() {
        return Posit8::NAR;
    }

    let da = a.decode();
    let db = b.decode();
    let negative = da.sign ^ db.sign;
    let mut k = da.k - db.k;

    let dividend = (da.mantissa() << (DIV_FRAC_BITS - da.frac_len)) << DIV_FRAC_BITS;
    let divisor = db.mantissa() << (DIV_FRAC_BITS - db.frac_len);
    let mut quotient = dividend / divisor;
    let remainder = dividend % divisor;

    // The quotient of two mantissas in [1, 2) lies in (0.5, 2). Below one the
    // hidden bit sits one place short.
    if quotient >> DIV_FRAC_BITS == 0 {
        k -= 1;
        quotient <<= 1;
    }

    let (regime, regime_len) = regime::regime_bits(k);
    let result_frac_len = WIDTH - 1 - regime_len;
    let mut body = regime << result_frac_len;

    // Uncapped regime run length: the quotient fraction bits at and below
    // this position do not fit.
    let run = (if k < 0 { -k } else { k + 1 }) as u32;
    quotient = low_bits(quotient, DIV_FRAC_BITS);
    body |= (quotient >> (run + 1)) as u8;

    let guard = (quotient >> run) & 1 == 1;
    if guard {
        let sticky = low_bits(quotient, run) != 0;
        if remainder > 0 || sticky || body & 1 == 1 {
            body += 1;
        }
    }

    if body == 0 {
        body = Posit8::MIN_POS.to_bits();
    }

    let result = Posit8::new(body);
    if negative {
        result.twos_complement()
    } else {
        result
    }
}

//! An 8-bit posit (`es = 0`) codec and arithmetic engine.
//!
//! [`Posit8`] wraps a single byte. Values are decoded into sign, regime and
//! fraction, combined with integer arithmetic and packed back with round to
//! nearest, ties to even. Results saturate at the largest and smallest
//! positive magnitudes instead of overflowing to NaR or underflowing to zero.
//!
//! ```
//! use posit8_engine::Posit8;
//!
//! let a = Posit8::from(1.5_f64);
//! let b = Posit8::from(1.5_f64);
//! assert_eq!((a * b).to_bits(), 0x62);
//! assert_eq!(f64::from(a * b), 2.25);
//! ```

pub mod error;
pub mod matrix;
pub mod number_representations;

pub use error::{PositError, Result};
pub use number_representations::core::{AIFloat, MlScalar};
pub use number_representations::posit::{DecodedPosit8, Posit8};

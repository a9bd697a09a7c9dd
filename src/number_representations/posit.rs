pub mod arithmetic;
pub mod bits;
pub mod core;
pub mod posit8;
pub mod regime;

pub use self::arithmetic::{add, div, mul, sub};
pub use self::core::DecodedPosit8;
pub use self::posit8::Posit8;

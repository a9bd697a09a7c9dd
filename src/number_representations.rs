pub mod core;
pub mod float;
pub mod posit;

use std::{
    fmt::{Debug, Display},
    ops::{AddAssign, Neg, SubAssign},
};

use ndarray::{LinalgScalar, ScalarOperand};
use num_traits::{Num, NumCast};

/// Element type accepted by the matrix dispatcher.
pub trait MlScalar:
    LinalgScalar
    + ScalarOperand
    + Num
    + NumCast
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + Display
    + Debug
    + AIFloat
    + PartialOrd
{
}

pub trait AIFloat {
    /// Logistic activation. Posit types are free to approximate it.
    fn sigmoid(self) -> Self;
    fn max(self, other: Self) -> Self;
    fn min(self, other: Self) -> Self;
}

//! Dense matrix kernels over any [`MlScalar`].
//!
//! `matmul` accumulates every output cell left to right over the inner
//! dimension. Posit addition is not associative, so the order is part of the
//! result and is never handed to a BLAS backend.

use ndarray::{Array2, ArrayView2, Zip};
use tracing::{debug, warn};

use crate::{
    error::{PositError, Result},
    number_representations::{
        core::{AIFloat, MlScalar},
        posit::posit8::Posit8,
    },
};

/// Quantizes a float matrix element by element.
pub fn encode(values: &ArrayView2<f64>) -> Array2<Posit8> {
    values.mapv(Posit8::from)
}

/// Expands a posit matrix back to floats. NaR cells become infinity.
pub fn decode(values: &ArrayView2<Posit8>) -> Array2<f64> {
    values.mapv(f64::from)
}

/// Multiplies `a` (rows x inner) by `b` (inner x cols).
pub fn matmul<T: MlScalar>(a: &ArrayView2<T>, b: &ArrayView2<T>) -> Result<Array2<T>> {
    let (rows, inner) = a.dim();
    let (b_rows, cols) = b.dim();
    if inner != b_rows {
        warn!(left = ?a.dim(), right = ?b.dim(), "matmul shape mismatch");
        return Err(PositError::ShapeMismatch {
            left: a.dim(),
            right: b.dim(),
        });
    }

    debug!(
        rows,
        inner,
        cols,
        ops = operation_count(rows, inner, cols),
        "matmul"
    );

    let mut out = Array2::<T>::zeros((rows, cols));
    Zip::indexed(&mut out).for_each(|(i, j), cell| {
        *cell = a
            .row(i)
            .iter()
            .zip(b.column(j).iter())
            .fold(T::zero(), |acc, (&x, &y)| acc + x * y);
    });
    Ok(out)
}

pub fn sigmoid<T: MlScalar>(values: &ArrayView2<T>) -> Array2<T> {
    values.mapv(AIFloat::sigmoid)
}

/// Multiplications plus additions performed by [`matmul`] for these shapes.
pub fn operation_count(rows: usize, inner: usize, cols: usize) -> usize {
    2 * rows * inner * cols
}

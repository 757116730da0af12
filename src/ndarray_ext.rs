//! Conversions between [`NdArray`] and the `ndarray` crate.
//!
//! Enabled with the `ndarray` cargo feature.
//!
//! ```rust
//! # #[cfg(feature = "ndarray")] {
//! use ndarray::array;
//! use numeric_json::NdArray;
//!
//! let a = NdArray::from(array![[1i64, 2], [3, 4]]);
//! assert_eq!(a.shape(), &[2, 2]);
//!
//! let back: ndarray::ArrayD<i64> = (&a).try_into().unwrap();
//! assert_eq!(back.shape(), &[2, 2]);
//! # }
//! ```

use crate::{ArrayData, Error, NdArray, Result};
use ndarray::{Array, ArrayD, Dimension, IxDyn};

impl<D: Dimension> From<Array<i64, D>> for NdArray {
    fn from(array: Array<i64, D>) -> Self {
        let shape = array.shape().to_vec();
        let data: Vec<i64> = array.iter().copied().collect();
        NdArray::from_parts(shape, ArrayData::Int(data))
    }
}

impl<D: Dimension> From<Array<f64, D>> for NdArray {
    fn from(array: Array<f64, D>) -> Self {
        let shape = array.shape().to_vec();
        let data: Vec<f64> = array.iter().copied().collect();
        NdArray::from_parts(shape, ArrayData::Float(data))
    }
}

impl TryFrom<&NdArray> for ArrayD<i64> {
    type Error = Error;

    /// Fails for float arrays; integers are never produced by truncation.
    fn try_from(array: &NdArray) -> Result<Self> {
        match array.data() {
            ArrayData::Int(values) => {
                ArrayD::from_shape_vec(IxDyn(array.shape()), values.clone()).map_err(Error::shape)
            }
            ArrayData::Float(_) => Err(Error::custom("cannot convert a float64 array to i64")),
        }
    }
}

impl TryFrom<&NdArray> for ArrayD<f64> {
    type Error = Error;

    fn try_from(array: &NdArray) -> Result<Self> {
        let values: Vec<f64> = array.iter().map(|s| s.as_f64()).collect();
        ArrayD::from_shape_vec(IxDyn(array.shape()), values).map_err(Error::shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_from_ndarray_keeps_row_major_order() {
        let source = array![[1.0f64, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let a = NdArray::from(source.reversed_axes());
        assert_eq!(a.shape(), &[3, 2]);
        let flat: Vec<f64> = a.iter().map(|s| s.as_f64()).collect();
        assert_eq!(flat, vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn test_float_to_int_fails() {
        let a = NdArray::from_vec(vec![1.5f64]);
        assert!(ArrayD::<i64>::try_from(&a).is_err());
        assert!(ArrayD::<f64>::try_from(&a).is_ok());
    }
}

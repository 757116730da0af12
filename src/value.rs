//! Numeric value kinds and the dynamic [`Value`] tree.
//!
//! ## Core Types
//!
//! - [`Scalar`]: an integer or floating-point number
//! - [`NdArray`]: a rectangular, row-major array of scalars with an arbitrary
//!   number of dimensions
//! - [`IntRange`]: a half-open, unit-step integer interval
//! - [`Value`]: any JSON value, plus the two envelope kinds above
//!
//! ## Usage Patterns
//!
//! ### Building arrays
//!
//! ```rust
//! use numeric_json::{NdArray, Scalar};
//!
//! let grid = NdArray::new(vec![2, 2], vec![1i64, 2, 3, 4]).unwrap();
//! assert_eq!(grid.shape(), &[2, 2]);
//! assert_eq!(grid.get(&[1, 0]), Some(Scalar::Int(3)));
//! ```
//!
//! ### Round-tripping through JSON
//!
//! ```rust
//! use numeric_json::{from_str, to_string, IntRange, Value};
//!
//! let json = to_string(&IntRange::new(0, 5)).unwrap();
//! assert_eq!(json, r#"{"_kind_":"range","_value_":[0,4]}"#);
//!
//! let value: Value = from_str(&json).unwrap();
//! assert_eq!(value, Value::Range(IntRange::new(0, 5)));
//! ```
//!
//! ### Equality
//!
//! Scalars compare numerically, so `Scalar::Int(2) == Scalar::Float(2.0)`.
//! Arrays compare by shape and element values; their [`DType`] is not part of
//! equality, since the integer/float distinction of an empty or mixed array
//! does not survive the wire format.

use crate::envelope::{self, Kind, KIND_KEY, VALUE_KEY};
use crate::{Error, Map, Result};
use serde::de::Error as _;
use serde::ser::{Error as _, SerializeSeq, SerializeStruct};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// 2^63, the smallest float above every `i64`.
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// A single numeric value, either integer or floating-point.
///
/// # Examples
///
/// ```rust
/// use numeric_json::Scalar;
///
/// let int = Scalar::from(7u16);
/// let float = Scalar::from(0.5f32);
///
/// assert!(int.is_int());
/// assert_eq!(float.as_f64(), 0.5);
/// assert_eq!(Scalar::Int(2), Scalar::Float(2.0));
/// ```
///
/// Equality between an `Int` and a `Float` converts the integer to `f64`.
/// Integers beyond 2^53 round on the way, so `Int(2^53 + 1) == Float(2^53)`
/// holds and mixed-variant equality is not transitive. Decoding keeps JSON
/// integers as `Int`, so round trips compare like with like.
#[derive(Clone, Copy, Debug)]
pub enum Scalar {
    Int(i64),
    Float(f64),
}

impl Scalar {
    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Scalar::Int(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Scalar::Float(_))
    }

    /// Converts this scalar to an `i64` if it is an integer or a whole float
    /// within `i64` range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numeric_json::Scalar;
    ///
    /// assert_eq!(Scalar::Int(42).as_i64(), Some(42));
    /// assert_eq!(Scalar::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Scalar::Float(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Int(i) => Some(*i),
            Scalar::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < I64_UPPER_BOUND {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Scalar::Int(i) => *i as f64,
            Scalar::Float(f) => *f,
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (Scalar::Float(a), Scalar::Float(b)) => a == b,
            (Scalar::Int(i), Scalar::Float(f)) | (Scalar::Float(f), Scalar::Int(i)) => {
                *i as f64 == *f
            }
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(fl) => write!(f, "{}", fl),
        }
    }
}

macro_rules! scalar_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                fn from(value: $t) -> Self {
                    Scalar::Int(value as i64)
                }
            }
        )*
    };
}

scalar_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Scalar::Float(value as f64)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Scalar::Int(i) => serializer.serialize_i64(*i),
            Scalar::Float(f) => serializer.serialize_f64(*f),
        }
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => Ok(n),
            other => Err(D::Error::custom(format!(
                "expected a number, found {}",
                other.type_name()
            ))),
        }
    }
}

/// Element type of an [`NdArray`].
///
/// Only the integer/float distinction is kept; the bit width of the source
/// data is not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DType {
    Int64,
    Float64,
}

impl DType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            DType::Int64 => "int64",
            DType::Float64 => "float64",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat, homogeneous element storage of an [`NdArray`] in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub enum ArrayData {
    Int(Vec<i64>),
    Float(Vec<f64>),
}

impl ArrayData {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            ArrayData::Int(v) => v.len(),
            ArrayData::Float(v) => v.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub const fn dtype(&self) -> DType {
        match self {
            ArrayData::Int(_) => DType::Int64,
            ArrayData::Float(_) => DType::Float64,
        }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Scalar> {
        match self {
            ArrayData::Int(v) => v.get(index).map(|i| Scalar::Int(*i)),
            ArrayData::Float(v) => v.get(index).map(|f| Scalar::Float(*f)),
        }
    }

    /// Builds storage from scalars, promoting to floats if any element is one.
    fn from_scalars(elements: Vec<Scalar>) -> Self {
        if elements.iter().all(Scalar::is_int) {
            ArrayData::Int(
                elements
                    .iter()
                    .map(|s| match s {
                        Scalar::Int(i) => *i,
                        Scalar::Float(f) => *f as i64,
                    })
                    .collect(),
            )
        } else {
            ArrayData::Float(elements.iter().map(Scalar::as_f64).collect())
        }
    }
}

impl From<Vec<i64>> for ArrayData {
    fn from(value: Vec<i64>) -> Self {
        ArrayData::Int(value)
    }
}

impl From<Vec<i32>> for ArrayData {
    fn from(value: Vec<i32>) -> Self {
        ArrayData::Int(value.into_iter().map(i64::from).collect())
    }
}

impl From<Vec<f64>> for ArrayData {
    fn from(value: Vec<f64>) -> Self {
        ArrayData::Float(value)
    }
}

impl From<Vec<f32>> for ArrayData {
    fn from(value: Vec<f32>) -> Self {
        ArrayData::Float(value.into_iter().map(f64::from).collect())
    }
}

/// A rectangular numeric array of any rank, stored row-major.
///
/// A rank-0 array (empty shape) holds exactly one element. Any dimension may
/// be zero, in which case the array holds no elements.
///
/// On the wire an array is an `ndarray` envelope whose payload is the nested
/// JSON array of its elements; see [`envelope`](crate::envelope).
///
/// # Examples
///
/// ```rust
/// use numeric_json::{DType, NdArray};
///
/// let v = NdArray::from_vec(vec![0.5f64, 1.5]);
/// assert_eq!(v.shape(), &[2]);
/// assert_eq!(v.dtype(), DType::Float64);
///
/// assert!(NdArray::new(vec![2, 3], vec![1i64, 2, 3]).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct NdArray {
    shape: Vec<usize>,
    data: ArrayData,
}

impl NdArray {
    /// Creates an array, checking that the shape covers exactly the data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Shape`] when the product of `shape` differs from the
    /// number of elements or overflows `usize`.
    pub fn new(shape: Vec<usize>, data: impl Into<ArrayData>) -> Result<Self> {
        let data = data.into();
        let expected = element_count(&shape)
            .ok_or_else(|| Error::shape(format!("shape {:?} overflows usize", shape)))?;
        if expected != data.len() {
            return Err(Error::shape(format!(
                "shape {:?} needs {} elements, found {}",
                shape,
                expected,
                data.len()
            )));
        }
        Ok(NdArray { shape, data })
    }

    /// Shape and data whose sizes are known to agree.
    #[cfg(feature = "ndarray")]
    pub(crate) fn from_parts(shape: Vec<usize>, data: ArrayData) -> Self {
        debug_assert_eq!(element_count(&shape), Some(data.len()));
        NdArray { shape, data }
    }

    /// Creates a one-dimensional array.
    #[must_use]
    pub fn from_vec(data: impl Into<ArrayData>) -> Self {
        let data = data.into();
        NdArray {
            shape: vec![data.len()],
            data,
        }
    }

    /// Creates a rank-0 array holding a single scalar.
    #[must_use]
    pub fn from_scalar(value: impl Into<Scalar>) -> Self {
        let data = match value.into() {
            Scalar::Int(i) => ArrayData::Int(vec![i]),
            Scalar::Float(f) => ArrayData::Float(vec![f]),
        };
        NdArray {
            shape: Vec::new(),
            data,
        }
    }

    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[must_use]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub const fn dtype(&self) -> DType {
        self.data.dtype()
    }

    #[must_use]
    pub fn data(&self) -> &ArrayData {
        &self.data
    }

    #[must_use]
    pub fn into_data(self) -> ArrayData {
        self.data
    }

    /// Returns the element at a multi-dimensional index, or `None` when the
    /// index has the wrong rank or is out of bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numeric_json::{NdArray, Scalar};
    ///
    /// let a = NdArray::new(vec![2, 3], vec![0i64, 1, 2, 3, 4, 5]).unwrap();
    /// assert_eq!(a.get(&[1, 2]), Some(Scalar::Int(5)));
    /// assert_eq!(a.get(&[2, 0]), None);
    /// assert_eq!(a.get(&[1]), None);
    /// ```
    #[must_use]
    pub fn get(&self, index: &[usize]) -> Option<Scalar> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut flat = 0usize;
        for (&i, &dim) in index.iter().zip(&self.shape) {
            if i >= dim {
                return None;
            }
            flat = flat * dim + i;
        }
        self.data.get(flat)
    }

    /// Iterates over the elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Scalar> + '_ {
        (0..self.data.len()).filter_map(move |i| self.data.get(i))
    }

    /// Returns the same elements under a new shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Shape`] when the element counts differ.
    pub fn reshape(self, shape: Vec<usize>) -> Result<Self> {
        NdArray::new(shape, self.data)
    }

    /// Materializes the elements as nested arrays, one nesting level per
    /// dimension. A rank-0 array yields a bare number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numeric_json::{value, NdArray};
    ///
    /// let a = NdArray::new(vec![2, 2], vec![1i64, 2, 3, 4]).unwrap();
    /// assert_eq!(a.to_nested(), value!([[1, 2], [3, 4]]));
    /// ```
    #[must_use]
    pub fn to_nested(&self) -> Value {
        nested_value(&self.shape, &self.data, 0)
    }

    /// Reconstructs an array from nested arrays of numbers.
    ///
    /// The shape is read from the first element at each depth; every other
    /// element must agree with it. Integers are kept as integers unless any
    /// element is a float, in which case all elements become floats.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedEnvelope`] for ragged nesting or any element
    /// that is not a number.
    pub fn from_nested(value: &Value) -> Result<Self> {
        let shape = infer_shape(value);
        let capacity = element_count(&shape).unwrap_or(0);
        let mut elements = Vec::with_capacity(capacity);
        collect_elements(value, &shape, &mut elements)?;
        Ok(NdArray {
            shape,
            data: ArrayData::from_scalars(elements),
        })
    }
}

impl PartialEq for NdArray {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.iter().eq(other.iter())
    }
}

fn element_count(shape: &[usize]) -> Option<usize> {
    shape.iter().try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
}

fn stride(shape: &[usize]) -> usize {
    shape.iter().product()
}

fn nested_value(shape: &[usize], data: &ArrayData, offset: usize) -> Value {
    match shape.split_first() {
        None => data.get(offset).map(Value::Number).unwrap_or(Value::Null),
        Some((&len, rest)) => {
            let step = stride(rest);
            Value::Array(
                (0..len)
                    .map(|i| nested_value(rest, data, offset + i * step))
                    .collect(),
            )
        }
    }
}

fn infer_shape(mut value: &Value) -> Vec<usize> {
    let mut shape = Vec::new();
    while let Value::Array(items) = value {
        shape.push(items.len());
        match items.first() {
            Some(first) => value = first,
            None => break,
        }
    }
    shape
}

fn collect_elements(value: &Value, shape: &[usize], out: &mut Vec<Scalar>) -> Result<()> {
    let kind = Kind::NdArray.as_str();
    match (shape.split_first(), value) {
        (None, Value::Number(n)) => {
            out.push(*n);
            Ok(())
        }
        (Some((&len, rest)), Value::Array(items)) => {
            if items.len() != len {
                return Err(Error::malformed(
                    kind,
                    format!(
                        "ragged payload: expected {} elements, found {}",
                        len,
                        items.len()
                    ),
                ));
            }
            for item in items {
                collect_elements(item, rest, out)?;
            }
            Ok(())
        }
        (None, Value::Array(_)) | (Some(_), Value::Number(_)) => Err(Error::malformed(
            kind,
            "ragged payload: nesting depth differs between elements",
        )),
        (_, other) => Err(Error::malformed(
            kind,
            format!("expected a number, found {}", other.type_name()),
        )),
    }
}

/// Nested row-major view used to write an array payload without building
/// intermediate values.
struct Nested<'a> {
    shape: &'a [usize],
    data: &'a ArrayData,
    offset: usize,
}

impl Serialize for Nested<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.shape.split_first() {
            None => match self.data.get(self.offset) {
                Some(scalar) => scalar.serialize(serializer),
                None => Err(S::Error::custom("array data is shorter than its shape")),
            },
            Some((&len, rest)) => {
                let step = stride(rest);
                let mut seq = serializer.serialize_seq(Some(len))?;
                for i in 0..len {
                    seq.serialize_element(&Nested {
                        shape: rest,
                        data: self.data,
                        offset: self.offset + i * step,
                    })?;
                }
                seq.end()
            }
        }
    }
}

impl Serialize for NdArray {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut envelope = serializer.serialize_struct(Kind::NdArray.type_name(), 2)?;
        envelope.serialize_field(KIND_KEY, Kind::NdArray.as_str())?;
        envelope.serialize_field(
            VALUE_KEY,
            &Nested {
                shape: &self.shape,
                data: &self.data,
                offset: 0,
            },
        )?;
        envelope.end()
    }
}

impl<'de> Deserialize<'de> for NdArray {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::NdArray(array) => Ok(array),
            other => Err(D::Error::custom(format!(
                "expected an ndarray envelope, found {}",
                other.type_name()
            ))),
        }
    }
}

/// A half-open integer interval `start..stop` with unit step.
///
/// On the wire a range is a `range` envelope carrying its first and last
/// element, `[start, stop - 1]`. Decoding adds one back to the last element.
/// Empty and reversed ranges (`stop <= start`) round-trip unchanged.
///
/// # Examples
///
/// ```rust
/// use numeric_json::IntRange;
///
/// let r = IntRange::from(2..6);
/// assert_eq!(r.len(), 4);
/// assert!(r.contains(5));
/// assert_eq!(r.iter().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IntRange {
    pub start: i64,
    pub stop: i64,
}

impl IntRange {
    #[must_use]
    pub const fn new(start: i64, stop: i64) -> Self {
        IntRange { start, stop }
    }

    /// Number of integers in the range; zero when `stop <= start`.
    #[must_use]
    pub fn len(&self) -> u64 {
        if self.stop > self.start {
            self.stop.abs_diff(self.start)
        } else {
            0
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stop <= self.start
    }

    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        self.start <= value && value < self.stop
    }

    #[must_use]
    pub fn iter(&self) -> Range<i64> {
        self.start..self.stop
    }

    /// Returns the `[first, last]` pair written on the wire.
    ///
    /// # Errors
    ///
    /// A range ending at `i64::MIN` has no representable last element and
    /// yields [`Error::UnsupportedType`].
    pub fn endpoints(&self) -> Result<(i64, i64)> {
        let last = self.stop.checked_sub(1).ok_or_else(|| {
            Error::unsupported_type("range ending at i64::MIN has no last element")
        })?;
        Ok((self.start, last))
    }

    /// Reconstructs a range from a `[first, last]` payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedEnvelope`] unless the payload is an array of
    /// exactly two integers whose last element is below `i64::MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numeric_json::{value, IntRange};
    ///
    /// let r = IntRange::from_payload(&value!([0, 4])).unwrap();
    /// assert_eq!(r, IntRange::new(0, 5));
    /// assert!(IntRange::from_payload(&value!([0, 1, 2])).is_err());
    /// ```
    pub fn from_payload(payload: &Value) -> Result<Self> {
        let kind = Kind::Range.as_str();
        let Value::Array(items) = payload else {
            return Err(Error::malformed(
                kind,
                format!("expected [first, last], found {}", payload.type_name()),
            ));
        };
        let [first, last] = items.as_slice() else {
            return Err(Error::malformed(
                kind,
                format!("expected 2 elements, found {}", items.len()),
            ));
        };
        let (Some(first), Some(last)) = (as_int(first), as_int(last)) else {
            return Err(Error::malformed(kind, "endpoints must be integers"));
        };
        let stop = last
            .checked_add(1)
            .ok_or_else(|| Error::malformed(kind, "last element overflows i64"))?;
        Ok(IntRange::new(first, stop))
    }
}

fn as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(Scalar::Int(i)) => Some(*i),
        _ => None,
    }
}

impl From<Range<i64>> for IntRange {
    fn from(range: Range<i64>) -> Self {
        IntRange::new(range.start, range.end)
    }
}

impl From<IntRange> for Range<i64> {
    fn from(range: IntRange) -> Self {
        range.start..range.stop
    }
}

impl IntoIterator for IntRange {
    type Item = i64;
    type IntoIter = Range<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for IntRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.stop)
    }
}

impl Serialize for IntRange {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let endpoints = self.endpoints().map_err(S::Error::custom)?;
        let mut envelope = serializer.serialize_struct(Kind::Range.type_name(), 2)?;
        envelope.serialize_field(KIND_KEY, Kind::Range.as_str())?;
        envelope.serialize_field(VALUE_KEY, &[endpoints.0, endpoints.1])?;
        envelope.end()
    }
}

impl<'de> Deserialize<'de> for IntRange {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Range(range) => Ok(range),
            other => Err(D::Error::custom(format!(
                "expected a range envelope, found {}",
                other.type_name()
            ))),
        }
    }
}

/// Any JSON value, with envelopes already reconstructed.
///
/// # Examples
///
/// ```rust
/// use numeric_json::{IntRange, Value};
///
/// let value: Value = r#"{"span": {"_kind_": "range", "_value_": [3, 7]}}"#.parse().unwrap();
/// let span = value.as_object().and_then(|o| o.get("span"));
/// assert_eq!(span, Some(&Value::Range(IntRange::new(3, 8))));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Scalar),
    String(String),
    Array(Vec<Value>),
    Object(Map),
    NdArray(NdArray),
    Range(IntRange),
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_ndarray(&self) -> bool {
        matches!(self, Value::NdArray(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_range(&self) -> bool {
        matches!(self, Value::Range(_))
    }

    /// Short lowercase name of the variant, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::NdArray(_) => "ndarray",
            Value::Range(_) => "range",
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer or a whole-number float, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_ndarray(&self) -> Option<&NdArray> {
        match self {
            Value::NdArray(a) => Some(a),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_range(&self) -> Option<IntRange> {
        match self {
            Value::Range(r) => Some(*r),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => write!(f, "{:?}", self),
        }
    }
}

impl FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::de::decode_str(s)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Value::NdArray(array) => array.serialize(serializer),
            Value::Range(range) => range.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json = serde_json::Value::deserialize(deserializer)?;
        crate::de::decode(json).map_err(D::Error::custom)
    }
}

impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| Error::custom(format!("cannot convert {} to i64", n))),
            other => Err(Error::custom(format!(
                "expected integer, found {}",
                other.type_name()
            ))),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Number(n) => Ok(n.as_f64()),
            other => Err(Error::custom(format!(
                "expected number, found {}",
                other.type_name()
            ))),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(Error::custom(format!(
                "expected bool, found {}",
                other.type_name()
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(Error::custom(format!(
                "expected string, found {}",
                other.type_name()
            ))),
        }
    }
}

impl TryFrom<Value> for NdArray {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::NdArray(a) => Ok(a),
            other => Err(Error::custom(format!(
                "expected ndarray, found {}",
                other.type_name()
            ))),
        }
    }
}

impl TryFrom<Value> for IntRange {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Range(r) => Ok(r),
            other => Err(Error::custom(format!(
                "expected range, found {}",
                other.type_name()
            ))),
        }
    }
}

macro_rules! value_from_scalar {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Number(Scalar::from(value))
                }
            }
        )*
    };
}

value_from_scalar!(i8, i16, i32, i64, u8, u16, u32, f32, f64);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Object(value)
    }
}

impl From<NdArray> for Value {
    fn from(value: NdArray) -> Self {
        Value::NdArray(value)
    }
}

impl From<IntRange> for Value {
    fn from(value: IntRange) -> Self {
        Value::Range(value)
    }
}

impl From<Range<i64>> for Value {
    fn from(value: Range<i64>) -> Self {
        Value::Range(IntRange::from(value))
    }
}

/// Envelope form of a value, as written on the wire.
pub(crate) fn envelope_of(kind: Kind, payload: Value) -> Value {
    Value::Object(envelope::wrap(kind, payload))
}

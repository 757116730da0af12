//! # numeric_json
//!
//! A serde JSON codec that carries numeric arrays and integer ranges through
//! plain JSON.
//!
//! JSON knows numbers, strings, booleans, null, arrays and objects. This
//! crate adds two richer kinds on top, each written as a tagged object (an
//! *envelope*) that any JSON tool can still read:
//!
//! | Rust type | Wire format |
//! |-----------|-------------|
//! | [`NdArray`] | `{"_kind_": "ndarray", "_value_": [[1, 2], [3, 4]]}` |
//! | [`IntRange`] | `{"_kind_": "range", "_value_": [first, last]}` |
//! | [`Scalar`] | a plain JSON number |
//!
//! Everything else is ordinary JSON and passes through untouched.
//!
//! ## Quick Start
//!
//! ```rust
//! use numeric_json::{from_str, to_string, IntRange, NdArray, Value};
//!
//! let grid = NdArray::new(vec![2, 2], vec![1i64, 2, 3, 4]).unwrap();
//! let json = to_string(&grid).unwrap();
//! assert_eq!(json, r#"{"_kind_":"ndarray","_value_":[[1,2],[3,4]]}"#);
//!
//! let back: Value = from_str(&json).unwrap();
//! assert_eq!(back, Value::NdArray(grid));
//! ```
//!
//! ### Inside your own types
//!
//! [`NdArray`] and [`IntRange`] implement `Serialize` and `Deserialize`, so
//! they can be fields of derived structs:
//!
//! ```rust
//! use numeric_json::{from_str, to_string, IntRange, NdArray};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct Layer {
//!     name: String,
//!     weights: NdArray,
//!     rows: IntRange,
//! }
//!
//! let layer = Layer {
//!     name: "dense".to_string(),
//!     weights: NdArray::from_vec(vec![0.5f64, -0.5]),
//!     rows: IntRange::new(0, 2),
//! };
//! let back: Layer = from_str(&to_string(&layer).unwrap()).unwrap();
//! assert_eq!(back, layer);
//! ```
//!
//! ### Dynamic values
//!
//! ```rust
//! use numeric_json::Value;
//!
//! let v: Value = r#"{"ids": {"_kind_": "range", "_value_": [1, 3]}, "_kind_": "note"}"#
//!     .parse()
//!     .unwrap();
//! // An unrecognized `_kind_` leaves the object as it is.
//! assert!(v.is_object());
//! ```
//!
//! ## Known limitations
//!
//! - Array element bit width is not preserved: arrays read back as `i64` or
//!   `f64` elements.
//! - Ranges are unit-step only.
//! - NaN and infinities are rejected by the encoder.
//!
//! See [`envelope`] for the full wire format.

#[macro_use]
pub mod macros;

pub mod de;
pub mod envelope;
pub mod error;
pub mod file;
pub mod map;
#[cfg(feature = "ndarray")]
pub mod ndarray_ext;
pub mod options;
pub mod ser;
pub mod value;

pub use de::{decode, decode_object, decode_reader, decode_slice, decode_str};
pub use error::{Error, Result};
pub use map::Map;
pub use options::{CodecOptions, Indent};
pub use ser::{encode, ValueSerializer};
pub use value::{ArrayData, DType, IntRange, NdArray, Scalar, Value};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io;

/// Serialize any `T: Serialize` to a compact JSON string.
///
/// # Examples
///
/// ```rust
/// use numeric_json::{to_string, IntRange};
///
/// assert_eq!(to_string(&IntRange::new(0, 5)).unwrap(), r#"{"_kind_":"range","_value_":[0,4]}"#);
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] for values with no JSON form and
/// [`Error::NonFiniteFloat`] for NaN or infinite numbers.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, CodecOptions::default())
}

/// Serialize any `T: Serialize` to a JSON string indented with one tab per
/// nesting level.
///
/// # Errors
///
/// Same as [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, CodecOptions::pretty())
}

/// Serialize any `T: Serialize` to a JSON string with custom options.
///
/// # Examples
///
/// ```rust
/// use numeric_json::{to_string_with_options, CodecOptions, Indent};
///
/// let options = CodecOptions::pretty().with_indent(Indent::Spaces(1));
/// assert_eq!(to_string_with_options(&[7], options).unwrap(), "[\n 7\n]");
/// ```
///
/// # Errors
///
/// Same as [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: CodecOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let bytes = to_vec_with_options(value, options)?;
    String::from_utf8(bytes).map_err(Error::custom)
}

/// Serialize any `T: Serialize` to compact JSON bytes.
///
/// # Errors
///
/// Same as [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    to_vec_with_options(value, CodecOptions::default())
}

/// Serialize any `T: Serialize` to JSON bytes with custom options.
///
/// # Errors
///
/// Same as [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec_with_options<T>(value: &T, options: CodecOptions) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    let mut buffer = Vec::with_capacity(128);
    to_writer_with_options(&mut buffer, value, options)?;
    Ok(buffer)
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// [`NdArray`] and [`IntRange`] values come back as [`Value::NdArray`] and
/// [`Value::Range`]. Any other map or struct stays a [`Value::Object`], even
/// when it carries a `_kind_` key.
///
/// # Examples
///
/// ```rust
/// use numeric_json::{to_value, Value};
/// use std::collections::HashMap;
///
/// let value = to_value(&vec![1, 2]).unwrap();
/// assert!(value.is_array());
///
/// let mut bad = HashMap::new();
/// bad.insert(vec![1u8], 0);
/// assert!(to_value(&bad).is_err());
/// ```
///
/// # Errors
///
/// Same as [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serialize any `T: Serialize` as compact JSON into a writer.
///
/// # Errors
///
/// Returns an encoding error as [`to_string`] does, or [`Error::Io`] if
/// writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, CodecOptions::default())
}

/// Serialize any `T: Serialize` as JSON into a writer with custom options.
///
/// The value is fully encoded before anything is written, so an encoding
/// error leaves the writer untouched.
///
/// # Errors
///
/// Same as [`to_writer`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(writer: W, value: &T, options: CodecOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    ser::write_value(writer, &value, &options)
}

/// Deserialize an instance of type `T` from JSON text.
///
/// Use `T = Value` for a dynamic tree. Envelope errors reported this way
/// arrive as [`Error::Custom`]; [`decode_str`] reports them as
/// [`Error::MalformedEnvelope`].
///
/// # Examples
///
/// ```rust
/// use numeric_json::{from_str, IntRange};
///
/// let r: IntRange = from_str(r#"{"_kind_": "range", "_value_": [0, 4]}"#).unwrap();
/// assert_eq!(r, IntRange::new(0, 5));
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] for invalid JSON, or an error if the data does
/// not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    serde_json::from_str(s).map_err(Error::from)
}

/// Deserialize an instance of type `T` from JSON bytes.
///
/// # Errors
///
/// Same as [`from_str`]; invalid UTF-8 is a syntax error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    serde_json::from_slice(v).map_err(Error::from)
}

/// Deserialize an instance of type `T` from a reader of JSON text.
///
/// # Errors
///
/// Same as [`from_str`], plus [`Error::Io`] if reading fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    serde_json::from_reader(reader).map_err(Error::from)
}

/// Interpret a [`Value`] as an instance of type `T`.
///
/// # Examples
///
/// ```rust
/// use numeric_json::{from_value, value, NdArray};
///
/// let a: NdArray = from_value(value!({"_kind_": "ndarray", "_value_": [1, 2]})).unwrap();
/// assert_eq!(a, NdArray::from_vec(vec![1i64, 2]));
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be encoded or does not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    let json = encode(&value)?;
    serde_json::from_value(json).map_err(Error::from)
}

//! Envelope wire format.
//!
//! JSON has no array-with-shape or integer-range type, so those values travel
//! inside a tagged object, the *envelope*:
//!
//! ```text
//! {"_kind_": "ndarray", "_value_": [[1, 2], [3, 4]]}
//! {"_kind_": "range",   "_value_": [0, 4]}
//! ```
//!
//! # Discriminator
//!
//! The `_kind_` field names the reconstruction rule. Two tags are recognized:
//!
//! | Tag | Payload (`_value_`) | Decodes to |
//! |-----|---------------------|------------|
//! | `ndarray` | nested arrays of numbers, or a bare number for rank 0 | [`NdArray`](crate::NdArray) |
//! | `range` | `[first, last]`, two integers | [`IntRange`](crate::IntRange) `first..last + 1` |
//!
//! Objects without `_kind_`, or whose `_kind_` is any other value, are plain
//! objects and are returned unchanged. Extra fields on a recognized envelope
//! are ignored.
//!
//! # Scalars
//!
//! Integer and float scalars need no envelope; they are written as plain JSON
//! numbers and read back as [`Value::Number`](crate::Value::Number).
//!
//! # Known limitations
//!
//! - Element bit width is not carried: an array of `i32` reads back as `i64`
//!   elements, and an array with any float element reads back as `f64`.
//! - Ranges are unit-step only. A stepped range has no representation.
//! - NaN and the infinities have no JSON number form and are rejected by the
//!   encoder.

use crate::{Map, Value};
use std::fmt;

/// Name of the discriminator field.
pub const KIND_KEY: &str = "_kind_";

/// Name of the payload field.
pub const VALUE_KEY: &str = "_value_";

/// The envelope kinds this codec knows how to reconstruct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    NdArray,
    Range,
}

impl Kind {
    /// Returns the discriminator tag written for this kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numeric_json::envelope::Kind;
    ///
    /// assert_eq!(Kind::NdArray.as_str(), "ndarray");
    /// assert_eq!(Kind::Range.as_str(), "range");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Kind::NdArray => "ndarray",
            Kind::Range => "range",
        }
    }

    /// Looks up a discriminator tag. Unknown tags yield `None`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "ndarray" => Some(Kind::NdArray),
            "range" => Some(Kind::Range),
            _ => None,
        }
    }

    /// Struct name the typed value passes to `serialize_struct`.
    pub(crate) const fn type_name(&self) -> &'static str {
        match self {
            Kind::NdArray => "NdArray",
            Kind::Range => "IntRange",
        }
    }

    pub(crate) fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "NdArray" => Some(Kind::NdArray),
            "IntRange" => Some(Kind::Range),
            _ => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds an envelope object around an already-encoded payload.
///
/// # Examples
///
/// ```rust
/// use numeric_json::envelope::{wrap, Kind, KIND_KEY};
/// use numeric_json::Value;
///
/// let map = wrap(Kind::Range, Value::Array(vec![Value::from(0), Value::from(4)]));
/// assert_eq!(map.get(KIND_KEY).and_then(|v| v.as_str()), Some("range"));
/// ```
#[must_use]
pub fn wrap(kind: Kind, payload: Value) -> Map {
    let mut map = Map::with_capacity(2);
    map.insert(KIND_KEY.to_string(), Value::String(kind.as_str().to_string()));
    map.insert(VALUE_KEY.to_string(), payload);
    map
}

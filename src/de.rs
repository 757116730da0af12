//! Decoding.
//!
//! JSON text is first parsed into a generic `serde_json::Value`, then
//! [`decode`] walks that tree bottom-up: children are converted before their
//! parent, and every object is handed to [`decode_object`], which applies the
//! envelope rule:
//!
//! - no `_kind_` field: the object is returned unchanged
//! - `_kind_` is `"ndarray"` or `"range"`: the `_value_` payload is
//!   reconstructed, or a [`Error::MalformedEnvelope`] is returned
//! - any other `_kind_`: the object is returned unchanged, fields included
//!
//! ## Usage
//!
//! ```rust
//! use numeric_json::{decode_str, NdArray, Value};
//!
//! let value = decode_str(r#"{"_kind_": "ndarray", "_value_": [[1, 2], [3, 4]]}"#).unwrap();
//! let expected = NdArray::new(vec![2, 2], vec![1i64, 2, 3, 4]).unwrap();
//! assert_eq!(value, Value::NdArray(expected));
//!
//! let other = decode_str(r#"{"_kind_": "foo", "_value_": 1}"#).unwrap();
//! assert!(other.is_object());
//! ```

use crate::envelope::{Kind, KIND_KEY, VALUE_KEY};
use crate::{Error, IntRange, Map, NdArray, Result, Scalar, Value};
use std::io;

/// Converts a parsed JSON tree into a [`Value`], reconstructing envelopes.
///
/// Integers that fit in `i64` stay integers; larger unsigned integers become
/// floats.
///
/// # Errors
///
/// Returns [`Error::MalformedEnvelope`] when a recognized envelope carries a
/// missing or unusable payload, anywhere in the tree.
pub fn decode(json: serde_json::Value) -> Result<Value> {
    use serde_json::Value as Json;

    Ok(match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(b),
        Json::Number(n) => Value::Number(scalar_of(&n)),
        Json::String(s) => Value::String(s),
        Json::Array(items) => Value::Array(items.into_iter().map(decode).collect::<Result<_>>()?),
        Json::Object(object) => {
            let mut map = Map::with_capacity(object.len());
            for (k, v) in object {
                map.insert(k, decode(v)?);
            }
            decode_object(map)?
        }
    })
}

/// Applies the envelope rule to a single object whose fields are already
/// decoded.
///
/// # Examples
///
/// ```rust
/// use numeric_json::{decode_object, IntRange, Map, Value};
///
/// let mut map = Map::new();
/// map.insert("_kind_".to_string(), Value::from("range"));
/// map.insert("_value_".to_string(), Value::Array(vec![Value::from(0), Value::from(4)]));
/// assert_eq!(decode_object(map).unwrap(), Value::Range(IntRange::new(0, 5)));
///
/// let mut plain = Map::new();
/// plain.insert("kind".to_string(), Value::from("range"));
/// assert!(decode_object(plain).unwrap().is_object());
/// ```
pub fn decode_object(map: Map) -> Result<Value> {
    let tag = match map.get(KIND_KEY) {
        None => return Ok(Value::Object(map)),
        Some(tag) => tag,
    };
    let Some(kind) = tag.as_str().and_then(Kind::from_tag) else {
        tracing::trace!(%tag, "unrecognized discriminator, keeping object");
        return Ok(Value::Object(map));
    };
    let payload = map.get(VALUE_KEY).ok_or_else(|| {
        Error::malformed(kind.as_str(), format!("missing `{}` field", VALUE_KEY))
    })?;
    match kind {
        Kind::NdArray => NdArray::from_nested(payload).map(Value::NdArray),
        Kind::Range => IntRange::from_payload(payload).map(Value::Range),
    }
}

/// Parses JSON text and decodes it.
///
/// # Errors
///
/// Returns [`Error::Syntax`] for invalid JSON and [`Error::MalformedEnvelope`]
/// for unusable envelopes.
pub fn decode_str(s: &str) -> Result<Value> {
    let json: serde_json::Value = serde_json::from_str(s)?;
    decode(json)
}

/// Parses JSON from a byte slice and decodes it.
pub fn decode_slice(v: &[u8]) -> Result<Value> {
    let json: serde_json::Value = serde_json::from_slice(v)?;
    decode(json)
}

/// Parses JSON from a reader and decodes it.
pub fn decode_reader<R: io::Read>(reader: R) -> Result<Value> {
    let json: serde_json::Value = serde_json::from_reader(reader)?;
    decode(json)
}

fn scalar_of(n: &serde_json::Number) -> Scalar {
    match n.as_i64() {
        Some(i) => Scalar::Int(i),
        None => Scalar::Float(n.as_f64().unwrap_or(f64::NAN)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_object_passes_through() {
        let value = decode(json!({"a": 1, "b": [true, null]})).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("a"), Some(&Value::from(1)));
        assert_eq!(
            obj.get("b"),
            Some(&Value::Array(vec![Value::Bool(true), Value::Null]))
        );
    }

    #[test]
    fn test_non_string_discriminator_passes_through() {
        let value = decode(json!({"_kind_": 7, "_value_": [0, 1]})).unwrap();
        assert!(value.is_object());
        assert_eq!(value.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_payload() {
        let err = decode(json!({"_kind_": "ndarray"})).unwrap_err();
        match err {
            Error::MalformedEnvelope { kind, msg } => {
                assert_eq!(kind, "ndarray");
                assert!(msg.contains("_value_"));
            }
            other => panic!("Expected malformed envelope, got {:?}", other),
        }
    }

    #[test]
    fn test_extra_fields_ignored() {
        let value = decode(json!({"_kind_": "range", "_value_": [1, 3], "note": "x"})).unwrap();
        assert_eq!(value, Value::Range(IntRange::new(1, 4)));
    }

    #[test]
    fn test_nested_envelopes_decode_bottom_up() {
        let value = decode(json!({
            "layers": [
                {"_kind_": "ndarray", "_value_": [1.5, 2.5]},
                {"_kind_": "range", "_value_": [0, 9]}
            ]
        }))
        .unwrap();
        let layers = value.as_object().unwrap().get("layers").unwrap();
        let layers = layers.as_array().unwrap();
        assert!(layers[0].is_ndarray());
        assert_eq!(layers[1], Value::Range(IntRange::new(0, 10)));
    }

    #[test]
    fn test_envelope_inside_ndarray_payload_is_malformed() {
        let err = decode(json!({
            "_kind_": "ndarray",
            "_value_": [{"_kind_": "ndarray", "_value_": [1]}]
        }))
        .unwrap_err();
        assert!(err.to_string().contains("found ndarray"));
    }

    #[test]
    fn test_large_unsigned_becomes_float() {
        let value = decode_str("18446744073709551615").unwrap();
        assert_eq!(value, Value::Number(Scalar::Float(u64::MAX as f64)));
    }

    #[test]
    fn test_decode_str_syntax_error() {
        assert!(matches!(
            decode_str("{\"a\": [1, 2}").unwrap_err(),
            Error::Syntax { .. }
        ));
    }

    #[test]
    fn test_decode_reader() {
        let input = br#"{"_kind_": "range", "_value_": [-2, 2]}"#;
        let value = decode_reader(&input[..]).unwrap();
        assert_eq!(value, Value::Range(IntRange::new(-2, 3)));
        assert_eq!(decode_slice(input).unwrap(), value);
    }
}

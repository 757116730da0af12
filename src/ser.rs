//! Encoding.
//!
//! Encoding happens in two steps:
//!
//! 1. [`ValueSerializer`] turns any `T: Serialize` into a [`Value`]. This is
//!    where unsupported shapes are rejected: non-string-like map keys, enum
//!    variants carrying data, and non-finite floats.
//! 2. The [`Value`] is written as JSON text, compact or pretty depending on
//!    [`CodecOptions`]. [`NdArray`](crate::NdArray) and
//!    [`IntRange`](crate::IntRange) are written as envelopes.
//!
//! [`encode`] performs the second step into a generic `serde_json::Value`
//! tree instead of text.
//!
//! ## Usage
//!
//! ```rust
//! use numeric_json::{to_string, to_string_pretty, NdArray};
//!
//! let a = NdArray::new(vec![2, 2], vec![1i64, 2, 3, 4]).unwrap();
//! assert_eq!(
//!     to_string(&a).unwrap(),
//!     r#"{"_kind_":"ndarray","_value_":[[1,2],[3,4]]}"#
//! );
//!
//! // Pretty output indents with one tab per level
//! let pretty = to_string_pretty(&vec![1, 2]).unwrap();
//! assert_eq!(pretty, "[\n\t1,\n\t2\n]");
//! ```

use crate::envelope::Kind;
use crate::value::envelope_of;
use crate::{CodecOptions, Error, Map, Result, Scalar, Value};
use serde::{ser, Serialize};
use serde_json::ser::PrettyFormatter;
use std::io;

/// Serializer that converts Rust values into a [`Value`] tree.
///
/// Serializing an [`NdArray`](crate::NdArray) or [`IntRange`](crate::IntRange)
/// yields [`Value::NdArray`] or [`Value::Range`] rather than the envelope
/// object. Every other map or struct stays an object, even one that carries
/// a `_kind_` key.
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeMap {
    map: Map,
    current_key: Option<String>,
    kind: Option<Kind>,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Number(Scalar::Int(v as i64)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Number(Scalar::Int(v as i64)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Number(Scalar::Int(v as i64)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(Scalar::Int(v)))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        i64::try_from(v)
            .map(|i| Value::Number(Scalar::Int(i)))
            .map_err(|_| Error::unsupported_type("i128 outside the i64 range"))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Number(Scalar::Int(v as i64)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Number(Scalar::Int(v as i64)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Number(Scalar::Int(v as i64)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        if v <= i64::MAX as u64 {
            Ok(Value::Number(Scalar::Int(v as i64)))
        } else {
            Ok(Value::Number(Scalar::Float(v as f64)))
        }
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        u64::try_from(v)
            .map_err(|_| Error::unsupported_type("u128 outside the u64 range"))
            .and_then(|u| ser::Serializer::serialize_u64(self, u))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        ser::Serializer::serialize_f64(self, v as f64)
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        if v.is_finite() {
            Ok(Value::Number(Scalar::Float(v)))
        } else {
            Err(Error::NonFiniteFloat(v))
        }
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        let vec = v
            .iter()
            .map(|&b| Value::Number(Scalar::Int(b as i64)))
            .collect();
        Ok(Value::Array(vec))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::UnsupportedType(format!(
            "newtype variant {}::{}",
            name, variant
        )))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeVec> {
        Err(Error::UnsupportedType(format!(
            "tuple variant {}::{}",
            name, variant
        )))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_struct(self, name: &'static str, len: usize) -> Result<SerializeMap> {
        let mut map = SerializeMap::with_capacity(len);
        map.kind = Kind::from_type_name(name);
        Ok(map)
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeMap> {
        Err(Error::UnsupportedType(format!(
            "struct variant {}::{}",
            name, variant
        )))
    }
}

impl SerializeVec {
    fn with_capacity(capacity: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
        }
    }
}

impl SerializeMap {
    fn with_capacity(capacity: usize) -> Self {
        SerializeMap {
            map: Map::with_capacity(capacity),
            current_key: None,
            kind: None,
        }
    }

    /// Only the envelopes written by the typed values are reconstructed.
    fn finish(self) -> Result<Value> {
        match self.kind {
            Some(_) => crate::de::decode_object(self.map),
            None => Ok(Value::Object(self.map)),
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

// Unreachable through serialize_tuple_variant, required by the trait.
impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(map_key(to_value(key)?)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        self.finish()
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        self.finish()
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        self.finish()
    }
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

/// Object keys must be strings; integers and booleans are written in their
/// decimal/literal form.
fn map_key(key: Value) -> Result<String> {
    match key {
        Value::String(s) => Ok(s),
        Value::Number(Scalar::Int(i)) => Ok(i.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(Error::UnsupportedType(format!(
            "map key must be a string, found {}",
            match other {
                Value::Number(_) => "float",
                _ => other.type_name(),
            }
        ))),
    }
}

/// Converts a [`Value`] into a generic JSON tree, writing envelopes for arrays
/// and ranges.
///
/// # Errors
///
/// Returns [`Error::NonFiniteFloat`] for NaN or infinite numbers (including
/// array elements) and [`Error::UnsupportedType`] for a range ending at
/// `i64::MIN`.
///
/// # Examples
///
/// ```rust
/// use numeric_json::{encode, IntRange, Value};
///
/// let json = encode(&Value::from(IntRange::new(0, 5))).unwrap();
/// assert_eq!(json, serde_json::json!({"_kind_": "range", "_value_": [0, 4]}));
/// ```
pub fn encode(value: &Value) -> Result<serde_json::Value> {
    use serde_json::Value as Json;

    Ok(match value {
        Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Number(Scalar::Int(i)) => Json::from(*i),
        Value::Number(Scalar::Float(f)) => serde_json::Number::from_f64(*f)
            .map(Json::Number)
            .ok_or(Error::NonFiniteFloat(*f))?,
        Value::String(s) => Json::String(s.clone()),
        Value::Array(items) => Json::Array(items.iter().map(encode).collect::<Result<_>>()?),
        Value::Object(map) => {
            let mut object = serde_json::Map::with_capacity(map.len());
            for (k, v) in map {
                object.insert(k.clone(), encode(v)?);
            }
            Json::Object(object)
        }
        Value::NdArray(array) => encode(&envelope_of(Kind::NdArray, array.to_nested()))?,
        Value::Range(range) => {
            let (first, last) = range.endpoints()?;
            encode(&envelope_of(
                Kind::Range,
                Value::Array(vec![Value::from(first), Value::from(last)]),
            ))?
        }
    })
}

/// Writes an already-converted value as JSON text.
pub(crate) fn write_value<W: io::Write>(
    writer: W,
    value: &Value,
    options: &CodecOptions,
) -> Result<()> {
    if options.pretty {
        let indent = options.indent.to_string();
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
        value.serialize(&mut serializer)?;
    } else {
        let mut serializer = serde_json::Serializer::new(writer);
        value.serialize(&mut serializer)?;
    }
    Ok(())
}

//! Property-based tests for the round-trip guarantees of the codec.
//!
//! Arrays with a shape, unit-step ranges and plain JSON trees must all come
//! back equal after encode then decode.

use numeric_json::{decode_str, from_str, to_string, IntRange, NdArray, Value};
use proptest::prelude::*;
use serde::{Deserialize, Serialize};

fn roundtrip<T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug>(
    value: &T,
) -> bool {
    match to_string(value) {
        Ok(serialized) => match from_str::<T>(&serialized) {
            Ok(deserialized) => *value == deserialized,
            Err(e) => {
                eprintln!("Deserialize failed: {}", e);
                eprintln!("Serialized was: {}", serialized);
                false
            }
        },
        Err(e) => {
            eprintln!("Serialize failed: {}", e);
            false
        }
    }
}

/// Shapes with non-zero dimensions; a zero-length axis hides the axes after it.
fn shape_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..4, 0..4)
}

fn int_array_strategy() -> impl Strategy<Value = NdArray> {
    shape_strategy().prop_flat_map(|shape| {
        let count = shape.iter().product::<usize>();
        prop::collection::vec(any::<i64>(), count)
            .prop_map(move |data| NdArray::new(shape.clone(), data).unwrap())
    })
}

fn float_array_strategy() -> impl Strategy<Value = NdArray> {
    shape_strategy().prop_flat_map(|shape| {
        let count = shape.iter().product::<usize>();
        prop::collection::vec(-1.0e12f64..1.0e12, count)
            .prop_map(move |data| NdArray::new(shape.clone(), data).unwrap())
    })
}

/// Plain JSON trees: no envelopes, no non-finite floats.
fn json_value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-1.0e9f64..1.0e9).prop_map(Value::from),
        "[a-z ]{0,12}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..6).prop_map(|entries| {
                Value::Object(entries.into_iter().collect())
            }),
        ]
    })
}

proptest! {
    #[test]
    fn prop_int_ndarray(a in int_array_strategy()) {
        prop_assert!(roundtrip(&a));
    }

    #[test]
    fn prop_float_ndarray(a in float_array_strategy()) {
        prop_assert!(roundtrip(&a));
    }

    #[test]
    fn prop_ndarray_shape_preserved(a in int_array_strategy()) {
        let back = decode_str(&to_string(&a).unwrap()).unwrap();
        let decoded = back.as_ndarray().unwrap();
        prop_assert_eq!(decoded.shape(), a.shape());
    }

    #[test]
    fn prop_range(start in -1_000_000i64..1_000_000, len in -50i64..1_000) {
        prop_assert!(roundtrip(&IntRange::new(start, start + len)));
    }

    #[test]
    fn prop_range_len(start in any::<i32>(), len in 0i64..10_000) {
        let r = IntRange::new(i64::from(start), i64::from(start) + len);
        let back: IntRange = from_str(&to_string(&r).unwrap()).unwrap();
        prop_assert_eq!(back.len(), len as u64);
    }

    #[test]
    fn prop_plain_json(v in json_value_strategy()) {
        let text = to_string(&v).unwrap();
        let back = decode_str(&text).unwrap();
        prop_assert_eq!(&back, &v);
        // Re-encoding is stable.
        prop_assert_eq!(to_string(&back).unwrap(), text);
    }

    #[test]
    fn prop_vec_i64(v in prop::collection::vec(any::<i64>(), 0..20)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_option_f64(opt in proptest::option::of(-1.0e6f64..1.0e6)) {
        prop_assert!(roundtrip(&opt));
    }
}

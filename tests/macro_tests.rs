use numeric_json::{decode, to_string, value, IntRange, Map, NdArray, Scalar, Value};

#[test]
fn test_value_macro_null() {
    let value = value!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_value_macro_booleans() {
    assert_eq!(value!(true), Value::Bool(true));
    assert_eq!(value!(false), Value::Bool(false));
}

#[test]
fn test_value_macro_numbers() {
    assert_eq!(value!(42), Value::Number(Scalar::Int(42)));
    assert_eq!(value!(3.5), Value::Number(Scalar::Float(3.5)));
    assert_eq!(value!(-123), Value::Number(Scalar::Int(-123)));

    // Integer and float compare by numeric value.
    assert_eq!(value!(2), value!(2.0));
}

#[test]
fn test_value_macro_strings() {
    assert_eq!(value!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(value!(""), Value::String(String::new()));
}

#[test]
fn test_value_macro_arrays() {
    assert_eq!(value!([]), Value::Array(vec![]));

    let mixed = value!([1, "hello", true, null]);
    assert_eq!(
        mixed,
        Value::Array(vec![
            Value::Number(Scalar::Int(1)),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );
}

#[test]
fn test_value_macro_nested() {
    let nested = value!({
        "probe": {
            "id": 123,
            "label": "north",
            "active": true
        },
        "tags": ["raw", "daily"],
        "count": 42
    });

    let obj = nested.as_object().expect("Expected object");
    assert_eq!(obj.len(), 3);

    let probe = obj.get("probe").and_then(Value::as_object).expect("Expected probe object");
    assert_eq!(probe.get("id"), Some(&Value::from(123)));
    assert_eq!(probe.get("label"), Some(&Value::from("north")));
    assert_eq!(probe.get("active"), Some(&Value::Bool(true)));

    let tags = obj.get("tags").and_then(Value::as_array).expect("Expected tags array");
    assert_eq!(tags, &vec![Value::from("raw"), Value::from("daily")]);
}

#[test]
fn test_value_macro_with_numeric_kinds() {
    let v = value!({
        "weights": (NdArray::new(vec![2, 2], vec![1.0f64, 0.0, 0.0, 1.0]).unwrap()),
        "rows": (IntRange::new(0, 4)),
        "offset": (-2.5)
    });

    let obj = v.as_object().unwrap();
    assert!(obj.get("weights").is_some_and(Value::is_ndarray));
    assert_eq!(obj.get("rows").and_then(Value::as_range), Some(IntRange::new(0, 4)));
    assert_eq!(obj.get("offset").and_then(Value::as_f64), Some(-2.5));

    assert_eq!(
        to_string(&v).unwrap(),
        r#"{"weights":{"_kind_":"ndarray","_value_":[[1.0,0.0],[0.0,1.0]]},"rows":{"_kind_":"range","_value_":[0,3]},"offset":-2.5}"#
    );
}

#[test]
fn test_literal_envelope_stays_object_until_decoded() {
    // The macro builds exactly what it is given; only decoding reconstructs.
    let v = value!({"_kind_": "range", "_value_": [0, 4]});
    assert!(v.is_object());

    let json = serde_json::json!({"_kind_": "range", "_value_": [0, 4]});
    assert_eq!(decode(json).unwrap(), Value::Range(IntRange::new(0, 5)));
}

#[test]
fn test_value_methods() {
    let null_val = value!(null);
    assert!(null_val.is_null());
    assert!(!null_val.is_bool());
    assert!(!null_val.is_number());
    assert!(!null_val.is_string());
    assert!(!null_val.is_array());
    assert!(!null_val.is_object());
    assert!(!null_val.is_ndarray());
    assert!(!null_val.is_range());

    let str_val = value!("hello");
    assert_eq!(str_val.as_str(), Some("hello"));

    let num_val = value!(7);
    assert_eq!(num_val.as_i64(), Some(7));
    assert_eq!(num_val.as_f64(), Some(7.0));

    let obj_val = value!({"key": "value"});
    assert_eq!(obj_val.as_object().map(Map::len), Some(1));
}

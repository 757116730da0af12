use numeric_json::file::{from_file, from_file_as, to_file, to_file_with_options};
use numeric_json::{CodecOptions, Error, IntRange, Map, NdArray, Value};
use serde::{Deserialize, Serialize};
use std::fs;
use tempfile::tempdir;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Checkpoint {
    epoch: u32,
    weights: NdArray,
    batches: IntRange,
}

fn checkpoint() -> Checkpoint {
    Checkpoint {
        epoch: 4,
        weights: NdArray::new(vec![2, 3], vec![0.1f64, 0.2, 0.3, 0.4, 0.5, 0.6]).unwrap(),
        batches: IntRange::new(0, 128),
    }
}

#[test]
fn test_save_appends_extension() {
    let dir = tempdir().unwrap();
    let path = to_file(dir.path().join("checkpoint"), &checkpoint()).unwrap();

    assert_eq!(path, dir.path().join("checkpoint.json"));
    assert!(path.exists());
    assert!(!dir.path().join("checkpoint").exists());
}

#[test]
fn test_save_keeps_json_extension() {
    let dir = tempdir().unwrap();
    let path = to_file(dir.path().join("state.json"), &checkpoint()).unwrap();
    assert_eq!(path, dir.path().join("state.json"));
}

#[test]
fn test_saved_file_is_tab_indented() {
    let dir = tempdir().unwrap();
    let path = to_file(dir.path().join("tabs"), &checkpoint()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    println!("Saved file:\n{}", text);
    assert!(text.starts_with("{\n\t\"epoch\": 4,"));
    assert!(text.contains("\t\t\"_kind_\": \"range\""));
}

#[test]
fn test_compact_save() {
    let dir = tempdir().unwrap();
    let path = to_file_with_options(dir.path().join("small"), &checkpoint(), CodecOptions::new())
        .unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(!text.contains('\n'));
}

#[test]
fn test_load_dynamic() {
    let dir = tempdir().unwrap();
    let path = to_file(dir.path().join("dyn"), &checkpoint()).unwrap();

    let value = from_file(&path).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.get("weights").and_then(Value::as_ndarray), Some(&checkpoint().weights));
    assert_eq!(obj.get("batches").and_then(Value::as_range), Some(IntRange::new(0, 128)));
}

#[test]
fn test_load_typed() {
    let dir = tempdir().unwrap();
    let path = to_file(dir.path().join("typed"), &checkpoint()).unwrap();

    let back: Checkpoint = from_file_as(&path).unwrap();
    assert_eq!(back, checkpoint());
}

#[test]
fn test_failed_encode_leaves_no_file() {
    let dir = tempdir().unwrap();
    let mut map = Map::new();
    map.insert("bad".to_string(), Value::from(f64::NAN));

    let err = to_file(dir.path().join("broken"), &Value::Object(map)).unwrap_err();
    assert!(matches!(err, Error::NonFiniteFloat(_)));
    assert!(!dir.path().join("broken.json").exists());
}

#[test]
fn test_load_malformed_envelope() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{"r": {"_kind_": "range", "_value_": [1, 2, 3]}}"#).unwrap();

    assert!(matches!(
        from_file(&path).unwrap_err(),
        Error::MalformedEnvelope { .. }
    ));
}

#[test]
fn test_save_into_missing_directory() {
    let dir = tempdir().unwrap();
    let err = to_file(dir.path().join("no/such/dir/out"), &1).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_save_keeps_fields_next_to_kind_key() {
    let dir = tempdir().unwrap();
    let record = serde_json::json!({"_kind_": "range", "_value_": "x", "note": 1});
    let path = to_file(dir.path().join("record"), &record).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "{\n\t\"_kind_\": \"range\",\n\t\"_value_\": \"x\",\n\t\"note\": 1\n}"
    );
}

//! Working with Value when the shape of the data is only known at runtime.
//!
//! Run with: cargo run --example dynamic_values

use numeric_json::{decode_str, to_string_pretty, to_value, IntRange, NdArray, Value};
use serde::{Deserialize, Serialize};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct Series {
    id: u32,
    values: NdArray,
    index: IntRange,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Envelopes are reconstructed wherever they appear; unknown kinds are left alone.
    let input = r#"{
        "temperature": {"_kind_": "ndarray", "_value_": [[20.5, 21.0], [19.5, 18.0]]},
        "hours": {"_kind_": "range", "_value_": [0, 23]},
        "unit": {"_kind_": "celsius", "_value_": "C"}
    }"#;

    let data = decode_str(input)?;

    if let Value::Object(obj) = &data {
        for (key, value) in obj {
            println!("{:12} -> {}", key, value.type_name());
        }

        if let Some(temperature) = obj.get("temperature").and_then(Value::as_ndarray) {
            println!(
                "\ntemperature: shape {:?}, dtype {}",
                temperature.shape(),
                temperature.dtype()
            );
        }

        if let Some(hours) = obj.get("hours").and_then(Value::as_range) {
            println!("hours: {} values starting at {}", hours.len(), hours.start);
        }
    }

    // Convert an existing struct to Value
    let series = Series {
        id: 9,
        values: NdArray::from_vec(vec![1.5f64, 2.5, 4.0]),
        index: IntRange::new(10, 13),
    };

    let series_value = to_value(&series)?;
    println!("\nSeries as Value:\n{}\n", to_string_pretty(&series_value)?);

    // Runtime type checking
    println!("Type checks:");
    println!("  is_object: {}", series_value.is_object());
    println!("  is_array:  {}", series_value.is_array());
    println!("  is_ndarray: {}", series_value.is_ndarray());

    Ok(())
}

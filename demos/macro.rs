//! Using the value! macro for dynamic value construction.
//!
//! Run with: cargo run --example macro

use numeric_json::{to_string_pretty, value, IntRange, NdArray, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let null_val = value!(null);
    let bool_val = value!(true);
    let number = value!(42);
    let text = value!("Hello, JSON!");

    println!("Primitives:");
    println!("  null:   {}", to_string_pretty(&null_val)?);
    println!("  bool:   {}", to_string_pretty(&bool_val)?);
    println!("  number: {}", to_string_pretty(&number)?);
    println!("  text:   {}\n", to_string_pretty(&text)?);

    let numbers = value!([1, 2, 3, 4, 5]);
    let mixed = value!([1, "two", true, null]);

    println!("Arrays:");
    println!("  Numbers: {}", to_string_pretty(&numbers)?);
    println!("  Mixed:   {}\n", to_string_pretty(&mixed)?);

    let identity = NdArray::new(vec![3, 3], vec![1i64, 0, 0, 0, 1, 0, 0, 0, 1])?;
    let model = value!({
        "name": "affine",
        "matrix": identity,
        "columns": (IntRange::new(0, 3)),
        "tags": ["linear", "2d"]
    });

    println!("Numeric kinds:");
    println!("{}\n", to_string_pretty(&model)?);

    if let Value::Object(obj) = &model {
        if let Some(matrix) = obj.get("matrix").and_then(Value::as_ndarray) {
            println!("Accessing values:");
            println!("  Matrix shape: {:?}", matrix.shape());
        }

        if let Some(columns) = obj.get("columns").and_then(Value::as_range) {
            println!("  Columns: {} ({} items)", columns, columns.len());
        }
    }

    Ok(())
}

//! Basic encoding and decoding of arrays and ranges inside a struct.
//!
//! Run with: cargo run --example simple

use numeric_json::{from_str, to_string, IntRange, NdArray};
use serde::{Deserialize, Serialize};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Image {
    name: String,
    pixels: NdArray,
    rows: IntRange,
}

fn main() -> Result<(), Box<dyn Error>> {
    let image = Image {
        name: "checkerboard".to_string(),
        pixels: NdArray::new(vec![2, 2], vec![0i64, 255, 255, 0])?,
        rows: IntRange::new(0, 2),
    };

    // Encode to JSON
    let json = to_string(&image)?;
    println!("JSON output:\n{}\n", json);

    // Decode back to the struct
    let image_back: Image = from_str(&json)?;
    assert_eq!(image, image_back);
    println!("✓ Round-trip successful");

    Ok(())
}

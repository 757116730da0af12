//! Saving and loading JSON files.
//!
//! Run with: RUST_LOG=debug cargo run --example json_files

use numeric_json::file::{from_file, from_file_as, to_file};
use numeric_json::{IntRange, NdArray, Value};
use serde::{Deserialize, Serialize};
use std::error::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Checkpoint {
    step: u64,
    weights: NdArray,
    samples: IntRange,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let checkpoint = Checkpoint {
        step: 1000,
        weights: NdArray::new(vec![2, 3], vec![0.1f64, -0.2, 0.3, 0.0, 1.0, -1.0])?,
        samples: IntRange::new(0, 512),
    };

    // ".json" is appended to the path
    let path = to_file(dir.path().join("checkpoint"), &checkpoint)?;
    println!("Saved to {}\n", path.display());
    println!("{}", std::fs::read_to_string(&path)?);

    let back: Checkpoint = from_file_as(&path)?;
    assert_eq!(back, checkpoint);
    println!("✓ Typed load successful");

    let dynamic = from_file(&path)?;
    if let Some(weights) = dynamic
        .as_object()
        .and_then(|obj| obj.get("weights"))
        .and_then(Value::as_ndarray)
    {
        println!("✓ Dynamic load: weights shape {:?}", weights.shape());
    }

    Ok(())
}

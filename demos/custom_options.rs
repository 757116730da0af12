//! Customizing JSON output with CodecOptions.
//!
//! Run with: cargo run --example custom_options

use numeric_json::{to_string_with_options, CodecOptions, Indent, IntRange, NdArray};
use serde::{Deserialize, Serialize};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct Grid {
    name: String,
    cells: NdArray,
    span: IntRange,
}

fn main() -> Result<(), Box<dyn Error>> {
    let grid = Grid {
        name: "tiny".to_string(),
        cells: NdArray::new(vec![2, 2], vec![1i64, 2, 3, 4])?,
        span: IntRange::new(0, 4),
    };

    // Default format (compact)
    println!("Compact:");
    let compact = numeric_json::to_string(&grid)?;
    println!("{}\n", compact);

    // Pretty with tabs
    println!("Pretty (tabs):");
    let tabbed = to_string_with_options(&grid, CodecOptions::pretty())?;
    println!("{}\n", tabbed);

    // Pretty with two spaces
    println!("Pretty (2 spaces):");
    let spaced_options = CodecOptions::pretty().with_indent(Indent::Spaces(2));
    let spaced = to_string_with_options(&grid, spaced_options)?;
    println!("{}", spaced);

    Ok(())
}

//! Saving and loading JSON files.
//!
//! Files are written pretty-printed with tab indentation. A `.json`
//! extension is appended to any path that does not already end in one.
//!
//! ```rust,no_run
//! use numeric_json::{file, NdArray};
//!
//! let weights = NdArray::from_vec(vec![0.1f64, 0.2, 0.3]);
//! let path = file::to_file("weights", &weights).unwrap();
//! assert_eq!(path.to_str(), Some("weights.json"));
//!
//! let back = file::from_file(&path).unwrap();
//! assert_eq!(back.as_ndarray(), Some(&weights));
//! ```

use crate::{CodecOptions, Error, Result, Value};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes `value` to `path` as pretty JSON indented with tabs, creating or
/// truncating the file. Returns the path actually written.
///
/// # Errors
///
/// Returns an encoding error if `value` cannot be encoded and [`Error::Io`]
/// if the file cannot be created or written.
pub fn to_file<P, T>(path: P, value: &T) -> Result<PathBuf>
where
    P: AsRef<Path>,
    T: ?Sized + Serialize,
{
    to_file_with_options(path, value, CodecOptions::pretty())
}

/// Writes `value` to `path` with custom output options.
pub fn to_file_with_options<P, T>(path: P, value: &T, options: CodecOptions) -> Result<PathBuf>
where
    P: AsRef<Path>,
    T: ?Sized + Serialize,
{
    let path = with_json_extension(path.as_ref());
    // Encode before touching the file so a failed encode leaves it alone.
    let encoded = crate::to_value(value)?;
    let file = File::create(&path).map_err(|e| io_error(&path, e))?;
    let mut writer = BufWriter::new(file);
    crate::ser::write_value(&mut writer, &encoded, &options)?;
    writer.flush().map_err(|e| io_error(&path, e))?;
    tracing::info!(path = %path.display(), "wrote json file");
    Ok(path)
}

/// Reads and decodes a JSON file into a [`Value`].
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened, [`Error::Syntax`] for
/// invalid JSON and [`Error::MalformedEnvelope`] for unusable envelopes.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    let value = crate::de::decode_reader(BufReader::new(file))?;
    tracing::debug!(path = %path.display(), kind = value.type_name(), "read json file");
    Ok(value)
}

/// Reads a JSON file into any `T: Deserialize`.
pub fn from_file_as<P, T>(path: P) -> Result<T>
where
    P: AsRef<Path>,
    T: DeserializeOwned,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    let value = serde_json::from_reader(BufReader::new(file))?;
    tracing::debug!(path = %path.display(), "read json file");
    Ok(value)
}

fn with_json_extension(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) if ext == "json" => path.to_path_buf(),
        _ => {
            let mut name = path.as_os_str().to_os_string();
            name.push(".json");
            PathBuf::from(name)
        }
    }
}

fn io_error(path: &Path, err: std::io::Error) -> Error {
    Error::io(&format!("{}: {}", path.display(), err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_appended() {
        assert_eq!(with_json_extension(Path::new("data")), PathBuf::from("data.json"));
        assert_eq!(
            with_json_extension(Path::new("data.txt")),
            PathBuf::from("data.txt.json")
        );
        assert_eq!(
            with_json_extension(Path::new("dir/data.json")),
            PathBuf::from("dir/data.json")
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = from_file("definitely/not/here.json").unwrap_err();
        match err {
            Error::Io(msg) => assert!(msg.contains("definitely/not/here.json")),
            other => panic!("Expected io error, got {:?}", other),
        }
    }
}

//! Error types for numeric JSON encoding and decoding.
//!
//! ## Error Categories
//!
//! - **Syntax Errors**: the input is not valid JSON (with line/column information)
//! - **Unsupported Types**: a value has no JSON representation (e.g. a map keyed by tuples)
//! - **Non-finite Floats**: NaN and the infinities have no JSON number form
//! - **Malformed Envelopes**: an object names a recognized `_kind_` but its payload
//!   cannot be reconstructed
//! - **I/O Errors**: file reading/writing failures
//!
//! ## Examples
//!
//! ```rust
//! use numeric_json::{Error, Value};
//!
//! let result: Result<Value, Error> = r#"{"_kind_": "range", "_value_": "oops"}"#.parse();
//! assert!(matches!(result, Err(Error::MalformedEnvelope { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while encoding or decoding.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// The input is not valid JSON
    #[error("Syntax error at line {line}, column {col}: {msg}")]
    Syntax { line: usize, col: usize, msg: String },

    /// A value with no JSON representation was handed to the encoder
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// NaN or an infinity reached the encoder
    #[error("Cannot encode non-finite float {0}")]
    NonFiniteFloat(f64),

    /// A recognized envelope whose payload is absent or cannot be reconstructed
    #[error("Malformed {kind} envelope: {msg}")]
    MalformedEnvelope { kind: String, msg: String },

    /// Shape and element count of an array disagree
    #[error("Shape error: {0}")]
    Shape(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numeric_json::Error;
    ///
    /// let err = Error::syntax(3, 7, "expected `:`");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn syntax(line: usize, col: usize, msg: &str) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates an unsupported type error for values the encoder cannot represent.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a malformed envelope error for the given discriminator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numeric_json::Error;
    ///
    /// let err = Error::malformed("ndarray", "payload is missing");
    /// assert_eq!(err.to_string(), "Malformed ndarray envelope: payload is missing");
    /// ```
    pub fn malformed<T: fmt::Display>(kind: &str, msg: T) -> Self {
        Error::MalformedEnvelope {
            kind: kind.to_string(),
            msg: msg.to_string(),
        }
    }

    pub fn shape<T: fmt::Display>(msg: T) -> Self {
        Error::Shape(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Io => Error::io(&err.to_string()),
            Category::Syntax | Category::Eof => Error::Syntax {
                line: err.line(),
                col: err.column(),
                msg: err.to_string(),
            },
            Category::Data => Error::Custom(err.to_string()),
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

//! Configuration options for JSON output.
//!
//! - [`CodecOptions`]: compact or pretty output
//! - [`Indent`]: indentation unit for pretty output (tab or spaces)
//!
//! ## Examples
//!
//! ```rust
//! use numeric_json::{to_string_with_options, CodecOptions, Indent};
//!
//! let options = CodecOptions::pretty().with_indent(Indent::Spaces(2));
//! let json = to_string_with_options(&vec![1, 2], options).unwrap();
//! assert_eq!(json, "[\n  1,\n  2\n]");
//! ```

use std::fmt;

/// Indentation unit written once per nesting level in pretty output.
///
/// # Examples
///
/// ```rust
/// use numeric_json::Indent;
///
/// assert_eq!(Indent::Tab.to_string(), "\t");
/// assert_eq!(Indent::Spaces(4).to_string(), "    ");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Indent {
    #[default]
    Tab,
    Spaces(usize),
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Indent::Tab => f.write_str("\t"),
            Indent::Spaces(n) => write!(f, "{:width$}", "", width = *n),
        }
    }
}

/// Configuration options for JSON encoding.
///
/// Output is compact by default. Pretty output indents one [`Indent`] unit
/// per nesting level, a single tab unless configured otherwise.
///
/// # Examples
///
/// ```rust
/// use numeric_json::{CodecOptions, Indent};
///
/// let options = CodecOptions::new();
/// assert!(!options.pretty);
///
/// let options = CodecOptions::pretty();
/// assert_eq!(options.indent, Indent::Tab);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CodecOptions {
    pub pretty: bool,
    pub indent: Indent,
}

impl CodecOptions {
    /// Creates default options (compact output).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output indented with tabs.
    #[must_use]
    pub fn pretty() -> Self {
        CodecOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the indentation unit. Only affects pretty-printed output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numeric_json::{CodecOptions, Indent};
    ///
    /// let options = CodecOptions::pretty().with_indent(Indent::Spaces(4));
    /// assert_eq!(options.indent, Indent::Spaces(4));
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_spaces() {
        assert_eq!(Indent::Spaces(0).to_string(), "");
    }

    #[test]
    fn test_with_indent_keeps_pretty() {
        let options = CodecOptions::pretty().with_indent(Indent::Spaces(2));
        assert!(options.pretty);
        assert_eq!(options.indent, Indent::Spaces(2));
    }
}

//! Parser configuration.
//!
//! Every field has a default, so a configuration file only needs the keys it
//! changes:
//!
//! ```toml
//! strict = true
//! mode = "streaming"
//! max_passes = 128
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// How triples are processed as they arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Classify each triple on arrival, then resolve at end of input.
    Streaming,
    /// Store everything first, then classify and resolve in passes.
    #[default]
    Buffered,
}

impl ParseMode {
    /// Lower-case name, as accepted by [`FromStr`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ParseMode::Streaming => "streaming",
            ParseMode::Buffered => "buffered",
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "streaming" => Ok(ParseMode::Streaming),
            "buffered" => Ok(ParseMode::Buffered),
            other => Err(format!(
                "unknown parse mode `{other}` (expected `streaming` or `buffered`)"
            )),
        }
    }
}

/// Settings fixed for the duration of one parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    /// Reject guesses: no legacy chain forms, no annotation-property
    /// fallbacks, and leftover triples become an error.
    pub strict: bool,
    /// Streaming or buffered processing.
    pub mode: ParseMode,
    /// Upper bound on resolution passes.
    pub max_passes: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            strict: false,
            mode: ParseMode::Buffered,
            max_passes: 64,
        }
    }
}

impl ParserConfig {
    /// Default settings with strict mode on.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Default settings (lenient, buffered).
    #[must_use]
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Returns a copy with `mode` set.
    #[must_use]
    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    /// Parses a TOML configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Config`] on invalid TOML, an unknown key, or a
    /// value of the wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self, ParseError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Io`] if the file cannot be read, otherwise as
    /// [`ParserConfig::from_toml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

//! Converter configuration.

use serde::{Deserialize, Serialize};

use crate::tokenize::Delimiters;

/// Configuration shared by the array converters.
/// Missing fields deserialize to their defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Separators used to tokenize text inputs.
    pub delimiters: Delimiters,
}

impl Config {
    pub fn with_delimiters(mut self, delimiters: Delimiters) -> Self {
        self.delimiters = delimiters;
        self
    }

    /// Read a configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

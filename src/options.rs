use crate::{
    result::{AlignError, Result},
    str_utils::QuoteSet,
};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Formatting configuration, loadable from a JSON object with every field optional
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    /// Characters that open quoted regions; a value containing one is padded as a literal
    pub quotes: QuoteSet,
    /// Character wrapped around every column name, `None` leaves names as written
    pub column_wrap: Option<char>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            quotes: QuoteSet::default(),
            column_wrap: Some('`'),
        }
    }
}

impl FormatOptions {
    /// Load options from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let json: serde_json::Value = serde_json::from_str(&content)?;
        Self::from_json(json)
    }

    /// Load options from a serde_json::Value object
    pub fn from_json(json: serde_json::Value) -> Result<Self> {
        if !json.is_object() {
            return Err(AlignError::InvalidOption {
                expected: "object".to_string(),
                got: json.to_string(),
            });
        }

        let options: FormatOptions = serde_json::from_value(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn with_column_wrap(mut self, column_wrap: Option<char>) -> Self {
        self.column_wrap = column_wrap;
        self
    }

    pub fn with_quotes(mut self, quotes: QuoteSet) -> Self {
        self.quotes = quotes;
        self
    }

    /// Reject an empty quote set and a wrap character that would itself open a quote
    pub fn validate(&self) -> Result<()> {
        if self.quotes.is_empty() {
            return Err(AlignError::InvalidOption {
                expected: "at least one quote character".to_string(),
                got: "an empty quote set".to_string(),
            });
        }

        if let Some(wrap) = self.column_wrap {
            if self.quotes.contains(wrap) {
                return Err(AlignError::InvalidOption {
                    expected: "a column wrap character that is not a quote character".to_string(),
                    got: wrap.to_string(),
                });
            }
        }

        Ok(())
    }
}

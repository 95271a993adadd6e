//! Configuration the host editor passes in when instantiating the mode.
//!
//! Unlike a toolchain config there is no file layering here: the host editor
//! owns the knobs and hands them over in-process, usually deserialized from
//! its own settings store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Editor knobs consumed by the parser and the indentation query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Columns per tab stop, used when measuring leading whitespace.
    pub tab_size: usize,
    /// Columns added per hanging-indent level.
    pub indent_unit: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_size: 2,
            indent_unit: 2,
        }
    }
}

impl EditorConfig {
    /// Rejects zero-valued knobs, which would break the column arithmetic.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tab_size == 0 {
            return Err(ConfigError::ZeroTabSize);
        }
        if self.indent_unit == 0 {
            return Err(ConfigError::ZeroIndentUnit);
        }
        Ok(())
    }
}

/// Errors produced when validating an [`EditorConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ZeroTabSize,
    ZeroIndentUnit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroTabSize => write!(f, "tabSize must be at least 1"),
            ConfigError::ZeroIndentUnit => write!(f, "indentUnit must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

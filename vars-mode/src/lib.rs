//! # vars-mode
//!
//! The editor-facing surface over [`vars_parser`]: mode registration data
//! (electric input, folding, bracket auto-close), the indentation query, and
//! the configuration the host editor passes in. All parsing lives in
//! `vars-parser`; this crate only wires it to an editor's mode contract.

pub mod config;
pub mod indent;
pub mod mode;

pub use config::{ConfigError, EditorConfig};
pub use indent::indent;
pub use mode::{CloseBrackets, VariablesMode};

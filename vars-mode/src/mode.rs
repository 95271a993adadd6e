//! The mode adapter.
//!
//! Wires the online parser into a host editor's mode contract: token
//! callback, start state, indentation, and the static surface the host reads
//! at registration time (electric input, folding, bracket auto-close). No
//! parsing logic lives here.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use vars_parser::vars::engine::{OnlineParser, ParserState};
use vars_parser::vars::stream::LineStream;
use vars_parser::vars::token::Style;

use crate::config::{ConfigError, EditorConfig};
use crate::indent;

/// Typed input matching this pattern re-triggers indentation of the line.
static ELECTRIC_INPUT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[}\]]").unwrap());

pub(crate) fn electric_input() -> &'static Regex {
    &ELECTRIC_INPUT
}

/// Bracket auto-close configuration handed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CloseBrackets {
    /// Opener/closer pairs, flattened.
    pub pairs: &'static str,
    /// Pairs that expand to an indented body when Enter is typed between
    /// them.
    pub explode: &'static str,
}

/// The GraphQL variables editor mode.
///
/// `start_state` and `token` delegate to the engine; everything else is
/// configuration the host reads once when the mode is registered.
#[derive(Debug, Clone)]
pub struct VariablesMode {
    parser: OnlineParser,
    config: EditorConfig,
}

impl VariablesMode {
    pub fn new(config: EditorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            parser: OnlineParser::new(config.tab_size),
            config,
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Initial parser state for a fresh document.
    pub fn start_state(&self) -> ParserState {
        self.parser.start_state()
    }

    /// Tokenizes the next run of the line; see [`OnlineParser::token`].
    pub fn token(&self, stream: &mut LineStream<'_>, state: &mut ParserState) -> Option<Style> {
        self.parser.token(stream, state)
    }

    /// Column to indent a line that will contain `text_after`.
    pub fn indent(&self, state: &ParserState, text_after: &str) -> usize {
        indent::indent(state, text_after, &self.config)
    }

    /// Pattern identifying input that should re-indent the current line.
    pub fn electric_input(&self) -> &'static Regex {
        &ELECTRIC_INPUT
    }

    /// Folding strategy understood by the host.
    pub fn fold(&self) -> &'static str {
        "brace"
    }

    /// Auto-close pairs for brackets and quotes.
    pub fn close_brackets(&self) -> CloseBrackets {
        CloseBrackets {
            pairs: "[]{}\"\"",
            explode: "[]{}",
        }
    }
}

//! Core token and style types shared across the lexer, engine, and tooling.

use serde::{Deserialize, Serialize};

/// Lexical class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// One of `[ ] { } : ,`.
    Punctuation,
    /// A JSON number.
    Number,
    /// A JSON string, closing quote possibly missing at end of line.
    String,
    /// `true`, `false`, or `null`.
    Keyword,
}

/// A single lexed token, borrowed from the current line.
///
/// `start`/`end` are byte offsets within the line. Tokens are produced fresh
/// per lexical match and consumed immediately by the grammar step; nothing
/// retains them across calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub value: &'a str,
    pub start: usize,
    pub end: usize,
}

impl Token<'_> {
    /// The punctuation character, when this token is punctuation.
    pub fn punct_char(&self) -> Option<char> {
        match self.kind {
            TokenKind::Punctuation => self.value.chars().next(),
            _ => None,
        }
    }
}

/// Editor-facing style classification for a highlighted token.
///
/// Punctuation and whitespace carry no style; the engine reports them as
/// `None` rather than a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// A top-level variable key.
    Variable,
    /// A key nested inside an object value.
    Attribute,
    Number,
    String,
    /// `true` / `false`.
    Builtin,
    /// `null`.
    Keyword,
    /// Unrecognized input or a grammar mismatch.
    Invalid,
}

impl Style {
    /// Returns the style tag string handed to the host editor.
    pub fn as_str(self) -> &'static str {
        match self {
            Style::Variable => "variable",
            Style::Attribute => "attribute",
            Style::Number => "number",
            Style::String => "string",
            Style::Builtin => "builtin",
            Style::Keyword => "keyword",
            Style::Invalid => "invalid",
        }
    }
}

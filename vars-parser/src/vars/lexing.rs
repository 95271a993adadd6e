//! The lexical rule set.
//!
//! Core tokenization uses a vanilla logos lexer, no custom code: the four
//! token patterns are declared on [`LexRule`] and the engine drives the lexer
//! one token at a time from the current scan position of the line. Whitespace
//! is eaten by the caller before each attempt, so every match is anchored at
//! the stream position.

use logos::Logos;

use crate::vars::stream::LineStream;
use crate::vars::token::{Token, TokenKind};

/// Raw lexical rules, one pattern per token kind.
///
/// The string pattern's closing quote is optional so that a string running
/// into the end of the line still tokenizes as a best-effort String instead
/// of failing the whole tail of the line.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexRule {
    #[regex(r"[\[\]{}:,]")]
    Punctuation,

    #[regex(r"-?(?:0|[1-9][0-9]*)(?:\.[0-9]*)?(?:[eE][+-]?[0-9]+)?")]
    Number,

    #[regex(r#""(?:[^"\\]|\\(?:["/\\bfnrt]|u[0-9a-fA-F]{4}))*"?"#)]
    String,

    #[regex("true|false|null")]
    Keyword,
}

impl LexRule {
    fn kind(self) -> TokenKind {
        match self {
            LexRule::Punctuation => TokenKind::Punctuation,
            LexRule::Number => TokenKind::Number,
            LexRule::String => TokenKind::String,
            LexRule::Keyword => TokenKind::Keyword,
        }
    }
}

/// Lexes one token at the stream's scan position and advances past it.
///
/// Returns `None` when no rule matches there; the caller decides how much
/// input to discard (the engine consumes a single character).
pub fn lex<'a>(stream: &mut LineStream<'a>) -> Option<Token<'a>> {
    let rest = stream.rest();
    let mut lexer = LexRule::lexer(rest);
    match lexer.next() {
        Some(Ok(rule)) => {
            // No skip patterns are declared, so the match starts at 0.
            let span = lexer.span();
            let start = stream.pos();
            stream.advance(span.end);
            Some(Token {
                kind: rule.kind(),
                value: &rest[..span.end],
                start,
                end: stream.pos(),
            })
        }
        _ => None,
    }
}

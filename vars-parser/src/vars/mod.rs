//! GraphQL variables parsing.
//!
//! The modules here form a pipeline: a [`LineStream`] feeds characters to the
//! lexical rules in [`lexing`], which produce [`Token`]s that the
//! [`engine`] resolves against the grammar tables in [`grammar`], one token
//! per call, mutating the carried [`ParserState`] as it goes.

pub mod engine;
pub mod grammar;
pub mod lexing;
pub mod stream;
pub mod testing;
pub mod token;

pub use engine::{OnlineParser, ParserState, StackFrame};
pub use grammar::{Rule, RuleName, Step};
pub use lexing::lex;
pub use stream::LineStream;
pub use token::{Style, Token, TokenKind};

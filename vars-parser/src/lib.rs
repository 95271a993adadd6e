//! # vars-parser
//!
//! An incremental, line-oriented tokenizer/parser for GraphQL variables
//! documents (a JSON-like format), built for text-editor highlighting and
//! indentation pipelines.
//!
//! The parser is *online*: it consumes one token per call, threads all of its
//! state through an explicit [`ParserState`](vars::engine::ParserState) value,
//! and suspends whenever a line ends with grammar obligations still pending.
//! The host editor persists that state opaquely and hands it back with the
//! next line, so a document is highlighted line by line without ever being
//! materialized whole.
//!
//! Layout follows the usual lexer/grammar/engine split:
//!
//! src/vars
//!   ├── token      Token kinds, tokens, editor-facing styles
//!   ├── stream     Cursor over a single line of text
//!   ├── lexing     The lexical rule set (logos)
//!   ├── grammar    Productions as pure data, interpreted by the engine
//!   ├── engine     The parse stack engine (the online parser)
//!   └── testing    Factories shared by unit and integration tests

pub mod vars;

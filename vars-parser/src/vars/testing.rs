//! Test factories.
//!
//! Assertions against the parser want a flat list of (token text, style)
//! pairs rather than hand-driven stream calls. The helpers here run a line
//! (or a whole document) through a parser the way a host editor would —
//! resetting the stream's token start before every call — and collect what
//! came out, dropping the unstyled whitespace runs that only pad the output.

use crate::vars::engine::{OnlineParser, ParserState};
use crate::vars::stream::LineStream;
use crate::vars::token::Style;

/// Runs one line against the parser, appending (text, style) pairs for every
/// non-whitespace run consumed.
pub fn tokenize_line(
    parser: &OnlineParser,
    state: &mut ParserState,
    line: &str,
    out: &mut Vec<(String, Option<Style>)>,
) {
    let mut stream = LineStream::new(line);
    while !stream.eol() {
        stream.start_token();
        let before = stream.pos();
        let style = parser.token(&mut stream, state);
        if stream.pos() == before {
            // Suspended with pending obligations; resume on the next line.
            break;
        }
        let text = stream.current();
        if !text.chars().all(char::is_whitespace) {
            out.push((text.to_string(), style));
        }
    }
}

/// Tokenizes a document fed line by line (split on `\n`), returning the
/// styled runs and the final state.
pub fn styles_of(source: &str, tab_size: usize) -> (Vec<(String, Option<Style>)>, ParserState) {
    let parser = OnlineParser::new(tab_size);
    let mut state = parser.start_state();
    let mut out = Vec::new();
    for line in source.split('\n') {
        tokenize_line(&parser, &mut state, line, &mut out);
    }
    (out, state)
}

/// The style sequence alone, for assertions that don't care about token text.
pub fn style_sequence(source: &str, tab_size: usize) -> Vec<Option<Style>> {
    styles_of(source, tab_size)
        .0
        .into_iter()
        .map(|(_, style)| style)
        .collect()
}

//! The parse stack engine.
//!
//! An online parser: grammar obligations live on an explicit stack of
//! [`StackFrame`]s instead of the native call stack, so parsing can stop at
//! the end of a line and pick up on the next one from the persisted
//! [`ParserState`]. Each [`OnlineParser::token`] call consumes at most one
//! token, resolves it against the top of the stack, and reports the style the
//! host editor should paint it with.
//!
//! Recovery is deliberately simple: a mismatched terminal pops only its own
//! frame, a token the `Value` dispatch cannot classify pops the dispatch
//! frame, and unrecognized characters are skipped one at a time. Nothing here
//! panics or returns errors; the worst outcome is a run of invalid-styled
//! tokens until the input resynchronizes.

use serde::{Deserialize, Serialize};

use crate::vars::grammar::{self, Rule, RuleName, Step};
use crate::vars::lexing;
use crate::vars::stream::LineStream;
use crate::vars::token::{Style, Token, TokenKind};

/// A pending grammar obligation: a production and the index of its next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackFrame {
    pub rule: RuleName,
    pub step: usize,
}

/// Parser state threaded through every token call.
///
/// Host editors store and restore this value opaquely between lines; the
/// engine mutates it in place and never copies it. Callers wanting a
/// snapshot (e.g. for speculative re-highlighting) clone it explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserState {
    /// Pending rule continuations, innermost last. Empty only once the
    /// document's closing brace has been consumed.
    pub stack: Vec<StackFrame>,
    /// Bracket nesting depth. Only grammar-matched brackets move it.
    pub level: usize,
    /// Most recently captured key name, quotes stripped. Not a key path:
    /// entering and leaving nested objects does not restore earlier keys.
    pub name: Option<String>,
    /// Leading-whitespace depth of the current line, in tab stops.
    pub indent_level: usize,
    /// Indent target pushed at each open bracket, consumed by the
    /// indentation query.
    pub levels: Vec<usize>,
}

impl ParserState {
    /// The rule currently under evaluation, if any.
    pub fn kind(&self) -> Option<RuleName> {
        self.stack.last().map(|frame| frame.rule)
    }

    /// True once the whole document production has been consumed.
    pub fn complete(&self) -> bool {
        self.stack.is_empty()
    }
}

/// The online parser.
///
/// Owns nothing but editor configuration; everything else threads through
/// [`ParserState`], so one parser instance serves any number of documents as
/// long as each document keeps its own state.
#[derive(Debug, Clone)]
pub struct OnlineParser {
    tab_size: usize,
}

impl OnlineParser {
    pub fn new(tab_size: usize) -> Self {
        Self {
            tab_size: tab_size.max(1),
        }
    }

    /// Initial state for a fresh document.
    pub fn start_state(&self) -> ParserState {
        ParserState {
            stack: vec![StackFrame {
                rule: RuleName::Document,
                step: 0,
            }],
            level: 0,
            name: None,
            indent_level: 0,
            levels: Vec::new(),
        }
    }

    /// Consumes one run of input from the line and classifies it.
    ///
    /// Returns `None` for unstyled output (whitespace, matched punctuation)
    /// and when suspending at end-of-line with obligations still pending; the
    /// caller resumes on the next line with the same state.
    pub fn token(&self, stream: &mut LineStream<'_>, state: &mut ParserState) -> Option<Style> {
        if stream.sol() {
            state.indent_level = stream.indentation(self.tab_size) / self.tab_size;
        }
        if stream.eat_space() {
            return None;
        }
        if stream.eol() {
            return None;
        }

        match lexing::lex(stream) {
            Some(token) => self.interpret(&token, state),
            None => {
                stream.skip_char();
                Some(Style::Invalid)
            }
        }
    }

    /// Resolves one lexed token against the stack.
    ///
    /// Non-terminal expansion and list bookkeeping loop without consuming;
    /// every exit path has consumed exactly the one token.
    fn interpret(&self, token: &Token<'_>, state: &mut ParserState) -> Option<Style> {
        loop {
            let Some(top) = state.stack.last().copied() else {
                // Input past the document's closing brace.
                return Some(Style::Invalid);
            };
            let steps = match grammar::rule(top.rule) {
                Rule::Dispatch(dispatch) => {
                    match dispatch(token) {
                        Some(next) => push(state, next),
                        None => {
                            abandon_top(state);
                            return Some(Style::Invalid);
                        }
                    }
                    continue;
                }
                Rule::Seq(steps) => steps,
            };
            match steps[top.step] {
                Step::Rule(name) => push(state, name),
                Step::List { of, separator } => {
                    if grammar::first_matches(of, token) {
                        push(state, of);
                    } else if token.punct_char() == Some(separator) {
                        // Separator consumed; the list step stays put for the
                        // next item.
                        return None;
                    } else {
                        // The list admits no more items; hand the token to
                        // the step after it.
                        skip_step(state);
                    }
                }
                Step::Punct(expected) => {
                    return if token.punct_char() == Some(expected) {
                        track_brackets(state, expected);
                        advance(state);
                        None
                    } else {
                        abandon_top(state);
                        Some(Style::Invalid)
                    };
                }
                Step::Term { kind, style } => {
                    return if token.kind == kind {
                        advance(state);
                        Some(style)
                    } else {
                        abandon_top(state);
                        Some(Style::Invalid)
                    };
                }
                Step::NamedKey { style } => {
                    return if token.kind == TokenKind::String {
                        state.name = Some(strip_quotes(token.value).to_string());
                        advance(state);
                        Some(style)
                    } else {
                        abandon_top(state);
                        Some(Style::Invalid)
                    };
                }
            }
        }
    }
}

/// Expands a non-terminal. The referencing frame stays where it is; it
/// advances when the child production completes.
fn push(state: &mut ParserState, rule: RuleName) {
    state.stack.push(StackFrame { rule, step: 0 });
}

/// Advances the top frame past a matched terminal, then pops any productions
/// this completes.
fn advance(state: &mut ParserState) {
    if let Some(top) = state.stack.last_mut() {
        top.step += 1;
    }
    pop_exhausted(state);
}

/// Moves the top frame past its current step without a match (a list that
/// admits no further items).
fn skip_step(state: &mut ParserState) {
    if let Some(top) = state.stack.last_mut() {
        top.step += 1;
    }
    pop_exhausted(state);
}

/// Drops the top frame after a mismatch and resumes with its parent.
fn abandon_top(state: &mut ParserState) {
    state.stack.pop();
    advance_parent(state);
    pop_exhausted(state);
}

/// Pops frames whose production is exhausted, cascading upward.
fn pop_exhausted(state: &mut ParserState) {
    while let Some(top) = state.stack.last() {
        if top.step < grammar::rule_len(top.rule) {
            break;
        }
        state.stack.pop();
        advance_parent(state);
    }
}

/// After a child frame leaves the stack, the parent resumes after the step
/// that produced it — except a list step, which stays to admit more items.
fn advance_parent(state: &mut ParserState) {
    if let Some(parent) = state.stack.last_mut() {
        if !on_list_step(parent) {
            parent.step += 1;
        }
    }
}

fn on_list_step(frame: &StackFrame) -> bool {
    match grammar::rule(frame.rule) {
        Rule::Seq(steps) => matches!(steps.get(frame.step), Some(Step::List { .. })),
        Rule::Dispatch(_) => false,
    }
}

/// Grammar-matched brackets drive the nesting depth and the indent targets.
/// Mismatched closers never reach here, so `level` cannot go negative on
/// valid input; the saturation only guards states deserialized from hosts.
fn track_brackets(state: &mut ParserState, punct: char) {
    match punct {
        '{' | '[' => {
            state.level += 1;
            state.levels.push(state.indent_level + 1);
        }
        '}' | ']' => {
            state.level = state.level.saturating_sub(1);
            state.levels.pop();
        }
        _ => {}
    }
}

/// Strips the surrounding quotes from a string token's raw text. The closing
/// quote may be missing when the string ran to end-of-line.
fn strip_quotes(raw: &str) -> &str {
    let inner = raw.strip_prefix('"').unwrap_or(raw);
    inner.strip_suffix('"').unwrap_or(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vars::testing::{styles_of, tokenize_line};

    fn run(source: &str) -> (Vec<(String, Option<Style>)>, ParserState) {
        styles_of(source, 2)
    }

    #[test]
    fn test_start_state() {
        let parser = OnlineParser::new(2);
        let state = parser.start_state();
        assert_eq!(state.kind(), Some(RuleName::Document));
        assert_eq!(state.level, 0);
        assert_eq!(state.name, None);
        assert!(!state.complete());
    }

    #[test]
    fn test_empty_document() {
        let (styles, state) = run("{}");
        assert_eq!(
            styles,
            vec![("{".to_string(), None), ("}".to_string(), None)]
        );
        assert!(state.complete());
        assert_eq!(state.level, 0);
    }

    #[test]
    fn test_single_variable() {
        let (styles, state) = run(r#"{"a": 1}"#);
        assert_eq!(
            styles,
            vec![
                ("{".to_string(), None),
                ("\"a\"".to_string(), Some(Style::Variable)),
                (":".to_string(), None),
                ("1".to_string(), Some(Style::Number)),
                ("}".to_string(), None),
            ]
        );
        assert_eq!(state.name.as_deref(), Some("a"));
        assert!(state.complete());
    }

    #[test]
    fn test_nested_keys_style_as_attributes() {
        let (styles, state) = run(r#"{"a": {"b": 2}}"#);
        let key_styles: Vec<_> = styles
            .iter()
            .filter_map(|(text, style)| style.map(|s| (text.as_str(), s)))
            .collect();
        assert_eq!(
            key_styles,
            vec![
                ("\"a\"", Style::Variable),
                ("\"b\"", Style::Attribute),
                ("2", Style::Number),
            ]
        );
        assert_eq!(state.name.as_deref(), Some("b"));
        assert!(state.complete());
        assert_eq!(state.level, 0);
    }

    #[test]
    fn test_name_updates_on_sibling_key() {
        let parser = OnlineParser::new(2);
        let mut state = parser.start_state();
        let mut out = Vec::new();
        tokenize_line(&parser, &mut state, r#"{"a": {"b": 2},"#, &mut out);
        assert_eq!(state.name.as_deref(), Some("b"));
        tokenize_line(&parser, &mut state, r#""c": 3}"#, &mut out);
        assert_eq!(state.name.as_deref(), Some("c"));
        assert!(state.complete());
    }

    #[test]
    fn test_keyword_styles() {
        let (styles, _) = run(r#"{"t": true, "f": false, "n": null}"#);
        let value_styles: Vec<_> = styles
            .iter()
            .filter_map(|(text, style)| style.map(|s| (text.as_str(), s)))
            .collect();
        assert_eq!(
            value_styles,
            vec![
                ("\"t\"", Style::Variable),
                ("true", Style::Builtin),
                ("\"f\"", Style::Variable),
                ("false", Style::Builtin),
                ("\"n\"", Style::Variable),
                ("null", Style::Keyword),
            ]
        );
    }

    #[test]
    fn test_missing_separator_is_tolerated() {
        let (styles, state) = run(r#"{"a": 1 "b": 2}"#);
        assert!(styles.iter().all(|(_, s)| *s != Some(Style::Invalid)));
        assert!(state.complete());
    }

    #[test]
    fn test_missing_value_marks_closer_invalid() {
        let (styles, state) = run(r#"{"a": }"#);
        assert_eq!(
            styles.last().unwrap(),
            &("}".to_string(), Some(Style::Invalid))
        );
        // The closer was eaten by recovery, so the document stays open.
        assert!(!state.complete());
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_recovery_continues_after_missing_value() {
        let parser = OnlineParser::new(2);
        let mut state = parser.start_state();
        let mut out = Vec::new();
        tokenize_line(&parser, &mut state, r#"{"a": }"#, &mut out);
        tokenize_line(&parser, &mut state, r#", "b": 2}"#, &mut out);
        let tail: Vec<_> = out
            .iter()
            .skip(4)
            .filter_map(|(text, style)| style.map(|s| (text.as_str(), s)))
            .collect();
        assert_eq!(tail, vec![("\"b\"", Style::Variable), ("2", Style::Number)]);
        assert!(state.complete());
    }

    #[test]
    fn test_unrecognized_character_consumes_one_char() {
        let (styles, state) = run("@");
        assert_eq!(styles, vec![("@".to_string(), Some(Style::Invalid))]);
        // The grammar was never touched; the same state still accepts a
        // document.
        assert_eq!(state.kind(), Some(RuleName::Document));
        assert_eq!(state.stack[0].step, 0);
    }

    #[test]
    fn test_valid_document_after_garbage_line() {
        let parser = OnlineParser::new(2);
        let mut state = parser.start_state();
        let mut out = Vec::new();
        tokenize_line(&parser, &mut state, "@@", &mut out);
        tokenize_line(&parser, &mut state, r#"{"a": 1}"#, &mut out);
        assert!(state.complete());
        assert_eq!(state.name.as_deref(), Some("a"));
    }

    #[test]
    fn test_input_after_document_close_is_invalid() {
        let (styles, state) = run(r#"{} true"#);
        assert_eq!(
            styles.last().unwrap(),
            &("true".to_string(), Some(Style::Invalid))
        );
        assert!(state.complete());
        assert_eq!(state.level, 0);
    }

    #[test]
    fn test_unterminated_string_value() {
        let (styles, state) = run(r#"{"a": "runs off"#);
        assert_eq!(
            styles.last().unwrap(),
            &("\"runs off".to_string(), Some(Style::String))
        );
        assert!(!state.complete());
        assert_eq!(state.name.as_deref(), Some("a"));
    }

    #[test]
    fn test_unterminated_key_still_captures_name() {
        let parser = OnlineParser::new(2);
        let mut state = parser.start_state();
        let mut out = Vec::new();
        tokenize_line(&parser, &mut state, r#"{"partial"#, &mut out);
        assert_eq!(state.name.as_deref(), Some("partial"));
    }

    #[test]
    fn test_level_tracks_nesting_depth() {
        let parser = OnlineParser::new(2);
        let mut state = parser.start_state();
        let mut out = Vec::new();
        tokenize_line(&parser, &mut state, r#"{"a": [{"b":"#, &mut out);
        assert_eq!(state.level, 3);
        tokenize_line(&parser, &mut state, r#"1}]}"#, &mut out);
        assert_eq!(state.level, 0);
        assert!(state.complete());
    }

    #[test]
    fn test_state_serde_round_trip_mid_document() {
        let parser = OnlineParser::new(2);
        let mut state = parser.start_state();
        let mut out = Vec::new();
        tokenize_line(&parser, &mut state, r#"{"a": ["#, &mut out);

        let json = serde_json::to_string(&state).unwrap();
        let mut restored: ParserState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);

        tokenize_line(&parser, &mut restored, r#"1]}"#, &mut out);
        assert!(restored.complete());
        assert_eq!(restored.level, 0);
    }

    #[test]
    fn test_strip_quotes_variants() {
        assert_eq!(strip_quotes("\"foo\""), "foo");
        assert_eq!(strip_quotes("\"open"), "open");
        assert_eq!(strip_quotes("\""), "");
        assert_eq!(strip_quotes("\"\""), "");
    }
}

//! The grammar rule table.
//!
//! Productions are pure data interpreted by the engine — grammar is data,
//! not code. A production is either a fixed sequence of [`Step`]s or, for the
//! polymorphic `Value` production, a dispatch function that picks the next
//! rule by inspecting the incoming token. Keeping the tables separate from
//! the engine lets each be tested on its own.

use serde::{Deserialize, Serialize};

use crate::vars::token::{Style, Token, TokenKind};

/// Names of the grammar productions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleName {
    Document,
    Variable,
    Value,
    NumberValue,
    StringValue,
    BooleanValue,
    NullValue,
    ListValue,
    ObjectValue,
    ObjectField,
}

/// One step of a production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Literal punctuation terminal; matched punctuation is unstyled.
    Punct(char),
    /// Kind-matched terminal carrying a style.
    Term { kind: TokenKind, style: Style },
    /// String terminal that records the unquoted key text into the carried
    /// state before styling it.
    NamedKey { style: Style },
    /// Non-terminal reference, expanded without consuming the token.
    Rule(RuleName),
    /// Zero or more repetitions of `of`, items optionally separated by
    /// `separator`. The separator is never required; a trailing one before
    /// the closing terminal is tolerated.
    List { of: RuleName, separator: char },
}

/// A production body.
#[derive(Clone, Copy)]
pub enum Rule {
    Seq(&'static [Step]),
    Dispatch(fn(&Token<'_>) -> Option<RuleName>),
}

static DOCUMENT: &[Step] = &[
    Step::Punct('{'),
    Step::List {
        of: RuleName::Variable,
        separator: ',',
    },
    Step::Punct('}'),
];

static VARIABLE: &[Step] = &[
    Step::NamedKey {
        style: Style::Variable,
    },
    Step::Punct(':'),
    Step::Rule(RuleName::Value),
];

static NUMBER_VALUE: &[Step] = &[Step::Term {
    kind: TokenKind::Number,
    style: Style::Number,
}];

static STRING_VALUE: &[Step] = &[Step::Term {
    kind: TokenKind::String,
    style: Style::String,
}];

static BOOLEAN_VALUE: &[Step] = &[Step::Term {
    kind: TokenKind::Keyword,
    style: Style::Builtin,
}];

static NULL_VALUE: &[Step] = &[Step::Term {
    kind: TokenKind::Keyword,
    style: Style::Keyword,
}];

static LIST_VALUE: &[Step] = &[
    Step::Punct('['),
    Step::List {
        of: RuleName::Value,
        separator: ',',
    },
    Step::Punct(']'),
];

static OBJECT_VALUE: &[Step] = &[
    Step::Punct('{'),
    Step::List {
        of: RuleName::ObjectField,
        separator: ',',
    },
    Step::Punct('}'),
];

static OBJECT_FIELD: &[Step] = &[
    Step::NamedKey {
        style: Style::Attribute,
    },
    Step::Punct(':'),
    Step::Rule(RuleName::Value),
];

/// Looks up the production for a rule name.
pub fn rule(name: RuleName) -> Rule {
    match name {
        RuleName::Document => Rule::Seq(DOCUMENT),
        RuleName::Variable => Rule::Seq(VARIABLE),
        RuleName::Value => Rule::Dispatch(value_rule),
        RuleName::NumberValue => Rule::Seq(NUMBER_VALUE),
        RuleName::StringValue => Rule::Seq(STRING_VALUE),
        RuleName::BooleanValue => Rule::Seq(BOOLEAN_VALUE),
        RuleName::NullValue => Rule::Seq(NULL_VALUE),
        RuleName::ListValue => Rule::Seq(LIST_VALUE),
        RuleName::ObjectValue => Rule::Seq(OBJECT_VALUE),
        RuleName::ObjectField => Rule::Seq(OBJECT_FIELD),
    }
}

/// Number of steps in a production; a dispatch counts as a single step.
pub fn rule_len(name: RuleName) -> usize {
    match rule(name) {
        Rule::Seq(steps) => steps.len(),
        Rule::Dispatch(_) => 1,
    }
}

/// Dispatch for the polymorphic `Value` production.
///
/// `None` means the token cannot begin any value; the engine reports it as
/// invalid without expanding anything.
pub fn value_rule(token: &Token<'_>) -> Option<RuleName> {
    match token.kind {
        TokenKind::Number => Some(RuleName::NumberValue),
        TokenKind::String => Some(RuleName::StringValue),
        TokenKind::Punctuation => match token.punct_char() {
            Some('[') => Some(RuleName::ListValue),
            Some('{') => Some(RuleName::ObjectValue),
            _ => None,
        },
        TokenKind::Keyword => match token.value {
            "true" | "false" => Some(RuleName::BooleanValue),
            "null" => Some(RuleName::NullValue),
            _ => None,
        },
    }
}

/// Whether `token` can begin the production `name`, resolving through
/// leading non-terminal references and the dispatch function.
pub fn first_matches(name: RuleName, token: &Token<'_>) -> bool {
    match rule(name) {
        Rule::Dispatch(dispatch) => dispatch(token).is_some(),
        Rule::Seq(steps) => match steps.first() {
            None => false,
            Some(Step::Punct(c)) => token.punct_char() == Some(*c),
            Some(Step::Term { kind, .. }) => token.kind == *kind,
            Some(Step::NamedKey { .. }) => token.kind == TokenKind::String,
            Some(Step::Rule(inner)) => first_matches(*inner, token),
            Some(Step::List { of, .. }) => first_matches(*of, token),
        },
    }
}

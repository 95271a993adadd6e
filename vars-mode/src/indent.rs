//! The structure-aware indentation query.
//!
//! The engine records an indent target every time a bracket opens (the
//! opening line's own depth plus one); the innermost target is where the next
//! line should sit. A line that begins by closing that bracket steps back out
//! one level.

use vars_parser::vars::engine::ParserState;

use crate::config::EditorConfig;
use crate::mode::electric_input;

/// Column to indent a line that will contain `text_after`.
pub fn indent(state: &ParserState, text_after: &str, config: &EditorConfig) -> usize {
    let level = match state.levels.last() {
        None => state.indent_level,
        Some(&target) => target.saturating_sub(usize::from(electric_input().is_match(text_after))),
    };
    level * config.indent_unit
}

//! aw_action_script: parser for virtual-world object action strings.
//!
//! An action string attaches commands to object events, e.g.
//! `create color red, rotate 0 5 0; activate visible door off`. Parsing runs in
//! three stages:
//! - the input is matched against a pest grammar (`src/grammar.pest`);
//! - the parse tree is evaluated into [`RawAction`]s, resolving colors,
//!   numbers and coordinate lists on the way;
//! - the raw actions are merged into an [`ActionMap`]: first action per
//!   trigger, last command per key, attribute-less commands dropped.
//!
//! [`parse`] never fails; input that does not match yields an empty map and
//! [`explain_failure`] describes why.

mod merge;
mod parser;
pub mod resolve;

pub use aw_action_data::{ActionMap, Command, CommandKind, Trigger};
pub use merge::{merge_actions, merge_commands};
pub use parser::{AstError, clean_action_string, parse_raw};

use log::{debug, warn};

/// Commands of one trigger occurrence, before merging. `None` marks a command
/// invalidated by a repeated attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct RawAction {
    pub trigger: Trigger,
    pub commands: Vec<Option<Command>>,
}

/// Parse an action string into its normalized trigger to commands map.
///
/// Malformed or empty input yields an empty map.
pub fn parse(action_string: &str) -> ActionMap {
    match parse_raw(action_string) {
        Ok(actions) => merge_actions(actions),
        Err(AstError::Pest(msg)) => {
            debug!("action string rejected: {msg}");
            ActionMap::new()
        },
        Err(e) => {
            warn!("could not evaluate action string {action_string:?}: {e}");
            ActionMap::new()
        },
    }
}

/// Human-readable reason why `action_string` does not match the grammar, or
/// an empty string when it does.
pub fn explain_failure(action_string: &str) -> String {
    parser::explain(action_string)
}

//! Pest grammar wrapper and tree evaluator for action strings.
//!
//! Matches a cleaned input against `grammar.pest` and walks the resulting
//! pairs into [`RawAction`]s: one per trigger occurrence, commands still in
//! written order and not yet merged.

use aw_action_data::Trigger;
use pest::Parser;
use pest::iterators::{Pair, Pairs};
use pest_derive::Parser as PestParser;

use crate::RawAction;

mod commands;
mod coordinates;
mod helpers;

use commands::parse_command_pair;

#[derive(PestParser)]
#[grammar = "src/grammar.pest"]
struct ActionParser;

/// Errors that can happen when parsing an action string.
#[derive(Debug, thiserror::Error)]
pub enum AstError {
    #[error("parse error: {0}")]
    Pest(String),
    #[error("unexpected grammar shape: {0}")]
    Shape(&'static str),
    #[error("attribute '{0}' given more than once")]
    DuplicateAttribute(&'static str),
}

/// Remove DEL (U+007F) and U+0080, which leak into some property dumps.
pub fn clean_action_string(source: &str) -> String {
    source.chars().filter(|c| !matches!(c, '\u{7f}' | '\u{80}')).collect()
}

/// Match an already-cleaned string; failures carry a readable diagnostic.
fn match_action_string(cleaned: &str) -> Result<Pairs<'_, Rule>, AstError> {
    ActionParser::parse(Rule::action_string, cleaned)
        .map_err(|e| AstError::Pest(e.renamed_rules(describe_rule).to_string()))
}

/// Parse an action string into one raw action per trigger occurrence.
///
/// # Errors
/// Returns [`AstError::Pest`] when the input does not match the grammar.
pub fn parse_raw(source: &str) -> Result<Vec<RawAction>, AstError> {
    let cleaned = clean_action_string(source);
    let mut actions = Vec::new();
    for pair in match_action_string(&cleaned)? {
        match pair.as_rule() {
            Rule::action => actions.push(parse_action_pair(pair)?),
            Rule::EOI => {},
            _ => return Err(AstError::Shape("unexpected top-level item")),
        }
    }
    Ok(actions)
}

/// Diagnostic for input that fails to match; empty when it matches.
pub fn explain(source: &str) -> String {
    let cleaned = clean_action_string(source);
    match match_action_string(&cleaned) {
        Ok(_) => String::new(),
        Err(e) => e.to_string(),
    }
}

fn parse_action_pair(pair: Pair<'_, Rule>) -> Result<RawAction, AstError> {
    let mut it = pair.into_inner();
    let keyword = it.next().ok_or(AstError::Shape("action without trigger"))?;
    let trigger = Trigger::from_keyword(keyword.as_str()).ok_or(AstError::Shape("unknown trigger keyword"))?;
    let commands = it.map(parse_command_pair).collect::<Result<Vec<_>, _>>()?;
    Ok(RawAction { trigger, commands })
}

/// Plain-language names for the tokens a failed match expected.
fn describe_rule(rule: &Rule) -> String {
    match rule {
        Rule::EOI => "end of input".to_string(),
        Rule::trigger => "trigger keyword (create, activate, bump, adone, end)".to_string(),
        Rule::action => "action".to_string(),
        Rule::invalid_command => "command".to_string(),
        Rule::float | Rule::signed_float => "number".to_string(),
        Rule::force_signed_float => "signed number".to_string(),
        Rule::integer => "integer".to_string(),
        Rule::world_coordinates | Rule::absolute_coordinates | Rule::relative_coordinates => {
            "world coordinates".to_string()
        },
        other => format!("{other:?}").replace('_', " "),
    }
}

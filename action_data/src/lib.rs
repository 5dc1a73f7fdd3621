//! Shared data model for parsed action strings.
//!
//! These are the types `aw_action_script` produces: a map from [`Trigger`] to
//! the ordered [`Command`]s that fire on it. The crate carries no parsing code,
//! so a renderer or editor can depend on it without pulling in the grammar.

pub mod defs;

pub use defs::*;

//! Normalization of raw actions into the final [`ActionMap`].

use std::collections::HashSet;

use aw_action_data::{ActionMap, Command, CommandKind};
use indexmap::IndexMap;
use log::trace;

use crate::RawAction;

/// Deduplication key of a command within one trigger.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum MergeKey {
    /// Every `name` command shares one slot, whatever its target.
    Name,
    Scoped(CommandKind, String),
}

impl MergeKey {
    fn of(command: &Command) -> Self {
        match command.kind() {
            CommandKind::Name => MergeKey::Name,
            kind => MergeKey::Scoped(kind, command.target_name().unwrap_or_default().to_string()),
        }
    }
}

/// Keep the first action per trigger and merge its commands; triggers left
/// without commands are omitted.
pub fn merge_actions(actions: Vec<RawAction>) -> ActionMap {
    let mut seen = HashSet::new();
    let mut merged = ActionMap::new();
    for action in actions {
        if !seen.insert(action.trigger) {
            trace!("ignoring repeated '{}' action", action.trigger);
            continue;
        }
        let commands = merge_commands(action.commands);
        if commands.is_empty() {
            trace!("'{}' has no commands left after merging", action.trigger);
            continue;
        }
        merged.insert(action.trigger, commands);
    }
    merged
}

/// Drop invalidated and attribute-less commands, then keep the last command
/// per key at the position of its first occurrence.
pub fn merge_commands(commands: Vec<Option<Command>>) -> Vec<Command> {
    let mut merged: IndexMap<MergeKey, Command> = IndexMap::new();
    for command in commands.into_iter().flatten() {
        if command.is_empty() && !command.kind().kept_when_empty() {
            trace!("dropping '{}' command without attributes", command.kind());
            continue;
        }
        // an existing key keeps its slot; only the value is replaced
        merged.insert(MergeKey::of(&command), command);
    }
    merged.into_values().collect()
}

#[cfg(test)]
mod tests {
    use aw_action_data::{Color, ColorCommand, InvalidCommand, NameCommand, RotateCommand, Trigger};

    use super::*;

    fn color(rgb: (u8, u8, u8), target: Option<&str>) -> Option<Command> {
        Some(Command::Color(ColorCommand {
            color: Some(Color::new(rgb.0, rgb.1, rgb.2)),
            tint: None,
            target_name: target.map(str::to_string),
        }))
    }

    fn name(target: &str) -> Option<Command> {
        Some(Command::Name(NameCommand { target_name: Some(target.to_string()) }))
    }

    #[test]
    fn last_value_wins_at_first_position() {
        let merged = merge_commands(vec![color((1, 1, 1), None), Some(Command::Examine), color((2, 2, 2), None)]);
        assert_eq!(merged, vec![color((2, 2, 2), None).unwrap(), Command::Examine]);
    }

    #[test]
    fn targets_keep_separate_slots() {
        let merged = merge_commands(vec![color((1, 1, 1), None), color((2, 2, 2), Some("a")), color((3, 3, 3), None)]);
        assert_eq!(merged, vec![color((3, 3, 3), None).unwrap(), color((2, 2, 2), Some("a")).unwrap()]);
    }

    #[test]
    fn name_commands_share_one_slot() {
        let merged = merge_commands(vec![name("foo"), name("bar"), name("baz")]);
        assert_eq!(merged, vec![name("baz").unwrap()]);
    }

    #[test]
    fn invalidated_and_empty_commands_are_dropped() {
        let merged = merge_commands(vec![
            None,
            Some(Command::Rotate(RotateCommand::default())),
            Some(Command::Examine),
        ]);
        assert_eq!(merged, vec![Command::Examine]);
    }

    #[test]
    fn empty_command_does_not_override_earlier_value() {
        let merged = merge_commands(vec![color((1, 1, 1), None), Some(Command::Color(ColorCommand::default()))]);
        assert_eq!(merged, vec![color((1, 1, 1), None).unwrap()]);
    }

    #[test]
    fn invalid_commands_collapse_to_the_last() {
        let invalid = |text: &str| Some(Command::Invalid(InvalidCommand { command_text: text.to_string() }));
        let merged = merge_commands(vec![invalid("foo"), Some(Command::Examine), invalid("bar")]);
        assert_eq!(merged, vec![invalid("bar").unwrap(), Command::Examine]);
    }

    #[test]
    fn first_action_per_trigger_wins_even_when_it_empties() {
        let actions = vec![
            RawAction { trigger: Trigger::Bump, commands: vec![None] },
            RawAction { trigger: Trigger::Create, commands: vec![Some(Command::Examine)] },
            RawAction { trigger: Trigger::Bump, commands: vec![Some(Command::Examine)] },
        ];
        let merged = merge_actions(actions);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged.get(&Trigger::Create), Some(&vec![Command::Examine]));
        assert!(!merged.contains_key(&Trigger::Bump));
    }

    #[test]
    fn trigger_order_follows_first_appearance() {
        let actions = vec![
            RawAction { trigger: Trigger::Adone, commands: vec![Some(Command::Examine)] },
            RawAction { trigger: Trigger::Create, commands: vec![Some(Command::Examine)] },
        ];
        let keys: Vec<_> = merge_actions(actions).keys().copied().collect();
        assert_eq!(keys, vec![Trigger::Adone, Trigger::Create]);
    }
}

//! Canonical command synthesis from translated slots.

use crate::slots::Slots;
use serde::{Serialize, Serializer};
use std::fmt;

/// Wire form of [`CanonicalCommand::Unrecognized`].
pub const UNRECOGNIZED: &str = "error: unrecognized command";

/// The small grammar the downstream controller understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalCommand {
    /// `jump`
    Jump,
    /// `change color <name>`, or `change color random` without a name
    ChangeColor(Option<&'static str>),
    /// `<action> <direction>`, e.g. `move left`
    Directed {
        action: &'static str,
        direction: &'static str,
    },
    /// No rule matched.
    Unrecognized,
}

impl CanonicalCommand {
    pub fn is_recognized(&self) -> bool {
        !matches!(self, CanonicalCommand::Unrecognized)
    }
}

impl fmt::Display for CanonicalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalCommand::Jump => f.write_str("jump"),
            CanonicalCommand::ChangeColor(Some(color)) => write!(f, "change color {color}"),
            CanonicalCommand::ChangeColor(None) => f.write_str("change color random"),
            CanonicalCommand::Directed { action, direction } => write!(f, "{action} {direction}"),
            CanonicalCommand::Unrecognized => f.write_str(UNRECOGNIZED),
        }
    }
}

impl Serialize for CanonicalCommand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// First matching rule wins:
///
/// 1. `change` with a color: `change color <color>`
/// 2. `change` without a color: `change color random`
/// 3. `jump`: `jump`
/// 4. no action, direction `left`: `move left`
/// 5. no action, direction `right`: `move right`
/// 6. action and direction: `<action> <direction>`
/// 7. anything else is unrecognized
///
/// A lone `up` or `down` has no rule and ends up unrecognized.
pub fn synthesize(slots: &Slots) -> CanonicalCommand {
    let command = match (slots.action, slots.direction, slots.color) {
        (Some("change"), _, color) => CanonicalCommand::ChangeColor(color),
        (Some("jump"), _, _) => CanonicalCommand::Jump,
        (None, Some(direction @ ("left" | "right")), _) => CanonicalCommand::Directed {
            action: "move",
            direction,
        },
        (Some(action), Some(direction), _) => CanonicalCommand::Directed { action, direction },
        _ => CanonicalCommand::Unrecognized,
    };
    if !command.is_recognized() {
        tracing::warn!(?slots, "no synthesis rule matched");
    }
    command
}

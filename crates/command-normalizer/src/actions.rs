//! Controller-side view of canonical commands

use crate::error::{NormalizerError, Result};
use crate::lexicon::{self, Rgb};
use crate::synthesis::{CanonicalCommand, UNRECOGNIZED};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An action the controller can carry out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ControllerAction {
    /// Step one unit in a direction
    Move { direction: Direction },
    /// Jump in place
    Jump,
    /// Repaint the player
    ChangeColor { color: ColorChoice },
}

/// Directions for move commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Color requested by a change-color command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorChoice {
    /// Controller picks any color
    Random,
    /// A named color; `rgb` is known for every lexicon color
    Named { name: String, rgb: Option<Rgb> },
}

impl Direction {
    /// Screen-space delta (x, y) for a step; y grows downwards
    pub fn to_vector(&self, magnitude: f32) -> (f32, f32) {
        match self {
            Direction::Up => (0.0, -magnitude),
            Direction::Down => (0.0, magnitude),
            Direction::Left => (-magnitude, 0.0),
            Direction::Right => (magnitude, 0.0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl FromStr for Direction {
    type Err = NormalizerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(NormalizerError::UnrecognizedCommand(format!(
                "unknown direction '{other}'"
            ))),
        }
    }
}

impl ColorChoice {
    pub fn named(name: &str) -> Self {
        ColorChoice::Named {
            name: name.to_string(),
            rgb: lexicon::color_rgb(name),
        }
    }
}

impl ControllerAction {
    /// Interpret a canonical command string the way the controller does:
    /// `move <dir>`, `jump`, `change color <name|random>`.
    pub fn from_command(command: &str) -> Result<Self> {
        let words: Vec<&str> = command.split_whitespace().collect();
        let action = match words.as_slice() {
            ["jump"] => ControllerAction::Jump,
            ["move", direction] => ControllerAction::Move {
                direction: direction.parse()?,
            },
            ["change", "color", "random"] => ControllerAction::ChangeColor {
                color: ColorChoice::Random,
            },
            ["change", "color", name] => ControllerAction::ChangeColor {
                color: ColorChoice::named(name),
            },
            _ => {
                let reason = if command == UNRECOGNIZED {
                    "normalizer reported no match".to_string()
                } else {
                    command.to_string()
                };
                return Err(NormalizerError::UnrecognizedCommand(reason));
            }
        };
        Ok(action)
    }
}

impl TryFrom<CanonicalCommand> for ControllerAction {
    type Error = NormalizerError;

    fn try_from(command: CanonicalCommand) -> Result<Self> {
        ControllerAction::from_command(&command.to_string())
    }
}

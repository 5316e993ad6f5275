//! Keyword slot extraction.

use crate::lexicon;
use crate::tokenizer::Token;
use crate::translate::resolve_synonym;
use serde::Serialize;

/// Action, direction and color picked out of a sentence.
///
/// Each field holds at most one value. When several tokens qualify for the
/// same field the last one wins: "go left right" has direction `right`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Slots {
    pub action: Option<&'static str>,
    pub direction: Option<&'static str>,
    pub color: Option<&'static str>,
}

impl Slots {
    pub fn is_empty(&self) -> bool {
        self.action.is_none() && self.direction.is_none() && self.color.is_none()
    }
}

/// Scans tokens in order. Each token is checked as an action first, then a
/// direction, then a color; tokens matching none are skipped.
pub fn extract(tokens: &[Token]) -> Slots {
    let mut slots = Slots::default();
    for token in tokens {
        let word = token.lower.as_str();
        if let Some(action) = lexicon::action_keyword(word) {
            slots.action = Some(resolve_synonym(action));
        } else if let Some(direction) = lexicon::direction_keyword(word) {
            slots.direction = Some(direction);
        } else if let Some(color) = lexicon::color_keyword(word) {
            slots.color = Some(color);
        }
    }
    tracing::debug!(?slots, tokens = tokens.len(), "extracted slots");
    slots
}

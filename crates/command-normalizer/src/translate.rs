//! Synonym resolution and Danish to English rewriting of slots.

use crate::lexicon;
use crate::slots::Slots;

/// Canonical action for an action word, or the word itself when it has no
/// synonym entry.
pub fn resolve_synonym(action: &str) -> &str {
    lexicon::synonym(action).unwrap_or(action)
}

/// Rewrites the action through the synonym table once more and the direction
/// through the Danish direction table. Colors stay in the language they were
/// given in.
///
/// The extra synonym pass only matters for chained entries: `løb` resolves to
/// `run` during extraction and to `move` here.
pub fn translate(slots: Slots) -> Slots {
    let translated = Slots {
        action: slots.action.map(resolve_synonym),
        direction: slots
            .direction
            .map(|direction| lexicon::danish_direction(direction).unwrap_or(direction)),
        color: slots.color,
    };
    if translated != slots {
        tracing::debug!(before = ?slots, after = ?translated, "translated slots");
    }
    translated
}

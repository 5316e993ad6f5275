//! Open-vocabulary statistical spelling correction for English text.

use crate::spelling::StatisticalCorrector;
use crate::vocabulary::edit_distance;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Counts for the built-in English corpus. Every command keyword and every
/// word of a canonical command is present, so canonical output is never
/// rewritten on a second pass.
const ENGLISH_CORPUS: &[(&str, u64)] = &[
    // command vocabulary
    ("move", 9000),
    ("go", 9000),
    ("step", 6000),
    ("run", 6000),
    ("walk", 6000),
    ("jump", 9000),
    ("hop", 4000),
    ("leap", 4000),
    ("change", 9000),
    ("color", 8000),
    ("colour", 3000),
    ("random", 5000),
    ("right", 9000),
    ("left", 9000),
    ("up", 9000),
    ("down", 9000),
    ("red", 7000),
    ("green", 7000),
    ("blue", 7000),
    ("yellow", 7000),
    ("purple", 7000),
    ("orange", 7000),
    ("pink", 7000),
    ("black", 7000),
    ("white", 7000),
    ("gray", 7000),
    ("grey", 2000),
    // everyday English
    ("the", 80000),
    ("to", 60000),
    ("and", 50000),
    ("a", 50000),
    ("of", 40000),
    ("in", 30000),
    ("it", 30000),
    ("you", 30000),
    ("is", 30000),
    ("i", 30000),
    ("that", 20000),
    ("for", 20000),
    ("on", 20000),
    ("with", 15000),
    ("be", 15000),
    ("this", 15000),
    ("at", 12000),
    ("me", 12000),
    ("my", 12000),
    ("your", 10000),
    ("can", 10000),
    ("will", 10000),
    ("now", 9000),
    ("please", 8000),
    ("then", 8000),
    ("make", 8000),
    ("let", 7000),
    ("lets", 2000),
    ("turn", 6000),
    ("again", 5000),
    ("back", 5000),
    ("forward", 4000),
    ("once", 4000),
    ("twice", 2000),
    ("more", 5000),
    ("bit", 3000),
    ("little", 3000),
    ("far", 3000),
    ("fast", 3000),
    ("slow", 2000),
    ("slowly", 2000),
    ("quickly", 2000),
    ("stop", 3000),
    ("start", 3000),
    ("player", 3000),
    ("square", 3000),
    ("box", 3000),
    ("block", 2000),
    ("character", 2000),
    ("one", 5000),
    ("two", 4000),
    ("three", 3000),
    ("side", 3000),
    ("into", 4000),
    ("could", 4000),
    ("would", 4000),
    ("should", 3000),
    ("do", 8000),
    ("not", 8000),
    ("it's", 2000),
    ("there", 5000),
    ("here", 5000),
    ("over", 4000),
    ("some", 4000),
    ("new", 4000),
    ("different", 2000),
    ("something", 2000),
    ("try", 3000),
    ("hello", 1000),
    ("hi", 1000),
    ("yes", 1000),
    ("no", 3000),
];

fn word_pattern() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| {
        // Letters only; digits, underscores and punctuation are left alone.
        Regex::new(r"[^\W\d_]+(?:'[^\W\d_]+)?").expect("Invalid regex pattern - this is a bug")
    })
}

/// Norvig-style corrector over a word-count corpus.
///
/// Known words are kept. Otherwise the corpus word at the smallest edit
/// distance (at most two) wins, higher count first, alphabetical on a tie.
/// Words with no candidate are kept as written.
#[derive(Debug, Clone, Default)]
pub struct FrequencyCorrector {
    counts: HashMap<String, u64>,
}

impl FrequencyCorrector {
    pub const MAX_EDIT_DISTANCE: usize = 2;

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let mut corrector = Self::default();
        corrector.extend(entries);
        corrector
    }

    /// Built-in English corpus.
    pub fn english() -> Self {
        Self::from_entries(ENGLISH_CORPUS.iter().copied())
    }

    /// Adds counts; words already present accumulate.
    pub fn extend<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        for (word, count) in entries {
            *self.counts.entry(word.as_ref().to_lowercase()).or_insert(0) += count;
        }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(&word.to_lowercase()).copied().unwrap_or(0)
    }

    /// Best replacement for a single word; `None` when the word is known or
    /// nothing is close enough.
    pub fn suggest(&self, word: &str) -> Option<&str> {
        let lower = word.to_lowercase();
        if self.counts.contains_key(&lower) {
            return None;
        }
        let len = lower.chars().count();
        let mut best: Option<(&str, u64, usize)> = None;
        for (candidate, count) in &self.counts {
            if candidate.chars().count().abs_diff(len) > Self::MAX_EDIT_DISTANCE {
                continue;
            }
            let dist = edit_distance(&lower, candidate);
            if dist > Self::MAX_EDIT_DISTANCE {
                continue;
            }
            let better = match best {
                Some((best_word, best_count, best_dist)) => {
                    (dist, std::cmp::Reverse(*count), candidate.as_str())
                        < (best_dist, std::cmp::Reverse(best_count), best_word)
                }
                None => true,
            };
            if better {
                best = Some((candidate.as_str(), *count, dist));
            }
        }
        best.map(|(candidate, _, _)| candidate)
    }
}

impl StatisticalCorrector for FrequencyCorrector {
    fn correct_text(&self, text: &str) -> String {
        word_pattern()
            .replace_all(text, |caps: &Captures| {
                let word = &caps[0];
                match self.suggest(word) {
                    Some(fixed) => fixed.to_string(),
                    None => word.to_string(),
                }
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_text_is_untouched() {
        let english = FrequencyCorrector::english();
        assert_eq!(english.correct_text("move left"), "move left");
        assert_eq!(english.correct_text("Change color random!"), "Change color random!");
    }

    #[test]
    fn misspellings_are_fixed() {
        let english = FrequencyCorrector::english();
        assert_eq!(english.correct_text("moev rihgt"), "move right");
        assert_eq!(english.correct_text("jumpp"), "jump");
        assert_eq!(english.correct_text("chnage colr to blu"), "change color to blue");
    }

    #[test]
    fn far_words_are_kept() {
        let english = FrequencyCorrector::english();
        assert_eq!(english.correct_text("xylophone"), "xylophone");
        assert_eq!(english.correct_text("move 12"), "move 12");
    }

    #[test]
    fn extra_counts_accumulate() {
        let mut corrector = FrequencyCorrector::from_entries([("cat", 1u64), ("cot", 1)]);
        assert_eq!(corrector.suggest("cut"), Some("cat"));
        corrector.extend([("COT", 10u64)]);
        assert_eq!(corrector.count("cot"), 11);
        assert_eq!(corrector.suggest("cut"), Some("cot"));
    }
}

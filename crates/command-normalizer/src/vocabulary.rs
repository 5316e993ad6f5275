//! Closed-vocabulary spelling correction.

use crate::lexicon::DANISH_WORDS;
use crate::spelling::ClosedVocabularyCorrector;
use std::sync::OnceLock;

pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2;

/// Corrects single tokens against a fixed word list.
///
/// A token is replaced by the closest vocabulary word within
/// `max_edit_distance` edits. Ties go to the higher frequency, then to the
/// word listed first. Tokens with no candidate come back unchanged.
#[derive(Debug, Clone)]
pub struct VocabularyCorrector {
    words: Vec<(String, u64)>,
    max_edit_distance: usize,
}

impl VocabularyCorrector {
    /// Every word gets frequency 1.
    pub fn new<I, S>(words: I, max_edit_distance: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_frequencies(
            words.into_iter().map(|w| (w.as_ref().to_string(), 1)),
            max_edit_distance,
        )
    }

    pub fn with_frequencies<I>(entries: I, max_edit_distance: usize) -> Self
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        let mut words: Vec<(String, u64)> = Vec::new();
        for (word, freq) in entries {
            let word = word.to_lowercase();
            match words.iter_mut().find(|(w, _)| *w == word) {
                Some(existing) => existing.1 += freq,
                None => words.push((word, freq)),
            }
        }
        Self {
            words,
            max_edit_distance,
        }
    }

    /// Shared Danish corrector, built from the lexicon on first use and never
    /// changed afterwards.
    pub fn danish() -> &'static VocabularyCorrector {
        static DANISH: OnceLock<VocabularyCorrector> = OnceLock::new();
        DANISH.get_or_init(|| {
            tracing::debug!(words = DANISH_WORDS.len(), "loading Danish vocabulary");
            VocabularyCorrector::new(DANISH_WORDS.iter(), DEFAULT_MAX_EDIT_DISTANCE)
        })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.words.iter().any(|(w, _)| *w == word)
    }

    /// Closest vocabulary word, if any lies within range.
    pub fn best_match(&self, token: &str) -> Option<&str> {
        let token = token.to_lowercase();
        let len = token.chars().count();
        let mut best: Option<(&str, u64, usize)> = None;
        for (word, freq) in &self.words {
            if word.chars().count().abs_diff(len) > self.max_edit_distance {
                continue;
            }
            let dist = edit_distance(&token, word);
            if dist > self.max_edit_distance {
                continue;
            }
            let better = match best {
                Some((_, best_freq, best_dist)) => {
                    dist < best_dist || (dist == best_dist && *freq > best_freq)
                }
                None => true,
            };
            if better {
                best = Some((word.as_str(), *freq, dist));
            }
        }
        best.map(|(word, _, _)| word)
    }
}

impl ClosedVocabularyCorrector for VocabularyCorrector {
    fn correct_token(&self, token: &str) -> String {
        match self.best_match(token) {
            Some(word) => word.to_string(),
            None => token.to_string(),
        }
    }
}

/// Optimal string alignment distance over chars: insertions, deletions,
/// substitutions and adjacent transpositions each cost one.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let width = b.len() + 1;
    let mut d = vec![0usize; (a.len() + 1) * width];
    for i in 0..=a.len() {
        d[i * width] = i;
    }
    for j in 0..=b.len() {
        d[j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut v = (d[(i - 1) * width + j] + 1)
                .min(d[i * width + j - 1] + 1)
                .min(d[(i - 1) * width + j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                v = v.min(d[(i - 2) * width + j - 2] + 1);
            }
            d[i * width + j] = v;
        }
    }
    d[a.len() * width + b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_basics() {
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("venstre", "venstre"), 0);
        assert_eq!(edit_distance("vesntre", "venstre"), 1);
        assert_eq!(edit_distance("hojre", "højre"), 1);
        assert_eq!(edit_distance("til", "gul"), 2);
        assert_eq!(edit_distance("change", "orange"), 2);
    }

    #[test]
    fn known_words_are_lowercased() {
        let danish = VocabularyCorrector::danish();
        assert_eq!(danish.correct_token("Højre"), "højre");
        assert_eq!(danish.correct_token("venstre"), "venstre");
    }

    #[test]
    fn typos_are_repaired() {
        let danish = VocabularyCorrector::danish();
        assert_eq!(danish.correct_token("vesntre"), "venstre");
        assert_eq!(danish.correct_token("hojre"), "højre");
        assert_eq!(danish.correct_token("skfit"), "skift");
        assert_eq!(danish.correct_token("venstre."), "venstre");
    }

    #[test]
    fn unmatched_tokens_pass_through() {
        let danish = VocabularyCorrector::danish();
        assert_eq!(danish.correct_token("Move"), "Move");
        assert_eq!(danish.correct_token("xyzzy"), "xyzzy");
    }

    #[test]
    fn long_tokens_skip_the_distance_matrix() {
        let long = "a".repeat(100_000);
        assert_eq!(VocabularyCorrector::danish().best_match(&long), None);
        assert_eq!(VocabularyCorrector::danish().correct_token(&long), long);
        // Length filter keeps near-length candidates: one extra letter still matches.
        assert_eq!(VocabularyCorrector::danish().correct_token("venstree"), "venstre");
    }

    #[test]
    fn ties_prefer_frequency_then_order() {
        let by_order = VocabularyCorrector::new(["cat", "cot"], 2);
        assert_eq!(by_order.correct_token("cut"), "cat");

        let by_freq = VocabularyCorrector::with_frequencies(
            [("cat".to_string(), 1), ("cot".to_string(), 5)],
            2,
        );
        assert_eq!(by_freq.correct_token("cut"), "cot");
    }

    #[test]
    fn duplicate_entries_merge() {
        let corrector = VocabularyCorrector::new(["Hop", "hop"], 1);
        assert_eq!(corrector.len(), 1);
        assert!(corrector.contains("HOP"));
    }
}

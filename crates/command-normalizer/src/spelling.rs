//! Spelling correction dispatch keyed on the detected language.

use crate::frequency::FrequencyCorrector;
use crate::language::Language;
use crate::vocabulary::VocabularyCorrector;
use std::fmt;
use std::sync::Arc;

/// Corrects one token against a fixed word list. Must never fail: a token
/// without a confident match is returned unchanged.
pub trait ClosedVocabularyCorrector: Send + Sync {
    fn correct_token(&self, token: &str) -> String;
}

/// Best-effort correction of a whole string.
pub trait StatisticalCorrector: Send + Sync {
    fn correct_text(&self, text: &str) -> String;
}

/// Leaves everything as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl ClosedVocabularyCorrector for Passthrough {
    fn correct_token(&self, token: &str) -> String {
        token.to_string()
    }
}

impl StatisticalCorrector for Passthrough {
    fn correct_text(&self, text: &str) -> String {
        text.to_string()
    }
}

impl<T: ClosedVocabularyCorrector + ?Sized> ClosedVocabularyCorrector for &T {
    fn correct_token(&self, token: &str) -> String {
        (**self).correct_token(token)
    }
}

#[derive(Clone)]
pub struct SpellCorrector {
    danish: Arc<dyn ClosedVocabularyCorrector>,
    english: Arc<dyn StatisticalCorrector>,
}

impl SpellCorrector {
    pub fn new(
        danish: Arc<dyn ClosedVocabularyCorrector>,
        english: Arc<dyn StatisticalCorrector>,
    ) -> Self {
        Self { danish, english }
    }

    /// Shared Danish vocabulary plus the given English corrector.
    pub fn with_english(english: FrequencyCorrector) -> Self {
        Self::new(Arc::new(VocabularyCorrector::danish()), Arc::new(english))
    }

    pub fn disabled() -> Self {
        Self::new(Arc::new(Passthrough), Arc::new(Passthrough))
    }

    /// Danish text is corrected word by word and re-joined with single
    /// spaces; English text goes to the statistical corrector whole.
    pub fn correct(&self, text: &str, language: Language) -> String {
        let corrected = match language {
            Language::Danish => text
                .split_whitespace()
                .map(|token| self.danish.correct_token(token))
                .collect::<Vec<_>>()
                .join(" "),
            Language::English => self.english.correct_text(text),
        };
        if corrected != text {
            tracing::debug!(%language, original = text, corrected = %corrected, "spelling corrected");
        }
        corrected
    }
}

impl Default for SpellCorrector {
    fn default() -> Self {
        Self::with_english(FrequencyCorrector::english())
    }
}

impl fmt::Debug for SpellCorrector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpellCorrector").finish_non_exhaustive()
    }
}

use crate::lexicon;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Language a sentence is treated as for spelling correction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Danish,
    #[default]
    English,
}

impl Language {
    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Danish => "da",
            Language::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Danish => f.write_str("danish"),
            Language::English => f.write_str("english"),
        }
    }
}

/// Danish if any whitespace-separated word is a known Danish word, English
/// otherwise. One Danish word flips the whole sentence.
pub fn detect_language(text: &str) -> Language {
    let danish_words = text
        .split_whitespace()
        .filter(|word| lexicon::is_danish_word(&word.to_lowercase()))
        .count();
    let language = if danish_words > 0 {
        Language::Danish
    } else {
        Language::English
    };
    tracing::debug!(danish_words, %language, "detected language");
    language
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_by_default() {
        assert_eq!(detect_language("move right"), Language::English);
        assert_eq!(detect_language(""), Language::English);
        assert_eq!(detect_language("   "), Language::English);
    }

    #[test]
    fn any_danish_word_wins() {
        assert_eq!(detect_language("hop til højre"), Language::Danish);
        assert_eq!(detect_language("please move the square VENSTRE"), Language::Danish);
    }

    #[test]
    fn iso_codes() {
        assert_eq!(Language::Danish.code(), "da");
        assert_eq!(Language::English.code(), "en");
        assert_eq!(detect_language("gå op").code(), "da");
    }

    #[test]
    fn punctuation_hides_words() {
        // Pieces are compared whole, so a trailing period defeats the match.
        assert_eq!(detect_language("venstre."), Language::English);
    }
}

//! The normalization pipeline: raw text in, canonical command out

use crate::error::Result;
use crate::frequency::FrequencyCorrector;
use crate::language::{detect_language, Language};
use crate::lexicon::DANISH_WORDS;
use crate::loader::parse_word_frequencies;
use crate::slots::{extract, Slots};
use crate::spelling::SpellCorrector;
use crate::synthesis::{synthesize, CanonicalCommand};
use crate::tokenizer::{RegexTokenizer, Token, Tokenizer};
use crate::translate::translate;
use crate::vocabulary::{VocabularyCorrector, DEFAULT_MAX_EDIT_DISTANCE};
use crate::NormalizerConfig;
use serde::Serialize;
use std::sync::Arc;

/// Every intermediate stage of one pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct NormalizeReport {
    /// Original input
    pub input: String,
    /// Language used for spelling correction
    pub language: Language,
    /// Text after spelling correction
    pub corrected: String,
    /// Tokens of the lower-cased, trimmed corrected text
    pub tokens: Vec<Token>,
    /// Slots as extracted
    pub extracted: Slots,
    /// Slots after synonym and direction translation
    pub translated: Slots,
    /// Synthesized command
    pub command: CanonicalCommand,
}

/// Main command normalizer
pub struct CommandNormalizer {
    config: NormalizerConfig,
    corrector: SpellCorrector,
    tokenizer: Arc<dyn Tokenizer>,
}

impl CommandNormalizer {
    /// Create a normalizer from configuration. Loads the extra English word
    /// list when one is configured.
    pub fn new(config: NormalizerConfig) -> Result<Self> {
        config.validate()?;

        let corrector = if config.correct_spelling {
            let mut english = FrequencyCorrector::english();
            if let Some(path) = &config.english_frequency_file {
                let raw = std::fs::read_to_string(path)?;
                english.extend(parse_word_frequencies(&raw)?);
            }
            if config.max_edit_distance == DEFAULT_MAX_EDIT_DISTANCE {
                SpellCorrector::with_english(english)
            } else {
                let danish = VocabularyCorrector::new(DANISH_WORDS.iter(), config.max_edit_distance);
                SpellCorrector::new(Arc::new(danish), Arc::new(english))
            }
        } else {
            SpellCorrector::disabled()
        };

        Ok(Self::with_parts(config, corrector, Arc::new(RegexTokenizer)))
    }

    /// Assemble a normalizer from explicit collaborators
    pub fn with_parts(
        config: NormalizerConfig,
        corrector: SpellCorrector,
        tokenizer: Arc<dyn Tokenizer>,
    ) -> Self {
        Self {
            config,
            corrector,
            tokenizer,
        }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize raw text to its canonical command string
    pub fn normalize(&self, raw: &str) -> String {
        self.command(raw).to_string()
    }

    /// Normalize raw text to a [`CanonicalCommand`]
    pub fn command(&self, raw: &str) -> CanonicalCommand {
        self.process(raw).command
    }

    /// Run the pipeline and keep every stage
    pub fn process(&self, raw: &str) -> NormalizeReport {
        let language = detect_language(raw);
        let corrected = self.corrector.correct(raw, language);
        let tokens = self.tokenizer.tokenize(corrected.to_lowercase().trim());
        let extracted = extract(&tokens);
        let translated = translate(extracted);
        let command = synthesize(&translated);

        tracing::debug!(input = raw, %language, %command, "normalized command");

        NormalizeReport {
            input: raw.to_string(),
            language,
            corrected,
            tokens,
            extracted,
            translated,
            command,
        }
    }
}

impl std::fmt::Debug for CommandNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandNormalizer")
            .field("config", &self.config)
            .field("corrector", &self.corrector)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NormalizerError;
    use crate::tokenizer::WhitespaceTokenizer;

    fn normalizer() -> CommandNormalizer {
        CommandNormalizer::new(NormalizerConfig::default()).unwrap()
    }

    #[test]
    fn report_tracks_every_stage() {
        let report = normalizer().process("Gå OP");
        assert_eq!(report.language, Language::Danish);
        assert_eq!(report.corrected, "gå op");
        assert_eq!(report.tokens.len(), 2);
        assert_eq!(report.extracted.direction, Some("op"));
        assert_eq!(report.translated.direction, Some("up"));
        assert_eq!(report.command.to_string(), "move up");
    }

    #[test]
    fn typos_are_corrected_before_extraction() {
        let n = normalizer();
        assert_eq!(n.normalize("moev to the rihgt"), "move right");
        assert_eq!(n.normalize("gå vesntre"), "move left");
        assert_eq!(n.normalize("jmup"), "jump");
    }

    #[test]
    fn disabled_spelling_leaves_typos() {
        let n = CommandNormalizer::new(NormalizerConfig {
            correct_spelling: false,
            ..NormalizerConfig::default()
        })
        .unwrap();
        assert_eq!(n.normalize("moev to the rihgt"), crate::UNRECOGNIZED);
        assert_eq!(n.normalize("move to the right"), "move right");
    }

    #[test]
    fn punctuation_is_split_by_the_tokenizer() {
        assert_eq!(normalizer().normalize("Jump!"), "jump");

        let n = CommandNormalizer::with_parts(
            NormalizerConfig::default(),
            SpellCorrector::disabled(),
            Arc::new(WhitespaceTokenizer),
        );
        assert_eq!(n.normalize("jump!"), crate::UNRECOGNIZED);
    }

    #[test]
    fn custom_edit_distance_is_honored() {
        let strict = CommandNormalizer::new(NormalizerConfig {
            max_edit_distance: 0,
            ..NormalizerConfig::default()
        })
        .unwrap();
        // "vesntre" stays misspelled and matches nothing
        assert_eq!(strict.normalize("gå vesntre"), crate::UNRECOGNIZED);
    }

    #[test]
    fn missing_word_list_fails_construction() {
        let err = CommandNormalizer::new(NormalizerConfig {
            english_frequency_file: Some("/nonexistent/words.txt".into()),
            ..NormalizerConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, NormalizerError::Io(_)));
    }

    #[test]
    fn malformed_word_list_fails_construction() {
        let path = std::env::temp_dir().join(format!("cmdnorm-bad-words-{}.txt", std::process::id()));
        std::fs::write(&path, "colour 12\nsquare many\n").unwrap();
        let err = CommandNormalizer::new(NormalizerConfig {
            english_frequency_file: Some(path.clone()),
            ..NormalizerConfig::default()
        })
        .unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, NormalizerError::WordList { line: 2, .. }));
    }
}

//! Command normalizer for bilingual free-text commands
//!
//! This crate turns Danish or English free text ("gå op", "please jump",
//! "skift rød") into the handful of canonical commands a game or robot
//! controller understands: `move <dir>`, `jump`, `change color <name>` and
//! `change color random`. Anything else becomes `error: unrecognized command`.

mod actions;
mod error;
mod frequency;
mod language;
pub mod lexicon;
mod loader;
mod normalizer;
mod slots;
mod spelling;
mod synthesis;
mod tokenizer;
mod translate;
mod vocabulary;
mod wire;

pub use actions::{ColorChoice, ControllerAction, Direction};
pub use error::{NormalizerError, Result};
pub use frequency::FrequencyCorrector;
pub use language::{detect_language, Language};
pub use loader::{load_config_file, load_word_frequencies, parse_word_frequencies};
pub use normalizer::{CommandNormalizer, NormalizeReport};
pub use slots::{extract, Slots};
pub use spelling::{ClosedVocabularyCorrector, Passthrough, SpellCorrector, StatisticalCorrector};
pub use synthesis::{synthesize, CanonicalCommand, UNRECOGNIZED};
pub use tokenizer::{RegexTokenizer, Token, Tokenizer, WhitespaceTokenizer};
pub use translate::{resolve_synonym, translate};
pub use vocabulary::{edit_distance, VocabularyCorrector, DEFAULT_MAX_EDIT_DISTANCE};
pub use wire::{handle_request_line, CommandRequest, CommandResponse, ErrorResponse};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::OnceLock;

/// Configuration for command normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Run spelling correction before keyword extraction
    #[serde(default = "default_correct_spelling")]
    pub correct_spelling: bool,
    /// Edit distance limit for the Danish vocabulary corrector
    #[serde(default = "default_max_edit_distance")]
    pub max_edit_distance: usize,
    /// Extra `word count` list merged into the English corpus
    #[serde(default)]
    pub english_frequency_file: Option<PathBuf>,
}

fn default_correct_spelling() -> bool {
    true
}

fn default_max_edit_distance() -> usize {
    DEFAULT_MAX_EDIT_DISTANCE
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            correct_spelling: default_correct_spelling(),
            max_edit_distance: default_max_edit_distance(),
            english_frequency_file: None,
        }
    }
}

impl NormalizerConfig {
    pub const MAX_EDIT_DISTANCE_LIMIT: usize = 3;

    pub fn validate(&self) -> Result<()> {
        if self.max_edit_distance > Self::MAX_EDIT_DISTANCE_LIMIT {
            return Err(NormalizerError::Config(format!(
                "max_edit_distance {} exceeds {}",
                self.max_edit_distance,
                Self::MAX_EDIT_DISTANCE_LIMIT
            )));
        }
        Ok(())
    }
}

/// Initialize the shared normalizer ahead of the first request
pub fn init() -> Result<()> {
    tracing::info!(
        danish_words = lexicon::DANISH_WORDS.len(),
        "Initializing command normalizer"
    );
    VocabularyCorrector::danish();
    default_normalizer();
    Ok(())
}

/// Create a new normalizer with default configuration
pub fn create_normalizer() -> Result<CommandNormalizer> {
    CommandNormalizer::new(NormalizerConfig::default())
}

fn default_normalizer() -> &'static CommandNormalizer {
    static DEFAULT: OnceLock<CommandNormalizer> = OnceLock::new();
    DEFAULT.get_or_init(|| {
        // The default configuration names no files, so construction cannot fail.
        CommandNormalizer::with_parts(
            NormalizerConfig::default(),
            SpellCorrector::default(),
            std::sync::Arc::new(RegexTokenizer),
        )
    })
}

/// Normalize free text with the default configuration
pub fn normalize(raw: &str) -> String {
    default_normalizer().normalize(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_language() {
        assert_eq!(detect_language("move right"), Language::English);
        assert_eq!(detect_language("hop til højre"), Language::Danish);
        assert_eq!(detect_language(""), Language::English);
    }

    #[test]
    fn basic_commands() {
        let test_cases = [
            ("hop", "jump"),
            ("venstre", "move left"),
            ("gå op", "move up"),
            ("skift rød", "change color rød"),
            ("move right", "move right"),
            ("please jump", "jump"),
            ("change the color to blue", "change color blue"),
            ("change color", "change color random"),
            ("walk down", "move down"),
            ("go left", "move left"),
            ("right", "move right"),
            ("løb højre", "move right"),
            ("hop til højre", "jump"),
        ];
        for (input, expected) in test_cases {
            assert_eq!(normalize(input), expected, "input: {input:?}");
        }
    }

    // Known gap: only left and right have a rule without an action, so a
    // bare up or down is unrecognized.
    #[test]
    fn bare_vertical_direction_is_unrecognized() {
        assert_eq!(normalize("ned"), UNRECOGNIZED);
        assert_eq!(normalize("up"), UNRECOGNIZED);
        assert_eq!(normalize("down"), UNRECOGNIZED);
    }

    #[test]
    fn unrecognized_input() {
        assert_eq!(normalize(""), UNRECOGNIZED);
        assert_eq!(normalize("   "), UNRECOGNIZED);
        assert_eq!(normalize("make me a sandwich"), UNRECOGNIZED);
        assert_eq!(normalize("move"), UNRECOGNIZED);
    }

    #[test]
    fn canonical_commands_are_fixed_points() {
        let canonical = [
            "move left",
            "move right",
            "move up",
            "move down",
            "jump",
            "change color random",
            "change color red",
            "change color green",
            "change color blue",
            "change color yellow",
            "change color purple",
            "change color black",
            "change color white",
            "change color gray",
        ];
        for command in canonical {
            assert_eq!(normalize(command), command);
        }
    }

    #[test]
    fn colors_are_not_translated() {
        assert_eq!(normalize("skift grøn"), "change color grøn");
        assert_eq!(normalize("skift farve til blå"), "change color blå");
    }

    // The Danish vocabulary is tiny, so the English "change" is two edits
    // from "orange" and gets rewritten once a sentence counts as Danish.
    // "orange" and "pink" are Danish words too, which is enough to trigger it.
    #[test]
    fn danish_correction_can_swallow_english_words() {
        assert_eq!(normalize("change color rød"), UNRECOGNIZED);
        assert_eq!(normalize("change color orange"), UNRECOGNIZED);
        assert_eq!(normalize("skift orange"), "change color orange");
    }

    #[test]
    fn normalized_output_drives_the_controller() {
        let action = ControllerAction::from_command(&normalize("gå til venstre")).unwrap();
        assert_eq!(
            action,
            ControllerAction::Move {
                direction: Direction::Left
            }
        );
        assert!(ControllerAction::from_command(&normalize("ned")).is_err());
    }

    #[test]
    fn init_is_repeatable() {
        assert!(init().is_ok());
        assert!(init().is_ok());
    }
}

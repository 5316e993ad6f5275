//! Keyword tables shared by every pipeline stage.
//!
//! The tables are plain `const` data: nothing mutates them and nothing has to
//! initialize them, so concurrent readers need no synchronization. Lookups hand
//! back the `'static` table entry rather than the caller's string.

/// Red, green, blue.
pub type Rgb = (u8, u8, u8);

/// Words whose presence marks a sentence as Danish. Also the closed vocabulary
/// of the Danish spelling corrector.
pub const DANISH_WORDS: &[&str] = &[
    "gå", "løb", "hop", "skift", "flyt", "springe", "højre", "venstre", "op", "ned", "rød", "grøn",
    "blå", "gul", "lilla", "orange", "pink", "sort", "hvid", "grå",
];

pub const ACTION_KEYWORDS: &[&str] = &[
    "move", "go", "step", "run", "walk", "jump", "hop", "leap", "change", "gå", "løb", "skift",
    "flyt", "springe",
];

pub const DIRECTION_KEYWORDS: &[&str] = &[
    "right", "left", "up", "down", "højre", "venstre", "op", "ned",
];

/// Action word to canonical action. `løb` maps to `run`, which itself maps to
/// `move`; see [`crate::translate`].
pub const ACTION_SYNONYMS: &[(&str, &str)] = &[
    ("go", "move"),
    ("step", "move"),
    ("run", "move"),
    ("walk", "move"),
    ("hop", "jump"),
    ("leap", "jump"),
    ("skift", "change"),
    ("gå", "move"),
    ("flyt", "move"),
    ("løb", "run"),
    ("springe", "jump"),
];

pub const DANISH_TO_ENGLISH_DIRECTIONS: &[(&str, &str)] = &[
    ("højre", "right"),
    ("venstre", "left"),
    ("op", "up"),
    ("ned", "down"),
];

/// Color names in both languages with the RGB value the controller paints.
pub const COLOR_KEYWORDS: &[(&str, Rgb)] = &[
    ("rød", (255, 0, 0)),
    ("grøn", (0, 255, 0)),
    ("blå", (0, 0, 255)),
    ("gul", (255, 255, 0)),
    ("lilla", (128, 0, 128)),
    ("orange", (255, 165, 0)),
    ("pink", (255, 182, 193)),
    ("sort", (0, 0, 0)),
    ("hvid", (255, 255, 255)),
    ("grå", (200, 200, 200)),
    ("red", (255, 0, 0)),
    ("green", (0, 255, 0)),
    ("blue", (0, 0, 255)),
    ("yellow", (255, 255, 0)),
    ("purple", (128, 0, 128)),
    ("black", (0, 0, 0)),
    ("white", (255, 255, 255)),
    ("gray", (200, 200, 200)),
];

fn find(table: &[&'static str], word: &str) -> Option<&'static str> {
    table.iter().copied().find(|entry| *entry == word)
}

fn find_pair(table: &[(&'static str, &'static str)], word: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == word)
        .map(|(_, value)| *value)
}

pub fn is_danish_word(word: &str) -> bool {
    find(DANISH_WORDS, word).is_some()
}

/// Matches an action keyword or an action-synonym key.
pub fn action_keyword(word: &str) -> Option<&'static str> {
    find(ACTION_KEYWORDS, word).or_else(|| {
        ACTION_SYNONYMS
            .iter()
            .find(|(key, _)| *key == word)
            .map(|(key, _)| *key)
    })
}

pub fn direction_keyword(word: &str) -> Option<&'static str> {
    find(DIRECTION_KEYWORDS, word)
}

pub fn color_keyword(word: &str) -> Option<&'static str> {
    COLOR_KEYWORDS
        .iter()
        .find(|(name, _)| *name == word)
        .map(|(name, _)| *name)
}

pub fn color_rgb(name: &str) -> Option<Rgb> {
    COLOR_KEYWORDS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, rgb)| *rgb)
}

pub fn synonym(word: &str) -> Option<&'static str> {
    find_pair(ACTION_SYNONYMS, word)
}

pub fn danish_direction(word: &str) -> Option<&'static str> {
    find_pair(DANISH_TO_ENGLISH_DIRECTIONS, word)
}

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// A token as produced by a [`Tokenizer`], with its lower-cased comparison form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub lower: String,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let lower = text.to_lowercase();
        Self { text, lower }
    }
}

pub trait Tokenizer: Send + Sync {
    /// Split text into tokens, in order.
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// Word runs (with inner apostrophes) and single punctuation marks.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexTokenizer;

impl RegexTokenizer {
    fn pattern() -> &'static Regex {
        static TOKEN: OnceLock<Regex> = OnceLock::new();
        TOKEN.get_or_init(|| {
            Regex::new(r"\w+(?:['’]\w+)*|[^\w\s]").expect("Invalid regex pattern - this is a bug")
        })
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        Self::pattern()
            .find_iter(text)
            .map(|m| Token::new(m.as_str()))
            .collect()
    }
}

/// Splits on whitespace only.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_whitespace().map(Token::new).collect()
    }
}

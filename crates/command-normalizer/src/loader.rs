use crate::error::NormalizerError;
use crate::NormalizerConfig;
use anyhow::Context;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

pub fn load_config_file(path: impl AsRef<Path>) -> anyhow::Result<NormalizerConfig> {
    let path = path.as_ref();
    let raw =
        fs::read_to_string(path).with_context(|| format!("reading config: {}", path.display()))?;
    let val: Value =
        serde_yaml::from_str(&raw).with_context(|| format!("parsing yaml: {}", path.display()))?;
    let config: NormalizerConfig = serde_yaml::from_value(val)
        .with_context(|| format!("decoding config: {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("validating config: {}", path.display()))?;
    Ok(config)
}

/// Parses `word count` lines. Blank lines and `#` comments are skipped; a
/// missing count means 1.
pub fn parse_word_frequencies(raw: &str) -> Result<Vec<(String, u64)>, NormalizerError> {
    let mut entries = Vec::new();
    for (idx, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_whitespace();
        let word = match fields.next() {
            Some(word) => word,
            None => continue,
        };
        let count = match fields.next() {
            Some(count) => count.parse::<u64>().map_err(|e| NormalizerError::WordList {
                line: idx + 1,
                reason: format!("bad count '{count}': {e}"),
            })?,
            None => 1,
        };
        if fields.next().is_some() {
            return Err(NormalizerError::WordList {
                line: idx + 1,
                reason: "expected 'word count'".to_string(),
            });
        }
        entries.push((word.to_lowercase(), count));
    }
    Ok(entries)
}

pub fn load_word_frequencies(path: impl AsRef<Path>) -> anyhow::Result<Vec<(String, u64)>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading word list: {}", path.display()))?;
    let entries = parse_word_frequencies(&raw)
        .with_context(|| format!("parsing word list: {}", path.display()))?;
    tracing::debug!(path = %path.display(), words = entries.len(), "loaded word frequencies");
    Ok(entries)
}

use thiserror::Error;

pub type Result<T, E = NormalizerError> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum NormalizerError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("invalid word list entry on line {line}: {reason}")]
    WordList { line: usize, reason: String },
    #[error("unrecognized command: {0}")]
    UnrecognizedCommand(String),
}

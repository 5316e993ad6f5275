//! JSON request/response shapes spoken by the transport

use crate::normalizer::CommandNormalizer;
use serde::{Deserialize, Serialize};

/// `{"command": "<free text>"}`; a missing field reads as empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRequest {
    #[serde(default)]
    pub command: String,
}

/// `{"command": "<canonical command or error sentinel>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    pub command: String,
}

/// Reply to a request that could not be read at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl CommandNormalizer {
    pub fn respond(&self, request: &CommandRequest) -> CommandResponse {
        CommandResponse {
            command: self.normalize(&request.command),
        }
    }
}

const SERIALIZATION_FAILED: &str = r#"{"error":"serialization failed"}"#;

/// One JSON request line in, one JSON response line out (no trailing newline).
pub fn handle_request_line(normalizer: &CommandNormalizer, line: &str) -> String {
    let reply = match serde_json::from_str::<CommandRequest>(line) {
        Ok(request) => serde_json::to_string(&normalizer.respond(&request)),
        Err(e) => {
            tracing::warn!(error = %e, "malformed request");
            serde_json::to_string(&ErrorResponse {
                error: format!("malformed request: {e}"),
            })
        }
    };
    reply.unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to encode reply");
        SERIALIZATION_FAILED.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NormalizerConfig;

    fn normalizer() -> CommandNormalizer {
        CommandNormalizer::new(NormalizerConfig::default()).unwrap()
    }

    #[test]
    fn round_trips_a_request() {
        let reply = handle_request_line(&normalizer(), r#"{"command": "hop"}"#);
        assert_eq!(reply, r#"{"command":"jump"}"#);
    }

    #[test]
    fn missing_command_is_empty_text() {
        let reply = handle_request_line(&normalizer(), "{}");
        assert_eq!(reply, r#"{"command":"error: unrecognized command"}"#);
    }

    #[test]
    fn encoding_fallback_is_valid_json() {
        let parsed: ErrorResponse = serde_json::from_str(SERIALIZATION_FAILED).unwrap();
        assert_eq!(parsed.error, "serialization failed");
    }

    #[test]
    fn malformed_json_gets_an_error_object() {
        let reply = handle_request_line(&normalizer(), "not json");
        let parsed: ErrorResponse = serde_json::from_str(&reply).unwrap();
        assert!(parsed.error.starts_with("malformed request"));
    }
}

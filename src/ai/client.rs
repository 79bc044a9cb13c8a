use super::LlmBackend;
use super::gemini::{Content, GeminiBackend, GenerateContentRequest, GenerationConfig};
use crate::portfolio::PERSONA_INSTRUCTION;
use crate::types::{ChatMessage, Role};

// ============================================
// Error Types
// ============================================

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("API key is missing. Set API_KEY to enable the assistant.")]
    MissingApiKey,

    #[error("nothing to send")]
    EmptyUtterance,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("generation service error {status}: {body}")]
    Service { status: u16, body: String },

    #[error("unreadable response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ChatError {
    /// Configuration faults make the assistant unusable rather than degraded.
    pub fn is_config(&self) -> bool {
        matches!(self, ChatError::MissingApiKey)
    }
}

pub type ChatResult<T> = Result<T, ChatError>;

/// Shown when the service answers without any text.
pub const NO_TEXT_REPLY: &str = "I'm sorry, I couldn't process that.";

/// Shown when the call to the service fails.
pub const APOLOGY_REPLY: &str = "Something went wrong with my circuits. Please try again later!";

/// Outbound request for one turn: persona first, then the prior transcript,
/// then the new utterance.
pub fn build_request(
    persona: &str,
    history: &[ChatMessage],
    utterance: &str,
) -> GenerateContentRequest {
    let mut contents = Vec::with_capacity(history.len() + 2);
    contents.push(Content::text(Role::User.as_wire(), persona));
    contents.extend(
        history
            .iter()
            .map(|msg| Content::text(msg.role.as_wire(), msg.content.as_str())),
    );
    contents.push(Content::text(Role::User.as_wire(), utterance));
    GenerateContentRequest {
        contents,
        generation_config: GenerationConfig::default(),
    }
}

/// Produces exactly one model reply per user utterance.
///
/// Transient faults are absorbed into [`APOLOGY_REPLY`]; only a missing
/// credential or an empty utterance escape as errors.
#[derive(Clone)]
pub struct ResponseGateway<B> {
    backend: B,
}

/// Gateway backed by the Gemini `generateContent` endpoint.
pub type GeminiGateway = ResponseGateway<GeminiBackend>;

impl ResponseGateway<GeminiBackend> {
    /// Gateway backed by the configured generation service.
    pub fn from_env() -> Self {
        Self::new(GeminiBackend::from_env())
    }
}

impl<B: LlmBackend> ResponseGateway<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_configured()
    }

    pub fn ensure_configured(&self) -> ChatResult<()> {
        if self.is_configured() {
            Ok(())
        } else {
            Err(ChatError::MissingApiKey)
        }
    }

    pub async fn respond(&self, utterance: &str, history: &[ChatMessage]) -> ChatResult<String> {
        if utterance.trim().is_empty() {
            return Err(ChatError::EmptyUtterance);
        }

        let request = build_request(PERSONA_INSTRUCTION, history, utterance);
        match self.backend.generate(&request).await {
            Ok(Some(text)) if !text.trim().is_empty() => Ok(text),
            Ok(_) => {
                tracing::warn!("generation service returned no text");
                Ok(NO_TEXT_REPLY.to_string())
            }
            Err(err) if err.is_config() => Err(err),
            Err(err) => {
                tracing::error!(error = %err, "generation service call failed");
                Ok(APOLOGY_REPLY.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_wraps_history_between_persona_and_utterance() {
        let history = vec![ChatMessage::user("Hi"), ChatMessage::model("Hello!")];
        let request = build_request("persona", &history, "What stack?");

        let roles: Vec<&str> = request.contents.iter().map(|c| c.role.as_str()).collect();
        assert_eq!(roles, ["user", "user", "model", "user"]);
        assert_eq!(request.contents[0].parts[0].text, "persona");
        assert_eq!(request.contents[3].parts[0].text, "What stack?");
        assert_eq!(request.generation_config, GenerationConfig::default());
    }

    #[test]
    fn empty_history_sends_persona_and_utterance_only() {
        let request = build_request("persona", &[], "Hi");
        assert_eq!(request.contents.len(), 2);
    }

    #[test]
    fn only_missing_key_is_a_config_error() {
        assert!(ChatError::MissingApiKey.is_config());
        assert!(!ChatError::EmptyUtterance.is_config());
        assert!(
            !ChatError::Service {
                status: 500,
                body: String::new()
            }
            .is_config()
        );
    }
}

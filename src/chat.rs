//! Chat session state: the transcript and the single-flight send protocol.
//!
//! The UI keeps a [`ChatSession`] in reactive state and drives it in two
//! phases so that the network call can run outside the state borrow:
//! [`ChatSession::begin`] records the user turn and hands out a
//! [`PendingTurn`], the turn is resolved against the gateway, and
//! [`ChatSession::finish`] records the reply.

use crate::ai::{APOLOGY_REPLY, ChatResult, LlmBackend, NO_TEXT_REPLY, ResponseGateway};
use crate::types::ChatMessage;

/// Append-only transcript of one chat session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConversationStore {
    messages: Vec<ChatMessage>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: ChatMessage) {
        if message.content.is_empty() {
            tracing::debug!(role = ?message.role, "ignoring empty message");
            return;
        }
        self.messages.push(message);
    }

    pub fn snapshot(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// A user turn waiting for its reply.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingTurn {
    pub utterance: String,
    /// Transcript as it stood before `utterance` was recorded.
    pub history: Vec<ChatMessage>,
}

impl PendingTurn {
    /// Ask the gateway for a reply. Always yields text for the transcript.
    pub async fn resolve<B: LlmBackend>(&self, gateway: &ResponseGateway<B>) -> String {
        match gateway.respond(&self.utterance, &self.history).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::error!(error = %err, "assistant could not answer");
                APOLOGY_REPLY.to_string()
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatSession {
    store: ConversationStore,
    busy: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.store.snapshot()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Record a user turn and mark the session busy.
    ///
    /// Returns `None` without touching the transcript when the input is blank
    /// or a reply is still outstanding.
    pub fn begin(&mut self, input: &str) -> Option<PendingTurn> {
        let utterance = input.trim();
        if utterance.is_empty() {
            return None;
        }
        if self.busy {
            tracing::debug!("send suppressed while a reply is outstanding");
            return None;
        }

        let history = self.store.snapshot().to_vec();
        self.store.append(ChatMessage::user(utterance));
        self.busy = true;
        Some(PendingTurn {
            utterance: utterance.to_string(),
            history,
        })
    }

    /// Record the model turn answering the outstanding utterance.
    ///
    /// A reply with no outstanding turn is dropped so that every model turn
    /// follows a user turn.
    pub fn finish(&mut self, reply: String) {
        if !self.busy {
            tracing::warn!("dropping reply that arrived with no outstanding turn");
            return;
        }
        let reply = if reply.trim().is_empty() {
            NO_TEXT_REPLY.to_string()
        } else {
            reply
        };
        self.store.append(ChatMessage::model(reply));
        self.busy = false;
    }

    /// Full round trip for one input.
    ///
    /// `Ok(false)` means the send was suppressed. A missing credential is
    /// reported before anything is recorded.
    pub async fn send<B: LlmBackend>(
        &mut self,
        gateway: &ResponseGateway<B>,
        input: &str,
    ) -> ChatResult<bool> {
        gateway.ensure_configured()?;
        let Some(turn) = self.begin(input) else {
            return Ok(false);
        };
        let reply = turn.resolve(gateway).await;
        self.finish(reply);
        Ok(true)
    }
}

//! AI module for the portfolio assistant
//!
//! This module wraps the external generative-language service behind a
//! single gateway that attaches the persona instruction and absorbs
//! transient failures into a friendly reply.
//!
//! # Architecture
//!
//! - `client` - `ResponseGateway`, request building and error types
//! - `gemini` - `generateContent` wire types and HTTP backend
//!
//! # Usage
//!
//! ```rust,no_run
//! use aurora::ai::GeminiGateway;
//!
//! # async fn example() -> aurora::ai::ChatResult<()> {
//! let gateway = GeminiGateway::from_env();
//! let reply = gateway.respond("Hello!", &[]).await?;
//! # Ok(())
//! # }
//! ```
mod client;
pub mod gemini;

use async_trait::async_trait;

// Re-export main types
pub use client::{
    APOLOGY_REPLY, ChatError, ChatResult, GeminiGateway, NO_TEXT_REPLY, ResponseGateway,
    build_request,
};
pub use gemini::{GeminiBackend, GenerateContentRequest};

/// A service able to answer one generation request.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait LlmBackend {
    /// Whether the credentials needed for a call are present.
    fn is_configured(&self) -> bool {
        true
    }

    /// Issue one request. `Ok(None)` means the service answered without text.
    async fn generate(&self, request: &GenerateContentRequest) -> ChatResult<Option<String>>;
}

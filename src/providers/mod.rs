//! Chat model clients

pub mod mock;
pub mod ollama;

// Re-export for convenience
pub use mock::{MockChatClient, ResponseStyle};
pub use ollama::OllamaClient;

/// A synchronous chat model
pub trait ChatModel
{   /// Identifier of the model behind this client
    fn model_name(&self) -> &str;

    /// Send `messages` and return the reply
    fn invoke(
      &self
    , messages: &[crate::request::Message]
    ) -> Result<crate::request::AiMessage, crate::error::Error>;
}

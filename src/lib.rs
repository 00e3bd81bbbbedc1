pub mod error;
pub mod config;
pub mod credentials;
pub mod prompt;
pub mod providers;
pub mod request;
pub mod retry;
pub mod exercise;
use serde::{Deserialize, Serialize};

/*

modelswitch: switching between hosted LLM models behind one
prompt template, with a deterministic mock client for offline
runs and an Ollama binding for a locally served model.

modelswitch/
├── Cargo.toml
├── assets/
│   └── information.txt   # Fixed information block for the prompt
├── src/
│   ├── lib.rs            # Model set and re-exports
│   ├── error.rs          # Error type
│   ├── config.rs         # Client and Ollama configuration
│   ├── credentials.rs    # Explicit credential holder
│   ├── prompt.rs         # Prompt template formatting
│   ├── request.rs        # Message / response types
│   ├── retry.rs          # Backoff policy for the HTTP binding
│   ├── exercise.rs       # Model factories and comparison driver
│   ├── providers/
│   │   ├── mod.rs        # ChatModel trait
│   │   ├── mock.rs       # Canned-response client
│   │   └── ollama.rs     # Ollama /api/chat client
│   └── bin/
│       ├── model_switch.rs
│       └── ollama_template.rs
└── tests/

*/

pub use config::{ClientConfig, OllamaConfig};
pub use credentials::Credentials;
pub use error::Error;
pub use prompt::PromptTemplate;
pub use providers::{ChatModel, MockChatClient, OllamaClient};
pub use request::{AiMessage, Message};

/// Closed set of models the mock client accepts.
/// Serialized with the exact identifiers used by console.groq.com
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum GroqModel
{
  /// Llama Guard 4 (12b), safety classifier
  #[serde(rename = "meta-llama/llama-guard-4-12b")]
  LlamaGuard4
  ,
  /// Llama 3.3 70b versatile
  #[serde(rename = "llama-3.3-70b-versatile")]
  Llama33Versatile
  ,
  /// Llama 3.1 8b instant
  #[serde(rename = "llama-3.1-8b-instant")]
  Llama31Instant
}

impl GroqModel
{   /// Every allowed model, in declaration order
    pub const ALL: [GroqModel; 3] = [
      GroqModel::LlamaGuard4
    , GroqModel::Llama33Versatile
    , GroqModel::Llama31Instant
    ];

    /// The provider's identifier for this model
    pub fn as_str(&self) -> &'static str
    {   match self
        {   GroqModel::LlamaGuard4 => "meta-llama/llama-guard-4-12b"
          , GroqModel::Llama33Versatile => "llama-3.3-70b-versatile"
          , GroqModel::Llama31Instant => "llama-3.1-8b-instant"
        }
    }
}

impl std::fmt::Display for GroqModel
{   fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
      -> std::fmt::Result
    {   f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GroqModel
{   type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {   GroqModel::ALL
          .iter()
          .copied()
          .find(|m| m.as_str() == s)
          .ok_or_else(|| {
            log::error!("Rejected model identifier: {}", s);
            Error::InvalidModel(s.to_string())
          })
    }
}

impl TryFrom<&str> for GroqModel
{   type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error>
    {   s.parse()
    }
}

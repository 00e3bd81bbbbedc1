//! Configuration for the mock client and the Ollama binding

use serde::{Deserialize, Serialize};
use log::debug;

pub const DEFAULT_TEMPERATURE: f32 = 0.0;
pub const DEFAULT_MAX_RETRIES: usize = 2;

pub const OLLAMA_BASE_URL_VAR: &str = "OLLAMA_BASE_URL";
pub const OLLAMA_MODEL_VAR: &str = "OLLAMA_MODEL";

/// Mock client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig
{   /// Model to impersonate
    pub model: crate::GroqModel
  , /// Sampling temperature
    pub temperature: f32
  , /// Retry limit. Stored but not acted on by the mock client
    pub max_retries: usize
}

impl ClientConfig
{   /// Config for `model` with default temperature and retry limit
    pub fn new(model: crate::GroqModel) -> Self
    {   ClientConfig
        {   model
          , temperature: DEFAULT_TEMPERATURE
          , max_retries: DEFAULT_MAX_RETRIES
        }
    }

    /// Parse the model identifier, failing with `InvalidModel`
    pub fn from_identifier(model: &str)
      -> Result<Self, crate::error::Error>
    {   Ok(ClientConfig::new(model.parse()?))
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self
    {   self.temperature = temperature;
        self
    }

    pub fn with_max_retries(mut self, max_retries: usize) -> Self
    {   self.max_retries = max_retries;
        self
    }
}

/// Ollama server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OllamaConfig
{   /// Server base URL, without the `/api` suffix
    pub base_url: String
  , /// Model tag served by Ollama
    pub model: String
  , /// Sampling temperature
    pub temperature: f32
  , /// Request timeout in seconds
    pub timeout_secs: u64
  , /// Retry attempts on transport errors
    pub max_retries: usize
}

impl Default for OllamaConfig
{   fn default() -> Self
    {   OllamaConfig
        {   base_url: "http://localhost:11434".to_string()
          , model: "gpt-oss:20b".to_string()
          , temperature: DEFAULT_TEMPERATURE
          , timeout_secs: 120
          , max_retries: DEFAULT_MAX_RETRIES
        }
    }
}

impl OllamaConfig
{   /// Defaults overridden by `OLLAMA_BASE_URL` and `OLLAMA_MODEL`
    pub fn from_env() -> Self
    {   let mut config = OllamaConfig::default();
        if let Ok(url) = std::env::var(OLLAMA_BASE_URL_VAR)
        {   debug!("Using {} = {}", OLLAMA_BASE_URL_VAR, url);
            config.base_url = url;
        }
        if let Ok(model) = std::env::var(OLLAMA_MODEL_VAR)
        {   debug!("Using {} = {}", OLLAMA_MODEL_VAR, model);
            config.model = model;
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self
    {   self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self
    {   self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self
    {   self.temperature = temperature;
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self
    {   self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_max_retries(mut self, max_retries: usize) -> Self
    {   self.max_retries = max_retries;
        self
    }

    /// Reject configs the client cannot use
    pub fn validate(&self) -> Result<(), crate::error::Error>
    {   if self.base_url.trim().is_empty()
        {   return Err(crate::error::Error::InvalidConfiguration(
              "base_url is empty".to_string()
            ));
        }
        if self.model.trim().is_empty()
        {   return Err(crate::error::Error::InvalidConfiguration(
              "model is empty".to_string()
            ));
        }
        if self.timeout_secs == 0
        {   return Err(crate::error::Error::InvalidConfiguration(
              "timeout_secs must be positive".to_string()
            ));
        }
        Ok(())
    }
}

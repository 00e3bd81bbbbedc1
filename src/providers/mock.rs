use log::{debug, error, trace};
use crate::GroqModel;

/// Temperatures above this get the creative reply
pub const CREATIVE_THRESHOLD: f32 = 0.2;

pub const LLAMA_3_1_RESPONSE: &str
  = "[Llama 3.1-8b-instant Response] Machine learning is a subset of AI \
     that enables computers to learn patterns from data without explicit \
     programming.";

pub const LLAMA_3_3_RESPONSE: &str
  = "[Llama 3.3 Response] Machine learning allows computers to learn and \
     improve from data without being explicitly programmed.";

pub const LLAMA_3_3_CREATIVE_RESPONSE: &str
  = "[Llama 3.3 Creative Response] Machine learning is like teaching a \
     computer to recognize patterns in data, much like how humans learn \
     from experience!";

/// How a model picks its canned reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStyle
{   /// Same text regardless of temperature
    Fixed(&'static str)
  , /// `creative` above `CREATIVE_THRESHOLD`, else `standard`
    TemperatureSplit
    {   standard: &'static str
      , creative: &'static str
    }
  , /// Generic text naming the model
    Generic
}

impl ResponseStyle
{   pub fn for_model(model: GroqModel) -> Self
    {   match model
        {   GroqModel::Llama31Instant => {
              ResponseStyle::Fixed(LLAMA_3_1_RESPONSE)
            }
          , GroqModel::Llama33Versatile => {
              ResponseStyle::TemperatureSplit
              {   standard: LLAMA_3_3_RESPONSE
                , creative: LLAMA_3_3_CREATIVE_RESPONSE
              }
            }
          , GroqModel::LlamaGuard4 => ResponseStyle::Generic
        }
    }

    pub fn render(&self, model: GroqModel, temperature: f32) -> String
    {   match self
        {   ResponseStyle::Fixed(text) => text.to_string()
          , ResponseStyle::TemperatureSplit { standard, creative } => {
              if temperature > CREATIVE_THRESHOLD
              {   creative.to_string()
              } else
              {   standard.to_string()
              }
            }
          , ResponseStyle::Generic => {
              format!(
                "[Mock Response] This is a simulated response from {}",
                model
              )
            }
        }
    }
}

/// Offline stand-in for a Groq chat client.
/// Never touches the network; replies are a pure function of
/// model and temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct MockChatClient
{   config: crate::config::ClientConfig
  , style: ResponseStyle
}

impl MockChatClient
{   pub fn new(config: crate::config::ClientConfig) -> Self
    {   debug!(
          "Creating MockChatClient for {} (temperature {})",
          config.model, config.temperature
        );
        let style = ResponseStyle::for_model(config.model);
        MockChatClient
        {   config
          , style
        }
    }

    /// Build from a raw identifier, failing with `InvalidModel`
    /// when it is not one of the allowed models
    pub fn from_identifier(
      model: &str
    , temperature: f32
    , max_retries: usize
    ) -> Result<Self, crate::error::Error>
    {   let config = crate::config::ClientConfig::from_identifier(model)?
          .with_temperature(temperature)
          .with_max_retries(max_retries);
        Ok(MockChatClient::new(config))
    }

    pub fn model(&self) -> GroqModel
    {   self.config.model
    }

    pub fn temperature(&self) -> f32
    {   self.config.temperature
    }

    pub fn max_retries(&self) -> usize
    {   self.config.max_retries
    }

    pub fn config(&self) -> &crate::config::ClientConfig
    {   &self.config
    }
}

impl super::ChatModel for MockChatClient
{   fn model_name(&self) -> &str
    {   self.config.model.as_str()
    }

    fn invoke(
      &self
    , messages: &[crate::request::Message]
    ) -> Result<crate::request::AiMessage, crate::error::Error>
    {   if messages.is_empty()
        {   error!("Empty message list for {}", self.config.model);
            return Err(crate::error::Error::InvalidRequest(
              "Messages must be a non-empty list".to_string()
            ));
        }
        trace!(
          "Mock invoke on {} with {} messages",
          self.config.model,
          messages.len()
        );
        let content = self.style.render(
          self.config.model,
          self.config.temperature
        );
        Ok(crate::request::AiMessage::new(content))
    }
}

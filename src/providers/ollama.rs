use std::collections::HashMap;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use log::{debug, trace, error, info};

// ===== Wire Types =====

#[derive(Debug, Clone, Serialize)]
pub struct OllamaChatRequest
{   pub model: String
  , pub messages: Vec<crate::request::Message>
  , pub stream: bool
  , pub options: OllamaOptions
}

#[derive(Debug, Clone, Serialize)]
pub struct OllamaOptions
{   pub temperature: f32
}

#[derive(Debug, Clone, Deserialize)]
pub struct OllamaChatResponse
{   pub message: crate::request::Message
  , #[serde(default)]
    pub done: bool
}

// ===== Client =====

/// Client for a locally served Ollama model
pub struct OllamaClient
{   config: crate::config::OllamaConfig
  , retry: crate::retry::RetryPolicy
  , http_client: reqwest::Client
}

impl OllamaClient
{   pub fn new(
      config: crate::config::OllamaConfig
    ) -> Result<Self, crate::error::Error>
    {   config.validate()?;
        debug!(
          "Creating OllamaClient for {} at {}",
          config.model, config.base_url
        );
        let http_client = reqwest::Client::builder()
          .timeout(Duration::from_secs(config.timeout_secs))
          .build()
          .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            crate::error::Error::InvalidConfiguration(e.to_string())
          })?;
        let retry = crate::retry::RetryPolicy::with_max_retries(
          config.max_retries
        );
        Ok(OllamaClient
        {   config
          , retry
          , http_client
        })
    }

    pub fn config(&self) -> &crate::config::OllamaConfig
    {   &self.config
    }

    pub fn model_name(&self) -> &str
    {   &self.config.model
    }

    fn chat_url(&self) -> String
    {   format!(
          "{}/api/chat",
          self.config.base_url.trim_end_matches('/')
        )
    }

    /// Request body for `messages`
    pub fn build_request(
      &self
    , messages: &[crate::request::Message]
    ) -> OllamaChatRequest
    {   OllamaChatRequest
        {   model: self.config.model.clone()
          , messages: messages.to_vec()
          , stream: false
          , options: OllamaOptions
            {   temperature: self.config.temperature
            }
        }
    }

    /// Send `messages`, retrying transport failures
    pub async fn invoke(
      &self
    , messages: &[crate::request::Message]
    ) -> Result<crate::request::AiMessage, crate::error::Error>
    {   if messages.is_empty()
        {   error!("Empty message list for {}", self.config.model);
            return Err(crate::error::Error::InvalidRequest(
              "Messages must be a non-empty list".to_string()
            ));
        }

        let request = self.build_request(messages);
        let mut attempt = 0;
        loop
        {   match self.send_once(&request).await
            {   Ok(reply) => return Ok(reply)
              , Err(e) if self.retry.should_retry(attempt, &e) => {
                  let backoff = self.retry.backoff_for_attempt(attempt);
                  info!(
                    "Ollama request failed ({}), retrying in {:?}",
                    e, backoff
                  );
                  tokio::time::sleep(backoff).await;
                  attempt += 1;
                }
              , Err(e) => return Err(e)
            }
        }
    }

    async fn send_once(
      &self
    , request: &OllamaChatRequest
    ) -> Result<crate::request::AiMessage, crate::error::Error>
    {   trace!("Ollama request: {:?}", request);

        let response = self.http_client
          .post(self.chat_url())
          .json(request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            crate::error::Error::from(e)
          })?;

        let status = response.status();
        trace!("Ollama response status: {}", status);

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("Ollama API error: {}", error_text);
            return Err(crate::error::Error::ApiError(
              format!("Ollama error ({}): {}", status, error_text)
            ));
        }

        let body = response.text().await.map_err(|e| {
          error!("Failed to read body: {}", e);
          crate::error::Error::from(e)
        })?;
        let chat_response: OllamaChatResponse
          = serde_json::from_str(&body).map_err(|e| {
            error!("Parse error: {}", e);
            crate::error::Error::ParseError(e.to_string())
          })?;

        if !chat_response.done
        {   debug!("Ollama reported an unfinished response");
        }
        Ok(crate::request::AiMessage::new(
          chat_response.message.content
        ))
    }

    /// Format `template` with `values` and send it as one user message
    pub async fn format_and_invoke(
      &self
    , template: &crate::prompt::PromptTemplate
    , values: &HashMap<&str, &str>
    ) -> Result<crate::request::AiMessage, crate::error::Error>
    {   let prompt = template.format(values)?;
        self.invoke(&[crate::request::Message::user(prompt)]).await
    }
}

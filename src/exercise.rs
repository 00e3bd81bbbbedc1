//! Model factories and the two-model comparison

use std::collections::BTreeMap;
use log::debug;
use crate::providers::ChatModel;

/// Template variable the information block is bound to
pub const INFORMATION_VAR: &str = "information";

/// Background text substituted into every prompt
pub const INFORMATION: &str = include_str!("../assets/information.txt");

/// Prompt asking for a summary, facts and a prayer
pub const SUMMARY_TEMPLATE: &str = "
    given the information {information} about a God, I want you to create:
    1) A short summary
    2) Two interesting facts
    3) A short prayer to the God
    ";

/// Temperature for the deterministic guard model
pub const GUARD_TEMPERATURE: f32 = 0.0;
/// Temperature for the creative 70b model
pub const CREATIVE_TEMPERATURE: f32 = 3.0;

/// Llama Guard 4 at temperature 0
pub fn llama_guard_4_model() -> crate::providers::MockChatClient
{   crate::providers::MockChatClient::new(
      crate::config::ClientConfig::new(crate::GroqModel::LlamaGuard4)
        .with_temperature(GUARD_TEMPERATURE)
    )
}

/// Llama 3.3 70b with a temperature high enough to be creative
pub fn llama_3_3_model() -> crate::providers::MockChatClient
{   crate::providers::MockChatClient::new(
      crate::config::ClientConfig::new(
        crate::GroqModel::Llama33Versatile
      ).with_temperature(CREATIVE_TEMPERATURE)
    )
}

/// Bind `INFORMATION` into `prompt` and send it as one user message.
/// Any other placeholder in `prompt` fails with `MissingPlaceholder`.
pub fn query_model<M: ChatModel + ?Sized>(
  model: &M
, prompt: &str
) -> Result<crate::request::AiMessage, crate::error::Error>
{   let template = crate::prompt::PromptTemplate::from_template(prompt);
    let prompt_text = template.format_one(INFORMATION_VAR, INFORMATION)?;
    debug!(
      "Querying {} with a {} byte prompt",
      model.model_name(),
      prompt_text.len()
    );
    model.invoke(&[crate::request::Message::user(prompt_text)])
}

/// Query the guard and 70b models with the same prompt.
/// Keys are exactly the two models queried.
pub fn compare_models(
  prompt: &str
) -> Result<BTreeMap<crate::GroqModel, String>, crate::error::Error>
{   let guard = llama_guard_4_model();
    let versatile = llama_3_3_model();
    let guard_reply = query_model(&guard, prompt)?;
    let versatile_reply = query_model(&versatile, prompt)?;

    let mut results = BTreeMap::new();
    results.insert(guard.model(), guard_reply.content);
    results.insert(versatile.model(), versatile_reply.content);
    Ok(results)
}

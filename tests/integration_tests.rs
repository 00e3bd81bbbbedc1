use std::collections::HashMap;
use modelswitch::exercise::{
  compare_models, llama_3_3_model, llama_guard_4_model, query_model,
  INFORMATION, SUMMARY_TEMPLATE,
};
use modelswitch::providers::mock::{
  LLAMA_3_1_RESPONSE, LLAMA_3_3_CREATIVE_RESPONSE, LLAMA_3_3_RESPONSE,
};
use modelswitch::{
  ChatModel, ClientConfig, Credentials, Error, GroqModel, Message,
  MockChatClient, PromptTemplate,
};

fn user_message() -> Vec<Message>
{   vec![Message::user("x")]
}

// ===== Model registry =====

#[test]
fn test_unknown_models_are_rejected()
{   let unknown = [
      ""
    , "llama-4-8b-instant"
    , "LLAMA-3.1-8B-INSTANT"
    , "llama-3.3-70b-versatile "
    , "gpt-4"
    , "meta-llama/llama-guard-4"
    ];
    for model in unknown
    {   assert_eq!(
          MockChatClient::from_identifier(model, 0.0, 2),
          Err(Error::InvalidModel(model.to_string())),
          "{:?} should be rejected",
          model
        );
    }
}

#[test]
fn test_allowed_models_round_trip_identifier()
{   for model in GroqModel::ALL
    {   let parsed: GroqModel = model.as_str().parse().unwrap();
        assert_eq!(parsed, model);
        assert_eq!(model.to_string(), model.as_str());
    }
}

#[test]
fn test_model_serializes_as_identifier()
{   let json = serde_json::to_string(&GroqModel::LlamaGuard4).unwrap();
    assert_eq!(json, "\"meta-llama/llama-guard-4-12b\"");
    let back: GroqModel
      = serde_json::from_str("\"llama-3.1-8b-instant\"").unwrap();
    assert_eq!(back, GroqModel::Llama31Instant);
}

// ===== Mock client =====

#[test]
fn test_client_defaults()
{   let client = MockChatClient::new(
      ClientConfig::new(GroqModel::Llama31Instant)
    );
    assert_eq!(client.temperature(), 0.0);
    assert_eq!(client.max_retries(), 2);
    assert_eq!(client.model_name(), "llama-3.1-8b-instant");
}

#[test]
fn test_low_temperature_replies_are_fixed()
{   for temperature in [0.0, 0.1, 0.2]
    {   let instant = MockChatClient::from_identifier(
          "llama-3.1-8b-instant", temperature, 2
        ).unwrap();
        assert_eq!(
          instant.invoke(&user_message()).unwrap().content,
          LLAMA_3_1_RESPONSE
        );

        let versatile = MockChatClient::from_identifier(
          "llama-3.3-70b-versatile", temperature, 2
        ).unwrap();
        assert_eq!(
          versatile.invoke(&user_message()).unwrap().content,
          LLAMA_3_3_RESPONSE
        );

        let guard = MockChatClient::from_identifier(
          "meta-llama/llama-guard-4-12b", temperature, 2
        ).unwrap();
        assert_eq!(
          guard.invoke(&user_message()).unwrap().content,
          "[Mock Response] This is a simulated response from \
           meta-llama/llama-guard-4-12b"
        );
    }
}

#[test]
fn test_creative_reply_above_threshold()
{   let client = MockChatClient::from_identifier(
      "llama-3.3-70b-versatile", 3.0, 2
    ).unwrap();
    let reply = client.invoke(&user_message()).unwrap();
    assert_eq!(reply.content, LLAMA_3_3_CREATIVE_RESPONSE);
}

#[test]
fn test_instant_ignores_temperature()
{   let client = MockChatClient::from_identifier(
      "llama-3.1-8b-instant", 1.5, 2
    ).unwrap();
    assert_eq!(
      client.invoke(&user_message()).unwrap().content,
      LLAMA_3_1_RESPONSE
    );
}

#[test]
fn test_empty_messages_rejected_for_every_model()
{   for model in GroqModel::ALL
    {   for temperature in [0.0, 3.0]
        {   let client = MockChatClient::new(
              ClientConfig::new(model).with_temperature(temperature)
            );
            match client.invoke(&[])
            {   Err(Error::InvalidRequest(_)) => {}
              , other => panic!("expected InvalidRequest, got {:?}", other)
            }
        }
    }
}

#[test]
fn test_max_retries_is_kept()
{   let client = MockChatClient::from_identifier(
      "llama-3.1-8b-instant", 0.0, 7
    ).unwrap();
    assert_eq!(client.max_retries(), 7);
}

// ===== Credentials =====

#[test]
fn test_set_then_require_succeeds()
{   let mut credentials = Credentials::new();
    credentials.set_credential("key-1");
    assert!(credentials.require_credential().is_ok());
    assert_eq!(credentials.api_key().unwrap(), "key-1");
}

#[test]
fn test_require_without_set_fails()
{   let credentials = Credentials::new();
    assert_eq!(
      credentials.require_credential(),
      Err(Error::MissingCredential("GROQ_API_KEY".to_string()))
    );
}

#[test]
fn test_set_does_not_overwrite()
{   let mut credentials = Credentials::new();
    credentials.set_credential("first");
    credentials.set_credential("second");
    assert_eq!(credentials.api_key().unwrap(), "first");
}

#[test]
fn test_missing_credential_message_names_variable()
{   let err = Credentials::new().require_credential().unwrap_err();
    assert!(err.to_string().contains("GROQ_API_KEY"));
}

#[test]
fn test_credentials_from_env()
{   std::env::set_var("GROQ_API_KEY", "from-env");
    let credentials = Credentials::from_env();
    std::env::remove_var("GROQ_API_KEY");
    assert_eq!(credentials.api_key().unwrap(), "from-env");
}

// ===== Prompt template =====

#[test]
fn test_format_substitutes_placeholder()
{   let template = PromptTemplate::new(
      vec!["information".to_string()],
      "about {information}, summarize {information}."
    );
    let out = template.format_one("information", "cats").unwrap();
    assert_eq!(out, "about cats, summarize cats.");
}

#[test]
fn test_format_missing_value_fails()
{   let template = PromptTemplate::from_template("hi {name}");
    let values: HashMap<&str, &str> = HashMap::new();
    assert_eq!(
      template.format(&values),
      Err(Error::MissingPlaceholder("name".to_string()))
    );
}

#[test]
fn test_format_is_idempotent_once_filled()
{   let template = PromptTemplate::from_template(SUMMARY_TEMPLATE);
    let first = template.format_one("information", INFORMATION).unwrap();
    let again = PromptTemplate::from_template(first.clone());
    assert!(again.input_variables.is_empty());
    let values: HashMap<&str, &str> = HashMap::new();
    assert_eq!(again.format(&values).unwrap(), first);
    assert_eq!(
      template.format_one("information", INFORMATION).unwrap(),
      first
    );
}

#[test]
fn test_value_placeholders_are_not_expanded()
{   let template = PromptTemplate::from_template("{a} and {b}");
    let mut values = HashMap::new();
    values.insert("a", "{b}");
    values.insert("b", "two");
    assert_eq!(template.format(&values).unwrap(), "{b} and two");
}

#[test]
fn test_undeclared_placeholders_left_alone()
{   let template = PromptTemplate::new(
      vec!["x".to_string()],
      "{x} {y} {not valid} {"
    );
    assert_eq!(
      template.format_one("x", "1").unwrap(),
      "1 {y} {not valid} {"
    );
}

#[test]
fn test_from_template_infers_variables()
{   let template = PromptTemplate::from_template("{b} {a} {b} {1x}");
    assert_eq!(template.input_variables, vec!["b", "a"]);
}

#[test]
fn test_declared_variable_without_placeholder_formats()
{   let template = PromptTemplate::new(
      vec!["unused".to_string()],
      "no vars"
    );
    assert_eq!(template.format_one("unused", "x").unwrap(), "no vars");
}

#[test]
fn test_extra_values_are_ignored()
{   let template = PromptTemplate::from_template("hi {name}");
    let mut values = HashMap::new();
    values.insert("name", "ana");
    values.insert("extra", "ignored");
    assert_eq!(template.format(&values).unwrap(), "hi ana");
}

#[test]
fn test_validate_template()
{   let exact = PromptTemplate::new(vec!["a".to_string()], "{a}");
    assert!(exact.validate_template().is_ok());

    let unused = PromptTemplate::new(vec!["a".to_string()], "none");
    assert!(matches!(
      unused.validate_template(),
      Err(Error::InvalidConfiguration(_))
    ));

    let undeclared = PromptTemplate::new(vec![], "{b}");
    assert!(matches!(
      undeclared.validate_template(),
      Err(Error::InvalidConfiguration(_))
    ));
}

#[test]
fn test_doubled_braces_are_literal()
{   let template = PromptTemplate::from_template(
      "{{information}} is {information}, {{ and }} stay"
    );
    assert_eq!(template.input_variables, vec!["information"]);
    assert_eq!(
      template.format_one("information", "text").unwrap(),
      "{information} is text, { and } stay"
    );
}

// ===== Comparison driver =====

#[test]
fn test_query_model_embeds_information()
{   struct Echo;
    impl ChatModel for Echo
    {   fn model_name(&self) -> &str
        {   "echo"
        }
        fn invoke(
          &self
        , messages: &[Message]
        ) -> Result<modelswitch::AiMessage, Error>
        {   Ok(modelswitch::AiMessage::new(messages[0].content.clone()))
        }
    }

    let reply = query_model(&Echo, SUMMARY_TEMPLATE).unwrap();
    assert!(reply.content.contains(INFORMATION));
    assert!(!reply.content.contains("{information}"));
}

#[test]
fn test_query_model_fails_on_unbound_placeholder()
{   let guard = llama_guard_4_model();
    assert_eq!(
      query_model(&guard, "{information} about {topic}"),
      Err(Error::MissingPlaceholder("topic".to_string()))
    );
}

#[test]
fn test_compare_models_with_plain_prompt()
{   let comparison = compare_models("Explain machine learning").unwrap();
    let keys: Vec<GroqModel> = comparison.keys().copied().collect();
    assert_eq!(
      keys,
      vec![GroqModel::LlamaGuard4, GroqModel::Llama33Versatile]
    );
    assert!(comparison.values().all(|v| !v.is_empty()));
}

#[test]
fn test_factory_models()
{   assert_eq!(llama_guard_4_model().model(), GroqModel::LlamaGuard4);
    assert_eq!(llama_guard_4_model().temperature(), 0.0);
    assert_eq!(llama_3_3_model().model(), GroqModel::Llama33Versatile);
    assert!(llama_3_3_model().temperature() > 0.2);
}

#[test]
fn test_compare_models_returns_both()
{   let comparison = compare_models(SUMMARY_TEMPLATE).unwrap();
    assert_eq!(comparison.len(), 2);
    let keys: Vec<GroqModel> = comparison.keys().copied().collect();
    assert_eq!(
      keys,
      vec![GroqModel::LlamaGuard4, GroqModel::Llama33Versatile]
    );
    assert!(comparison.values().all(|v| !v.is_empty()));
    assert_eq!(
      comparison[&GroqModel::Llama33Versatile],
      LLAMA_3_3_CREATIVE_RESPONSE
    );
}

//! Send the summary prompt to a locally served Ollama model

use std::collections::HashMap;
use modelswitch::exercise::{INFORMATION, INFORMATION_VAR, SUMMARY_TEMPLATE};
use modelswitch::{Error, OllamaClient, OllamaConfig, PromptTemplate};

async fn run() -> Result<(), Error>
{   let config = OllamaConfig::from_env();
    let client = OllamaClient::new(config)?;
    let template = PromptTemplate::new(
      vec![INFORMATION_VAR.to_string()],
      SUMMARY_TEMPLATE
    );
    template.validate_template()?;

    let mut values = HashMap::new();
    values.insert(INFORMATION_VAR, INFORMATION);

    let reply = client.format_and_invoke(&template, &values).await?;
    println!("{}", reply);
    Ok(())
}

#[tokio::main]
async fn main()
{   let _ = dotenvy::dotenv();
    env_logger::init();

    if let Err(e) = run().await
    {   eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

//! Offline walk-through of switching between Groq models

use modelswitch::exercise::{
  compare_models, llama_3_3_model, llama_guard_4_model, query_model,
  SUMMARY_TEMPLATE,
};
use modelswitch::{Credentials, Error};

/// Key used when neither the environment nor `.env` provides one
const PLACEHOLDER_API_KEY: &str = "mock-groq-key";

fn run() -> Result<(), Error>
{   println!("🔑 Setting API key...");
    let mut credentials = Credentials::from_env();
    credentials.set_credential(PLACEHOLDER_API_KEY);
    credentials.require_credential()?;
    println!("✓ API key validation working!");

    println!("\n🤖 Testing Llama Guard 4:");
    let guard = llama_guard_4_model();
    let reply = query_model(&guard, SUMMARY_TEMPLATE)?;
    println!("Llama Guard 4: {}\n", reply);

    println!("🤖 Testing Llama 3.3:");
    let versatile = llama_3_3_model();
    let reply = query_model(&versatile, SUMMARY_TEMPLATE)?;
    println!("Llama 3.3: {}\n", reply);

    println!("🔄 Comparing models:");
    let comparison = compare_models(SUMMARY_TEMPLATE)?;
    println!("Comparison results:");
    for (model, response) in &comparison
    {   println!("  {}: {}", model, response);
    }
    Ok(())
}

fn main()
{   let _ = dotenvy::dotenv();
    env_logger::init();

    println!("🚀 Groq Model Switching (mock client)");
    println!("{}", "=".repeat(55));
    println!("🌐 Model names match console.groq.com exactly");
    println!();

    match run()
    {   Ok(()) => {
          println!("\n🎉 All models responded!");
        }
      , Err(e) => {
          println!("❌ Error: {}", e);
          if let Error::MissingCredential(_) = e
          {   println!("\n💡 Set the API key before creating clients");
          } else
          {   println!("🌐 Verify model names match console.groq.com");
          }
          std::process::exit(1);
        }
    }
}

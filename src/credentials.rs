//! Explicit holder for the Groq API key

use log::{debug, error};

/// Name the credential is known by
pub const GROQ_API_KEY: &str = "GROQ_API_KEY";

/// Holds the single API key a client needs.
/// Passed around explicitly instead of living in process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials
{   api_key: Option<String>
}

impl Credentials
{   /// Empty holder
    pub fn new() -> Self
    {   Credentials::default()
    }

    /// Seed from `GROQ_API_KEY`, if the process has it
    pub fn from_env() -> Self
    {   let api_key = std::env::var(GROQ_API_KEY).ok();
        debug!(
          "Loaded credentials from env, present: {}",
          api_key.is_some()
        );
        Credentials { api_key }
    }

    /// Store `value` unless a key is already held
    pub fn set_credential(&mut self, value: impl Into<String>)
    {   if self.api_key.is_some()
        {   debug!("{} already set, keeping it", GROQ_API_KEY);
            return;
        }
        debug!("Setting {}", GROQ_API_KEY);
        self.api_key = Some(value.into());
    }

    /// Fail with `MissingCredential` when no key is held
    pub fn require_credential(&self)
      -> Result<(), crate::error::Error>
    {   self.api_key().map(|_| ())
    }

    /// The held key
    pub fn api_key(&self) -> Result<&str, crate::error::Error>
    {   self.api_key.as_deref().ok_or_else(|| {
          error!("{} is not set", GROQ_API_KEY);
          crate::error::Error::MissingCredential(
            GROQ_API_KEY.to_string()
          )
        })
    }
}

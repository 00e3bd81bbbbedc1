use std::fmt;

/// Error type for model switching operations
/// Implements Clone so results can be compared and re-sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Credential is not set (holds the credential name)
    MissingCredential(String)
  , /// Model identifier is not in the allowed set
    InvalidModel(String)
  , /// Request rejected before it reached the model
    InvalidRequest(String)
  , /// Template variable has no supplied value
    MissingPlaceholder(String)
  , /// Invalid configuration
    InvalidConfiguration(String)
  , /// HTTP request error
    HttpError(String)
  , /// API returned an error response
    ApiError(String)
  , /// Failed to parse API response
    ParseError(String)
  , /// Timeout error
    Timeout
  , /// Generic error
    Other(String)
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingCredential(name) => {
              write!(f,
                "{} environment variable is required",
                name
              )
            }
          , Error::InvalidModel(model) => {
              write!(f, "Invalid model name: {}", model)
            }
          , Error::InvalidRequest(msg) => {
              write!(f, "Invalid request: {}", msg)
            }
          , Error::MissingPlaceholder(name) => {
              write!(f,
                "Missing value for template variable: {}",
                name
              )
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::ApiError(msg) => {
              write!(f, "API error: {}", msg)
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::Timeout => {
              write!(f, "Request timed out")
            }
          , Error::Other(msg) => {
              write!(f, "Error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<String> for Error
{   fn from(s: String) -> Self
    {   Error::Other(s)
    }
}

impl From<&str> for Error
{   fn from(s: &str) -> Self
    {   Error::Other(s.to_string())
    }
}

impl From<reqwest::Error> for Error
{   fn from(e: reqwest::Error) -> Self
    {   if e.is_timeout()
        {   Error::Timeout
        } else if e.is_decode()
        {   Error::ParseError(e.to_string())
        } else
        {   Error::HttpError(e.to_string())
        }
    }
}

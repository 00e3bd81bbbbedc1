//! Message and response types shared by every client

use serde::{Deserialize, Serialize};

/// One chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message
{   /// Speaker role ("user", "system", "assistant")
    pub role: String
  , /// Message text
    pub content: String
}

impl Message
{   pub fn new(
      role: impl Into<String>
    , content: impl Into<String>
    ) -> Self
    {   Message
        {   role: role.into()
          , content: content.into()
        }
    }

    pub fn user(content: impl Into<String>) -> Self
    {   Message::new("user", content)
    }
}

/// Reply produced by a chat model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiMessage
{   pub content: String
}

impl AiMessage
{   pub fn new(content: impl Into<String>) -> Self
    {   AiMessage
        {   content: content.into()
        }
    }
}

impl std::fmt::Display for AiMessage
{   fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
      -> std::fmt::Result
    {   f.write_str(&self.content)
    }
}

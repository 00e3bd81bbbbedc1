//! Prompt templates with `{name}` placeholders

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use log::{debug, error, trace};
use serde::{Deserialize, Serialize};

/// A template string plus the variables it must be given
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplate
{   pub input_variables: Vec<String>
  , pub template: String
}

impl PromptTemplate
{   /// Template with an explicit variable list
    pub fn new(
      input_variables: Vec<String>
    , template: impl Into<String>
    ) -> Self
    {   PromptTemplate
        {   input_variables
          , template: template.into()
        }
    }

    /// Template whose variables are every `{name}` it contains
    pub fn from_template(template: impl Into<String>) -> Self
    {   let template = template.into();
        let input_variables = placeholders(&template);
        debug!("Inferred template variables: {:?}", input_variables);
        PromptTemplate
        {   input_variables
          , template
        }
    }

    /// Check that the declared variables are exactly the
    /// placeholders the template contains
    pub fn validate_template(&self) -> Result<(), crate::error::Error>
    {   let found = placeholders(&self.template);
        if let Some(name) = self.input_variables
          .iter()
          .find(|v| !found.contains(v))
        {   error!("Variable {} not in template", name);
            return Err(crate::error::Error::InvalidConfiguration(
              format!("input variable {} does not occur in template", name)
            ));
        }
        if let Some(name) = found
          .iter()
          .find(|p| !self.input_variables.contains(p))
        {   error!("Placeholder {} not declared", name);
            return Err(crate::error::Error::InvalidConfiguration(
              format!("placeholder {} is not an input variable", name)
            ));
        }
        Ok(())
    }

    /// Substitute every declared variable from `values`.
    /// `{{` and `}}` become literal braces; placeholders that are
    /// not declared are left as written. Extra values are ignored.
    pub fn format<K, V>(
      &self
    , values: &HashMap<K, V>
    ) -> Result<String, crate::error::Error>
    where
      K: Borrow<str> + Hash + Eq
    , V: AsRef<str>
    {   for name in &self.input_variables
        {   if !values.contains_key(name.as_str())
            {   error!("No value for template variable {}", name);
                return Err(crate::error::Error::MissingPlaceholder(
                  name.clone()
                ));
            }
        }

        let mut out = String::with_capacity(self.template.len());
        for piece in pieces(&self.template)
        {   match piece
            {   Piece::Text(text) => out.push_str(text)
              , Piece::Var(name) => {
                  match values.get(name)
                  {   Some(value)
                        if self.input_variables.iter().any(|v| v == name) =>
                      {   trace!("Substituting {}", name);
                          out.push_str(value.as_ref());
                      }
                    , _ => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                      }
                  }
                }
            }
        }
        Ok(out)
    }

    /// Convenience for the common single-variable case
    pub fn format_one(
      &self
    , name: &str
    , value: &str
    ) -> Result<String, crate::error::Error>
    {   let mut values = HashMap::new();
        values.insert(name, value);
        self.format(&values)
    }
}

enum Piece<'a>
{   Text(&'a str)
  , Var(&'a str)
}

/// Split a template into literal text and `{name}` placeholders
fn pieces(template: &str) -> Vec<Piece<'_>>
{   let mut out = Vec::new();
    let mut rest = template;
    while let Some(pos) = rest.find(|c: char| c == '{' || c == '}')
    {   if pos > 0
        {   out.push(Piece::Text(&rest[..pos]));
        }
        let tail = &rest[pos..];
        if tail.starts_with("{{")
        {   out.push(Piece::Text("{"));
            rest = &tail[2..];
        } else if tail.starts_with("}}")
        {   out.push(Piece::Text("}"));
            rest = &tail[2..];
        } else if let Some(name) = tail
          .strip_prefix('{')
          .and_then(placeholder_at)
        {   out.push(Piece::Var(name));
            rest = &tail[name.len() + 2..];
        } else
        {   out.push(Piece::Text(&tail[..1]));
            rest = &tail[1..];
        }
    }
    if !rest.is_empty()
    {   out.push(Piece::Text(rest));
    }
    out
}

/// Name of the `{name}` placeholder starting right after a `{`
fn placeholder_at(after_brace: &str) -> Option<&str>
{   let close = after_brace.find('}')?;
    let name = &after_brace[..close];
    if is_identifier(name)
    {   Some(name)
    } else
    {   None
    }
}

fn is_identifier(s: &str) -> bool
{   let mut chars = s.chars();
    match chars.next()
    {   Some(c) if c.is_ascii_alphabetic() || c == '_' => {
          chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
      , _ => false
    }
}

/// Distinct placeholder names in order of first occurrence
pub fn placeholders(template: &str) -> Vec<String>
{   let mut names: Vec<String> = Vec::new();
    for piece in pieces(template)
    {   if let Piece::Var(name) = piece
        {   if !names.iter().any(|n| n == name)
            {   names.push(name.to_string());
            }
        }
    }
    names
}

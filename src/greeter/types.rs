use super::{PREFIX, SUFFIX};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use thiserror::Error;

/// A formatted greeting
///
/// Serializes as a bare string. Deserializing rejects text that is not
/// of the form `"Hello, <name>!"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Greeting(String);

/// Text that could not have come from a greeter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a greeting: {0:?}")]
pub struct InvalidGreeting(pub String);

impl Greeting {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    /// Borrow the greeting text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the owned text
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Greeting {
    type Error = InvalidGreeting;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        if text.starts_with(PREFIX) && text.ends_with(SUFFIX) {
            Ok(Self(text))
        } else {
            Err(InvalidGreeting(text))
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for Greeting {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Greeting {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Greeting> for String {
    fn from(greeting: Greeting) -> Self {
        greeting.0
    }
}

impl PartialEq<str> for Greeting {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Greeting {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for Greeting {
    fn eq(&self, other: &String) -> bool {
        &self.0 == other
    }
}

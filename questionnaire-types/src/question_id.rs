use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A stable identifier for a question, e.g. `"17"` or `"network.firewall"`.
///
/// Used as keys in `ResponseMap` and `ValidationSchema`. Catalogs often use
/// numeric ids, so both integers and strings convert into the same string key:
/// `QuestionId::from(17)` and `QuestionId::from("17")` are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct QuestionId {
    id: String,
}

impl QuestionId {
    /// Create a new id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for QuestionId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&String> for QuestionId {
    fn from(s: &String) -> Self {
        Self::new(s.clone())
    }
}

impl From<&QuestionId> for QuestionId {
    fn from(id: &QuestionId) -> Self {
        id.clone()
    }
}

impl From<u32> for QuestionId {
    fn from(n: u32) -> Self {
        Self::new(n.to_string())
    }
}

impl From<u64> for QuestionId {
    fn from(n: u64) -> Self {
        Self::new(n.to_string())
    }
}

impl From<i32> for QuestionId {
    fn from(n: i32) -> Self {
        Self::new(n.to_string())
    }
}

impl From<i64> for QuestionId {
    fn from(n: i64) -> Self {
        Self::new(n.to_string())
    }
}

impl<'de> Deserialize<'de> for QuestionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Unsigned(u64),
            Signed(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Unsigned(n) => Self::from(n),
            RawId::Signed(n) => Self::from(n),
            RawId::Text(s) => Self::new(s),
        })
    }
}

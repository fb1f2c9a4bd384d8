use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{QuestionId, ResponseValue};

/// Answers collected during a questionnaire session.
///
/// Keys are flat `QuestionId`s, regardless of how deeply a question is nested
/// in the tree. Empty answers (an empty string or an empty selection) are
/// treated exactly like missing ones: [`count_filled`](Self::count_filled)
/// ignores them and [`compact`](Self::compact) removes them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseMap {
    values: HashMap<QuestionId, ResponseValue>,
}

impl ResponseMap {
    /// Create a new empty response map.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Set the answer for a question, replacing any previous answer.
    ///
    /// Collections are replaced as a whole, never merged. Returns the
    /// previous answer, if any.
    pub fn set(
        &mut self,
        id: impl Into<QuestionId>,
        value: impl Into<ResponseValue>,
    ) -> Option<ResponseValue> {
        self.values.insert(id.into(), value.into())
    }

    /// Builder-style [`set`](Self::set).
    pub fn with_response(
        mut self,
        id: impl Into<QuestionId>,
        value: impl Into<ResponseValue>,
    ) -> Self {
        self.set(id, value);
        self
    }

    /// Get the answer for a question.
    pub fn get(&self, id: &QuestionId) -> Option<&ResponseValue> {
        self.values.get(id)
    }

    /// Check if an entry exists for a question, filled or not.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.values.contains_key(id)
    }

    /// Check if a question has a non-empty answer.
    pub fn is_filled(&self, id: &QuestionId) -> bool {
        self.get(id).is_some_and(|value| !value.is_empty())
    }

    /// Remove the answer for a question.
    pub fn remove(&mut self, id: &QuestionId) -> Option<ResponseValue> {
        self.values.remove(id)
    }

    /// Get an iterator over all id-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &ResponseValue)> {
        self.values.iter()
    }

    /// Get the number of entries, including empty ones.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Count the non-empty answers without touching the map.
    pub fn count_filled(&self) -> usize {
        self.values.values().filter(|value| !value.is_empty()).count()
    }

    /// Remove every empty answer. Returns how many entries were dropped.
    ///
    /// Idempotent: a second call always returns 0.
    pub fn compact(&mut self) -> usize {
        let before = self.values.len();
        self.values.retain(|_, value| !value.is_empty());
        before - self.values.len()
    }

    /// Compact, then count what is left.
    pub fn prune(&mut self) -> usize {
        self.compact();
        self.values.len()
    }
}

impl IntoIterator for ResponseMap {
    type Item = (QuestionId, ResponseValue);
    type IntoIter = std::collections::hash_map::IntoIter<QuestionId, ResponseValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResponseMap {
    type Item = (&'a QuestionId, &'a ResponseValue);
    type IntoIter = std::collections::hash_map::Iter<'a, QuestionId, ResponseValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for ResponseMap
where
    K: Into<QuestionId>,
    V: Into<ResponseValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

//! # Identity Types
//!
//! Identifiers used by the form. [`QuestionId`] keys the per-question
//! annotation maps; [`StoreInfo`] is the static display identity of the
//! store the form is being filled for.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

/// A question label such as `"1.1"` or `"2.10"`.
///
/// Labels follow the form's numbering scheme but are not validated: the
/// rendering layer owns the numbering and the core treats the value as an
/// opaque key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    /// Wrap a question label.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QuestionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for QuestionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for QuestionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display identity of the store the form is filled for.
///
/// Set once when the session starts and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreInfo {
    pub id: String,
    pub name: String,
}

impl StoreInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Default for StoreInfo {
    fn default() -> Self {
        Self::new("32002", "Delhi Store")
    }
}

impl std::fmt::Display for StoreInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.id, self.name)
    }
}

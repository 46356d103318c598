//! # File Handles
//!
//! A [`FileHandle`] stands in for a file captured by the browser (or any
//! other capture collaborator). The core stores and removes handles but
//! never reads file contents; the handle's `id` is how the collaborator
//! finds the actual bytes again.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An opaque reference to a captured file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileHandle {
    /// Identifier assigned at capture time.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Original file name.
    pub name: String,
    /// MIME-type-like classification, e.g. `image/jpeg` or `application/pdf`.
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub size_bytes: u64,
}

impl FileHandle {
    /// Create a handle with a fresh identifier.
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            media_type: media_type.into(),
            size_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_handles_get_distinct_ids() {
        let a = FileHandle::new("a.jpg", "image/jpeg", 10);
        let b = FileHandle::new("a.jpg", "image/jpeg", 10);
        assert_ne!(a.id, b.id);
        assert_ne!(a, b);
    }

    #[test]
    fn deserializes_with_defaults() {
        let handle: FileHandle = serde_json::from_str(r#"{"name":"photo.jpg"}"#).unwrap();
        assert_eq!(handle.name, "photo.jpg");
        assert_eq!(handle.media_type, "");
        assert_eq!(handle.size_bytes, 0);
    }
}

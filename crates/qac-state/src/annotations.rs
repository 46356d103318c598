//! # Per-Question Annotations
//!
//! Comments, "not applicable" flags and file uploads attached to individual
//! questions. Each kind lives in its own map keyed by [`QuestionId`], so an
//! id appears at most once per kind. Records are created on first touch and
//! never deleted for the life of the session.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use qac_core::{FileHandle, QuestionId};

/// A free-text comment on a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionComment {
    pub question_id: QuestionId,
    pub comment: String,
    /// Whether the comment box is open.
    pub is_visible: bool,
}

/// The "not applicable" flag of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NaState {
    pub question_id: QuestionId,
    #[serde(rename = "isNA")]
    pub is_na: bool,
}

/// Files uploaded as evidence for a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUpload {
    pub question_id: QuestionId,
    pub files: Vec<FileHandle>,
}

/// The three annotation maps of a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnnotations {
    #[serde(rename = "questionComments")]
    pub comments: BTreeMap<QuestionId, QuestionComment>,
    #[serde(rename = "questionNAStates")]
    pub na_states: BTreeMap<QuestionId, NaState>,
    #[serde(rename = "fileUploads")]
    pub uploads: BTreeMap<QuestionId, FileUpload>,
}

impl QuestionAnnotations {
    /// Flip the comment box of `id`, opening an empty one on first use.
    pub fn toggle_comment(&mut self, id: impl Into<QuestionId>) -> &QuestionComment {
        let id = id.into();
        match self.comments.entry(id.clone()) {
            Entry::Occupied(entry) => {
                let record = entry.into_mut();
                record.is_visible = !record.is_visible;
                record
            }
            Entry::Vacant(entry) => entry.insert(QuestionComment {
                question_id: id,
                comment: String::new(),
                is_visible: true,
            }),
        }
    }

    /// Set the comment text of `id`. Visibility is left alone on an existing
    /// record; a new record starts visible.
    pub fn set_comment(
        &mut self,
        id: impl Into<QuestionId>,
        text: impl Into<String>,
    ) -> &QuestionComment {
        let id = id.into();
        let text = text.into();
        match self.comments.entry(id.clone()) {
            Entry::Occupied(entry) => {
                let record = entry.into_mut();
                record.comment = text;
                record
            }
            Entry::Vacant(entry) => entry.insert(QuestionComment {
                question_id: id,
                comment: text,
                is_visible: true,
            }),
        }
    }

    /// Flip the N/A flag of `id` (first use sets it), returning the new value.
    pub fn toggle_na(&mut self, id: impl Into<QuestionId>) -> bool {
        let id = id.into();
        match self.na_states.entry(id.clone()) {
            Entry::Occupied(entry) => {
                let record = entry.into_mut();
                record.is_na = !record.is_na;
                record.is_na
            }
            Entry::Vacant(entry) => {
                entry.insert(NaState {
                    question_id: id,
                    is_na: true,
                });
                true
            }
        }
    }

    /// Replace the files of `id` wholesale.
    pub fn set_files(&mut self, id: impl Into<QuestionId>, files: Vec<FileHandle>) {
        let id = id.into();
        match self.uploads.entry(id.clone()) {
            Entry::Occupied(entry) => entry.into_mut().files = files,
            Entry::Vacant(entry) => {
                entry.insert(FileUpload {
                    question_id: id,
                    files,
                });
            }
        }
    }

    /// Remove the file at `index` of `id`, keeping the order of the rest.
    ///
    /// A missing record or an out-of-range index is a no-op and returns
    /// `None`. No record is created.
    pub fn remove_file(&mut self, id: &str, index: usize) -> Option<FileHandle> {
        let upload = self.uploads.get_mut(id)?;
        if index >= upload.files.len() {
            return None;
        }
        Some(upload.files.remove(index))
    }

    pub fn comment(&self, id: &str) -> Option<&QuestionComment> {
        self.comments.get(id)
    }

    /// Whether `id` is flagged N/A. Questions never toggled are not.
    pub fn is_na(&self, id: &str) -> bool {
        self.na_states.get(id).is_some_and(|s| s.is_na)
    }

    /// Files uploaded for `id`; empty when nothing was uploaded.
    pub fn files(&self, id: &str) -> &[FileHandle] {
        self.uploads
            .get(id)
            .map(|u| u.files.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(name: &str) -> FileHandle {
        FileHandle::new(name, "image/jpeg", 1024)
    }

    #[test]
    fn first_toggle_opens_empty_comment() {
        let mut notes = QuestionAnnotations::default();
        let record = notes.toggle_comment("1.1").clone();
        assert_eq!(record.question_id.as_str(), "1.1");
        assert_eq!(record.comment, "");
        assert!(record.is_visible);
    }

    #[test]
    fn double_toggle_restores_visibility_and_keeps_text() {
        let mut notes = QuestionAnnotations::default();
        notes.set_comment("1.9", "pallet crushed");
        let before = notes.comment("1.9").unwrap().is_visible;
        notes.toggle_comment("1.9");
        assert_eq!(notes.comment("1.9").unwrap().is_visible, !before);
        notes.toggle_comment("1.9");
        let after = notes.comment("1.9").unwrap();
        assert_eq!(after.is_visible, before);
        assert_eq!(after.comment, "pallet crushed");
    }

    #[test]
    fn set_comment_on_fresh_id_is_visible() {
        let mut notes = QuestionAnnotations::default();
        let record = notes.set_comment("2.4", "x");
        assert_eq!(
            record,
            &QuestionComment {
                question_id: "2.4".into(),
                comment: "x".into(),
                is_visible: true,
            }
        );
    }

    #[test]
    fn set_comment_keeps_hidden_box_hidden() {
        let mut notes = QuestionAnnotations::default();
        notes.toggle_comment("2.4");
        notes.toggle_comment("2.4");
        notes.set_comment("2.4", "later");
        let record = notes.comment("2.4").unwrap();
        assert!(!record.is_visible);
        assert_eq!(record.comment, "later");
    }

    #[test]
    fn na_toggle_sequence() {
        let mut notes = QuestionAnnotations::default();
        assert!(!notes.is_na("1.10"));
        assert!(notes.toggle_na("1.10"));
        assert!(notes.is_na("1.10"));
        assert!(!notes.toggle_na("1.10"));
        assert!(!notes.is_na("1.10"));
        assert_eq!(notes.na_states.len(), 1);
    }

    #[test]
    fn set_files_replaces_wholesale() {
        let mut notes = QuestionAnnotations::default();
        notes.set_files("2.1", vec![handle("a"), handle("b")]);
        notes.set_files("2.1", vec![handle("c")]);
        let names: Vec<&str> = notes.files("2.1").iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["c"]);
        assert_eq!(notes.uploads.len(), 1);
    }

    #[test]
    fn remove_file_preserves_order() {
        let mut notes = QuestionAnnotations::default();
        notes.set_files("2.2", vec![handle("a"), handle("b"), handle("c")]);
        let removed = notes.remove_file("2.2", 1).unwrap();
        assert_eq!(removed.name, "b");
        let names: Vec<&str> = notes.files("2.2").iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn remove_file_out_of_range_is_noop() {
        let mut notes = QuestionAnnotations::default();
        notes.set_files("2.2", vec![handle("a")]);
        assert_eq!(notes.remove_file("2.2", 1), None);
        assert_eq!(notes.remove_file("2.2", usize::MAX), None);
        assert_eq!(notes.files("2.2").len(), 1);
    }

    #[test]
    fn remove_file_without_record_creates_nothing() {
        let mut notes = QuestionAnnotations::default();
        assert_eq!(notes.remove_file("2.3", 0), None);
        assert!(notes.uploads.is_empty());
        assert!(notes.files("2.3").is_empty());
    }

    #[test]
    fn serialized_keys_match_state_tree() {
        let mut notes = QuestionAnnotations::default();
        notes.toggle_na("2.5");
        let json = serde_json::to_value(&notes).unwrap();
        assert!(json.get("questionComments").is_some());
        assert!(json.get("fileUploads").is_some());
        assert_eq!(json["questionNAStates"]["2.5"]["isNA"], true);
        assert_eq!(json["questionNAStates"]["2.5"]["questionId"], "2.5");
    }
}

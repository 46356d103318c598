//! # Form Actions
//!
//! Every mutation the rendering layer can request, as data. A
//! [`FormAction`] serializes as `{"type": "<name>", "payload": ...}` so a
//! recorded session reads like an action log and can be replayed.

use serde::{Deserialize, Serialize};

use qac_core::{BrandType, FileHandle, QuestionId, SectionKey};

use crate::sections::{BrandNamesField, WhDcField};

/// A single state mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum FormAction {
    SetBrandType(BrandType),
    SetSelectedBrand(String),
    SetRestaurantName(String),
    SetStoreId(String),
    SetDcWhPosition(String),
    SetWhDcLocationName(String),
    SetEmail(String),
    ToggleSection(SectionKey),
    SetBrandNamesField {
        field: BrandNamesField,
        value: String,
    },
    SetWhDcField {
        field: WhDcField,
        value: String,
    },
    SetAttachedPhotos(Vec<FileHandle>),
    ToggleQuestionComment(QuestionId),
    #[serde(rename_all = "camelCase")]
    SetQuestionComment {
        question_id: QuestionId,
        comment: String,
    },
    #[serde(rename = "toggleQuestionNA")]
    ToggleQuestionNa(QuestionId),
    #[serde(rename_all = "camelCase")]
    SetQuestionFiles {
        question_id: QuestionId,
        files: Vec<FileHandle>,
    },
    #[serde(rename_all = "camelCase")]
    RemoveQuestionFile {
        question_id: QuestionId,
        file_index: usize,
    },
    SetHasAttemptedSubmit(bool),
    /// Recompute metrics without changing any answer.
    RecalculateMetrics,
}

impl FormAction {
    /// The action's wire name, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetBrandType(_) => "setBrandType",
            Self::SetSelectedBrand(_) => "setSelectedBrand",
            Self::SetRestaurantName(_) => "setRestaurantName",
            Self::SetStoreId(_) => "setStoreId",
            Self::SetDcWhPosition(_) => "setDcWhPosition",
            Self::SetWhDcLocationName(_) => "setWhDcLocationName",
            Self::SetEmail(_) => "setEmail",
            Self::ToggleSection(_) => "toggleSection",
            Self::SetBrandNamesField { .. } => "setBrandNamesField",
            Self::SetWhDcField { .. } => "setWhDcField",
            Self::SetAttachedPhotos(_) => "setAttachedPhotos",
            Self::ToggleQuestionComment(_) => "toggleQuestionComment",
            Self::SetQuestionComment { .. } => "setQuestionComment",
            Self::ToggleQuestionNa(_) => "toggleQuestionNA",
            Self::SetQuestionFiles { .. } => "setQuestionFiles",
            Self::RemoveQuestionFile { .. } => "removeQuestionFile",
            Self::SetHasAttemptedSubmit(_) => "setHasAttemptedSubmit",
            Self::RecalculateMetrics => "recalculateMetrics",
        }
    }

    /// Whether applying this action can change the completion metrics.
    ///
    /// Covers every restaurant-details setter, the WH DC ones included.
    pub fn touches_restaurant_details(&self) -> bool {
        matches!(
            self,
            Self::SetBrandType(_)
                | Self::SetSelectedBrand(_)
                | Self::SetRestaurantName(_)
                | Self::SetStoreId(_)
                | Self::SetDcWhPosition(_)
                | Self::SetWhDcLocationName(_)
                | Self::RecalculateMetrics
        )
    }
}

//! # Form State
//!
//! [`FormState`] is the whole form document: answers, expansion flags,
//! derived metrics, annotations and the submit-attempted flag. Every
//! mutation is a method here and every method is total. Absent annotation
//! records are created on demand and no input is rejected.
//!
//! `FormState` does not recompute metrics on its own when an answer
//! changes; [`FormSession`](crate::session::FormSession) does that after
//! each restaurant-details mutation. Code that drives a bare `FormState`
//! calls [`FormState::recalculate_metrics`] itself.

use serde::{Deserialize, Serialize};

use qac_core::{BrandType, FileHandle, QuestionId, SectionKey, StoreInfo};

use crate::action::FormAction;
use crate::annotations::{QuestionAnnotations, QuestionComment};
use crate::metrics::{self, MetricsUpdate, ProcessMetrics};
use crate::sections::{BrandNamesField, Sections, WhDcField};

/// The form document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub store_info: StoreInfo,
    pub process_metrics: ProcessMetrics,
    pub sections: Sections,
    /// Percentage of the questionnaire's mandatory questions answered.
    pub overall_completion: f64,
    pub email: String,
    #[serde(flatten)]
    pub annotations: QuestionAnnotations,
    /// Gates display of required-field warnings.
    pub has_attempted_submit: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(StoreInfo::default())
    }
}

/// A stored answer, as the required-field check sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer<'a> {
    Text(Option<&'a str>),
    Files(&'a [FileHandle]),
}

impl FormState {
    /// A fresh form for `store_info`, with metrics already derived.
    pub fn new(store_info: StoreInfo) -> Self {
        let mut state = Self {
            store_info,
            process_metrics: ProcessMetrics::default(),
            sections: Sections::default(),
            overall_completion: 0.0,
            email: String::new(),
            annotations: QuestionAnnotations::default(),
            has_attempted_submit: false,
        };
        state.recalculate_metrics();
        state
    }

    // ── Restaurant details ───────────────────────────────────────────

    pub fn set_brand_type(&mut self, brand_type: BrandType) {
        self.sections.restaurant_details.data.brand_type = Some(brand_type);
    }

    pub fn set_selected_brand(&mut self, name: impl Into<String>) {
        self.sections.restaurant_details.data.selected_brand = Some(name.into());
    }

    pub fn set_restaurant_name(&mut self, name: impl Into<String>) {
        self.sections.restaurant_details.data.restaurant_name = name.into();
    }

    pub fn set_store_id(&mut self, store_id: impl Into<String>) {
        self.sections.restaurant_details.data.store_id = store_id.into();
    }

    pub fn set_dc_wh_position(&mut self, position: impl Into<String>) {
        self.sections.restaurant_details.data.dc_wh_position = position.into();
    }

    pub fn set_wh_dc_location_name(&mut self, name: impl Into<String>) {
        self.sections.restaurant_details.data.wh_dc_location_name = name.into();
    }

    // ── Other sections ───────────────────────────────────────────────

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Flip the expansion flag of a section, returning the new value.
    pub fn toggle_section(&mut self, key: SectionKey) -> bool {
        self.sections.toggle(key)
    }

    pub fn set_brand_names_field(&mut self, field: BrandNamesField, value: impl Into<String>) {
        *self.sections.brand_names.data.field_mut(field) = value.into();
    }

    pub fn set_wh_dc_field(&mut self, field: WhDcField, value: impl Into<String>) {
        *self.sections.wh_dc.data.field_mut(field) = value.into();
    }

    /// Replace the 3.13 photos wholesale. The photo cap is not enforced here.
    pub fn set_attached_photos(&mut self, files: Vec<FileHandle>) {
        self.sections.brand_names.data.attached_photos = files;
    }

    // ── Annotations ──────────────────────────────────────────────────

    pub fn toggle_question_comment(&mut self, id: impl Into<QuestionId>) -> &QuestionComment {
        self.annotations.toggle_comment(id)
    }

    pub fn set_question_comment(
        &mut self,
        id: impl Into<QuestionId>,
        text: impl Into<String>,
    ) -> &QuestionComment {
        self.annotations.set_comment(id, text)
    }

    pub fn toggle_question_na(&mut self, id: impl Into<QuestionId>) -> bool {
        self.annotations.toggle_na(id)
    }

    pub fn set_question_files(&mut self, id: impl Into<QuestionId>, files: Vec<FileHandle>) {
        self.annotations.set_files(id, files);
    }

    /// Remove one uploaded file. A missing record or index is a no-op.
    pub fn remove_question_file(&mut self, id: &str, index: usize) -> Option<FileHandle> {
        self.annotations.remove_file(id, index)
    }

    pub fn set_has_attempted_submit(&mut self, attempted: bool) {
        self.has_attempted_submit = attempted;
    }

    // ── Derived state ────────────────────────────────────────────────

    /// Rederive completion metrics from the restaurant-details answers.
    pub fn recalculate_metrics(&mut self) -> MetricsUpdate {
        let update = metrics::recalculate(&self.sections.restaurant_details.data);
        update.apply_to(self);
        update
    }

    /// Apply one action. Does not recompute metrics.
    pub fn apply(&mut self, action: &FormAction) {
        match action {
            FormAction::SetBrandType(brand_type) => self.set_brand_type(*brand_type),
            FormAction::SetSelectedBrand(name) => self.set_selected_brand(name.as_str()),
            FormAction::SetRestaurantName(name) => self.set_restaurant_name(name.as_str()),
            FormAction::SetStoreId(id) => self.set_store_id(id.as_str()),
            FormAction::SetDcWhPosition(position) => self.set_dc_wh_position(position.as_str()),
            FormAction::SetWhDcLocationName(name) => self.set_wh_dc_location_name(name.as_str()),
            FormAction::SetEmail(email) => self.set_email(email.as_str()),
            FormAction::ToggleSection(key) => {
                self.toggle_section(*key);
            }
            FormAction::SetBrandNamesField { field, value } => {
                self.set_brand_names_field(*field, value.as_str())
            }
            FormAction::SetWhDcField { field, value } => {
                self.set_wh_dc_field(*field, value.as_str())
            }
            FormAction::SetAttachedPhotos(files) => self.set_attached_photos(files.clone()),
            FormAction::ToggleQuestionComment(id) => {
                self.toggle_question_comment(id.clone());
            }
            FormAction::SetQuestionComment {
                question_id,
                comment,
            } => {
                self.set_question_comment(question_id.clone(), comment.as_str());
            }
            FormAction::ToggleQuestionNa(id) => {
                self.toggle_question_na(id.clone());
            }
            FormAction::SetQuestionFiles { question_id, files } => {
                self.set_question_files(question_id.clone(), files.clone())
            }
            FormAction::RemoveQuestionFile {
                question_id,
                file_index,
            } => {
                self.remove_question_file(question_id.as_str(), *file_index);
            }
            FormAction::SetHasAttemptedSubmit(attempted) => {
                self.set_has_attempted_submit(*attempted)
            }
            FormAction::RecalculateMetrics => {
                self.recalculate_metrics();
            }
        }
    }

    // ── Readers ──────────────────────────────────────────────────────

    pub fn question_comment(&self, id: &str) -> Option<&QuestionComment> {
        self.annotations.comment(id)
    }

    pub fn is_question_na(&self, id: &str) -> bool {
        self.annotations.is_na(id)
    }

    pub fn question_files(&self, id: &str) -> &[FileHandle] {
        self.annotations.files(id)
    }

    /// The stored answer to question `id`, or `None` for labels that have
    /// no answer field.
    pub fn answer(&self, id: &str) -> Option<Answer<'_>> {
        let details = &self.sections.restaurant_details.data;
        let text = match id {
            "1.1" => details.brand_type.map(|b| b.as_str()),
            "1.2" => details.selected_brand.as_deref(),
            "1.3" => Some(details.restaurant_name.as_str()),
            "1.4" => Some(details.store_id.as_str()),
            "1.9" => Some(details.dc_wh_position.as_str()),
            "1.10" => Some(details.wh_dc_location_name.as_str()),
            "3.13" => {
                return Some(Answer::Files(
                    &self.sections.brand_names.data.attached_photos,
                ))
            }
            other => {
                if let Some(field) = WhDcField::from_question_id(other) {
                    Some(self.sections.wh_dc.data.field(field))
                } else {
                    let field = BrandNamesField::from_question_id(other)?;
                    Some(self.sections.brand_names.data.field(field))
                }
            }
        };
        Some(Answer::Text(text))
    }
}

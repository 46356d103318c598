//! # Required-Field Report
//!
//! Presentation-level completeness check. A question is reported when it
//! is required, currently visible, not flagged N/A (where N/A is offered),
//! and its answer is absent or blank. Photo questions are reported when no
//! photo is attached.
//!
//! Nothing here is stored or raised as an error. The report is recomputed
//! on demand and carries the submit-attempted flag so the rendering layer
//! knows whether to surface it.

use serde::Serialize;

use qac_core::{is_blank, QuestionSpec, SectionKey, QUESTIONS};

use crate::form::{Answer, FormState};

/// A visible required question with no answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredFieldIssue {
    pub question_id: &'static str,
    pub section: SectionKey,
    pub label: &'static str,
}

impl From<&QuestionSpec> for RequiredFieldIssue {
    fn from(spec: &QuestionSpec) -> Self {
        Self {
            question_id: spec.id,
            section: spec.section,
            label: spec.label,
        }
    }
}

/// Missing answers plus whether they should be shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub has_attempted_submit: bool,
    pub issues: Vec<RequiredFieldIssue>,
}

impl ValidationReport {
    pub fn for_state(state: &FormState) -> Self {
        Self {
            has_attempted_submit: state.has_attempted_submit,
            issues: required_fields(state),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.issues.is_empty()
    }

    /// The issues to display: all of them once submit was attempted,
    /// none before.
    pub fn visible_issues(&self) -> &[RequiredFieldIssue] {
        if self.has_attempted_submit {
            &self.issues
        } else {
            &[]
        }
    }
}

fn is_missing(answer: Answer<'_>) -> bool {
    match answer {
        Answer::Text(value) => is_blank(value),
        Answer::Files(files) => files.is_empty(),
    }
}

/// Visible required questions whose answers are missing, in display order.
pub fn required_fields(state: &FormState) -> Vec<RequiredFieldIssue> {
    let brand_type = state.sections.restaurant_details.data.brand_type;
    let product_line = state.sections.brand_names.data.selected_product_line();

    QUESTIONS
        .iter()
        .filter(|spec| spec.required)
        .filter(|spec| spec.visibility.is_visible(brand_type, product_line))
        .filter(|spec| !(spec.allows_na && state.is_question_na(spec.id)))
        .filter(|spec| state.answer(spec.id).is_some_and(is_missing))
        .map(RequiredFieldIssue::from)
        .collect()
}

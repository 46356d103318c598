//! # Completion Metrics
//!
//! Derives completion numbers from the restaurant-details answers.
//!
//! ```text
//! completed  = [brandType set]
//!            + Brand: [selectedBrand set] + [restaurantName] + [storeId]
//!            + WH DC: [dcWhPosition] + [whDcLocationName]
//!
//! section remaining = 4 - completed   (Brand)
//!                   = 3 - completed   (WH DC)
//!                   = 1 - completed   (no branch yet)
//! process remaining = 20 - completed
//! overall           = completed / 20 * 100
//! ```
//!
//! Text answers count when they are non-empty after trimming; the brand
//! selection counts when it is present and non-empty. The mandatory
//! totals are fixed constants for the whole questionnaire, not derived from
//! the question schema.

use serde::{Deserialize, Serialize};

use qac_core::BrandType;

use crate::form::FormState;
use crate::sections::RestaurantDetails;

/// Mandatory questions across the whole questionnaire.
pub const TOTAL_MANDATORY_QUESTIONS: u32 = 20;
/// Mandatory restaurant-details questions on the Brand branch.
pub const BRAND_PATH_MANDATORY: u32 = 4;
/// Mandatory restaurant-details questions on the WH DC branch.
pub const WH_DC_PATH_MANDATORY: u32 = 3;
/// Mandatory restaurant-details questions before a branch is chosen.
pub const UNBRANCHED_MANDATORY: u32 = 1;
/// Seeded remaining count of the brand names section.
pub const BRAND_NAMES_MANDATORY: u32 = 12;
/// Seeded remaining count of the WH / DC section.
pub const WH_DC_SECTION_MANDATORY: u32 = 12;
/// Seeded remaining count of the other complaint type section.
pub const OTHER_COMPLAINT_MANDATORY: u32 = 2;

/// Process-wide numbers shown in the form header.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessMetrics {
    pub remaining_mandatory_qs: u32,
    pub process_score: u32,
    /// Percentage in `0.0..=100.0`.
    pub process_compliance: f64,
}

impl Default for ProcessMetrics {
    fn default() -> Self {
        Self {
            remaining_mandatory_qs: TOTAL_MANDATORY_QUESTIONS,
            process_score: 0,
            process_compliance: 100.0,
        }
    }
}

/// The output of one recalculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsUpdate {
    pub completed: u32,
    /// New `restaurantDetails.metrics.remainingMandatoryQuestions`.
    pub section_remaining: u32,
    /// New `processMetrics.remainingMandatoryQs`.
    pub process_remaining: u32,
    /// New `overallCompletion`.
    pub overall_completion: f64,
}

impl MetricsUpdate {
    /// Write the derived numbers into `state`.
    pub fn apply_to(&self, state: &mut FormState) {
        state
            .sections
            .restaurant_details
            .metrics
            .remaining_mandatory_questions = self.section_remaining;
        state.process_metrics.remaining_mandatory_qs = self.process_remaining;
        state.overall_completion = self.overall_completion;
    }
}

fn answered(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Recompute completion from the restaurant-details answers.
pub fn recalculate(details: &RestaurantDetails) -> MetricsUpdate {
    let mut completed = 0u32;
    if details.brand_type.is_some() {
        completed += 1;
    }

    let branch_total = match details.brand_type {
        Some(BrandType::Brand) => {
            let has_brand = details.selected_brand.as_deref().is_some_and(|b| !b.is_empty());
            completed += u32::from(has_brand);
            completed += u32::from(answered(&details.restaurant_name));
            completed += u32::from(answered(&details.store_id));
            BRAND_PATH_MANDATORY
        }
        Some(BrandType::WhDc) => {
            completed += u32::from(answered(&details.dc_wh_position));
            completed += u32::from(answered(&details.wh_dc_location_name));
            WH_DC_PATH_MANDATORY
        }
        None => UNBRANCHED_MANDATORY,
    };

    MetricsUpdate {
        completed,
        section_remaining: branch_total.saturating_sub(completed),
        process_remaining: TOTAL_MANDATORY_QUESTIONS.saturating_sub(completed),
        overall_completion: f64::from(completed) / f64::from(TOTAL_MANDATORY_QUESTIONS) * 100.0,
    }
}

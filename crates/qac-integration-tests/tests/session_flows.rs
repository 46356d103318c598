//! # Session Flows
//!
//! End-to-end form sessions driven through `FormSession::dispatch`, the way
//! a rendering layer drives them.

use std::sync::Arc;

use serde_json::json;

use qac_core::{BrandType, FileHandle, SectionKey, StoreInfo};
use qac_state::{
    BrandNamesField, FormAction, FormObserver, FormSession, FormState, WhDcField,
    TOTAL_MANDATORY_QUESTIONS,
};

fn section_remaining(session: &FormSession) -> u32 {
    session.read(|s| s.sections.restaurant_details.metrics.remaining_mandatory_questions)
}

// =========================================================================
// Completion metrics
// =========================================================================

#[test]
fn fresh_session_has_nothing_completed() {
    let session = FormSession::new(StoreInfo::new("32002", "Delhi Store"));
    assert_eq!(section_remaining(&session), 1);
    session.read(|s| {
        assert_eq!(s.overall_completion, 0.0);
        assert_eq!(s.process_metrics.remaining_mandatory_qs, TOTAL_MANDATORY_QUESTIONS);
        assert_eq!(s.process_metrics.process_compliance, 100.0);
        assert_eq!(s.process_metrics.process_score, 0);
    });
}

#[test]
fn brand_path_completes_restaurant_details() {
    let session = FormSession::default();
    session.dispatch_all(&[
        FormAction::SetBrandType(BrandType::Brand),
        FormAction::SetSelectedBrand("KFC".into()),
        FormAction::SetRestaurantName("Main St".into()),
        FormAction::SetStoreId("001".into()),
    ]);
    assert_eq!(section_remaining(&session), 0);
    session.read(|s| {
        assert_eq!(s.process_metrics.remaining_mandatory_qs, 16);
        assert_eq!(s.overall_completion, 20.0);
    });
}

#[test]
fn wh_dc_path_with_blank_location() {
    let session = FormSession::default();
    let applied = session.dispatch_all(&[
        FormAction::SetBrandType(BrandType::WhDc),
        FormAction::SetDcWhPosition("Warehouse".into()),
        FormAction::SetWhDcLocationName("".into()),
    ]);
    assert_eq!(applied, 3);
    assert_eq!(section_remaining(&session), 1);
    assert_eq!(session.read(|s| s.overall_completion), 10.0);
}

#[test]
fn switching_branch_recounts_from_the_new_branch() {
    let session = FormSession::default();
    session.dispatch_all(&[
        FormAction::SetBrandType(BrandType::Brand),
        FormAction::SetSelectedBrand("KFC".into()),
        FormAction::SetRestaurantName("Main St".into()),
        FormAction::SetStoreId("001".into()),
        FormAction::SetBrandType(BrandType::WhDc),
    ]);
    // Brand answers are kept but no longer count.
    assert_eq!(section_remaining(&session), 2);
    assert_eq!(session.read(|s| s.overall_completion), 5.0);
    assert_eq!(
        session.read(|s| s.sections.restaurant_details.data.restaurant_name.clone()),
        "Main St"
    );
}

#[test]
fn other_sections_keep_seeded_metrics() {
    let session = FormSession::default();
    session.dispatch_all(&[
        FormAction::SetBrandType(BrandType::Brand),
        FormAction::SetBrandNamesField {
            field: BrandNamesField::ProductType,
            value: "Food".into(),
        },
        FormAction::SetWhDcField {
            field: WhDcField::SupplierName,
            value: "Acme".into(),
        },
    ]);
    session.read(|s| {
        assert_eq!(s.sections.brand_names.metrics.remaining_mandatory_questions, 12);
        assert_eq!(s.sections.wh_dc.metrics.remaining_mandatory_questions, 12);
        assert_eq!(s.sections.other_complaint_type.metrics.remaining_mandatory_questions, 2);
    });
}

// =========================================================================
// Annotations
// =========================================================================

#[test]
fn set_comment_on_fresh_id_creates_visible_record() {
    let session = FormSession::default();
    session.dispatch(&FormAction::SetQuestionComment {
        question_id: "2.4".into(),
        comment: "x".into(),
    });
    let comment = session.read(|s| s.question_comment("2.4").cloned()).unwrap();
    assert_eq!(comment.question_id.as_str(), "2.4");
    assert_eq!(comment.comment, "x");
    assert!(comment.is_visible);
}

#[test]
fn na_toggle_twice_clears_flag() {
    let session = FormSession::default();
    session.dispatch(&FormAction::ToggleQuestionNa("1.10".into()));
    assert!(session.read(|s| s.is_question_na("1.10")));
    session.dispatch(&FormAction::ToggleQuestionNa("1.10".into()));
    assert!(!session.read(|s| s.is_question_na("1.10")));
}

#[test]
fn set_files_then_remove_first() {
    let session = FormSession::default();
    let f1 = FileHandle::new("f1.jpg", "image/jpeg", 100);
    let f2 = FileHandle::new("f2.jpg", "image/jpeg", 200);
    session.dispatch(&FormAction::SetQuestionFiles {
        question_id: "2.1".into(),
        files: vec![f1, f2.clone()],
    });
    session.dispatch(&FormAction::RemoveQuestionFile {
        question_id: "2.1".into(),
        file_index: 0,
    });
    assert_eq!(session.read(|s| s.question_files("2.1").to_vec()), vec![f2]);
}

#[test]
fn removing_from_missing_record_creates_nothing() {
    let session = FormSession::default();
    session.dispatch(&FormAction::RemoveQuestionFile {
        question_id: "2.9".into(),
        file_index: 0,
    });
    assert!(session.read(|s| s.annotations.uploads.is_empty()));
}

// =========================================================================
// Sections and submit
// =========================================================================

#[test]
fn toggling_sections_flips_only_that_flag() {
    let session = FormSession::default();
    session.dispatch(&FormAction::ToggleSection(SectionKey::RestaurantDetails));
    session.dispatch(&FormAction::ToggleSection(SectionKey::WhDc));
    session.read(|s| {
        assert!(!s.sections.is_expanded(SectionKey::RestaurantDetails));
        assert!(!s.sections.is_expanded(SectionKey::BrandNames));
        assert!(s.sections.is_expanded(SectionKey::WhDc));
        assert!(!s.sections.is_expanded(SectionKey::OtherComplaintType));
    });
}

#[test]
fn wh_dc_submit_reports_until_answered_or_na() {
    let session = FormSession::default();
    session.dispatch_all(&[
        FormAction::SetBrandType(BrandType::WhDc),
        FormAction::SetDcWhPosition("Warehouse".into()),
        FormAction::ToggleQuestionNa("1.10".into()),
    ]);
    for field in WhDcField::all() {
        session.dispatch(&FormAction::SetWhDcField {
            field: *field,
            value: "answered".into(),
        });
    }
    let report = session.submit();
    assert!(report.is_complete(), "{:?}", report.issues);

    // The metrics still count 1.10 as unanswered; N/A only affects the report.
    assert_eq!(section_remaining(&session), 1);
}

#[test]
fn submit_before_branch_lists_brand_type() {
    let session = FormSession::default();
    let report = session.submit();
    let ids: Vec<&str> = report.visible_issues().iter().map(|i| i.question_id).collect();
    assert_eq!(ids, ["1.1"]);
}

// =========================================================================
// Persistence and observers
// =========================================================================

#[test]
fn state_survives_json_round_trip() {
    let session = FormSession::default();
    session.dispatch_all(&[
        FormAction::SetBrandType(BrandType::Brand),
        FormAction::SetSelectedBrand("KFC".into()),
        FormAction::ToggleQuestionComment("3.12".into()),
        FormAction::SetQuestionFiles {
            question_id: "2.2".into(),
            files: vec![FileHandle::new("label.png", "image/png", 5)],
        },
        FormAction::ToggleQuestionNa("2.2".into()),
    ]);
    let state = session.snapshot();
    let json = serde_json::to_value(&state).unwrap();

    assert_eq!(json["storeInfo"], json!({"id": "32002", "name": "Delhi Store"}));
    assert_eq!(json["sections"]["restaurantDetails"]["data"]["brandType"], "Brand");
    assert_eq!(json["questionNAStates"]["2.2"]["isNA"], true);

    let restored: FormState = serde_json::from_value(json).unwrap();
    assert_eq!(restored, state);

    let resumed = FormSession::from_state(restored);
    assert_eq!(resumed.snapshot(), state);
}

struct CompletionLog(parking_lot::Mutex<Vec<f64>>);

impl FormObserver for CompletionLog {
    fn on_change(&self, _action: &FormAction, state: &FormState) {
        self.0.lock().push(state.overall_completion);
    }
}

#[test]
fn observers_never_see_stale_metrics() {
    let session = FormSession::default();
    let log = Arc::new(CompletionLog(parking_lot::Mutex::new(Vec::new())));
    session.subscribe(log.clone());
    session.dispatch_all(&[
        FormAction::SetBrandType(BrandType::WhDc),
        FormAction::SetDcWhPosition("Warehouse".into()),
        FormAction::SetWhDcLocationName("Jebel Ali".into()),
    ]);
    assert_eq!(*log.0.lock(), vec![5.0, 10.0, 15.0]);
}

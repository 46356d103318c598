//! # qac-state — Form State Store and Metrics Recalculator
//!
//! Holds the single document behind a QA compliance form and every rule
//! for mutating it.
//!
//! ## Layout
//!
//! - **Sections** (`sections.rs`): the four collapsible sections, their
//!   answer records and their seeded metrics.
//!
//! - **Annotations** (`annotations.rs`): per-question comments, N/A flags
//!   and attached files, keyed by question id with at most one record of
//!   each kind per question.
//!
//! - **Form** (`form.rs`): `FormState`, the aggregate document, with one
//!   setter per field and the reducer `FormState::apply`.
//!
//! - **Actions** (`action.rs`): `FormAction`, every mutation as data.
//!
//! - **Metrics** (`metrics.rs`): the pure completion recalculation over
//!   the restaurant-details answers.
//!
//! - **Validation** (`validation.rs`): the required-field report shown
//!   after a submit attempt.
//!
//! - **Session** (`session.rs`): `FormSession`, the lock-guarded owner of
//!   one document. Applies actions one at a time and recomputes metrics
//!   after every restaurant-details change before any reader sees it.
//!
//! ## Consistency
//!
//! `FormState` setters never recompute on their own. Callers that mutate
//! a `FormState` directly call `recalculate_metrics` themselves; callers
//! that go through `FormSession::dispatch` never have to.

pub mod action;
pub mod annotations;
pub mod form;
pub mod metrics;
pub mod sections;
pub mod session;
pub mod validation;

// ─── State re-exports ───────────────────────────────────────────────

pub use action::FormAction;
pub use annotations::{FileUpload, NaState, QuestionAnnotations, QuestionComment};
pub use form::{Answer, FormState};
pub use sections::{
    BrandNames, BrandNamesField, OtherComplaintType, RestaurantDetails, Section, SectionMetrics,
    Sections, WhDcDetails, WhDcField,
};

// ─── Metrics re-exports ─────────────────────────────────────────────

pub use metrics::{
    recalculate, MetricsUpdate, ProcessMetrics, BRAND_PATH_MANDATORY, TOTAL_MANDATORY_QUESTIONS,
    UNBRANCHED_MANDATORY, WH_DC_PATH_MANDATORY,
};

// ─── Session re-exports ─────────────────────────────────────────────

pub use session::{FormObserver, FormSession};
pub use validation::{required_fields, RequiredFieldIssue, ValidationReport};

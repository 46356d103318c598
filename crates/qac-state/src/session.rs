//! # Form Session
//!
//! The owning controller of one [`FormState`]. The rendering layer holds a
//! (cloneable) `FormSession`, reads snapshots from it and sends it
//! [`FormAction`]s.
//!
//! ## Serialization of Mutations
//!
//! The state sits behind a `parking_lot::RwLock`. A dispatch takes the
//! write lock, applies the action, recomputes metrics when the action
//! touched restaurant details, and only then releases the lock, so every
//! reader sees either the state before an action or the state after it
//! with metrics already consistent.
//!
//! Observers receive a copy of the post-action state taken under the write
//! lock, and are called after every lock has been released. An observer
//! may read from or dispatch to the session it observes.

use std::sync::Arc;

use parking_lot::RwLock;

use qac_core::StoreInfo;

use crate::action::FormAction;
use crate::form::FormState;
use crate::metrics::MetricsUpdate;
use crate::validation::ValidationReport;

/// Receives every applied action together with the resulting state.
pub trait FormObserver: Send + Sync {
    fn on_change(&self, action: &FormAction, state: &FormState);
}

/// Shared handle to one form session.
#[derive(Clone)]
pub struct FormSession {
    state: Arc<RwLock<FormState>>,
    observers: Arc<RwLock<Vec<Arc<dyn FormObserver>>>>,
}

impl std::fmt::Debug for FormSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormSession")
            .field("store_info", &self.state.read().store_info)
            .field("observers", &self.observers.read().len())
            .finish()
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new(StoreInfo::default())
    }
}

impl FormSession {
    /// Start a session for `store_info` with an empty form.
    pub fn new(store_info: StoreInfo) -> Self {
        tracing::debug!(store = %store_info, "form session started");
        Self::from_state(FormState::new(store_info))
    }

    /// Resume a session from an existing document.
    pub fn from_state(state: FormState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
            observers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Register an observer. Observers are called in registration order.
    pub fn subscribe(&self, observer: Arc<dyn FormObserver>) {
        self.observers.write().push(observer);
    }

    /// Apply one action atomically.
    ///
    /// Returns the metrics update when the action touched restaurant
    /// details and metrics were recomputed.
    pub fn dispatch(&self, action: &FormAction) -> Option<MetricsUpdate> {
        let (update, observed) = {
            let mut state = self.state.write();
            let update = apply_and_recompute(&mut state, action);
            (update, self.observed_copy(&state))
        };
        self.notify(action, observed);
        update
    }

    /// Apply actions in order, returning how many were applied.
    pub fn dispatch_all<'a>(&self, actions: impl IntoIterator<Item = &'a FormAction>) -> usize {
        let mut applied = 0;
        for action in actions {
            self.dispatch(action);
            applied += 1;
        }
        applied
    }

    /// Mark the form as submitted and report what is still missing.
    ///
    /// The report describes exactly the state the flag was set on.
    pub fn submit(&self) -> ValidationReport {
        let action = FormAction::SetHasAttemptedSubmit(true);
        let (report, observed) = {
            let mut state = self.state.write();
            apply_and_recompute(&mut state, &action);
            let report = ValidationReport::for_state(&state);
            if report.is_complete() {
                tracing::info!(store = %state.store_info, "form submitted complete");
            } else {
                tracing::info!(
                    missing = report.issues.len(),
                    "form submitted with missing answers"
                );
            }
            (report, self.observed_copy(&state))
        };
        self.notify(&action, observed);
        report
    }

    pub fn validation_report(&self) -> ValidationReport {
        ValidationReport::for_state(&self.state.read())
    }

    /// A copy of the current document.
    pub fn snapshot(&self) -> FormState {
        self.state.read().clone()
    }

    /// Read the current document without copying it.
    pub fn read<R>(&self, f: impl FnOnce(&FormState) -> R) -> R {
        f(&self.state.read())
    }

    /// A copy of `state` for observers, or `None` when nobody listens.
    fn observed_copy(&self, state: &FormState) -> Option<FormState> {
        if self.observers.read().is_empty() {
            None
        } else {
            Some(state.clone())
        }
    }

    fn notify(&self, action: &FormAction, observed: Option<FormState>) {
        let Some(state) = observed else {
            return;
        };
        let observers: Vec<Arc<dyn FormObserver>> = self.observers.read().clone();
        for observer in &observers {
            observer.on_change(action, &state);
        }
    }
}

/// Apply `action` and recompute metrics when it touched restaurant details.
fn apply_and_recompute(state: &mut FormState, action: &FormAction) -> Option<MetricsUpdate> {
    if let FormAction::RemoveQuestionFile {
        question_id,
        file_index,
    } = action
    {
        if state.question_files(question_id.as_str()).len() <= *file_index {
            tracing::debug!(%question_id, file_index, "file removal had nothing to remove");
        }
    }
    state.apply(action);

    let update = if action.touches_restaurant_details() {
        let update = state.recalculate_metrics();
        tracing::trace!(
            completed = update.completed,
            section_remaining = update.section_remaining,
            process_remaining = update.process_remaining,
            overall_completion = update.overall_completion,
            "metrics recalculated"
        );
        Some(update)
    } else {
        None
    };
    tracing::debug!(action = action.name(), "action applied");
    update
}

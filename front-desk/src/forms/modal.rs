//! Modal submit state machine
//!
//! ```text
//! Closed ─ open ─> Editing ─ submit ─> Saving ─ ok ──> Closed (refresh)
//!                     ^                  │
//!                     └──── error ───────┘
//! ```

use std::sync::Arc;

use desk_client::HotelApi;
use parking_lot::Mutex;
use shared::FieldErrors;

use super::{EntityForm, Refresh};
use crate::{DeskError, DeskResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    Editing,
    Saving,
}

struct ModalState<F> {
    phase: ModalPhase,
    form: Option<F>,
    error: Option<String>,
    field_errors: FieldErrors,
}

impl<F> Default for ModalState<F> {
    fn default() -> Self {
        Self {
            phase: ModalPhase::Closed,
            form: None,
            error: None,
            field_errors: FieldErrors::new(),
        }
    }
}

/// Returns a modal left in `Saving` to `Editing` when the submit future is
/// dropped before the request settles.
struct SavingGuard<'a, F> {
    state: &'a Mutex<ModalState<F>>,
    armed: bool,
}

impl<F> SavingGuard<'_, F> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl<F> Drop for SavingGuard<'_, F> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut state = self.state.lock();
        if state.phase == ModalPhase::Saving {
            tracing::warn!("submit dropped while saving");
            state.phase = ModalPhase::Editing;
            state.error = Some(INTERRUPTED.to_string());
        }
    }
}

const INTERRUPTED: &str = "Save was interrupted; reload to see whether it was applied";

/// One entity, one mutation per submit
pub struct Modal<F: EntityForm> {
    api: Arc<dyn HotelApi>,
    refresh: Option<Arc<dyn Refresh>>,
    state: Mutex<ModalState<F>>,
}

impl<F: EntityForm> Modal<F> {
    pub fn new(api: Arc<dyn HotelApi>) -> Self {
        Self {
            api,
            refresh: None,
            state: Mutex::new(ModalState::default()),
        }
    }

    /// Called after every successful submit
    pub fn with_refresh(mut self, refresh: Arc<dyn Refresh>) -> Self {
        self.refresh = Some(refresh);
        self
    }

    pub fn open(&self, form: F) -> DeskResult<()> {
        let mut state = self.state.lock();
        if state.phase == ModalPhase::Saving {
            return Err(DeskError::SubmitInFlight);
        }
        *state = ModalState {
            phase: ModalPhase::Editing,
            form: Some(form),
            ..Default::default()
        };
        Ok(())
    }

    /// Discard the form; not allowed while a save is running.
    pub fn cancel(&self) -> DeskResult<()> {
        let mut state = self.state.lock();
        if state.phase == ModalPhase::Saving {
            return Err(DeskError::SubmitInFlight);
        }
        *state = ModalState::default();
        Ok(())
    }

    /// Change the form input while editing.
    pub fn edit(&self, f: impl FnOnce(&mut F)) -> DeskResult<()> {
        let mut state = self.state.lock();
        match (state.phase, state.form.as_mut()) {
            (ModalPhase::Editing, Some(form)) => {
                f(form);
                Ok(())
            }
            (ModalPhase::Saving, _) => Err(DeskError::SubmitInFlight),
            _ => Err(DeskError::ModalClosed),
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.state.lock().phase
    }

    pub fn is_open(&self) -> bool {
        self.phase() != ModalPhase::Closed
    }

    pub fn form(&self) -> Option<F> {
        self.state.lock().form.clone()
    }

    /// Last submit error, shown at the top of the form
    pub fn error(&self) -> Option<String> {
        self.state.lock().error.clone()
    }

    pub fn field_errors(&self) -> FieldErrors {
        self.state.lock().field_errors.clone()
    }

    /// Validate and send one mutation.
    ///
    /// Returns the server's confirmation text. A submit while another is
    /// saving is rejected without a request.
    pub async fn submit(&self, action: F::Action) -> DeskResult<String> {
        let mutation = {
            let mut state = self.state.lock();
            match state.phase {
                ModalPhase::Closed => return Err(DeskError::ModalClosed),
                ModalPhase::Saving => return Err(DeskError::SubmitInFlight),
                ModalPhase::Editing => {}
            }
            let Some(form) = state.form.as_ref() else {
                return Err(DeskError::ModalClosed);
            };
            match form.prepare(action) {
                Ok(mutation) => {
                    state.phase = ModalPhase::Saving;
                    state.error = None;
                    state.field_errors.clear();
                    mutation
                }
                Err(e) => {
                    state.error = Some(e.user_message());
                    state.field_errors = e.field_errors().cloned().unwrap_or_default();
                    return Err(e);
                }
            }
        };

        tracing::debug!(mutation = mutation.name(), ?action, "submitting");
        let guard = SavingGuard {
            state: &self.state,
            armed: true,
        };
        let sent = mutation.send(self.api.as_ref()).await;
        guard.disarm();
        match sent {
            Ok(message) => {
                *self.state.lock() = ModalState::default();
                tracing::info!(mutation = mutation.name(), "saved");
                if let Some(refresh) = &self.refresh {
                    refresh.refresh().await;
                }
                Ok(message)
            }
            Err(e) => {
                tracing::warn!(mutation = mutation.name(), error = %e, "save failed");
                let mut state = self.state.lock();
                state.phase = ModalPhase::Editing;
                state.error = Some(e.user_message());
                state.field_errors = e.field_errors().cloned().unwrap_or_default();
                Err(DeskError::Client(e))
            }
        }
    }
}

//! Edit sessions: the in-progress draft behind the stop editor.

use jiff::civil::Date;

use crate::{
    error::{DispatchError, Result},
    models::{DependencyPatch, DispatchStatus, DispatchStop, StopDraft},
};

/// An open editor for one stop, new or existing.
///
/// The session owns its draft outright; nothing reaches the store until it is
/// submitted through [`crate::Dispatcher::submit`]. Dropping the session
/// discards every change.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    editing_id: Option<String>,
    draft: StopDraft,
    status_error: Option<String>,
}

impl EditSession {
    /// Session for a new stop on the given day.
    pub fn new(date: Date) -> Self {
        Self {
            editing_id: None,
            draft: StopDraft::new(date),
            status_error: None,
        }
    }

    /// Session editing an existing stop.
    pub fn edit(stop: &DispatchStop) -> Self {
        Self {
            editing_id: Some(stop.id.clone()),
            draft: StopDraft::from(stop),
            status_error: None,
        }
    }

    /// Whether submitting creates a stop rather than updating one.
    pub fn is_new(&self) -> bool {
        self.editing_id.is_none()
    }

    /// Id of the stop being edited, if any.
    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    pub fn draft(&self) -> &StopDraft {
        &self.draft
    }

    /// Direct access to the draft fields.
    ///
    /// Status changes should go through [`EditSession::set_status`] so the
    /// rejection message is kept; submit checks the status again either way.
    pub fn draft_mut(&mut self) -> &mut StopDraft {
        &mut self.draft
    }

    /// Last status-guard message, cleared by a successful status change or by
    /// checking the order.
    pub fn status_error(&self) -> Option<&str> {
        self.status_error.as_deref()
    }

    /// Change the draft status, recording the message on rejection.
    pub fn set_status(&mut self, status: DispatchStatus) -> Result<()> {
        match self.draft.set_status(status) {
            Ok(()) => {
                self.status_error = None;
                Ok(())
            }
            Err(e) => {
                self.status_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Set or clear the order-check flag.
    pub fn set_dispatch_checked(&mut self, checked: bool) {
        self.draft.dispatch_checked = checked;
        if checked {
            self.status_error = None;
        }
    }

    /// Append a blank dependency row and return its id.
    pub fn add_dependency(&mut self) -> String {
        self.draft.add_dependency()
    }

    /// Merge a partial change into one dependency row.
    ///
    /// # Errors
    ///
    /// * `DispatchError::DependencyNotFound` - When no row has that id
    pub fn update_dependency(&mut self, id: &str, patch: &DependencyPatch) -> Result<()> {
        if self.draft.update_dependency(id, patch) {
            Ok(())
        } else {
            Err(DispatchError::DependencyNotFound { id: id.to_string() })
        }
    }

    /// Remove one dependency row; an unknown id is a no-op.
    pub fn remove_dependency(&mut self, id: &str) -> bool {
        self.draft.remove_dependency(id)
    }

    pub(crate) fn record_status_error(&mut self, error: &DispatchError) {
        self.status_error = Some(error.to_string());
    }
}

//! Stop mutations and their replay after elevation.

use log::{debug, info};

use super::{Dispatcher, EditSession};
use crate::{
    error::{DispatchError, Result},
    guard,
    models::{DispatchStop, StopDraft},
    store,
};

/// A change to the stop collection, described before it is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Create a stop (no id) or overwrite the editable fields of one
    Save {
        editing_id: Option<String>,
        draft: StopDraft,
    },
    /// Remove a stop
    Delete { id: String },
}

/// A mutation the access gate refused, held until the caller elevates.
///
/// The only way to apply it is to hand it to [`Dispatcher::elevate`], which
/// consumes it, so a blocked mutation runs at most once.
#[derive(Debug)]
#[must_use = "a pending elevation does nothing unless passed to Dispatcher::elevate"]
pub struct PendingElevation {
    mutation: Mutation,
}

impl PendingElevation {
    /// The blocked mutation.
    pub fn mutation(&self) -> &Mutation {
        &self.mutation
    }
}

/// Result of a submit, delete or elevation.
#[derive(Debug)]
pub enum MutationOutcome {
    /// A new stop was stored
    Created(DispatchStop),
    /// An existing stop was overwritten
    Updated(DispatchStop),
    /// A stop was removed
    Deleted(DispatchStop),
    /// Nothing to save: the customer name is blank
    Ignored,
    /// The gate refused the change; nothing was written
    ElevationRequired(PendingElevation),
}

impl MutationOutcome {
    /// The stop the mutation produced or removed, if any.
    pub fn stop(&self) -> Option<&DispatchStop> {
        match self {
            Self::Created(stop) | Self::Updated(stop) | Self::Deleted(stop) => Some(stop),
            Self::Ignored | Self::ElevationRequired(_) => None,
        }
    }
}

impl Dispatcher {
    /// Submit an edit session.
    ///
    /// A blank customer name is a silent no-op. The status is checked again
    /// against the order-check rule; on rejection the message is recorded on
    /// the session and the draft is kept so the operator can fix it. A valid
    /// draft is trimmed, dependency rows with a blank supplier are dropped,
    /// and the result is stored: new stops go to the front of the
    /// collection, updates keep their place and bump `updated_at`.
    ///
    /// # Errors
    ///
    /// * `DispatchError::VerificationRequired` - When the status needs the
    ///   order checked first
    /// * `DispatchError::StopNotFound` - When the edited stop no longer exists
    pub fn submit(&mut self, session: &mut EditSession) -> Result<MutationOutcome> {
        let draft = session.draft();
        if !draft.has_customer() {
            debug!("Ignoring submit with blank customer");
            return Ok(MutationOutcome::Ignored);
        }

        if let Err(e) = guard::check_status(draft.status, draft.dispatch_checked) {
            session.record_status_error(&e);
            return Err(e);
        }

        let mutation = Mutation::Save {
            editing_id: session.editing_id().map(String::from),
            draft: draft.normalized(),
        };
        self.dispatch(mutation)
    }

    /// Delete a stop by id.
    ///
    /// # Errors
    ///
    /// * `DispatchError::StopNotFound` - When no stop has that id
    pub fn delete_stop(&mut self, id: &str) -> Result<MutationOutcome> {
        if self.get_stop(id)?.is_none() {
            return Err(DispatchError::StopNotFound { id: id.to_string() });
        }
        self.dispatch(Mutation::Delete { id: id.to_string() })
    }

    /// Elevate with a credential and replay the blocked mutation.
    ///
    /// # Errors
    ///
    /// * `DispatchError::AccessDenied` - When the gate refuses the
    ///   credential; the store is left untouched
    pub fn elevate(
        &mut self,
        pending: PendingElevation,
        credential: &str,
    ) -> Result<MutationOutcome> {
        if !self.gate.request_elevation(credential) {
            return Err(DispatchError::AccessDenied);
        }
        self.apply(pending.mutation)
    }

    fn dispatch(&mut self, mutation: Mutation) -> Result<MutationOutcome> {
        if !self.gate.can_edit() {
            debug!("Editing is locked; holding mutation for elevation");
            return Ok(MutationOutcome::ElevationRequired(PendingElevation {
                mutation,
            }));
        }
        self.apply(mutation)
    }

    /// Read-modify-write of the whole collection.
    fn apply(&mut self, mutation: Mutation) -> Result<MutationOutcome> {
        let mut stops = self.store.load()?;
        let now = store::now();

        let outcome = match mutation {
            Mutation::Save {
                editing_id: None,
                draft,
            } => {
                let stop = DispatchStop::from_draft(store::new_id(), draft, now);
                stops.insert(0, stop.clone());
                info!("Created stop {} for {}", stop.id, stop.customer);
                MutationOutcome::Created(stop)
            }
            Mutation::Save {
                editing_id: Some(id),
                draft,
            } => {
                let stop = stops
                    .iter_mut()
                    .find(|s| s.id == id)
                    .ok_or_else(|| DispatchError::StopNotFound { id: id.clone() })?;
                stop.apply_draft(draft, now);
                debug!("Updated stop {id}");
                MutationOutcome::Updated(stop.clone())
            }
            Mutation::Delete { id } => {
                let index = stops
                    .iter()
                    .position(|s| s.id == id)
                    .ok_or_else(|| DispatchError::StopNotFound { id: id.clone() })?;
                let stop = stops.remove(index);
                info!("Deleted stop {id}");
                MutationOutcome::Deleted(stop)
            }
        };

        self.store.save(&stops)?;
        Ok(outcome)
    }
}

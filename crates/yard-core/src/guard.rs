//! Status guard for the stop lifecycle.
//!
//! The lifecycle is a guarded transition rather than a transition table: any
//! status may follow any other, including re-opening a delivered or canceled
//! stop. The single precondition is that the shipping stages (loading, out
//! for delivery, delivered) need the order checked by the dispatcher.
//!
//! The same [`check_status`] runs when a status is picked in an edit session
//! and again when the session is submitted, so skipping the interactive step
//! cannot get an unchecked stop onto a truck.

use crate::{
    error::{DispatchError, Result},
    models::DispatchStatus,
};

/// Validate a candidate status against the current order-check flag.
///
/// # Errors
///
/// Returns [`DispatchError::VerificationRequired`] when `candidate` is a
/// shipping stage and `dispatch_checked` is false.
///
/// # Examples
///
/// ```rust
/// use yard_core::{guard::check_status, models::DispatchStatus};
///
/// assert!(check_status(DispatchStatus::Loading, false).is_err());
/// assert!(check_status(DispatchStatus::Loading, true).is_ok());
/// assert!(check_status(DispatchStatus::Canceled, false).is_ok());
/// ```
pub fn check_status(candidate: DispatchStatus, dispatch_checked: bool) -> Result<()> {
    if candidate.requires_dispatch_check() && !dispatch_checked {
        return Err(DispatchError::VerificationRequired { status: candidate });
    }
    Ok(())
}

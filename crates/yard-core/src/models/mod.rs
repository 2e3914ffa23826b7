//! Data models for dispatch stops and their supplier dependencies.
//!
//! This module contains the core domain models of the dispatch board. Display
//! implementations for these models are located in [`crate::display::models`]
//! to keep data structures separate from presentation.
//!
//! # Model Overview
//!
//! - [`DispatchStop`]: one planned delivery, persisted as an element of the
//!   stop collection
//! - [`DispatchDependency`]: an item owed by an outside supplier, owned by a
//!   single stop
//! - [`StopDraft`]: the editable part of a stop while an edit session is open
//! - [`DispatchStatus`] and the catalogs in [`catalog`]: closed enumerations
//!   for every field the board treats as a fixed choice
//!
//! Derived values such as "ready to ship" are never stored on these types;
//! see [`crate::readiness`].
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use yard_core::models::{DeliveryType, DispatchStatus, StopDraft};
//! use yard_core::readiness::Readiness;
//!
//! let mut draft = StopDraft::new(date(2025, 3, 14));
//! draft.customer = "Treasure Valley Builders".to_string();
//! draft.delivery_type = Some(DeliveryType::Hotshot);
//!
//! assert!(draft.is_hotshot());
//! assert!(draft.set_status(DispatchStatus::Loading).is_err());
//!
//! draft.dispatch_checked = true;
//! assert!(draft.set_status(DispatchStatus::Loading).is_ok());
//! assert!(draft.is_ready_to_ship());
//! ```

pub mod catalog;
pub mod dependency;
pub mod draft;
pub mod filters;
pub mod status;
pub mod stop;

use serde::{Deserialize, Deserializer};

#[cfg(test)]
mod tests;

pub use catalog::{DeliveryType, Driver, TimeSlot, Truck};
pub use dependency::{DependencyPatch, DispatchDependency};
pub use draft::StopDraft;
pub use filters::BoardFilter;
pub use status::DispatchStatus;
pub use stop::DispatchStop;

/// Deserialize a field that may be written as `null`, falling back to the
/// type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

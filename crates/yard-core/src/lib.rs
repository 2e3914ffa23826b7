//! Core library for the lumber yard dispatch board.
//!
//! This crate holds the dispatch stops, their supplier dependencies, the
//! order-check rule guarding the late statuses, the board projection and the
//! access gate that decides whether changes are allowed right now.
//!
//! # Layout
//!
//! - [`models`]: stops, dependencies, drafts and the fixed catalogs
//! - [`readiness`]: derived "ready to ship" and "hotshot" signals
//! - [`guard`]: the order-check rule for status changes
//! - [`store`]: loading and saving the whole stop collection
//! - [`board`]: the day's stops grouped by time slot
//! - [`access`]: the capability consulted before every change
//! - [`dispatcher`]: edit sessions, submit, delete and elevation
//! - [`estimate`]: rough trip times and route links
//! - [`display`]: markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use yard_core::{
//!     access::PinGate, models::DispatchStatus, store::MemoryStore, Dispatcher,
//!     MutationOutcome,
//! };
//!
//! let mut dispatcher = Dispatcher::new(MemoryStore::new(), PinGate::new("1234"));
//!
//! let mut session = dispatcher.new_session(date(2025, 3, 14));
//! session.draft_mut().customer = "Treasure Valley Builders".to_string();
//! session.set_dispatch_checked(true);
//! session.set_status(DispatchStatus::Loading)?;
//!
//! // The gate is locked, so the save comes back for elevation.
//! let MutationOutcome::ElevationRequired(pending) = dispatcher.submit(&mut session)? else {
//!     panic!("expected the locked gate to hold the save");
//! };
//! assert!(dispatcher.stops()?.is_empty());
//!
//! let outcome = dispatcher.elevate(pending, "1234")?;
//! assert!(matches!(outcome, MutationOutcome::Created(_)));
//! assert_eq!(dispatcher.stops()?.len(), 1);
//! # Ok::<(), yard_core::DispatchError>(())
//! ```

pub mod access;
pub mod board;
pub mod dispatcher;
pub mod display;
pub mod error;
pub mod estimate;
pub mod guard;
pub mod models;
pub mod params;
pub mod readiness;
pub mod store;

// Re-export commonly used types
pub use access::{AccessGate, OpenGate, PinGate};
pub use board::Board;
pub use dispatcher::{
    Dispatcher, DispatcherBuilder, EditSession, Mutation, MutationOutcome, PendingElevation,
};
pub use display::{CreateResult, DeleteResult, OperationStatus, StopCard, UpdateResult};
pub use error::{DispatchError, Result};
pub use models::{
    BoardFilter, DeliveryType, DependencyPatch, DispatchDependency, DispatchStatus, DispatchStop,
    Driver, StopDraft, TimeSlot, Truck,
};
pub use params::{DependencyFields, EstimateTrip, ShowBoard, StopFields};
pub use readiness::Readiness;
pub use store::{Database, MemoryStore, StopStore};

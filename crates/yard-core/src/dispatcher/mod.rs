//! High-level dispatch API: reading the board and changing stops.
//!
//! The [`Dispatcher`] sits between an interface and the [`StopStore`]. It
//! owns two collaborators, both injected:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   EditSession   │    │   Dispatcher    │    │    StopStore    │
//! │ (draft, guard   │───▶│ (gate check,    │───▶│ (load / save    │
//! │  messages)      │    │  upsert/delete) │    │  whole list)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                                 │
//!                                 ▼
//!                        ┌─────────────────┐
//!                        │   AccessGate    │
//!                        └─────────────────┘
//! ```
//!
//! Reads go straight to the store. Every write is first described as a
//! [`Mutation`]; if the gate refuses it, the caller gets the mutation back
//! inside a [`PendingElevation`] and can replay it with
//! [`Dispatcher::elevate`].
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Dispatcher`] instances backed by SQLite
//! - [`session`]: The [`EditSession`] holding an unsaved draft
//! - [`mutations`]: Submit, delete and elevation replay
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use yard_core::{
//!     access::OpenGate, models::BoardFilter, store::MemoryStore, Dispatcher, MutationOutcome,
//! };
//!
//! let mut dispatcher = Dispatcher::new(MemoryStore::new(), OpenGate);
//!
//! let mut session = dispatcher.new_session(date(2025, 3, 14));
//! session.draft_mut().customer = "Treasure Valley Builders".to_string();
//! let outcome = dispatcher.submit(&mut session)?;
//! assert!(matches!(outcome, MutationOutcome::Created(_)));
//!
//! let board = dispatcher.board(&BoardFilter::for_day(date(2025, 3, 14)))?;
//! assert_eq!(board.len(), 1);
//! # Ok::<(), yard_core::DispatchError>(())
//! ```

pub mod builder;
pub mod mutations;
pub mod session;


use jiff::civil::Date;

pub use builder::DispatcherBuilder;
pub use mutations::{Mutation, MutationOutcome, PendingElevation};
pub use session::EditSession;

use crate::{
    access::AccessGate,
    board::Board,
    error::{DispatchError, Result},
    models::{BoardFilter, DispatchStop},
    params::ShowBoard,
    store::StopStore,
};

/// Main interface for the dispatch board.
pub struct Dispatcher {
    store: Box<dyn StopStore>,
    gate: Box<dyn AccessGate>,
}

impl Dispatcher {
    /// Creates a dispatcher over the given store and access gate.
    pub fn new(store: impl StopStore + 'static, gate: impl AccessGate + 'static) -> Self {
        Self {
            store: Box::new(store),
            gate: Box::new(gate),
        }
    }

    /// Whether the gate currently permits changes.
    pub fn can_edit(&self) -> bool {
        self.gate.can_edit()
    }

    /// The full stop collection in stored order.
    pub fn stops(&self) -> Result<Vec<DispatchStop>> {
        self.store.load()
    }

    /// Look up one stop by id.
    pub fn get_stop(&self, id: &str) -> Result<Option<DispatchStop>> {
        Ok(self.store.load()?.into_iter().find(|s| s.id == id))
    }

    /// Project the board for a filter.
    pub fn board(&self, filter: &BoardFilter) -> Result<Board> {
        Ok(Board::project(&self.store.load()?, filter))
    }

    /// Validate board parameters and project the board.
    pub fn show_board(&self, params: &ShowBoard) -> Result<Board> {
        let filter = BoardFilter::try_from(params)?;
        self.board(&filter)
    }

    /// Open an editor for a new stop on the given day.
    pub fn new_session(&self, date: Date) -> EditSession {
        EditSession::new(date)
    }

    /// Open an editor for an existing stop.
    ///
    /// # Errors
    ///
    /// * `DispatchError::StopNotFound` - When no stop has that id
    pub fn edit_session(&self, id: &str) -> Result<EditSession> {
        self.get_stop(id)?
            .map(|stop| EditSession::edit(&stop))
            .ok_or_else(|| DispatchError::StopNotFound { id: id.to_string() })
    }
}

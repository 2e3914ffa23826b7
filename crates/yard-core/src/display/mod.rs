//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! wrapper types cover the cases where the same data needs a different shape
//! depending on where it is shown.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Cards, Boards & │    │   Formatted     │
//! │ (DispatchStop)  │───▶│  Result Types   │───▶│    Output       │
//! │                 │    │                 │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! All output is markdown, rendered by the CLI's terminal renderer.
//!
//! ## Module Organization
//!
//! - [`models`]: Catalog labels and the stop detail view
//! - [`card`]: Board card and hover tip for a stop ([`StopCard`], [`StopTip`])
//! - [`collections`]: The board laid out by slot, in full or compact form
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//!
//! ## Usage Examples
//!
//! ```rust
//! use yard_core::display::OperationStatus;
//!
//! let success = OperationStatus::success("Stop saved".to_string());
//! assert_eq!(success.to_string(), "Success: Stop saved\n");
//! ```

pub mod card;
pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use card::{StopCard, StopTip};
pub use collections::{CompactBoard, StopCount};
pub use datetime::{DayLabel, LocalDateTime};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;

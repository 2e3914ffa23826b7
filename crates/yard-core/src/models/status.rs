//! Status enumeration for dispatch stops.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the dispatch stop lifecycle.
///
/// Declaration order is the board's lifecycle order. Any status can be
/// reached from any other; the only precondition is the order check on the
/// shipping stages (see [`DispatchStatus::requires_dispatch_check`]).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum DispatchStatus {
    /// Stop is on the board, nothing picked yet
    #[default]
    Scheduled,

    /// Yard crew is pulling the order
    Picking,

    /// Blocked on one or more outside suppliers
    Waiting,

    /// Order is going on the truck
    Loading,

    /// Truck has left the yard
    Out,

    /// Material is on site
    Delivered,

    /// Stop was called off
    Canceled,
}

impl DispatchStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [DispatchStatus; 7] = [
        DispatchStatus::Scheduled,
        DispatchStatus::Picking,
        DispatchStatus::Waiting,
        DispatchStatus::Loading,
        DispatchStatus::Out,
        DispatchStatus::Delivered,
        DispatchStatus::Canceled,
    ];

    /// Convert to the persisted string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchStatus::Scheduled => "scheduled",
            DispatchStatus::Picking => "picking",
            DispatchStatus::Waiting => "waiting",
            DispatchStatus::Loading => "loading",
            DispatchStatus::Out => "out",
            DispatchStatus::Delivered => "delivered",
            DispatchStatus::Canceled => "canceled",
        }
    }

    /// Human-readable label shown on cards and in filters.
    ///
    /// ```rust
    /// use yard_core::models::DispatchStatus;
    ///
    /// assert_eq!(DispatchStatus::Waiting.label(), "Waiting on Supplier");
    /// assert_eq!(DispatchStatus::Out.label(), "Out for Delivery");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            DispatchStatus::Scheduled => "Scheduled",
            DispatchStatus::Picking => "Picking",
            DispatchStatus::Waiting => "Waiting on Supplier",
            DispatchStatus::Loading => "Loading",
            DispatchStatus::Out => "Out for Delivery",
            DispatchStatus::Delivered => "Delivered",
            DispatchStatus::Canceled => "Canceled",
        }
    }

    /// Shipping stages that may only be entered once the dispatcher has
    /// checked the order.
    pub fn requires_dispatch_check(&self) -> bool {
        match self {
            DispatchStatus::Loading | DispatchStatus::Out | DispatchStatus::Delivered => true,
            DispatchStatus::Scheduled
            | DispatchStatus::Picking
            | DispatchStatus::Waiting
            | DispatchStatus::Canceled => false,
        }
    }
}

impl FromStr for DispatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "scheduled" => Ok(DispatchStatus::Scheduled),
            "picking" => Ok(DispatchStatus::Picking),
            "waiting" | "waiting-on-supplier" => Ok(DispatchStatus::Waiting),
            "loading" => Ok(DispatchStatus::Loading),
            "out" | "out-for-delivery" => Ok(DispatchStatus::Out),
            "delivered" => Ok(DispatchStatus::Delivered),
            "canceled" | "cancelled" => Ok(DispatchStatus::Canceled),
            _ => Err(format!("Invalid dispatch status: {s}")),
        }
    }
}

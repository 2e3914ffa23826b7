//! Derived readiness signals for stops and drafts.
//!
//! None of these values are stored. They are recomputed from the source
//! fields every time, so a saved stop and an unsaved draft give the same
//! answer for the same inputs.

use crate::models::{DeliveryType, DispatchDependency, DispatchStop, StopDraft};

/// True when there are no dependencies or every one has been received.
pub fn deps_all_received(dependencies: &[DispatchDependency]) -> bool {
    dependencies.iter().all(|d| d.received)
}

/// Ready to ship: every dependency received and the order checked.
pub fn is_ready_to_ship(dependencies: &[DispatchDependency], dispatch_checked: bool) -> bool {
    deps_all_received(dependencies) && dispatch_checked
}

/// Hotshot: the delivery type is the expedite type.
pub fn is_hotshot(delivery_type: Option<DeliveryType>) -> bool {
    delivery_type == Some(DeliveryType::EXPEDITE)
}

/// Read-only access to the fields readiness is derived from.
pub trait Readiness {
    fn dependencies(&self) -> &[DispatchDependency];
    fn dispatch_checked(&self) -> bool;
    fn delivery_type(&self) -> Option<DeliveryType>;

    fn deps_all_received(&self) -> bool {
        deps_all_received(self.dependencies())
    }

    fn is_ready_to_ship(&self) -> bool {
        is_ready_to_ship(self.dependencies(), self.dispatch_checked())
    }

    fn is_hotshot(&self) -> bool {
        is_hotshot(self.delivery_type())
    }
}

impl Readiness for DispatchStop {
    fn dependencies(&self) -> &[DispatchDependency] {
        &self.dependencies
    }

    fn dispatch_checked(&self) -> bool {
        self.dispatch_checked
    }

    fn delivery_type(&self) -> Option<DeliveryType> {
        self.delivery_type
    }
}

impl Readiness for StopDraft {
    fn dependencies(&self) -> &[DispatchDependency] {
        &self.dependencies
    }

    fn dispatch_checked(&self) -> bool {
        self.dispatch_checked
    }

    fn delivery_type(&self) -> Option<DeliveryType> {
        self.delivery_type
    }
}

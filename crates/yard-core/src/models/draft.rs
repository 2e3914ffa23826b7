//! In-progress edit of a stop and its dependency ledger.

use jiff::civil::Date;

use super::{
    dependency::trimmed, DeliveryType, DependencyPatch, DispatchDependency, DispatchStatus,
    DispatchStop, Driver, TimeSlot, Truck,
};
use crate::{error::Result, guard, store};

/// Editable fields of a stop, without identity or timestamps.
///
/// Nothing in a draft is persisted until it is submitted through
/// [`crate::Dispatcher::submit`]; dropping a draft discards it.
#[derive(Debug, Clone, PartialEq)]
pub struct StopDraft {
    pub date: Date,
    pub time_slot: TimeSlot,
    pub customer: String,
    pub job_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub delivery_type: Option<DeliveryType>,
    pub driver: Option<Driver>,
    pub truck: Option<Truck>,
    pub order_ref: Option<String>,
    pub status: DispatchStatus,
    pub dispatch_checked: bool,
    pub notes: Option<String>,
    pub dependencies: Vec<DispatchDependency>,
}

impl StopDraft {
    /// Blank stop for the given day with the catalog defaults filled in.
    pub fn new(date: Date) -> Self {
        Self {
            date,
            time_slot: TimeSlot::default(),
            customer: String::new(),
            job_name: None,
            address: None,
            phone: None,
            delivery_type: Some(DeliveryType::default()),
            driver: Some(Driver::default()),
            truck: Some(Truck::default()),
            order_ref: None,
            status: DispatchStatus::Scheduled,
            dispatch_checked: false,
            notes: None,
            dependencies: Vec::new(),
        }
    }

    /// Change the status, subject to the order-check rule.
    ///
    /// On rejection the draft is left exactly as it was, so the operator can
    /// either check the order or pick another status.
    pub fn set_status(&mut self, candidate: DispatchStatus) -> Result<()> {
        guard::check_status(candidate, self.dispatch_checked)?;
        self.status = candidate;
        Ok(())
    }

    /// Append a blank dependency row and return its id.
    pub fn add_dependency(&mut self) -> String {
        let id = store::new_id();
        self.dependencies.push(DispatchDependency::blank(id.clone()));
        id
    }

    /// Merge a partial change into the dependency with the given id.
    ///
    /// Returns `false` when no row has that id.
    pub fn update_dependency(&mut self, id: &str, patch: &DependencyPatch) -> bool {
        match self.dependencies.iter_mut().find(|d| d.id == id) {
            Some(dependency) => {
                patch.apply_to(dependency);
                true
            }
            None => false,
        }
    }

    /// Delete the dependency with the given id. Removing an id that is not
    /// there is a no-op and returns `false`.
    pub fn remove_dependency(&mut self, id: &str) -> bool {
        let before = self.dependencies.len();
        self.dependencies.retain(|d| d.id != id);
        self.dependencies.len() != before
    }

    /// Whether the required customer name is present.
    pub fn has_customer(&self) -> bool {
        !self.customer.trim().is_empty()
    }

    /// Copy with every text field trimmed and blank-supplier dependency rows
    /// dropped, as stored on save.
    pub fn normalized(&self) -> Self {
        Self {
            customer: self.customer.trim().to_string(),
            job_name: trimmed(self.job_name.as_deref()),
            address: trimmed(self.address.as_deref()),
            phone: trimmed(self.phone.as_deref()),
            order_ref: trimmed(self.order_ref.as_deref()),
            notes: trimmed(self.notes.as_deref()),
            dependencies: self
                .dependencies
                .iter()
                .filter_map(DispatchDependency::normalized)
                .collect(),
            ..self.clone()
        }
    }
}

impl From<&DispatchStop> for StopDraft {
    fn from(stop: &DispatchStop) -> Self {
        Self {
            date: stop.date,
            time_slot: stop.time_slot,
            customer: stop.customer.clone(),
            job_name: stop.job_name.clone(),
            address: stop.address.clone(),
            phone: stop.phone.clone(),
            delivery_type: stop.delivery_type,
            driver: stop.driver,
            truck: stop.truck,
            order_ref: stop.order_ref.clone(),
            status: stop.status,
            dispatch_checked: stop.dispatch_checked,
            notes: stop.notes.clone(),
            dependencies: stop.dependencies.clone(),
        }
    }
}

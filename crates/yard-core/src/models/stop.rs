//! Dispatch stop model definition and related functionality.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{DeliveryType, DispatchDependency, DispatchStatus, Driver, StopDraft, TimeSlot, Truck};

/// One planned delivery on the dispatch board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DispatchStop {
    /// Opaque unique identifier
    pub id: String,

    /// When the stop was added (persisted as epoch milliseconds)
    #[serde(with = "epoch_millis")]
    pub created_at: Timestamp,

    /// When the stop was last saved (persisted as epoch milliseconds)
    #[serde(with = "epoch_millis")]
    pub updated_at: Timestamp,

    /// Delivery day
    pub date: Date,

    /// Delivery window on that day
    pub time_slot: TimeSlot,

    /// Customer name, never blank once saved
    pub customer: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_type: Option<DeliveryType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<Driver>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truck: Option<Truck>,

    /// Sales order / invoice reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_ref: Option<String>,

    pub status: DispatchStatus,

    /// Set only by the dispatcher after checking the order by hand
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub dispatch_checked: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Outstanding supplier items, in entry order
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub dependencies: Vec<DispatchDependency>,
}

impl DispatchStop {
    /// Build a new stop from a submitted draft.
    pub(crate) fn from_draft(id: String, draft: StopDraft, now: Timestamp) -> Self {
        let StopDraft {
            date,
            time_slot,
            customer,
            job_name,
            address,
            phone,
            delivery_type,
            driver,
            truck,
            order_ref,
            status,
            dispatch_checked,
            notes,
            dependencies,
        } = draft;

        Self {
            id,
            created_at: now,
            updated_at: now,
            date,
            time_slot,
            customer,
            job_name,
            address,
            phone,
            delivery_type,
            driver,
            truck,
            order_ref,
            status,
            dispatch_checked,
            notes,
            dependencies,
        }
    }

    /// Overwrite every editable field with the draft's values, keeping the
    /// identity and creation time.
    pub(crate) fn apply_draft(&mut self, draft: StopDraft, now: Timestamp) {
        self.date = draft.date;
        self.time_slot = draft.time_slot;
        self.customer = draft.customer;
        self.job_name = draft.job_name;
        self.address = draft.address;
        self.phone = draft.phone;
        self.delivery_type = draft.delivery_type;
        self.driver = draft.driver;
        self.truck = draft.truck;
        self.order_ref = draft.order_ref;
        self.status = draft.status;
        self.dispatch_checked = draft.dispatch_checked;
        self.notes = draft.notes;
        self.dependencies = draft.dependencies;
        self.updated_at = now;
    }
}

/// Serde adapter storing a [`Timestamp`] as integer epoch milliseconds.
pub(crate) mod epoch_millis {
    use jiff::Timestamp;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(ts.as_millisecond())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
        let millis = i64::deserialize(deserializer)?;
        Timestamp::from_millisecond(millis).map_err(D::Error::custom)
    }
}

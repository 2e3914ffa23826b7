//! Compact board card and hover tip for a single stop.

use std::fmt;

use super::models::{badges, or_empty, EMPTY};
use crate::models::DispatchStop;

/// The board card for one stop.
///
/// # Examples
///
/// ```rust
/// use jiff::{civil::date, Timestamp};
/// use yard_core::{display::StopCard, models::*};
///
/// let stop = DispatchStop {
///     id: "abc".to_string(),
///     created_at: Timestamp::UNIX_EPOCH,
///     updated_at: Timestamp::UNIX_EPOCH,
///     date: date(2025, 3, 14),
///     time_slot: TimeSlot::Early,
///     customer: "Acme Framing".to_string(),
///     job_name: None,
///     address: None,
///     phone: None,
///     delivery_type: Some(DeliveryType::Hotshot),
///     driver: Some(Driver::Max),
///     truck: None,
///     order_ref: None,
///     status: DispatchStatus::Scheduled,
///     dispatch_checked: false,
///     notes: None,
///     dependencies: vec![],
/// };
///
/// let card = StopCard(&stop).to_string();
/// assert!(card.contains("🔥 Hotshot"));
/// assert!(card.contains("Truck: —"));
/// ```
pub struct StopCard<'a>(pub &'a DispatchStop);

impl fmt::Display for StopCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stop = self.0;

        let badges = badges(stop);
        if !badges.is_empty() {
            writeln!(f, "{badges}")?;
            writeln!(f)?;
        }

        writeln!(f, "**{}** ({})", stop.customer, stop.status)?;
        writeln!(f)?;
        writeln!(f, "- Job: {}", or_empty(stop.job_name.as_deref()))?;
        writeln!(
            f,
            "- Driver: {} · Truck: {}",
            or_empty(stop.driver),
            or_empty(stop.truck)
        )?;
        writeln!(f, "- Delivery Type: {}", or_empty(stop.delivery_type))?;
        writeln!(f, "- Address: {}", or_empty(stop.address.as_deref()))?;
        writeln!(f, "- ID: {}", stop.id)?;
        writeln!(f)
    }
}

/// One-line summary used as a hover tip:
/// `Customer • Job: … • Driver: … • Truck: … • Type: … • Addr: …`.
pub struct StopTip<'a>(pub &'a DispatchStop);

impl fmt::Display for StopTip<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stop = self.0;
        let mut parts = Vec::new();

        if !stop.customer.is_empty() {
            parts.push(stop.customer.clone());
        }
        if let Some(job) = &stop.job_name {
            parts.push(format!("Job: {job}"));
        }
        if let Some(driver) = stop.driver {
            parts.push(format!("Driver: {driver}"));
        }
        if let Some(truck) = stop.truck {
            parts.push(format!("Truck: {truck}"));
        }
        if let Some(delivery_type) = stop.delivery_type {
            parts.push(format!("Type: {delivery_type}"));
        }
        if let Some(address) = &stop.address {
            parts.push(format!("Addr: {address}"));
        }

        if parts.is_empty() {
            f.write_str(EMPTY)
        } else {
            f.write_str(&parts.join(" • "))
        }
    }
}

//! Display implementations for domain models.
//!
//! Catalog values display as the labels the yard uses on the board. A
//! [`DispatchStop`] displays as its full markdown detail view; the compact
//! board card lives in [`super::card`].

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    estimate::route_url,
    models::{
        DeliveryType, DispatchDependency, DispatchStatus, DispatchStop, Driver, TimeSlot, Truck,
    },
    readiness::Readiness,
};

/// Placeholder for an unset field.
pub(crate) const EMPTY: &str = "—";

macro_rules! display_label {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )+
    };
}

display_label!(DispatchStatus, TimeSlot, DeliveryType, Driver, Truck);

/// Optional value or the placeholder.
pub(crate) fn or_empty<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| EMPTY.to_string(), |v| v.to_string())
}

/// Badge line for a stop, empty when no badge applies.
pub(crate) fn badges(stop: &impl Readiness) -> String {
    let mut badges = Vec::new();
    if stop.is_hotshot() {
        badges.push("🔥 Hotshot");
    }
    if stop.is_ready_to_ship() {
        badges.push("✅ Ready to Ship");
    }
    badges.join(" ")
}

impl fmt::Display for DispatchDependency {
    /// One markdown table row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "| {} | {} | {} | {} | {} |",
            self.supplier,
            or_empty(self.po_or_ref.as_deref()),
            or_empty(self.eta.as_deref()),
            if self.received { "✅ Received" } else { "⏳ Waiting" },
            or_empty(self.notes.as_deref()),
        )
    }
}

impl fmt::Display for DispatchStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.customer)?;
        writeln!(f)?;

        let badges = badges(self);
        if !badges.is_empty() {
            writeln!(f, "{badges}")?;
            writeln!(f)?;
        }

        writeln!(f, "- Status: {}", self.status)?;
        writeln!(f, "- Date: {} ({})", self.date, self.time_slot)?;
        if let Some(job) = &self.job_name {
            writeln!(f, "- Job: {job}")?;
        }
        if let Some(address) = &self.address {
            writeln!(f, "- Address: {address}")?;
            if let Some(url) = route_url(address) {
                writeln!(f, "- Route: <{url}>")?;
            }
        }
        if let Some(phone) = &self.phone {
            writeln!(f, "- Phone: {phone}")?;
        }
        writeln!(f, "- Delivery Type: {}", or_empty(self.delivery_type))?;
        writeln!(f, "- Driver: {}", or_empty(self.driver))?;
        writeln!(f, "- Truck: {}", or_empty(self.truck))?;
        if let Some(order_ref) = &self.order_ref {
            writeln!(f, "- Order: {order_ref}")?;
        }
        writeln!(
            f,
            "- Order checked: {}",
            if self.dispatch_checked { "✅ Yes" } else { "No" }
        )?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }

        writeln!(f, "\n## Dependencies")?;
        writeln!(f)?;
        if self.dependencies.is_empty() {
            writeln!(f, "No supplier dependencies.")?;
        } else {
            writeln!(f, "| Supplier | PO / Ref | ETA | Received | Notes |")?;
            writeln!(f, "|---|---|---|---|---|")?;
            for dependency in &self.dependencies {
                write!(f, "{dependency}")?;
            }
            writeln!(f)?;
            let received = self.dependencies.iter().filter(|d| d.received).count();
            writeln!(
                f,
                "{received}/{} received (IDs: {})",
                self.dependencies.len(),
                self.dependencies
                    .iter()
                    .map(|d| d.id.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )?;
        }

        Ok(())
    }
}

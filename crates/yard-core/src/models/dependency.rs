//! Supplier dependency model and partial updates.

use serde::{Deserialize, Serialize};

/// An item owed by an outside supplier before a stop can ship.
///
/// Dependencies have no lifecycle of their own: the id is only unique within
/// the owning stop, and the entry goes away with it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DispatchDependency {
    /// Identifier scoped to the parent stop
    pub id: String,

    /// Supplier name; entries left blank are dropped on save
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub supplier: String,

    /// Purchase order or other reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub po_or_ref: Option<String>,

    /// Expected arrival, free text ("Fri", "3/14")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eta: Option<String>,

    /// Whether the item is in the yard
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub received: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DispatchDependency {
    /// A blank row with the given id.
    pub fn blank(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Trimmed copy, or `None` when the supplier is blank.
    pub(crate) fn normalized(&self) -> Option<Self> {
        let supplier = self.supplier.trim();
        if supplier.is_empty() {
            return None;
        }

        Some(Self {
            id: self.id.clone(),
            supplier: supplier.to_string(),
            po_or_ref: trimmed(self.po_or_ref.as_deref()),
            eta: trimmed(self.eta.as_deref()),
            received: self.received,
            notes: trimmed(self.notes.as_deref()),
        })
    }
}

/// Partial change to a dependency; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyPatch {
    pub supplier: Option<String>,
    pub po_or_ref: Option<String>,
    pub eta: Option<String>,
    pub received: Option<bool>,
    pub notes: Option<String>,
}

impl DependencyPatch {
    /// Patch that only flips the received flag.
    pub fn received(received: bool) -> Self {
        Self {
            received: Some(received),
            ..Default::default()
        }
    }

    /// Merge this patch into a dependency.
    pub fn apply_to(&self, dependency: &mut DispatchDependency) {
        if let Some(supplier) = &self.supplier {
            dependency.supplier = supplier.clone();
        }
        if let Some(po_or_ref) = &self.po_or_ref {
            dependency.po_or_ref = Some(po_or_ref.clone());
        }
        if let Some(eta) = &self.eta {
            dependency.eta = Some(eta.clone());
        }
        if let Some(received) = self.received {
            dependency.received = received;
        }
        if let Some(notes) = &self.notes {
            dependency.notes = Some(notes.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Trim an optional text field, collapsing blanks to `None`.
pub(crate) fn trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

//! Parameter structures for dispatch operations
//!
//! These structures are shared across interfaces without framework-specific
//! derives. Every field arrives as loosely typed text; `validate()` (or
//! `apply_to`) turns it into the closed enumerations of [`crate::models`] and
//! reports the first field that does not parse as
//! [`DispatchError::InvalidInput`].
//!
//! Interface layers wrap these with their own derives and convert with
//! `From`:
//!
//! ```ignore
//! #[derive(clap::Args)]
//! pub struct BoardArgs {
//!     #[arg(long)]
//!     pub date: Option<String>,
//! }
//!
//! impl From<BoardArgs> for ShowBoard {
//!     fn from(args: BoardArgs) -> Self {
//!         ShowBoard { date: args.date, ..Default::default() }
//!     }
//! }
//! ```

use std::str::FromStr;

use jiff::{civil::Date, Zoned};
use serde::{Deserialize, Serialize};

use crate::{
    dispatcher::EditSession,
    error::{DispatchError, Result},
    models::{
        BoardFilter, DeliveryType, DependencyPatch, DispatchStatus, Driver, TimeSlot, Truck,
    },
};

/// Parameters for showing the scheduling board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowBoard {
    /// Day to show (`YYYY-MM-DD`); defaults to today
    pub date: Option<String>,
    /// Status key or label to filter by
    pub status: Option<String>,
    /// Free-text search
    pub search: Option<String>,
}

impl ShowBoard {
    /// Validate the parameters and build the board filter.
    ///
    /// # Errors
    ///
    /// * `DispatchError::InvalidInput` - When the date or status does not
    ///   parse
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yard_core::{models::DispatchStatus, params::ShowBoard};
    ///
    /// let params = ShowBoard {
    ///     date: Some("2025-03-14".to_string()),
    ///     status: Some("Out for Delivery".to_string()),
    ///     search: None,
    /// };
    /// let filter = params.validate()?;
    /// assert_eq!(filter.status, Some(DispatchStatus::Out));
    ///
    /// let bad = ShowBoard { date: Some("tomorrow".to_string()), ..Default::default() };
    /// assert!(bad.validate().is_err());
    /// # Ok::<(), yard_core::DispatchError>(())
    /// ```
    pub fn validate(&self) -> Result<BoardFilter> {
        let date = match &self.date {
            Some(date) => parse_date(date)?,
            None => today(),
        };

        let mut filter = BoardFilter::for_day(date);
        if let Some(status) = &self.status {
            filter = filter.with_status(parse_field("status", status)?);
        }
        if let Some(search) = &self.search {
            filter = filter.with_search(search.clone());
        }
        Ok(filter)
    }
}

impl TryFrom<&ShowBoard> for BoardFilter {
    type Error = DispatchError;

    fn try_from(params: &ShowBoard) -> Result<Self> {
        params.validate()
    }
}

/// Field values for creating or updating a stop.
///
/// `None` leaves a field as it is in the edit session. For optional text and
/// catalog fields an empty string clears the field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StopFields {
    /// Delivery day (`YYYY-MM-DD`)
    pub date: Option<String>,
    /// Slot label or key (`7:00–9:00`, `7-9`)
    pub time_slot: Option<String>,
    pub customer: Option<String>,
    pub job_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    /// Delivery type label or key
    pub delivery_type: Option<String>,
    pub driver: Option<String>,
    /// Truck label or key
    pub truck: Option<String>,
    pub order_ref: Option<String>,
    /// Status key or label; subject to the order-check rule
    pub status: Option<String>,
    pub dispatch_checked: Option<bool>,
    pub notes: Option<String>,
}

impl StopFields {
    /// Apply the fields to an edit session.
    ///
    /// Every value is parsed before anything is written, so a field that
    /// fails to parse leaves the session untouched. The order-check flag is
    /// applied before the status, so checking the order and moving it to
    /// loading can happen in one call.
    ///
    /// # Errors
    ///
    /// * `DispatchError::InvalidInput` - When a date or catalog value does not
    ///   parse
    /// * `DispatchError::VerificationRequired` - When the status is rejected;
    ///   all other fields have been applied and the message is recorded on the
    ///   session
    pub fn apply_to(&self, session: &mut EditSession) -> Result<()> {
        let date = self.date.as_deref().map(parse_date).transpose()?;
        let time_slot = self
            .time_slot
            .as_deref()
            .map(|v| parse_field::<TimeSlot>("time_slot", v))
            .transpose()?;
        let delivery_type = parse_optional_field::<DeliveryType>("delivery_type", &self.delivery_type)?;
        let driver = parse_optional_field::<Driver>("driver", &self.driver)?;
        let truck = parse_optional_field::<Truck>("truck", &self.truck)?;
        let status = self
            .status
            .as_deref()
            .map(|v| parse_field::<DispatchStatus>("status", v))
            .transpose()?;

        let draft = session.draft_mut();
        if let Some(date) = date {
            draft.date = date;
        }
        if let Some(time_slot) = time_slot {
            draft.time_slot = time_slot;
        }
        if let Some(customer) = &self.customer {
            draft.customer = customer.clone();
        }
        set_text(&mut draft.job_name, &self.job_name);
        set_text(&mut draft.address, &self.address);
        set_text(&mut draft.phone, &self.phone);
        set_text(&mut draft.order_ref, &self.order_ref);
        set_text(&mut draft.notes, &self.notes);
        if let Some(delivery_type) = delivery_type {
            draft.delivery_type = delivery_type;
        }
        if let Some(driver) = driver {
            draft.driver = driver;
        }
        if let Some(truck) = truck {
            draft.truck = truck;
        }

        if let Some(checked) = self.dispatch_checked {
            session.set_dispatch_checked(checked);
        }
        if let Some(status) = status {
            session.set_status(status)?;
        }
        Ok(())
    }
}

/// Field values for a dependency row; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DependencyFields {
    pub supplier: Option<String>,
    pub po_or_ref: Option<String>,
    pub eta: Option<String>,
    pub received: Option<bool>,
    pub notes: Option<String>,
}

impl From<&DependencyFields> for DependencyPatch {
    fn from(fields: &DependencyFields) -> Self {
        DependencyPatch {
            supplier: fields.supplier.clone(),
            po_or_ref: fields.po_or_ref.clone(),
            eta: fields.eta.clone(),
            received: fields.received,
            notes: fields.notes.clone(),
        }
    }
}

/// Parameters for a rough round-trip estimate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstimateTrip {
    /// Delivery type label or key; unknown types use the fallback service time
    pub delivery_type: Option<String>,
    /// One-way drive time in minutes
    pub one_way_minutes: f64,
    /// Extra minutes on top of driving and unloading
    pub buffer_minutes: Option<f64>,
}

impl EstimateTrip {
    /// Validate and return the parsed delivery type.
    ///
    /// # Errors
    ///
    /// * `DispatchError::InvalidInput` - When a minute value is negative or
    ///   not finite, or the delivery type does not parse
    pub fn validate(&self) -> Result<Option<DeliveryType>> {
        check_minutes("one_way_minutes", self.one_way_minutes)?;
        if let Some(buffer) = self.buffer_minutes {
            check_minutes("buffer_minutes", buffer)?;
        }
        parse_optional_field("delivery_type", &self.delivery_type).map(Option::flatten)
    }
}

fn check_minutes(field: &str, minutes: f64) -> Result<()> {
    if minutes.is_finite() && minutes >= 0.0 {
        Ok(())
    } else {
        Err(DispatchError::invalid_input(field)
            .with_reason(format!("Expected a non-negative number of minutes, got {minutes}")))
    }
}

/// Today in the system time zone.
pub fn today() -> Date {
    Zoned::now().date()
}

fn parse_date(value: &str) -> Result<Date> {
    value.trim().parse::<Date>().map_err(|e| {
        DispatchError::invalid_input("date")
            .with_reason(format!("Invalid date '{value}': {e}. Expected YYYY-MM-DD"))
    })
}

fn parse_field<T: FromStr<Err = String>>(field: &str, value: &str) -> Result<T> {
    T::from_str(value).map_err(|reason| DispatchError::invalid_input(field).with_reason(reason))
}

/// Parse a catalog field where an empty string clears the value.
fn parse_optional_field<T: FromStr<Err = String>>(
    field: &str,
    value: &Option<String>,
) -> Result<Option<Option<T>>> {
    match value.as_deref().map(str::trim) {
        None => Ok(None),
        Some("") => Ok(Some(None)),
        Some(v) => parse_field(field, v).map(|parsed| Some(Some(parsed))),
    }
}

fn set_text(target: &mut Option<String>, value: &Option<String>) {
    if let Some(value) = value {
        *target = if value.trim().is_empty() {
            None
        } else {
            Some(value.clone())
        };
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::StopDraft;

    fn session() -> EditSession {
        EditSession::new(date(2025, 3, 14))
    }

    #[test]
    fn test_show_board_validate_defaults_to_today() {
        let filter = ShowBoard::default().validate().unwrap();
        assert_eq!(filter.date, today());
        assert_eq!(filter.status, None);
        assert_eq!(filter.search, None);
    }

    #[test]
    fn test_show_board_validate_invalid_status() {
        let params = ShowBoard {
            status: Some("teleported".to_string()),
            ..Default::default()
        };

        match params.validate().unwrap_err() {
            DispatchError::InvalidInput { field, reason } => {
                assert_eq!(field, "status");
                assert!(reason.contains("teleported"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_show_board_validate_invalid_date() {
        let params = ShowBoard {
            date: Some("03/14/2025".to_string()),
            ..Default::default()
        };

        match params.validate().unwrap_err() {
            DispatchError::InvalidInput { field, .. } => assert_eq!(field, "date"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_show_board_try_from() {
        let params = ShowBoard {
            date: Some("2025-03-14".to_string()),
            status: None,
            search: Some("boise".to_string()),
        };
        let filter = BoardFilter::try_from(&params).unwrap();
        assert_eq!(filter.date, date(2025, 3, 14));
        assert_eq!(filter.search.as_deref(), Some("boise"));
    }

    #[test]
    fn test_stop_fields_apply_catalog_values() {
        let mut session = session();
        let fields = StopFields {
            time_slot: Some("1-3".to_string()),
            customer: Some("Acme Framing".to_string()),
            delivery_type: Some("hotshot".to_string()),
            driver: Some("Nolan".to_string()),
            truck: Some("Ram 4500".to_string()),
            ..Default::default()
        };

        fields.apply_to(&mut session).unwrap();

        let draft = session.draft();
        assert_eq!(draft.time_slot, TimeSlot::Afternoon);
        assert_eq!(draft.customer, "Acme Framing");
        assert_eq!(draft.delivery_type, Some(DeliveryType::Hotshot));
        assert_eq!(draft.driver, Some(Driver::Nolan));
        assert_eq!(draft.truck, Some(Truck::Ram4500));
    }

    #[test]
    fn test_stop_fields_empty_string_clears() {
        let mut session = session();
        session.draft_mut().job_name = Some("Lot 4".to_string());

        let fields = StopFields {
            job_name: Some(String::new()),
            driver: Some(String::new()),
            ..Default::default()
        };
        fields.apply_to(&mut session).unwrap();

        assert_eq!(session.draft().job_name, None);
        assert_eq!(session.draft().driver, None);
    }

    #[test]
    fn test_stop_fields_invalid_value_leaves_session_untouched() {
        let mut session = session();
        let before: StopDraft = session.draft().clone();

        let fields = StopFields {
            customer: Some("Acme".to_string()),
            truck: Some("Kenworth".to_string()),
            ..Default::default()
        };

        match fields.apply_to(&mut session).unwrap_err() {
            DispatchError::InvalidInput { field, .. } => assert_eq!(field, "truck"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
        assert_eq!(session.draft(), &before);
    }

    #[test]
    fn test_stop_fields_check_then_status_in_one_call() {
        let mut session = session();
        let fields = StopFields {
            status: Some("loading".to_string()),
            dispatch_checked: Some(true),
            ..Default::default()
        };

        fields.apply_to(&mut session).unwrap();
        assert_eq!(session.draft().status, DispatchStatus::Loading);
        assert!(session.draft().dispatch_checked);
    }

    #[test]
    fn test_stop_fields_guarded_status_rejected() {
        let mut session = session();
        let fields = StopFields {
            customer: Some("Acme".to_string()),
            status: Some("delivered".to_string()),
            ..Default::default()
        };

        let err = fields.apply_to(&mut session).unwrap_err();
        assert!(err.is_verification_required());
        assert_eq!(session.draft().status, DispatchStatus::Scheduled);
        assert_eq!(session.draft().customer, "Acme");
        assert!(session.status_error().is_some());
    }

    #[test]
    fn test_dependency_fields_into_patch() {
        let fields = DependencyFields {
            supplier: Some("Boise Cascade".to_string()),
            received: Some(true),
            ..Default::default()
        };
        let patch = DependencyPatch::from(&fields);
        assert_eq!(patch.supplier.as_deref(), Some("Boise Cascade"));
        assert_eq!(patch.received, Some(true));
        assert_eq!(patch.eta, None);
    }

    #[test]
    fn test_estimate_trip_validate() {
        let params = EstimateTrip {
            delivery_type: Some("moffett".to_string()),
            one_way_minutes: 20.0,
            buffer_minutes: None,
        };
        assert_eq!(params.validate().unwrap(), Some(DeliveryType::ForkliftMoffett));

        let negative = EstimateTrip {
            one_way_minutes: -1.0,
            ..Default::default()
        };
        assert!(negative.validate().is_err());

        let unknown = EstimateTrip {
            delivery_type: Some("crane".to_string()),
            ..Default::default()
        };
        assert!(unknown.validate().is_err());
    }
}

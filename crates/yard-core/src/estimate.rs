//! Rough trip timing and route links for a stop.
//!
//! The estimate is a planning aid only: twice the one-way drive, plus time
//! on site for the delivery type, plus a buffer.

use std::fmt;

use url::Url;

use crate::models::DeliveryType;

/// Where every route starts.
pub const YARD_ORIGIN: &str = "3105 W State St, Boise, ID 83703";

const DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/";

/// Service minutes when the delivery type is unknown.
pub const FALLBACK_SERVICE_MINUTES: u32 = 15;

/// Buffer added when none is given.
pub const DEFAULT_BUFFER_MINUTES: f64 = 10.0;

/// Time on site to unload, by delivery type.
pub fn service_minutes(delivery_type: Option<DeliveryType>) -> u32 {
    match delivery_type {
        Some(DeliveryType::General) => 10,
        Some(DeliveryType::HandUnloadOne) => 25,
        Some(DeliveryType::HandUnloadTwo) => 15,
        Some(DeliveryType::ForkliftDonkey) => 15,
        Some(DeliveryType::ForkliftMoffett) => 10,
        Some(DeliveryType::Hotshot) => 5,
        None => FALLBACK_SERVICE_MINUTES,
    }
}

/// Round-trip minutes, rounded and never negative.
///
/// Non-finite inputs count as zero.
///
/// ```rust
/// use yard_core::{estimate::rough_total_minutes, models::DeliveryType};
///
/// // 2 × 20 drive + 25 unload + 10 buffer
/// assert_eq!(rough_total_minutes(20.0, Some(DeliveryType::HandUnloadOne), None), 75);
/// ```
pub fn rough_total_minutes(
    one_way_minutes: f64,
    delivery_type: Option<DeliveryType>,
    buffer_minutes: Option<f64>,
) -> u32 {
    let one_way = finite_or_zero(one_way_minutes);
    let buffer = finite_or_zero(buffer_minutes.unwrap_or(DEFAULT_BUFFER_MINUTES));
    let total = one_way * 2.0 + f64::from(service_minutes(delivery_type)) + buffer;
    total.round().clamp(0.0, f64::from(u32::MAX)) as u32
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Minutes shown as `45 min`, `1 hr` or `1 hr 5 min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrettyMinutes(pub u32);

impl fmt::Display for PrettyMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / 60;
        let rest = self.0 % 60;
        match (hours, rest) {
            (0, _) => write!(f, "{} min", self.0),
            (h, 0) => write!(f, "{h} hr"),
            (h, m) => write!(f, "{h} hr {m} min"),
        }
    }
}

/// Shorthand for `PrettyMinutes(minutes).to_string()`.
pub fn minutes_to_pretty(minutes: u32) -> String {
    PrettyMinutes(minutes).to_string()
}

/// Driving directions from the yard to `address`, or `None` when the
/// address is blank.
pub fn route_url(address: &str) -> Option<String> {
    let destination = address.trim();
    if destination.is_empty() {
        return None;
    }

    Url::parse_with_params(
        DIRECTIONS_URL,
        &[
            ("api", "1"),
            ("origin", YARD_ORIGIN),
            ("destination", destination),
            ("travelmode", "driving"),
        ],
    )
    .ok()
    .map(String::from)
}

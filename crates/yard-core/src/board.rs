//! Board projection: the day's stops grouped into their time slots.

use std::collections::BTreeMap;

use jiff::civil::Date;

use crate::models::{BoardFilter, DispatchStop, TimeSlot};

/// Grouped, filtered view of a single day.
///
/// Every known slot is present, in chronological order, even when it has no
/// stops. Each filtered stop appears in exactly one slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    date: Date,
    slots: BTreeMap<TimeSlot, Vec<DispatchStop>>,
}

impl Board {
    /// Project `stops` through `filter`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jiff::civil::date;
    /// use yard_core::{board::Board, models::{BoardFilter, TimeSlot}};
    ///
    /// let board = Board::project(&[], &BoardFilter::for_day(date(2025, 3, 14)));
    /// assert!(board.is_empty());
    /// assert_eq!(board.slots().count(), TimeSlot::ALL.len());
    /// ```
    pub fn project(stops: &[DispatchStop], filter: &BoardFilter) -> Self {
        let mut slots: BTreeMap<TimeSlot, Vec<DispatchStop>> =
            TimeSlot::ALL.into_iter().map(|slot| (slot, Vec::new())).collect();

        for stop in filter_stops(stops, filter) {
            slots.entry(stop.time_slot).or_default().push(stop);
        }

        Self {
            date: filter.date,
            slots,
        }
    }

    /// Day this board shows.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Stops in one slot, in board order.
    pub fn slot(&self, slot: TimeSlot) -> &[DispatchStop] {
        self.slots.get(&slot).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every slot with its stops, in chronological order.
    pub fn slots(&self) -> impl Iterator<Item = (TimeSlot, &[DispatchStop])> {
        self.slots.iter().map(|(slot, stops)| (*slot, stops.as_slice()))
    }

    /// All filtered stops in board order.
    pub fn stops(&self) -> impl Iterator<Item = &DispatchStop> {
        self.slots.values().flatten()
    }

    /// Number of stops on the board.
    pub fn len(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Apply the board filters in order (day, status, search) and sort by slot.
///
/// The sort is stable, so stops sharing a slot keep their collection order.
pub fn filter_stops(stops: &[DispatchStop], filter: &BoardFilter) -> Vec<DispatchStop> {
    let needle = filter.needle();

    let mut filtered: Vec<DispatchStop> = stops
        .iter()
        .filter(|s| s.date == filter.date)
        .filter(|s| filter.status.map_or(true, |status| s.status == status))
        .filter(|s| needle.as_deref().map_or(true, |q| matches_search(s, q)))
        .cloned()
        .collect();

    filtered.sort_by_key(|s| s.time_slot);
    filtered
}

/// Whether the lowercased `needle` occurs in the stop's searchable text.
pub fn matches_search(stop: &DispatchStop, needle: &str) -> bool {
    searchable_text(stop).to_lowercase().contains(needle)
}

/// Concatenation of every field the board search looks at.
pub fn searchable_text(stop: &DispatchStop) -> String {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();

    let mut fields = vec![
        stop.customer.clone(),
        text(&stop.job_name),
        text(&stop.address),
        stop.driver.map(|d| d.label().to_string()).unwrap_or_default(),
        stop.truck.map(|t| t.label().to_string()).unwrap_or_default(),
        stop.delivery_type
            .map(|t| t.label().to_string())
            .unwrap_or_default(),
        text(&stop.order_ref),
        text(&stop.phone),
        text(&stop.notes),
    ];

    for dependency in &stop.dependencies {
        fields.push(dependency.supplier.clone());
        fields.push(text(&dependency.po_or_ref));
        fields.push(text(&dependency.notes));
    }

    fields.join(" ")
}

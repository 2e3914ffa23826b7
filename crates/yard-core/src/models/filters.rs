//! Filter types for projecting the dispatch board.

use jiff::civil::Date;

use super::DispatchStatus;

/// Filter options for the scheduling board.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardFilter {
    /// Only stops on this day are shown
    pub date: Date,

    /// Only stops in this status; `None` shows every status
    pub status: Option<DispatchStatus>,

    /// Case-insensitive substring matched against the stop's searchable text
    pub search: Option<String>,
}

impl BoardFilter {
    /// Unfiltered board for a single day.
    ///
    /// ```rust
    /// use jiff::civil::date;
    /// use yard_core::models::BoardFilter;
    ///
    /// let filter = BoardFilter::for_day(date(2025, 3, 14));
    /// assert!(filter.status.is_none());
    /// assert!(filter.search.is_none());
    /// ```
    pub fn for_day(date: Date) -> Self {
        Self {
            date,
            status: None,
            search: None,
        }
    }

    pub fn with_status(mut self, status: DispatchStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Lowercased search needle, or `None` when the query is blank.
    pub(crate) fn needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }
}

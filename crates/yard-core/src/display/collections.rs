//! Collection display: the board as slot columns.

use std::fmt;

use super::{
    card::{StopCard, StopTip},
    datetime::DayLabel,
    models::EMPTY,
};
use crate::board::Board;

/// Pluralized stop count, e.g. `1 stop`, `3 stops`.
pub struct StopCount(pub usize);

impl fmt::Display for StopCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.0 == 1 { "stop" } else { "stops" };
        write!(f, "{} {noun}", self.0)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} ({})", DayLabel(self.date()), StopCount(self.len()))?;

        for (slot, stops) in self.slots() {
            writeln!(f)?;
            writeln!(f, "## {slot} ({})", StopCount(stops.len()))?;
            writeln!(f)?;

            if stops.is_empty() {
                writeln!(f, "No stops in this slot.")?;
            } else {
                for stop in stops {
                    write!(f, "{}", StopCard(stop))?;
                }
            }
        }

        Ok(())
    }
}

/// The board with one tip line per stop instead of full cards.
pub struct CompactBoard<'a>(pub &'a Board);

impl fmt::Display for CompactBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        writeln!(f, "# {} ({})", DayLabel(board.date()), StopCount(board.len()))?;
        writeln!(f)?;

        for (slot, stops) in board.slots() {
            if stops.is_empty() {
                writeln!(f, "- {slot}: {EMPTY}")?;
                continue;
            }
            for stop in stops {
                writeln!(f, "- {slot}: {} ({}, ID: {})", StopTip(stop), stop.status, stop.id)?;
            }
        }

        Ok(())
    }
}

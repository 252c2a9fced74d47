//! Output slot abstraction.
//!
//! This module defines the write-only surface the updater pushes display
//! values into. The host owns the actual widgets (terminal cells, status
//! bar segments, whatever); the core only names the slots and writes text
//! into them, never reads them back.

use crate::display::IconStyle;

/// Named display targets the updater writes to.
///
/// `FooterYear` is written once at startup; every other slot is rewritten
/// on each tick. The day/night icon is not listed here because it carries
/// an [`IconStyle`] rather than text; see [`SlotSink::set_icon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Hour,
    Minute,
    Second,
    Meridiem,
    Date,
    DayNight,
    Timezone,
    ViewportClass,
    FooterYear,
}

/// SlotSink is implemented by the host's display surface.
///
/// Writes are infallible by contract: the slot set is closed, so a sink
/// always has somewhere to put each value. Ticks are idempotent, so a
/// sink may also coalesce repeated identical writes if it wants.
pub trait SlotSink {
    /// Replace the text content of one slot.
    fn set_text(&mut self, slot: Slot, text: &str);

    /// Select which of the two fixed icon variants the day/night slot shows.
    fn set_icon(&mut self, icon: IconStyle);
}

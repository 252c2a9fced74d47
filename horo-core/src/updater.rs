//! The display updater: glue between a [`TimeSource`] and a [`SlotSink`].
//!
//! Each refresh is stateless — read the clock once, format, write every
//! slot. The host calls [`DisplayUpdater::refresh_all`] once at startup
//! and then on its one-second timer, and re-runs the viewport half on its
//! own whenever the surface is resized.

use crate::display::TimeDisplay;
use crate::slots::{Slot, SlotSink};
use crate::time_source::TimeSource;
use crate::viewport::ViewportClass;

pub struct DisplayUpdater {
    time_source: Box<dyn TimeSource>,
}

impl DisplayUpdater {
    /// Build an updater around an injected clock. The sink is not held
    /// here; every refresh takes it as an argument so one updater can
    /// serve any number of surfaces.
    pub fn new(time_source: Box<dyn TimeSource>) -> Self {
        DisplayUpdater { time_source }
    }

    /// Recompute and write all time-derived slots from one clock read.
    pub fn refresh_time(&self, sink: &mut dyn SlotSink) {
        let snapshot = self.time_source.now();
        let display = TimeDisplay::from_snapshot(&snapshot);

        sink.set_text(Slot::Hour, &display.hour);
        sink.set_text(Slot::Minute, &display.minute);
        sink.set_text(Slot::Second, &display.second);
        sink.set_text(Slot::Meridiem, &display.meridiem.to_string());
        sink.set_text(Slot::Date, &display.date);
        sink.set_text(Slot::DayNight, &display.phase.to_string());
        sink.set_icon(display.phase.icon());
        sink.set_text(Slot::Timezone, &display.timezone);
    }

    /// Classify the current viewport width and write its slot.
    pub fn refresh_viewport_class(&self, sink: &mut dyn SlotSink, width_px: u32) {
        let class = ViewportClass::classify(width_px);
        sink.set_text(Slot::ViewportClass, &class.to_string());
    }

    /// One full tick: time first, then viewport class.
    pub fn refresh_all(&self, sink: &mut dyn SlotSink, width_px: u32) {
        self.refresh_time(sink);
        self.refresh_viewport_class(sink, width_px);
    }

    /// Write the current calendar year into the footer slot. Called once
    /// at startup; the footer is never updated afterwards.
    pub fn write_footer_year(&self, sink: &mut dyn SlotSink) {
        let year = self.time_source.now().year;
        sink.set_text(Slot::FooterYear, &year.to_string());
    }
}

//! # Horo Core
//!
//! Display logic for the horo live clock widget.
//!
//! The crate is split along the seam between computation and environment:
//! everything that can be computed from a [`TimeSnapshot`] or a viewport
//! width is a pure function here, and everything that touches the host
//! (the system clock, the output surface) goes through a trait the host
//! implements. Frontends own the event loop; this crate never schedules
//! anything itself.
//!
//! ## Features
//!
//! - **Pure formatting**: 12-hour time, date label, day/night phase and
//!   viewport classification are deterministic functions, unit-testable
//!   without a terminal or a real clock
//! - **Injected clock**: the [`TimeSource`] trait decouples the updater
//!   from `chrono`; [`FixedTimeSource`] freezes time for tests
//! - **Write-only output**: the updater pushes text into a [`SlotSink`]
//!   and never reads the display back
//!
//! ## Example
//!
//! ```ignore
//! use horo_core::{DisplayUpdater, SystemTimeSource};
//!
//! let updater = DisplayUpdater::new(Box::new(SystemTimeSource::new()));
//! let mut sink = my_sink();          // anything implementing SlotSink
//! updater.write_footer_year(&mut sink);
//! updater.refresh_all(&mut sink, 1280);
//! ```

// Public modules
pub mod display;
pub mod slots;
pub mod system;
pub mod time_source;
pub mod updater;
pub mod viewport;

// Re-exports for convenience
pub use display::{DayPhase, IconStyle, Meridiem, TimeDisplay};
pub use slots::{Slot, SlotSink};
pub use system::{SystemTimeSource, TimezoneError};
pub use time_source::{FixedTimeSource, TimeSnapshot, TimeSource};
pub use updater::DisplayUpdater;
pub use viewport::ViewportClass;

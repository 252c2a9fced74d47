/// Platform-agnostic time source abstraction for the horo updater.
///
/// This trait lets the frontend decide where wall-clock time comes from
/// without the display logic depending on a particular clock crate. The
/// interactive frontend injects [`crate::SystemTimeSource`]; tests inject
/// [`FixedTimeSource`] to freeze a known instant.
///
/// The snapshot fields match what the display needs directly: calendar
/// components plus the resolved timezone name, all taken from one read so
/// they can never disagree with each other.

/// One atomic read of the wall clock, already split into display components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSnapshot {
    pub year: i32,
    pub month: u8,   // 0-11, indexes the month name table
    pub day: u8,     // 1-31
    pub weekday: u8, // 0-6, Sunday = 0
    pub hour: u8,    // 0-23
    pub minute: u8,  // 0-59
    pub second: u8,  // 0-59
    /// Resolved timezone name, normally an IANA identifier like
    /// "Europe/Paris". Falls back to an offset label when the host cannot
    /// name its zone.
    pub timezone: String,
}

pub trait TimeSource {
    /// Get the current date and time as display components.
    ///
    /// Every call must produce a self-consistent snapshot: all fields
    /// derived from a single clock read.
    fn now(&self) -> TimeSnapshot;
}

/// A time source that always returns the same snapshot.
///
/// Useful for tests, and for hosts without a real clock that want to
/// report a fixed instant rather than fail.
#[derive(Debug, Clone)]
pub struct FixedTimeSource {
    snapshot: TimeSnapshot,
}

impl FixedTimeSource {
    pub fn new(snapshot: TimeSnapshot) -> Self {
        FixedTimeSource { snapshot }
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> TimeSnapshot {
        self.snapshot.clone()
    }
}

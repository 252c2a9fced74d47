//! System-clock implementation of [`TimeSource`].
//!
//! Reads the wall clock through chrono and resolves the zone name the
//! widget shows. By default that is the host's own IANA identifier; a
//! named zone can be injected instead, in which case the snapshot is
//! derived in that zone rather than the host's.

use core::fmt;

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::time_source::{TimeSnapshot, TimeSource};

/// Error raised when a requested timezone name is not in the IANA database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimezoneError {
    Unknown(String),
}

impl fmt::Display for TimezoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimezoneError::Unknown(name) => write!(f, "unknown timezone: {}", name),
        }
    }
}

impl std::error::Error for TimezoneError {}

/// Wall-clock time source backed by the operating system.
pub struct SystemTimeSource {
    override_zone: Option<Tz>,
}

impl SystemTimeSource {
    /// Time source for the host's local zone.
    pub fn new() -> Self {
        SystemTimeSource { override_zone: None }
    }

    /// Time source pinned to a named IANA zone, e.g. `"Asia/Tokyo"`.
    pub fn with_timezone(name: &str) -> Result<Self, TimezoneError> {
        let zone = name
            .parse::<Tz>()
            .map_err(|_| TimezoneError::Unknown(name.to_string()))?;
        Ok(SystemTimeSource {
            override_zone: Some(zone),
        })
    }
}

impl Default for SystemTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemTimeSource {
    fn now(&self) -> TimeSnapshot {
        match self.override_zone {
            Some(zone) => {
                let now = Utc::now().with_timezone(&zone);
                snapshot_from(&now, zone.name().to_string())
            }
            None => {
                let now = Local::now();
                let timezone = resolve_system_zone(&now);
                snapshot_from(&now, timezone)
            }
        }
    }
}

/// Name of the host's current zone.
///
/// Falls back to an offset label like "UTC+02:00" when the platform cannot
/// report an IANA identifier.
fn resolve_system_zone(now: &DateTime<Local>) -> String {
    match iana_time_zone::get_timezone() {
        Ok(name) => name,
        Err(err) => {
            log::warn!("could not resolve system timezone name: {}", err);
            format!("UTC{}", now.offset())
        }
    }
}

fn snapshot_from<Z: TimeZone>(now: &DateTime<Z>, timezone: String) -> TimeSnapshot {
    TimeSnapshot {
        year: now.year(),
        month: now.month0() as u8,
        day: now.day() as u8,
        weekday: now.weekday().num_days_from_sunday() as u8,
        hour: now.hour() as u8,
        minute: now.minute() as u8,
        second: now.second() as u8,
        timezone,
    }
}

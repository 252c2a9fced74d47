//! Pure time-display formatting.
//!
//! Everything in this module is a deterministic function of a
//! [`TimeSnapshot`]; no clocks, no I/O. The frontend decides when to call
//! it (once per tick) and where the strings go.

use core::fmt;

use crate::time_source::TimeSnapshot;

/// Weekday display names, indexed by `TimeSnapshot::weekday` (Sunday = 0).
pub const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Month display names, indexed by `TimeSnapshot::month`.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// AM/PM designator for 12-hour display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// PM iff the 24-hour value is 12 or later.
    pub fn from_hour(hour24: u8) -> Self {
        if hour24 >= 12 { Meridiem::Pm } else { Meridiem::Am }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => write!(f, "AM"),
            Meridiem::Pm => write!(f, "PM"),
        }
    }
}

/// Coarse day/night classification of the current hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPhase {
    Day,
    Night,
}

/// Which of the two fixed icon variants the day/night slot shows.
/// Matches [`DayPhase`] 1:1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconStyle {
    Sun,
    Moon,
}

impl DayPhase {
    /// Day iff the 24-hour value is in [6, 18).
    pub fn from_hour(hour24: u8) -> Self {
        if (6..18).contains(&hour24) {
            DayPhase::Day
        } else {
            DayPhase::Night
        }
    }

    pub fn icon(&self) -> IconStyle {
        match self {
            DayPhase::Day => IconStyle::Sun,
            DayPhase::Night => IconStyle::Moon,
        }
    }
}

impl fmt::Display for DayPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayPhase::Day => write!(f, "Day"),
            DayPhase::Night => write!(f, "Night"),
        }
    }
}

/// Zero-pad a clock component to two digits.
pub fn two_digit(value: u8) -> String {
    format!("{:02}", value)
}

/// Map a 24-hour value onto the 12-hour dial: 0 -> 12, 13-23 -> 1-11.
pub fn display_hour(hour24: u8) -> u8 {
    match hour24 % 12 {
        0 => 12,
        h => h,
    }
}

/// Date label in the widget's fixed shape: `"<Weekday>, <Month> <day>"`,
/// with the day of month left unpadded. Indices outside the tables are a
/// caller bug and panic.
pub fn date_label(weekday: u8, month: u8, day: u8) -> String {
    format!(
        "{}, {} {}",
        WEEKDAYS[weekday as usize], MONTHS[month as usize], day
    )
}

/// Fully formatted output of one tick.
///
/// Building this is the pure half of a refresh; pushing the fields into a
/// [`crate::SlotSink`] is the updater's half.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeDisplay {
    pub hour: String,
    pub minute: String,
    pub second: String,
    pub meridiem: Meridiem,
    pub date: String,
    pub phase: DayPhase,
    pub timezone: String,
}

impl TimeDisplay {
    pub fn from_snapshot(snapshot: &TimeSnapshot) -> Self {
        TimeDisplay {
            hour: two_digit(display_hour(snapshot.hour)),
            minute: two_digit(snapshot.minute),
            second: two_digit(snapshot.second),
            meridiem: Meridiem::from_hour(snapshot.hour),
            date: date_label(snapshot.weekday, snapshot.month, snapshot.day),
            phase: DayPhase::from_hour(snapshot.hour),
            timezone: snapshot.timezone.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(hour: u8, minute: u8, second: u8) -> TimeSnapshot {
        TimeSnapshot {
            year: 2024,
            month: 2,
            day: 7,
            weekday: 4,
            hour,
            minute,
            second,
            timezone: "UTC".to_string(),
        }
    }

    #[test]
    fn twelve_hour_mapping_covers_all_hours() {
        for hour24 in 0u8..24 {
            let expected = match hour24 {
                0 => 12,
                h if h > 12 => h - 12,
                h => h,
            };
            assert_eq!(display_hour(hour24), expected, "hour24 = {}", hour24);
        }
    }

    #[test]
    fn meridiem_flips_at_noon() {
        for hour24 in 0u8..24 {
            let expected = if hour24 >= 12 { Meridiem::Pm } else { Meridiem::Am };
            assert_eq!(Meridiem::from_hour(hour24), expected, "hour24 = {}", hour24);
        }
        assert_eq!(Meridiem::Am.to_string(), "AM");
        assert_eq!(Meridiem::Pm.to_string(), "PM");
    }

    #[test]
    fn two_digit_pads_single_digits_only() {
        assert_eq!(two_digit(0), "00");
        assert_eq!(two_digit(9), "09");
        assert_eq!(two_digit(10), "10");
        assert_eq!(two_digit(59), "59");
    }

    #[test]
    fn day_phase_window_is_six_to_eighteen() {
        for hour24 in 0u8..24 {
            let expected = if hour24 >= 6 && hour24 < 18 {
                DayPhase::Day
            } else {
                DayPhase::Night
            };
            assert_eq!(DayPhase::from_hour(hour24), expected, "hour24 = {}", hour24);
        }
    }

    #[test]
    fn icon_matches_phase() {
        assert_eq!(DayPhase::Day.icon(), IconStyle::Sun);
        assert_eq!(DayPhase::Night.icon(), IconStyle::Moon);
    }

    #[test]
    fn date_label_has_fixed_shape() {
        // weekday 0 (Sunday), month 0 (Jan), day 5
        assert_eq!(date_label(0, 0, 5), "Sunday, Jan 5");
        // day of month is never zero-padded
        assert_eq!(date_label(6, 11, 31), "Saturday, Dec 31");
    }

    #[test]
    fn from_snapshot_formats_every_field() {
        let display = TimeDisplay::from_snapshot(&snapshot(14, 5, 9));

        assert_eq!(display.hour, "02");
        assert_eq!(display.minute, "05");
        assert_eq!(display.second, "09");
        assert_eq!(display.meridiem, Meridiem::Pm);
        assert_eq!(display.date, "Thursday, Mar 7");
        assert_eq!(display.phase, DayPhase::Day);
        assert_eq!(display.timezone, "UTC");
    }

    #[test]
    fn midnight_displays_as_twelve_am() {
        let display = TimeDisplay::from_snapshot(&snapshot(0, 0, 0));

        assert_eq!(display.hour, "12");
        assert_eq!(display.meridiem, Meridiem::Am);
        assert_eq!(display.phase, DayPhase::Night);
    }
}

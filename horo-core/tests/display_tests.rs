// Integration tests for the full refresh path: a frozen clock driven
// through the updater into a recording sink, asserting on the exact
// strings a host would display.

use std::collections::HashMap;

use horo_core::{
    DisplayUpdater, FixedTimeSource, IconStyle, Slot, SlotSink, TimeSnapshot,
};

#[derive(Default, PartialEq, Debug, Clone)]
struct RecordingSink {
    texts: HashMap<Slot, String>,
    icon: Option<IconStyle>,
}

impl SlotSink for RecordingSink {
    fn set_text(&mut self, slot: Slot, text: &str) {
        self.texts.insert(slot, text.to_string());
    }

    fn set_icon(&mut self, icon: IconStyle) {
        self.icon = Some(icon);
    }
}

fn updater_at(snapshot: TimeSnapshot) -> DisplayUpdater {
    DisplayUpdater::new(Box::new(FixedTimeSource::new(snapshot)))
}

#[test]
fn afternoon_scenario_end_to_end() {
    // 2024-03-07 is a Thursday; 14:05:09 in UTC
    let updater = updater_at(TimeSnapshot {
        year: 2024,
        month: 2,
        day: 7,
        weekday: 4,
        hour: 14,
        minute: 5,
        second: 9,
        timezone: "UTC".to_string(),
    });
    let mut sink = RecordingSink::default();

    updater.write_footer_year(&mut sink);
    updater.refresh_all(&mut sink, 1920);

    assert_eq!(sink.texts[&Slot::Hour], "02");
    assert_eq!(sink.texts[&Slot::Minute], "05");
    assert_eq!(sink.texts[&Slot::Second], "09");
    assert_eq!(sink.texts[&Slot::Meridiem], "PM");
    assert_eq!(sink.texts[&Slot::Date], "Thursday, Mar 7");
    assert_eq!(sink.texts[&Slot::DayNight], "Day");
    assert_eq!(sink.icon, Some(IconStyle::Sun));
    assert_eq!(sink.texts[&Slot::Timezone], "UTC");
    assert_eq!(sink.texts[&Slot::ViewportClass], "Desktop");
    assert_eq!(sink.texts[&Slot::FooterYear], "2024");
}

#[test]
fn midnight_scenario_shows_twelve_and_night() {
    // 2024-01-01 is a Monday; midnight in Tokyo
    let updater = updater_at(TimeSnapshot {
        year: 2024,
        month: 0,
        day: 1,
        weekday: 1,
        hour: 0,
        minute: 0,
        second: 0,
        timezone: "Asia/Tokyo".to_string(),
    });
    let mut sink = RecordingSink::default();

    updater.refresh_all(&mut sink, 500);

    assert_eq!(sink.texts[&Slot::Hour], "12");
    assert_eq!(sink.texts[&Slot::Meridiem], "AM");
    assert_eq!(sink.texts[&Slot::Date], "Monday, Jan 1");
    assert_eq!(sink.texts[&Slot::DayNight], "Night");
    assert_eq!(sink.icon, Some(IconStyle::Moon));
    assert_eq!(sink.texts[&Slot::ViewportClass], "Mobile");
}

#[test]
fn repeated_refresh_is_idempotent() {
    let updater = updater_at(TimeSnapshot {
        year: 2025,
        month: 5,
        day: 21,
        weekday: 6,
        hour: 17,
        minute: 59,
        second: 59,
        timezone: "Europe/Paris".to_string(),
    });

    let mut first = RecordingSink::default();
    updater.write_footer_year(&mut first);
    updater.refresh_all(&mut first, 1023);

    let mut second = first.clone();
    updater.refresh_all(&mut second, 1023);

    assert_eq!(first, second);
}

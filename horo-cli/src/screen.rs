//! Terminal display surface implementing the core's `SlotSink`.
//!
//! `Screen` is the terminal's version of the widget's element handles: it
//! keeps the latest text written into each slot and knows how to paint the
//! whole widget with crossterm commands. Drawing also records where the
//! digit groups landed so mouse clicks can be mapped back to them.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use horo_core::{IconStyle, Slot, SlotSink};

/// Nominal glyph width used to approximate a pixel width when the
/// terminal does not report one.
const CELL_WIDTH_PX: u32 = 8;

/// Printed width of one pulsable digit group, including its padding.
const GROUP_WIDTH: u16 = 4;

const TIME_ROW: u16 = 2;
const DATE_ROW: u16 = 4;
const PHASE_ROW: u16 = 6;
const TIMEZONE_ROW: u16 = 8;
const VIEWPORT_ROW: u16 = 10;

/// The three clickable digit groups of the time line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitGroup {
    Hour,
    Minute,
    Second,
}

impl DigitGroup {
    pub fn index(self) -> usize {
        match self {
            DigitGroup::Hour => 0,
            DigitGroup::Minute => 1,
            DigitGroup::Second => 2,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Region {
    row: u16,
    start: u16,
    end: u16, // exclusive
    group: DigitGroup,
}

/// Current viewport width in pixels.
///
/// Uses the terminal's reported pixel size when it gives one, otherwise
/// approximates from the column count.
pub fn viewport_width_px() -> u32 {
    if let Ok(size) = terminal::window_size() {
        if size.width > 0 {
            return size.width as u32;
        }
    }
    let cols = terminal::size().map(|(cols, _)| cols).unwrap_or(80);
    cols as u32 * CELL_WIDTH_PX
}

pub struct Screen {
    hour: String,
    minute: String,
    second: String,
    meridiem: String,
    date: String,
    day_night: String,
    icon: Option<IconStyle>,
    timezone: String,
    viewport: String,
    footer_year: String,
    regions: Vec<Region>,
}

impl Screen {
    pub fn new() -> Self {
        Screen {
            hour: "--".to_string(),
            minute: "--".to_string(),
            second: "--".to_string(),
            meridiem: "--".to_string(),
            date: String::new(),
            day_night: String::new(),
            icon: None,
            timezone: String::new(),
            viewport: String::new(),
            footer_year: String::new(),
            regions: Vec::new(),
        }
    }

    /// Map a terminal cell back to the digit group drawn there, if any.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<DigitGroup> {
        self.regions
            .iter()
            .find(|r| r.row == row && column >= r.start && column < r.end)
            .map(|r| r.group)
    }

    /// Paint the whole widget. `pulsing` selects which digit groups are
    /// currently emphasized, indexed by [`DigitGroup::index`].
    pub fn draw(&mut self, out: &mut impl Write, pulsing: [bool; 3]) -> io::Result<()> {
        let (cols, rows) = terminal::size().unwrap_or((80, 24));
        self.regions.clear();

        queue!(out, Clear(ClearType::All))?;

        // hh : mm : ss  AM
        let time_width = GROUP_WIDTH * 3 + 3 * 2 + 2 + self.meridiem.chars().count() as u16;
        let mut x = centered(cols, time_width);
        let groups = [
            (DigitGroup::Hour, &self.hour),
            (DigitGroup::Minute, &self.minute),
            (DigitGroup::Second, &self.second),
        ];
        for (i, (group, text)) in groups.iter().enumerate() {
            self.regions.push(Region {
                row: TIME_ROW,
                start: x,
                end: x + GROUP_WIDTH,
                group: *group,
            });
            queue!(out, MoveTo(x, TIME_ROW))?;
            if pulsing[group.index()] {
                queue!(out, SetAttribute(Attribute::Reverse), SetAttribute(Attribute::Bold))?;
            }
            queue!(out, Print(format!(" {:>2} ", text)))?;
            queue!(out, SetAttribute(Attribute::Reset))?;
            x += GROUP_WIDTH;
            if i < 2 {
                queue!(out, Print(" : "))?;
                x += 3;
            }
        }
        queue!(out, Print("  "), SetAttribute(Attribute::Bold))?;
        queue!(out, Print(&self.meridiem), SetAttribute(Attribute::Reset))?;

        centered_line(out, cols, DATE_ROW, &self.date)?;

        // Colored sun or moon next to the day/night label
        let (glyph, color) = match self.icon {
            Some(IconStyle::Sun) => ("\u{2600}", Color::Yellow),
            Some(IconStyle::Moon) => ("\u{263e}", Color::Blue),
            None => (" ", Color::Reset),
        };
        let phase_width = 2 + self.day_night.chars().count() as u16;
        queue!(
            out,
            MoveTo(centered(cols, phase_width), PHASE_ROW),
            SetForegroundColor(color),
            Print(glyph),
            ResetColor,
            Print(" "),
            Print(&self.day_night)
        )?;

        centered_line(out, cols, TIMEZONE_ROW, &self.timezone)?;
        centered_line(out, cols, VIEWPORT_ROW, &self.viewport)?;

        let footer = format!("\u{a9} {}", self.footer_year);
        centered_line(out, cols, rows.saturating_sub(2), &footer)?;

        out.flush()
    }

    /// Plain-text snapshot of every slot, one per line, for `--once`.
    pub fn render_plain(&self) -> String {
        format!(
            "{}:{}:{} {}\n{}\n{}\n{}\n{}\n{}\n",
            self.hour,
            self.minute,
            self.second,
            self.meridiem,
            self.date,
            self.day_night,
            self.timezone,
            self.viewport,
            self.footer_year,
        )
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotSink for Screen {
    fn set_text(&mut self, slot: Slot, text: &str) {
        let field = match slot {
            Slot::Hour => &mut self.hour,
            Slot::Minute => &mut self.minute,
            Slot::Second => &mut self.second,
            Slot::Meridiem => &mut self.meridiem,
            Slot::Date => &mut self.date,
            Slot::DayNight => &mut self.day_night,
            Slot::Timezone => &mut self.timezone,
            Slot::ViewportClass => &mut self.viewport,
            Slot::FooterYear => &mut self.footer_year,
        };
        field.clear();
        field.push_str(text);
    }

    fn set_icon(&mut self, icon: IconStyle) {
        self.icon = Some(icon);
    }
}

fn centered(cols: u16, width: u16) -> u16 {
    cols.saturating_sub(width) / 2
}

/// One horizontally centered line of plain text.
fn centered_line(out: &mut impl Write, cols: u16, row: u16, text: &str) -> io::Result<()> {
    let width = text.chars().count() as u16;
    queue!(out, MoveTo(centered(cols, width), row), Print(text))
}

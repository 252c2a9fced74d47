//! Interactive event loop driving the display updater.
//!
//! One `tokio::select!` multiplexes the widget's three trigger points:
//! the one-second tick (full refresh), terminal events (resize, digit
//! clicks, quit keys), and the pulse-revert deadline. Each arm ends in a
//! redraw; nothing blocks.

use std::io::{self, Write as _};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use horo_core::DisplayUpdater;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::screen::{viewport_width_px, DigitGroup, Screen};

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// How long a clicked digit group stays emphasized.
const PULSE_DURATION: Duration = Duration::from_millis(200);

/// Raw-mode/alternate-screen session. Restores the terminal on drop so
/// error paths and quit keys leave the shell usable.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture, Hide)?;
        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Active pulse deadlines, one per digit group.
#[derive(Default)]
struct Pulses {
    deadlines: [Option<Instant>; 3],
}

impl Pulses {
    fn press(&mut self, group: DigitGroup) {
        self.deadlines[group.index()] = Some(Instant::now() + PULSE_DURATION);
    }

    /// Which groups are emphasized right now, indexed by `DigitGroup::index`.
    fn active(&self) -> [bool; 3] {
        let now = Instant::now();
        self.deadlines.map(|d| d.is_some_and(|deadline| deadline > now))
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.iter().flatten().min().copied()
    }

    fn expire(&mut self, now: Instant) {
        for deadline in &mut self.deadlines {
            if deadline.is_some_and(|d| d <= now) {
                *deadline = None;
            }
        }
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

pub async fn run(updater: DisplayUpdater) -> Result<()> {
    let _guard = TerminalGuard::enter()?;
    let mut screen = Screen::new();
    let mut pulses = Pulses::default();

    updater.write_footer_year(&mut screen);

    // The first tick completes immediately, which is the startup refresh
    let mut ticks = time::interval(TICK_PERIOD);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut events = EventStream::new();

    loop {
        let pulse_deadline = pulses.next_deadline();
        let pulse_wake = pulse_deadline.unwrap_or_else(|| Instant::now() + TICK_PERIOD);

        tokio::select! {
            _ = ticks.tick() => {
                updater.refresh_all(&mut screen, viewport_width_px());
                screen.draw(&mut io::stdout(), pulses.active())?;
            }
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Resize(cols, rows))) => {
                    log::debug!("terminal resized to {}x{}", cols, rows);
                    updater.refresh_viewport_class(&mut screen, viewport_width_px());
                    screen.draw(&mut io::stdout(), pulses.active())?;
                }
                Some(Ok(Event::Key(key))) if is_quit(&key) => break,
                Some(Ok(Event::Mouse(mouse)))
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) =>
                {
                    if let Some(group) = screen.hit_test(mouse.column, mouse.row) {
                        pulses.press(group);
                        screen.draw(&mut io::stdout(), pulses.active())?;
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(err.into()),
                None => break,
            },
            _ = time::sleep_until(pulse_wake), if pulse_deadline.is_some() => {
                pulses.expire(Instant::now());
                screen.draw(&mut io::stdout(), pulses.active())?;
            }
        }
    }

    Ok(())
}

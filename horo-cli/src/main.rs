//! horo - a live clock widget for the terminal.
//!
//! This is a thin frontend over horo-core: it owns the terminal and the
//! event loop, while all display computation lives in the library. Shows
//! the current time (12-hour with AM/PM), date, day/night phase, timezone
//! and a coarse viewport class, refreshed every second and on resize.
//! Click a digit group to pulse it; press `q`, Esc or Ctrl-C to quit.

mod app;
mod screen;

use anyhow::Result;
use clap::Parser;
use horo_core::{DisplayUpdater, SystemTimeSource};

use crate::screen::{viewport_width_px, Screen};

#[derive(Parser, Debug)]
#[command(name = "horo", version, about = "Live clock widget for the terminal")]
struct Cli {
    #[arg(long, help = "IANA timezone to display instead of the system zone")]
    timezone: Option<String>,
    #[arg(long, help = "Print a single snapshot as plain text and exit")]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let source = match &cli.timezone {
        Some(name) => SystemTimeSource::with_timezone(name)?,
        None => SystemTimeSource::new(),
    };
    let updater = DisplayUpdater::new(Box::new(source));

    if cli.once {
        let mut screen = Screen::new();
        updater.write_footer_year(&mut screen);
        updater.refresh_all(&mut screen, viewport_width_px());
        print!("{}", screen.render_plain());
        return Ok(());
    }

    log::info!("starting interactive clock");
    app::run(updater).await
}

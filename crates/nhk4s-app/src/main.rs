//! NHK4S headless host.
//!
//! Runs the TV pointer screen without a display: remote-control commands are
//! read from stdin (see [`replay`] for the format) and every command the
//! screen sends to the browser or the pointer overlay is logged. The config
//! file path comes from the first argument or `NHK4S_CONFIG`; without one the
//! stock configuration is used.

mod headless;
mod replay;

use std::io::BufRead;

use anyhow::{Context, Result};

use headless::{ConsoleOverlay, HeadlessSurface};
use nhk4s_core::ScreenController;
use nhk4s_core::config::Nhk4sConfig;
use replay::{ReplayResult, Replayer};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args()
        .nth(1)
        .or_else(|| std::env::var("NHK4S_CONFIG").ok())
    {
        Some(path) => {
            Nhk4sConfig::load(&path).with_context(|| format!("loading config {path}"))?
        },
        None => Nhk4sConfig::default(),
    };
    log::info!(
        "Starting NHK4S pointer screen ({}x{})",
        config.screen_width,
        config.screen_height,
    );

    let surface = HeadlessSurface::new(config.screen_bounds());
    let mut screen = ScreenController::new(&config, surface, ConsoleOverlay::default());
    let mut replayer = Replayer::new(0);
    screen.setup(replayer.now);

    let stdin = std::io::stdin();
    for (idx, line) in stdin.lock().lines().enumerate() {
        let line = line.context("reading stdin")?;
        let command = match replay::parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                log::warn!("line {}: {e:#}", idx + 1);
                continue;
            },
        };
        if replayer.run(&command, &mut screen) == ReplayResult::Quit {
            break;
        }
    }
    screen.teardown();

    let overlay = screen.overlay();
    let surface = screen.surface();
    log::info!(
        "Finished at {}ms: pointer ({}, {}) {}, page {} scrolled to {}, {} taps, {} diagnostics",
        replayer.now,
        overlay.position.0,
        overlay.position.1,
        if overlay.visible { "visible" } else { "hidden" },
        surface.current_url().unwrap_or("<none>"),
        surface.scroll_y,
        surface.taps,
        overlay.diagnostics.len()
    );
    Ok(())
}

//! Key-script replay.
//!
//! One command per line; blank lines and `#` comments are skipped.
//!
//! ```text
//! up 5            press Up five times
//! select          press OK
//! release select  key-up, passed through
//! wait 6000       let 6 s pass
//! navigate <url>  follow a link
//! loaded          the current page finished loading
//! focus | blur    window focus changes
//! quit            close the screen
//! ```

use anyhow::{Context, Result, bail};
use nhk4s_core::input::{Button, InputEvent};
use nhk4s_core::{Millis, ScreenController};

use crate::headless::{ConsoleOverlay, HeadlessSurface};

/// Simulated time between two presses of a repeated key.
pub const KEY_REPEAT_MS: Millis = 50;

/// A parsed script line.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplayCommand {
    Press(Button, u32),
    Release(Button),
    Wait(Millis),
    Navigate(String),
    Loaded,
    Focus,
    Blur,
    Quit,
}

/// Result of running a single command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayResult {
    Continue,
    Quit,
}

/// The screen as wired up by the headless host.
pub type HeadlessScreen = ScreenController<HeadlessSurface, ConsoleOverlay>;

/// Parse one script line. Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<ReplayCommand>> {
    let line = strip_comment(line).trim();
    if line.is_empty() {
        return Ok(None);
    }
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();

    let command = match verb.to_ascii_lowercase().as_str() {
        "wait" => {
            let ms = arg.context("wait needs a duration in ms")?;
            ReplayCommand::Wait(ms.parse().with_context(|| format!("bad duration {ms:?}"))?)
        },
        "release" => {
            let name = arg.context("release needs a button")?;
            let button =
                Button::from_name(name).with_context(|| format!("unknown button {name:?}"))?;
            ReplayCommand::Release(button)
        },
        "navigate" => ReplayCommand::Navigate(arg.context("navigate needs a URL")?.to_string()),
        "loaded" => ReplayCommand::Loaded,
        "focus" => ReplayCommand::Focus,
        "blur" => ReplayCommand::Blur,
        "quit" => ReplayCommand::Quit,
        name => {
            let Some(button) = Button::from_name(name) else {
                bail!("unknown command {verb:?}");
            };
            let count = match arg {
                Some(n) => n.parse().with_context(|| format!("bad repeat count {n:?}"))?,
                None => 1,
            };
            ReplayCommand::Press(button, count)
        },
    };
    Ok(Some(command))
}

/// A `#` starts a comment at the beginning of a line or after whitespace,
/// so URL fragments survive.
fn strip_comment(line: &str) -> &str {
    if line.trim_start().starts_with('#') {
        return "";
    }
    match line.find(" #").or_else(|| line.find("\t#")) {
        Some(i) => &line[..i],
        None => line,
    }
}

/// Drives a [`ScreenController`] from script commands on a virtual clock.
pub struct Replayer {
    pub now: Millis,
}

impl Replayer {
    pub fn new(start: Millis) -> Self {
        Self { now: start }
    }

    pub fn run(&mut self, command: &ReplayCommand, screen: &mut HeadlessScreen) -> ReplayResult {
        match command {
            ReplayCommand::Press(button, count) => {
                for _ in 0..*count {
                    self.advance(KEY_REPEAT_MS, screen);
                    let outcome = screen.handle_event(&InputEvent::ButtonPress(*button), self.now);
                    log::debug!("{button:?} -> {outcome:?}");
                }
            },
            ReplayCommand::Release(button) => {
                screen.handle_event(&InputEvent::ButtonRelease(*button), self.now);
            },
            ReplayCommand::Wait(ms) => self.advance(*ms, screen),
            ReplayCommand::Navigate(url) => {
                if !screen.navigate(url) {
                    log::info!("navigation to {url} blocked");
                }
            },
            ReplayCommand::Loaded => {
                let url = screen.surface().current_url().unwrap_or_default().to_string();
                if let Some(probe) = screen.on_page_finished(&url) {
                    log::info!(
                        "page {}px of {}px view, scrollable={}",
                        probe.page_height,
                        probe.view_height,
                        probe.is_scrollable
                    );
                }
            },
            ReplayCommand::Focus => {
                screen.handle_event(&InputEvent::FocusGained, self.now);
            },
            ReplayCommand::Blur => {
                screen.handle_event(&InputEvent::FocusLost, self.now);
            },
            ReplayCommand::Quit => {
                screen.handle_event(&InputEvent::Quit, self.now);
                return ReplayResult::Quit;
            },
        }
        ReplayResult::Continue
    }

    /// Move the clock forward, letting the hide timer fire on the way.
    fn advance(&mut self, ms: Millis, screen: &mut HeadlessScreen) {
        self.now = self.now.saturating_add(ms);
        screen.tick(self.now);
    }
}

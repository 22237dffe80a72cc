//! The pointer screen: remote input in, surface and overlay commands out.
//!
//! [`ScreenController`] owns the pointer, the double-press tracker and the
//! hide timer, runs the pure transitions from [`crate::pointer`], and carries
//! out the resulting effects against the host's collaborators.

use crate::allowlist::AllowList;
use crate::config::{Nhk4sConfig, PointerConfig, SurfaceSettings};
use crate::input::{Button, InputEvent};
use crate::pointer::{self, GestureTimerState, PointerEffect, PointerState};
use crate::surface::{PointerOverlay, RenderingSurface, SCROLL_PROBE_SCRIPT, ScrollProbe};
use crate::tap::SyntheticTap;
use crate::timer::{HideTimer, Millis};

/// Whether the screen consumed an input event.
///
/// `Unhandled` tells the host to run its default handling (for example,
/// closing the screen on Back when there is no page history).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    Unhandled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Active,
    TornDown,
}

/// Pointer-navigation controller bound to a rendering surface and overlay.
pub struct ScreenController<S, O> {
    config: PointerConfig,
    home_url: String,
    settings: SurfaceSettings,
    allow_list: AllowList,
    surface: S,
    overlay: O,
    pointer: PointerState,
    gestures: GestureTimerState,
    hide_timer: HideTimer,
    lifecycle: Lifecycle,
}

impl<S: RenderingSurface, O: PointerOverlay> ScreenController<S, O> {
    pub fn new(config: &Nhk4sConfig, surface: S, overlay: O) -> Self {
        let pointer = pointer::initialize(surface.screen_bounds(), &config.pointer);
        Self {
            config: config.pointer.clone(),
            home_url: config.browser.home_url.clone(),
            settings: config.browser.settings.clone(),
            allow_list: AllowList::new(&config.browser.allowed_domains),
            surface,
            overlay,
            pointer,
            gestures: GestureTimerState::default(),
            hide_timer: HideTimer::new(config.pointer.hide_delay_ms),
            lifecycle: Lifecycle::Created,
        }
    }

    /// One-time screen setup: configure the browser, take key focus, center
    /// the pointer, start the hide countdown and load the home page.
    pub fn setup(&mut self, now: Millis) {
        if self.lifecycle != Lifecycle::Created {
            log::warn!("setup called twice, ignoring");
            return;
        }
        self.lifecycle = Lifecycle::Active;

        self.surface.apply_settings(&self.settings);
        self.overlay.request_key_focus();

        let bounds = self.surface.screen_bounds();
        self.pointer = pointer::initialize(bounds, &self.config);
        self.overlay.set_position(self.pointer.x, self.pointer.y);
        self.overlay.set_visible(true);
        self.hide_timer.schedule(now);

        let home = self.home_url.clone();
        if !self.navigate(&home) {
            log::warn!("Home URL {home} is outside the allow-list");
        }
        log::info!(
            "Pointer screen ready ({}x{}, pointer at {}, {})",
            bounds.width,
            bounds.height,
            self.pointer.x,
            self.pointer.y
        );
    }

    /// Dispatch a host input event.
    pub fn handle_event(&mut self, event: &InputEvent, now: Millis) -> KeyOutcome {
        match event {
            InputEvent::ButtonPress(button) => self.handle_button(*button, now),
            InputEvent::FocusGained if self.is_active() => {
                self.overlay.request_key_focus();
                KeyOutcome::Handled
            },
            InputEvent::Quit => {
                self.teardown();
                KeyOutcome::Unhandled
            },
            InputEvent::ButtonRelease(_) | InputEvent::FocusGained | InputEvent::FocusLost => {
                KeyOutcome::Unhandled
            },
        }
    }

    /// Handle a remote button press (key-down or auto-repeat).
    pub fn handle_button(&mut self, button: Button, now: Millis) -> KeyOutcome {
        if !self.is_active() {
            return KeyOutcome::Unhandled;
        }

        if let Some(direction) = button.direction() {
            let bounds = self.surface.screen_bounds();
            let (next, effects) =
                pointer::move_pointer(self.pointer, direction, bounds, &self.config);
            if (next.x, next.y) != (self.pointer.x, self.pointer.y) {
                self.overlay.set_position(next.x, next.y);
            }
            self.pointer = next;
            self.apply(effects, now);
            return KeyOutcome::Handled;
        }

        match button {
            Button::Select => {
                let (gestures, effects) =
                    pointer::select(&self.pointer, self.gestures, now, &self.config);
                self.gestures = gestures;
                self.apply(effects, now);
            },
            Button::PageUp => {
                let effect = pointer::page_up(self.surface.screen_bounds());
                self.apply(vec![effect], now);
            },
            Button::PageDown => {
                let effect = pointer::page_down(self.surface.screen_bounds());
                self.apply(vec![effect], now);
            },
            Button::Home => self.surface.scroll_to_top(),
            Button::End => self.surface.scroll_to_bottom(),
            Button::Back => {
                if !self.surface.can_navigate_back() {
                    return KeyOutcome::Unhandled;
                }
                self.surface.navigate_back();
            },
            Button::Up | Button::Down | Button::Left | Button::Right => {},
        }
        KeyOutcome::Handled
    }

    /// Advance time. Hides the pointer once the idle deadline has passed.
    pub fn tick(&mut self, now: Millis) {
        if !self.is_active() || !self.hide_timer.poll(now) {
            return;
        }
        self.pointer = pointer::on_hide_timer_fired(self.pointer);
        self.overlay.set_visible(false);
        log::debug!("pointer hidden after {}ms idle", self.config.hide_delay_ms);
    }

    /// Load `url` if the allow-list permits it.
    ///
    /// Disallowed URLs are dropped without telling the user; returns whether
    /// the load was issued.
    pub fn navigate(&mut self, url: &str) -> bool {
        if !self.is_active() {
            return false;
        }
        if !self.allow_list.is_allowed(url) {
            log::debug!("navigation to {url} blocked");
            return false;
        }
        self.surface.load_document(url);
        true
    }

    /// Called by the host when a document finishes loading. Probes whether
    /// the page can scroll and logs the result.
    pub fn on_page_finished(&mut self, url: &str) -> Option<ScrollProbe> {
        if !self.is_active() {
            return None;
        }
        let raw = self.surface.run_script(SCROLL_PROBE_SCRIPT)?;
        match ScrollProbe::parse(&raw) {
            Ok(probe) => {
                log::debug!(
                    "{url}: page {}px, view {}px, scrollable={}, top={}",
                    probe.page_height,
                    probe.view_height,
                    probe.is_scrollable,
                    probe.current_scroll_top
                );
                Some(probe)
            },
            Err(e) => {
                log::debug!("{url}: unreadable scroll probe: {e}");
                None
            },
        }
    }

    /// Cancel all pending timers. Every later call is a no-op.
    pub fn teardown(&mut self) {
        if self.lifecycle == Lifecycle::TornDown {
            return;
        }
        self.hide_timer.cancel();
        self.gestures = GestureTimerState::default();
        self.lifecycle = Lifecycle::TornDown;
        log::info!("Pointer screen torn down");
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Active
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn gestures(&self) -> GestureTimerState {
        self.gestures
    }

    pub fn hide_deadline(&self) -> Option<Millis> {
        self.hide_timer.deadline()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    fn apply(&mut self, effects: Vec<PointerEffect>, now: Millis) {
        for effect in effects {
            match effect {
                PointerEffect::ScrollBy(dy) => self.surface.scroll_by(dy),
                PointerEffect::ShowPointer => self.show(now),
                PointerEffect::Tap(tap) => self.dispatch_tap(&tap),
                PointerEffect::ToggleFullscreenPlayback => {
                    self.surface.toggle_fullscreen_playback()
                },
            }
        }
    }

    fn show(&mut self, now: Millis) {
        if !self.pointer.visible {
            self.pointer.visible = true;
            self.overlay.set_visible(true);
        }
        self.hide_timer.schedule(now);
    }

    fn dispatch_tap(&mut self, tap: &SyntheticTap) {
        log::debug!("tap at ({}, {})", tap.x, tap.y);
        if let Err(e) = self.surface.dispatch_synthetic_tap(tap) {
            log::warn!("tap at ({}, {}) failed: {e}", tap.x, tap.y);
            self.overlay.report_diagnostic(&format!("Click failed: {e}"));
        }
    }
}

//! Headless stand-ins for the browser view and the pointer overlay.
//!
//! Nothing is rendered; each call updates a small simulated page model and
//! is logged, so a replayed key script shows exactly what a real host would
//! have been asked to do.

use nhk4s_core::config::SurfaceSettings;
use nhk4s_core::error::DispatchError;
use nhk4s_core::geometry::ScreenBounds;
use nhk4s_core::surface::{
    SCROLL_PROBE_SCRIPT, SCROLL_TO_BOTTOM_SCRIPT, SCROLL_TO_TOP_SCRIPT, TOGGLE_PLAYBACK_SCRIPT,
};
use nhk4s_core::{PointerOverlay, RenderingSurface, SyntheticTap};

/// Simulated pages are this many screens tall.
const PAGE_SCREENS: i32 = 4;

/// A browser surface that tracks scroll offset, history and playback.
pub struct HeadlessSurface {
    bounds: ScreenBounds,
    history: Vec<String>,
    pub scroll_y: i32,
    pub playing: bool,
    pub fullscreen: bool,
    pub taps: usize,
}

impl HeadlessSurface {
    pub fn new(bounds: ScreenBounds) -> Self {
        Self {
            bounds,
            history: Vec::new(),
            scroll_y: 0,
            playing: false,
            fullscreen: false,
            taps: 0,
        }
    }

    pub fn current_url(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    fn view_height(&self) -> i32 {
        i32::try_from(self.bounds.height).unwrap_or(i32::MAX)
    }

    fn page_height(&self) -> i32 {
        self.view_height().saturating_mul(PAGE_SCREENS)
    }

    fn max_scroll(&self) -> i32 {
        self.page_height().saturating_sub(self.view_height()).max(0)
    }
}

impl RenderingSurface for HeadlessSurface {
    fn screen_bounds(&self) -> ScreenBounds {
        self.bounds
    }

    fn apply_settings(&mut self, settings: &SurfaceSettings) {
        log::info!(
            "surface settings: js={} dom_storage={} autoplay={} mixed_content={} zoom={}",
            settings.javascript_enabled,
            settings.dom_storage_enabled,
            !settings.media_playback_requires_user_gesture,
            settings.mixed_content_allowed,
            settings.zoom_supported
        );
    }

    fn load_document(&mut self, url: &str) {
        log::info!("load {url}");
        self.history.push(url.to_string());
        self.scroll_y = 0;
    }

    fn can_navigate_back(&self) -> bool {
        self.history.len() > 1
    }

    fn navigate_back(&mut self) {
        self.history.pop();
        self.scroll_y = 0;
        log::info!("back to {}", self.current_url().unwrap_or("<none>"));
    }

    fn scroll_by(&mut self, dy: i32) {
        self.scroll_y = self.scroll_y.saturating_add(dy).clamp(0, self.max_scroll());
        log::info!("scroll by {dy} -> {}", self.scroll_y);
    }

    fn dispatch_synthetic_tap(&mut self, tap: &SyntheticTap) -> Result<(), DispatchError> {
        if self.history.is_empty() {
            return Err(DispatchError("no document loaded".to_string()));
        }
        let (x, y) = tap.pixel();
        let [down, up] = tap.touch_events(0);
        log::info!(
            "tap at ({x}, {y}) down@{}ms up@{}ms, page y {}",
            down.at,
            up.at,
            y + self.scroll_y
        );
        self.taps += 1;
        Ok(())
    }

    fn run_script(&mut self, code: &str) -> Option<String> {
        if code == SCROLL_PROBE_SCRIPT {
            return Some(format!(
                r#"{{"pageHeight":{},"viewHeight":{},"isScrollable":{},"currentScrollTop":{}}}"#,
                self.page_height(),
                self.bounds.height,
                self.max_scroll() > 0,
                self.scroll_y
            ));
        }
        if code == TOGGLE_PLAYBACK_SCRIPT {
            self.fullscreen = !self.fullscreen;
            self.playing = !self.playing;
            let state = if self.playing { "playing" } else { "paused" };
            log::info!("video {state}, fullscreen={}", self.fullscreen);
            return Some(state.to_string());
        }
        if code == SCROLL_TO_TOP_SCRIPT {
            self.scroll_y = 0;
        } else if code == SCROLL_TO_BOTTOM_SCRIPT {
            self.scroll_y = self.max_scroll();
        } else {
            log::debug!("ignoring script ({} bytes)", code.len());
            return None;
        }
        log::info!("scroll to {}", self.scroll_y);
        None
    }
}

/// An overlay that remembers the glyph state and logs changes.
#[derive(Debug, Default)]
pub struct ConsoleOverlay {
    pub position: (f32, f32),
    pub visible: bool,
    pub diagnostics: Vec<String>,
}

impl PointerOverlay for ConsoleOverlay {
    fn set_position(&mut self, x: f32, y: f32) {
        self.position = (x, y);
        log::debug!("pointer at ({x}, {y})");
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        log::info!("pointer {}", if visible { "shown" } else { "hidden" });
    }

    fn request_key_focus(&mut self) {
        log::debug!("key focus claimed");
    }

    fn report_diagnostic(&mut self, message: &str) {
        log::warn!("{message}");
        self.diagnostics.push(message.to_string());
    }
}

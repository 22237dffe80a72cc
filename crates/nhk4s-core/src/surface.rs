//! Collaborator traits.
//!
//! The pointer controller never talks to a platform API directly. The host
//! implements [`RenderingSurface`] for its embedded browser and
//! [`PointerOverlay`] for the view that draws the pointer glyph. All calls
//! are fire-and-forget except [`RenderingSurface::dispatch_synthetic_tap`],
//! which the host may reject.

use serde::Deserialize;

use crate::config::SurfaceSettings;
use crate::error::{DispatchError, Result};
use crate::geometry::ScreenBounds;
use crate::tap::SyntheticTap;

/// Toggles fullscreen on the page's first video and flips play/pause.
pub const TOGGLE_PLAYBACK_SCRIPT: &str = r#"(function() {
  var v = document.querySelector('video');
  if (!v) { return 'no-video'; }
  if (document.fullscreenElement) {
    document.exitFullscreen();
  } else if (v.requestFullscreen) {
    v.requestFullscreen();
  }
  if (v.paused) { v.play(); return 'playing'; }
  v.pause();
  return 'paused';
})();"#;

pub const SCROLL_TO_TOP_SCRIPT: &str = "window.scrollTo(0, 0);";

pub const SCROLL_TO_BOTTOM_SCRIPT: &str = "window.scrollTo(0, document.body.scrollHeight);";

/// Reports page and viewport heights as JSON once a document has loaded.
pub const SCROLL_PROBE_SCRIPT: &str = r#"(function() {
  var body = document.body;
  var html = document.documentElement;
  var pageHeight = Math.max(body.scrollHeight, body.offsetHeight,
                            html.clientHeight, html.scrollHeight, html.offsetHeight);
  var viewHeight = window.innerHeight;
  return JSON.stringify({
    pageHeight: pageHeight,
    viewHeight: viewHeight,
    isScrollable: pageHeight > viewHeight,
    currentScrollTop: window.pageYOffset || html.scrollTop
  });
})();"#;

/// The embedded browser showing the site.
pub trait RenderingSurface {
    /// Current display size. Queried on every pointer operation.
    fn screen_bounds(&self) -> ScreenBounds;

    /// Apply rendering settings. Called once during setup.
    fn apply_settings(&mut self, settings: &SurfaceSettings);

    fn load_document(&mut self, url: &str);

    fn can_navigate_back(&self) -> bool;

    fn navigate_back(&mut self);

    /// Scroll the document vertically; negative is up.
    fn scroll_by(&mut self, dy: i32);

    /// Inject a touch-down/touch-up pair at the tap point.
    fn dispatch_synthetic_tap(
        &mut self,
        tap: &SyntheticTap,
    ) -> std::result::Result<(), DispatchError>;

    /// Evaluate a script in the current document.
    ///
    /// Returns the script's string result when the host can deliver it
    /// synchronously, `None` otherwise.
    fn run_script(&mut self, code: &str) -> Option<String>;

    fn toggle_fullscreen_playback(&mut self) {
        let result = self.run_script(TOGGLE_PLAYBACK_SCRIPT);
        log::debug!("toggle playback: {result:?}");
    }

    fn scroll_to_top(&mut self) {
        self.run_script(SCROLL_TO_TOP_SCRIPT);
    }

    fn scroll_to_bottom(&mut self) {
        self.run_script(SCROLL_TO_BOTTOM_SCRIPT);
    }
}

/// The view that draws the pointer glyph above the browser.
pub trait PointerOverlay {
    /// Move the glyph's top-left anchor.
    fn set_position(&mut self, x: f32, y: f32);

    fn set_visible(&mut self, visible: bool);

    /// Route remote key events to the screen instead of the browser.
    /// Called once during setup and again when focus returns.
    fn request_key_focus(&mut self);

    /// Show a short user-visible message (a toast on Android).
    fn report_diagnostic(&mut self, message: &str);
}

/// Result of [`SCROLL_PROBE_SCRIPT`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollProbe {
    pub page_height: f64,
    pub view_height: f64,
    pub is_scrollable: bool,
    #[serde(default)]
    pub current_scroll_top: f64,
}

impl ScrollProbe {
    /// Parse the probe result.
    ///
    /// WebView hands back script results JSON-encoded, so a returned string
    /// arrives double-quoted; both that form and the bare object are
    /// accepted.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.starts_with('"') {
            let inner: String = serde_json::from_str(raw)?;
            return Ok(serde_json::from_str(&inner)?);
        }
        Ok(serde_json::from_str(raw)?)
    }
}

//! Shared test doubles for the controller.
//!
//! [`MockSurface`] and [`MockOverlay`] record every call so tests can assert
//! on exactly what the controller asked the host to do.

use crate::config::SurfaceSettings;
use crate::error::DispatchError;
use crate::geometry::ScreenBounds;
use crate::surface::{PointerOverlay, RenderingSurface};
use crate::tap::SyntheticTap;

/// A recorded rendering-surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    ApplySettings(SurfaceSettings),
    Load(String),
    Back,
    ScrollBy(i32),
    Tap(SyntheticTap),
    RunScript(String),
}

pub struct MockSurface {
    pub bounds: ScreenBounds,
    pub calls: Vec<SurfaceCall>,
    /// Pages that `navigate_back` can still return to.
    pub history_depth: usize,
    /// When set, every synthetic tap is refused with this reason.
    pub reject_taps: Option<String>,
    /// Returned from every `run_script` call.
    pub script_result: Option<String>,
}

impl MockSurface {
    pub fn new(bounds: ScreenBounds) -> Self {
        Self {
            bounds,
            calls: Vec::new(),
            history_depth: 0,
            reject_taps: None,
            script_result: None,
        }
    }

    pub fn scrolls(&self) -> Vec<i32> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::ScrollBy(dy) => Some(*dy),
                _ => None,
            })
            .collect()
    }

    pub fn taps(&self) -> Vec<SyntheticTap> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::Tap(t) => Some(*t),
                _ => None,
            })
            .collect()
    }

    pub fn loads(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::Load(url) => Some(url.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn scripts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::RunScript(code) => Some(code.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl RenderingSurface for MockSurface {
    fn screen_bounds(&self) -> ScreenBounds {
        self.bounds
    }

    fn apply_settings(&mut self, settings: &SurfaceSettings) {
        self.calls.push(SurfaceCall::ApplySettings(settings.clone()));
    }

    fn load_document(&mut self, url: &str) {
        self.calls.push(SurfaceCall::Load(url.to_string()));
    }

    fn can_navigate_back(&self) -> bool {
        self.history_depth > 0
    }

    fn navigate_back(&mut self) {
        self.history_depth = self.history_depth.saturating_sub(1);
        self.calls.push(SurfaceCall::Back);
    }

    fn scroll_by(&mut self, dy: i32) {
        self.calls.push(SurfaceCall::ScrollBy(dy));
    }

    fn dispatch_synthetic_tap(&mut self, tap: &SyntheticTap) -> Result<(), DispatchError> {
        self.calls.push(SurfaceCall::Tap(*tap));
        match &self.reject_taps {
            Some(reason) => Err(DispatchError(reason.clone())),
            None => Ok(()),
        }
    }

    fn run_script(&mut self, code: &str) -> Option<String> {
        self.calls.push(SurfaceCall::RunScript(code.to_string()));
        self.script_result.clone()
    }
}

/// A recorded overlay call.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayCall {
    Position(f32, f32),
    Visible(bool),
    Focus,
    Diagnostic(String),
}

#[derive(Default)]
pub struct MockOverlay {
    pub calls: Vec<OverlayCall>,
}

impl MockOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent position pushed to the overlay.
    pub fn last_position(&self) -> Option<(f32, f32)> {
        self.calls.iter().rev().find_map(|c| match c {
            OverlayCall::Position(x, y) => Some((*x, *y)),
            _ => None,
        })
    }

    /// Most recent visibility pushed to the overlay.
    pub fn last_visible(&self) -> Option<bool> {
        self.calls.iter().rev().find_map(|c| match c {
            OverlayCall::Visible(v) => Some(*v),
            _ => None,
        })
    }

    pub fn diagnostics(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                OverlayCall::Diagnostic(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl PointerOverlay for MockOverlay {
    fn set_position(&mut self, x: f32, y: f32) {
        self.calls.push(OverlayCall::Position(x, y));
    }

    fn set_visible(&mut self, visible: bool) {
        self.calls.push(OverlayCall::Visible(visible));
    }

    fn request_key_focus(&mut self) {
        self.calls.push(OverlayCall::Focus);
    }

    fn report_diagnostic(&mut self, message: &str) {
        self.calls.push(OverlayCall::Diagnostic(message.to_string()));
    }
}

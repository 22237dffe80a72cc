//! NHK4S pointer-navigation core.
//!
//! TV remotes have no pointing device, so the screen draws a pointer glyph
//! over an embedded browser and moves it with the D-pad. This crate holds
//! the rules for that pointer (clamping, edge-triggered scrolling,
//! double-press detection, idle auto-hide) and the collaborator traits the
//! host implements for its browser and overlay views.

// Re-exports from nhk4s-types (foundation types).
pub use nhk4s_types::config;
pub use nhk4s_types::error;
pub use nhk4s_types::geometry;
pub use nhk4s_types::input;

pub mod allowlist;
pub mod pointer;
pub mod screen;
pub mod surface;
pub mod tap;
pub mod timer;

#[cfg(test)]
pub(crate) mod test_utils;

pub use allowlist::AllowList;
pub use pointer::{GestureTimerState, PointerEffect, PointerState};
pub use screen::{KeyOutcome, ScreenController};
pub use surface::{PointerOverlay, RenderingSurface, ScrollProbe};
pub use tap::SyntheticTap;
pub use timer::{HideTimer, Millis};

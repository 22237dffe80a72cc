//! Pointer state and its transition functions.
//!
//! Every function here is pure: it takes the current state plus the screen
//! size and returns the next state and a list of [`PointerEffect`]s for the
//! screen controller to carry out. Nothing in this module touches the
//! rendering surface or the overlay, which keeps the movement rules testable
//! without a display.

use crate::config::PointerConfig;
use crate::geometry::ScreenBounds;
use crate::input::Direction;
use crate::tap::SyntheticTap;
use crate::timer::Millis;

/// Position (top-left anchor, in pixels) and visibility of the pointer glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub visible: bool,
}

impl PointerState {
    /// The point a tap should land on: the anchor shifted by half the glyph.
    pub fn center(&self, glyph_size: f32) -> (f32, f32) {
        let half = glyph_size / 2.0;
        (self.x + half, self.y + half)
    }

    /// This state with both coordinates pinned inside the screen.
    pub fn clamped(self, bounds: ScreenBounds, margin: f32) -> Self {
        Self {
            x: self.x.clamp(0.0, bounds.max_x(margin)),
            y: self.y.clamp(0.0, bounds.max_y(margin)),
            visible: self.visible,
        }
    }
}

/// Timestamp of the last select press that could still start a double press.
///
/// `None` means no press is pending: either nothing was pressed yet or the
/// last press already completed a double press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GestureTimerState {
    pub last_center_press: Option<Millis>,
}

/// A command produced by a pointer transition.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEffect {
    /// Scroll the rendering surface vertically (negative is up).
    ScrollBy(i32),
    /// Make the pointer visible and restart the idle countdown.
    ShowPointer,
    /// Synthesize a touch-down/touch-up pair.
    Tap(SyntheticTap),
    /// Toggle fullscreen and play/pause of the page's video.
    ToggleFullscreenPlayback,
}

/// Pointer placed at the center of the screen, visible.
pub fn initialize(bounds: ScreenBounds, config: &PointerConfig) -> PointerState {
    let (x, y) = bounds.center();
    PointerState {
        x,
        y,
        visible: true,
    }
    .clamped(bounds, config.margin)
}

/// Move the pointer one step.
///
/// The candidate coordinate saturates at the screen edges. Vertical moves
/// that end within `scroll_threshold` of the edge they travel toward also
/// scroll the page by `scroll_amount`, since the pointer itself cannot leave
/// the viewport. A [`PointerEffect::ShowPointer`] is always emitted, even when
/// the pointer is already pinned and did not move.
pub fn move_pointer(
    state: PointerState,
    direction: Direction,
    bounds: ScreenBounds,
    config: &PointerConfig,
) -> (PointerState, Vec<PointerEffect>) {
    let delta = direction.sign() * config.step;
    let mut next = state;
    if direction.is_vertical() {
        next.y += delta;
    } else {
        next.x += delta;
    }
    let next = next.clamped(bounds, config.margin);

    let mut effects = Vec::with_capacity(2);
    match direction {
        Direction::Up if next.y <= config.scroll_threshold => {
            log::debug!("pointer near top (y={}), scrolling up", next.y);
            effects.push(PointerEffect::ScrollBy(-config.scroll_amount));
        },
        Direction::Down if bounds.height as f32 - next.y <= config.scroll_threshold => {
            log::debug!(
                "pointer near bottom (distance={}), scrolling down",
                bounds.height as f32 - next.y
            );
            effects.push(PointerEffect::ScrollBy(config.scroll_amount));
        },
        _ => {},
    }
    effects.push(PointerEffect::ShowPointer);
    (next, effects)
}

/// Handle the select (center) button.
///
/// A press within `double_press_window_ms` of the previous one toggles
/// fullscreen playback and clears the pending press, so a third quick press
/// starts a new pair instead of completing another. Any other press taps at
/// the pointer center.
pub fn select(
    state: &PointerState,
    gestures: GestureTimerState,
    now: Millis,
    config: &PointerConfig,
) -> (GestureTimerState, Vec<PointerEffect>) {
    let is_double = gestures
        .last_center_press
        .is_some_and(|last| now.saturating_sub(last) < config.double_press_window_ms);

    if is_double {
        log::debug!("double press at {now}ms");
        let effects = vec![
            PointerEffect::ToggleFullscreenPlayback,
            PointerEffect::ShowPointer,
        ];
        return (GestureTimerState::default(), effects);
    }

    let (x, y) = state.center(config.glyph_size);
    let tap = SyntheticTap {
        x,
        y,
        duration_ms: config.tap_duration_ms,
    };
    let gestures = GestureTimerState {
        last_center_press: Some(now),
    };
    (gestures, vec![PointerEffect::Tap(tap), PointerEffect::ShowPointer])
}

/// Scroll up by half a screen. The pointer is left alone.
pub fn page_up(bounds: ScreenBounds) -> PointerEffect {
    PointerEffect::ScrollBy(-bounds.half_height())
}

/// Scroll down by half a screen. The pointer is left alone.
pub fn page_down(bounds: ScreenBounds) -> PointerEffect {
    PointerEffect::ScrollBy(bounds.half_height())
}

/// The idle timer elapsed: hide the pointer.
pub fn on_hide_timer_fired(state: PointerState) -> PointerState {
    PointerState {
        visible: false,
        ..state
    }
}

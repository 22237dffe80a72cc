//! Synthetic taps.
//!
//! A tap is a touch-down followed by a touch-up at the same point,
//! `duration_ms` apart. Hosts turn the pair into native motion events.

use crate::timer::Millis;

/// A tap to synthesize at a screen point (the pointer glyph's center).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticTap {
    pub x: f32,
    pub y: f32,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Down,
    Up,
}

/// One half of a synthetic tap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub x: f32,
    pub y: f32,
    /// When this event happens on the host clock.
    pub at: Millis,
}

impl SyntheticTap {
    /// The down/up pair for a tap starting at `start`.
    pub fn touch_events(&self, start: Millis) -> [TouchEvent; 2] {
        [
            TouchEvent {
                phase: TouchPhase::Down,
                x: self.x,
                y: self.y,
                at: start,
            },
            TouchEvent {
                phase: TouchPhase::Up,
                x: self.x,
                y: self.y,
                at: start.saturating_add(self.duration_ms),
            },
        ]
    }

    /// Integer pixel coordinates, for hosts whose input APIs take integers.
    pub fn pixel(&self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }
}

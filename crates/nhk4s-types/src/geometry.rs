//! Screen geometry in physical pixels.

/// Display size as reported by the host.
///
/// Queried fresh for every pointer operation rather than cached, so a
/// rotation or resize is picked up on the next key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenBounds {
    pub width: u32,
    pub height: u32,
}

impl ScreenBounds {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Largest X the pointer anchor may take, keeping `margin` pixels clear
    /// of the right edge. Never negative.
    pub fn max_x(&self, margin: f32) -> f32 {
        (self.width as f32 - margin).max(0.0)
    }

    /// Largest Y the pointer anchor may take, keeping `margin` pixels clear
    /// of the bottom edge. Never negative.
    pub fn max_y(&self, margin: f32) -> f32 {
        (self.height as f32 - margin).max(0.0)
    }

    /// Screen center.
    pub fn center(&self) -> (f32, f32) {
        (self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    /// Half the screen height, the distance one page key scrolls.
    pub fn half_height(&self) -> i32 {
        (self.height / 2) as i32
    }
}

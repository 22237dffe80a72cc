//! Platform-agnostic remote-control input.
//!
//! Every host maps its native key events to these enums. The pointer
//! controller never sees raw platform key codes.

use serde::{Deserialize, Serialize};

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A remote button went down (including auto-repeat while held).
    ButtonPress(Button),
    /// A remote button was released.
    ButtonRelease(Button),
    /// The screen gained key focus.
    FocusGained,
    /// The screen lost key focus.
    FocusLost,
    /// The host is closing the screen.
    Quit,
}

/// Buttons found on a TV remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    /// D-pad center / OK.
    Select,
    Back,
    PageUp,
    PageDown,
    Home,
    End,
}

/// Axis-aligned pointer movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Android `KeyEvent` key codes the screen reacts to.
pub mod keycode {
    pub const BACK: i32 = 4;
    pub const DPAD_UP: i32 = 19;
    pub const DPAD_DOWN: i32 = 20;
    pub const DPAD_LEFT: i32 = 21;
    pub const DPAD_RIGHT: i32 = 22;
    pub const DPAD_CENTER: i32 = 23;
    pub const ENTER: i32 = 66;
    pub const PAGE_UP: i32 = 92;
    pub const PAGE_DOWN: i32 = 93;
    pub const MOVE_HOME: i32 = 122;
    pub const MOVE_END: i32 = 123;
    pub const NUMPAD_ENTER: i32 = 160;
}

impl Button {
    /// Map an Android key code to a remote button.
    ///
    /// Returns `None` for keys the screen does not handle; the host should
    /// pass those through to the platform unchanged.
    pub fn from_android_keycode(code: i32) -> Option<Self> {
        let button = match code {
            keycode::DPAD_UP => Button::Up,
            keycode::DPAD_DOWN => Button::Down,
            keycode::DPAD_LEFT => Button::Left,
            keycode::DPAD_RIGHT => Button::Right,
            keycode::DPAD_CENTER | keycode::ENTER | keycode::NUMPAD_ENTER => Button::Select,
            keycode::BACK => Button::Back,
            keycode::PAGE_UP => Button::PageUp,
            keycode::PAGE_DOWN => Button::PageDown,
            keycode::MOVE_HOME => Button::Home,
            keycode::MOVE_END => Button::End,
            _ => return None,
        };
        Some(button)
    }

    /// Parse a button from its lowercase name (`"up"`, `"page_down"`, ...).
    ///
    /// `"ok"`, `"center"` and `"enter"` are accepted as aliases for
    /// [`Button::Select`].
    pub fn from_name(name: &str) -> Option<Self> {
        let button = match name.trim().to_ascii_lowercase().as_str() {
            "up" => Button::Up,
            "down" => Button::Down,
            "left" => Button::Left,
            "right" => Button::Right,
            "select" | "ok" | "center" | "enter" => Button::Select,
            "back" => Button::Back,
            "page_up" | "pageup" => Button::PageUp,
            "page_down" | "pagedown" => Button::PageDown,
            "home" => Button::Home,
            "end" => Button::End,
            _ => return None,
        };
        Some(button)
    }

    /// The pointer movement this button requests, if it is a D-pad arrow.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Button::Up => Some(Direction::Up),
            Button::Down => Some(Direction::Down),
            Button::Left => Some(Direction::Left),
            Button::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

impl Direction {
    /// Whether movement in this direction changes the Y coordinate.
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Sign of travel along the axis: `-1.0` toward the origin, `1.0` away.
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up | Direction::Left => -1.0,
            Direction::Down | Direction::Right => 1.0,
        }
    }
}

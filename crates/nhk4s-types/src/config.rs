//! Screen configuration, loadable from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! stock NHK for School setup. Pointer distances are in physical pixels and
//! durations in milliseconds.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Nhk4sError, Result};
use crate::geometry::ScreenBounds;

/// Pointer movement and timing parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    /// Distance moved per D-pad press.
    pub step: f32,
    /// Clearance kept between the pointer anchor and the right/bottom edge.
    /// Independent of the glyph size.
    pub margin: f32,
    /// Distance from the top or bottom edge inside which vertical movement
    /// also scrolls the page.
    pub scroll_threshold: f32,
    /// Pixels scrolled per edge-triggered auto-scroll.
    pub scroll_amount: i32,
    /// Idle time before the pointer hides.
    pub hide_delay_ms: u64,
    /// Two select presses closer than this count as a double press.
    pub double_press_window_ms: u64,
    /// Gap between the synthetic touch-down and touch-up.
    pub tap_duration_ms: u64,
    /// Pointer glyph edge length; taps land at the glyph center.
    pub glyph_size: f32,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            step: 20.0,
            margin: 50.0,
            scroll_threshold: 200.0,
            scroll_amount: 60,
            hide_delay_ms: 5000,
            double_press_window_ms: 500,
            tap_duration_ms: 100,
            glyph_size: 32.0,
        }
    }
}

/// One-time rendering settings applied to the embedded browser at setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceSettings {
    pub javascript_enabled: bool,
    pub dom_storage_enabled: bool,
    pub database_enabled: bool,
    /// Allow media to start without a user gesture (needed for autoplay).
    pub media_playback_requires_user_gesture: bool,
    pub allow_file_access: bool,
    pub load_images_automatically: bool,
    /// Allow HTTP subresources on HTTPS pages.
    pub mixed_content_allowed: bool,
    /// Zoom stays off so it cannot fight with pointer scrolling.
    pub zoom_supported: bool,
    pub vertical_scroll_bar: bool,
    pub horizontal_scroll_bar: bool,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            javascript_enabled: true,
            dom_storage_enabled: true,
            database_enabled: true,
            media_playback_requires_user_gesture: false,
            allow_file_access: false,
            load_images_automatically: true,
            mixed_content_allowed: true,
            zoom_supported: false,
            vertical_scroll_bar: true,
            horizontal_scroll_bar: true,
        }
    }
}

/// Which site the screen shows and where it may navigate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Document loaded at setup.
    pub home_url: String,
    /// Domains navigation may reach. A host matches a domain exactly or as
    /// a subdomain, ignoring case.
    pub allowed_domains: Vec<String>,
    pub settings: SurfaceSettings,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            home_url: "https://www.nhk.or.jp/school/".to_string(),
            allowed_domains: vec!["nhk.or.jp".to_string(), "nhk.jp".to_string()],
            settings: SurfaceSettings::default(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Nhk4sConfig {
    /// Display size used by hosts that cannot query a real display.
    pub screen_width: u32,
    pub screen_height: u32,
    pub pointer: PointerConfig,
    pub browser: BrowserConfig,
}

impl Default for Nhk4sConfig {
    fn default() -> Self {
        Self {
            screen_width: 1920,
            screen_height: 1080,
            pointer: PointerConfig::default(),
            browser: BrowserConfig::default(),
        }
    }
}

impl Nhk4sConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// The configured display size.
    pub fn screen_bounds(&self) -> ScreenBounds {
        ScreenBounds::new(self.screen_width, self.screen_height)
    }

    /// Reject values that would break the pointer arithmetic.
    pub fn validate(&self) -> Result<()> {
        let p = &self.pointer;
        if !(p.step.is_finite() && p.step > 0.0) {
            return Err(Nhk4sError::Config(format!(
                "pointer.step must be positive, got {}",
                p.step
            )));
        }
        if !(p.margin.is_finite() && p.margin >= 0.0) {
            return Err(Nhk4sError::Config(format!(
                "pointer.margin must not be negative, got {}",
                p.margin
            )));
        }
        if !(p.scroll_threshold.is_finite() && p.scroll_threshold >= 0.0) {
            return Err(Nhk4sError::Config(format!(
                "pointer.scroll_threshold must not be negative, got {}",
                p.scroll_threshold
            )));
        }
        if p.scroll_amount < 0 {
            return Err(Nhk4sError::Config(format!(
                "pointer.scroll_amount must not be negative, got {}",
                p.scroll_amount
            )));
        }
        if p.hide_delay_ms == 0 {
            return Err(Nhk4sError::Config("pointer.hide_delay_ms must be non-zero".into()));
        }
        if !(p.glyph_size.is_finite() && p.glyph_size >= 0.0) {
            return Err(Nhk4sError::Config(format!(
                "pointer.glyph_size must not be negative, got {}",
                p.glyph_size
            )));
        }
        if self.browser.home_url.trim().is_empty() {
            return Err(Nhk4sError::Config("browser.home_url is empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_screen() {
        let cfg = Nhk4sConfig::default();
        assert_eq!(cfg.screen_bounds(), ScreenBounds::new(1920, 1080));
        assert_eq!(cfg.pointer.step, 20.0);
        assert_eq!(cfg.pointer.margin, 50.0);
        assert_eq!(cfg.pointer.scroll_threshold, 200.0);
        assert_eq!(cfg.pointer.scroll_amount, 60);
        assert_eq!(cfg.pointer.hide_delay_ms, 5000);
        assert_eq!(cfg.pointer.double_press_window_ms, 500);
        assert_eq!(cfg.pointer.tap_duration_ms, 100);
        assert_eq!(cfg.browser.home_url, "https://www.nhk.or.jp/school/");
        assert!(cfg.browser.settings.javascript_enabled);
        assert!(!cfg.browser.settings.zoom_supported);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn empty_toml_is_default() {
        let cfg = Nhk4sConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, Nhk4sConfig::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let toml = r#"
screen_width = 1280
screen_height = 720

[pointer]
step = 40.0
hide_delay_ms = 3000

[browser]
allowed_domains = ["example.org"]
"#;
        let cfg = Nhk4sConfig::from_toml_str(toml).unwrap();
        assert_eq!(cfg.screen_bounds(), ScreenBounds::new(1280, 720));
        assert_eq!(cfg.pointer.step, 40.0);
        assert_eq!(cfg.pointer.hide_delay_ms, 3000);
        assert_eq!(cfg.pointer.margin, 50.0);
        assert_eq!(cfg.browser.allowed_domains, vec!["example.org".to_string()]);
        assert_eq!(cfg.browser.home_url, "https://www.nhk.or.jp/school/");
    }

    #[test]
    fn nested_settings_table() {
        let toml = r#"
[browser.settings]
javascript_enabled = false
"#;
        let cfg = Nhk4sConfig::from_toml_str(toml).unwrap();
        assert!(!cfg.browser.settings.javascript_enabled);
        assert!(cfg.browser.settings.dom_storage_enabled);
    }

    #[test]
    fn zero_step_rejected() {
        let err = Nhk4sConfig::from_toml_str("[pointer]\nstep = 0.0\n").unwrap_err();
        assert!(matches!(err, Nhk4sError::Config(_)));
        assert!(format!("{err}").contains("pointer.step"));
    }

    #[test]
    fn negative_scroll_amount_rejected() {
        let err = Nhk4sConfig::from_toml_str("[pointer]\nscroll_amount = -5\n").unwrap_err();
        assert!(format!("{err}").contains("scroll_amount"));
    }

    #[test]
    fn zero_hide_delay_rejected() {
        let err = Nhk4sConfig::from_toml_str("[pointer]\nhide_delay_ms = 0\n").unwrap_err();
        assert!(format!("{err}").contains("hide_delay_ms"));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = Nhk4sConfig::from_toml_str("[pointer\nstep = 1").unwrap_err();
        assert!(matches!(err, Nhk4sError::TomlParse(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nhk4s.toml");
        std::fs::write(&path, "[pointer]\nmargin = 10.0\n").unwrap();
        let cfg = Nhk4sConfig::load(&path).unwrap();
        assert_eq!(cfg.pointer.margin, 10.0);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Nhk4sConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Nhk4sError::Io(_)));
    }
}

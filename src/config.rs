//! Widget configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. User config
//! files are sparse: stock defaults cover everything, and a file only
//! needs the keys it wants to override. Unknown keys are rejected to
//! catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [fade.light]
//! base = "#ffffff"          # Edge-fade gradient base, light mode
//!
//! [fade.dark]
//! base = "#17171a"          # Edge-fade gradient base, dark mode
//!
//! [motion]
//! transition_ms = 400       # Visual slide-transition duration
//! # auto_advance_ms = 5000  # Auto-advance interval; omit to disable
//!
//! [viewport]
//! tablet_min_width = 768    # Widths >= this count as tablet-and-above
//! ```
//!
//! The fade defaults are the shipped gradient bases; overriding them
//! trades away visual parity with the stock widget, which is why they are
//! config values and not constants here.

use crate::theme::{DARK_FADE_BASE, FadePalette, LIGHT_FADE_BASE, Rgb};
use crate::widget::Timing;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Widget configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetConfig {
    /// Edge-fade gradient base colors per color mode.
    pub fade: FadeConfig,
    /// Transition timing and auto-advance.
    pub motion: MotionConfig,
    /// Breakpoint threshold used when classifying a pixel width.
    pub viewport: ViewportConfig,
}

impl WidgetConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.fade.light.parse_base("fade.light.base")?;
        self.fade.dark.parse_base("fade.dark.base")?;
        if self.motion.transition_ms == 0 {
            return Err(ConfigError::Validation(
                "motion.transition_ms must be greater than zero".into(),
            ));
        }
        if let Some(interval) = self.motion.auto_advance_ms {
            if interval <= self.motion.transition_ms {
                return Err(ConfigError::Validation(
                    "motion.auto_advance_ms must exceed motion.transition_ms".into(),
                ));
            }
        }
        if self.viewport.tablet_min_width == 0 {
            return Err(ConfigError::Validation(
                "viewport.tablet_min_width must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// The fade palette this config describes. Call after [`validate`];
    /// an unparseable hex falls back to the shipped base rather than
    /// panicking.
    ///
    /// [`validate`]: WidgetConfig::validate
    pub fn fade_palette(&self) -> FadePalette {
        FadePalette {
            light: Rgb::from_hex(&self.fade.light.base).unwrap_or(LIGHT_FADE_BASE),
            dark: Rgb::from_hex(&self.fade.dark.base).unwrap_or(DARK_FADE_BASE),
        }
    }

    /// Timing knobs for [`CarouselWidget::mount`](crate::widget::CarouselWidget::mount).
    pub fn timing(&self) -> Timing {
        Timing {
            transition_ms: self.motion.transition_ms,
            auto_advance_ms: self.motion.auto_advance_ms,
        }
    }
}

/// Edge-fade gradient base colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FadeConfig {
    pub light: FadeBase,
    pub dark: FadeBase,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            light: FadeBase {
                base: LIGHT_FADE_BASE.to_hex(),
            },
            dark: FadeBase {
                base: DARK_FADE_BASE.to_hex(),
            },
        }
    }
}

/// One mode's gradient base color as a `#rrggbb` string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FadeBase {
    pub base: String,
}

impl FadeBase {
    fn parse_base(&self, key: &str) -> Result<Rgb, ConfigError> {
        Rgb::from_hex(&self.base).ok_or_else(|| {
            ConfigError::Validation(format!("{key} must be a #rrggbb hex color"))
        })
    }
}

/// Transition timing and auto-advance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    /// Visual slide-transition duration in milliseconds.
    pub transition_ms: u64,
    /// Auto-advance interval in milliseconds. Absent = no auto-advance.
    /// Must exceed `transition_ms` so a tick never lands inside its own
    /// transition.
    pub auto_advance_ms: Option<u64>,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            transition_ms: 400,
            auto_advance_ms: None,
        }
    }
}

/// Breakpoint threshold settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewportConfig {
    /// Pixel widths at or above this classify as tablet-and-above.
    pub tablet_min_width: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            tablet_min_width: 768,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(WidgetConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<WidgetConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match load_raw_config(root)? {
        Some(overlay) => merge_toml(base, overlay),
        None => base,
    };
    let config: WidgetConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Gliderail Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Edge-fade overlay
# ---------------------------------------------------------------------------
# Base color of the gradient that fades partially visible neighboring
# slides into the page background. One base per color mode; the alpha ramp
# itself is fixed. Overriding these trades away visual parity with the
# stock widget.
[fade.light]
base = "#ffffff"

[fade.dark]
base = "#17171a"

# ---------------------------------------------------------------------------
# Motion
# ---------------------------------------------------------------------------
[motion]
# Visual slide-transition duration, milliseconds.
transition_ms = 400

# Auto-advance interval, milliseconds. Must exceed transition_ms.
# Omit or comment out to disable auto-advance.
# auto_advance_ms = 5000

# ---------------------------------------------------------------------------
# Viewport
# ---------------------------------------------------------------------------
[viewport]
# Pixel widths at or above this classify as tablet-and-above, which is
# what gates the arrow controls and the edge-fade overlay.
tablet_min_width = 768
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_matches_shipped_constants() {
        let config = WidgetConfig::default();
        assert_eq!(config.fade.light.base, "#ffffff");
        assert_eq!(config.fade.dark.base, "#17171a");
        assert_eq!(config.motion.transition_ms, 400);
        assert_eq!(config.motion.auto_advance_ms, None);
        assert_eq!(config.viewport.tablet_min_width, 768);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn default_palette_is_the_contract_palette() {
        let palette = WidgetConfig::default().fade_palette();
        assert_eq!(palette.dark, Rgb::new(23, 23, 26));
        assert_eq!(palette.light, Rgb::new(255, 255, 255));
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[fade.dark]
base = "#101014"
"##;
        let config: WidgetConfig = toml::from_str(toml).unwrap();
        // Overridden value
        assert_eq!(config.fade.dark.base, "#101014");
        // Default values preserved
        assert_eq!(config.fade.light.base, "#ffffff");
        assert_eq!(config.motion.transition_ms, 400);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let toml = r##"
[motion]
transition_ms = 300
easing = "bounce"
"##;
        assert!(toml::from_str::<WidgetConfig>(toml).is_err());
    }

    #[test]
    fn zero_transition_is_rejected() {
        let mut config = WidgetConfig::default();
        config.motion.transition_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn auto_advance_must_exceed_transition() {
        let mut config = WidgetConfig::default();
        config.motion.auto_advance_ms = Some(400);
        assert!(config.validate().is_err());
        config.motion.auto_advance_ms = Some(401);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn bad_hex_is_rejected() {
        let mut config = WidgetConfig::default();
        config.fade.dark.base = "17171a".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("fade.dark.base"));
    }

    #[test]
    fn merge_preserves_base_keys_not_in_overlay() {
        let base = stock_defaults_value();
        let overlay: toml::Value = toml::from_str("[motion]\ntransition_ms = 250").unwrap();
        let merged = merge_toml(base, overlay);
        let config: WidgetConfig = merged.try_into().unwrap();
        assert_eq!(config.motion.transition_ms, 250);
        assert_eq!(config.viewport.tablet_min_width, 768);
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.fade.dark.base, "#17171a");
    }

    #[test]
    fn load_config_merges_user_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[motion]\nauto_advance_ms = 6000\n",
        )
        .unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.motion.auto_advance_ms, Some(6000));
        assert_eq!(config.motion.transition_ms, 400);
    }

    #[test]
    fn load_config_rejects_invalid_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[viewport]\ntablet_min_width = 0\n",
        )
        .unwrap();
        assert!(load_config(tmp.path()).is_err());
    }

    #[test]
    fn stock_toml_parses_back_to_defaults() {
        let config: WidgetConfig = toml::from_str(stock_config_toml()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.motion.transition_ms, 400);
    }
}

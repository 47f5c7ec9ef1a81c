//! Color modes and the edge-fade gradient palette.
//!
//! The fade overlay's gradient is the only theme-dependent part of the
//! widget. The mapping from color mode to gradient stops is an explicit
//! enum-keyed table rather than ambient style state, so the render
//! function stays pure and the exact stop values are unit-testable.
//!
//! ## The alpha ramp
//!
//! The overlay spans the full carousel width. It is opaque at the very
//! edges, fades to fully transparent by 25% inward, stays transparent
//! through the middle half, and ramps back to opaque over the final 25% —
//! fading partially visible neighboring slides into the page background
//! without a hard cutoff. The stop positions and alphas are part of the
//! visual contract and must not drift.

use serde::{Deserialize, Serialize};

/// Color mode supplied by the host's theme provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Lenient parsing for CLI/host input: unrecognized labels map to
    /// `Light`, the safe default, rather than erroring.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    /// CSS class the demo page scopes its custom properties under.
    pub fn css_class(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// An opaque RGB base color for the fade gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let byte = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Self {
            r: byte(0..2)?,
            g: byte(2..4)?,
            b: byte(4..6)?,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// One gradient stop: position along the overlay plus the base color's
/// alpha at that position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position in percent of the overlay width.
    pub position: f64,
    /// Alpha applied to the theme's base color, 0.0–1.0.
    pub alpha: f64,
}

/// The seven-stop alpha ramp shared by both color modes.
///
/// Opaque at the edges, transparent through the middle 50%. The odd
/// 9.65/89.28 positions come straight from the shipped gradient and are
/// kept bit-for-bit for visual parity.
pub const FADE_RAMP: [GradientStop; 7] = [
    GradientStop { position: 0.0, alpha: 1.0 },
    GradientStop { position: 9.65, alpha: 0.88 },
    GradientStop { position: 25.0, alpha: 0.0 },
    GradientStop { position: 50.0, alpha: 0.0 },
    GradientStop { position: 75.0, alpha: 0.0 },
    GradientStop { position: 89.28, alpha: 0.88 },
    GradientStop { position: 100.0, alpha: 1.0 },
];

/// Default dark-mode gradient base.
pub const DARK_FADE_BASE: Rgb = Rgb::new(23, 23, 26);
/// Default light-mode gradient base.
pub const LIGHT_FADE_BASE: Rgb = Rgb::new(255, 255, 255);

/// Gradient base colors for both modes — the enum-keyed table the render
/// function consults. Constructed from config (which defaults to the
/// shipped values) or via `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FadePalette {
    pub light: Rgb,
    pub dark: Rgb,
}

impl Default for FadePalette {
    fn default() -> Self {
        Self {
            light: LIGHT_FADE_BASE,
            dark: DARK_FADE_BASE,
        }
    }
}

impl FadePalette {
    /// Base color for a mode.
    pub fn base(&self, mode: ThemeMode) -> Rgb {
        match mode {
            ThemeMode::Light => self.light,
            ThemeMode::Dark => self.dark,
        }
    }

    /// Resolved stops for a mode: base color + the shared alpha ramp.
    pub fn stops(&self, mode: ThemeMode) -> Vec<ResolvedStop> {
        let base = self.base(mode);
        FADE_RAMP
            .iter()
            .map(|stop| ResolvedStop {
                color: base,
                alpha: stop.alpha,
                position: stop.position,
            })
            .collect()
    }

    /// Render one mode's gradient as a CSS `linear-gradient` value.
    pub fn to_css_gradient(&self, mode: ThemeMode) -> String {
        let stops: Vec<String> = self
            .stops(mode)
            .iter()
            .map(|s| {
                format!(
                    "rgba({}, {}, {}, {}) {}%",
                    s.color.r,
                    s.color.g,
                    s.color.b,
                    trim_float(s.alpha),
                    trim_float(s.position)
                )
            })
            .collect();
        format!("linear-gradient(to right, {})", stops.join(", "))
    }
}

/// A gradient stop with its color resolved against a theme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedStop {
    pub color: Rgb,
    pub alpha: f64,
    pub position: f64,
}

/// Format a float without trailing `.0` noise (`1` not `1.0`, but `9.65`).
fn trim_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_label_falls_back_to_light() {
        assert_eq!(ThemeMode::from_label("solarized"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_label(""), ThemeMode::Light);
        assert_eq!(ThemeMode::from_label("DARK"), ThemeMode::Dark);
    }

    #[test]
    fn ramp_has_exact_contract_stops() {
        let positions: Vec<f64> = FADE_RAMP.iter().map(|s| s.position).collect();
        let alphas: Vec<f64> = FADE_RAMP.iter().map(|s| s.alpha).collect();
        assert_eq!(positions, vec![0.0, 9.65, 25.0, 50.0, 75.0, 89.28, 100.0]);
        assert_eq!(alphas, vec![1.0, 0.88, 0.0, 0.0, 0.0, 0.88, 1.0]);
    }

    #[test]
    fn dark_base_is_23_23_26() {
        let palette = FadePalette::default();
        assert_eq!(palette.base(ThemeMode::Dark), Rgb::new(23, 23, 26));
        assert_eq!(palette.base(ThemeMode::Light), Rgb::new(255, 255, 255));
    }

    #[test]
    fn css_gradient_for_dark_mode() {
        let css = FadePalette::default().to_css_gradient(ThemeMode::Dark);
        assert!(css.starts_with("linear-gradient(to right, "));
        assert!(css.contains("rgba(23, 23, 26, 1) 0%"));
        assert!(css.contains("rgba(23, 23, 26, 0.88) 9.65%"));
        assert!(css.contains("rgba(23, 23, 26, 0) 50%"));
        assert!(css.contains("rgba(23, 23, 26, 1) 100%"));
    }

    #[test]
    fn hex_roundtrip() {
        let rgb = Rgb::from_hex("#17171a").unwrap();
        assert_eq!(rgb, Rgb::new(23, 23, 26));
        assert_eq!(rgb.to_hex(), "#17171a");
    }

    #[test]
    fn bad_hex_is_none() {
        assert!(Rgb::from_hex("17171a").is_none());
        assert!(Rgb::from_hex("#17171").is_none());
        assert!(Rgb::from_hex("#gg0000").is_none());
    }
}

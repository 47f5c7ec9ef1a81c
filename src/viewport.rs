//! Viewport breakpoint classification.
//!
//! The widget never reads the viewport itself; the host supplies a
//! [`Breakpoint`] and the render function branches on it. Arrow controls
//! and the edge-fade overlay only exist at tablet width and above — below
//! that they are absent from the output entirely, not merely disabled.

use serde::{Deserialize, Serialize};

/// Discrete viewport-width classification, supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Breakpoint {
    BelowTablet,
    TabletAndAbove,
}

impl Breakpoint {
    /// Classify a pixel width against the tablet threshold.
    pub fn classify(width: u32, tablet_min_width: u32) -> Self {
        if width >= tablet_min_width {
            Breakpoint::TabletAndAbove
        } else {
            Breakpoint::BelowTablet
        }
    }

    /// Lenient parsing for CLI/host input.
    ///
    /// An unrecognized label maps to `BelowTablet` — the safe default that
    /// hides the width-gated chrome — rather than erroring, so a
    /// misconfigured host degrades instead of breaking.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "tablet" | "tablet-and-above" | "desktop" | "wide" => Breakpoint::TabletAndAbove,
            _ => Breakpoint::BelowTablet,
        }
    }

    /// True when width-gated chrome (arrows, edge fade) should render.
    pub fn shows_wide_chrome(self) -> bool {
        self == Breakpoint::TabletAndAbove
    }
}

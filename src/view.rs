//! Pure projection of carousel state into view models.
//!
//! [`render`] is a pure function of the state plus two external inputs
//! (breakpoint, theme mode). It produces plain serializable structs — no
//! I/O, no side effects — so every visibility rule can be asserted in unit
//! tests and the HTML layer is a dumb transcription of the result.
//!
//! Visibility rules:
//! - arrows and the edge-fade overlay exist only at tablet width and
//!   above; below that they are absent from the view, not disabled;
//! - one bullet per slide, `is_selected` exactly on the active index;
//! - an empty carousel produces an empty view: no slide, no controls,
//!   no bullets, no overlay.

use crate::state::{CarouselState, Direction, Phase};
use crate::theme::{FadePalette, ResolvedStop, ThemeMode};
use crate::types::Slide;
use crate::viewport::Breakpoint;
use serde::Serialize;

// Visual contract constants. These are reproduced in the demo CSS and must
// stay in lockstep with it.

/// Arrow button diameter, in px.
pub const ARROW_DIAMETER: u32 = 40;
/// Bullet indicator diameter, in px.
pub const BULLET_DIAMETER: u32 = 16;
/// Inner dot diameter within a bullet, in px.
pub const BULLET_DOT_DIAMETER: u32 = 6;
/// Inner dot opacity for an unselected bullet.
pub const BULLET_DOT_OPACITY: f64 = 0.4;
/// Inner dot opacity for the selected bullet.
pub const BULLET_DOT_OPACITY_SELECTED: f64 = 1.0;
/// Corner radius for slide media, in px ("medium").
pub const MEDIA_CORNER_RADIUS: u32 = 1;
/// Corner rounding for buttons and bullets: fully circular.
pub const CIRCULAR_RADIUS: &str = "50%";

/// The active slide as presented.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlideView {
    pub index: usize,
    pub src: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Which way the visual move plays, from the last navigation.
    pub direction: Direction,
    /// True while the move is still animating.
    pub is_transitioning: bool,
    pub corner_radius: u32,
}

/// The prev/next arrow pair. Present as a pair or not at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArrowControls {
    pub diameter: u32,
}

/// One bullet indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BulletView {
    /// Slide index this bullet navigates to on click.
    pub index: usize,
    pub is_selected: bool,
    pub diameter: u32,
    pub dot_diameter: u32,
    pub dot_opacity: f64,
}

/// The edge-fade gradient overlay, stops resolved against the theme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeFadeOverlay {
    pub stops: Vec<ResolvedStop>,
}

/// Everything the host needs to draw one carousel frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide: Option<SlideView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrows: Option<ArrowControls>,
    pub bullets: Vec<BulletView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<EdgeFadeOverlay>,
}

/// Project state + external inputs into a frame.
///
/// `slides` must be the same sequence the state was created over; the
/// slide view is whatever `state.active_index()` selects from it.
pub fn render(
    state: &CarouselState,
    slides: &[Slide],
    breakpoint: Breakpoint,
    theme: ThemeMode,
    palette: &FadePalette,
) -> CarouselView {
    if slides.is_empty() {
        return CarouselView {
            slide: None,
            arrows: None,
            bullets: Vec::new(),
            overlay: None,
        };
    }

    let active = state.active_index();
    let slide = &slides[active];
    let wide = breakpoint.shows_wide_chrome();

    CarouselView {
        slide: Some(SlideView {
            index: active,
            src: slide.src.clone(),
            alt: slide.alt.clone(),
            caption: slide.caption.clone(),
            direction: state.direction(),
            is_transitioning: state.phase() == Phase::Transitioning,
            corner_radius: MEDIA_CORNER_RADIUS,
        }),
        arrows: wide.then_some(ArrowControls {
            diameter: ARROW_DIAMETER,
        }),
        bullets: (0..slides.len())
            .map(|index| {
                let is_selected = index == active;
                BulletView {
                    index,
                    is_selected,
                    diameter: BULLET_DIAMETER,
                    dot_diameter: BULLET_DOT_DIAMETER,
                    dot_opacity: if is_selected {
                        BULLET_DOT_OPACITY_SELECTED
                    } else {
                        BULLET_DOT_OPACITY
                    },
                }
            })
            .collect(),
        overlay: wide.then(|| EdgeFadeOverlay {
            stops: palette.stops(theme),
        }),
    }
}

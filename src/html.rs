//! Static demo page rendering.
//!
//! Transcribes a [`CarouselView`] into HTML with [maud](https://maud.lambda.xyz/):
//! compile-time checked templates, auto-escaped interpolation. The markup
//! mirrors the view model exactly — whatever the render function omitted
//! (arrows below tablet, the overlay, everything on an empty carousel) is
//! absent from the document, not hidden with style rules.
//!
//! Structural CSS is embedded at compile time from `static/carousel.css`;
//! the theme-dependent fade gradient is generated from the palette as
//! `.light`/`.dark`-scoped custom properties.

use crate::state::Direction;
use crate::theme::{FadePalette, ThemeMode};
use crate::view::{BulletView, CarouselView};
use crate::widget::Timing;
use maud::{DOCTYPE, Markup, PreEscaped, html};

const CSS_STATIC: &str = include_str!("../static/carousel.css");

/// Generate CSS custom properties from the fade palette.
///
/// One block per color mode, scoped by class so the demo page switches
/// theme by swapping a single class on `<body>`.
pub fn generate_fade_css(palette: &FadePalette, timing: &Timing) -> String {
    format!(
        r#".light {{
    --carousel-fade: {light_gradient};
    --carousel-transition: {transition}ms;
}}

.dark {{
    --carousel-fade: {dark_gradient};
    --carousel-transition: {transition}ms;
}}"#,
        light_gradient = palette.to_css_gradient(ThemeMode::Light),
        dark_gradient = palette.to_css_gradient(ThemeMode::Dark),
        transition = timing.transition_ms,
    )
}

/// Full stylesheet for the demo page: generated theme properties followed
/// by the structural rules.
pub fn demo_css(palette: &FadePalette, timing: &Timing) -> String {
    format!("{}\n\n{}", generate_fade_css(palette, timing), CSS_STATIC)
}

/// Renders the base HTML document structure.
fn base_document(title: &str, css: &str, body_class: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                // CSS is not HTML-escaped; it never contains user input.
                style { (PreEscaped(css)) }
            }
            body class=(body_class) {
                (content)
            }
        }
    }
}

/// Renders one bullet indicator.
fn bullet(b: &BulletView) -> Markup {
    html! {
        li {
            button.carousel-bullet.is-selected[b.is_selected]
                type="button"
                aria-label=(format!("Go to slide {}", b.index + 1))
                aria-current=[b.is_selected.then_some("true")]
                data-index=(b.index) {}
        }
    }
}

/// Renders the carousel markup for one frame.
///
/// An empty view produces an empty fragment: no region, no controls.
pub fn render_carousel(view: &CarouselView) -> Markup {
    let Some(slide) = &view.slide else {
        return html! {};
    };
    let slide_class = if slide.is_transitioning {
        let dir = match slide.direction {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        };
        format!("carousel-slide is-transitioning {dir}")
    } else {
        "carousel-slide".to_string()
    };
    html! {
        section.carousel aria-roledescription="carousel" {
            div.carousel-track {
                figure class=(slide_class) {
                    img src=(slide.src) alt=(slide.alt);
                    @if let Some(caption) = &slide.caption {
                        figcaption { (caption) }
                    }
                }
            }
            @if view.overlay.is_some() {
                div.carousel-fade aria-hidden="true" {}
            }
            @if view.arrows.is_some() {
                button.carousel-arrow.prev type="button" aria-label="Previous slide" { "‹" }
                button.carousel-arrow.next type="button" aria-label="Next slide" { "›" }
            }
            ul.carousel-bullets {
                @for b in &view.bullets {
                    (bullet(b))
                }
            }
        }
    }
}

/// Renders the standalone demo page for one frame.
pub fn render_demo_page(
    view: &CarouselView,
    palette: &FadePalette,
    timing: &Timing,
    theme: ThemeMode,
) -> Markup {
    let css = demo_css(palette, timing);
    base_document("Carousel demo", &css, theme.css_class(), render_carousel(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CarouselState;
    use crate::types::Slide;
    use crate::view::render;
    use crate::viewport::Breakpoint;

    fn slides(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|i| Slide {
                src: format!("{i}.avif"),
                alt: format!("slide {i}"),
                caption: (i == 0).then(|| "First".to_string()),
            })
            .collect()
    }

    fn frame(n: usize, breakpoint: Breakpoint, theme: ThemeMode) -> String {
        let state = CarouselState::new(n);
        let view = render(&state, &slides(n), breakpoint, theme, &FadePalette::default());
        render_carousel(&view).into_string()
    }

    #[test]
    fn empty_carousel_renders_empty_fragment() {
        assert_eq!(frame(0, Breakpoint::TabletAndAbove, ThemeMode::Light), "");
    }

    #[test]
    fn below_tablet_markup_has_no_arrows_or_fade() {
        let markup = frame(3, Breakpoint::BelowTablet, ThemeMode::Light);
        assert!(!markup.contains("carousel-arrow"));
        assert!(!markup.contains("carousel-fade"));
        // One bullet per slide, width-gating does not apply to bullets.
        assert_eq!(markup.matches("data-index=").count(), 3);
    }

    #[test]
    fn tablet_markup_has_arrows_and_fade() {
        let markup = frame(3, Breakpoint::TabletAndAbove, ThemeMode::Dark);
        assert!(markup.contains("carousel-arrow prev"));
        assert!(markup.contains("carousel-arrow next"));
        assert!(markup.contains("carousel-fade"));
    }

    #[test]
    fn selected_bullet_is_marked() {
        let markup = frame(2, Breakpoint::BelowTablet, ThemeMode::Light);
        assert!(markup.contains("is-selected"));
        assert!(markup.contains(r#"aria-current="true""#));
        assert_eq!(markup.matches("is-selected").count(), 1);
    }

    #[test]
    fn caption_and_escaping() {
        let state = CarouselState::new(1);
        let s = vec![Slide {
            src: "a.avif".to_string(),
            alt: "a < b".to_string(),
            caption: Some("Tom & Jerry".to_string()),
        }];
        let view = render(
            &state,
            &s,
            Breakpoint::BelowTablet,
            ThemeMode::Light,
            &FadePalette::default(),
        );
        let markup = render_carousel(&view).into_string();
        assert!(markup.contains("a &lt; b"));
        assert!(markup.contains("Tom &amp; Jerry"));
    }

    #[test]
    fn fade_css_contains_exact_gradient() {
        let css = generate_fade_css(&FadePalette::default(), &Timing::default());
        assert!(css.contains(".dark {"));
        assert!(css.contains("rgba(23, 23, 26, 0.88) 9.65%"));
        assert!(css.contains("rgba(255, 255, 255, 0.88) 89.28%"));
        assert!(css.contains("--carousel-transition: 400ms"));
    }

    #[test]
    fn structural_css_carries_contract_geometry() {
        assert!(CSS_STATIC.contains("width: 40px"));
        assert!(CSS_STATIC.contains("width: 16px"));
        assert!(CSS_STATIC.contains("width: 6px"));
        assert!(CSS_STATIC.contains("opacity: 0.4"));
        assert!(CSS_STATIC.contains("border-radius: 1px"));
        assert!(CSS_STATIC.contains("border-radius: 50%"));
    }

    #[test]
    fn demo_page_is_a_full_document() {
        let state = CarouselState::new(2);
        let view = render(
            &state,
            &slides(2),
            Breakpoint::TabletAndAbove,
            ThemeMode::Dark,
            &FadePalette::default(),
        );
        let page = render_demo_page(
            &view,
            &FadePalette::default(),
            &Timing::default(),
            ThemeMode::Dark,
        )
        .into_string();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(r#"body class="dark""#));
        assert!(page.contains("carousel-track"));
    }
}

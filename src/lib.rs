//! # Gliderail
//!
//! A headless carousel widget engine. The carousel's whole behavioral
//! contract — wrap-around navigation, a coalescing navigation queue,
//! bullet indicators, breakpoint-gated chrome, theme-derived edge-fade
//! gradients — lives in plain Rust state with a pure render function, so
//! every rule is unit-testable without a browser or a UI framework.
//!
//! # Architecture: State → View → Markup
//!
//! ```text
//! 1. State    navigation events  →  CarouselState   (index, direction, phase)
//! 2. View     state + breakpoint + theme  →  CarouselView  (plain view models)
//! 3. Markup   CarouselView  →  HTML/CSS demo page  (maud transcription)
//! ```
//!
//! Each layer is a pure function of the one before it plus explicit
//! inputs. The host supplies the slide sequence once at mount, and feeds
//! in the current breakpoint and color mode on every render; nothing in
//! the engine reads ambient state.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | The carousel state machine: wrap-around navigation, Idle/Transitioning phases, the coalescing pending-request slot |
//! | [`widget`] | A mounted carousel: scheduling on a millisecond clock, auto-advance, change events, unmount cancellation |
//! | [`view`] | Pure projection of state into serializable view models, with the visual contract constants |
//! | [`viewport`] | Breakpoint classification — what gates arrows and the edge fade |
//! | [`theme`] | Color modes and the enum-keyed fade gradient palette |
//! | [`types`] | `Slide` and the JSON slide manifest |
//! | [`config`] | `config.toml` loading, validation, and stock defaults |
//! | [`html`] | Maud demo-page rendering and themed CSS generation |
//! | [`script`] | Simulation-script parsing for the `simulate` command |
//! | [`output`] | CLI output formatting — pure `format_*` plus `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Explicit Breakpoint, Not Media Queries
//!
//! The original styling expressed conditional visibility through
//! viewport-width media conditions. Here the breakpoint is an explicit
//! input to [`view::render`]: below tablet width the arrows and overlay
//! are *absent from the output*, not hidden by a cascading style rule.
//! Identical behavior, but the rule is a testable branch instead of a
//! style-sheet side effect.
//!
//! ## Enum-Keyed Theme Table
//!
//! The fade gradient's color stops are the only theme-dependent output.
//! They come from an explicit [`theme::FadePalette`] table keyed by
//! [`theme::ThemeMode`], not from ambient/global style state, keeping the
//! render function pure.
//!
//! ## Atomic Index, Deferred Visuals
//!
//! Navigation mutates `active_index` immediately; the Transitioning phase
//! only tracks the visual interpolation. A request arriving mid-transition
//! is coalesced into a single pending slot (latest wins), so rapid clicks
//! land on the final intended target without stacking animations.
//!
//! ## Maud Over Template Engines
//!
//! The demo page is generated with [Maud](https://maud.lambda.xyz/):
//! compile-time checked, type-safe, XSS-safe by default, and no template
//! files to ship.

pub mod config;
pub mod html;
pub mod output;
pub mod script;
pub mod state;
pub mod theme;
pub mod types;
pub mod view;
pub mod viewport;
pub mod widget;

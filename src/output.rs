//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! Display is information-first: slides show by positional index and
//! caption (filename in parens when uncaptioned), with source paths as
//! indented context lines.
//!
//! ```text
//! Slides
//! 001 Dawn over the bay
//!     Source: dawn.avif
//! 002 (mountains.avif)
//!     Source: mountains.avif
//!
//! Config
//!     transition: 400ms
//!     auto-advance: off
//!     tablet threshold: 768px
//! ```

use crate::config::WidgetConfig;
use crate::script::Command;
use crate::state::{CarouselState, Direction, Phase};
use crate::types::SlideManifest;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format a slide line: captioned slides show the caption, uncaptioned
/// show the source filename in parens — the filename IS the identity.
fn slide_line(index: usize, caption: Option<&str>, src: &str) -> String {
    match caption {
        Some(c) if !c.is_empty() => format!("{} {}", format_index(index), c),
        _ => format!("{} ({})", format_index(index), src),
    }
}

// ============================================================================
// check
// ============================================================================

pub fn format_check_output(manifest: &SlideManifest, config: &WidgetConfig) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Slides".to_string());
    if manifest.slides.is_empty() {
        lines.push("    (none - carousel will render nothing)".to_string());
    }
    for (idx, slide) in manifest.slides.iter().enumerate() {
        lines.push(slide_line(idx + 1, slide.caption.as_deref(), &slide.src));
        lines.push(format!("    Source: {}", slide.src));
    }
    lines.push(String::new());
    lines.push("Config".to_string());
    lines.push(format!(
        "    transition: {}ms",
        config.motion.transition_ms
    ));
    lines.push(match config.motion.auto_advance_ms {
        Some(interval) => format!("    auto-advance: every {interval}ms"),
        None => "    auto-advance: off".to_string(),
    });
    lines.push(format!(
        "    tablet threshold: {}px",
        config.viewport.tablet_min_width
    ));
    lines.push(format!(
        "    fade base: {} light / {} dark",
        config.fade.light.base, config.fade.dark.base
    ));
    lines
}

pub fn print_check_output(manifest: &SlideManifest, config: &WidgetConfig) {
    for line in format_check_output(manifest, config) {
        println!("{line}");
    }
}

// ============================================================================
// simulate
// ============================================================================

/// One step of a simulation trace: the command that ran and the state it
/// left behind. `rejected` marks an out-of-range `goto`.
pub struct TraceStep {
    pub command: Command,
    pub index: usize,
    pub direction: Direction,
    pub phase: Phase,
    pub rejected: bool,
}

impl TraceStep {
    pub fn capture(command: Command, state: &CarouselState, rejected: bool) -> Self {
        Self {
            command,
            index: state.active_index(),
            direction: state.direction(),
            phase: state.phase(),
            rejected,
        }
    }
}

pub fn format_trace_step(step: &TraceStep) -> String {
    let direction = match step.direction {
        Direction::Forward => "forward",
        Direction::Backward => "backward",
    };
    let phase = match step.phase {
        Phase::Idle => "idle",
        Phase::Transitioning => "transitioning",
    };
    let status = if step.rejected { "  [rejected: out of range]" } else { "" };
    format!(
        "{:<12} index={} direction={} phase={}{}",
        step.command.label(),
        step.index,
        direction,
        phase,
        status
    )
}

pub fn print_trace(steps: &[TraceStep]) {
    for step in steps {
        println!("{}", format_trace_step(step));
    }
}

// ============================================================================
// render
// ============================================================================

pub fn format_render_output(slide_count: usize, output_path: &str) -> Vec<String> {
    vec![
        format!("Rendered carousel with {} slides", slide_count),
        format!("    Output: {}", output_path),
    ]
}

pub fn print_render_output(slide_count: usize, output_path: &str) {
    for line in format_render_output(slide_count, output_path) {
        println!("{line}");
    }
}

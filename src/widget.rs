//! The mounted widget: state machine plus event-driven scheduling.
//!
//! Everything here is single-threaded and cooperative. The host owns a
//! monotonic millisecond clock and calls in on discrete events: user input
//! (arrow click, bullet click), and periodic `advance_to(now_ms)` calls
//! that fire any deadlines that have come due — the transition-completion
//! callback and the optional auto-advance tick. Nothing blocks; a
//! transition's completion is a stored deadline, not a wait.
//!
//! Change notifications go out over an optional [`mpsc::Sender`], one
//! [`CarouselEvent::IndexChanged`] per actual index mutation, in mutation
//! order. The channel is the same shape the CLI uses to feed its printer
//! thread.
//!
//! [`unmount`](CarouselWidget::unmount) cancels both deadlines, so no
//! state mutation can happen after teardown even if the host keeps calling
//! `advance_to`.

use crate::state::{CarouselState, NavError, NavOutcome};
use crate::theme::{FadePalette, ThemeMode};
use crate::types::Slide;
use crate::view::{self, CarouselView};
use crate::viewport::Breakpoint;
use std::sync::mpsc::Sender;

/// Notifications emitted by a mounted widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// The active index changed (user navigation, coalesced settle, or
    /// auto-advance).
    IndexChanged { index: usize },
}

/// Timing knobs, normally taken from `MotionConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Visual transition duration in ms.
    pub transition_ms: u64,
    /// Auto-advance interval in ms; `None` disables the timer.
    pub auto_advance_ms: Option<u64>,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            transition_ms: 400,
            auto_advance_ms: None,
        }
    }
}

/// One mounted carousel: exclusive owner of its `CarouselState`.
#[derive(Debug)]
pub struct CarouselWidget {
    state: CarouselState,
    slides: Vec<Slide>,
    palette: FadePalette,
    timing: Timing,
    /// Deadline for the in-flight transition's completion, if any.
    settle_at: Option<u64>,
    /// Deadline for the next auto-advance tick, if the timer is enabled.
    auto_advance_at: Option<u64>,
    mounted: bool,
    events: Option<Sender<CarouselEvent>>,
}

impl CarouselWidget {
    /// Mount a carousel over a fixed slide sequence at time `now_ms`.
    pub fn mount(
        slides: Vec<Slide>,
        palette: FadePalette,
        timing: Timing,
        events: Option<Sender<CarouselEvent>>,
        now_ms: u64,
    ) -> Self {
        let auto_advance_at = match (slides.len() > 1, timing.auto_advance_ms) {
            (true, Some(interval)) => Some(now_ms + interval),
            _ => None,
        };
        Self {
            state: CarouselState::new(slides.len()),
            slides,
            palette,
            timing,
            settle_at: None,
            auto_advance_at,
            mounted: true,
            events,
        }
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Arrow click: next slide.
    pub fn next(&mut self, now_ms: u64) {
        if !self.mounted {
            return;
        }
        let outcome = self.state.go_to_next();
        self.after_input(outcome, now_ms);
    }

    /// Arrow click: previous slide.
    pub fn previous(&mut self, now_ms: u64) {
        if !self.mounted {
            return;
        }
        let outcome = self.state.go_to_previous();
        self.after_input(outcome, now_ms);
    }

    /// Bullet click: direct jump. Out-of-range input is rejected with the
    /// state untouched.
    pub fn go_to(&mut self, index: usize, now_ms: u64) -> Result<(), NavError> {
        if !self.mounted {
            return Ok(());
        }
        let outcome = self.state.go_to_index(index)?;
        self.after_input(outcome, now_ms);
        Ok(())
    }

    /// Fire any deadlines due at or before `now_ms`, in time order.
    ///
    /// Processes repeatedly until nothing further is due, so one call can
    /// cover a settle followed by an auto-advance tick that became due in
    /// the same window.
    pub fn advance_to(&mut self, now_ms: u64) {
        if !self.mounted {
            return;
        }
        loop {
            let settle_due = self.settle_at.filter(|&at| at <= now_ms);
            let tick_due = self.auto_advance_at.filter(|&at| at <= now_ms);
            let next = match (settle_due, tick_due) {
                (None, None) => break,
                (Some(s), Some(t)) if t < s => Deadline::AutoAdvance(t),
                (Some(s), _) => Deadline::Settle(s),
                (None, Some(t)) => Deadline::AutoAdvance(t),
            };
            match next {
                Deadline::Settle(at) => {
                    self.settle_at = None;
                    let outcome = self.state.settle();
                    self.apply(outcome, at);
                }
                Deadline::AutoAdvance(at) => {
                    // Reschedule first so a queued (coalesced) tick cannot
                    // rearm itself twice. A zero interval is clamped to 1ms
                    // so the loop always makes progress.
                    self.auto_advance_at = self.timing.auto_advance_ms.map(|i| at + i.max(1));
                    let outcome = self.state.go_to_next();
                    self.apply(outcome, at);
                }
            }
        }
    }

    /// Tear down: cancel the pending completion and the auto-advance
    /// timer. Every entry point is a no-op afterwards.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.settle_at = None;
        self.auto_advance_at = None;
    }

    /// Render the current frame. Pure pass-through to [`view::render`].
    pub fn render(&self, breakpoint: Breakpoint, theme: ThemeMode) -> CarouselView {
        view::render(&self.state, &self.slides, breakpoint, theme, &self.palette)
    }

    /// User input resets the auto-advance countdown: a reader who is
    /// clicking should not be raced by the timer.
    fn after_input(&mut self, outcome: NavOutcome, now_ms: u64) {
        if let Some(interval) = self.timing.auto_advance_ms {
            if self.state.len() > 1 {
                self.auto_advance_at = Some(now_ms + interval);
            }
        }
        self.apply(outcome, now_ms);
    }

    fn apply(&mut self, outcome: NavOutcome, now_ms: u64) {
        if let NavOutcome::Moved { index } = outcome {
            self.settle_at = Some(now_ms + self.timing.transition_ms);
            if let Some(tx) = &self.events {
                tx.send(CarouselEvent::IndexChanged { index }).ok();
            }
        }
    }
}

enum Deadline {
    Settle(u64),
    AutoAdvance(u64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn slides(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|i| Slide {
                src: format!("{i}.avif"),
                alt: String::new(),
                caption: None,
            })
            .collect()
    }

    fn timing(transition_ms: u64, auto_advance_ms: Option<u64>) -> Timing {
        Timing {
            transition_ms,
            auto_advance_ms,
        }
    }

    #[test]
    fn click_moves_immediately_and_settles_after_duration() {
        let mut w = CarouselWidget::mount(
            slides(3),
            FadePalette::default(),
            timing(400, None),
            None,
            0,
        );
        w.next(0);
        assert_eq!(w.state().active_index(), 1);
        assert!(w.state().is_transitioning());

        w.advance_to(399);
        assert!(w.state().is_transitioning());
        w.advance_to(400);
        assert!(!w.state().is_transitioning());
    }

    #[test]
    fn rapid_clicks_coalesce_through_the_scheduler() {
        let (tx, rx) = mpsc::channel();
        let mut w = CarouselWidget::mount(
            slides(5),
            FadePalette::default(),
            timing(400, None),
            Some(tx),
            0,
        );
        w.next(0);
        w.next(50);
        w.next(100); // overwrites the pending request from t=50

        // First transition settles at 400 and applies the one coalesced
        // request; that second move settles at 800.
        w.advance_to(400);
        assert_eq!(w.state().active_index(), 2);
        assert!(w.state().is_transitioning());
        w.advance_to(800);
        assert!(!w.state().is_transitioning());

        let seen: Vec<CarouselEvent> = rx.try_iter().collect();
        assert_eq!(
            seen,
            vec![
                CarouselEvent::IndexChanged { index: 1 },
                CarouselEvent::IndexChanged { index: 2 },
            ]
        );
    }

    #[test]
    fn auto_advance_ticks_at_interval() {
        let mut w = CarouselWidget::mount(
            slides(3),
            FadePalette::default(),
            timing(200, Some(1000)),
            None,
            0,
        );
        w.advance_to(999);
        assert_eq!(w.state().active_index(), 0);

        w.advance_to(1000);
        assert_eq!(w.state().active_index(), 1);

        // One call covering several periods fires each tick in order and
        // settles the transitions in between.
        w.advance_to(3200);
        assert_eq!(w.state().active_index(), 0);
        assert!(!w.state().is_transitioning());
    }

    #[test]
    fn auto_advance_disabled_for_single_slide() {
        let mut w = CarouselWidget::mount(
            slides(1),
            FadePalette::default(),
            timing(200, Some(1000)),
            None,
            0,
        );
        w.advance_to(10_000);
        assert_eq!(w.state().active_index(), 0);
    }

    #[test]
    fn user_input_resets_the_auto_advance_countdown() {
        let mut w = CarouselWidget::mount(
            slides(4),
            FadePalette::default(),
            timing(100, Some(1000)),
            None,
            0,
        );
        // Click at 900; the tick that would have fired at 1000 moves to 1900.
        w.next(900);
        w.advance_to(1000);
        assert_eq!(w.state().active_index(), 1);
        w.advance_to(1900);
        assert_eq!(w.state().active_index(), 2);
    }

    #[test]
    fn unmount_cancels_pending_callbacks() {
        let (tx, rx) = mpsc::channel();
        let mut w = CarouselWidget::mount(
            slides(3),
            FadePalette::default(),
            timing(400, Some(1000)),
            Some(tx),
            0,
        );
        w.next(0);
        w.unmount();

        // Neither the settle at 400 nor the tick at 1000 may run.
        w.advance_to(5000);
        w.next(5000);
        assert_eq!(w.state().active_index(), 1);
        assert!(w.state().is_transitioning()); // frozen as of unmount

        let seen: Vec<CarouselEvent> = rx.try_iter().collect();
        assert_eq!(seen, vec![CarouselEvent::IndexChanged { index: 1 }]);
    }

    #[test]
    fn out_of_range_bullet_click_is_surfaced_and_harmless() {
        let mut w = CarouselWidget::mount(
            slides(2),
            FadePalette::default(),
            timing(100, None),
            None,
            0,
        );
        assert!(w.go_to(7, 0).is_err());
        assert_eq!(w.state().active_index(), 0);
        assert!(!w.state().is_transitioning());
    }

    #[test]
    fn widget_render_matches_pure_render() {
        let w = CarouselWidget::mount(
            slides(3),
            FadePalette::default(),
            timing(100, None),
            None,
            0,
        );
        let v = w.render(Breakpoint::TabletAndAbove, ThemeMode::Dark);
        assert!(v.arrows.is_some());
        assert_eq!(v.bullets.len(), 3);
    }
}

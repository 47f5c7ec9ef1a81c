//! The carousel state machine.
//!
//! One `CarouselState` owns the active slide index and the transition
//! bookkeeping for a single carousel instance. Index mutation is atomic and
//! immediate; the animated move is only *visual*, tracked as an
//! Idle/Transitioning phase so at most one transition is ever in flight.
//!
//! ## Navigation while a transition is in flight
//!
//! A navigation request that arrives mid-transition does not mutate the
//! index. It is stored in a single pending slot — coalesce-to-latest, so
//! rapid repeated clicks collapse into the final intended target — and
//! applied when the in-flight transition settles. The pending request is
//! resolved against whatever index is current at settle time.
//!
//! ## Empty and single-slide carousels
//!
//! Zero slides is a valid state (the widget renders nothing); every
//! navigation is then a silent no-op. With one slide there is nowhere to
//! go: next/previous are no-ops too, though they still clear a stuck
//! transition flag so the widget cannot wedge.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NavError {
    /// Direct navigation to an index outside `[0, len)`. The state is left
    /// unchanged; the caller decides what to do with the rejection.
    #[error("slide index {index} out of range (have {len} slides)")]
    OutOfRange { index: usize, len: usize },
}

/// Last navigation direction. Animation hint only — it carries no meaning
/// beyond choosing which way the visual move plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Visual transition phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Transitioning,
}

/// A navigation request, as queued while a transition is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    Next,
    Previous,
    Index(usize),
}

/// Outcome of a navigation call, reported so the owning widget can emit
/// change events and schedule the transition completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// The index changed and a visual transition started.
    Moved { index: usize },
    /// The request was stored in the pending slot (a transition was in
    /// flight), overwriting any previously pending request.
    Queued,
    /// Nothing to do: empty/single-slide carousel, or a jump to the
    /// current index.
    Unchanged,
}

/// State of one mounted carousel.
///
/// Created with a fixed slide count at mount, destroyed at unmount. The
/// index is mutated only through the navigation methods here.
#[derive(Debug, Clone)]
pub struct CarouselState {
    len: usize,
    active_index: usize,
    direction: Direction,
    phase: Phase,
    pending: Option<NavRequest>,
}

impl CarouselState {
    /// New carousel over `len` slides, starting Idle at index 0.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            active_index: 0,
            direction: Direction::Forward,
            phase: Phase::Idle,
            pending: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The selected slide index. Always in `[0, len)` when `len > 0`;
    /// meaningless (0) for an empty carousel, which renders nothing.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase == Phase::Transitioning
    }

    /// Advance to the next slide, wrapping to 0 after the last.
    ///
    /// With one slide or none there is nowhere to go; the call still clears
    /// a stuck transition flag so a lost completion event cannot wedge the
    /// widget.
    pub fn go_to_next(&mut self) -> NavOutcome {
        if self.len <= 1 {
            self.phase = Phase::Idle;
            self.pending = None;
            return NavOutcome::Unchanged;
        }
        self.request(NavRequest::Next)
    }

    /// Retreat to the previous slide, wrapping to `len - 1` before the first.
    pub fn go_to_previous(&mut self) -> NavOutcome {
        if self.len <= 1 {
            self.phase = Phase::Idle;
            self.pending = None;
            return NavOutcome::Unchanged;
        }
        self.request(NavRequest::Previous)
    }

    /// Jump directly to slide `index`.
    ///
    /// Bullet click handlers only offer valid indices by construction, but
    /// the range check stays: out-of-range input is rejected with the state
    /// untouched. A jump to the current index is accepted and does nothing.
    pub fn go_to_index(&mut self, index: usize) -> Result<NavOutcome, NavError> {
        if index >= self.len {
            return Err(NavError::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.request(NavRequest::Index(index)))
    }

    /// Transition-completion event.
    ///
    /// Applies the pending request if one is queued (starting a new
    /// transition), otherwise returns to Idle. A settle while already Idle
    /// is a no-op.
    pub fn settle(&mut self) -> NavOutcome {
        if self.phase == Phase::Idle {
            return NavOutcome::Unchanged;
        }
        self.phase = Phase::Idle;
        match self.pending.take() {
            Some(request) => self.request(request),
            None => NavOutcome::Unchanged,
        }
    }

    fn request(&mut self, request: NavRequest) -> NavOutcome {
        if self.phase == Phase::Transitioning {
            self.pending = Some(request);
            return NavOutcome::Queued;
        }
        let (target, direction) = match request {
            NavRequest::Next => ((self.active_index + 1) % self.len, Direction::Forward),
            NavRequest::Previous => (
                (self.active_index + self.len - 1) % self.len,
                Direction::Backward,
            ),
            NavRequest::Index(index) => {
                if index == self.active_index {
                    return NavOutcome::Unchanged;
                }
                (index, self.jump_direction(index))
            }
        };
        self.active_index = target;
        self.direction = direction;
        self.phase = Phase::Transitioning;
        NavOutcome::Moved { index: target }
    }

    /// Direction for a direct jump: whichever way around the loop is
    /// shorter, Forward on ties.
    fn jump_direction(&self, target: usize) -> Direction {
        let forward = (target + self.len - self.active_index) % self.len;
        let backward = (self.active_index + self.len - target) % self.len;
        if forward <= backward {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

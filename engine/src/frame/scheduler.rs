//! Frame scheduling
//!
//! The engine registers exactly one update handler and one paint handler
//! with a scheduler (both are the methods of a single [`FrameHandler`]).
//! The scheduler calls them serially and never overlaps a paint with an
//! update. Update and paint may run at different cadences.

use tracing::trace;

use crate::render::DrawTarget;

/// Receiver of the scheduler's two callbacks.
pub trait FrameHandler {
    /// One logical tick.
    fn on_update(&mut self);

    /// One painted frame, onto `target`.
    fn on_paint(&mut self, target: &mut dyn DrawTarget);
}

/// Something that drives a [`FrameHandler`] until it decides to stop.
pub trait FrameScheduler {
    fn run(&mut self, handler: &mut dyn FrameHandler, target: &mut dyn DrawTarget) -> FrameStats;
}

/// Callback counts from a scheduler run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub updates: u64,
    pub paints: u64,
}

/// Headless scheduler: a fixed number of ticks, painting after every
/// `paint_every`-th tick.
#[derive(Debug, Clone, Copy)]
pub struct FixedStepScheduler {
    ticks: u64,
    paint_every: u32,
}

impl FixedStepScheduler {
    /// Run `ticks` updates, painting after each one.
    pub fn new(ticks: u64) -> Self {
        Self {
            ticks,
            paint_every: 1,
        }
    }

    /// Paint only after every `n`-th update (`0` is treated as `1`).
    pub fn paint_every(mut self, n: u32) -> Self {
        self.paint_every = n.max(1);
        self
    }
}

impl FrameScheduler for FixedStepScheduler {
    fn run(&mut self, handler: &mut dyn FrameHandler, target: &mut dyn DrawTarget) -> FrameStats {
        let mut stats = FrameStats::default();
        for tick in 1..=self.ticks {
            handler.on_update();
            stats.updates += 1;

            if tick % u64::from(self.paint_every) == 0 {
                handler.on_paint(target);
                stats.paints += 1;
            }
            trace!(tick, "frame");
        }
        stats
    }
}

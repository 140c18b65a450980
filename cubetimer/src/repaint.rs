//! Repaint scheduling.
//!
//! egui redraws everything every frame, so an idle app should not be
//! painting at all. The scheduler keeps a continuous repaint timer running
//! only while the stopwatch is active (the readout changes every tick) and
//! otherwise lets egui sleep until the next input event, with a one-shot
//! escape hatch for state that changes outside of input.

use std::time::Duration;

/// Repaint period while the stopwatch is running (~30 fps, plenty for a
/// hundredths readout).
const RUNNING_REPAINT_INTERVAL: Duration = Duration::from_millis(33);

pub struct RepaintScheduler {
    continuous: bool,
    needs_repaint: bool,
}

impl Default for RepaintScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl RepaintScheduler {
    pub fn new() -> Self {
        Self {
            continuous: false,
            needs_repaint: false,
        }
    }

    /// Keep repainting on a timer while `continuous` is true.
    pub fn set_continuous(&mut self, continuous: bool) {
        self.continuous = continuous;
    }

    /// Request a single repaint on the next opportunity, for state that
    /// changed outside of an input event.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    /// Call at the end of `update()`. Schedules the next repaint if one
    /// is needed; otherwise egui sleeps until the next input event.
    pub fn end_frame(&mut self, ctx: &egui::Context) {
        if self.continuous {
            ctx.request_repaint_after(RUNNING_REPAINT_INTERVAL);
        } else if self.needs_repaint {
            ctx.request_repaint();
        }
        self.needs_repaint = false;
    }
}

//! Redraw scheduling: the control loop that keeps the face animating while it
//! is worth animating.
//!
//! There is no internal timer. Each frame's completion conditionally requests
//! the next frame, so the effective rate matches the host's display refresh
//! rate — smooth ornament rotation is favored over power-optimal
//! once-per-second updates. In ambient or hidden states the host's coarse
//! periodic tick keeps the hands approximately correct.

use crate::engine::EngineHost;
use crate::foundation::core::{DisplayMode, Visibility};

/// Decides, after each produced frame, whether to request exactly one more.
#[derive(Clone, Debug, Default)]
pub struct RedrawScheduler {
    frames_scheduled: u64,
}

impl RedrawScheduler {
    /// Create a scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Continuous animation runs only while the face is visible and
    /// interactive.
    pub fn should_continue(mode: DisplayMode, visibility: Visibility) -> bool {
        visibility.is_visible() && mode.is_interactive()
    }

    /// Called after a frame has been produced. Requests the next frame from
    /// the host iff the current state warrants it; returns whether it did.
    pub fn frame_completed(
        &mut self,
        mode: DisplayMode,
        visibility: Visibility,
        host: &mut dyn EngineHost,
    ) -> bool {
        let again = Self::should_continue(mode, visibility);
        if again {
            self.frames_scheduled = self.frames_scheduled.wrapping_add(1);
            host.request_redraw();
        }
        again
    }

    /// Number of continuation frames requested so far (diagnostics).
    pub fn frames_scheduled(&self) -> u64 {
        self.frames_scheduled
    }
}

#[cfg(test)]
#[path = "../tests/unit/scheduler.rs"]
mod tests;

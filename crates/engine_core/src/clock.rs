//! Simulation clock driven by the host's frame loop.
//!
//! The host hands us a wall-clock `dt` each frame; the clock converts it into
//! an effective simulation `dt` and tracks elapsed time and frame count.
//! Freezing the clock (in-game menu) makes the effective `dt` zero without
//! losing the elapsed time, and resuming restores normal flow from the
//! frozen instant.

/// Manages simulation timing, including menu pause.
#[derive(Debug, Default)]
pub struct Clock {
    /// Total simulated time in seconds.
    elapsed: f64,
    /// Frames advanced since creation (frozen frames included).
    frame_count: u64,
    /// Elapsed value captured when the clock was frozen.
    frozen_at: Option<f64>,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame. Returns the effective `dt`: the wall `dt` while
    /// running, `0.0` while frozen.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.frame_count += 1;
        if self.frozen_at.is_some() {
            return 0.0;
        }
        self.elapsed += dt as f64;
        dt
    }

    /// Freeze simulation time. Idempotent.
    pub fn freeze(&mut self) {
        if self.frozen_at.is_none() {
            self.frozen_at = Some(self.elapsed);
            log::debug!("simulation clock frozen at {:.3}s", self.elapsed);
        }
    }

    /// Resume simulation time from the frozen instant. Idempotent.
    pub fn resume(&mut self) {
        if let Some(at) = self.frozen_at.take() {
            self.elapsed = at;
            log::debug!("simulation clock resumed at {:.3}s", at);
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen_at.is_some()
    }

    /// Total simulated seconds (excludes frozen spans).
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

//! Target-seeking progress value that drives the scatter <-> tree morph
//!
//! The controller owns a single scalar in [0, 1]. Mode changes only move the
//! target; the visible value walks toward it at a fixed rate per second, so a
//! toggle in mid-flight reverses smoothly from wherever the morph currently is.

/// Which configuration the scene is heading toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Elements drift in the spherical cloud (progress target 0)
    #[default]
    Scattered,
    /// Elements gather into the cone tree (progress target 1)
    Assembled,
}

impl Mode {
    pub fn target(&self) -> f32 {
        match self {
            Mode::Scattered => 0.0,
            Mode::Assembled => 1.0,
        }
    }

    pub fn toggled(&self) -> Mode {
        match self {
            Mode::Scattered => Mode::Assembled,
            Mode::Assembled => Mode::Scattered,
        }
    }
}

/// Progress state advanced once per frame
#[derive(Debug, Clone)]
pub struct ProgressController {
    /// Visible progress (0.0 = scattered, 1.0 = assembled)
    current: f32,
    /// Where `current` is heading, always 0.0 or 1.0
    target: f32,
    mode: Mode,
    /// Seconds for a full 0 -> 1 sweep
    transition_duration: f32,
    /// Elapsed samples above this snap straight to the target
    max_frame_seconds: f32,
    /// Timestamp of the previous `advance` call, in seconds
    last_timestamp: Option<f64>,
}

impl ProgressController {
    /// Create a controller resting in the scattered state
    pub fn new(transition_duration: f32, max_frame_seconds: f32) -> Result<Self, String> {
        if !transition_duration.is_finite() || transition_duration <= 0.0 {
            return Err(format!(
                "Transition duration must be positive, got {}",
                transition_duration
            ));
        }
        if !max_frame_seconds.is_finite() || max_frame_seconds <= 0.0 {
            return Err(format!(
                "Frame time cap must be positive, got {}",
                max_frame_seconds
            ));
        }

        Ok(Self {
            current: 0.0,
            target: 0.0,
            mode: Mode::Scattered,
            transition_duration,
            max_frame_seconds,
            last_timestamp: None,
        })
    }

    /// Redirect the target. `current` does not move until the next tick.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.target = mode.target();
    }

    pub fn toggle_mode(&mut self) -> Mode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    /// Advance `current` toward `target` by `elapsed_seconds / transition_duration`.
    ///
    /// Lands exactly on the target once the remaining distance fits in one
    /// step. Non-positive or NaN samples do nothing; samples above the frame
    /// cap (a tab returning from the background, say) jump straight to target.
    pub fn tick(&mut self, elapsed_seconds: f32) {
        if elapsed_seconds.is_nan() || elapsed_seconds <= 0.0 {
            return;
        }
        if elapsed_seconds > self.max_frame_seconds {
            self.current = self.target;
            return;
        }

        let step = elapsed_seconds / self.transition_duration;
        let diff = self.target - self.current;

        if diff.abs() <= step {
            self.current = self.target;
        } else {
            self.current = (self.current + diff.signum() * step).clamp(0.0, 1.0);
        }
    }

    /// Tick using the delta since the previous call.
    ///
    /// The first call after construction or `reset_clock` only records the
    /// timestamp. A timestamp that does not move forward yields no motion.
    /// Returns the elapsed seconds that were applied.
    pub fn advance(&mut self, timestamp_seconds: f64) -> f32 {
        if !timestamp_seconds.is_finite() {
            return 0.0;
        }

        let elapsed = match self.last_timestamp {
            Some(prev) if timestamp_seconds > prev => (timestamp_seconds - prev) as f32,
            _ => 0.0,
        };
        self.last_timestamp = Some(match self.last_timestamp {
            Some(prev) => prev.max(timestamp_seconds),
            None => timestamp_seconds,
        });

        self.tick(elapsed);
        elapsed
    }

    /// Forget the previous timestamp so the next `advance` starts fresh
    pub fn reset_clock(&mut self) {
        self.last_timestamp = None;
    }

    /// Seek to a specific progress value (0.0 to 1.0). Target is unchanged.
    pub fn set_progress(&mut self, progress: f32) {
        if progress.is_nan() {
            return;
        }
        self.current = progress.clamp(0.0, 1.0);
    }

    pub fn get_progress(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// True once the visible progress has reached its target
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    pub fn transition_duration(&self) -> f32 {
        self.transition_duration
    }
}

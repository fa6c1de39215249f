//! Explicit per-frame driver: advance the clock, tick progress, rewrite transforms.
//!
//! The host calls `frame` once per display refresh (or `step` with its own
//! delta). Each call reads the progress value once after ticking and hands
//! that single value to every evaluator, so a frame never mixes two progress
//! values. Stopping only takes effect between calls.

use crate::data::SceneConfig;
use crate::particles::{OrnamentTransform, ParticleTransform};
use crate::scene::{rig_rotation, MorphScene, StarTopper};
use super::progress::{Mode, ProgressController};

/// Read-only snapshot of the most recently completed frame
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub progress: f32,
    /// Seconds of animated time since the first frame
    pub time: f32,
    pub foliage: &'a [ParticleTransform],
    pub ornaments: &'a [OrnamentTransform],
    pub star: StarTopper,
    /// Y rotation of the whole presentation group
    pub rig_rotation: f32,
}

pub struct FrameDriver {
    controller: ProgressController,
    scene: MorphScene,
    running: bool,
    /// Accumulated animation time in seconds
    time: f64,
    /// Progress used for the last evaluated frame
    frame_progress: f32,
    frame_count: u64,
}

impl FrameDriver {
    pub fn new(config: &SceneConfig) -> Result<Self, String> {
        let scene = MorphScene::build(config)?;
        let controller = ProgressController::new(config.transition_duration, config.max_frame_seconds)?;

        Ok(Self {
            controller,
            scene,
            running: true,
            time: 0.0,
            frame_progress: 0.0,
            frame_count: 0,
        })
    }

    /// Redirect the morph. Observed by the next frame.
    pub fn set_mode(&mut self, mode: Mode) {
        self.controller.set_mode(mode);
    }

    pub fn toggle_mode(&mut self) -> Mode {
        self.controller.toggle_mode()
    }

    pub fn mode(&self) -> Mode {
        self.controller.mode()
    }

    /// Run one frame for a host timestamp in seconds.
    ///
    /// The first frame (and the first after `start`) applies no motion.
    /// Returns `None` without touching any state once stopped.
    pub fn frame(&mut self, timestamp_seconds: f64) -> Option<FrameView<'_>> {
        if !self.running {
            return None;
        }
        let elapsed = self.controller.advance(timestamp_seconds);
        Some(self.finish_frame(elapsed))
    }

    /// Run one frame that advances time by `elapsed_seconds`
    pub fn step(&mut self, elapsed_seconds: f32) -> Option<FrameView<'_>> {
        if !self.running {
            return None;
        }
        self.controller.tick(elapsed_seconds);
        let elapsed = if elapsed_seconds.is_finite() { elapsed_seconds.max(0.0) } else { 0.0 };
        Some(self.finish_frame(elapsed))
    }

    fn finish_frame(&mut self, elapsed: f32) -> FrameView<'_> {
        self.time += elapsed as f64;
        let progress = self.controller.get_progress();

        self.scene.evaluate(progress, self.time as f32);
        self.frame_progress = progress;
        self.frame_count += 1;

        self.view()
    }

    /// Snapshot of the last completed frame
    pub fn view(&self) -> FrameView<'_> {
        let time = self.time as f32;
        FrameView {
            progress: self.frame_progress,
            time,
            foliage: self.scene.foliage().transforms(),
            ornaments: self.scene.ornaments().transforms(),
            star: self.scene.star(),
            rig_rotation: rig_rotation(time),
        }
    }

    /// Cancel the loop; no further frames run until `start`
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Resume after `stop`. The next frame only re-anchors the clock.
    pub fn start(&mut self) {
        if !self.running {
            self.controller.reset_clock();
            self.running = true;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Live progress value (may be ahead of the last frame's value)
    pub fn progress(&self) -> f32 {
        self.controller.get_progress()
    }

    /// Seek the morph; the next frame renders from this value
    pub fn set_progress(&mut self, progress: f32) {
        self.controller.set_progress(progress);
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn scene(&self) -> &MorphScene {
        &self.scene
    }
}

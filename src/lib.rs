use wasm_bindgen::prelude::*;

pub mod animation;
pub mod data;
pub mod geometry;
pub mod math;
pub mod particles;
pub mod scene;

pub use animation::{Easing, FrameDriver, FrameView, Mode, ProgressController};
pub use data::SceneConfig;
pub use scene::MorphScene;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Morph engine exposed to JavaScript.
///
/// The page owns the `requestAnimationFrame` loop and calls `frame` with the
/// callback's timestamp, then uploads `foliage_data` and `ornament_data`.
#[wasm_bindgen]
pub struct MorphTree {
    driver: FrameDriver,
}

#[wasm_bindgen]
impl MorphTree {
    /// Create an engine with the default scene
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<MorphTree, JsValue> {
        Self::with_config(&SceneConfig::default())
    }

    /// Create an engine from a YAML scene configuration
    #[wasm_bindgen]
    pub fn from_yaml(yaml: &str) -> Result<MorphTree, JsValue> {
        let config = SceneConfig::from_yaml(yaml).map_err(|e| {
            console_error(&format!("Rejected scene configuration: {}", e));
            JsValue::from_str(&e)
        })?;
        Self::with_config(&config)
    }

    /// Head toward the tree (`true`) or the scattered cloud (`false`)
    #[wasm_bindgen]
    pub fn set_mode(&mut self, assembled: bool) {
        self.driver.set_mode(mode_from_flag(assembled));
    }

    /// Flip the mode; returns true if now assembling
    #[wasm_bindgen]
    pub fn toggle_mode(&mut self) -> bool {
        self.driver.toggle_mode() == Mode::Assembled
    }

    #[wasm_bindgen]
    pub fn is_assembled(&self) -> bool {
        self.driver.mode() == Mode::Assembled
    }

    /// Advance to a `requestAnimationFrame` timestamp (milliseconds).
    /// Returns false once the loop has been stopped.
    #[wasm_bindgen]
    pub fn frame(&mut self, timestamp_ms: f64) -> bool {
        self.driver.frame(timestamp_ms / 1000.0).is_some()
    }

    /// Advance by an explicit delta in seconds
    #[wasm_bindgen]
    pub fn step(&mut self, dt: f32) -> bool {
        self.driver.step(dt).is_some()
    }

    /// Stop the loop, e.g. when the view is torn down
    #[wasm_bindgen]
    pub fn stop(&mut self) {
        if self.driver.is_running() {
            console_log(&format!(
                "Morph loop stopped after {} frames",
                self.driver.frame_count()
            ));
        }
        self.driver.stop();
    }

    #[wasm_bindgen]
    pub fn start(&mut self) {
        self.driver.start();
    }

    #[wasm_bindgen]
    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    /// Progress used by the last frame (0.0 scattered to 1.0 assembled)
    #[wasm_bindgen]
    pub fn progress(&self) -> f32 {
        self.driver.view().progress
    }

    /// Set progress manually (0.0 to 1.0); applied on the next frame
    #[wasm_bindgen]
    pub fn seek(&mut self, progress: f32) {
        self.driver.set_progress(progress);
    }

    /// 8 floats per particle: position(3), size, alpha, color(3)
    #[wasm_bindgen]
    pub fn foliage_data(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.driver.scene().foliage().get_particle_data().as_slice())
    }

    /// 11 floats per ornament: position(3), rotation(3), scale, color(3), kind
    #[wasm_bindgen]
    pub fn ornament_data(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.driver.scene().ornaments().get_instance_data().as_slice())
    }

    /// RGB highlight the point shader mixes into foliage cores
    #[wasm_bindgen]
    pub fn foliage_tip_color(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.driver.scene().foliage().tip_color().to_array()[..])
    }

    #[wasm_bindgen]
    pub fn star_color(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.driver.view().star.color.to_array()[..])
    }

    #[wasm_bindgen]
    pub fn star_scale(&self) -> f32 {
        self.driver.view().star.scale
    }

    #[wasm_bindgen]
    pub fn star_height(&self) -> f32 {
        self.driver.view().star.position.y
    }

    /// Y rotation for the whole presentation group
    #[wasm_bindgen]
    pub fn rig_rotation(&self) -> f32 {
        self.driver.view().rig_rotation
    }

    #[wasm_bindgen]
    pub fn particle_count(&self) -> usize {
        self.driver.scene().foliage().len()
    }

    #[wasm_bindgen]
    pub fn ornament_count(&self) -> usize {
        self.driver.scene().ornaments().len()
    }
}

impl MorphTree {
    fn with_config(config: &SceneConfig) -> Result<MorphTree, JsValue> {
        let driver = FrameDriver::new(config).map_err(|e| {
            console_error(&format!("Failed to build scene: {}", e));
            JsValue::from_str(&e)
        })?;

        console_log(&format!(
            "Morph tree ready: {} particles, {} ornaments, seed {}",
            driver.scene().foliage().len(),
            driver.scene().ornaments().len(),
            config.seed
        ));

        Ok(Self { driver })
    }
}

fn mode_from_flag(assembled: bool) -> Mode {
    if assembled {
        Mode::Assembled
    } else {
        Mode::Scattered
    }
}

/// Write a line to the browser console; silent off the web
fn console_log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

fn console_error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

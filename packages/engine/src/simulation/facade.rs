use wasm_bindgen::prelude::*;

use crate::systems::WindShift;

use super::perf_stats::PerfStats;
use super::FireGrid;

/// JS-facing fire simulation
///
/// Unlike `FireGrid`, the facade keeps the source row fed: it seeds from
/// the intensity setting on creation and again after every resize.
#[wasm_bindgen]
pub struct FireSim {
    core: FireGrid,
}

#[wasm_bindgen]
impl FireSim {
    /// Create a fire with default settings and the classic palette
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        let mut core = FireGrid::new(width, height);
        core.reseed();
        Self { core }
    }

    /// Create a fire from a JSON configuration (camelCase keys)
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: String) -> Result<FireSim, JsValue> {
        let mut core = FireGrid::from_config_json(&json).map_err(|e| {
            console_warn!("fire config rejected: {}", e);
            JsValue::from_str(&e)
        })?;
        core.reseed();
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn wind(&self) -> f32 { self.core.wind() }

    #[wasm_bindgen(getter)]
    pub fn intensity(&self) -> f32 { self.core.intensity() }

    #[wasm_bindgen(getter)]
    pub fn palette_size(&self) -> usize { self.core.palette_size() }

    // === INPUT ===

    /// Set the source row to a raw heat level
    pub fn seed(&mut self, base: i32) {
        self.core.seed(base);
    }

    /// Slider value in percent (0..=100)
    pub fn set_intensity(&mut self, percent: f32) {
        self.core.set_intensity(percent);
    }

    /// Touch drag delta in pixels, positive when the finger moves up
    pub fn nudge_intensity(&mut self, delta_y: f32) {
        self.core.nudge_intensity(delta_y);
    }

    /// Add heat around a grid cell; returns the number of cells changed
    pub fn inject_heat(&mut self, cx: i32, cy: i32, intensity: f32, radius: f32) -> usize {
        self.core.inject_heat(cx, cy, intensity, radius)
    }

    /// Pointer position in viewport pixels
    pub fn pointer_interact(&mut self, x: f32, y: f32, viewport_w: f32, viewport_h: f32) -> bool {
        self.core.pointer_interact(x, y, viewport_w, viewport_h)
    }

    /// All touch contacts as `[x0, y0, x1, y1, ...]`
    pub fn multi_touch(&mut self, points: &[f32], viewport_w: f32, viewport_h: f32) -> usize {
        self.core.multi_touch(points, viewport_w, viewport_h)
    }

    /// Reallocate the grid and reseed from the current intensity
    pub fn resize(&mut self, width: u32, height: u32) {
        self.core.resize(width, height);
        self.core.reseed();
    }

    /// Cool the whole grid (the source row stays cold until the next seed)
    pub fn clear(&mut self) {
        self.core.clear();
    }

    // === SETTINGS ===

    pub fn set_decay_range(&mut self, decay_range: u32) {
        self.core.set_decay_range(decay_range);
    }

    pub fn set_wind_enabled(&mut self, enabled: bool) {
        self.core.set_wind_enabled(enabled);
    }

    pub fn set_wind_step(&mut self, step: f32) {
        self.core.set_wind_step(step);
    }

    /// Round partial winds stochastically instead of flooring them
    pub fn set_wind_stochastic(&mut self, stochastic: bool) {
        let shift = if stochastic { WindShift::Stochastic } else { WindShift::Floor };
        self.core.set_wind_shift(shift);
    }

    pub fn set_inject_radius(&mut self, radius: f32) {
        self.core.set_inject_radius(radius);
    }

    /// Heat added at the brush center by pointer input; negative values cool
    pub fn set_inject_intensity(&mut self, intensity: f32) {
        self.core.set_inject_intensity(Some(intensity));
    }

    pub fn reset_inject_intensity(&mut self) {
        self.core.set_inject_intensity(None);
    }

    pub fn get_config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === FRAME ===

    /// Step the simulation forward one generation
    pub fn step(&mut self) {
        self.core.step();
    }

    /// RGBA copy of the grid (`width * height * 4` bytes)
    pub fn to_image(&self) -> Vec<u8> {
        self.core.to_image()
    }

    /// Refresh the ABGR color array behind `colors_ptr`
    pub fn render(&mut self) {
        self.core.render_colors();
    }

    /// Nearest-neighbor upscale into a caller-provided RGBA surface
    pub fn blit(&self, dst: &mut [u8], dst_w: u32, dst_h: u32) -> bool {
        self.core.blit_nearest(dst, dst_w, dst_h)
    }

    /// Get pointer to colors array (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.core.colors_len()
    }

    pub fn colors_len_bytes(&self) -> usize {
        self.core.colors_len_bytes()
    }

    /// Get pointer to the raw heat levels
    pub fn heat_ptr(&self) -> *const u8 {
        self.core.heat_ptr()
    }

    pub fn heat_len(&self) -> usize {
        self.core.heat_len()
    }
}

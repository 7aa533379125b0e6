use wasm_bindgen::prelude::*;

/// Timings and counters of the last step (and render, if one followed it)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) wind_ms: f64,
    pub(super) propagate_ms: f64,
    pub(super) render_ms: f64,
    pub(super) frame: u64,
    pub(super) hot_cells: u32,
    pub(super) grid_size: u32,
    pub(super) palette_size: u32,
    pub(super) wind: f32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn wind_ms(&self) -> f64 { self.wind_ms }
    #[wasm_bindgen(getter)]
    pub fn propagate_ms(&self) -> f64 { self.propagate_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn hot_cells(&self) -> u32 { self.hot_cells }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
    #[wasm_bindgen(getter)]
    pub fn palette_size(&self) -> u32 { self.palette_size }
    #[wasm_bindgen(getter)]
    pub fn wind(&self) -> f32 { self.wind }
}

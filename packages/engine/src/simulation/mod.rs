//! FireGrid - cellular-automaton fire simulation
//!
//! FireGrid only orchestrates. The algorithms live in `systems/`; this
//! module owns the state they run on and splits its operations into:
//! - commands/  - seeding, intensity control, heat injection, resize
//! - step/      - one generation (wind drift + propagation)
//! - render/    - palette lookup into RGBA / ABGR buffers, letterboxed blit
//! - init/      - construction and runtime settings
//! - perf/      - optional per-step timing
//!
//! Everything runs on the thread that owns the grid. Hosts with several UI
//! threads must marshal input onto that thread before calling in.

use crate::core::grid::{Heat, HeatField};
use crate::core::random::{HeatRng, Xorshift32};
use crate::domain::config::{FireConfig, PaletteSpec};
use crate::domain::palette::Palette;
use crate::systems::{Wind, WindShift};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "render/viewport.rs"]
mod viewport;
mod facade;

pub use commands::DRAG_SENSITIVITY;
pub use facade::FireSim;
pub use perf_stats::PerfStats;
pub use viewport::Letterbox;

use perf_timer::PerfTimer;

/// Brush used by pointer and touch input
#[derive(Clone, Copy, Debug)]
pub(crate) struct InjectSettings {
    radius: f32,
    intensity: Option<f32>,
    scale: f32,
}

pub(crate) struct RenderBuffers {
    colors: Vec<u32>,   // ABGR, one per cell
}

/// The fire simulation
pub struct FireGrid<R = Xorshift32> {
    field: HeatField,
    palette: Palette,
    palette_spec: PaletteSpec,

    // Settings
    decay_range: u32,
    wind: Wind,
    wind_enabled: bool,
    inject: InjectSettings,
    intensity: f32,     // slider percent, 0..=100

    // State
    rng: R,
    rng_seed: u32,
    frame: u64,
    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl FireGrid {
    /// Create a cold grid with default settings and the classic palette.
    /// Dimensions are clamped to `1..=MAX_GRID_DIM`.
    pub fn new(width: u32, height: u32) -> Self {
        let (width, height) = init::clamp_dims(width, height);
        let config = FireConfig::with_size(width, height);
        init::create_fire_grid(&config, Palette::classic(), Xorshift32::new(config.rng_seed))
    }

    pub fn from_config(config: &FireConfig) -> Result<Self, String> {
        Self::with_rng(config, Xorshift32::new(config.rng_seed))
    }

    pub fn from_config_json(json: &str) -> Result<Self, String> {
        let config = FireConfig::from_json(json)?;
        Self::from_config(&config)
    }
}

impl<R: HeatRng> FireGrid<R> {
    /// Create a cold grid driven by the given random source
    pub fn with_rng(config: &FireConfig, rng: R) -> Result<Self, String> {
        config.validate()?;
        let palette = config.palette.build()?;
        if !palette.is_monotonic() {
            console_warn!("palette is not ordered cold to hot; flames may look odd");
        }
        Ok(init::create_fire_grid(config, palette, rng))
    }

    pub fn width(&self) -> u32 { self.field.width() }

    pub fn height(&self) -> u32 { self.field.height() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn palette(&self) -> &Palette { &self.palette }

    pub fn palette_size(&self) -> usize { self.palette.len() }

    /// Hottest heat level, `P - 1`
    pub fn max_heat(&self) -> Heat { self.palette.max_heat() }

    pub fn field(&self) -> &HeatField { &self.field }

    pub fn heat(&self, x: u32, y: u32) -> Heat {
        self.field.get(x as i32, y as i32)
    }

    pub fn wind(&self) -> f32 { self.wind.value() }

    pub fn intensity(&self) -> f32 { self.intensity }

    // === Commands ===

    /// Set every cell of the source row to `clamp(base, 0, P-1)`
    pub fn seed(&mut self, base: i32) {
        commands::seed(self, base);
    }

    /// Slider input in percent; seeds the source row proportionally
    pub fn set_intensity(&mut self, percent: f32) {
        commands::set_intensity(self, percent);
    }

    /// Touch drag: positive `delta_y` (finger moving up) raises intensity
    pub fn nudge_intensity(&mut self, delta_y: f32) {
        commands::nudge_intensity(self, delta_y);
    }

    /// Seed the source row again from the current intensity
    pub fn reseed(&mut self) {
        commands::reseed(self);
    }

    /// Add heat in a disk around a grid cell. Returns the number of cells changed.
    pub fn inject_heat(&mut self, cx: i32, cy: i32, intensity: f32, radius: f32) -> usize {
        commands::inject_heat(self, cx, cy, intensity, radius)
    }

    /// Pointer input in viewport coordinates. Returns false if it missed the grid.
    pub fn pointer_interact(&mut self, x: f32, y: f32, viewport_w: f32, viewport_h: f32) -> bool {
        commands::pointer_interact(self, x, y, viewport_w, viewport_h)
    }

    /// Touch input as flat `[x0, y0, x1, y1, ...]`. Returns the number of contacts applied.
    pub fn multi_touch(&mut self, points: &[f32], viewport_w: f32, viewport_h: f32) -> usize {
        commands::multi_touch(self, points, viewport_w, viewport_h)
    }

    /// Reallocate at new dimensions. All heat is discarded; call `seed` or `reseed` afterwards.
    pub fn resize(&mut self, width: u32, height: u32) {
        commands::resize(self, width, height);
    }

    /// Cool every cell and reset wind and frame count
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    // === Simulation ===

    /// Advance the simulation by one generation
    pub fn step(&mut self) {
        step::step(self);
    }

    // === Rendering ===

    /// RGBA buffer, `width * height * 4` bytes
    pub fn to_image(&self) -> Vec<u8> {
        render_extract::to_image(self)
    }

    /// Write RGBA into `out`. Returns false (leaving `out` untouched) if it is too small.
    pub fn write_image(&self, out: &mut [u8]) -> bool {
        render_extract::write_image(self, out)
    }

    /// Refresh the ABGR color buffer and return it
    pub fn render_colors(&mut self) -> &[u32] {
        render_extract::render_colors(self);
        &self.render.colors
    }

    /// Nearest-neighbor upscale into an RGBA surface, letterboxed with `palette[0]`
    pub fn blit_nearest(&self, dst: &mut [u8], dst_w: u32, dst_h: u32) -> bool {
        render_extract::blit_nearest(self, dst, dst_w, dst_h)
    }

    /// Get pointer to the ABGR color array (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 {
        self.render.colors.as_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.render.colors.len()
    }

    pub fn colors_len_bytes(&self) -> usize {
        self.render.colors.len() * std::mem::size_of::<u32>()
    }

    /// Get pointer to the raw heat array
    pub fn heat_ptr(&self) -> *const Heat {
        self.field.heat_ptr()
    }

    pub fn heat_len(&self) -> usize {
        self.field.size()
    }

    // === Settings ===

    pub fn decay_range(&self) -> u32 {
        self.decay_range
    }

    pub fn set_decay_range(&mut self, decay_range: u32) {
        settings::set_decay_range(self, decay_range);
    }

    pub fn wind_enabled(&self) -> bool {
        self.wind_enabled
    }

    pub fn set_wind_enabled(&mut self, enabled: bool) {
        settings::set_wind_enabled(self, enabled);
    }

    pub fn set_wind(&mut self, value: f32) {
        self.wind.set(value);
    }

    pub fn set_wind_step(&mut self, step: f32) {
        self.wind.set_step(step);
    }

    pub fn set_wind_shift(&mut self, shift: WindShift) {
        self.wind.set_shift(shift);
    }

    pub fn set_inject_radius(&mut self, radius: f32) {
        settings::set_inject_radius(self, radius);
    }

    /// `None` restores the default (hottest palette level)
    pub fn set_inject_intensity(&mut self, intensity: Option<f32>) {
        settings::set_inject_intensity(self, intensity);
    }

    pub fn set_inject_scale(&mut self, scale: f32) {
        settings::set_inject_scale(self, scale);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }

    /// Current settings as a configuration
    pub fn config(&self) -> FireConfig {
        settings::config_snapshot(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

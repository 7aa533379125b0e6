use crate::core::grid::HeatField;
use crate::core::random::HeatRng;
use crate::domain::config::{FireConfig, MAX_GRID_DIM};
use crate::domain::palette::Palette;
use crate::systems::Wind;

use super::perf_stats::PerfStats;
use super::{FireGrid, InjectSettings, RenderBuffers};

/// Clamp requested dimensions to `1..=MAX_GRID_DIM`
pub(super) fn clamp_dims(width: u32, height: u32) -> (u32, u32) {
    let w = width.clamp(1, MAX_GRID_DIM);
    let h = height.clamp(1, MAX_GRID_DIM);
    if (w, h) != (width, height) {
        console_warn!("grid size {}x{} clamped to {}x{}", width, height, w, h);
    }
    (w, h)
}

/// Build a cold grid. `config` must already be validated.
pub(super) fn create_fire_grid<R: HeatRng>(config: &FireConfig, palette: Palette, rng: R) -> FireGrid<R> {
    let field = HeatField::new(config.width, config.height);
    let background = palette.abgr(0);

    console_log!(
        "fire grid {}x{} (palette {} levels, decay 0..{})",
        config.width,
        config.height,
        palette.len(),
        config.decay_range
    );

    let wind = Wind::new(config.wind_step, config.wind_shift);

    FireGrid {
        render: RenderBuffers {
            colors: vec![background; field.size()],
        },
        field,
        palette,
        palette_spec: config.palette.clone(),
        decay_range: config.decay_range,
        wind,
        wind_enabled: config.wind_enabled,
        inject: InjectSettings {
            radius: config.inject_radius,
            intensity: config.inject_intensity,
            scale: config.inject_scale,
        },
        intensity: config.intensity.clamp(0.0, 100.0),
        rng,
        rng_seed: config.rng_seed,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

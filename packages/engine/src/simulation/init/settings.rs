use crate::core::random::HeatRng;
use crate::domain::config::{FireConfig, MAX_DECAY_RANGE};

use super::FireGrid;

pub(super) fn set_decay_range<R: HeatRng>(grid: &mut FireGrid<R>, decay_range: u32) {
    grid.decay_range = decay_range.clamp(1, MAX_DECAY_RANGE);
}

pub(super) fn set_wind_enabled<R: HeatRng>(grid: &mut FireGrid<R>, enabled: bool) {
    grid.wind_enabled = enabled;
    if !enabled {
        grid.wind.reset();
    }
}

pub(super) fn set_inject_radius<R: HeatRng>(grid: &mut FireGrid<R>, radius: f32) {
    if radius.is_finite() {
        grid.inject.radius = radius.max(0.0);
    }
}

pub(super) fn set_inject_intensity<R: HeatRng>(grid: &mut FireGrid<R>, intensity: Option<f32>) {
    grid.inject.intensity = intensity.filter(|v| v.is_finite());
}

pub(super) fn set_inject_scale<R: HeatRng>(grid: &mut FireGrid<R>, scale: f32) {
    if scale.is_finite() {
        grid.inject.scale = scale.max(0.0);
    }
}

pub(super) fn enable_perf_metrics<R: HeatRng>(grid: &mut FireGrid<R>, enabled: bool) {
    grid.perf_enabled = enabled;
    if !enabled {
        grid.perf_stats.reset();
    }
}

pub(super) fn config_snapshot<R: HeatRng>(grid: &FireGrid<R>) -> FireConfig {
    FireConfig {
        width: grid.field.width(),
        height: grid.field.height(),
        decay_range: grid.decay_range,
        palette: grid.palette_spec.clone(),
        wind_enabled: grid.wind_enabled,
        wind_step: grid.wind.step(),
        wind_shift: grid.wind.shift(),
        inject_radius: grid.inject.radius,
        inject_intensity: grid.inject.intensity,
        inject_scale: grid.inject.scale,
        intensity: grid.intensity,
        rng_seed: grid.rng_seed,
    }
}

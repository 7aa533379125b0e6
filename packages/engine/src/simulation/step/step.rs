use crate::core::random::HeatRng;
use crate::systems::propagate;

use super::perf_timer::elapsed_ms;
use super::{FireGrid, PerfTimer};

pub(super) fn step<R: HeatRng>(grid: &mut FireGrid<R>) {
    let perf_on = grid.perf_enabled;
    if perf_on {
        grid.perf_stats.reset();
    }
    let step_start = PerfTimer::start_if(perf_on);

    // Wind drifts before propagation so this frame's shift uses the new value
    let wind = if grid.wind_enabled {
        let t0 = PerfTimer::start_if(perf_on);
        grid.wind.drift(&mut grid.rng);
        grid.perf_stats.wind_ms = elapsed_ms(t0);
        Some(&grid.wind)
    } else {
        None
    };

    let t0 = PerfTimer::start_if(perf_on);
    propagate(&mut grid.field, grid.decay_range, wind, &mut grid.rng);
    grid.perf_stats.propagate_ms = elapsed_ms(t0);

    if perf_on {
        grid.perf_stats.frame = grid.frame;
        grid.perf_stats.hot_cells = grid.field.hot_cells() as u32;
        grid.perf_stats.grid_size = grid.field.size() as u32;
        grid.perf_stats.palette_size = grid.palette.len() as u32;
        grid.perf_stats.wind = grid.wind.value();
        grid.perf_stats.step_ms = elapsed_ms(step_start);
    }

    grid.frame += 1;
}

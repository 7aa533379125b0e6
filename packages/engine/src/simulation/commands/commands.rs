use crate::core::grid::{Heat, HeatField};
use crate::core::random::HeatRng;
use crate::systems::{self, Brush};

use super::init::clamp_dims;
use super::FireGrid;

/// Intensity percent gained per pixel of upward drag
pub const DRAG_SENSITIVITY: f32 = 0.1;

pub(super) fn seed<R: HeatRng>(grid: &mut FireGrid<R>, base: i32) {
    let level = base.clamp(0, grid.palette.max_heat() as i32) as Heat;
    let row = grid.field.source_row();
    grid.field.fill_row(row, level);
}

/// Heat level for a slider position
pub(super) fn intensity_level(percent: f32, max: Heat) -> i32 {
    (percent.clamp(0.0, 100.0) / 100.0 * max as f32).round() as i32
}

pub(super) fn set_intensity<R: HeatRng>(grid: &mut FireGrid<R>, percent: f32) {
    if !percent.is_finite() {
        return;
    }
    grid.intensity = percent.clamp(0.0, 100.0);
    reseed(grid);
}

pub(super) fn nudge_intensity<R: HeatRng>(grid: &mut FireGrid<R>, delta_y: f32) {
    if !delta_y.is_finite() {
        return;
    }
    let percent = grid.intensity + delta_y * DRAG_SENSITIVITY;
    set_intensity(grid, percent);
}

pub(super) fn reseed<R: HeatRng>(grid: &mut FireGrid<R>) {
    let level = intensity_level(grid.intensity, grid.palette.max_heat());
    seed(grid, level);
}

pub(super) fn inject_heat<R: HeatRng>(
    grid: &mut FireGrid<R>,
    cx: i32,
    cy: i32,
    intensity: f32,
    radius: f32,
) -> usize {
    let brush = Brush {
        cx,
        cy,
        intensity,
        radius,
        scale: grid.inject.scale,
    };
    systems::inject_heat(&mut grid.field, grid.palette.max_heat(), &brush)
}

/// `gx = floor(x * width / viewport_w)`, same for y. None if the point misses the grid.
pub(super) fn viewport_to_grid(
    x: f32,
    y: f32,
    viewport_w: f32,
    viewport_h: f32,
    width: u32,
    height: u32,
) -> Option<(i32, i32)> {
    if !(viewport_w > 0.0 && viewport_h > 0.0) || !x.is_finite() || !y.is_finite() {
        return None;
    }
    let gx = (x * width as f32 / viewport_w).floor();
    let gy = (y * height as f32 / viewport_h).floor();
    if gx < 0.0 || gy < 0.0 || gx >= width as f32 || gy >= height as f32 {
        return None;
    }
    Some((gx as i32, gy as i32))
}

pub(super) fn pointer_interact<R: HeatRng>(
    grid: &mut FireGrid<R>,
    x: f32,
    y: f32,
    viewport_w: f32,
    viewport_h: f32,
) -> bool {
    let Some((gx, gy)) = viewport_to_grid(x, y, viewport_w, viewport_h, grid.width(), grid.height()) else {
        return false;
    };
    let intensity = grid
        .inject
        .intensity
        .unwrap_or(grid.palette.max_heat() as f32);
    let radius = grid.inject.radius;
    inject_heat(grid, gx, gy, intensity, radius);
    true
}

pub(super) fn multi_touch<R: HeatRng>(
    grid: &mut FireGrid<R>,
    points: &[f32],
    viewport_w: f32,
    viewport_h: f32,
) -> usize {
    let mut applied = 0;
    for p in points.chunks_exact(2) {
        if pointer_interact(grid, p[0], p[1], viewport_w, viewport_h) {
            applied += 1;
        }
    }
    applied
}

pub(super) fn resize<R: HeatRng>(grid: &mut FireGrid<R>, width: u32, height: u32) {
    let (width, height) = clamp_dims(width, height);
    grid.field = HeatField::new(width, height);
    grid.render.colors = vec![grid.palette.abgr(0); grid.field.size()];
    grid.wind.reset();
    console_log!("fire grid resized to {}x{}", width, height);
}

pub(super) fn clear<R: HeatRng>(grid: &mut FireGrid<R>) {
    grid.field.clear();
    grid.render.colors.fill(grid.palette.abgr(0));
    grid.wind.reset();
    grid.frame = 0;
}

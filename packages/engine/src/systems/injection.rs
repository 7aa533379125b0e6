//! Heat injection - radial brush for pointer and touch input

use crate::core::grid::{Heat, HeatField};

/// One brush application in grid coordinates
#[derive(Clone, Copy, Debug)]
pub struct Brush {
    pub cx: i32,
    pub cy: i32,
    pub intensity: f32,
    pub radius: f32,
    pub scale: f32,
}

/// Add heat in a disk around `(cx, cy)`.
///
/// A cell at distance `d <= radius` gains
/// `floor(intensity * (radius - d) / radius * scale)`, clamped to
/// `[0, max]`. A radius of zero heats the center cell only. Cells outside
/// the field are skipped. Returns the number of cells that changed.
pub fn inject_heat(field: &mut HeatField, max: Heat, brush: &Brush) -> usize {
    let Brush { cx, cy, intensity, radius, scale } = *brush;
    if !intensity.is_finite() || !scale.is_finite() {
        return 0;
    }

    if !radius.is_finite() || radius <= 0.0 {
        if !field.in_bounds(cx, cy) {
            return 0;
        }
        let amount = (intensity * scale).floor() as i32;
        return field.add_clamped(cx as u32, cy as u32, amount, max) as usize;
    }

    // Only the part of the disk that overlaps the field is scanned
    let reach = radius.ceil() as i64;
    let (cx, cy) = (cx as i64, cy as i64);
    let x0 = cx.saturating_sub(reach).max(0);
    let x1 = cx.saturating_add(reach).min(field.width() as i64 - 1);
    let y0 = cy.saturating_sub(reach).max(0);
    let y1 = cy.saturating_add(reach).min(field.height() as i64 - 1);

    let mut changed = 0;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let (dx, dy) = ((x - cx) as f64, (y - cy) as f64);
            let dist = (dx * dx + dy * dy).sqrt() as f32;
            if dist > radius {
                continue;
            }
            let amount = (intensity * (radius - dist) / radius * scale).floor() as i32;
            if amount == 0 {
                continue;
            }
            if field.add_clamped(x as u32, y as u32, amount, max) {
                changed += 1;
            }
        }
    }
    changed
}

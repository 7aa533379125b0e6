//! Fire propagation - one generation of the doom fire automaton
//!
//! The bottom row is the heat source. Every other cell takes the value of
//! the cell below it in the previous frame, minus a random decay, so heat
//! climbs one row per step and cools as it goes.
//!
//! Rows are read from the snapshot (`HeatField::back`) and written to the
//! live buffer. Every cell above the source row is rewritten each
//! generation, so an unfed fire always goes out within `height - 1` steps.

use crate::core::grid::{Heat, HeatField};
use crate::core::random::HeatRng;

use super::wind::{shifted_column, Wind};

/// Advance the field by one generation.
///
/// `decay_range` is `D`: decay is uniform in `[0, D)`. `wind` is the
/// current wind when wind is enabled.
pub fn propagate<R: HeatRng + ?Sized>(
    field: &mut HeatField,
    decay_range: u32,
    wind: Option<&Wind>,
    rng: &mut R,
) {
    let width = field.width() as usize;
    let height = field.height() as usize;
    if width == 0 || height < 2 {
        return;
    }

    field.snapshot();
    let (heat, back) = field.split_mut();
    let mut cooled: Vec<Heat> = vec![0; width];

    // Source row (height - 1) is only read, never written.
    for y in 0..height - 1 {
        let dst_row = y * width;
        let src_row = dst_row + width;

        for x in 0..width {
            let below = *fast!(back, [src_row + x]);
            let decay = rng.below(decay_range).min(Heat::MAX as u32) as Heat;
            fast!(cooled, [x] = below.saturating_sub(decay));
        }

        // Unshifted first so no cell is skipped, then the wind-shifted writes
        heat[dst_row..dst_row + width].copy_from_slice(&cooled);
        if let Some(wind) = wind {
            for x in 0..width {
                let shift = wind.column_shift(rng);
                if shift != 0 {
                    let target = shifted_column(x, shift, width);
                    fast!(heat, [dst_row + target] = *fast!(cooled, [x]));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::Xorshift32;
    use crate::systems::wind::WindShift;

    fn gale(value: f32) -> Wind {
        let mut wind = Wind::new(0.0, WindShift::Floor);
        wind.set(value);
        wind
    }

    #[test]
    fn trailing_edge_is_rewritten_under_wind() {
        let mut field = HeatField::new(6, 3);
        let mut rng = Xorshift32::default();
        // Stale heat in the column the wind blows away from
        field.set(0, 1, 20);
        field.set(5, 0, 20);

        propagate(&mut field, 1, Some(&gale(1.0)), &mut rng);
        assert_eq!(field.get(0, 1), 0);

        propagate(&mut field, 1, Some(&gale(-1.0)), &mut rng);
        assert!(field.is_cold());
    }

    #[test]
    fn leading_edge_keeps_its_own_value() {
        let mut field = HeatField::new(4, 2);
        let mut rng = Xorshift32::default();
        field.fill_row(1, 0);
        field.set(2, 1, 9);
        field.set(3, 1, 5);

        propagate(&mut field, 1, Some(&gale(1.0)), &mut rng);
        // Column 3 cannot move right, so it overwrites column 2's arrival
        assert_eq!(field.row(0), &[0, 0, 0, 5]);
    }
}

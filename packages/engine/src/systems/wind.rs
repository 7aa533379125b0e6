//! Wind - lateral drift of the flame
//!
//! The wind value does a bounded random walk in `[-1, 1]`. During
//! propagation each write is shifted sideways by a whole number of
//! columns derived from the wind.

use serde::{Deserialize, Serialize};

use crate::core::random::HeatRng;

pub const WIND_MIN: f32 = -1.0;
pub const WIND_MAX: f32 = 1.0;

/// How a wind value becomes a column offset
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindShift {
    /// `±floor(|wind|)`: only a full-strength wind moves the flame
    #[default]
    Floor,
    /// `±floor(|wind| + u)`, `u` uniform in `[0, 1)`: a wind of 0.3 shifts
    /// one column 30% of the time
    Stochastic,
}

#[derive(Clone, Debug)]
pub struct Wind {
    value: f32,
    step: f32,
    shift: WindShift,
}

impl Wind {
    pub fn new(step: f32, shift: WindShift) -> Self {
        Self { value: 0.0, step: sanitize_step(step), shift }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn shift(&self) -> WindShift {
        self.shift
    }

    pub fn set(&mut self, value: f32) {
        if value.is_finite() {
            self.value = value.clamp(WIND_MIN, WIND_MAX);
        }
    }

    pub fn set_step(&mut self, step: f32) {
        self.step = sanitize_step(step);
    }

    pub fn set_shift(&mut self, shift: WindShift) {
        self.shift = shift;
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }

    /// One random-walk step: `wind += uniform(-k, k)`, clamped
    pub fn drift<R: HeatRng + ?Sized>(&mut self, rng: &mut R) {
        self.value = (self.value + rng.signed(self.step)).clamp(WIND_MIN, WIND_MAX);
    }

    /// Column offset for one write, at most one column either way
    #[inline]
    pub fn column_shift<R: HeatRng + ?Sized>(&self, rng: &mut R) -> i32 {
        let w = self.value;
        let magnitude = match self.shift {
            WindShift::Floor => w.abs().floor() as i32,
            WindShift::Stochastic => (w.abs() + rng.unit()).floor() as i32,
        }
        .min(1);
        if w < 0.0 { -magnitude } else { magnitude }
    }
}

fn sanitize_step(step: f32) -> f32 {
    if step.is_finite() { step.clamp(0.0, 1.0) } else { 0.0 }
}

/// Apply a shift to column `x`; targets outside the row fall back to `x`
#[inline]
pub fn shifted_column(x: usize, shift: i32, width: usize) -> usize {
    let target = x as i64 + shift as i64;
    if target < 0 || target >= width as i64 {
        x
    } else {
        target as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::Xorshift32;

    fn blowing(value: f32, shift: WindShift) -> Wind {
        let mut wind = Wind::new(0.0, shift);
        wind.set(value);
        wind
    }

    #[test]
    fn drift_stays_bounded() {
        let mut wind = Wind::new(0.5, WindShift::Floor);
        let mut rng = Xorshift32::new(3);
        for _ in 0..10_000 {
            wind.drift(&mut rng);
            assert!((WIND_MIN..=WIND_MAX).contains(&wind.value()));
        }
    }

    #[test]
    fn drift_moves_at_most_one_step() {
        let mut wind = Wind::new(0.025, WindShift::Floor);
        let mut rng = Xorshift32::new(11);
        for _ in 0..1000 {
            let before = wind.value();
            wind.drift(&mut rng);
            assert!((wind.value() - before).abs() <= 0.025 + f32::EPSILON);
        }
    }

    #[test]
    fn set_clamps_and_ignores_nan() {
        let mut wind = Wind::new(0.1, WindShift::Floor);
        wind.set(5.0);
        assert_eq!(wind.value(), 1.0);
        wind.set(f32::NAN);
        assert_eq!(wind.value(), 1.0);
        wind.set(-3.0);
        assert_eq!(wind.value(), -1.0);
    }

    #[test]
    fn floor_shift_moves_only_at_full_strength() {
        let mut rng = Xorshift32::new(5);
        assert_eq!(blowing(1.0, WindShift::Floor).column_shift(&mut rng), 1);
        assert_eq!(blowing(-1.0, WindShift::Floor).column_shift(&mut rng), -1);
        for w in [0.0, 0.3, 0.99, -0.3, -0.99] {
            assert_eq!(blowing(w, WindShift::Floor).column_shift(&mut rng), 0, "wind {}", w);
        }
    }

    #[test]
    fn floor_shift_draws_no_randomness() {
        let mut rng = Xorshift32::new(21);
        let mut untouched = rng.clone();
        blowing(0.7, WindShift::Floor).column_shift(&mut rng);
        assert_eq!(rng.next_u32(), untouched.next_u32());
    }

    #[test]
    fn stochastic_shift_is_proportional() {
        let mut rng = Xorshift32::new(9);
        let wind = blowing(0.3, WindShift::Stochastic);
        let shifted = (0..10_000).filter(|_| wind.column_shift(&mut rng) == 1).count();
        assert!((2_500..3_500).contains(&shifted), "shifted {} of 10000", shifted);

        let full = blowing(-1.0, WindShift::Stochastic);
        for _ in 0..100 {
            assert_eq!(full.column_shift(&mut rng), -1);
        }
    }

    #[test]
    fn shift_mode_reads_lowercase_json() {
        let shift: WindShift = serde_json::from_str("\"stochastic\"").unwrap();
        assert_eq!(shift, WindShift::Stochastic);
        assert_eq!(serde_json::to_string(&WindShift::Floor).unwrap(), "\"floor\"");
    }

    #[test]
    fn shift_off_the_row_falls_back() {
        assert_eq!(shifted_column(0, -1, 8), 0);
        assert_eq!(shifted_column(7, 1, 8), 7);
        assert_eq!(shifted_column(3, 1, 8), 4);
    }
}

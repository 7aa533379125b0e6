use super::*;

impl HeatField {
    /// Heat at (x, y); cells outside the field read as cold
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Heat {
        if !self.in_bounds(x, y) {
            return 0;
        }
        self.heat[self.index(x as u32, y as u32)]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: Heat) {
        let idx = self.index(x, y);
        self.heat[idx] = value;
    }

    pub fn row(&self, y: u32) -> &[Heat] {
        let start = self.index(0, y);
        &self.heat[start..start + self.width as usize]
    }

    pub fn fill_row(&mut self, y: u32, value: Heat) {
        if y >= self.height {
            return;
        }
        let start = self.index(0, y);
        let end = start + self.width as usize;
        self.heat[start..end].fill(value);
    }

    /// Add `amount` to a cell, clamped to `[0, max]`. Returns true if the cell changed.
    #[inline]
    pub fn add_clamped(&mut self, x: u32, y: u32, amount: i32, max: Heat) -> bool {
        let idx = self.index(x, y);
        let old = self.heat[idx];
        let new = (old as i32).saturating_add(amount).clamp(0, max as i32) as Heat;
        self.heat[idx] = new;
        new != old
    }
}

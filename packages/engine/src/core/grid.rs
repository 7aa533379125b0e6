//! HeatField - row-major heat levels for the fire automaton
//!
//! One byte per cell. A cell value is a palette index, so palettes are
//! capped at 256 entries and the field never needs a second lookup table.
//!
//! `step` reads the previous frame from `back` and writes `heat`, so a
//! row never sees values written earlier in the same generation.

mod indexing;
mod accessors;

/// Heat level of one cell (palette index)
pub type Heat = u8;

pub struct HeatField {
    width: u32,
    height: u32,
    size: usize,

    pub heat: Vec<Heat>,     // current frame
    pub back: Vec<Heat>,     // previous frame snapshot, valid during step only
}

impl HeatField {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            size,
            heat: vec![0; size],
            back: vec![0; size],
        }
    }

    /// Copy the current frame into the back buffer
    #[inline]
    pub fn snapshot(&mut self) {
        self.back.copy_from_slice(&self.heat);
    }

    /// Borrow the write buffer and the snapshot at the same time
    #[inline]
    pub fn split_mut(&mut self) -> (&mut [Heat], &[Heat]) {
        (&mut self.heat, &self.back)
    }

    pub fn clear(&mut self) {
        self.heat.fill(0);
        self.back.fill(0);
    }

    pub fn heat_ptr(&self) -> *const Heat {
        self.heat.as_ptr()
    }

    /// Number of cells above zero
    pub fn hot_cells(&self) -> usize {
        self.heat.iter().filter(|&&h| h != 0).count()
    }

    pub fn is_cold(&self) -> bool {
        self.heat.iter().all(|&h| h == 0)
    }
}

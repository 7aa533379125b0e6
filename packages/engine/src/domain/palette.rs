//! Palette - ordered color ramp indexed by heat level
//!
//! Index 0 is the coldest (near-black) color and the last index the
//! hottest. Propagation only ever lowers heat as flame rises, so this
//! ordering is what makes the output read as fire.
//!
//! Colors are also kept pre-packed in ABGR (little-endian bytes
//! `[R, G, B, A]`) so the JS side can wrap the color buffer directly in an
//! `ImageData` without a conversion pass.

use serde::{Deserialize, Serialize};

use crate::core::grid::Heat;

/// Smallest usable palette: one cold and one hot entry
pub const MIN_PALETTE_SIZE: usize = 2;
/// Heat is stored in a byte, so a palette can address at most 256 levels
pub const MAX_PALETTE_SIZE: usize = Heat::MAX as usize + 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packed ABGR with full opacity
    #[inline]
    pub const fn abgr(self) -> u32 {
        0xFF00_0000 | ((self.b as u32) << 16) | ((self.g as u32) << 8) | (self.r as u32)
    }

    /// RGBA bytes with full opacity
    #[inline]
    pub const fn rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Rgb::new(c[0], c[1], c[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

/// The 37-step ramp of the classic doom fire: black, deep red, orange, yellow, white
const CLASSIC: [Rgb; 37] = [
    Rgb::new(0x07, 0x07, 0x07),
    Rgb::new(0x1F, 0x07, 0x07),
    Rgb::new(0x2F, 0x0F, 0x07),
    Rgb::new(0x47, 0x0F, 0x07),
    Rgb::new(0x57, 0x17, 0x07),
    Rgb::new(0x67, 0x1F, 0x07),
    Rgb::new(0x77, 0x1F, 0x07),
    Rgb::new(0x8F, 0x27, 0x07),
    Rgb::new(0x9F, 0x2F, 0x07),
    Rgb::new(0xAF, 0x3F, 0x07),
    Rgb::new(0xBF, 0x47, 0x07),
    Rgb::new(0xC7, 0x47, 0x07),
    Rgb::new(0xDF, 0x4F, 0x07),
    Rgb::new(0xDF, 0x57, 0x07),
    Rgb::new(0xDF, 0x57, 0x07),
    Rgb::new(0xD7, 0x5F, 0x07),
    Rgb::new(0xD7, 0x5F, 0x07),
    Rgb::new(0xD7, 0x67, 0x0F),
    Rgb::new(0xCF, 0x6F, 0x0F),
    Rgb::new(0xCF, 0x77, 0x0F),
    Rgb::new(0xCF, 0x7F, 0x0F),
    Rgb::new(0xCF, 0x87, 0x17),
    Rgb::new(0xC7, 0x87, 0x17),
    Rgb::new(0xC7, 0x8F, 0x17),
    Rgb::new(0xC7, 0x97, 0x1F),
    Rgb::new(0xBF, 0x9F, 0x1F),
    Rgb::new(0xBF, 0x9F, 0x1F),
    Rgb::new(0xBF, 0xA7, 0x27),
    Rgb::new(0xBF, 0xA7, 0x27),
    Rgb::new(0xBF, 0xAF, 0x2F),
    Rgb::new(0xB7, 0xAF, 0x2F),
    Rgb::new(0xB7, 0xB7, 0x2F),
    Rgb::new(0xB7, 0xB7, 0x37),
    Rgb::new(0xCF, 0xCF, 0x6F),
    Rgb::new(0xDF, 0xDF, 0x9F),
    Rgb::new(0xEF, 0xEF, 0xC7),
    Rgb::new(0xFF, 0xFF, 0xFF),
];

/// Gradient stops used when a generated ramp is requested without explicit stops
pub const FIRE_STOPS: [Rgb; 5] = [
    Rgb::new(0x07, 0x07, 0x07),
    Rgb::new(0x9F, 0x2F, 0x07),
    Rgb::new(0xDF, 0x57, 0x07),
    Rgb::new(0xC7, 0x97, 0x1F),
    Rgb::new(0xFF, 0xFF, 0xFF),
];

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb>,
    packed: Vec<u32>,
}

impl Palette {
    pub fn new(colors: Vec<Rgb>) -> Result<Self, String> {
        if colors.len() < MIN_PALETTE_SIZE || colors.len() > MAX_PALETTE_SIZE {
            return Err(format!(
                "palette needs {}..={} colors, got {}",
                MIN_PALETTE_SIZE,
                MAX_PALETTE_SIZE,
                colors.len()
            ));
        }
        let packed = colors.iter().map(|c| c.abgr()).collect();
        Ok(Self { colors, packed })
    }

    pub fn classic() -> Self {
        Self {
            colors: CLASSIC.to_vec(),
            packed: CLASSIC.iter().map(|c| c.abgr()).collect(),
        }
    }

    /// Ramp of `size` colors interpolated linearly through evenly spaced `stops`
    pub fn gradient(stops: &[Rgb], size: usize) -> Result<Self, String> {
        if stops.len() < 2 {
            return Err(format!("gradient needs at least 2 stops, got {}", stops.len()));
        }
        if !(MIN_PALETTE_SIZE..=MAX_PALETTE_SIZE).contains(&size) {
            return Err(format!(
                "gradient size must be {}..={}, got {}",
                MIN_PALETTE_SIZE, MAX_PALETTE_SIZE, size
            ));
        }

        let segments = (stops.len() - 1) as f32;
        let colors = (0..size)
            .map(|i| {
                let pos = i as f32 / (size - 1) as f32 * segments;
                let seg = (pos.floor() as usize).min(stops.len() - 2);
                stops[seg].lerp(stops[seg + 1], pos - seg as f32)
            })
            .collect();
        Self::new(colors)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Highest valid heat level (`P - 1`)
    #[inline]
    pub fn max_heat(&self) -> Heat {
        (self.colors.len() - 1) as Heat
    }

    #[inline]
    pub fn clamp_heat(&self, heat: Heat) -> usize {
        (heat as usize).min(self.colors.len() - 1)
    }

    /// Color for a heat level; out-of-range levels map to the hottest entry
    #[inline]
    pub fn rgb(&self, heat: Heat) -> Rgb {
        self.colors[self.clamp_heat(heat)]
    }

    #[inline]
    pub fn abgr(&self, heat: Heat) -> u32 {
        self.packed[self.clamp_heat(heat)]
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// True when no entry is brighter than the next (sum of channels)
    pub fn is_monotonic(&self) -> bool {
        let lum = |c: &Rgb| c.r as u32 + c.g as u32 + c.b as u32;
        self.colors.windows(2).all(|w| lum(&w[0]) <= lum(&w[1]))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}

//! Letterbox - aspect-preserving placement of the grid on a larger surface

/// Where the upscaled grid lands on a destination surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Letterbox {
    pub scale: f32,
    pub offset_x: u32,
    pub offset_y: u32,
    pub draw_w: u32,
    pub draw_h: u32,
}

impl Letterbox {
    /// Largest uniform scale that fits `src` inside `dst`, centered.
    /// None if either size is empty.
    pub fn fit(src_w: u32, src_h: u32, dst_w: u32, dst_h: u32) -> Option<Self> {
        if src_w == 0 || src_h == 0 || dst_w == 0 || dst_h == 0 {
            return None;
        }
        let scale = (dst_w as f32 / src_w as f32).min(dst_h as f32 / src_h as f32);
        let draw_w = ((src_w as f32 * scale).round() as u32).clamp(1, dst_w);
        let draw_h = ((src_h as f32 * scale).round() as u32).clamp(1, dst_h);
        Some(Self {
            scale,
            offset_x: (dst_w - draw_w) / 2,
            offset_y: (dst_h - draw_h) / 2,
            draw_w,
            draw_h,
        })
    }

    /// Grid cell shown at destination pixel `(dx, dy)`, None inside the bars
    #[inline]
    pub fn source_cell(&self, dx: u32, dy: u32, src_w: u32, src_h: u32) -> Option<(u32, u32)> {
        if dx < self.offset_x || dy < self.offset_y {
            return None;
        }
        let lx = dx - self.offset_x;
        let ly = dy - self.offset_y;
        if lx >= self.draw_w || ly >= self.draw_h {
            return None;
        }
        let sx = ((lx as u64 * src_w as u64) / self.draw_w as u64) as u32;
        let sy = ((ly as u64 * src_h as u64) / self.draw_h as u64) as u32;
        Some((sx.min(src_w - 1), sy.min(src_h - 1)))
    }
}

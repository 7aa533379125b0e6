//! Palette lookup from the heat field into pixel buffers
//!
//! Out-of-range heat is clamped to the hottest palette entry by the
//! palette itself, so a bad cell costs one wrong pixel, never a panic.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::random::HeatRng;

use super::perf_timer::elapsed_ms;
use super::viewport::Letterbox;
use super::{FireGrid, PerfTimer};

pub(super) fn write_image<R: HeatRng>(grid: &FireGrid<R>, out: &mut [u8]) -> bool {
    let heat = &grid.field.heat;
    let needed = heat.len() * 4;
    if out.len() < needed {
        return false;
    }
    let palette = &grid.palette;
    let out = &mut out[..needed];

    #[cfg(feature = "parallel")]
    {
        out.par_chunks_exact_mut(4)
            .zip(heat.par_iter())
            .for_each(|(px, &h)| px.copy_from_slice(&palette.rgb(h).rgba()));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for (px, &h) in out.chunks_exact_mut(4).zip(heat.iter()) {
            px.copy_from_slice(&palette.rgb(h).rgba());
        }
    }
    true
}

pub(super) fn to_image<R: HeatRng>(grid: &FireGrid<R>) -> Vec<u8> {
    let mut out = vec![0u8; grid.field.size() * 4];
    write_image(grid, &mut out);
    out
}

pub(super) fn render_colors<R: HeatRng>(grid: &mut FireGrid<R>) {
    let t0 = PerfTimer::start_if(grid.perf_enabled);

    let palette = &grid.palette;
    let heat = &grid.field.heat;
    let colors = &mut grid.render.colors;
    if colors.len() != heat.len() {
        colors.resize(heat.len(), palette.abgr(0));
    }

    #[cfg(feature = "parallel")]
    {
        colors
            .par_iter_mut()
            .zip(heat.par_iter())
            .for_each(|(c, &h)| *c = palette.abgr(h));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for (c, &h) in colors.iter_mut().zip(heat.iter()) {
            *c = palette.abgr(h);
        }
    }

    if grid.perf_enabled {
        grid.perf_stats.render_ms = elapsed_ms(t0);
    }
}

pub(super) fn blit_nearest<R: HeatRng>(grid: &FireGrid<R>, dst: &mut [u8], dst_w: u32, dst_h: u32) -> bool {
    let field = &grid.field;
    let (src_w, src_h) = (field.width(), field.height());
    let Some(fit) = Letterbox::fit(src_w, src_h, dst_w, dst_h) else {
        return false;
    };

    let row_bytes = dst_w as usize * 4;
    let needed = row_bytes * dst_h as usize;
    if dst.len() < needed {
        return false;
    }

    let palette = &grid.palette;
    let background = palette.rgb(0).rgba();
    let fill_row = |(dy, row): (usize, &mut [u8])| {
        for (dx, px) in row.chunks_exact_mut(4).enumerate() {
            let color = match fit.source_cell(dx as u32, dy as u32, src_w, src_h) {
                Some((sx, sy)) => palette.rgb(field.heat[field.index(sx, sy)]).rgba(),
                None => background,
            };
            px.copy_from_slice(&color);
        }
    };

    let dst = &mut dst[..needed];
    #[cfg(feature = "parallel")]
    {
        dst.par_chunks_exact_mut(row_bytes).enumerate().for_each(fill_row);
    }
    #[cfg(not(feature = "parallel"))]
    {
        dst.chunks_exact_mut(row_bytes).enumerate().for_each(fill_row);
    }
    true
}

// render.rs - Pixel compositing
//
// The buffer persists across frames. Each frame only the previous and
// current footprint of every particle are touched, then the whole buffer
// is handed to the surface in one call.
//
// Layout: row-major RGBA, 4 bytes per pixel, opaque white background.

use crate::config::BACKGROUND;
use crate::sim::Particle;

pub struct PixelBuffer {
    data: Vec<u8>,
    w: u32,
    h: u32,
}

impl PixelBuffer {
    pub fn new(w: u32, h: u32) -> Self {
        Self {
            data: BACKGROUND.repeat(w as usize * h as usize),
            w,
            h,
        }
    }

    /// Reallocate for a new viewport; contents are reset to background.
    pub fn resize(&mut self, w: u32, h: u32) {
        *self = Self::new(w, h);
    }

    pub fn width(&self) -> u32 {
        self.w
    }

    pub fn height(&self) -> u32 {
        self.h
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn ptr(&self) -> *const u8 {
        self.data.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Pixel at (x, y), `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.w || y >= self.h {
            return None;
        }
        let i = (y as usize * self.w as usize + x as usize) * 4;
        let mut px = [0; 4];
        px.copy_from_slice(&self.data[i..i + 4]);
        Some(px)
    }

    /// Fill the half-open square of side `2 * half` centred on (cx, cy),
    /// clipped to the buffer.
    pub fn fill_square(&mut self, cx: f32, cy: f32, half: f32, rgba: [u8; 4]) {
        let (x0, x1) = self.clip(cx - half, cx + half, self.w);
        let (y0, y1) = self.clip(cy - half, cy + half, self.h);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let stride = self.w as usize * 4;
        for y in y0..y1 {
            let row = y * stride;
            self.data[row + x0 * 4..row + x1 * 4]
                .chunks_exact_mut(4)
                .for_each(|px| px.copy_from_slice(&rgba));
        }
    }

    #[inline]
    fn clip(&self, lo: f32, hi: f32, limit: u32) -> (usize, usize) {
        let lo = (lo.round() as i64).clamp(0, limit as i64);
        let hi = (hi.round() as i64).clamp(0, limit as i64);
        (lo as usize, hi as usize)
    }
}

/// Erase the particle's previous footprint, then paint the current one.
pub fn repaint_footprint(buf: &mut PixelBuffer, p: &Particle) {
    if let Some((px, py)) = p.previous() {
        buf.fill_square(px, py, p.size, BACKGROUND);
    }
    buf.fill_square(p.x, p.y, p.size, p.color.to_array());
}

/// Display target that accepts a full RGBA frame.
pub trait Surface {
    fn present(&mut self, w: u32, h: u32, rgba: &[u8]);
}

/// Commit the whole buffer to the surface in one write.
pub fn flush<S: Surface + ?Sized>(buf: &PixelBuffer, surface: &mut S) {
    surface.present(buf.w, buf.h, &buf.data);
}

/// Surface that keeps a copy of the last frame.
#[derive(Default)]
pub struct MemorySurface {
    pub w: u32,
    pub h: u32,
    pub pixels: Vec<u8>,
    pub frames: u64,
}

impl Surface for MemorySurface {
    fn present(&mut self, w: u32, h: u32, rgba: &[u8]) {
        self.w = w;
        self.h = h;
        self.pixels.clear();
        self.pixels.extend_from_slice(rgba);
        self.frames += 1;
    }
}

// sim/ - Particle field
//
// Particles are built from image samples, centred in the viewport, and
// stepped once per frame in field order. The field owns every particle;
// the compositor only reads them.

mod particle;

pub use particle::{update, Particle, Pointer};

use log::debug;

use crate::config::Config;
use crate::render::{repaint_footprint, PixelBuffer};
use crate::sample::Sample;

#[derive(Default)]
pub struct Field {
    particles: Vec<Particle>,
}

impl Field {
    /// Build the field for the buffer's viewport and paint every initial
    /// footprint into it. Samples whose home falls outside the viewport are
    /// dropped; a zero-sized viewport yields an empty field.
    pub fn initialize<I>(
        samples: I,
        image_size: (u32, u32),
        buffer: &mut PixelBuffer,
        cfg: &Config,
    ) -> Self
    where
        I: IntoIterator<Item = Sample>,
    {
        let (w, h) = (buffer.width(), buffer.height());
        if w == 0 || h == 0 {
            debug!("viewport {}x{} is empty, no particles", w, h);
            return Self::default();
        }

        let mag = cfg.magnification as f32;
        let offset_x = w as f32 / 2.0 - image_size.0 as f32 * mag / 2.0;
        let offset_y = h as f32 / 2.0 - image_size.1 as f32 * mag / 2.0;

        let mut rng = cfg.seed;
        let mut particles = Vec::new();
        let mut culled = 0usize;
        for s in samples {
            let density = cfg.density_min + Field::rand(&mut rng) * cfg.density_span;
            let p = Particle::new(
                s.x as f32 * mag + offset_x,
                s.y as f32 * mag + offset_y,
                s.color,
                cfg.particle_size,
                density,
            );
            let (bx, by) = p.base();
            if bx < 0.0 || by < 0.0 || bx >= w as f32 || by >= h as f32 {
                culled += 1;
                continue;
            }
            repaint_footprint(buffer, &p);
            particles.push(p);
        }

        if culled > 0 {
            debug!("{} samples fall outside {}x{}, culled", culled, w, h);
        }
        debug!("field initialised: {} particles in {}x{}", particles.len(), w, h);
        Self { particles }
    }

    /// One frame: physics step then footprint repaint, per particle.
    pub fn advance(&mut self, pointer: &Pointer, buffer: &mut PixelBuffer, cfg: &Config) {
        for p in &mut self.particles {
            update(p, pointer, cfg);
            repaint_footprint(buffer, p);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    // Random number generator (xorshift32), [0, 1)
    #[inline(always)]
    fn rand(rng: &mut u32) -> f32 {
        *rng ^= *rng << 13;
        *rng ^= *rng >> 17;
        *rng ^= *rng << 5;
        (*rng >> 8) as f32 * (1.0 / 16777216.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Color;

    fn samples(n: u32) -> Vec<Sample> {
        (0..n)
            .map(|x| Sample { x, y: 0, color: Color::from_rgba(0, 0, 255, 255) })
            .collect()
    }

    #[test]
    fn density_stays_in_range() {
        let cfg = Config::default();
        let mut buf = PixelBuffer::new(400, 100);
        let field = Field::initialize(samples(50), (50, 1), &mut buf, &cfg);
        assert_eq!(field.len(), 50);
        for p in field.particles() {
            assert!(p.density >= 2.0 && p.density < 102.0, "density {}", p.density);
        }
    }

    #[test]
    fn same_seed_same_field() {
        let cfg = Config::default();
        let mut a = PixelBuffer::new(100, 100);
        let mut b = PixelBuffer::new(100, 100);
        let fa = Field::initialize(samples(5), (5, 1), &mut a, &cfg);
        let fb = Field::initialize(samples(5), (5, 1), &mut b, &cfg);
        assert_eq!(fa.particles(), fb.particles());
    }

    #[test]
    fn zero_viewport_is_empty() {
        let cfg = Config::default();
        let mut buf = PixelBuffer::new(0, 300);
        let field = Field::initialize(samples(5), (5, 1), &mut buf, &cfg);
        assert!(field.is_empty());
    }

    #[test]
    fn homes_outside_viewport_are_dropped() {
        let cfg = Config::default();
        let mut buf = PixelBuffer::new(10, 10);
        // 5 samples span 20 px: offset = 5 - 10 = -5, homes at -5, -1, 3, 7, 11
        let field = Field::initialize(samples(5), (5, 1), &mut buf, &cfg);
        let xs: Vec<f32> = field.particles().iter().map(|p| p.base().0).collect();
        assert_eq!(xs, vec![3.0, 7.0]);
    }

    #[test]
    fn centred_on_viewport() {
        let cfg = Config::default();
        let mut buf = PixelBuffer::new(100, 100);
        let field = Field::initialize(samples(2), (2, 1), &mut buf, &cfg);
        // offset = 50 - 2*2 = 46 horizontally, 50 - 1*2 = 48 vertically
        let bases: Vec<_> = field.particles().iter().map(|p| p.base()).collect();
        assert_eq!(bases, vec![(46.0, 48.0), (50.0, 48.0)]);
    }
}

// particle.rs - Single particle state and physics step
//
// A particle is pushed away from the pointer while inside its reach,
// otherwise it eases back to its home position by a fixed fraction of
// the remaining offset each frame.

use crate::config::Config;
use crate::sample::Color;

/// Pointer position (unset until the first move) and its reach.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub position: Option<(f32, f32)>,
    pub radius: f32,
}

impl Pointer {
    pub fn new(radius: f32) -> Self {
        Self { position: None, radius }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    base_x: f32,
    base_y: f32,
    prev: Option<(f32, f32)>,
    pub color: Color,
    pub size: f32,
    /// Displacement multiplier: denser particles get pushed further.
    pub density: f32,
}

impl Particle {
    /// New particle resting at its (rounded) home position.
    pub fn new(base_x: f32, base_y: f32, color: Color, size: f32, density: f32) -> Self {
        let (base_x, base_y) = (base_x.round(), base_y.round());
        Self {
            x: base_x,
            y: base_y,
            base_x,
            base_y,
            prev: None,
            color,
            size,
            density,
        }
    }

    #[inline]
    pub fn base(&self) -> (f32, f32) {
        (self.base_x, self.base_y)
    }

    #[inline]
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Position before the last physics step, `None` before the first one.
    #[inline]
    pub fn previous(&self) -> Option<(f32, f32)> {
        self.prev
    }

    #[inline]
    pub fn is_home(&self) -> bool {
        self.x.round() == self.base_x && self.y.round() == self.base_y
    }
}

/// Advance one particle by one frame.
///
/// Records the current position as the previous one, then either pushes
/// the particle away from the pointer or relaxes it toward home. The
/// caller repaints the footprint afterwards.
pub fn update(p: &mut Particle, pointer: &Pointer, cfg: &Config) {
    p.prev = Some((p.x, p.y));

    if let Some((px, py)) = pointer.position {
        let dx = px - p.x;
        let dy = py - p.y;
        let distance = dx.hypot(dy);

        if distance < pointer.radius + p.size {
            // Pointer sitting exactly on the particle has no direction
            let (dir_x, dir_y) = if distance > 0.0 {
                (dx / distance, dy / distance)
            } else {
                (0.0, 0.0)
            };
            let force = ((cfg.max_distance - distance) / cfg.max_distance).max(0.0);

            p.x -= dir_x * force * p.density;
            p.y -= dir_y * force * p.density;
            return;
        }
    }

    if p.x.round() != p.base_x {
        p.x -= (p.x - p.base_x) / cfg.return_divisor;
    }
    if p.y.round() != p.base_y {
        p.y -= (p.y - p.base_y) / cfg.return_divisor;
    }
}

// config.rs - Effect tuning
//
// Defaults live in consts; `Config` groups them so a host (or a test)
// can override any single value.

use crate::error::{Error, Result};

// Particles
pub const PARTICLE_SIZE: f32 = 2.0;     // min size is 2; footprint side is 2x this
pub const MAGNIFICATION: u32 = 4;       // sample grid -> screen spacing
pub const ALPHA_THRESHOLD: u8 = 128;    // samples at or below this are skipped

// Pointer physics
pub const POINTER_RADIUS: f32 = 40.0;
pub const MAX_DISTANCE: f32 = 100.0;    // force is 0 past this
pub const DENSITY_MIN: f32 = 2.0;
pub const DENSITY_SPAN: f32 = 100.0;    // density in [2, 102)
pub const RETURN_DIVISOR: f32 = 20.0;   // spring-back moves 1/20th of the offset

// Image
pub const LOGO_HEIGHT: u32 = 100;

// Compositing
pub const BACKGROUND: [u8; 4] = [255, 255, 255, 255];

pub const DEFAULT_SEED: u32 = 0xDEADBEEF;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub particle_size: f32,
    pub magnification: u32,
    pub alpha_threshold: u8,
    pub pointer_radius: f32,
    pub max_distance: f32,
    pub density_min: f32,
    pub density_span: f32,
    pub return_divisor: f32,
    /// Resize decoded images to this height (aspect kept) before sampling.
    pub image_height: Option<u32>,
    pub seed: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            particle_size: PARTICLE_SIZE,
            magnification: MAGNIFICATION,
            alpha_threshold: ALPHA_THRESHOLD,
            pointer_radius: POINTER_RADIUS,
            max_distance: MAX_DISTANCE,
            density_min: DENSITY_MIN,
            density_span: DENSITY_SPAN,
            return_divisor: RETURN_DIVISOR,
            image_height: Some(LOGO_HEIGHT),
            seed: DEFAULT_SEED,
        }
    }
}

impl Config {
    /// Sampling stride in source pixels, never below 1.
    pub fn step(&self) -> u32 {
        ((self.particle_size / 2.0).floor() as u32).max(1)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.particle_size.is_finite() || self.particle_size <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "particle size must be positive, got {}",
                self.particle_size
            )));
        }
        if self.magnification == 0 {
            return Err(Error::InvalidConfig("magnification must be at least 1".into()));
        }
        if !self.max_distance.is_finite() || self.max_distance <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "max distance must be positive, got {}",
                self.max_distance
            )));
        }
        if !self.return_divisor.is_finite() || self.return_divisor < 1.0 {
            return Err(Error::InvalidConfig(format!(
                "return divisor must be at least 1, got {}",
                self.return_divisor
            )));
        }
        if !self.pointer_radius.is_finite() || self.pointer_radius < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "pointer radius must be non-negative, got {}",
                self.pointer_radius
            )));
        }
        if self.image_height == Some(0) {
            return Err(Error::InvalidConfig("image height must be at least 1".into()));
        }
        Ok(())
    }
}

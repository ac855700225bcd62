// sample.rs - Image sampling
//
// Decodes the source image, normalises its height, then walks it
// row-major at a fixed stride. Only pixels whose alpha clears the
// threshold become samples, which leaves transparent regions empty.

use image::{imageops::FilterType, DynamicImage, RgbaImage};
use log::debug;

use crate::config::Config;
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(p: image::Rgba<u8>) -> Self {
        Self::from_rgba(p[0], p[1], p[2], p[3])
    }
}

/// One accepted pixel, in source image coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    pub x: u32,
    pub y: u32,
    pub color: Color,
}

pub struct Sampler {
    image: RgbaImage,
    step: u32,
    threshold: u8,
}

impl Sampler {
    /// Wrap an already decoded image. No resizing is applied.
    pub fn new(image: RgbaImage, cfg: &Config) -> Result<Self> {
        cfg.validate()?;
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::EmptyImage { width, height });
        }
        Ok(Self {
            image,
            step: cfg.step(),
            threshold: cfg.alpha_threshold,
        })
    }

    /// Decode encoded image bytes and normalise to `cfg.image_height`.
    pub fn from_bytes(bytes: &[u8], cfg: &Config) -> Result<Self> {
        let decoded = image::load_from_memory(bytes)?;
        debug!("decoded image {}x{}", decoded.width(), decoded.height());
        Self::new(normalise(decoded, cfg.image_height)?, cfg)
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    /// Opaque-enough pixels on the stride grid, row-major.
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        let step = self.step as usize;
        (0..self.height()).step_by(step).flat_map(move |y| {
            (0..self.width()).step_by(step).filter_map(move |x| {
                let color = Color::from(*self.image.get_pixel(x, y));
                (color.a > self.threshold).then_some(Sample { x, y, color })
            })
        })
    }
}

/// Scale to a fixed height keeping the aspect ratio.
fn normalise(img: DynamicImage, height: Option<u32>) -> Result<RgbaImage> {
    let (w, h) = (img.width(), img.height());
    if w == 0 || h == 0 {
        return Err(Error::EmptyImage { width: w, height: h });
    }
    let Some(target) = height else {
        return Ok(img.into_rgba8());
    };
    if target == h {
        return Ok(img.into_rgba8());
    }

    let scaled_w = ((w as f64 * target as f64 / h as f64).round() as u32).max(1);
    debug!("resizing image {}x{} -> {}x{}", w, h, scaled_w, target);
    Ok(img.resize_exact(scaled_w, target, FilterType::Triangle).into_rgba8())
}

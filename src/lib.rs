use wasm_bindgen::prelude::*;

// ============================================================================
// PARTICLE LOGO - Image dissolved into particles that dodge the pointer
// ============================================================================

pub mod config;
pub mod driver;
pub mod error;
pub mod render;
pub mod sample;
pub mod sim;

pub use config::Config;
pub use driver::{Driver, FrameBudget, PointerState, Scheduler};
pub use error::Error;
pub use render::{flush, repaint_footprint, MemorySurface, PixelBuffer, Surface};
pub use sample::{Color, Sample, Sampler};
pub use sim::{update, Field, Particle, Pointer};

/// The site logo, shipped with the crate.
pub const LOGO_PNG: &[u8] = include_bytes!("../assets/logo.png");

impl From<Error> for JsValue {
    fn from(e: Error) -> Self {
        js_sys::Error::new(&e.to_string()).into()
    }
}

// Frame handed to the page; `new ImageData(frame, width, height)`
struct ClampedArraySurface {
    frame: Option<js_sys::Uint8ClampedArray>,
}

impl Surface for ClampedArraySurface {
    fn present(&mut self, _w: u32, _h: u32, rgba: &[u8]) {
        if let Some(frame) = &self.frame {
            if frame.length() as usize == rgba.len() {
                frame.copy_from(rgba);
                return;
            }
        }
        self.frame = Some(js_sys::Uint8ClampedArray::from(rgba));
    }
}

#[wasm_bindgen]
pub struct ParticleLogo {
    driver: Driver,
    surface: ClampedArraySurface,
}

#[wasm_bindgen]
impl ParticleLogo {
    #[wasm_bindgen(constructor)]
    pub fn new(w: u32, h: u32, image: &[u8]) -> Result<ParticleLogo, JsValue> {
        let driver = Driver::from_bytes(image, w, h, Config::default())?;
        Ok(Self { driver, surface: ClampedArraySurface { frame: None } })
    }

    pub fn with_logo(w: u32, h: u32) -> Result<ParticleLogo, JsValue> {
        Self::new(w, h, LOGO_PNG)
    }

    /// Call from `requestAnimationFrame`.
    pub fn tick(&mut self) {
        self.driver.tick();
        self.driver.flush(&mut self.surface);
    }

    pub fn frame(&self) -> Option<js_sys::Uint8ClampedArray> {
        self.surface.frame.clone()
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.driver.pointer_move(x, y);
    }

    pub fn resize(&mut self, w: u32, h: u32) {
        self.driver.resize(w, h);
    }

    pub fn request_resize(&mut self, w: u32, h: u32) {
        self.driver.request_resize(w, h);
    }

    pub fn stop(&mut self) {
        self.driver.stop();
    }

    pub fn particle_count(&self) -> usize {
        self.driver.field().len()
    }

    // Zero-copy access for the page
    pub fn output_ptr(&self) -> *const u8 { self.driver.buffer().ptr() }
    pub fn output_len(&self) -> usize { self.driver.buffer().len() }
    pub fn width(&self) -> u32 { self.driver.buffer().width() }
    pub fn height(&self) -> u32 { self.driver.buffer().height() }
}

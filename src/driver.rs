// driver.rs - Frame driver
//
// Owns the whole simulation context: sampled image, particle field,
// pixel buffer and pointer. The host calls `tick` once per display
// refresh (or hands a `Scheduler` to `run`), and forwards pointer moves
// and viewport resizes.

use log::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::render::{flush, PixelBuffer, Surface};
use crate::sample::Sampler;
use crate::sim::{Field, Pointer};

/// Pointer tracking state. `Tracking` is sticky.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerState {
    Idle,
    Tracking,
}

/// Source of frame callbacks.
pub trait Scheduler {
    /// Block (or not) until the next frame; `false` ends the loop.
    fn next_frame(&mut self) -> bool;
}

/// Grants a fixed number of frames.
pub struct FrameBudget(pub u64);

impl Scheduler for FrameBudget {
    fn next_frame(&mut self) -> bool {
        if self.0 == 0 {
            return false;
        }
        self.0 -= 1;
        true
    }
}

pub struct Driver {
    cfg: Config,
    sampler: Sampler,
    field: Field,
    buffer: PixelBuffer,
    pointer: Pointer,
    pending_resize: Option<(u32, u32)>,
    stopped: bool,
    frames: u64,
}

impl Driver {
    pub fn new(sampler: Sampler, w: u32, h: u32, cfg: Config) -> Result<Self> {
        cfg.validate()?;
        let mut driver = Self {
            cfg,
            sampler,
            field: Field::default(),
            buffer: PixelBuffer::new(w, h),
            pointer: Pointer::new(cfg.pointer_radius),
            pending_resize: None,
            stopped: false,
            frames: 0,
        };
        driver.reinitialize(w, h);
        Ok(driver)
    }

    /// Decode `bytes` and build the effect for a `w` x `h` viewport.
    pub fn from_bytes(bytes: &[u8], w: u32, h: u32, cfg: Config) -> Result<Self> {
        let sampler = Sampler::from_bytes(bytes, &cfg)?;
        Self::new(sampler, w, h, cfg)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer.position = Some((x, y));
    }

    pub fn state(&self) -> PointerState {
        match self.pointer.position {
            Some(_) => PointerState::Tracking,
            None => PointerState::Idle,
        }
    }

    /// Step every particle and repaint its footprint.
    pub fn tick(&mut self) {
        if self.stopped {
            return;
        }
        if let Some((w, h)) = self.pending_resize.take() {
            self.reinitialize(w, h);
        }
        self.field.advance(&self.pointer, &mut self.buffer, &self.cfg);
        self.frames += 1;
    }

    pub fn flush<S: Surface + ?Sized>(&self, surface: &mut S) {
        flush(&self.buffer, surface);
    }

    /// Drive frames until the scheduler runs dry or the driver is stopped.
    /// Returns the number of frames rendered.
    pub fn run<T, S>(&mut self, scheduler: &mut T, surface: &mut S) -> u64
    where
        T: Scheduler + ?Sized,
        S: Surface + ?Sized,
    {
        let start = self.frames;
        while !self.stopped && scheduler.next_frame() {
            self.tick();
            self.flush(surface);
        }
        self.frames - start
    }

    /// Full restart for the new viewport, done immediately.
    pub fn resize(&mut self, w: u32, h: u32) {
        self.pending_resize = None;
        self.reinitialize(w, h);
    }

    /// Restart for the new viewport at the start of the next tick.
    pub fn request_resize(&mut self, w: u32, h: u32) {
        debug!("resize to {}x{} deferred to next frame", w, h);
        self.pending_resize = Some((w, h));
    }

    pub fn stop(&mut self) {
        if !self.stopped {
            info!("stopped after {} frames", self.frames);
        }
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn reinitialize(&mut self, w: u32, h: u32) {
        self.buffer.resize(w, h);
        let image_size = (self.sampler.width(), self.sampler.height());
        self.field = Field::initialize(
            self.sampler.samples(),
            image_size,
            &mut self.buffer,
            &self.cfg,
        );
        info!("viewport {}x{}: {} particles", w, h, self.field.len());
    }
}

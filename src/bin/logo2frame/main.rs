// logo2frame - Run the particle logo headless and save a frame
//
// Pipeline:
//   1. Load image (or the bundled logo), sample it into particles
//   2. Sweep a pointer across the logo's centre line for N frames
//   3. Write the last flushed frame as PNG
//
// Usage: cargo run --bin logo2frame -- [image] [--width N] [--height N] [--frames N] [--out path]

use std::env;
use std::fs;

use log::info;
use particle_logo::{Config, Driver, Error, FrameBudget, MemorySurface, LOGO_PNG};

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();

    // Parse arguments
    let mut image_path: Option<String> = None;
    let mut width = 800u32;
    let mut height = 600u32;
    let mut frames = 120u64;
    let mut out = String::from("frame.png");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--width" => { width = args.get(i+1).and_then(|s| s.parse().ok()).unwrap_or(800); i += 2; }
            "--height" => { height = args.get(i+1).and_then(|s| s.parse().ok()).unwrap_or(600); i += 2; }
            "--frames" => { frames = args.get(i+1).and_then(|s| s.parse().ok()).unwrap_or(120); i += 2; }
            "--out" => { if let Some(p) = args.get(i+1) { out = p.clone(); } i += 2; }
            other if !other.starts_with("--") && image_path.is_none() => { image_path = Some(other.to_string()); i += 1; }
            _ => i += 1,
        }
    }

    let bytes = match &image_path {
        Some(path) => fs::read(path)?,
        None => LOGO_PNG.to_vec(),
    };
    let source = image_path.as_deref().unwrap_or("bundled logo");
    info!("{} -> {}x{}, {} frames", source, width, height, frames);

    let mut driver = Driver::from_bytes(&bytes, width, height, Config::default())?;
    let mut surface = MemorySurface::default();

    // Sweep left to right along the vertical centre, one frame at a time
    let y = height as f32 / 2.0;
    for f in 0..frames {
        let x = width as f32 * (f as f32 + 0.5) / frames as f32;
        driver.pointer_move(x, y);
        driver.run(&mut FrameBudget(1), &mut surface);
    }
    if frames == 0 {
        driver.flush(&mut surface);
    }

    let frame = image::RgbaImage::from_raw(surface.w, surface.h, surface.pixels)
        .ok_or(Error::EmptyImage { width: surface.w, height: surface.h })?;
    frame.save(&out)?;

    info!("{} particles, wrote {}", driver.field().len(), out);
    Ok(())
}

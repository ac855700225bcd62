use image::{Rgba, RgbaImage};
use particle_logo::{Config, Error, Sampler, LOGO_PNG};

// Left 10x10 opaque, right 10x10 fully transparent
fn half_transparent() -> RgbaImage {
    RgbaImage::from_fn(20, 10, |x, _| {
        if x < 10 { Rgba([0, 128, 255, 255]) } else { Rgba([0, 0, 0, 0]) }
    })
}

fn counts(particle_size: f32) -> (usize, usize, u32) {
    let cfg = Config { particle_size, image_height: None, ..Config::default() };
    let sampler = Sampler::new(half_transparent(), &cfg).unwrap();
    let (opaque, clear): (Vec<_>, Vec<_>) = sampler.samples().partition(|s| s.x < 10);
    (opaque.len(), clear.len(), sampler.step())
}

#[test]
fn transparent_region_yields_nothing() {
    for size in [2.0, 4.0, 6.0, 8.0] {
        let (opaque, clear, step) = counts(size);
        let per_axis = 10u32.div_ceil(step) as usize;
        assert_eq!(clear, 0, "size {size}");
        assert_eq!(opaque, per_axis * per_axis, "size {size}");
    }
}

#[test]
fn samples_carry_source_colour() {
    let cfg = Config { image_height: None, ..Config::default() };
    let sampler = Sampler::new(half_transparent(), &cfg).unwrap();
    assert!(sampler.samples().all(|s| s.color.to_array() == [0, 128, 255, 255]));
}

#[test]
fn decoded_bytes_are_height_normalised() {
    let mut png = Vec::new();
    RgbaImage::from_pixel(40, 20, Rgba([9, 9, 9, 255]))
        .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
        .unwrap();

    let cfg = Config { image_height: Some(10), ..Config::default() };
    let sampler = Sampler::from_bytes(&png, &cfg).unwrap();
    assert_eq!((sampler.width(), sampler.height()), (20, 10));

    let raw = Sampler::from_bytes(&png, &Config { image_height: None, ..cfg }).unwrap();
    assert_eq!((raw.width(), raw.height()), (40, 20));
    assert_eq!(raw.samples().count(), 800);
}

#[test]
fn bundled_logo_has_a_silhouette() {
    let sampler = Sampler::from_bytes(LOGO_PNG, &Config::default()).unwrap();
    let total = (sampler.width() * sampler.height()) as usize;
    let accepted = sampler.samples().count();
    assert!(accepted > 0);
    assert!(accepted < total, "transparent background should be skipped");
}

#[test]
fn truncated_png_is_a_decode_error() {
    let err = Sampler::from_bytes(&LOGO_PNG[..64], &Config::default()).err().unwrap();
    assert!(matches!(err, Error::Image(_)), "{err}");
}

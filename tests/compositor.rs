use particle_logo::{flush, repaint_footprint, update, Color, Config, MemorySurface, Particle, PixelBuffer, Pointer};

const WHITE: [u8; 4] = [255, 255, 255, 255];
const ORANGE: Color = Color::from_rgba(255, 128, 0, 200);

fn painted(buf: &PixelBuffer) -> usize {
    buf.as_bytes().chunks_exact(4).filter(|px| *px != WHITE).count()
}

#[test]
fn repaint_is_idempotent() {
    let p = Particle::new(20.0, 20.0, ORANGE, 3.0, 10.0);
    let mut once = PixelBuffer::new(40, 40);
    let mut twice = PixelBuffer::new(40, 40);
    repaint_footprint(&mut once, &p);
    repaint_footprint(&mut twice, &p);
    repaint_footprint(&mut twice, &p);
    assert_eq!(once.as_bytes(), twice.as_bytes());
    assert_eq!(painted(&once), 36);
}

#[test]
fn moving_particle_leaves_no_trail() {
    let cfg = Config::default();
    let mut buf = PixelBuffer::new(64, 64);
    let mut p = Particle::new(32.0, 32.0, ORANGE, 2.0, 40.0);
    repaint_footprint(&mut buf, &p);

    let pointer = Pointer { position: Some((30.0, 33.0)), radius: 40.0 };
    for _ in 0..4 {
        update(&mut p, &pointer, &cfg);
        repaint_footprint(&mut buf, &p);
        // Only the current footprint is coloured (clipped if it left the buffer)
        assert!(painted(&buf) <= 16);
    }
    let (x, y) = p.position();
    if (2.0..62.0).contains(&x) && (2.0..62.0).contains(&y) {
        assert_eq!(painted(&buf), 16);
    }
}

#[test]
fn footprints_off_buffer_are_clipped() {
    let mut buf = PixelBuffer::new(10, 10);
    let mut p = Particle::new(-1.0, 9.0, ORANGE, 2.0, 1.0);
    repaint_footprint(&mut buf, &p);
    // x in [-3, 1) -> 1 column, y in [7, 11) -> 3 rows
    assert_eq!(painted(&buf), 3);

    p.x = 1e9;
    p.y = -1e9;
    repaint_footprint(&mut buf, &p);
    assert_eq!(painted(&buf), 3);
}

#[test]
fn resize_resets_to_white() {
    let mut buf = PixelBuffer::new(8, 8);
    repaint_footprint(&mut buf, &Particle::new(4.0, 4.0, ORANGE, 2.0, 1.0));
    buf.resize(3, 5);
    assert_eq!((buf.width(), buf.height(), buf.len()), (3, 5, 60));
    assert_eq!(painted(&buf), 0);
}

#[test]
fn flush_writes_once_per_call() {
    let mut buf = PixelBuffer::new(6, 6);
    repaint_footprint(&mut buf, &Particle::new(3.0, 3.0, ORANGE, 1.0, 1.0));
    let mut surface = MemorySurface::default();
    flush(&buf, &mut surface);
    flush(&buf, &mut surface);
    assert_eq!(surface.frames, 2);
    assert_eq!(surface.pixels, buf.as_bytes());
    assert_eq!(buf.pixel(3, 3), Some(ORANGE.to_array()));
}

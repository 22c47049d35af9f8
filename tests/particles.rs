use fastrand::Rng;
use splash_wasm::particles::{ParticleField, Point};

fn assert_invariants(field: &ParticleField) {
    let (width, height) = field.bounds();
    for p in field.particles() {
        assert!((0.0..width).contains(&p.x), "x {} outside [0, {width})", p.x);
        assert!((0.0..height).contains(&p.y), "y {} outside [0, {height})", p.y);
        assert!(
            p.size >= p.base_size * 0.7 - 1e-12 && p.size <= p.base_size * 1.3 + 1e-12,
            "size {} vs base {}",
            p.size,
            p.base_size
        );
    }
}

#[test]
fn particles_stay_in_bounds_and_pulse_band() {
    let mut field = ParticleField::new(60, 80.0, Rng::with_seed(2024));
    field.setup(320.0, 240.0, 2.0);
    let mut deltas = Rng::with_seed(9);
    for frame in 0..5000 {
        // mix of normal frames, hitches and a pointer sweeping the canvas
        let delta = if frame % 500 == 0 { 400.0 } else { deltas.f64() * 33.0 };
        let pointer = (frame % 3 != 0).then(|| Point::new((frame % 320) as f64, (frame % 240) as f64));
        field.tick(delta, pointer);
        assert_invariants(&field);
    }
}

#[test]
fn resize_keeps_invariants() {
    let mut field = ParticleField::new(60, 80.0, Rng::with_seed(1));
    field.setup(1920.0, 1080.0, 1.0);
    for _ in 0..100 {
        field.tick(16.67, None);
    }
    field.setup(200.0, 100.0, 3.0);
    assert_eq!(field.particles().len(), 60);
    assert_invariants(&field);
}

#[test]
fn same_seed_same_trajectory() {
    let run = || {
        let mut field = ParticleField::new(20, 80.0, Rng::with_seed(77));
        field.setup(640.0, 480.0, 1.0);
        for i in 0..300 {
            field.tick(16.0 + (i % 5) as f64, Some(Point::new(320.0, 240.0)));
        }
        field.particles().to_vec()
    };
    assert_eq!(run(), run());
}

#[test]
fn zero_delta_freezes_motion() {
    let mut field = ParticleField::new(10, 80.0, Rng::with_seed(5));
    field.setup(100.0, 100.0, 1.0);
    let before = field.particles().to_vec();
    field.tick(0.0, None);
    assert_eq!(before, field.particles());
}

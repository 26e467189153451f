use super::*;

#[test]
fn smooth_step_endpoints_and_midpoint() {
    assert_eq!(smooth_step(0.0), 0.0);
    assert_eq!(smooth_step(1.0), 1.0);
    assert!((smooth_step(0.5) - 0.5).abs() < 1e-12);
}

#[test]
fn smooth_step_is_monotonic_on_unit_interval() {
    let mut prev = smooth_step(0.0);
    for i in 1..=1000 {
        let v = smooth_step(f64::from(i) / 1000.0);
        assert!(v >= prev, "decreased at step {i}");
        prev = v;
    }
}

#[test]
fn smooth_step_has_flat_ends() {
    let h = 1e-6;
    assert!(smooth_step(h) / h < 1e-4);
    assert!((1.0 - smooth_step(1.0 - h)) / h < 1e-4);
}

#[test]
fn alpha_conversion_rounds_and_clamps() {
    assert_eq!(alpha_to_u8(0.0), 0);
    assert_eq!(alpha_to_u8(1.0), 255);
    assert_eq!(alpha_to_u8(0.5), 128);
    assert_eq!(alpha_to_u8(-0.3), 0);
    assert_eq!(alpha_to_u8(1.7), 255);
    assert_eq!(alpha_to_u8(f64::NAN), 0);
}

#[test]
fn distance_is_euclidean() {
    assert_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
    assert_eq!(distance(2.0, 2.0, 2.0, 2.0), 0.0);
}

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn rng_ranges_stay_in_bounds() {
    let mut rng = Rng64::new(7);
    for _ in 0..500 {
        let v = rng.range_inclusive(3, 7);
        assert!((3..=7).contains(&v));
    }
    assert_eq!(rng.range_inclusive(4, 4), 4);
    assert_eq!(rng.range_inclusive(9, 2), 9);
}

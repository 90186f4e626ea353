use super::*;

#[test]
fn viewport_rejects_zero_dimensions() {
    assert!(Viewport::new(0, 10).is_err());
    assert!(Viewport::new(10, 0).is_err());
    let vp = Viewport::new(800, 600).unwrap();
    assert_eq!(vp.center(), Point::new(400.0, 300.0));
    assert_eq!(vp.rect(), Rect::new(0.0, 0.0, 800.0, 600.0));
}

#[test]
fn speed_scaling_halves_and_ignores_invalid() {
    let d = Millis(4300);
    assert_eq!(d.scaled_by_speed(1.0), Millis(4300));
    assert_eq!(d.scaled_by_speed(2.0), Millis(2150));
    assert_eq!(d.scaled_by_speed(0.0), d);
    assert_eq!(d.scaled_by_speed(-3.0), d);
    assert_eq!(d.scaled_by_speed(f64::NAN), d);
    assert_eq!(Millis(1).scaled_by_speed(1000.0), Millis(1));
}

#[test]
fn millis_arithmetic_saturates() {
    assert_eq!(Millis(5).saturating_sub(Millis(9)), Millis::ZERO);
    assert_eq!(Millis(u64::MAX).saturating_add(Millis(1)), Millis(u64::MAX));
}

use super::*;

fn animator(side: Side) -> ShapeAnimator {
    ShapeAnimator::new(2, side, 200.0, 15.0, Millis(1000), Millis(0))
}

#[test]
fn left_grows_then_shrinks() {
    let mut a = animator(Side::Left);
    assert_eq!(a.current_leg(), Leg::Grow);
    assert_eq!(a.extent(Millis(0)), 185.0);
    assert_eq!(a.extent(Millis(1000)), 215.0);
    assert_eq!(a.complete_leg(Millis(1000)), Some(Millis(2000)));
    assert_eq!(a.current_leg(), Leg::Shrink);
    assert_eq!(a.extent(Millis(1000)), 215.0);
    assert_eq!(a.extent(Millis(2000)), 185.0);
}

#[test]
fn right_retracts_then_extends() {
    let a = animator(Side::Right);
    assert_eq!(a.current_leg(), Leg::Shrink);
    assert_eq!(a.extent(Millis(0)), 215.0);
    assert_eq!(a.extent(Millis(1000)), 185.0);
}

#[test]
fn extent_stays_within_band() {
    let mut a = animator(Side::Left);
    let mut now = 0;
    for _ in 0..6 {
        for t in (now..=now + 1000).step_by(50) {
            let e = a.extent(Millis(t));
            assert!((185.0..=215.0).contains(&e), "{e}");
        }
        now += 1000;
        a.complete_leg(Millis(now));
    }
}

#[test]
fn phase_flows_through_leg_boundary() {
    let mut a = animator(Side::Left);
    let before = a.phase(Millis(999));
    a.complete_leg(Millis(1000));
    let at = a.phase(Millis(1000));
    let after = a.phase(Millis(1001));
    assert!(before < at && at < after);
    // Halfway through the cycle, half the per-cycle phase has elapsed.
    assert!((at - PHASE_PER_CYCLE / 2.0).abs() < 1e-9);
}

#[test]
fn phase_is_reduced_without_visible_jump_at_cycle_end() {
    let mut a = animator(Side::Left);
    a.complete_leg(Millis(1000));
    let end_of_cycle = a.phase(Millis(2000));
    a.complete_leg(Millis(2000));
    let start_of_next = a.phase(Millis(2000));
    assert!(start_of_next < TAU);
    assert!((end_of_cycle.sin() - start_of_next.sin()).abs() < 1e-9);
    assert!((end_of_cycle.cos() - start_of_next.cos()).abs() < 1e-9);
    assert_eq!(a.cycles_completed(), 1);
}

#[test]
fn phase_stays_bounded_over_many_cycles() {
    let mut a = animator(Side::Right);
    let mut now = 0u64;
    for _ in 0..10_000 {
        now += 1000;
        a.complete_leg(Millis(now));
    }
    assert!(a.phase_origin() >= 0.0 && a.phase_origin() < TAU);
    assert!(a.phase(Millis(now + 500)) < 2.0 * TAU);
}

#[test]
fn stop_prevents_rearm_and_freezes_pose() {
    let mut a = animator(Side::Left);
    a.stop();
    assert!(!a.is_active());
    assert_eq!(a.complete_leg(Millis(1000)), None);
    assert_eq!(a.current_leg(), Leg::Grow);
    assert_eq!(a.extent(Millis(5000)), 215.0);
}

#[test]
fn duration_never_zero() {
    let a = ShapeAnimator::new(1, Side::Left, 10.0, 1.0, Millis(0), Millis(0));
    assert_eq!(a.leg_duration(), Millis(1));
}

use super::*;

fn glide() -> GlideToggle {
    GlideToggle::new(Viewport::new(1000, 600).unwrap(), 100.0, Millis(1000))
}

#[test]
fn starts_idle_off_screen() {
    let g = glide();
    assert_eq!(g.state(), GlideState::Idle);
    let p = g.position(Millis(0));
    assert!(p.x + g.radius() < 0.0);
    assert_eq!(p, g.home());
}

#[test]
fn idle_active_idle_round_trip_returns_home() {
    let mut g = glide();
    let due = g.toggle(Millis(0));
    assert_eq!(g.state(), GlideState::Active);
    assert_eq!(due, Millis(1000));
    let mid = g.position(Millis(500));
    assert!(mid.x > g.home().x && mid.x < g.target().x);
    g.settle(due);
    assert_eq!(g.position(Millis(1200)), Point::new(500.0, 300.0));

    let due = g.toggle(Millis(2000));
    assert_eq!(g.state(), GlideState::Idle);
    // Leaves through the opposite edge.
    let leaving = g.position(Millis(2900));
    assert!(leaving.x > 500.0);
    g.settle(due);
    assert!(!g.is_moving());
    assert_eq!(g.position(Millis(3500)), g.home());
}

#[test]
fn reentrant_click_retargets_instead_of_queueing() {
    let mut g = glide();
    g.toggle(Millis(0));
    let at_click = g.position(Millis(400));
    let due = g.toggle(Millis(400));
    assert_eq!(due, Millis(1400));
    assert_eq!(g.state(), GlideState::Idle);
    // Continuous at the interruption point.
    assert_eq!(g.position(Millis(400)), at_click);
    // The old completion time no longer settles anything.
    g.settle(Millis(1000));
    assert!(g.is_moving());
    g.settle(due);
    assert_eq!(g.position(due), g.home());
}

#[test]
fn settle_before_finish_is_ignored() {
    let mut g = glide();
    g.toggle(Millis(0));
    g.settle(Millis(10));
    assert!(g.is_moving());
}

use super::*;
use crate::foundation::core::Viewport;
use crate::lifecycle::host::HeadlessHost;

fn controller() -> LifecycleController<HeadlessHost> {
    let host = HeadlessHost::new(Viewport::new(800, 600).unwrap());
    LifecycleController::new(host, SceneConfig::default()).unwrap()
}

fn leg_durations(c: &LifecycleController<HeadlessHost>) -> Vec<u64> {
    c.scene()
        .unwrap()
        .animators()
        .map(|a| a.leg_duration().0)
        .collect()
}

#[test]
fn unavailable_environment_registers_nothing() {
    let mut c =
        LifecycleController::new(HeadlessHost::unavailable(), SceneConfig::default()).unwrap();
    assert!(!c.mount(Millis(0)));
    assert!(!c.is_mounted());
    assert!(!c.host().is_listening());
    assert!(c.scene().is_none());
    assert_eq!(c.tick(Millis(1000)), 0);
    assert_eq!(c.host().presents(), 0);
    assert!(!c.on_resize(Millis(10)));
}

#[test]
fn mount_builds_listens_and_presents() {
    let mut c = controller();
    assert!(c.mount(Millis(0)));
    assert!(c.host().is_listening());
    assert_eq!(c.builds(), 1);
    assert!(c.host().last_document().unwrap().starts_with("<svg"));
    // Mounting twice does not rebuild.
    assert!(c.mount(Millis(5)));
    assert_eq!(c.builds(), 1);
}

#[test]
fn resize_replaces_the_scene_with_exactly_one_set_of_loops() {
    let mut c = controller();
    c.mount(Millis(0));
    c.tick(Millis(3000));
    c.host_mut().set_viewport(Viewport::new(1024, 400).unwrap());
    assert!(c.on_resize(Millis(3000)));
    assert_eq!(c.builds(), 2);
    let scene = c.scene().unwrap();
    assert_eq!(scene.viewport().width, 1024);
    assert_eq!(scene.pending_timers(), 12);
    assert_eq!(scene.animators().count(), 6);
    assert_eq!(scene.cyclers().len(), 6);
    assert!(c.host().last_document().unwrap().contains(r#"width="1024""#));
}

#[test]
fn invalid_speed_keeps_previous_and_skips_rebuild() {
    let mut c = controller();
    c.mount(Millis(0));
    let before = leg_durations(&c);
    for bad in [0.0, -2.0, f64::NAN, f64::INFINITY] {
        assert!(!c.set_speed(bad, Millis(10)));
    }
    assert_eq!(c.speed(), 1.0);
    assert_eq!(c.builds(), 1);

    assert!(c.set_speed(2.0, Millis(10)));
    assert_eq!(c.speed(), 2.0);
    assert_eq!(c.builds(), 2);
    let after = leg_durations(&c);
    for (slow, fast) in before.iter().zip(&after) {
        assert_eq!(*slow, 2 * fast);
    }
}

#[test]
fn destroy_quiesces_and_is_idempotent() {
    let mut c = controller();
    c.mount(Millis(0));
    c.tick(Millis(2000));
    c.destroy();
    assert!(!c.is_mounted());
    assert!(c.scene().is_none());
    assert!(!c.host().is_listening());
    assert!(c.host().last_document().is_none());
    let presents = c.host().presents();
    assert_eq!(c.tick(Millis(100_000)), 0);
    assert_eq!(c.host().presents(), presents);
    assert_eq!(c.on_click(Point::ZERO, Millis(100_000)), ClickOutcome::Ignored);

    let clears = c.host().clears();
    c.destroy();
    assert_eq!(c.host().clears(), clears);
}

#[test]
fn clicks_and_triggers_reach_the_scene() {
    let mut c = controller();
    c.mount(Millis(0));
    assert_eq!(c.on_click(Point::new(10.0, 10.0), Millis(100)), ClickOutcome::Glide);
    assert!(c.trigger_panel(Millis(100)));
    assert!(!c.trigger_panel(Millis(200)));
    c.tick(Millis(1500));
    let snap = c.snapshot(Millis(1500)).unwrap();
    assert!(snap.panel.is_some());
    assert!(snap.glide.is_some());
}

#[test]
fn rejects_invalid_config() {
    let config = SceneConfig {
        gradient_count: 3,
        ..SceneConfig::default()
    };
    let host = HeadlessHost::new(Viewport::new(10, 10).unwrap());
    assert!(LifecycleController::new(host, config).is_err());
}

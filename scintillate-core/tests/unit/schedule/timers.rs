use super::*;

#[test]
fn fires_in_due_then_schedule_order() {
    let mut q = TimerQueue::new();
    q.schedule(Millis(30), "c");
    q.schedule(Millis(10), "a");
    q.schedule(Millis(10), "b");
    q.schedule(Millis(50), "late");

    let mut fired = Vec::new();
    while let Some((due, p)) = q.pop_due(Millis(40)) {
        fired.push((due.0, p));
    }
    assert_eq!(fired, vec![(10, "a"), (10, "b"), (30, "c")]);
    assert_eq!(q.len(), 1);
    assert_eq!(q.next_due(), Some(Millis(50)));
}

#[test]
fn cancelled_timers_never_fire() {
    let mut q = TimerQueue::new();
    let a = q.schedule(Millis(5), 1);
    q.schedule(Millis(6), 2);
    assert_eq!(q.cancel(a), Some(1));
    assert_eq!(q.cancel(a), None);
    assert_eq!(q.len(), 1);
    assert_eq!(q.next_due(), Some(Millis(6)));
    assert_eq!(q.pop_due(Millis(100)), Some((Millis(6), 2)));
    assert_eq!(q.pop_due(Millis(100)), None);
}

#[test]
fn clear_disposes_everything() {
    let mut q = TimerQueue::new();
    for i in 0..4 {
        q.schedule(Millis(i), i);
    }
    assert_eq!(q.clear(), 4);
    assert!(q.is_empty());
    assert_eq!(q.next_due(), None);
    assert_eq!(q.pop_due(Millis(u64::MAX)), None);
}

#[test]
fn count_where_filters_payloads() {
    let mut q = TimerQueue::new();
    q.schedule(Millis(1), 'x');
    q.schedule(Millis(2), 'y');
    q.schedule(Millis(3), 'x');
    assert_eq!(q.count_where(|p| *p == 'x'), 2);
    assert_eq!(q.len(), 3);
}

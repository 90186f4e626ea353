use crate::animation::ease::Ease;
use crate::color::rgb::Color;
use crate::foundation::core::{Millis, Point};

/// Interpolation contract for transition value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.lerp(*b, t)
    }
}

impl Lerp for Color {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.mix(*b, t)
    }
}

/// A single eased interpolation on the virtual clock.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition<T> {
    /// Value at `start`.
    pub from: T,
    /// Value from `start + duration` on.
    pub to: T,
    /// Clock time the transition begins.
    pub start: Millis,
    /// Length; zero completes immediately.
    pub duration: Millis,
    /// Curve applied to the time fraction.
    pub ease: Ease,
}

impl<T> Transition<T>
where
    T: Lerp + Clone,
{
    /// Transition from `from` to `to` over `[start, start + duration]`.
    pub fn new(from: T, to: T, start: Millis, duration: Millis, ease: Ease) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            ease,
        }
    }

    /// Clock time the transition reaches `to`.
    pub fn end(&self) -> Millis {
        self.start.saturating_add(self.duration)
    }

    /// Linear time fraction in `[0, 1]`; a zero-length transition is complete immediately.
    pub fn progress(&self, now: Millis) -> f64 {
        if self.duration.0 == 0 {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start).as_f64();
        (elapsed / self.duration.as_f64()).clamp(0.0, 1.0)
    }

    /// True at and after [`Transition::end`].
    pub fn is_finished(&self, now: Millis) -> bool {
        now >= self.end()
    }

    /// Eased value at `now`, clamped to the endpoints outside the window.
    pub fn sample(&self, now: Millis) -> T {
        let t = self.ease.apply(self.progress(now));
        T::lerp(&self.from, &self.to, t)
    }

    /// Interrupt and head for a new target from wherever the value is right now.
    pub fn retarget(&mut self, now: Millis, to: T, duration: Millis) {
        self.from = self.sample(now);
        self.to = to;
        self.start = now;
        self.duration = duration;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transition.rs"]
mod tests;

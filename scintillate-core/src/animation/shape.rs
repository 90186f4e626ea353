use std::f64::consts::TAU;

use crate::animation::ease::Ease;
use crate::foundation::core::{Millis, Side};
use crate::foundation::math::wrap_phase;

/// Wave phase advanced over one full grow+shrink cycle.
pub const PHASE_PER_CYCLE: f64 = TAU;

/// Oscillation half-range as a fraction of the unit width.
pub const DELTA_FRACTION: f64 = 0.15;

const LEG_EASE: Ease = Ease::InOutSine;

/// Half of a breathing cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Leg {
    /// Extent goes from `base - delta` to `base + delta`.
    Grow,
    /// Extent goes from `base + delta` to `base - delta`.
    Shrink,
}

/// Animated parameters of one shape at an instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeSample {
    /// Mean distance from the anchored edge to the wavy edge.
    pub extent: f64,
    /// Wave phase in radians. Not reduced; only the cycle origin is wrapped.
    pub phase: f64,
}

/// Drives one shape's extent between `base - delta` and `base + delta` forever, two eased legs
/// per cycle, while the wave phase flows at a constant rate across both legs.
///
/// The phase accumulator lives here rather than in the leg transitions: each cycle starts from
/// `phase_origin`, and at the cycle boundary the origin is carried forward by
/// [`PHASE_PER_CYCLE`] and reduced modulo 2π.
#[derive(Clone, Debug)]
pub struct ShapeAnimator {
    slot: usize,
    side: Side,
    base_extent: f64,
    delta: f64,
    leg_duration: Millis,
    legs: [Leg; 2],
    leg_index: usize,
    leg_start: Millis,
    cycle_start: Millis,
    phase_origin: f64,
    active: bool,
    cycles: u64,
}

impl ShapeAnimator {
    /// Left shapes grow first; right shapes retract first.
    pub fn new(
        slot: usize,
        side: Side,
        base_extent: f64,
        delta: f64,
        leg_duration: Millis,
        start: Millis,
    ) -> Self {
        let legs = match side {
            Side::Left => [Leg::Grow, Leg::Shrink],
            Side::Right => [Leg::Shrink, Leg::Grow],
        };
        Self {
            slot,
            side,
            base_extent,
            delta,
            leg_duration: Millis(leg_duration.0.max(1)),
            legs,
            leg_index: 0,
            leg_start: start,
            cycle_start: start,
            phase_origin: 0.0,
            active: true,
            cycles: 0,
        }
    }

    /// Slot index on its side.
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Anchored side.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Duration of each leg, speed already applied.
    pub fn leg_duration(&self) -> Millis {
        self.leg_duration
    }

    /// Leg in flight.
    pub fn current_leg(&self) -> Leg {
        self.legs[self.leg_index]
    }

    /// False once stopped.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Full grow+shrink cycles finished so far.
    pub fn cycles_completed(&self) -> u64 {
        self.cycles
    }

    /// Phase at the start of the current cycle, in `[0, 2π)`.
    pub fn phase_origin(&self) -> f64 {
        self.phase_origin
    }

    /// When the in-flight leg completes.
    pub fn leg_due(&self) -> Millis {
        self.leg_start.saturating_add(self.leg_duration)
    }

    fn leg_range(&self, leg: Leg) -> (f64, f64) {
        let lo = self.base_extent - self.delta;
        let hi = self.base_extent + self.delta;
        match leg {
            Leg::Grow => (lo, hi),
            Leg::Shrink => (hi, lo),
        }
    }

    fn phase_rate(&self) -> f64 {
        PHASE_PER_CYCLE / (2.0 * self.leg_duration.as_f64())
    }

    /// Eased extent at `now` within the current leg.
    pub fn extent(&self, now: Millis) -> f64 {
        let (from, to) = self.leg_range(self.current_leg());
        let elapsed = now.saturating_sub(self.leg_start).as_f64();
        let t = (elapsed / self.leg_duration.as_f64()).clamp(0.0, 1.0);
        from + (to - from) * LEG_EASE.apply(t)
    }

    /// Phase grows linearly over the whole cycle, not per leg, so the wave never reverses.
    pub fn phase(&self, now: Millis) -> f64 {
        let cycle_len = 2.0 * self.leg_duration.as_f64();
        let elapsed = now.saturating_sub(self.cycle_start).as_f64().min(cycle_len);
        self.phase_origin + self.phase_rate() * elapsed
    }

    /// Extent and phase at `now`.
    pub fn sample(&self, now: Millis) -> ShapeSample {
        ShapeSample {
            extent: self.extent(now),
            phase: self.phase(now),
        }
    }

    /// Completion callback of the in-flight leg, fired at `at`.
    ///
    /// Returns the due time of the next leg, or `None` once stopped. A stopped animator keeps
    /// its final pose.
    pub fn complete_leg(&mut self, at: Millis) -> Option<Millis> {
        if !self.active {
            return None;
        }
        if self.leg_index == 0 {
            self.leg_index = 1;
            self.leg_start = at;
            return Some(self.leg_due());
        }

        self.cycles += 1;
        self.phase_origin = wrap_phase(self.phase_origin + PHASE_PER_CYCLE);
        tracing::trace!(
            slot = self.slot,
            side = self.side.as_str(),
            cycles = self.cycles,
            "shape cycle complete"
        );
        self.cycle_start = at;
        self.leg_index = 0;
        self.leg_start = at;
        Some(self.leg_due())
    }

    /// Stop re-arming. The next leg completion returns `None`.
    pub fn stop(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/shape.rs"]
mod tests;

use crate::animation::ease::Ease;
use crate::animation::transition::Transition;
use crate::color::palette::Palette;
use crate::color::rgb::Color;
use crate::foundation::core::Millis;
use crate::foundation::math::Rng64;
use crate::scene::gradient::GradientSpec;

#[derive(Clone, Debug, PartialEq)]
enum CyclerState {
    /// Staggered initial delay has not elapsed yet.
    Waiting { due: Millis },
    /// One linear transition per stop, all sharing start and duration.
    Transitioning(Vec<Transition<Color>>),
    Stopped,
}

/// Periodically retargets one gradient's stop colors to a fresh distinct set.
///
/// Cycles are chained: the completion of the current transition (the last stop's) starts the
/// next one, so cycles cannot overlap or drift. The first cycle is delayed by
/// `gradient_index * stagger`.
#[derive(Clone, Debug)]
pub struct GradientColorCycler {
    gradient: usize,
    cycle: Millis,
    active: bool,
    state: CyclerState,
    cycles_started: u64,
}

impl GradientColorCycler {
    /// Cycler for gradient `gradient`, first due at `now + gradient * stagger`.
    pub fn new(gradient: usize, stagger: Millis, cycle: Millis, now: Millis) -> Self {
        let delay = Millis(stagger.0.saturating_mul(gradient as u64));
        Self {
            gradient,
            cycle: Millis(cycle.0.max(1)),
            active: true,
            state: CyclerState::Waiting {
                due: now.saturating_add(delay),
            },
            cycles_started: 0,
        }
    }

    /// Index of the gradient this cycler drives.
    pub fn gradient_index(&self) -> usize {
        self.gradient
    }

    /// Length of one color transition.
    pub fn cycle_duration(&self) -> Millis {
        self.cycle
    }

    /// False once stopped.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Still inside the staggered initial delay.
    pub fn is_waiting(&self) -> bool {
        matches!(self.state, CyclerState::Waiting { .. })
    }

    /// A color transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, CyclerState::Transitioning(_))
    }

    /// Cycles started so far.
    pub fn cycles_started(&self) -> u64 {
        self.cycles_started
    }

    /// Due time of the pending start or completion, if any.
    pub fn next_due(&self) -> Option<Millis> {
        match &self.state {
            CyclerState::Waiting { due } => Some(*due),
            CyclerState::Transitioning(ts) => ts.last().map(|t| t.end()),
            CyclerState::Stopped => None,
        }
    }

    /// Timer callback. Commits a finished transition into `gradient`, then (if still active)
    /// starts the next cycle and returns its completion time.
    pub fn on_due(
        &mut self,
        at: Millis,
        gradient: &mut GradientSpec,
        palette: &Palette,
        rng: &mut Rng64,
    ) -> Option<Millis> {
        match std::mem::replace(&mut self.state, CyclerState::Stopped) {
            CyclerState::Stopped => return None,
            CyclerState::Waiting { .. } => {}
            CyclerState::Transitioning(ts) => {
                let finished: Vec<Color> = ts.iter().map(|t| t.to).collect();
                gradient.set_colors(&finished);
            }
        }
        if !self.active {
            return None;
        }

        let from = gradient.colors();
        let to = palette.pick_distinct(gradient.stop_count(), rng);
        let transitions: Vec<Transition<Color>> = from
            .into_iter()
            .zip(to)
            .map(|(f, t)| Transition::new(f, t, at, self.cycle, Ease::Linear))
            .collect();
        self.cycles_started += 1;
        let due = at.saturating_add(self.cycle);
        self.state = CyclerState::Transitioning(transitions);
        tracing::trace!(gradient = self.gradient, at = at.0, "color cycle started");
        Some(due)
    }

    /// Colors to paint at `now`: interpolated mid-cycle, otherwise the gradient's own stops.
    pub fn live_colors(&self, now: Millis, gradient: &GradientSpec) -> Vec<Color> {
        match &self.state {
            CyclerState::Transitioning(ts) => ts.iter().map(|t| t.sample(now)).collect(),
            CyclerState::Waiting { .. } | CyclerState::Stopped => gradient.colors(),
        }
    }

    /// Stop re-arming. A pending initial delay is abandoned; an in-flight transition may still
    /// complete (and commit) but will not start another.
    pub fn stop(&mut self) {
        self.active = false;
        if self.is_waiting() {
            self.state = CyclerState::Stopped;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/cycler.rs"]
mod tests;

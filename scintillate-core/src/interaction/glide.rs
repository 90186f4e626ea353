use crate::animation::ease::Ease;
use crate::animation::transition::Transition;
use crate::foundation::core::{Millis, Point, Viewport};

const GLIDE_EASE: Ease = Ease::InOutCubic;

/// Logical state of the glide toggle. Flips on every click, even mid-motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlideState {
    /// Resting off-screen left, or leaving off-screen right.
    Idle,
    /// Heading to, or resting at, the viewport center.
    Active,
}

/// Accent disc toggled by clicks on the scene.
///
/// Idle rests off-screen left. Activating glides it to the gap between the shape groups;
/// deactivating glides it off-screen right, after which it is re-homed off-screen left.
#[derive(Clone, Debug)]
pub struct GlideToggle {
    state: GlideState,
    home: Point,
    target: Point,
    exit: Point,
    radius: f64,
    duration: Millis,
    motion: Option<Transition<Point>>,
    rest: Point,
}

impl GlideToggle {
    /// Idle disc sized from the scene unit, gliding for `duration` per toggle.
    pub fn new(viewport: Viewport, unit_width: f64, duration: Millis) -> Self {
        let radius = (unit_width * 0.5).max(8.0);
        let y = viewport.height_f64() / 2.0;
        let home = Point::new(-2.0 * radius, y);
        Self {
            state: GlideState::Idle,
            home,
            target: viewport.center(),
            exit: Point::new(viewport.width_f64() + 2.0 * radius, y),
            radius,
            duration,
            motion: None,
            rest: home,
        }
    }

    /// Current logical state.
    pub fn state(&self) -> GlideState {
        self.state
    }

    /// Disc radius in pixels.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Off-screen rest position on the left.
    pub fn home(&self) -> Point {
        self.home
    }

    /// Where an activated disc settles.
    pub fn target(&self) -> Point {
        self.target
    }

    /// A glide is in flight and not settled yet.
    pub fn is_moving(&self) -> bool {
        self.motion.is_some()
    }

    /// Disc center at `now`.
    pub fn position(&self, now: Millis) -> Point {
        match &self.motion {
            Some(m) => m.sample(now),
            None => self.rest,
        }
    }

    /// Flip state and start (or retarget) the glide. Returns when the glide will settle.
    pub fn toggle(&mut self, now: Millis) -> Millis {
        self.state = match self.state {
            GlideState::Idle => GlideState::Active,
            GlideState::Active => GlideState::Idle,
        };
        let to = match self.state {
            GlideState::Active => self.target,
            GlideState::Idle => self.exit,
        };
        let duration = self.duration;
        match self.motion.as_mut() {
            // Re-entrant click: bend the running glide instead of queueing another.
            Some(m) if !m.is_finished(now) => m.retarget(now, to, duration),
            _ => {
                let from = self.position(now);
                self.motion = Some(Transition::new(from, to, now, duration, GLIDE_EASE));
            }
        }
        tracing::debug!(state = ?self.state, at = now.0, "glide toggled");
        now.saturating_add(self.duration)
    }

    /// Completion callback for the glide started by the latest `toggle`.
    pub fn settle(&mut self, at: Millis) {
        let Some(m) = self.motion.take_if(|m| m.is_finished(at)) else {
            return;
        };
        self.rest = match self.state {
            GlideState::Active => m.to,
            GlideState::Idle => self.home,
        };
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/glide.rs"]
mod tests;

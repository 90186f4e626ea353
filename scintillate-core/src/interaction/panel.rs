use crate::animation::ease::Ease;
use crate::animation::transition::Transition;
use kurbo::Shape as _;

use crate::foundation::core::{Millis, Point, Rect, RoundedRect, Viewport};

const PANEL_EASE: Ease = Ease::InOutCubic;
const PANEL_WIDTH_FRACTION: f64 = 0.4;
const PANEL_HEIGHT_FRACTION: f64 = 0.4;
const PANEL_CORNER_RADIUS: f64 = 24.0;
const EMERGE_START_SCALE: f64 = 0.2;
const DISSOLVE_END_SCALE: f64 = 1.6;

/// Where the panel is in its emerge/dissolve cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelState {
    /// Not painted; waiting for a trigger.
    Hidden,
    /// Sliding in from the left edge while scaling up and fading in.
    Emerging,
    /// At rest in the middle of the viewport; clickable.
    Centered,
    /// Drifting off to the right while growing and fading out.
    Dissolving,
}

/// Paint parameters of the panel at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelFrame {
    /// Outline in viewport coordinates. Corner radii scale with the panel.
    pub shape: RoundedRect,
    /// Fill opacity in `[0, 1]`.
    pub opacity: f64,
}

#[derive(Clone, Debug)]
struct PanelMotion {
    center_x: Transition<f64>,
    scale: Transition<f64>,
    opacity: Transition<f64>,
}

impl PanelMotion {
    fn new(from: (f64, f64, f64), to: (f64, f64, f64), start: Millis, duration: Millis) -> Self {
        Self {
            center_x: Transition::new(from.0, to.0, start, duration, PANEL_EASE),
            scale: Transition::new(from.1, to.1, start, duration, PANEL_EASE),
            opacity: Transition::new(from.2, to.2, start, duration, PANEL_EASE),
        }
    }

    fn is_finished(&self, now: Millis) -> bool {
        self.center_x.is_finished(now)
    }
}

/// Rounded panel that emerges from the left edge, rests centered, and dissolves off to the
/// right when clicked. Triggers outside their source state are ignored.
#[derive(Clone, Debug)]
pub struct EmergentPanel {
    state: PanelState,
    viewport: Viewport,
    duration: Millis,
    motion: Option<PanelMotion>,
}

impl EmergentPanel {
    /// Hidden panel for `viewport`; each move takes `duration`.
    pub fn new(viewport: Viewport, duration: Millis) -> Self {
        Self {
            state: PanelState::Hidden,
            viewport,
            duration,
            motion: None,
        }
    }

    /// Current state.
    pub fn state(&self) -> PanelState {
        self.state
    }

    fn size(&self) -> (f64, f64) {
        (
            self.viewport.width_f64() * PANEL_WIDTH_FRACTION,
            self.viewport.height_f64() * PANEL_HEIGHT_FRACTION,
        )
    }

    fn centered_x(&self) -> f64 {
        self.viewport.width_f64() / 2.0
    }

    /// Hidden → Emerging. Returns when the panel will be centered.
    pub fn trigger(&mut self, now: Millis) -> Option<Millis> {
        if self.state != PanelState::Hidden {
            tracing::trace!(state = ?self.state, "panel trigger ignored");
            return None;
        }
        self.state = PanelState::Emerging;
        self.motion = Some(PanelMotion::new(
            (0.0, EMERGE_START_SCALE, 0.0),
            (self.centered_x(), 1.0, 1.0),
            now,
            self.duration,
        ));
        tracing::debug!(at = now.0, "panel emerging");
        Some(now.saturating_add(self.duration))
    }

    /// Centered → Dissolving, only for a click that lands on the panel.
    pub fn click(&mut self, now: Millis, at: Point) -> Option<Millis> {
        if self.state != PanelState::Centered || !self.hits(now, at) {
            return None;
        }
        let (w, _) = self.size();
        self.state = PanelState::Dissolving;
        self.motion = Some(PanelMotion::new(
            (self.centered_x(), 1.0, 1.0),
            (
                self.viewport.width_f64() + w * DISSOLVE_END_SCALE,
                DISSOLVE_END_SCALE,
                0.0,
            ),
            now,
            self.duration,
        ));
        tracing::debug!(at = now.0, "panel dissolving");
        Some(now.saturating_add(self.duration))
    }

    /// Completion callback: Emerging → Centered, Dissolving → Hidden (panel removed).
    pub fn settle(&mut self, at: Millis) {
        if !self.motion.as_ref().is_some_and(|m| m.is_finished(at)) {
            return;
        }
        self.state = match self.state {
            PanelState::Emerging => PanelState::Centered,
            PanelState::Dissolving => PanelState::Hidden,
            other => other,
        };
        self.motion = None;
    }

    /// Panel geometry at `now`, or `None` while hidden.
    pub fn frame(&self, now: Millis) -> Option<PanelFrame> {
        if self.state == PanelState::Hidden {
            return None;
        }
        let (cx, scale, opacity) = match &self.motion {
            Some(m) => (
                m.center_x.sample(now),
                m.scale.sample(now),
                m.opacity.sample(now),
            ),
            None => (self.centered_x(), 1.0, 1.0),
        };
        let (w, h) = self.size();
        let center = Point::new(cx, self.viewport.height_f64() / 2.0);
        let rect = Rect::from_center_size(center, (w * scale, h * scale));
        Some(PanelFrame {
            shape: RoundedRect::from_rect(rect, PANEL_CORNER_RADIUS * scale),
            opacity: opacity.clamp(0.0, 1.0),
        })
    }

    /// Whether `at` lands inside the rounded outline at `now`.
    pub fn hits(&self, now: Millis, at: Point) -> bool {
        self.frame(now).is_some_and(|f| f.shape.contains(at))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/panel.rs"]
mod tests;

use crate::animation::cycler::GradientColorCycler;
use crate::animation::shape::{DELTA_FRACTION, ShapeAnimator};
use crate::color::palette::Palette;
use crate::foundation::core::{Millis, Point, Side, Viewport};
use crate::foundation::math::Rng64;
use crate::geometry::wave::wavy_rect;
use crate::interaction::glide::GlideToggle;
use crate::interaction::panel::{EmergentPanel, PanelState};
use crate::scene::config::SceneConfig;
use crate::scene::gradient::GradientSpec;
use crate::scene::shape::{ShapeGeometry, creation_order};
use crate::scene::snapshot::{GlideFrame, SceneSnapshot, ShapeFrame};
use crate::schedule::timers::{TimerId, TimerQueue};

/// Payload of every timer a scene owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneTask {
    /// Leg completion of the animator at this shape index.
    ShapeLeg(usize),
    /// Start or completion of this gradient's color cycle.
    ColorCycle(usize),
    /// The latest glide reaches its destination.
    GlideSettle,
    /// The panel finishes emerging or dissolving.
    PanelSettle,
}

/// What a click ended up doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The centered panel was hit and starts dissolving.
    Panel,
    /// The glide toggled.
    Glide,
    /// Nothing reacted.
    Ignored,
}

/// One full build of the ambient scene for a viewport.
///
/// The scene exclusively owns its gradients, animators, cyclers, interaction machines and the
/// single timer queue that drives them. [`VisualizationScene::teardown`] stops every loop and
/// disposes every pending timer at once; a torn-down scene never fires again.
#[derive(Debug)]
pub struct VisualizationScene {
    viewport: Viewport,
    config: SceneConfig,
    palette: Palette,
    rng: Rng64,
    unit_width: f64,
    speed: f64,
    background: GradientSpec,
    gradients: Vec<GradientSpec>,
    cyclers: Vec<GradientColorCycler>,
    shapes: Vec<ShapeGeometry>,
    animators: Vec<Option<ShapeAnimator>>,
    glide: Option<GlideToggle>,
    glide_timer: Option<TimerId>,
    panel: Option<EmergentPanel>,
    panel_timer: Option<TimerId>,
    timers: TimerQueue<SceneTask>,
    active: bool,
    clock: Millis,
}

impl VisualizationScene {
    /// Build every gradient, shape and loop for `viewport`, starting all loops at `now`.
    ///
    /// `speed` must already be validated (> 0); durations are fixed here for the scene's
    /// lifetime.
    #[tracing::instrument(
        skip(config, rng),
        fields(width = viewport.width, height = viewport.height)
    )]
    pub fn build(
        viewport: Viewport,
        config: &SceneConfig,
        speed: f64,
        mut rng: Rng64,
        now: Millis,
    ) -> Self {
        let palette = config.palette();
        let unit_width = viewport.width_f64() * config.unit_fraction;
        let timing = config.timing;

        let background = GradientSpec::background(config.background);

        let mut timers = TimerQueue::new();
        let mut gradients = Vec::with_capacity(config.gradient_count);
        let mut cyclers = Vec::with_capacity(config.gradient_count);
        for index in 0..config.gradient_count {
            gradients.push(GradientSpec::random(
                index,
                &palette,
                &mut rng,
                config.three_stop_probability,
            ));
            let cycler = GradientColorCycler::new(
                index,
                Millis(timing.stagger_ms),
                Millis(timing.cycle_ms),
                now,
            );
            if let Some(due) = cycler.next_due() {
                timers.schedule(due, SceneTask::ColorCycle(index));
            }
            cyclers.push(cycler);
        }

        let delta = unit_width * DELTA_FRACTION;
        let mut shapes = Vec::new();
        let mut animators = Vec::new();
        let mut painted = 0usize;
        for (side, slot) in creation_order() {
            let opacity = match side {
                Side::Left => config.style.left_opacity,
                Side::Right => config.style.right_opacity,
            };
            let mut shape = ShapeGeometry::new(side, slot, unit_width, opacity);
            let animator = if shape.is_anchor() {
                None
            } else {
                shape.gradient = Some(painted % config.gradient_count.max(1));
                painted += 1;
                let leg = timing.base_duration(slot).scaled_by_speed(speed);
                let animator = ShapeAnimator::new(slot, side, shape.base_extent, delta, leg, now);
                timers.schedule(animator.leg_due(), SceneTask::ShapeLeg(shapes.len()));
                Some(animator)
            };
            shapes.push(shape);
            animators.push(animator);
        }

        let interaction = Millis(timing.interaction_ms);
        let glide = config
            .glide
            .then(|| GlideToggle::new(viewport, unit_width, interaction));
        let panel = config
            .panel
            .then(|| EmergentPanel::new(viewport, interaction));

        tracing::debug!(
            gradients = gradients.len(),
            shapes = painted,
            timers = timers.len(),
            speed,
            "scene built"
        );

        Self {
            viewport,
            config: config.clone(),
            palette,
            rng,
            unit_width,
            speed,
            background,
            gradients,
            cyclers,
            shapes,
            animators,
            glide,
            glide_timer: None,
            panel,
            panel_timer: None,
            timers,
            active: true,
            clock: now,
        }
    }

    /// Viewport the scene was built for.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Width of one slot in pixels.
    pub fn unit_width(&self) -> f64 {
        self.unit_width
    }

    /// Speed multiplier applied at build.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// False once torn down.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Latest time the scene was advanced to.
    pub fn clock(&self) -> Millis {
        self.clock
    }

    /// Background gradient.
    pub fn background(&self) -> &GradientSpec {
        &self.background
    }

    /// Shape gradients with their committed colors.
    pub fn gradients(&self) -> &[GradientSpec] {
        &self.gradients
    }

    /// Every shape in creation order, anchors included.
    pub fn shapes(&self) -> &[ShapeGeometry] {
        &self.shapes
    }

    /// Animators of the non-anchor shapes, in creation order.
    pub fn animators(&self) -> impl Iterator<Item = &ShapeAnimator> {
        self.animators.iter().flatten()
    }

    /// One color cycler per shape gradient.
    pub fn cyclers(&self) -> &[GradientColorCycler] {
        &self.cyclers
    }

    /// Glide toggle, when enabled.
    pub fn glide(&self) -> Option<&GlideToggle> {
        self.glide.as_ref()
    }

    /// Emergent panel, when enabled.
    pub fn panel(&self) -> Option<&EmergentPanel> {
        self.panel.as_ref()
    }

    /// Timers still pending.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Pending timers carrying `task`. Each running loop owns exactly one.
    pub fn pending_for(&self, task: SceneTask) -> usize {
        self.timers.count_where(|t| *t == task)
    }

    /// Earliest pending due time.
    pub fn next_due(&mut self) -> Option<Millis> {
        self.timers.next_due()
    }

    /// Fire every timer due at or before `now`, in order, each at its own due time.
    /// Returns how many fired.
    pub fn advance_to(&mut self, now: Millis) -> usize {
        if !self.active {
            return 0;
        }
        let mut fired = 0;
        while let Some((due, task)) = self.timers.pop_due(now) {
            self.dispatch(due, task);
            fired += 1;
        }
        self.clock = self.clock.max(now);
        fired
    }

    fn dispatch(&mut self, at: Millis, task: SceneTask) {
        match task {
            SceneTask::ShapeLeg(i) => {
                let next = self
                    .animators
                    .get_mut(i)
                    .and_then(Option::as_mut)
                    .and_then(|a| a.complete_leg(at));
                if let Some(due) = next {
                    self.timers.schedule(due, SceneTask::ShapeLeg(i));
                }
            }
            SceneTask::ColorCycle(g) => {
                let (Some(cycler), Some(gradient)) =
                    (self.cyclers.get_mut(g), self.gradients.get_mut(g))
                else {
                    return;
                };
                if let Some(due) = cycler.on_due(at, gradient, &self.palette, &mut self.rng) {
                    self.timers.schedule(due, SceneTask::ColorCycle(g));
                }
            }
            SceneTask::GlideSettle => {
                self.glide_timer = None;
                if let Some(glide) = self.glide.as_mut() {
                    glide.settle(at);
                }
            }
            SceneTask::PanelSettle => {
                self.panel_timer = None;
                if let Some(panel) = self.panel.as_mut() {
                    panel.settle(at);
                }
            }
        }
    }

    /// Route a click: a Centered panel under the pointer swallows it, otherwise the glide
    /// toggles.
    pub fn click(&mut self, now: Millis, at: Point) -> ClickOutcome {
        if !self.active {
            return ClickOutcome::Ignored;
        }
        self.advance_to(now);

        if let Some(panel) = self.panel.as_mut()
            && panel.state() == PanelState::Centered
            && panel.hits(now, at)
        {
            if let Some(due) = panel.click(now, at) {
                self.panel_timer = Some(self.timers.schedule(due, SceneTask::PanelSettle));
                return ClickOutcome::Panel;
            }
        }

        if let Some(glide) = self.glide.as_mut() {
            let due = glide.toggle(now);
            if let Some(old) = self.glide_timer.take() {
                self.timers.cancel(old);
            }
            self.glide_timer = Some(self.timers.schedule(due, SceneTask::GlideSettle));
            return ClickOutcome::Glide;
        }
        ClickOutcome::Ignored
    }

    /// External trigger for the emergent panel. Ignored unless the panel is Hidden.
    pub fn trigger_panel(&mut self, now: Millis) -> bool {
        if !self.active {
            return false;
        }
        self.advance_to(now);
        let Some(due) = self.panel.as_mut().and_then(|p| p.trigger(now)) else {
            return false;
        };
        self.panel_timer = Some(self.timers.schedule(due, SceneTask::PanelSettle));
        true
    }

    /// Sample every shape, gradient and accent at `now`.
    pub fn snapshot(&self, now: Millis) -> SceneSnapshot {
        let gradients = self
            .gradients
            .iter()
            .zip(&self.cyclers)
            .map(|(g, c)| g.with_colors(&c.live_colors(now, g)))
            .collect();

        let height = self.viewport.height_f64();
        let shapes = self
            .shapes
            .iter()
            .zip(&self.animators)
            .filter_map(|(shape, animator)| {
                let animator = animator.as_ref()?;
                let gradient = shape.gradient?;
                let sample = animator.sample(now);
                Some(ShapeFrame {
                    side: shape.side,
                    slot: shape.slot,
                    gradient_id: GradientSpec::shape_id(gradient),
                    opacity: shape.opacity,
                    path: wavy_rect(
                        shape.anchor_x(self.viewport),
                        sample.extent,
                        height,
                        sample.phase,
                        shape.side,
                        &self.config.wave,
                    ),
                })
            })
            .collect();

        let glide = self.glide.as_ref().map(|g| GlideFrame {
            center: g.position(now),
            radius: g.radius(),
            fill: self
                .palette
                .colors()
                .first()
                .copied()
                .unwrap_or(crate::color::palette::FALLBACK_COLOR),
        });

        SceneSnapshot {
            viewport: self.viewport,
            at: now,
            background: self.background.clone(),
            gradients,
            shapes,
            blur_std_dev: self.config.style.blur_std_dev,
            glide,
            panel: self.panel.as_ref().and_then(|p| p.frame(now)),
        }
    }

    /// Stop every loop and dispose every pending timer. Idempotent; returns how many timers
    /// were cancelled.
    pub fn teardown(&mut self) -> usize {
        if !self.active {
            return 0;
        }
        self.active = false;
        for animator in self.animators.iter_mut().flatten() {
            animator.stop();
        }
        for cycler in &mut self.cyclers {
            cycler.stop();
        }
        self.glide_timer = None;
        self.panel_timer = None;
        let cancelled = self.timers.clear();
        tracing::debug!(cancelled, "scene torn down");
        cancelled
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/visualization.rs"]
mod tests;

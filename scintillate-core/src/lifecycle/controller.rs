use crate::foundation::core::{Millis, Point};
use crate::foundation::error::ScintillateResult;
use crate::foundation::math::Rng64;
use crate::lifecycle::host::Host;
use crate::render::svg::to_svg;
use crate::scene::config::SceneConfig;
use crate::scene::snapshot::SceneSnapshot;
use crate::scene::visualization::{ClickOutcome, VisualizationScene};

/// Wires scene builds to mount, resize, speed changes and destroy.
///
/// At most one scene is alive at a time. Every rebuild tears the previous scene down and clears
/// the host before the next one is constructed.
#[derive(Debug)]
pub struct LifecycleController<H: Host> {
    host: H,
    config: SceneConfig,
    speed: f64,
    rng: Rng64,
    scene: Option<VisualizationScene>,
    mounted: bool,
    builds: usize,
}

impl<H: Host> LifecycleController<H> {
    /// Unmounted controller. Fails if `config` does not validate.
    pub fn new(host: H, config: SceneConfig) -> ScintillateResult<Self> {
        config.validate()?;
        Ok(Self {
            host,
            speed: config.speed,
            rng: Rng64::new(config.seed),
            config,
            scene: None,
            mounted: false,
            builds: 0,
        })
    }

    /// The host scenes are presented to.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access, e.g. to change a headless viewport before `on_resize`.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Config every build reads.
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Live scene, if mounted with a viewport.
    pub fn scene(&self) -> Option<&VisualizationScene> {
        self.scene.as_ref()
    }

    /// Current speed multiplier.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Whether `mount` succeeded and `destroy` has not run.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Number of scenes built so far.
    pub fn builds(&self) -> usize {
        self.builds
    }

    /// Build the first scene and start listening for resizes. Without a viewport nothing is
    /// registered and `false` is returned.
    #[tracing::instrument(skip(self))]
    pub fn mount(&mut self, now: Millis) -> bool {
        if self.mounted {
            return true;
        }
        if self.host.viewport().is_none() {
            tracing::debug!("no rendering environment, staying unmounted");
            return false;
        }
        self.host.listen_resize();
        self.mounted = true;
        self.rebuild(now);
        true
    }

    /// Full rebuild at the host's current viewport.
    pub fn on_resize(&mut self, now: Millis) -> bool {
        if !self.mounted {
            return false;
        }
        self.rebuild(now);
        true
    }

    /// Accept a new speed multiplier and rebuild. Non-positive or non-finite values are
    /// ignored and the previous speed is kept.
    pub fn set_speed(&mut self, multiplier: f64, now: Millis) -> bool {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            tracing::warn!(multiplier, kept = self.speed, "ignoring invalid speed");
            return false;
        }
        self.speed = multiplier;
        if self.mounted {
            self.rebuild(now);
        }
        true
    }

    /// Forward a click to the live scene.
    pub fn on_click(&mut self, at: Point, now: Millis) -> ClickOutcome {
        match self.scene.as_mut() {
            Some(scene) => scene.click(now, at),
            None => ClickOutcome::Ignored,
        }
    }

    /// Forward a panel trigger to the live scene. `false` if nothing reacted.
    pub fn trigger_panel(&mut self, now: Millis) -> bool {
        self.scene
            .as_mut()
            .is_some_and(|scene| scene.trigger_panel(now))
    }

    /// Advance the live scene to `now` and present the resulting frame. Returns how many
    /// timers fired.
    pub fn tick(&mut self, now: Millis) -> usize {
        let Some(scene) = self.scene.as_mut() else {
            return 0;
        };
        let fired = scene.advance_to(now);
        let document = to_svg(&scene.snapshot(now));
        self.host.present(&document);
        fired
    }

    /// Paint-ready state of the live scene at `now`.
    pub fn snapshot(&self, now: Millis) -> Option<SceneSnapshot> {
        self.scene.as_ref().map(|scene| scene.snapshot(now))
    }

    /// Tear down the live scene, stop listening and clear the mount point. Idempotent.
    pub fn destroy(&mut self) {
        if !self.mounted {
            return;
        }
        self.teardown_scene();
        self.host.unlisten_resize();
        self.host.clear();
        self.mounted = false;
        tracing::debug!(builds = self.builds, "controller destroyed");
    }

    fn teardown_scene(&mut self) {
        if let Some(mut old) = self.scene.take() {
            old.teardown();
        }
    }

    fn rebuild(&mut self, now: Millis) {
        self.teardown_scene();
        self.host.clear();

        let Some(viewport) = self.host.viewport() else {
            tracing::debug!("viewport gone, no scene built");
            return;
        };
        let scene =
            VisualizationScene::build(viewport, &self.config, self.speed, self.rng.fork(), now);
        self.host.present(&to_svg(&scene.snapshot(now)));
        self.scene = Some(scene);
        self.builds += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/lifecycle/controller.rs"]
mod tests;

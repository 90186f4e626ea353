use std::path::Path;

use crate::color::palette::{DEFAULT_PALETTE, Palette};
use crate::color::rgb::Color;
use crate::foundation::core::Millis;
use crate::foundation::error::{ScintillateError, ScintillateResult};
use crate::geometry::wave::WaveParams;

/// Durations of every scheduled loop, in milliseconds at speed 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingConfig {
    /// Leg duration of slot 0; each slot adds `shape_slot_step_ms`.
    pub shape_base_ms: u64,
    /// Extra leg duration per slot.
    pub shape_slot_step_ms: u64,
    /// One gradient color transition.
    pub cycle_ms: u64,
    /// Delay between the first cycles of consecutive gradients.
    pub stagger_ms: u64,
    /// Glide and panel moves. Not scaled by speed.
    pub interaction_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            shape_base_ms: 4000,
            shape_slot_step_ms: 300,
            cycle_ms: 6000,
            stagger_ms: 800,
            interaction_ms: 1000,
        }
    }
}

impl TimingConfig {
    /// Leg duration for a slot before speed scaling. Outer slots run slightly slower so the
    /// shapes drift out of sync.
    pub fn base_duration(&self, slot: usize) -> Millis {
        Millis(
            self.shape_base_ms
                .saturating_add(self.shape_slot_step_ms.saturating_mul(slot as u64)),
        )
    }
}

/// Paint settings shared by every shape.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Opacity of left-anchored shapes.
    pub left_opacity: f64,
    /// Opacity of right-anchored shapes.
    pub right_opacity: f64,
    /// Horizontal Gaussian blur applied to shape edges.
    pub blur_std_dev: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            left_opacity: 0.25,
            right_opacity: 0.5,
            blur_std_dev: 20.0,
        }
    }
}

/// Everything a scene build reads besides the viewport.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// Colors the gradient stops are drawn from.
    pub palette: Vec<Color>,
    /// Start and end of the horizontal background gradient.
    pub background: [Color; 2],
    /// Shape gradients per build: 4 or 6.
    pub gradient_count: usize,
    /// Unit width as a fraction of the viewport width.
    pub unit_fraction: f64,
    /// Chance that a shape gradient gets three stops instead of two.
    pub three_stop_probability: f64,
    /// Initial speed multiplier for shape legs.
    pub speed: f64,
    /// Seed of the build RNG.
    pub seed: u64,
    /// Enable the click-toggled glide disc.
    pub glide: bool,
    /// Enable the emergent panel.
    pub panel: bool,
    /// Loop durations.
    pub timing: TimingConfig,
    /// Wavy edge shape.
    pub wave: WaveParams,
    /// Shape paint settings.
    pub style: StyleConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.to_vec(),
            background: [Color::rgb(0xCD, 0xC1, 0xD2), Color::rgb(0xB7, 0xC5, 0xE8)],
            gradient_count: 6,
            unit_fraction: 0.1,
            three_stop_probability: 0.33,
            speed: 1.0,
            seed: 0,
            glide: true,
            panel: true,
            timing: TimingConfig::default(),
            wave: WaveParams::default(),
            style: StyleConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> ScintillateResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| ScintillateError::config(format!("invalid scene config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_path(path: &Path) -> ScintillateResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            ScintillateError::config(format!("read '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&s)
    }

    /// Deduplicated palette.
    pub fn palette(&self) -> Palette {
        Palette::new(self.palette.iter().copied())
    }

    /// Check every range the scene build relies on.
    pub fn validate(&self) -> ScintillateResult<()> {
        if !matches!(self.gradient_count, 4 | 6) {
            return Err(ScintillateError::validation(format!(
                "gradient_count must be 4 or 6, got {}",
                self.gradient_count
            )));
        }
        if !self.unit_fraction.is_finite()
            || self.unit_fraction <= 0.0
            || self.unit_fraction > 0.5
        {
            return Err(ScintillateError::validation("unit_fraction must be in (0, 0.5]"));
        }
        if !(0.0..=1.0).contains(&self.three_stop_probability) {
            return Err(ScintillateError::validation("three_stop_probability must be in [0, 1]"));
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(ScintillateError::validation("speed must be > 0"));
        }
        if self.timing.cycle_ms == 0
            || self.timing.shape_base_ms == 0
            || self.timing.interaction_ms == 0
        {
            return Err(ScintillateError::validation(
                "cycle_ms, shape_base_ms and interaction_ms must be > 0",
            ));
        }
        for (name, v) in [
            ("left_opacity", self.style.left_opacity),
            ("right_opacity", self.style.right_opacity),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(ScintillateError::validation(format!("{name} must be in [0, 1]")));
            }
        }
        if !self.style.blur_std_dev.is_finite() || self.style.blur_std_dev < 0.0 {
            return Err(ScintillateError::validation("blur_std_dev must be >= 0"));
        }
        self.wave.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;

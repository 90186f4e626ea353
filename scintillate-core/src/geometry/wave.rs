use std::f64::consts::PI;

use crate::foundation::core::{BezPath, Point, Side};
use crate::foundation::error::{ScintillateError, ScintillateResult};

/// Fewest samples along the wavy edge that still read as a smooth curve.
pub const MIN_SEGMENTS: u32 = 30;

/// Shape of the sine edge. The defaults are the tuned values of the ambient scene.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WaveParams {
    /// Straight segments along the wavy edge; at least [`MIN_SEGMENTS`].
    pub segments: u32,
    /// Peak lateral displacement in pixels. Capped per shape at its extent.
    pub amplitude: f64,
    /// Half-periods of the sine over the full height, before `scale`.
    pub frequency: f64,
    /// Extra multiplier on the spatial frequency.
    pub scale: f64,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            segments: 40,
            amplitude: 15.0,
            frequency: 4.0,
            scale: 1.0,
        }
    }
}

impl WaveParams {
    /// Reject too few segments and negative or non-finite shape values.
    pub fn validate(&self) -> ScintillateResult<()> {
        if self.segments < MIN_SEGMENTS {
            return Err(ScintillateError::validation(format!(
                "wave segments must be >= {MIN_SEGMENTS}"
            )));
        }
        for (name, v) in [
            ("amplitude", self.amplitude),
            ("frequency", self.frequency),
            ("scale", self.scale),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(ScintillateError::validation(format!(
                    "wave {name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }

    /// Sine of sample `segment` (of `segments`) for the given phase, in `[-1, 1]`.
    fn unit_wave(&self, segment: u32, phase: f64) -> f64 {
        let t = f64::from(segment) / f64::from(self.segments.max(1));
        (self.frequency * t * PI * self.scale + phase).sin()
    }
}

/// Closed polygon approximating a full-height rectangle whose inner edge (the one facing the
/// viewport center) is a sine wave.
///
/// `anchor_x` is the straight outer edge (0 for left shapes, the viewport width for right
/// shapes) and `extent` is the mean distance from it to the wavy edge. Left shapes wave on
/// their right edge, right shapes on their left edge. Pure: identical inputs give identical
/// paths, and a small change in `phase` only shifts the wavy edge laterally.
///
/// The amplitude is capped at `extent` so the wavy edge never crosses the outer edge on narrow
/// viewports.
pub fn wavy_rect(
    anchor_x: f64,
    extent: f64,
    height: f64,
    phase: f64,
    side: Side,
    params: &WaveParams,
) -> BezPath {
    let extent = extent.max(0.0);
    let dir = match side {
        Side::Left => 1.0,
        Side::Right => -1.0,
    };
    let segments = params.segments.max(1);
    let amplitude = params.amplitude.min(extent);

    let mut path = BezPath::new();
    path.move_to(Point::new(anchor_x, 0.0));
    for s in 0..=segments {
        let y = height * f64::from(s) / f64::from(segments);
        let x = anchor_x + dir * (extent + amplitude * params.unit_wave(s, phase));
        path.line_to(Point::new(x, y));
    }
    path.line_to(Point::new(anchor_x, height));
    path.close_path();
    path
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/wave.rs"]
mod tests;

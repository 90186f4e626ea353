use crate::foundation::error::{ScintillateError, ScintillateResult};

pub use kurbo::{BezPath, Point, Rect, RoundedRect};

/// Virtual milliseconds on the caller-supplied clock.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    /// Clock origin.
    pub const ZERO: Self = Self(0);

    /// `self + other`, clamped at `u64::MAX`.
    pub fn saturating_add(self, other: Millis) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// `self - other`, clamped at zero.
    pub fn saturating_sub(self, other: Millis) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Milliseconds as `f64`.
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }

    /// Scale a base duration down by a speed multiplier, never collapsing to zero.
    pub fn scaled_by_speed(self, speed: f64) -> Self {
        if !speed.is_finite() || speed <= 0.0 {
            return self;
        }
        Self(((self.0 as f64) / speed).round().max(1.0) as u64)
    }
}

/// Pixel size of the area a scene is built for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Create a viewport. Both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> ScintillateResult<Self> {
        if width == 0 || height == 0 {
            return Err(ScintillateError::validation("viewport width and height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Width as `f64`.
    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as `f64`.
    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }

    /// Center point in viewport coordinates.
    pub fn center(self) -> Point {
        Point::new(self.width_f64() / 2.0, self.height_f64() / 2.0)
    }

    /// Full viewport as a rect at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width_f64(), self.height_f64())
    }
}

/// Which viewport edge a shape is anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Anchored at x = 0.
    Left,
    /// Anchored at x = viewport width.
    Right,
}

impl Side {
    /// Lowercase name, as used in SVG class names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

/// Easing curves used by the scene. All map `[0, 1]` onto `[0, 1]` with fixed endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Color cycles.
    Linear,
    /// Shape legs: gentle at both ends so chained legs meet without a kink.
    #[default]
    InOutSine,
    /// Glide and panel moves.
    InOutCubic,
}

impl Ease {
    /// Eased value at `t`. `t` is clamped to `[0, 1]`; NaN maps to 0.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        match self {
            Self::Linear => t,
            Self::InOutSine => {
                if t >= 1.0 {
                    1.0
                } else {
                    (1.0 - (std::f64::consts::PI * t).cos()) / 2.0
                }
            }
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;

use crate::color::palette::Palette;
use crate::color::rgb::Color;
use crate::foundation::math::Rng64;

/// One color stop of a linear gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient axis in `[0, 1]`.
    pub offset: f64,
    /// Stop color.
    pub color: Color,
}

/// Direction a gradient runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradientAxis {
    /// Left to right. Used by the background.
    Horizontal,
    /// Top to bottom. Used by shapes.
    Vertical,
}

/// A named linear gradient. Shape gradients are mutated in place by their cycler; the stop
/// count is fixed for the gradient's lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientSpec {
    /// Document-unique id shapes reference the gradient by.
    pub id: String,
    /// Direction of the gradient.
    pub axis: GradientAxis,
    /// Evenly spaced stops: 2 or 3 for shapes, 2 for the background.
    pub stops: Vec<GradientStop>,
}

/// Id of the background gradient.
pub const BACKGROUND_GRADIENT_ID: &str = "backgroundGradient";

fn offsets(stop_count: usize) -> &'static [f64] {
    match stop_count {
        3 => &[0.0, 0.5, 1.0],
        _ => &[0.0, 1.0],
    }
}

impl GradientSpec {
    /// Id of the shape gradient at `index`.
    pub fn shape_id(index: usize) -> String {
        format!("gradient{index}")
    }

    /// Horizontal two-stop background gradient.
    pub fn background(colors: [Color; 2]) -> Self {
        Self {
            id: BACKGROUND_GRADIENT_ID.to_owned(),
            axis: GradientAxis::Horizontal,
            stops: offsets(2)
                .iter()
                .zip(colors)
                .map(|(&offset, color)| GradientStop { offset, color })
                .collect(),
        }
    }

    /// Vertical shape gradient with distinct colors. Three stops are chosen with probability
    /// `three_stop_probability`, two otherwise.
    pub fn random(
        index: usize,
        palette: &Palette,
        rng: &mut Rng64,
        three_stop_probability: f64,
    ) -> Self {
        let stop_count = if rng.chance(three_stop_probability) {
            3
        } else {
            2
        };
        let colors = palette.pick_distinct(stop_count, rng);
        Self {
            id: Self::shape_id(index),
            axis: GradientAxis::Vertical,
            stops: offsets(stop_count)
                .iter()
                .zip(colors)
                .map(|(&offset, color)| GradientStop { offset, color })
                .collect(),
        }
    }

    /// Number of stops; fixed for the gradient's lifetime.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Stop colors in offset order.
    pub fn colors(&self) -> Vec<Color> {
        self.stops.iter().map(|s| s.color).collect()
    }

    /// Overwrite stop colors in order; extra colors are ignored and missing ones leave the stop
    /// untouched, so the stop count never changes.
    pub fn set_colors(&mut self, colors: &[Color]) {
        for (stop, &c) in self.stops.iter_mut().zip(colors) {
            stop.color = c;
        }
    }

    /// Copy with the stop colors replaced, as [`GradientSpec::set_colors`] would.
    pub fn with_colors(&self, colors: &[Color]) -> Self {
        let mut out = self.clone();
        out.set_colors(colors);
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/gradient.rs"]
mod tests;

use crate::color::rgb::Color;
use crate::foundation::math::Rng64;

/// Returned for every requested slot when the palette is empty.
pub const FALLBACK_COLOR: Color = Color::rgb(0xCD, 0xC1, 0xD2);

/// Colors used by the ambient scene when no palette is configured.
pub const DEFAULT_PALETTE: [Color; 6] = [
    Color::rgb(0xCD, 0xC1, 0xD2),
    Color::rgb(0x63, 0xA8, 0xAF),
    Color::rgb(0xC1, 0x9A, 0xAC),
    Color::rgb(0x92, 0xB2, 0xBD),
    Color::rgb(0xD8, 0xF6, 0xFE),
    Color::rgb(0xBC, 0xB2, 0xB0),
];

/// Fixed, ordered set of colors. Duplicates are dropped on construction so that distinct slots
/// always mean distinct colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE)
    }
}

impl Palette {
    /// Palette in first-seen order, duplicates removed.
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        let mut out: Vec<Color> = Vec::new();
        for c in colors {
            if !out.contains(&c) {
                out.push(c);
            }
        }
        Self { colors: out }
    }

    /// Distinct colors in palette order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True when the palette has no colors at all.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Whether `color` is one of the palette's colors.
    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    /// Pick `n` pairwise-distinct colors, uniformly at random, in draw order.
    ///
    /// Each draw samples uniformly over the slots not chosen yet: a uniform index into the
    /// reduced range is mapped onto the palette by skipping already-chosen slots, so there is no
    /// rejection loop and the number of RNG draws is exactly `min(n, len)`.
    ///
    /// If the palette has fewer than `n` colors, the distinct picks are repeated in order to fill
    /// the request; an empty palette yields [`FALLBACK_COLOR`] `n` times. Neither case is an
    /// error.
    pub fn pick_distinct(&self, n: usize, rng: &mut Rng64) -> Vec<Color> {
        if self.colors.is_empty() {
            tracing::warn!(requested = n, "empty palette, using fallback color");
            return vec![FALLBACK_COLOR; n];
        }

        let distinct = n.min(self.colors.len());
        // Chosen slot indices, kept sorted for the skip walk.
        let mut taken: Vec<usize> = Vec::with_capacity(distinct);
        let mut out = Vec::with_capacity(n);
        for drawn in 0..distinct {
            let mut idx = rng.below(self.colors.len() - drawn);
            for &t in &taken {
                if idx >= t {
                    idx += 1;
                } else {
                    break;
                }
            }
            let pos = taken.partition_point(|&t| t < idx);
            taken.insert(pos, idx);
            out.push(self.colors[idx]);
        }

        if distinct < n {
            tracing::warn!(
                requested = n,
                available = distinct,
                "palette smaller than requested distinct count, repeating colors"
            );
            let mut i = 0;
            while out.len() < n {
                out.push(out[i % distinct]);
                i += 1;
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/palette.rs"]
mod tests;

use crate::foundation::core::{Side, Viewport};

/// Slots per side, including the zero-extent anchor at slot 0.
pub const SLOTS_PER_SIDE: usize = 4;

/// Static description of one shape for the lifetime of a build.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeGeometry {
    /// Anchored side.
    pub side: Side,
    /// Slot index; 0 is the anchor.
    pub slot: usize,
    /// Mean distance from the anchored edge to the wavy edge.
    pub base_extent: f64,
    /// Index into the scene's shape gradients; `None` for anchors.
    pub gradient: Option<usize>,
    /// Paint opacity, from the side's style.
    pub opacity: f64,
}

impl ShapeGeometry {
    /// Geometry for `slot`, with a base extent of `slot` units.
    pub fn new(side: Side, slot: usize, unit_width: f64, opacity: f64) -> Self {
        Self {
            side,
            slot,
            base_extent: slot as f64 * unit_width,
            gradient: None,
            opacity,
        }
    }

    /// Slot 0 has no extent and is never animated or painted.
    pub fn is_anchor(&self) -> bool {
        self.slot == 0
    }

    /// x of the straight outer edge.
    pub fn anchor_x(&self, viewport: Viewport) -> f64 {
        match self.side {
            Side::Left => 0.0,
            Side::Right => viewport.width_f64(),
        }
    }
}

/// Creation (and paint) order: left slots widest to narrowest, then right slots from the
/// anchor outwards.
pub fn creation_order() -> impl Iterator<Item = (Side, usize)> {
    (0..SLOTS_PER_SIDE)
        .rev()
        .map(|slot| (Side::Left, slot))
        .chain((0..SLOTS_PER_SIDE).map(|slot| (Side::Right, slot)))
}

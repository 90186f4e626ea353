use crate::color::rgb::Color;
use crate::foundation::core::{BezPath, Millis, Point, Side, Viewport};
use crate::interaction::panel::PanelFrame;
use crate::scene::gradient::GradientSpec;

/// One painted shape.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeFrame {
    /// Anchored side.
    pub side: Side,
    /// Slot index, never 0.
    pub slot: usize,
    /// Id of the gradient filling the shape.
    pub gradient_id: String,
    /// Paint opacity.
    pub opacity: f64,
    /// Closed outline with the wavy inner edge.
    pub path: BezPath,
}

/// The glide disc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlideFrame {
    /// Disc center.
    pub center: Point,
    /// Disc radius.
    pub radius: f64,
    /// Solid fill.
    pub fill: Color,
}

/// Everything needed to paint the scene at one instant, in back-to-front order.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneSnapshot {
    /// Size of the document.
    pub viewport: Viewport,
    /// Clock time the snapshot was sampled at.
    pub at: Millis,
    /// Background gradient.
    pub background: GradientSpec,
    /// Shape gradients with their live (possibly mid-transition) stop colors.
    pub gradients: Vec<GradientSpec>,
    /// Painted shapes in paint order. Anchors are omitted.
    pub shapes: Vec<ShapeFrame>,
    /// Horizontal standard deviation of the edge blur.
    pub blur_std_dev: f64,
    /// Glide disc, when enabled.
    pub glide: Option<GlideFrame>,
    /// Panel, when visible.
    pub panel: Option<PanelFrame>,
}

//! Scintillate is a headless ambient gradient visualization engine.
//!
//! A scene is a layered composition of translucent, blurred shapes with one wavy edge each,
//! anchored to the left and right viewport edges and filled with slowly color-cycling linear
//! gradients. Every moving part runs on a virtual millisecond clock, so a scene is fully
//! deterministic for a given seed, viewport and sequence of inputs.
//!
//! # Pipeline overview
//!
//! 1. **Build**: `Viewport + SceneConfig -> VisualizationScene` (gradients, shapes, one loop each)
//! 2. **Advance**: `VisualizationScene::advance_to(Millis)` fires due timers in order
//! 3. **Snapshot**: `VisualizationScene::snapshot(Millis) -> SceneSnapshot` (paint-ready state)
//! 4. **Output**: `SceneSnapshot -> SVG` and optionally `SVG -> FrameRGBA`
//!
//! [`LifecycleController`] wires builds to mount, resize, speed changes and destroy against a
//! [`Host`]. Rebuilding always tears the previous scene down first.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod animation;
mod color;
mod foundation;
mod geometry;
mod interaction;
mod lifecycle;
mod scene;
mod schedule;

/// Snapshot serialization and rasterization.
pub mod render;

pub use animation::cycler::GradientColorCycler;
pub use animation::ease::Ease;
pub use animation::shape::{DELTA_FRACTION, Leg, PHASE_PER_CYCLE, ShapeAnimator, ShapeSample};
pub use animation::transition::{Lerp, Transition};
pub use color::palette::{DEFAULT_PALETTE, FALLBACK_COLOR, Palette};
pub use color::rgb::Color;
pub use foundation::core::{BezPath, Millis, Point, Rect, RoundedRect, Side, Viewport};
pub use foundation::error::{ScintillateError, ScintillateResult};
pub use foundation::math::{Rng64, wrap_phase};
pub use geometry::wave::{MIN_SEGMENTS, WaveParams, wavy_rect};
pub use interaction::glide::{GlideState, GlideToggle};
pub use interaction::panel::{EmergentPanel, PanelFrame, PanelState};
pub use lifecycle::controller::LifecycleController;
pub use lifecycle::host::{HeadlessHost, Host};
pub use render::raster::{FrameRGBA, rasterize};
pub use render::svg::{EDGE_BLUR_FILTER_ID, to_svg};
pub use scene::config::{SceneConfig, StyleConfig, TimingConfig};
pub use scene::gradient::{BACKGROUND_GRADIENT_ID, GradientAxis, GradientSpec, GradientStop};
pub use scene::shape::{SLOTS_PER_SIDE, ShapeGeometry, creation_order};
pub use scene::snapshot::{GlideFrame, SceneSnapshot, ShapeFrame};
pub use scene::visualization::{ClickOutcome, SceneTask, VisualizationScene};
pub use schedule::timers::{TimerId, TimerQueue};

use super::*;
use crate::foundation::core::Millis;
use crate::foundation::math::Rng64;
use crate::render::svg::to_svg;
use crate::scene::config::SceneConfig;
use crate::scene::visualization::VisualizationScene;

#[test]
fn scene_rasterizes_at_viewport_size() {
    let viewport = Viewport::new(96, 64).unwrap();
    let scene = VisualizationScene::build(
        viewport,
        &SceneConfig::default(),
        1.0,
        Rng64::new(1),
        Millis(0),
    );
    let frame = rasterize(&to_svg(&scene.snapshot(Millis(100))), viewport).unwrap();
    assert_eq!((frame.width, frame.height), (96, 64));
    assert_eq!(frame.data.len(), 96 * 64 * 4);
    assert!(!frame.premultiplied);
    // The background gradient covers the whole frame.
    assert_eq!(frame.pixel(48, 32).unwrap()[3], 255);
    assert!(frame.pixel(96, 0).is_none());
}

#[test]
fn solid_fill_round_trips_straight_alpha() {
    let viewport = Viewport::new(4, 4).unwrap();
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"><rect width="4" height="4" fill="#63A8AF"/></svg>"##;
    let frame = rasterize(svg, viewport).unwrap();
    assert_eq!(frame.pixel(1, 1), Some([0x63, 0xA8, 0xAF, 255]));
}

#[test]
fn malformed_document_is_a_render_error() {
    let viewport = Viewport::new(4, 4).unwrap();
    let err = rasterize("<svg", viewport).unwrap_err();
    assert!(matches!(err, ScintillateError::Render(_)));
}

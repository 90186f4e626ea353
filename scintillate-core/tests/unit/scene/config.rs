use super::*;

#[test]
fn defaults_validate() {
    let cfg = SceneConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.palette().len(), 6);
    assert_eq!(cfg.timing.base_duration(0), Millis(4000));
    assert_eq!(cfg.timing.base_duration(3), Millis(4900));
}

#[test]
fn partial_json_fills_defaults() {
    let cfg = SceneConfig::from_json_str(
        r##"{ "gradient_count": 4, "seed": 9, "timing": { "cycle_ms": 2000 } }"##,
    )
    .unwrap();
    assert_eq!(cfg.gradient_count, 4);
    assert_eq!(cfg.seed, 9);
    assert_eq!(cfg.timing.cycle_ms, 2000);
    assert_eq!(cfg.timing.stagger_ms, 800);
    assert_eq!(cfg.wave, WaveParams::default());
}

#[test]
fn palette_parses_from_hex() {
    let cfg =
        SceneConfig::from_json_str(r##"{ "palette": ["#000000", "#ffffff", "#ff0000"] }"##)
            .unwrap();
    assert_eq!(cfg.palette[2], Color::rgb(255, 0, 0));
}

#[test]
fn rejects_bad_values() {
    for json in [
        r#"{ "gradient_count": 5 }"#,
        r#"{ "speed": 0 }"#,
        r#"{ "speed": -1.5 }"#,
        r#"{ "three_stop_probability": 1.5 }"#,
        r#"{ "unit_fraction": 0 }"#,
        r#"{ "wave": { "segments": 8 } }"#,
        r#"{ "timing": { "cycle_ms": 0 } }"#,
        r#"{ "style": { "left_opacity": 2 } }"#,
    ] {
        let err = SceneConfig::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("validation error"), "{json}: {err}");
    }
}

#[test]
fn rejects_unknown_fields_and_bad_colors() {
    let err = SceneConfig::from_json_str(r#"{ "colour": 1 }"#).unwrap_err();
    assert!(err.to_string().contains("config error"));
    let err = SceneConfig::from_json_str(r#"{ "palette": ["blue"] }"#).unwrap_err();
    assert!(err.to_string().contains("config error"));
}

#[test]
fn roundtrips_through_json() {
    let cfg = SceneConfig::default();
    let json = serde_json::to_string(&cfg).unwrap();
    assert_eq!(SceneConfig::from_json_str(&json).unwrap(), cfg);
}

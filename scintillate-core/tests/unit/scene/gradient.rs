use super::*;

#[test]
fn three_stop_rate_converges_near_one_third() {
    let palette = Palette::default();
    let mut rng = Rng64::new(2024);
    let trials = 4000;
    let three = (0..trials)
        .filter(|&i| GradientSpec::random(i, &palette, &mut rng, 0.33).stop_count() == 3)
        .count();
    let rate = three as f64 / trials as f64;
    assert!((0.29..0.37).contains(&rate), "rate {rate}");
}

#[test]
fn random_gradient_stops_are_distinct_and_positioned() {
    let palette = Palette::default();
    let mut rng = Rng64::new(11);
    for i in 0..200 {
        let g = GradientSpec::random(i, &palette, &mut rng, 0.33);
        assert_eq!(g.axis, GradientAxis::Vertical);
        assert_eq!(g.id, format!("gradient{i}"));
        let colors = g.colors();
        for a in 0..colors.len() {
            for b in a + 1..colors.len() {
                assert_ne!(colors[a], colors[b]);
            }
        }
        let offs: Vec<f64> = g.stops.iter().map(|s| s.offset).collect();
        match g.stop_count() {
            2 => assert_eq!(offs, vec![0.0, 1.0]),
            3 => assert_eq!(offs, vec![0.0, 0.5, 1.0]),
            n => panic!("unexpected stop count {n}"),
        }
    }
}

#[test]
fn set_colors_never_changes_stop_count() {
    let palette = Palette::default();
    let mut rng = Rng64::new(1);
    let mut g = GradientSpec::random(0, &palette, &mut rng, 0.0);
    assert_eq!(g.stop_count(), 2);
    let red = Color::rgb(255, 0, 0);
    let blue = Color::rgb(0, 0, 255);
    g.set_colors(&[red, blue, Color::rgb(0, 255, 0)]);
    assert_eq!(g.colors(), vec![red, blue]);
}

#[test]
fn background_is_horizontal_two_stop() {
    let a = Color::rgb(0xCD, 0xC1, 0xD2);
    let b = Color::rgb(0xB7, 0xC5, 0xE8);
    let bg = GradientSpec::background([a, b]);
    assert_eq!(bg.id, BACKGROUND_GRADIENT_ID);
    assert_eq!(bg.axis, GradientAxis::Horizontal);
    assert_eq!(bg.colors(), vec![a, b]);
}

use scintillate::{HeadlessHost, LifecycleController, Millis, Point, SceneConfig, Viewport};

fn parse_at_ms() -> anyhow::Result<u64> {
    match std::env::args().nth(1) {
        Some(s) => Ok(s.parse()?),
        None => Ok(2500),
    }
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let at = Millis(parse_at_ms()?);
    let config = SceneConfig {
        seed: 1,
        ..SceneConfig::default()
    };

    let host = HeadlessHost::new(Viewport::new(1280, 720)?);
    let mut controller = LifecycleController::new(host, config)?;
    controller.mount(Millis::ZERO);
    controller.on_click(Point::new(1.0, 1.0), Millis(200));
    controller.tick(at);

    let document = controller
        .host()
        .last_document()
        .ok_or_else(|| anyhow::anyhow!("nothing presented"))?;

    let out_path = std::path::Path::new("target").join("render_one_frame.svg");
    std::fs::create_dir_all("target")?;
    std::fs::write(&out_path, document)?;

    eprintln!("wrote {}", out_path.display());
    Ok(())
}

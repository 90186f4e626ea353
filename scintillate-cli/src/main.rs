use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use rayon::prelude::*;
use scintillate::{
    HeadlessHost, LifecycleController, Millis, Point, SceneConfig, Viewport, rasterize,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scintillate", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the scene at one instant as SVG or PNG.
    Frame(FrameArgs),
    /// Render a PNG sequence on the virtual clock.
    Frames(FramesArgs),
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Scene config JSON. Missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the config seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the config speed multiplier (> 0).
    #[arg(long)]
    speed: Option<f64>,

    /// Click the scene at this time. Repeatable.
    #[arg(long = "click-at-ms")]
    click_at_ms: Vec<u64>,

    /// Click x coordinate.
    #[arg(long, default_value_t = 1.0)]
    click_x: f64,

    /// Click y coordinate.
    #[arg(long, default_value_t = 1.0)]
    click_y: f64,

    /// Trigger the emergent panel at this time. Repeatable.
    #[arg(long = "panel-at-ms")]
    panel_at_ms: Vec<u64>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Virtual time of the frame.
    #[arg(long, default_value_t = 0)]
    at_ms: u64,

    /// Output path; `.svg` or `.png`.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Length of the sequence.
    #[arg(long)]
    duration_ms: u64,

    /// Output directory for `frame_NNNNN.png`.
    #[arg(long)]
    out_dir: PathBuf,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Clone, Copy, Debug)]
enum Input {
    Click(Point),
    Panel,
}

/// Controller plus the time-ordered inputs still to apply.
struct Session {
    controller: LifecycleController<HeadlessHost>,
    inputs: Vec<(Millis, Input)>,
    next_input: usize,
}

impl Session {
    fn new(args: &SceneArgs) -> anyhow::Result<Self> {
        let mut config = match &args.config {
            Some(path) => SceneConfig::from_path(path)?,
            None => SceneConfig::default(),
        };
        if let Some(seed) = args.seed {
            config.seed = seed;
        }
        if let Some(speed) = args.speed {
            config.speed = speed;
        }
        let viewport = Viewport::new(args.width, args.height)?;
        let mut controller = LifecycleController::new(HeadlessHost::new(viewport), config)?;
        anyhow::ensure!(controller.mount(Millis::ZERO), "failed to mount scene");

        let click = Point::new(args.click_x, args.click_y);
        let mut inputs: Vec<(Millis, Input)> = args
            .click_at_ms
            .iter()
            .map(|&ms| (Millis(ms), Input::Click(click)))
            .chain(args.panel_at_ms.iter().map(|&ms| (Millis(ms), Input::Panel)))
            .collect();
        inputs.sort_by_key(|(at, _)| *at);

        Ok(Self {
            controller,
            inputs,
            next_input: 0,
        })
    }

    /// Apply every input due by `now`, advance, and return the presented document.
    fn document_at(&mut self, now: Millis) -> anyhow::Result<String> {
        while let Some(&(at, input)) = self.inputs.get(self.next_input)
            && at <= now
        {
            match input {
                Input::Click(point) => {
                    let outcome = self.controller.on_click(point, at);
                    tracing::info!(at = at.0, ?outcome, "click");
                }
                Input::Panel => {
                    let accepted = self.controller.trigger_panel(at);
                    tracing::info!(at = at.0, accepted, "panel trigger");
                }
            }
            self.next_input += 1;
        }
        self.controller.tick(now);
        self.controller
            .host()
            .last_document()
            .map(str::to_owned)
            .context("scene presented nothing")
    }

    fn viewport(&self) -> Option<Viewport> {
        self.controller.scene().map(|s| s.viewport())
    }
}

fn main() -> anyhow::Result<()> {
    initialise_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn write_png(path: &Path, document: &str, viewport: Viewport) -> anyhow::Result<()> {
    let frame = rasterize(document, viewport)?;
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut session = Session::new(&args.scene)?;
    let document = session.document_at(Millis(args.at_ms))?;
    let viewport = session.viewport().context("no live scene")?;

    ensure_parent_dir(&args.out)?;
    let ext = args
        .out
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("svg") => std::fs::write(&args.out, document)
            .with_context(|| format!("write svg '{}'", args.out.display()))?,
        Some("png") => write_png(&args.out, &document, viewport)?,
        _ => anyhow::bail!(
            "unsupported output extension for '{}' (expected .svg or .png)",
            args.out.display()
        ),
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.fps > 0, "fps must be > 0");
    let count = args
        .duration_ms
        .checked_mul(u64::from(args.fps))
        .context("duration too long")?
        .div_ceil(1000)
        .max(1);

    let mut session = Session::new(&args.scene)?;
    let viewport = session.viewport().context("no live scene")?;

    // The clock only moves forward, so simulation stays sequential.
    let documents = (0..count)
        .map(|i| {
            let at = Millis(i * 1000 / u64::from(args.fps));
            session.document_at(at)
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut pool = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = args.threads {
        pool = pool.num_threads(threads);
    }
    let pool = pool.build().context("build rayon pool")?;
    pool.install(|| {
        documents
            .par_iter()
            .enumerate()
            .try_for_each(|(i, document)| {
                let path = args.out_dir.join(format!("frame_{i:05}.png"));
                write_png(&path, document, viewport)
            })
    })?;

    tracing::info!(frames = documents.len(), "sequence rendered");
    eprintln!("wrote {} frames to {}", documents.len(), args.out_dir.display());
    Ok(())
}

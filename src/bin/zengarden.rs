use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "zengarden", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a run of ticks as a numbered PNG sequence.
    Sequence(SequenceArgs),
}

#[derive(clap::Args, Debug)]
struct GardenArgs {
    /// Garden config JSON. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ambient style, overriding the config.
    #[arg(long, value_enum)]
    style: Option<StyleArg>,

    /// Local hour of day used for time-of-day backgrounds.
    #[arg(long, default_value_t = 12)]
    hour: u8,

    /// Touch as `x,y,start_ms`, in bitmap pixels. Repeatable.
    #[arg(long = "touch")]
    touches: Vec<TouchArg>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    garden: GardenArgs,

    /// Frame timestamp in milliseconds.
    #[arg(long, default_value_t = 0)]
    time_ms: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SequenceArgs {
    #[command(flatten)]
    garden: GardenArgs,

    /// Timestamp of the first frame in milliseconds.
    #[arg(long, default_value_t = 0)]
    start_ms: u64,

    /// Time between frames.
    #[arg(long, default_value_t = 100)]
    interval_ms: u64,

    /// Number of frames.
    #[arg(long)]
    count: u64,

    /// Output directory for `frame_<idx>.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StyleArg {
    Dot,
    Field,
}

impl From<StyleArg> for zengarden::RenderStyle {
    fn from(s: StyleArg) -> Self {
        match s {
            StyleArg::Dot => Self::DotRipple,
            StyleArg::Field => Self::DistanceField,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct TouchArg {
    x: f64,
    y: f64,
    start_ms: u64,
}

impl FromStr for TouchArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [x, y, start] = parts.as_slice() else {
            return Err(format!("expected `x,y,start_ms`, got '{s}'"));
        };
        Ok(Self {
            x: x.parse().map_err(|e| format!("touch x '{x}': {e}"))?,
            y: y.parse().map_err(|e| format!("touch y '{y}': {e}"))?,
            start_ms: start
                .parse()
                .map_err(|e| format!("touch start_ms '{start}': {e}"))?,
        })
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
    }
}

/// Build a session with every requested touch already recorded.
fn build_garden(args: &GardenArgs) -> anyhow::Result<(zengarden::ZenGarden, zengarden::Canvas)> {
    let mut cfg = match &args.config {
        Some(path) => zengarden::GardenConfig::from_path(path)?,
        None => zengarden::GardenConfig::default(),
    };
    if let Some(style) = args.style {
        cfg.ambient.style = style.into();
    }
    let view = zengarden::Canvas::square(cfg.bitmap_size);
    let mut garden = zengarden::ZenGarden::new(cfg)?;
    for t in &args.touches {
        garden.on_touch_down(t.x, t.y, view, zengarden::TimeMs(t.start_ms))?;
    }
    Ok((garden, view))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (mut garden, view) = build_garden(&args.garden)?;
    let time = zengarden::FrameTime::at(zengarden::TimeMs(args.time_ms)).with_hour(args.garden.hour);
    let tick = garden.on_tick(time, view);

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    zengarden::write_png(&args.out, &tick.frame)?;

    eprintln!("wrote {} ({:?} mode)", args.out.display(), tick.mode);
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    let (mut garden, view) = build_garden(&args.garden)?;
    let start =
        zengarden::FrameTime::at(zengarden::TimeMs(args.start_ms)).with_hour(args.garden.hour);
    let mut sink = zengarden::PngSequenceSink::new(&args.out_dir, "frame");
    garden
        .render_sequence(start, args.interval_ms, args.count, view, &mut sink)
        .with_context(|| format!("render sequence into '{}'", args.out_dir.display()))?;

    eprintln!("wrote {} frames to {}", sink.written().len(), args.out_dir.display());
    Ok(())
}

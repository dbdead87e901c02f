use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "kinetic", version)]
struct Cli {
    /// Log engine events (direction flips, clamped frames) to stderr.
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a scene over a scroll trace and write every frame as JSON.
    Simulate(SimulateArgs),
    /// Print carousel transforms for one active step.
    Layout(LayoutArgs),
    /// Print the active tab for one progress value.
    Tab(TabArgs),
    /// Print the default engine configuration.
    Defaults,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Engine configuration JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Recorded trace: a JSON array of `{ "time_secs", "scroll_px" }`.
    #[arg(long, conflicts_with_all = ["frames", "distance"])]
    trace: Option<PathBuf>,

    /// Synthetic sweep: number of frames.
    #[arg(long, default_value_t = 300)]
    frames: u32,

    /// Synthetic sweep: frames per second.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Synthetic sweep: total scroll distance in px. Defaults to the configured region.
    #[arg(long, allow_hyphen_values = true)]
    distance: Option<f64>,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Continuous active step, e.g. `1.5`.
    #[arg(long, allow_hyphen_values = true)]
    step: f64,

    /// Number of panels; overrides the configured count.
    #[arg(long)]
    panels: Option<usize>,

    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct TabArgs {
    #[arg(long, allow_hyphen_values = true)]
    progress: f64,

    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Layout(args) => cmd_layout(args),
        Command::Tab(args) => cmd_tab(args),
        Command::Defaults => {
            println!("{}", kinetic::EngineConfig::default().to_json_pretty()?);
            Ok(())
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_config(path: Option<&Path>) -> anyhow::Result<kinetic::EngineConfig> {
    let Some(path) = path else {
        return Ok(kinetic::EngineConfig::default());
    };
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let cfg = kinetic::EngineConfig::from_reader(BufReader::new(f))
        .with_context(|| format!("load config '{}'", path.display()))?;
    Ok(cfg)
}

fn read_trace(path: &Path) -> anyhow::Result<Vec<kinetic::ScrollSample>> {
    let f = File::open(path).with_context(|| format!("open trace '{}'", path.display()))?;
    let samples: Vec<kinetic::ScrollSample> =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse trace JSON")?;
    Ok(samples)
}

/// Linear sweep across `region`, one sample per frame.
fn sweep(
    frames: u32,
    fps: f64,
    region: &kinetic::ScrollRegion,
) -> anyhow::Result<Vec<kinetic::ScrollSample>> {
    if !(fps.is_finite() && fps > 0.0) {
        anyhow::bail!("--fps must be a positive number, got {fps}");
    }
    let last = f64::from(frames.max(1));
    Ok((0..=frames)
        .map(|i| {
            let f = f64::from(i);
            kinetic::ScrollSample::new(f / fps, region.scroll_at(f / last))
        })
        .collect())
}

fn write_json<T: serde::Serialize>(out: Option<&Path>, value: &T) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, value).with_context(|| "write JSON")?;
            w.flush()?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            serde_json::to_writer_pretty(&mut lock, value).with_context(|| "write JSON")?;
            writeln!(lock)?;
        }
    }
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    let samples = match &args.trace {
        Some(path) => read_trace(path)?,
        None => {
            let region = match args.distance {
                Some(d) if !d.is_finite() => anyhow::bail!("--distance must be finite"),
                Some(d) => kinetic::ScrollRegion {
                    start_px: cfg.region.start_px,
                    end_px: cfg.region.start_px + d,
                },
                None => cfg.region,
            };
            sweep(args.frames, args.fps, &region)?
        }
    };

    let mut scene = kinetic::KineticScene::new(&cfg)?;
    let frames = scene.run(&samples);
    tracing::info!(frames = frames.len(), "simulation finished");
    write_json(args.out.as_deref(), &frames)
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    let panels = args.panels.unwrap_or(cfg.panel_count);
    let transforms = cfg.carousel.layout(args.step, panels);
    write_json(None, &transforms)
}

fn cmd_tab(args: TabArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    println!("{}", cfg.tabs.breakpoints.active_index(args.progress));
    Ok(())
}

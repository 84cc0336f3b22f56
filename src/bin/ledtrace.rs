use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ledtrace", version, about = "Render an LED color history CSV as a PNG timeline")]
struct Cli {
    /// Input CSV: one row per frame, three integer channels (r,g,b) per LED.
    input: PathBuf,

    /// Stack the timeline into side-by-side tiles of fixed height.
    #[arg(short, long)]
    tile: bool,

    /// Output PNG path (defaults to the input path with `.png` appended).
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// JSON render config; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// LEDs per frame.
    #[arg(long)]
    num_leds: Option<u32>,

    /// Frames per tile in tile mode.
    #[arg(long)]
    rows_per_tile: Option<u32>,

    /// Also draw the last LED of each frame.
    #[arg(long)]
    all_leds: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;

    let job = ledtrace::RenderJob {
        output: cli
            .out
            .clone()
            .unwrap_or_else(|| ledtrace::default_output_path(&cli.input)),
        input: cli.input.clone(),
        tile_mode: cli.tile,
        config,
    };

    let outcome = ledtrace::convert_file(&job, &mut ledtrace::TracingProgress)
        .with_context(|| format!("render timeline '{}'", job.input.display()))?;

    eprintln!("wrote {}", outcome.output.display());
    Ok(())
}

fn build_config(cli: &Cli) -> anyhow::Result<ledtrace::RenderConfig> {
    let mut cfg = match &cli.config {
        Some(path) => ledtrace::RenderConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => ledtrace::RenderConfig::default(),
    };
    if let Some(n) = cli.num_leds {
        cfg.num_leds = n;
    }
    if let Some(n) = cli.rows_per_tile {
        cfg.rows_per_tile = n;
    }
    if cli.all_leds {
        cfg.draw_last_led = true;
    }
    cfg.validate()?;
    Ok(cfg)
}

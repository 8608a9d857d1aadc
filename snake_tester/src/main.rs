use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use median_snake_filter::core_modules::utils::outline_io::outline_io;
use median_snake_filter::parallel_smoother::ParallelSmoother;
use median_snake_filter::plugin::MedianSnakeFilter;
use median_snake_filter::ParamList;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "snake_tester")]
#[command(about = "Smooth closed outlines with a circular running median")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Smooth a single outline file.
    Smooth(SmoothArgs),

    /// Smooth many outline files in parallel with the same window.
    Batch(BatchArgs),
}

#[derive(Debug, Args)]
struct SmoothArgs {
    /// Outline to read, one `x y` pair per line.
    #[arg(long)]
    input: PathBuf,

    /// Where to write the smoothed outline.
    #[arg(long)]
    output: PathBuf,

    /// Window size (odd; 1 switches the filter off). Overrides --config.
    #[arg(long)]
    window: Option<i64>,

    /// Plugin configuration as a JSON object, e.g. {"window":"5"}.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective plugin configuration here.
    #[arg(long)]
    save_config: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct BatchArgs {
    /// Window size applied to every outline.
    #[arg(long, default_value = "3")]
    window: i64,

    /// Directory receiving one smoothed file per input, under the same file name.
    #[arg(long)]
    out_dir: PathBuf,

    /// Number of workers (defaults to the number of CPUs).
    #[arg(long)]
    workers: Option<usize>,

    /// Outline files to smooth.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Smooth(args) => run_smooth(args),
        Commands::Batch(args) => run_batch(args).await,
    }
}

fn run_smooth(args: SmoothArgs) -> anyhow::Result<()> {
    let points = outline_io::load(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    tracing::info!("Loaded {} points from {}", points.len(), args.input.display());

    let mut filter = MedianSnakeFilter::new();
    if let Some(config_path) = &args.config {
        let text = std::fs::read_to_string(config_path)
            .with_context(|| format!("reading {}", config_path.display()))?;
        filter.set_plugin_config(&ParamList::from_json(&text)?)?;
    }

    // An explicit window bypasses the spinner rule so that invalid values are reported.
    let window = args.window.unwrap_or(filter.window());
    let smoothed = median_snake_filter::smooth(&points, window)
        .with_context(|| format!("smoothing {} with window {}", args.input.display(), window))?;

    outline_io::save(&args.output, &smoothed)
        .with_context(|| format!("writing {}", args.output.display()))?;
    tracing::info!("Smoothed outline written to {}", args.output.display());

    if let Some(path) = &args.save_config {
        let mut params = filter.plugin_config();
        params.put("window", window.to_string());
        std::fs::write(path, params.to_json()?)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::info!("Configuration written to {}", path.display());
    }

    Ok(())
}

async fn run_batch(args: BatchArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let mut outlines = Vec::with_capacity(args.inputs.len());
    for input in &args.inputs {
        let points =
            outline_io::load(input).with_context(|| format!("reading {}", input.display()))?;
        outlines.push(points);
    }

    let pool = match args.workers {
        Some(n) => ParallelSmoother::with_workers(n),
        None => ParallelSmoother::new(),
    };
    tracing::info!(
        "Smoothing {} outlines with window {} on {} workers",
        outlines.len(),
        args.window,
        pool.worker_count()
    );

    let results = pool.smooth_all(outlines, args.window).await;

    let mut failures = 0usize;
    for (input, result) in args.inputs.iter().zip(results) {
        match result {
            Ok(smoothed) => {
                let Some(file_name) = input.file_name() else {
                    bail!("input path {} has no file name", input.display());
                };
                let output = args.out_dir.join(file_name);
                outline_io::save(&output, &smoothed)
                    .with_context(|| format!("writing {}", output.display()))?;
            }
            Err(e) => {
                tracing::warn!("{}: {}", input.display(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} outlines could not be smoothed", failures, args.inputs.len());
    }
    tracing::info!("Batch complete. Output saved to {}", args.out_dir.display());
    Ok(())
}

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use jitlog_charts::SvgRenderer;
use jitlog_core::config::Config;

#[derive(Parser)]
#[command(
    name = "jitlog",
    about = "Chart Java JIT inlining and Kotlin inline-function benchmark logs"
)]
struct Cli {
    /// Log written by the Java JIT inlining benchmark.
    java_log: PathBuf,

    /// Log written by the Kotlin inline-function benchmark.
    kotlin_log: PathBuf,

    /// Directory for chart files (overrides `output.dir`).
    #[arg(long, short)]
    out_dir: Option<PathBuf>,

    /// Configuration file layered over the built-in defaults.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Debug-level logging (RUST_LOG takes precedence).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(dir) = cli.out_dir {
        config.output.dir = dir;
    }
    std::fs::create_dir_all(&config.output.dir).with_context(|| {
        format!("failed to create output directory {}", config.output.dir.display())
    })?;

    let mut renderer = SvgRenderer::new(&config.output.dir, (config.chart.width, config.chart.height));
    let report = jitlog::run(&cli.java_log, &cli.kotlin_log, &config, &mut renderer);
    print!("{report}");

    Ok(())
}

use std::path::PathBuf;

use clap::Parser;

use polycanvas::core::app::{self, RunOptions};

/// Replay recorded pointer events onto a canvas and render the fitted curve
#[derive(Debug, Parser)]
#[command(name = "polycanvas", version, about)]
struct Cli {
    /// JSON file of window events to replay
    #[arg(short, long)]
    script: PathBuf,

    /// PNG to write (defaults to a timestamped file under Pictures)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the polynomial degree
    #[arg(short, long)]
    degree: Option<usize>,

    /// Write the effective config back before replaying
    #[arg(long)]
    save_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    app::run(RunOptions {
        script: cli.script,
        output: cli.output,
        config: cli.config,
        degree: cli.degree,
        save_config: cli.save_config,
    })
}

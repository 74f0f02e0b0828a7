use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use plot_metrics::constants::files;
use plot_metrics::pipeline;

#[derive(Parser)]
#[command(name = "plot_metrics")]
#[command(about = "Render training-progress charts from a metrics log", long_about = None)]
struct Cli {
    /// Directory holding metrics.csv; both charts are written next to it
    #[arg(long, default_value = files::DEFAULT_RESULTS_DIR)]
    results_dir: PathBuf,

    /// Overlay an N-episode moving average on the score chart (0 = off)
    #[arg(long, default_value_t = 0)]
    ma_window: usize,
}

fn main() -> Result<()> {
    println!("{}", "Start".green());

    let cli = Cli::parse();
    pipeline::run(&cli.results_dir, cli.ma_window)?;

    println!("{}", "End".green());
    Ok(())
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::charts::{score_chart, win_rate_chart};
use crate::constants::files;
use crate::metrics;

#[derive(Debug)]
pub struct PlotOutputs {
    pub score_chart: PathBuf,
    pub win_rate_chart: PathBuf,
}

/// Load the metrics log from `results_dir`, render both charts next to it,
/// and print the confirmation. Any failure aborts the remaining steps; a
/// failure after the score chart leaves that file on disk.
pub fn run(results_dir: &Path, ma_window: usize) -> Result<PlotOutputs> {
    let metrics_path = results_dir.join(files::METRICS_FILE);
    let mut records = metrics::load_metrics(&metrics_path)?;
    metrics::sort_by_episode(&mut records);

    let score_series = metrics::score_series(&records);
    let score_path = results_dir.join(files::SCORE_CHART_FILE);
    score_chart(&score_path, &score_series, ma_window)
        .with_context(|| format!("failed to render score chart {}", score_path.display()))?;

    let win_rate_series = metrics::win_rate_series(&records);
    let win_rate_path = results_dir.join(files::WIN_RATE_CHART_FILE);
    win_rate_chart(&win_rate_path, &win_rate_series)
        .with_context(|| format!("failed to render win rate chart {}", win_rate_path.display()))?;

    println!(
        "Plots saved to: {} and {}",
        score_path.display().to_string().green(),
        win_rate_path.display().to_string().green(),
    );
    if let Some(&(_, final_rate)) = win_rate_series.last() {
        println!("{} episodes, final win rate {final_rate:.3}", records.len());
    }

    Ok(PlotOutputs {
        score_chart: score_path,
        win_rate_chart: win_rate_path,
    })
}

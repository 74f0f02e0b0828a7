pub mod files {
    /// Where the training run drops its log, relative to the binary's
    /// working directory.
    pub const DEFAULT_RESULTS_DIR: &str = "../results";
    pub const METRICS_FILE: &str = "metrics.csv";
    pub const SCORE_CHART_FILE: &str = "score_per_episode.png";
    pub const WIN_RATE_CHART_FILE: &str = "cumulative_win_rate.png";
}

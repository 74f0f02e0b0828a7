use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Deserializer};

/// One row of the training metrics log. Extra columns in the file are
/// ignored; these three are required.
#[derive(Debug, Clone, Deserialize)]
pub struct EpisodeRecord {
    pub episode: u32,
    pub score: f64,
    #[serde(deserialize_with = "deserialize_win")]
    pub win: bool,
}

// The log is written by more than one logger; both 0/1 and false/true
// spellings show up in the win column.
fn deserialize_win<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim() {
        "0" | "false" => Ok(false),
        "1" | "true" => Ok(true),
        other => Err(serde::de::Error::custom(format!(
            "invalid win value {other:?}, expected 0/1 or false/true"
        ))),
    }
}

pub fn load_metrics(path: &Path) -> Result<Vec<EpisodeRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to read metrics table {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("failed to read header of {}", path.display()))?
        .clone();
    for required in ["episode", "score", "win"] {
        if !headers.iter().any(|header| header == required) {
            bail!(
                "metrics table {} is missing column {required:?}",
                path.display()
            );
        }
    }

    let mut records = Vec::new();
    for (row, record) in reader.deserialize().enumerate() {
        let record: EpisodeRecord = record
            .with_context(|| format!("failed to parse row {} of {}", row + 2, path.display()))?;
        records.push(record);
    }
    Ok(records)
}

/// Stable, so rows sharing an episode number keep their log order.
pub fn sort_by_episode(records: &mut [EpisodeRecord]) {
    records.sort_by_key(|record| record.episode);
}

pub fn score_series(records: &[EpisodeRecord]) -> Vec<(u32, f64)> {
    records
        .iter()
        .map(|record| (record.episode, record.score))
        .collect()
}

/// Running win count divided by the raw episode value at each row, not by
/// the row position. With the usual 1..=N numbering the two coincide; with
/// gaps or a zero start they do not, and the zero case yields `inf`, which
/// the chart layer filters out.
pub fn win_rate_series(records: &[EpisodeRecord]) -> Vec<(u32, f64)> {
    let mut wins = 0u32;
    records
        .iter()
        .map(|record| {
            wins += u32::from(record.win);
            (record.episode, f64::from(wins) / f64::from(record.episode))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn record(episode: u32, score: f64, win: bool) -> EpisodeRecord {
        EpisodeRecord {
            episode,
            score,
            win,
        }
    }

    #[test]
    fn sort_is_monotonic_and_stable() {
        let mut records = vec![
            record(3, 8.0, true),
            record(1, 5.0, true),
            record(2, 3.0, false),
            record(1, 7.0, false),
        ];
        sort_by_episode(&mut records);

        let episodes: Vec<u32> = records.iter().map(|r| r.episode).collect();
        assert_eq!(episodes, vec![1, 1, 2, 3]);
        // The two episode-1 rows keep their input order.
        assert_eq!(records[0].score, 5.0);
        assert_eq!(records[1].score, 7.0);
    }

    #[test]
    fn win_rate_matches_hand_computed_values() {
        let records = vec![
            record(1, 5.0, true),
            record(2, 3.0, false),
            record(3, 8.0, true),
        ];
        let series = win_rate_series(&records);
        assert_eq!(series, vec![(1, 1.0), (2, 0.5), (3, 2.0 / 3.0)]);
    }

    #[test]
    fn win_rate_divides_by_episode_value_not_row_position() {
        let records = vec![record(10, 1.0, true), record(20, 1.0, true)];
        let series = win_rate_series(&records);
        assert_eq!(series, vec![(10, 0.1), (20, 0.1)]);
    }

    #[test]
    fn win_rate_for_episode_zero_is_infinite() {
        let records = vec![record(0, 1.0, true)];
        let series = win_rate_series(&records);
        assert!(series[0].1.is_infinite());
    }

    #[test]
    fn loads_table_with_extra_columns_and_both_win_spellings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics.csv");
        fs::write(
            &path,
            "episode,score,win,epsilon\n1,5.0,1,0.9\n2,3.5,false,0.8\n3,8.0,true,0.7\n",
        )
        .unwrap();

        let records = load_metrics(&path).unwrap();
        assert_eq!(records.len(), 3);
        assert!(records[0].win);
        assert!(!records[1].win);
        assert!(records[2].win);
        assert_eq!(records[1].score, 3.5);
    }

    #[test]
    fn missing_win_column_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics.csv");
        fs::write(&path, "episode,score\n1,5.0\n").unwrap();

        let error = load_metrics(&path).unwrap_err();
        assert!(error.to_string().contains("missing column \"win\""));
    }

    #[test]
    fn unknown_win_spelling_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics.csv");
        fs::write(&path, "episode,score,win\n1,5.0,yes\n").unwrap();

        assert!(load_metrics(&path).is_err());
    }

    #[test]
    fn missing_file_is_a_load_error_naming_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");

        let error = load_metrics(&path).unwrap_err();
        assert!(error.to_string().contains("failed to read metrics table"));
    }

    #[test]
    fn empty_table_loads_as_zero_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics.csv");
        fs::write(&path, "episode,score,win\n").unwrap();

        let records = load_metrics(&path).unwrap();
        assert!(records.is_empty());
    }
}

//! Analysis pipeline over one loaded [`ChannelTable`].
//!
//! ```text
//!   ChannelTable
//!        │  per row
//!        ▼
//!   ┌──────────────┐   sentinel readings → sticky set + one-time alert
//!   │  disconnect   │
//!   └──────────────┘
//!        │  flags
//!        ▼
//!   ┌──────────────┐   sample stdev of connected readings,
//!   │  dispersion   │   treated values, below-threshold flags
//!   └──────────────┘
//!        │  treated rows
//!        ▼
//!   ┌──────────────┐   row sums, per-string totals, grand total
//!   │  aggregate    │
//!   └──────────────┘
//!        │
//!        ▼
//!     RunAnalysis ──► compare::classify (live vs baseline)
//! ```
//!
//! Each call to [`analyze_table`] owns a fresh [`DisconnectTracker`], so the
//! live and baseline runs can never leak disconnection state into each
//! other.

pub mod aggregate;
pub mod compare;
pub mod disconnect;
pub mod dispersion;

use std::collections::BTreeSet;

use crate::config::AnalyzerConfig;
use crate::data::model::ChannelTable;
use disconnect::DisconnectTracker;

// ---------------------------------------------------------------------------
// RunAnalysis – everything the pipeline computes for one dataset
// ---------------------------------------------------------------------------

/// The full result of analyzing one dataset. All fields indexed by string
/// are in header order.
#[derive(Debug, Clone, PartialEq)]
pub struct RunAnalysis {
    /// String names, header order.
    pub channels: Vec<String>,
    /// Raw time labels, one per row.
    pub timestamps: Vec<String>,
    /// Treated readings, string-major: `series[c][r]`.
    pub series: Vec<Vec<f64>>,
    /// Per-row dispersion, unrounded.
    pub dispersions: Vec<f64>,
    /// Per-string count of rows where the reading fell below the cutoff.
    pub below_threshold: Vec<u32>,
    /// Per-row sum of treated readings.
    pub row_sums: Vec<f64>,
    /// Per-string sum of treated readings.
    pub channel_totals: Vec<f64>,
    /// Sum of all string totals.
    pub grand_total: f64,
    /// Strings that read the disconnection sentinel at least once.
    pub disconnected: BTreeSet<String>,
}

/// Run the full analysis over one table with a fresh tracker.
pub fn analyze_table(table: &ChannelTable, cfg: &AnalyzerConfig) -> RunAnalysis {
    let n = table.n_channels();
    let mut tracker = DisconnectTracker::new(cfg.disconnection_value);

    let mut treated_rows = Vec::with_capacity(table.n_rows());
    let mut dispersions = Vec::with_capacity(table.n_rows());
    let mut below_threshold = vec![0u32; n];

    for row in &table.rows {
        let flags: Vec<bool> = table
            .channels
            .iter()
            .zip(row)
            .map(|(name, &value)| tracker.observe(name, value))
            .collect();

        let analyzed = dispersion::analyze_row(row, &flags, cfg.threshold_multiplier);
        for (count, &flagged) in below_threshold.iter_mut().zip(&analyzed.below_threshold) {
            if flagged {
                *count += 1;
            }
        }
        dispersions.push(analyzed.dispersion);
        treated_rows.push(analyzed.treated);
    }

    let totals = aggregate::fold(&treated_rows, n);

    // Transpose to string-major for per-string reporting.
    let series: Vec<Vec<f64>> = (0..n)
        .map(|c| treated_rows.iter().map(|row| row[c]).collect())
        .collect();

    log::info!(
        "analyzed {} rows across {} strings, grand total {:.2}",
        table.n_rows(),
        n,
        totals.grand_total
    );

    RunAnalysis {
        channels: table.channels.clone(),
        timestamps: table.timestamps.clone(),
        series,
        dispersions,
        below_threshold,
        row_sums: totals.row_sums,
        channel_totals: totals.channel_totals,
        grand_total: totals.grand_total,
        disconnected: tracker.into_set(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(channels: &[&str], rows: Vec<Vec<f64>>) -> ChannelTable {
        ChannelTable {
            time_label: "Hour".to_string(),
            channels: channels.iter().map(|s| s.to_string()).collect(),
            timestamps: (1..=rows.len()).map(|i| i.to_string()).collect(),
            rows,
        }
    }

    #[test]
    fn steady_identical_readings() {
        // Scenario: two strings, two hours, all readings 10.
        let cfg = AnalyzerConfig::default();
        let run = analyze_table(
            &table(&["S1", "S2"], vec![vec![10.0, 10.0], vec![10.0, 10.0]]),
            &cfg,
        );
        assert_eq!(run.dispersions, vec![0.0, 0.0]);
        assert_eq!(run.below_threshold, vec![0, 0]);
        assert_eq!(run.channel_totals, vec![20.0, 20.0]);
        assert_eq!(run.grand_total, 40.0);
        assert!(run.disconnected.is_empty());
    }

    #[test]
    fn zero_reading_disconnects_and_zeroes_the_series() {
        let cfg = AnalyzerConfig::default();
        let run = analyze_table(&table(&["S1", "S2"], vec![vec![0.0, 10.0]]), &cfg);
        assert!(run.disconnected.contains("S1"));
        assert_eq!(run.series[0], vec![0.0]);
        // Only one connected string → dispersion 0, and S1 is excluded from
        // the threshold test.
        assert_eq!(run.dispersions, vec![0.0]);
        assert_eq!(run.below_threshold, vec![0, 0]);
        assert_eq!(run.row_sums, vec![10.0]);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let cfg = AnalyzerConfig::default();
        let data = table(
            &["S1", "S2", "S3"],
            vec![vec![8.0, 10.0, 12.0], vec![0.0, 9.0, 11.0], vec![7.5, 10.5, 0.0]],
        );
        let first = analyze_table(&data, &cfg);
        let second = analyze_table(&data, &cfg);
        assert_eq!(first, second);
    }

    #[test]
    fn disconnection_state_does_not_leak_between_runs() {
        let cfg = AnalyzerConfig::default();
        let with_outage = table(&["S1"], vec![vec![0.0]]);
        let healthy = table(&["S1"], vec![vec![10.0]]);
        let _ = analyze_table(&with_outage, &cfg);
        let run = analyze_table(&healthy, &cfg);
        assert!(run.disconnected.is_empty());
    }

    #[test]
    fn grand_total_equals_sum_of_string_totals() {
        let cfg = AnalyzerConfig::default();
        let run = analyze_table(
            &table(&["S1", "S2"], vec![vec![3.5, -1.0], vec![0.0, 2.25]]),
            &cfg,
        );
        let sum: f64 = run.channel_totals.iter().sum();
        assert!((run.grand_total - sum).abs() < 1e-12);
    }
}

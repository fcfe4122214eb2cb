use super::RunAnalysis;

// ---------------------------------------------------------------------------
// Baseline comparison and the underperformance verdict
// ---------------------------------------------------------------------------

/// Outcome of comparing a live run against its baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// Shortfall at or below the error threshold.
    Nominal { shortfall: f64 },
    /// Shortfall above the error threshold. Carries the advisory lists:
    /// strings with a non-zero below-threshold count that are not
    /// disconnected (header order), and the disconnected strings (sorted).
    Underperforming {
        shortfall: f64,
        contributors: Vec<String>,
        disconnected: Vec<String>,
    },
}

impl Verdict {
    pub fn shortfall(&self) -> f64 {
        match self {
            Verdict::Nominal { shortfall } | Verdict::Underperforming { shortfall, .. } => {
                *shortfall
            }
        }
    }
}

/// Percentage by which `live` falls below `baseline`. A zero baseline is
/// defined as zero shortfall (policy: no reference means no deficit), not a
/// division error.
pub fn percentage_shortfall(baseline: f64, live: f64) -> f64 {
    if baseline == 0.0 {
        return 0.0;
    }
    (baseline - live) / baseline * 100.0
}

/// Classify a live run against the baseline grand total.
pub fn classify(live: &RunAnalysis, baseline_grand_total: f64, error_threshold: f64) -> Verdict {
    let shortfall = percentage_shortfall(baseline_grand_total, live.grand_total);
    if shortfall <= error_threshold {
        return Verdict::Nominal { shortfall };
    }

    let contributors: Vec<String> = live
        .channels
        .iter()
        .zip(&live.below_threshold)
        .filter(|(name, &count)| count > 0 && !live.disconnected.contains(name.as_str()))
        .map(|(name, _)| name.clone())
        .collect();

    Verdict::Underperforming {
        shortfall,
        contributors,
        disconnected: live.disconnected.iter().cloned().collect(),
    }
}

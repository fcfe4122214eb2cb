// ---------------------------------------------------------------------------
// Per-row dispersion and below-threshold flagging
// ---------------------------------------------------------------------------

/// The analysis of a single row: spread of the connected readings, treated
/// values for aggregation, and per-string threshold flags.
#[derive(Debug, Clone, PartialEq)]
pub struct RowAnalysis {
    /// Sample standard deviation of the connected readings; `0.0` when
    /// fewer than two strings are connected. Unrounded — the reporter
    /// formats to two decimals for display only.
    pub dispersion: f64,
    /// One value per string, header order: the raw reading for connected
    /// strings, `0.0` for disconnected ones. This is what aggregation sums.
    pub treated: Vec<f64>,
    /// One flag per string, header order: `true` iff the string is
    /// connected and its raw reading is below `multiplier × dispersion`.
    /// Disconnected strings are excluded from the comparison, never flagged.
    pub below_threshold: Vec<bool>,
}

/// Analyze one row given the disconnection flags the tracker produced for
/// it. Pure: no state, no I/O.
pub fn analyze_row(values: &[f64], disconnected: &[bool], multiplier: f64) -> RowAnalysis {
    debug_assert_eq!(values.len(), disconnected.len());

    let connected: Vec<f64> = values
        .iter()
        .zip(disconnected)
        .filter(|(_, &off)| !off)
        .map(|(&v, _)| v)
        .collect();

    let dispersion = sample_std_dev(&connected);
    let cutoff = multiplier * dispersion;

    let treated = values
        .iter()
        .zip(disconnected)
        .map(|(&v, &off)| if off { 0.0 } else { v })
        .collect();

    // With dispersion 0 the cutoff is 0, so only strictly negative readings
    // flag. That is the intended semantics, not a degenerate case.
    let below_threshold = values
        .iter()
        .zip(disconnected)
        .map(|(&v, &off)| !off && v < cutoff)
        .collect();

    RowAnalysis {
        dispersion,
        treated,
        below_threshold,
    }
}

/// Sample standard deviation (n − 1 degrees of freedom); `0.0` for fewer
/// than two values.
fn sample_std_dev(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn identical_readings_have_zero_dispersion() {
        let row = analyze_row(&[10.0, 10.0, 10.0], &[false, false, false], 1.5);
        assert_eq!(row.dispersion, 0.0);
        assert_eq!(row.below_threshold, vec![false, false, false]);
    }

    #[test]
    fn sample_std_dev_uses_n_minus_one() {
        // stdev([10, 20]) with n-1 = sqrt(50) ≈ 7.0710678
        let row = analyze_row(&[10.0, 20.0], &[false, false], 1.5);
        assert!((row.dispersion - 50.0_f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn single_connected_string_means_zero_dispersion() {
        let row = analyze_row(&[0.0, 10.0], &[true, false], 1.5);
        assert_eq!(row.dispersion, 0.0);
    }

    #[test]
    fn disconnected_strings_get_treated_zero_and_no_flag() {
        let row = analyze_row(&[0.0, 10.0, 12.0], &[true, false, false], 1.5);
        assert_eq!(row.treated, vec![0.0, 10.0, 12.0]);
        // S1 is excluded from the threshold test despite 0 < cutoff.
        assert!(!row.below_threshold[0]);
    }

    #[test]
    fn low_reading_is_flagged_against_cutoff() {
        // connected = [2, 10, 12]: mean 8, sample stdev sqrt(28) ≈ 5.2915,
        // cutoff ≈ 7.937 → only the 2.0 reading flags.
        let row = analyze_row(&[2.0, 10.0, 12.0], &[false, false, false], 1.5);
        assert_eq!(row.below_threshold, vec![true, false, false]);
    }

    #[test]
    fn zero_dispersion_flags_only_negative_readings() {
        let row = analyze_row(&[-1.0, 5.0, 5.0], &[false, true, true], 1.5);
        assert_eq!(row.dispersion, 0.0);
        assert_eq!(row.below_threshold, vec![true, false, false]);
    }

    #[test]
    fn multiplier_scales_the_cutoff() {
        // stdev([4, 10]) = sqrt(18) ≈ 4.243. With multiplier 1.0 the cutoff
        // is ≈ 4.243 → only 4.0 flags; with 3.0 the cutoff ≈ 12.7 → both.
        let narrow = analyze_row(&[4.0, 10.0], &[false, false], 1.0);
        assert_eq!(narrow.below_threshold, vec![true, false]);
        let wide = analyze_row(&[4.0, 10.0], &[false, false], 3.0);
        assert_eq!(wide.below_threshold, vec![true, true]);
    }
}

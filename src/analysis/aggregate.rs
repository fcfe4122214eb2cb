// ---------------------------------------------------------------------------
// Aggregation of treated readings
// ---------------------------------------------------------------------------

/// Sums derived from the treated value matrix of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Totals {
    /// Per-row sum across all strings.
    pub row_sums: Vec<f64>,
    /// Per-string sum across all rows, header order.
    pub channel_totals: Vec<f64>,
    /// Sum of all string totals.
    pub grand_total: f64,
}

/// Fold row-major treated values into row sums, per-string totals and the
/// grand total. Summation order is unspecified; floating-point rounding
/// differences between orders are acceptable.
pub fn fold(treated_rows: &[Vec<f64>], n_channels: usize) -> Totals {
    let mut row_sums = Vec::with_capacity(treated_rows.len());
    let mut channel_totals = vec![0.0; n_channels];

    for row in treated_rows {
        debug_assert_eq!(row.len(), n_channels);
        row_sums.push(row.iter().sum());
        for (total, value) in channel_totals.iter_mut().zip(row) {
            *total += value;
        }
    }

    let grand_total = channel_totals.iter().sum();

    Totals {
        row_sums,
        channel_totals,
        grand_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_of_small_matrix() {
        let rows = vec![vec![10.0, 10.0], vec![10.0, 10.0]];
        let totals = fold(&rows, 2);
        assert_eq!(totals.row_sums, vec![20.0, 20.0]);
        assert_eq!(totals.channel_totals, vec![20.0, 20.0]);
        assert_eq!(totals.grand_total, 40.0);
    }

    #[test]
    fn grand_total_matches_channel_totals() {
        let rows = vec![vec![1.5, -2.0, 3.25], vec![0.0, 4.0, -1.25]];
        let totals = fold(&rows, 3);
        let sum: f64 = totals.channel_totals.iter().sum();
        assert!((totals.grand_total - sum).abs() < 1e-12);
    }

    #[test]
    fn empty_input_yields_zero_totals() {
        let totals = fold(&[], 3);
        assert!(totals.row_sums.is_empty());
        assert_eq!(totals.channel_totals, vec![0.0, 0.0, 0.0]);
        assert_eq!(totals.grand_total, 0.0);
    }
}

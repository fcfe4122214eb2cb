// ---------------------------------------------------------------------------
// ChannelTable – one loaded telemetry dataset
// ---------------------------------------------------------------------------

/// A rectangular telemetry table: one named string per column, one sampled
/// time unit per row.
///
/// Only [`crate::data::loader`] constructs these, and it guarantees the
/// shape invariant: every row in `rows` has exactly `channels.len()` values,
/// in header order.
#[derive(Debug, Clone)]
pub struct ChannelTable {
    /// Name of the leading time column (e.g. `"Hour"`). Kept for display.
    pub time_label: String,
    /// String names in header order. Immutable after load.
    pub channels: Vec<String>,
    /// The raw time cell of each row, kept as text (opaque to the analysis).
    pub timestamps: Vec<String>,
    /// Row-major readings: `rows[r][c]` is string `c` at time unit `r`.
    pub rows: Vec<Vec<f64>>,
}

impl ChannelTable {
    /// Number of declared strings.
    pub fn n_channels(&self) -> usize {
        self.channels.len()
    }

    /// Number of sampled time units.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

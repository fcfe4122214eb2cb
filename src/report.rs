use std::io::{self, Write};

use crate::analysis::compare::Verdict;
use crate::analysis::RunAnalysis;
use crate::config::AnalyzerConfig;

// ---------------------------------------------------------------------------
// Report rendering
// ---------------------------------------------------------------------------

/// Render the live run and the verdict as the plain-text report.
///
/// Section order is fixed: per-string series, per-row dispersions,
/// below-threshold counts, row sums, per-string totals, grand total, and
/// (only when underperforming) the closing verdict line. The analysis core
/// never writes anywhere itself; this is the single place output happens.
pub fn write_report<W: Write>(
    out: &mut W,
    live: &RunAnalysis,
    verdict: &Verdict,
    cfg: &AnalyzerConfig,
) -> io::Result<()> {
    writeln!(out, "------- String Data (Column-wise): -------")?;
    for (name, series) in live.channels.iter().zip(&live.series) {
        let cells: Vec<String> = series.iter().map(|v| format!("{v:.2}")).collect();
        writeln!(out, "{name}: [{}]", cells.join(", "))?;
    }

    writeln!(out, "\n------- Hourly Standard Deviations: -------")?;
    for dispersion in &live.dispersions {
        writeln!(out, "{dispersion:.2}")?;
    }

    writeln!(
        out,
        "\n------- Counts of values below {} times the hourly std deviation: -------",
        cfg.threshold_multiplier
    )?;
    for (name, count) in live.channels.iter().zip(&live.below_threshold) {
        writeln!(out, "{name}: {count}")?;
    }

    writeln!(out, "\n------- Hourly Sums of All Strings: -------")?;
    let sums: Vec<String> = live.row_sums.iter().map(|v| format!("{v:.2}")).collect();
    writeln!(out, "[{}]", sums.join(", "))?;

    writeln!(out, "\n------- Total Output for Each String: -------")?;
    for (name, total) in live.channels.iter().zip(&live.channel_totals) {
        writeln!(out, "{name}: {total:.2}")?;
    }

    writeln!(
        out,
        "\n------- Grand Total of All Outputs: ------- {:.2}",
        live.grand_total
    )?;

    if let Verdict::Underperforming {
        shortfall,
        contributors,
        disconnected,
    } = verdict
    {
        let mut message = format!(
            "------- Hourly data is underperforming by {shortfall:.2}% -------"
        );
        if !contributors.is_empty() {
            message.push_str(&format!(
                " Key contributors to the inefficiency are {}.",
                contributors.join(", ")
            ));
        }
        if !disconnected.is_empty() {
            message.push_str(&format!(
                " Disconnected strings: {}.",
                disconnected.join(", ")
            ));
        }
        writeln!(out, "\n{message}")?;
    }

    Ok(())
}

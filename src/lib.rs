//! Stringsight: batch performance analysis of solar PV string telemetry.
//!
//! One invocation loads two CSV tables (a live dataset and a baseline
//! reference), runs each through the same pipeline — disconnection
//! tracking, per-row dispersion, threshold flagging, aggregation — and
//! classifies the live run as nominal or underperforming relative to the
//! baseline's grand total.

pub mod analysis;
pub mod config;
pub mod data;
pub mod report;

pub use analysis::{analyze_table, RunAnalysis};
pub use config::AnalyzerConfig;
pub use data::model::ChannelTable;

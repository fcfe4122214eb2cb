//! Data layer: the telemetry table type and its CSV loader.
//!
//! Architecture:
//! ```text
//!  hourly_data.csv / standard_data.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → ChannelTable
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────────┐
//!   │ ChannelTable  │  header-ordered strings, row matrix
//!   └──────────────┘
//!        │
//!        ▼
//!   analysis pipeline (see `crate::analysis`)
//! ```

pub mod loader;
pub mod model;

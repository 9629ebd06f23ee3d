//! Shot chart pipeline
//!
//! Turns one game's play list into per-team totals and chart points.
//!
//! ## Architecture
//!
//! ```text
//! build_shot_chart
//!   ├── extractor    (Goal / Shot / Missed Shot only)
//!   ├── normalizer   (canonical attacking half)
//!   ├── classifier   (shootout and empty-net rules)
//!   ├── aggregator   (TeamStats per side)
//!   └── chart_point  (marker style + visibility)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nhl_shot_chart::shot_chart::{build_from_feed, ChartOptions};
//!
//! let meta = GameMeta::from_feed(&feed, &chrono::Local)?;
//! let result = build_from_feed(&feed, meta, &ChartOptions::default());
//! println!("{} goals for {}", result.home_team.stats.goals, result.home_team.code);
//! ```
//!
//! The pipeline does no I/O and keeps no state between calls, so separate
//! games can be processed on separate threads.

pub mod aggregator;
pub mod assembler;
pub mod chart_point;
pub mod classifier;
pub mod extractor;
pub mod normalizer;

pub use aggregator::{GameTally, TeamStats};
pub use assembler::{
    build_from_feed, build_shot_chart, ChartOptions, Diagnostics, ShotChartResult, TeamSummary,
};
pub use chart_point::{
    ChartPoint, ChartPointBuilder, MarkerShape, MarkerStyle, StyleTable, Visibility,
};
pub use classifier::{classify, ShotCategory, ShotClassification, SHOOTOUT_PERIOD};
pub use extractor::{extract_shot_events, EventKind, ShotEvent};
pub use normalizer::{NormalizedCoordinate, TeamSide};

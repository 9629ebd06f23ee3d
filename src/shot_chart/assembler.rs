//! Result assembly
//!
//! Runs extraction, normalization, classification, aggregation and point
//! building in a single forward pass over the play list.

use super::aggregator::{GameTally, TeamStats};
use super::chart_point::{ChartPoint, ChartPointBuilder, StyleTable, Visibility};
use super::classifier::{classify, ShotCategory};
use super::extractor::extract_shot_events;
use super::normalizer::{NormalizedCoordinate, TeamSide};
use crate::error::MalformedEventError;
use crate::feed::{GameFeed, GameMeta, RawPlay, TeamCodes};
use serde::{Deserialize, Serialize};

/// Style and visibility settings for one run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub styles: StyleTable,
    pub visibility: Visibility,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub code: String,
    pub stats: TeamStats,
}

/// What the run had to leave out
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Diagnostics {
    /// Shot events skipped for missing required fields
    pub malformed: Vec<MalformedEventError>,
    /// Events tallied but not drawn
    pub hidden_points: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotChartResult {
    pub game_meta: GameMeta,
    pub away_team: TeamSummary,
    pub home_team: TeamSummary,
    /// Retained points in feed order
    pub points: Vec<ChartPoint>,
    pub diagnostics: Diagnostics,
}

impl ShotChartResult {
    pub fn team(&self, side: TeamSide) -> &TeamSummary {
        match side {
            TeamSide::Home => &self.home_team,
            TeamSide::Away => &self.away_team,
        }
    }

    /// Number of drawn points in a category
    pub fn count_points(&self, category: ShotCategory) -> usize {
        self.points.iter().filter(|p| p.category == category).count()
    }
}

/// Build the shot chart for one game's play list
pub fn build_shot_chart(
    plays: &[RawPlay],
    teams: &TeamCodes,
    game_meta: GameMeta,
    options: &ChartOptions,
) -> ShotChartResult {
    let builder = ChartPointBuilder::new(&options.styles, options.visibility);
    let mut tally = GameTally::new();
    let mut points = Vec::new();
    let mut diagnostics = Diagnostics::default();

    for extracted in extract_shot_events(plays) {
        let event = match extracted.validate() {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!("Skipping play: {}", e);
                diagnostics.malformed.push(e);
                continue;
            }
        };

        let side = TeamSide::of(event.team, teams);
        let coordinate = NormalizedCoordinate::normalize(event.x, event.y, side);
        let classification = classify(event.kind, event.period_type, event.empty_net);

        tally.record(side, &classification);

        let point = builder.build(event.team, side, coordinate, &classification);
        tracing::debug!(
            "Play #{} {} by {} ({:?}) at ({}, {}) -> ({}, {}), drawn={}",
            event.index,
            event.kind.label(),
            event.team,
            side,
            event.x,
            event.y,
            coordinate.x,
            coordinate.y,
            point.retained
        );

        if point.retained {
            points.push(point);
        } else {
            diagnostics.hidden_points += 1;
        }
    }

    tracing::info!(
        "{} {:?} vs {} {:?}: {} points drawn, {} hidden, {} malformed",
        teams.away,
        tally.away,
        teams.home,
        tally.home,
        points.len(),
        diagnostics.hidden_points,
        diagnostics.malformed.len()
    );

    ShotChartResult {
        game_meta,
        away_team: TeamSummary {
            code: teams.away.clone(),
            stats: tally.away,
        },
        home_team: TeamSummary {
            code: teams.home.clone(),
            stats: tally.home,
        },
        points,
        diagnostics,
    }
}

/// Convenience wrapper taking plays and team codes from a parsed feed
pub fn build_from_feed(
    feed: &GameFeed,
    game_meta: GameMeta,
    options: &ChartOptions,
) -> ShotChartResult {
    build_shot_chart(feed.plays(), &feed.team_codes(), game_meta, options)
}

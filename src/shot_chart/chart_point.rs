//! Chart point building
//!
//! Attaches marker styles to classified events and decides which ones are
//! drawn. Visibility only affects the chart; every event is still tallied.

use super::classifier::{ShotCategory, ShotClassification};
use super::normalizer::{NormalizedCoordinate, TeamSide};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerShape {
    Diamond,
    Circle,
    Cross,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub shape: MarkerShape,
    /// Hex color, e.g. `#4bad53`
    pub color: String,
    pub size: f32,
}

impl MarkerStyle {
    pub fn new(shape: MarkerShape, color: &str, size: f32) -> Self {
        Self {
            shape,
            color: color.to_string(),
            size,
        }
    }
}

/// Marker style per category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleTable {
    pub goal: MarkerStyle,
    pub shot_on_goal: MarkerStyle,
    pub missed_shot: MarkerStyle,
}

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            goal: MarkerStyle::new(MarkerShape::Diamond, "#4bad53", 20.0),
            shot_on_goal: MarkerStyle::new(MarkerShape::Circle, "#f0a911", 15.0),
            missed_shot: MarkerStyle::new(MarkerShape::Cross, "#000000", 15.0),
        }
    }
}

impl StyleTable {
    pub fn style_for(&self, category: ShotCategory) -> &MarkerStyle {
        match category {
            ShotCategory::Goal => &self.goal,
            ShotCategory::ShotOnGoal => &self.shot_on_goal,
            ShotCategory::MissedShot => &self.missed_shot,
        }
    }
}

/// Per-category show/hide switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Visibility {
    pub goals: bool,
    pub shots_on_goal: bool,
    pub missed_shots: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            goals: true,
            shots_on_goal: true,
            missed_shots: true,
        }
    }
}

impl Visibility {
    pub fn is_visible(&self, category: ShotCategory) -> bool {
        match category {
            ShotCategory::Goal => self.goals,
            ShotCategory::ShotOnGoal => self.shots_on_goal,
            ShotCategory::MissedShot => self.missed_shots,
        }
    }
}

/// One marker on the rink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub team: String,
    pub side: TeamSide,
    pub category: ShotCategory,
    pub coordinate: NormalizedCoordinate,
    pub style: MarkerStyle,
    /// False when hidden by visibility or suppressed as an empty-net goal
    pub retained: bool,
}

/// Builds chart points against a style table and visibility settings
pub struct ChartPointBuilder<'a> {
    styles: &'a StyleTable,
    visibility: Visibility,
}

impl<'a> ChartPointBuilder<'a> {
    pub fn new(styles: &'a StyleTable, visibility: Visibility) -> Self {
        Self { styles, visibility }
    }

    pub fn build(
        &self,
        team: &str,
        side: TeamSide,
        coordinate: NormalizedCoordinate,
        classification: &ShotClassification,
    ) -> ChartPoint {
        let category = classification.category;
        let suppressed = category == ShotCategory::Goal && classification.empty_net;

        ChartPoint {
            team: team.to_string(),
            side,
            category,
            coordinate,
            style: self.styles.style_for(category).clone(),
            retained: !suppressed && self.visibility.is_visible(category),
        }
    }
}

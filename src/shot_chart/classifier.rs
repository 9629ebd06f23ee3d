//! Event classification
//!
//! Decides what a shot event counts as. Each play is classified on its own;
//! there is no state carried between plays.

use super::extractor::EventKind;
use serde::{Deserialize, Serialize};

/// Period type label for shootout rounds
pub const SHOOTOUT_PERIOD: &str = "SHOOTOUT";

/// Chart category of a classified event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShotCategory {
    Goal,
    ShotOnGoal,
    MissedShot,
}

/// Category plus the tallies an event contributes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotClassification {
    pub category: ShotCategory,
    pub counts_as_attempt: bool,
    pub counts_as_shot_on_goal: bool,
    pub counts_as_goal: bool,
    /// Goal scored into an empty net; only affects the chart marker
    pub empty_net: bool,
}

impl ShotClassification {
    fn new(category: ShotCategory, attempt: bool, shot_on_goal: bool, goal: bool) -> Self {
        Self {
            category,
            counts_as_attempt: attempt,
            counts_as_shot_on_goal: shot_on_goal,
            counts_as_goal: goal,
            empty_net: false,
        }
    }
}

/// Classify one event
///
/// `period_type` and `empty_net` are only consulted for goals. Absent values
/// take the regular-play, goaltender-in-net path.
pub fn classify(
    kind: EventKind,
    period_type: Option<&str>,
    empty_net: Option<bool>,
) -> ShotClassification {
    match kind {
        EventKind::MissedShot => {
            ShotClassification::new(ShotCategory::MissedShot, true, false, false)
        }
        EventKind::Shot => ShotClassification::new(ShotCategory::ShotOnGoal, true, true, false),
        EventKind::Goal => {
            let shootout = period_type == Some(SHOOTOUT_PERIOD);
            let mut classification =
                ShotClassification::new(ShotCategory::Goal, !shootout, !shootout, true);
            classification.empty_net = empty_net.unwrap_or(false);
            classification
        }
    }
}

//! Per-team running totals

use super::classifier::ShotClassification;
use super::normalizer::TeamSide;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// Totals for one team across a play list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStats {
    pub shot_attempts: u32,
    pub shots_on_goal: u32,
    pub goals: u32,
}

impl TeamStats {
    pub fn new(shot_attempts: u32, shots_on_goal: u32, goals: u32) -> Self {
        Self {
            shot_attempts,
            shots_on_goal,
            goals,
        }
    }

    /// Add one classified event
    pub fn record(&mut self, classification: &ShotClassification) {
        self.shot_attempts += u32::from(classification.counts_as_attempt);
        self.shots_on_goal += u32::from(classification.counts_as_shot_on_goal);
        self.goals += u32::from(classification.counts_as_goal);
    }
}

impl Add for TeamStats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            shot_attempts: self.shot_attempts + rhs.shot_attempts,
            shots_on_goal: self.shots_on_goal + rhs.shots_on_goal,
            goals: self.goals + rhs.goals,
        }
    }
}

impl AddAssign for TeamStats {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Accumulator owned by a single pipeline run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameTally {
    pub home: TeamStats,
    pub away: TeamStats,
}

impl GameTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, side: TeamSide, classification: &ShotClassification) {
        match side {
            TeamSide::Home => self.home.record(classification),
            TeamSide::Away => self.away.record(classification),
        }
    }

    pub fn stats(&self, side: TeamSide) -> &TeamStats {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shot_chart::classifier::classify;
    use crate::shot_chart::extractor::EventKind;

    #[test]
    fn test_record_per_category() {
        let mut stats = TeamStats::default();
        stats.record(&classify(EventKind::Shot, None, None));
        stats.record(&classify(EventKind::MissedShot, None, None));
        stats.record(&classify(EventKind::Goal, Some("REGULAR"), Some(false)));

        assert_eq!(stats, TeamStats::new(3, 2, 1));
    }

    #[test]
    fn test_shootout_goal_tally() {
        let mut stats = TeamStats::default();
        stats.record(&classify(EventKind::Goal, Some("SHOOTOUT"), None));

        assert_eq!(stats, TeamStats::new(0, 0, 1));
    }

    #[test]
    fn test_empty_net_goal_tally() {
        let mut stats = TeamStats::default();
        stats.record(&classify(EventKind::Goal, Some("REGULAR"), Some(true)));

        assert_eq!(stats.goals, 1);
    }

    #[test]
    fn test_game_tally_routes_by_side() {
        let mut tally = GameTally::new();
        tally.record(TeamSide::Home, &classify(EventKind::Shot, None, None));
        tally.record(TeamSide::Away, &classify(EventKind::MissedShot, None, None));

        assert_eq!(*tally.stats(TeamSide::Home), TeamStats::new(1, 1, 0));
        assert_eq!(*tally.stats(TeamSide::Away), TeamStats::new(1, 0, 0));
    }

    #[test]
    fn test_stats_add() {
        let mut total = TeamStats::new(1, 2, 3);
        total += TeamStats::new(10, 20, 30);
        assert_eq!(total, TeamStats::new(11, 22, 33));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn classification() -> impl Strategy<Value = ShotClassification> {
            (0usize..3, any::<bool>(), any::<bool>()).prop_map(|(kind, shootout, empty_net)| {
                let kind = [EventKind::Goal, EventKind::Shot, EventKind::MissedShot][kind];
                let period = if shootout { "SHOOTOUT" } else { "REGULAR" };
                classify(kind, Some(period), Some(empty_net))
            })
        }

        proptest! {
            /// Property: reordering events does not change the totals
            #[test]
            fn prop_order_independent(events in prop::collection::vec(classification(), 0..64)) {
                let mut forward = TeamStats::default();
                events.iter().for_each(|c| forward.record(c));

                let mut backward = TeamStats::default();
                events.iter().rev().for_each(|c| backward.record(c));

                prop_assert_eq!(forward, backward);
            }

            /// Property: splitting the sequence and merging partial totals is lossless
            #[test]
            fn prop_split_merge(events in prop::collection::vec(classification(), 0..64), split in 0usize..64) {
                let split = split.min(events.len());
                let (left, right) = events.split_at(split);

                let mut whole = TeamStats::default();
                events.iter().for_each(|c| whole.record(c));

                let mut a = TeamStats::default();
                left.iter().for_each(|c| a.record(c));
                let mut b = TeamStats::default();
                right.iter().for_each(|c| b.record(c));

                prop_assert_eq!(whole, a + b);
            }

            /// Property: attempts equal the number of attempt-counting events
            #[test]
            fn prop_attempt_conservation(events in prop::collection::vec(classification(), 0..64)) {
                let mut stats = TeamStats::default();
                events.iter().for_each(|c| stats.record(c));

                let expected = events.iter().filter(|c| c.counts_as_attempt).count() as u32;
                prop_assert_eq!(stats.shot_attempts, expected);
                prop_assert!(stats.shots_on_goal <= stats.shot_attempts);
            }
        }
    }
}

pub mod reader;
pub mod tables;

use crate::model::team::normalize_team;
use crate::model::{DeliveryRecord, JoinedDelivery, MatchRecord};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub use reader::{load_dataset, parse_deliveries, parse_matches};

/// Which optional delivery columns the input carried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeliverySchema {
    pub has_wide_runs: bool,
}

/// Match table plus deliveries joined to their matches.
///
/// Built once per session and never mutated afterwards; every analysis
/// borrows it.
#[derive(Debug, Default)]
pub struct Dataset {
    matches: Vec<Arc<MatchRecord>>,
    joined: Vec<JoinedDelivery>,
    schema: DeliverySchema,
    delivery_count: usize,
    dropped: usize,
}

impl Dataset {
    /// Normalize team names and inner-join deliveries onto matches
    pub fn from_records(
        mut matches: Vec<MatchRecord>,
        deliveries: Vec<DeliveryRecord>,
        schema: DeliverySchema,
    ) -> Self {
        for m in &mut matches {
            normalize_team(&mut m.team1);
            normalize_team(&mut m.team2);
            if let Some(ref mut winner) = m.winner {
                normalize_team(winner);
            }

            if !m.winner_is_participant() {
                log::debug!(
                    "Match {} ({}): winner {:?} did not play",
                    m.id,
                    m.title(),
                    m.winner
                );
            }
        }

        let matches: Vec<Arc<MatchRecord>> = matches.into_iter().map(Arc::new).collect();

        let mut by_id: HashMap<i64, Vec<Arc<MatchRecord>>> = HashMap::new();
        for m in &matches {
            by_id.entry(m.id).or_default().push(Arc::clone(m));
        }
        if by_id.len() != matches.len() {
            log::warn!(
                "Match table has {} duplicate ids; their deliveries join once per copy",
                matches.len() - by_id.len()
            );
        }

        let delivery_count = deliveries.len();
        let mut joined = Vec::with_capacity(delivery_count);
        let mut dropped = 0usize;

        for delivery in deliveries {
            match by_id.get(&delivery.match_id) {
                Some(fixtures) => {
                    for fixture in fixtures {
                        joined.push(JoinedDelivery {
                            fixture: Arc::clone(fixture),
                            delivery: delivery.clone(),
                        });
                    }
                }
                None => dropped += 1,
            }
        }

        if dropped > 0 {
            log::debug!("Dropped {} deliveries with no matching match id", dropped);
        }

        Dataset {
            matches,
            joined,
            schema,
            delivery_count,
            dropped,
        }
    }

    pub fn matches(&self) -> &[Arc<MatchRecord>] {
        &self.matches
    }

    pub fn joined(&self) -> &[JoinedDelivery] {
        &self.joined
    }

    pub fn schema(&self) -> DeliverySchema {
        self.schema
    }

    pub fn summary(&self) -> DatasetSummary {
        let first_season = self.matches.iter().map(|m| m.season.as_str()).min();
        let last_season = self.matches.iter().map(|m| m.season.as_str()).max();

        DatasetSummary {
            matches: self.matches.len(),
            deliveries: self.delivery_count,
            joined: self.joined.len(),
            dropped: self.dropped,
            first_season: first_season.map(String::from),
            last_season: last_season.map(String::from),
            has_wide_runs: self.schema.has_wide_runs,
        }
    }
}

/// Counts describing a loaded dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSummary {
    pub matches: usize,
    pub deliveries: usize,
    pub joined: usize,
    pub dropped: usize,
    pub first_season: Option<String>,
    pub last_season: Option<String>,
    pub has_wide_runs: bool,
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matches: {}", self.matches)?;
        writeln!(f, "Deliveries: {}", self.deliveries)?;
        writeln!(f, "Joined deliveries: {}", self.joined)?;
        writeln!(f, "Unmatched deliveries: {}", self.dropped)?;
        if let (Some(first), Some(last)) = (&self.first_season, &self.last_season) {
            writeln!(f, "Seasons: {} to {}", first, last)?;
        }
        write!(
            f,
            "Wide indicator: {}",
            if self.has_wide_runs {
                "present (wides excluded from balls faced)"
            } else {
                "absent (every ball counted as faced)"
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LEGACY_TEAM_NAMES;

    fn sample() -> Dataset {
        let matches = vec![
            MatchRecord::new(1, "Delhi Daredevils", "Deccan Chargers")
                .with_season("2009")
                .with_toss("Deccan Chargers", crate::TossDecision::Bat)
                .with_winner("Deccan Chargers"),
            MatchRecord::new(2, "Mumbai Indians", "Delhi Daredevils")
                .with_season("2012")
                .with_winner("Delhi Daredevils"),
        ];
        let deliveries = vec![
            DeliveryRecord::new(1, "V Sehwag", 4),
            DeliveryRecord::new(2, "SR Tendulkar", 1),
            DeliveryRecord::new(3, "Nobody", 6),
        ];
        Dataset::from_records(matches, deliveries, DeliverySchema::default())
    }

    #[test]
    fn test_normalization_is_total() {
        let dataset = sample();
        for m in dataset.matches() {
            for (legacy, _) in LEGACY_TEAM_NAMES {
                assert_ne!(m.team1, legacy);
                assert_ne!(m.team2, legacy);
                assert_ne!(m.winner.as_deref(), Some(legacy));
            }
        }
        assert_eq!(dataset.matches()[0].team2, "Sunrisers Hyderabad");
        assert_eq!(dataset.matches()[1].winner.as_deref(), Some("Delhi Capitals"));
    }

    #[test]
    fn test_toss_winner_keeps_recorded_label() {
        let dataset = sample();
        assert_eq!(dataset.matches()[0].toss_winner, "Deccan Chargers");
        assert_eq!(dataset.matches()[0].winner.as_deref(), Some("Sunrisers Hyderabad"));
    }

    #[test]
    fn test_inner_join_drops_orphans() {
        let dataset = sample();
        assert_eq!(dataset.joined().len(), 2);
        assert!(dataset.joined().len() <= dataset.summary().deliveries);
        for row in dataset.joined() {
            assert!(dataset.matches().iter().any(|m| m.id == row.delivery.match_id));
            assert_eq!(row.fixture.id, row.delivery.match_id);
        }
    }

    #[test]
    fn test_summary() {
        let summary = sample().summary();
        assert_eq!(summary.matches, 2);
        assert_eq!(summary.deliveries, 3);
        assert_eq!(summary.joined, 2);
        assert_eq!(summary.dropped, 1);
        assert_eq!(summary.first_season.as_deref(), Some("2009"));
        assert_eq!(summary.last_season.as_deref(), Some("2012"));
        assert!(summary.to_string().contains("absent"));
    }
}

use super::round2;
use crate::dataset::Dataset;
use crate::model::TossDecision;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct VenueReport {
    pub venue: String,
    pub total_matches: usize,
    /// Most common decision first
    pub toss_decisions: Vec<(TossDecision, usize)>,
    /// Percent of matches won by the toss winner, in [0, 100]
    pub toss_advantage_rate: f64,
}

impl VenueReport {
    /// Share of matches taking `count`, as a percentage
    pub fn share(&self, count: usize) -> f64 {
        if self.total_matches == 0 {
            0.0
        } else {
            count as f64 / self.total_matches as f64 * 100.0
        }
    }

    pub fn narrative(&self) -> String {
        format!(
            "At {}, the team that wins the toss also wins the match {:.2}% of the time.",
            self.venue, self.toss_advantage_rate
        )
    }
}

pub fn venue_insights(dataset: &Dataset, venue: &str) -> VenueReport {
    let mut total_matches = 0usize;
    let mut toss_wins = 0usize;
    let mut decisions: HashMap<TossDecision, usize> = HashMap::new();

    for m in dataset.matches() {
        if m.venue.as_deref() != Some(venue) {
            continue;
        }
        total_matches += 1;
        *decisions.entry(m.toss_decision).or_default() += 1;
        if m.toss_winner_won() {
            toss_wins += 1;
        }
    }

    let mut toss_decisions: Vec<(TossDecision, usize)> = decisions.into_iter().collect();
    toss_decisions.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let toss_advantage_rate = if total_matches == 0 {
        0.0
    } else {
        round2(toss_wins as f64 / total_matches as f64 * 100.0)
    };

    VenueReport {
        venue: venue.to_string(),
        total_matches,
        toss_decisions,
        toss_advantage_rate,
    }
}

use super::round2;
use crate::dataset::Dataset;
use std::collections::BTreeMap;

/// Running batting totals for one player
#[derive(Debug, Default, Clone)]
struct BattingTally {
    runs: u64,
    balls: u64,
    dismissals: u64,
    runs_by_season: BTreeMap<String, u64>,
}

impl BattingTally {
    fn strike_rate(&self) -> f64 {
        if self.balls == 0 {
            0.0
        } else {
            round2(self.runs as f64 / self.balls as f64 * 100.0)
        }
    }

    fn average(&self) -> Option<f64> {
        if self.dismissals == 0 {
            None
        } else {
            Some(round2(self.runs as f64 / self.dismissals as f64))
        }
    }
}

/// Batting summary for a single player across the whole dataset
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerReport {
    pub player: String,
    pub total_runs: u64,
    pub balls_faced: u64,
    pub strike_rate: f64,
    pub dismissals: u64,
    /// `None` when the player was never dismissed
    pub average: Option<f64>,
    /// (season, runs), ascending by season
    pub runs_per_season: Vec<(String, u64)>,
    /// False when the input had no wide indicator and every ball was counted
    pub wides_excluded: bool,
}

pub fn player_performance(dataset: &Dataset, player: &str) -> PlayerReport {
    let wides_excluded = dataset.schema().has_wide_runs;
    let mut tally = BattingTally::default();

    for row in dataset.joined() {
        if row.batter() != player {
            continue;
        }

        // Only deliveries the player faced; a non-striker run-out is not counted
        if row.dismissed(player) {
            tally.dismissals += 1;
        }

        let runs = row.delivery.batsman_runs as u64;
        tally.runs += runs;
        *tally.runs_by_season.entry(row.season().to_string()).or_default() += runs;

        if !wides_excluded || row.delivery.is_legal_ball() {
            tally.balls += 1;
        }
    }

    PlayerReport {
        player: player.to_string(),
        total_runs: tally.runs,
        balls_faced: tally.balls,
        strike_rate: tally.strike_rate(),
        dismissals: tally.dismissals,
        average: tally.average(),
        runs_per_season: tally.runs_by_season.into_iter().collect(),
        wides_excluded,
    }
}

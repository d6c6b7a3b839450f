use crate::dataset::Dataset;
use crate::model::MatchRecord;

/// Number of most recent fixtures listed in a head-to-head report
pub const RECENT_MATCHES: usize = 5;

/// One row of the recent-fixtures table
#[derive(Debug, Clone, PartialEq)]
pub struct RecentMatch {
    pub date: String,
    pub winner: Option<String>,
    pub result: Option<String>,
    pub result_margin: Option<f64>,
    pub venue: Option<String>,
}

impl From<&MatchRecord> for RecentMatch {
    fn from(m: &MatchRecord) -> Self {
        RecentMatch {
            date: m.date.clone(),
            winner: m.winner.clone(),
            result: m.result.clone(),
            result_margin: m.result_margin,
            venue: m.venue.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeadToHeadReport {
    pub team_a: String,
    pub team_b: String,
    /// Includes ties and no-results
    pub total_matches: usize,
    pub team_a_wins: usize,
    pub team_b_wins: usize,
    /// Newest first
    pub recent: Vec<RecentMatch>,
}

impl HeadToHeadReport {
    /// Matches neither side won
    pub fn undecided(&self) -> usize {
        self.total_matches - self.team_a_wins - self.team_b_wins
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HeadToHead {
    /// Both selections named the same team; nothing is computed
    SameTeam(String),
    Summary(HeadToHeadReport),
}

impl HeadToHead {
    pub const SAME_TEAM_WARNING: &'static str = "Please select two different teams.";
}

pub fn head_to_head(dataset: &Dataset, team_a: &str, team_b: &str) -> HeadToHead {
    if team_a == team_b {
        return HeadToHead::SameTeam(team_a.to_string());
    }

    let mut fixtures: Vec<&MatchRecord> = dataset
        .matches()
        .iter()
        .map(|m| m.as_ref())
        .filter(|m| m.is_between(team_a, team_b))
        .collect();

    let wins_for = |team: &str| {
        fixtures
            .iter()
            .filter(|m| m.winner.as_deref() == Some(team))
            .count()
    };
    let team_a_wins = wins_for(team_a);
    let team_b_wins = wins_for(team_b);

    fixtures.sort_by(|a, b| b.date.cmp(&a.date));
    let recent = fixtures
        .iter()
        .take(RECENT_MATCHES)
        .map(|m| RecentMatch::from(*m))
        .collect();

    HeadToHead::Summary(HeadToHeadReport {
        team_a: team_a.to_string(),
        team_b: team_b.to_string(),
        total_matches: fixtures.len(),
        team_a_wins,
        team_b_wins,
        recent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DeliverySchema;

    const MI: &str = "Mumbai Indians";
    const CSK: &str = "Chennai Super Kings";

    fn dataset() -> Dataset {
        let mut matches = Vec::new();
        for (i, (t1, t2, winner)) in [
            (MI, CSK, Some(MI)),
            (CSK, MI, Some(CSK)),
            (MI, CSK, Some(MI)),
            (CSK, MI, None),
            (MI, CSK, Some(MI)),
            (CSK, MI, Some(CSK)),
            (MI, "Rajasthan Royals", Some(MI)),
        ]
        .into_iter()
        .enumerate()
        {
            let mut m = MatchRecord::new(i as i64 + 1, t1, t2)
                .with_date(&format!("2019-04-{:02}", i + 1))
                .with_venue("Wankhede Stadium");
            if let Some(w) = winner {
                m = m.with_winner(w).with_result("runs", Some(10.0));
            }
            matches.push(m);
        }
        Dataset::from_records(matches, Vec::new(), DeliverySchema::default())
    }

    fn summary(outcome: HeadToHead) -> HeadToHeadReport {
        match outcome {
            HeadToHead::Summary(report) => report,
            HeadToHead::SameTeam(_) => panic!("expected a summary"),
        }
    }

    #[test]
    fn test_counts_and_ties() {
        let report = summary(head_to_head(&dataset(), MI, CSK));
        assert_eq!(report.total_matches, 6);
        assert_eq!(report.team_a_wins, 3);
        assert_eq!(report.team_b_wins, 2);
        assert_eq!(report.undecided(), 1);
    }

    #[test]
    fn test_symmetric_in_argument_order() {
        let ab = summary(head_to_head(&dataset(), MI, CSK));
        let ba = summary(head_to_head(&dataset(), CSK, MI));
        assert_eq!(ab.total_matches, ba.total_matches);
        assert_eq!(ab.team_a_wins, ba.team_b_wins);
        assert_eq!(ab.team_b_wins, ba.team_a_wins);
        assert_eq!(ab.recent, ba.recent);
    }

    #[test]
    fn test_recent_newest_first() {
        let report = summary(head_to_head(&dataset(), MI, CSK));
        assert_eq!(report.recent.len(), RECENT_MATCHES);
        assert_eq!(report.recent[0].date, "2019-04-06");
        assert_eq!(report.recent[4].date, "2019-04-02");
        assert_eq!(report.recent[2].winner, None);
    }

    #[test]
    fn test_same_team_guard() {
        assert_eq!(
            head_to_head(&dataset(), MI, MI),
            HeadToHead::SameTeam(MI.to_string())
        );
    }

    #[test]
    fn test_never_met() {
        let report = summary(head_to_head(&dataset(), CSK, "Rajasthan Royals"));
        assert_eq!(report.total_matches, 0);
        assert!(report.recent.is_empty());
    }
}

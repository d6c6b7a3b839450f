use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum TossDecision {
    #[default]
    Bat,
    Field,
}

impl TossDecision {
    pub fn from_csv(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "bat" | "batting" => Some(TossDecision::Bat),
            "field" | "fielding" | "bowl" => Some(TossDecision::Field),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TossDecision::Bat => "bat",
            TossDecision::Field => "field",
        }
    }
}

impl fmt::Display for TossDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One completed fixture from the match table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchRecord {
    pub id: i64,
    pub season: String,
    pub date: String,
    pub venue: Option<String>,

    // Participants
    pub team1: String,
    pub team2: String,
    pub toss_winner: String,
    pub toss_decision: TossDecision,

    // Outcome
    pub winner: Option<String>,
    pub result: Option<String>,
    pub result_margin: Option<f64>,
}

impl MatchRecord {
    pub fn new(id: i64, team1: &str, team2: &str) -> Self {
        MatchRecord {
            id,
            team1: team1.to_string(),
            team2: team2.to_string(),
            toss_winner: team1.to_string(),
            ..Default::default()
        }
    }

    pub fn with_season(mut self, season: &str) -> Self {
        self.season = season.to_string();
        self
    }

    pub fn with_date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    pub fn with_venue(mut self, venue: &str) -> Self {
        self.venue = Some(venue.to_string());
        self
    }

    pub fn with_toss(mut self, winner: &str, decision: TossDecision) -> Self {
        self.toss_winner = winner.to_string();
        self.toss_decision = decision;
        self
    }

    pub fn with_winner(mut self, winner: &str) -> Self {
        self.winner = Some(winner.to_string());
        self
    }

    pub fn with_result(mut self, result: &str, margin: Option<f64>) -> Self {
        self.result = Some(result.to_string());
        self.result_margin = margin;
        self
    }

    /// True when the unordered pair {team1, team2} is {a, b}
    pub fn is_between(&self, a: &str, b: &str) -> bool {
        (self.team1 == a && self.team2 == b) || (self.team1 == b && self.team2 == a)
    }

    /// True when the toss winner went on to win the match
    pub fn toss_winner_won(&self) -> bool {
        self.winner.as_deref() == Some(self.toss_winner.as_str())
    }

    /// Winner, if any, is one of the two participants
    pub fn winner_is_participant(&self) -> bool {
        match self.winner.as_deref() {
            Some(w) => w == self.team1 || w == self.team2,
            None => true,
        }
    }

    pub fn title(&self) -> String {
        let mut parts = vec![format!("{} vs {}", self.team1, self.team2)];

        if !self.date.is_empty() {
            parts.push(self.date.clone());
        }

        if let Some(ref venue) = self.venue {
            parts.push(venue.clone());
        }

        parts.join(" • ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toss_decision_parsing() {
        assert_eq!(TossDecision::from_csv("bat"), Some(TossDecision::Bat));
        assert_eq!(TossDecision::from_csv(" Field "), Some(TossDecision::Field));
        assert_eq!(TossDecision::from_csv("bowl"), Some(TossDecision::Field));
        assert_eq!(TossDecision::from_csv("NA"), None);
    }

    #[test]
    fn test_is_between_either_order() {
        let m = MatchRecord::new(1, "Mumbai Indians", "Chennai Super Kings");
        assert!(m.is_between("Mumbai Indians", "Chennai Super Kings"));
        assert!(m.is_between("Chennai Super Kings", "Mumbai Indians"));
        assert!(!m.is_between("Mumbai Indians", "Rajasthan Royals"));
    }

    #[test]
    fn test_toss_winner_won() {
        let m = MatchRecord::new(1, "A", "B")
            .with_toss("B", TossDecision::Field)
            .with_winner("B");
        assert!(m.toss_winner_won());

        let no_result = MatchRecord::new(2, "A", "B").with_toss("A", TossDecision::Bat);
        assert!(!no_result.toss_winner_won());
    }

    #[test]
    fn test_winner_is_participant() {
        assert!(MatchRecord::new(1, "A", "B").with_winner("A").winner_is_participant());
        assert!(MatchRecord::new(2, "A", "B").winner_is_participant());
        assert!(!MatchRecord::new(3, "A", "B").with_winner("C").winner_is_participant());
    }

    #[test]
    fn test_match_title() {
        let m = MatchRecord::new(1, "A", "B")
            .with_date("2019-05-12")
            .with_venue("Wankhede Stadium");
        assert_eq!(m.title(), "A vs B • 2019-05-12 • Wankhede Stadium");
    }
}

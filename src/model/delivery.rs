use super::fixture::MatchRecord;
use std::sync::Arc;

/// A single ball from the delivery table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeliveryRecord {
    pub match_id: i64,
    pub batter: String,
    pub batsman_runs: u32,
    pub player_dismissed: Option<String>,
    /// Only populated when the input carries a `wide_runs` column
    pub wide_runs: Option<u32>,
}

impl DeliveryRecord {
    pub fn new(match_id: i64, batter: &str, batsman_runs: u32) -> Self {
        DeliveryRecord {
            match_id,
            batter: batter.to_string(),
            batsman_runs,
            ..Default::default()
        }
    }

    pub fn with_dismissal(mut self, player: &str) -> Self {
        self.player_dismissed = Some(player.to_string());
        self
    }

    pub fn with_wide_runs(mut self, runs: u32) -> Self {
        self.wide_runs = Some(runs);
        self
    }

    /// Legal only when a wide value is recorded and it is zero; blank is not legal
    pub fn is_legal_ball(&self) -> bool {
        self.wide_runs == Some(0)
    }
}

/// A delivery together with the match it belongs to
#[derive(Debug, Clone)]
pub struct JoinedDelivery {
    pub fixture: Arc<MatchRecord>,
    pub delivery: DeliveryRecord,
}

impl JoinedDelivery {
    pub fn batter(&self) -> &str {
        &self.delivery.batter
    }

    pub fn season(&self) -> &str {
        &self.fixture.season
    }

    pub fn dismissed(&self, player: &str) -> bool {
        self.delivery.player_dismissed.as_deref() == Some(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_legal_ball() {
        assert!(DeliveryRecord::new(1, "V Kohli", 0).with_wide_runs(0).is_legal_ball());
        assert!(!DeliveryRecord::new(1, "V Kohli", 0).with_wide_runs(1).is_legal_ball());
        assert!(!DeliveryRecord::new(1, "V Kohli", 4).is_legal_ball());
    }

    #[test]
    fn test_joined_accessors() {
        let fixture = Arc::new(MatchRecord::new(7, "A", "B").with_season("2016"));
        let row = JoinedDelivery {
            fixture,
            delivery: DeliveryRecord::new(7, "AB de Villiers", 6).with_dismissal("AB de Villiers"),
        };
        assert_eq!(row.batter(), "AB de Villiers");
        assert_eq!(row.season(), "2016");
        assert!(row.dismissed("AB de Villiers"));
        assert!(!row.dismissed("V Kohli"));
    }
}

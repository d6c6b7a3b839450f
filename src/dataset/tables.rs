use crate::error::{InsightsError, Result};
use crate::model::{DeliveryRecord, MatchRecord, TossDecision};
use serde::Deserialize;

/// Columns the match table must carry
pub const MATCH_COLUMNS: [&str; 11] = [
    "id",
    "season",
    "date",
    "venue",
    "team1",
    "team2",
    "toss_winner",
    "toss_decision",
    "winner",
    "result",
    "result_margin",
];

/// Columns the delivery table must carry
pub const DELIVERY_COLUMNS: [&str; 4] = ["match_id", "batter", "batsman_runs", "player_dismissed"];

/// Optional delivery column marking wides
pub const WIDE_RUNS_COLUMN: &str = "wide_runs";

/// Tokens read as a missing value
const NULL_TOKENS: [&str; 4] = ["na", "nan", "null", "none"];

/// A row from the match table, as stored on disk
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRow {
    pub id: i64,
    pub season: Option<String>,
    pub date: Option<String>,
    pub venue: Option<String>,
    pub team1: Option<String>,
    pub team2: Option<String>,
    pub toss_winner: Option<String>,
    pub toss_decision: Option<String>,
    pub winner: Option<String>,
    pub result: Option<String>,
    pub result_margin: Option<String>,
}

/// A row from the delivery table, as stored on disk
#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryRow {
    pub match_id: i64,
    pub batter: Option<String>,
    pub batsman_runs: u32,
    pub player_dismissed: Option<String>,
    pub wide_runs: Option<String>,
}

/// Strip null tokens from an optional text field
pub fn clean(value: Option<String>) -> Option<String> {
    value.filter(|v| {
        let v = v.trim();
        !v.is_empty() && !NULL_TOKENS.contains(&v.to_lowercase().as_str())
    })
}

fn required(
    value: Option<String>,
    table: &'static str,
    row: usize,
    column: &str,
) -> Result<String> {
    clean(value).ok_or_else(|| InsightsError::Malformed {
        table,
        row,
        message: format!("missing value for '{}'", column),
    })
}

fn parse_number<T: std::str::FromStr>(
    value: Option<String>,
    table: &'static str,
    row: usize,
    column: &str,
) -> Result<Option<T>> {
    match clean(value) {
        None => Ok(None),
        Some(s) => s.trim().parse::<T>().map(Some).map_err(|_| InsightsError::Malformed {
            table,
            row,
            message: format!("'{}' is not a number in '{}'", s, column),
        }),
    }
}

impl MatchRow {
    /// Convert to a model record; `row` is the 1-based data row for error messages
    pub fn into_record(self, row: usize) -> Result<MatchRecord> {
        const TABLE: &str = "match";

        let decision_str = required(self.toss_decision, TABLE, row, "toss_decision")?;
        let toss_decision =
            TossDecision::from_csv(&decision_str).ok_or_else(|| InsightsError::Malformed {
                table: TABLE,
                row,
                message: format!("unknown toss decision '{}'", decision_str),
            })?;

        Ok(MatchRecord {
            id: self.id,
            season: required(self.season, TABLE, row, "season")?,
            date: required(self.date, TABLE, row, "date")?,
            venue: clean(self.venue),
            team1: required(self.team1, TABLE, row, "team1")?,
            team2: required(self.team2, TABLE, row, "team2")?,
            toss_winner: required(self.toss_winner, TABLE, row, "toss_winner")?,
            toss_decision,
            winner: clean(self.winner),
            result: clean(self.result),
            result_margin: parse_number(self.result_margin, TABLE, row, "result_margin")?,
        })
    }
}

impl DeliveryRow {
    pub fn into_record(self, row: usize) -> Result<DeliveryRecord> {
        const TABLE: &str = "delivery";

        Ok(DeliveryRecord {
            match_id: self.match_id,
            batter: required(self.batter, TABLE, row, "batter")?,
            batsman_runs: self.batsman_runs,
            player_dismissed: clean(self.player_dismissed),
            wide_runs: parse_number(self.wide_runs, TABLE, row, WIDE_RUNS_COLUMN)?,
        })
    }
}

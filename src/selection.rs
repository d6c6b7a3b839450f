//! Choice lists for each analysis mode and resolution of user input against them

use crate::dataset::Dataset;
use crate::error::{InsightsError, Result};
use crate::model::canonical_team_name;
use std::collections::BTreeSet;

/// Sorted, de-duplicated values a user can pick from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Choices {
    pub players: Vec<String>,
    pub teams: Vec<String>,
    pub venues: Vec<String>,
}

impl Choices {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let players: BTreeSet<&str> = dataset.joined().iter().map(|j| j.batter()).collect();
        let teams: BTreeSet<&str> = dataset.matches().iter().map(|m| m.team1.as_str()).collect();
        let venues: BTreeSet<&str> = dataset
            .matches()
            .iter()
            .filter_map(|m| m.venue.as_deref())
            .collect();

        Choices {
            players: players.into_iter().map(String::from).collect(),
            teams: teams.into_iter().map(String::from).collect(),
            venues: venues.into_iter().map(String::from).collect(),
        }
    }

    pub fn resolve_player(&self, input: &str) -> Result<String> {
        find(&self.players, input).ok_or_else(|| InsightsError::UnknownPlayer(input.to_string()))
    }

    /// Legacy franchise names, in any case, resolve to the current name
    pub fn resolve_team(&self, input: &str) -> Result<String> {
        find(&self.teams, canonical_team_name(input))
            .ok_or_else(|| InsightsError::UnknownTeam(input.to_string()))
    }

    pub fn resolve_venue(&self, input: &str) -> Result<String> {
        find(&self.venues, input).ok_or_else(|| InsightsError::UnknownVenue(input.to_string()))
    }

    /// First player, used when no batter is named
    pub fn default_player(&self) -> Option<&str> {
        self.players.first().map(String::as_str)
    }

    /// First and second team, used when the pair is not named
    pub fn default_teams(&self) -> (Option<&str>, Option<&str>) {
        (
            self.teams.first().map(String::as_str),
            self.teams.get(1).map(String::as_str),
        )
    }

    pub fn default_venue(&self) -> Option<&str> {
        self.venues.first().map(String::as_str)
    }
}

/// Exact match first, then a case-insensitive match if it is unique
fn find(options: &[String], input: &str) -> Option<String> {
    let input = input.trim();
    if let Ok(idx) = options.binary_search_by(|o| o.as_str().cmp(input)) {
        return Some(options[idx].clone());
    }

    let lowered = input.to_lowercase();
    let mut hits = options.iter().filter(|o| o.to_lowercase() == lowered);
    match (hits.next(), hits.next()) {
        (Some(hit), None) => Some(hit.clone()),
        _ => None,
    }
}

/// Pick from a list by 1-based index or by name; empty input takes `default`
pub fn pick<'a>(options: &'a [String], input: &str, default: Option<&'a str>) -> Option<&'a str> {
    let input = input.trim();
    if input.is_empty() {
        return default;
    }

    if let Ok(n) = input.parse::<usize>() {
        if n >= 1 && n <= options.len() {
            return Some(options[n - 1].as_str());
        }
    }

    let found = find(options, input)?;
    options.iter().find(|o| **o == found).map(String::as_str)
}

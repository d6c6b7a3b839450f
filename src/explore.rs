//! Interactive prompt loop: pick a mode, pick the selection(s), print the report

use crate::analysis::{head_to_head, player_performance, venue_insights};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::model::canonical_team_name;
use crate::render::{render_head_to_head, render_player, render_venue};
use crate::selection::{pick, Choices};
use std::io::{BufRead, Lines, Write};

/// The three mutually exclusive analysis modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    PlayerPerformance,
    TeamVsTeam,
    VenueInsights,
}

impl AnalysisMode {
    pub const ALL: [AnalysisMode; 3] = [
        AnalysisMode::PlayerPerformance,
        AnalysisMode::TeamVsTeam,
        AnalysisMode::VenueInsights,
    ];

    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "player" | "player performance" => Some(AnalysisMode::PlayerPerformance),
            "2" | "teams" | "team" | "team vs. team" | "team vs team" => {
                Some(AnalysisMode::TeamVsTeam)
            }
            "3" | "venue" | "venue insights" => Some(AnalysisMode::VenueInsights),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnalysisMode::PlayerPerformance => "Player Performance",
            AnalysisMode::TeamVsTeam => "Team vs. Team",
            AnalysisMode::VenueInsights => "Venue Insights",
        }
    }
}

struct Session<'a, R, W> {
    lines: Lines<R>,
    out: &'a mut W,
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        match self.lines.next() {
            Some(line) => Ok(Some(line?)),
            None => Ok(None),
        }
    }

    /// Ask until the answer resolves against `options`; `None` on end of input.
    ///
    /// `alias` rewrites the answer before it is matched.
    fn choose(
        &mut self,
        label: &str,
        options: &[String],
        default: Option<&str>,
        alias: fn(&str) -> &str,
    ) -> Result<Option<String>> {
        loop {
            let hint = match default {
                Some(d) => format!("{} [Enter = {}, ? = list]: ", label, d),
                None => format!("{} [? = list]: ", label),
            };
            let Some(answer) = self.prompt(&hint)? else {
                return Ok(None);
            };

            if answer.trim() == "?" {
                for (i, option) in options.iter().enumerate() {
                    writeln!(self.out, "  {:>4}) {}", i + 1, option)?;
                }
                continue;
            }

            match pick(options, alias(&answer), default) {
                Some(choice) => return Ok(Some(choice.to_string())),
                None => writeln!(self.out, "No match for '{}'", answer.trim())?,
            }
        }
    }
}

/// Run the prompt loop until the user quits or input ends
pub fn run_session<R: BufRead, W: Write>(dataset: &Dataset, input: R, out: &mut W) -> Result<()> {
    let choices = Choices::from_dataset(dataset);
    let mut session = Session {
        lines: input.lines(),
        out,
    };

    loop {
        writeln!(session.out)?;
        writeln!(session.out, "Select Analysis Type")?;
        for (i, mode) in AnalysisMode::ALL.iter().enumerate() {
            writeln!(session.out, "  {}) {}", i + 1, mode.label())?;
        }
        writeln!(session.out, "  q) Quit")?;

        let Some(answer) = session.prompt("> ")? else {
            break;
        };
        let answer = answer.trim();
        if answer.eq_ignore_ascii_case("q") || answer.eq_ignore_ascii_case("quit") {
            break;
        }
        let Some(mode) = AnalysisMode::from_input(answer) else {
            writeln!(session.out, "Unknown analysis type '{}'", answer)?;
            continue;
        };

        let report = match mode {
            AnalysisMode::PlayerPerformance => {
                let Some(player) = session.choose(
                    "Select a Batsman",
                    &choices.players,
                    choices.default_player(),
                    str::trim,
                )?
                else {
                    break;
                };
                render_player(&player_performance(dataset, &player))
            }
            AnalysisMode::TeamVsTeam => {
                let (first, second) = choices.default_teams();
                let Some(team_a) =
                    session.choose("Select Team 1", &choices.teams, first, canonical_team_name)?
                else {
                    break;
                };
                let Some(team_b) =
                    session.choose("Select Team 2", &choices.teams, second, canonical_team_name)?
                else {
                    break;
                };
                render_head_to_head(&head_to_head(dataset, &team_a, &team_b))
            }
            AnalysisMode::VenueInsights => {
                let Some(venue) = session.choose(
                    "Select a Venue",
                    &choices.venues,
                    choices.default_venue(),
                    str::trim,
                )?
                else {
                    break;
                };
                render_venue(&venue_insights(dataset, &venue))
            }
        };

        writeln!(session.out)?;
        write!(session.out, "{}", report)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DeliverySchema;
    use crate::model::{DeliveryRecord, MatchRecord, TossDecision};

    fn dataset() -> Dataset {
        let matches = vec![
            MatchRecord::new(1, "Mumbai Indians", "Chennai Super Kings")
                .with_season("2019")
                .with_date("2019-05-12")
                .with_venue("Rajiv Gandhi International Stadium")
                .with_toss("Mumbai Indians", TossDecision::Bat)
                .with_winner("Mumbai Indians"),
            MatchRecord::new(2, "Chennai Super Kings", "Mumbai Indians")
                .with_season("2019")
                .with_date("2019-05-07")
                .with_venue("MA Chidambaram Stadium")
                .with_toss("Chennai Super Kings", TossDecision::Bat)
                .with_winner("Mumbai Indians"),
        ];
        let deliveries = vec![
            DeliveryRecord::new(1, "RG Sharma", 4),
            DeliveryRecord::new(2, "MS Dhoni", 6),
        ];
        Dataset::from_records(matches, deliveries, DeliverySchema::default())
    }

    fn run(input: &str) -> String {
        let mut out = Vec::new();
        run_session(&dataset(), input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(AnalysisMode::from_input("1"), Some(AnalysisMode::PlayerPerformance));
        assert_eq!(AnalysisMode::from_input("Team vs. Team"), Some(AnalysisMode::TeamVsTeam));
        assert_eq!(AnalysisMode::from_input("venue"), Some(AnalysisMode::VenueInsights));
        assert_eq!(AnalysisMode::from_input("bowling"), None);
    }

    #[test]
    fn test_player_by_name() {
        let text = run("1\nrg sharma\nq\n");
        assert!(text.contains("Player Performance: RG Sharma"));
        assert!(text.contains("400.00"));
    }

    #[test]
    fn test_team_defaults_then_same_team() {
        let text = run("2\n\n\n2\n1\n1\n");
        assert!(text.contains("Head-to-Head: Chennai Super Kings vs. Mumbai Indians"));
        assert!(text.contains("Warning: Please select two different teams."));
    }

    #[test]
    fn test_team_by_legacy_name() {
        let matches = vec![
            MatchRecord::new(1, "Deccan Chargers", "Mumbai Indians")
                .with_date("2009-05-01")
                .with_toss("Deccan Chargers", TossDecision::Bat)
                .with_winner("Deccan Chargers"),
            MatchRecord::new(2, "Mumbai Indians", "Deccan Chargers").with_date("2010-04-01"),
        ];
        let ds = Dataset::from_records(matches, Vec::new(), DeliverySchema::default());
        let mut out = Vec::new();
        run_session(&ds, "2
deccan chargers
mumbai indians
".as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(!text.contains("No match for"));
        assert!(text.contains("Head-to-Head: Sunrisers Hyderabad vs. Mumbai Indians"));
    }

    #[test]
    fn test_venue_by_index_and_listing() {
        let text = run("3\n?\nnowhere\n1\n");
        assert!(text.contains("   1) MA Chidambaram Stadium"));
        assert!(text.contains("No match for 'nowhere'"));
        assert!(text.contains("wins the match 0.00% of the time"));
    }

    #[test]
    fn test_unknown_mode_and_eof() {
        let text = run("bowling\n");
        assert!(text.contains("Unknown analysis type 'bowling'"));
    }
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use std::path::{Path, PathBuf};

use cricket_insights::analysis::{self, HeadToHead};
use cricket_insights::explore;
use cricket_insights::render;
use cricket_insights::selection::Choices;
use cricket_insights::xlsx;
use cricket_insights::{load_dataset, Dataset};

#[derive(Parser)]
#[command(name = "cricket-insights")]
#[command(about = "Player, head-to-head and venue insights from IPL match records", long_about = None)]
struct Cli {
    /// Match table (one row per fixture)
    #[arg(long, env = "CRICKET_MATCHES_CSV", default_value = "matches.csv", global = true)]
    matches: PathBuf,

    /// Delivery table (one row per ball)
    #[arg(long, env = "CRICKET_DELIVERIES_CSV", default_value = "deliveries.csv", global = true)]
    deliveries: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Batting summary for one player
    Player {
        /// Batter name (defaults to the first in alphabetical order)
        name: Option<String>,

        /// Also write the report to an Excel workbook
        #[arg(long)]
        xlsx: Option<PathBuf>,
    },

    /// Head-to-head record between two teams
    Teams {
        /// First team (defaults to the first team alphabetically)
        team_a: Option<String>,

        /// Second team (defaults to the second team alphabetically)
        team_b: Option<String>,

        /// Also write the report to an Excel workbook
        #[arg(long)]
        xlsx: Option<PathBuf>,
    },

    /// Toss decisions and toss advantage at a venue
    Venue {
        /// Venue name (defaults to the first venue alphabetically)
        name: Option<String>,

        /// Also write the report to an Excel workbook
        #[arg(long)]
        xlsx: Option<PathBuf>,
    },

    /// List the values a selection can take
    List {
        #[arg(value_enum)]
        what: ListKind,
    },

    /// Display information about the loaded dataset
    Info,

    /// Pick modes and selections interactively
    Explore,
}

#[derive(Clone, Copy, ValueEnum)]
enum ListKind {
    Players,
    Teams,
    Venues,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let dataset = load(&cli.matches, &cli.deliveries)?;

    match cli.command {
        Commands::Player { name, xlsx } => {
            player(&dataset, name.as_deref(), xlsx.as_deref())?;
        }
        Commands::Teams { team_a, team_b, xlsx } => {
            teams(&dataset, team_a.as_deref(), team_b.as_deref(), xlsx.as_deref())?;
        }
        Commands::Venue { name, xlsx } => {
            venue(&dataset, name.as_deref(), xlsx.as_deref())?;
        }
        Commands::List { what } => {
            list(&dataset, what);
        }
        Commands::Info => {
            println!("{}", dataset.summary());
        }
        Commands::Explore => {
            let stdin = io::stdin();
            explore::run_session(&dataset, stdin.lock(), &mut io::stdout())
                .context("Interactive session failed")?;
        }
    }

    Ok(())
}

fn load(matches: &Path, deliveries: &Path) -> Result<Dataset> {
    load_dataset(matches, deliveries).with_context(|| {
        format!(
            "Failed to load dataset from {} and {}",
            matches.display(),
            deliveries.display()
        )
    })
}

fn player(dataset: &Dataset, name: Option<&str>, xlsx_path: Option<&Path>) -> Result<()> {
    let choices = Choices::from_dataset(dataset);
    let player = match name {
        Some(n) => choices.resolve_player(n)?,
        None => choices
            .default_player()
            .map(String::from)
            .context("Dataset has no batters")?,
    };

    let report = analysis::player_performance(dataset, &player);
    print!("{}", render::render_player(&report));

    if let Some(path) = xlsx_path {
        println!("Writing Excel file: {}", path.display());
        xlsx::write_player_report(&report, path).context("Failed to write Excel file")?;
    }
    Ok(())
}

fn teams(
    dataset: &Dataset,
    team_a: Option<&str>,
    team_b: Option<&str>,
    xlsx_path: Option<&Path>,
) -> Result<()> {
    let choices = Choices::from_dataset(dataset);
    let (first, second) = choices.default_teams();

    let resolve = |given: Option<&str>, fallback: Option<&str>| -> Result<String> {
        match given {
            Some(t) => Ok(choices.resolve_team(t)?),
            None => fallback
                .map(String::from)
                .context("Dataset needs at least two teams"),
        }
    };
    let team_a = resolve(team_a, first)?;
    let team_b = resolve(team_b, second)?;

    let outcome = analysis::head_to_head(dataset, &team_a, &team_b);
    print!("{}", render::render_head_to_head(&outcome));

    if let (Some(path), HeadToHead::Summary(report)) = (xlsx_path, &outcome) {
        println!("Writing Excel file: {}", path.display());
        xlsx::write_head_to_head_report(report, path).context("Failed to write Excel file")?;
    }
    Ok(())
}

fn venue(dataset: &Dataset, name: Option<&str>, xlsx_path: Option<&Path>) -> Result<()> {
    let choices = Choices::from_dataset(dataset);
    let venue = match name {
        Some(n) => choices.resolve_venue(n)?,
        None => choices
            .default_venue()
            .map(String::from)
            .context("Dataset has no venues")?,
    };

    let report = analysis::venue_insights(dataset, &venue);
    print!("{}", render::render_venue(&report));

    if let Some(path) = xlsx_path {
        println!("Writing Excel file: {}", path.display());
        xlsx::write_venue_report(&report, path).context("Failed to write Excel file")?;
    }
    Ok(())
}

fn list(dataset: &Dataset, what: ListKind) {
    let choices = Choices::from_dataset(dataset);
    let values = match what {
        ListKind::Players => &choices.players,
        ListKind::Teams => &choices.teams,
        ListKind::Venues => &choices.venues,
    };
    for value in values {
        println!("{}", value);
    }
}

//! Plain-text rendering of analysis reports for the terminal

use crate::analysis::{HeadToHead, HeadToHeadReport, PlayerReport, RecentMatch, VenueReport};

/// Total width of banners and rules
const WIDTH: usize = 78;
/// Longest bar drawn in a chart
const BAR_WIDTH: usize = 40;

/// Append `text` as one line
fn line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

fn banner(out: &mut String, title: &str) {
    line(out, &format!("{:=^w$}", format!(" {} ", title), w = WIDTH));
}

fn rule(out: &mut String) {
    line(out, &"-".repeat(WIDTH));
}

fn metric(out: &mut String, label: &str, value: &str) {
    line(out, &format!("{:<22} {}", format!("{}:", label), value));
}

/// Shorten a label to `max_len` characters, marking the cut with "..."
pub fn truncate_label(label: &str, max_len: usize) -> String {
    if label.chars().count() <= max_len {
        label.to_string()
    } else {
        let kept: String = label.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Horizontal bar chart, bars scaled to the largest value
pub fn bar_chart(rows: &[(String, u64)]) -> String {
    let mut out = String::new();
    let max = rows.iter().map(|(_, v)| *v).max().unwrap_or(0);
    let label_width = rows
        .iter()
        .map(|(l, _)| l.chars().count())
        .max()
        .unwrap_or(0)
        .min(24);

    for (label, value) in rows {
        let len = if max == 0 {
            0
        } else {
            (*value as f64 / max as f64 * BAR_WIDTH as f64).round() as usize
        };
        line(
            &mut out,
            &format!(
                "{:<lw$} |{:<bw$} {}",
                truncate_label(label, label_width),
                "#".repeat(len),
                value,
                lw = label_width,
                bw = BAR_WIDTH
            ),
        );
    }
    out
}

/// Pie chart as label, count and one-decimal percentage rows
pub fn pie_chart(rows: &[(String, usize)]) -> String {
    let mut out = String::new();
    let total: usize = rows.iter().map(|(_, c)| *c).sum();
    for (label, count) in rows {
        let pct = if total == 0 {
            0.0
        } else {
            *count as f64 / total as f64 * 100.0
        };
        line(&mut out, &format!("  {:<10} {:>6} {:>7.1}%", label, count, pct));
    }
    out
}

/// Whole margins print without a fractional part
pub fn format_margin(margin: Option<f64>) -> String {
    match margin {
        Some(m) if m.fract() == 0.0 => format!("{:.0}", m),
        Some(m) => format!("{}", m),
        None => "-".to_string(),
    }
}

pub fn format_average(average: Option<f64>) -> String {
    match average {
        Some(avg) => format!("{:.2}", avg),
        None => "N/A".to_string(),
    }
}

pub fn render_player(report: &PlayerReport) -> String {
    let mut out = String::new();
    banner(&mut out, &format!("Player Performance: {}", report.player));

    metric(&mut out, "Total Runs", &report.total_runs.to_string());
    metric(&mut out, "Strike Rate", &format!("{:.2}", report.strike_rate));
    metric(&mut out, "Batting Average", &format_average(report.average));
    metric(&mut out, "Dismissals", &report.dismissals.to_string());
    if !report.wides_excluded {
        line(
            &mut out,
            "(no wide indicator in the input; balls faced include wides)",
        );
    }

    out.push('\n');
    line(&mut out, &format!("Runs Scored by {} per Season", report.player));
    rule(&mut out);
    if report.runs_per_season.is_empty() {
        line(&mut out, "No deliveries faced");
    } else {
        out.push_str(&bar_chart(&report.runs_per_season));
    }
    out
}

fn recent_row(out: &mut String, m: &RecentMatch) {
    line(
        out,
        &format!(
            "{:<12} {:<28} {:<10} {:>6}  {}",
            m.date,
            truncate_label(m.winner.as_deref().unwrap_or("-"), 28),
            m.result.as_deref().unwrap_or("-"),
            format_margin(m.result_margin),
            m.venue.as_deref().unwrap_or("-")
        ),
    );
}

fn render_summary(report: &HeadToHeadReport) -> String {
    let mut out = String::new();
    banner(
        &mut out,
        &format!("Head-to-Head: {} vs. {}", report.team_a, report.team_b),
    );
    metric(&mut out, "Total Matches Played", &report.total_matches.to_string());

    out.push('\n');
    line(&mut out, "Win Comparison");
    rule(&mut out);
    out.push_str(&bar_chart(&[
        (report.team_a.clone(), report.team_a_wins as u64),
        (report.team_b.clone(), report.team_b_wins as u64),
    ]));
    if report.undecided() > 0 {
        line(&mut out, &format!("({} without a winner)", report.undecided()));
    }

    out.push('\n');
    line(&mut out, &format!("Last {} Matches", report.recent.len()));
    rule(&mut out);
    line(
        &mut out,
        &format!(
            "{:<12} {:<28} {:<10} {:>6}  {}",
            "Date", "Winner", "Result", "Margin", "Venue"
        ),
    );
    for m in &report.recent {
        recent_row(&mut out, m);
    }
    out
}

pub fn render_head_to_head(outcome: &HeadToHead) -> String {
    match outcome {
        HeadToHead::SameTeam(_) => format!("Warning: {}\n", HeadToHead::SAME_TEAM_WARNING),
        HeadToHead::Summary(report) => render_summary(report),
    }
}

pub fn render_venue(report: &VenueReport) -> String {
    let mut out = String::new();
    banner(&mut out, &format!("Venue Insights: {}", report.venue));
    metric(&mut out, "Total Matches Hosted", &report.total_matches.to_string());

    out.push('\n');
    line(&mut out, "Toss Decisions at this Venue");
    rule(&mut out);
    let rows: Vec<(String, usize)> = report
        .toss_decisions
        .iter()
        .map(|(d, c)| (d.to_string(), *c))
        .collect();
    out.push_str(&pie_chart(&rows));

    out.push('\n');
    line(&mut out, &report.narrative());
    out
}

use crate::analysis::{HeadToHeadReport, PlayerReport, VenueReport};
use crate::error::Result;
use crate::render::format_average;
use rust_xlsxwriter::{
    Chart, ChartDataLabel, ChartType, Format, FormatAlign, FormatBorder, Workbook, Worksheet,
};
use std::path::Path;

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_border_bottom(FormatBorder::Thin)
}

fn label_format() -> Format {
    Format::new().set_bold()
}

/// Write a header row starting at column 0
fn write_headers(sheet: &mut Worksheet, row: u32, headers: &[&str]) -> Result<()> {
    let format = header_format();
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(row, col as u16, *header, &format)?;
    }
    Ok(())
}

/// Last data row of a block that starts at `first` and holds `len` rows
fn last_row(first: u32, len: usize) -> u32 {
    first + len as u32 - 1
}

/// Write a player report with a runs-per-season column chart
pub fn write_player_report(report: &PlayerReport, path: &Path) -> Result<()> {
    const SHEET: &str = "Player";
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET)?;

    sheet.set_column_width(0, 18)?; // Label / Season
    sheet.set_column_width(1, 14)?; // Value / Runs

    let label = label_format();
    sheet.write_string_with_format(0, 0, "Player", &label)?;
    sheet.write_string(0, 1, &report.player)?;
    sheet.write_string_with_format(1, 0, "Total Runs", &label)?;
    sheet.write_number(1, 1, report.total_runs as f64)?;
    sheet.write_string_with_format(2, 0, "Strike Rate", &label)?;
    sheet.write_number(2, 1, report.strike_rate)?;
    sheet.write_string_with_format(3, 0, "Batting Average", &label)?;
    match report.average {
        Some(avg) => sheet.write_number(3, 1, avg)?,
        None => sheet.write_string(3, 1, &format_average(None))?,
    };
    sheet.write_string_with_format(4, 0, "Dismissals", &label)?;
    sheet.write_number(4, 1, report.dismissals as f64)?;
    sheet.write_string_with_format(5, 0, "Balls Faced", &label)?;
    sheet.write_number(5, 1, report.balls_faced as f64)?;

    const TABLE_ROW: u32 = 7;
    write_headers(sheet, TABLE_ROW, &["Season", "Runs"])?;
    for (i, (season, runs)) in report.runs_per_season.iter().enumerate() {
        let row = TABLE_ROW + 1 + i as u32;
        sheet.write_string(row, 0, season)?;
        sheet.write_number(row, 1, *runs as f64)?;
    }

    if !report.runs_per_season.is_empty() {
        let last = last_row(TABLE_ROW + 1, report.runs_per_season.len());
        let mut chart = Chart::new(ChartType::Column);
        chart
            .add_series()
            .set_name("Runs")
            .set_categories((SHEET, TABLE_ROW + 1, 0, last, 0))
            .set_values((SHEET, TABLE_ROW + 1, 1, last, 1));
        chart
            .title()
            .set_name(&format!("Seasonal Performance of {}", report.player));
        chart.x_axis().set_name("Season");
        chart.y_axis().set_name("Total Runs");
        chart.legend().set_hidden();
        sheet.insert_chart(0, 3, &chart)?;
    }

    workbook.save(path)?;
    Ok(())
}

/// Write a head-to-head report with a win comparison chart and recent fixtures
pub fn write_head_to_head_report(report: &HeadToHeadReport, path: &Path) -> Result<()> {
    const SHEET: &str = "HeadToHead";
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET)?;

    sheet.set_column_width(0, 22)?; // Label / Team / Date
    sheet.set_column_width(1, 28)?; // Winner
    sheet.set_column_width(2, 12)?; // Result
    sheet.set_column_width(3, 8)?; // Margin
    sheet.set_column_width(4, 40)?; // Venue

    let label = label_format();
    sheet.write_string_with_format(0, 0, "Total Matches Played", &label)?;
    sheet.write_number(0, 1, report.total_matches as f64)?;

    write_headers(sheet, 2, &["Team", "Wins"])?;
    sheet.write_string(3, 0, &report.team_a)?;
    sheet.write_number(3, 1, report.team_a_wins as f64)?;
    sheet.write_string(4, 0, &report.team_b)?;
    sheet.write_number(4, 1, report.team_b_wins as f64)?;

    let mut chart = Chart::new(ChartType::Column);
    chart
        .add_series()
        .set_name("Wins")
        .set_categories((SHEET, 3, 0, 4, 0))
        .set_values((SHEET, 3, 1, 4, 1));
    chart.title().set_name("Win Comparison");
    chart.legend().set_hidden();
    sheet.insert_chart(0, 6, &chart)?;

    const TABLE_ROW: u32 = 6;
    write_headers(sheet, TABLE_ROW, &["Date", "Winner", "Result", "Margin", "Venue"])?;
    for (i, m) in report.recent.iter().enumerate() {
        let row = TABLE_ROW + 1 + i as u32;
        sheet.write_string(row, 0, &m.date)?;
        if let Some(ref winner) = m.winner {
            sheet.write_string(row, 1, winner)?;
        }
        if let Some(ref result) = m.result {
            sheet.write_string(row, 2, result)?;
        }
        if let Some(margin) = m.result_margin {
            sheet.write_number(row, 3, margin)?;
        }
        if let Some(ref venue) = m.venue {
            sheet.write_string(row, 4, venue)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}

/// Write a venue report with a toss-decision pie chart
pub fn write_venue_report(report: &VenueReport, path: &Path) -> Result<()> {
    const SHEET: &str = "Venue";
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET)?;

    sheet.set_column_width(0, 22)?; // Label / Decision
    sheet.set_column_width(1, 40)?; // Value / Matches
    sheet.set_column_width(2, 10)?; // Share

    let label = label_format();
    sheet.write_string_with_format(0, 0, "Venue", &label)?;
    sheet.write_string(0, 1, &report.venue)?;
    sheet.write_string_with_format(1, 0, "Total Matches Hosted", &label)?;
    sheet.write_number(1, 1, report.total_matches as f64)?;
    sheet.write_string_with_format(2, 0, "Toss Advantage %", &label)?;
    sheet.write_number(2, 1, report.toss_advantage_rate)?;

    const TABLE_ROW: u32 = 4;
    write_headers(sheet, TABLE_ROW, &["Toss Decision", "Matches", "Share %"])?;
    let share_format = Format::new().set_num_format("0.0");
    for (i, (decision, count)) in report.toss_decisions.iter().enumerate() {
        let row = TABLE_ROW + 1 + i as u32;
        sheet.write_string(row, 0, decision.as_str())?;
        sheet.write_number(row, 1, *count as f64)?;
        sheet.write_number_with_format(row, 2, report.share(*count), &share_format)?;
    }

    let narrative_row = TABLE_ROW + 2 + report.toss_decisions.len() as u32;
    sheet.write_string(narrative_row, 0, &report.narrative())?;

    if !report.toss_decisions.is_empty() {
        let last = last_row(TABLE_ROW + 1, report.toss_decisions.len());
        let mut chart = Chart::new(ChartType::Pie);
        chart
            .add_series()
            .set_name("Toss Decisions")
            .set_categories((SHEET, TABLE_ROW + 1, 0, last, 0))
            .set_values((SHEET, TABLE_ROW + 1, 1, last, 1))
            .set_data_label(ChartDataLabel::new().show_percentage());
        chart.title().set_name("Toss Decisions at this Venue");
        sheet.insert_chart(0, 4, &chart)?;
    }

    workbook.save(path)?;
    Ok(())
}

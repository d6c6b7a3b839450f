use super::tables::*;
use super::{Dataset, DeliverySchema};
use crate::error::{InsightsError, Result};
use crate::model::{DeliveryRecord, MatchRecord};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Check that every required column appears in the header row
fn check_columns(
    headers: &StringRecord,
    table: &'static str,
    required: &[&'static str],
) -> Result<()> {
    for &column in required {
        if !headers.iter().any(|h| h == column) {
            return Err(InsightsError::MissingColumn { table, column });
        }
    }
    Ok(())
}

fn csv_reader<R: Read>(source: R) -> csv::Reader<R> {
    ReaderBuilder::new().trim(Trim::All).from_reader(source)
}

/// Parse the match table from any CSV source
pub fn parse_matches<R: Read>(source: R) -> Result<Vec<MatchRecord>> {
    let mut reader = csv_reader(source);
    let headers = reader.headers()?.clone();
    check_columns(&headers, "match", &MATCH_COLUMNS)?;

    let mut matches = Vec::new();
    for (idx, result) in reader.deserialize::<MatchRow>().enumerate() {
        let row = result?;
        matches.push(row.into_record(idx + 1)?);
    }
    Ok(matches)
}

/// Parse the delivery table from any CSV source.
///
/// The returned schema records whether the optional `wide_runs` column was
/// present; without it every delivery counts as a ball faced.
pub fn parse_deliveries<R: Read>(source: R) -> Result<(Vec<DeliveryRecord>, DeliverySchema)> {
    let mut reader = csv_reader(source);
    let headers = reader.headers()?.clone();
    check_columns(&headers, "delivery", &DELIVERY_COLUMNS)?;

    let schema = DeliverySchema {
        has_wide_runs: headers.iter().any(|h| h == WIDE_RUNS_COLUMN),
    };
    if !schema.has_wide_runs {
        log::warn!(
            "Delivery table has no '{}' column; every delivery will count as a ball faced",
            WIDE_RUNS_COLUMN
        );
    }

    let mut deliveries = Vec::new();
    for (idx, result) in reader.deserialize::<DeliveryRow>().enumerate() {
        let row = result?;
        deliveries.push(row.into_record(idx + 1)?);
    }
    Ok((deliveries, schema))
}

/// Read both tables from disk and build the session dataset
pub fn load_dataset(matches_path: &Path, deliveries_path: &Path) -> Result<Dataset> {
    let matches = parse_matches(File::open(matches_path)?)?;
    log::info!("Read {} matches from {}", matches.len(), matches_path.display());

    let (deliveries, schema) = parse_deliveries(File::open(deliveries_path)?)?;
    log::info!(
        "Read {} deliveries from {}",
        deliveries.len(),
        deliveries_path.display()
    );

    let dataset = Dataset::from_records(matches, deliveries, schema);
    log::info!("Joined {} deliveries", dataset.joined().len());
    Ok(dataset)
}

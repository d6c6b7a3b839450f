use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsightsError {
    #[error("Missing column '{column}' in {table} table")]
    MissingColumn { table: &'static str, column: &'static str },

    #[error("Malformed {table} row {row}: {message}")]
    Malformed {
        table: &'static str,
        row: usize,
        message: String,
    },

    #[error("Unknown player: {0}")]
    UnknownPlayer(String),

    #[error("Unknown team: {0}")]
    UnknownTeam(String),

    #[error("Unknown venue: {0}")]
    UnknownVenue(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excel error: {0}")]
    Excel(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T> = std::result::Result<T, InsightsError>;

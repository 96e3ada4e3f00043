use thiserror::Error;

/// Errors raised by the conduct ledger and its CSV boundary.
#[derive(Debug, Error)]
pub enum ConductError {
    /// A draft record was rejected at registration.
    #[error("invalid record: {reason}")]
    InvalidRecord { reason: String },

    /// A CSV data row failed to load.
    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: Box<ConductError>,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConductError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            reason: reason.into(),
        }
    }

    pub fn at_row(row: usize, source: ConductError) -> Self {
        Self::Row {
            row,
            source: Box::new(source),
        }
    }
}

pub type ConductResult<T> = Result<T, ConductError>;

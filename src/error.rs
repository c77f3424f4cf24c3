use crate::domain::validation::ValidationReport;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("payment request rejected: {0}")]
    Validation(ValidationReport),
    #[error("failed to launch authorization flow: {0}")]
    Launch(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;

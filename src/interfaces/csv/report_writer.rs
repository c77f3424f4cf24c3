use crate::domain::outcome::TransactionOutcome;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// One row of the attempt report: which reference resolved to which outcome.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct AttemptRecord {
    pub reference: String,
    pub outcome: TransactionOutcome,
}

/// Writes the per-attempt outcome report as CSV.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(dest: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(dest),
        }
    }

    /// Serializes all records and flushes the destination.
    pub fn write_attempts(&mut self, attempts: Vec<AttemptRecord>) -> Result<()> {
        for attempt in attempts {
            self.writer.serialize(attempt)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

use crate::domain::ledger::DebtAction;
use crate::error::{DebtError, Result};
use std::io::Read;

/// Reads debt actions from a CSV source.
///
/// Wraps `csv::Reader` and provides an iterator over `Result<DebtAction>`,
/// trimming whitespace and tolerating short rows (absent `metodo`/`nota`).
pub struct ActionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ActionReader<R> {
    /// Creates a new `ActionReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes actions, so
    /// large action streams never load into memory at once.
    pub fn actions(self) -> impl Iterator<Item = Result<DebtAction>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(DebtError::from))
    }
}

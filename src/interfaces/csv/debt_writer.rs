use crate::domain::debt::Debt;
use crate::error::Result;
use std::io::Write;

/// Writes the final state of the debt book as CSV.
pub struct DebtWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> DebtWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_debts(&mut self, debts: Vec<Debt>) -> Result<()> {
        for debt in debts {
            self.writer.serialize(debt)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

use crate::domain::money::{Amount, Balance};
use crate::domain::program::LoyaltyProgram;
use crate::domain::transaction::TransactionInfo;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// One line of the cashback report.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct CashbackRecord {
    pub first_name: String,
    pub last_name: String,
    pub loyalty_program_name: LoyaltyProgram,
    pub transaction_sum: Amount,
    pub cashback: Balance,
}

impl CashbackRecord {
    pub fn new(tx: TransactionInfo, cashback: Balance) -> Self {
        Self {
            first_name: tx.first_name,
            last_name: tx.last_name,
            loyalty_program_name: tx.loyalty_program_name,
            transaction_sum: tx.transaction_sum,
            cashback,
        }
    }
}

/// Writes cashback reports to any `Write` sink, as CSV or as a JSON array.
pub struct CashbackWriter<W: Write> {
    sink: W,
}

impl<W: Write> CashbackWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn write_csv(self, records: impl IntoIterator<Item = CashbackRecord>) -> Result<()> {
        let mut writer = csv::Writer::from_writer(self.sink);
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn write_json(mut self, records: impl IntoIterator<Item = CashbackRecord>) -> Result<()> {
        let records: Vec<CashbackRecord> = records.into_iter().collect();
        serde_json::to_writer_pretty(&mut self.sink, &records)?;
        writeln!(self.sink)?;
        Ok(())
    }
}

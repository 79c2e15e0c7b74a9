#![allow(dead_code)]

use std::io::Error;
use std::path::Path;

pub const HEADER: [&str; 6] = [
    "loyalty_program_name",
    "transaction_sum",
    "mcc_code",
    "first_name",
    "last_name",
    "cashback_total_value",
];

/// Writes a transactions CSV with the standard header followed by `rows`.
pub fn write_transactions(path: &Path, rows: &[[&str; 6]]) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes `rows` BLACK-program transactions of 100.00 each.
pub fn generate_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    wtr.write_record(HEADER)?;

    for i in 1..=rows {
        wtr.write_record([
            "BLACK",
            "100.00",
            "1111",
            "Ivan",
            &format!("Ivanov{i}"),
            "0",
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

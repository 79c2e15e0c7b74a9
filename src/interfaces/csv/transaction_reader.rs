use crate::domain::transaction::TransactionInfo;
use crate::error::{CashbackError, Result};
use std::io::Read;

/// Reads transactions from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<TransactionInfo>`.
/// It handles whitespace trimming and flexible record lengths automatically.
pub struct TransactionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> TransactionReader<R> {
    /// Creates a new `TransactionReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes transactions.
    pub fn transactions(self) -> impl Iterator<Item = Result<TransactionInfo>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CashbackError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cashback::LoyaltyCashbackCalculator;
    use crate::domain::money::Balance;
    use crate::domain::program::LoyaltyProgram;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    const HEADER: &str =
        "loyalty_program_name, transaction_sum, mcc_code, first_name, last_name, cashback_total_value";

    #[test]
    fn test_reader_valid_stream() {
        let data = format!(
            "{HEADER}\nBLACK, 100.0, 1111, Ivan, Ivanov, 0\nBEER, 50.5, 5921, Oleg, Olegov, 10"
        );
        let reader = TransactionReader::new(data.as_bytes());
        let results: Vec<Result<TransactionInfo>> = reader.transactions().collect();

        assert_eq!(results.len(), 2);
        let tx1 = results[0].as_ref().unwrap();
        assert_eq!(tx1.loyalty_program_name, LoyaltyProgram::Black);
        assert_eq!(tx1.transaction_sum.value(), dec!(100.0));
        let tx2 = results[1].as_ref().unwrap();
        assert_eq!(tx2.mcc_code, 5921);
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = format!("{HEADER}\nBLACK, not_a_number, 1111, Ivan, Ivanov, 0");
        let reader = TransactionReader::new(data.as_bytes());
        let results: Vec<Result<TransactionInfo>> = reader.transactions().collect();

        assert!(results[0].is_err());
    }

    #[test]
    fn test_reader_missing_field() {
        let data = format!("{HEADER}\nBLACK, 10, 1111, Ivan");
        let reader = TransactionReader::new(data.as_bytes());
        let results: Vec<Result<TransactionInfo>> = reader.transactions().collect();

        assert!(matches!(results[0], Err(CashbackError::CsvError(_))));
    }

    #[test]
    fn test_reader_keeps_fraction_deciding_the_bonus() {
        let data = format!(
            "{HEADER}\nGOLD, 666.0000000000000001, 1111, Ivan, Ivanov, 0\nGOLD, 666.00, 1111, Ivan, Ivanov, 0"
        );
        let reader = TransactionReader::new(data.as_bytes());
        let results: Vec<TransactionInfo> = reader
            .transactions()
            .map(|tx| tx.unwrap())
            .collect();
        let calculator = LoyaltyCashbackCalculator::new();
        let today = NaiveDate::from_ymd_opt(2024, 10, 15).unwrap();

        assert_eq!(
            results[0].transaction_sum.value(),
            dec!(666.0000000000000001)
        );
        assert_eq!(
            calculator.calculate_cashback_on(&results[0], today),
            Balance::ZERO
        );
        assert_eq!(
            calculator.calculate_cashback_on(&results[1], today),
            Balance::new(dec!(6.66))
        );
    }

    #[test]
    fn test_reader_keeps_input_scale() {
        let data = format!("{HEADER}\nGOLD, 1234567890123456.78, 1111, Ivan, Ivanov, 0.10");
        let reader = TransactionReader::new(data.as_bytes());
        let tx = reader.transactions().next().unwrap().unwrap();

        assert_eq!(tx.transaction_sum.value().to_string(), "1234567890123456.78");
        assert_eq!(tx.cashback_total_value.0.to_string(), "0.10");
    }
}

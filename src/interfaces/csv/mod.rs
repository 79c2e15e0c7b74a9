pub mod cashback_writer;
pub mod transaction_reader;

use cashback_engine::application::cashback::LoyaltyCashbackCalculator;
use cashback_engine::application::masker::CharRangeMasker;
use cashback_engine::domain::ports::{CardNumberMaskerBox, CashbackCalculatorBox, FixedClock};
use cashback_engine::interfaces::csv::cashback_writer::{CashbackRecord, CashbackWriter};
use cashback_engine::interfaces::csv::transaction_reader::TransactionReader;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute cashback for every transaction of a CSV file
    Cashback {
        /// Input transactions CSV file
        input: PathBuf,

        /// Evaluate month-dependent rules as of this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        today: Option<NaiveDate>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
    },
    /// Mask part of a card number
    Mask {
        card_number: String,

        #[arg(long, default_value_t = '*')]
        mask_char: char,

        #[arg(long, default_value_t = 0)]
        start: usize,

        /// Exclusive end of the masked range. Defaults to keeping the last four characters.
        #[arg(long)]
        end: Option<usize>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

/// Logs go to stderr so they never mix with the report on stdout.
///
/// `RUST_LOG` overrides the default `warn` filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Cashback {
            input,
            today,
            format,
        } => {
            let calculator: CashbackCalculatorBox = match today {
                Some(date) => Box::new(LoyaltyCashbackCalculator::with_clock(FixedClock(date))),
                None => Box::new(LoyaltyCashbackCalculator::new()),
            };

            let file = File::open(input).into_diagnostic()?;
            let reader = TransactionReader::new(file);
            let mut records = Vec::new();
            for tx_result in reader.transactions() {
                match tx_result {
                    Ok(tx) => {
                        let cashback = calculator.calculate_cashback(&tx);
                        records.push(CashbackRecord::new(tx, cashback));
                    }
                    Err(e) => {
                        eprintln!("Error reading transaction: {}", e);
                    }
                }
            }

            let stdout = io::stdout();
            let writer = CashbackWriter::new(stdout.lock());
            match format {
                OutputFormat::Csv => writer.write_csv(records).into_diagnostic()?,
                OutputFormat::Json => writer.write_json(records).into_diagnostic()?,
            }
        }
        Command::Mask {
            card_number,
            mask_char,
            start,
            end,
        } => {
            let masker: CardNumberMaskerBox = Box::new(CharRangeMasker::new());
            let end = end.unwrap_or_else(|| card_number.chars().count().saturating_sub(4));
            let masked = masker
                .mask(&card_number, mask_char, start, end)
                .into_diagnostic()?;
            println!("{masked}");
        }
    }

    Ok(())
}

use super::money::Balance;
use super::transaction::TransactionInfo;
use crate::error::Result;
use chrono::{Local, NaiveDate};

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

pub trait CashbackCalculator: Send + Sync {
    fn calculate_cashback(&self, transaction: &TransactionInfo) -> Balance;
}

pub trait CardNumberMasker: Send + Sync {
    /// Replaces the characters in `start..end` with `mask_char`.
    fn mask(&self, card_number: &str, mask_char: char, start: usize, end: usize) -> Result<String>;
}

pub type CashbackCalculatorBox = Box<dyn CashbackCalculator>;
pub type CardNumberMaskerBox = Box<dyn CardNumberMasker>;

/// Reads the local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

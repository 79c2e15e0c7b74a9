use crate::domain::money::{Amount, Balance};
use crate::domain::ports::{CashbackCalculator, Clock, SystemClock};
use crate::domain::program::{
    BONUS_MULTIPLE, BONUS_VALUE, LoyaltyProgram, MAX_CASHBACK, MCC_BEER, MCC_SOFTWARE, OLEG,
    OLEGOV, month_initial,
};
use crate::domain::transaction::TransactionInfo;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use tracing::{debug, warn};

/// Rule engine computing the cashback increment for one transaction.
///
/// The BEER program depends on the current month, which is read from the injected
/// [`Clock`]. Use [`LoyaltyCashbackCalculator::calculate_cashback_on`] to evaluate the
/// rules for an explicit date.
#[derive(Debug, Clone, Default)]
pub struct LoyaltyCashbackCalculator<C: Clock = SystemClock> {
    clock: C,
}

impl LoyaltyCashbackCalculator {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> LoyaltyCashbackCalculator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Computes the cashback as if `today` were the current date.
    ///
    /// The result is the program's base cashback plus the multiple-of-666 bonus, clamped
    /// so the account never goes past [`MAX_CASHBACK`], rounded to cents.
    pub fn calculate_cashback_on(&self, tx: &TransactionInfo, today: NaiveDate) -> Balance {
        let sum = tx.transaction_sum;
        let base = match &tx.loyalty_program_name {
            LoyaltyProgram::Black => sum.percent(dec!(1)),
            LoyaltyProgram::All => all_program(tx),
            LoyaltyProgram::Beer => beer_program(tx, today),
            LoyaltyProgram::Unknown(name) => {
                debug!(program = %name, "Unknown loyalty program, no base cashback");
                Balance::ZERO
            }
        };

        let bonus = if is_multiple_of(sum, BONUS_MULTIPLE) {
            Balance::new(BONUS_VALUE)
        } else {
            Balance::ZERO
        };

        apply_cap(tx.cashback_total_value, base + bonus).round_to_cents()
    }
}

impl<C: Clock> CashbackCalculator for LoyaltyCashbackCalculator<C> {
    fn calculate_cashback(&self, transaction: &TransactionInfo) -> Balance {
        self.calculate_cashback_on(transaction, self.clock.today())
    }
}

fn all_program(tx: &TransactionInfo) -> Balance {
    if tx.mcc_code != MCC_SOFTWARE {
        return Balance::ZERO;
    }
    let Some(minor_units) = to_minor_units(tx.transaction_sum) else {
        return Balance::ZERO;
    };
    if !is_near_palindrome(&minor_units.to_string()) {
        return Balance::ZERO;
    }

    let multiple = lcm(
        tx.first_name.chars().count() as u64,
        tx.last_name.chars().count() as u64,
    );
    let percent = Decimal::from(multiple) / Decimal::ONE_THOUSAND;
    debug!(lcm = multiple, %percent, "ALL program applies");
    tx.transaction_sum.percent(percent)
}

fn beer_program(tx: &TransactionInfo, today: NaiveDate) -> Balance {
    if tx.mcc_code != MCC_BEER {
        return Balance::ZERO;
    }

    let first_name = tx.first_name.to_uppercase();
    let last_name = tx.last_name.to_uppercase();
    let initial = first_name.chars().next();
    let month = today.month0() as i32;

    // An empty first name has no initial and lands in the default tier.
    let percent = if first_name == OLEG && last_name == OLEGOV {
        dec!(10)
    } else if first_name == OLEG {
        dec!(7)
    } else if initial.is_some() && initial == month_initial(month) {
        dec!(5)
    } else if initial.is_some()
        && (initial == month_initial(month - 1) || initial == month_initial(month + 1))
    {
        dec!(3)
    } else {
        dec!(2)
    };

    debug!(%percent, month, "BEER program tier selected");
    tx.transaction_sum.percent(percent)
}

/// Truncated count of minor currency units, `None` if it does not fit.
fn to_minor_units(sum: Amount) -> Option<i128> {
    sum.value()
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|units| units.trunc().to_i128())
}

/// True when at most one symmetric pair of characters differs.
fn is_near_palindrome(digits: &str) -> bool {
    let chars: Vec<char> = digits.chars().collect();
    let n = chars.len();
    let mismatches = (0..n / 2).filter(|&i| chars[i] != chars[n - i - 1]).count();
    mismatches <= 1
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple; zero when either operand is zero.
pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

fn is_multiple_of(sum: Amount, multiple: Decimal) -> bool {
    sum.value() % multiple == Decimal::ZERO
}

fn apply_cap(total: Balance, increment: Balance) -> Balance {
    let max = Balance::new(MAX_CASHBACK);
    if total + increment <= max {
        return increment;
    }

    let remaining = max - total;
    if remaining < Balance::ZERO {
        warn!(%total, "Cashback total already exceeds the lifetime maximum");
        return Balance::ZERO;
    }
    remaining
}

use super::money::{Amount, Balance};
use super::program::LoyaltyProgram;
use serde::{Deserialize, Serialize};

/// A single card transaction as handed over by the payments side.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct TransactionInfo {
    pub loyalty_program_name: LoyaltyProgram,
    pub transaction_sum: Amount,
    pub mcc_code: u32,
    pub first_name: String,
    pub last_name: String,
    /// Cashback already accrued to this account.
    pub cashback_total_value: Balance,
}

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MCC_SOFTWARE: u32 = 5734;
pub const MCC_BEER: u32 = 5921;

/// Lifetime maximum of cashback per account.
pub const MAX_CASHBACK: Decimal = dec!(3000.0);

pub const BONUS_MULTIPLE: Decimal = dec!(666);
pub const BONUS_VALUE: Decimal = dec!(6.66);

pub const OLEG: &str = "ОЛЕГ";
pub const OLEGOV: &str = "ОЛЕГОВ";

/// Month names indexed by ordinal month (January is 0).
pub const MONTHS: [&str; 12] = [
    "ЯНВАРЬ",
    "ФЕВРАЛЬ",
    "МАРТ",
    "АПРЕЛЬ",
    "МАЙ",
    "ИЮНЬ",
    "ИЮЛЬ",
    "АВГУСТ",
    "СЕНТЯБРЬ",
    "ОКТЯБРЬ",
    "НОЯБРЬ",
    "ДЕКАБРЬ",
];

/// First letter of the month at `ordinal`, wrapping around the year in both directions.
pub fn month_initial(ordinal: i32) -> Option<char> {
    let index = ordinal.rem_euclid(12) as usize;
    MONTHS[index].chars().next()
}

/// Loyalty programs known to the engine.
///
/// Tags outside the known set are kept verbatim in `Unknown` and earn no base cashback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LoyaltyProgram {
    Black,
    All,
    Beer,
    Unknown(String),
}

impl LoyaltyProgram {
    pub fn name(&self) -> &str {
        match self {
            LoyaltyProgram::Black => "BLACK",
            LoyaltyProgram::All => "ALL",
            LoyaltyProgram::Beer => "BEER",
            LoyaltyProgram::Unknown(name) => name,
        }
    }
}

impl From<&str> for LoyaltyProgram {
    fn from(name: &str) -> Self {
        match name {
            "BLACK" => LoyaltyProgram::Black,
            "ALL" => LoyaltyProgram::All,
            "BEER" => LoyaltyProgram::Beer,
            other => LoyaltyProgram::Unknown(other.to_string()),
        }
    }
}

impl From<String> for LoyaltyProgram {
    fn from(name: String) -> Self {
        match name.as_str() {
            "BLACK" | "ALL" | "BEER" => LoyaltyProgram::from(name.as_str()),
            _ => LoyaltyProgram::Unknown(name),
        }
    }
}

impl From<LoyaltyProgram> for String {
    fn from(program: LoyaltyProgram) -> Self {
        match program {
            LoyaltyProgram::Unknown(name) => name,
            known => known.name().to_string(),
        }
    }
}

impl fmt::Display for LoyaltyProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_tags_are_exact() {
        assert_eq!(LoyaltyProgram::from("BLACK"), LoyaltyProgram::Black);
        assert_eq!(LoyaltyProgram::from("ALL"), LoyaltyProgram::All);
        assert_eq!(LoyaltyProgram::from("BEER"), LoyaltyProgram::Beer);
        assert_eq!(
            LoyaltyProgram::from("black"),
            LoyaltyProgram::Unknown("black".to_string())
        );
    }

    #[test]
    fn test_unknown_program_keeps_its_name() {
        let program = LoyaltyProgram::from("GOLD".to_string());
        assert_eq!(program.name(), "GOLD");
        assert_eq!(String::from(program), "GOLD");
    }

    #[test]
    fn test_month_initial_wraps() {
        assert_eq!(month_initial(0), Some('Я'));
        assert_eq!(month_initial(-1), Some('Д'));
        assert_eq!(month_initial(12), Some('Я'));
        assert_eq!(month_initial(8), Some('С'));
    }
}

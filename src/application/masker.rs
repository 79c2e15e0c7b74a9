use crate::domain::ports::CardNumberMasker;
use crate::error::{CashbackError, Result};

/// Masks a range of characters of a card number for display.
///
/// Positions are counted in `char`s. Positions past the end of the input do not exist
/// and are left alone, so an `end` beyond the length masks through the last character.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharRangeMasker;

impl CharRangeMasker {
    pub fn new() -> Self {
        Self
    }
}

impl CardNumberMasker for CharRangeMasker {
    fn mask(
        &self,
        card_number: &str,
        mask_char: char,
        start: usize,
        end: usize,
    ) -> Result<String> {
        if end < start {
            return Err(CashbackError::InvalidArgument(format!(
                "mask range end {end} is before start {start}"
            )));
        }
        if start == end {
            return Ok(card_number.to_string());
        }

        Ok(card_number
            .chars()
            .enumerate()
            .map(|(index, c)| {
                if (start..end).contains(&index) {
                    mask_char
                } else {
                    c
                }
            })
            .collect())
    }
}

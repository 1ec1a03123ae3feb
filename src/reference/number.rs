//! Complete reference number assembly

use crate::checksum::check_digit;
use crate::utils::{break_into_blocks, pad_left};
use crate::{
    FULL_REFERENCE_LENGTH, PLACEHOLDER, REFERENCE_GROUP_SIZE, REFERENCE_NUMBER_LENGTH,
};
use super::encoder::ReferenceEncoder;

impl ReferenceEncoder {
    /// Reference number as printed: customer ID, padded reference and check
    /// digit.
    ///
    /// * `formatted` - split into blocks of five separated by spaces
    /// * `fill_zeros` - pad to 26 digits when no banking customer ID is used
    ///
    /// A disabled reference number counts as empty. On a voided slip every
    /// character, including the check digit, is 'X', whatever was stored.
    pub fn complete_reference_number(&self, formatted: bool, fill_zeros: bool) -> String {
        let raw = self.reference_number.as_deref().unwrap_or_default();
        let void = self.is_voided();

        let mut number = if void {
            PLACEHOLDER.to_string().repeat(FULL_REFERENCE_LENGTH)
        } else if let Some(customer_id) = self.banking_customer_id.as_deref() {
            format!("{}{}", customer_id, pad_left(raw, REFERENCE_NUMBER_LENGTH, '0'))
        } else if fill_zeros {
            pad_left(raw, FULL_REFERENCE_LENGTH, '0')
        } else {
            raw.to_string()
        };

        let check = if void { PLACEHOLDER } else { check_digit(&number) };
        number.push(check);

        if formatted {
            break_into_blocks(&number, REFERENCE_GROUP_SIZE)
        } else {
            number
        }
    }

    /// Display form with zero fill, see [`complete_reference_number`](Self::complete_reference_number)
    pub fn formatted_reference_number(&self) -> String {
        self.complete_reference_number(true, true)
    }
}

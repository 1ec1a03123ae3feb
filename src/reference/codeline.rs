//! Code line assembly
//!
//! Layout, without any separators other than the literals shown:
//!
//! ```text
//! 01 0000394975 3 > 120000000000234478943216899 + 010001628 >
//! |  |          | |  |                          |  |        |
//! |  amount     | |  reference block            |  account  terminator
//! prefix        check                           "+ "
//! ```
//!
//! Slips without amount print `042>` in front of the reference block. Voided
//! slips print `X` in every amount and reference position; the account block
//! still names the issuing account.

use crate::checksum::check_digit;
use crate::utils::{pad_left, pad_right};
use crate::{
    ACCOUNT_BODY_LENGTH, ACCOUNT_PREFIX_LENGTH, AMOUNT_CENTS_LENGTH, AMOUNT_FRANCS_LENGTH,
    PLACEHOLDER, REFERENCE_BLOCK_LENGTH,
};
use super::encoder::ReferenceEncoder;

/// Amount prefix for slips with a preprinted amount
pub const PREFIX_WITH_AMOUNT: &str = "01";

/// Amount prefix for slips without amount
pub const PREFIX_WITHOUT_AMOUNT: &str = "04";

/// Check digit printed after [`PREFIX_WITHOUT_AMOUNT`]
pub const CHECK_WITHOUT_AMOUNT: char = '2';

impl ReferenceEncoder {
    /// Machine-readable code line.
    ///
    /// With `fill_zeros` the reference block is left-padded with '0' to 27
    /// characters.
    pub fn code_line(&self, fill_zeros: bool) -> String {
        let void = self.is_voided();
        let with_amount = self.slip.with_amount();

        let mut line = self.amount_part(void, with_amount);
        line.push('>');

        let reference = self.complete_reference_number(false, fill_zeros);
        if fill_zeros {
            line.push_str(&pad_left(&reference, REFERENCE_BLOCK_LENGTH, '0'));
        } else {
            line.push_str(&reference);
        }

        line.push_str("+ ");
        line.push_str(&self.account_block());
        line.push('>');

        tracing::debug!(
            with_amount,
            voided = void,
            fill_zeros,
            length = line.len(),
            "code line assembled"
        );
        line
    }

    /// Code line with zero fill, see [`code_line`](Self::code_line)
    pub fn default_code_line(&self) -> String {
        self.code_line(true)
    }

    /// Prefix, amount block and amount check digit
    fn amount_part(&self, void: bool, with_amount: bool) -> String {
        let placeholder = PLACEHOLDER.to_string();
        if void {
            let mut part = placeholder.repeat(PREFIX_WITH_AMOUNT.len());
            if with_amount {
                part.push_str(&placeholder.repeat(AMOUNT_FRANCS_LENGTH + AMOUNT_CENTS_LENGTH));
            }
            part.push(PLACEHOLDER);
            return part;
        }

        if !with_amount {
            return format!("{}{}", PREFIX_WITHOUT_AMOUNT, CHECK_WITHOUT_AMOUNT);
        }

        let francs = pad_left(
            &self.slip.amount_francs().to_string(),
            AMOUNT_FRANCS_LENGTH,
            '0',
        );
        let cents = pad_right(&self.slip.amount_cents(), AMOUNT_CENTS_LENGTH, '0');
        let mut part = format!("{}{}{}", PREFIX_WITH_AMOUNT, francs, cents);
        let check = check_digit(&part);
        part.push(check);
        part
    }

    /// First two account digits, then the rest zero-padded to seven
    fn account_block(&self) -> String {
        let digits = self.slip.account_digits();
        let split = digits
            .char_indices()
            .nth(ACCOUNT_PREFIX_LENGTH)
            .map_or(digits.len(), |(idx, _)| idx);
        let (prefix, body) = digits.split_at(split);
        format!("{}{}", prefix, pad_left(body, ACCOUNT_BODY_LENGTH, '0'))
    }
}

//! Reference encoder state
//!
//! Holds the reference number and banking customer ID of a slip. Both fields
//! are optional by variant: a disabled field is `None` and cannot be read or
//! written until it is enabled again.

use rust_decimal::Decimal;
use crate::error::{SlipError, Result};
use crate::slip::SlipData;
use crate::{BANKING_CUSTOMER_ID_LENGTH, PLACEHOLDER, REFERENCE_NUMBER_LENGTH};

/// Field name reported when the reference number is disabled
pub const REFERENCE_NUMBER_FIELD: &str = "reference number";

/// Field name reported when the banking customer ID is disabled
pub const BANKING_CUSTOMER_ID_FIELD: &str = "banking customer ID";

/// Lifecycle of the reference data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceState {
    /// Fields hold caller data
    Active,
    /// Fields were overwritten with placeholders; never reverts
    Voided,
}

/// Reference number and code line encoder for one payment slip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEncoder {
    /// Account and amount data
    pub(crate) slip: SlipData,
    /// Raw reference number without prefix and check digit
    pub(crate) reference_number: Option<String>,
    /// Six digit prefix assigned by the bank
    pub(crate) banking_customer_id: Option<String>,
    pub(crate) state: ReferenceState,
}

impl ReferenceEncoder {
    /// Create an encoder with reference number and banking customer ID enabled
    /// and empty.
    ///
    /// Slip data already marked as not for payment is voided right away.
    pub fn new(slip: SlipData) -> Self {
        let mut encoder = Self {
            slip,
            reference_number: Some(String::new()),
            banking_customer_id: Some(String::new()),
            state: ReferenceState::Active,
        };
        if encoder.slip.not_for_payment() {
            encoder.void();
        }
        encoder
    }

    /// Account and amount data
    pub fn slip(&self) -> &SlipData {
        &self.slip
    }

    /// Replace the account number, see [`SlipData::set_account_number`]
    pub fn set_account_number(&mut self, account_number: &str) {
        self.slip.set_account_number(account_number);
    }

    /// Set the amount, see [`SlipData::set_amount`]
    pub fn set_amount(&mut self, amount: Decimal) -> Result<()> {
        self.slip.set_amount(amount)
    }

    /// Remove the amount, see [`SlipData::clear_amount`]
    pub fn clear_amount(&mut self) {
        self.slip.clear_amount();
    }

    /// Current lifecycle state of the reference data
    pub fn state(&self) -> ReferenceState {
        self.state
    }

    /// Whether the slip was voided; output stays placeholders from then on
    pub fn is_voided(&self) -> bool {
        self.state == ReferenceState::Voided
    }

    /// Enable or disable the reference number. Disabling discards the value.
    pub fn set_with_reference_number(&mut self, enabled: bool) {
        set_enabled(&mut self.reference_number, enabled);
    }

    /// Whether the slip carries a reference number
    pub fn with_reference_number(&self) -> bool {
        self.reference_number.is_some()
    }

    /// Enable or disable the banking customer ID. Disabling discards the value.
    pub fn set_with_banking_customer_id(&mut self, enabled: bool) {
        set_enabled(&mut self.banking_customer_id, enabled);
    }

    /// Whether the reference number is prefixed with a banking customer ID
    pub fn with_banking_customer_id(&self) -> bool {
        self.banking_customer_id.is_some()
    }

    /// Set the raw reference number (digits, at most 20).
    ///
    /// Fails with [`SlipError::DisabledField`] while the reference number is
    /// disabled. Length and digit checks are left to the caller.
    pub fn set_reference_number(&mut self, reference_number: &str) -> Result<()> {
        write_field(&mut self.reference_number, REFERENCE_NUMBER_FIELD, reference_number)
    }

    /// Raw reference number, fails while disabled
    pub fn reference_number(&self) -> Result<&str> {
        self.reference_number
            .as_deref()
            .ok_or(SlipError::DisabledField(REFERENCE_NUMBER_FIELD))
    }

    /// Set the banking customer ID (6 digits).
    ///
    /// Fails with [`SlipError::DisabledField`] while the customer ID is
    /// disabled.
    pub fn set_banking_customer_id(&mut self, banking_customer_id: &str) -> Result<()> {
        write_field(&mut self.banking_customer_id, BANKING_CUSTOMER_ID_FIELD, banking_customer_id)
    }

    /// Banking customer ID, fails while disabled
    pub fn banking_customer_id(&self) -> Result<&str> {
        self.banking_customer_id
            .as_deref()
            .ok_or(SlipError::DisabledField(BANKING_CUSTOMER_ID_FIELD))
    }

    /// Mark the slip as (not) for payment.
    ///
    /// `true` voids the slip, see [`void`](Self::void). `false` only clears
    /// the flag: the slip stays voided and keeps printing placeholders.
    pub fn set_not_for_payment(&mut self, not_for_payment: bool) {
        if not_for_payment {
            self.void();
        } else {
            self.slip.set_not_for_payment(false);
        }
    }

    /// Not-for-payment flag of the slip data
    pub fn not_for_payment(&self) -> bool {
        self.slip.not_for_payment()
    }

    /// Overwrite enabled reference fields with 'X' placeholders, raise the
    /// not-for-payment flag and enter [`ReferenceState::Voided`].
    pub fn void(&mut self) {
        self.slip.set_not_for_payment(true);
        if let Some(reference_number) = self.reference_number.as_mut() {
            *reference_number = PLACEHOLDER.to_string().repeat(REFERENCE_NUMBER_LENGTH);
        }
        if let Some(customer_id) = self.banking_customer_id.as_mut() {
            *customer_id = PLACEHOLDER.to_string().repeat(BANKING_CUSTOMER_ID_LENGTH);
        }
        if self.state != ReferenceState::Voided {
            tracing::debug!(
                with_reference_number = self.with_reference_number(),
                with_banking_customer_id = self.with_banking_customer_id(),
                "slip voided"
            );
        }
        self.state = ReferenceState::Voided;
    }
}

impl Default for ReferenceEncoder {
    fn default() -> Self {
        Self::new(SlipData::default())
    }
}

fn set_enabled(field: &mut Option<String>, enabled: bool) {
    match (enabled, field.is_some()) {
        (true, false) => *field = Some(String::new()),
        (false, _) => *field = None,
        (true, true) => {}
    }
}

fn write_field(field: &mut Option<String>, name: &'static str, value: &str) -> Result<()> {
    match field.as_mut() {
        Some(current) => {
            *current = value.to_string();
            Ok(())
        }
        None => {
            tracing::warn!(field = name, "write to disabled field rejected");
            Err(SlipError::DisabledField(name))
        }
    }
}

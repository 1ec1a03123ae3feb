//! Slip configuration
//!
//! A serializable description of one payment slip, so callers can keep slip
//! settings in JSON and build an encoder from them.

use std::path::Path;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::reference::ReferenceEncoder;
use crate::slip::SlipData;

/// Settings for one payment slip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlipConfig {
    /// Account number as printed, e.g. "01-162-8"
    pub account_number: String,
    /// Amount in CHF as a decimal string, absent for slips without amount
    pub amount: Option<Decimal>,
    pub with_reference_number: bool,
    pub with_banking_customer_id: bool,
    /// Raw reference number (digits, at most 20)
    pub reference_number: String,
    /// Banking customer ID (6 digits)
    pub banking_customer_id: String,
    /// Specimen slip
    pub not_for_payment: bool,
}

impl Default for SlipConfig {
    fn default() -> Self {
        Self {
            account_number: String::new(),
            amount: None,
            with_reference_number: true,
            with_banking_customer_id: true,
            reference_number: String::new(),
            banking_customer_id: String::new(),
            not_for_payment: false,
        }
    }
}

impl SlipConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        // Strip UTF-8 BOM if present
        let json = json.strip_prefix('\u{feff}').unwrap_or(json);
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), "slip configuration loaded");
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build an encoder from these settings.
    ///
    /// Values of disabled fields are ignored. Fails with
    /// `SlipError::InvalidAmount` if the amount cannot be printed.
    pub fn build(&self) -> Result<ReferenceEncoder> {
        let mut data = SlipData::new(&self.account_number);
        if let Some(amount) = self.amount {
            data.set_amount(amount)?;
        }

        let mut encoder = ReferenceEncoder::new(data);
        encoder.set_with_reference_number(self.with_reference_number);
        encoder.set_with_banking_customer_id(self.with_banking_customer_id);
        if self.with_reference_number {
            encoder.set_reference_number(&self.reference_number)?;
        }
        if self.with_banking_customer_id {
            encoder.set_banking_customer_id(&self.banking_customer_id)?;
        }
        encoder.set_not_for_payment(self.not_for_payment);
        Ok(encoder)
    }

    /// Capture the current state of an encoder
    pub fn from_encoder(encoder: &ReferenceEncoder) -> Self {
        let slip = encoder.slip();
        Self {
            account_number: slip.account_number().to_string(),
            amount: slip.amount(),
            with_reference_number: encoder.with_reference_number(),
            with_banking_customer_id: encoder.with_banking_customer_id(),
            reference_number: encoder.reference_number().unwrap_or_default().to_string(),
            banking_customer_id: encoder.banking_customer_id().unwrap_or_default().to_string(),
            not_for_payment: slip.not_for_payment(),
        }
    }
}

//! Slip data: account, amount and the not-for-payment flag

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use crate::error::{SlipError, Result};
use crate::utils::digits_only;

/// Largest amount that fits the 8-digit francs field
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

/// Account and amount data printed on a payment slip
///
/// The amount is kept in rappen and always passes [`SlipData::set_amount`],
/// also when deserialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SlipDataRecord", into = "SlipDataRecord")]
pub struct SlipData {
    /// Account number as printed, e.g. "01-162-8"
    account_number: String,
    /// Amount in rappen, `None` for slips without a preprinted amount
    amount_rappen: Option<u64>,
    /// Specimen slip that must not be paid
    not_for_payment: bool,
}

/// Serialized form of [`SlipData`], amount as a decimal string
#[derive(Serialize, Deserialize)]
struct SlipDataRecord {
    account_number: String,
    amount: Option<Decimal>,
    #[serde(default)]
    not_for_payment: bool,
}

impl TryFrom<SlipDataRecord> for SlipData {
    type Error = SlipError;

    fn try_from(record: SlipDataRecord) -> Result<Self> {
        let mut data = SlipData::new(&record.account_number);
        if let Some(amount) = record.amount {
            data.set_amount(amount)?;
        }
        data.not_for_payment = record.not_for_payment;
        Ok(data)
    }
}

impl From<SlipData> for SlipDataRecord {
    fn from(data: SlipData) -> Self {
        Self {
            amount: data.amount(),
            account_number: data.account_number,
            not_for_payment: data.not_for_payment,
        }
    }
}

impl SlipData {
    /// Create slip data for an account, without amount
    pub fn new(account_number: &str) -> Self {
        Self {
            account_number: account_number.to_string(),
            amount_rappen: None,
            not_for_payment: false,
        }
    }

    /// Account number as it was set
    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    /// Replace the account number, separators are allowed
    pub fn set_account_number(&mut self, account_number: &str) {
        self.account_number = account_number.to_string();
    }

    /// Account number without separators
    pub fn account_digits(&self) -> String {
        digits_only(&self.account_number)
    }

    /// Set the amount, rounded to two decimal places.
    ///
    /// Negative amounts and amounts whose francs do not fit into eight digits
    /// are rejected and leave the previous amount in place.
    pub fn set_amount(&mut self, amount: Decimal) -> Result<()> {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            return Err(SlipError::InvalidAmount(format!("{} is negative", amount)));
        }
        if rounded > MAX_AMOUNT {
            return Err(SlipError::InvalidAmount(format!(
                "{} exceeds {}",
                amount, MAX_AMOUNT
            )));
        }
        let rappen = (rounded.abs() * Decimal::ONE_HUNDRED)
            .trunc()
            .to_u64()
            .ok_or_else(|| SlipError::InvalidAmount(amount.to_string()))?;
        self.amount_rappen = Some(rappen);
        Ok(())
    }

    /// Remove the amount (slip where the payer fills in the amount)
    pub fn clear_amount(&mut self) {
        self.amount_rappen = None;
    }

    /// Amount in CHF with two decimal places
    pub fn amount(&self) -> Option<Decimal> {
        self.amount_rappen
            .map(|rappen| Decimal::new(rappen as i64, 2))
    }

    /// Whether the slip carries a preprinted amount
    pub fn with_amount(&self) -> bool {
        self.amount_rappen.is_some()
    }

    /// Whole francs of the amount, 0 when there is no amount
    pub fn amount_francs(&self) -> u64 {
        self.amount_rappen.map_or(0, |rappen| rappen / 100)
    }

    /// Cents of the amount as the two printed digits, e.g. "05"
    pub fn amount_cents(&self) -> String {
        format!("{:02}", self.amount_rappen.map_or(0, |rappen| rappen % 100))
    }

    /// Whether this is a specimen slip
    pub fn not_for_payment(&self) -> bool {
        self.not_for_payment
    }

    /// Set through `ReferenceEncoder::set_not_for_payment`, which also voids
    /// the reference data.
    pub(crate) fn set_not_for_payment(&mut self, not_for_payment: bool) {
        self.not_for_payment = not_for_payment;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_has_no_amount() {
        let data = SlipData::new("01-162-8");
        assert!(!data.with_amount());
        assert_eq!(data.amount(), None);
        assert_eq!(data.amount_francs(), 0);
        assert_eq!(data.amount_cents(), "00");
        assert!(!data.not_for_payment());
    }

    #[test]
    fn test_account_digits() {
        let mut data = SlipData::new("01-162-8");
        assert_eq!(data.account_digits(), "011628");
        assert_eq!(data.account_number(), "01-162-8");

        data.set_account_number("010001234");
        assert_eq!(data.account_digits(), "010001234");
    }

    #[test]
    fn test_amount_split() {
        let mut data = SlipData::new("01-162-8");
        data.set_amount(dec!(3949.75)).unwrap();
        assert!(data.with_amount());
        assert_eq!(data.amount_francs(), 3949);
        assert_eq!(data.amount_cents(), "75");

        data.set_amount(dec!(100.05)).unwrap();
        assert_eq!(data.amount_francs(), 100);
        assert_eq!(data.amount_cents(), "05");

        data.set_amount(dec!(100.5)).unwrap();
        assert_eq!(data.amount_cents(), "50");

        data.set_amount(dec!(42)).unwrap();
        assert_eq!(data.amount_francs(), 42);
        assert_eq!(data.amount_cents(), "00");
    }

    #[test]
    fn test_amount_rounding() {
        let mut data = SlipData::new("01-162-8");
        data.set_amount(dec!(1.005)).unwrap();
        assert_eq!(data.amount(), Some(dec!(1.01)));

        data.set_amount(dec!(1.004)).unwrap();
        assert_eq!(data.amount(), Some(dec!(1.00)));
    }

    #[test]
    fn test_amount_zero_allowed() {
        let mut data = SlipData::new("01-162-8");
        data.set_amount(dec!(0)).unwrap();
        assert!(data.with_amount());
        assert_eq!(data.amount_francs(), 0);
    }

    #[test]
    fn test_amount_negative_rejected() {
        let mut data = SlipData::new("01-162-8");
        let err = data.set_amount(dec!(-0.50)).unwrap_err();
        assert!(matches!(err, SlipError::InvalidAmount(_)));
        assert!(!data.with_amount());
    }

    #[test]
    fn test_amount_limit() {
        let mut data = SlipData::new("01-162-8");
        assert_eq!(MAX_AMOUNT, dec!(99999999.99));
        data.set_amount(dec!(99999999.99)).unwrap();
        assert_eq!(data.amount_francs(), 99_999_999);

        let err = data.set_amount(dec!(100000000.00)).unwrap_err();
        assert!(matches!(err, SlipError::InvalidAmount(_)));
        // previous amount is kept
        assert_eq!(data.amount(), Some(dec!(99999999.99)));
    }

    #[test]
    fn test_clear_amount() {
        let mut data = SlipData::new("01-162-8");
        data.set_amount(dec!(10)).unwrap();
        data.clear_amount();
        assert!(!data.with_amount());
    }

    #[test]
    fn test_serialization() {
        let mut data = SlipData::new("01-162-8");
        data.set_amount(dec!(12.30)).unwrap();
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"account_number\":\"01-162-8\""));
        assert!(json.contains("\"amount\":\"12.30\""));

        let back: SlipData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_deserialize_validates_amount() {
        let json = r#"{"account_number":"01-162-8","amount":"-5.50"}"#;
        assert!(serde_json::from_str::<SlipData>(json).is_err());

        let json = r#"{"account_number":"01-162-8","amount":"123456789.123"}"#;
        assert!(serde_json::from_str::<SlipData>(json).is_err());
    }

    #[test]
    fn test_deserialize_rounds_amount() {
        let json = r#"{"account_number":"01-162-8","amount":"1.005"}"#;
        let data: SlipData = serde_json::from_str(json).unwrap();
        assert_eq!(data.amount(), Some(dec!(1.01)));
        assert_eq!(data.amount_francs(), 1);
        assert_eq!(data.amount_cents(), "01");
        assert!(!data.not_for_payment());
    }

    #[test]
    fn test_deserialize_without_amount() {
        let json = r#"{"account_number":"01-162-8","amount":null,"not_for_payment":true}"#;
        let data: SlipData = serde_json::from_str(json).unwrap();
        assert!(!data.with_amount());
        assert!(data.not_for_payment());
    }
}

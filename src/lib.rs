//! # ESR Core
//!
//! Reference number and code line encoding for Swiss orange payment slips
//! (ESR / BESR / VESR).
//!
//! ## Features
//!
//! - Mod 10 recursive check digits
//! - Reference numbers with optional banking customer ID prefix
//! - Fixed-format code line for slip scanners
//! - Not-for-payment (specimen) slips
//! - JSON slip configuration
//!
//! ## Example
//!
//! ```
//! use esrcore::{ReferenceEncoder, SlipData};
//!
//! let mut encoder = ReferenceEncoder::new(SlipData::new("01-162-8"));
//! encoder.set_with_banking_customer_id(false);
//! encoder.set_reference_number("12345").unwrap();
//!
//! assert_eq!(encoder.complete_reference_number(false, false), "123457");
//! assert_eq!(encoder.code_line(false), "042>123457+ 010001628>");
//! ```

pub mod checksum;
pub mod slip;
pub mod reference;
pub mod config;
pub mod utils;
pub mod error;

// Re-export main types
pub use error::{SlipError, Result};
pub use slip::SlipData;
pub use reference::{ReferenceEncoder, ReferenceState};
pub use config::SlipConfig;

/// Maximum length of the raw reference number
pub const REFERENCE_NUMBER_LENGTH: usize = 20;

/// Banking customer ID length
pub const BANKING_CUSTOMER_ID_LENGTH: usize = 6;

/// Reference number length before the check digit
pub const FULL_REFERENCE_LENGTH: usize = 26;

/// Reference block length in the code line
pub const REFERENCE_BLOCK_LENGTH: usize = 27;

/// Characters per group in the display form of a reference number
pub const REFERENCE_GROUP_SIZE: usize = 5;

/// Francs digits in the code line
pub const AMOUNT_FRANCS_LENGTH: usize = 8;

/// Cents digits in the code line
pub const AMOUNT_CENTS_LENGTH: usize = 2;

/// Account digits kept as is at the start of the account block
pub const ACCOUNT_PREFIX_LENGTH: usize = 2;

/// Zero-padded account digits after the prefix
pub const ACCOUNT_BODY_LENGTH: usize = 7;

/// Fill character for not-for-payment slips
pub const PLACEHOLDER: char = 'X';

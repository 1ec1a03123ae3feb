//! Check digit computation for payment slips
//!
//! This module implements the "Mod 10, recursive" algorithm used by Swiss
//! orange payment slips for both the reference number and the amount block.

mod mod10;

pub use mod10::{check_digit, is_valid, mod10, MOD10_TABLE};

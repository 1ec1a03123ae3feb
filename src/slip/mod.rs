//! Base slip data
//!
//! Account, amount and payment flags shared by every slip variant.

pub mod data;

pub use data::SlipData;

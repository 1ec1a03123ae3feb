//! Reference number and code line encoding
//!
//! [`ReferenceEncoder`] owns the reference fields of a slip together with its
//! [`SlipData`](crate::slip::SlipData) and derives the two printed strings:
//! the complete reference number and the machine-readable code line.

pub mod encoder;
pub mod number;
pub mod codeline;

pub use encoder::{ReferenceEncoder, ReferenceState};

//! Utility functions

pub mod common;

pub use common::{break_into_blocks, digits_only, pad_left, pad_right, strip_spaces};

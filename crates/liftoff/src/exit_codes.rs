//! Exit codes for the CLI

/// Success, including runs that had nothing to announce
pub const SUCCESS: u8 = 0;

/// Any failure
pub const ERROR: u8 = 1;

//! Process exit codes

/// Successful termination
pub const OK: i32 = 0;

/// Any failure: API error, missing token, aborted confirmation
pub const FAILURE: i32 = 1;

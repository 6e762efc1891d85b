//! Exit code constants for the trellis CLI.
//!
//! - 0: Success
//! - 1: User error (existing destination, wrong project context, bad params)
//! - 2: Internal error (broken installation, unexpected I/O failure)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: existing destination, wrong project context, unknown component
/// type, or invalid generation parameters.
pub const USER_ERROR: i32 = 1;

/// Internal error: missing template tree or unexpected I/O failure. These
/// indicate a broken installation rather than a recoverable user mistake.
pub const INTERNAL_ERROR: i32 = 2;

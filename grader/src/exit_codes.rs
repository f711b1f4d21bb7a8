//! Stable exit codes for grader CLI commands.

/// Command succeeded; for `grader run`, every case passed.
pub const OK: i32 = 0;
/// Invalid arguments, config, or suite file, or another error.
pub const INVALID: i32 = 1;
/// `grader run` completed but at least one case did not pass.
pub const MISMATCH: i32 = 2;
